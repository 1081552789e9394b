//! Horizontal token placement.
//!
//! Tokens are first packed left to right with a fixed gap between their
//! edges. Then, one level at a time from the bottom up, every arc whose
//! label does not fit between its endpoints pushes its target token and
//! everything after it to the right. Later arcs see the widened gaps, so a
//! single pass per level is enough.
//!
//! Centers are kept on a grid of 1/256 unit. Below 65536 units every grid
//! value is an exact `f32`, so differences and shifts of centers are exact:
//! once an arc's gap reaches its required width, later shifts cannot round
//! it back below.

use log::{debug, trace};

use deparc_core::{
    document::Document,
    geometry::{Point, Size},
    measure::TextMeasure,
};

use crate::layout::Levels;

/// Space left between the top of the highest label and the drawing edge.
const BASELINE_MARGIN: f32 = 5.0;

/// Grid steps per drawing unit for token centers.
const GRID: f32 = 256.0;

/// Smallest grid value not below `value`.
fn snap_up(value: f32) -> f32 {
    (value * GRID).ceil() / GRID
}

/// Final horizontal placement of every token, indexed by token position.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenLayout {
    centers: Vec<f32>,
    widths: Vec<f32>,
    baseline: f32,
}

impl TokenLayout {
    pub fn len(&self) -> usize {
        self.centers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }

    /// Horizontal center of the token at `position`.
    pub fn center(&self, position: usize) -> f32 {
        self.centers[position]
    }

    /// Measured width of the token at `position`.
    pub fn width(&self, position: usize) -> f32 {
        self.widths[position]
    }

    /// The y coordinate every token's text sits on.
    pub fn baseline(&self) -> f32 {
        self.baseline
    }

    /// Anchor point of the token text at `position`.
    pub fn anchor(&self, position: usize) -> Point {
        Point::new(self.centers[position], self.baseline)
    }

    /// Left and right edge of the token at `position`.
    pub fn extent(&self, position: usize) -> (f32, f32) {
        let half = self.widths[position] / 2.0;
        (self.centers[position] - half, self.centers[position] + half)
    }

    /// Size of the area covered by the tokens and everything above them.
    ///
    /// `descent` is the room kept below the baseline.
    pub fn drawing_size(&self, descent: f32) -> Size {
        let width = (0..self.len())
            .map(|position| self.extent(position).1)
            .fold(0.0_f32, f32::max);
        Size::new(width, self.baseline + descent)
    }

    /// Moves the token at `position` and every later token right by `delta`.
    fn shift_from(&mut self, position: usize, delta: f32) {
        for center in &mut self.centers[position..] {
            *center += delta;
        }
    }
}

/// Computes token x coordinates and the shared baseline.
///
/// # Examples
///
/// ```
/// # use deparc::layout::{HorizontalLayoutEngine, LevelAssigner};
/// # use deparc_core::measure::{CharWidthEstimate, TextMeasure};
/// let document = deparc_parser::parse("A B\nA label B\n").unwrap();
/// let levels = LevelAssigner::new().assign(document.arcs());
///
/// let measure = CharWidthEstimate::default();
/// let layout = HorizontalLayoutEngine::new(&measure)
///     .with_min_label_padding(10.0)
///     .layout(&document, &levels);
///
/// assert!(layout.center(1) - layout.center(0) >= measure.text_width("label", 20.0) + 20.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct HorizontalLayoutEngine<'m> {
    measure: &'m dyn TextMeasure,
    font_size: f32,
    label_font_size: f32,
    token_spacing: f32,
    level_height: f32,
    min_label_padding: f32,
}

impl<'m> HorizontalLayoutEngine<'m> {
    /// Creates an engine with the default font sizes and spacing.
    pub fn new(measure: &'m dyn TextMeasure) -> Self {
        Self {
            measure,
            font_size: 24.0,
            label_font_size: 20.0,
            token_spacing: 10.0,
            level_height: 20.0,
            min_label_padding: 10.0,
        }
    }

    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_label_font_size(mut self, label_font_size: f32) -> Self {
        self.label_font_size = label_font_size;
        self
    }

    /// Set the gap between the edges of adjacent tokens before nudging.
    pub fn with_token_spacing(mut self, token_spacing: f32) -> Self {
        self.token_spacing = token_spacing;
        self
    }

    pub fn with_level_height(mut self, level_height: f32) -> Self {
        self.level_height = level_height;
        self
    }

    /// Set the minimum room kept on each side of an arc label.
    pub fn with_min_label_padding(mut self, min_label_padding: f32) -> Self {
        self.min_label_padding = min_label_padding;
        self
    }

    /// Places every token of `document`.
    ///
    /// `levels` must come from the same document's arcs.
    pub fn layout(&self, document: &Document, levels: &Levels) -> TokenLayout {
        let mut layout = self.initial_layout(document, levels.max_level());
        let arcs = document.arcs();

        for level in 1..=levels.max_level() {
            let mut group: Vec<_> = levels
                .group(level)
                .into_iter()
                .filter_map(|index| arcs.get(index))
                .collect();
            group.sort_by_key(|arc| arc.source());

            for arc in group {
                let required = self.measure.text_width(arc.label(), self.label_font_size)
                    + 2.0 * self.min_label_padding;
                let current = layout.center(arc.target()) - layout.center(arc.source());
                if current < required {
                    let mut deficit = snap_up(required - current);
                    while current + deficit < required {
                        deficit += 1.0 / GRID;
                    }
                    trace!(label = arc.label(), level, deficit; "Widening arc");
                    layout.shift_from(arc.target(), deficit);
                }
            }
        }

        debug!(
            tokens = layout.len(),
            width = layout.drawing_size(0.0).width();
            "Tokens placed"
        );
        layout
    }

    /// Packs tokens left to right without regard to labels.
    fn initial_layout(&self, document: &Document, max_level: u32) -> TokenLayout {
        let widths: Vec<f32> = document
            .tokens()
            .iter()
            .map(|token| token.width(self.measure, self.font_size))
            .collect();

        let mut centers = Vec::with_capacity(widths.len());
        let mut previous: Option<(f32, f32)> = None;
        for &width in &widths {
            let center = snap_up(match previous {
                None => width / 2.0,
                Some((center, prev_width)) => {
                    center + prev_width / 2.0 + self.token_spacing + width / 2.0
                }
            });
            centers.push(center);
            previous = Some((center, width));
        }

        let baseline = self.font_size
            + max_level as f32 * self.level_height
            + self.label_font_size / 2.0
            + BASELINE_MARGIN;

        TokenLayout {
            centers,
            widths,
            baseline,
        }
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use proptest::prelude::*;

    use deparc_core::measure::CharWidthEstimate;

    use super::*;
    use crate::layout::LevelAssigner;

    fn lay_out(source: &str) -> (Document, Levels, TokenLayout) {
        let document = deparc_parser::parse(source).unwrap();
        let levels = LevelAssigner::new().assign(document.arcs());
        let measure = CharWidthEstimate::default();
        let layout = HorizontalLayoutEngine::new(&measure).layout(&document, &levels);
        (document, levels, layout)
    }

    #[test]
    fn test_initial_packing_without_nudge() {
        // Labels of one character fit easily: no token moves.
        let (_, _, layout) = lay_out("AAAAAAAAAA BBBBBBBBBB\nAAAAAAAAAA x BBBBBBBBBB\n");
        let width = 10.0 * 24.0 * 0.65;
        assert_approx_eq!(f32, layout.width(0), width);
        assert_approx_eq!(f32, layout.center(0), width / 2.0, epsilon = 0.01);
        assert_approx_eq!(
            f32,
            layout.center(1),
            width + 10.0 + width / 2.0,
            epsilon = 0.01
        );
    }

    #[test]
    fn test_baseline_depends_on_max_level() {
        let (_, levels, layout) = lay_out("A B C\nA c B\nB d C\nA b C\n");
        assert_eq!(levels.max_level(), 2);
        assert_approx_eq!(f32, layout.baseline(), 24.0 + 2.0 * 20.0 + 10.0 + 5.0);
        assert_approx_eq!(f32, layout.anchor(2).y(), layout.baseline());
    }

    #[test]
    fn test_nudge_shifts_target_and_followers() {
        let (_, _, layout) = lay_out("A B C\nA longlabel B\n");
        let required = 9.0 * 20.0 * 0.65 + 20.0;
        assert_approx_eq!(f32, layout.center(1) - layout.center(0), required, epsilon = 0.01);

        // C keeps its original distance to B.
        let token_width = 24.0 * 0.65;
        assert_approx_eq!(
            f32,
            layout.center(2) - layout.center(1),
            token_width + 10.0,
            epsilon = 0.01
        );
    }

    #[test]
    fn test_centers_stay_on_grid() {
        let (_, _, layout) =
            lay_out("ccc_0 bb_1 a_2 hhhhhhhhhhh_3
a_2 det hhhhhhhhhhh_3
ccc_0 nsubj a_2
");
        for position in 0..layout.len() {
            let scaled = layout.center(position) * GRID;
            assert_eq!(scaled, scaled.trunc(), "center {position} is off the grid");
        }
    }

    #[test]
    fn test_label_fit_is_exact_after_nudge() {
        // Widths whose f32 deficit rounds short of the required gap.
        let (document, _, layout) = lay_out(
            "ccc_0 bb_1 a_2 hhhhhhhhhhh_3
a_2 det hhhhhhhhhhh_3
bb_1 nmod hhhhhhhhhhh_3
",
        );
        let measure = CharWidthEstimate::default();
        for arc in document.arcs().iter() {
            let gap = layout.center(arc.target()) - layout.center(arc.source());
            let required = measure.text_width(arc.label(), 20.0) + 20.0;
            assert!(gap >= required, "{}: {gap} < {required}", arc.label());
        }
    }

    #[test]
    fn test_label_fit_example() {
        let (document, _, layout) = lay_out("The cat_1 sat_2\nThe det cat_1\ncat_1 nsubj sat_2\n");
        let measure = CharWidthEstimate::default();
        for arc in document.arcs().iter() {
            let gap = layout.center(arc.target()) - layout.center(arc.source());
            let required = measure.text_width(arc.label(), 20.0) + 20.0;
            assert!(gap >= required, "{} does not fit", arc.label());
        }
    }

    #[test]
    fn test_drawing_size_covers_last_token() {
        let (_, _, layout) = lay_out("A B\nA x B\n");
        let size = layout.drawing_size(6.0);
        assert_approx_eq!(f32, size.width(), layout.extent(1).1);
        assert_approx_eq!(f32, size.height(), layout.baseline() + 6.0);
    }

    fn source_strategy() -> impl Strategy<Value = String> {
        (2usize..10).prop_flat_map(|count| {
            let pair =
                (0..count - 1).prop_flat_map(move |source| (Just(source), source + 1..count));
            let words = prop::collection::vec("[a-z]{1,8}", count);
            let arcs = prop::collection::vec((pair, "[a-z:]{1,12}"), 1..12);
            (words, arcs).prop_map(|(words, arcs)| {
                let refs: Vec<String> = words
                    .iter()
                    .enumerate()
                    .map(|(i, w)| format!("{w}_{i}"))
                    .collect();
                let mut source = refs.join(" ");
                source.push('\n');
                for ((s, t), label) in arcs {
                    source.push_str(&format!("{} {label} {}\n", refs[s], refs[t]));
                }
                source
            })
        })
    }

    proptest! {
        #[test]
        fn test_tokens_never_overlap(source in source_strategy()) {
            let (_, _, layout) = lay_out(&source);
            for position in 1..layout.len() {
                let (_, previous_right) = layout.extent(position - 1);
                let (left, _) = layout.extent(position);
                prop_assert!(left >= previous_right);
            }
        }

        #[test]
        fn test_every_label_fits(source in source_strategy()) {
            let (document, _, layout) = lay_out(&source);
            let measure = CharWidthEstimate::default();
            for arc in document.arcs().iter() {
                let gap = layout.center(arc.target()) - layout.center(arc.source());
                let required = measure.text_width(arc.label(), 20.0) + 20.0;
                prop_assert!(
                    gap >= required,
                    "label `{}` does not fit: {} < {}",
                    arc.label(),
                    gap,
                    required
                );
            }
        }

        #[test]
        fn test_layout_is_deterministic(source in source_strategy()) {
            let (_, _, first) = lay_out(&source);
            let (_, _, second) = lay_out(&source);
            prop_assert_eq!(first, second);
        }
    }
}
