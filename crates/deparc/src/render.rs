//! Turns a laid-out document into drawing primitives.
//!
//! Primitives are generated token texts first, then curve, background and
//! label for each arc in input order. The [`DrawOrderSequencer`] then
//! regroups them into curve, background and text layers, so a label is
//! never hidden behind another arc's curve.

mod arc;

pub use arc::{ArcGeometry, ArcGeometryBuilder};

use log::debug;

use deparc_core::{
    document::Document,
    draw::{DrawOrderSequencer, Primitive, TextDefinition, TextPrimitive},
};

use crate::layout::{Levels, TokenLayout};

/// Produces the ordered primitive list of a diagram.
#[derive(Debug, Clone)]
pub struct Renderer<'m> {
    geometry: ArcGeometryBuilder<'m>,
    token_text: TextDefinition,
}

impl<'m> Renderer<'m> {
    pub fn new(geometry: ArcGeometryBuilder<'m>, token_text: TextDefinition) -> Self {
        Self {
            geometry,
            token_text,
        }
    }

    /// Renders every token and arc of `document` in drawing order.
    ///
    /// `levels` must hold one level per arc of `document`.
    pub fn render(
        &self,
        document: &Document,
        levels: &Levels,
        layout: &TokenLayout,
    ) -> Vec<Primitive> {
        let mut tokens = DrawOrderSequencer::new();
        for token in document.tokens() {
            tokens.add(TextPrimitive::new(
                layout.anchor(token.position()),
                token.text(),
                self.token_text.clone(),
            ));
        }

        debug_assert_eq!(
            levels.len(),
            document.arcs().len(),
            "levels were assigned for a different arc set"
        );

        let mut arcs = DrawOrderSequencer::new();
        for (arc, level) in document.arcs().iter().zip(levels.iter()) {
            let (curve, background, label) = self.geometry.build(arc, level, layout).into_parts();
            arcs.add(curve);
            arcs.add(background);
            arcs.add(label);
        }

        tokens.merge(arcs);
        debug!(primitives = tokens.len(); "Primitives generated");
        tokens.sequence()
    }
}

#[cfg(test)]
mod tests {
    use deparc_core::{
        draw::{DrawLayer, Primitive},
        measure::CharWidthEstimate,
    };

    use super::*;
    use crate::layout::{HorizontalLayoutEngine, LevelAssigner};

    fn render(source: &str) -> Vec<Primitive> {
        let document = deparc_parser::parse(source).unwrap();
        let levels = LevelAssigner::new().assign(document.arcs());
        let measure = CharWidthEstimate::default();
        let layout = HorizontalLayoutEngine::new(&measure).layout(&document, &levels);
        Renderer::new(ArcGeometryBuilder::new(&measure), TextDefinition::default())
            .render(&document, &levels, &layout)
    }

    #[test]
    fn test_primitive_counts() {
        let primitives = render("A B C\nA c B\nB d C\nA b C\n");
        // Three tokens, three primitives per arc.
        assert_eq!(primitives.len(), 3 + 3 * 3);
    }

    #[test]
    fn test_layers_are_ordered() {
        let primitives = render("A B C\nA c B\nB d C\nA b C\n");
        let layers: Vec<_> = primitives.iter().map(Primitive::layer).collect();
        let mut sorted = layers.clone();
        sorted.sort();
        assert_eq!(layers, sorted);
        assert_eq!(layers[0], DrawLayer::Curve);
        assert_eq!(layers[layers.len() - 1], DrawLayer::Text);
    }

    #[test]
    fn test_token_texts_precede_labels() {
        let primitives = render("The cat_1 sat_2\nThe det cat_1\ncat_1 nsubj sat_2\n");
        let texts: Vec<_> = primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Text(text) => Some(text.content()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, vec!["The", "cat", "sat", "det", "nsubj"]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "different arc set")]
    fn test_levels_from_another_document() {
        let document = deparc_parser::parse("A B C
A c B
B d C
A b C
").unwrap();
        let other = deparc_parser::parse("A B
A x B
").unwrap();
        let levels = LevelAssigner::new().assign(other.arcs());
        let measure = CharWidthEstimate::default();
        let layout = HorizontalLayoutEngine::new(&measure).layout(&document, &levels);
        Renderer::new(ArcGeometryBuilder::new(&measure), TextDefinition::default())
            .render(&document, &levels, &layout);
    }
}
