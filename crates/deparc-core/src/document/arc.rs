//! Arcs and arc set validation.

use std::ops::Range;

use crate::document::{DocumentError, TokenSequence};

/// A labeled directed relation from an earlier token to a later token.
///
/// Endpoints are token positions. The source always comes strictly before
/// the target; [`Arc::new`] refuses anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arc {
    source: usize,
    target: usize,
    label: String,
}

impl Arc {
    /// Creates an arc between two token positions.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::InvalidArcOrder`] unless `source < target`.
    ///
    /// ```
    /// # use deparc_core::document::{Arc, DocumentError};
    /// assert!(Arc::new(0, 2, "obj").is_ok());
    /// assert!(matches!(
    ///     Arc::new(2, 2, "self"),
    ///     Err(DocumentError::InvalidArcOrder { .. })
    /// ));
    /// ```
    pub fn new(
        source: usize,
        target: usize,
        label: impl Into<String>,
    ) -> Result<Self, DocumentError> {
        let label = label.into();
        if source >= target {
            return Err(DocumentError::InvalidArcOrder {
                label,
                source_position: source,
                target_position: target,
            });
        }
        Ok(Self {
            source,
            target,
            label,
        })
    }

    pub fn source(&self) -> usize {
        self.source
    }

    pub fn target(&self) -> usize {
        self.target
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Number of adjacent-token gaps the arc spans.
    pub fn span_len(&self) -> usize {
        self.target - self.source
    }

    /// Indices of the adjacent-token gaps the arc spans.
    ///
    /// Gap `i` lies between token `i` and token `i + 1`.
    pub fn gaps(&self) -> Range<usize> {
        self.source..self.target
    }
}

/// The validated, non-empty arcs of a document.
#[derive(Debug, Clone)]
pub struct ArcSet {
    arcs: Vec<Arc>,
}

impl ArcSet {
    /// Validates `arcs` against a token sequence.
    ///
    /// # Errors
    ///
    /// - [`DocumentError::EmptyArcSet`] if `arcs` is empty.
    /// - [`DocumentError::UnresolvedTokenReference`] if an arc targets a
    ///   position outside `tokens`.
    pub fn new(tokens: &TokenSequence, arcs: Vec<Arc>) -> Result<Self, DocumentError> {
        if arcs.is_empty() {
            return Err(DocumentError::EmptyArcSet);
        }

        if let Some(arc) = arcs.iter().find(|arc| arc.target >= tokens.len()) {
            return Err(DocumentError::UnresolvedTokenReference {
                reference: format!("#{}", arc.target),
                candidates: 0,
            });
        }

        Ok(Self { arcs })
    }

    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    /// Always `false` for a constructed set; provided for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Arc> {
        self.arcs.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc> {
        self.arcs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arc_span_and_gaps() {
        let arc = Arc::new(1, 4, "obj").unwrap();
        assert_eq!(arc.span_len(), 3);
        assert_eq!(arc.gaps(), 1..4);
        assert_eq!(arc.label(), "obj");
    }

    #[test]
    fn test_arc_rejects_reverse_order() {
        let err = Arc::new(3, 1, "nsubj").unwrap_err();
        assert_eq!(
            err,
            DocumentError::InvalidArcOrder {
                label: "nsubj".to_string(),
                source_position: 3,
                target_position: 1,
            }
        );
    }

    #[test]
    fn test_arc_rejects_self_loop() {
        assert!(Arc::new(0, 0, "x").is_err());
    }

    #[test]
    fn test_arc_set_rejects_empty() {
        let tokens = TokenSequence::from_words(["A", "B"]);
        let err = ArcSet::new(&tokens, Vec::new()).unwrap_err();
        assert_eq!(err, DocumentError::EmptyArcSet);
    }

    #[test]
    fn test_arc_set_rejects_out_of_range_target() {
        let tokens = TokenSequence::from_words(["A", "B"]);
        let arcs = vec![Arc::new(0, 5, "x").unwrap()];
        let err = ArcSet::new(&tokens, arcs).unwrap_err();
        assert!(matches!(
            err,
            DocumentError::UnresolvedTokenReference { candidates: 0, .. }
        ));
    }

    #[test]
    fn test_arc_set_keeps_input_order() {
        let tokens = TokenSequence::from_words(["A", "B", "C"]);
        let arcs = vec![
            Arc::new(0, 2, "b").unwrap(),
            Arc::new(0, 1, "c").unwrap(),
        ];
        let set = ArcSet::new(&tokens, arcs).unwrap();
        let labels: Vec<_> = set.iter().map(Arc::label).collect();
        assert_eq!(labels, vec!["b", "c"]);
        assert_eq!(set.len(), 2);
        assert!(!set.is_empty());
    }
}
