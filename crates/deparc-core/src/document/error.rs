//! Errors raised while building a [`Document`](super::Document).

use thiserror::Error;

/// Construction errors for tokens and arcs.
///
/// All of them are fatal: a document is either fully valid or not built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// A dependency line does not split into exactly three fields.
    #[error("not a dependency line, expected 3 fields but found {fields}: `{line}`")]
    MalformedLine { line: String, fields: usize },

    /// Zero or more than one token matches a token reference.
    #[error("{candidates} candidates for token reference `{reference}`")]
    UnresolvedTokenReference { reference: String, candidates: usize },

    /// An arc's source does not come strictly before its target.
    #[error(
        "arc `{label}` must go from an earlier to a later token, found {source_position} -> {target_position}"
    )]
    InvalidArcOrder {
        label: String,
        source_position: usize,
        target_position: usize,
    },

    /// No arcs were given.
    #[error("zero dependencies read")]
    EmptyArcSet,
}
