//! Layout passes for dependency diagrams.
//!
//! Layout is split into two deterministic passes over an immutable
//! [`Document`](deparc_core::document::Document):
//!
//! ```text
//! Document
//!     ↓ LevelAssigner      arc index → level
//! Levels
//!     ↓ HorizontalLayoutEngine   token position → center x
//! TokenLayout
//! ```
//!
//! Neither pass mutates the document; each returns its own result value
//! indexed by arc index or token position.

mod horizontal;
mod levels;

pub use horizontal::{HorizontalLayoutEngine, TokenLayout};
pub use levels::{LevelAssigner, Levels};

/// Both layout results of one document.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramLayout {
    levels: Levels,
    tokens: TokenLayout,
}

impl DiagramLayout {
    pub fn new(levels: Levels, tokens: TokenLayout) -> Self {
        Self { levels, tokens }
    }

    /// Level of every arc, indexed by arc index.
    pub fn levels(&self) -> &Levels {
        &self.levels
    }

    /// Token placement, indexed by token position.
    pub fn tokens(&self) -> &TokenLayout {
        &self.tokens
    }
}
