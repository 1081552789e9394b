//! Layer-based draw ordering.
//!
//! This module provides the fixed visual layers of a dependency diagram and
//! the sequencer that flattens primitives into drawing order.
//!
//! # Overview
//!
//! - [`DrawLayer`]: The three layers, in bottom-to-top order
//! - [`DrawOrderSequencer`]: Collects primitives and emits them layer by layer
//!
//! # Example
//!
//! ```
//! # use deparc_core::draw::{
//! #     CurvePrimitive, DrawLayer, DrawOrderSequencer, StrokeDefinition, TextDefinition,
//! #     TextPrimitive,
//! # };
//! # use deparc_core::geometry::Point;
//! let mut sequencer = DrawOrderSequencer::new();
//!
//! // Generated text first, curve second...
//! sequencer.add(TextPrimitive::new(Point::default(), "cat", TextDefinition::default()));
//! sequencer.add(CurvePrimitive::new(Vec::new(), StrokeDefinition::default()));
//!
//! // ...but the curve is drawn first.
//! let primitives = sequencer.sequence();
//! assert_eq!(primitives[0].layer(), DrawLayer::Curve);
//! assert_eq!(primitives[1].layer(), DrawLayer::Text);
//! ```

use crate::draw::Primitive;

/// The fixed visual layers of a diagram.
///
/// Layers are drawn from bottom to top in the order defined by variant declaration.
/// The `Ord` derive uses declaration order, so the first variant renders first (bottom),
/// and the last variant renders last (top).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DrawLayer {
    /// Arc curves - renders first
    Curve,
    /// Plaques that hide the curve behind a label
    LabelBackground,
    /// Token and label text - renders last
    Text,
}

/// Collects primitives and emits them in layer order.
///
/// Within a layer, primitives keep the order in which they were added.
#[derive(Debug, Default)]
pub struct DrawOrderSequencer {
    items: Vec<Primitive>,
}

impl DrawOrderSequencer {
    /// Creates a new empty sequencer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single primitive; its layer is determined by its kind.
    pub fn add(&mut self, primitive: impl Into<Primitive>) {
        self.items.push(primitive.into());
    }

    /// Appends all primitives collected by another sequencer.
    ///
    /// The other sequencer's primitives count as added after this one's.
    pub fn merge(&mut self, other: DrawOrderSequencer) {
        self.items.extend(other.items);
    }

    /// Returns `true` if no primitive has been added.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Flattens everything into drawing order, consuming the sequencer.
    ///
    /// The result lists every curve, then every label background, then
    /// every text, each group in insertion order.
    pub fn sequence(mut self) -> Vec<Primitive> {
        // Stable sort keeps insertion order within a layer.
        self.items.sort_by_key(Primitive::layer);
        self.items
    }
}
