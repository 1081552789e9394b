//! Deparc Core Types and Definitions
//!
//! This crate provides the foundational types for dependency arc diagrams.
//! It includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Measure**: Pluggable text width measurement ([`measure`] module)
//! - **Document**: Tokens, arcs and their validation ([`document`] module)
//! - **Draw**: Format-agnostic drawing primitives and draw ordering ([`draw`] module)

pub mod color;
pub mod document;
pub mod draw;
pub mod geometry;
pub mod measure;
