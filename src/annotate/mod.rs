//! The annotation renderer — pure Rust, fonts compiled in.
//!
//! | Concern | Crate / function |
//! |---|---|
//! | **Anchor math** | [`layout::place_lines`] (pure, no I/O) |
//! | **Glyph layout + coverage** | `fontdue` over embedded DejaVu Sans |
//! | **Compositing** | source-over blend in [`renderer::render`] |
//!
//! The module is split into:
//! - **Layout**: pure functions for anchor placement (unit testable)
//! - **Style**: [`TextStyle`] parameters describing the annotation look
//! - **Font**: embedded faces, measurement, rasterization
//! - **Renderer**: [`render`], the one public entry point

mod font;
pub mod layout;
pub mod renderer;
mod style;

pub use renderer::{AnnotateError, render};
pub use style::{FontWeight, TextStyle};
