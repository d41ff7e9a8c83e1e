//! # nino-qr
//!
//! Decorative QR-placeholder rasterizer - deterministic bitmap rendering only.
//!
//! ## Scope
//!
//! This crate handles HOW the placeholder is drawn:
//! - 32-bit polynomial seed hashing
//! - Module grid with reserved finder-pattern regions
//! - Finder glyph and data-fill geometry
//! - Raster surface abstraction (grayscale bitmap included)
//!
//! What the placeholder points at (the menu URL) and where the bitmap and
//! caption get attached stay in application code.
//!
//! The output is NOT a scannable QR code: no error correction, no timing
//! or alignment patterns, no standard module layout. It is a stable
//! decorative pattern keyed by the input string - the same string always
//! rasterizes to the same bitmap.
//!
//! ## Example
//!
//! ```
//! use nino_qr::QrRenderer;
//!
//! let renderer = QrRenderer::new();
//! let placeholder = renderer.render("https://example.test/menu.html").unwrap();
//! assert_eq!(placeholder.caption, "https://example.test/menu.html");
//! assert_eq!(placeholder.bitmap.size(), 200);
//! ```

mod error;
mod grid;
mod hash;
mod render;
mod surface;

// Re-exports
pub use error::{QrError, QrResult};
pub use grid::{FINDER_RESERVED, FINDER_SPAN, ModuleGrid};
pub use hash::hash_seed;
pub use render::{QrOptions, QrPlaceholder, QrRenderer};
pub use surface::{GrayBitmap, Shade, Surface};
