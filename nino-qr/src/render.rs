//! Placeholder rendering
//!
//! Paints the white background, the three finder glyphs, and the
//! seed-keyed data fill onto a [`Surface`], and carries the caption (the
//! literal source string) the host shows below the bitmap.

use crate::error::QrResult;
use crate::grid::{FINDER_SPAN, ModuleGrid};
use crate::hash::hash_seed;
use crate::surface::{GrayBitmap, Shade, Surface};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Rendering options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrOptions {
    /// Square surface edge in logical units.
    pub surface_size: u32,
    /// Module edge in logical units.
    pub module_size: u32,
}

impl Default for QrOptions {
    fn default() -> Self {
        Self {
            surface_size: 200,
            module_size: 8,
        }
    }
}

/// A rendered placeholder: the bitmap plus the caption the host attaches
/// below it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrPlaceholder {
    pub bitmap: GrayBitmap,
    pub caption: String,
}

/// Deterministic placeholder renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct QrRenderer {
    opts: QrOptions,
}

impl QrRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(opts: QrOptions) -> Self {
        Self { opts }
    }

    pub fn options(&self) -> QrOptions {
        self.opts
    }

    /// Render the pattern for `text` onto a caller-provided surface.
    ///
    /// The grid is sized from the surface itself; the configured
    /// `surface_size` only governs bitmaps created by [`render`].
    ///
    /// [`render`]: Self::render
    pub fn render_into(&self, surface: &mut dyn Surface, text: &str) -> QrResult<()> {
        let module = self.opts.module_size;
        let grid = ModuleGrid::new(surface.size(), module)?;
        let seed = hash_seed(text);
        debug!(seed, modules = grid.modules(), "rendering placeholder");

        surface.clear(Shade::Paper);

        for (row, col) in grid.finder_origins() {
            draw_finder(surface, col * module, row * module, module);
        }

        for row in 0..grid.modules() {
            for col in 0..grid.modules() {
                if grid.is_dark(row, col, seed) {
                    // module_size - 1 leaves a one-unit gap between cells
                    surface.fill_rect(
                        col * module,
                        row * module,
                        module - 1,
                        module - 1,
                        Shade::Ink,
                    );
                }
            }
        }

        Ok(())
    }

    /// Render into a fresh grayscale bitmap and pair it with its caption.
    pub fn render(&self, text: &str) -> QrResult<QrPlaceholder> {
        let mut bitmap = GrayBitmap::new(self.opts.surface_size);
        self.render_into(&mut bitmap, text)?;
        Ok(QrPlaceholder {
            bitmap,
            caption: text.to_string(),
        })
    }
}

/// Finder glyph: one-module-thick 7x7 ring with a filled 3x3 core.
/// `x`/`y` are surface units of the glyph's top-left corner.
fn draw_finder(surface: &mut dyn Surface, x: u32, y: u32, module: u32) {
    let span = FINDER_SPAN * module;
    surface.fill_rect(x, y, span, module, Shade::Ink);
    surface.fill_rect(x, y + 6 * module, span, module, Shade::Ink);
    surface.fill_rect(x, y, module, span, Shade::Ink);
    surface.fill_rect(x + 6 * module, y, module, span, Shade::Ink);
    surface.fill_rect(x + 2 * module, y + 2 * module, 3 * module, 3 * module, Shade::Ink);
}
