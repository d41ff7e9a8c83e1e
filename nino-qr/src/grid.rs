//! Module grid geometry
//!
//! A square grid of `floor(surface / module)` cells. Three 8x8 corner
//! regions (top-left, top-right, bottom-left) are reserved for the
//! finder glyphs and never receive data fill. The bottom-right corner
//! has no finder glyph, matching real QR layout.

use crate::error::{QrError, QrResult};

/// Modules covered by a finder glyph (7x7 ring plus core).
pub const FINDER_SPAN: u32 = 7;

/// Modules reserved around each finder corner (glyph plus one quiet module).
pub const FINDER_RESERVED: u32 = 8;

/// Grid geometry and the deterministic fill predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleGrid {
    modules: u32,
}

impl ModuleGrid {
    /// Smallest grid where the three reserved regions cannot overlap.
    const MIN_MODULES: u32 = FINDER_RESERVED * 2;

    /// Build the grid for a square surface.
    ///
    /// Modules below 2 units would be swallowed by the 1-unit cell gap,
    /// and grids below 16 modules cannot hold the finder regions; both
    /// are configuration errors.
    pub fn new(surface_size: u32, module_size: u32) -> QrResult<Self> {
        if module_size < 2 {
            return Err(QrError::InvalidConfig(format!(
                "module size must be at least 2 units, got {module_size}"
            )));
        }
        let modules = surface_size / module_size;
        if modules < Self::MIN_MODULES {
            return Err(QrError::InvalidConfig(format!(
                "{surface_size}-unit surface with {module_size}-unit modules \
                 yields a {modules}-module grid, need at least {}",
                Self::MIN_MODULES
            )));
        }
        Ok(Self { modules })
    }

    /// Grid edge length in modules.
    pub fn modules(&self) -> u32 {
        self.modules
    }

    /// Whether a cell lies in one of the three reserved corner regions.
    pub fn in_finder_region(&self, row: u32, col: u32) -> bool {
        if row < FINDER_RESERVED && col < FINDER_RESERVED {
            return true; // top-left
        }
        if row < FINDER_RESERVED && col >= self.modules - FINDER_RESERVED {
            return true; // top-right
        }
        if row >= self.modules - FINDER_RESERVED && col < FINDER_RESERVED {
            return true; // bottom-left
        }
        false
    }

    /// Finder glyph origins as `(row, col)` module coordinates.
    pub fn finder_origins(&self) -> [(u32, u32); 3] {
        let far = self.modules - FINDER_SPAN;
        [(0, 0), (0, far), (far, 0)]
    }

    /// Data-cell fill predicate. Pure function of (row, col, seed);
    /// reserved cells are never dark.
    pub fn is_dark(&self, row: u32, col: u32, seed: u32) -> bool {
        if self.in_finder_region(row, col) {
            return false;
        }
        let (row, col, seed) = (u64::from(row), u64::from(col), u64::from(seed));
        (row * col + seed) % 3 == 0 || (row + col + seed) % 5 == 0
    }
}
