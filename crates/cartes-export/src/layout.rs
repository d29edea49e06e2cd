//! Static page geometry.
//!
//! All values are millimetres with the origin at the page's top-left corner
//! and y growing downwards. The PDF writer flips to PDF space at draw time.

use cartes_core::sheet::{GRID_COLUMNS, GRID_ROWS};

pub const A4_WIDTH_MM: f32 = 210.0;
pub const A4_HEIGHT_MM: f32 = 297.0;
pub const MARGIN_MM: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

/// Card grid geometry, derived once from the page size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub page_width: f32,
    pub page_height: f32,
    pub margin: f32,
    pub card_width: f32,
    pub card_height: f32,
}

impl PageGeometry {
    pub fn for_page(page_width: f32, page_height: f32) -> Self {
        let margin = MARGIN_MM;
        Self {
            page_width,
            page_height,
            margin,
            card_width: (page_width - 2.0 * margin) / GRID_COLUMNS as f32,
            card_height: (page_height - 5.0 * margin) / GRID_ROWS as f32,
        }
    }

    pub fn a4() -> Self {
        Self::for_page(A4_WIDTH_MM, A4_HEIGHT_MM)
    }

    /// Rectangle of grid cell `index`, filled row by row, left to right.
    pub fn cell(&self, index: usize) -> Rect {
        let column = (index % GRID_COLUMNS) as f32;
        let row = ((index / GRID_COLUMNS) % GRID_ROWS) as f32;
        Rect {
            x: self.margin + column * (self.card_width + self.margin),
            y: self.margin + row * (self.card_height + self.margin),
            width: self.card_width,
            height: self.card_height,
        }
    }

    /// The line splitting the two columns, margin to margin.
    pub fn vertical_separator(&self) -> Segment {
        let x = self.page_width / 2.0;
        Segment {
            x1: x,
            y1: self.margin,
            x2: x,
            y2: self.page_height - self.margin,
        }
    }

    /// The line under the row that `index` closes, if any.
    ///
    /// Drawn after the right-hand cell of every row except the last.
    pub fn horizontal_separator_after(&self, index: usize) -> Option<Segment> {
        let last = GRID_COLUMNS * GRID_ROWS - 1;
        if index % GRID_COLUMNS != GRID_COLUMNS - 1 || index >= last {
            return None;
        }
        let y = self.cell(index).bottom();
        Some(Segment {
            x1: self.margin,
            y1: y,
            x2: self.page_width - self.margin,
            y2: y,
        })
    }

    /// Where the logo sits in `cell`: centred horizontally, near the bottom.
    ///
    /// `aspect_ratio` is height over width of the source image.
    pub fn logo_rect(&self, cell: Rect, logo_width: f32, aspect_ratio: f32) -> Rect {
        Rect {
            x: cell.x + (cell.width - logo_width) / 2.0,
            y: cell.y + cell.height - logo_width - self.margin,
            width: logo_width,
            height: logo_width * aspect_ratio,
        }
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a4()
    }
}
