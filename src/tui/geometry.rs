//! Screen layout and tile geometry: where each cell sits in the terminal and
//! which cell a pointer position falls in.

use clap::ValueEnum;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use serde::{Deserialize, Serialize};
use tictac_core::{BOARD_SIZE, Cell};
use tracing::instrument;

/// Size of one tile on screen.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    ValueEnum,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TileScale {
    /// 6x3 tiles.
    Small,
    /// 12x6 tiles.
    #[default]
    Medium,
    /// 24x12 tiles.
    Large,
}

impl TileScale {
    /// Tile size as `(width, height)` in terminal cells. Each step doubles
    /// the previous one.
    pub fn tile_size(self) -> (u16, u16) {
        match self {
            TileScale::Small => (6, 3),
            TileScale::Medium => (12, 6),
            TileScale::Large => (24, 12),
        }
    }

    /// Next larger scale, saturating at `Large`.
    pub fn larger(self) -> Self {
        match self {
            TileScale::Small => TileScale::Medium,
            TileScale::Medium | TileScale::Large => TileScale::Large,
        }
    }

    /// Next smaller scale, saturating at `Small`.
    pub fn smaller(self) -> Self {
        match self {
            TileScale::Large => TileScale::Medium,
            TileScale::Medium | TileScale::Small => TileScale::Small,
        }
    }

    /// Size of the whole grid, separators included.
    pub fn grid_size(self) -> (u16, u16) {
        let (w, h) = self.tile_size();
        let n = BOARD_SIZE as u16;
        (w * n + n - 1, h * n + n - 1)
    }
}

/// Areas of the three screen sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title line.
    pub title: Rect,
    /// Space the grid is centered in.
    pub board: Rect,
    /// Bordered status box.
    pub status: Rect,
}

/// Splits the terminal into title, board and status sections.
#[instrument]
pub fn screen_layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(3),    // Board
            Constraint::Length(3), // Status
        ])
        .split(area);

    ScreenLayout {
        title: chunks[0],
        board: chunks[1],
        status: chunks[2],
    }
}

/// Placement of the grid inside the board section.
///
/// Tiles are separated by one-cell grid lines. Positions on a grid line or
/// outside the grid resolve to no cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGeometry {
    origin_x: u16,
    origin_y: u16,
    tile_width: u16,
    tile_height: u16,
    scale: TileScale,
}

impl BoardGeometry {
    /// Centers the grid in `area` at the largest scale not above `requested`
    /// that fits. Falls back to `Small` anchored at the area's corner when
    /// nothing fits.
    #[instrument]
    pub fn fit(area: Rect, requested: TileScale) -> Self {
        let mut scale = requested;
        loop {
            let (w, h) = scale.grid_size();
            if (w <= area.width && h <= area.height) || scale == TileScale::Small {
                break;
            }
            scale = scale.smaller();
        }

        let (grid_w, grid_h) = scale.grid_size();
        let (tile_width, tile_height) = scale.tile_size();
        Self {
            origin_x: area.x + area.width.saturating_sub(grid_w) / 2,
            origin_y: area.y + area.height.saturating_sub(grid_h) / 2,
            tile_width,
            tile_height,
            scale,
        }
    }

    /// The scale actually used.
    pub fn scale(&self) -> TileScale {
        self.scale
    }

    /// Area covered by the whole grid.
    pub fn grid_rect(&self) -> Rect {
        let (w, h) = self.scale.grid_size();
        Rect::new(self.origin_x, self.origin_y, w, h)
    }

    /// Area of the tile for `cell`.
    pub fn tile_rect(&self, cell: Cell) -> Rect {
        Rect::new(
            self.origin_x + cell.col() as u16 * (self.tile_width + 1),
            self.origin_y + cell.row() as u16 * (self.tile_height + 1),
            self.tile_width,
            self.tile_height,
        )
    }

    /// Columns of the two vertical grid lines.
    pub fn vertical_lines(&self) -> [u16; 2] {
        let stride = self.tile_width + 1;
        [
            self.origin_x + self.tile_width,
            self.origin_x + self.tile_width + stride,
        ]
    }

    /// Rows of the two horizontal grid lines.
    pub fn horizontal_lines(&self) -> [u16; 2] {
        let stride = self.tile_height + 1;
        [
            self.origin_y + self.tile_height,
            self.origin_y + self.tile_height + stride,
        ]
    }

    /// Resolves a terminal position to the cell under it.
    #[instrument(skip(self))]
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Cell> {
        let col = axis_index(column.checked_sub(self.origin_x)?, self.tile_width)?;
        let row = axis_index(row.checked_sub(self.origin_y)?, self.tile_height)?;
        Cell::new(row, col).ok()
    }
}

/// Tile index along one axis, or `None` on a grid line or past the grid.
fn axis_index(offset: u16, tile: u16) -> Option<usize> {
    let stride = tile + 1;
    if offset % stride == tile {
        return None;
    }
    let index = (offset / stride) as usize;
    (index < BOARD_SIZE).then_some(index)
}
