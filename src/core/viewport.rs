use crate::core::data::complex::Complex;
use crate::core::data::plane_vec::PlaneVec;
use std::{error::Error, fmt};

/// A terminal cell is roughly this many times taller than it is wide; the
/// horizontal extents are widened at construction to compensate.
const CELL_ASPECT: f64 = 2.5;

const ZOOM_FACTOR: f64 = 0.05;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Zoom {
    In,
    Out,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    DegenerateSize { rows: u16, cols: u16 },
    NonPositiveExtents { y: f64 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateSize { rows, cols } => {
                write!(
                    f,
                    "terminal grid needs at least one row and one column: {}x{}",
                    rows, cols
                )
            }
            Self::NonPositiveExtents { y } => {
                write!(f, "vertical extent must be positive: {}", y)
            }
        }
    }
}

impl Error for ViewportError {}

/// The rectangle of the complex plane currently mapped onto the terminal
/// grid. `center` is the plane point under the middle of the screen,
/// `extents` the half-width/half-height of the visible region, `cell_size`
/// the plane distance one cell spans along each axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    rows: u16,
    cols: u16,
    center: Complex,
    extents: PlaneVec,
    cell_size: PlaneVec,
}

impl Viewport {
    /// Fixes the grid size for the life of the viewport. The requested
    /// horizontal extent is discarded and recomputed from the vertical one
    /// so that a cell covers visually-equal plane distances in both axes.
    /// An even row count is decremented, giving the view a single
    /// well-defined center row.
    pub fn new(
        center: Complex,
        extents: PlaneVec,
        rows: u16,
        cols: u16,
    ) -> Result<Self, ViewportError> {
        if rows == 0 || cols == 0 {
            return Err(ViewportError::DegenerateSize { rows, cols });
        }
        if extents.y <= 0.0 {
            return Err(ViewportError::NonPositiveExtents { y: extents.y });
        }

        let rows = if rows % 2 == 0 { rows - 1 } else { rows };

        let height = extents.y * 2.0;
        let height_ratio = height / f64::from(rows) / CELL_ASPECT;
        let width = f64::from(cols) * height_ratio;

        let mut viewport = Self {
            rows,
            cols,
            center,
            extents: PlaneVec {
                x: width / 2.0,
                y: extents.y,
            },
            cell_size: PlaneVec { x: 0.0, y: 0.0 },
        };
        viewport.update_cell_size();

        Ok(viewport)
    }

    fn update_cell_size(&mut self) {
        self.cell_size = PlaneVec {
            x: self.extents.x * 2.0 / f64::from(self.cols),
            y: self.extents.y * 2.0 / f64::from(self.rows),
        };
    }

    #[must_use]
    pub fn rows(&self) -> u16 {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> u16 {
        self.cols
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[must_use]
    pub fn extents(&self) -> PlaneVec {
        self.extents
    }

    #[must_use]
    pub fn cell_size(&self) -> PlaneVec {
        self.cell_size
    }

    /// Plane coordinate of a cell's top-left corner. Row 0 is the top of
    /// the screen, so the imaginary part decreases as rows grow.
    #[must_use]
    pub fn cell_to_point(&self, row: u16, col: u16) -> Complex {
        Complex {
            re: self.center.re - self.extents.x + f64::from(col) * self.cell_size.x,
            im: self.center.im + self.extents.y - f64::from(row) * self.cell_size.y,
        }
    }

    #[must_use]
    pub fn cell_center(&self, row: u16, col: u16) -> Complex {
        let corner = self.cell_to_point(row, col);

        Complex {
            re: corner.re + self.cell_size.x / 2.0,
            im: corner.im - self.cell_size.y / 2.0,
        }
    }

    /// The four quadrant sub-centers of a cell in top-left, top-right,
    /// bottom-left, bottom-right order.
    #[must_use]
    pub fn cell_quadrants(&self, row: u16, col: u16) -> [Complex; 4] {
        let corner = self.cell_to_point(row, col);
        let near_x = corner.re + self.cell_size.x * 0.25;
        let far_x = corner.re + self.cell_size.x * 0.75;
        let near_y = corner.im - self.cell_size.y * 0.25;
        let far_y = corner.im - self.cell_size.y * 0.75;

        [
            Complex { re: near_x, im: near_y },
            Complex { re: far_x, im: near_y },
            Complex { re: near_x, im: far_y },
            Complex { re: far_x, im: far_y },
        ]
    }

    /// Grid cell under the visual center of the screen.
    #[must_use]
    pub fn center_cell(&self) -> (u16, u16) {
        (self.rows / 2, self.cols / 2)
    }

    /// Translates the view by a whole number of cells. Extents and cell
    /// size are untouched, so panning never changes the zoom level.
    pub fn shift(&mut self, direction: Direction, cells: u16) {
        let dx = f64::from(cells) * self.cell_size.x;
        let dy = f64::from(cells) * self.cell_size.y;

        match direction {
            Direction::Left => self.center.re -= dx,
            Direction::Right => self.center.re += dx,
            Direction::Up => self.center.im += dy,
            Direction::Down => self.center.im -= dy,
        }
    }

    /// Zooming in shrinks the visible window, so the extents scale down.
    /// Both axes scale by the same factor, which keeps the aspect ratio
    /// fixed at construction, and the center never moves.
    pub fn zoom(&mut self, zoom: Zoom) {
        let factor = match zoom {
            Zoom::In => 1.0 - ZOOM_FACTOR,
            Zoom::Out => 1.0 + ZOOM_FACTOR,
        };

        self.extents.x *= factor;
        self.extents.y *= factor;
        self.update_cell_size();
    }
}
