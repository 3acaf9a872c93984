use rand::Rng;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("grid dimensions must be non-zero, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
}

/// Double-buffered cell grid on a toroidal surface.
///
/// Both buffers hold `width * height` cells in row-major order. Only the
/// active buffer is the "current" generation; the step logic writes the
/// other one and then the active index flips, so a swap never copies cells
/// and no buffer is read and written within the same generation.
#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    buffers: [Vec<bool>; 2],
    active: usize,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        let count = width * height;
        Ok(Self {
            width,
            height,
            buffers: [vec![false; count], vec![false; count]],
            active: 0,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }
    #[inline]
    pub fn count(&self) -> usize {
        self.width * self.height
    }

    /// Read-only view of the current generation, row-major.
    #[inline]
    pub fn cells(&self) -> &[bool] {
        &self.buffers[self.active]
    }

    pub fn population(&self) -> usize {
        self.cells().iter().filter(|&&alive| alive).count()
    }

    /// Sets every cell alive with `percent` probability (clamped to 0..=100).
    /// Only the current buffer is touched.
    pub fn randomize(&mut self, percent: u8) {
        let percent = u32::from(percent.min(100));
        let mut rng = rand::rng();
        let active = self.active;
        for cell in &mut self.buffers[active] {
            *cell = rng.random_ratio(percent, 100);
        }
    }

    pub fn clear(&mut self) {
        let active = self.active;
        self.buffers[active].fill(false);
    }

    /// Single-cell write into the current buffer. `x` and `y` must be in
    /// range; interactive input is already bounded to the rendered surface.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, alive: bool) {
        let i = y * self.width + x;
        self.buffers[self.active][i] = alive;
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells()[y * self.width + x]
    }

    /// Number of live cells in the Moore neighborhood of (x, y), both axes
    /// wrapped modulo the grid size.
    #[inline]
    pub fn neighbor_count(&self, x: usize, y: usize) -> u8 {
        live_neighbors(self.cells(), self.width, self.height, x, y)
    }

    /// Splits into (current read snapshot, back write buffer).
    pub(crate) fn split_buffers(&mut self) -> (&[bool], &mut [bool]) {
        let [a, b] = &mut self.buffers;
        match self.active {
            0 => (a, b),
            _ => (b, a),
        }
    }

    /// O(1): flips which buffer is current.
    #[inline]
    pub(crate) fn swap_buffers(&mut self) {
        self.active ^= 1;
    }
}

/// Moore-neighborhood sum over a row-major cell slice with toroidal
/// addressing: every edge and corner sees cells from the opposite side.
pub(crate) fn live_neighbors(
    cells: &[bool],
    width: usize,
    height: usize,
    x: usize,
    y: usize,
) -> u8 {
    let left = (x + width - 1) % width;
    let right = (x + 1) % width;
    let above = (y + height - 1) % height;
    let below = (y + 1) % height;

    let row = |y: usize| y * width;
    u8::from(cells[row(above) + left])
        + u8::from(cells[row(above) + x])
        + u8::from(cells[row(above) + right])
        + u8::from(cells[row(y) + left])
        + u8::from(cells[row(y) + right])
        + u8::from(cells[row(below) + left])
        + u8::from(cells[row(below) + x])
        + u8::from(cells[row(below) + right])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(
            Grid::new(0, 5).err(),
            Some(GridError::InvalidDimensions { width: 0, height: 5 })
        );
        assert_eq!(
            Grid::new(5, 0).err(),
            Some(GridError::InvalidDimensions { width: 5, height: 0 })
        );
        assert!(Grid::new(1, 1).is_ok());
    }

    #[test]
    fn randomize_extremes_are_deterministic() {
        let mut grid = Grid::new(6, 4).expect("grid");

        grid.randomize(100);
        assert!(grid.cells().iter().all(|&alive| alive));

        grid.randomize(0);
        assert!(grid.cells().iter().all(|&alive| !alive));

        // out-of-range percentages clamp to 100
        grid.randomize(200);
        assert!(grid.cells().iter().all(|&alive| alive));
    }

    #[test]
    fn clear_kills_every_cell() {
        let mut grid = Grid::new(7, 3).expect("grid");
        grid.randomize(100);

        grid.clear();
        for y in 0..3 {
            for x in 0..7 {
                assert!(!grid.get(x, y));
            }
        }

        // idempotent
        grid.clear();
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn set_and_get_roundtrip() {
        let mut grid = Grid::new(4, 4).expect("grid");

        grid.set(2, 1, true);
        assert!(grid.get(2, 1));
        assert_eq!(grid.population(), 1);

        grid.set(2, 1, false);
        assert!(!grid.get(2, 1));
    }

    #[test]
    fn neighbor_count_wraps_at_all_corners() {
        let (w, h) = (5, 4);
        // each corner paired with its diagonally-wrapped neighbor
        let cases = [
            ((0, 0), (w - 1, h - 1)),
            ((w - 1, 0), (0, h - 1)),
            ((0, h - 1), (w - 1, 0)),
            ((w - 1, h - 1), (0, 0)),
        ];

        for ((cx, cy), (nx, ny)) in cases {
            let mut grid = Grid::new(w, h).expect("grid");
            grid.set(nx, ny, true);
            assert_eq!(grid.neighbor_count(cx, cy), 1, "corner ({cx},{cy})");
        }
    }

    #[test]
    fn neighbor_count_wraps_at_edges() {
        let mut grid = Grid::new(5, 4).expect("grid");

        // a live cell in column 0 is seen from column 4 across the seam
        grid.set(0, 2, true);
        assert_eq!(grid.neighbor_count(4, 1), 1);
        assert_eq!(grid.neighbor_count(4, 2), 1);
        assert_eq!(grid.neighbor_count(4, 3), 1);

        // and a live cell in row 0 is seen from the bottom row
        let mut grid = Grid::new(5, 4).expect("grid");
        grid.set(2, 0, true);
        assert_eq!(grid.neighbor_count(1, 3), 1);
        assert_eq!(grid.neighbor_count(2, 3), 1);
        assert_eq!(grid.neighbor_count(3, 3), 1);
    }

    #[test]
    fn neighbor_count_saturates_at_eight() {
        let mut grid = Grid::new(3, 3).expect("grid");
        grid.randomize(100);

        // on a 3x3 torus every other cell is a distinct neighbor
        assert_eq!(grid.neighbor_count(1, 1), 8);
        assert_eq!(grid.neighbor_count(0, 0), 8);
    }

    #[test]
    fn neighbor_count_ignores_the_cell_itself() {
        let mut grid = Grid::new(4, 4).expect("grid");
        grid.set(2, 2, true);

        assert_eq!(grid.neighbor_count(2, 2), 0);
    }
}
