// crates/identigen-core/src/grid.rs
//
// Square row-major cell buffer shared by the base grid, the upscaled grid and
// the final RGB image.

use crate::error::{InvalidArgument, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    cells: Vec<T>,
}

impl<T: Copy + Default> Grid<T> {
    /// `width x width` cells, all `T::default()`.
    pub fn new(width: usize) -> Self {
        Self {
            width,
            cells: vec![T::default(); width * width],
        }
    }
}

impl<T: Copy> Grid<T> {
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.cells[row * self.width + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.cells[row * self.width + col] = value;
    }

    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// Rows top to bottom.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, T> {
        self.cells.chunks_exact(self.width)
    }

    /// Same shape, every cell mapped through `f`.
    pub fn map<U, F: FnMut(T) -> U>(&self, f: F) -> Grid<U> {
        Grid {
            width: self.width,
            cells: self.cells.iter().copied().map(f).collect(),
        }
    }

    /// Top-left cell of every `factor x factor` block.
    ///
    /// On a grid produced by upscaling with the same factor this recovers the
    /// source grid exactly. `factor` must divide the width.
    pub fn downsample(&self, factor: usize) -> Result<Grid<T>> {
        if factor == 0 || self.width % factor != 0 {
            return Err(InvalidArgument::BlockFactor {
                width: self.width,
                factor,
            }
            .into());
        }
        let width = self.width / factor;
        let mut cells = Vec::with_capacity(width * width);
        for row in 0..width {
            for col in 0..width {
                cells.push(self.get(row * factor, col * factor));
            }
        }
        Ok(Grid { width, cells })
    }
}
