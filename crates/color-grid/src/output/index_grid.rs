//! IndexGrid: the mapped image as table indices.

use crate::palette::ColorTable;

/// One table index per pixel, row-major, plus the table the indices refer to.
///
/// # Example
///
/// ```
/// use color_grid::{ColorTable, IndexGrid};
///
/// let grid = IndexGrid::new(vec![0, 4, 4, 1], 2, 2, ColorTable::standard());
///
/// assert_eq!(grid.get(1, 0), 4);
/// assert_eq!(grid.used_indices(), vec![0, 1, 4]);
/// ```
#[derive(Debug, Clone)]
pub struct IndexGrid {
    indices: Vec<u8>,
    width: usize,
    height: usize,
    table: ColorTable,
}

impl IndexGrid {
    /// Wrap mapped indices.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `indices.len() == width * height` and that every
    /// index is valid for `table`.
    pub fn new(indices: Vec<u8>, width: usize, height: usize, table: ColorTable) -> Self {
        debug_assert_eq!(
            indices.len(),
            width * height,
            "indices length ({}) must match width * height ({}x{}={})",
            indices.len(),
            width,
            height,
            width * height,
        );
        debug_assert!(
            indices.iter().all(|&i| (i as usize) < table.len()),
            "index out of range for a {}-entry table",
            table.len()
        );
        Self {
            indices,
            width,
            height,
            table,
        }
    }

    #[inline]
    pub fn indices(&self) -> &[u8] {
        &self.indices
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
    pub fn table(&self) -> &ColorTable {
        &self.table
    }

    /// Table index at column `x`, row `y`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.indices[y * self.width + x]
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.indices.chunks_exact(self.width.max(1))
    }

    /// Pixel count per table entry.
    pub fn counts(&self) -> Vec<usize> {
        let mut counts = vec![0usize; self.table.len()];
        for &idx in &self.indices {
            counts[idx as usize] += 1;
        }
        counts
    }

    /// Table indices that occur in the grid, in table order.
    pub fn used_indices(&self) -> Vec<usize> {
        self.counts()
            .iter()
            .enumerate()
            .filter_map(|(i, &n)| (n > 0).then_some(i))
            .collect()
    }
}
