//! Legend: the colors a sheet actually uses, numbered for the child.

use super::index_grid::IndexGrid;

/// One legend line: the number printed in the cells and the table entry it
/// stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegendEntry {
    /// 1-based number written into the grid cells.
    pub number: u32,
    /// Index into the color table.
    pub table_index: usize,
}

/// Numbered list of used colors in table order.
///
/// The background entry is excluded: background cells stay blank and need no
/// legend line.
///
/// ```
/// use color_grid::{ColorTable, IndexGrid, Legend};
///
/// // white, red, black, red
/// let grid = IndexGrid::new(vec![0, 4, 1, 4], 4, 1, ColorTable::standard());
/// let legend = Legend::from_grid(&grid);
///
/// assert_eq!(legend.len(), 2);
/// assert_eq!(legend.number_for(1), Some(1)); // black
/// assert_eq!(legend.number_for(4), Some(2)); // red
/// assert_eq!(legend.number_for(0), None); // background
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Legend {
    entries: Vec<LegendEntry>,
    /// Lookup from table index to legend number (0 = not listed).
    numbers: Vec<u32>,
}

impl Legend {
    /// Build the legend for `grid`, skipping the table's background entry.
    pub fn from_grid(grid: &IndexGrid) -> Self {
        let background = grid.table().background_index();
        let mut numbers = vec![0u32; grid.table().len()];
        let mut entries = Vec::new();

        for table_index in grid.used_indices() {
            if Some(table_index) == background {
                continue;
            }
            let number = entries.len() as u32 + 1;
            numbers[table_index] = number;
            entries.push(LegendEntry {
                number,
                table_index,
            });
        }

        Self { entries, numbers }
    }

    #[inline]
    pub fn entries(&self) -> &[LegendEntry] {
        &self.entries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Legend number for a table index, or `None` for the background and
    /// unused entries.
    pub fn number_for(&self, table_index: usize) -> Option<u32> {
        match self.numbers.get(table_index) {
            Some(&n) if n > 0 => Some(n),
            _ => None,
        }
    }
}
