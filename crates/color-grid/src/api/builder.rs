//! GridMapper builder -- the main entry point of the crate.
//!
//! [`GridMapper`] holds the color table and the reduction settings and turns
//! pixel buffers into [`IndexGrid`]s.

use super::error::GridError;
use crate::color::Srgb;
use crate::output::IndexGrid;
use crate::palette::{ColorTable, DistanceMetric};
use crate::reduce::{ColorCount, PaletteReducer, ReductionStrategy};

/// Maps pixels to the nearest named color.
///
/// - Constructor takes the [`ColorTable`]; defaults are the full table,
///   RGB distance and max-coverage reduction.
/// - Configuration methods consume and return `self`.
/// - [`map()`](Self::map) takes `&self`, so one mapper serves many images.
///
/// # Example
///
/// ```
/// use color_grid::{ColorCount, ColorTable, GridMapper, Srgb};
///
/// let mapper = GridMapper::new(ColorTable::standard())
///     .colors(ColorCount::new(2).unwrap());
///
/// let pixels = vec![
///     Srgb::from_u8(250, 250, 250),
///     Srgb::from_u8(10, 10, 10),
///     Srgb::from_u8(240, 20, 20),
///     Srgb::from_u8(5, 0, 0),
/// ];
/// let grid = mapper.map(&pixels, 2, 2).unwrap();
///
/// assert_eq!((grid.width(), grid.height()), (2, 2));
/// assert!(grid.used_indices().len() <= 2);
/// ```
#[derive(Debug, Clone)]
pub struct GridMapper {
    table: ColorTable,
    colors: ColorCount,
    reducer: PaletteReducer,
}

impl GridMapper {
    pub fn new(table: ColorTable) -> Self {
        Self {
            table,
            colors: ColorCount::full(),
            reducer: PaletteReducer::default(),
        }
    }

    /// Limit the number of table entries the grid may use.
    #[inline]
    pub fn colors(mut self, count: ColorCount) -> Self {
        self.colors = count;
        self
    }

    /// Choose how the reduced subset is picked.
    #[inline]
    pub fn strategy(mut self, strategy: ReductionStrategy) -> Self {
        self.reducer = PaletteReducer::new(strategy);
        self
    }

    /// Choose the distance metric for nearest-color matching.
    #[inline]
    pub fn metric(mut self, metric: DistanceMetric) -> Self {
        self.table = self.table.with_distance_metric(metric);
        self
    }

    #[inline]
    pub fn table(&self) -> &ColorTable {
        &self.table
    }

    /// The table indices a given image would be mapped onto.
    pub fn active_indices(&self, pixels: &[Srgb]) -> Vec<usize> {
        self.reducer.select(self.table.palette(), pixels, self.colors)
    }

    /// Map a row-major pixel buffer to an [`IndexGrid`].
    ///
    /// Indices always refer to the full table, also when a reduced subset is
    /// active.
    ///
    /// # Errors
    ///
    /// [`GridError::DimensionMismatch`] if `pixels.len() != width * height`.
    pub fn map(
        &self,
        pixels: &[Srgb],
        width: usize,
        height: usize,
    ) -> Result<IndexGrid, GridError> {
        if width.checked_mul(height) != Some(pixels.len()) {
            return Err(GridError::DimensionMismatch {
                pixels: pixels.len(),
                width,
                height,
            });
        }

        let palette = self.table.palette();
        let active = self.active_indices(pixels);

        let indices: Vec<u8> = if active.len() == palette.len() {
            pixels
                .iter()
                .map(|&p| palette.find_nearest(p).0 as u8)
                .collect()
        } else {
            pixels
                .iter()
                .map(|&p| palette.find_nearest_among(p, &active).0 as u8)
                .collect()
        };

        Ok(IndexGrid::new(indices, width, height, self.table.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_full_table_exact_colors() {
        let table = ColorTable::standard();
        let pixels: Vec<Srgb> = table.palette().colors().to_vec();
        let grid = GridMapper::new(table).map(&pixels, 8, 4).unwrap();

        let expected: Vec<u8> = (0..32).collect();
        assert_eq!(grid.indices(), &expected[..]);
    }

    #[test]
    fn test_map_dimension_mismatch() {
        let mapper = GridMapper::new(ColorTable::standard());
        let err = mapper.map(&[Srgb::WHITE; 5], 2, 2).unwrap_err();
        assert!(matches!(
            err,
            GridError::DimensionMismatch {
                pixels: 5,
                width: 2,
                height: 2
            }
        ));
        assert_eq!(err.to_string(), "5 pixels do not fill a 2x2 grid");
    }

    #[test]
    fn test_reduced_mapping_uses_full_table_indices() {
        let red = Srgb::from_u8(255, 0, 0);
        let blue = Srgb::from_u8(0, 0, 255);
        let pixels = vec![red, red, red, blue];

        let grid = GridMapper::new(ColorTable::standard())
            .colors(ColorCount::new(2).unwrap())
            .map(&pixels, 2, 2)
            .unwrap();

        // Both colors survive and keep their table positions
        assert_eq!(grid.indices(), &[4, 4, 4, 6]);
    }

    #[test]
    fn test_reduction_remaps_dropped_colors_to_nearest_survivor() {
        let white = Srgb::WHITE;
        let red = Srgb::from_u8(255, 0, 0);
        let maroon = Srgb::from_u8(128, 0, 0);
        let pixels = vec![white, white, white, red, red, maroon];

        let grid = GridMapper::new(ColorTable::standard())
            .colors(ColorCount::new(2).unwrap())
            .map(&pixels, 3, 2)
            .unwrap();

        // Maroon (12) is dropped and remapped to red (4) rather than white
        assert_eq!(grid.indices(), &[0, 0, 0, 4, 4, 4]);
    }

    #[test]
    fn test_table_prefix_strategy() {
        let pixels = vec![Srgb::from_u8(0, 0, 255); 4];
        let grid = GridMapper::new(ColorTable::standard())
            .colors(ColorCount::new(3).unwrap())
            .strategy(ReductionStrategy::TablePrefix)
            .map(&pixels, 2, 2)
            .unwrap();

        assert!(grid.indices().iter().all(|&i| i < 3));
    }

    #[test]
    fn test_metric_switch() {
        let mapper = GridMapper::new(ColorTable::standard()).metric(DistanceMetric::Oklab);
        assert_eq!(
            mapper.table().palette().distance_metric(),
            DistanceMetric::Oklab
        );
        let grid = mapper.map(&[Srgb::from_u8(255, 0, 0)], 1, 1).unwrap();
        assert_eq!(grid.indices(), &[4]);
    }
}
