use color_grid::{ColorTable, GridMapper, IndexGrid};
use image::RgbImage;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::ConvertError;
use crate::models::ConvertOptions;
use crate::services::image_loader::{load_image, to_pixels};
use crate::services::resizer::resize_to_width;
use crate::services::workbook::WorkbookWriter;

/// Summary of a finished conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertReport {
    pub output: PathBuf,
    pub width: usize,
    pub height: usize,
    /// Localized names of the legend colors, in legend order
    pub legend: Vec<String>,
}

/// Runs the image → workbook pipeline for one set of options
pub struct Converter {
    options: ConvertOptions,
}

impl Converter {
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Where the workbook for `image` is written: the explicit output path,
    /// or the image path with `.xlsx` appended.
    pub fn output_path(&self, image: &Path) -> PathBuf {
        if let Some(ref output) = self.options.output {
            return output.clone();
        }
        let mut path = OsString::from(image.as_os_str());
        path.push(".xlsx");
        PathBuf::from(path)
    }

    fn mapper(&self) -> GridMapper {
        GridMapper::new(ColorTable::standard())
            .colors(self.options.colors)
            .strategy(self.options.strategy.into())
            .metric(self.options.metric.into())
    }

    /// Resize and map a decoded image onto the color table.
    pub fn process(&self, image: RgbImage) -> Result<IndexGrid, ConvertError> {
        let image = resize_to_width(image, self.options.width, self.options.filter);
        let (width, height) = image.dimensions();
        let pixels = to_pixels(&image);
        let grid = self
            .mapper()
            .map(&pixels, width as usize, height as usize)?;
        tracing::debug!(
            width,
            height,
            colors = grid.used_indices().len(),
            "Mapped image to color table"
        );
        Ok(grid)
    }

    /// Convert the image at `image_path` into a workbook.
    pub fn convert(&self, image_path: &Path) -> Result<ConvertReport, ConvertError> {
        let image = load_image(image_path)?;
        let grid = self.process(image)?;

        let output = self.output_path(image_path);
        let language = &self.options.language;
        let writer = WorkbookWriter::new(&grid, language);
        writer
            .save(&output)
            .map_err(|source| ConvertError::WorkbookWrite {
                path: output.clone(),
                source,
            })?;

        let legend: Vec<String> = writer
            .legend()
            .entries()
            .iter()
            .map(|entry| language.color_name(entry.table_index).to_string())
            .collect();

        tracing::info!(
            output = %output.display(),
            width = grid.width(),
            height = grid.height(),
            colors = legend.len(),
            language = language.tag(),
            "Workbook written"
        );

        Ok(ConvertReport {
            output,
            width: grid.width(),
            height: grid.height(),
            legend,
        })
    }
}
