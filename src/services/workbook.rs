//! Two-sheet workbook: numbered grid with legend, and the painted picture

use color_grid::{IndexGrid, Legend};
use rust_xlsxwriter::{
    ColNum, Color, Format, FormatAlign, FormatBorder, FormatPattern, RowNum, Workbook, Worksheet,
    XlsxError,
};
use std::path::Path;

use crate::models::Language;

/// Column width in pixels, equal to the default 20 px row height so cells
/// are square.
pub const CELL_WIDTH_PX: u16 = 20;

/// First legend row is `LEGEND_ROW_OFFSET + 1`.
const LEGEND_ROW_OFFSET: u32 = 3;

/// Number of caption rows merged above the legend.
const CAPTION_ROWS: u32 = 3;

/// Columns spanned by the caption, starting one right of the grid.
const CAPTION_COLUMNS: u16 = 5;

/// Legend columns sized like the grid on the numbered sheet.
const LEGEND_COLUMNS: u16 = 3;

/// Excel's limit on sheet name length.
const MAX_SHEET_NAME: usize = 31;

/// Writes an [`IndexGrid`] as a paint-by-numbers workbook
pub struct WorkbookWriter<'a> {
    grid: &'a IndexGrid,
    legend: Legend,
    language: &'a Language,
}

impl<'a> WorkbookWriter<'a> {
    pub fn new(grid: &'a IndexGrid, language: &'a Language) -> Self {
        Self {
            grid,
            legend: Legend::from_grid(grid),
            language,
        }
    }

    pub fn legend(&self) -> &Legend {
        &self.legend
    }

    /// Assemble the workbook in memory.
    pub fn build(&self) -> Result<Workbook, XlsxError> {
        let captions = self.language.captions();
        let (grid_name, painted_name) = sheet_names(&captions.grid_sheet, &captions.painted_sheet);

        let mut workbook = Workbook::new();

        let numbered = workbook.add_worksheet();
        numbered.set_name(&grid_name)?;
        self.write_numbered_sheet(numbered)?;

        let painted = workbook.add_worksheet();
        painted.set_name(&painted_name)?;
        self.write_painted_sheet(painted)?;

        Ok(workbook)
    }

    /// Write the workbook to `path`.
    pub fn save(&self, path: &Path) -> Result<(), XlsxError> {
        let mut workbook = self.build()?;
        workbook.save(path)?;
        tracing::debug!(
            path = %path.display(),
            legend = self.legend.len(),
            "Wrote workbook"
        );
        Ok(())
    }

    /// Serialize the workbook to xlsx bytes.
    pub fn to_buffer(&self) -> Result<Vec<u8>, XlsxError> {
        self.build()?.save_to_buffer()
    }

    fn grid_width(&self) -> Result<ColNum, XlsxError> {
        ColNum::try_from(self.grid.width()).map_err(|_| XlsxError::RowColumnLimitError)
    }

    fn write_numbered_sheet(&self, sheet: &mut Worksheet) -> Result<(), XlsxError> {
        let width = self.grid_width()?;
        let legend_end = width
            .checked_add(CAPTION_COLUMNS)
            .ok_or(XlsxError::RowColumnLimitError)?;

        for col in 0..width + LEGEND_COLUMNS {
            sheet.set_column_width_pixels(col, CELL_WIDTH_PX.into())?;
        }
        sheet.set_print_fit_to_pages(1, 1);

        let cell = Format::new().set_border(FormatBorder::Thin);
        for (y, row) in self.grid.rows().enumerate() {
            let y = grid_row(y)?;
            for (x, &idx) in row.iter().enumerate() {
                let x = x as ColNum;
                match self.legend.number_for(idx as usize) {
                    Some(number) => {
                        sheet.write_number_with_format(y, x, f64::from(number), &cell)?
                    }
                    None => sheet.write_blank(y, x, &cell)?,
                };
            }
        }

        let caption = Format::new()
            .set_align(FormatAlign::Left)
            .set_align(FormatAlign::Top)
            .set_text_wrap();
        sheet.merge_range(
            0,
            width + 1,
            CAPTION_ROWS - 1,
            legend_end,
            &self.language.captions().instructions,
            &caption,
        )?;

        let equals = Format::new().set_align(FormatAlign::Center);
        for entry in self.legend.entries() {
            let row = entry.number + LEGEND_ROW_OFFSET;
            sheet.write_number(row, width + 1, f64::from(entry.number))?;
            sheet.write_string_with_format(row, width + 2, "=", &equals)?;
            sheet.write_string(row, width + 3, self.language.color_name(entry.table_index))?;
        }

        Ok(())
    }

    fn write_painted_sheet(&self, sheet: &mut Worksheet) -> Result<(), XlsxError> {
        let width = self.grid_width()?;
        for col in 0..width {
            sheet.set_column_width_pixels(col, CELL_WIDTH_PX.into())?;
        }
        sheet.set_print_fit_to_pages(1, 1);

        let table = self.grid.table();
        let fills: Vec<Option<Format>> = (0..table.len())
            .map(|idx| {
                self.legend.number_for(idx).map(|_| {
                    Format::new()
                        .set_pattern(FormatPattern::Solid)
                        .set_background_color(Color::RGB(table.color(idx).to_rgb_u32()))
                })
            })
            .collect();

        for (y, row) in self.grid.rows().enumerate() {
            let y = grid_row(y)?;
            for (x, &idx) in row.iter().enumerate() {
                if let Some(Some(fill)) = fills.get(idx as usize) {
                    sheet.write_blank(y, x as ColNum, fill)?;
                }
            }
        }

        Ok(())
    }
}

fn grid_row(y: usize) -> Result<RowNum, XlsxError> {
    RowNum::try_from(y).map_err(|_| XlsxError::RowColumnLimitError)
}

/// Make two captions usable as distinct worksheet names.
pub fn sheet_names(first: &str, second: &str) -> (String, String) {
    let first = sanitize_sheet_name(first, "Sheet1");
    let mut second = sanitize_sheet_name(second, "Sheet2");
    if first.to_lowercase() == second.to_lowercase() {
        let base: String = second.chars().take(MAX_SHEET_NAME - 4).collect();
        second = format!("{base} (2)");
    }
    (first, second)
}

/// Replace characters Excel forbids in sheet names and enforce its length
/// limit.
pub fn sanitize_sheet_name(name: &str, fallback: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| match c {
            '[' | ']' | ':' | '*' | '?' | '/' | '\\' => '_',
            c => c,
        })
        .collect();
    let truncated: String = cleaned
        .trim()
        .trim_matches('\'')
        .chars()
        .take(MAX_SHEET_NAME)
        .collect();
    // Truncation can expose a trailing apostrophe again
    let trimmed = truncated.trim_end_matches('\'').trim_end();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use color_grid::ColorTable;

    #[test]
    fn test_sanitize_sheet_name() {
        assert_eq!(sanitize_sheet_name("Draw the pixels", "x"), "Draw the pixels");
        assert_eq!(sanitize_sheet_name("a/b:c[d]?", "x"), "a_b_c_d__");
        assert_eq!(sanitize_sheet_name("'quoted'", "x"), "quoted");
        assert_eq!(sanitize_sheet_name("   ", "Sheet1"), "Sheet1");
        assert_eq!(sanitize_sheet_name("''", "Sheet2"), "Sheet2");

        let long = "Ζωγράφισε τα εικονοστοιχεία και πολλά ακόμα";
        let name = sanitize_sheet_name(long, "x");
        assert_eq!(name.chars().count(), MAX_SHEET_NAME);
    }

    #[test]
    fn test_sheet_names_made_distinct() {
        let (a, b) = sheet_names("Picture", "picture");
        assert_eq!(a, "Picture");
        assert_eq!(b, "picture (2)");

        let (a, b) = sheet_names("", "");
        assert_eq!((a.as_str(), b.as_str()), ("Sheet1", "Sheet2"));
    }

    #[test]
    fn test_build_writes_xlsx_bytes() {
        // white, red / black, red
        let grid = IndexGrid::new(vec![0, 4, 1, 4], 2, 2, ColorTable::standard());
        let language = Language::english();
        let writer = WorkbookWriter::new(&grid, &language);

        assert_eq!(writer.legend().len(), 2);
        let bytes = writer.to_buffer().unwrap();
        // xlsx is a zip archive
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_all_background_grid() {
        let grid = IndexGrid::new(vec![0; 6], 3, 2, ColorTable::standard());
        let language = Language::english();
        let writer = WorkbookWriter::new(&grid, &language);

        assert!(writer.legend().is_empty());
        assert!(writer.to_buffer().is_ok());
    }
}
