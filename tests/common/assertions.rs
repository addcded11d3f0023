//! Workbook readback and assertion helpers.

use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use pretty_assertions::assert_eq;
use std::path::Path;

/// Sheet names and the used range of each sheet
pub struct WorkbookContents {
    pub sheet_names: Vec<String>,
    pub sheets: Vec<Range<Data>>,
}

impl WorkbookContents {
    /// The numbered grid sheet
    pub fn grid(&self) -> &Range<Data> {
        &self.sheets[0]
    }
}

/// Open a written workbook and read every sheet
pub fn read_workbook(path: &Path) -> WorkbookContents {
    let mut workbook: Xlsx<_> = open_workbook(path)
        .unwrap_or_else(|e| panic!("Cannot open {}: {e}", path.display()));
    let sheet_names = workbook.sheet_names();
    let sheets = sheet_names
        .iter()
        .map(|name| {
            workbook
                .worksheet_range(name)
                .unwrap_or_else(|e| panic!("Cannot read sheet {name}: {e}"))
        })
        .collect();
    WorkbookContents {
        sheet_names,
        sheets,
    }
}

/// Cell value at an absolute position, `Data::Empty` if outside the used range
pub fn cell(range: &Range<Data>, row: u32, col: u32) -> Data {
    range.get_value((row, col)).cloned().unwrap_or(Data::Empty)
}

/// All cells of a range, row by row
pub fn grid_cells(range: &Range<Data>) -> Vec<Vec<Data>> {
    range.rows().map(|row| row.to_vec()).collect()
}

pub fn assert_number(range: &Range<Data>, row: u32, col: u32, expected: f64) {
    assert_eq!(
        cell(range, row, col),
        Data::Float(expected),
        "cell ({row}, {col})"
    );
}

pub fn assert_text(range: &Range<Data>, row: u32, col: u32, expected: &str) {
    assert_eq!(
        cell(range, row, col),
        Data::String(expected.to_string()),
        "cell ({row}, {col})"
    );
}

pub fn assert_blank(range: &Range<Data>, row: u32, col: u32) {
    assert_eq!(cell(range, row, col), Data::Empty, "cell ({row}, {col})");
}

/// Assert the numbered grid matches `expected`, where 0 means blank
pub fn assert_grid_numbers(range: &Range<Data>, expected: &[&[u32]]) {
    for (y, row) in expected.iter().enumerate() {
        for (x, &number) in row.iter().enumerate() {
            if number == 0 {
                assert_blank(range, y as u32, x as u32);
            } else {
                assert_number(range, y as u32, x as u32, f64::from(number));
            }
        }
    }
}

/// Assert the legend lines for a grid of `width` columns
pub fn assert_legend(range: &Range<Data>, width: u32, names: &[&str]) {
    for (i, name) in names.iter().enumerate() {
        let number = i as u32 + 1;
        let row = number + 3;
        assert_number(range, row, width + 1, f64::from(number));
        assert_text(range, row, width + 2, "=");
        assert_text(range, row, width + 3, name);
    }
    // Nothing after the last legend line
    let after = names.len() as u32 + 4;
    assert_blank(range, after, width + 1);
}
