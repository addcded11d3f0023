use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Error reading image file {}: {source}", .path.display())]
    ImageRead {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Error writing workbook file {}: {source}", .path.display())]
    WorkbookWrite {
        path: PathBuf,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },

    #[error("Mapping error: {0}")]
    Grid(#[from] color_grid::GridError),
}

impl ConvertError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            ConvertError::ImageRead { .. } => 1,
            ConvertError::WorkbookWrite { .. } => 2,
            ConvertError::Grid(_) => 3,
        }
    }
}

#[derive(Debug, Error)]
pub enum LanguageError {
    #[error("Not a valid language file: expected {expected} lines, found {found}")]
    InvalidLineCount { expected: usize, found: usize },

    #[error("Invalid language tag: {0:?}")]
    InvalidTag(String),

    #[error("Language not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_image_read_message_and_exit_code() {
        let error = ConvertError::ImageRead {
            path: PathBuf::from("missing.png"),
            source: image::ImageError::IoError(io::Error::new(
                io::ErrorKind::NotFound,
                "no such file",
            )),
        };
        assert_eq!(
            error.to_string(),
            "Error reading image file missing.png: no such file"
        );
        assert_eq!(error.exit_code(), 1);
    }

    #[test]
    fn test_workbook_write_exit_code() {
        let error = ConvertError::WorkbookWrite {
            path: PathBuf::from("out.xlsx"),
            source: rust_xlsxwriter::XlsxError::IoError(io::Error::other("disk full")),
        };
        assert!(error.to_string().starts_with("Error writing workbook file out.xlsx"));
        assert_eq!(error.exit_code(), 2);
    }

    #[test]
    fn test_grid_error_conversion() {
        let grid_error = color_grid::GridError::DimensionMismatch {
            pixels: 3,
            width: 2,
            height: 2,
        };
        let error: ConvertError = grid_error.into();
        assert!(matches!(error, ConvertError::Grid(_)));
        assert_eq!(error.exit_code(), 3);
        assert_eq!(
            error.to_string(),
            "Mapping error: 3 pixels do not fill a 2x2 grid"
        );
    }

    #[test]
    fn test_language_error_messages() {
        let error = LanguageError::InvalidLineCount {
            expected: 35,
            found: 12,
        };
        assert_eq!(
            error.to_string(),
            "Not a valid language file: expected 35 lines, found 12"
        );
        assert_eq!(
            LanguageError::NotFound("xx".to_string()).to_string(),
            "Language not found: xx"
        );
        assert_eq!(
            LanguageError::InvalidTag("../etc".to_string()).to_string(),
            "Invalid language tag: \"../etc\""
        );
    }
}
