//! Captions and color names in the user's language

use color_grid::{ColorTable, MAX_TABLE_LEN};

use crate::assets::{normalize_tag, AssetLoader, BUILTIN_LANGUAGE};
use crate::error::LanguageError;

/// Number of caption lines at the top of a language file.
pub const CAPTION_LINES: usize = 3;

/// The three texts written into the workbook
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captions {
    /// Instructions shown above the legend
    pub instructions: String,
    /// Name of the numbered sheet
    pub grid_sheet: String,
    /// Name of the color-filled sheet
    pub painted_sheet: String,
}

/// A resolved language: captions plus one display name per table color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    tag: String,
    captions: Captions,
    color_names: Vec<String>,
}

impl Language {
    /// The built-in English texts, using the standard table's names.
    pub fn english() -> Self {
        let table = ColorTable::standard();
        Self {
            tag: BUILTIN_LANGUAGE.to_string(),
            captions: Captions {
                instructions:
                    "Paint the boxes with the appropriate colors to reveal the hidden image."
                        .to_string(),
                grid_sheet: "Draw the pixels".to_string(),
                painted_sheet: "Painted picture".to_string(),
            },
            color_names: table.iter().map(|(_, name, _)| name.to_string()).collect(),
        }
    }

    /// Parse a language file: 3 captions, then one color name per line.
    pub fn parse(tag: &str, text: &str) -> Result<Self, LanguageError> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        // `lines` drops a single final line ending and nothing more
        let lines: Vec<&str> = text.lines().collect();

        let expected = CAPTION_LINES + MAX_TABLE_LEN;
        if lines.len() != expected {
            return Err(LanguageError::InvalidLineCount {
                expected,
                found: lines.len(),
            });
        }

        Ok(Self {
            tag: tag.to_string(),
            captions: Captions {
                instructions: lines[0].to_string(),
                grid_sheet: lines[1].to_string(),
                painted_sheet: lines[2].to_string(),
            },
            color_names: lines[CAPTION_LINES..]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        })
    }

    /// Resolve a language tag, falling back to English with a warning.
    pub fn load(loader: &AssetLoader, tag: &str) -> Self {
        match Self::try_load(loader, tag) {
            Ok(language) => {
                tracing::debug!(tag = %language.tag, "Using language");
                language
            }
            Err(e) => {
                tracing::warn!(tag, %e, "Falling back to English");
                Self::english()
            }
        }
    }

    fn try_load(loader: &AssetLoader, tag: &str) -> Result<Self, LanguageError> {
        let tag = normalize_tag(tag)?;
        if tag == BUILTIN_LANGUAGE {
            return Ok(Self::english());
        }
        let text = loader.read_language_string(&tag)?;
        Self::parse(&tag, &text)
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn captions(&self) -> &Captions {
        &self.captions
    }

    /// Display name for a table index
    pub fn color_name(&self, idx: usize) -> &str {
        self.color_names.get(idx).map(String::as_str).unwrap_or("")
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::english()
    }
}
