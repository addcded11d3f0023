//! Language asset loading with embedded fallbacks
//!
//! Language files (`<tag>.txt`) ship embedded in the binary. A languages
//! directory may be configured; files found there take priority over the
//! embedded copies, which is how users add or fix translations.

use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::error::LanguageError;

/// Embedded language files
#[derive(RustEmbed)]
#[folder = "languages/"]
#[include = "*.txt"]
struct EmbeddedLanguages;

/// Tag of the built-in language, which has no file.
pub const BUILTIN_LANGUAGE: &str = "en";

/// Language loader with filesystem override
pub struct AssetLoader {
    /// External languages directory (from flag, config or PIXELIAZO_LANGUAGES_DIR)
    languages_dir: Option<PathBuf>,
}

impl AssetLoader {
    /// Create a new asset loader
    ///
    /// With `None`, embedded languages are used exclusively.
    pub fn new(languages_dir: Option<PathBuf>) -> Self {
        Self { languages_dir }
    }

    pub fn languages_dir(&self) -> Option<&PathBuf> {
        self.languages_dir.as_ref()
    }

    /// Read the raw bytes of a language file.
    ///
    /// Tries the configured directory first, then the embedded assets.
    pub fn read_language(&self, tag: &str) -> Result<Cow<'static, [u8]>, LanguageError> {
        let tag = normalize_tag(tag)?;
        let file_name = format!("{tag}.txt");

        if let Some(ref dir) = self.languages_dir {
            let full_path = dir.join(&file_name);
            if full_path.exists() {
                tracing::debug!(path = %full_path.display(), "Loading language from filesystem");
                return Ok(Cow::Owned(fs::read(&full_path)?));
            }
        }

        EmbeddedLanguages::get(&file_name)
            .map(|f| {
                tracing::debug!(file = %file_name, "Loading language from embedded assets");
                f.data
            })
            .ok_or(LanguageError::NotFound(tag))
    }

    /// Read a language file as a UTF-8 string
    pub fn read_language_string(&self, tag: &str) -> Result<String, LanguageError> {
        let bytes = self.read_language(tag)?;
        String::from_utf8(bytes.into_owned())
            .map_err(|e| LanguageError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
    }

    /// Tags of all available languages (built-in, embedded and external)
    pub fn list_languages(&self) -> Vec<String> {
        let mut tags: BTreeSet<String> = Self::list_embedded().into_iter().collect();
        tags.insert(BUILTIN_LANGUAGE.to_string());

        if let Some(ref dir) = self.languages_dir {
            if let Ok(entries) = fs::read_dir(dir) {
                for entry in entries.flatten() {
                    let path = entry.path();
                    if path.extension().and_then(|e| e.to_str()) != Some("txt") {
                        continue;
                    }
                    if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                        if let Ok(tag) = normalize_tag(stem) {
                            tags.insert(tag);
                        }
                    }
                }
            }
        }

        tags.into_iter().collect()
    }

    /// Tags of the embedded language files
    pub fn list_embedded() -> Vec<String> {
        let mut tags: Vec<String> = EmbeddedLanguages::iter()
            .filter_map(|f| f.strip_suffix(".txt").map(str::to_string))
            .collect();
        tags.sort();
        tags
    }
}

/// Lower-case a tag and reject anything that is not a plain file stem.
pub fn normalize_tag(tag: &str) -> Result<String, LanguageError> {
    let tag = tag.trim();
    let valid = !tag.is_empty()
        && tag
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !valid {
        return Err(LanguageError::InvalidTag(tag.to_string()));
    }
    Ok(tag.to_ascii_lowercase())
}
