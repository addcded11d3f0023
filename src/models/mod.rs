pub mod config;
pub mod language;
pub mod options;

pub use config::AppConfig;
pub use language::{Captions, Language};
pub use options::{resolve_colors, ConvertOptions, Metric, ResampleFilter, Strategy};
