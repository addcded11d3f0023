use clap::ValueEnum;
use color_grid::{ColorCount, DistanceMetric, ReductionStrategy};
use image::imageops::FilterType;
use serde::Deserialize;
use std::path::PathBuf;

use super::language::Language;

/// Interpolation filter used when shrinking the image
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResampleFilter {
    Nearest,
    #[default]
    Bilinear,
    Bicubic,
    Gaussian,
    Lanczos,
}

impl ResampleFilter {
    pub fn filter_type(self) -> FilterType {
        match self {
            ResampleFilter::Nearest => FilterType::Nearest,
            ResampleFilter::Bilinear => FilterType::Triangle,
            ResampleFilter::Bicubic => FilterType::CatmullRom,
            ResampleFilter::Gaussian => FilterType::Gaussian,
            ResampleFilter::Lanczos => FilterType::Lanczos3,
        }
    }
}

/// Color distance used to find the nearest table entry
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Squared Euclidean distance on 8-bit RGB
    #[default]
    Rgb,
    /// Squared Euclidean distance in Oklab
    Oklab,
}

impl From<Metric> for DistanceMetric {
    fn from(metric: Metric) -> Self {
        match metric {
            Metric::Rgb => DistanceMetric::Rgb,
            Metric::Oklab => DistanceMetric::Oklab,
        }
    }
}

/// How the reduced color subset is chosen
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// The colors covering the most pixels
    #[default]
    MaxCoverage,
    /// The first colors of the table
    TablePrefix,
}

impl From<Strategy> for ReductionStrategy {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::MaxCoverage => ReductionStrategy::MaxCoverage,
            Strategy::TablePrefix => ReductionStrategy::TablePrefix,
        }
    }
}

/// Everything a single conversion needs
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Requested width in cells; validated against the image at resize time
    pub width: Option<i64>,
    pub colors: ColorCount,
    pub filter: ResampleFilter,
    pub metric: Metric,
    pub strategy: Strategy,
    pub language: Language,
    /// Explicit output path instead of `<image>.xlsx`
    pub output: Option<PathBuf>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            width: None,
            colors: ColorCount::full(),
            filter: ResampleFilter::default(),
            metric: Metric::default(),
            strategy: Strategy::default(),
            language: Language::english(),
            output: None,
        }
    }
}

/// Turn a requested color count into a [`ColorCount`], warning and using the
/// full table when it is out of range.
pub fn resolve_colors(requested: Option<i64>) -> ColorCount {
    match requested {
        None => ColorCount::full(),
        Some(k) => ColorCount::new(k).unwrap_or_else(|e| {
            tracing::warn!(requested = k, %e, "Ignoring color count, using all colors");
            ColorCount::full()
        }),
    }
}
