use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pixeliazo::assets::{AssetLoader, BUILTIN_LANGUAGE};
use pixeliazo::error::ConvertError;
use pixeliazo::models::{
    resolve_colors, AppConfig, ConvertOptions, Language, Metric, ResampleFilter, Strategy,
};
use pixeliazo::services::Converter;

/// Exit code for failures other than image reading and workbook writing.
const EXIT_INTERNAL: u8 = 3;

#[derive(Parser)]
#[command(name = "pixeliazo", version)]
#[command(about = "Turn an image into a paint-by-numbers spreadsheet")]
struct Cli {
    /// Image file to convert (PNG, JPEG, GIF, BMP)
    #[arg(required_unless_present = "list_languages")]
    image: Option<PathBuf>,

    /// Width in cells; only shrinks, aspect ratio is kept
    #[arg(short, long, allow_negative_numbers = true)]
    width: Option<i64>,

    /// Number of colors to use (2-32)
    #[arg(short, long, allow_negative_numbers = true)]
    colors: Option<i64>,

    /// Language tag for captions and color names (e.g. "en", "es", "el")
    #[arg(short, long)]
    lang: Option<String>,

    /// Resampling filter used when shrinking
    #[arg(short, long, value_enum)]
    filter: Option<ResampleFilter>,

    /// Color distance used to pick the nearest named color
    #[arg(long, value_enum)]
    metric: Option<Metric>,

    /// How to choose the colors when reducing
    #[arg(long, value_enum)]
    strategy: Option<Strategy>,

    /// Output workbook path (default: <IMAGE>.xlsx)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// YAML file with default settings (or PIXELIAZO_CONFIG)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory with extra <tag>.txt language files (or PIXELIAZO_LANGUAGES_DIR)
    #[arg(long)]
    languages_dir: Option<PathBuf>,

    /// List available languages and exit
    #[arg(long)]
    list_languages: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pixeliazo=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Usage errors must not collide with the workbook-write exit code
            let code = if e.use_stderr() { EXIT_INTERNAL } else { 0 };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            let code = e
                .downcast_ref::<ConvertError>()
                .map(ConvertError::exit_code)
                .unwrap_or(EXIT_INTERNAL);
            ExitCode::from(code)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = cli
        .config
        .clone()
        .or_else(|| std::env::var("PIXELIAZO_CONFIG").ok().map(PathBuf::from));
    let config = config_path
        .as_deref()
        .map(AppConfig::load)
        .unwrap_or_default();

    let languages_dir = cli
        .languages_dir
        .clone()
        .or_else(|| config.languages_dir.clone())
        .or_else(|| {
            std::env::var("PIXELIAZO_LANGUAGES_DIR")
                .ok()
                .map(PathBuf::from)
        });
    let asset_loader = AssetLoader::new(languages_dir);

    if cli.list_languages {
        for tag in asset_loader.list_languages() {
            println!("{tag}");
        }
        return Ok(());
    }

    let image = cli
        .image
        .clone()
        .context("No image file given")?;
    let options = build_options(&cli, &config, &asset_loader);
    tracing::debug!(?options, "Resolved options");

    Converter::new(options)
        .convert(&image)
        .with_context(|| format!("Failed to convert {}", image.display()))?;
    Ok(())
}

/// Merge command-line flags over config-file values.
fn build_options(cli: &Cli, config: &AppConfig, loader: &AssetLoader) -> ConvertOptions {
    let lang = cli
        .lang
        .as_deref()
        .or(config.lang.as_deref())
        .unwrap_or(BUILTIN_LANGUAGE);

    ConvertOptions {
        width: cli.width.or(config.width),
        colors: resolve_colors(cli.colors.or(config.colors)),
        filter: cli.filter.or(config.filter).unwrap_or_default(),
        metric: cli.metric.or(config.metric).unwrap_or_default(),
        strategy: cli.strategy.or(config.strategy).unwrap_or_default(),
        language: Language::load(loader, lang),
        output: cli.output.clone(),
    }
}
