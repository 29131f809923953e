// File: crates/demo/src/main.rs
// Summary: CLI that fetches (or reads) the cyclist dataset once and writes the scatter chart as SVG, HTML and PNG.

use anyhow::{Context, Result};
use clap::Parser;
use scatter_core::{theme, ChartOptions, Driver, RenderOptions, Rendered};
use std::path::{Path, PathBuf};
use tracing_subscriber::{prelude::*, EnvFilter};

#[derive(Parser)]
#[command(
    name = "doping-scatter",
    version,
    about = "Scatter plot of doping allegations in professional bicycle racing",
    after_help = "Examples:
  doping-scatter                                 Fetch the default dataset, write SVG + HTML
  doping-scatter --png --theme dark              Also rasterise to PNG with the dark theme
  doping-scatter --input cyclists.csv            Use a local CSV (or JSON) file instead
  doping-scatter --config chart.json             Override sizes, margins, labels"
)]
struct Args {
    /// Dataset URL (JSON array of records)
    #[arg(long, default_value = scatter_core::types::DATASET_URL)]
    url: String,

    /// Local JSON or CSV dataset; takes precedence over --url
    #[arg(short, long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Output directory
    #[arg(short, long, default_value = "target/out", value_name = "DIR")]
    out_dir: PathBuf,

    /// JSON file with chart options (width, height, insets, dot_radius, title, y_label, theme)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Theme preset (light, dark); overrides the config file
    #[arg(long)]
    theme: Option<String>,

    /// Also write a PNG rendering
    #[arg(long)]
    png: bool,

    /// Log level when RUST_LOG is not set
    #[arg(long, default_value = "info", value_name = "LEVEL")]
    log_level: String,
}

fn init_tracing(level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))
}

fn load_options(path: Option<&Path>) -> Result<ChartOptions> {
    let Some(path) = path else { return Ok(ChartOptions::default()) };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config '{}'", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config '{}'", path.display()))
}

fn write_outputs(out: &Rendered, dir: &Path, png: Option<RenderOptions>) -> Result<()> {
    std::fs::create_dir_all(dir).with_context(|| format!("creating '{}'", dir.display()))?;

    let svg_path = dir.join("scatter.svg");
    std::fs::write(&svg_path, out.scene.to_svg())
        .with_context(|| format!("writing '{}'", svg_path.display()))?;
    println!("Wrote {}", svg_path.display());

    let html_path = dir.join("scatter.html");
    std::fs::write(&html_path, out.scene.to_html())
        .with_context(|| format!("writing '{}'", html_path.display()))?;
    println!("Wrote {}", html_path.display());

    if let Some(opts) = png {
        let png_path = dir.join("scatter.png");
        out.chart.render_to_png(&opts, &png_path)?;
        println!("Wrote {}", png_path.display());
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level)?;

    let mut options = load_options(args.config.as_deref())?;
    if let Some(name) = &args.theme {
        options.theme = name.clone();
    }
    let theme = theme::find(&options.theme);
    tracing::debug!(theme = theme.name, width = options.width, height = options.height, "options");

    let mut driver = Driver::new(options);
    let rendered = match &args.input {
        Some(path) => driver.run_file(path),
        None => driver.run(&args.url).await,
    };

    // The driver has already logged the failure.
    let Some(out) = rendered else { std::process::exit(1) };

    let alleged = out.records.iter().filter(|r| r.has_allegation()).count();
    tracing::info!(records = out.records.len(), alleged, "dataset rendered");

    let png = args.png.then(|| RenderOptions { theme, ..RenderOptions::default() });
    write_outputs(&out, &args.out_dir, png)
}
