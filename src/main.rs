use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use swatch_core::{calculate_contrast, select_text_colors, Rgba, TextColorPolicy};
use swatchbar::assets::{AssetCategory, AssetLoader};
use swatchbar::models::{AppConfig, Swatch};
use swatchbar::services::{ThemePipeline, ThemeRequest};

#[derive(Parser)]
#[command(name = "swatchbar")]
#[command(about = "Generate readable i3 color themes from an image")]
struct Cli {
    /// Config file (overrides CONFIG_FILE)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the palette of an image with text colors for each swatch
    Palette {
        /// PNG image to sample
        image: PathBuf,

        /// Number of swatches (default from config)
        #[arg(short, long)]
        size: Option<usize>,

        /// Text color policy: alpha-search or binary-choice
        #[arg(short, long)]
        policy: Option<TextColorPolicy>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Render an i3 theme for an image
    Theme {
        /// PNG image to sample
        image: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Template name (default from config)
        #[arg(short, long)]
        template: Option<String>,

        /// Text color policy: alpha-search or binary-choice
        #[arg(short, long)]
        policy: Option<TextColorPolicy>,
    },
    /// Show contrast and text colors for a single color
    Contrast {
        /// Background color as #RGB, #RRGGBB or #RRGGBBAA
        color: Rgba,

        /// Text color policy: alpha-search or binary-choice
        #[arg(short, long)]
        policy: Option<TextColorPolicy>,
    },
    /// Extract embedded assets to filesystem for customization
    Init {
        /// Extract theme templates
        #[arg(long)]
        templates: bool,

        /// Extract config.yaml
        #[arg(long)]
        config_file: bool,

        /// Extract all assets
        #[arg(long)]
        all: bool,

        /// Overwrite existing files
        #[arg(long, short)]
        force: bool,

        /// List embedded assets without extracting
        #[arg(long)]
        list: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "swatchbar=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(std::io::stderr))
        .init();

    let assets = AssetLoader::from_env().with_config_file(cli.config);

    match cli.command {
        Some(Commands::Palette {
            image,
            size,
            policy,
            json,
        }) => run_palette_command(assets, image, size, policy, json),
        Some(Commands::Theme {
            image,
            output,
            template,
            policy,
        }) => run_theme_command(assets, image, output, template, policy),
        Some(Commands::Contrast { color, policy }) => run_contrast_command(&assets, color, policy),
        Some(Commands::Init {
            templates,
            config_file,
            all,
            force,
            list,
        }) => run_init_command(&assets, templates, config_file, all, force, list),
        None => {
            run_status_command(&assets);
            Ok(())
        }
    }
}

fn pipeline(assets: AssetLoader) -> ThemePipeline {
    let assets = Arc::new(assets);
    let config = Arc::new(AppConfig::load_from_assets(&assets));
    ThemePipeline::new(config, assets)
}

/// Print swatches with their text colors
fn run_palette_command(
    assets: AssetLoader,
    image: PathBuf,
    size: Option<usize>,
    policy: Option<TextColorPolicy>,
    json: bool,
) -> anyhow::Result<()> {
    let pipeline = pipeline(assets);
    let request = ThemeRequest {
        size,
        policy,
        ..Default::default()
    };
    let swatches = pipeline.swatches(&image, &request)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&swatches)?);
        return Ok(());
    }

    println!("{:<9} {:<11} {:>6} {:<11} {:>6}", "swatch", "title", "", "body", "");
    for Swatch {
        color,
        title,
        body,
        title_contrast,
        body_contrast,
    } in &swatches
    {
        println!("{color:<9} {title:<11} {title_contrast:>6.2} {body:<11} {body_contrast:>6.2}");
    }
    Ok(())
}

/// Render the theme to stdout or a file
fn run_theme_command(
    assets: AssetLoader,
    image: PathBuf,
    output: Option<PathBuf>,
    template: Option<String>,
    policy: Option<TextColorPolicy>,
) -> anyhow::Result<()> {
    let pipeline = pipeline(assets);
    let request = ThemeRequest {
        policy,
        template,
        ..Default::default()
    };
    let result = pipeline.generate(&image, &request)?;

    match output {
        Some(path) => {
            std::fs::write(&path, &result.rendered)?;
            eprintln!(
                "Wrote {} ({} swatches)",
                path.display(),
                result.palette.len()
            );
        }
        None => print!("{}", result.rendered),
    }
    Ok(())
}

/// Show how white and black text fare on one color
fn run_contrast_command(
    assets: &AssetLoader,
    color: Rgba,
    policy: Option<TextColorPolicy>,
) -> anyhow::Result<()> {
    let config = AppConfig::load_from_assets(assets);
    let policy = policy.unwrap_or_else(|| config.text.policy());
    let options = config.text.options();

    let white = calculate_contrast(Rgba::WHITE, color)?;
    let black = calculate_contrast(Rgba::BLACK, color)?;
    let text = select_text_colors(color, policy, &options)?;

    println!("background  {color}");
    println!("white       {white:.2}:1");
    println!("black       {black:.2}:1");
    println!("policy      {policy}");
    println!(
        "title       {} ({:.2}:1, min {})",
        text.title,
        calculate_contrast(text.title, color)?,
        options.min_contrast_title
    );
    println!(
        "body        {} ({:.2}:1, min {})",
        text.body,
        calculate_contrast(text.body, color)?,
        options.min_contrast_body
    );
    Ok(())
}

/// Extract embedded assets to filesystem
fn run_init_command(
    loader: &AssetLoader,
    templates: bool,
    config: bool,
    all: bool,
    force: bool,
    list: bool,
) -> anyhow::Result<()> {
    if list {
        println!("Embedded assets:\n");
        println!("Templates:");
        for f in AssetLoader::list_embedded(AssetCategory::Templates) {
            println!("  {f}");
        }
        println!("\nConfig:");
        for f in AssetLoader::list_embedded(AssetCategory::Config) {
            println!("  {f}");
        }
        return Ok(());
    }

    // Determine which categories to extract
    let mut categories = Vec::new();
    if all || templates {
        categories.push(AssetCategory::Templates);
    }
    if all || config {
        categories.push(AssetCategory::Config);
    }

    if categories.is_empty() {
        eprintln!("No categories specified. Use --all, --templates, or --config-file");
        eprintln!("\nRun 'swatchbar init --list' to see embedded assets.");
        std::process::exit(1);
    }

    let report = loader.init(&categories, force)?;

    if !report.written.is_empty() {
        println!("Extracted {} files:", report.written.len());
        for f in &report.written {
            println!("  + {f}");
        }
    }
    if !report.skipped.is_empty() {
        println!(
            "\nSkipped {} existing files (use --force to overwrite):",
            report.skipped.len()
        );
        for f in &report.skipped {
            println!("  - {f}");
        }
    }

    if report.written.is_empty() && report.skipped.is_empty() {
        println!("No files to extract.");
    }

    Ok(())
}

/// Display version and configuration information
fn run_status_command(loader: &AssetLoader) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let config_file = std::env::var("CONFIG_FILE").ok();
    let templates_dir = std::env::var("TEMPLATES_DIR").ok();

    println!("Swatchbar v{VERSION}");
    println!("Readable i3 color themes from an image\n");

    println!("Environment Variables:");
    println!(
        "  CONFIG_FILE   = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  TEMPLATES_DIR = {}",
        templates_dir.as_deref().unwrap_or("(not set)")
    );

    let config = AppConfig::load_from_assets(loader);
    println!("\nConfiguration:");
    println!("  palette size  = {}", config.palette.size);
    println!("  text policy   = {}", config.text.policy());
    println!(
        "  min contrast  = body {}, title {}",
        config.text.min_contrast_body, config.text.min_contrast_title
    );
    println!("  template      = {}", config.theme.template);

    println!("\nTemplates:");
    for name in loader.list_templates() {
        println!("  {name}");
    }

    println!("\nUsage:");
    println!("  swatchbar palette <IMAGE>   Print swatches and text colors");
    println!("  swatchbar theme <IMAGE>     Render an i3 theme");
    println!("  swatchbar contrast <COLOR>  Inspect one color");
    println!("  swatchbar init --all        Extract embedded assets");
}
