use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use resistor_prep::models::{PipelineConfig, DEFAULT_CONFIG_FILE, DEFAULT_CONFIG_YAML};
use resistor_prep::services::image_store::list_files;
use resistor_prep::services::{LabelParser, Preprocessor};

#[derive(Parser)]
#[command(name = "resistor-prep")]
#[command(about = "Resistor Prep - clean resistor photos and build the color-band label table")]
struct Cli {
    /// Config file (falls back to $CONFIG_FILE, then ./config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Clean raw images into the labelling directory
    Preprocess,
    /// Parse annotation JSON into the dated label CSV
    Labels,
    /// Write the default config.yaml
    Init {
        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "resistor_prep=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_path = cli
        .config
        .or_else(|| std::env::var("CONFIG_FILE").ok().map(PathBuf::from));

    match cli.command {
        Some(Commands::Preprocess) => run_preprocess_command(config_path.as_deref()),
        Some(Commands::Labels) => run_labels_command(config_path.as_deref()),
        Some(Commands::Init { force }) => run_init_command(config_path.as_deref(), force),
        None => run_status_command(config_path.as_deref()),
    }
}

/// Clean every raw image
fn run_preprocess_command(config_path: Option<&Path>) -> anyhow::Result<()> {
    let (config, _) = PipelineConfig::discover(config_path)?;
    let report = Preprocessor::new(&config)?.run()?;

    println!(
        "Cleaned {} images into {}",
        report.processed.len(),
        config.cleaned_dir.display()
    );
    if !report.failures.is_empty() {
        println!("\nSkipped {} images:", report.skipped());
        for (path, e) in &report.failures {
            println!("  - {}: {e}", path.display());
        }
    }
    Ok(())
}

/// Parse annotations into the label CSV
fn run_labels_command(config_path: Option<&Path>) -> anyhow::Result<()> {
    let (config, _) = PipelineConfig::discover(config_path)?;
    let report = LabelParser::new(&config).run()?;

    println!("Wrote {} labels to {}", report.rows, report.output.display());
    if !report.failures.is_empty() {
        println!("\nSkipped {} entries:", report.failures.len());
        for (file, e) in &report.failures {
            println!("  - {file}: {e}");
        }
    }
    Ok(())
}

/// Write the default config file
fn run_init_command(config_path: Option<&Path>, force: bool) -> anyhow::Result<()> {
    let target = config_path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));

    if target.exists() && !force {
        println!(
            "Skipped existing {} (use --force to overwrite)",
            target.display()
        );
        return Ok(());
    }

    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(target, DEFAULT_CONFIG_YAML)?;
    println!("  + {}", target.display());
    Ok(())
}

/// Display configuration and what is on disk
fn run_status_command(config_path: Option<&Path>) -> anyhow::Result<()> {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let (config, source) = PipelineConfig::discover(config_path)?;

    println!("Resistor Prep v{VERSION}");
    println!("Color-band data preparation\n");

    println!("Config: {source}\n");

    // Helper for pluralization
    fn plural(n: usize) -> &'static str {
        if n == 1 {
            "file"
        } else {
            "files"
        }
    }

    fn count(dir: &Path, extension: &str) -> String {
        match list_files(dir, extension) {
            Ok(files) => format!("{} {}", files.len(), plural(files.len())),
            Err(_) => "missing".to_string(),
        }
    }

    let ext = config.extension();
    println!("Directories:");
    println!(
        "  Raw:      {} ({})",
        config.raw_dir.display(),
        count(&config.raw_dir, ext)
    );
    println!(
        "  Cleaned:  {} ({})",
        config.cleaned_dir.display(),
        count(&config.cleaned_dir, ext)
    );
    println!(
        "  Labels:   {} ({})",
        config.labels_dir.display(),
        count(&config.labels_dir, "json")
    );
    println!(
        "  Output:   {} ({})",
        config.output_dir.display(),
        count(&config.output_dir, "csv")
    );

    println!("\nCommands:");
    println!("  resistor-prep preprocess   Clean raw images");
    println!("  resistor-prep labels       Build the label CSV");
    println!("  resistor-prep init         Write the default config.yaml");
    Ok(())
}
