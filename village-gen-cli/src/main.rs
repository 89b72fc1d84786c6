use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing::info;
use tracing_subscriber::EnvFilter;
use village_gen_core::{GenerationConfig, OutputFormat, available_types, generate};

/// Generate a village name and NPC residents from JSON data files.
///
/// Place roots are read from `<data-dir>/plname_<place-type>.json`,
/// resident names from `<data-dir>/name_<name-type>.json`.
#[derive(Parser, Debug)]
#[command(name = "village-gen", version)]
struct Args {
    /// Place type (default|normal|basic|nordic|...)
    #[arg(long, env = "VILLAGE_GEN_PLACE_TYPE", default_value = "default")]
    place_type: String,

    /// Name type (default|normal|basic|nordic|...)
    #[arg(long, env = "VILLAGE_GEN_NAME_TYPE", default_value = "default")]
    name_type: String,

    /// Number of male residents
    #[arg(long, default_value_t = 5)]
    num_male: usize,

    /// Number of female residents
    #[arg(long, default_value_t = 5)]
    num_female: usize,

    /// Minimum number of roots in the place name
    #[arg(long, default_value_t = 2)]
    min_roots: usize,

    /// Maximum number of roots in the place name
    #[arg(long, default_value_t = 3)]
    max_roots: usize,

    /// Random seed for reproducible output
    #[arg(long, env = "VILLAGE_GEN_SEED")]
    seed: Option<u64>,

    /// Directory containing plname_*.json and name_*.json
    #[arg(long, env = "VILLAGE_GEN_DATA_DIR", default_value = ".")]
    data_dir: PathBuf,

    /// Output format (text|json|csv)
    #[arg(long, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write the result to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// List the place types found in the data directory and exit
    #[arg(long)]
    list_types: bool,

    /// Log more (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn to_config(&self) -> GenerationConfig {
        GenerationConfig {
            place_type: self.place_type.clone(),
            name_type: self.name_type.clone(),
            num_male: self.num_male,
            num_female: self.num_female,
            min_roots: self.min_roots,
            max_roots: self.max_roots,
            seed: self.seed,
            data_dir: self.data_dir.clone(),
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so that stdout only carries the generated output.
fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<()> {
    if args.list_types {
        let tags = available_types(&args.data_dir)
            .with_context(|| format!("Failed to list types in {}", args.data_dir.display()))?;
        for tag in tags {
            println!("{tag}");
        }
        return Ok(());
    }

    let bundle = generate(args.to_config())?;
    let rendered = render(args.format, &bundle)?;

    match &args.output {
        Some(path) => {
            fs::write(path, &rendered).with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), format = %args.format, "exported bundle");
        }
        None => print!("{rendered}"),
    }

    Ok(())
}

/// Renders the bundle, always ending with a line break.
fn render(format: OutputFormat, bundle: &village_gen_core::GeneratedBundle) -> Result<String> {
    let mut rendered = format.render(bundle).context("Failed to render output")?;
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    Ok(rendered)
}
