use std::path::{Path, PathBuf};

use clap::{ArgAction, Args, Parser, Subcommand};
use logokit_core::{
    BrandGroup, ExitStatus, OperationResult, ProcessOptions, group_by_brand, validate_names,
};
use logokit_store::{Destination, LogoLibrary, ProjectConfig, process_batch};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const PACKAGE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// How results are printed.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// A JSON document on stdout.
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "logokit", version = PACKAGE_VERSION)]
#[command(about = "Copy SVG brand logos from the bundled library into your project")]
struct Cli {
    /// Increase log output (-v for info, -vv for debug). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Copy logos (and their variants) into the project.
    Add(AddArgs),
    /// List logos available in the library.
    List(ListArgs),
    /// Show or change the saved project settings.
    Config(ConfigArgs),
}

#[derive(Debug, Args)]
struct AddArgs {
    /// Brand names to copy (e.g. github vercel apple-music).
    #[arg(required = true)]
    names: Vec<String>,
    /// Only copy `_dark` variants (brands without variants are still copied).
    #[arg(long)]
    dark: bool,
    /// Only copy `_light` variants.
    #[arg(long)]
    light: bool,
    /// Only copy `_wordmark` variants.
    #[arg(long)]
    wordmark: bool,
    /// Destination directory, relative to the project root.
    #[arg(long)]
    dir: Option<PathBuf>,
    /// Remember --dir in the project config for later runs.
    #[arg(long, requires = "dir")]
    save_dir: bool,
    /// Logo library directory (overrides LOGOKIT_LIBRARY and the config).
    #[arg(long)]
    library: Option<PathBuf>,
    /// Project root.
    #[arg(long, default_value = ".")]
    project: PathBuf,
    /// Output format.
    #[arg(long, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Args)]
struct ListArgs {
    /// Only show brands whose name contains this text.
    filter: Option<String>,
    /// Logo library directory (overrides LOGOKIT_LIBRARY and the config).
    #[arg(long)]
    library: Option<PathBuf>,
    /// Project root.
    #[arg(long, default_value = ".")]
    project: PathBuf,
    /// Output format.
    #[arg(long, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Args)]
struct ConfigArgs {
    /// Project root.
    #[arg(long, default_value = ".", global = true)]
    project: PathBuf,
    #[command(subcommand)]
    operation: ConfigOperation,
}

#[derive(Debug, Subcommand)]
enum ConfigOperation {
    /// Print the saved settings and the effective destination.
    Show,
    /// Save a custom destination directory.
    SetDir(SetDirArgs),
    /// Forget the saved destination directory.
    ClearDir,
}

#[derive(Debug, Args)]
struct SetDirArgs {
    /// Destination directory, relative to the project root.
    path: PathBuf,
}

#[derive(Debug, Serialize)]
struct BrandListing<'a> {
    brand: &'a str,
    identifiers: &'a [String],
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let result = match cli.command {
        Command::Add(args) => run_add(args),
        Command::List(args) => run_list(args),
        Command::Config(args) => run_config(args),
    };

    match result {
        Ok(status) => std::process::exit(status.code()),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(ExitStatus::AllFailed.code());
        }
    }
}

/// Filter used when `RUST_LOG` is unset.
fn default_log_level(verbose: u8, quiet: bool) -> &'static str {
    match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = default_log_level(verbose, quiet);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn run_add(args: AddArgs) -> Result<ExitStatus, String> {
    let validation = validate_names(&args.names);
    let rejected: Vec<OperationResult> = validation
        .errors
        .iter()
        .map(|e| OperationResult::failure(e.name.clone(), e.error.to_string()))
        .collect();

    if !validation.has_valid() {
        match args.format {
            OutputFormat::Text => {
                print_failures(&rejected);
            }
            OutputFormat::Json => print_json(&rejected)?,
        }
        return Err("no valid logo names given".to_string());
    }

    let config = load_config(&args.project)?;
    let library = locate_library(args.library.as_deref(), &config, &args.project)?;
    // Without a listing nothing can be resolved, so this aborts the whole run.
    library.list().map_err(|err| err.to_string())?;

    let destination = Destination::resolve(&args.project, args.dir.as_deref(), &config);
    if args.save_dir {
        if let Some(dir) = &args.dir {
            save_output_dir(&args.project, config.clone(), dir)?;
        }
    }

    let options = ProcessOptions {
        dark: args.dark,
        light: args.light,
        wordmark: args.wordmark,
    };
    info!(
        names = validation.valid_names.len(),
        library = %library.root().display(),
        destination = %destination.dir().display(),
        "adding logos"
    );

    let processed = process_batch(&validation.valid_names, &options, &library, &destination);
    let all: Vec<OperationResult> = rejected.into_iter().chain(processed).collect();

    match args.format {
        OutputFormat::Text => print_results(&all, &destination),
        OutputFormat::Json => print_json(&all)?,
    }

    Ok(ExitStatus::from_results(&all))
}

fn run_list(args: ListArgs) -> Result<ExitStatus, String> {
    let config = load_config(&args.project)?;
    let library = locate_library(args.library.as_deref(), &config, &args.project)?;
    let identifiers = library.list().map_err(|err| err.to_string())?;

    let needle = args.filter.as_deref().map(str::to_lowercase);
    let groups: Vec<BrandGroup> = group_by_brand(&identifiers)
        .into_iter()
        .filter(|group| match &needle {
            Some(needle) => group.brand.to_lowercase().contains(needle),
            None => true,
        })
        .collect();
    debug!(groups = groups.len(), "grouped library");

    match args.format {
        OutputFormat::Text => {
            for group in &groups {
                let variants: Vec<&str> = group
                    .identifiers
                    .iter()
                    .filter(|id| !id.eq_ignore_ascii_case(&group.brand))
                    .map(String::as_str)
                    .collect();
                if variants.is_empty() {
                    println!("{}", group.brand);
                } else {
                    println!("{}  ({})", group.brand, variants.join(", "));
                }
            }
            let total: usize = groups.iter().map(|g| g.identifiers.len()).sum();
            println!(
                "\n{} brand(s), {total} logo file(s) in '{}'.",
                groups.len(),
                library.root().display()
            );
        }
        OutputFormat::Json => {
            let listing: Vec<BrandListing<'_>> = groups
                .iter()
                .map(|group| BrandListing {
                    brand: &group.brand,
                    identifiers: &group.identifiers,
                })
                .collect();
            print_json(&listing)?;
        }
    }

    if groups.is_empty() {
        Ok(ExitStatus::AllFailed)
    } else {
        Ok(ExitStatus::Success)
    }
}

fn run_config(args: ConfigArgs) -> Result<ExitStatus, String> {
    let path = ProjectConfig::file_path(&args.project);
    let mut config = load_config(&args.project)?;

    match args.operation {
        ConfigOperation::Show => {
            println!("Config file: {}", path.display());
            match &config.output_dir {
                Some(dir) => println!("output_dir: {}", dir.display()),
                None => println!("output_dir: (not set)"),
            }
            match &config.library_dir {
                Some(dir) => println!("library_dir: {}", dir.display()),
                None => println!("library_dir: (not set)"),
            }
            let destination = Destination::resolve(&args.project, None, &config);
            println!(
                "Effective destination: {} ({:?})",
                destination.dir().display(),
                destination.source()
            );
        }
        ConfigOperation::SetDir(set) => {
            save_output_dir(&args.project, config, &set.path)?;
            println!("Saved output_dir '{}' to '{}'.", set.path.display(), path.display());
        }
        ConfigOperation::ClearDir => {
            if config.clear_output_dir() {
                config
                    .save(&path)
                    .map_err(|err| format!("Failed to write '{}': {err}", path.display()))?;
                println!("Cleared output_dir in '{}'.", path.display());
            } else {
                println!("No output_dir was set.");
            }
        }
    }

    Ok(ExitStatus::Success)
}

fn load_config(project: &Path) -> Result<ProjectConfig, String> {
    let path = ProjectConfig::file_path(project);
    ProjectConfig::load_or_default(&path)
        .map_err(|err| format!("Failed to read '{}': {err}", path.display()))
}

fn save_output_dir(project: &Path, mut config: ProjectConfig, dir: &Path) -> Result<(), String> {
    let path = ProjectConfig::file_path(project);
    config.set_output_dir(dir);
    config
        .save(&path)
        .map_err(|err| format!("Failed to write '{}': {err}", path.display()))
}

/// Library precedence: explicit flag, `LOGOKIT_LIBRARY`, project config,
/// next to the executable, then the bundled directory.
fn locate_library(
    explicit: Option<&Path>,
    config: &ProjectConfig,
    project: &Path,
) -> Result<LogoLibrary, String> {
    if let Some(path) = explicit {
        return Ok(LogoLibrary::new(path));
    }

    let mut builder = LogoLibrary::builder().from_env();
    if let Some(dir) = &config.library_dir {
        builder = builder.from_dir(project.join(dir));
    }
    builder
        .next_to_executable()
        .bundled()
        .build()
        .map_err(|err| err.to_string())
}

fn print_results(results: &[OperationResult], destination: &Destination) {
    let mut added = 0usize;
    let mut skipped = 0usize;

    for result in results {
        if !result.success {
            continue;
        }
        if result.is_skipped() {
            skipped += 1;
            println!(
                "  - {}.svg skipped ({})",
                result.logo_name,
                result.reason.as_deref().unwrap_or("skipped")
            );
        } else {
            added += 1;
            println!("  + {}.svg", result.logo_name);
        }
    }

    let failed = print_failures(results);

    println!(
        "Added {added} logo(s) to '{}' ({skipped} skipped, {failed} failed).",
        destination.dir().display()
    );
}

/// Prints failed results to stderr and returns how many there were.
fn print_failures(results: &[OperationResult]) -> usize {
    let failures: Vec<&OperationResult> = results.iter().filter(|r| !r.success).collect();
    if failures.is_empty() {
        return 0;
    }

    eprintln!("\nFailures:");
    for result in &failures {
        eprintln!(
            "  {}: {}",
            result.logo_name,
            result.error.as_deref().unwrap_or("unknown error")
        );
    }
    failures.len()
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), String> {
    let raw = serde_json::to_string_pretty(value)
        .map_err(|err| format!("Failed to serialize output: {err}"))?;
    println!("{raw}");
    Ok(())
}
