//! baselint CLI
//!
//! Scans source files for web-platform features and reports their Baseline
//! support status.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use baselint_catalog::{Catalog, FeatureDescriptor};
use baselint_core::{ScanConfig, ScanResult, Scanner, Severity};

/// baselint - Baseline support checker for web-platform features
#[derive(Parser)]
#[command(name = "baselint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan files for feature usage
    Check {
        /// File patterns to scan
        #[arg(required = true)]
        patterns: Vec<String>,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Only report features that are not Baseline safe
        #[arg(long)]
        unsafe_only: bool,
    },

    /// Inspect the feature catalog
    Catalog {
        #[command(subcommand)]
        command: CatalogCommands,
    },

    /// Initialize configuration
    Init {
        /// Force overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand)]
enum CatalogCommands {
    /// List all features in the catalog
    List,

    /// Show full details for one feature
    Show {
        /// Feature id
        id: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(has_warnings) => {
            if has_warnings {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<bool> {
    match &cli.command {
        Commands::Check {
            patterns,
            format,
            unsafe_only,
        } => run_check(&cli, patterns, format, *unsafe_only),
        Commands::Catalog { command } => {
            let catalog = load_catalog(&cli)?;
            match command {
                CatalogCommands::List => run_catalog_list(&catalog).map(|_| false),
                CatalogCommands::Show { id } => run_catalog_show(&catalog, id).map(|_| false),
            }
        }
        Commands::Init { force } => run_init(*force).map(|_| false),
    }
}

fn find_config(cli: &Cli) -> Result<ScanConfig> {
    if let Some(ref path) = cli.config {
        return ScanConfig::from_file(path).into_diagnostic();
    }

    if let Some(path) = ScanConfig::discover(".") {
        info!("Using config: {}", path.display());
        return ScanConfig::from_file(&path).into_diagnostic();
    }

    info!("No config file found, using defaults");
    Ok(ScanConfig::new())
}

fn load_catalog(cli: &Cli) -> Result<Catalog> {
    let config = find_config(cli)?;
    match config.catalog_path() {
        Some(path) => Catalog::from_file(&path).into_diagnostic(),
        None => Catalog::embedded().into_diagnostic(),
    }
}

fn run_check(cli: &Cli, patterns: &[String], format: &str, unsafe_only: bool) -> Result<bool> {
    let config = find_config(cli)?;
    let scanner = Scanner::new(config).into_diagnostic()?;

    let (mut results, failures) = scanner.scan_patterns(patterns).into_diagnostic()?;

    if unsafe_only {
        for result in &mut results {
            result
                .diagnostics
                .retain(|d| d.severity == Severity::Warning);
        }
    }

    if !failures.is_empty() {
        eprintln!("\n{} file(s) failed to scan:", failures.len());
        for (path, error) in &failures {
            eprintln!("  {}: {}", path.display(), error);
        }
    }

    let has_warnings = output_results(&results, format)?;

    // Unreadable files are an operational problem, not a finding; exit 1
    // is reserved for non-Baseline features.
    if !failures.is_empty() {
        return Err(miette::miette!(
            "{} file(s) failed to scan",
            failures.len()
        ));
    }

    Ok(has_warnings)
}

fn output_results(results: &[ScanResult], format: &str) -> Result<bool> {
    let has_warnings = results.iter().any(|r| r.has_warnings());

    match format {
        "json" => {
            println!(
                "{}",
                serde_json::to_string_pretty(&results).into_diagnostic()?
            );
        }
        _ => {
            // Text format
            for result in results {
                if result.diagnostics.is_empty() {
                    continue;
                }

                println!("\n{}:", result.path.display());
                for diag in &result.diagnostics {
                    let severity = match diag.severity {
                        Severity::Warning => "warning",
                        Severity::Info => "info",
                    };
                    let position = match diag.loc {
                        Some(loc) => format!("{}:{}", loc.start.line, loc.start.column),
                        None => format!("{}..{}", diag.span.start, diag.span.end),
                    };
                    println!(
                        "  {} {} [{}]: {}",
                        position, severity, diag.feature_id, diag.message
                    );
                }
            }

            // Summary
            let total_files = results.len();
            let total_findings: usize = results.iter().map(|r| r.diagnostics.len()).sum();
            let total_warnings: usize = results
                .iter()
                .flat_map(|r| &r.diagnostics)
                .filter(|d| d.severity == Severity::Warning)
                .count();

            println!();
            println!(
                "Checked {} files, found {} feature uses ({} need attention)",
                total_files, total_findings, total_warnings
            );
        }
    }

    Ok(has_warnings)
}

fn run_catalog_list(catalog: &Catalog) -> Result<()> {
    for feature in catalog.iter() {
        let status = if feature.safe { "safe" } else { "caveat" };
        println!(
            "{:<24} {:<6} {:<24} {}",
            feature.id, feature.category, feature.match_name, status
        );
    }
    println!();
    println!("{} features", catalog.len());
    Ok(())
}

fn run_catalog_show(catalog: &Catalog, id: &str) -> Result<()> {
    let feature: &FeatureDescriptor = catalog
        .get(id)
        .ok_or_else(|| miette::miette!("No feature with id `{}` in the catalog", id))?;

    println!("{}", feature.id);
    println!("  category:   {}", feature.category);
    println!("  match name: {}", feature.match_name);
    println!(
        "  baseline:   {}",
        if feature.safe { "safe" } else { "not safe" }
    );
    if let Some(note) = &feature.note {
        println!("  note:       {}", note);
    }
    if !feature.browser_support.is_empty() {
        println!("  browser support (first version):");
        for (browser, version) in feature.browser_support.iter() {
            println!("    {:<10} {}", browser, version);
        }
    }
    if let Some(link) = &feature.doc_link {
        println!("  docs:       {}", link);
    }
    Ok(())
}

fn run_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(ScanConfig::CONFIG_FILES[0]);

    let default_config = r#"{
  "exclude": ["**/node_modules/**", "**/dist/**"]
}
"#;

    loop {
        let mut options = std::fs::OpenOptions::new();
        options.write(true).create_new(true);

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.custom_flags(libc::O_NOFOLLOW);
        }

        match options.open(&config_path) {
            Ok(mut file) => {
                use std::io::Write;
                file.write_all(default_config.as_bytes())
                    .into_diagnostic()?;
                info!("Created {}", config_path.display());
                return Ok(());
            }
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                if !force {
                    return Err(miette::miette!(
                        "Config file already exists. Use --force to overwrite."
                    ));
                }

                // With force, remove the existing file or symlink and retry.
                // Re-check existence to avoid looping if removal fails.
                if std::fs::symlink_metadata(&config_path).is_ok() {
                    std::fs::remove_file(&config_path).into_diagnostic()?;
                } else {
                    return Err(miette::miette!(
                        "Config file vanished while trying to overwrite it"
                    ));
                }
            }
            Err(e) => return Err(e).into_diagnostic(),
        }
    }
}
