//! dirspec - inspect directive schemas and mangle compiler tests.
//!
//! ```bash
//! # Summarise a schema tree (<SPEC>/json/{modifier,clause,clause-group,directive})
//! dirspec inspect specs/openmp
//!
//! # One directive with its accepted clauses, as JSON
//! dirspec inspect specs/openmp --directive target --json
//!
//! # List names that do not resolve
//! dirspec check specs/openmp
//!
//! # Generate TestBin/*.N.f90 from BaseTests/*.f90
//! # (FLANG_EXEC may also come from a .env file in the working directory)
//! FLANG_EXEC=flang-new dirspec mangle --project .
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dirspec_loader::load_registry;
use dirspec_mangler::{MangleConfig, MangleDriver};
use dirspec_registry::{Directive, Named, Registry, Table};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "dirspec")]
#[command(version)]
#[command(about = "Directive schema registry tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load a schema tree and summarise it
    Inspect {
        /// Schema root containing json/
        spec: PathBuf,

        /// Show a single directive
        #[arg(short, long, value_name = "NAME")]
        directive: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Report names that do not resolve to a registered entity
    Check {
        /// Schema root containing json/
        spec: PathBuf,
    },

    /// Run the mangling plugin over the base tests
    Mangle {
        /// Project root holding build/, BaseTests/ and TestBin/
        #[arg(long, value_name = "DIR", default_value = ".")]
        project: PathBuf,

        /// Compiler frontend executable
        #[arg(long, value_name = "PATH", env = "FLANG_EXEC")]
        flang: PathBuf,

        /// Plugin shared library [default: <project>/build/libtestMangler.so]
        #[arg(long, value_name = "LIB")]
        plugin: Option<PathBuf>,

        /// Base test directory [default: <project>/BaseTests]
        #[arg(long, value_name = "DIR")]
        tests: Option<PathBuf>,

        /// Output directory [default: <project>/TestBin]
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<ExitCode> {
    // Load .env file if present; it may supply FLANG_EXEC.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    match cli.command {
        Command::Inspect {
            spec,
            directive,
            json,
        } => cmd_inspect(spec, directive.as_deref(), json),
        Command::Check { spec } => cmd_check(spec),
        Command::Mangle {
            project,
            flang,
            plugin,
            tests,
            out,
        } => {
            let mut config = MangleConfig::for_project(&project, flang);
            if let Some(plugin) = plugin {
                config = config.with_plugin_lib(plugin);
            }
            if let Some(tests) = tests {
                config = config.with_test_dir(tests);
            }
            if let Some(out) = out {
                config = config.with_out_dir(out);
            }
            cmd_mangle(&config)
        }
    }
}

fn setup_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("dirspec=debug,info")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load(spec: &Path) -> Result<Registry> {
    load_registry(spec).with_context(|| format!("failed to load schema '{}'", spec.display()))
}

// ==================== Commands ====================

fn cmd_inspect(spec: PathBuf, directive: Option<&str>, json: bool) -> Result<ExitCode> {
    let registry = load(&spec)?;

    match directive {
        Some(name) => {
            let directive = registry
                .directive(name)
                .with_context(|| format!("no directive named '{}'", name))?;
            print_directive(&registry, directive, json)?;
        }
        None if json => println!("{}", serde_json::to_string_pretty(&registry)?),
        None => {
            print_table("modifiers", registry.modifiers());
            print_table("clauses", registry.clauses());
            print_table("clause groups", registry.clause_groups());
            print_table("directives", registry.directives());
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn print_table<T: Named>(label: &str, table: &Table<T>) {
    println!("{} ({})", label, table.len());
    for name in table.names() {
        println!("  {}", name);
    }
}

fn print_directive(registry: &Registry, directive: &Directive, json: bool) -> Result<()> {
    let resolved = registry.resolve_directive(&directive.name);

    if json {
        let accepted = match &resolved {
            Ok(r) => serde_json::json!(r.clause_names().collect::<Vec<_>>()),
            Err(_) => serde_json::Value::Null,
        };
        let output = serde_json::json!({
            "directive": directive,
            "accepted-clauses": accepted,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", directive.name);
    println!("  association: {}", directive.association);
    println!("  category:    {}", directive.category);
    if !directive.properties.is_empty() {
        let props: Vec<_> = directive.properties.iter().map(String::as_str).collect();
        println!("  properties:  {}", props.join(", "));
    }
    let groups: Vec<_> = directive.clause_groups.iter().map(|g| g.name()).collect();
    println!("  groups:      {}", groups.join(", "));
    match resolved {
        Ok(r) => println!("  accepts:     {}", r.clause_names().collect::<Vec<_>>().join(", ")),
        Err(e) => println!("  accepts:     unresolved ({})", e),
    }
    Ok(())
}

fn cmd_check(spec: PathBuf) -> Result<ExitCode> {
    let registry = load(&spec)?;
    let dangling = registry.dangling_references();

    if dangling.is_empty() {
        println!("ok: {} entities, all references resolve", registry.len());
        return Ok(ExitCode::SUCCESS);
    }

    for reference in &dangling {
        println!("{}", reference);
    }
    println!("{} dangling reference(s)", dangling.len());
    Ok(ExitCode::FAILURE)
}

fn cmd_mangle(config: &MangleConfig) -> Result<ExitCode> {
    info!(flang = %config.flang.display(), plugin = %config.plugin_lib.display(), "mangling");

    let summary = MangleDriver::from_config(config)
        .run()
        .context("mangling failed")?;

    for file in &summary.files {
        println!("{}: {} variant(s)", file.test.display(), file.variants);
    }
    println!(
        "{} variant(s) from {} test(s) in {}",
        summary.total_variants(),
        summary.files.len(),
        config.out_dir.display()
    );
    Ok(ExitCode::SUCCESS)
}
