//! ubigeo — Command-line interface for ubigeo-core
//!
//! Builds the UBIGEO artifacts from the INEI CSV export and runs every query
//! operation from the terminal.
//!
//! Usage examples
//! --------------
//!
//! - Build the artifacts from a CSV export
//!   $ ubigeo build "UBIGEO 2022_1891 distritos.csv" --out data
//!
//! - Show overall stats
//!   $ ubigeo stats
//!
//! - Browse the hierarchy
//!   $ ubigeo departamentos
//!   $ ubigeo departamento 15
//!   $ ubigeo provincia 1501
//!   $ ubigeo distrito 150131
//!
//! - Search (every term must match; accents and case are ignored)
//!   $ ubigeo buscar "san isidro"
//!   $ ubigeo buscar arequipa --limit 5 --json
//!
//! Data source
//! -----------
//!
//! By default the CLI loads the sample CSV bundled with `ubigeo-core` and
//! caches a binary snapshot next to it. Use `--input <path>` to point at a
//! full CSV export, a `.bin` snapshot or a directory produced by `build`.
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use ubigeo_core::prelude::*;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = CliArgs::parse();

    if let Commands::Build { source, out } = &args.command {
        return build(source, out);
    }

    // Determine input (default CSV inside ubigeo-core)
    let input_path = args.input.clone().unwrap_or_else(|| {
        UbigeoDb::default_data_dir().join(UbigeoDb::default_dataset_filename())
    });
    let started = Instant::now();
    let db = UbigeoDb::load_from_path(&input_path)
        .with_context(|| format!("loading {}", input_path.display()))?;
    tracing::debug!(
        input = %input_path.display(),
        districts = db.stats().districts,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "database loaded"
    );

    match args.command {
        Commands::Build { .. } => unreachable!("handled above"),

        Commands::Stats => emit(args.json, &db.stats(), |s| {
            println!("Database statistics:");
            println!("  Departamentos: {}", s.departments);
            println!("  Provincias: {}", s.provinces);
            println!("  Distritos: {}", s.districts);
            println!("  Search index entries: {}", s.index_entries);
        })?,

        Commands::Departamentos => emit(args.json, &db.list_departments(), |deps| {
            for d in deps {
                println!("{} {}", d.code, d.name);
            }
        })?,

        Commands::Departamento { code } => {
            emit(args.json, &db.get_department(&code)?, |dep| {
                println!("Departamento: {} ({})", dep.name, dep.code);
                for p in &dep.provinces {
                    println!("- {} {}", p.code, p.name);
                }
            })?
        }

        Commands::Provincia { code } => emit(args.json, &db.get_province(&code)?, |prov| {
            println!("Provincia: {} ({})", prov.name, prov.code);
            println!("Departamento: {} ({})", prov.department.name, prov.department.code);
            for d in &prov.districts {
                println!("- {} {}", d.code, d.name);
            }
        })?,

        Commands::Distrito { code } => {
            emit(args.json, &db.get_district(&code)?, print_district)?
        }

        Commands::Buscar { query, limit } => {
            let limit = parse_limit(limit.as_deref());
            emit(args.json, &db.search(&query, Some(limit))?, |res| {
                if res.results.is_empty() {
                    println!("No districts found matching: {}", res.query);
                    return;
                }
                for d in &res.results {
                    println!("{} {} — {}, {}", d.code, d.name, d.province.name, d.department.name);
                }
                println!("({} results)", res.total);
            })?
        }
    }

    Ok(())
}

fn print_district(d: &DistrictView) {
    println!("Distrito: {} ({})", d.name, d.code);
    println!("Capital: {}", d.capital);
    match d.region_code {
        Some(code) => println!("Region natural: {} ({code})", d.region_name),
        None => println!("Region natural: {}", d.region_name),
    }
    println!("Provincia: {} ({})", d.province.name, d.province.code);
    println!("Departamento: {} ({})", d.department.name, d.department.code);
}

/// Prints `value` as pretty JSON, or through `text` otherwise.
fn emit<T: Serialize>(json: bool, value: &T, text: impl FnOnce(&T)) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        text(value);
    }
    Ok(())
}

#[cfg(feature = "builder")]
fn build(source: &std::path::Path, out: &std::path::Path) -> anyhow::Result<()> {
    tracing::info!(source = %source.display(), out = %out.display(), "building artifacts");
    let report = ubigeo_core::loader::builder::build_artifacts(source, out)
        .with_context(|| format!("building from {}", source.display()))?;

    println!(
        "✓ Generated: {} departamentos, {} provincias, {} distritos",
        report.stats.departments, report.stats.provinces, report.stats.districts
    );
    if report.skipped > 0 {
        println!("  ({} malformed lines skipped)", report.skipped);
    }
    for f in &report.files {
        println!("  → {}", f.display());
    }
    Ok(())
}

#[cfg(not(feature = "builder"))]
fn build(_source: &std::path::Path, _out: &std::path::Path) -> anyhow::Result<()> {
    anyhow::bail!("this binary was built without the 'builder' feature")
}
