//! oradiff diff - Compare two schema snapshots
//!
//! Prints the DDL that turns the first schema into the second, or exports it
//! as one file per object change.

use anyhow::Result;
use console::style;
use itertools::Itertools;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::catalog::Schema;
use crate::config::{Config, ObjectFilter};
use crate::diff::context::DiffContext;
use crate::diff::equivalence::Equivalences;
use crate::diff::manager::DiffManager;
use crate::diff::operations::{ObjectKind, Operation};
use crate::export::{DiffExporter, ScriptEntry, SqlScript};
use crate::snapshot;
use crate::substitution::Substitutions;

/// How differences are reported when no output directory is given
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DiffFormat {
    /// Per-category summary of the changes
    Summary,
    /// The full DDL script
    #[default]
    Sql,
}

/// Arguments for the diff command
#[derive(Debug)]
pub struct DiffArgs {
    /// Snapshot of the schema to migrate from, or `null`
    pub from: String,
    /// Snapshot of the schema to migrate to, or `null`
    pub to: String,
    pub output_dir: Option<PathBuf>,
    pub format: DiffFormat,
}

/// Compare two snapshots and report the changes
///
/// Exits with code 1 when differences are found.
pub fn cmd_diff(config: &Config, root_dir: &Path, args: DiffArgs) -> Result<()> {
    if run_diff(config, root_dir, &args)? > 0 {
        std::process::exit(1);
    }
    Ok(())
}

/// Runs the comparison and returns the number of changes
pub fn run_diff(config: &Config, root_dir: &Path, args: &DiffArgs) -> Result<usize> {
    let filter = ObjectFilter::new(&config.objects);
    let initial = filter.filter_schema(snapshot::load(&args.from)?);
    let target = filter.filter_schema(snapshot::load(&args.to)?);

    let ctx = build_context(config, root_dir);

    match &args.output_dir {
        Some(dir) => {
            let mut exporter = DiffExporter::create(dir, &config.export)?;
            let mut manager = DiffManager::new();
            manager.add_listener(&mut exporter);
            let count = manager.run(&ctx, &initial, &target)?;
            eprintln!(
                "{} {} changes written to {} ({} files)",
                style("✓").green(),
                count,
                exporter.dest().display(),
                exporter.files_written()
            );
            Ok(count)
        }
        None => {
            let mut script = SqlScript::new();
            let mut manager = DiffManager::new();
            manager.add_listener(&mut script);
            let count = manager.run(&ctx, &initial, &target)?;
            match args.format {
                DiffFormat::Sql => print!("{}", script.sql),
                DiffFormat::Summary => print_summary(&script, &initial, &target),
            }
            Ok(count)
        }
    }
}

fn build_context(config: &Config, root_dir: &Path) -> DiffContext {
    let equivalences = root_dir.join(&config.equivalences_file);
    let substitutions = root_dir.join(&config.substitutions.dir);
    info!(
        "Equivalences from {}, substitutions from {}",
        equivalences.display(),
        substitutions.display()
    );

    DiffContext::new(config.diff)
        .with_equivalences(Equivalences::from_file(equivalences))
        .with_substitutions(Substitutions::from_dir(
            substitutions,
            config.substitutions.save_new,
        ))
}

fn print_summary(script: &SqlScript, initial: &Schema, target: &Schema) {
    if script.is_empty() {
        println!("{}", style("No differences found").green());
        return;
    }

    println!(
        "{} ({} → {} objects)",
        style("Schema differences").bold().underlined(),
        initial.object_count(),
        target.object_count()
    );

    let by_kind = script.entries.iter().into_group_map_by(|e| e.kind);
    for kind in ObjectKind::ALL {
        let Some(entries) = by_kind.get(&kind) else {
            continue;
        };
        println!("\n{} {}", style(kind.tag()).bold(), count_line(entries));
        for entry in entries {
            let marker = match entry.operation {
                Operation::Create => style("+").green(),
                Operation::Update => style("~").yellow(),
                Operation::Drop => style("-").red(),
            };
            println!("  {} {}", marker, entry.name);
        }
    }
}

fn count_line(entries: &[&ScriptEntry]) -> String {
    let counts = entries.iter().counts_by(|e| e.operation);
    let parts = [Operation::Create, Operation::Update, Operation::Drop]
        .iter()
        .filter_map(|op| counts.get(op).map(|n| format!("{} {}", n, op)))
        .join(", ");
    style(format!("({})", parts)).dim().to_string()
}
