//! Listeners that persist or collect the DDL of a comparison run

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::config::Export;
use crate::constants::ALL_DATA_FILENAME;
use crate::diff::context::DiffContext;
use crate::diff::manager::DiffListener;
use crate::diff::operations::{Change, ObjectKind, Operation};

/// Writes one file per change under `<dest>/<kind>/`, plus the aggregate script.
pub struct DiffExporter {
    dest: PathBuf,
    create_old_new: bool,
    all_data: BufWriter<File>,
    written: usize,
}

impl DiffExporter {
    /// Prepare the destination directory and open the aggregate script.
    ///
    /// With `rename_folder_if_exists`, an existing `dest` is left alone and the
    /// first free `dest(N)` is used instead.
    pub fn create(dest: impl AsRef<Path>, options: &Export) -> Result<Self> {
        let requested = dest.as_ref();
        let dest = if options.rename_folder_if_exists {
            free_destination(requested)
        } else {
            requested.to_path_buf()
        };
        if dest != requested {
            warn!(
                "Folder {} already exists, using {}",
                requested.display(),
                dest.display()
            );
        }

        fs::create_dir_all(&dest)
            .with_context(|| format!("Failed to create output directory: {}", dest.display()))?;
        let all_data_path = dest.join(ALL_DATA_FILENAME);
        let all_data = File::create(&all_data_path)
            .with_context(|| format!("Failed to create {}", all_data_path.display()))?;

        Ok(Self {
            dest,
            create_old_new: options.create_old_new,
            all_data: BufWriter::new(all_data),
            written: 0,
        })
    }

    /// Directory actually written to
    pub fn dest(&self) -> &Path {
        &self.dest
    }

    pub fn files_written(&self) -> usize {
        self.written
    }

    fn file_path(&self, change: &Change<'_>) -> Result<PathBuf> {
        let folder = self.dest.join(change.kind.tag());
        fs::create_dir_all(&folder)
            .with_context(|| format!("Failed to create directory: {}", folder.display()))?;
        Ok(folder.join(file_name(change.operation, change.kind, &change.name)))
    }

    fn write_file(&mut self, path: &Path, sql: &str) -> Result<()> {
        fs::write(path, sql).with_context(|| format!("Failed to write {}", path.display()))?;
        self.written += 1;
        Ok(())
    }
}

impl DiffListener for DiffExporter {
    fn notify(&mut self, ctx: &DiffContext, change: &Change<'_>) -> Result<()> {
        let sql = change.to_sql(ctx)?;
        let path = self.file_path(change)?;
        debug!("Writing {}", path.display());
        self.write_file(&path, &sql)?;
        self.all_data
            .write_all(sql.as_bytes())
            .with_context(|| format!("Failed to append to {}", ALL_DATA_FILENAME))?;

        if self.create_old_new {
            if let Some(source) = change.diff.source {
                let old = companion(&path, "_old");
                self.write_file(&old, &source.create_sql(ctx))?;
            }
            if let Some(destination) = change.diff.destination {
                let new = companion(&path, "_new");
                self.write_file(&new, &destination.create_sql(ctx))?;
            }
        }
        Ok(())
    }

    fn finish(&mut self, _ctx: &DiffContext) -> Result<()> {
        self.all_data
            .flush()
            .with_context(|| format!("Failed to write {}", ALL_DATA_FILENAME))?;
        info!("Wrote {} files to {}", self.written, self.dest.display());
        Ok(())
    }
}

/// `<op>_<kind>_<name>.sql`, where a table update is an `alter`
///
/// Characters that cannot appear in a file name are replaced with `_`.
pub fn file_name(operation: Operation, kind: ObjectKind, name: &str) -> String {
    let op = match (operation, kind) {
        (Operation::Update, ObjectKind::Table) => "alter",
        (op, _) => op.verb(),
    };
    format!("{}_{}_{}.sql", op, kind.tag(), safe_file_stem(name))
}

fn safe_file_stem(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}

fn companion(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}

fn free_destination(dest: &Path) -> PathBuf {
    let mut candidate = dest.to_path_buf();
    let mut n = 0;
    while candidate.exists() {
        n += 1;
        let mut name = dest.as_os_str().to_owned();
        name.push(format!("({})", n));
        candidate = PathBuf::from(name);
    }
    candidate
}

/// One line of a collected script
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptEntry {
    pub operation: Operation,
    pub kind: ObjectKind,
    pub name: String,
}

/// Collects the whole run in memory, for printing instead of exporting
#[derive(Debug, Default)]
pub struct SqlScript {
    pub sql: String,
    pub entries: Vec<ScriptEntry>,
}

impl SqlScript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl DiffListener for SqlScript {
    fn notify(&mut self, ctx: &DiffContext, change: &Change<'_>) -> Result<()> {
        self.sql.push_str(&change.to_sql(ctx)?);
        self.entries.push(ScriptEntry {
            operation: change.operation,
            kind: change.kind,
            name: change.name.clone(),
        });
        Ok(())
    }
}
