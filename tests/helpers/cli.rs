use anyhow::Result;
use assert_cmd::Command;
use oradiff::catalog::Schema;
use oradiff::snapshot;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary project directory with snapshot files and a ready-to-run binary
pub struct CliTestHelper {
    pub temp_dir: TempDir,
}

impl CliTestHelper {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.root().join(name)
    }

    /// Save `schema` as a snapshot and return its file name
    pub fn write_snapshot(&self, name: &str, schema: &Schema) -> Result<String> {
        snapshot::save(schema, self.path(name))?;
        Ok(name.to_string())
    }

    pub fn write_file(&self, name: &str, content: &str) -> Result<()> {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }

    /// Command running in the project directory, isolated from the caller's environment
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_oradiff"));
        cmd.current_dir(self.root())
            .env_remove("RUST_LOG")
            .env_remove("ORADIFF_EQUIVALENCES_FILE")
            .env_remove("ORADIFF_SUBSTITUTIONS_DIR");
        cmd
    }
}
