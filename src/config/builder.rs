use crate::config::{merge::Merge, types::*};
use crate::constants::{EQUIVALENCES_FILE_ENV, SUBSTITUTIONS_DIR_ENV};
use crate::diff::context::DiffOptions;
use anyhow::Result;

pub struct ConfigBuilder {
    config_input: ConfigInput,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config_input: ConfigInput::default(),
        }
    }

    pub fn with_file(mut self, file_input: ConfigInput) -> Self {
        self.config_input = self.config_input.merge(file_input);
        self
    }

    pub fn with_cli_args(mut self, cli_input: ConfigInput) -> Self {
        self.config_input = self.config_input.merge(cli_input);
        self
    }

    pub fn resolve(self) -> Result<Config> {
        let defaults = Config::default();

        Ok(Config {
            diff: self.resolve_diff(&defaults.diff),
            equivalences_file: self
                .config_input
                .equivalences_file
                .clone()
                .or_else(|| std::env::var(EQUIVALENCES_FILE_ENV).ok())
                .unwrap_or(defaults.equivalences_file),
            substitutions: self.resolve_substitutions(&defaults.substitutions),
            export: self.resolve_export(&defaults.export),
            objects: self.resolve_objects(&defaults.objects),
        })
    }

    fn resolve_diff(&self, defaults: &DiffOptions) -> DiffOptions {
        let diff_input = self.config_input.diff.as_ref();

        DiffOptions {
            with_tablespace: diff_input
                .and_then(|d| d.with_tablespace)
                .unwrap_or(defaults.with_tablespace),
            ignore_source_comments: diff_input
                .and_then(|d| d.ignore_source_comments)
                .unwrap_or(defaults.ignore_source_comments),
            ignore_object_comments: diff_input
                .and_then(|d| d.ignore_object_comments)
                .unwrap_or(defaults.ignore_object_comments),
            ignore_grant_changes: diff_input
                .and_then(|d| d.ignore_grant_changes)
                .unwrap_or(defaults.ignore_grant_changes),
        }
    }

    fn resolve_substitutions(&self, defaults: &SubstitutionSettings) -> SubstitutionSettings {
        let sub_input = self.config_input.substitutions.as_ref();

        SubstitutionSettings {
            dir: sub_input
                .and_then(|s| s.dir.as_ref())
                .cloned()
                .or_else(|| std::env::var(SUBSTITUTIONS_DIR_ENV).ok())
                .unwrap_or_else(|| defaults.dir.clone()),
            save_new: sub_input
                .and_then(|s| s.save_new)
                .unwrap_or(defaults.save_new),
        }
    }

    fn resolve_export(&self, defaults: &Export) -> Export {
        let export_input = self.config_input.export.as_ref();

        Export {
            rename_folder_if_exists: export_input
                .and_then(|e| e.rename_folder_if_exists)
                .unwrap_or(defaults.rename_folder_if_exists),
            create_old_new: export_input
                .and_then(|e| e.create_old_new)
                .unwrap_or(defaults.create_old_new),
        }
    }

    fn resolve_objects(&self, defaults: &Objects) -> Objects {
        let obj_input = self.config_input.objects.as_ref();

        Objects {
            include: obj_input
                .and_then(|o| o.include.as_ref())
                .cloned()
                .unwrap_or_else(|| defaults.include.clone()),
            exclude: obj_input
                .and_then(|o| o.exclude.as_ref())
                .cloned()
                .unwrap_or_else(|| defaults.exclude.clone()),
        }
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
