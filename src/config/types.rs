use clap::Args;
use serde::{Deserialize, Serialize};

use crate::diff::context::DiffOptions;

/// Raw configuration input - all fields Optional for merging
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ConfigInput {
    pub diff: Option<DiffInput>,
    pub equivalences_file: Option<String>,
    pub substitutions: Option<SubstitutionsInput>,
    pub export: Option<ExportInput>,
    pub objects: Option<ObjectsInput>,
}

/// Resolved configuration with all defaults applied
#[derive(Debug, Clone)]
pub struct Config {
    pub diff: DiffOptions,
    pub equivalences_file: String,
    pub substitutions: SubstitutionSettings,
    pub export: Export,
    pub objects: Objects,
}

// Comparison flags
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DiffInput {
    pub with_tablespace: Option<bool>,
    pub ignore_source_comments: Option<bool>,
    pub ignore_object_comments: Option<bool>,
    pub ignore_grant_changes: Option<bool>,
}

// Substitution tables
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SubstitutionsInput {
    pub dir: Option<String>,
    pub save_new: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct SubstitutionSettings {
    pub dir: String,
    /// Record unseen names as identity mappings and persist them
    pub save_new: bool,
}

// Exporter behavior
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ExportInput {
    pub rename_folder_if_exists: Option<bool>,
    pub create_old_new: Option<bool>,
}

#[derive(Debug, Clone, Default)]
pub struct Export {
    pub rename_folder_if_exists: bool,
    pub create_old_new: bool,
}

// Object filtering, glob patterns on object names
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ObjectsInput {
    pub include: Option<Vec<String>>,
    pub exclude: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default)]
pub struct Objects {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

// CLI argument groups for command-specific options
#[derive(Debug, Clone, Default, Args)]
pub struct DiffFlagsArgs {
    #[arg(long, help = "Emit tablespace clauses on table and index creation")]
    pub with_tablespace: bool,

    #[arg(long, help = "Treat table and column comment changes as differences")]
    pub with_object_comments: bool,

    #[arg(long, help = "Treat '--' comment lines in stored code as significant")]
    pub with_source_comments: bool,

    #[arg(long, help = "Emit grants when creating tables")]
    pub with_grant_changes: bool,
}

#[derive(Debug, Clone, Default, Args)]
pub struct SubstitutionArgs {
    #[arg(long, help = "Equivalence definition file")]
    pub equivalences_file: Option<String>,

    #[arg(long, help = "Directory holding substitution tables")]
    pub substitutions_dir: Option<String>,

    #[arg(long, help = "Record unseen tablespace and grantee names in the substitution tables")]
    pub save_map: bool,
}

#[derive(Debug, Clone, Default, Args)]
pub struct ExportArgs {
    #[arg(long, help = "Write into the first free <dir>(N) when the output directory already exists")]
    pub rename_folder: bool,

    #[arg(long, help = "Write the full definition of both sides next to each update")]
    pub old_new: bool,
}

#[derive(Debug, Clone, Default, Args)]
pub struct ObjectFilterArgs {
    #[arg(long, help = "Include only objects matching these names (glob patterns)")]
    pub include: Option<Vec<String>>,

    #[arg(long, help = "Exclude objects matching these names (glob patterns)")]
    pub exclude: Option<Vec<String>>,
}

fn flag(set: bool, value: bool) -> Option<bool> {
    if set { Some(value) } else { None }
}

// Conversion functions from CLI args to config input
impl From<DiffFlagsArgs> for DiffInput {
    fn from(args: DiffFlagsArgs) -> Self {
        Self {
            with_tablespace: flag(args.with_tablespace, true),
            ignore_source_comments: flag(args.with_source_comments, false),
            ignore_object_comments: flag(args.with_object_comments, false),
            ignore_grant_changes: flag(args.with_grant_changes, false),
        }
    }
}

impl From<SubstitutionArgs> for SubstitutionsInput {
    fn from(args: SubstitutionArgs) -> Self {
        Self {
            dir: args.substitutions_dir,
            save_new: flag(args.save_map, true),
        }
    }
}

impl From<ExportArgs> for ExportInput {
    fn from(args: ExportArgs) -> Self {
        Self {
            rename_folder_if_exists: flag(args.rename_folder, true),
            create_old_new: flag(args.old_new, true),
        }
    }
}

impl From<ObjectFilterArgs> for ObjectsInput {
    fn from(args: ObjectFilterArgs) -> Self {
        Self {
            include: args.include,
            exclude: args.exclude,
        }
    }
}
