use crate::config::types::*;

/// Trait for merging optional configuration values
pub trait Merge<T> {
    fn merge(self, other: T) -> T;
}

impl<T> Merge<Option<T>> for Option<T> {
    fn merge(self, other: Option<T>) -> Option<T> {
        other.or(self)
    }
}

impl Merge<ConfigInput> for ConfigInput {
    fn merge(self, other: ConfigInput) -> ConfigInput {
        ConfigInput {
            diff: match (self.diff, other.diff) {
                (Some(a), Some(b)) => Some(a.merge_with(b)),
                (a, b) => b.or(a),
            },
            equivalences_file: self.equivalences_file.merge(other.equivalences_file),
            substitutions: match (self.substitutions, other.substitutions) {
                (Some(a), Some(b)) => Some(a.merge_with(b)),
                (a, b) => b.or(a),
            },
            export: match (self.export, other.export) {
                (Some(a), Some(b)) => Some(a.merge_with(b)),
                (a, b) => b.or(a),
            },
            objects: match (self.objects, other.objects) {
                (Some(a), Some(b)) => Some(a.merge_with(b)),
                (a, b) => b.or(a),
            },
        }
    }
}

// Field-wise merges so a partial CLI section keeps the file's other values
impl DiffInput {
    pub fn merge_with(self, other: DiffInput) -> DiffInput {
        DiffInput {
            with_tablespace: other.with_tablespace.or(self.with_tablespace),
            ignore_source_comments: other.ignore_source_comments.or(self.ignore_source_comments),
            ignore_object_comments: other.ignore_object_comments.or(self.ignore_object_comments),
            ignore_grant_changes: other.ignore_grant_changes.or(self.ignore_grant_changes),
        }
    }
}

impl SubstitutionsInput {
    pub fn merge_with(self, other: SubstitutionsInput) -> SubstitutionsInput {
        SubstitutionsInput {
            dir: other.dir.or(self.dir),
            save_new: other.save_new.or(self.save_new),
        }
    }
}

impl ExportInput {
    pub fn merge_with(self, other: ExportInput) -> ExportInput {
        ExportInput {
            rename_folder_if_exists: other.rename_folder_if_exists.or(self.rename_folder_if_exists),
            create_old_new: other.create_old_new.or(self.create_old_new),
        }
    }
}

impl ObjectsInput {
    pub fn merge_with(self, other: ObjectsInput) -> ObjectsInput {
        ObjectsInput {
            include: other.include.or(self.include),
            exclude: other.exclude.or(self.exclude),
        }
    }
}
