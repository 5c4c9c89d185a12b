// Configuration file name
pub const CONFIG_FILENAME: &str = "oradiff.yaml";

// Default name of the equivalence definition file
pub const EQUIVALENCES_FILENAME: &str = "equivalences.txt";

// Aggregate script written next to the per-operation files
pub const ALL_DATA_FILENAME: &str = "all_data.sql";

// Stands in for a snapshot path to mean "empty schema"
pub const NULL_SCHEMA_ARG: &str = "null";

// Environment overrides for side-file locations
pub const EQUIVALENCES_FILE_ENV: &str = "ORADIFF_EQUIVALENCES_FILE";
pub const SUBSTITUTIONS_DIR_ENV: &str = "ORADIFF_SUBSTITUTIONS_DIR";
