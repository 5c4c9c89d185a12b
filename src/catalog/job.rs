use serde::{Deserialize, Serialize};

/// Scheduled `dbms_job` entry, named by its job number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub name: String,
    /// PL/SQL block run by the job
    pub what: String,
    /// Next run date as `dd-mm-yyyy hh24:mi:ss`
    pub next_date: String,
    pub interval: String,
    #[serde(default)]
    pub broken: bool,
}

impl Job {
    /// The broken flag is runtime state and does not count as a change.
    pub fn db_equals(&self, other: &Job) -> bool {
        self.what == other.what && self.next_date == other.next_date && self.interval == other.interval
    }
}
