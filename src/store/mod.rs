pub mod json_store;

use anyhow::Result;

/// Storage for the mastered base forms. Loading never fails: a missing or
/// corrupt payload reads as an empty list.
pub trait ProgressStore {
    fn load_mastered(&self) -> Vec<String>;
    fn save_mastered(&self, bases: &[String]) -> Result<()>;
}
