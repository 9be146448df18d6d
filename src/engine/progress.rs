use std::collections::HashSet;

use crate::store::ProgressStore;
use crate::vocab::{VerbEntry, Vocabulary};

/// The set of mastered base forms, kept in insertion order and written
/// through to the backing store after every mutation.
pub struct ProgressTracker {
    mastered: Vec<String>,
    lookup: HashSet<String>,
    store: Option<Box<dyn ProgressStore>>,
}

impl ProgressTracker {
    /// Tracker with no backing store. Progress lives only as long as the process.
    pub fn in_memory() -> Self {
        Self {
            mastered: Vec::new(),
            lookup: HashSet::new(),
            store: None,
        }
    }

    /// Restore persisted progress. Bases unknown to `vocab` and repeated
    /// entries are dropped so the mastered set always partitions the vocabulary.
    pub fn load(store: Option<Box<dyn ProgressStore>>, vocab: &Vocabulary) -> Self {
        let stored = store
            .as_ref()
            .map(|s| s.load_mastered())
            .unwrap_or_default();
        let stored_len = stored.len();

        let mut tracker = Self {
            store,
            ..Self::in_memory()
        };
        for base in stored {
            if vocab.contains(&base) && tracker.lookup.insert(base.clone()) {
                tracker.mastered.push(base);
            }
        }

        if tracker.mastered.len() != stored_len {
            tracing::info!(
                kept = tracker.mastered.len(),
                dropped = stored_len - tracker.mastered.len(),
                "ignored stale entries in saved progress"
            );
        }
        tracker
    }

    /// Returns true if `base` was newly added. Bases outside `vocab` are
    /// refused so the pool and the mastered set always partition it.
    pub fn mark_mastered(&mut self, base: &str, vocab: &Vocabulary) -> bool {
        if !vocab.contains(base) {
            tracing::debug!(%base, "refusing to master unknown verb");
            return false;
        }
        if !self.lookup.insert(base.to_string()) {
            return false;
        }
        self.mastered.push(base.to_string());
        self.persist();
        true
    }

    pub fn is_mastered(&self, base: &str) -> bool {
        self.lookup.contains(base)
    }

    /// Vocabulary entries not yet mastered, in vocabulary order.
    pub fn unmastered_pool<'v>(&self, vocab: &'v Vocabulary) -> Vec<&'v VerbEntry> {
        vocab
            .entries()
            .iter()
            .filter(|verb| !self.is_mastered(&verb.base))
            .collect()
    }

    pub fn reset(&mut self) {
        self.mastered.clear();
        self.lookup.clear();
        self.persist();
    }

    #[cfg(test)]
    pub fn mastered(&self) -> &[String] {
        &self.mastered
    }

    pub fn progress_count(&self) -> usize {
        self.mastered.len()
    }

    pub fn total_count(&self, vocab: &Vocabulary) -> usize {
        vocab.len()
    }

    pub fn ratio(&self, vocab: &Vocabulary) -> f64 {
        if vocab.is_empty() {
            return 0.0;
        }
        self.progress_count() as f64 / vocab.len() as f64
    }

    pub fn has_store(&self) -> bool {
        self.store.is_some()
    }

    fn persist(&self) {
        if let Some(ref store) = self.store
            && let Err(err) = store.save_mastered(&self.mastered)
        {
            tracing::warn!(%err, "failed to save progress; keeping it in memory");
        }
    }
}
