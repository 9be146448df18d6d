use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const VERBS_EN: &str = include_str!("../../assets/verbs.json");

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerbEntry {
    pub base: String,
    pub past_simple: Vec<String>,
    pub past_participle: Vec<String>,
    pub definition: String,
}

#[derive(Debug, Error)]
pub enum VocabularyError {
    #[error("failed to read vocabulary file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse vocabulary: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("vocabulary contains no verbs")]
    Empty,
    #[error("verb #{0} has an empty base form")]
    EmptyBase(usize),
    #[error("base form '{0}' appears more than once")]
    DuplicateBase(String),
    #[error("'{base}' has no accepted {slot} forms")]
    NoForms { base: String, slot: &'static str },
    #[error("'{base}' has a blank {slot} form")]
    BlankForm { base: String, slot: &'static str },
}

/// Fixed, ordered verb list with a base-form index.
#[derive(Clone, Debug, Default)]
pub struct Vocabulary {
    entries: Vec<VerbEntry>,
    index: HashMap<String, usize>,
}

impl Vocabulary {
    /// The bundled irregular verb list.
    pub fn builtin() -> Result<Self, VocabularyError> {
        Self::from_json(VERBS_EN)
    }

    pub fn from_path(path: &Path) -> Result<Self, VocabularyError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, VocabularyError> {
        let raw: Vec<VerbEntry> = serde_json::from_str(json)?;
        Self::from_entries(raw)
    }

    /// Normalizes spellings to trimmed lowercase and rejects lists that would
    /// break the quiz (no verbs, duplicate bases, slots without answers).
    pub fn from_entries(raw: Vec<VerbEntry>) -> Result<Self, VocabularyError> {
        if raw.is_empty() {
            return Err(VocabularyError::Empty);
        }

        let mut entries = Vec::with_capacity(raw.len());
        let mut index = HashMap::with_capacity(raw.len());

        for (i, entry) in raw.into_iter().enumerate() {
            let base = entry.base.trim().to_lowercase();
            if base.is_empty() {
                return Err(VocabularyError::EmptyBase(i));
            }
            if index.contains_key(&base) {
                return Err(VocabularyError::DuplicateBase(base));
            }
            let past_simple = normalize_forms(&base, "past simple", entry.past_simple)?;
            let past_participle =
                normalize_forms(&base, "past participle", entry.past_participle)?;

            index.insert(base.clone(), entries.len());
            entries.push(VerbEntry {
                base,
                past_simple,
                past_participle,
                definition: entry.definition.trim().to_string(),
            });
        }

        Ok(Self { entries, index })
    }

    pub fn entries(&self) -> &[VerbEntry] {
        &self.entries
    }

    pub fn get(&self, idx: usize) -> Option<&VerbEntry> {
        self.entries.get(idx)
    }

    pub fn lookup(&self, base: &str) -> Option<&VerbEntry> {
        self.position(base).map(|idx| &self.entries[idx])
    }

    pub fn position(&self, base: &str) -> Option<usize> {
        self.index.get(base).copied()
    }

    pub fn contains(&self, base: &str) -> bool {
        self.index.contains_key(base)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn normalize_forms(
    base: &str,
    slot: &'static str,
    forms: Vec<String>,
) -> Result<Vec<String>, VocabularyError> {
    if forms.is_empty() {
        return Err(VocabularyError::NoForms {
            base: base.to_string(),
            slot,
        });
    }
    let mut out: Vec<String> = Vec::with_capacity(forms.len());
    for form in forms {
        let form = form.trim().to_lowercase();
        if form.is_empty() {
            return Err(VocabularyError::BlankForm {
                base: base.to_string(),
                slot,
            });
        }
        if !out.contains(&form) {
            out.push(form);
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn builtin_vocabulary_is_valid() {
        let vocab = Vocabulary::builtin().unwrap();
        assert!(vocab.len() > 100);

        let mut bases = HashSet::new();
        for verb in vocab.entries() {
            assert!(bases.insert(verb.base.as_str()), "duplicate {}", verb.base);
            assert!(!verb.past_simple.is_empty());
            assert!(!verb.past_participle.is_empty());
            assert!(!verb.definition.is_empty());
            assert_eq!(verb.base, verb.base.to_lowercase());
        }
    }

    #[test]
    fn builtin_keeps_alias_order() {
        let vocab = Vocabulary::builtin().unwrap();
        let dream = vocab.lookup("dream").unwrap();
        assert_eq!(dream.past_simple, vec!["dreamed", "dreamt"]);
        let get = vocab.lookup("get").unwrap();
        assert_eq!(get.past_participle, vec!["got", "gotten"]);
    }

    #[test]
    fn lookup_and_position_agree() {
        let vocab = Vocabulary::builtin().unwrap();
        let idx = vocab.position("go").unwrap();
        assert_eq!(vocab.get(idx).unwrap().base, "go");
        assert_eq!(vocab.lookup("go").unwrap().past_simple, vec!["went"]);
        assert!(vocab.lookup("walk").is_none());
        assert!(!vocab.contains("walk"));
    }

    #[test]
    fn from_json_normalizes_spellings() {
        let json = r#"[{"base": " Go ", "past_simple": ["WENT "], "past_participle": ["gone", "Gone"], "definition": " to move "}]"#;
        let vocab = Vocabulary::from_json(json).unwrap();
        let go = vocab.lookup("go").unwrap();
        assert_eq!(go.past_simple, vec!["went"]);
        assert_eq!(go.past_participle, vec!["gone"]);
        assert_eq!(go.definition, "to move");
    }

    #[test]
    fn from_json_rejects_empty_list() {
        assert!(matches!(
            Vocabulary::from_json("[]"),
            Err(VocabularyError::Empty)
        ));
    }

    #[test]
    fn from_json_rejects_duplicate_base() {
        let json = r#"[
            {"base": "go", "past_simple": ["went"], "past_participle": ["gone"], "definition": "a"},
            {"base": "GO", "past_simple": ["went"], "past_participle": ["gone"], "definition": "b"}
        ]"#;
        let err = Vocabulary::from_json(json).unwrap_err();
        assert!(matches!(err, VocabularyError::DuplicateBase(ref b) if b == "go"));
    }

    #[test]
    fn from_json_rejects_missing_forms() {
        let json = r#"[{"base": "go", "past_simple": [], "past_participle": ["gone"], "definition": ""}]"#;
        let err = Vocabulary::from_json(json).unwrap_err();
        assert!(err.to_string().contains("past simple"));

        let json = r#"[{"base": "go", "past_simple": ["went"], "past_participle": ["  "], "definition": ""}]"#;
        assert!(matches!(
            Vocabulary::from_json(json),
            Err(VocabularyError::BlankForm { .. })
        ));
    }

    #[test]
    fn from_json_rejects_malformed_payload() {
        assert!(matches!(
            Vocabulary::from_json("{not json"),
            Err(VocabularyError::Parse(_))
        ));
    }
}
