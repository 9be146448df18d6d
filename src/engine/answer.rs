use serde::{Deserialize, Serialize};

/// Per-slot result of the last check.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Feedback {
    #[default]
    Unchecked,
    Correct,
    Incorrect,
}

impl Feedback {
    pub fn from_match(accepted: bool) -> Self {
        if accepted {
            Feedback::Correct
        } else {
            Feedback::Incorrect
        }
    }

    pub fn is_correct(self) -> bool {
        self == Feedback::Correct
    }
}

/// Trim surrounding whitespace and lowercase. No other folding is applied.
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

pub fn is_accepted(input: &str, forms: &[String]) -> bool {
    let answer = normalize(input);
    forms.iter().any(|form| *form == answer)
}

pub fn judge(input: &str, forms: &[String]) -> Feedback {
    Feedback::from_match(is_accepted(input, forms))
}

/// All accepted spellings of one slot, e.g. `dreamed/dreamt`.
pub fn display_forms(forms: &[String]) -> String {
    forms.join("/")
}
