use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HintStage {
    #[default]
    None,
    PastRevealed,
    ParticipleRevealed,
    DefinitionRevealed,
}

impl HintStage {
    /// One step forward, clamped at `DefinitionRevealed`.
    pub fn next(self) -> Self {
        match self {
            HintStage::None => HintStage::PastRevealed,
            HintStage::PastRevealed => HintStage::ParticipleRevealed,
            HintStage::ParticipleRevealed | HintStage::DefinitionRevealed => {
                HintStage::DefinitionRevealed
            }
        }
    }

    pub fn is_terminal(self) -> bool {
        self == HintStage::DefinitionRevealed
    }

    pub fn reveals_past(self) -> bool {
        self >= HintStage::PastRevealed
    }

    pub fn reveals_participle(self) -> bool {
        self >= HintStage::ParticipleRevealed
    }

    pub fn reveals_definition(self) -> bool {
        self >= HintStage::DefinitionRevealed
    }
}

/// First letter of the first accepted spelling, e.g. `w...`.
pub fn first_letter(forms: &[String]) -> Option<String> {
    forms
        .first()
        .and_then(|form| form.chars().next())
        .map(|ch| format!("{ch}..."))
}
