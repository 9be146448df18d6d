use rand::Rng;
use rand::seq::SliceRandom;

use crate::engine::answer::{self, Feedback};
use crate::engine::hint::{self, HintStage};
use crate::engine::progress::ProgressTracker;
use crate::vocab::{VerbEntry, Vocabulary};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    PastSimple,
    PastParticiple,
}

impl Slot {
    pub fn other(self) -> Self {
        match self {
            Slot::PastSimple => Slot::PastParticiple,
            Slot::PastParticiple => Slot::PastSimple,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Slot::PastSimple => "Past Simple",
            Slot::PastParticiple => "Past Participle",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizPhase {
    NotStarted,
    /// Index into the vocabulary of the verb on screen.
    Active(usize),
    Complete,
}

/// Everything about the current verb view. Reset on every transition.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub past_simple_input: String,
    pub past_participle_input: String,
    pub past_simple_feedback: Feedback,
    pub past_participle_feedback: Feedback,
    pub hint_stage: HintStage,
    pub answer_locked: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CheckOutcome {
    pub past_simple: Feedback,
    pub past_participle: Feedback,
    pub newly_mastered: bool,
}

impl CheckOutcome {
    pub fn all_correct(&self) -> bool {
        self.past_simple.is_correct() && self.past_participle.is_correct()
    }
}

/// Hint text revealed so far for the current verb.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Hint<'a> {
    pub past_simple: Option<String>,
    pub past_participle: Option<String>,
    pub definition: Option<&'a str>,
}

pub struct QuizSession {
    vocab: Vocabulary,
    progress: ProgressTracker,
    phase: QuizPhase,
    state: SessionState,
}

impl QuizSession {
    pub fn new(vocab: Vocabulary, progress: ProgressTracker) -> Self {
        Self {
            vocab,
            progress,
            phase: QuizPhase::NotStarted,
            state: SessionState::default(),
        }
    }

    /// Pick a random unmastered verb, or enter `Complete` if none remain.
    /// Callable at any time; from `Active` it skips the current verb.
    pub fn select_next<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.state = SessionState::default();

        let pool = self.progress.unmastered_pool(&self.vocab);
        let picked = pool
            .choose(rng)
            .and_then(|verb| self.vocab.position(&verb.base));

        self.phase = match picked {
            Some(idx) => {
                tracing::debug!(base = %self.vocab.entries()[idx].base, pool = pool.len(), "next verb");
                QuizPhase::Active(idx)
            }
            None => {
                tracing::info!(mastered = self.progress.progress_count(), "all verbs mastered");
                QuizPhase::Complete
            }
        };
    }

    /// Compare both inputs against the accepted forms. Only one check is
    /// allowed per verb view; later calls return `None`.
    pub fn check_answer(&mut self) -> Option<CheckOutcome> {
        if self.state.answer_locked {
            return None;
        }
        let verb = self.current_verb()?;

        let past_simple = answer::judge(&self.state.past_simple_input, &verb.past_simple);
        let past_participle =
            answer::judge(&self.state.past_participle_input, &verb.past_participle);
        let base = verb.base.clone();

        self.state.past_simple_feedback = past_simple;
        self.state.past_participle_feedback = past_participle;
        self.state.answer_locked = true;

        let mut outcome = CheckOutcome {
            past_simple,
            past_participle,
            newly_mastered: false,
        };
        if outcome.all_correct() {
            outcome.newly_mastered = self.progress.mark_mastered(&base, &self.vocab);
        }
        tracing::debug!(%base, ?past_simple, ?past_participle, "answer checked");
        Some(outcome)
    }

    /// Reveal one more hint. Ignored once the answer is locked or the
    /// definition is already shown.
    pub fn request_hint(&mut self) -> HintStage {
        if self.is_active() && !self.state.answer_locked {
            self.state.hint_stage = self.state.hint_stage.next();
        }
        self.state.hint_stage
    }

    /// Forget all mastery and start over with the full pool.
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.progress.reset();
        tracing::info!("progress reset");
        self.select_next(rng);
    }

    /// Replace an input buffer. Refused when no verb is shown or the slot
    /// was already checked as correct.
    pub fn set_input(&mut self, slot: Slot, text: &str) -> bool {
        if !self.is_editable(slot) {
            return false;
        }
        let buffer = match slot {
            Slot::PastSimple => &mut self.state.past_simple_input,
            Slot::PastParticiple => &mut self.state.past_participle_input,
        };
        buffer.clear();
        buffer.push_str(text);
        true
    }

    pub fn is_editable(&self, slot: Slot) -> bool {
        self.is_active() && !(self.state.answer_locked && self.feedback(slot).is_correct())
    }

    pub fn input(&self, slot: Slot) -> &str {
        match slot {
            Slot::PastSimple => &self.state.past_simple_input,
            Slot::PastParticiple => &self.state.past_participle_input,
        }
    }

    pub fn feedback(&self, slot: Slot) -> Feedback {
        match slot {
            Slot::PastSimple => self.state.past_simple_feedback,
            Slot::PastParticiple => self.state.past_participle_feedback,
        }
    }

    pub fn current_verb(&self) -> Option<&VerbEntry> {
        match self.phase {
            QuizPhase::Active(idx) => self.vocab.get(idx),
            QuizPhase::NotStarted | QuizPhase::Complete => None,
        }
    }

    pub fn hint(&self) -> Hint<'_> {
        let stage = self.state.hint_stage;
        match self.current_verb() {
            Some(verb) => Hint {
                past_simple: stage
                    .reveals_past()
                    .then(|| hint::first_letter(&verb.past_simple))
                    .flatten(),
                past_participle: stage
                    .reveals_participle()
                    .then(|| hint::first_letter(&verb.past_participle))
                    .flatten(),
                definition: stage
                    .reveals_definition()
                    .then_some(verb.definition.as_str()),
            },
            None => Hint::default(),
        }
    }

    /// Accepted spellings of both slots, e.g. `dreamed/dreamt / dreamed/dreamt`.
    pub fn correct_answer(&self) -> Option<String> {
        self.current_verb().map(|verb| {
            format!(
                "{} / {}",
                answer::display_forms(&verb.past_simple),
                answer::display_forms(&verb.past_participle)
            )
        })
    }

    pub fn is_fully_correct(&self) -> bool {
        self.state.past_simple_feedback.is_correct()
            && self.state.past_participle_feedback.is_correct()
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn hint_stage(&self) -> HintStage {
        self.state.hint_stage
    }

    pub fn is_answer_locked(&self) -> bool {
        self.state.answer_locked
    }

    pub fn is_active(&self) -> bool {
        matches!(self.phase, QuizPhase::Active(_))
    }

    pub fn is_complete(&self) -> bool {
        self.phase == QuizPhase::Complete
    }

    pub fn mastered_count(&self) -> usize {
        self.progress.progress_count()
    }

    pub fn total_count(&self) -> usize {
        self.progress.total_count(&self.vocab)
    }

    pub fn progress_ratio(&self) -> f64 {
        self.progress.ratio(&self.vocab)
    }

    pub fn pool_size(&self) -> usize {
        self.progress.unmastered_pool(&self.vocab).len()
    }

    pub fn progress(&self) -> &ProgressTracker {
        &self.progress
    }
}
