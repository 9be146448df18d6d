use crossterm::event::KeyEvent;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::session::quiz::{QuizSession, Slot};
use crate::ui::line_input::{InputResult, LineInput};
use crate::ui::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppScreen {
    Quiz,
    Complete,
}

pub struct App {
    pub screen: AppScreen,
    pub session: QuizSession,
    pub theme: &'static Theme,
    pub focus: Slot,
    pub past_simple: LineInput,
    pub past_participle: LineInput,
    pub confirm_restart: bool,
    pub should_quit: bool,
    rng: SmallRng,
}

impl App {
    pub fn new(session: QuizSession, theme: &'static Theme, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Self {
            screen: AppScreen::Quiz,
            session,
            theme,
            focus: Slot::PastSimple,
            past_simple: LineInput::default(),
            past_participle: LineInput::default(),
            confirm_restart: false,
            should_quit: false,
            rng,
        }
    }

    /// Show the first verb, or the completion screen if everything is
    /// already mastered.
    pub fn start(&mut self) {
        self.session.select_next(&mut self.rng);
        self.after_transition();
    }

    pub fn next_verb(&mut self) {
        self.session.select_next(&mut self.rng);
        self.after_transition();
    }

    /// Enter checks the answer, or moves on once it has been checked.
    pub fn submit(&mut self) {
        if self.session.is_answer_locked() {
            self.next_verb();
        } else {
            self.check_answer();
        }
    }

    pub fn check_answer(&mut self) {
        if self.session.check_answer().is_some() && !self.session.is_editable(self.focus) {
            let other = self.focus.other();
            if self.session.is_editable(other) {
                self.focus = other;
            }
        }
    }

    pub fn request_hint(&mut self) {
        self.session.request_hint();
    }

    pub fn switch_focus(&mut self) {
        self.focus = self.focus.other();
    }

    /// Forward an editing key to the focused field. Read-only fields ignore it.
    pub fn edit_focused(&mut self, key: KeyEvent) -> InputResult {
        let slot = self.focus;
        if !self.session.is_editable(slot) {
            return InputResult::Ignored;
        }
        let input = match slot {
            Slot::PastSimple => &mut self.past_simple,
            Slot::PastParticiple => &mut self.past_participle,
        };
        let result = input.handle(key);
        if result == InputResult::Edited {
            self.session.set_input(slot, input.value());
        }
        result
    }

    pub fn input(&self, slot: Slot) -> &LineInput {
        match slot {
            Slot::PastSimple => &self.past_simple,
            Slot::PastParticiple => &self.past_participle,
        }
    }

    /// First-letter hint when revealed, otherwise an example.
    pub fn placeholder(&self, slot: Slot) -> String {
        let hint = self.session.hint();
        let revealed = match slot {
            Slot::PastSimple => hint.past_simple,
            Slot::PastParticiple => hint.past_participle,
        };
        revealed.unwrap_or_else(|| match slot {
            Slot::PastSimple => "e.g. went".to_string(),
            Slot::PastParticiple => "e.g. gone".to_string(),
        })
    }

    /// Key hints for the quiz footer. The hint key is dropped once every
    /// hint has been revealed.
    pub fn quiz_hints(&self) -> Vec<&'static str> {
        let mut hints = Vec::new();
        if self.session.is_answer_locked() {
            hints.push("[Enter] Next");
        } else {
            hints.push("[Enter] Check");
            if !self.session.hint_stage().is_terminal() {
                hints.push("[Ctrl+T] Hint");
            }
            hints.push("[Ctrl+N] Skip");
        }
        hints.extend(["[Tab] Switch field", "[Ctrl+R] Restart", "[Esc] Quit"]);
        hints
    }

    pub fn ask_restart(&mut self) {
        self.confirm_restart = true;
    }

    pub fn cancel_restart(&mut self) {
        self.confirm_restart = false;
    }

    pub fn restart(&mut self) {
        self.session.restart(&mut self.rng);
        self.after_transition();
    }

    fn after_transition(&mut self) {
        self.past_simple.clear();
        self.past_participle.clear();
        self.focus = Slot::PastSimple;
        self.confirm_restart = false;
        self.screen = if self.session.is_complete() {
            AppScreen::Complete
        } else {
            AppScreen::Quiz
        };
    }
}
