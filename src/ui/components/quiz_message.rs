use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::session::quiz::QuizSession;
use crate::ui::theme::Theme;

/// Result of the last check and the definition once that hint is reached.
pub struct QuizMessage<'a> {
    session: &'a QuizSession,
    theme: &'a Theme,
}

impl<'a> QuizMessage<'a> {
    pub fn new(session: &'a QuizSession, theme: &'a Theme) -> Self {
        Self { session, theme }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let colors = &self.theme.colors;
        let mut lines = Vec::new();

        if self.session.is_answer_locked() {
            if self.session.is_fully_correct() {
                lines.push(Line::from(Span::styled(
                    "Excellent! Both are correct.",
                    Style::default()
                        .fg(colors.success())
                        .add_modifier(Modifier::BOLD),
                )));
            } else if let Some(answer) = self.session.correct_answer() {
                lines.push(Line::from(vec![
                    Span::styled("Correct answer: ", Style::default().fg(colors.warning())),
                    Span::styled(
                        answer,
                        Style::default().fg(colors.fg()).add_modifier(Modifier::BOLD),
                    ),
                ]));
            }
            lines.push(Line::from(""));
        }

        if let Some(definition) = self.session.hint().definition {
            lines.push(Line::from(vec![
                Span::styled(
                    "Definition: ",
                    Style::default().fg(colors.hint()).add_modifier(Modifier::BOLD),
                ),
                Span::styled(definition, Style::default().fg(colors.hint())),
            ]));
        }

        lines
    }
}

impl Widget for QuizMessage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let lines = self.lines();
        if lines.is_empty() {
            return;
        }

        let block = Block::bordered()
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::progress::ProgressTracker;
    use crate::session::quiz::Slot;
    use crate::vocab::Vocabulary;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn session() -> QuizSession {
        let vocab = Vocabulary::from_json(
            r#"[{"base": "go", "past_simple": ["went"], "past_participle": ["gone"], "definition": "To move."}]"#,
        )
        .unwrap();
        let mut session = QuizSession::new(vocab, ProgressTracker::in_memory());
        session.select_next(&mut SmallRng::seed_from_u64(1));
        session
    }

    fn text(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_nothing_before_check() {
        let theme = Theme::default();
        let session = session();
        assert!(QuizMessage::new(&session, &theme).lines().is_empty());
    }

    #[test]
    fn test_shows_correct_answer_after_miss() {
        let theme = Theme::default();
        let mut session = session();
        session.set_input(Slot::PastSimple, "goed");
        session.check_answer();
        let shown = text(&QuizMessage::new(&session, &theme).lines());
        assert!(shown.contains("Correct answer: went / gone"));
    }

    #[test]
    fn test_praise_and_definition() {
        let theme = Theme::default();
        let mut session = session();
        for _ in 0..3 {
            session.request_hint();
        }
        session.set_input(Slot::PastSimple, "went");
        session.set_input(Slot::PastParticiple, "gone");
        session.check_answer();
        let shown = text(&QuizMessage::new(&session, &theme).lines());
        assert!(shown.contains("Excellent! Both are correct."));
        assert!(shown.contains("Definition: To move."));
    }
}
