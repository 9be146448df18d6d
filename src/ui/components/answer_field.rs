use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::engine::answer::Feedback;
use crate::ui::line_input::LineInput;
use crate::ui::theme::Theme;

/// One answer slot: bordered text field coloured by its feedback.
pub struct AnswerField<'a> {
    label: &'a str,
    input: &'a LineInput,
    feedback: Feedback,
    placeholder: &'a str,
    focused: bool,
    editable: bool,
    theme: &'a Theme,
}

impl<'a> AnswerField<'a> {
    pub fn new(label: &'a str, input: &'a LineInput, theme: &'a Theme) -> Self {
        Self {
            label,
            input,
            feedback: Feedback::Unchecked,
            placeholder: "",
            focused: false,
            editable: true,
            theme,
        }
    }

    pub fn feedback(mut self, feedback: Feedback) -> Self {
        self.feedback = feedback;
        self
    }

    /// Shown in place of empty input, e.g. a first-letter hint.
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }
}

impl Widget for AnswerField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let border = colors.feedback_border(self.feedback, self.focused);
        let title_style = if self.focused {
            Style::default().fg(colors.accent()).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.text_muted())
        };

        let block = Block::bordered()
            .title(Span::styled(format!(" {} ", self.label), title_style))
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(colors.bg()));

        let text_style = if self.editable {
            Style::default().fg(colors.fg())
        } else {
            Style::default().fg(colors.correct())
        };
        let show_cursor = self.focused && self.editable;

        let line = if self.input.value().is_empty() && !show_cursor {
            Line::from(Span::styled(
                self.placeholder,
                Style::default()
                    .fg(colors.text_muted())
                    .add_modifier(Modifier::ITALIC),
            ))
        } else if show_cursor {
            let (before, cursor_ch, after) = self.input.render_parts();
            let cursor_style = Style::default().fg(colors.bg()).bg(colors.fg());
            let mut spans = vec![Span::styled(before, text_style)];
            match cursor_ch {
                Some(ch) => {
                    spans.push(Span::styled(ch.to_string(), cursor_style));
                    spans.push(Span::styled(after, text_style));
                }
                None => {
                    spans.push(Span::styled(" ", cursor_style));
                    if before.is_empty() {
                        spans.push(Span::styled(
                            self.placeholder,
                            Style::default().fg(colors.text_muted()),
                        ));
                    }
                }
            }
            Line::from(spans)
        } else {
            Line::from(Span::styled(self.input.value(), text_style))
        };

        Paragraph::new(line).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, y: u16, width: u16) -> String {
        (0..width).map(|x| buf[(x, y)].symbol().to_string()).collect()
    }

    #[test]
    fn test_placeholder_when_empty() {
        let theme = Theme::default();
        let input = LineInput::default();
        let area = Rect::new(0, 0, 30, 3);
        let mut buf = Buffer::empty(area);
        AnswerField::new("Past Simple", &input, &theme)
            .placeholder("w...")
            .render(area, &mut buf);
        assert!(row_text(&buf, 0, 30).contains("Past Simple"));
        assert!(row_text(&buf, 1, 30).contains("w..."));
    }

    #[test]
    fn test_shows_typed_text() {
        let theme = Theme::default();
        let input = LineInput::new("went");
        let area = Rect::new(0, 0, 30, 3);
        let mut buf = Buffer::empty(area);
        AnswerField::new("Past Simple", &input, &theme)
            .feedback(Feedback::Correct)
            .editable(false)
            .render(area, &mut buf);
        assert!(row_text(&buf, 1, 30).contains("went"));
        assert_eq!(buf[(0, 0)].fg, theme.colors.correct());
    }
}
