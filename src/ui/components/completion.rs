use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::ui::theme::Theme;

/// Shown once every verb in the vocabulary is mastered.
pub struct CompletionBanner<'a> {
    total: usize,
    theme: &'a Theme,
}

impl<'a> CompletionBanner<'a> {
    pub fn new(total: usize, theme: &'a Theme) -> Self {
        Self { total, theme }
    }
}

impl Widget for CompletionBanner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .border_style(Style::default().fg(colors.success()))
            .style(Style::default().bg(colors.bg()));

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Congratulations!",
                Style::default()
                    .fg(colors.success())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!("You have mastered all {} irregular verbs!", self.total),
                Style::default().fg(colors.fg()),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "[Enter] Play again   [q] Quit",
                Style::default().fg(colors.accent()),
            )),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}

/// Yes/no prompt drawn over the quiz before progress is wiped.
pub struct ConfirmRestart<'a> {
    mastered: usize,
    theme: &'a Theme,
}

impl<'a> ConfirmRestart<'a> {
    pub fn new(mastered: usize, theme: &'a Theme) -> Self {
        Self { mastered, theme }
    }
}

impl Widget for ConfirmRestart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" Restart ")
            .border_style(Style::default().fg(colors.warning()))
            .style(Style::default().bg(colors.bg()));

        let lines = vec![
            Line::from(Span::styled(
                format!("Forget {} mastered verbs and start over?", self.mastered),
                Style::default().fg(colors.fg()),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "[y] Yes   [n] No",
                Style::default().fg(colors.warning()),
            )),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}
