use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Widget};

use crate::ui::theme::Theme;

/// Mastered-verb progress: `done / total` in the title, percentage in the bar.
pub struct ProgressBar<'a> {
    pub done: usize,
    pub total: usize,
    pub ratio: f64,
    pub theme: &'a Theme,
}

impl<'a> ProgressBar<'a> {
    pub fn new(done: usize, total: usize, ratio: f64, theme: &'a Theme) -> Self {
        Self {
            done,
            total,
            ratio,
            theme,
        }
    }
}

impl Widget for ProgressBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(format!(" Progress {} / {} ", self.done, self.total))
            .border_style(Style::default().fg(colors.border()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let ratio = self.ratio.clamp(0.0, 1.0);
        let filled_width = (ratio * inner.width as f64) as u16;
        let label = format!("{:.0}%", ratio * 100.0);

        for x in inner.x..inner.x + inner.width {
            let style = if x < inner.x + filled_width {
                Style::default().fg(colors.bg()).bg(colors.bar_filled())
            } else {
                Style::default().fg(colors.fg()).bg(colors.bar_empty())
            };
            buf[(x, inner.y)].set_style(style);
        }

        let label_x = inner.x + (inner.width.saturating_sub(label.len() as u16)) / 2;
        buf.set_string(label_x, inner.y, &label, Style::default().fg(colors.fg()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer, y: u16, width: u16) -> String {
        (0..width).map(|x| buf[(x, y)].symbol().to_string()).collect()
    }

    #[test]
    fn test_fill_follows_given_ratio() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 12, 3);
        let mut buf = Buffer::empty(area);
        ProgressBar::new(1, 2, 0.5, &theme).render(area, &mut buf);

        // Inner row spans x = 1..11; half of it is filled.
        assert_eq!(buf[(1, 1)].bg, theme.colors.bar_filled());
        assert_eq!(buf[(5, 1)].bg, theme.colors.bar_filled());
        assert_eq!(buf[(6, 1)].bg, theme.colors.bar_empty());
    }

    #[test]
    fn test_empty_vocabulary_shows_zero() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 24, 3);
        let mut buf = Buffer::empty(area);
        ProgressBar::new(0, 0, 0.0, &theme).render(area, &mut buf);
        assert!(row(&buf, 1, 24).contains("0%"));
        assert!(row(&buf, 0, 24).contains("0 / 0"));
    }

    #[test]
    fn test_renders_percentage_label() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 24, 3);
        let mut buf = Buffer::empty(area);
        ProgressBar::new(1, 4, 0.25, &theme).render(area, &mut buf);

        assert!(row(&buf, 1, area.width).contains("25%"));
        assert!(row(&buf, 0, area.width).contains("1 / 4"));
    }
}
