use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Below this width the two answer fields are stacked instead of split.
const SIDE_BY_SIDE_MIN_WIDTH: u16 = 60;

/// Regions of the quiz screen, top to bottom.
pub struct QuizLayout {
    pub header: Rect,
    pub progress: Rect,
    pub verb: Rect,
    pub answers: Rect,
    pub message: Rect,
    pub footer: Rect,
    stacked: bool,
}

impl QuizLayout {
    pub fn new(area: Rect, footer_lines: u16) -> Self {
        let stacked = area.width < SIDE_BY_SIDE_MIN_WIDTH;
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(5),
                Constraint::Length(if stacked { 6 } else { 3 }),
                Constraint::Min(3),
                Constraint::Length(footer_lines.max(1)),
            ])
            .split(area);

        Self {
            header: vertical[0],
            progress: vertical[1],
            verb: vertical[2],
            answers: vertical[3],
            message: vertical[4],
            footer: vertical[5],
            stacked,
        }
    }

    /// The two answer fields: side by side, or one above the other on
    /// narrow terminals.
    pub fn answer_fields(&self) -> (Rect, Rect) {
        let direction = if self.stacked {
            Direction::Vertical
        } else {
            Direction::Horizontal
        };
        let split = Layout::default()
            .direction(direction)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(self.answers);
        (split[0], split[1])
    }
}

pub fn pack_hint_lines(hints: &[&str], width: usize) -> Vec<String> {
    if width == 0 || hints.is_empty() {
        return Vec::new();
    }

    let prefix = "  ";
    let separator = "  ";
    let mut out: Vec<String> = Vec::new();
    let mut current = prefix.to_string();
    let mut has_hint = false;

    for hint in hints {
        if hint.is_empty() {
            continue;
        }
        let candidate = if has_hint {
            format!("{current}{separator}{hint}")
        } else {
            format!("{current}{hint}")
        };
        if candidate.chars().count() <= width {
            current = candidate;
            has_hint = true;
        } else {
            if has_hint {
                out.push(current);
            }
            current = format!("{prefix}{hint}");
            has_hint = true;
        }
    }

    if has_hint {
        out.push(current);
    }
    out
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    const MIN_WIDTH: u16 = 48;
    const MIN_HEIGHT: u16 = 20;

    let requested_w = area.width.saturating_mul(percent_x.min(100)) / 100;
    let requested_h = area.height.saturating_mul(percent_y.min(100)) / 100;

    let target_w = requested_w.max(MIN_WIDTH).min(area.width);
    let target_h = requested_h.max(MIN_HEIGHT).min(area.height);

    let left = area
        .x
        .saturating_add((area.width.saturating_sub(target_w)) / 2);
    let top = area
        .y
        .saturating_add((area.height.saturating_sub(target_h)) / 2);

    Rect::new(left, top, target_w, target_h)
}
