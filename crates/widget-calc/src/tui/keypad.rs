//! Clickable keypad for the terminal
//!
//! Draws the shared [`crate::keypad`] layout and maps mouse positions back
//! to buttons. The last pressed button is highlighted.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::keypad::{with_positions, ButtonKind, COLS, ROWS};

/// Colors the keypad is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadStyle {
    /// Border and unthemed labels
    pub border: Style,
    /// Number buttons
    pub number: Style,
}

impl Default for KeypadStyle {
    fn default() -> Self {
        Self {
            border: Style::default().fg(Color::Cyan),
            number: Style::default().fg(Color::White),
        }
    }
}

/// Keypad widget for rendering
#[derive(Debug, Default)]
pub struct KeypadWidget {
    pressed: Option<usize>,
    style: KeypadStyle,
}

impl KeypadWidget {
    /// Creates a keypad with nothing highlighted
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Highlights the button at `index`
    #[must_use]
    pub fn pressed(mut self, index: Option<usize>) -> Self {
        self.pressed = index;
        self
    }

    /// Sets the colors
    #[must_use]
    pub fn style(mut self, style: KeypadStyle) -> Self {
        self.style = style;
        self
    }

    fn button_style(&self, index: usize, kind: ButtonKind) -> Style {
        if self.pressed == Some(index) {
            return Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
        }
        match kind {
            ButtonKind::Number => self.style.number,
            ButtonKind::Operator => Style::default().fg(Color::Yellow),
            ButtonKind::Equals => Style::default().fg(Color::Green),
            ButtonKind::Control => Style::default().fg(Color::Red),
        }
    }
}

impl Widget for KeypadWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(self.style.border)
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        if inner.width < COLS as u16 || inner.height < ROWS as u16 {
            return; // Too small to render
        }

        let btn_width = inner.width / COLS as u16;
        let btn_height = inner.height / ROWS as u16;

        for (index, ((row, col), btn)) in with_positions().enumerate() {
            let x = inner.x + (col as u16 * btn_width);
            let y = inner.y + (row as u16 * btn_height);

            let label = format!("[{}]", btn.label);
            let label_width = label.chars().count() as u16;
            if btn_width < label_width {
                continue;
            }
            let label_x = x + (btn_width - label_width) / 2;
            let label_y = y + btn_height / 2;

            if label_y < inner.y + inner.height {
                let style = self.button_style(index, btn.kind);
                buf.set_span(label_x, label_y, &Span::styled(label, style), btn_width);
            }
        }
    }
}

/// Converts a click position inside `area` to a button index
#[must_use]
pub fn hit_test(area: Rect, x: u16, y: u16) -> Option<usize> {
    if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
        return None;
    }

    let rel_x = x - area.x;
    let rel_y = y - area.y;

    // Account for border (1 char on each side)
    if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
        return None;
    }

    let btn_width = (area.width - 2) / COLS as u16;
    let btn_height = (area.height - 2) / ROWS as u16;
    if btn_width == 0 || btn_height == 0 {
        return None;
    }

    let col = ((rel_x - 1) / btn_width) as usize;
    let row = ((rel_y - 1) / btn_height) as usize;

    (row < ROWS && col < COLS).then_some(row * COLS + col)
}
