//! TUI rendering
//!
//! ```text
//! ┌ Calculator ─────────────────────────────────────────────┐
//! │┌ Readout ───────────┐┌ Keypad ─────────────────────────┐│
//! ││               5+3  ││ [C]    [OFF]   [⌫]     [/]      ││
//! │└────────────────────┘│ ...                             ││
//! │┌ History ───────────┐│                                 ││
//! ││ 1 + 1 = 2          ││                                 ││
//! │└────────────────────┘│                                 ││
//! │ help line           └─────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────┘
//! ```

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::{KeypadStyle, KeypadWidget};
use crate::theme::{Theme, ThemeColor};

/// Title of the outer frame
pub const TITLE: &str = " Calculator ";

/// Width reserved for the keypad
pub const KEYPAD_WIDTH: u16 = 34;

/// Key hints shown at the bottom
pub const HELP_LINE: &str = "Esc clear  ^O off  ^T theme  ^Q quit";

/// Screen regions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiLayout {
    /// Readout box
    pub readout: Rect,
    /// History box
    pub history: Rect,
    /// Help line
    pub help: Rect,
    /// Keypad box, when shown
    pub keypad: Option<Rect>,
}

impl UiLayout {
    /// Splits the terminal area
    #[must_use]
    pub fn new(area: Rect, show_keypad: bool) -> Self {
        let (main, keypad) = if show_keypad {
            let [main, keypad] =
                Layout::horizontal([Constraint::Min(20), Constraint::Length(KEYPAD_WIDTH)])
                    .margin(1)
                    .areas(area);
            (main, Some(keypad))
        } else {
            let [main] = Layout::horizontal([Constraint::Min(0)]).margin(1).areas(area);
            (main, None)
        };

        let [readout, history, help] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(main);

        Self {
            readout,
            history,
            help,
            keypad,
        }
    }
}

/// Converts a theme color to a terminal color
#[must_use]
pub fn terminal_color(hex: &str) -> Option<Color> {
    ThemeColor::from_hex(hex)
        .ok()
        .map(|c| Color::Rgb(c.r, c.g, c.b))
}

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    fn theme(&self) -> Option<&Theme> {
        self.app.screen().theme.as_ref()
    }

    fn background(&self, pick: impl Fn(&Theme) -> &str) -> Style {
        self.theme()
            .and_then(|t| terminal_color(pick(t)))
            .map_or_else(Style::default, |c| Style::default().bg(c))
    }

    fn text_style(&self) -> Style {
        match self.theme() {
            Some(t) if !t.dark => Style::default().fg(Color::Black),
            _ => Style::default().fg(Color::White),
        }
    }

    fn render_readout(&self, area: Rect, buf: &mut Buffer) {
        let paragraph = Paragraph::new(Span::styled(
            self.app.screen().readout.as_str(),
            self.text_style().add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Right)
        .style(self.background(|t| t.display.as_str()))
        .block(
            Block::default()
                .title(" Readout ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );
        paragraph.render(area, buf);
    }

    fn render_history(&self, area: Rect, buf: &mut Buffer) {
        let history = &self.app.screen().history;
        let visible = usize::from(area.height.saturating_sub(2));
        let skip = history.len().saturating_sub(visible);

        let items: Vec<ListItem> = history
            .iter()
            .skip(skip)
            .map(|line| ListItem::new(Span::styled(line.as_str(), self.text_style())))
            .collect();

        let list = List::new(items).block(
            Block::default()
                .title(format!(" History ({}) ", history.len()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        );
        list.render(area, buf);
    }

    fn render_help(&self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Line::from(Span::styled(
            HELP_LINE,
            Style::default().fg(Color::DarkGray),
        )))
        .render(area, buf);
    }

    fn keypad_style(&self) -> KeypadStyle {
        let mut style = KeypadStyle::default();
        if let Some(theme) = self.theme() {
            if let Some(group) = terminal_color(&theme.button_group) {
                style.border = Style::default().fg(group);
            }
            if let (Some(fg), Some(bg)) = (
                terminal_color(&theme.button_text),
                terminal_color(&theme.button_background),
            ) {
                style.number = Style::default().fg(fg).bg(bg);
            }
        }
        style
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(TITLE)
            .borders(Borders::ALL)
            .style(self.background(|t| t.panel.as_str()))
            .render(area, buf);

        let layout = UiLayout::new(area, self.app.show_keypad());
        self.render_readout(layout.readout, buf);
        self.render_history(layout.history, buf);
        self.render_help(layout.help, buf);

        if let Some(keypad) = layout.keypad {
            KeypadWidget::new()
                .pressed(self.app.pressed())
                .style(self.keypad_style())
                .render(keypad, buf);
        }
    }
}
