//! Widget: a controller bound to a host surface
//!
//! A [`Surface`] is whatever shows the widget: the mock DOM, a real page,
//! or a terminal. [`Widget`] feeds tokens to the controller, plays the
//! resulting effects on the surface, and recolors it on theme changes.

use tracing::warn;

use crate::core::{CalculatorState, Controller, Effect, History, HistoryEntry};
use crate::error::WidgetResult;
use crate::theme::Theme;

/// Host-side rendering of the widget
pub trait Surface {
    /// Replaces the readout text
    fn set_readout(&mut self, text: &str);

    /// Appends one line to the history log
    fn append_history(&mut self, entry: &HistoryEntry);

    /// Recolors every surface of the widget
    fn apply_theme(&mut self, theme: &Theme);
}

/// A calculator widget rendering onto `S`
#[derive(Debug)]
pub struct Widget<S: Surface> {
    controller: Controller,
    surface: S,
    theme: Option<Theme>,
}

impl<S: Surface> Widget<S> {
    /// Creates a widget and draws the initial readout
    pub fn new(mut surface: S) -> Self {
        let controller = Controller::new();
        surface.set_readout(&controller.readout());
        Self {
            controller,
            surface,
            theme: None,
        }
    }

    /// Handles one raw token (key name or button identifier)
    pub fn handle(&mut self, token: &str) {
        for effect in self.controller.handle(token) {
            match effect {
                Effect::Readout(text) => self.surface.set_readout(&text),
                Effect::AppendHistory(entry) => self.surface.append_history(&entry),
            }
        }
    }

    /// Handles a sequence of tokens in order
    pub fn handle_all<'a>(&mut self, tokens: impl IntoIterator<Item = &'a str>) {
        for token in tokens {
            self.handle(token);
        }
    }

    /// Derives a theme from `color` and applies it to the surface
    ///
    /// An invalid color leaves the current theme in place.
    pub fn recolor(&mut self, color: &str) -> WidgetResult<&Theme> {
        let theme = Theme::from_hex(color).map_err(|e| {
            warn!(%e, "color rejected");
            e
        })?;
        self.surface.apply_theme(&theme);
        Ok(self.theme.insert(theme))
    }

    /// Returns the calculator state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        self.controller.state()
    }

    /// Returns the history
    #[must_use]
    pub fn history(&self) -> &History {
        self.controller.history()
    }

    /// Returns the last applied theme
    #[must_use]
    pub fn theme(&self) -> Option<&Theme> {
        self.theme.as_ref()
    }

    /// Returns the surface
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Returns the surface mutably
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
