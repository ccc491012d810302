//! The widget hosted on the (mock) page
//!
//! Wires page events to the widget the same way the browser binding does:
//! keydown is listened to from the start, button clicks only once the page
//! has signalled load, and the color input recolors on every change.

use tracing::debug;

use super::dom::{
    DomElement, DomEvent, MockDom, BUTTON_GROUP_CLASS, CALCULATOR_ID, DATA_BUTTON, HISTORY_ID,
    RESULT_ID, STYLE_INPUT_ID,
};
use crate::core::HistoryEntry;
use crate::theme::Theme;
use crate::widget::{Surface, Widget};

const BACKGROUND: &str = "background-color";
const COLOR: &str = "color";

impl Surface for MockDom {
    fn set_readout(&mut self, text: &str) {
        self.set_element_text(RESULT_ID, text);
    }

    fn append_history(&mut self, entry: &HistoryEntry) {
        self.append_child(HISTORY_ID, DomElement::new("br"));
        self.append_child(HISTORY_ID, DomElement::new("span").with_text(&entry.text));
    }

    fn apply_theme(&mut self, theme: &Theme) {
        self.set_element_style(CALCULATOR_ID, BACKGROUND, &theme.panel);
        self.set_element_style(RESULT_ID, BACKGROUND, &theme.display);

        for id in self.ids_with_class(BUTTON_GROUP_CLASS) {
            self.set_element_style(&id, BACKGROUND, &theme.button_group);
        }
        for id in self.ids_with_attr(DATA_BUTTON) {
            self.set_element_style(&id, BACKGROUND, &theme.button_background);
            self.set_element_style(&id, COLOR, &theme.button_text);
        }
    }
}

/// Calculator widget living on a mock page
#[derive(Debug)]
pub struct PageCalculator {
    widget: Widget<MockDom>,
    clicks_attached: bool,
}

impl Default for PageCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl PageCalculator {
    /// Creates the widget on a fresh calculator page
    #[must_use]
    pub fn new() -> Self {
        Self::with_dom(MockDom::calculator())
    }

    /// Creates the widget on an existing page
    #[must_use]
    pub fn with_dom(dom: MockDom) -> Self {
        Self {
            widget: Widget::new(dom),
            clicks_attached: false,
        }
    }

    /// Delivers one page event
    pub fn handle_event(&mut self, event: &DomEvent) {
        self.widget.surface_mut().dispatch_event(event);

        match event {
            DomEvent::KeyDown { key } => self.widget.handle(key),
            DomEvent::Click { element_id } => self.handle_click(element_id),
            DomEvent::Input { element_id, value } if element_id == STYLE_INPUT_ID => {
                // Rejected colors are logged by the widget and otherwise ignored
                let _ = self.widget.recolor(value);
            }
            DomEvent::Input { .. } => {}
            DomEvent::PageLoad => {
                if !self.clicks_attached {
                    debug!("click listeners attached");
                }
                self.clicks_attached = true;
            }
        }
    }

    fn handle_click(&mut self, element_id: &str) {
        if !self.clicks_attached {
            debug!(element_id, "click before page load ignored");
            return;
        }
        let token = self
            .widget
            .surface()
            .get_element(element_id)
            .and_then(|e| e.get_attr(DATA_BUTTON))
            .map(str::to_string);
        if let Some(token) = token {
            self.widget.handle(&token);
        }
    }

    /// Returns true once click listeners are attached
    #[must_use]
    pub fn clicks_attached(&self) -> bool {
        self.clicks_attached
    }

    /// Text of the readout element
    #[must_use]
    pub fn readout(&self) -> String {
        self.dom()
            .get_element_text(RESULT_ID)
            .unwrap_or_default()
            .to_string()
    }

    /// Lines rendered in the history element, oldest first
    #[must_use]
    pub fn history_lines(&self) -> Vec<String> {
        self.dom()
            .children(HISTORY_ID)
            .iter()
            .filter(|e| e.tag == "span")
            .map(|e| e.text_content.clone())
            .collect()
    }

    /// Returns the widget
    #[must_use]
    pub fn widget(&self) -> &Widget<MockDom> {
        &self.widget
    }

    /// Returns the page
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        self.widget.surface()
    }
}
