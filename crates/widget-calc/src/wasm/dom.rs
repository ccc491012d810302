//! Mock DOM for the host page
//!
//! Mirrors the page the browser widget attaches to, so the browser
//! behavior can be tested without a browser:
//!
//! - `#calculator` panel
//! - `#result` readout
//! - `#history` log
//! - `#style` color input
//! - `.bg-gray-600` button groups, one per keypad row
//! - `[data-button]` buttons

use std::collections::HashMap;

use crate::keypad::{self, ButtonKind};

/// ID of the calculator panel
pub const CALCULATOR_ID: &str = "calculator";
/// ID of the readout element
pub const RESULT_ID: &str = "result";
/// ID of the history container
pub const HISTORY_ID: &str = "history";
/// ID of the color input
pub const STYLE_INPUT_ID: &str = "style";
/// Class carried by the styled button groups
pub const BUTTON_GROUP_CLASS: &str = "bg-gray-600";
/// Attribute holding a button's token
pub const DATA_BUTTON: &str = "data-button";
/// Initial value of the color input (the group class's gray)
pub const DEFAULT_COLOR: &str = "#4b5563";

/// Represents a DOM element for testing
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DomElement {
    /// Element ID
    pub id: String,
    /// Element tag name
    pub tag: String,
    /// Text content
    pub text_content: String,
    /// Element attributes
    pub attributes: HashMap<String, String>,
    /// CSS classes
    pub classes: Vec<String>,
    /// Inline style properties
    pub style: HashMap<String, String>,
    /// Child elements
    pub children: Vec<DomElement>,
}

impl DomElement {
    /// Creates a new DOM element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Self::default()
        }
    }

    /// Creates an element with an ID
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Adds a class
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    /// Sets an attribute
    #[must_use]
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    /// Adds a child element
    #[must_use]
    pub fn with_child(mut self, child: DomElement) -> Self {
        self.children.push(child);
        self
    }

    /// Sets text content
    pub fn set_text(&mut self, text: &str) {
        self.text_content = text.to_string();
    }

    /// Checks if element has a class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Gets an attribute value
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Sets an inline style property
    pub fn set_style(&mut self, property: &str, value: &str) {
        self.style.insert(property.to_string(), value.to_string());
    }

    /// Gets an inline style property
    #[must_use]
    pub fn get_style(&self, property: &str) -> Option<&str> {
        self.style.get(property).map(String::as_str)
    }
}

/// Events the host page delivers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Click on an element
    Click {
        /// The ID of the clicked element
        element_id: String,
    },
    /// Value change on an input element
    Input {
        /// The ID of the input element
        element_id: String,
        /// The new value
        value: String,
    },
    /// Global keydown
    KeyDown {
        /// The key name, e.g. `"7"`, `"Enter"`, `"Backspace"`
        key: String,
    },
    /// Page load / client-side navigation finished
    PageLoad,
}

impl DomEvent {
    /// Creates a click event
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }

    /// Creates an input event
    #[must_use]
    pub fn input(element_id: &str, value: &str) -> Self {
        Self::Input {
            element_id: element_id.to_string(),
            value: value.to_string(),
        }
    }

    /// Creates a keydown event
    #[must_use]
    pub fn key_down(key: &str) -> Self {
        Self::KeyDown {
            key: key.to_string(),
        }
    }
}

/// Mock DOM for testing the widget without a browser
#[derive(Debug, Default)]
pub struct MockDom {
    /// Elements by ID
    elements: HashMap<String, DomElement>,
    /// Event history for verification
    event_history: Vec<DomEvent>,
}

impl MockDom {
    /// Creates an empty mock DOM
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the calculator host page
    #[must_use]
    pub fn calculator() -> Self {
        let mut dom = Self::new();

        dom.register_element(
            DomElement::new("div")
                .with_id(CALCULATOR_ID)
                .with_class("calculator"),
        );
        dom.register_element(DomElement::new("div").with_id(RESULT_ID));
        dom.register_element(DomElement::new("div").with_id(HISTORY_ID));
        dom.register_element(
            DomElement::new("input")
                .with_id(STYLE_INPUT_ID)
                .with_attr("type", "color")
                .with_attr("value", DEFAULT_COLOR),
        );

        for row in 0..keypad::ROWS {
            let mut group = DomElement::new("div")
                .with_id(&format!("keys-row-{row}"))
                .with_class(BUTTON_GROUP_CLASS);

            for col in 0..keypad::COLS {
                let Some(btn) = keypad::button_at(row, col) else {
                    continue;
                };
                let mut button = DomElement::new("button")
                    .with_id(&btn.element_id())
                    .with_text(btn.label)
                    .with_attr(DATA_BUTTON, btn.token);
                if btn.kind != ButtonKind::Number {
                    button = button.with_class("key-action");
                }
                group = group.with_child(button.clone());
                dom.register_element(button);
            }

            dom.register_element(group);
        }

        dom
    }

    /// Registers an element for ID lookup
    pub fn register_element(&mut self, element: DomElement) {
        if !element.id.is_empty() {
            self.elements.insert(element.id.clone(), element);
        }
    }

    /// Gets an element by ID
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.elements.get(id)
    }

    /// IDs of elements carrying `class`, sorted
    #[must_use]
    pub fn ids_with_class(&self, class: &str) -> Vec<String> {
        let mut ids: Vec<String> = self
            .elements
            .values()
            .filter(|e| e.has_class(class))
            .map(|e| e.id.clone())
            .collect();
        ids.sort();
        ids
    }

    /// IDs of elements carrying attribute `key`, sorted
    #[must_use]
    pub fn ids_with_attr(&self, key: &str) -> Vec<String> {
        let mut ids: Vec<String> = self
            .elements
            .values()
            .filter(|e| e.get_attr(key).is_some())
            .map(|e| e.id.clone())
            .collect();
        ids.sort();
        ids
    }

    /// Finds the element whose `data-button` is `token`
    #[must_use]
    pub fn find_button(&self, token: &str) -> Option<&DomElement> {
        self.elements
            .values()
            .find(|e| e.get_attr(DATA_BUTTON) == Some(token))
    }

    /// Records an event and applies its built-in DOM effect
    pub fn dispatch_event(&mut self, event: &DomEvent) {
        self.event_history.push(event.clone());

        if let DomEvent::Input { element_id, value } = event {
            if let Some(elem) = self.elements.get_mut(element_id) {
                elem.attributes.insert("value".to_string(), value.clone());
            }
        }
    }

    /// Gets the event history
    #[must_use]
    pub fn event_history(&self) -> &[DomEvent] {
        &self.event_history
    }

    /// Updates element text by ID
    pub fn set_element_text(&mut self, id: &str, text: &str) {
        if let Some(elem) = self.elements.get_mut(id) {
            elem.set_text(text);
        }
    }

    /// Gets element text by ID
    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.text_content.as_str())
    }

    /// Sets a style property on an element by ID
    pub fn set_element_style(&mut self, id: &str, property: &str, value: &str) {
        if let Some(elem) = self.elements.get_mut(id) {
            elem.set_style(property, value);
        }
    }

    /// Gets a style property of an element by ID
    #[must_use]
    pub fn get_element_style(&self, id: &str, property: &str) -> Option<&str> {
        self.elements.get(id).and_then(|e| e.get_style(property))
    }

    /// Adds a child element to a parent
    pub fn append_child(&mut self, parent_id: &str, child: DomElement) {
        let child_id = child.id.clone();
        if let Some(parent) = self.elements.get_mut(parent_id) {
            parent.children.push(child.clone());
        }
        if !child_id.is_empty() {
            self.elements.insert(child_id, child);
        }
    }

    /// Gets the children of an element
    #[must_use]
    pub fn children(&self, id: &str) -> &[DomElement] {
        self.elements
            .get(id)
            .map(|e| e.children.as_slice())
            .unwrap_or_default()
    }
}
