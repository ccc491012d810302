//! Browser WASM bindings for the widget
//!
//! Attaches to a page that provides `#result`, `#history`, `#style`,
//! `#calculator`, `.bg-gray-600` groups and `[data-button]` buttons.
//! Keydown and color input are wired at construction; button clicks are
//! wired when the page fires `astro:page-load`, once.

// Note: This module is already conditionally compiled via #[cfg(feature = "wasm")] in mod.rs

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Document, Element, Event, HtmlElement, HtmlInputElement, KeyboardEvent};

use super::dom::{BUTTON_GROUP_CLASS, CALCULATOR_ID, HISTORY_ID, RESULT_ID, STYLE_INPUT_ID};
use crate::core::HistoryEntry;
use crate::theme::Theme;
use crate::widget::{Surface, Widget};

const PAGE_LOAD_EVENT: &str = "astro:page-load";
const BUTTON_SELECTOR: &str = "[data-button]";

/// The real page as a widget surface
#[derive(Debug)]
struct PageSurface {
    document: Document,
    calculator: HtmlElement,
    result: HtmlElement,
    history: Element,
}

impl PageSurface {
    fn find(document: &Document) -> Result<Self, JsValue> {
        Ok(Self {
            document: document.clone(),
            calculator: html_element(document, CALCULATOR_ID)?,
            result: html_element(document, RESULT_ID)?,
            history: document
                .get_element_by_id(HISTORY_ID)
                .ok_or_else(|| missing(HISTORY_ID))?,
        })
    }

    fn style_all(&self, selector: &str, properties: &[(&str, &str)]) -> Result<(), JsValue> {
        let nodes = self.document.query_selector_all(selector)?;
        for i in 0..nodes.length() {
            let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
                continue;
            };
            for (property, value) in properties {
                element.style().set_property(property, value)?;
            }
        }
        Ok(())
    }

    fn try_append_history(&self, text: &str) -> Result<(), JsValue> {
        let br = self.document.create_element("br")?;
        let span = self.document.create_element("span")?;
        span.set_text_content(Some(text));
        self.history.append_child(&br)?;
        self.history.append_child(&span)?;
        Ok(())
    }

    fn try_apply_theme(&self, theme: &Theme) -> Result<(), JsValue> {
        self.calculator
            .style()
            .set_property("background-color", &theme.panel)?;
        self.result
            .style()
            .set_property("background-color", &theme.display)?;
        self.style_all(
            &format!(".{BUTTON_GROUP_CLASS}"),
            &[("background-color", &theme.button_group)],
        )?;
        self.style_all(
            BUTTON_SELECTOR,
            &[
                ("background-color", &theme.button_background),
                ("color", &theme.button_text),
            ],
        )
    }
}

impl Surface for PageSurface {
    fn set_readout(&mut self, text: &str) {
        self.result.set_text_content(Some(text));
    }

    fn append_history(&mut self, entry: &HistoryEntry) {
        report(self.try_append_history(&entry.text));
    }

    fn apply_theme(&mut self, theme: &Theme) {
        report(self.try_apply_theme(theme));
    }
}

fn html_element(document: &Document, id: &str) -> Result<HtmlElement, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| missing(id))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| JsValue::from_str(&format!("#{id} is not an HTML element")))
}

fn missing(id: &str) -> JsValue {
    JsValue::from_str(&format!("element #{id} not found"))
}

fn report(result: Result<(), JsValue>) {
    if let Err(e) = result {
        console::error_1(&e);
    }
}

/// State shared by the page's event listeners
#[derive(Debug)]
struct Shared {
    widget: RefCell<Widget<PageSurface>>,
    clicks_attached: Cell<bool>,
}

/// Browser Calculator - the main WASM entry point
#[derive(Debug)]
#[wasm_bindgen]
pub struct BrowserCalculator {
    shared: Rc<Shared>,
}

#[wasm_bindgen]
impl BrowserCalculator {
    /// Attach the calculator to the current document
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<BrowserCalculator, JsValue> {
        console_error_panic_hook::set_once();

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document available"))?;

        let shared = Rc::new(Shared {
            widget: RefCell::new(Widget::new(PageSurface::find(&document)?)),
            clicks_attached: Cell::new(false),
        });

        listen_keydown(&document, &shared)?;
        listen_color(&document, &shared)?;
        listen_page_load(&document, &shared)?;

        Ok(Self { shared })
    }

    /// Feed a token programmatically
    pub fn handle(&self, token: &str) {
        self.shared.widget.borrow_mut().handle(token);
    }

    /// Attach click listeners now instead of waiting for page load
    pub fn attach_buttons(&self) -> Result<(), JsValue> {
        attach_clicks(&self.shared)
    }

    /// Text currently shown in the readout
    #[wasm_bindgen(getter)]
    pub fn readout(&self) -> String {
        self.shared
            .widget
            .borrow()
            .surface()
            .result
            .text_content()
            .unwrap_or_default()
    }

    /// Get history as JSON
    pub fn history_json(&self) -> String {
        self.shared
            .widget
            .borrow()
            .history()
            .to_json()
            .unwrap_or_else(|_| "[]".to_string())
    }

    /// Get history count
    pub fn history_count(&self) -> usize {
        self.shared.widget.borrow().history().len()
    }
}

// Listeners live as long as the page, so their closures are leaked on purpose.

fn listen_keydown(document: &Document, shared: &Rc<Shared>) -> Result<(), JsValue> {
    let shared = Rc::clone(shared);
    let on_key = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        shared.widget.borrow_mut().handle(&event.key());
    });
    document.add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref())?;
    on_key.forget();
    Ok(())
}

fn listen_color(document: &Document, shared: &Rc<Shared>) -> Result<(), JsValue> {
    let input = document
        .get_element_by_id(STYLE_INPUT_ID)
        .ok_or_else(|| missing(STYLE_INPUT_ID))?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| JsValue::from_str("#style is not an input"))?;

    let shared = Rc::clone(shared);
    let source = input.clone();
    let on_input = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        if let Err(e) = shared.widget.borrow_mut().recolor(&source.value()) {
            console::warn_1(&JsValue::from_str(&e.to_string()));
        }
    });
    input.add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())?;
    on_input.forget();
    Ok(())
}

fn listen_page_load(document: &Document, shared: &Rc<Shared>) -> Result<(), JsValue> {
    let shared = Rc::clone(shared);
    let on_load = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        report(attach_clicks(&shared));
    });
    document.add_event_listener_with_callback(PAGE_LOAD_EVENT, on_load.as_ref().unchecked_ref())?;
    on_load.forget();
    Ok(())
}

fn attach_clicks(shared: &Rc<Shared>) -> Result<(), JsValue> {
    if shared.clicks_attached.get() {
        return Ok(());
    }

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document available"))?;

    let handler_state = Rc::clone(shared);
    let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let token = event
            .current_target()
            .and_then(|t| t.dyn_into::<HtmlElement>().ok())
            .and_then(|el| el.dataset().get("button"))
            .unwrap_or_default();
        handler_state.widget.borrow_mut().handle(&token);
    });

    let buttons = document.query_selector_all(BUTTON_SELECTOR)?;
    for i in 0..buttons.length() {
        if let Some(button) = buttons.item(i) {
            button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        }
    }
    on_click.forget();

    shared.clicks_attached.set(true);
    console::log_1(&format!("calculator: {} buttons attached", buttons.length()).into());
    Ok(())
}

/// Initialize the calculator module in the browser
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console::log_1(&"Calculator WASM initialized".into());
}
