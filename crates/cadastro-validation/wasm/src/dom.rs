//! `web-sys` implementations of the orchestrator surfaces.

use std::rc::Rc;

use cadastro_validation_core::{FieldDescriptor, FieldSurface, FormSurface, MarkupConfig};
use chrono::NaiveDate;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

/// Selectors resolved once from the markup config.
pub(crate) struct Markup {
    group_selector: String,
    error_message_selector: String,
    error_state_class: String,
}

impl From<&MarkupConfig> for Markup {
    fn from(config: &MarkupConfig) -> Self {
        Self {
            group_selector: config.group_selector(),
            error_message_selector: config.error_message_selector(),
            error_state_class: config.error_state_class.clone(),
        }
    }
}

#[derive(Clone)]
enum Control {
    Input(HtmlInputElement),
    Select(HtmlSelectElement),
    TextArea(HtmlTextAreaElement),
    // Matched by a custom selector but carries no value.
    Other,
}

impl Control {
    fn of(element: &Element) -> Self {
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            Control::Input(input.clone())
        } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            Control::Select(select.clone())
        } else if let Some(textarea) = element.dyn_ref::<HtmlTextAreaElement>() {
            Control::TextArea(textarea.clone())
        } else {
            Control::Other
        }
    }
}

#[derive(Clone)]
pub(crate) struct DomField {
    element: Element,
    control: Control,
    markup: Rc<Markup>,
}

impl DomField {
    pub(crate) fn new(element: Element, markup: Rc<Markup>) -> Self {
        let control = Control::of(&element);
        Self {
            element,
            control,
            markup,
        }
    }

    pub(crate) fn element(&self) -> &Element {
        &self.element
    }

    fn group(&self) -> Option<Element> {
        self.element
            .closest(&self.markup.group_selector)
            .unwrap_or_else(|err| {
                log_failure("closest", &err);
                None
            })
    }
}

impl FieldSurface for DomField {
    fn descriptor(&self) -> FieldDescriptor {
        let (name, input_type) = match &self.control {
            Control::Input(input) => (input.name(), input.type_()),
            Control::Select(select) => (select.name(), select.type_()),
            Control::TextArea(textarea) => (textarea.name(), textarea.type_()),
            Control::Other => (
                self.element.get_attribute("name").unwrap_or_default(),
                self.element.get_attribute("type").unwrap_or_default(),
            ),
        };
        FieldDescriptor {
            name,
            input_type,
            required: self.element.has_attribute("required"),
        }
    }

    fn value(&self) -> String {
        match &self.control {
            Control::Input(input) => input.value(),
            Control::Select(select) => select.value(),
            Control::TextArea(textarea) => textarea.value(),
            Control::Other => String::new(),
        }
    }

    fn set_error_state(&self, invalid: bool) {
        if let Some(group) = self.group() {
            if let Err(err) = group
                .class_list()
                .toggle_with_force(&self.markup.error_state_class, invalid)
            {
                log_failure("classList.toggle", &err);
            }
        }
    }

    fn set_error_text(&self, text: &str) {
        let Some(group) = self.group() else {
            return;
        };
        match group.query_selector(&self.markup.error_message_selector) {
            Ok(Some(region)) => region.set_text_content(Some(text)),
            Ok(None) => {}
            Err(err) => log_failure("querySelector", &err),
        }
    }

    fn clear_value(&self) {
        match &self.control {
            Control::Input(input) => input.set_value(""),
            Control::Select(select) => select.set_value(""),
            Control::TextArea(textarea) => textarea.set_value(""),
            Control::Other => {}
        }
    }
}

pub(crate) struct DomForm {
    form: HtmlFormElement,
    fields: Vec<DomField>,
}

impl DomForm {
    /// Collects the fields once; controls added later are not validated.
    pub(crate) fn new(
        form: HtmlFormElement,
        field_selector: &str,
        markup: Rc<Markup>,
    ) -> Result<Self, JsValue> {
        let nodes = form.query_selector_all(field_selector)?;
        let fields = (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(|element| DomField::new(element, Rc::clone(&markup)))
            .collect();
        Ok(Self { form, fields })
    }

    pub(crate) fn form(&self) -> &HtmlFormElement {
        &self.form
    }

    pub(crate) fn field_list(&self) -> &[DomField] {
        &self.fields
    }
}

impl FormSurface for DomForm {
    type Field = DomField;

    fn fields(&self) -> Vec<DomField> {
        self.fields.clone()
    }

    fn notify(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.alert_with_message(message) {
            log_failure("alert", &err);
        }
    }

    fn today(&self) -> NaiveDate {
        local_today()
    }

    fn reset(&self) {
        self.form.reset();
    }
}

/// The browser's local calendar date.
pub(crate) fn local_today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .unwrap_or_default()
}

pub(crate) fn log_failure(operation: &str, err: &JsValue) {
    web_sys::console::warn_2(
        &JsValue::from_str(&format!("cadastro-validation: {} failed", operation)),
        err,
    );
}
