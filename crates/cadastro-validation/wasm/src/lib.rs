//! Cadastro Validation WASM
//!
//! WebAssembly bindings for the registration form validation.
//! Wires the core orchestrator to the page's DOM and exposes the rules to
//! JavaScript.

use std::rc::Rc;

use cadastro_validation_core::{
    self as validation, FieldOrchestrator, MessageCatalog, Rule, RuleContext, ValidationConfig,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlFormElement;

mod dom;
mod handle;

pub use handle::ValidationHandle;

use dom::{local_today, DomForm, Markup};

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn parse_options(options: JsValue) -> Result<ValidationConfig, JsValue> {
    if options.is_undefined() || options.is_null() {
        return Ok(ValidationConfig::default());
    }
    serde_wasm_bindgen::from_value(options)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse options: {}", e)))
}

fn find_form(form_id: &str) -> Option<HtmlFormElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(form_id)?
        .dyn_into::<HtmlFormElement>()
        .ok()
}

/// Attach validation to the form with the given id
///
/// # Arguments
/// * `form_id` - `id` attribute of the form element
/// * `options` - optional object overriding markup classes, messages,
///   minimum age and notification texts
///
/// # Returns
/// A handle owning the listeners, or `undefined` when no such form exists.
///
/// # Example (JavaScript)
/// ```javascript
/// const validation = setupValidation('form-cadastro');
/// // later, when the template is unmounted:
/// validation?.dispose();
/// ```
#[wasm_bindgen(js_name = setupValidation)]
pub fn setup_validation(
    form_id: &str,
    options: JsValue,
) -> Result<Option<ValidationHandle>, JsValue> {
    let config = parse_options(options)?;

    let Some(form) = find_form(form_id) else {
        web_sys::console::debug_1(&JsValue::from_str(&format!(
            "cadastro-validation: no form with id '{}', skipping",
            form_id
        )));
        return Ok(None);
    };

    let markup = Rc::new(Markup::from(&config.markup));
    let form = Rc::new(DomForm::new(form, &config.markup.field_selector, markup)?);
    let orchestrator = Rc::new(FieldOrchestrator::new(config));

    ValidationHandle::attach(orchestrator, form).map(Some)
}

/// Run one rule by identifier
///
/// Returns `""` when the value is valid, the default message otherwise.
///
/// # Example (JavaScript)
/// ```javascript
/// validateRule('cep', '12345-678'); // ""
/// validateRule('telefone', '123');  // "Telefone deve ter 10 ou 11 dígitos."
/// ```
#[wasm_bindgen(js_name = validateRule)]
pub fn validate_rule(rule_id: &str, value: &str) -> Result<String, JsValue> {
    let rule = Rule::from_identifier(rule_id)
        .ok_or_else(|| JsValue::from_str(&format!("Unknown rule: {}", rule_id)))?;

    Ok(evaluate_message(rule, value, RuleContext::new(local_today())))
}

fn evaluate_message(rule: Rule, value: &str, ctx: RuleContext) -> String {
    match rule.evaluate(value, &ctx) {
        Ok(()) => String::new(),
        Err(err) => MessageCatalog::default().message_for(&err),
    }
}

/// Quick CPF validation
#[wasm_bindgen(js_name = isValidCpf)]
pub fn is_valid_cpf_js(value: &str) -> bool {
    validation::validate_cpf(value).is_ok()
}

/// Quick email validation
#[wasm_bindgen(js_name = isValidEmail)]
pub fn is_valid_email_js(email: &str) -> bool {
    validation::is_valid_email(email)
}
