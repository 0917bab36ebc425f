//! Event listener wiring and teardown.

use std::rc::Rc;

use cadastro_validation_core::FieldOrchestrator;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};

use crate::dom::{local_today, log_failure, DomForm};

struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

/// Owns the form's listeners.
///
/// Only `dispose()` detaches them. Dropping the handle (including when the JS
/// wrapper is garbage-collected) leaves validation attached for the lifetime
/// of the page.
#[wasm_bindgen]
pub struct ValidationHandle {
    listeners: Vec<Listener>,
}

impl ValidationHandle {
    fn listen(
        &mut self,
        target: EventTarget,
        event: &'static str,
        callback: Closure<dyn FnMut(Event)>,
    ) -> Result<(), JsValue> {
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        self.listeners.push(Listener {
            target,
            event,
            callback,
        });
        Ok(())
    }

    /// Registers blur and input on every field and submit on the form.
    pub(crate) fn attach(
        orchestrator: Rc<FieldOrchestrator>,
        form: Rc<DomForm>,
    ) -> Result<Self, JsValue> {
        let mut handle = Self {
            listeners: Vec::with_capacity(form.field_list().len() * 2 + 1),
        };

        for field in form.field_list() {
            let target: EventTarget = field.element().clone().unchecked_into();

            let on_blur = {
                let orchestrator = Rc::clone(&orchestrator);
                let field = field.clone();
                Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
                    orchestrator.handle_blur(&field, local_today());
                })
            };
            handle.listen(target.clone(), "blur", on_blur)?;

            let on_input = {
                let orchestrator = Rc::clone(&orchestrator);
                let field = field.clone();
                Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
                    orchestrator.handle_input(&field);
                })
            };
            handle.listen(target, "input", on_input)?;
        }

        let on_submit = {
            let form = Rc::clone(&form);
            Closure::<dyn FnMut(Event)>::new(move |event: Event| {
                let outcome = orchestrator.handle_submit(form.as_ref());
                if outcome.suppress_default() {
                    event.prevent_default();
                }
            })
        };
        let target: EventTarget = form.form().clone().unchecked_into();
        handle.listen(target, "submit", on_submit)?;

        Ok(handle)
    }

    fn detach(&mut self) {
        for listener in self.listeners.drain(..) {
            if let Err(err) = listener.target.remove_event_listener_with_callback(
                listener.event,
                listener.callback.as_ref().unchecked_ref(),
            ) {
                log_failure("removeEventListener", &err);
            }
        }
    }
}

#[wasm_bindgen]
impl ValidationHandle {
    /// Number of registered listeners (two per field plus submit).
    #[wasm_bindgen(getter, js_name = listenerCount)]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Removes every listener registered by `setupValidation`.
    pub fn dispose(&mut self) {
        self.detach();
    }
}

impl Drop for ValidationHandle {
    fn drop(&mut self) {
        // Still-registered callbacks must outlive the handle.
        for listener in self.listeners.drain(..) {
            listener.callback.forget();
        }
    }
}
