//! Field orchestration: rule selection, error rendering and submit gating.
//!
//! The orchestrator never touches a DOM directly. Hosts expose the form
//! through [`FormSurface`] and each control through [`FieldSurface`]; the
//! browser bindings implement both over `web-sys`, tests over plain structs.

use chrono::NaiveDate;

use crate::config::ValidationConfig;
use crate::error::ValidationError;
use crate::rules::{select_rule, FieldDescriptor, Rule, RuleContext};

/// A single form control as seen by the orchestrator.
pub trait FieldSurface {
    fn descriptor(&self) -> FieldDescriptor;

    fn value(&self) -> String;

    /// Toggles the error state of the enclosing field group, if any.
    fn set_error_state(&self, invalid: bool);

    /// Replaces the text of the field's error region, if any.
    fn set_error_text(&self, text: &str);

    fn clear_value(&self);
}

/// The form being validated.
pub trait FormSurface {
    type Field: FieldSurface;

    /// Validated controls, in document order.
    fn fields(&self) -> Vec<Self::Field>;

    /// Blocking notification (an `alert` in the browser).
    fn notify(&self, message: &str);

    /// Host's local calendar date, used for age checks.
    fn today(&self) -> NaiveDate;

    /// Empties every field after a successful submit.
    fn reset(&self) {
        for field in self.fields() {
            field.clear_value();
        }
    }
}

/// Result of evaluating one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldOutcome {
    pub rule: Rule,
    pub result: Result<(), ValidationError>,
    message: String,
}

impl FieldOutcome {
    pub fn valid(rule: Rule) -> Self {
        Self {
            rule,
            result: Ok(()),
            message: String::new(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.result.is_ok()
    }

    /// Rendered message; empty when the field is valid.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// What happened on submit.
///
/// The default submission is suppressed either way: a successful submit is
/// simulated, not sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    /// Names of the failing fields, in document order.
    Rejected { failed: Vec<String> },
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    pub fn suppress_default(&self) -> bool {
        true
    }
}

pub struct FieldOrchestrator {
    config: ValidationConfig,
}

impl FieldOrchestrator {
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    fn context(&self, today: NaiveDate) -> RuleContext {
        RuleContext::new(today).with_minimum_age(self.config.rules.minimum_age)
    }

    /// Evaluates the field's current value without rendering anything.
    pub fn evaluate<F: FieldSurface>(&self, field: &F, today: NaiveDate) -> FieldOutcome {
        let descriptor = field.descriptor();
        let value = field.value();
        let rule = select_rule(&descriptor, &value);
        let result = rule.evaluate(&value, &self.context(today));

        let message = match &result {
            Ok(()) => String::new(),
            Err(err) => self.config.messages.message_for(err),
        };

        tracing::debug!(
            field = %descriptor.name,
            rule = rule.identifier(),
            valid = result.is_ok(),
            "Evaluated field"
        );
        if let Err(err) = &result {
            tracing::debug!(field = %descriptor.name, "Field rejected: {}", err);
        }

        FieldOutcome {
            rule,
            result,
            message,
        }
    }

    /// Writes an outcome into the field's group and error region.
    pub fn render<F: FieldSurface>(&self, field: &F, outcome: &FieldOutcome) {
        field.set_error_state(!outcome.message().is_empty());
        field.set_error_text(outcome.message());
    }

    /// Evaluates and renders; returns whether the field is valid.
    pub fn validate_field<F: FieldSurface>(&self, field: &F, today: NaiveDate) -> bool {
        let outcome = self.evaluate(field, today);
        self.render(field, &outcome);
        outcome.is_valid()
    }

    /// Focus lost: authoritative validation.
    pub fn handle_blur<F: FieldSurface>(&self, field: &F, today: NaiveDate) {
        self.validate_field(field, today);
    }

    /// Value changed: clear the error while the user types.
    ///
    /// Re-validation waits for the next blur. An emptied field keeps whatever
    /// error it showed.
    pub fn handle_input<F: FieldSurface>(&self, field: &F) {
        if !field.value().is_empty() {
            self.render(field, &FieldOutcome::valid(Rule::None));
        }
    }

    /// Validates every field, then notifies and resets (or not).
    pub fn handle_submit<S: FormSurface>(&self, form: &S) -> SubmitOutcome {
        let today = form.today();
        let fields = form.fields();

        // Every field is validated so each failing one shows its message.
        let failed: Vec<String> = fields
            .iter()
            .filter(|field| !self.validate_field(*field, today))
            .map(|field| field.descriptor().name)
            .collect();

        if failed.is_empty() {
            tracing::info!(fields = fields.len(), "Registration form accepted");
            form.notify(&self.config.notifications.successful_submission);
            form.reset();
            SubmitOutcome::Accepted
        } else {
            tracing::debug!(?failed, "Registration form rejected");
            form.notify(&self.config.notifications.invalid_submission);
            SubmitOutcome::Rejected { failed }
        }
    }
}

impl Default for FieldOrchestrator {
    fn default() -> Self {
        Self::new(ValidationConfig::default())
    }
}
