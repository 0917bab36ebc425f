//! Cadastro Validation Core
//!
//! Validation rules for the registration form (CPF, birth date, e-mail,
//! phone, CEP and required fields) plus the field orchestrator that renders
//! outcomes next to each field and gates submission.
//!
//! The orchestrator is written against [`FormSurface`] and [`FieldSurface`],
//! so the same logic drives the browser bindings and native tests.

pub mod birth_date;
pub mod config;
pub mod contact;
pub mod cpf;
pub mod error;
pub mod messages;
pub mod orchestrator;
pub mod rules;

pub use birth_date::{age_on, parse_birth_date, validate_birth_date};
pub use config::{MarkupConfig, NotificationConfig, RuleConfig, ValidationConfig};
pub use contact::{
    digits_only, is_valid_email, validate_email, validate_phone, validate_postal_code,
};
pub use cpf::{cpf_check_digits, validate_cpf};
pub use error::{ErrorKind, ValidationError};
pub use messages::MessageCatalog;
pub use orchestrator::{FieldOrchestrator, FieldOutcome, FieldSurface, FormSurface, SubmitOutcome};
pub use rules::{select_rule, FieldDescriptor, Rule, RuleContext, RULE_TABLE};
