//! Rule identifiers and the static dispatch table.
//!
//! Each [`Rule`] owns exactly one row in [`RULE_TABLE`], indexed by the
//! variant's discriminant. Field names and input types are resolved to a
//! `Rule` once, in [`Rule::specific_for`] and [`select_rule`].

use chrono::NaiveDate;

use crate::birth_date::validate_birth_date;
use crate::contact::{validate_email, validate_phone, validate_postal_code};
use crate::cpf::validate_cpf;
use crate::error::ValidationError;

/// Inputs a rule may need besides the raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleContext {
    /// Reference date for age computation.
    pub today: NaiveDate,
    pub minimum_age: u32,
}

impl RuleContext {
    pub const DEFAULT_MINIMUM_AGE: u32 = 18;

    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            minimum_age: Self::DEFAULT_MINIMUM_AGE,
        }
    }

    pub fn with_minimum_age(mut self, minimum_age: u32) -> Self {
        self.minimum_age = minimum_age;
        self
    }
}

/// Static description of a form control, as read from its attributes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldDescriptor {
    pub name: String,
    /// Semantic input type (`"text"`, `"email"`, `"date"`, ...).
    pub input_type: String,
    pub required: bool,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, input_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            input_type: input_type.into(),
            required: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    Required = 0,
    Cpf = 1,
    BirthDate = 2,
    Email = 3,
    Phone = 4,
    PostalCode = 5,
    None = 6,
}

pub type Evaluator = fn(&str, &RuleContext) -> Result<(), ValidationError>;

pub struct RuleEntry {
    pub rule: Rule,
    /// Identifier used by the markup (`name="cpf"`) and the JS helpers.
    pub identifier: &'static str,
    pub evaluate: Evaluator,
}

pub static RULE_TABLE: [RuleEntry; 7] = [
    RuleEntry {
        rule: Rule::Required,
        identifier: "required",
        evaluate: required,
    },
    RuleEntry {
        rule: Rule::Cpf,
        identifier: "cpf",
        evaluate: cpf,
    },
    RuleEntry {
        rule: Rule::BirthDate,
        identifier: "dataNascimento",
        evaluate: birth_date,
    },
    RuleEntry {
        rule: Rule::Email,
        identifier: "email",
        evaluate: email,
    },
    RuleEntry {
        rule: Rule::Phone,
        identifier: "telefone",
        evaluate: phone,
    },
    RuleEntry {
        rule: Rule::PostalCode,
        identifier: "cep",
        evaluate: postal_code,
    },
    RuleEntry {
        rule: Rule::None,
        identifier: "none",
        evaluate: always_valid,
    },
];

fn required(value: &str, _ctx: &RuleContext) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::MissingRequiredValue)
    } else {
        Ok(())
    }
}

fn cpf(value: &str, _ctx: &RuleContext) -> Result<(), ValidationError> {
    validate_cpf(value)
}

fn birth_date(value: &str, ctx: &RuleContext) -> Result<(), ValidationError> {
    validate_birth_date(value, ctx.today, ctx.minimum_age)
}

fn email(value: &str, _ctx: &RuleContext) -> Result<(), ValidationError> {
    validate_email(value)
}

fn phone(value: &str, _ctx: &RuleContext) -> Result<(), ValidationError> {
    validate_phone(value)
}

fn postal_code(value: &str, _ctx: &RuleContext) -> Result<(), ValidationError> {
    validate_postal_code(value)
}

fn always_valid(_value: &str, _ctx: &RuleContext) -> Result<(), ValidationError> {
    Ok(())
}

impl Rule {
    fn entry(self) -> &'static RuleEntry {
        &RULE_TABLE[self as usize]
    }

    pub fn identifier(self) -> &'static str {
        self.entry().identifier
    }

    pub fn from_identifier(identifier: &str) -> Option<Rule> {
        RULE_TABLE
            .iter()
            .find(|entry| entry.identifier == identifier)
            .map(|entry| entry.rule)
    }

    pub fn evaluate(self, value: &str, ctx: &RuleContext) -> Result<(), ValidationError> {
        (self.entry().evaluate)(value, ctx)
    }

    /// The field-specific rule, ignoring the required flag.
    ///
    /// Precedence: name `cpf`, name `dataNascimento`, type `email`,
    /// name `telefone`, name `cep`.
    pub fn specific_for(name: &str, input_type: &str) -> Rule {
        match (name, input_type) {
            ("cpf", _) => Rule::Cpf,
            ("dataNascimento", _) => Rule::BirthDate,
            (_, "email") => Rule::Email,
            ("telefone", _) => Rule::Phone,
            ("cep", _) => Rule::PostalCode,
            _ => Rule::None,
        }
    }
}

/// Picks the single rule that decides the field's current value.
///
/// A required field holding only whitespace is judged by [`Rule::Required`];
/// anything else goes to its specific rule.
pub fn select_rule(field: &FieldDescriptor, value: &str) -> Rule {
    if field.required && value.trim().is_empty() {
        Rule::Required
    } else {
        Rule::specific_for(&field.name, &field.input_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn ctx() -> RuleContext {
        RuleContext::new(NaiveDate::from_ymd_opt(2026, 10, 17).unwrap())
    }

    #[test]
    fn test_table_is_indexed_by_discriminant() {
        for (index, entry) in RULE_TABLE.iter().enumerate() {
            assert_eq!(entry.rule as usize, index, "{}", entry.identifier);
        }
    }

    #[rstest]
    #[case("required", Rule::Required)]
    #[case("cpf", Rule::Cpf)]
    #[case("dataNascimento", Rule::BirthDate)]
    #[case("email", Rule::Email)]
    #[case("telefone", Rule::Phone)]
    #[case("cep", Rule::PostalCode)]
    #[case("none", Rule::None)]
    fn test_identifier_round_trip(#[case] identifier: &str, #[case] rule: Rule) {
        assert_eq!(Rule::from_identifier(identifier), Some(rule));
        assert_eq!(rule.identifier(), identifier);
    }

    #[test]
    fn test_unknown_identifier() {
        assert_eq!(Rule::from_identifier("minlength"), None);
    }

    #[test]
    fn test_required_rule() {
        assert_eq!(
            Rule::Required.evaluate("   ", &ctx()),
            Err(ValidationError::MissingRequiredValue)
        );
        assert_eq!(Rule::Required.evaluate(" x ", &ctx()), Ok(()));
    }

    #[test]
    fn test_none_always_passes() {
        assert_eq!(Rule::None.evaluate("", &ctx()), Ok(()));
        assert_eq!(Rule::None.evaluate("anything", &ctx()), Ok(()));
    }

    #[test]
    fn test_birth_date_uses_context() {
        let strict = ctx().with_minimum_age(21);
        assert_eq!(Rule::BirthDate.evaluate("2006-01-01", &ctx()), Ok(()));
        assert_eq!(
            Rule::BirthDate.evaluate("2006-01-01", &strict),
            Err(ValidationError::UnderageApplicant { minimum: 21 })
        );
    }

    #[rstest]
    #[case("cpf", "text", Rule::Cpf)]
    #[case("dataNascimento", "date", Rule::BirthDate)]
    #[case("contato", "email", Rule::Email)]
    #[case("telefone", "tel", Rule::Phone)]
    #[case("cep", "text", Rule::PostalCode)]
    #[case("nome", "text", Rule::None)]
    // Name-based CPF rule wins over the email type.
    #[case("cpf", "email", Rule::Cpf)]
    // Email type wins over the telefone name.
    #[case("telefone", "email", Rule::Email)]
    fn test_specific_rule_precedence(
        #[case] name: &str,
        #[case] input_type: &str,
        #[case] expected: Rule,
    ) {
        assert_eq!(Rule::specific_for(name, input_type), expected);
    }

    #[test]
    fn test_required_flag_takes_precedence_when_empty() {
        let cpf = FieldDescriptor::new("cpf", "text").required();
        assert_eq!(select_rule(&cpf, " "), Rule::Required);
        assert_eq!(select_rule(&cpf, "123"), Rule::Cpf);

        let optional = FieldDescriptor::new("cpf", "text");
        assert_eq!(select_rule(&optional, ""), Rule::Cpf);
    }
}
