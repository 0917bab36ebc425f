//! User-facing messages for each validation failure.

use serde::{Deserialize, Serialize};

use crate::error::{ErrorKind, ValidationError};

/// Text shown in the error region of a field.
///
/// `underage` may contain `{min}`, replaced by the configured minimum age.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageCatalog {
    pub required: String,
    pub cpf_malformed: String,
    pub cpf_checksum: String,
    pub underage: String,
    pub birth_date_malformed: String,
    pub email: String,
    pub phone: String,
    pub postal_code: String,
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self {
            required: "Este campo é obrigatório.".to_string(),
            cpf_malformed: "CPF deve ter 11 dígitos e ser válido.".to_string(),
            cpf_checksum: "CPF inválido.".to_string(),
            underage: "É necessário ter no mínimo {min} anos para se cadastrar.".to_string(),
            birth_date_malformed: "Data de nascimento inválida.".to_string(),
            email: "E-mail inválido.".to_string(),
            phone: "Telefone deve ter 10 ou 11 dígitos.".to_string(),
            postal_code: "CEP deve ter 8 dígitos.".to_string(),
        }
    }
}

impl MessageCatalog {
    fn template(&self, kind: ErrorKind) -> &str {
        match kind {
            ErrorKind::MissingRequiredValue => &self.required,
            ErrorKind::MalformedCpf => &self.cpf_malformed,
            ErrorKind::InvalidChecksum => &self.cpf_checksum,
            ErrorKind::UnderageApplicant => &self.underage,
            ErrorKind::MalformedDate => &self.birth_date_malformed,
            ErrorKind::MalformedEmail => &self.email,
            ErrorKind::MalformedPhoneLength => &self.phone,
            ErrorKind::MalformedPostalCodeLength => &self.postal_code,
        }
    }

    pub fn message_for(&self, error: &ValidationError) -> String {
        let template = self.template(error.kind());
        match error {
            ValidationError::UnderageApplicant { minimum } => {
                template.replace("{min}", &minimum.to_string())
            }
            _ => template.to_string(),
        }
    }
}
