//! User input validation.
//!
//! Two explicit stages: a pure schema check (presence, format, length)
//! followed by an email uniqueness query against the repository. Both
//! stages feed one aggregated [`FieldErrors`] map so a single response
//! can show every violated rule.

use std::sync::Arc;

use serde::Deserialize;
use uuid::Uuid;
use validator::ValidateEmail;

use crate::config::MIN_PASSWORD_LENGTH;
use crate::errors::{AppError, AppResult, FieldErrors};
use crate::infra::UserRepository;

/// Pre-localized validation messages keyed by rule.
pub mod messages {
    pub const NAME_REQUIRED: &str = "Le champ nom est obligatoire.";
    pub const EMAIL_REQUIRED: &str = "Le champ email est obligatoire.";
    pub const EMAIL_INVALID: &str = "Veuillez entrer une adresse email valide.";
    pub const EMAIL_TAKEN: &str = "L'email est deja en cours d'utilisation.";
    pub const PASSWORD_REQUIRED: &str = "Le champ mot de passe est obligatoire.";
    pub const PASSWORD_TOO_SHORT: &str = "Le mot de passe doit contenir au moins 8 caracteres.";
}

const FIELD_NAME: &str = "name";
const FIELD_EMAIL: &str = "email";
const FIELD_PASSWORD: &str = "password";

/// Which ruleset applies: creation requires a password, updates make it
/// optional and exclude the edited record from the uniqueness check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationMode {
    Create,
    UpdateExisting { id: Uuid, current_email: String },
}

/// Raw form fields as submitted. Missing fields deserialize to empty
/// strings, which the validator treats as absent; extra fields are
/// dropped by the extractor.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub role: String,
}

/// Normalized fields produced by a successful validation.
///
/// `password` is `None` when the update form left it blank, in which
/// case the stored credential is retained unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserFields {
    pub name: String,
    pub email: String,
    pub password: Option<String>,
    pub role: String,
}

/// Validates raw user input against the admin form ruleset.
pub struct UserValidator {
    repo: Arc<dyn UserRepository>,
}

impl UserValidator {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// Run both validation stages.
    ///
    /// Returns the normalized field set, or `AppError::Validation` with
    /// every violated rule. Repository failures during the uniqueness
    /// stage propagate unchanged.
    pub async fn validate(&self, mode: &ValidationMode, input: &UserInput) -> AppResult<UserFields> {
        let mut errors = FieldErrors::new();

        let name = input.name.trim();
        if name.is_empty() {
            errors.push(FIELD_NAME, messages::NAME_REQUIRED);
        }

        let email = input.email.trim();
        let email_shape_ok = if email.is_empty() {
            errors.push(FIELD_EMAIL, messages::EMAIL_REQUIRED);
            false
        } else if !email.validate_email() {
            errors.push(FIELD_EMAIL, messages::EMAIL_INVALID);
            false
        } else {
            true
        };

        let password = (!input.password.is_empty()).then(|| input.password.clone());
        match (&password, mode) {
            (None, ValidationMode::Create) => {
                errors.push(FIELD_PASSWORD, messages::PASSWORD_REQUIRED);
            }
            (Some(p), _) if p.chars().count() < MIN_PASSWORD_LENGTH => {
                errors.push(FIELD_PASSWORD, messages::PASSWORD_TOO_SHORT);
            }
            _ => {}
        }

        // Uniqueness stage runs only for a well-formed email
        if email_shape_ok && self.email_conflicts(mode, email).await? {
            errors.push(FIELD_EMAIL, messages::EMAIL_TAKEN);
        }

        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        Ok(UserFields {
            name: name.to_string(),
            email: email.to_string(),
            password,
            role: input.role.clone(),
        })
    }

    /// "Does any user other than the excluded record own this email."
    /// Keeping the current email never conflicts with itself.
    async fn email_conflicts(&self, mode: &ValidationMode, email: &str) -> AppResult<bool> {
        match mode {
            ValidationMode::Create => self.repo.email_in_use(email, None).await,
            ValidationMode::UpdateExisting { id, current_email } => {
                if email == current_email.as_str() {
                    return Ok(false);
                }
                self.repo.email_in_use(email, Some(*id)).await
            }
        }
    }
}
