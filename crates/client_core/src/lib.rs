//! Client side of account registration: form validation, the create-account
//! call, and the notification/navigation side effects that follow it.

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod form;
pub mod navigation;
pub mod notifications;
pub mod validation;

pub use api::{AccountApi, HttpAccountApi};
pub use config::{load_settings, ClientSettings};
pub use controller::{RegistrationFormController, SubmitOutcome};
pub use error::{RequestError, SignUpError};
pub use form::{FieldErrorMap, FormErrorSink, SignUpForm};
pub use navigation::{History, Navigator, Route};
pub use notifications::{Notification, NotificationCenter, NotificationEvent, NotificationSink};
pub use validation::{validate_sign_up, SignUpInput, Validation};
