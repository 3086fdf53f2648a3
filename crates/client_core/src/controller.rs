//! Submit handling for the sign-up form.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use tracing::{debug, info, warn};

use crate::{
    api::AccountApi,
    error::SignUpError,
    form::{FieldErrorMap, FormErrorSink},
    navigation::{Navigator, Route},
    notifications::{Notification, NotificationSink},
    validation::{validate_sign_up, SignUpInput, Validation},
};

pub const SUCCESS_TITLE: &str = "Registration succeeded!";
pub const SUCCESS_DESCRIPTION: &str = "You can now log you in!";
pub const FAILURE_TITLE: &str = "Registration error";
pub const FAILURE_DESCRIPTION: &str = "An error occured during registration. Try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; these errors are now displayed on the form.
    Rejected(FieldErrorMap),
    Registered,
    /// The backend call failed; the user got the generic error notification.
    Failed,
}

pub struct RegistrationFormController {
    form: Arc<dyn FormErrorSink>,
    api: Arc<dyn AccountApi>,
    notifications: Arc<dyn NotificationSink>,
    navigator: Arc<dyn Navigator>,
    in_flight: AtomicUsize,
}

struct InFlightGuard<'a>(&'a AtomicUsize);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl RegistrationFormController {
    pub fn new(
        form: Arc<dyn FormErrorSink>,
        api: Arc<dyn AccountApi>,
        notifications: Arc<dyn NotificationSink>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            form,
            api,
            notifications,
            navigator,
            in_flight: AtomicUsize::new(0),
        }
    }

    /// Submissions currently waiting on the backend.
    pub fn pending_submissions(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    pub async fn submit(&self, input: SignUpInput) -> SubmitOutcome {
        self.form.set_errors(FieldErrorMap::new());

        match self.register(input).await {
            Ok(()) => {
                self.notifications
                    .push(Notification::success(SUCCESS_TITLE, SUCCESS_DESCRIPTION));
                self.navigator.push(Route::Login);
                SubmitOutcome::Registered
            }
            Err(SignUpError::Validation(violations)) => {
                let errors = FieldErrorMap::from_violations(&violations);
                debug!(fields = errors.len(), "sign-up input rejected");
                self.form.set_errors(errors.clone());
                SubmitOutcome::Rejected(errors)
            }
            Err(SignUpError::Request(err)) => {
                warn!(error = %err, "create-account request failed");
                self.notifications
                    .push(Notification::error(FAILURE_TITLE, FAILURE_DESCRIPTION));
                SubmitOutcome::Failed
            }
        }
    }

    pub fn back_to_login(&self) {
        self.navigator.push(Route::Login);
    }

    async fn register(&self, input: SignUpInput) -> Result<(), SignUpError> {
        let input = match validate_sign_up(input) {
            Validation::Valid(input) => input,
            Validation::Invalid(violations) => return Err(SignUpError::Validation(violations)),
        };

        // Overlapping submits are allowed through; only surfaced in logs.
        let previously_pending = self.in_flight.fetch_add(1, Ordering::SeqCst);
        let _guard = InFlightGuard(&self.in_flight);
        if previously_pending > 0 {
            warn!(
                pending = previously_pending,
                "sign-up submitted while an earlier submission is still pending"
            );
        }

        debug!(email = %input.email, "creating account");
        self.api.create_user(&input.into_request()).await?;
        info!("account created");
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
