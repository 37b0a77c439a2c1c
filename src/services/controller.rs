use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::errors::SubmissionError;
use crate::models::{BookingRequest, Field, SubmissionOutcome};
use crate::services::contact::ContactTransport;
use crate::services::validation::{validate, ValidationErrors};

/// How long the success banner stays up before the outcome returns to idle.
pub const SUCCESS_RESET_DELAY: Duration = Duration::from_secs(5);

/// Everything the booking form renders from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub draft: BookingRequest,
    pub errors: ValidationErrors,
    pub outcome: SubmissionOutcome,
    pub is_submitting: bool,
}

struct Inner {
    form: FormState,
    reset_timer: Option<JoinHandle<()>>,
}

impl Inner {
    fn cancel_reset(&mut self) {
        if let Some(timer) = self.reset_timer.take() {
            timer.abort();
        }
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        self.cancel_reset();
    }
}

fn lock(inner: &Mutex<Inner>) -> MutexGuard<'_, Inner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Clears `is_submitting` when the request settles, however it settles:
/// normal return, transport panic, or the submit future being dropped.
struct InFlight<'a> {
    inner: &'a Mutex<Inner>,
}

impl<'a> InFlight<'a> {
    fn begin(inner: &'a Mutex<Inner>) -> Self {
        lock(inner).form.is_submitting = true;
        Self { inner }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        lock(self.inner).form.is_submitting = false;
    }
}

/// Owns the booking form draft, validates it, and submits it through a
/// [`ContactTransport`].
///
/// Cloning shares the same form state. The controller does not serialize
/// submissions; callers keep the submit action disabled while
/// [`is_submitting`](Self::is_submitting) is true.
#[derive(Clone)]
pub struct LeadSubmissionController {
    inner: Arc<Mutex<Inner>>,
    transport: Arc<dyn ContactTransport>,
    reset_delay: Duration,
}

impl LeadSubmissionController {
    pub fn new(transport: Arc<dyn ContactTransport>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                form: FormState::default(),
                reset_timer: None,
            })),
            transport,
            reset_delay: SUCCESS_RESET_DELAY,
        }
    }

    pub fn with_reset_delay(mut self, delay: Duration) -> Self {
        self.reset_delay = delay;
        self
    }

    pub fn update_field(&self, field: Field, value: impl Into<String>) {
        lock(&self.inner).form.draft.set(field, value.into());
    }

    pub fn draft(&self) -> BookingRequest {
        lock(&self.inner).form.draft.clone()
    }

    pub fn errors(&self) -> ValidationErrors {
        lock(&self.inner).form.errors.clone()
    }

    pub fn outcome(&self) -> SubmissionOutcome {
        lock(&self.inner).form.outcome
    }

    pub fn is_submitting(&self) -> bool {
        lock(&self.inner).form.is_submitting
    }

    pub fn snapshot(&self) -> FormState {
        lock(&self.inner).form.clone()
    }

    /// Validates the draft and, if valid, posts it once.
    ///
    /// An invalid draft returns `Err` with the field errors; nothing is sent
    /// and the outcome is left alone. Otherwise returns the outcome the
    /// submission settled on.
    pub async fn submit(&self) -> Result<SubmissionOutcome, ValidationErrors> {
        let draft = {
            let mut inner = lock(&self.inner);
            let errors = validate(&inner.form.draft);
            if !errors.is_empty() {
                tracing::debug!(invalid_fields = errors.len(), "booking form invalid, not submitting");
                inner.form.errors = errors.clone();
                return Err(errors);
            }
            inner.form.errors = ValidationErrors::default();
            inner.form.outcome = SubmissionOutcome::Idle;
            inner.cancel_reset();
            inner.form.draft.clone()
        };

        let _in_flight = InFlight::begin(&self.inner);

        let result = match self.transport.post_lead(&draft).await {
            Ok(status) if (200..300).contains(&status) => Ok(()),
            Ok(status) => Err(SubmissionError::Rejected { status }),
            Err(e) => Err(SubmissionError::from(e)),
        };

        let mut inner = lock(&self.inner);
        let outcome = match result {
            Ok(()) => {
                tracing::info!(package = %draft.package, "booking request sent");
                inner.form.draft = BookingRequest::default();
                inner.reset_timer = Some(self.schedule_reset());
                SubmissionOutcome::Success
            }
            Err(e @ SubmissionError::Rejected { .. }) => {
                tracing::warn!(error = %e, "booking request rejected");
                SubmissionOutcome::Error
            }
            Err(e) => {
                tracing::error!(error = %e, "booking request failed");
                SubmissionOutcome::Error
            }
        };
        inner.form.outcome = outcome;
        // release before the in-flight guard takes the lock again
        drop(inner);

        Ok(outcome)
    }

    /// Cancels the pending success-banner timer. Call when the form view
    /// goes away.
    pub fn shutdown(&self) {
        lock(&self.inner).cancel_reset();
    }

    fn schedule_reset(&self) -> JoinHandle<()> {
        let weak = Arc::downgrade(&self.inner);
        let delay = self.reset_delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let Some(inner) = weak.upgrade() else {
                return;
            };
            let mut guard = lock(&inner);
            if guard.form.outcome == SubmissionOutcome::Success {
                guard.form.outcome = SubmissionOutcome::Idle;
            }
            guard.reset_timer = None;
        })
    }
}
