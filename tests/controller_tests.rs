use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::oneshot;

use crystal_clear::models::{BookingRequest, Field, SubmissionOutcome};
use crystal_clear::services::contact::ContactTransport;
use crystal_clear::services::controller::SUCCESS_RESET_DELAY;
use crystal_clear::services::validation::{NAME_REQUIRED, PHONE_INVALID};
use crystal_clear::LeadSubmissionController;

// ── Mock Transports ──

struct StaticTransport {
    status: u16,
    calls: Arc<Mutex<Vec<BookingRequest>>>,
}

impl StaticTransport {
    fn new(status: u16) -> (Arc<Self>, Arc<Mutex<Vec<BookingRequest>>>) {
        let calls = Arc::new(Mutex::new(vec![]));
        let transport = Arc::new(Self {
            status,
            calls: Arc::clone(&calls),
        });
        (transport, calls)
    }
}

#[async_trait]
impl ContactTransport for StaticTransport {
    async fn post_lead(&self, request: &BookingRequest) -> anyhow::Result<u16> {
        self.calls.lock().unwrap().push(request.clone());
        Ok(self.status)
    }
}

struct FailingTransport;

#[async_trait]
impl ContactTransport for FailingTransport {
    async fn post_lead(&self, _request: &BookingRequest) -> anyhow::Result<u16> {
        anyhow::bail!("connection refused")
    }
}

/// Holds the request open until the test sends a status.
struct GatedTransport {
    gate: Mutex<Option<oneshot::Receiver<u16>>>,
}

impl GatedTransport {
    fn new() -> (Arc<Self>, oneshot::Sender<u16>) {
        let (tx, rx) = oneshot::channel();
        let transport = Arc::new(Self {
            gate: Mutex::new(Some(rx)),
        });
        (transport, tx)
    }
}

#[async_trait]
impl ContactTransport for GatedTransport {
    async fn post_lead(&self, _request: &BookingRequest) -> anyhow::Result<u16> {
        let rx = self.gate.lock().unwrap().take();
        match rx {
            Some(rx) => Ok(rx.await?),
            None => anyhow::bail!("gate already used"),
        }
    }
}

struct PanickingTransport;

#[async_trait]
impl ContactTransport for PanickingTransport {
    async fn post_lead(&self, _request: &BookingRequest) -> anyhow::Result<u16> {
        panic!("transport blew up");
    }
}

struct NeverTransport;

#[async_trait]
impl ContactTransport for NeverTransport {
    async fn post_lead(&self, _request: &BookingRequest) -> anyhow::Result<u16> {
        std::future::pending::<anyhow::Result<u16>>().await
    }
}

// ── Helpers ──

fn jane() -> BookingRequest {
    BookingRequest::new("Jane", "5551234567", "Basic detail (interior only)", "hi")
}

fn fill(controller: &LeadSubmissionController, draft: &BookingRequest) {
    for field in Field::ALL {
        controller.update_field(field, draft.get(field));
    }
}

async fn wait_until_submitting(controller: &LeadSubmissionController) {
    while !controller.is_submitting() {
        tokio::task::yield_now().await;
    }
}

// ── Field updates ──

#[tokio::test]
async fn test_starts_empty_and_idle() {
    let (transport, _) = StaticTransport::new(200);
    let controller = LeadSubmissionController::new(transport);
    let state = controller.snapshot();
    assert!(state.draft.is_empty());
    assert!(state.errors.is_empty());
    assert_eq!(state.outcome, SubmissionOutcome::Idle);
    assert!(!state.is_submitting);
}

#[tokio::test]
async fn test_update_field_keeps_existing_errors() {
    let (transport, _) = StaticTransport::new(200);
    let controller = LeadSubmissionController::new(transport);

    let errors = controller.submit().await.unwrap_err();
    assert_eq!(errors.len(), 4);

    controller.update_field(Field::Name, "Jane");
    assert_eq!(controller.draft().name, "Jane");
    // errors only refresh on submit
    assert_eq!(controller.errors().get(Field::Name), Some(NAME_REQUIRED));
    assert_eq!(controller.errors().len(), 4);
}

// ── Validation abort ──

#[tokio::test]
async fn test_invalid_draft_never_sends() {
    let (transport, calls) = StaticTransport::new(200);
    let controller = LeadSubmissionController::new(transport);
    fill(&controller, &jane());
    controller.update_field(Field::Phone, "555-123-456");

    let errors = controller.submit().await.unwrap_err();
    assert_eq!(errors.get(Field::Phone), Some(PHONE_INVALID));
    assert_eq!(errors.len(), 1);
    assert_eq!(controller.errors(), errors);
    assert!(calls.lock().unwrap().is_empty());
    assert_eq!(controller.outcome(), SubmissionOutcome::Idle);
    assert!(!controller.is_submitting());
}

#[tokio::test]
async fn test_invalid_draft_leaves_previous_outcome() {
    let (transport, calls) = StaticTransport::new(500);
    let controller = LeadSubmissionController::new(transport);
    fill(&controller, &jane());

    assert_eq!(controller.submit().await, Ok(SubmissionOutcome::Error));
    assert_eq!(calls.lock().unwrap().len(), 1);

    controller.update_field(Field::Name, "  ");
    assert!(controller.submit().await.is_err());
    assert_eq!(calls.lock().unwrap().len(), 1);
    assert_eq!(controller.outcome(), SubmissionOutcome::Error);
}

// ── Success ──

#[tokio::test(start_paused = true)]
async fn test_success_clears_draft_then_reverts_to_idle() {
    let (transport, calls) = StaticTransport::new(200);
    let controller = LeadSubmissionController::new(transport);
    fill(&controller, &jane());

    let outcome = controller.submit().await.unwrap();
    assert_eq!(outcome, SubmissionOutcome::Success);
    assert_eq!(controller.outcome(), SubmissionOutcome::Success);
    assert_eq!(controller.draft(), BookingRequest::default());
    assert!(!controller.is_submitting());
    assert_eq!(calls.lock().unwrap().as_slice(), &[jane()]);

    tokio::time::sleep(SUCCESS_RESET_DELAY - Duration::from_millis(100)).await;
    assert_eq!(controller.outcome(), SubmissionOutcome::Success);

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(controller.outcome(), SubmissionOutcome::Idle);
}

#[tokio::test]
async fn test_any_2xx_is_success() {
    for status in [200, 201, 204, 299] {
        let (transport, _) = StaticTransport::new(status);
        let controller = LeadSubmissionController::new(transport);
        fill(&controller, &jane());
        assert_eq!(controller.submit().await, Ok(SubmissionOutcome::Success), "status {status}");
        controller.shutdown();
    }
}

#[tokio::test]
async fn test_valid_submit_clears_stale_errors() {
    let (transport, _) = StaticTransport::new(200);
    let controller = LeadSubmissionController::new(transport);
    assert!(controller.submit().await.is_err());
    assert!(!controller.errors().is_empty());

    fill(&controller, &jane());
    controller.submit().await.unwrap();
    assert!(controller.errors().is_empty());
    controller.shutdown();
}

#[tokio::test(start_paused = true)]
async fn test_resubmit_restarts_reset_timer() {
    let (transport, calls) = StaticTransport::new(200);
    let controller = LeadSubmissionController::new(transport);

    fill(&controller, &jane());
    controller.submit().await.unwrap();

    tokio::time::sleep(Duration::from_secs(3)).await;
    fill(&controller, &jane());
    controller.submit().await.unwrap();
    assert_eq!(calls.lock().unwrap().len(), 2);

    // first timer would have fired here
    tokio::time::sleep(Duration::from_millis(2_500)).await;
    assert_eq!(controller.outcome(), SubmissionOutcome::Success);

    tokio::time::sleep(Duration::from_secs(3)).await;
    assert_eq!(controller.outcome(), SubmissionOutcome::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_cancels_reset_timer() {
    let (transport, _) = StaticTransport::new(200);
    let controller = LeadSubmissionController::new(transport);
    fill(&controller, &jane());
    controller.submit().await.unwrap();

    controller.shutdown();
    tokio::time::sleep(SUCCESS_RESET_DELAY * 2).await;
    assert_eq!(controller.outcome(), SubmissionOutcome::Success);
}

#[tokio::test(start_paused = true)]
async fn test_custom_reset_delay() {
    let (transport, _) = StaticTransport::new(200);
    let controller = LeadSubmissionController::new(transport).with_reset_delay(Duration::from_secs(1));
    fill(&controller, &jane());
    controller.submit().await.unwrap();

    tokio::time::sleep(Duration::from_millis(1_100)).await;
    assert_eq!(controller.outcome(), SubmissionOutcome::Idle);
}

// ── Failure ──

#[tokio::test]
async fn test_rejected_status_keeps_draft() {
    for status in [400, 404, 422, 500, 502, 302] {
        let (transport, _) = StaticTransport::new(status);
        let controller = LeadSubmissionController::new(transport);
        fill(&controller, &jane());

        assert_eq!(controller.submit().await, Ok(SubmissionOutcome::Error), "status {status}");
        assert_eq!(controller.outcome(), SubmissionOutcome::Error);
        assert_eq!(controller.draft(), jane());
        assert!(!controller.is_submitting());
    }
}

#[tokio::test]
async fn test_transport_error_keeps_draft() {
    let controller = LeadSubmissionController::new(Arc::new(FailingTransport));
    fill(&controller, &jane());

    assert_eq!(controller.submit().await, Ok(SubmissionOutcome::Error));
    assert_eq!(
        controller.draft(),
        BookingRequest::new("Jane", "5551234567", "Basic detail (interior only)", "hi")
    );
    assert!(!controller.is_submitting());
}

#[tokio::test]
async fn test_retry_after_error_can_succeed() {
    let controller = LeadSubmissionController::new(Arc::new(FailingTransport));
    fill(&controller, &jane());
    controller.submit().await.unwrap();
    assert_eq!(controller.outcome(), SubmissionOutcome::Error);

    let (transport, calls) = StaticTransport::new(200);
    let retry = LeadSubmissionController::new(transport);
    fill(&retry, &controller.draft());
    assert_eq!(retry.submit().await, Ok(SubmissionOutcome::Success));
    assert_eq!(calls.lock().unwrap().as_slice(), &[jane()]);
    retry.shutdown();
}

// ── In-flight flag ──

#[tokio::test]
async fn test_is_submitting_while_in_flight() {
    let (transport, release) = GatedTransport::new();
    let controller = LeadSubmissionController::new(transport);
    fill(&controller, &jane());
    assert!(!controller.is_submitting());

    let task = tokio::spawn({
        let controller = controller.clone();
        async move { controller.submit().await }
    });

    wait_until_submitting(&controller).await;
    assert_eq!(controller.outcome(), SubmissionOutcome::Idle);
    assert_eq!(controller.draft(), jane());

    release.send(201).unwrap();
    let outcome = task.await.unwrap().unwrap();
    assert_eq!(outcome, SubmissionOutcome::Success);
    assert!(!controller.is_submitting());
    controller.shutdown();
}

#[tokio::test]
async fn test_stale_outcome_cleared_when_request_starts() {
    let (transport, release) = GatedTransport::new();
    let controller = LeadSubmissionController::new(transport);
    fill(&controller, &jane());
    controller.update_field(Field::Phone, "123");
    assert!(controller.submit().await.is_err());

    controller.update_field(Field::Phone, "5551234567");
    let task = tokio::spawn({
        let controller = controller.clone();
        async move { controller.submit().await }
    });
    wait_until_submitting(&controller).await;
    assert!(controller.errors().is_empty());
    assert_eq!(controller.outcome(), SubmissionOutcome::Idle);

    release.send(503).unwrap();
    assert_eq!(task.await.unwrap(), Ok(SubmissionOutcome::Error));
    assert!(!controller.is_submitting());
}

#[tokio::test]
async fn test_is_submitting_cleared_after_transport_error() {
    let controller = LeadSubmissionController::new(Arc::new(FailingTransport));
    fill(&controller, &jane());
    controller.submit().await.unwrap();
    assert!(!controller.is_submitting());
}

#[tokio::test]
async fn test_is_submitting_cleared_after_transport_panic() {
    let controller = LeadSubmissionController::new(Arc::new(PanickingTransport));
    fill(&controller, &jane());

    let task = tokio::spawn({
        let controller = controller.clone();
        async move { controller.submit().await }
    });
    let err = task.await.unwrap_err();
    assert!(err.is_panic());

    assert!(!controller.is_submitting());
    assert_eq!(controller.outcome(), SubmissionOutcome::Idle);
    assert_eq!(controller.draft(), jane());
}

#[tokio::test]
async fn test_is_submitting_cleared_when_submit_dropped() {
    let controller = LeadSubmissionController::new(Arc::new(NeverTransport));
    fill(&controller, &jane());

    let task = tokio::spawn({
        let controller = controller.clone();
        async move { controller.submit().await }
    });
    wait_until_submitting(&controller).await;

    task.abort();
    assert!(task.await.unwrap_err().is_cancelled());
    assert!(!controller.is_submitting());
    assert_eq!(controller.draft(), jane());
}
