//! Submission lifecycle behaviour driven through scripted service doubles.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use repix_core::model::{
    OutputFormat, ResizeRequest, ResizeTarget, ResultSet, SizePreset, SourceImage, TargetSet,
};
use repix_core::{
    NotificationManager, ResizeService, SUBMISSION_FAILED_MESSAGE, ServiceError,
    SubmissionOrchestrator,
};
use reqwest::StatusCode;
use tokio::sync::Notify;

fn request_for(targets: &[ResizeTarget]) -> ResizeRequest {
    ResizeRequest::new(
        Arc::new(SourceImage::new("photo.jpg", vec![0xFF, 0xD8, 0xFF])),
        OutputFormat::Jpeg,
        TargetSet::from_targets(targets.iter().copied()).expect("targets"),
    )
}

fn sample_results() -> ResultSet {
    ResultSet::from_reply(
        "data:image/jpeg;base64,AAAA",
        "photo.jpg",
        vec![
            (
                "thumbnail".to_string(),
                "data:image/jpeg;base64,BBBB".to_string(),
            ),
            (
                "medium".to_string(),
                "data:image/jpeg;base64,CCCC".to_string(),
            ),
        ],
    )
}

/// Serves scripted outcomes in order and counts calls.
struct ScriptedService {
    calls: AtomicUsize,
    outcomes: Mutex<Vec<Result<ResultSet, ServiceError>>>,
}

impl ScriptedService {
    fn new(outcomes: Vec<Result<ResultSet, ServiceError>>) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            outcomes: Mutex::new(outcomes),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ResizeService for ScriptedService {
    async fn resize(&self, _request: &ResizeRequest) -> Result<ResultSet, ServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcomes.lock().unwrap().remove(0)
    }
}

/// Holds every call open until released, so tests can look around while a
/// submission is in flight.
struct GatedService {
    calls: AtomicUsize,
    release: Notify,
    results: ResultSet,
}

impl GatedService {
    fn new(results: ResultSet) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            release: Notify::new(),
            results,
        })
    }
}

#[async_trait]
impl ResizeService for GatedService {
    async fn resize(&self, _request: &ResizeRequest) -> Result<ResultSet, ServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.release.notified().await;
        Ok(self.results.clone())
    }
}

#[tokio::test]
async fn second_submit_is_dropped_while_one_is_in_flight() {
    let service = GatedService::new(sample_results());
    let orchestrator = SubmissionOrchestrator::new(service.clone(), NotificationManager::new());
    let mut state = orchestrator.subscribe();

    assert!(orchestrator.submit(request_for(&[ResizeTarget::Preset(SizePreset::Thumbnail)])));
    state
        .wait_for(|s| s.is_submitting())
        .await
        .expect("orchestrator alive");

    assert!(!orchestrator.submit(request_for(&[ResizeTarget::Preset(SizePreset::Large)])));

    service.release.notify_one();
    let settled = state
        .wait_for(|s| s.is_settled())
        .await
        .expect("orchestrator alive")
        .clone();

    assert_eq!(service.calls.load(Ordering::SeqCst), 1);
    assert_eq!(settled.results().expect("succeeded").variant_count(), 2);
}

#[tokio::test]
async fn success_applies_results_and_stays_quiet() {
    let service = ScriptedService::new(vec![Ok(sample_results())]);
    let notifier = NotificationManager::new();
    let orchestrator = SubmissionOrchestrator::new(service.clone(), notifier.clone());
    let mut state = orchestrator.subscribe();

    assert!(orchestrator.submit(request_for(&[
        ResizeTarget::Preset(SizePreset::Thumbnail),
        ResizeTarget::Preset(SizePreset::Medium),
    ])));
    let settled = state
        .wait_for(|s| s.is_settled())
        .await
        .expect("orchestrator alive")
        .clone();

    let results = settled.results().expect("succeeded");
    let labels: Vec<&str> = results.variant_labels().collect();
    assert_eq!(labels, vec!["medium", "thumbnail"]);
    assert_eq!(
        results.variant("thumbnail").expect("variant").download_name,
        "thumbnail-photo.jpg"
    );
    // Success is visible in the state; no notification fires for it.
    assert_eq!(notifier.current(), None);
}

#[tokio::test]
async fn a_settled_outcome_is_replaced_by_the_next_submission() {
    let service = ScriptedService::new(vec![
        Err(ServiceError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: "boom".to_string(),
        }),
        Ok(sample_results()),
    ]);
    let orchestrator = SubmissionOrchestrator::new(service.clone(), NotificationManager::new());
    let mut state = orchestrator.subscribe();

    assert!(orchestrator.submit(request_for(&[ResizeTarget::Preset(SizePreset::Thumbnail)])));
    let first = state
        .wait_for(|s| s.is_settled())
        .await
        .expect("orchestrator alive")
        .clone();
    assert_eq!(first.failure_message(), Some(SUBMISSION_FAILED_MESSAGE));

    // Settled is not in flight; the next submit re-enters and wins.
    assert!(orchestrator.submit(request_for(&[ResizeTarget::Preset(SizePreset::Thumbnail)])));
    let second = state
        .wait_for(|s| s.results().is_some())
        .await
        .expect("orchestrator alive")
        .clone();

    assert_eq!(service.calls(), 2);
    assert_eq!(second.results().expect("succeeded").variant_count(), 2);
}

#[tokio::test]
async fn every_failure_shape_collapses_to_one_message() {
    for error in failure_cases().await {
        let service = ScriptedService::new(vec![Err(error)]);
        let notifier = NotificationManager::new();
        let orchestrator = SubmissionOrchestrator::new(service, notifier.clone());
        let mut state = orchestrator.subscribe();
        let mut notifications = notifier.subscribe();

        assert!(orchestrator.submit(request_for(&[ResizeTarget::Custom {
            width: 3,
            height: 4
        }])));
        let settled = state
            .wait_for(|s| s.is_settled())
            .await
            .expect("orchestrator alive")
            .clone();
        assert_eq!(settled.failure_message(), Some(SUBMISSION_FAILED_MESSAGE));

        let notification = notifications
            .wait_for(|slot| slot.is_some())
            .await
            .expect("notifier alive")
            .clone()
            .expect("notification raised");
        assert_eq!(notification.message, SUBMISSION_FAILED_MESSAGE);
        assert!(notification.is_error());
        // First and only notification this manager ever issued.
        assert_eq!(notification.id, 1);
    }
}

async fn failure_cases() -> Vec<ServiceError> {
    vec![
        transport_error().await,
        ServiceError::Status {
            status: StatusCode::BAD_REQUEST,
            body: "No file uploaded.".to_string(),
        },
        ServiceError::MalformedReply {
            source: serde_json::from_str::<serde_json::Value>("not json").unwrap_err(),
        },
    ]
}

/// A real connect failure from a port nothing listens on.
async fn transport_error() -> ServiceError {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let err = reqwest::Client::new()
        .get(format!("http://{addr}/"))
        .send()
        .await
        .expect_err("connect must fail");
    ServiceError::Transport(err)
}
