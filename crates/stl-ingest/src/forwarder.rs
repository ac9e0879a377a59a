use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc;
use tracing::{debug, error, warn};

use stl_types::SensorEvent;

use crate::config::IngestConfig;
use crate::error::{IngestError, IngestResult};

/// Delivery seam between the forwarder queue and the gateway.
#[async_trait]
pub trait Forward: Send + Sync {
    /// Deliver one envelope. Implementations own their retry behavior; an
    /// error means the envelope is lost.
    async fn forward(&self, envelope: &SensorEvent) -> IngestResult<()>;
}

/// Retry schedule for gateway delivery: `max_attempts` tries with
/// exponential backoff starting at `base_backoff`, capped at `max_backoff`.
#[derive(Clone, Copy, Debug)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_backoff: Duration,
    pub max_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_backoff: Duration::from_millis(200),
            max_backoff: Duration::from_secs(5),
        }
    }
}

impl RetryPolicy {
    fn backoff(&self, attempt: u32) -> Duration {
        let exp = self.base_backoff.saturating_mul(1 << attempt.min(16));
        exp.min(self.max_backoff)
    }
}

/// Forwards envelopes to the gateway ingestion endpoint over HTTP.
pub struct HttpForwarder {
    client: reqwest::Client,
    endpoint: String,
    retry: RetryPolicy,
}

impl HttpForwarder {
    pub fn new(endpoint: impl Into<String>, timeout: Duration, retry: RetryPolicy) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("http client construction cannot fail with static options");
        Self {
            client,
            endpoint: endpoint.into(),
            retry,
        }
    }

    /// Build a forwarder from the ingestion config.
    pub fn from_config(config: &IngestConfig) -> Self {
        Self::new(
            config.gateway_url.clone(),
            Duration::from_millis(config.request_timeout_ms),
            RetryPolicy {
                max_attempts: config.max_attempts,
                base_backoff: Duration::from_millis(config.base_backoff_ms),
                ..RetryPolicy::default()
            },
        )
    }

    async fn post_once(&self, envelope: &SensorEvent) -> IngestResult<()> {
        let response = self.client.post(&self.endpoint).json(envelope).send().await?;
        if !response.status().is_success() {
            return Err(IngestError::Transport(format!(
                "gateway returned {}",
                response.status()
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl Forward for HttpForwarder {
    async fn forward(&self, envelope: &SensorEvent) -> IngestResult<()> {
        let mut last_err = None;
        for attempt in 0..self.retry.max_attempts {
            match self.post_once(envelope).await {
                Ok(()) => {
                    debug!(event_id = %envelope.event_id, attempt, "envelope forwarded");
                    return Ok(());
                }
                Err(e) => {
                    warn!(
                        event_id = %envelope.event_id,
                        attempt,
                        error = %e,
                        "forward attempt failed"
                    );
                    last_err = Some(e);
                    if attempt + 1 < self.retry.max_attempts {
                        tokio::time::sleep(self.retry.backoff(attempt)).await;
                    }
                }
            }
        }
        Err(last_err.unwrap_or_else(|| IngestError::Transport("no attempts configured".into())))
    }
}

/// Non-blocking hand-off into the forwarder queue, held by listeners.
#[derive(Clone)]
pub struct ForwarderHandle {
    tx: mpsc::Sender<SensorEvent>,
}

impl ForwarderHandle {
    fn new(tx: mpsc::Sender<SensorEvent>) -> Self {
        Self { tx }
    }

    /// Enqueue an envelope without waiting. Returns `false` when the queue
    /// is full and the event was dropped; listeners log that and move on,
    /// so a slow ledger never backpressures the transport.
    pub fn try_enqueue(&self, envelope: SensorEvent) -> bool {
        self.tx.try_send(envelope).is_ok()
    }
}

/// Spawn the forwarder worker: drains the bounded queue, delivering each
/// envelope through `forward`. Delivery failures end with an ERROR trace;
/// the loss is scoped to that single event.
pub fn spawn_forwarder(forward: Arc<dyn Forward>, capacity: usize) -> ForwarderHandle {
    let (tx, mut rx) = mpsc::channel::<SensorEvent>(capacity);
    tokio::spawn(async move {
        while let Some(envelope) = rx.recv().await {
            if let Err(e) = forward.forward(&envelope).await {
                error!(
                    event_id = %envelope.event_id,
                    device_type = %envelope.device_type,
                    error = %e,
                    "envelope lost after retry exhaustion"
                );
            }
        }
    });
    ForwarderHandle::new(tx)
}
