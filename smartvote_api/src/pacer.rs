//! Pacing between consecutive requests.

use std::time::Duration;

use async_trait::async_trait;

/// Waits out the configured delay after each successful request.
///
/// The client only calls [`Pacer::pause`] with a non-zero delay.
#[async_trait]
pub trait Pacer: Send + Sync {
    async fn pause(&self, delay: Duration);
}

/// Sleeps on the tokio timer. Used unless another pacer is supplied.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioPacer;

#[async_trait]
impl Pacer for TokioPacer {
    async fn pause(&self, delay: Duration) {
        tokio::time::sleep(delay).await;
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{Pacer, TokioPacer};

    #[tokio::test]
    async fn tokio_pacer_sleeps() {
        let start = tokio::time::Instant::now();
        TokioPacer.pause(Duration::from_millis(20)).await;
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
