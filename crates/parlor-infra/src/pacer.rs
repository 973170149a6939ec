//! Wall-clock pacer backed by `tokio::time`.

use std::time::Duration;

use parlor_core::delivery::Pacer;

/// Sleeps on the tokio timer for each requested delay.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioPacer;

impl Pacer for TokioPacer {
    async fn pause(&self, duration: Duration) {
        if !duration.is_zero() {
            tokio::time::sleep(duration).await;
        }
    }
}
