//! Platform timers for the few places the UI has to stop waiting.

use std::future::Future;
use std::pin::pin;

use futures_util::future::{select, Either};

#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms.min(u32::MAX as u64) as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

/// Output of `fut` if it finishes within `ms`, `None` otherwise.
pub async fn within<F: Future>(fut: F, ms: u64) -> Option<F::Output> {
    match select(pin!(fut), pin!(sleep_ms(ms))).await {
        Either::Left((output, _)) => Some(output),
        Either::Right(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ready_future_wins() {
        assert_eq!(within(async { 7 }, 50).await, Some(7));
    }

    #[tokio::test]
    async fn silent_future_times_out() {
        assert_eq!(within(std::future::pending::<i64>(), 20).await, None);
    }
}
