use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Per-call cancellation scope.
///
/// Carries an optional [`CancellationToken`] and an optional deadline. When either fires
/// before or during a round trip, the call fails with
/// [`SmsapiError::Cancelled`](crate::client::SmsapiError::Cancelled).
///
/// ```rust
/// use std::time::Duration;
/// use smsapi::Context;
///
/// let ctx = Context::background().with_timeout(Duration::from_secs(5));
/// assert!(!ctx.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Context {
    token: Option<CancellationToken>,
    deadline: Option<Instant>,
}

impl Context {
    /// A context that never cancels.
    pub fn background() -> Self {
        Self::default()
    }

    /// Cancel calls made with this context when `token` is cancelled.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.token = Some(token);
        self
    }

    /// Give calls at most `timeout`, measured from now.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Fail calls still in flight at `deadline`. The earlier deadline wins when one is
    /// already set.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(current) => current.min(deadline),
            None => deadline,
        });
        self
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_cancelled(&self) -> bool {
        let cancelled = self.token.as_ref().is_some_and(CancellationToken::is_cancelled);
        let expired = self.deadline.is_some_and(|it| it <= Instant::now());
        cancelled || expired
    }

    /// Resolves once the token is cancelled or the deadline passes; never otherwise.
    pub(crate) async fn done(&self) {
        let cancelled = async {
            match &self.token {
                Some(token) => token.cancelled().await,
                None => std::future::pending().await,
            }
        };
        let expired = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending().await,
            }
        };
        tokio::select! {
            () = cancelled => {}
            () = expired => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background_is_never_cancelled() {
        let ctx = Context::background();
        assert!(!ctx.is_cancelled());
        assert!(ctx.deadline().is_none());
    }

    #[test]
    fn token_cancellation_is_observed() {
        let token = CancellationToken::new();
        let ctx = Context::background().with_cancellation(token.clone());
        assert!(!ctx.is_cancelled());
        token.cancel();
        assert!(ctx.is_cancelled());
    }

    #[tokio::test(start_paused = true)]
    async fn earlier_deadline_wins() {
        let now = Instant::now();
        let ctx = Context::background()
            .with_deadline(now + Duration::from_secs(10))
            .with_deadline(now + Duration::from_secs(5))
            .with_deadline(now + Duration::from_secs(20));
        assert_eq!(ctx.deadline(), Some(now + Duration::from_secs(5)));
    }

    #[tokio::test(start_paused = true)]
    async fn done_resolves_at_deadline() {
        let ctx = Context::background().with_timeout(Duration::from_secs(1));
        ctx.done().await;
        assert!(ctx.is_cancelled());
    }

    #[tokio::test]
    async fn done_resolves_on_cancel() {
        let token = CancellationToken::new();
        let ctx = Context::background().with_cancellation(token.clone());
        token.cancel();
        ctx.done().await;
    }
}
