/// Classification for retry policy.
///
/// Used by the balance lookup client to decide how to respond to an
/// upstream error.
///
/// # Behavior Summary
///
/// | Class | Retry? |
/// |-------|--------|
/// | `Never` | No |
/// | `WithBackoff` | Yes, once, after a short delay |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RetryClass {
    /// Never retry - malformed response, client error, or terminal failure.
    /// The request is fundamentally invalid and retrying won't help.
    Never,

    /// Retry after a short backoff.
    ///
    /// Used for transient errors like rate limiting (429), timeout, or a
    /// 5xx from the upstream service. Only idempotent GET calls are
    /// retried, and only a bounded number of times.
    WithBackoff,
}
