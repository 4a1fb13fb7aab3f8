//! Span helpers shared by the frameloop crates

/// Create the span that wraps one supervised run
///
/// Declares the fields later filled in by [`record_duration`] and
/// [`record_error`].
///
/// # Example
///
/// ```rust
/// use frameloop_observability::supervisor_span;
///
/// let span = supervisor_span!("sync", 100u64);
/// let _guard = span.enter();
/// ```
#[macro_export]
macro_rules! supervisor_span {
    ($variant:expr, $step_ms:expr) => {
        tracing::debug_span!(
            "supervisor.run",
            supervisor.variant = $variant,
            step_ms = $step_ms,
            run.duration_ms = tracing::field::Empty,
            error = tracing::field::Empty,
            error.message = tracing::field::Empty,
        )
    };
}

/// Record an error on the current span and log it
pub fn record_error<E: std::error::Error>(error: &E) {
    let span = tracing::Span::current();
    span.record("error", true);
    span.record("error.message", error.to_string());
    tracing::error!(error = %error, "Operation failed");
}

/// Record a duration in milliseconds on the current span
///
/// ```rust
/// use frameloop_observability::record_duration;
/// use std::time::Instant;
///
/// let start = Instant::now();
/// record_duration("run.duration_ms", start.elapsed());
/// ```
pub fn record_duration(key: &str, duration: std::time::Duration) {
    let span = tracing::Span::current();
    span.record(key, duration.as_millis() as u64);
}
