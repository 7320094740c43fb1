use thiserror::Error;

/// Top-level error returned by every service operation.
///
/// A call either yields a fully decoded response or exactly one of these;
/// nothing is retried or logged inside the library.
#[derive(Debug, Error)]
pub enum OpenMeteoError {
    /// Options failed a pre-flight check; no request was sent.
    #[error("invalid options: {0}")]
    Validation(#[from] ValidationError),

    /// The executor failed to produce a response body.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The response body was not the expected JSON shape.
    #[error("failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),
}

/// A constraint violation found before sending the request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
    },

    #[error("invalid {field} format, expected YYYY-MM-DD")]
    MalformedDate { field: &'static str },

    #[error("end_date must not be before start_date")]
    InvertedRange,

    #[error("date range must not exceed 365 days")]
    RangeTooLarge,
}

/// Failure at the HTTP boundary, produced by the [`Executor`] and propagated
/// unchanged to the caller.
///
/// [`Executor`]: crate::Executor
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection, timeout or protocol failure from the HTTP client.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// The caller cancelled the request before it completed.
    #[error("request cancelled")]
    Cancelled,
}
