//! Client-level error types shared across the limiter, transport, and submit flow.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical submission-client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Caller was cancelled while waiting for quota.
	#[error(transparent)]
	Cancelled(#[from] CancelledError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// Endpoint returned a non-success response.
	#[error("Endpoint rejected the submission with status {status}: {body}.")]
	SubmissionFailed {
		/// HTTP status code returned by the endpoint.
		status: u16,
		/// Raw response body, kept verbatim for diagnosis.
		body: String,
	},
}

/// Configuration and validation failures raised at construction time.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Rate window must admit at least one request.
	#[error("Rate window limit must be at least one permit.")]
	ZeroLimit,
	/// Rate window period must be a positive duration.
	#[error("Rate window period must be positive.")]
	ZeroPeriod,
	/// Document payload could not be encoded as JSON.
	#[error("Document payload could not be encoded as JSON.")]
	EncodeBody(#[from] serde_json::Error),
}

/// Cancellation surfaced while a caller was waiting for a permit.
#[derive(Clone, Copy, Debug, ThisError)]
pub enum CancelledError {
	/// Quota limiter was shut down while the caller was waiting for a permit.
	#[error("Quota limiter was shut down while waiting for a permit.")]
	ShutDown,
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the submission endpoint.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the submission endpoint.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}
