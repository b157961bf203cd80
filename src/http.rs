//! Transport primitives for document submission.
//!
//! [`SubmitHttpClient`] is the crate's only dependency on an HTTP stack: the submit flow hands an
//! implementation a fully-serialized [`SubmitRequest`] and interprets the returned
//! [`SubmitResponse`]. The default reqwest-backed implementation lives behind the `reqwest`
//! feature; anything else (test stubs included) plugs in through the trait.

// std
#[cfg(feature = "reqwest")] use std::ops::Deref;
// crates.io
#[cfg(feature = "reqwest")] use reqwest::header::CONTENT_TYPE;
// self
use crate::_prelude::*;

/// Name of the header carrying the caller-supplied detached signature.
pub const SIGNATURE_HEADER: &str = "Signature";

/// Boxed future returned by [`SubmitHttpClient::execute`].
pub type TransportFuture<'a, Error> =
	Pin<Box<dyn Future<Output = Result<SubmitResponse, Error>> + 'a + Send>>;

/// A fully-serialized outbound submission request.
#[derive(Clone, Debug)]
pub struct SubmitRequest {
	/// Endpoint URL receiving the POST.
	pub endpoint: Url,
	/// Opaque detached signature forwarded in the [`SIGNATURE_HEADER`] header.
	pub signature: String,
	/// JSON-encoded document payload.
	pub body: String,
}

/// Raw response returned by a transport.
#[derive(Clone, Debug)]
pub struct SubmitResponse {
	/// HTTP status code.
	pub status: u16,
	/// Raw response body.
	pub body: String,
}
impl SubmitResponse {
	/// Whether the status code is in the 2xx success range.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}
}

/// Abstraction over HTTP transports capable of delivering one submission request.
///
/// Implementations must be `Send + Sync + 'static` so a transport can be shared behind an `Arc`
/// across concurrent submitters, and the returned future must be `Send` for the lifetime of the
/// in-flight call. A transport performs exactly the network exchange it is asked for; quota,
/// error classification, and retry policy live with the caller.
pub trait SubmitHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying transport.
	type TransportError: 'static + Send + Sync + StdError;

	/// Delivers the request and returns the raw status and body.
	fn execute(&self, request: SubmitRequest) -> TransportFuture<'_, Self::TransportError>;
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[cfg(feature = "reqwest")]
#[derive(Clone, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl SubmitHttpClient for ReqwestHttpClient {
	type TransportError = ReqwestError;

	fn execute(&self, request: SubmitRequest) -> TransportFuture<'_, Self::TransportError> {
		let client = self.0.clone();

		Box::pin(async move {
			let response = client
				.post(request.endpoint)
				.header(CONTENT_TYPE, "application/json")
				.header(SIGNATURE_HEADER, request.signature)
				.body(request.body)
				.send()
				.await?;
			let status = response.status().as_u16();
			let body = response.text().await?;

			Ok(SubmitResponse { status, body })
		})
	}
}
