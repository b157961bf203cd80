//! Submit flow: acquire quota, deliver one request, release quota.

// self
use crate::{
	_prelude::*,
	document::Document,
	error::{ConfigError, TransportError},
	http::{SubmitHttpClient, SubmitRequest},
	obs::{self, SubmitOutcome, SubmitSpan},
	quota::QuotaLimiter,
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

/// Default CRPT endpoint for introducing goods into circulation.
pub const DEFAULT_ENDPOINT: &str = "https://ismp.crpt.ru/api/v3/lk/documents/create";

#[cfg(feature = "reqwest")]
/// Submitter specialized for the crate's default reqwest transport.
pub type ReqwestSubmitter = Submitter<ReqwestHttpClient>;

/// Successful submission outcome carrying the raw endpoint response.
#[derive(Clone, Debug)]
pub struct SubmissionReceipt {
	/// HTTP status code returned by the endpoint.
	pub status: u16,
	/// Raw response body.
	pub body: String,
}

/// Coordinates rate-limited document submissions against a single endpoint.
///
/// Nothing here is global: the limiter is an explicitly-owned, injected dependency, so several
/// submitters can share one quota budget while tests supply their own.
#[derive(Clone)]
pub struct Submitter<C>
where
	C: ?Sized + SubmitHttpClient,
{
	/// HTTP transport used for every outbound request.
	pub http_client: Arc<C>,
	/// Shared admission-control gate.
	pub limiter: Arc<QuotaLimiter>,
	/// Endpoint URL receiving submissions.
	pub endpoint: Url,
}
impl<C> Submitter<C>
where
	C: ?Sized + SubmitHttpClient,
{
	/// Creates a submitter that reuses the caller-provided transport.
	pub fn with_http_client(
		limiter: Arc<QuotaLimiter>,
		endpoint: Url,
		http_client: impl Into<Arc<C>>,
	) -> Self {
		Self { http_client: http_client.into(), limiter, endpoint }
	}

	/// Submits one document with the supplied detached signature.
	///
	/// Blocks (asynchronously) until the limiter grants a permit, performs exactly one outbound
	/// call, and returns the permit on every path: success, rejection, transport fault, or the
	/// future being dropped mid-flight. No retries; a failure is reported once, to the caller.
	pub async fn submit(&self, document: &Document, signature: &str) -> Result<SubmissionReceipt> {
		let span = SubmitSpan::new("submit");

		obs::record_submission_outcome(SubmitOutcome::Attempt);

		let result = span
			.instrument(async move {
				// Encoded before acquiring so a malformed document never consumes quota.
				let body = serde_json::to_string(document).map_err(ConfigError::EncodeBody)?;
				let _permit = self.limiter.acquire().await?;
				let request = SubmitRequest {
					endpoint: self.endpoint.clone(),
					signature: signature.into(),
					body,
				};
				let response =
					self.http_client.execute(request).await.map_err(TransportError::network)?;

				if response.is_success() {
					Ok(SubmissionReceipt { status: response.status, body: response.body })
				} else {
					Err(Error::SubmissionFailed { status: response.status, body: response.body })
				}
			})
			.await;

		match &result {
			Ok(_) => obs::record_submission_outcome(SubmitOutcome::Success),
			Err(_) => obs::record_submission_outcome(SubmitOutcome::Failure),
		}

		result
	}
}
#[cfg(feature = "reqwest")]
impl Submitter<ReqwestHttpClient> {
	/// Creates a submitter backed by the crate's default reqwest transport.
	pub fn new(limiter: Arc<QuotaLimiter>, endpoint: Url) -> Self {
		Self::with_http_client(limiter, endpoint, ReqwestHttpClient::default())
	}
}
impl<C> Debug for Submitter<C>
where
	C: ?Sized + SubmitHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Submitter")
			.field("endpoint", &self.endpoint.as_str())
			.field("limiter", &self.limiter)
			.finish()
	}
}
