// self
use crate::{_prelude::*, obs::QuotaEvent};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedSubmit<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedSubmit<F> = F;

/// A span builder wrapped around each submit flow.
#[derive(Clone, Debug)]
pub struct SubmitSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl SubmitSpan {
	/// Creates a new span tagged with the provided stage.
	pub fn new(stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("crpt_submit.submit", stage);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = stage;

			Self {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedSubmit<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// Emits a debug event describing a permit-pool transition (when tracing is enabled).
pub fn trace_quota(event: QuotaEvent, available: u32) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!(event = event.as_str(), available, "Quota pool transition.");
	}

	#[cfg(not(feature = "tracing"))]
	{
		let _ = (event, available);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[tokio::test]
	async fn instrument_passes_the_future_through() {
		let span = SubmitSpan::new("instrument_passes_the_future_through");
		let value = span.instrument(async { 42 }).await;

		assert_eq!(value, 42);
	}

	#[test]
	fn trace_quota_noop_without_tracing() {
		trace_quota(QuotaEvent::Acquired, 3);
	}
}
