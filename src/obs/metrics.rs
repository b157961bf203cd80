// self
use crate::obs::{QuotaEvent, SubmitOutcome};

/// Records a submission outcome via the global metrics recorder (when enabled).
pub fn record_submission_outcome(outcome: SubmitOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!("crpt_submit_submissions_total", "outcome" => outcome.as_str())
			.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = outcome;
	}
}

/// Records a permit-pool transition via the global metrics recorder (when enabled).
pub fn record_quota_event(event: QuotaEvent) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!("crpt_submit_quota_events_total", "event" => event.as_str()).increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = event;
	}
}
