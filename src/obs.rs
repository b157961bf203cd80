//! Optional observability helpers for the submit flow and quota limiter.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit a structured span named `crpt_submit.submit` per submission plus
//!   debug events for permit bookkeeping.
//! - Enable `metrics` to increment the `crpt_submit_submissions_total` counter for every
//!   attempt/success/failure and `crpt_submit_quota_events_total` for permit traffic.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Outcome labels recorded for each submission attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SubmitOutcome {
	/// Entry to the submit flow.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl SubmitOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			SubmitOutcome::Attempt => "attempt",
			SubmitOutcome::Success => "success",
			SubmitOutcome::Failure => "failure",
		}
	}
}
impl Display for SubmitOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Permit-pool transitions observed by the quota limiter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QuotaEvent {
	/// A permit left the pool.
	Acquired,
	/// A permit returned to the pool or was handed to a waiter.
	Released,
	/// The window reset restored the pool to capacity.
	Replenished,
}
impl QuotaEvent {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			QuotaEvent::Acquired => "acquired",
			QuotaEvent::Released => "released",
			QuotaEvent::Replenished => "replenished",
		}
	}
}
impl Display for QuotaEvent {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
