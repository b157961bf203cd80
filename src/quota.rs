//! Fair fixed-window admission control for the submission endpoint.
//!
//! [`QuotaLimiter`] hands out at most `limit` [`QuotaPermit`]s per `period`. The pool starts
//! full, callers queue in first-come-first-served order when it is empty, and a background task
//! restores the pool to capacity once per period. This is a fixed-window approximation of "N
//! requests per rolling period": up to `2 * limit` requests can land back to back across a window
//! boundary (the tail of one window plus the head of the next). Callers that need a strict
//! rolling window must account for that burst.

// crates.io
use tokio::{sync::oneshot, task::JoinHandle, time};
// self
use crate::{
	_prelude::*,
	error::{CancelledError, ConfigError},
	obs::{self, QuotaEvent},
};

/// Immutable rate-window configuration: at most `limit` permits per `period`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateWindow {
	limit: u32,
	period: Duration,
}
impl RateWindow {
	/// Validates and builds a rate window.
	pub fn new(limit: u32, period: Duration) -> Result<Self, ConfigError> {
		if limit == 0 {
			return Err(ConfigError::ZeroLimit);
		}
		if period.is_zero() {
			return Err(ConfigError::ZeroPeriod);
		}

		Ok(Self { limit, period })
	}

	/// Maximum number of permits per window.
	pub const fn limit(&self) -> u32 {
		self.limit
	}

	/// Length of one window.
	pub const fn period(&self) -> Duration {
		self.period
	}
}

/// Thread-safe gate that admits at most `limit` in-flight-or-recent operations per window.
///
/// Construction spawns the replenishment task on the ambient Tokio runtime, so limiters must be
/// created inside one. A limiter is meant to be built once at startup, shared behind an [`Arc`],
/// and shut down explicitly (or dropped) when the process stops; the timer task never outlives
/// it.
pub struct QuotaLimiter {
	shared: Arc<Shared>,
	window: RateWindow,
	reset_task: Mutex<Option<JoinHandle<()>>>,
}
impl QuotaLimiter {
	/// Builds a limiter admitting `limit` operations per `period`, starting with a full pool.
	pub fn new(limit: u32, period: Duration) -> Result<Self, ConfigError> {
		Ok(Self::with_window(RateWindow::new(limit, period)?))
	}

	/// Builds a limiter from an already-validated [`RateWindow`].
	pub fn with_window(window: RateWindow) -> Self {
		let shared = Arc::new(Shared {
			capacity: window.limit(),
			state: Mutex::new(State {
				available: window.limit(),
				waiters: VecDeque::new(),
				shut_down: false,
			}),
		});
		let reset_task = tokio::spawn(replenish_loop(shared.clone(), window.period()));

		Self { shared, window, reset_task: Mutex::new(Some(reset_task)) }
	}

	/// Window configuration this limiter enforces.
	pub const fn window(&self) -> RateWindow {
		self.window
	}

	/// Number of permits currently available, capacity minus in-flight-or-recent operations.
	pub fn available(&self) -> u32 {
		self.shared.state.lock().available
	}

	/// Waits until a permit is available and takes it.
	///
	/// Callers queue in first-come-first-served order and there is no upper bound on the wait;
	/// under sustained overload this is backpressure, not a failure. Dropping the returned
	/// future while queued abandons the spot without consuming quota. Fails with
	/// [`CancelledError::ShutDown`] once [`shutdown`](Self::shutdown) has run.
	pub async fn acquire(&self) -> Result<QuotaPermit> {
		let rx = {
			let mut state = self.shared.state.lock();

			if state.shut_down {
				return Err(CancelledError::ShutDown.into());
			}
			if state.available > 0 {
				state.available -= 1;

				obs::trace_quota(QuotaEvent::Acquired, state.available);
				obs::record_quota_event(QuotaEvent::Acquired);

				return Ok(QuotaPermit::new(self.shared.clone()));
			}

			let (tx, rx) = oneshot::channel();

			state.waiters.push_back(tx);

			rx
		};

		rx.await.map_err(|_| CancelledError::ShutDown.into())
	}

	/// Cancels the replenishment task and wakes every queued waiter with
	/// [`CancelledError::ShutDown`]. Permits already handed out drain back harmlessly.
	pub fn shutdown(&self) {
		if let Some(task) = self.reset_task.lock().take() {
			task.abort();
		}

		let waiters = {
			let mut state = self.shared.state.lock();

			state.shut_down = true;

			std::mem::take(&mut state.waiters)
		};

		// Dropping the senders resolves every pending `acquire` with a recv error.
		drop(waiters);
	}
}
impl Drop for QuotaLimiter {
	fn drop(&mut self) {
		self.shutdown();
	}
}
impl Debug for QuotaLimiter {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("QuotaLimiter")
			.field("window", &self.window)
			.field("available", &self.available())
			.finish()
	}
}

/// RAII permit handed out by [`QuotaLimiter::acquire`].
///
/// Dropping the permit returns it to the pool exactly once, on every path: success, failure, or
/// a submit future dropped mid-flight.
pub struct QuotaPermit {
	shared: Arc<Shared>,
	armed: bool,
}
impl QuotaPermit {
	fn new(shared: Arc<Shared>) -> Self {
		Self { shared, armed: true }
	}

	fn disarm(mut self) {
		self.armed = false;
	}
}
impl Drop for QuotaPermit {
	fn drop(&mut self) {
		if self.armed {
			Shared::release(&self.shared);
		}
	}
}
impl Debug for QuotaPermit {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("QuotaPermit(..)")
	}
}

struct Shared {
	capacity: u32,
	state: Mutex<State>,
}
impl Shared {
	// One permit returns to the pool: hand it to the oldest live waiter, otherwise bank it.
	// The cap keeps `available <= capacity` even when a release lands after the window reset
	// already refilled the pool.
	fn release(shared: &Arc<Self>) {
		let mut state = shared.state.lock();

		while let Some(tx) = state.waiters.pop_front() {
			match tx.send(QuotaPermit::new(shared.clone())) {
				Ok(()) => {
					obs::trace_quota(QuotaEvent::Released, state.available);
					obs::record_quota_event(QuotaEvent::Released);

					return;
				},
				// The waiter gave up; take the permit back without re-entering the lock.
				Err(permit) => permit.disarm(),
			}
		}

		state.available = (state.available + 1).min(shared.capacity);

		obs::trace_quota(QuotaEvent::Released, state.available);
		obs::record_quota_event(QuotaEvent::Released);
	}

	// Window reset: serve queued waiters first, in arrival order, then refill the pool to
	// capacity.
	fn replenish(shared: &Arc<Self>) {
		let mut state = shared.state.lock();

		if state.shut_down {
			return;
		}

		let mut deficit = shared.capacity - state.available;

		while deficit > 0 {
			let Some(tx) = state.waiters.pop_front() else { break };

			if let Err(permit) = tx.send(QuotaPermit::new(shared.clone())) {
				permit.disarm();

				continue;
			}

			deficit -= 1;
		}

		state.available = (state.available + deficit).min(shared.capacity);

		obs::trace_quota(QuotaEvent::Replenished, state.available);
		obs::record_quota_event(QuotaEvent::Replenished);
	}
}

// Invariant: `0 <= available <= capacity`. Every mutation happens under the one state lock, so
// acquire, release, and the periodic reset never interleave unsafely.
struct State {
	available: u32,
	waiters: VecDeque<oneshot::Sender<QuotaPermit>>,
	shut_down: bool,
}

// First firing lands one full period after startup; the pool starts full.
async fn replenish_loop(shared: Arc<Shared>, period: Duration) {
	let mut ticks = time::interval_at(time::Instant::now() + period, period);

	loop {
		ticks.tick().await;
		Shared::replenish(&shared);
	}
}
