//! Admission-controlled client for the CRPT goods-turnover submission endpoint: a fair
//! fixed-window quota limiter around a pluggable HTTP transport, built for concurrent callers.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod document;
pub mod error;
pub mod http;
pub mod obs;
pub mod quota;
pub mod submit;

mod _prelude {
	pub use std::{
		collections::VecDeque,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
		time::Duration,
	};

	pub use parking_lot::Mutex;
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(all(test, feature = "reqwest"))] use httpmock as _;
