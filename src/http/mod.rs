//! HTTP client module
//!
//! A thin JSON client over reqwest. Credentials are applied to every
//! request; non-success statuses become `Error::HttpStatus` with the
//! response body captured. Failures are surfaced immediately — there is
//! no retry, backoff, or rate limiting anywhere in this crate.

mod client;

pub use client::{HttpClient, RequestConfig};
