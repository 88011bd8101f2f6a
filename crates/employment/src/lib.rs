//! Employment domain module (jobs and pay structures).
//!
//! Income is a raw integer in the job's implied currency; this crate does not
//! depend on `household-money`.

pub mod job;

pub use job::{DEFAULT_ANNUAL_HOURS, Job, PayType};
