//! Structured logging facility for pricewatch
//!
//! This module provides a canonical logging facility with:
//! - An explicitly constructed [`LoggingFacility`] whose lifetime bounds the
//!   subscriber (install at process start, drop at process end)
//! - Optional mirroring of every event into a log file
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! # Usage
//!
//! ```no_run
//! use pricewatch_core::logging_facility::{LoggingFacility, Profile};
//!
//! let _logging = LoggingFacility::install(Profile::Development, None)?;
//! // ... run the pipeline; logging is torn down when `_logging` drops
//! # Ok::<(), pricewatch_core::errors::PwError>(())
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{LoggingFacility, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
