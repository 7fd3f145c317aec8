//! Request middleware.
//!
//! Purpose: define middleware components for request lifecycle concerns such
//! as per-request logging.

pub mod logging;

pub use logging::RequestLog;
