//! Request middleware.
//!
//! Purpose: request lifecycle concerns that sit in front of every handler:
//! trace correlation and bearer token verification.

pub mod bearer;
pub mod trace;

pub use bearer::BearerAuth;
pub use trace::{TRACE_ID_HEADER, Trace};
