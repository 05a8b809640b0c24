//! HTTP inbound adapter exposing the users REST endpoints.

pub mod error;
pub mod health;
pub mod responses;
pub mod schemas;
pub mod session;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;

pub use error::ApiResult;
