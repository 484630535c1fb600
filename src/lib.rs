//! Client-side orchestration for a single user's resume profile.
//!
//! The profile is split into six resource kinds stored behind a remote GraphQL API.
//! This crate owns the session, shapes every request through one generic [`gateway::Gateway`],
//! and coordinates views ([`dashboard::Dashboard`], [`editor::Editor`]) that talk to the
//! visual layer only through [`view::View`].

pub mod api;
pub mod config;
pub mod context;
pub mod dashboard;
pub mod data;
pub mod editor;
pub mod error;
pub mod gateway;
pub mod guard;
pub mod logging;
pub mod response;
pub mod route;
pub mod scope;
pub mod screen;
pub mod session;
pub mod util;
pub mod view;

#[cfg(test)]
pub(crate) mod test_util;

pub use config::Config;
pub use context::Context;
pub use error::{ApiError, Classification};
