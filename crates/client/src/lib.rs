//! HTTP client for the AgroCarbon platform API.
//!
//! Wraps the farmer-facing REST endpoints (sign-in, profile, carbon
//! records) behind typed methods, with configuration from the
//! environment and an explicit [`session::Session`] carrying the bearer
//! token. Nothing here touches global state.

pub mod api;
pub mod config;
pub mod session;
pub mod submit;
