//! storecli - command-line client for the Fake Store product catalog API
//!
//! The crate is split into a thin binary (`main.rs`) and this library so
//! integration tests can drive the client and dispatcher directly.
//!
//! # Module Structure
//!
//! - [`api`] - HTTP helper and store API client
//! - [`command`] - parsing of raw invocation tokens into typed commands
//! - [`dispatch`] - command execution against the API client
//! - [`model`] - product data types
//! - [`render`] - console formatting for products

pub mod api;
pub mod command;
pub mod dispatch;
pub mod model;
pub mod render;
