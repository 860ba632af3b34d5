//! Store API interaction module
//!
//! This module provides the core functionality for talking to the remote
//! product catalog REST API.
//!
//! # Module Structure
//!
//! - [`client`] - Store client owning the base URL and typed operations
//! - [`http`] - Generic single-shot JSON request helper
//!
//! # Example
//!
//! ```ignore
//! use storecli::api::client::StoreClient;
//!
//! async fn example() -> anyhow::Result<()> {
//!     let client = StoreClient::new()?;
//!     let products = client.list_products().await?;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod http;
