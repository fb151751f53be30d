//! Outbound access to the external product provider.
//!
//! The rest of the crate only sees [`ProductGateway`]; the HTTP transport lives
//! in [`HttpProductClient`] and a scripted stand-in for tests in [`mock`].

pub mod error;
pub mod gateway;
pub mod mock;
pub mod product_client;

pub use error::*;
pub use gateway::*;
pub use product_client::*;
