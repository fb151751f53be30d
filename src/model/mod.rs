//! Pure data structures exchanged between the order endpoint, the aggregator and
//! the product provider.

pub mod order;
pub mod product;

pub use order::*;
pub use product::*;
