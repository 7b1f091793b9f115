//! This crate contains the implementation of the
//! resource client's communication interface
//! using reqwest as HTTP client.

#![deny(missing_docs)]
#![deny(warnings)]
#![deny(clippy::nursery)]
#![deny(clippy::all)]

/// The client implementation.
pub mod client;
