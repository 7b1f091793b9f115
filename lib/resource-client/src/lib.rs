//! This crate contains a generic client for doing
//! CRUD style requests against a single REST resource.
//! It helps building item paths, sending models and
//! dispatching error & completion handlers.
//! This crate is not intended for creating UI,
//! any application logic nor knowing about the communication details
//! (be it reqwest, a test double or other stuff).
//! It uses interfaces to abstract such concepts away.

#![deny(missing_docs)]
#![deny(warnings)]
#![deny(clippy::nursery)]
#![deny(clippy::all)]

/// The resource client and its five operations.
pub mod client;
/// Per-call and instance-level request configuration.
pub mod config;
/// Types related to errors during resource requests.
pub mod errors;
/// Communication interface for the client to
/// do requests to the REST server.
pub mod interface;

#[cfg(test)]
mod tests;
