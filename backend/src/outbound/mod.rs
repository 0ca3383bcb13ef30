//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: MongoDB-backed document store
//! - **memory**: in-process store for tests and local runs, plus the store
//!   installed when no database connection is available
//!
//! Adapters are thin translators between BSON documents and the driver. They
//! contain no business logic.

pub mod memory;
pub mod persistence;
