//! Shared test fixtures for RelayForge crates.
//!
//! This crate provides record constructors and sample pools for testing.
//! It depends only on `relayforge-core` so any crate can use it as a
//! dev-dependency.
//!
//! - [`records`] - One-line constructors for time records
//! - [`pools`] - Hand-built pools for the documented relay scenarios
//! - [`random`] - Seeded random pools for cross-checking solvers
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! relayforge-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```
//! use relayforge_core::{Distance, Gender, Stroke};
//! use relayforge_test::records::individual;
//!
//! let record = individual("Ana", Gender::Female, Distance::Fifty, Stroke::Back, 30.0);
//! assert!(record.is_leadoff_eligible());
//! ```

pub mod pools;
pub mod random;
pub mod records;

// Re-export commonly used constructors at crate root for convenience
pub use records::{first_50, individual, leadoff, mid_relay, swimmer, TEAM};
