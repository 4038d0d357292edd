//! # Receipt Points Store
//!
//! Storage abstraction for accepted receipts. Provides a trait-based
//! interface with an in-memory implementation, plus identifier generation.
//!
//! ## Key Types
//!
//! - [`Store`] - The async trait for all storage operations
//! - [`MemoryStore`] - In-memory storage guarded by a read-write lock
//! - [`IdGenerator`] - Source of fresh receipt identifiers
//! - [`UuidGenerator`] - Random version-4 UUIDs from the OS RNG
//! - [`InsertResult`] - Result of inserting a receipt
//!
//! ## Usage
//!
//! ```rust,no_run
//! use receipt_points_store::{IdGenerator, InsertResult, MemoryStore, Store, UuidGenerator};
//! use receipt_points_core::Receipt;
//!
//! async fn example() {
//!     let store = MemoryStore::new();
//!     let id = UuidGenerator.generate().unwrap();
//!
//!     let receipt = Receipt::builder("Target").total("1.00").build();
//!     assert_eq!(store.insert(&id, &receipt).await.unwrap(), InsertResult::Inserted);
//!     assert_eq!(store.get(&id).await.unwrap(), Some(receipt));
//! }
//! ```
//!
//! ## Design Notes
//!
//! - **Write-once**: an identifier is bound to one receipt forever; inserting
//!   under a taken identifier returns `AlreadyExists` and changes nothing.
//! - **Read-your-writes**: a `get` after a successful `insert` of the same
//!   identifier returns that receipt.

pub mod error;
pub mod id;
pub mod memory;
pub mod traits;

pub use error::{Result, StoreError};
pub use id::{IdGenerator, UuidGenerator};
pub use memory::MemoryStore;
pub use traits::{InsertResult, Store};
