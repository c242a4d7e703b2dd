//! taskrank: a rank-ordered task list kept in sync with a remote store.
//!
//! The list is held in memory and every task carries a dense 1-based
//! `order_number`. After a move or a delete, the engine computes the minimal
//! set of rank changes and persists only those, committing the new order
//! locally once every remote call has succeeded.
//!
//! # Example
//!
//! ```no_run
//! use taskrank::{Engine, StoreClient};
//!
//! # async fn demo() -> Result<(), taskrank::FetchError> {
//! let store = StoreClient::new("http://localhost:3000/api")?;
//! let mut engine = Engine::new(store);
//!
//! engine.load().await?;
//! engine.add_task("Write the release notes").await?;
//!
//! // Drag the first task onto the last one.
//! let first = engine.tasks().first().map(|t| t.id);
//! let last = engine.tasks().last().map(|t| t.id);
//! if let (Some(first), Some(last)) = (first, last) {
//!     engine.drag_start(first);
//!     engine.drag_enter(last);
//!     engine.drop_dragged().await?;
//! }
//! # Ok(())
//! # }
//! ```

mod id;

pub mod client;
pub mod engine;
pub mod protocol;
pub mod reorder;
pub mod types;

// Re-export public API
pub use client::{FetchError, StoreClient};
pub use engine::{EditBuffer, Engine};
pub use types::{Task, ranks_are_dense};
