//! Repository Layer
//!
//! Key-value storage abstraction and the task codec built on top of it.

mod traits;
mod memory_store;
mod task_store;


pub use traits::KeyValueStore;
pub use memory_store::MemoryStore;
pub use task_store::TaskStore;
