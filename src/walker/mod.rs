/// Walker module - tree traversal and the worker pool that consumes it
pub mod coordinator;
pub mod tree;

pub use coordinator::WipeCoordinator;
