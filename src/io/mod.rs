pub mod memory;
pub mod real;
pub mod traits;

// Re-export I/O types for convenient access
pub use memory::MemoryFileSystem;
pub use real::RealFileSystem;
pub use traits::{DirEntry, FileSystem};
