//! Testing infrastructure: in-memory file system and scripted executor.
//!
//! Tests describe a project tree fluently and run the real extraction code
//! against it, with no disk or process I/O:
//!
//! ```rust,ignore
//! use servicemap::extract::StructureExtractor;
//! use servicemap::testkit::MemoryFileSystem;
//!
//! let fs = MemoryFileSystem::new()
//!     .with_file("project/services/billing.v1/invoices/models/models.go", "...")
//!     .with_file("project/services/billing.v1/invoices/proto/billing_v1_invoices.proto", "...");
//!
//! let modules = StructureExtractor::new(fs).extract("project".as_ref())?;
//! ```
//!
//! [`MockExecutor`] plays the same role for code that shells out, replaying
//! queued outputs and recording the actions it was asked to perform.

pub mod mock_executor;

pub use crate::io::MemoryFileSystem;
pub use mock_executor::MockExecutor;
