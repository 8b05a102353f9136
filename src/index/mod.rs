//! Indexing Driver Module
//!
//! Drives one complete indexing pass: enumerate corpus files, parse them into
//! records, and submit everything to a freshly created tantivy store.
//!
//! ## Workflow
//! 1. **Create**: Wipe and recreate the store directory (CREATE semantics,
//!    never append), register the configuration's tokenizer.
//! 2. **Submit**: Read each corpus file, split it into document blocks, build
//!    a record per block, add it to the writer. A failing file is logged and
//!    skipped; the pass continues.
//! 3. **Seal**: Commit, force-merge to a single segment, and wait for the
//!    merge threads before returning.
//!
//! ## Submodules
//! - **`schema`**: tantivy schema construction and the field handle set.
//! - **`driver`**: The pass itself.

pub mod driver;
pub mod schema;

pub use driver::build_index;
pub use schema::{build_schema, IndexFields};
