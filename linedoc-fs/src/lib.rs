//! Filesystem storage backend for the linedoc document store.
//!
//! Collections live as line-delimited JSON files under one base directory:
//!
//! ```text
//! <base>/collections/collections.json   one {"name",..,"size":..} per line (the manifest)
//! <base>/collections/<name>.json        one document per line
//! ```
//!
//! There is deliberately no in-memory index or cache; every operation re-reads
//! the relevant file, so the on-disk state is always the ground truth. Full
//! rewrites go through a temp-file-then-rename step so a mid-write crash
//! leaves the old file intact.

mod config;
mod file;
mod store;

pub use config::{CreateMode, StoreConfig};
pub use store::{FsStore, FsStoreBuilder, MANIFEST_FILE};
