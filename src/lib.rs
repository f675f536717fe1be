//! # Filecollect
//!
//! `filecollect` recursively walks a directory and concatenates every file it finds,
//! together with the file name and its absolute path, into a single text file. The
//! result is a plain-text snapshot of a codebase that can be handed to another tool
//! or a reviewer.
//!
//! Each file becomes one record (see [`output`] for the exact layout). Files that
//! cannot be read are skipped and logged; the run itself only fails when the source
//! directory is missing or the output cannot be written.
//!
//! Diagnostics are emitted through the `tracing` crate; install a subscriber to see them.
//!
//! # Example
//!
//! ```no_run
//! use filecollect::{CollectOptions, collect};
//!
//! let options = CollectOptions::new("./src", "snapshot.txt");
//! let report = collect(&options).expect("collection failed");
//!
//! println!("{} records written", report.records);
//! for skipped in &report.skipped {
//!     println!("skipped {}: {}", skipped.path.display(), skipped.reason);
//! }
//! ```
//!
//! Reading the snapshot back:
//!
//! ```no_run
//! use filecollect::read_snapshot;
//!
//! for record in read_snapshot("snapshot.txt").expect("unreadable snapshot") {
//!     println!("{} ({} bytes)", record.full_path.display(), record.content.len());
//! }
//! ```

mod engine;
mod error;
mod options;
pub mod output;
mod snapshot;
mod types;

pub use engine::{collect, collect_to_file};
pub use error::CollectError;
pub use options::CollectOptions;
pub use snapshot::{SnapshotRecord, parse_snapshot, read_snapshot};
pub use types::{CollectReport, FileEntry, SkippedFile};
