//! # Liftplan Core Library
//!
//! This library provides the core logic for the Liftplan workout planner.
//! It implements a CLI-first philosophy where all operations are available
//! via a standalone CLI binary, with any GUI being a thin layer over the
//! same core library.
//!
//! ## Architecture
//!
//! - **Block Store**: exclusive owner of the workout (title + ordered block
//!   sequence) and the multi-selection, mutated only through its atomic
//!   operation set
//! - **Drag Reconciler**: translates drag-end descriptors into store
//!   mutations (palette insertion or timeline reorder)
//! - **Codecs**: the versioned JSON export document and the lossy
//!   third-party interval XML format
//! - **Storage**: TOML configuration and the JSON session snapshot
//!
//! ## Key Components
//!
//! - [`WorkoutStore`]: the block store
//! - [`Template`]: palette templates and their defaults
//! - [`reconcile()`]: drag-end dispatch
//! - [`Config`] / [`SnapshotStore`]: persistence

pub mod block;
pub mod codec;
pub mod error;
pub mod events;
pub mod reconcile;
pub mod storage;
pub mod store;
pub mod template;
pub mod workout;

pub use block::{Block, BlockKind, CardioKind, FieldEdit, StrengthKind, ZONE_MAX, ZONE_MIN};
pub use error::{ConfigError, CoreError, ImportError, IntervalError, SnapshotError};
pub use events::StoreEvent;
pub use reconcile::{reconcile, DragEnd, DragLocation, DropOutcome};
pub use storage::{Config, SnapshotStore};
pub use store::{Snapshot, WorkoutStore};
pub use template::Template;
pub use workout::{Workout, DEFAULT_TITLE, SCHEMA_VERSION};
