//! Space group determination and lattice reduction for crystal structures.
//!
//! This crate only re-exports the workspace members; the `crysym` binary
//! lives in `crysym-tasks`.

pub use crysym_structure as structure;
pub use crysym_tasks as tasks;
pub use crysym_tasks_config as config;
pub use crysym_array_types as array_types;
