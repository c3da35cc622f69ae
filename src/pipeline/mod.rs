//! Pipeline entry points.
//!
//! - `run_propagate`: Bring every target document into the canonical shape
//! - `run_patch`: Write top-level sections from a patch file
//! - `run_validate`: Check configuration
//! - `run_info`: Show where documents live

pub mod info;
pub mod patch;
pub mod propagate;
pub mod validate;

pub use info::run_info;
pub use patch::{apply_patch, patch_sections, run_patch};
pub use propagate::{propagate, run_propagate};
pub use validate::run_validate;
