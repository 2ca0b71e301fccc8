// src/config/mod.rs

//! Render job files.
//!
//! A job file is a small TOML document naming the aerender executable and
//! the options for one render:
//!
//! ```toml
//! exe = "C:/Program Files/Adobe/Adobe After Effects 2024/Support Files/aerender.exe"
//!
//! [render]
//! project_path = "D:/jobs/promo.aep"
//! comp_name = "Main"
//! output_path = "D:/renders/promo.mov"
//! verbose_flag = "ERRORS_AND_PROGRESS"
//! ```
//!
//! - [`model`] holds the serde types.
//! - [`loader`] reads and parses files.
//! - [`validate`] rejects option combinations aerender can't honour.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path};
pub use model::{JobConfig, RawJobConfig};
pub use validate::validate_render_options;
