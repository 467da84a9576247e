//! Infrastructure layer: platform concerns below the domain.

pub mod paths;

pub use paths::{config_file, data_dir};
