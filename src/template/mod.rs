//! Turning catalog templates into argument vectors.

pub mod render;
pub mod validate;

pub use render::{has_placeholder, placeholder_count, render, substitute};
pub use validate::validate_package_name;
