mod interface;
mod minijinja;

/// Custom template filters.
pub mod filters;

pub use interface::TemplateRenderer;
pub use minijinja::BlogRenderer;
