//! Blog template tags and filters for MiniJinja.
//!
//! Templates embed Django-style tag blocks that query blog storage and bind
//! the result to a context variable visible to the rest of the template:
//!
//! ```text
//! {% get_latest_posts 5 as latest %}
//! {% get_blog_categories as categories %}
//! {% get_blogroll as blogroll %}
//! {% get_related_posts post as related %}
//! {{ post.body | get_links }}
//! ```
//!
//! [`BlogRenderer`] extracts and parses these blocks when a template is
//! registered (syntax errors are fatal at that point), executes them in
//! document order on every render, and merges the resulting bindings into
//! the MiniJinja context before rendering the remaining template text.
//!
//! ```
//! use std::sync::Arc;
//! use blogtags::store::InMemoryStore;
//! use blogtags::{BlogRenderer, Settings, TemplateRenderer};
//!
//! let store = Arc::new(InMemoryStore::new());
//! let mut renderer = BlogRenderer::new(store, Settings::default());
//! renderer.add_template(
//!     "sidebar",
//!     "{% get_blog_categories as categories %}{{ categories | length }}",
//! )?;
//! assert_eq!(renderer.render("sidebar", &serde_json::json!({}))?, "0");
//! # Ok::<(), blogtags::Error>(())
//! ```

/// Runtime settings supplied by the hosting application.
pub mod config;

/// Render bindings produced by tags.
pub mod context;

/// Defines custom error types.
pub mod error;

/// Domain records surfaced to templates.
pub mod model;

/// Template parsing and rendering functionality.
pub mod renderer;

/// Repository interfaces over blog storage.
pub mod store;

/// The tag mini-language: parsing and rendering of the four tags.
pub mod tags;

pub use config::Settings;
pub use error::{Error, Result};
pub use renderer::{BlogRenderer, TemplateRenderer};
