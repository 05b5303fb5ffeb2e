use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A tag appeared with no argument text at all.
    #[error("'{0}' tag requires arguments")]
    MissingArguments(&'static str),

    /// A tag's argument text did not match its grammar.
    #[error("'{tag}' tag had invalid arguments; usage: {usage}")]
    InvalidArguments {
        tag: &'static str,
        usage: &'static str,
    },

    #[error("unknown template tag '{0}'")]
    UnknownTag(String),

    /// The related-posts expression did not produce a post.
    #[error("'get_related_posts' could not resolve '{expr}' to a post: {detail}")]
    PostResolution { expr: String, detail: String },

    #[error("'get_links' filter requires HTML parsing support; rebuild with the 'html' feature")]
    LinkParserUnavailable,

    #[error("Failed to render. Original error: {0}")]
    Render(#[from] minijinja::Error),

    #[error("Context value error: {0}")]
    Context(#[from] serde_json::Error),
}

/// Convenience type alias for Results with this crate's error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;
