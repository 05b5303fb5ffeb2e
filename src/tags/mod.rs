//! The tag mini-language.
//!
//! Each tag occurrence is parsed once, when its template is registered, into
//! one of the [`Tag`] variants; rendering a template re-runs every parsed
//! tag against storage and writes the result into [`Bindings`].

mod blogroll;
mod categories;
mod latest;
mod related;

pub use blogroll::BlogrollTag;
pub use categories::CategoriesTag;
pub use latest::LatestPostsTag;
pub use related::RelatedPostsTag;

use serde_json::Value;

use crate::context::Bindings;
use crate::error::{Error, Result};
use crate::store::BlogStore;

/// A parsed tag occurrence.
#[derive(Debug, Clone, PartialEq)]
pub enum Tag {
    LatestPosts(LatestPostsTag),
    Categories(CategoriesTag),
    Blogroll(BlogrollTag),
    RelatedPosts(RelatedPostsTag),
}

impl Tag {
    /// Parse the raw contents of a tag block (tag name plus argument text,
    /// without the surrounding delimiters).
    pub fn parse(contents: &str) -> Result<Tag> {
        let contents = contents.trim();
        let (name, args) = match contents.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, Some(rest.trim())),
            None => (contents, None),
        };
        let args = args.filter(|args| !args.is_empty());
        match name {
            LatestPostsTag::NAME => Ok(Tag::LatestPosts(LatestPostsTag::parse(args)?)),
            CategoriesTag::NAME => Ok(Tag::Categories(CategoriesTag::parse(args)?)),
            BlogrollTag::NAME => Ok(Tag::Blogroll(BlogrollTag::parse(args)?)),
            RelatedPostsTag::NAME => Ok(Tag::RelatedPosts(RelatedPostsTag::parse(args)?)),
            other => Err(Error::UnknownTag(other.to_string())),
        }
    }

    /// The variable name this tag binds.
    pub fn var_name(&self) -> &str {
        match self {
            Tag::LatestPosts(tag) => tag.var_name(),
            Tag::Categories(tag) => tag.var_name(),
            Tag::Blogroll(tag) => tag.var_name(),
            Tag::RelatedPosts(tag) => tag.var_name(),
        }
    }

    /// Execute the tag: query `store` and write one binding. `context` is
    /// the caller-supplied base context; tags that resolve expressions also
    /// see bindings made by earlier tags in the same template.
    pub fn render<S>(
        &self,
        store: &S,
        context: &Value,
        bindings: &mut Bindings,
    ) -> Result<()>
    where
        S: BlogStore + ?Sized,
    {
        match self {
            Tag::LatestPosts(tag) => tag.render(store, bindings),
            Tag::Categories(tag) => tag.render(store, bindings),
            Tag::Blogroll(tag) => tag.render(store, bindings),
            Tag::RelatedPosts(tag) => tag.render(store, context, bindings),
        }
    }
}

fn as_clause_re() -> &'static regex::Regex {
    static RE: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();
    RE.get_or_init(|| regex::Regex::new(r"as (\w+)").expect("hard-coded pattern"))
}

/// Parse an `as <identifier>` argument list, shared by the tags that take
/// nothing else.
pub(crate) fn parse_as_clause(
    args: Option<&str>,
    tag: &'static str,
    usage: &'static str,
) -> Result<String> {
    let args = args.ok_or(Error::MissingArguments(tag))?;
    let captures = as_clause_re()
        .captures(args)
        .ok_or(Error::InvalidArguments { tag, usage })?;
    Ok(captures[1].to_string())
}

/// Split argument text on whitespace while keeping quoted substrings (with
/// their quotes) together.
pub fn split_contents(input: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    for ch in input.chars() {
        match quote {
            Some(open) => {
                current.push(ch);
                if ch == open {
                    quote = None;
                }
            }
            None if ch == '"' || ch == '\'' => {
                quote = Some(ch);
                current.push(ch);
            }
            None if ch.is_whitespace() => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            None => current.push(ch),
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}
