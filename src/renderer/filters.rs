//! Custom template filters.
//!
//! `get_links` extracts the anchor elements out of an already-rendered HTML
//! string: `{{ post.body | markdown | get_links }}`. Anchor parsing needs
//! the optional `html` feature; without it the filter returns its input
//! unchanged, or fails the render when [`Settings::debug`] is set.
//!
//! [`Settings::debug`]: crate::config::Settings

use serde::Serialize;

/// An anchor element extracted from rendered markup, in document order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link {
    /// The `href` attribute; empty when the anchor has none.
    pub href: String,
    /// The anchor's inner text, whitespace-trimmed.
    pub text: String,
    /// The `title` attribute, if present.
    pub title: Option<String>,
}

/// Parse `value` and return every anchor element in document order. No
/// caching; every call reparses.
#[cfg(feature = "html")]
pub fn extract_links(value: &str) -> Vec<Link> {
    let Ok(dom) = tl::parse(value, tl::ParserOptions::default()) else {
        return Vec::new();
    };
    let parser = dom.parser();
    dom.nodes()
        .iter()
        .filter_map(|node| node.as_tag())
        .filter(|tag| tag.name().as_utf8_str().eq_ignore_ascii_case("a"))
        .map(|tag| {
            let attr = |name: &str| {
                tag.attributes()
                    .get(name)
                    .flatten()
                    .map(|value| value.as_utf8_str().into_owned())
            };
            Link {
                href: attr("href").unwrap_or_default(),
                text: tag.inner_text(parser).trim().to_string(),
                title: attr("title"),
            }
        })
        .collect()
}

#[cfg(feature = "html")]
pub(crate) fn get_links(
    value: &str,
    _debug: bool,
) -> Result<minijinja::value::Value, minijinja::Error> {
    Ok(minijinja::value::Value::from_serialize(extract_links(value)))
}

#[cfg(not(feature = "html"))]
pub(crate) fn get_links(
    value: &str,
    debug: bool,
) -> Result<minijinja::value::Value, minijinja::Error> {
    if debug {
        Err(minijinja::Error::new(
            minijinja::ErrorKind::InvalidOperation,
            crate::error::Error::LinkParserUnavailable.to_string(),
        ))
    } else {
        log::warn!("'get_links' filter: HTML parsing unavailable, passing value through");
        Ok(minijinja::value::Value::from(value))
    }
}
