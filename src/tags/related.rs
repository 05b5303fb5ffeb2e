//! `{% get_related_posts post_object [as var_name] %}`
//!
//! Resolves the post expression against the current render context, then
//! binds every other post sharing at least one tag with it, most shared
//! tags first.

use serde_json::Value;

use crate::context::Bindings;
use crate::error::{Error, Result};
use crate::model::Post;
use crate::store::PostRepository;

use super::split_contents;

#[derive(Debug, Clone, PartialEq)]
pub struct RelatedPostsTag {
    post_expr: String,
    var_name: String,
}

impl RelatedPostsTag {
    pub const NAME: &'static str = "get_related_posts";
    pub const USAGE: &'static str = "{% get_related_posts post_object as related_posts %}";
    pub const DEFAULT_VAR: &'static str = "related_posts";

    pub fn parse(args: Option<&str>) -> Result<Self> {
        let tokens = split_contents(args.unwrap_or_default());
        match tokens.as_slice() {
            [expr] => Ok(Self {
                post_expr: expr.clone(),
                var_name: Self::DEFAULT_VAR.to_string(),
            }),
            [expr, keyword, name] if keyword == "as" => Ok(Self {
                post_expr: expr.clone(),
                var_name: name.clone(),
            }),
            _ => Err(Error::InvalidArguments {
                tag: Self::NAME,
                usage: Self::USAGE,
            }),
        }
    }

    pub fn var_name(&self) -> &str {
        &self.var_name
    }

    /// `context` must already include bindings made by earlier tags; a
    /// template may feed one tag's result into this one.
    pub fn render<R>(
        &self,
        posts: &R,
        context: &Value,
        bindings: &mut Bindings,
    ) -> Result<()>
    where
        R: PostRepository + ?Sized,
    {
        let resolved = resolve(&self.post_expr, &bindings.merged_over(context))
            .ok_or_else(|| Error::PostResolution {
                expr: self.post_expr.clone(),
                detail: "no such variable in context".to_string(),
            })?;
        let post: Post =
            serde_json::from_value(resolved).map_err(|err| Error::PostResolution {
                expr: self.post_expr.clone(),
                detail: err.to_string(),
            })?;
        let related = posts.related_to(&post);
        bindings.set(&self.var_name, serde_json::to_value(related)?);
        Ok(())
    }
}

/// Resolve a template variable expression: a quoted string is a literal,
/// anything else is a dotted path into the context (object keys, or numeric
/// indexes into sequences).
fn resolve(expr: &str, context: &Value) -> Option<Value> {
    let bytes = expr.as_bytes();
    if expr.len() >= 2
        && (bytes[0] == b'"' || bytes[0] == b'\'')
        && bytes[expr.len() - 1] == bytes[0]
    {
        return Some(Value::String(expr[1..expr.len() - 1].to_string()));
    }
    let mut current = context;
    for part in expr.split('.') {
        current = match current {
            Value::Object(map) => map.get(part)?,
            Value::Array(items) => items.get(part.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PostStatus;
    use crate::store::InMemoryStore;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn post(id: u64, slug: &str, tags: &[&str]) -> Post {
        Post {
            id,
            title: slug.to_uppercase(),
            slug: slug.into(),
            body: String::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            status: PostStatus::Public,
            published_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn accepts_one_argument_with_default_var_name() {
        let tag = RelatedPostsTag::parse(Some("mypost")).unwrap();
        assert_eq!(tag.post_expr, "mypost");
        assert_eq!(tag.var_name(), "related_posts");
    }

    #[test]
    fn accepts_three_arguments_with_as_keyword() {
        let tag = RelatedPostsTag::parse(Some("mypost as rp")).unwrap();
        assert_eq!(tag.post_expr, "mypost");
        assert_eq!(tag.var_name(), "rp");
    }

    #[test]
    fn rejects_wrong_keyword_and_wrong_arity() {
        assert!(matches!(
            RelatedPostsTag::parse(Some("mypost with rp")),
            Err(Error::InvalidArguments { .. })
        ));
        assert!(matches!(
            RelatedPostsTag::parse(Some("a b c d")),
            Err(Error::InvalidArguments { .. })
        ));
        assert!(matches!(
            RelatedPostsTag::parse(Some("mypost as")),
            Err(Error::InvalidArguments { .. })
        ));
        assert!(matches!(
            RelatedPostsTag::parse(None),
            Err(Error::InvalidArguments { .. })
        ));
    }

    #[test]
    fn resolves_dotted_paths_and_literals() {
        let context = json!({"page": {"posts": [{"slug": "first"}]}});
        assert_eq!(
            resolve("page.posts.0.slug", &context),
            Some(json!("first"))
        );
        assert_eq!(resolve("'hello'", &context), Some(json!("hello")));
        assert_eq!(resolve("missing", &context), None);
    }

    #[test]
    fn binds_related_posts_by_overlap() {
        let store = InMemoryStore::new().with_posts(vec![
            post(1, "p", &["a", "b", "c"]),
            post(2, "q", &["a", "b"]),
            post(3, "r", &["a"]),
        ]);
        let context = json!({ "post": post(1, "p", &["a", "b", "c"]) });
        let tag = RelatedPostsTag::parse(Some("post as rp")).unwrap();
        let mut bindings = Bindings::new();
        tag.render(&store, &context, &mut bindings).unwrap();
        let slugs: Vec<&str> = bindings
            .get("rp")
            .unwrap()
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["slug"].as_str().unwrap())
            .collect();
        assert_eq!(slugs, ["q", "r"]);
    }

    #[test]
    fn sees_bindings_made_by_earlier_tags() {
        let store = InMemoryStore::new()
            .with_posts(vec![post(1, "p", &["a"]), post(2, "q", &["a"])]);
        let mut bindings = Bindings::new();
        bindings.set("newest", serde_json::to_value(post(1, "p", &["a"])).unwrap());
        let tag = RelatedPostsTag::parse(Some("newest")).unwrap();
        tag.render(&store, &json!({}), &mut bindings).unwrap();
        let related = bindings.get("related_posts").unwrap().as_array().unwrap().clone();
        assert_eq!(related.len(), 1);
        assert_eq!(related[0]["slug"], "q");
    }

    #[test]
    fn non_post_values_are_a_resolution_error() {
        let store = InMemoryStore::new();
        let tag = RelatedPostsTag::parse(Some("title")).unwrap();
        let mut bindings = Bindings::new();
        let err = tag
            .render(&store, &json!({"title": "just a string"}), &mut bindings)
            .unwrap_err();
        assert!(matches!(err, Error::PostResolution { .. }));
    }
}
