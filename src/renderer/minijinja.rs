use std::sync::{Arc, OnceLock};

use indexmap::IndexMap;
use log::debug;
use minijinja::Environment;
use regex::Regex;

use crate::config::Settings;
use crate::context::Bindings;
use crate::error::Result;
use crate::renderer::{filters, TemplateRenderer};
use crate::store::BlogStore;
use crate::tags::Tag;

/// Matches the tag blocks this library owns. Anything else between `{%`
/// and `%}` is left for MiniJinja.
fn tag_block_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"\{%\s*(?:get_latest_posts|get_blog_categories|get_blogroll|get_related_posts)\b(?s:.*?)%\}",
        )
        .expect("hard-coded pattern")
    })
}

/// Splits a template source into its tag occurrences (parsed) and the
/// remaining text. A tag renders to the empty string, so each block is
/// simply removed from the source handed to MiniJinja.
fn extract_tags(source: &str) -> Result<(String, Vec<Tag>)> {
    let mut tags = Vec::new();
    let mut stripped = String::with_capacity(source.len());
    let mut last = 0;
    for found in tag_block_re().find_iter(source) {
        stripped.push_str(&source[last..found.start()]);
        last = found.end();
        let contents = found
            .as_str()
            .trim_start_matches("{%")
            .trim_end_matches("%}");
        tags.push(Tag::parse(contents)?);
    }
    stripped.push_str(&source[last..]);
    Ok((stripped, tags))
}

/// MiniJinja-based template rendering engine with blog tag support.
pub struct BlogRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
    /// Storage the tags query at render time
    store: Arc<dyn BlogStore + Send + Sync>,
    /// Parsed tag occurrences per registered template, in document order
    templates: IndexMap<String, Vec<Tag>>,
}

impl BlogRenderer {
    pub fn new(store: Arc<dyn BlogStore + Send + Sync>, settings: Settings) -> Self {
        let mut env = Environment::new();
        env.add_filter("get_links", move |value: &str| {
            filters::get_links(value, settings.debug)
        });
        Self { env, store, templates: IndexMap::new() }
    }

    /// Run `tags` in document order and merge what they bind over the
    /// caller's context. Later tags see (and may overwrite) earlier
    /// bindings; a name collision is a silent overwrite.
    fn run_tags(&self, tags: &[Tag], context: &serde_json::Value) -> Result<Bindings> {
        let mut bindings = Bindings::new();
        for tag in tags {
            tag.render(self.store.as_ref(), context, &mut bindings)?;
            debug!("tag bound '{}'", tag.var_name());
        }
        Ok(bindings)
    }
}

impl TemplateRenderer for BlogRenderer {
    fn add_template(&mut self, name: &str, source: &str) -> Result<()> {
        let (stripped, tags) = extract_tags(source)?;
        self.env.add_template_owned(name.to_string(), stripped)?;
        self.templates.insert(name.to_string(), tags);
        Ok(())
    }

    fn render(&self, name: &str, context: &serde_json::Value) -> Result<String> {
        let tags = self.templates.get(name).map(Vec::as_slice).unwrap_or(&[]);
        let bindings = self.run_tags(tags, context)?;
        let template = self.env.get_template(name)?;
        Ok(template.render(bindings.merged_over(context))?)
    }

    fn render_str(&self, source: &str, context: &serde_json::Value) -> Result<String> {
        let (stripped, tags) = extract_tags(source)?;
        let bindings = self.run_tags(&tags, context)?;
        let mut env = self.env.clone();
        env.add_template_owned("temp".to_string(), stripped)?;
        let template = env.get_template("temp")?;
        Ok(template.render(bindings.merged_over(context))?)
    }
}
