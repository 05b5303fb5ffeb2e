use crate::error::Result;

/// Trait for template rendering engines that understand the tag
/// mini-language.
pub trait TemplateRenderer {
    /// Registers a template. Tag blocks are parsed here; a malformed tag
    /// makes the whole template fail to compile.
    ///
    /// # Arguments
    /// * `name` - Name to identify the template
    /// * `source` - Template content as string
    fn add_template(&mut self, name: &str, source: &str) -> Result<()>;

    /// Renders a registered template with the given context.
    ///
    /// # Arguments
    /// * `name` - Name of a previously added template
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, name: &str, context: &serde_json::Value) -> Result<String>;

    /// Parses and renders a one-shot template string with the given context.
    fn render_str(&self, source: &str, context: &serde_json::Value) -> Result<String>;
}
