//! `{% get_blogroll as [var_name] %}`

use crate::context::Bindings;
use crate::error::Result;
use crate::store::BlogrollRepository;

#[derive(Debug, Clone, PartialEq)]
pub struct BlogrollTag {
    var_name: String,
}

impl BlogrollTag {
    pub const NAME: &'static str = "get_blogroll";
    pub const USAGE: &'static str = "{% get_blogroll as [var_name] %}";

    pub fn parse(args: Option<&str>) -> Result<Self> {
        let var_name = super::parse_as_clause(args, Self::NAME, Self::USAGE)?;
        Ok(Self { var_name })
    }

    pub fn var_name(&self) -> &str {
        &self.var_name
    }

    /// Binds the full blogroll collection. Always succeeds.
    pub fn render<R>(&self, blogroll: &R, bindings: &mut Bindings) -> Result<()>
    where
        R: BlogrollRepository + ?Sized,
    {
        bindings.set(&self.var_name, serde_json::to_value(blogroll.blogroll())?);
        Ok(())
    }
}
