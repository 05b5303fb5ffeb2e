//! `{% get_blog_categories as [var_name] %}`

use crate::context::Bindings;
use crate::error::Result;
use crate::store::CategoryRepository;

#[derive(Debug, Clone, PartialEq)]
pub struct CategoriesTag {
    var_name: String,
}

impl CategoriesTag {
    pub const NAME: &'static str = "get_blog_categories";
    pub const USAGE: &'static str = "{% get_blog_categories as [var_name] %}";

    pub fn parse(args: Option<&str>) -> Result<Self> {
        let var_name = super::parse_as_clause(args, Self::NAME, Self::USAGE)?;
        Ok(Self { var_name })
    }

    pub fn var_name(&self) -> &str {
        &self.var_name
    }

    /// Binds the full, unfiltered category collection. Always succeeds.
    pub fn render<R>(&self, categories: &R, bindings: &mut Bindings) -> Result<()>
    where
        R: CategoryRepository + ?Sized,
    {
        bindings.set(&self.var_name, serde_json::to_value(categories.categories())?);
        Ok(())
    }
}
