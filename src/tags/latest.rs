//! `{% get_latest_posts [limit] as [var_name] %}`
//!
//! Binds the `limit` most recently published posts. With a limit of exactly
//! one, binds the single post object instead of a one-element sequence.

use std::sync::OnceLock;

use log::debug;
use regex::Regex;

use crate::context::Bindings;
use crate::error::{Error, Result};
use crate::store::PostRepository;

fn args_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(.*?) as (\w+)").expect("hard-coded pattern"))
}

#[derive(Debug, Clone, PartialEq)]
pub struct LatestPostsTag {
    limit: usize,
    var_name: String,
}

impl LatestPostsTag {
    pub const NAME: &'static str = "get_latest_posts";
    pub const USAGE: &'static str = "{% get_latest_posts [limit] as [var_name] %}";

    pub fn parse(args: Option<&str>) -> Result<Self> {
        let args = args.ok_or(Error::MissingArguments(Self::NAME))?;
        let invalid = || Error::InvalidArguments {
            tag: Self::NAME,
            usage: Self::USAGE,
        };
        let captures = args_re().captures(args).ok_or_else(invalid)?;
        let limit: usize = captures[1].trim().parse().map_err(|_| invalid())?;
        if limit == 0 {
            return Err(invalid());
        }
        Ok(Self {
            limit,
            var_name: captures[2].to_string(),
        })
    }

    pub fn var_name(&self) -> &str {
        &self.var_name
    }

    pub fn render<R>(&self, posts: &R, bindings: &mut Bindings) -> Result<()>
    where
        R: PostRepository + ?Sized,
    {
        let latest = posts.latest(self.limit);
        debug!("'{}': {} post(s) -> '{}'", Self::NAME, latest.len(), self.var_name);
        match latest.as_slice() {
            [single] if self.limit == 1 => {
                bindings.set(&self.var_name, serde_json::to_value(single)?)
            }
            _ => bindings.set(&self.var_name, serde_json::to_value(&latest)?),
        }
        Ok(())
    }
}
