//! Runtime settings for the tag library.

use serde::Deserialize;

/// Settings the hosting application passes to [`crate::BlogRenderer`].
///
/// The default is production behavior: optional capabilities degrade
/// silently instead of failing the render.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct Settings {
    /// Fail loudly when an optional capability is missing instead of
    /// degrading. Corresponds to a development/debug deployment.
    #[serde(default)]
    pub debug: bool,
}
