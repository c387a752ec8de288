use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use dicetrace_types::{
    DEFAULT_AUTO_EXPANSION_DEPTH_LIMIT, DEFAULT_LIST_PREVIEW_LIMIT, DEFAULT_SUM_PREVIEW_LIMIT,
    RenderContext,
};

/// Default display limits, loadable from a TOML file.
///
/// A negative value is the user-facing "unlimited" sentinel; it maps to the
/// render context's `None` before rendering.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub list_preview_limit: i64,
    pub sum_preview_limit: i64,
    pub auto_expansion_depth_limit: i64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            list_preview_limit: DEFAULT_LIST_PREVIEW_LIMIT as i64,
            sum_preview_limit: DEFAULT_SUM_PREVIEW_LIMIT as i64,
            auto_expansion_depth_limit: DEFAULT_AUTO_EXPANSION_DEPTH_LIMIT as i64,
        }
    }
}

impl DisplayConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn into_context(self) -> RenderContext {
        RenderContext {
            depth: None,
            list_preview_limit: to_limit(self.list_preview_limit),
            sum_preview_limit: to_limit(self.sum_preview_limit),
            auto_expansion_depth_limit: to_limit(self.auto_expansion_depth_limit),
        }
    }
}

fn to_limit(raw: i64) -> Option<u32> {
    u32::try_from(raw).ok()
}
