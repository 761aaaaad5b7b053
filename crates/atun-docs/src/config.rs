//! Site configuration, loaded once at build start.
//!
//! ## Example
//! ```toml
//! title = "atun"
//! description = "AWS Tagged Tunnel"
//!
//! [search]
//! provider = "local"
//!
//! [[nav]]
//! text = "Guide"
//! link = "/guide/quickstart"
//!
//! [[sidebar]]
//! text = "Introduction"
//! items = [{ text = "Quickstart", link = "/guide/quickstart" }]
//!
//! [[rewrites]]
//! pattern = "release/:version"
//! target = "https://github.com/AutomationD/atun/releases/tag/{version}"
//! ```
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, RewriteError};
use crate::rewrite::Rewrites;

/// File name looked up in the working directory when no configuration path is given.
pub const DEFAULT_CONFIG_FILE: &str = "atun-docs.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Base URL for the site, e.g. `https://atun.example.com`. Used for canonical links of generated pages.
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub nav: Vec<NavItem>,
    #[serde(default)]
    pub sidebar: Vec<SidebarSection>,
    #[serde(default)]
    pub search: SearchProvider,
    #[serde(default)]
    pub footer: Option<Footer>,
    /// Rewrite rules, in matching order.
    #[serde(default)]
    pub rewrites: Vec<RewriteDecl>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub text: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarSection {
    pub text: String,
    #[serde(default)]
    pub collapsed: bool,
    #[serde(default)]
    pub items: Vec<SidebarItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarItem {
    pub text: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "provider", rename_all = "lowercase")]
pub enum SearchProvider {
    /// Search index built alongside the site.
    #[default]
    Local,
    Algolia {
        app_id: String,
        api_key: String,
        index_name: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footer {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub copyright: Option<String>,
}

/// A rewrite rule as written in the configuration file. `target` is a URL template, see [`RewriteTarget::Template`](crate::rewrite::RewriteTarget::Template).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteDecl {
    pub pattern: String,
    pub target: String,
}

impl SiteConfig {
    pub fn from_toml_str(source: &str, path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        toml::from_str(source).map_err(|source| ConfigError::Parse {
            path: path.into(),
            source,
        })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_toml_str(&source, path)?;
        debug!(target: "config", "Loaded {} ({} rewrites)", path.display(), config.rewrites.len());

        Ok(config)
    }

    /// Finalizes the declared rewrite rules, in declaration order.
    pub fn rewrites(&self) -> Result<Rewrites, RewriteError> {
        let mut builder = Rewrites::builder();
        for decl in &self.rewrites {
            builder.register(&decl.pattern, decl.target.as_str())?;
        }

        Ok(builder.build())
    }
}
