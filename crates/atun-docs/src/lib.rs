#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

// Modules the end-user will interact directly or indirectly with
pub mod config;
pub mod errors;
pub mod navigation;
pub mod rewrite;

// Exports for end-users
pub use build::metadata::{BuildOutput, RedirectOutput};
pub use build::options::BuildOptions;
pub use build::write_redirects;
pub use config::SiteConfig;
pub use logging::init_logging;
pub use rewrite::{Resolution, Rewrites};

mod build;
mod logging;

pub mod maud {
    //! Helpers for [Maud](https://maud.lambda.xyz) templates, to render redirect pages inside a site's own layouts.
    pub use crate::templating::maud_ext::*;
}

mod templating;

use errors::AtunDocsError;
use navigation::resolve_links;

#[macro_export]
/// Declares a finalized set of rewrites, in matching order.
///
/// ## Example
/// ```rust
/// use atun_docs::rewrites;
///
/// let rewrites = rewrites![
///     "release/:version" => "https://github.com/AutomationD/atun/releases/tag/{version}"
/// ]
/// .unwrap();
///
/// assert_eq!(rewrites.len(), 1);
/// ```
macro_rules! rewrites {
    [$($pattern:expr => $target:expr),* $(,)?] => {
        (|| -> ::core::result::Result<$crate::rewrite::Rewrites, $crate::errors::RewriteError> {
            #[allow(unused_mut)]
            let mut builder = $crate::rewrite::Rewrites::builder();
            $(builder.register($pattern, $target)?;)*
            Ok(builder.build())
        })()
    };
}

/// The version of atun-docs being used.
///
/// Added as a generator tag to the pages it writes.
pub const GENERATOR: &str = concat!("atun-docs v", env!("CARGO_PKG_VERSION"));

/// Checks a site configuration and writes its redirect pages.
///
/// The rewrites are finalized and every navigation and sidebar link is resolved first, so a broken rule fails the build even if none of `paths` hits it.
///
/// ## Example
/// ```rust,no_run
/// use atun_docs::{publish, BuildOptions, BuildOutput, SiteConfig};
///
/// fn main() -> Result<BuildOutput, Box<dyn std::error::Error>> {
///     let config = SiteConfig::load("atun-docs.toml")?;
///     Ok(publish(&config, ["release/v2.0.0"], &BuildOptions::default())?)
/// }
/// ```
pub fn publish<I, P>(
    config: &SiteConfig,
    paths: I,
    options: &BuildOptions,
) -> Result<BuildOutput, AtunDocsError>
where
    I: IntoIterator<Item = P>,
    P: AsRef<str>,
{
    init_logging();

    let rewrites = config.rewrites()?;
    resolve_links(config, &rewrites)?;

    write_redirects(paths, &rewrites, options)
}
