//! Resolution of the links found in the navigation bar and the sidebar.
use std::fmt::{self, Display, Formatter};

use log::debug;

use crate::config::SiteConfig;
use crate::errors::ResolutionError;
use crate::rewrite::{Resolution, Rewrites};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkLocation {
    Nav,
    /// A sidebar section, by its title.
    Sidebar(String),
}

impl Display for LinkLocation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LinkLocation::Nav => write!(f, "nav"),
            LinkLocation::Sidebar(section) => write!(f, "sidebar \"{}\"", section),
        }
    }
}

/// Where a link ends up once rewrites have been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkDestination {
    /// A page of the site, rendered normally.
    Local(String),
    External(String),
}

impl LinkDestination {
    pub fn href(&self) -> &str {
        match self {
            LinkDestination::Local(href) | LinkDestination::External(href) => href,
        }
    }

    pub fn is_external(&self) -> bool {
        matches!(self, LinkDestination::External(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLink {
    pub location: LinkLocation,
    pub text: String,
    /// The link as written in the configuration.
    pub link: String,
    pub destination: LinkDestination,
}

/// Passes every navigation and sidebar link through the rewrites.
///
/// Absolute URLs are kept as they are. Site links are resolved without their leading `/`, as rewrite patterns are declared relative to the site root.
pub fn resolve_links(
    config: &SiteConfig,
    rewrites: &Rewrites,
) -> Result<Vec<ResolvedLink>, ResolutionError> {
    let nav = config
        .nav
        .iter()
        .map(|item| (LinkLocation::Nav, &item.text, &item.link));
    let sidebar = config.sidebar.iter().flat_map(|section| {
        section
            .items
            .iter()
            .map(move |item| (LinkLocation::Sidebar(section.text.clone()), &item.text, &item.link))
    });

    nav.chain(sidebar)
        .map(|(location, text, link)| -> Result<ResolvedLink, ResolutionError> {
            let destination = resolve_link(link, rewrites)?;

            if destination.is_external() && !is_absolute_url(link) {
                debug!(target: "navigation", "{} link {} rewritten to {}", location, link, destination.href());
            }

            Ok(ResolvedLink {
                location,
                text: text.clone(),
                link: link.clone(),
                destination,
            })
        })
        .collect()
}

pub fn resolve_link(link: &str, rewrites: &Rewrites) -> Result<LinkDestination, ResolutionError> {
    if is_absolute_url(link) {
        return Ok(LinkDestination::External(link.to_string()));
    }

    Ok(match rewrites.resolve(site_path(link))? {
        Resolution::Redirect(redirect) => LinkDestination::External(redirect.target),
        Resolution::Passthrough => LinkDestination::Local(link.to_string()),
    })
}

/// The form rewrite patterns are declared in: relative to the site root, without a leading `/`.
pub fn site_path(link: &str) -> &str {
    link.strip_prefix('/').unwrap_or(link)
}

fn is_absolute_url(link: &str) -> bool {
    link.starts_with("https://") || link.starts_with("http://")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{NavItem, SidebarItem, SidebarSection};
    use crate::rewrite::RewriteTarget;

    fn site() -> SiteConfig {
        SiteConfig {
            title: "atun".to_string(),
            description: None,
            base_url: None,
            nav: vec![
                NavItem {
                    text: "Guide".to_string(),
                    link: "/guide/quickstart".to_string(),
                },
                NavItem {
                    text: "v2.0.0".to_string(),
                    link: "/release/v2.0.0".to_string(),
                },
                NavItem {
                    text: "GitHub".to_string(),
                    link: "https://github.com/AutomationD/atun".to_string(),
                },
            ],
            sidebar: vec![SidebarSection {
                text: "Releases".to_string(),
                collapsed: false,
                items: vec![SidebarItem {
                    text: "v1.0.0".to_string(),
                    link: "release/v1.0.0".to_string(),
                }],
            }],
            search: Default::default(),
            footer: None,
            rewrites: vec![],
        }
    }

    fn rewrites() -> Rewrites {
        let mut builder = Rewrites::builder();
        builder
            .register(
                "release/:version",
                "https://github.com/AutomationD/atun/releases/tag/{version}",
            )
            .unwrap();
        builder.build()
    }

    #[test]
    fn test_resolve_links() {
        let links = resolve_links(&site(), &rewrites()).unwrap();

        assert_eq!(
            links.iter().map(|l| l.destination.clone()).collect::<Vec<_>>(),
            vec![
                LinkDestination::Local("/guide/quickstart".to_string()),
                LinkDestination::External(
                    "https://github.com/AutomationD/atun/releases/tag/v2.0.0".to_string()
                ),
                LinkDestination::External("https://github.com/AutomationD/atun".to_string()),
                LinkDestination::External(
                    "https://github.com/AutomationD/atun/releases/tag/v1.0.0".to_string()
                ),
            ]
        );
        assert_eq!(links[3].location, LinkLocation::Sidebar("Releases".to_string()));
        assert_eq!(links[1].link, "/release/v2.0.0");
    }

    #[test]
    fn test_site_path() {
        assert_eq!(site_path("/release/v1"), "release/v1");
        assert_eq!(site_path("release/v1"), "release/v1");
        assert_eq!(site_path("//release/v1"), "/release/v1");
        assert_eq!(site_path(""), "");
    }

    #[test]
    fn test_resolve_links_without_rewrites() {
        let links = resolve_links(&site(), &Rewrites::default()).unwrap();

        assert_eq!(
            links.iter().filter(|l| l.destination.is_external()).count(),
            1
        );
    }

    #[test]
    fn test_resolution_error_propagates() {
        let mut builder = Rewrites::builder();
        builder
            .register("release/:version", RewriteTarget::function(|_| Ok(String::new())))
            .unwrap();

        let error = resolve_links(&site(), &builder.build()).unwrap_err();
        assert_eq!(error.path, "release/v2.0.0");
    }
}
