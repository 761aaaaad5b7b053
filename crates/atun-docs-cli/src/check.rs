use atun_docs::{errors::AtunDocsError, navigation::resolve_links, SiteConfig};
use colored::Colorize;
use log::info;

pub fn check_site(config: &SiteConfig) -> Result<(), AtunDocsError> {
    let rewrites = config.rewrites()?;

    for rule in rewrites.rules() {
        info!(target: "check", "rewrite {} {}", rule.pattern(), format!("(prefix `{}`)", rule.pattern().prefix()).dimmed());
    }

    let links = resolve_links(config, &rewrites)?;
    let rewritten = links
        .iter()
        .filter(|link| link.destination.is_external() && link.destination.href() != link.link)
        .count();

    info!(
        target: "check",
        "{}",
        format!(
            "{} is valid: {} rewrites, {} links ({} rewritten)",
            config.title,
            rewrites.len(),
            links.len(),
            rewritten
        )
        .bold()
    );

    Ok(())
}
