use atun_docs::{errors::AtunDocsError, navigation::site_path, Resolution, SiteConfig};
use colored::Colorize;

pub fn print_resolutions(
    config: &SiteConfig,
    paths: &[String],
    quiet: bool,
) -> Result<(), AtunDocsError> {
    let rewrites = config.rewrites()?;

    for path in paths {
        let resolution = rewrites.resolve(site_path(path))?;

        if !quiet {
            println!("{}", describe(path, &resolution));
        }
    }

    Ok(())
}

fn describe(path: &str, resolution: &Resolution) -> String {
    match resolution {
        Resolution::Redirect(redirect) => format!(
            "{} {} {} {}",
            path,
            "->".dimmed(),
            redirect.target,
            format!("({})", redirect.pattern).dimmed()
        ),
        Resolution::Passthrough => format!("{} {}", path, "(no rewrite)".dimmed()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atun_docs::rewrites;

    #[test]
    fn describe_resolutions() {
        colored::control::set_override(false);

        let rewrites = rewrites![
            "release/:version" => "https://github.com/AutomationD/atun/releases/tag/{version}"
        ]
        .unwrap();

        assert_eq!(
            describe("release/v2.0.0", &rewrites.resolve("release/v2.0.0").unwrap()),
            "release/v2.0.0 -> https://github.com/AutomationD/atun/releases/tag/v2.0.0 (release/:version)"
        );
        assert_eq!(
            describe("guide/quickstart", &rewrites.resolve("guide/quickstart").unwrap()),
            "guide/quickstart (no rewrite)"
        );
        assert_eq!(
            describe("/release/v2.0.0", &rewrites.resolve(site_path("/release/v2.0.0")).unwrap()),
            "/release/v2.0.0 -> https://github.com/AutomationD/atun/releases/tag/v2.0.0 (release/:version)"
        );
    }
}
