mod check;
mod redirects;
mod resolve;

use std::path::PathBuf;

use atun_docs::{config::DEFAULT_CONFIG_FILE, errors::AtunDocsError, init_logging, SiteConfig};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to the site configuration
    #[arg(
        long,
        short,
        global = true,
        env = "ATUN_DOCS_CONFIG",
        default_value = DEFAULT_CONFIG_FILE
    )]
    config: PathBuf,

    /// Don't print anything but errors
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the configuration, its rewrites and every navigation link
    Check,
    /// Print where each path is rewritten to
    Resolve {
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Write redirect pages for the paths a rewrite applies to
    Redirects {
        /// Directory to write the pages to
        #[arg(long, default_value = "dist")]
        out: PathBuf,
        /// Delete the output directory first
        #[arg(long)]
        clean: bool,
        #[arg(required = true)]
        paths: Vec<String>,
    },
}

fn main() -> Result<(), AtunDocsError> {
    let cli = Cli::parse();

    init_logging();

    let config = SiteConfig::load(&cli.config)?;

    match cli.command {
        Commands::Check => check::check_site(&config),
        Commands::Resolve { paths } => resolve::print_resolutions(&config, &paths, cli.quiet),
        Commands::Redirects { out, clean, paths } => {
            redirects::write_site_redirects(&config, &paths, out, clean)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_redirects() {
        let cli = Cli::try_parse_from([
            "atun-docs",
            "redirects",
            "--config",
            "site.toml",
            "--out",
            "public",
            "release/v1",
            "release/v2",
        ])
        .unwrap();

        assert_eq!(cli.config, PathBuf::from("site.toml"));
        match cli.command {
            Commands::Redirects { out, clean, paths } => {
                assert_eq!(out, PathBuf::from("public"));
                assert!(!clean);
                assert_eq!(paths, vec!["release/v1", "release/v2"]);
            }
            _ => panic!("expected the redirects command"),
        }
    }

    #[test]
    fn resolve_requires_paths() {
        assert!(Cli::try_parse_from(["atun-docs", "resolve"]).is_err());
    }
}
