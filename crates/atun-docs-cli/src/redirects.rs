use std::path::PathBuf;

use atun_docs::{errors::AtunDocsError, publish, BuildOptions, SiteConfig};
use log::warn;

pub fn write_site_redirects(
    config: &SiteConfig,
    paths: &[String],
    output_dir: PathBuf,
    clean_output_dir: bool,
) -> Result<(), AtunDocsError> {
    let options = BuildOptions {
        output_dir,
        clean_output_dir,
    };

    let output = publish(config, paths, &options)?;

    for path in &output.skipped {
        warn!(target: "redirects", "No rewrite applies to {}, nothing was written for it", path);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn writes_site_redirects() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("atun-docs.toml");
        fs::write(
            &config_path,
            r#"
title = "atun"

[[rewrites]]
pattern = "release/:version"
target = "https://github.com/AutomationD/atun/releases/tag/{version}"
"#,
        )
        .unwrap();
        let config = SiteConfig::load(&config_path).unwrap();

        let output_dir = dir.path().join("dist");
        let paths = vec!["/release/v2.0.0".to_string(), "guide/quickstart".to_string()];
        write_site_redirects(&config, &paths, output_dir.clone(), false).unwrap();

        let page = fs::read_to_string(output_dir.join("release/v2.0.0/index.html")).unwrap();
        assert!(page.contains("https://github.com/AutomationD/atun/releases/tag/v2.0.0"));
        assert!(!output_dir.join("guide").exists());
    }
}
