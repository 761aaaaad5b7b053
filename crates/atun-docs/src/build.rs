use std::{
    fs, io,
    path::{Path, PathBuf},
    time::Instant,
};

use colored::Colorize;
use log::{debug, info};

use crate::{
    BuildOptions, BuildOutput,
    errors::{AtunDocsError, BuildError},
    logging::{FormatElapsedTimeOptions, format_elapsed_time, print_title},
    navigation::site_path,
    rewrite::{Resolution, Rewrites},
    templating::maud_ext::redirect_page,
};

pub mod metadata;
pub mod options;

/// Writes a redirect page for every path a rewrite applies to.
///
/// Paths may start with `/`, as navigation links do. Every path is resolved and checked before the output directory is touched,
/// so a failing batch leaves the previous output as it was.
pub fn write_redirects<I, P>(
    paths: I,
    rewrites: &Rewrites,
    options: &BuildOptions,
) -> Result<BuildOutput, AtunDocsError>
where
    I: IntoIterator<Item = P>,
    P: AsRef<str>,
{
    let build_start = Instant::now();
    let mut build_metadata = BuildOutput::new(build_start);

    let mut planned = Vec::new();
    for path in paths {
        let path = path.as_ref();

        let redirect = match rewrites.resolve(site_path(path))? {
            Resolution::Redirect(redirect) => redirect,
            Resolution::Passthrough => {
                debug!(target: "build", "No rewrite applies to {}, skipping", path);
                build_metadata.add_skipped(path.to_string());
                continue;
            }
        };

        let file_path = redirect_file_path(&options.output_dir, path)?;
        planned.push((path.to_string(), file_path, redirect));
    }

    if options.clean_output_dir && options.output_dir.exists() {
        debug!(target: "build", "Cleaning {}", options.output_dir.display());
        fs::remove_dir_all(&options.output_dir)?;
    }

    print_title("writing redirects");

    for (path, file_path, redirect) in planned {
        let content = redirect_page(&redirect.target).into_string();

        write_redirect_file(content.as_bytes(), &file_path).map_err(|source| {
            BuildError::WriteFailed {
                path: file_path.clone(),
                source,
            }
        })?;

        info!(target: "build", "{} {} {}", path, "->".dimmed(), redirect.target);

        build_metadata.add_redirect(
            path,
            file_path.to_string_lossy().to_string(),
            redirect.target,
        );
    }

    info!(target: "SKIP_FORMAT", "{}", "");
    info!(target: "build", "{}", format!("{} redirects written in {}", build_metadata.redirects.len(), format_elapsed_time(build_start.elapsed(), &FormatElapsedTimeOptions::default())).bold());

    Ok(build_metadata)
}

/// Maps a rewritten path to the `index.html` that serves it, refusing anything that would escape the output directory.
fn redirect_file_path(output_dir: &Path, path: &str) -> Result<PathBuf, BuildError> {
    let relative = path.trim_matches('/');

    let is_safe = !relative.is_empty()
        && !relative.contains('\\')
        && relative
            .split('/')
            .all(|segment| !segment.is_empty() && segment != "." && segment != "..");

    if !is_safe {
        return Err(BuildError::UnsafeOutputPath {
            path: path.to_string(),
        });
    }

    Ok(output_dir.join(relative).join("index.html"))
}

fn write_redirect_file(content: &[u8], file_path: &PathBuf) -> Result<(), io::Error> {
    // Create the parent directories if it doesn't exist
    if let Some(parent_dir) = file_path.parent() {
        fs::create_dir_all(parent_dir)?
    }

    fs::write(file_path, content)?;

    Ok(())
}
