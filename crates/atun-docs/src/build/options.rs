use std::path::PathBuf;

/// Options for [`publish()`](crate::publish()).
///
/// ## Examples
/// Default values:
/// ```rust
/// use atun_docs::BuildOptions;
///
/// let options = BuildOptions::default();
/// assert_eq!(options.output_dir, std::path::PathBuf::from("dist"));
/// ```
/// Custom values:
/// ```rust
/// use atun_docs::BuildOptions;
///
/// let options = BuildOptions {
///     output_dir: "public".into(),
///     clean_output_dir: true,
/// };
/// ```
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Directory redirect pages are written to. A redirect for `release/v2.0.0` lands in `<output_dir>/release/v2.0.0/index.html`.
    pub output_dir: PathBuf,

    /// Whether to delete the output directory before writing.
    ///
    /// Off by default, as redirects are usually written next to the pages of the site.
    pub clean_output_dir: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            output_dir: "dist".into(),
            clean_output_dir: false,
        }
    }
}
