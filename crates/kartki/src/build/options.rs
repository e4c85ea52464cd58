use std::path::PathBuf;

use crate::{is_dev, route::RouteTable};

/// Kartki build options. Should be passed to [`generate()`](crate::generate()) or [`build()`](crate::build()).
///
/// ## Examples
/// Default values:
/// ```rust,no_run
/// use kartki::{generate, BuildOptions, BuildOutput};
///
/// fn main() -> Result<BuildOutput, Box<dyn std::error::Error>> {
///   generate(BuildOptions::default())
/// }
/// ```
/// Custom values:
/// ```rust,no_run
/// use kartki::{generate, BuildOptions, BuildOutput};
///
/// fn main() -> Result<BuildOutput, Box<dyn std::error::Error>> {
///   generate(BuildOptions {
///     output_dir: "public".into(),
///     client_navigation: false,
///     ..Default::default()
///   })
/// }
/// ```
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Base URL for the site, e.g. `https://example.com`. When set, every page gets a `<link rel="canonical">`.
    pub base_url: Option<String>,

    pub output_dir: PathBuf,

    /// Copied as-is into `output_dir` if it exists.
    pub static_dir: PathBuf,

    /// Whether to clean the output directory before building.
    ///
    /// Defaults to `false` in development (`KARTKI_DEV=true`), `true` otherwise.
    pub clean_output_dir: bool,

    /// Whether to inject the client navigation script, which swaps pages without reloading the document.
    /// Without it, links are plain links and every navigation is a full page load.
    pub client_navigation: bool,

    pub routes: RouteTable,
}

/// Provides default values for [`crate::generate()`].
impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            base_url: None,
            output_dir: "dist".into(),
            static_dir: "static".into(),
            clean_output_dir: !is_dev(),
            client_navigation: true,
            routes: RouteTable::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_defaults() {
        unsafe { std::env::remove_var("KARTKI_DEV") };
        let options = BuildOptions::default();

        assert_eq!(options.output_dir, PathBuf::from("dist"));
        assert_eq!(options.static_dir, PathBuf::from("static"));
        assert!(options.clean_output_dir);
        assert!(options.client_navigation);
        assert_eq!(options.routes, RouteTable::default());
    }

    #[test]
    #[serial]
    fn test_dev_keeps_output_dir() {
        unsafe { std::env::set_var("KARTKI_DEV", "true") };
        let options = BuildOptions::default();
        unsafe { std::env::remove_var("KARTKI_DEV") };

        assert!(!options.clean_output_dir);
    }
}
