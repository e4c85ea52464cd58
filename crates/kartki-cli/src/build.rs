use std::error::Error;
use std::path::PathBuf;

use kartki::{build, BuildOptions};
use tracing::info;

#[derive(clap::Args, Debug, Default)]
pub struct BuildArgs {
    /// Directory the pages are written to
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
    /// Directory copied as-is into the output directory
    #[arg(long)]
    pub static_dir: Option<PathBuf>,
    /// Base URL of the deployed site, used for canonical links
    #[arg(long)]
    pub base_url: Option<String>,
    /// Keep the previous content of the output directory
    #[arg(long)]
    pub no_clean: bool,
    /// Don't inject the client navigation script, every link then reloads the page
    #[arg(long)]
    pub no_client_navigation: bool,
}

impl BuildArgs {
    /// Applies the flags on top of the default build options.
    pub fn to_options(&self) -> BuildOptions {
        let defaults = BuildOptions::default();

        BuildOptions {
            output_dir: self.output_dir.clone().unwrap_or(defaults.output_dir),
            static_dir: self.static_dir.clone().unwrap_or(defaults.static_dir),
            base_url: self.base_url.clone().or(defaults.base_url),
            clean_output_dir: defaults.clean_output_dir && !self.no_clean,
            client_navigation: defaults.client_navigation && !self.no_client_navigation,
            routes: defaults.routes,
        }
    }
}

pub fn run_build(args: &BuildArgs) -> Result<(), Box<dyn Error>> {
    let output = build(&args.to_options())?;

    info!(name: "build", "{} files written", output.pages.len() + output.static_files.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let args = BuildArgs {
            output_dir: Some("public".into()),
            base_url: Some("https://example.com".to_string()),
            no_clean: true,
            no_client_navigation: true,
            ..Default::default()
        };

        let options = args.to_options();

        assert_eq!(options.output_dir, PathBuf::from("public"));
        assert_eq!(options.static_dir, PathBuf::from("static"));
        assert_eq!(options.base_url.as_deref(), Some("https://example.com"));
        assert!(!options.clean_output_dir);
        assert!(!options.client_navigation);
    }

    #[test]
    fn test_no_flags_keep_defaults() {
        let options = BuildArgs::default().to_options();

        assert_eq!(options.output_dir, PathBuf::from("dist"));
        assert!(options.client_navigation);
    }
}
