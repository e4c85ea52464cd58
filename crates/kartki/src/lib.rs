#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

// Modules the end-user will interact directly or indirectly with
pub mod errors;
pub mod navigation;
pub mod pages;
pub mod route;
pub mod view;

mod routing;

// Exports for end-users
pub use build::metadata::{BuildOutput, PageOutput, StaticAssetOutput};
pub use build::options::BuildOptions;
pub use build::{NAVIGATION_SCRIPT, NOT_FOUND_FILE, build, render_document, render_page};
pub use errors::{KartkiError, NotFoundError};
pub use navigation::{NavigationState, Router};
pub use route::{PageId, Route, RouteTable};
pub use routing::{build_url, normalize_path};
pub use view::{NavLink, Node, VisualTree};

mod build;
mod templating;

pub mod maud {
    //! Rendering of visual trees to HTML through [Maud](https://maud.lambda.xyz).
    //!
    //! ## Example
    //! ```rust
    //! use kartki::PageId;
    //! use maud::Render;
    //!
    //! let html = PageId::PageTwo.render().render().into_string();
    //! assert!(html.contains("<h1>Page Two</h1>"));
    //! ```
    pub use crate::templating::maud_ext::*;
}

// Internal modules
mod logging;

pub use logging::init_logging;

use std::env;

/// Returns whether Kartki is running in development mode (`KARTKI_DEV=true`).
///
/// In development, the output directory is kept between builds by default.
pub fn is_dev() -> bool {
    if option_env!("KARTKI_DEV") == Some("true") {
        return true;
    }

    env::var("KARTKI_DEV").map(|v| v == "true").unwrap_or(false)
}

/// The version of Kartki being used, included in the generator tag of every page.
pub const GENERATOR: &str = concat!("Kartki v", env!("CARGO_PKG_VERSION"));

/// Kartki entrypoint. Sets up logging, then builds every page to [`BuildOptions::output_dir`].
///
/// ## Example
/// ```rust,no_run
/// use kartki::{generate, BuildOptions, BuildOutput};
///
/// fn main() -> Result<BuildOutput, Box<dyn std::error::Error>> {
///   generate(BuildOptions::default())
/// }
/// ```
pub fn generate(options: BuildOptions) -> Result<BuildOutput, Box<dyn std::error::Error>> {
    init_logging();

    Ok(build(&options)?)
}
