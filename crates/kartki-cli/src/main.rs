mod build;
mod consts;
mod logging;
mod navigate;
mod preview;
mod server_utils;

use std::path::PathBuf;
use std::process::ExitCode;

use build::{run_build, BuildArgs};
use clap::{Parser, Subcommand};
use kartki::Router;
use logging::init_logging;
use preview::start_preview_web_server;
use tracing::error;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Silence all logs
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build every page to static HTML
    Build(BuildArgs),
    /// Serve a built site
    Preview {
        /// Directory to serve
        #[arg(long, default_value = "dist")]
        dist: PathBuf,
        /// Expose the server to the network
        #[arg(long)]
        host: bool,
    },
    /// List the routes and the page bound to each
    Routes,
    /// Print the HTML document of a path
    Render {
        #[arg(default_value = "/")]
        path: String,
    },
    /// Start at `/`, navigate to each path in turn and print the final page
    Navigate {
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Start at `/` and activate the navigation control of the current page, repeatedly
    Follow {
        #[arg(long, short, default_value_t = 1)]
        times: usize,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if !cli.quiet {
        init_logging();
    }

    let mut router = Router::default();

    let result = match &cli.command {
        Commands::Build(args) => run_build(args),
        Commands::Preview { dist, host } => {
            if !dist.exists() {
                error!(name: "preview", "{} does not exist. Run `kartki build` first.", dist.display());
                return ExitCode::FAILURE;
            }

            start_preview_web_server(dist.clone(), *host).await
        }
        Commands::Routes => {
            navigate::print_routes(&router);
            Ok(())
        }
        Commands::Render { path } => navigate::print_document(path),
        Commands::Navigate { paths } => {
            navigate::navigate(&mut router, paths);
            Ok(())
        }
        Commands::Follow { times } => navigate::follow(&mut router, *times).map(|headings| {
            for heading in headings {
                println!("{}", heading);
            }
        }),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(name: "kartki", "{}", err);
            ExitCode::FAILURE
        }
    }
}
