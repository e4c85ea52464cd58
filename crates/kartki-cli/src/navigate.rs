//! Commands driving the router from the terminal.
use std::error::Error;

use colored::Colorize;
use kartki::{render_document, BuildOptions, Router};
use tracing::{info, warn};

pub fn print_routes(router: &Router) {
    for route in router.routes() {
        println!("{:<12} {}", route.path.bold(), route.page);
    }
}

pub fn print_document(path: &str) -> Result<(), Box<dyn Error>> {
    let options = BuildOptions {
        client_navigation: false,
        ..Default::default()
    };

    println!("{}", render_document(path, &options)?);

    Ok(())
}

/// Starts at `/` and navigates to every path in turn. Unknown paths are reported and skipped, like a real navigation would be.
pub fn navigate(router: &mut Router, paths: &[String]) {
    for path in paths {
        let from = router.current_path();
        match router.navigate(path) {
            Ok(page) => {
                info!(name: "router", "{} -> {} ({})", from, router.current_path().bold(), page)
            }
            Err(err) => warn!(name: "router", "{}, staying on {}", err, from),
        }
    }

    print!("{}", router.render());
}

/// Activates the navigation control of the current page `times` times. Returns the headings seen along the way, starting with the current page.
pub fn follow(router: &mut Router, times: usize) -> Result<Vec<String>, Box<dyn Error>> {
    let mut headings = vec![heading_of(router)];

    for _ in 0..times {
        let tree = router.render();
        let Some(link) = tree.controls().first().copied() else {
            warn!(name: "router", "{} has no navigation control", router.current_path());
            break;
        };

        router.activate(link)?;
        headings.push(heading_of(router));
    }

    Ok(headings)
}

fn heading_of(router: &Router) -> String {
    router.render().heading().unwrap_or_default().to_string()
}
