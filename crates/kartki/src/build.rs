use std::{
    env, fs,
    io::{self},
    path::{Path, PathBuf},
    time::{Instant, SystemTime, UNIX_EPOCH},
};

use crate::{
    BuildOptions, BuildOutput,
    errors::KartkiError,
    logging::{FormatElapsedTimeOptions, format_elapsed_time, print_title},
    maud::layout,
    pages,
    route::{PageId, Route},
    routing::{build_file_path, build_url},
    view::VisualTree,
};
use colored::{ColoredString, Colorize};
use log::{debug, info, trace, warn};
use lol_html::{RewriteStrSettings, element, html_content::ContentType, rewrite_str};
use rayon::prelude::*;

pub mod metadata;
pub mod options;

/// Browser script swapping pages in place when a navigation link is activated.
pub const NAVIGATION_SCRIPT: &str = include_str!("../js/navigation.js");

/// File the not found view is written to, relative to the output directory. Most static hosts pick it up automatically.
pub const NOT_FOUND_FILE: &str = "404.html";

struct RenderedPage {
    route: Option<Route>,
    file_path: PathBuf,
}

pub fn build(options: &BuildOptions) -> Result<BuildOutput, KartkiError> {
    let build_start = Instant::now();
    let mut build_metadata = BuildOutput::new(build_start);

    trace!(target: "build", "Setting up required directories...");

    if options.clean_output_dir {
        clean_output_dir(&options.output_dir);
    }
    fs::create_dir_all(&options.output_dir)?;

    info!(target: "build", "Output directory: {}", options.output_dir.display());

    print_title("generating pages");
    let pages_start = Instant::now();

    let route_format_options = FormatElapsedTimeOptions {
        additional_fn: Some(&|msg: ColoredString| {
            let formatted_msg = format!("(+{})", msg);
            if msg.fgcolor.is_none() {
                formatted_msg.dimmed()
            } else {
                formatted_msg.into()
            }
        }),
        ..Default::default()
    };

    let section_format_options = FormatElapsedTimeOptions {
        sec_red_threshold: 5,
        sec_yellow_threshold: 1,
        millis_red_threshold: None,
        millis_yellow_threshold: None,
        ..Default::default()
    };

    let routes: Vec<&Route> = options.routes.iter().collect();
    let mut rendered = routes
        .par_iter()
        .map(|route| -> Result<RenderedPage, KartkiError> {
            let route_start = Instant::now();

            let url = build_url(route.path);
            let file_path = build_file_path(route.path, &options.output_dir);
            let content = finish_page(&route.page.render(), Some(url.as_str()), options)?;

            write_page_file(&content, &file_path)?;

            info!(target: "pages", "{} -> {} {}", url, file_path.to_string_lossy().dimmed(), format_elapsed_time(route_start.elapsed(), &route_format_options));

            Ok(RenderedPage {
                route: Some(**route),
                file_path,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let not_found_start = Instant::now();
    let not_found_path = options.output_dir.join(NOT_FOUND_FILE);
    let content = finish_page(&pages::not_found(None), None, options)?;
    write_page_file(&content, &not_found_path)?;

    info!(target: "pages", "{} -> {} {}", "404".bold(), not_found_path.to_string_lossy().dimmed(), format_elapsed_time(not_found_start.elapsed(), &route_format_options));

    rendered.push(RenderedPage {
        route: None,
        file_path: not_found_path,
    });

    let page_count = rendered.len();
    for page in rendered {
        build_metadata.add_page(
            page.route.map(|route| route.path.to_string()),
            page.route.map(|route| route.page),
            page.file_path.to_string_lossy().to_string(),
        );
    }

    info!(target: "pages", "{}", format!("generated {} pages in {}", page_count, format_elapsed_time(pages_start.elapsed(), &section_format_options)).bold());

    if options.static_dir.is_dir() {
        let assets_start = Instant::now();
        print_title("copying static files");

        copy_recursively(
            &options.static_dir,
            &options.output_dir,
            &mut build_metadata,
        )?;

        info!(target: "build", "{}", format!("Static files copied in {}", format_elapsed_time(assets_start.elapsed(), &FormatElapsedTimeOptions::default())).bold());
    } else {
        debug!(target: "build", "No static directory at {}, skipping", options.static_dir.display());
    }

    info!(target: "SKIP_FORMAT", "{}", "");
    info!(target: "build", "{}", format!("Build completed in {}", format_elapsed_time(build_start.elapsed(), &section_format_options)).bold());

    Ok(build_metadata)
}

/// Renders the HTML document of a single page, without writing it anywhere.
pub fn render_page(page: PageId, options: &BuildOptions) -> Result<String, KartkiError> {
    let url = options
        .routes
        .path_of(page)
        .map(build_url);

    finish_page(&page.render(), url.as_deref(), options)
}

/// Renders the document for an arbitrary path: the bound page, or the not found view.
pub fn render_document(path: &str, options: &BuildOptions) -> Result<String, KartkiError> {
    match options.routes.resolve(path) {
        Ok(page) => render_page(page, options),
        Err(_) => finish_page(&pages::not_found(Some(path)), None, options),
    }
}

/// Wraps a tree in the document layout, then adds what belongs in `<head>`: the canonical link if [`BuildOptions::base_url`] is set and `url` is known, and the navigation script if enabled.
fn finish_page(
    tree: &VisualTree,
    url: Option<&str>,
    options: &BuildOptions,
) -> Result<String, KartkiError> {
    let html = layout(tree).into_string();

    let canonical_url = match (&options.base_url, url) {
        (Some(base_url), Some(url)) => Some(format!("{}{}", base_url.trim_end_matches('/'), url)),
        _ => None,
    };

    if canonical_url.is_none() && !options.client_navigation {
        return Ok(html);
    }

    let element_content_handlers = vec![element!("head", |el| {
        if let Some(canonical_url) = &canonical_url {
            el.append(
                &format!("<link rel=\"canonical\" href=\"{}\">", canonical_url),
                ContentType::Html,
            );
        }

        if options.client_navigation {
            el.append(
                &format!("<script type=\"module\">{}</script>", NAVIGATION_SCRIPT),
                ContentType::Html,
            );
        }

        Ok(())
    })];

    rewrite_str(
        &html,
        RewriteStrSettings {
            element_content_handlers,
            ..RewriteStrSettings::new()
        },
    )
    .map_err(|source| KartkiError::Rewrite {
        route: url.unwrap_or(NOT_FOUND_FILE).to_string(),
        source,
    })
}

/// Moves the previous output out of the way, then removes it.
fn clean_output_dir(output_dir: &Path) {
    if !output_dir.exists() {
        return;
    }

    let num = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.subsec_nanos() % 100000)
        .unwrap_or_default();
    let old_output_dir = env::temp_dir().join(format!("kartki_old_dist_{}", num));

    match fs::rename(output_dir, &old_output_dir) {
        Ok(()) => remove_dir_logged(&old_output_dir),
        // Renaming fails across filesystems, remove in place instead
        Err(_) => remove_dir_logged(output_dir),
    }
}

fn remove_dir_logged(dir: &Path) {
    if let Err(err) = fs::remove_dir_all(dir) {
        warn!(target: "build", "Failed to remove {}: {}", dir.display(), err);
    }
}

fn copy_recursively(
    source: impl AsRef<Path>,
    destination: impl AsRef<Path>,
    build_metadata: &mut BuildOutput,
) -> io::Result<()> {
    fs::create_dir_all(&destination)?;
    for entry in fs::read_dir(source)? {
        let entry = entry?;
        let filetype = entry.file_type()?;
        if filetype.is_dir() {
            copy_recursively(
                entry.path(),
                destination.as_ref().join(entry.file_name()),
                build_metadata,
            )?;
        } else {
            fs::copy(entry.path(), destination.as_ref().join(entry.file_name()))?;

            build_metadata.add_static_file(
                destination
                    .as_ref()
                    .join(entry.file_name())
                    .to_string_lossy()
                    .to_string(),
                entry.path().to_string_lossy().to_string(),
            );
        }
    }
    Ok(())
}

fn write_page_file(content: &str, file_path: &Path) -> Result<(), io::Error> {
    // Create the parent directories if it doesn't exist
    if let Some(parent_dir) = file_path.parent() {
        fs::create_dir_all(parent_dir)?
    }

    fs::write(file_path, content)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    fn options_in(dir: &TempDir) -> BuildOptions {
        BuildOptions {
            output_dir: dir.path().join("dist"),
            static_dir: dir.path().join("static"),
            clean_output_dir: true,
            ..Default::default()
        }
    }

    #[test]
    #[serial]
    fn test_build_writes_every_route() {
        let dir = TempDir::new().unwrap();
        let options = options_in(&dir);

        let output = build(&options).unwrap();

        let index = fs::read_to_string(options.output_dir.join("index.html")).unwrap();
        let page_two = fs::read_to_string(options.output_dir.join("pagetwo/index.html")).unwrap();
        let not_found = fs::read_to_string(options.output_dir.join("404.html")).unwrap();

        assert!(index.contains("<h1 class=\"text-3xl font-bold mb-4 text-black\">Page One</h1>"));
        assert!(index.contains("href=\"/pagetwo\""));
        assert!(page_two.contains("<h1>Page Two</h1>"));
        assert!(page_two.contains("href=\"/\""));
        assert!(not_found.contains("404 - Not Found"));
        assert!(not_found.contains("Nie ma takiej strony"));
        assert!(!not_found.contains("/404"));

        assert_eq!(output.pages.len(), 3);
        assert!(output.pages.iter().any(|page| page.page == Some(PageId::PageTwo)
            && page.route.as_deref() == Some("/pagetwo")));
        assert!(output.pages.iter().any(|page| page.route.is_none()));
        assert!(output.static_files.is_empty());
    }

    #[test]
    #[serial]
    fn test_navigation_script_injected() {
        let dir = TempDir::new().unwrap();
        let options = options_in(&dir);

        build(&options).unwrap();

        let index = fs::read_to_string(options.output_dir.join("index.html")).unwrap();
        let head = index.split("</head>").next().unwrap();
        assert!(head.contains("<script type=\"module\">"));
        assert!(head.contains("data-kartki-link"));
    }

    #[test]
    #[serial]
    fn test_navigation_script_disabled() {
        let dir = TempDir::new().unwrap();
        let options = BuildOptions {
            client_navigation: false,
            ..options_in(&dir)
        };

        build(&options).unwrap();

        let index = fs::read_to_string(options.output_dir.join("index.html")).unwrap();
        assert!(!index.contains("<script"));
    }

    #[test]
    #[serial]
    fn test_canonical_link() {
        let options = BuildOptions {
            base_url: Some("https://example.com/".to_string()),
            client_navigation: false,
            ..Default::default()
        };

        let html = render_page(PageId::PageTwo, &options).unwrap();
        assert!(html.contains("<link rel=\"canonical\" href=\"https://example.com/pagetwo/\">"));
    }

    #[test]
    #[serial]
    fn test_render_document_fallback() {
        let options = BuildOptions {
            client_navigation: false,
            ..Default::default()
        };

        let html = render_document("/does-not-exist", &options).unwrap();
        assert!(html.contains("404 - Not Found"));
        assert!(html.contains("/does-not-exist"));

        let html = render_document("/pagetwo/", &options).unwrap();
        assert!(html.contains("<title>Page Two</title>"));
    }

    #[test]
    #[serial]
    fn test_clean_output_dir() {
        let dir = TempDir::new().unwrap();
        let options = options_in(&dir);
        let stale = options.output_dir.join("stale.html");

        fs::create_dir_all(&options.output_dir).unwrap();
        fs::write(&stale, "old").unwrap();

        build(&options).unwrap();
        assert!(!stale.exists());
    }

    #[test]
    fn test_remove_dir_logged_keeps_going() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("never-built");

        remove_dir_logged(&missing);

        let present = dir.path().join("dist");
        fs::create_dir_all(present.join("pagetwo")).unwrap();
        remove_dir_logged(&present);
        assert!(!present.exists());
    }

    #[test]
    #[serial]
    fn test_keep_output_dir() {
        let dir = TempDir::new().unwrap();
        let options = BuildOptions {
            clean_output_dir: false,
            ..options_in(&dir)
        };
        let kept = options.output_dir.join("kept.html");

        fs::create_dir_all(&options.output_dir).unwrap();
        fs::write(&kept, "old").unwrap();

        build(&options).unwrap();
        assert!(kept.exists());
    }

    #[test]
    #[serial]
    fn test_static_files_copied() {
        let dir = TempDir::new().unwrap();
        let options = options_in(&dir);

        fs::create_dir_all(options.static_dir.join("fonts")).unwrap();
        fs::write(options.static_dir.join("robots.txt"), "User-agent: *").unwrap();
        fs::write(options.static_dir.join("fonts/font.woff2"), "font").unwrap();

        let output = build(&options).unwrap();

        assert_eq!(output.static_files.len(), 2);
        assert!(options.output_dir.join("robots.txt").exists());
        assert!(options.output_dir.join("fonts/font.woff2").exists());
    }
}
