use std::path::{Path, PathBuf};

/// Strips a single trailing slash so `/pagetwo/` and `/pagetwo` designate the same route. The root path is left alone.
pub fn normalize_path(raw_path: &str) -> &str {
    if raw_path.len() > 1 {
        raw_path.strip_suffix('/').unwrap_or(raw_path)
    } else {
        raw_path
    }
}

/// URL under which a route is reachable once built, e.g. `/pagetwo/` for `/pagetwo`.
pub fn build_url(route_path: &str) -> String {
    let parts: Vec<&str> = route_path.split('/').filter(|s| !s.is_empty()).collect();

    if parts.is_empty() {
        return "/".to_string();
    }

    format!("/{}/", parts.join("/"))
}

/// Where a route's HTML document lands inside `output_dir`.
///
/// Every route gets its own directory with an `index.html`, so that static servers can serve it without pretty URL support.
pub fn build_file_path(route_path: &str, output_dir: &Path) -> PathBuf {
    let mut path = PathBuf::from(output_dir);
    path.extend(route_path.split('/').filter(|s| !s.is_empty()));
    path.push("index.html");

    path
}
