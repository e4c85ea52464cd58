//! The route table: which path shows which page.
//!
//! Routes are defined once, when the [`RouteTable`] is built, and never change afterwards. Use [`RouteTable::default()`] to get the table of the application:
//!
//! | Path       | Page                 |
//! |------------|----------------------|
//! | `/`        | [`PageId::PageOne`]  |
//! | `/pagetwo` | [`PageId::PageTwo`]  |
use std::fmt;

use rustc_hash::FxHashSet;

use crate::errors::{NotFoundError, RouteError};
use crate::pages;
use crate::routing::normalize_path;
use crate::view::VisualTree;

/// Every page the application can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageId {
    PageOne,
    PageTwo,
}

impl PageId {
    pub const ALL: [PageId; 2] = [PageId::PageOne, PageId::PageTwo];

    /// Produces the visual tree of this page. Pages take no input, so the result is always the same.
    pub fn render(self) -> VisualTree {
        match self {
            PageId::PageOne => pages::page_one(),
            PageId::PageTwo => pages::page_two(),
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageId::PageOne => write!(f, "PageOne"),
            PageId::PageTwo => write!(f, "PageTwo"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub page: PageId,
}

impl Route {
    pub const fn new(path: &'static str, page: PageId) -> Self {
        Self { path, page }
    }
}

/// Ordered list of routes with unique paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Builds a table from the given routes, keeping their order.
    ///
    /// Fails if a path is registered twice, or doesn't start with `/`. Paths are compared after trailing slash normalization, so `/a` and `/a/` collide.
    pub fn new(routes: impl IntoIterator<Item = Route>) -> Result<Self, RouteError> {
        let routes: Vec<Route> = routes.into_iter().collect();
        let mut seen = FxHashSet::default();

        for route in &routes {
            if !route.path.starts_with('/') {
                return Err(RouteError::InvalidPattern {
                    path: route.path.to_string(),
                });
            }

            if !seen.insert(normalize_path(route.path)) {
                return Err(RouteError::DuplicatePath {
                    path: route.path.to_string(),
                });
            }
        }

        Ok(Self { routes })
    }

    /// Returns the route bound to `path`, if any.
    pub fn route(&self, path: &str) -> Result<&Route, NotFoundError> {
        let wanted = normalize_path(path);

        self.routes
            .iter()
            .find(|route| normalize_path(route.path) == wanted)
            .ok_or_else(|| NotFoundError::new(path))
    }

    /// Pure lookup of the page bound to `path`.
    pub fn resolve(&self, path: &str) -> Result<PageId, NotFoundError> {
        self.route(path).map(|route| route.page)
    }

    /// Path a page is registered under. The first match wins if a page is bound more than once.
    pub fn path_of(&self, page: PageId) -> Option<&'static str> {
        self.routes
            .iter()
            .find(|route| route.page == page)
            .map(|route| route.path)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self {
            routes: vec![
                Route::new("/", PageId::PageOne),
                Route::new("/pagetwo", PageId::PageTwo),
            ],
        }
    }
}

impl<'a> IntoIterator for &'a RouteTable {
    type Item = &'a Route;
    type IntoIter = std::slice::Iter<'a, Route>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}
