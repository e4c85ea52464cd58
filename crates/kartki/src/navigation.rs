//! Navigation between pages.
//!
//! [`NavigationState`] is a plain value: [`NavigationState::navigate`] never mutates it and returns the next state instead. [`Router`] bundles a route table with the current state for callers that want a stateful handle.
//!
//! ## Example
//! ```rust
//! use kartki::navigation::Router;
//!
//! let mut router = Router::default();
//! assert_eq!(router.current_path(), "/");
//!
//! let control = router.render().controls()[0].clone();
//! router.activate(&control).unwrap();
//!
//! assert_eq!(router.current_path(), "/pagetwo");
//! assert_eq!(router.render().heading(), Some("Page Two"));
//! ```
use log::{debug, warn};

use crate::errors::NotFoundError;
use crate::pages;
use crate::route::{PageId, RouteTable};
use crate::view::{NavLink, VisualTree};

pub const INITIAL_PATH: &str = "/";

/// Which path is currently displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    current_path: &'static str,
}

impl NavigationState {
    pub fn current_path(&self) -> &'static str {
        self.current_path
    }

    /// Transition to `path`.
    ///
    /// The returned state stores the registered pattern, not `path` itself, so `/pagetwo/` leads to `/pagetwo`. Fails without producing a state if `path` isn't in `routes`.
    pub fn navigate(&self, routes: &RouteTable, path: &str) -> Result<NavigationState, NotFoundError> {
        let route = routes.route(path)?;

        Ok(NavigationState {
            current_path: route.path,
        })
    }

    /// Page bound to the current path.
    pub fn page(&self, routes: &RouteTable) -> Result<PageId, NotFoundError> {
        routes.resolve(self.current_path)
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            current_path: INITIAL_PATH,
        }
    }
}

/// Renders what should be displayed for `state`, falling back to the not found view if its path isn't routed.
pub fn render(state: &NavigationState, routes: &RouteTable) -> VisualTree {
    render_path(routes, state.current_path())
}

/// Renders the page bound to `path`, or the not found view. Never fails.
pub fn render_path(routes: &RouteTable, path: &str) -> VisualTree {
    match routes.resolve(path) {
        Ok(page) => page.render(),
        Err(err) => {
            debug!(target: "router", "{}, rendering fallback", err);
            pages::not_found(Some(path))
        }
    }
}

/// Route table plus the current navigation state.
#[derive(Debug, Clone)]
pub struct Router {
    routes: RouteTable,
    state: NavigationState,
}

impl Router {
    pub fn new(routes: RouteTable) -> Self {
        Self {
            routes,
            state: NavigationState::default(),
        }
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn current_path(&self) -> &'static str {
        self.state.current_path()
    }

    pub fn resolve(&self, path: &str) -> Result<PageId, NotFoundError> {
        self.routes.resolve(path)
    }

    /// Moves to `path`. On error, the current path is left untouched.
    pub fn navigate(&mut self, path: &str) -> Result<PageId, NotFoundError> {
        let next = self.state.navigate(&self.routes, path).inspect_err(|err| {
            warn!(target: "router", "{} (staying on {})", err, self.state.current_path());
        })?;

        if next != self.state {
            debug!(target: "router", "{} -> {}", self.state.current_path(), next.current_path());
        }

        self.state = next;
        self.state.page(&self.routes)
    }

    /// Activates a navigation control, as a click on it would.
    pub fn activate(&mut self, link: &NavLink) -> Result<PageId, NotFoundError> {
        self.navigate(link.to)
    }

    pub fn render(&self) -> VisualTree {
        render(&self.state, &self.routes)
    }

    pub fn render_path(&self, path: &str) -> VisualTree {
        render_path(&self.routes, path)
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(RouteTable::default())
    }
}
