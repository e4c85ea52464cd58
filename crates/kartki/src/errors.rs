//! Error types for Kartki.
use std::fmt::{self, Debug, Formatter};
use thiserror::Error;

macro_rules! impl_debug_for_error {
    ($($t:ty),*) => {
        $(
            impl Debug for $t {
                fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                    // Errors returned from main are printed with Debug, thiserror only gives us Display.
                    write!(f, "{}", self)
                }
            }
        )*
    };
}

/// Returned by [`RouteTable::resolve`](crate::route::RouteTable::resolve) and every navigation operation when a path isn't bound to any page.
#[derive(Error, Clone, PartialEq, Eq)]
#[error("No route matches `{path}`")]
pub struct NotFoundError {
    pub path: String,
}

impl NotFoundError {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

#[derive(Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("`{path}` is registered more than once in the route table")]
    DuplicatePath { path: String },
    #[error("`{path}` is not a valid route pattern, patterns must start with `/`")]
    InvalidPattern { path: String },
}

#[derive(Error, Debug)]
pub enum KartkiError {
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error(transparent)]
    Route(#[from] RouteError),

    #[error("Failed to inject the navigation script into `{route}`")]
    Rewrite {
        route: String,
        #[source]
        source: lol_html::errors::RewritingError,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl_debug_for_error!(NotFoundError, RouteError);
