//! The pages of the application.
//!
//! Pages are pure: they take no input and always produce the same [`VisualTree`](crate::view::VisualTree). Navigating between them is the job of the [`Router`](crate::navigation::Router).
mod not_found;
mod page_one;
mod page_two;

pub use not_found::not_found;
pub use page_one::page_one;
pub use page_two::page_two;
