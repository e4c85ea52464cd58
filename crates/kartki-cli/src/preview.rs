pub(crate) mod server;

pub use server::start_preview_web_server;
