//! Axum request handlers.

mod redirect;
mod shorten;

pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
