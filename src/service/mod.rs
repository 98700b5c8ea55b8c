//! Business logic: code allocation, collision retry, and resolution.

mod shortener;

pub use shortener::ShortenerService;
