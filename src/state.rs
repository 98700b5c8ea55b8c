use std::sync::Arc;

use crate::service::ShortenerService;

#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<ShortenerService>,
    pub base_url: String,
}
