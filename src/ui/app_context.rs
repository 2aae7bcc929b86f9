use std::sync::Arc;

use crate::config::Config;
use crate::geocoding::GeocodingService;

/// Services shared with the whole component tree
#[derive(Clone)]
pub struct AppContext {
    pub config: Config,
    pub geocoder: Arc<dyn GeocodingService>,
}

impl AppContext {
    pub fn new(config: Config, geocoder: Arc<dyn GeocodingService>) -> Self {
        Self { config, geocoder }
    }
}
