use std::sync::Arc;

use log::{info, warn};
use rocket::{routes, Build, Rocket};

use crate::errors::CustomResult;
use crate::modules::cache::{MemoryCache, RedisCache, ResponseCache};
use crate::modules::config::Settings;

pub mod errors;
pub mod schema;
pub mod modules;
pub mod routes {
    pub mod api {
        pub mod competition;
    }
}

mod macros {
    pub mod error_handling;
    pub mod request_caching;
}

/// State shared by every request.
pub struct AppState {
    pub settings: Settings,
    /// `None` when caching is disabled
    pub cache: Option<Arc<dyn ResponseCache>>,
}

impl AppState {
    /// # create the app state
    /// picks redis as the cache when `REDIS_URL` is set, the in process cache
    /// otherwise.
    pub fn new(settings: Settings) -> CustomResult<AppState> {
        let cache: Option<Arc<dyn ResponseCache>> = if !settings.cache_enabled {
            warn!(target:"app_state:new", "response cache disabled");
            None
        } else if let Some(redis_url) = &settings.redis_url {
            info!(target:"app_state:new", "caching responses in redis for {}s", settings.cache_ttl.as_secs());
            Some(Arc::new(RedisCache::new(redis_url, settings.cache_ttl)?))
        } else {
            info!(target:"app_state:new", "caching responses in memory for {}s", settings.cache_ttl.as_secs());
            Some(Arc::new(MemoryCache::new(settings.cache_ttl)))
        };

        Ok(AppState { settings, cache })
    }
}

pub fn build_rocket(state: AppState) -> Rocket<Build> {
    rocket::build()
        .manage(state)
        .mount(
            "/",
            routes![
                routes::api::competition::get_ranking,
                routes::api::competition::get_sessions_csv,
            ],
        )
}
