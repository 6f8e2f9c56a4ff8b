pub mod cache;
pub mod competition_data;
pub mod config;
pub mod redis;
pub mod standings;

pub mod models {
    pub mod competition;
    pub mod driver;
    pub mod event_group;
    pub mod lap;
    pub mod session;

    pub mod general;
}

pub mod helpers {
    pub mod logging;
}
