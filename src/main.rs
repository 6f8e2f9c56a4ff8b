use rocket::{launch, Build, Rocket};

use competition_standings::modules::config::Settings;
use competition_standings::modules::helpers::logging::setup_logging;
use competition_standings::{build_rocket, AppState};

#[launch]
fn rocket() -> Rocket<Build> {
    let settings = Settings::from_env().expect("Failed to load settings");
    setup_logging(settings.logging_level, &settings.log_file).expect("Failed to setup logging");

    let state = AppState::new(settings).expect("Failed to setup the response cache");

    // start the webserver
    build_rocket(state)
}
