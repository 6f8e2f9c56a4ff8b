use std::env;
use std::process::exit;

use log::{error, info};

use competition_standings::errors::CustomResult;
use competition_standings::modules::competition_data::CompetitionData;
use competition_standings::modules::config::Settings;
use competition_standings::modules::helpers::logging::setup_logging;
use competition_standings::modules::models::general::establish_connection;

/// usage: export_standings <slug> [ranking|csv]
fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let (slug, format) = match args.as_slice() {
        [slug] => (slug.as_str(), "ranking"),
        [slug, format] if format == "ranking" || format == "csv" => (slug.as_str(), format.as_str()),
        _ => {
            eprintln!("usage: export_standings <slug> [ranking|csv]");
            exit(2);
        }
    };

    let settings = Settings::from_env().expect("Error loading settings");
    setup_logging(settings.logging_level, &settings.log_file).expect("Error setting up logging");

    match export(&settings.database_url, slug, format) {
        Ok(output) => {
            info!(target:"export_standings", "exported {} of {}", format, slug);
            print!("{}", output);
        }
        Err(error) => {
            error!(target:"export_standings", "Error exporting {} of {}: {}", format, slug, error);
            exit(1);
        }
    }
}

fn export(database_url: &str, slug: &str, format: &str) -> CustomResult<String> {
    let conn = &mut establish_connection(database_url)?;
    let data = CompetitionData::load(conn, slug)?;

    match format {
        "csv" => data.sessions_csv(),
        _ => data.ranking_json(),
    }
}
