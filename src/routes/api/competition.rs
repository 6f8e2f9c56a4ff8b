use log::{debug, error, warn};
use rocket::get;
use rocket::http::uri::Origin;
use rocket::http::{Header, Status};
use rocket::{Responder, State};

use crate::errors::CustomResult;
use crate::macros::error_handling::handle_error_http;
use crate::macros::request_caching::{cache_response, read_cache_request};
use crate::modules::competition_data::CompetitionData;
use crate::modules::models::general::establish_connection;
use crate::AppState;

/**************************************************************************************************/
/**************** ROUTES **************************************************************************/
/**************************************************************************************************/

/// # get the ranking of a competition
/// the ranking, the drivers, the event groups, and the competition summary.
#[get("/competitions/<slug>/ranking")]
pub async fn get_ranking(slug: String, origin: &Origin<'_>, state: &State<AppState>) -> Result<JsonPayload, Status> {
    if !is_valid_slug(&slug) {
        return Err(Status::BadRequest);
    }

    read_cache_request!(state, origin, JsonPayload, "routes/api/competition:get_ranking");

    let database_url = state.settings.database_url.clone();
    let computed = run_blocking(move || {
        let conn = &mut establish_connection(&database_url)?;
        CompetitionData::load(conn, &slug)?.ranking_json()
    })
    .await?;
    let payload = handle_error_http!(computed, "routes/api/competition:get_ranking", "ranking");

    cache_response!(state, origin, payload, JsonPayload, "routes/api/competition:get_ranking");
}

/// # download the session results of a competition
/// every driver's average in every session, as `sessions.csv`.
#[get("/competitions/<slug>/csv")]
pub async fn get_sessions_csv(slug: String, origin: &Origin<'_>, state: &State<AppState>) -> Result<CsvDownload, Status> {
    if !is_valid_slug(&slug) {
        return Err(Status::BadRequest);
    }

    read_cache_request!(state, origin, CsvDownload::new, "routes/api/competition:get_sessions_csv");

    let database_url = state.settings.database_url.clone();
    let computed = run_blocking(move || {
        let conn = &mut establish_connection(&database_url)?;
        CompetitionData::load(conn, &slug)?.sessions_csv()
    })
    .await?;
    let payload = handle_error_http!(computed, "routes/api/competition:get_sessions_csv", "sessions csv");

    cache_response!(state, origin, payload, CsvDownload::new, "routes/api/competition:get_sessions_csv");
}

/**************************************************************************************************/
/**************** HELPERS *************************************************************************/
/**************************************************************************************************/

#[derive(Responder)]
#[response(content_type = "json")]
pub struct JsonPayload(pub String);

#[derive(Responder)]
#[response(content_type = "text/csv")]
pub struct CsvDownload {
    pub inner: String,
    pub description: Header<'static>,
    pub disposition: Header<'static>,
}

impl CsvDownload {
    pub fn new(inner: String) -> CsvDownload {
        CsvDownload {
            inner,
            description: Header::new("Content-Description", "File Transfer"),
            disposition: Header::new("Content-Disposition", "attachment; filename=sessions.csv"),
        }
    }
}

/// slugs are ascii letters, digits, `-` and `_`
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty() && slug.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// run the database work and the standings computation off the async
/// workers. a panic in `work` is reported as a 500.
async fn run_blocking<F>(work: F) -> Result<CustomResult<String>, Status>
where
    F: FnOnce() -> CustomResult<String> + Send + 'static,
{
    tokio::task::spawn_blocking(work).await.map_err(|error| {
        error!(target:"routes/api/competition:run_blocking", "Computation task failed: {}", error);
        Status::InternalServerError
    })
}
