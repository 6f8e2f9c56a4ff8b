use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use snafu::ResultExt;

use crate::errors::{CsvEncodingSnafu, CsvFlushSnafu, CsvWriteSnafu, CustomResult, SerializationSnafu};
use crate::modules::models::competition::Competition;
use crate::modules::models::driver::RosterEntry;
use crate::modules::models::event_group::EventGroup;
use crate::modules::models::session::Session;
use crate::modules::standings::aggregator::{AllResults, GroupResults};
use crate::modules::standings::ranking::DriverRanking;

/// # Struct representing the json response for a competition ranking
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RankingResponse {
    pub ranking: Vec<ApiRank>,
    pub drivers: BTreeMap<i32, ApiDriver>,
    pub event_groups: Vec<ApiEventGroup>,
    pub competition: ApiCompetition,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApiRank {
    pub pos: usize,
    pub cust_id: i32,
    pub sum: i64,
    pub results: GroupResults,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApiDriver {
    pub cust_id: i32,
    pub name: String,
    pub crew: ApiCrew,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApiCrew {
    pub id: i32,
    pub name: String,
    pub car_id: i32,
    pub team: ApiTeam,
    pub car_brand_picture: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ApiTeam {
    pub id: i32,
    pub name: String,
    pub picture: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApiEventGroup {
    pub id: i32,
    pub name: String,
    pub track_id: i32,
    pub dates: Vec<NaiveDate>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApiCompetition {
    pub id: i32,
    pub name: String,
    pub crew_drivers_count: i32,
}

impl RankingResponse {
    pub fn new(competition: &Competition, roster: &[RosterEntry], event_groups: &[EventGroup], ranking: &[DriverRanking]) -> RankingResponse {
        RankingResponse {
            ranking: ranking
                .iter()
                .map(|e| ApiRank {
                    pos: e.position,
                    cust_id: e.cust_id,
                    sum: e.total,
                    results: e.results.clone(),
                })
                .collect(),
            drivers: roster.iter().map(|e| (e.cust_id(), ApiDriver::from(e))).collect(),
            event_groups: event_groups
                .iter()
                .map(|e| ApiEventGroup {
                    id: e.id,
                    name: e.name.clone(),
                    track_id: e.track_id,
                    dates: e.dates.clone(),
                })
                .collect(),
            competition: ApiCompetition {
                id: competition.id,
                name: competition.name.clone(),
                crew_drivers_count: competition.crew_drivers_count,
            },
        }
    }

    pub fn to_json(&self) -> CustomResult<String> {
        serde_json::to_string(self).context(SerializationSnafu { what: "ranking" })
    }
}

impl From<&RosterEntry> for ApiDriver {
    fn from(entry: &RosterEntry) -> ApiDriver {
        ApiDriver {
            cust_id: entry.cust_id(),
            name: entry.driver.name.clone(),
            crew: ApiCrew {
                id: entry.crew.id,
                name: entry.crew.name.clone(),
                car_id: entry.crew.car_id,
                team: ApiTeam {
                    id: entry.team.id,
                    name: entry.team.name.clone(),
                    picture: entry.team.picture.clone(),
                },
                car_brand_picture: entry.crew.car_brand_picture.clone(),
            },
        }
    }
}

/// # sessions csv
/// one row per roster driver, one column per subsession, holding the
/// session average or 0 when the driver has no stint in it.
///
/// ## Arguments
/// * `sessions` - the sessions, in column order
/// * `roster` - the drivers, in row order
/// * `all_results` - the per-session averages
///
/// ## Returns
/// * `String` - the csv document
pub fn sessions_csv(sessions: &[Session], roster: &[RosterEntry], all_results: &AllResults) -> CustomResult<String> {
    let mut columns: Vec<i32> = Vec::with_capacity(sessions.len());
    for session in sessions {
        if !columns.contains(&session.subsession_id) {
            columns.push(session.subsession_id);
        }
    }

    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut header = vec!["custId".to_string(), "name".to_string()];
    header.extend(columns.iter().map(|e| e.to_string()));
    writer.write_record(&header).context(CsvWriteSnafu)?;

    for entry in roster {
        let results = all_results.get(&entry.cust_id());

        let mut row = vec![entry.cust_id().to_string(), entry.driver.name.clone()];
        row.extend(columns.iter().map(|subsession_id| {
            results
                .and_then(|e| e.get(subsession_id))
                .copied()
                .unwrap_or(0)
                .to_string()
        }));
        writer.write_record(&row).context(CsvWriteSnafu)?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error()).context(CsvFlushSnafu)?;
    String::from_utf8(bytes).context(CsvEncodingSnafu)
}
