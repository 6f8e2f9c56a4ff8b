use diesel::PgConnection;
use log::info;

use crate::errors::CustomResult;
use crate::modules::models::competition::Competition;
use crate::modules::models::driver::RosterEntry;
use crate::modules::models::event_group::EventGroup;
use crate::modules::models::lap::Lap;
use crate::modules::models::session::Session;
use crate::modules::standings::lap_validity::DefaultLapClassifier;
use crate::modules::standings::output::{sessions_csv, RankingResponse};
use crate::modules::standings::Standings;

/// Everything stored about a competition that the standings are computed from.
#[derive(Debug, Clone)]
pub struct CompetitionData {
    pub competition: Competition,
    pub sessions: Vec<Session>,
    pub event_groups: Vec<EventGroup>,
    pub roster: Vec<RosterEntry>,
    pub laps: Vec<Lap>,
}

impl CompetitionData {
    /// # load a competition
    ///
    /// ## Arguments
    /// * `conn` - the database connection
    /// * `slug` - the url slug of the competition
    ///
    /// ## Returns
    /// * `CompetitionData` - the competition and everything it is ranked on
    pub fn load(conn: &mut PgConnection, slug: &str) -> CustomResult<CompetitionData> {
        let competition = Competition::get_by_slug(conn, slug)?;

        let sessions = Session::from_competition(conn, competition.id)?;
        let event_groups = EventGroup::from_competition(conn, competition.id)?;
        let roster = RosterEntry::from_competition(conn, competition.id)?;
        let laps = Lap::from_sessions(conn, &sessions)?;

        info!(target:"competition_data:load", "loaded competition {}: {} sessions, {} event groups, {} drivers, {} laps",
            slug, sessions.len(), event_groups.len(), roster.len(), laps.len());

        Ok(CompetitionData { competition, sessions, event_groups, roster, laps })
    }

    pub fn standings(&self) -> Standings {
        Standings::compute(&self.laps, &self.roster, &self.sessions, &self.event_groups, &DefaultLapClassifier)
    }

    /// the ranking response, serialized
    pub fn ranking_json(&self) -> CustomResult<String> {
        let standings = self.standings();

        RankingResponse::new(&self.competition, &self.roster, &self.event_groups, &standings.ranking).to_json()
    }

    /// the driver x session matrix, as csv
    pub fn sessions_csv(&self) -> CustomResult<String> {
        let standings = self.standings();

        sessions_csv(&self.sessions, &self.roster, &standings.aggregation.all_results)
    }
}
