use chrono::NaiveDate;
use diesel::prelude::*;
use log::error;
use serde::{Deserialize, Serialize};
use snafu::ResultExt;

use crate::errors::{CustomResult, DatabaseSnafu};

/// One scored simsession of an iRacing subsession, tied to the event group
/// and date it counts for.
#[derive(Queryable, Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Session {
    pub id: i32,
    pub competition_id: i32,
    pub event_group_id: i32,
    pub subsession_id: i32,
    pub simsession_number: i32,
    pub session_date: NaiveDate,
}

impl Session {
    /// # get the sessions of a competition
    ///
    /// ## Arguments
    /// * `conn` - the database connection
    /// * `competition` - the database id of the competition
    ///
    /// ## Returns
    /// * `Vec<Session>` - the sessions in chronological order
    pub fn from_competition(conn: &mut PgConnection, competition: i32) -> CustomResult<Vec<Session>> {
        use crate::schema::event_sessions::dsl::*;

        event_sessions
            .filter(competition_id.eq(competition))
            .order((session_date.asc(), subsession_id.asc(), simsession_number.asc()))
            .load::<Session>(conn)
            .map_err(|error| {
                error!(target:"models/session:from_competition", "Error getting sessions of competition {}: {}", competition, error);
                error
            })
            .context(DatabaseSnafu { what: "sessions" })
    }

    /// the (subsession, simsession) pair identifying the laps of this session
    pub fn simsession_key(&self) -> (i32, i32) {
        (self.subsession_id, self.simsession_number)
    }
}
