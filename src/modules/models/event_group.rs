use chrono::NaiveDate;
use diesel::prelude::*;
use log::error;
use serde::{Deserialize, Serialize};
use snafu::ResultExt;

use crate::errors::{CustomResult, DatabaseSnafu};

/// A track/class combination contested on one or more dates. Every ranked
/// driver needs a result in every event group of the competition.
#[derive(Queryable, Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct EventGroup {
    pub id: i32,
    pub competition_id: i32,
    pub name: String,
    pub track_id: i32,
    pub dates: Vec<NaiveDate>,
}

impl EventGroup {
    /// # get the event groups of a competition
    /// the order returned here is the order the groups are shown and checked in.
    ///
    /// ## Arguments
    /// * `conn` - the database connection
    /// * `competition` - the database id of the competition
    ///
    /// ## Returns
    /// * `Vec<EventGroup>` - the event groups ordered by id
    pub fn from_competition(conn: &mut PgConnection, competition: i32) -> CustomResult<Vec<EventGroup>> {
        use crate::schema::event_groups::dsl::*;

        event_groups
            .filter(competition_id.eq(competition))
            .order(id.asc())
            .load::<EventGroup>(conn)
            .map_err(|error| {
                error!(target:"models/event_group:from_competition", "Error getting event groups of competition {}: {}", competition, error);
                error
            })
            .context(DatabaseSnafu { what: "event groups" })
    }
}
