use std::collections::HashSet;

use bitflags::bitflags;
use diesel::prelude::*;
use log::{debug, error};
use snafu::ResultExt;

use crate::errors::{CustomResult, DatabaseSnafu};
use crate::modules::models::session::Session;

bitflags! {
    /// # lap event flags
    /// bitmask of the events iRacing reports for a lap.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct LapEvents: u32 {
        const PITTED = 1;
        const OFF_TRACK = 1 << 1;
        const BLACK_FLAG = 1 << 2;
        const CAR_RESET = 1 << 3;
        const CONTACT = 1 << 4;
        const CAR_CONTACT = 1 << 5;
        const LOST_CONTROL = 1 << 6;
        const DISCONTINUITY = 1 << 7;
        const TOW = 1 << 8;
        const INVALID = 1 << 9;
    }
}

#[derive(Queryable, PartialEq, Eq, Debug, Clone)]
pub struct Lap {
    pub id: i32,
    pub subsession_id: i32,
    pub simsession_number: i32,
    pub cust_id: i32,
    pub car_id: i32,
    pub lap_number: i32,
    /// lap time in 1/10000 of a second
    pub lap_time: i32,
    pub lap_events: i32,
    pub incident: bool,
}

impl Lap {
    pub fn events(&self) -> LapEvents {
        LapEvents::from_bits_retain(self.lap_events as u32)
    }

    /// # get the laps of sessions
    /// get all laps driven in the given sessions, ordered by driver,
    /// subsession, simsession, and lap number. only the laps of the
    /// simsession each session points at are returned.
    ///
    /// ## Arguments
    /// * `conn` - the database connection
    /// * `sessions` - the sessions to get the laps for
    ///
    /// ## Returns
    /// * `Vec<Lap>` - the laps of the sessions
    pub fn from_sessions(conn: &mut PgConnection, sessions: &[Session]) -> CustomResult<Vec<Lap>> {
        use crate::schema::laps::dsl::*;

        if sessions.is_empty() {
            return Ok(Vec::new());
        }

        let wanted: HashSet<(i32, i32)> = sessions.iter().map(|e| e.simsession_key()).collect();
        let subsession_ids: Vec<i32> = wanted.iter().map(|(subsession, _)| *subsession).collect();

        let mut all_laps = laps
            .filter(subsession_id.eq_any(subsession_ids))
            .order((cust_id.asc(), subsession_id.asc(), simsession_number.asc(), lap_number.asc()))
            .load::<Lap>(conn)
            .map_err(|error| {
                error!(target:"models/lap:from_sessions", "Error getting laps of {} sessions: {}", sessions.len(), error);
                error
            })
            .context(DatabaseSnafu { what: "laps" })?;

        let loaded = all_laps.len();
        all_laps.retain(|lap| wanted.contains(&(lap.subsession_id, lap.simsession_number)));
        debug!(target:"models/lap:from_sessions", "loaded {} laps, {} in scored simsessions", loaded, all_laps.len());

        Ok(all_laps)
    }
}
