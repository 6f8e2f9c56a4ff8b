//! Lap telemetry to competition standings.
//!
//! Laps go through the stint analyzer, the stints are folded into
//! per-session and per-(event group, date) results, and the best results are
//! turned into a ranking. Everything in here is synchronous and free of I/O.

pub mod aggregator;
pub mod lap_validity;
pub mod output;
pub mod ranking;
pub mod stint;

use crate::modules::models::driver::RosterEntry;
use crate::modules::models::event_group::EventGroup;
use crate::modules::models::lap::Lap;
use crate::modules::models::session::Session;
use crate::modules::standings::aggregator::Aggregation;
use crate::modules::standings::lap_validity::LapClassifier;
use crate::modules::standings::ranking::{rank_drivers, DriverRanking};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standings {
    pub aggregation: Aggregation,
    pub ranking: Vec<DriverRanking>,
}

impl Standings {
    /// # compute standings
    ///
    /// ## Arguments
    /// * `laps` - the laps of the competition's sessions
    /// * `roster` - the registered drivers
    /// * `sessions` - the sessions with their event group and date
    /// * `event_groups` - the event groups every driver needs a result in
    /// * `classifier` - the lap validity policy
    ///
    /// ## Returns
    /// * `Standings` - the aggregated results and the ranking
    pub fn compute<C: LapClassifier>(
        laps: &[Lap],
        roster: &[RosterEntry],
        sessions: &[Session],
        event_groups: &[EventGroup],
        classifier: &C,
    ) -> Standings {
        let aggregation = Aggregation::from_laps(laps, roster, sessions, classifier);
        let ranking = rank_drivers(roster, event_groups, &aggregation);

        Standings { aggregation, ranking }
    }
}
