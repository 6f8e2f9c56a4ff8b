use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::NaiveDate;
use log::{trace, warn};

use crate::modules::models::driver::RosterEntry;
use crate::modules::models::lap::Lap;
use crate::modules::models::session::Session;
use crate::modules::standings::lap_validity::LapClassifier;
use crate::modules::standings::stint::{StintAnalyzer, StintResult, StintStep};

/// cust id -> subsession id -> average (0 when the session has no stint)
pub type AllResults = BTreeMap<i32, BTreeMap<i32, i64>>;

/// event group id -> date -> best average
pub type GroupResults = BTreeMap<i32, BTreeMap<NaiveDate, i64>>;

/// cust id -> event group id -> date -> best average
pub type BestResults = BTreeMap<i32, GroupResults>;

/// A lap that could not be attributed to an event group and date because its
/// subsession is not one of the competition's sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnknownSession {
    pub cust_id: i32,
    pub subsession_id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Aggregation {
    pub all_results: AllResults,
    pub best_results: BestResults,
    pub unknown_sessions: BTreeSet<UnknownSession>,
}

impl Aggregation {
    /// # aggregate laps
    /// run the stint analyzer over the laps of the roster drivers and fold
    /// the stints into per-session and per-(event group, date) results.
    ///
    /// laps are sorted by (driver, subsession, simsession, lap number)
    /// first; the sort is stable so laps sharing a key keep their input order.
    ///
    /// ## Arguments
    /// * `laps` - the laps driven in the competition's sessions
    /// * `roster` - the registered drivers of the competition
    /// * `sessions` - the sessions of the competition
    /// * `classifier` - the lap validity policy
    ///
    /// ## Returns
    /// * `Aggregation` - the results and the laps that had to be left out
    pub fn from_laps<C: LapClassifier>(laps: &[Lap], roster: &[RosterEntry], sessions: &[Session], classifier: &C) -> Aggregation {
        let registered_cars: HashMap<i32, i32> = roster.iter().map(|e| (e.cust_id(), e.car_id())).collect();

        let mut session_slots: HashMap<i32, (i32, NaiveDate)> = HashMap::with_capacity(sessions.len());
        for session in sessions {
            session_slots
                .entry(session.subsession_id)
                .or_insert((session.event_group_id, session.session_date));
        }

        let mut ordered: Vec<&Lap> = laps.iter().collect();
        ordered.sort_by_key(|lap| (lap.cust_id, lap.subsession_id, lap.simsession_number, lap.lap_number));

        let mut aggregation = Aggregation::default();
        let mut analyzer = StintAnalyzer::new(classifier);

        for lap in ordered {
            let registered_car = match registered_cars.get(&lap.cust_id) {
                Some(car) => *car,
                None => continue,
            };

            let slot = match session_slots.get(&lap.subsession_id) {
                Some(slot) => *slot,
                None => {
                    aggregation.unknown_sessions.insert(UnknownSession {
                        cust_id: lap.cust_id,
                        subsession_id: lap.subsession_id,
                    });
                    continue;
                }
            };

            aggregation
                .all_results
                .entry(lap.cust_id)
                .or_default()
                .entry(lap.subsession_id)
                .or_insert(0);

            if let StintStep::Completed(stint) = analyzer.push(lap, registered_car) {
                trace!(target:"standings/aggregator:from_laps", "driver {} set {} in subsession {}", stint.cust_id, stint.average, stint.subsession_id);
                aggregation.record(stint, slot);
            }
        }

        for omission in &aggregation.unknown_sessions {
            warn!(target:"standings/aggregator:from_laps", "skipped laps of driver {} in unknown subsession {}", omission.cust_id, omission.subsession_id);
        }

        aggregation
    }

    fn record(&mut self, stint: StintResult, (event_group_id, date): (i32, NaiveDate)) {
        self.all_results
            .entry(stint.cust_id)
            .or_default()
            .insert(stint.subsession_id, stint.average);

        let best = self
            .best_results
            .entry(stint.cust_id)
            .or_default()
            .entry(event_group_id)
            .or_default()
            .entry(date)
            .or_insert(stint.average);

        // equal times keep the first result
        if stint.average < *best {
            *best = stint.average;
        }
    }

    /// the best results of a driver, empty when they have none
    pub fn driver_best_results(&self, cust_id: i32) -> GroupResults {
        self.best_results.get(&cust_id).cloned().unwrap_or_default()
    }
}
