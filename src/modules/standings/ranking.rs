use log::debug;

use crate::modules::models::driver::RosterEntry;
use crate::modules::models::event_group::EventGroup;
use crate::modules::standings::aggregator::{Aggregation, GroupResults};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverRanking {
    pub position: usize,
    pub cust_id: i32,
    /// sum of the best result of every event group, 0 when not ranked
    pub total: i64,
    pub is_valid: bool,
    pub results: GroupResults,
}

/// # driver total
/// the sum of the driver's best result in every event group. `None` when a
/// group has no positive result for the driver.
pub fn driver_total(results: &GroupResults, event_groups: &[EventGroup]) -> Option<i64> {
    let mut total = 0;
    for event_group in event_groups {
        let best = results.get(&event_group.id)?.values().copied().min()?;
        if best <= 0 {
            return None;
        }
        total += best;
    }

    Some(total)
}

/// # rank drivers
/// every roster driver gets a place. drivers are ordered by total, with a
/// total of 0 always last, and by customer id when totals are equal.
///
/// ## Arguments
/// * `roster` - the registered drivers of the competition
/// * `event_groups` - the event groups a driver needs a result in
/// * `aggregation` - the aggregated stint results
///
/// ## Returns
/// * `Vec<DriverRanking>` - the ranking, positions starting at 1
pub fn rank_drivers(roster: &[RosterEntry], event_groups: &[EventGroup], aggregation: &Aggregation) -> Vec<DriverRanking> {
    let mut ranking: Vec<DriverRanking> = roster
        .iter()
        .map(|entry| {
            let results = aggregation.driver_best_results(entry.cust_id());
            let total = driver_total(&results, event_groups);

            DriverRanking {
                position: 0,
                cust_id: entry.cust_id(),
                total: total.unwrap_or(0),
                is_valid: total.is_some(),
                results,
            }
        })
        .collect();

    sort_ranking(&mut ranking);

    debug!(target:"standings/ranking:rank_drivers", "ranked {} drivers, {} with a valid total", ranking.len(), ranking.iter().filter(|e| e.is_valid).count());
    ranking
}

/// sort by total with zero totals last, then assign positions
pub fn sort_ranking(ranking: &mut [DriverRanking]) {
    ranking.sort_by_key(|e| (e.total == 0, e.total, e.cust_id));

    for (index, driver) in ranking.iter_mut().enumerate() {
        driver.position = index + 1;
    }
}
