use crate::modules::models::lap::{Lap, LapEvents};

/// Decides which laps can count toward a stint.
pub trait LapClassifier {
    fn is_pitted(&self, events: LapEvents) -> bool;

    fn is_valid(&self, lap_number: i32, lap_time: i32, events: LapEvents, incident: bool) -> bool;

    fn is_lap_pitted(&self, lap: &Lap) -> bool {
        self.is_pitted(lap.events())
    }

    fn is_lap_valid(&self, lap: &Lap) -> bool {
        self.is_valid(lap.lap_number, lap.lap_time, lap.events(), lap.incident)
    }
}

/// # default lap policy
/// a lap is valid when it is not the lap 0 out lap, has a positive time,
/// has no incident, and carries none of the disqualifying events.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultLapClassifier;

impl DefaultLapClassifier {
    /// every reported event, pit stops included
    pub const DISQUALIFYING: LapEvents = LapEvents::all();
}

impl LapClassifier for DefaultLapClassifier {
    fn is_pitted(&self, events: LapEvents) -> bool {
        events.contains(LapEvents::PITTED)
    }

    fn is_valid(&self, lap_number: i32, lap_time: i32, events: LapEvents, incident: bool) -> bool {
        lap_number > 0
            && lap_time > 0
            && !incident
            && !events.intersects(DefaultLapClassifier::DISQUALIFYING)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_lap_is_valid() {
        assert!(DefaultLapClassifier.is_valid(3, 912_345, LapEvents::empty(), false));
    }

    #[test]
    fn out_lap_and_empty_times_are_invalid() {
        assert!(!DefaultLapClassifier.is_valid(0, 912_345, LapEvents::empty(), false));
        assert!(!DefaultLapClassifier.is_valid(3, 0, LapEvents::empty(), false));
        assert!(!DefaultLapClassifier.is_valid(3, -1, LapEvents::empty(), false));
    }

    #[test]
    fn every_reported_event_disqualifies() {
        assert_eq!(DefaultLapClassifier::DISQUALIFYING.bits(), (1 << 10) - 1);
        assert!(!DefaultLapClassifier.is_valid(3, 912_345, LapEvents::INVALID, false));
        assert!(!DefaultLapClassifier.is_valid(3, 912_345, LapEvents::DISCONTINUITY, false));
    }

    #[test]
    fn incidents_and_events_invalidate() {
        assert!(!DefaultLapClassifier.is_valid(3, 912_345, LapEvents::empty(), true));
        assert!(!DefaultLapClassifier.is_valid(3, 912_345, LapEvents::OFF_TRACK, false));
        assert!(!DefaultLapClassifier.is_valid(3, 912_345, LapEvents::LOST_CONTROL | LapEvents::TOW, false));
    }

    #[test]
    fn pitted_lap_is_pitted_and_not_valid() {
        assert!(DefaultLapClassifier.is_pitted(LapEvents::PITTED));
        assert!(!DefaultLapClassifier.is_pitted(LapEvents::OFF_TRACK));
        assert!(!DefaultLapClassifier.is_valid(3, 912_345, LapEvents::PITTED, false));
    }
}
