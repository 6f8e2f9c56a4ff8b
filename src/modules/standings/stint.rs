use crate::modules::models::lap::Lap;
use crate::modules::standings::lap_validity::LapClassifier;

/// laps needed for a stint to count
pub const STINT_LAPS: u8 = 3;

/// A qualifying stint: the average of the first 3 consecutive valid laps a
/// driver set in a session, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StintResult {
    pub cust_id: i32,
    pub subsession_id: i32,
    pub average: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StintState {
    pub valid_laps: u8,
    pub time_sum: i64,
    pub ended: bool,
}

/// what a single lap did to the stint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StintStep {
    /// the stint already ended, or the lap was driven in another car
    Skipped,
    /// pit lap before the first valid lap
    Waiting,
    Counted,
    Completed(StintResult),
    /// the stint ended without a result
    Abandoned,
}

/// # stint analyzer
/// consumes the laps of one or more drivers ordered by driver, session, and
/// lap number, and yields at most one `StintResult` per (driver, session).
pub struct StintAnalyzer<'c, C: LapClassifier> {
    classifier: &'c C,
    current: Option<(i32, i32)>,
    state: StintState,
}

impl<'c, C: LapClassifier> StintAnalyzer<'c, C> {
    pub fn new(classifier: &'c C) -> StintAnalyzer<'c, C> {
        StintAnalyzer {
            classifier,
            current: None,
            state: StintState::default(),
        }
    }

    pub fn state(&self) -> StintState {
        self.state
    }

    /// # push a lap
    ///
    /// ## Arguments
    /// * `lap` - the next lap in (driver, session, lap number) order
    /// * `registered_car` - the car the lap's driver is registered with
    ///
    /// ## Returns
    /// * `StintStep` - the effect the lap had on the stint
    pub fn push(&mut self, lap: &Lap, registered_car: i32) -> StintStep {
        let key = (lap.cust_id, lap.subsession_id);
        if self.current != Some(key) {
            self.current = Some(key);
            self.state = StintState::default();
        }

        if self.state.ended || lap.car_id != registered_car {
            return StintStep::Skipped;
        }

        // a pit stop only ends a stint that already started
        if self.classifier.is_lap_pitted(lap) {
            if self.state.valid_laps > 0 {
                self.state.ended = true;
                return StintStep::Abandoned;
            }
            return StintStep::Waiting;
        }

        // any other invalid lap ends the session for this driver
        if !self.classifier.is_lap_valid(lap) {
            self.state.valid_laps = 0;
            self.state.ended = true;
            return StintStep::Abandoned;
        }

        self.state.valid_laps += 1;
        self.state.time_sum += i64::from(lap.lap_time);

        if self.state.valid_laps < STINT_LAPS {
            return StintStep::Counted;
        }

        self.state.ended = true;
        StintStep::Completed(StintResult {
            cust_id: lap.cust_id,
            subsession_id: lap.subsession_id,
            average: stint_average(self.state.time_sum),
        })
    }
}

/// lap times are in 1/10000 s, the average is truncated to milliseconds
pub fn stint_average(time_sum: i64) -> i64 {
    time_sum / i64::from(STINT_LAPS) / 10
}
