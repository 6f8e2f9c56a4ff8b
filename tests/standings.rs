use chrono::NaiveDate;

use competition_standings::modules::competition_data::CompetitionData;
use competition_standings::modules::models::competition::Competition;
use competition_standings::modules::models::driver::{Crew, Driver, RosterEntry, Team};
use competition_standings::modules::models::event_group::EventGroup;
use competition_standings::modules::models::lap::{Lap, LapEvents};
use competition_standings::modules::models::session::Session;

const GT3: i32 = 173;
const GT4: i32 = 119;

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 9, day).unwrap()
}

fn entry(cust_id: i32, name: &str, car_id: i32) -> RosterEntry {
    RosterEntry {
        driver: Driver { id: cust_id, competition_id: 1, crew_id: car_id, cust_id, name: name.to_string() },
        crew: Crew {
            id: car_id,
            team_id: 1,
            name: format!("Crew {}", car_id),
            car_id,
            car_brand_picture: format!("{}.png", car_id),
        },
        team: Team { id: 1, competition_id: 1, name: "Shared Telemetry".to_string(), picture: "team.png".to_string() },
    }
}

fn session(subsession_id: i32, event_group_id: i32, day: u32) -> Session {
    Session {
        id: subsession_id,
        competition_id: 1,
        event_group_id,
        subsession_id,
        simsession_number: 0,
        session_date: date(day),
    }
}

struct LapLog {
    laps: Vec<Lap>,
}

impl LapLog {
    fn new() -> LapLog {
        LapLog { laps: Vec::new() }
    }

    fn lap(&mut self, cust_id: i32, subsession_id: i32, car_id: i32, lap_time: i32, events: LapEvents) -> &mut LapLog {
        let lap_number = self
            .laps
            .iter()
            .filter(|e| e.cust_id == cust_id && e.subsession_id == subsession_id)
            .count() as i32
            + 1;

        self.laps.push(Lap {
            id: self.laps.len() as i32 + 1,
            subsession_id,
            simsession_number: 0,
            cust_id,
            car_id,
            lap_number,
            lap_time,
            lap_events: events.bits() as i32,
            incident: false,
        });
        self
    }

    fn clean(&mut self, cust_id: i32, subsession_id: i32, car_id: i32, lap_times: &[i32]) -> &mut LapLog {
        for lap_time in lap_times {
            self.lap(cust_id, subsession_id, car_id, *lap_time, LapEvents::empty());
        }
        self
    }
}

fn competition_data() -> CompetitionData {
    let sessions = vec![
        session(1001, 1, 11),
        session(1002, 1, 11),
        session(1003, 1, 14),
        session(2001, 2, 18),
        session(2002, 2, 18),
    ];

    let mut log = LapLog::new();
    // 10: ranked in both groups, best of the two sessions on the 11th counts
    log.clean(10, 1001, GT3, &[900_000, 901_000, 902_000])
        .clean(10, 1002, GT3, &[899_000, 899_000, 899_000])
        .clean(10, 2001, GT3, &[1_200_000, 1_200_000, 1_200_000]);
    // 20: pit stop before the stint in 1003, off track on the first lap of 2001
    log.lap(20, 1003, GT4, 950_000, LapEvents::PITTED)
        .clean(20, 1003, GT4, &[880_000, 880_000, 880_000])
        .lap(20, 2001, GT4, 1_100_000, LapEvents::OFF_TRACK)
        .clean(20, 2001, GT4, &[1_000_000, 1_000_000, 1_000_000])
        .clean(20, 2002, GT4, &[1_150_000, 1_150_000, 1_150_000]);
    // 30: only ever ran group 1, fast
    log.clean(30, 1001, GT3, &[850_000, 850_000, 850_000]);
    // 40: pitted after one lap, then swapped into a car that is not theirs
    log.clean(40, 1001, GT4, &[860_000])
        .lap(40, 1001, GT4, 990_000, LapEvents::PITTED)
        .clean(40, 1002, GT3, &[860_000, 860_000, 860_000])
        .clean(40, 2001, GT4, &[1_000_000, 1_000_000, 1_000_000]);
    // not on the roster
    log.clean(99, 1001, GT3, &[700_000, 700_000, 700_000]);
    // lap in a subsession the competition does not know about
    log.clean(10, 4242, GT3, &[800_000, 800_000, 800_000]);

    CompetitionData {
        competition: Competition { id: 1, name: "Shared Telemetry Cup".to_string(), slug: "cup".to_string(), crew_drivers_count: 2 },
        sessions,
        event_groups: vec![
            EventGroup { id: 1, competition_id: 1, name: "Monza".to_string(), track_id: 239, dates: vec![date(11), date(14)] },
            EventGroup { id: 2, competition_id: 1, name: "Spa".to_string(), track_id: 163, dates: vec![date(18)] },
        ],
        roster: vec![entry(10, "Alice", GT3), entry(20, "Bruno", GT4), entry(30, "Chiara", GT3), entry(40, "Dario", GT4)],
        laps: log.laps,
    }
}

#[test]
fn ranking_orders_valid_totals_first() {
    let standings = competition_data().standings();

    let order: Vec<(usize, i32, i64, bool)> = standings
        .ranking
        .iter()
        .map(|e| (e.position, e.cust_id, e.total, e.is_valid))
        .collect();
    assert_eq!(
        order,
        vec![
            (1, 20, 88_000 + 115_000, true),
            (2, 10, 89_900 + 120_000, true),
            (3, 30, 0, false),
            (4, 40, 0, false),
        ]
    );
}

#[test]
fn per_session_results_include_zeros() {
    let standings = competition_data().standings();
    let all_results = &standings.aggregation.all_results;

    assert_eq!(all_results[&10][&1001], 90_100);
    assert_eq!(all_results[&10][&1002], 89_900);
    assert_eq!(all_results[&20][&1003], 88_000);
    assert_eq!(all_results[&20][&2001], 0);
    assert_eq!(all_results[&40][&1001], 0);
    assert_eq!(all_results[&40][&1002], 0);
    assert_eq!(all_results[&40][&2001], 100_000);
    assert!(!all_results.contains_key(&99));
}

#[test]
fn unknown_subsessions_are_reported() {
    let standings = competition_data().standings();

    let omissions: Vec<(i32, i32)> = standings
        .aggregation
        .unknown_sessions
        .iter()
        .map(|e| (e.cust_id, e.subsession_id))
        .collect();
    assert_eq!(omissions, vec![(10, 4242)]);
}

#[test]
fn ranking_json_and_csv_are_reproducible() {
    let data = competition_data();

    let first_json = data.ranking_json().unwrap();
    let second_json = data.ranking_json().unwrap();
    let first_csv = data.sessions_csv().unwrap();
    let second_csv = data.sessions_csv().unwrap();

    assert_eq!(first_json, second_json);
    assert_eq!(first_csv, second_csv);
}

#[test]
fn sessions_csv_lists_every_roster_driver() {
    let csv = competition_data().sessions_csv().unwrap();

    assert_eq!(
        csv,
        "custId,name,1001,1002,1003,2001,2002\n\
         10,Alice,90100,89900,0,120000,0\n\
         20,Bruno,0,0,88000,0,115000\n\
         30,Chiara,85000,0,0,0,0\n\
         40,Dario,0,0,0,100000,0\n"
    );
}

#[test]
fn ranking_json_has_empty_results_for_drivers_without_stints() {
    let mut data = competition_data();
    data.roster.push(entry(50, "Elena", GT3));

    let value: serde_json::Value = serde_json::from_str(&data.ranking_json().unwrap()).unwrap();
    let last = &value["ranking"][4];

    assert_eq!(last["custId"], 50);
    assert_eq!(last["pos"], 5);
    assert_eq!(last["sum"], 0);
    assert!(last["results"].as_object().unwrap().is_empty());
    assert_eq!(value["drivers"]["50"]["name"], "Elena");
    assert_eq!(value["eventGroups"][1]["dates"][0], "2024-09-18");
}
