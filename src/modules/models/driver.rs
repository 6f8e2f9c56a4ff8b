use std::collections::{HashMap, HashSet};

use diesel::prelude::*;
use log::error;
use serde::{Deserialize, Serialize};
use snafu::ResultExt;

use crate::errors::{CustomResult, DatabaseSnafu, MissingCrewSnafu, MissingTeamSnafu};

#[derive(Queryable, Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Team {
    pub id: i32,
    pub competition_id: i32,
    pub name: String,
    pub picture: String,
}

#[derive(Queryable, Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Crew {
    pub id: i32,
    pub team_id: i32,
    pub name: String,
    pub car_id: i32,
    pub car_brand_picture: String,
}

#[derive(Queryable, Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Driver {
    pub id: i32,
    pub competition_id: i32,
    pub crew_id: i32,
    pub cust_id: i32,
    pub name: String,
}

/// A driver registered in a competition together with the crew and team
/// they drive for.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct RosterEntry {
    pub driver: Driver,
    pub crew: Crew,
    pub team: Team,
}

impl RosterEntry {
    pub fn cust_id(&self) -> i32 {
        self.driver.cust_id
    }

    /// the car the driver is expected to race with
    pub fn car_id(&self) -> i32 {
        self.crew.car_id
    }

    /// # get the roster of a competition
    /// loads the drivers, crews, and teams of a competition and joins them.
    /// a driver pointing at a crew (or a crew at a team) that is not in the
    /// database is reported as an error instead of being dropped.
    ///
    /// ## Arguments
    /// * `conn` - the database connection
    /// * `competition` - the database id of the competition
    ///
    /// ## Returns
    /// * `Vec<RosterEntry>` - the roster ordered by customer id
    pub fn from_competition(conn: &mut PgConnection, competition: i32) -> CustomResult<Vec<RosterEntry>> {
        let drivers = Driver::from_competition(conn, competition)?;

        let crew_ids = drivers.iter().map(|e| e.crew_id).collect::<HashSet<i32>>();
        let crews = Crew::get_by_ids(conn, &crew_ids.into_iter().collect::<Vec<i32>>())?;

        let team_ids = crews.iter().map(|e| e.team_id).collect::<HashSet<i32>>();
        let teams = Team::get_by_ids(conn, &team_ids.into_iter().collect::<Vec<i32>>())?;

        RosterEntry::assemble(drivers, crews, teams)
    }

    /// # assemble roster entries
    /// join drivers to their crew and team without touching the database.
    pub fn assemble(drivers: Vec<Driver>, crews: Vec<Crew>, teams: Vec<Team>) -> CustomResult<Vec<RosterEntry>> {
        let crews: HashMap<i32, Crew> = crews.into_iter().map(|e| (e.id, e)).collect();
        let teams: HashMap<i32, Team> = teams.into_iter().map(|e| (e.id, e)).collect();

        let mut roster = Vec::with_capacity(drivers.len());
        for driver in drivers {
            let crew = match crews.get(&driver.crew_id) {
                Some(crew) => crew.to_owned(),
                None => {
                    return MissingCrewSnafu { cust_id: driver.cust_id, crew_id: driver.crew_id }.fail();
                }
            };
            let team = match teams.get(&crew.team_id) {
                Some(team) => team.to_owned(),
                None => {
                    return MissingTeamSnafu { crew_id: crew.id, team_id: crew.team_id }.fail();
                }
            };

            roster.push(RosterEntry { driver, crew, team });
        }

        roster.sort_by_key(|e| e.cust_id());
        Ok(roster)
    }
}

impl Driver {
    /// # get the drivers of a competition
    ///
    /// ## Arguments
    /// * `conn` - the database connection
    /// * `competition` - the database id of the competition
    ///
    /// ## Returns
    /// * `Vec<Driver>` - the drivers ordered by customer id
    pub fn from_competition(conn: &mut PgConnection, competition: i32) -> CustomResult<Vec<Driver>> {
        use crate::schema::competition_drivers::dsl::*;

        competition_drivers
            .filter(competition_id.eq(competition))
            .order(cust_id.asc())
            .load::<Driver>(conn)
            .map_err(|error| {
                error!(target:"models/driver:from_competition", "Error getting drivers of competition {}: {}", competition, error);
                error
            })
            .context(DatabaseSnafu { what: "drivers" })
    }
}

impl Crew {
    pub fn get_by_ids(conn: &mut PgConnection, ids: &[i32]) -> CustomResult<Vec<Crew>> {
        use crate::schema::crews::dsl::{crews, id};

        crews
            .filter(id.eq_any(ids))
            .load::<Crew>(conn)
            .context(DatabaseSnafu { what: "crews" })
    }
}

impl Team {
    pub fn get_by_ids(conn: &mut PgConnection, ids: &[i32]) -> CustomResult<Vec<Team>> {
        use crate::schema::teams::dsl::{id, teams};

        teams
            .filter(id.eq_any(ids))
            .load::<Team>(conn)
            .context(DatabaseSnafu { what: "teams" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;

    fn team() -> Team {
        Team { id: 1, competition_id: 1, name: "Apex".to_string(), picture: "apex.png".to_string() }
    }

    fn crew() -> Crew {
        Crew { id: 10, team_id: 1, name: "Apex #1".to_string(), car_id: 119, car_brand_picture: "porsche.png".to_string() }
    }

    fn driver(cust_id: i32, crew_id: i32) -> Driver {
        Driver { id: cust_id, competition_id: 1, crew_id, cust_id, name: format!("Driver {}", cust_id) }
    }

    #[test]
    fn assemble_joins_crew_and_team() {
        let roster = RosterEntry::assemble(vec![driver(7, 10), driver(3, 10)], vec![crew()], vec![team()]).unwrap();

        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].cust_id(), 3);
        assert_eq!(roster[1].cust_id(), 7);
        assert_eq!(roster[0].car_id(), 119);
        assert_eq!(roster[0].team.name, "Apex");
    }

    #[test]
    fn assemble_reports_unknown_crew() {
        let error = RosterEntry::assemble(vec![driver(7, 99)], vec![crew()], vec![team()]).unwrap_err();

        assert!(matches!(error, Error::MissingCrew { cust_id: 7, crew_id: 99 }));
    }

    #[test]
    fn assemble_reports_unknown_team() {
        let error = RosterEntry::assemble(vec![driver(7, 10)], vec![crew()], vec![]).unwrap_err();

        assert!(matches!(error, Error::MissingTeam { crew_id: 10, team_id: 1 }));
    }
}
