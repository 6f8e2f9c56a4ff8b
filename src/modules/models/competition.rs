use diesel::prelude::*;
use diesel::result::Error::NotFound;
use log::error;
use serde::{Deserialize, Serialize};
use snafu::ResultExt;

use crate::errors::{CompetitionNotFoundSnafu, CustomResult, DatabaseSnafu};

#[derive(Queryable, Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Competition {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub crew_drivers_count: i32,
}

impl Competition {
    /// # get competition by slug
    /// a missing slug is reported as `CompetitionNotFound`, never as a
    /// database failure.
    ///
    /// ## Arguments
    /// * `conn` - the database connection
    /// * `slug_in` - the url slug of the competition
    ///
    /// ## Returns
    /// * `Competition` - the competition with the given slug
    pub fn get_by_slug(conn: &mut PgConnection, slug_in: &str) -> CustomResult<Competition> {
        use crate::schema::competitions::dsl::*;

        match competitions.filter(slug.eq(slug_in)).first::<Competition>(conn) {
            Ok(competition) => Ok(competition),
            Err(NotFound) => CompetitionNotFoundSnafu { slug: slug_in }.fail(),
            Err(error) => {
                error!(target:"models/competition:get_by_slug", "Error getting competition {}: {}", slug_in, error);
                Err(error).context(DatabaseSnafu { what: "competition" })
            }
        }
    }
}
