use diesel::{Connection, PgConnection};
use log::error;
use snafu::ResultExt;

use crate::errors::{ConnectionSnafu, CustomResult};

/// # establish a database connection
///
/// ## Arguments
/// * `database_url` - the postgres url to connect to
///
/// ## Returns
/// * `PgConnection` - the open connection
pub fn establish_connection(database_url: &str) -> CustomResult<PgConnection> {
    PgConnection::establish(database_url)
        .map_err(|error| {
            error!(target:"models/general:establish_connection", "Error connecting to the database: {}", error);
            error
        })
        .context(ConnectionSnafu)
}
