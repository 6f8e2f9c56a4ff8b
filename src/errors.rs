use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("competition `{}` does not exist", slug))]
    CompetitionNotFound { slug: String },

    #[snafu(display("driver {} references unknown crew {}", cust_id, crew_id))]
    MissingCrew { cust_id: i32, crew_id: i32 },

    #[snafu(display("crew {} references unknown team {}", crew_id, team_id))]
    MissingTeam { crew_id: i32, team_id: i32 },

    #[snafu(display("error while loading {}: {}", what, source))]
    Database {
        what: String,
        source: diesel::result::Error,
    },

    #[snafu(display("could not connect to the database: {}", source))]
    Connection { source: diesel::ConnectionError },

    #[snafu(display("could not serialize {}: {}", what, source))]
    Serialization {
        what: String,
        source: serde_json::Error,
    },

    #[snafu(display("could not write csv record: {}", source))]
    CsvWrite { source: csv::Error },

    #[snafu(display("could not flush csv output: {}", source))]
    CsvFlush { source: std::io::Error },

    #[snafu(display("csv output is not valid utf-8: {}", source))]
    CsvEncoding { source: std::string::FromUtf8Error },

    #[snafu(display("cache error: {}", source))]
    Cache { source: redis::RedisError },

    #[snafu(display("{} must be set", key))]
    MissingConfig {
        key: String,
        source: std::env::VarError,
    },

    #[snafu(display("invalid value `{}` for {}", value, key))]
    InvalidConfig { key: String, value: String },
}

impl Error {
    /// # is not found
    /// true for errors caused by a reference to something that does not exist,
    /// as opposed to an infrastructure failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::CompetitionNotFound { .. })
    }
}

pub type CustomResult<T> = Result<T, Error>;
