use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("environment variable `{name}` is not set")]
    MissingVar {
        name: &'static str,
    },

    #[error("environment variable `{name}` has invalid value `{value}`")]
    InvalidVar {
        name: &'static str,
        value: String,
    },

    #[error("request failed to `{path}`")]
    Reqwest {
        #[source]
        e: reqwest::Error,
        path: String,
    },

    #[error("service responded {status} to `{path}`: {body}")]
    Service {
        status: reqwest::StatusCode,
        path: String,
        body: String,
    },

    #[error("unable to decode response from `{path}`")]
    Json {
        #[source]
        e: serde_json::Error,
        path: String,
    },

    #[error("word bank insert returned no rows, generated id is unknown")]
    MissingGeneratedId,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
