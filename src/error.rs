use thiserror::Error;

// Every fetch-and-map failure surfaces as one of these. Nothing is retried.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Could not find resource: {resource}")]
    NotFound { resource: String },
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Malformed {kind} resource: {reason}")]
    MalformedResource { kind: &'static str, reason: String },
    #[error("Unknown {kind} value: {value}")]
    UnknownEnumValue { kind: &'static str, value: String },
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Could not start the blocking runtime")]
    Runtime(#[source] std::io::Error),
}

impl Error {
    pub fn not_found(resource: impl Into<String>) -> Self {
        Error::NotFound {
            resource: resource.into(),
        }
    }

    pub fn malformed(kind: &'static str, reason: impl Into<String>) -> Self {
        Error::MalformedResource {
            kind,
            reason: reason.into(),
        }
    }

    pub fn unknown_value(kind: &'static str, value: impl Into<String>) -> Self {
        Error::UnknownEnumValue {
            kind,
            value: value.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
