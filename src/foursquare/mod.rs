pub mod oauth2;
pub mod query;
pub mod users;

mod client;

pub use client::FoursquareClient;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const API_URL: &str = "https://api.foursquare.com/v2/";
const API_VERSION: &str = "20130224";

#[derive(Debug, Clone)]
pub struct Client {
    pub(self) client: reqwest::Client,
}

impl Default for Client {
    fn default() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

/// Raw HTTP GET used by [`FoursquareClient`].
///
/// The body is returned whatever the HTTP status is: the api answers errors with a json body which is decoded by the
/// caller. Only transport failures (dns, connection, timeout, ...) are errors.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> FoursquareResult<String>;
}

#[async_trait::async_trait]
impl Transport for Client {
    async fn get(&self, url: &str) -> FoursquareResult<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| Error::transport_error(url, err))?;

        tracing::trace!(url = %endpoint(url), status = %response.status(), "response received");

        response
            .text()
            .await
            .map_err(|err| Error::transport_error(url, err))
    }
}

#[derive(Debug, serde::Deserialize)]
#[serde(untagged)]
enum DeserializedResponse<T> {
    Success(T),
    Error(serde_json::Value),
}

impl<T> DeserializedResponse<T> {
    pub fn into_result(self) -> Result<T, serde_json::Value> {
        match self {
            DeserializedResponse::Success(x) => Ok(x),
            DeserializedResponse::Error(e) => Err(e),
        }
    }
}

/// Urls without their query string: queries carry the client secret and the oauth token.
fn endpoint(url: &str) -> &str {
    url.split_once('?').map(|(endpoint, _)| endpoint).unwrap_or(url)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorCode {
    Timeout,
    Connect,
    Redirect,
    Request,
    Body,
    Other,
}

impl From<&reqwest::Error> for TransportErrorCode {
    fn from(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::Connect
        } else if err.is_redirect() {
            Self::Redirect
        } else if err.is_body() || err.is_decode() {
            Self::Body
        } else if err.is_request() {
            Self::Request
        } else {
            Self::Other
        }
    }
}

#[derive(Debug)]
pub enum Error {
    AuthenticationError,
    EmptyAccessToken,
    TransportError {
        url: String,
        code: TransportErrorCode,
        message: String,
    },
    DecodeError {
        url: String,
        expected_type: String,
        error: serde_json::Error,
    },
    UnexpectedEnvelope {
        url: String,
        path: String,
        json: serde_json::Value,
    },
    InvalidParameters {
        message: String,
    },
    DeserializationError {
        expected_type: String,
        error: serde_json::Error,
    },
    EnvVarError {
        key: String,
        error: std::env::VarError,
    },
    IoError {
        message: String,
        error: std::io::Error,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
impl std::error::Error for Error {}

impl Error {
    /// The body was not json or the json had not the expected shape.
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            Self::DecodeError { .. } | Self::UnexpectedEnvelope { .. }
        )
    }

    pub fn transport<T, U>(url: T, code: TransportErrorCode, message: U) -> Self
    where
        T: AsRef<str>,
        U: AsRef<str>,
    {
        Self::TransportError {
            url: endpoint(url.as_ref()).to_owned(),
            code,
            message: message.as_ref().to_owned(),
        }
    }

    fn transport_error(url: &str, error: reqwest::Error) -> Self {
        let code = TransportErrorCode::from(&error);
        Self::transport(url, code, error.without_url().to_string())
    }

    fn decode_error<T>(url: &str, error: serde_json::Error) -> Self {
        Self::DecodeError {
            url: endpoint(url).to_owned(),
            expected_type: std::any::type_name::<T>().to_owned(),
            error,
        }
    }

    fn unexpected_envelope(url: &str, path: &str, json: serde_json::Value) -> Self {
        Self::UnexpectedEnvelope {
            url: endpoint(url).to_owned(),
            path: path.to_owned(),
            json,
        }
    }

    fn invalid_parameters<T>(message: T) -> Self
    where
        T: std::fmt::Display,
    {
        Self::InvalidParameters {
            message: message.to_string(),
        }
    }

    fn deserialization_error<T>(error: serde_json::Error) -> Self {
        Self::DeserializationError {
            expected_type: std::any::type_name::<T>().to_owned(),
            error,
        }
    }

    fn io_error<T>(message: &str, path: T, error: std::io::Error) -> Self
    where
        T: AsRef<std::path::Path>,
    {
        Self::IoError {
            message: format!("{} {}", message, path.as_ref().display()),
            error,
        }
    }

    fn env_var_error(key: &str, error: std::env::VarError) -> Self {
        Self::EnvVarError {
            key: key.to_owned(),
            error,
        }
    }
}

pub type FoursquareResult<T> = std::result::Result<T, Error>;
