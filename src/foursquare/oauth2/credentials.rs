use std::{fmt::Debug, path::Path};

use serde::{Deserialize, Serialize};

use crate::foursquare::{Error, FoursquareResult};

/// Environment variable holding the path of a json credentials file.
pub const CREDENTIALS_ENV_KEY: &str = "FOURSQUARE_CREDENTIALS";

/// Application credentials, stored verbatim.
///
/// Json form:
/// ```json
/// { "client_id": "...", "client_secret": "...", "redirect_uri": "https://example.com/callback" }
/// ```
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct ClientCredentials {
    client_id: String,
    client_secret: String,
    redirect_uri: String,
}

impl Debug for ClientCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .field("redirect_uri", &self.redirect_uri)
            .finish()
    }
}

fn from_str<T>(str: &str) -> FoursquareResult<T>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(str).map_err(Error::deserialization_error::<T>)
}

async fn from_file<T, U>(file_path: T) -> FoursquareResult<U>
where
    T: AsRef<Path>,
    U: serde::de::DeserializeOwned,
{
    tokio::fs::read_to_string(file_path.as_ref())
        .await
        .map_err(|err| Error::io_error("error while reading file", file_path.as_ref(), err))
        .and_then(|f| from_str(f.as_str()))
}

impl ClientCredentials {
    pub fn new<A, B, C>(client_id: A, client_secret: B, redirect_uri: C) -> Self
    where
        A: Into<String>,
        B: Into<String>,
        C: Into<String>,
    {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: redirect_uri.into(),
        }
    }

    pub fn from(s: &str) -> FoursquareResult<Self> {
        from_str(s)
    }

    pub async fn from_file<T>(file_path: T) -> FoursquareResult<Self>
    where
        T: AsRef<Path>,
    {
        from_file(file_path).await
    }

    /// Reads the file pointed by [`CREDENTIALS_ENV_KEY`].
    pub async fn default() -> FoursquareResult<Self> {
        let path = std::env::var(CREDENTIALS_ENV_KEY)
            .map_err(|err| Error::env_var_error(CREDENTIALS_ENV_KEY, err))?;
        from_file(path).await
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    pub fn redirect_uri(&self) -> &str {
        &self.redirect_uri
    }
}
