use std::fmt::Debug;

use serde::Deserialize;

use super::{OAUTH_URL, TOKEN_URL};
use crate::foursquare::{
    query::{encode, Parameters},
    Error, FoursquareClient, FoursquareResult, Transport,
};

#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new<S>(value: S) -> FoursquareResult<Self>
    where
        S: Into<String>,
    {
        let value = value.into();
        if value.is_empty() {
            return Err(Error::EmptyAccessToken);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

impl From<AccessToken> for String {
    fn from(token: AccessToken) -> Self {
        token.0
    }
}

/// Outcome of [`FoursquareClient::authenticate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Authorization {
    /// No code yet: the end user has to be redirected to this url. The provider then calls back the redirect uri
    /// with a `code` query parameter.
    Redirect(String),
    /// The code has been exchanged. The token is not stored in the client, see
    /// [`FoursquareClient::set_access_token`].
    Authenticated(AccessToken),
}

#[derive(Deserialize, Debug)]
struct TokenResponse {
    access_token: String,
}

impl<T> FoursquareClient<T>
where
    T: Transport,
{
    pub fn authorization_url(&self) -> String {
        let credentials = self.credentials();
        format!(
            "{}?client_id={}&response_type=code&redirect_uri={}",
            OAUTH_URL,
            credentials.client_id(),
            encode(credentials.redirect_uri())
        )
    }

    /// Exchanges an authorization code for an access token.
    ///
    /// The exchange is a GET on the token endpoint. The returned token is not stored.
    pub async fn exchange_code(&self, code: &str) -> FoursquareResult<AccessToken> {
        let credentials = self.credentials();
        let parameters = Parameters::new()
            .with("client_id", credentials.client_id())
            .with("client_secret", credentials.client_secret())
            .with("grant_type", "authorization_code")
            .with("redirect_uri", credentials.redirect_uri())
            .with("code", code);
        let url = format!("{}?{}", TOKEN_URL, parameters.to_query_string());

        let token: TokenResponse = self.get_as_json(&url).await?;
        tracing::debug!("authorization code exchanged");
        AccessToken::new(token.access_token)
    }

    /// Single entry point of the authorization code flow: without code, the redirect url; with a code, the exchanged
    /// token.
    pub async fn authenticate(&self, code: Option<&str>) -> FoursquareResult<Authorization> {
        match code {
            None => Ok(Authorization::Redirect(self.authorization_url())),
            Some(code) => self
                .exchange_code(code)
                .await
                .map(Authorization::Authenticated),
        }
    }
}
