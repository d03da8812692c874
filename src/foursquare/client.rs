use serde::de::DeserializeOwned;

use super::{
    endpoint,
    oauth2::{credentials::ClientCredentials, token::AccessToken},
    Client, DeserializedResponse, Error, FoursquareResult, Transport,
};

/// Foursquare api client.
///
/// Holds the application credentials, the access token once known, and the transport. The transport is released when
/// the client is dropped. Request parameters are never kept between calls.
pub struct FoursquareClient<T = Client> {
    credentials: ClientCredentials,
    access_token: Option<AccessToken>,
    transport: T,
}

impl FoursquareClient<Client> {
    pub fn new(credentials: ClientCredentials) -> Self {
        Self::with_transport(credentials, Client::default())
    }
}

impl<T> FoursquareClient<T>
where
    T: Transport,
{
    pub fn with_transport(credentials: ClientCredentials, transport: T) -> Self {
        Self {
            credentials,
            access_token: None,
            transport,
        }
    }

    pub fn credentials(&self) -> &ClientCredentials {
        &self.credentials
    }

    /// Replaces the current token, e.g. with one restored from a session or returned by
    /// [`FoursquareClient::exchange_code`].
    pub fn set_access_token<S>(&mut self, token: S) -> FoursquareResult<()>
    where
        S: Into<String>,
    {
        self.access_token = Some(AccessToken::new(token)?);
        Ok(())
    }

    pub fn access_token(&self) -> Option<&AccessToken> {
        self.access_token.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    pub(crate) async fn get_as_json<R>(&self, url: &str) -> FoursquareResult<R>
    where
        R: DeserializeOwned,
    {
        tracing::debug!(url = %endpoint(url), "GET");
        let body = self.transport.get(url).await?;
        tracing::trace!(url = %endpoint(url), bytes = body.len(), "body received");

        let r: DeserializedResponse<R> =
            serde_json::from_str(&body).map_err(|err| Error::decode_error::<R>(url, err))?;
        r.into_result()
            .map_err(|json| Error::unexpected_envelope(url, std::any::type_name::<R>(), json))
    }
}

impl<T> std::fmt::Debug for FoursquareClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FoursquareClient")
            .field("credentials", &self.credentials)
            .field("access_token", &self.access_token)
            .finish()
    }
}
