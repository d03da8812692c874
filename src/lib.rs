//! Foursquare v2 API client
//!
//! - oauth2: authorization code flow (redirect url then code exchange)
//! - users resources: badges, checkins, friends, leaderboard, mayorships, photos, tips, todos and venue history
//! - canonical query strings: parameters are rfc 3986 encoded and sorted by key so that the same request always yields the same url
//!
//! Only GET endpoints are supported. Payloads are returned as untyped json collections, unwrapped from the `response` envelope.
//!
//! The access token is never persisted by this crate: store it (session, database) and inject it back with
//! [`FoursquareClient::set_access_token`].
//!
//! # Quick Start
//! ```rust,no_run
//! use foursquare_api::{
//!     oauth2::{credentials::ClientCredentials, token::Authorization},
//!     users::User,
//!     FoursquareClient, FoursquareResult,
//! };
//!
//! #[tokio::main]
//! async fn main() -> FoursquareResult<()> {
//!     let credentials = ClientCredentials::new("client id", "client secret", "https://example.com/callback");
//!     let mut client = FoursquareClient::new(credentials);
//!
//!     // code received on the redirect uri, if any
//!     let code: Option<&str> = None;
//!
//!     match client.authenticate(code).await? {
//!         Authorization::Redirect(url) => println!("redirect the user to {}", url),
//!         Authorization::Authenticated(token) => {
//!             client.set_access_token(token.as_str())?;
//!             let mayorships = client.mayorships(&User::default()).await?;
//!             println!("{:#}", mayorships);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
mod foursquare;

pub use foursquare::oauth2;
pub use foursquare::query;
pub use foursquare::users;
pub use foursquare::{
    Client, Error, FoursquareClient, FoursquareResult, Transport, TransportErrorCode, VERSION,
};
