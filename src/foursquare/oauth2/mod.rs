pub mod credentials;
pub mod token;

pub const OAUTH_URL: &str = "https://foursquare.com/oauth2/authenticate";
pub const TOKEN_URL: &str = "https://foursquare.com/oauth2/access_token";
