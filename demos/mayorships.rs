use foursquare_api::{
    oauth2::{credentials::ClientCredentials, token::Authorization},
    users::User,
    FoursquareClient, FoursquareResult,
};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "mayorships",
    about = "authorize against foursquare and list the mayorships of a user"
)]
struct Opt {
    /// Application client id (falls back to the FOURSQUARE_CREDENTIALS file)
    #[structopt(long)]
    client_id: Option<String>,

    /// Application client secret
    #[structopt(long)]
    client_secret: Option<String>,

    /// Redirect uri registered for the application
    #[structopt(long)]
    redirect_uri: Option<String>,

    /// Authorization code received on the redirect uri
    #[structopt(long)]
    code: Option<String>,

    /// Access token from a previous authorization
    #[structopt(short, long)]
    token: Option<String>,

    /// User id (acting user by default)
    #[structopt()]
    user: Option<String>,
}

#[tokio::main]
async fn main() -> FoursquareResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let opt = Opt::from_args();

    let credentials = match (opt.client_id, opt.client_secret, opt.redirect_uri) {
        (Some(id), Some(secret), Some(uri)) => ClientCredentials::new(id, secret, uri),
        _ => ClientCredentials::default().await?,
    };
    let mut client = FoursquareClient::new(credentials);

    let token = match opt.token {
        Some(token) => token,
        None => match client.authenticate(opt.code.as_deref()).await? {
            Authorization::Redirect(url) => {
                println!("open {} then run again with --code <code>", url);
                return Ok(());
            }
            Authorization::Authenticated(token) => {
                println!("access token: {}", token.as_str());
                token.into()
            }
        },
    };
    client.set_access_token(token)?;

    let user = opt.user.map(User::id).unwrap_or_default();
    let mayorships = client.mayorships(&user).await?;
    println!("{:#}", mayorships);

    Ok(())
}
