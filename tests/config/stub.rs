use std::sync::{Arc, Mutex};

use foursquare_api::{
    oauth2::credentials::ClientCredentials, Error, FoursquareClient, FoursquareResult, Transport,
    TransportErrorCode,
};

enum Reply {
    Body(String),
    Failure(TransportErrorCode, String),
}

/// In memory transport: always gives the same reply and records requested urls.
pub struct StubTransport {
    reply: Reply,
    urls: Arc<Mutex<Vec<String>>>,
}

#[async_trait::async_trait]
impl Transport for StubTransport {
    async fn get(&self, url: &str) -> FoursquareResult<String> {
        self.urls.lock().unwrap().push(url.to_owned());
        match &self.reply {
            Reply::Body(body) => Ok(body.to_owned()),
            Reply::Failure(code, message) => Err(Error::transport(url, *code, message)),
        }
    }
}

#[allow(dead_code)] //each test crate only uses a part of the helpers
impl StubTransport {
    pub fn body(body: &str) -> (Self, Arc<Mutex<Vec<String>>>) {
        Self::new(Reply::Body(body.to_owned()))
    }

    pub fn failure(code: TransportErrorCode, message: &str) -> (Self, Arc<Mutex<Vec<String>>>) {
        Self::new(Reply::Failure(code, message.to_owned()))
    }

    fn new(reply: Reply) -> (Self, Arc<Mutex<Vec<String>>>) {
        let urls = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                reply,
                urls: urls.clone(),
            },
            urls,
        )
    }
}

pub fn credentials() -> ClientCredentials {
    ClientCredentials::new("client_id", "client_secret", "https://example.com/callback")
}

#[allow(dead_code)]
pub fn client(transport: StubTransport) -> FoursquareClient<StubTransport> {
    FoursquareClient::with_transport(credentials(), transport)
}

#[allow(dead_code)]
pub fn authenticated_client(transport: StubTransport) -> FoursquareClient<StubTransport> {
    let mut client = client(transport);
    client.set_access_token("token").unwrap();
    client
}
