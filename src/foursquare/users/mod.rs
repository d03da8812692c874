mod resources;

use std::fmt::Display;

use serde::Serialize;
use serde_json::Value;

pub use resources::{
    CheckinSort, CheckinsRequest, LatLng, LeaderboardRequest, PageRequest, TipSort, TipsRequest,
    TodosRequest, VenueHistoryRequest,
};

use super::{
    endpoint, query::Parameters, Error, FoursquareClient, FoursquareResult, Transport, API_URL,
    API_VERSION,
};

/// User targeted by a request, the acting user (`self`) by default.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum User {
    #[default]
    Acting,
    Id(String),
}

impl User {
    /// An empty id is the acting user.
    pub fn id<S>(id: S) -> Self
    where
        S: Into<String>,
    {
        let id = id.into();
        if id.is_empty() {
            Self::Acting
        } else {
            Self::Id(id)
        }
    }

    fn path_segment(&self) -> String {
        match self {
            Self::Acting => "self".to_owned(),
            Self::Id(id) if id.is_empty() => "self".to_owned(),
            Self::Id(id) => {
                percent_encoding::utf8_percent_encode(id, percent_encoding::NON_ALPHANUMERIC)
                    .to_string()
            }
        }
    }
}

impl Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Id(id) if !id.is_empty() => write!(f, "{}", id),
            _ => write!(f, "self"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Resource {
    Badges,
    Checkins,
    Friends,
    Leaderboard,
    Mayorships,
    Photos,
    Tips,
    Todos,
    VenueHistory,
}

impl Resource {
    fn path(&self, user: &User) -> String {
        let name = match self {
            Self::Leaderboard => return "users/leaderboard".to_owned(),
            Self::Badges => "badges",
            Self::Checkins => "checkins",
            Self::Friends => "friends",
            Self::Mayorships => "mayorships",
            Self::Photos => "photos",
            Self::Tips => "tips",
            Self::Todos => "todos",
            Self::VenueHistory => "venuehistory",
        };
        format!("users/{}/{}", user.path_segment(), name)
    }

    /// Json pointer of the payload inside the response envelope.
    fn envelope(&self) -> &'static str {
        match self {
            Self::Badges => "/response/badges",
            Self::Checkins => "/response/checkins/items",
            Self::Friends => "/response/friends",
            Self::Leaderboard => "/response/leaderboard/items",
            Self::Mayorships => "/response/mayorships/items",
            Self::Photos => "/response/photos",
            Self::Tips => "/response/tips/items",
            Self::Todos => "/response/todos/items",
            Self::VenueHistory => "/response/venues",
        }
    }
}

fn unwrap_envelope(url: &str, pointer: &str, mut json: Value) -> FoursquareResult<Value> {
    let is_collection = json
        .pointer(pointer)
        .map(|v| v.is_array() || v.is_object())
        .unwrap_or(false);

    if !is_collection {
        tracing::warn!(url = %endpoint(url), pointer, "unexpected response envelope");
        return Err(Error::unexpected_envelope(url, pointer, json));
    }

    Ok(json.pointer_mut(pointer).map(Value::take).unwrap_or_default())
}

/// Users endpoints. Every accessor needs an access token and returns the payload as found in the response envelope.
impl<T> FoursquareClient<T>
where
    T: Transport,
{
    async fn get_resource<O>(
        &self,
        resource: Resource,
        user: &User,
        options: &O,
    ) -> FoursquareResult<Value>
    where
        O: Serialize + ?Sized,
    {
        let token = self.access_token().ok_or(Error::AuthenticationError)?;

        let parameters = Parameters::from_serializable(options)?
            .with("oauth_token", token.as_str())
            .with("v", API_VERSION);
        let url = format!(
            "{}{}?{}",
            API_URL,
            resource.path(user),
            parameters.to_query_string()
        );

        let json: Value = self.get_as_json(&url).await?;
        unwrap_envelope(&url, resource.envelope(), json)
    }

    pub async fn badges(&self, user: &User) -> FoursquareResult<Value> {
        self.get_resource(Resource::Badges, user, &()).await
    }

    pub async fn checkins(
        &self,
        user: &User,
        request: &CheckinsRequest,
    ) -> FoursquareResult<Value> {
        self.get_resource(Resource::Checkins, user, request).await
    }

    pub async fn friends(&self, user: &User, request: &PageRequest) -> FoursquareResult<Value> {
        self.get_resource(Resource::Friends, user, request).await
    }

    /// The leaderboard is always the acting user's one.
    pub async fn leaderboard(&self, request: &LeaderboardRequest) -> FoursquareResult<Value> {
        self.get_resource(Resource::Leaderboard, &User::Acting, request)
            .await
    }

    pub async fn mayorships(&self, user: &User) -> FoursquareResult<Value> {
        self.get_resource(Resource::Mayorships, user, &()).await
    }

    pub async fn photos(&self, user: &User, request: &PageRequest) -> FoursquareResult<Value> {
        self.get_resource(Resource::Photos, user, request).await
    }

    pub async fn tips(&self, user: &User, request: &TipsRequest) -> FoursquareResult<Value> {
        self.get_resource(Resource::Tips, user, request).await
    }

    pub async fn todos(&self, user: &User, request: &TodosRequest) -> FoursquareResult<Value> {
        self.get_resource(Resource::Todos, user, request).await
    }

    pub async fn venue_history(
        &self,
        user: &User,
        request: &VenueHistoryRequest,
    ) -> FoursquareResult<Value> {
        self.get_resource(Resource::VenueHistory, user, request)
            .await
    }
}
