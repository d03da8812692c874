use chrono::{TimeZone, Utc};
use foursquare_api::{
    users::{
        CheckinSort, CheckinsRequest, LatLng, LeaderboardRequest, PageRequest, TipSort,
        TipsRequest, TodosRequest, User, VenueHistoryRequest,
    },
    Error, TransportErrorCode,
};
use serde_json::json;

mod config;
use config::stub::{authenticated_client, client, StubTransport};

#[tokio::test]
async fn test_accessors_without_token() {
    let (transport, urls) = StubTransport::body(r#"{ "response": {} }"#);
    let client = client(transport);
    let user = User::default();

    let results = vec![
        client.badges(&user).await,
        client.checkins(&user, &CheckinsRequest::default()).await,
        client.friends(&user, &PageRequest::default()).await,
        client.leaderboard(&LeaderboardRequest::default()).await,
        client.mayorships(&user).await,
        client.photos(&user, &PageRequest::default()).await,
        client.tips(&user, &TipsRequest::default()).await,
        client.todos(&user, &TodosRequest::default()).await,
        client
            .venue_history(&user, &VenueHistoryRequest::default())
            .await,
    ];

    for result in results {
        assert!(
            matches!(result, Err(Error::AuthenticationError)),
            "expected an AuthenticationError but got {:?}",
            result
        );
    }
    assert!(urls.lock().unwrap().is_empty(), "no request should be sent");
}

#[tokio::test]
async fn test_badges() {
    let (transport, urls) =
        StubTransport::body(r#"{"response":{"badges":[{"id":"1"},{"id":"2"}]}}"#);
    let client = authenticated_client(transport);

    let actual = client.badges(&User::default()).await.unwrap();

    assert_eq!(json!([{ "id": "1" }, { "id": "2" }]), actual);
    assert_eq!(
        vec!["https://api.foursquare.com/v2/users/self/badges?oauth_token=token&v=20130224"],
        *urls.lock().unwrap()
    );
}

#[tokio::test]
async fn test_checkins() {
    let (transport, urls) = StubTransport::body(
        r#"{"meta":{"code":200},"response":{"checkins":{"count":1,"items":[{"id":"c1","createdAt":1361664000}]}}}"#,
    );
    let client = authenticated_client(transport);
    let request = CheckinsRequest {
        limit: Some(10),
        offset: Some(20),
        sort: CheckinSort::OldestFirst,
        after_timestamp: Some(Utc.timestamp_opt(1361664000, 0).unwrap()),
        before_timestamp: None,
    };

    let actual = client.checkins(&User::id("42"), &request).await.unwrap();

    assert_eq!(json!([{ "id": "c1", "createdAt": 1361664000 }]), actual);
    assert_eq!(
        vec!["https://api.foursquare.com/v2/users/42/checkins?afterTimestamp=1361664000&limit=10&oauth_token=token&offset=20&sort=oldestfirst&v=20130224"],
        *urls.lock().unwrap()
    );
}

#[tokio::test]
async fn test_friends_keeps_envelope_object() {
    let (transport, urls) = StubTransport::body(
        r#"{"response":{"friends":{"count":2,"items":[{"id":"1"},{"id":"2"}]}}}"#,
    );
    let client = authenticated_client(transport);
    let request = PageRequest {
        limit: Some(2),
        offset: None,
    };

    let actual = client.friends(&User::default(), &request).await.unwrap();

    assert_eq!(
        json!({ "count": 2, "items": [{ "id": "1" }, { "id": "2" }] }),
        actual
    );
    assert_eq!(
        vec!["https://api.foursquare.com/v2/users/self/friends?limit=2&oauth_token=token&v=20130224"],
        *urls.lock().unwrap()
    );
}

#[tokio::test]
async fn test_leaderboard() {
    let (transport, urls) = StubTransport::body(
        r#"{"response":{"leaderboard":{"count":1,"items":[{"rank":1}]}}}"#,
    );
    let client = authenticated_client(transport);

    let actual = client
        .leaderboard(&LeaderboardRequest { neighbors: Some(2) })
        .await
        .unwrap();

    assert_eq!(json!([{ "rank": 1 }]), actual);
    assert_eq!(
        vec!["https://api.foursquare.com/v2/users/leaderboard?neighbors=2&oauth_token=token&v=20130224"],
        *urls.lock().unwrap()
    );
}

#[tokio::test]
async fn test_mayorships() {
    let (transport, _) =
        StubTransport::body(r#"{"response":{"mayorships":{"count":0,"items":[]}}}"#);
    let client = authenticated_client(transport);

    let actual = client.mayorships(&User::default()).await.unwrap();

    assert_eq!(json!([]), actual);
}

#[tokio::test]
async fn test_photos() {
    let (transport, urls) =
        StubTransport::body(r#"{"response":{"photos":{"count":0,"items":[]}}}"#);
    let client = authenticated_client(transport);

    let actual = client
        .photos(&User::default(), &PageRequest::default())
        .await
        .unwrap();

    assert_eq!(json!({ "count": 0, "items": [] }), actual);
    assert_eq!(
        vec!["https://api.foursquare.com/v2/users/self/photos?oauth_token=token&v=20130224"],
        *urls.lock().unwrap()
    );
}

#[tokio::test]
async fn test_tips() {
    let (transport, urls) =
        StubTransport::body(r#"{"response":{"tips":{"count":1,"items":[{"text":"try the tea"}]}}}"#);
    let client = authenticated_client(transport);
    let request = TipsRequest {
        sort: TipSort::Popular,
        ll: Some(LatLng::new(50.85, 4.35)),
        ..Default::default()
    };

    let actual = client.tips(&User::default(), &request).await.unwrap();

    assert_eq!(json!([{ "text": "try the tea" }]), actual);
    assert_eq!(
        vec!["https://api.foursquare.com/v2/users/self/tips?ll=50.85%2C4.35&oauth_token=token&sort=popular&v=20130224"],
        *urls.lock().unwrap()
    );
}

#[tokio::test]
async fn test_todos() {
    let (transport, urls) =
        StubTransport::body(r#"{"response":{"todos":{"count":1,"items":[{"id":"t1"}]}}}"#);
    let client = authenticated_client(transport);

    let actual = client
        .todos(&User::default(), &TodosRequest::default())
        .await
        .unwrap();

    assert_eq!(json!([{ "id": "t1" }]), actual);
    assert_eq!(
        vec!["https://api.foursquare.com/v2/users/self/todos?oauth_token=token&sort=recent&v=20130224"],
        *urls.lock().unwrap()
    );
}

#[tokio::test]
async fn test_venue_history() {
    let (transport, urls) = StubTransport::body(
        r#"{"response":{"venues":{"count":1,"items":[{"beenHere":3}]}}}"#,
    );
    let client = authenticated_client(transport);
    let request = VenueHistoryRequest {
        after_timestamp: Some(Utc.timestamp_opt(1000, 0).unwrap()),
        before_timestamp: Some(Utc.timestamp_opt(2000, 0).unwrap()),
    };

    let actual = client
        .venue_history(&User::default(), &request)
        .await
        .unwrap();

    assert_eq!(json!({ "count": 1, "items": [{ "beenHere": 3 }] }), actual);
    assert_eq!(
        vec!["https://api.foursquare.com/v2/users/self/venuehistory?afterTimestamp=1000&beforeTimestamp=2000&oauth_token=token&v=20130224"],
        *urls.lock().unwrap()
    );
}

#[tokio::test]
async fn test_malformed_body() {
    let (transport, urls) = StubTransport::body("<html>503 Service Unavailable</html>");
    let client = authenticated_client(transport);
    let user = User::default();

    let results = vec![
        client.badges(&user).await,
        client.checkins(&user, &CheckinsRequest::default()).await,
        client.friends(&user, &PageRequest::default()).await,
        client.leaderboard(&LeaderboardRequest::default()).await,
        client.mayorships(&user).await,
        client.photos(&user, &PageRequest::default()).await,
        client.tips(&user, &TipsRequest::default()).await,
        client.todos(&user, &TodosRequest::default()).await,
        client
            .venue_history(&user, &VenueHistoryRequest::default())
            .await,
    ];

    for result in results {
        assert!(
            matches!(result, Err(Error::DecodeError { .. })),
            "expected a DecodeError but got {:?}",
            result
        );
    }
    assert_eq!(9, urls.lock().unwrap().len());
    assert_eq!("token", client.access_token().unwrap().as_str());
}

#[tokio::test]
async fn test_api_error_body_is_decoded() {
    let (transport, _) = StubTransport::body(
        r#"{"meta":{"code":401,"errorType":"invalid_auth","errorDetail":"OAuth token invalid or revoked."},"response":{}}"#,
    );
    let client = authenticated_client(transport);

    match client.badges(&User::default()).await.unwrap_err() {
        Error::UnexpectedEnvelope { url, path, json } => {
            assert_eq!("https://api.foursquare.com/v2/users/self/badges", url);
            assert_eq!("/response/badges", path);
            assert_eq!(json!("invalid_auth"), json["meta"]["errorType"]);
        }
        e => panic!("expected an UnexpectedEnvelope but got {:?}", e),
    }
}

#[tokio::test]
async fn test_transport_error() {
    let (transport, urls) = StubTransport::failure(TransportErrorCode::Connect, "connection refused");
    let client = authenticated_client(transport);

    match client.todos(&User::default(), &TodosRequest::default()).await.unwrap_err() {
        Error::TransportError { url, code, message } => {
            assert_eq!("https://api.foursquare.com/v2/users/self/todos", url);
            assert_eq!(TransportErrorCode::Connect, code);
            assert_eq!("connection refused", message);
        }
        e => panic!("expected a TransportError but got {:?}", e),
    }
    assert_eq!(1, urls.lock().unwrap().len(), "no retry expected");
}
