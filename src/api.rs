//! HTTP client for the activities backend

use crate::constants::*;
use crate::error::ApiError;
use crate::types::*;
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let invalid = |reason: String| ApiError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason,
        };
        let base = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        if base.cannot_be_a_base() || !matches!(base.scheme(), "http" | "https") {
            return Err(invalid("expected an http(s) URL".into()));
        }
        Ok(Self {
            client: reqwest::Client::new(),
            base,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Append path segments to the base URL. Each segment is percent-encoded.
    fn endpoint(&self, path: &str, extra: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidBaseUrl {
                url: self.base.to_string(),
                reason: "cannot be a base".into(),
            })?
            .pop_if_empty()
            .extend(path.split('/'))
            .extend(extra);
        Ok(url)
    }

    /// `GET /activities`
    pub async fn fetch_activities(&self) -> Result<ActivitySnapshot, ApiError> {
        let url = self.endpoint(ACTIVITIES_PATH, &[])?;
        let snapshot: ActivitySnapshot = self.get_json(url, None).await?;
        debug!(count = snapshot.len(), "Activities fetched");
        Ok(snapshot)
    }

    /// `GET /search/activities?query=`
    pub async fn search_activities(&self, query: &str) -> Result<Vec<ActivitySearchResult>, ApiError> {
        let url = self.endpoint(SEARCH_ACTIVITIES_PATH, &[])?;
        let results: Vec<ActivitySearchResult> = self.get_json(url, Some(query)).await?;
        debug!(query, count = results.len(), "Activity search results");
        Ok(results)
    }

    /// `GET /search/participants?query=`
    pub async fn search_participants(
        &self,
        query: &str,
    ) -> Result<Vec<ParticipantSearchResult>, ApiError> {
        let url = self.endpoint(SEARCH_PARTICIPANTS_PATH, &[])?;
        let results: Vec<ParticipantSearchResult> = self.get_json(url, Some(query)).await?;
        debug!(query, count = results.len(), "Participant search results");
        Ok(results)
    }

    /// Run both searches concurrently. Any failure empties both result sets.
    pub async fn search(&self, query: &str) -> SearchResults {
        match futures::future::try_join(
            self.search_activities(query),
            self.search_participants(query),
        )
        .await
        {
            Ok((activity_results, participant_results)) => SearchResults {
                activity_results,
                participant_results,
            },
            Err(e) => {
                warn!(error = %e, query, "Search failed");
                SearchResults::default()
            }
        }
    }

    /// `POST /activities/{activity}/signup?email=`
    pub async fn signup(&self, request: &SignupRequest) -> Result<String, ApiError> {
        self.post_action(request, SIGNUP_ACTION).await
    }

    /// `POST /activities/{activity}/remove?email=`
    pub async fn unregister(&self, request: &SignupRequest) -> Result<String, ApiError> {
        self.post_action(request, REMOVE_ACTION).await
    }

    async fn post_action(&self, request: &SignupRequest, action: &str) -> Result<String, ApiError> {
        let url = self.endpoint(ACTIVITIES_PATH, &[request.activity.as_str(), action])?;
        debug!(%url, email = %request.email, "Posting activity action");

        let response = self
            .client
            .post(url)
            .query(&[("email", request.email.as_str())])
            .send()
            .await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(error_from_body(status, &body));
        }
        let reply: ApiMessage = serde_json::from_slice(&body)
            .map_err(|e| ApiError::Malformed(e.to_string()))?;
        reply
            .message
            .ok_or_else(|| ApiError::Malformed("reply has no message".into()))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url, query: Option<&str>) -> Result<T, ApiError> {
        let mut request = self.client.get(url);
        if let Some(q) = query {
            request = request.query(&[("query", q)]);
        }
        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(error_from_body(status, &body));
        }
        serde_json::from_slice(&body).map_err(|e| ApiError::Malformed(e.to_string()))
    }
}

/// Non-OK reply: JSON bodies become `Protocol`, anything else `Malformed`.
fn error_from_body(status: StatusCode, body: &[u8]) -> ApiError {
    match serde_json::from_slice::<ApiMessage>(body) {
        Ok(reply) => ApiError::Protocol {
            status: status.as_u16(),
            detail: reply.detail,
        },
        Err(_) => ApiError::Malformed(format!("HTTP {} with non-JSON body", status.as_u16())),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use axum::extract::{Path, Query, State};
    use axum::http::{header, StatusCode};
    use axum::response::IntoResponse;
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use serde_json::json;
    use std::collections::HashMap;
    use std::net::SocketAddr;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use tokio::net::TcpListener;

    const ACTIVITIES_JSON: &str = r#"{
        "Chess Club": {
            "description": "Learn strategies and compete in chess tournaments",
            "schedule": "Fridays, 3:30 PM - 5:00 PM",
            "max_participants": 12,
            "participants": ["michael@mergington.edu", "daniel@mergington.edu"]
        },
        "Art Workshop": {
            "description": "Learn painting, sketching, and other artistic techniques",
            "schedule": "Thursdays, 3:30 PM - 5:00 PM",
            "max_participants": 10,
            "participants": []
        }
    }"#;

    #[derive(Clone, Default)]
    pub(crate) struct Backend {
        pub participants: Arc<Mutex<HashMap<String, Vec<String>>>>,
        pub fail_participant_search: bool,
        pub activity_searches: Arc<AtomicUsize>,
        pub participant_searches: Arc<AtomicUsize>,
    }

    async fn activities() -> impl IntoResponse {
        ([(header::CONTENT_TYPE, "application/json")], ACTIVITIES_JSON)
    }

    // Echoes the decoded query first so tests can check encoding, then any
    // activity whose name contains it
    async fn search_activities(
        State(backend): State<Backend>,
        Query(params): Query<HashMap<String, String>>,
    ) -> impl IntoResponse {
        backend.activity_searches.fetch_add(1, Ordering::SeqCst);
        let query = params.get("query").cloned().unwrap_or_default();
        let mut hits = vec![json!({ "activity_name": query, "score": 100 })];
        for name in ["Chess Club", "Art Workshop"] {
            if name.to_lowercase().contains(&query) {
                hits.push(json!({ "activity_name": name, "score": 90 }));
            }
        }
        Json(hits)
    }

    async fn search_participants(
        State(backend): State<Backend>,
        Query(params): Query<HashMap<String, String>>,
    ) -> axum::response::Response {
        backend.participant_searches.fetch_add(1, Ordering::SeqCst);
        if backend.fail_participant_search {
            return (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response();
        }
        let query = params.get("query").cloned().unwrap_or_default();
        Json(json!([{ "email": format!("{query}@mergington.edu"), "score": 80 }])).into_response()
    }

    async fn signup(
        State(backend): State<Backend>,
        Path(activity): Path<String>,
        Query(params): Query<HashMap<String, String>>,
    ) -> axum::response::Response {
        let email = params.get("email").cloned().unwrap_or_default();
        let mut all = backend.participants.lock().unwrap();
        let Some(list) = all.get_mut(&activity) else {
            return (StatusCode::NOT_FOUND, Json(json!({ "detail": "Activity not found" }))).into_response();
        };
        if list.contains(&email) {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "detail": "Student already signed up for this activity" })),
            )
                .into_response();
        }
        list.push(email.clone());
        Json(json!({ "message": format!("Signed up {email} for {activity}") })).into_response()
    }

    async fn remove(
        State(backend): State<Backend>,
        Path(activity): Path<String>,
        Query(params): Query<HashMap<String, String>>,
    ) -> axum::response::Response {
        let email = params.get("email").cloned().unwrap_or_default();
        let mut all = backend.participants.lock().unwrap();
        let Some(list) = all.get_mut(&activity) else {
            return (StatusCode::NOT_FOUND, Json(json!({ "detail": "Activity not found" }))).into_response();
        };
        let Some(pos) = list.iter().position(|e| *e == email) else {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "detail": "Student not signed up for this activity" })),
            )
                .into_response();
        };
        list.remove(pos);
        Json(json!({ "message": format!("Removed {email} from {activity}") })).into_response()
    }

    /// Local stand-in for the activities backend
    pub(crate) async fn spawn_backend(backend: Backend) -> SocketAddr {
        let app = Router::new()
            .route("/activities", get(activities))
            .route("/search/activities", get(search_activities))
            .route("/search/participants", get(search_participants))
            .route("/activities/:name/signup", post(signup))
            .route("/activities/:name/remove", post(remove))
            .route("/broken/activities", get(|| async { "not json" }))
            .route(
                "/failing/activities",
                get(|| async {
                    (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "detail": "Database unavailable" })))
                }),
            )
            .with_state(backend);
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");
        tokio::spawn(async move {
            let _ = axum::serve(listener, app.into_make_service()).await;
        });
        addr
    }

    pub(crate) fn backend_with(activity: &str, emails: &[&str]) -> Backend {
        let backend = Backend::default();
        backend.participants.lock().unwrap().insert(
            activity.to_string(),
            emails.iter().map(|e| e.to_string()).collect(),
        );
        backend
    }

    fn client(addr: SocketAddr) -> ApiClient {
        ApiClient::new(&format!("http://{addr}")).expect("client")
    }

    #[test]
    fn rejects_unusable_base_urls() {
        assert!(matches!(
            ApiClient::new("not a url"),
            Err(ApiError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            ApiClient::new("mailto:someone@example.com"),
            Err(ApiError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn endpoint_encodes_activity_as_one_segment() {
        let api = ApiClient::new("http://localhost:8000/").expect("client");
        let url = api
            .endpoint(ACTIVITIES_PATH, &["Chess Club/A&B", SIGNUP_ACTION])
            .expect("url");
        assert_eq!(url.as_str(), "http://localhost:8000/activities/Chess%20Club%2FA&B/signup");

        let api = ApiClient::new("http://localhost:8000/school").expect("client");
        let url = api.endpoint(SEARCH_ACTIVITIES_PATH, &[]).expect("url");
        assert_eq!(url.as_str(), "http://localhost:8000/school/search/activities");
    }

    #[tokio::test]
    async fn fetch_activities_keeps_server_order() {
        let addr = spawn_backend(Backend::default()).await;
        let snapshot = client(addr).fetch_activities().await.expect("fetch");
        let names: Vec<&str> = snapshot.names().collect();
        assert_eq!(names, vec!["Chess Club", "Art Workshop"]);
        let chess = snapshot.get("Chess Club").expect("chess");
        assert_eq!(chess.spots_left(), 10);
    }

    #[tokio::test]
    async fn fetch_activities_reports_malformed_body() {
        let addr = spawn_backend(Backend::default()).await;
        let api = ApiClient::new(&format!("http://{addr}/broken")).expect("client");
        let err = api.fetch_activities().await.expect_err("malformed");
        assert!(matches!(err, ApiError::Malformed(_)));
    }

    #[tokio::test]
    async fn fetch_activities_reports_server_error_with_detail() {
        let addr = spawn_backend(Backend::default()).await;
        let api = ApiClient::new(&format!("http://{addr}/failing")).expect("client");
        let err = api.fetch_activities().await.expect_err("server error");
        assert!(matches!(err, ApiError::Protocol { status: 500, .. }));
        assert_eq!(err.detail(), Some("Database unavailable"));
    }

    #[tokio::test]
    async fn fetch_activities_reports_network_failure() {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");
        drop(listener);
        let err = client(addr).fetch_activities().await.expect_err("refused");
        assert!(matches!(err, ApiError::Network(_)));
    }

    #[tokio::test]
    async fn search_sends_escaped_query_to_both_endpoints() {
        let addr = spawn_backend(Backend::default()).await;
        let results = client(addr).search("chess & club?").await;
        assert_eq!(results.activity_results.len(), 1);
        assert_eq!(results.activity_results[0].activity_name, "chess & club?");
        assert_eq!(
            results.participant_results[0].email,
            "chess & club?@mergington.edu"
        );
    }

    #[tokio::test]
    async fn search_is_all_or_nothing() {
        let backend = Backend {
            fail_participant_search: true,
            ..Backend::default()
        };
        let addr = spawn_backend(backend).await;
        let api = client(addr);
        assert!(api.search_activities("chess").await.is_ok());
        let results = api.search("chess").await;
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn signup_returns_server_message() {
        let backend = backend_with("Chess Club", &[]);
        let addr = spawn_backend(backend.clone()).await;
        let request = SignupRequest {
            email: "a+b@x.com".into(),
            activity: "Chess Club".into(),
        };
        let message = client(addr).signup(&request).await.expect("signup");
        assert_eq!(message, "Signed up a+b@x.com for Chess Club");
        assert_eq!(
            backend.participants.lock().unwrap()["Chess Club"],
            vec!["a+b@x.com".to_string()]
        );
    }

    #[tokio::test]
    async fn signup_failure_carries_detail() {
        let addr = spawn_backend(backend_with("Chess Club", &["a@x.com"])).await;
        let api = client(addr);
        let request = SignupRequest {
            email: "a@x.com".into(),
            activity: "Chess Club".into(),
        };
        let err = api.signup(&request).await.expect_err("duplicate");
        assert!(matches!(err, ApiError::Protocol { status: 400, .. }));
        assert_eq!(err.detail(), Some("Student already signed up for this activity"));

        let missing = SignupRequest {
            email: "a@x.com".into(),
            activity: "Chess".into(),
        };
        let err = api.signup(&missing).await.expect_err("not found");
        assert_eq!(err.detail(), Some("Activity not found"));
    }

    #[tokio::test]
    async fn unregister_removes_participant() {
        let backend = backend_with("Chess Club", &["a@x.com", "b@x.com"]);
        let addr = spawn_backend(backend.clone()).await;
        let request = SignupRequest {
            email: "a@x.com".into(),
            activity: "Chess Club".into(),
        };
        let message = client(addr).unregister(&request).await.expect("remove");
        assert_eq!(message, "Removed a@x.com from Chess Club");
        assert_eq!(
            backend.participants.lock().unwrap()["Chess Club"],
            vec!["b@x.com".to_string()]
        );
    }
}
