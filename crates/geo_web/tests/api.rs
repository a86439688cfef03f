use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use geo_core::{Endpoint, Error, GenerativeModel, NewsSource, RawArticle, RawSource, Result};
use geo_inference::AnalysisGenerator;
use geo_news::NewsAggregator;
use geo_web::{create_app, serve, AppState};
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tower::ServiceExt;

struct StubSource {
    configured: bool,
    calls: AtomicUsize,
}

#[async_trait]
impl NewsSource for StubSource {
    fn name(&self) -> &str {
        "stub"
    }

    fn ensure_configured(&self) -> Result<()> {
        if self.configured {
            Ok(())
        } else {
            Err(Error::Configuration("News API key is not configured".to_string()))
        }
    }

    async fn fetch(&self, endpoint: &Endpoint) -> Result<Vec<RawArticle>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match endpoint {
            Endpoint::Everything { query } => Err(Error::upstream(
                endpoint.label(),
                format!("500 while searching {}", query),
            )),
            Endpoint::CountryHeadlines { country, .. } => Ok(vec![article(
                &format!("Headline from {}", country),
                "2024-05-02T08:00:00Z",
            )]),
            Endpoint::CategoryHeadlines { category } => Ok(vec![
                article(&format!("Top {} story", category), "2024-05-03T08:00:00Z"),
                article("Headline from in", "2024-05-04T08:00:00Z"),
            ]),
        }
    }
}

fn article(title: &str, published_at: &str) -> RawArticle {
    RawArticle {
        title: Some(title.to_string()),
        description: Some("short".to_string()),
        url: Some(format!("https://news.example/{}", title.len())),
        source: Some(RawSource {
            id: None,
            name: Some("Stub Wire".to_string()),
        }),
        published_at: Some(published_at.to_string()),
        ..RawArticle::default()
    }
}

#[derive(Debug)]
enum StubModel {
    Reply(&'static str),
    Fail,
    Unconfigured,
}

#[async_trait]
impl GenerativeModel for StubModel {
    fn name(&self) -> &str {
        "stub-model"
    }

    async fn generate(&self, _prompt: &str) -> Result<String> {
        match self {
            StubModel::Reply(text) => Ok(text.to_string()),
            StubModel::Fail => Err(Error::Generation("quota exceeded".to_string())),
            StubModel::Unconfigured => Err(Error::Configuration(
                "Gemini API key is not configured".to_string(),
            )),
        }
    }
}

fn state_with(source: Arc<StubSource>, model: StubModel) -> AppState {
    AppState::new(
        NewsAggregator::new(source),
        AnalysisGenerator::new(Arc::new(model)),
    )
}

fn app_with(source: Arc<StubSource>, model: StubModel) -> Router {
    create_app(state_with(source, model))
}

fn app(model: StubModel) -> Router {
    app_with(
        Arc::new(StubSource {
            configured: true,
            calls: AtomicUsize::new(0),
        }),
        model,
    )
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn analyze_request(body: &str) -> Request<Body> {
    Request::post("/api/analyze")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn news_endpoint_merges_surviving_endpoints() {
    let (status, body) = send(
        app(StubModel::Fail),
        Request::get("/api/news").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalResults"], 2);
    assert_eq!(body["message"], "Found 2 recent geopolitical news articles");

    let articles = body["articles"].as_array().unwrap();
    assert_eq!(articles[0]["title"], "Top general story");
    assert_eq!(articles[1]["title"], "Headline from in");
    // The first copy of a duplicated title wins.
    assert_eq!(articles[1]["publishedAt"], "2024-05-02T08:00:00Z");
    assert_eq!(articles[1]["id"], "article-0");
    assert_eq!(articles[1]["source"]["name"], "Stub Wire");
    assert!(articles[1]["description"].as_str().unwrap().len() >= 50);
}

#[tokio::test]
async fn news_endpoint_uses_query_parameters() {
    let (status, body) = send(
        app(StubModel::Fail),
        Request::get("/api/news?q=trade&country=us&category=business")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let titles: Vec<&str> = body["articles"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Headline from in", "Top business story", "Headline from us"]);
}

#[tokio::test]
async fn news_endpoint_reports_missing_key() {
    let source = Arc::new(StubSource {
        configured: false,
        calls: AtomicUsize::new(0),
    });
    let (status, body) = send(
        app_with(source.clone(), StubModel::Fail),
        Request::get("/api/news").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "News API key is not configured");
    assert_eq!(source.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn analyze_endpoint_returns_parsed_report() {
    let (status, body) = send(
        app(StubModel::Reply(
            "```json\n{\"summary\":\"S\",\"sentiment\":\"positive\"}\n```",
        )),
        analyze_request(r#"{"title":"India-China border talks resume","content":"Talks resumed."}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["summary"], "S");
    assert_eq!(body["sentiment"], "positive");
    assert_eq!(body["geopoliticalContext"], "Context analysis provided");
    assert_eq!(body["impactForIndia"], "Impact analysis provided");
    assert_eq!(body["keyTakeaways"], Value::Array(vec![]));
    assert_eq!(body["timeline"], "Medium-term");
}

#[tokio::test]
async fn analyze_endpoint_accepts_description_fallback() {
    let (status, body) = send(
        app(StubModel::Reply("plain text answer")),
        analyze_request(
            r#"{"title":"India-China border talks resume","content":"","description":"Recent border dialogue"}"#,
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["summary"], "plain text answer");
    assert_eq!(body["sentiment"], "neutral");
}

#[tokio::test]
async fn analyze_endpoint_rejects_missing_fields() {
    for payload in [r#"{"title":"X","content":""}"#, r#"{"content":"Body"}"#, "not json"] {
        let (status, body) = send(app(StubModel::Reply("{}")), analyze_request(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "payload {}", payload);
        assert_eq!(body["error"], "Title and content are required");
    }
}

#[tokio::test]
async fn analyze_endpoint_reports_model_failures() {
    let (status, body) = send(
        app(StubModel::Fail),
        analyze_request(r#"{"title":"T","content":"C"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to analyze article");

    let (status, body) = send(
        app(StubModel::Unconfigured),
        analyze_request(r#"{"title":"T","content":"C"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Gemini API key is not configured");
}

#[tokio::test]
async fn health_endpoint() {
    let (status, body) = send(
        app(StubModel::Fail),
        Request::get("/api/health").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn serve_reports_bind_failure_as_io_error() {
    let taken = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = taken.local_addr().unwrap();
    let state = state_with(
        Arc::new(StubSource {
            configured: true,
            calls: AtomicUsize::new(0),
        }),
        StubModel::Fail,
    );

    let err = serve(addr, state).await.unwrap_err();
    assert!(matches!(err, Error::Io(_)), "unexpected error: {}", err);
}
