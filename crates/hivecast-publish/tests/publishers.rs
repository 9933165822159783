//! Integration tests for the platform publishers using wiremock HTTP mocks.

use hivecast_core::{
    GeneratedContent, ImageReference, MicroPost, PinCopy, Platform, ThreadPost,
};
use hivecast_publish::{PinterestPublisher, ThreadsPublisher, TwitterPublisher};
use wiremock::matchers::{any, body_json, body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn content() -> GeneratedContent {
    GeneratedContent {
        pinterest: PinCopy {
            title: "The 3-Day Honey Protocol".to_string(),
            description: "Fix your gut with raw honey.".to_string(),
            hashtags: vec!["#honey".to_string(), "#health".to_string()],
        },
        twitter: MicroPost {
            text: "Why athletes swear by this honey hack".to_string(),
            hashtags: vec!["#honey".to_string()],
        },
        threads: ThreadPost {
            text: "The honey trick that speeds up fat loss".to_string(),
            hashtags: vec!["#honey".to_string()],
        },
    }
}

fn image() -> ImageReference {
    ImageReference {
        url: "https://via.placeholder.com/1000x1333/FFB800/000000?text=FIX%20YOUR%20GUT"
            .to_string(),
        alt: "FIX YOUR GUT".to_string(),
    }
}

fn pinterest(base_url: &str, token: Option<&str>) -> PinterestPublisher {
    PinterestPublisher::with_base_url(
        token.map(ToOwned::to_owned),
        "https://amzn.to/4sklUiK".to_string(),
        30,
        base_url,
    )
    .expect("publisher construction should not fail")
}

fn twitter(base_url: &str, token: Option<&str>) -> TwitterPublisher {
    TwitterPublisher::with_base_url(token.map(ToOwned::to_owned), 30, base_url)
        .expect("publisher construction should not fail")
}

fn threads(base_url: &str, token: Option<&str>) -> ThreadsPublisher {
    ThreadsPublisher::with_base_url(token.map(ToOwned::to_owned), 30, base_url)
        .expect("publisher construction should not fail")
}

// -- Pinterest --

#[tokio::test]
async fn pinterest_without_credential_makes_no_calls() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let result = pinterest(&server.uri(), None).publish(&content(), &image()).await;

    assert!(!result.success);
    assert_eq!(result.error.as_deref(), Some("not configured"));
    assert!(result.id.is_none());
}

#[tokio::test]
async fn pinterest_success_returns_provider_pin_id() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/pins"))
        .and(header("authorization", "Bearer pin-token"))
        .and(body_partial_json(serde_json::json!({
            "title": "The 3-Day Honey Protocol",
            "link": "https://amzn.to/4sklUiK",
            "media_source": { "source_type": "image_url" }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": "p1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = pinterest(&server.uri(), Some("pin-token"))
        .publish(&content(), &image())
        .await;

    assert!(result.success);
    assert_eq!(result.platform, Platform::Pinterest);
    assert_eq!(result.id.as_deref(), Some("p1"));
    assert!(result.error.is_none());
}

#[tokio::test]
async fn pinterest_appends_hashtags_to_the_description() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/pins"))
        .and(body_partial_json(serde_json::json!({
            "description": "Fix your gut with raw honey.\n\n#honey #health"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": "p2"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = pinterest(&server.uri(), Some("pin-token"))
        .publish(&content(), &image())
        .await;

    assert!(result.success);
}

#[tokio::test]
async fn pinterest_non_2xx_is_a_failed_result() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/pins"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = pinterest(&server.uri(), Some("pin-token"))
        .publish(&content(), &image())
        .await;

    assert!(!result.success);
    assert!(result.error.is_some());
}

#[tokio::test]
async fn pinterest_malformed_body_is_a_failed_result() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/pins"))
        .respond_with(ResponseTemplate::new(201).set_body_string("not json"))
        .mount(&server)
        .await;

    let result = pinterest(&server.uri(), Some("pin-token"))
        .publish(&content(), &image())
        .await;

    assert!(!result.success);
}

// -- Twitter --

#[tokio::test]
async fn twitter_without_credential_makes_no_calls() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let result = twitter(&server.uri(), None).publish(&content(), &image()).await;

    assert!(!result.success);
    assert_eq!(result.error.as_deref(), Some("not configured"));
}

#[tokio::test]
async fn twitter_attaches_uploaded_media_to_the_post() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/2/media/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "media_id": "mm1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/2/tweets"))
        .and(body_partial_json(serde_json::json!({
            "media": { "media_ids": ["mm1"] }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "data": { "id": "m1" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = twitter(&server.uri(), Some("tw-token"))
        .publish(&content(), &image())
        .await;

    assert!(result.success);
    assert_eq!(result.id.as_deref(), Some("m1"));
}

#[tokio::test]
async fn twitter_upload_failure_still_posts_text_only() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/2/media/upload"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    // Exact body match: no media field may be present after a failed upload.
    Mock::given(method("POST"))
        .and(path("/2/tweets"))
        .and(body_json(serde_json::json!({
            "text": "Why athletes swear by this honey hack\n\n#honey"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "data": { "id": "m2" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = twitter(&server.uri(), Some("tw-token"))
        .publish(&content(), &image())
        .await;

    assert!(result.success);
    assert_eq!(result.id.as_deref(), Some("m2"));
}

#[tokio::test]
async fn twitter_post_failure_is_a_failed_result() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/2/media/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "media_id": "mm1"
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/2/tweets"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let result = twitter(&server.uri(), Some("tw-token"))
        .publish(&content(), &image())
        .await;

    assert!(!result.success);
    assert!(result.error.is_some());
}

// -- Threads --

#[tokio::test]
async fn threads_without_credential_makes_no_calls() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let result = threads(&server.uri(), None).publish(&content(), &image()).await;

    assert!(!result.success);
    assert_eq!(result.error.as_deref(), Some("not configured"));
}

#[tokio::test]
async fn threads_create_then_publish_returns_final_id() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/me/threads"))
        .and(body_partial_json(serde_json::json!({
            "access_token": "th-token",
            "media_type": "IMAGE"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "c1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/me/threads_publish"))
        .and(body_partial_json(serde_json::json!({
            "creation_id": "c1"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "t1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = threads(&server.uri(), Some("th-token"))
        .publish(&content(), &image())
        .await;

    assert!(result.success);
    assert_eq!(result.platform, Platform::Threads);
    assert_eq!(result.id.as_deref(), Some("t1"));
}

#[tokio::test]
async fn threads_create_failure_short_circuits_publish() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/me/threads"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/me/threads_publish"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "t-unreachable"
        })))
        .expect(0)
        .mount(&server)
        .await;

    let result = threads(&server.uri(), Some("th-token"))
        .publish(&content(), &image())
        .await;

    assert!(!result.success);
    assert!(result.error.is_some());
}

#[tokio::test]
async fn threads_empty_creation_id_short_circuits_publish() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/me/threads"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": ""
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/me/threads_publish"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "t-unreachable"
        })))
        .expect(0)
        .mount(&server)
        .await;

    let result = threads(&server.uri(), Some("th-token"))
        .publish(&content(), &image())
        .await;

    assert!(!result.success);
    assert_eq!(
        result.error.as_deref(),
        Some("API error: create step returned no creation id")
    );
}
