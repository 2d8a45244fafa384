mod harness;

use harness::config::ConfigBuilder;
use harness::mock_provider::{MockProvider, MockReply};
use harness::server::{TestServer, unreachable_base_url};
use vista_client::{GenerationRequest, ImageSlot, VistaClient, VistaClientError};

fn page_slots() -> Vec<ImageSlot> {
    vec![
        ImageSlot::new("hero", "Englishman's Bay, turquoise water, aerial"),
        ImageSlot::new("sunset", "Store Bay at sunset"),
        ImageSlot::new("nylon", "Nylon Pool shallow reef"),
        ImageSlot::new("food", "Tobago crab and dumpling"),
        ImageSlot::new("culture", "steel pan band on the beach"),
    ]
}

#[tokio::test]
async fn generate_image_returns_data_uri() {
    let mock = MockProvider::with_image(&[0xFF, 0xD8, 0xFF]).await.unwrap();
    let server = TestServer::start(ConfigBuilder::new(&mock.base_url()).build()).await.unwrap();
    let client = VistaClient::new(&server.base_url()).unwrap();

    let result = client
        .generate_image(&GenerationRequest::new("sunny beach").with_size("1920x1080"))
        .await
        .unwrap();

    assert!(result.success);
    assert_eq!(result.image_url, "data:image/jpeg;base64,/9j/");
    assert!(result.error.is_none());
}

#[tokio::test]
async fn generate_image_reports_fallback_as_ok() {
    let mock = MockProvider::start(MockReply::TextError(503, "busy".to_owned())).await.unwrap();
    let server = TestServer::start(ConfigBuilder::new(&mock.base_url()).build()).await.unwrap();
    let client = VistaClient::new(&server.base_url()).unwrap();

    let result = client.generate_image(&GenerationRequest::new("x")).await.unwrap();

    assert!(!result.success);
    assert!(result.image_url.starts_with("https://picsum.photos/1920/1080?random="));
}

#[tokio::test]
async fn empty_prompt_surfaces_as_api_error() {
    let mock = MockProvider::with_image(&[0xFF]).await.unwrap();
    let server = TestServer::start(ConfigBuilder::new(&mock.base_url()).build()).await.unwrap();
    let client = VistaClient::new(&server.base_url()).unwrap();

    let err = client.generate_image(&GenerationRequest::new("")).await.unwrap_err();

    match err {
        VistaClientError::Api { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Prompt is required");
        }
        other => panic!("expected API error, got {other:?}"),
    }
    assert_eq!(mock.request_count(), 0);
}

#[tokio::test]
async fn resolve_slots_keeps_order_and_calls_once_per_slot() {
    let mock = MockProvider::with_image(&[0xFF, 0xD8, 0xFF]).await.unwrap();
    let server = TestServer::start(ConfigBuilder::new(&mock.base_url()).build()).await.unwrap();
    let client = VistaClient::new(&server.base_url()).unwrap();

    let resolved = client.resolve_slots(&page_slots()).await;

    let keys: Vec<&str> = resolved.keys().map(String::as_str).collect();
    assert_eq!(keys, ["hero", "sunset", "nylon", "food", "culture"]);
    assert!(resolved.values().all(|url| url == "data:image/jpeg;base64,/9j/"));
    assert_eq!(mock.request_count(), 5);
}

#[tokio::test]
async fn resolve_slots_uses_placeholders_when_proxy_unreachable() {
    let base = unreachable_base_url().await;
    let base = base.trim_end_matches("/v2");
    let client = VistaClient::new(base).unwrap();

    let resolved = client.resolve_slots(&page_slots()).await;

    assert_eq!(resolved.len(), 5);
    assert!(
        resolved
            .values()
            .all(|url| url.starts_with("https://picsum.photos/1920/1080?random="))
    );
}
