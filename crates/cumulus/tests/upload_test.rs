//! Tests for the upload operation and its request shaping.

use base64::Engine;
use cumulus::{
    Credentials, CumulusErrorKind, MediaStore, ResourceType, UploadOptions,
};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn upload_response() -> serde_json::Value {
    json!({
        "public_id": "gallery/uploaded",
        "version": 1700000002u64,
        "signature": "sig",
        "width": 640,
        "height": 480,
        "format": "png",
        "resource_type": "image",
        "created_at": "2024-02-01T12:00:00Z",
        "tags": ["a", "b"],
        "bytes": 2048,
        "type": "upload",
        "url": "http://res.example.com/demo/image/upload/v1700000002/gallery/uploaded.png",
        "secure_url": "https://res.example.com/demo/image/upload/v1700000002/gallery/uploaded.png",
    })
}

fn store_for(server: &MockServer) -> MediaStore {
    MediaStore::with_base_urls(
        Credentials::new("demo", "key", "secret"),
        server.uri(),
        "res.example.com",
    )
}

async fn sent_form(server: &MockServer) -> String {
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    String::from_utf8(requests[0].body.clone()).unwrap()
}

#[tokio::test]
async fn bare_base64_is_wrapped_as_a_png_data_uri() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/demo/image/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(upload_response()))
        .mount(&server)
        .await;

    let payload = base64::engine::general_purpose::STANDARD.encode("hello");
    assert_eq!(payload, "aGVsbG8=");

    let store = store_for(&server);
    let resource = store.upload(&payload, &UploadOptions::default()).await.unwrap();

    assert_eq!(resource.public_id, "gallery/uploaded");
    assert!(resource.universal_id.is_some());

    // file=data:image/png;base64,aGVsbG8= in form encoding
    let form = sent_form(&server).await;
    assert!(form.contains("file=data%3Aimage%2Fpng%3Bbase64%2CaGVsbG8%3D"));
    assert!(form.contains("signature_algorithm=sha256"));
    assert!(form.contains("api_key=key"));
}

#[tokio::test]
async fn remote_urls_are_submitted_untouched() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/demo/image/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(upload_response()))
        .mount(&server)
        .await;

    let store = store_for(&server);
    store
        .upload("https://example.com/cat.png", &UploadOptions::default())
        .await
        .unwrap();

    let form = sent_form(&server).await;
    assert!(form.contains("file=https%3A%2F%2Fexample.com%2Fcat.png"));
}

#[tokio::test]
async fn public_id_is_sanitized_and_tags_are_split() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/demo/image/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(upload_response()))
        .mount(&server)
        .await;

    let store = store_for(&server);
    store
        .upload(
            "aGVsbG8=",
            &UploadOptions {
                folder: Some("gallery".to_string()),
                public_id: Some("my photo.png".to_string()),
                tags: Some("a, b ,c".to_string()),
                overwrite: true,
                resource_type: ResourceType::Image,
            },
        )
        .await
        .unwrap();

    let form = sent_form(&server).await;
    assert!(form.contains("public_id=my_photo"));
    assert!(form.contains("tags=a%2Cb%2Cc"));
    assert!(form.contains("folder=gallery"));
    assert!(form.contains("overwrite=true"));
}

#[tokio::test]
async fn sanitized_to_empty_public_id_is_omitted() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/demo/image/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(upload_response()))
        .mount(&server)
        .await;

    let store = store_for(&server);
    store
        .upload(
            "aGVsbG8=",
            &UploadOptions {
                public_id: Some("!!!".to_string()),
                ..UploadOptions::default()
            },
        )
        .await
        .unwrap();

    let form = sent_form(&server).await;
    assert!(!form.contains("public_id="));
}

#[tokio::test]
async fn missing_api_secret_fails_without_any_request() {
    let server = MockServer::start().await;

    let store = MediaStore::with_base_urls(
        Credentials::new("demo", "key", ""),
        server.uri(),
        "res.example.com",
    );
    let err = store.upload("aGVsbG8=", &UploadOptions::default()).await.unwrap_err();

    assert!(matches!(err.kind(), CumulusErrorKind::Credential(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn empty_payload_fails_without_any_request() {
    let server = MockServer::start().await;

    let store = store_for(&server);
    let err = store.upload("", &UploadOptions::default()).await.unwrap_err();

    assert!(matches!(err.kind(), CumulusErrorKind::Validation(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn store_rejection_becomes_an_upload_error_with_context() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/demo/image/upload"))
        .respond_with(ResponseTemplate::new(400).set_body_string("Invalid image file"))
        .mount(&server)
        .await;

    let store = store_for(&server);
    let err = store
        .upload(
            "aGVsbG8=",
            &UploadOptions {
                folder: Some("gallery".to_string()),
                public_id: Some("shot".to_string()),
                ..UploadOptions::default()
            },
        )
        .await
        .unwrap_err();

    match err.kind() {
        CumulusErrorKind::Upload(upload_err) => {
            assert_eq!(upload_err.public_id.as_deref(), Some("shot"));
            assert_eq!(upload_err.folder.as_deref(), Some("gallery"));
            assert!(format!("{upload_err}").contains("Invalid image file"));
        }
        other => panic!("expected Upload error, got {other:?}"),
    }
}
