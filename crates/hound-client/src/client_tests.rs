//! Tests for the HTTP transport against a mocked Sighthound API.

use std::time::Duration;

use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use hound_models::{extract_faces, extract_metadata, extract_people, extract_vehicles, ObjectKind};

use crate::client::{submit, HoundClient};
use crate::config::HoundConfig;
use crate::error::HoundError;

// =============================================================================
// Test Helpers
// =============================================================================

const MOCK_API_KEY: &str = "mock_api_key";
const MOCK_BYTES: &[u8] = b"Test";
const B64_ENCODED_MOCK_BYTES: &str = "VGVzdA==";

fn detections() -> Value {
    json!({
        "image": {"width": 960, "height": 480, "orientation": 1},
        "objects": [
            {
                "type": "face",
                "boundingBox": {"x": 305, "y": 151, "height": 28, "width": 30},
                "attributes": {"gender": "male", "age": 33, "frontal": true}
            },
            {
                "type": "person",
                "boundingBox": {"x": 227, "y": 133, "height": 245, "width": 125}
            }
        ],
        "requestId": "467f195c4bbf46c69f964b59884dee04"
    })
}

fn recognition() -> Value {
    json!({
        "image": {"width": 960, "height": 480, "orientation": 1},
        "objects": [{
            "objectType": "vehicle",
            "vehicleAnnotation": {
                "bounding": {"vertices": [
                    {"x": 494, "y": 294}, {"x": 542, "y": 294},
                    {"x": 542, "y": 318}, {"x": 494, "y": 318}
                ]},
                "recognitionConfidence": 0.81,
                "attributes": {"system": {
                    "make": {"name": "Toyota", "confidence": 0.9},
                    "model": {"name": "Prius", "confidence": 0.8},
                    "color": {"name": "White", "confidence": 0.7},
                    "vehicleType": "car"
                }}
            }
        }],
        "requestId": "r-2"
    })
}

fn client_for(server: &MockServer, endpoint: &str) -> HoundClient {
    let config = HoundConfig::new(MOCK_API_KEY, "dev", endpoint)
        .unwrap()
        .base_url(server.uri());
    HoundClient::new(config).unwrap()
}

// =============================================================================
// submit
// =============================================================================

#[tokio::test]
async fn test_submit_sends_token_params_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/detections"))
        .and(header("X-Access-Token", MOCK_API_KEY))
        .and(header("content-type", "application/json"))
        .and(query_param("type", "all"))
        .and(query_param("faceOption", "gender,age"))
        .and(body_json(json!({"image": B64_ENCODED_MOCK_BYTES})))
        .respond_with(ResponseTemplate::new(200).set_body_json(detections()))
        .expect(1)
        .mount(&server)
        .await;

    let url = format!("{}/v1/detections", server.uri());
    let body = submit(
        &reqwest::Client::new(),
        B64_ENCODED_MOCK_BYTES,
        MOCK_API_KEY,
        &url,
        &[("type", "all"), ("faceOption", "gender,age")],
        Duration::from_secs(5),
    )
    .await
    .unwrap();

    assert_eq!(body, detections());
}

#[tokio::test]
async fn test_submit_non_json_body_is_schema_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let url = format!("{}/v1/detections", server.uri());
    let err = submit(
        &reqwest::Client::new(),
        B64_ENCODED_MOCK_BYTES,
        MOCK_API_KEY,
        &url,
        &[],
        Duration::from_secs(5),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, HoundError::Schema(_)));
}

// =============================================================================
// detect
// =============================================================================

#[tokio::test]
async fn test_detect_good() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/detections"))
        .and(query_param("type", "all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(detections()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, "detections");
    let response = client.detect(MOCK_BYTES).await.unwrap();

    assert_eq!(response.objects.len(), 2);
    assert_eq!(extract_faces(&response).unwrap()[0].age, 33);
    assert_eq!(extract_people(&response).unwrap().len(), 1);
    assert_eq!(
        extract_metadata(&response).unwrap().request_id,
        "467f195c4bbf46c69f964b59884dee04"
    );
}

#[tokio::test]
async fn test_detect_bad_key() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_json(detections()))
        .mount(&server)
        .await;

    let err = client_for(&server, "detections")
        .detect(MOCK_BYTES)
        .await
        .unwrap_err();

    assert!(matches!(err, HoundError::Authentication));
    assert_eq!(err.to_string(), "Bad API key for Sighthound");
}

#[tokio::test]
async fn test_detect_server_error_carries_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = client_for(&server, "detections")
        .detect(MOCK_BYTES)
        .await
        .unwrap_err();

    match err {
        HoundError::Request { status, reason } => {
            assert_eq!(status, 500);
            assert_eq!(reason, "Internal Server Error");
        }
        other => panic!("expected Request error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_detect_missing_objects_is_schema_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"image": {"width": 1, "height": 1}, "requestId": "x"})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server, "detections")
        .detect(MOCK_BYTES)
        .await
        .unwrap_err();

    assert!(matches!(err, HoundError::Schema(_)));
}

#[tokio::test]
async fn test_detect_on_recognition_endpoint_uses_plate_params() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/recognition"))
        .and(query_param("objectType", "licenseplate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(recognition()))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server, "recognition")
        .detect(MOCK_BYTES)
        .await
        .unwrap();
    assert_eq!(response.request_id.as_deref(), Some("r-2"));
}

#[tokio::test]
async fn test_detect_timeout_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(detections())
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let err = client_for(&server, "detections")
        .detect_with_timeout(MOCK_BYTES, Duration::from_millis(50))
        .await
        .unwrap_err();

    assert!(matches!(err, HoundError::Transport(_)));
    assert!(err.is_timeout());
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let config = HoundConfig::new(MOCK_API_KEY, "dev", "detections")
        .unwrap()
        .base_url("http://127.0.0.1:1");
    let client = HoundClient::new(config).unwrap();

    let err = client.detect(MOCK_BYTES).await.unwrap_err();
    assert!(matches!(err, HoundError::Transport(_)));
    assert_eq!(err.http_status(), None);
}

#[tokio::test]
async fn test_error_status_with_truncated_body_keeps_status() {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    // Announce a longer body than is sent, then hang up.
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.ends_with(b"}") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        socket
            .write_all(b"HTTP/1.1 503 Service Unavailable\r\nContent-Length: 100\r\n\r\npartial")
            .await
            .unwrap();
        socket.shutdown().await.unwrap();
    });

    let config = HoundConfig::new(MOCK_API_KEY, "dev", "detections")
        .unwrap()
        .base_url(format!("http://{}", addr));
    let client = HoundClient::new(config).unwrap();

    let err = client.detect(MOCK_BYTES).await.unwrap_err();
    match err {
        HoundError::Request { status, reason } => {
            assert_eq!(status, 503);
            assert_eq!(reason, "Service Unavailable");
        }
        other => panic!("expected Request error, got {:?}", other),
    }
}

// =============================================================================
// recognize
// =============================================================================

#[tokio::test]
async fn test_recognize_query_style() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/recognition"))
        .and(query_param("objectType", "vehicle"))
        .and(header("X-Access-Token", MOCK_API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(recognition()))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server, "detections")
        .recognize(MOCK_BYTES, ObjectKind::Vehicle)
        .await
        .unwrap();

    let vehicles = extract_vehicles(&response).unwrap();
    assert_eq!(vehicles.len(), 1);
    assert_eq!(vehicles[0].make, "Toyota");
    assert_eq!(vehicles[0].licenseplate, "unknown");
    assert_eq!(vehicles[0].region, "unknown");
    assert_eq!(
        vehicles[0].bounding_box.to_relative(960, 480).as_tuple(),
        (0.6125, 0.51458, 0.6625, 0.56458)
    );
}

#[tokio::test]
async fn test_recognize_path_style() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/recognition/vehicle"))
        .respond_with(ResponseTemplate::new(200).set_body_json(recognition()))
        .expect(1)
        .mount(&server)
        .await;

    let config = HoundConfig::new(MOCK_API_KEY, "dev", "recognition")
        .unwrap()
        .recognition_style(hound_models::RecognitionStyle::Path)
        .base_url(server.uri());
    let client = HoundClient::new(config).unwrap();

    let response = client.recognize(MOCK_BYTES, ObjectKind::Vehicle).await.unwrap();
    assert_eq!(response.count(ObjectKind::Vehicle), 1);
}

#[tokio::test]
async fn test_client_is_reusable() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(detections()))
        .expect(3)
        .mount(&server)
        .await;

    let client = client_for(&server, "detections");
    let cloned = client.clone();
    for c in [&client, &cloned, &client] {
        c.detect(MOCK_BYTES).await.unwrap();
    }
}
