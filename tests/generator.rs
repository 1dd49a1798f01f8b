use folio::config::GeneratorConfig;
use folio::constants::{GENERATOR_EMPTY, GENERATOR_FAILED, GENERATOR_MISSING_KEY};
use folio::entities::Category;
use folio::generator::gemini::parse_response;
use folio::generator::{build_prompt, DescriptionGenerator, DescriptionService, GeneratorError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Generator returning a canned outcome and counting calls.
struct FakeGenerator {
    outcome: Result<String, u16>,
    calls: AtomicUsize,
}

impl FakeGenerator {
    fn answering(text: &str) -> Arc<Self> {
        Arc::new(Self {
            outcome: Ok(text.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    fn failing(status: u16) -> Arc<Self> {
        Arc::new(Self {
            outcome: Err(status),
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait::async_trait]
impl DescriptionGenerator for FakeGenerator {
    async fn generate(&self, _title: &str, _category: Category) -> Result<String, GeneratorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            Ok(text) => Ok(text.clone()),
            Err(status) => Err(GeneratorError::ApiResponse {
                status: *status,
                body: "quota".to_string(),
            }),
        }
    }
}

#[test]
fn test_prompt_contents() {
    let prompt = build_prompt("Bamboo Pavilion", Category::Pavilion);
    assert!(prompt.contains("2-sentence description"));
    assert!(prompt.contains("Project Title: Bamboo Pavilion"));
    assert!(prompt.contains("Category: Pavilion"));
    assert!(prompt.contains("elegant, minimalist, and visionary"));
    assert!(prompt.contains("Do not use hashtags."));

    let prompt = build_prompt("Floating City", Category::ConceptWorks);
    assert!(prompt.contains("Category: Concept Works"));
}

#[test]
fn test_parse_response_joins_parts() {
    let body = r#"{
        "candidates": [
            {"content": {"parts": [{"text": "Woven light. "}, {"text": "A quiet canopy."}], "role": "model"}},
            {"content": {"parts": [{"text": "ignored"}]}}
        ]
    }"#;
    assert_eq!(parse_response(body).unwrap(), "Woven light. A quiet canopy.");
}

#[test]
fn test_parse_response_without_text() {
    assert_eq!(parse_response(r#"{"candidates": []}"#).unwrap(), "");
    assert_eq!(parse_response("{}").unwrap(), "");
    assert_eq!(
        parse_response(r#"{"candidates": [{"finishReason": "SAFETY"}]}"#).unwrap(),
        ""
    );
}

#[test]
fn test_parse_response_rejects_invalid_json() {
    let err = parse_response("<html>bad gateway</html>").unwrap_err();
    assert!(matches!(err, GeneratorError::ApiParse(_)));
}

#[tokio::test]
async fn test_unavailable_service_returns_missing_key_text() {
    let service = DescriptionService::unavailable();
    assert!(!service.is_available());
    assert_eq!(
        service.describe("Minimalist Loft", Category::Interior).await,
        GENERATOR_MISSING_KEY
    );
}

#[tokio::test]
async fn test_blank_api_key_is_unavailable() {
    let config = GeneratorConfig::default();
    let service = DescriptionService::with_api_key("   ".to_string(), &config);
    assert!(!service.is_available());
    assert_eq!(
        service.describe("Sky Deck", Category::Pavilion).await,
        GENERATOR_MISSING_KEY
    );
}

#[tokio::test]
async fn test_api_key_builds_client() {
    let config = GeneratorConfig::default();
    let service = DescriptionService::with_api_key("test-key".to_string(), &config);
    assert!(service.is_available());
}

#[tokio::test]
async fn test_service_passes_generated_text_through() {
    let fake = FakeGenerator::answering("A serene study in timber.");
    let service = DescriptionService::new(fake.clone());

    let text = service.describe("Loft", Category::Interior).await;
    assert_eq!(text, "A serene study in timber.");
    assert_eq!(fake.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_service_maps_failures_to_placeholders() {
    let failing = DescriptionService::new(FakeGenerator::failing(429));
    assert_eq!(failing.describe("Loft", Category::Interior).await, GENERATOR_FAILED);

    let empty = DescriptionService::new(FakeGenerator::answering("  \n"));
    assert_eq!(empty.describe("Loft", Category::Interior).await, GENERATOR_EMPTY);
}

#[tokio::test]
async fn test_service_makes_one_attempt_per_call() {
    let fake = FakeGenerator::failing(500);
    let service = DescriptionService::new(fake.clone());
    service.describe("Kiosk", Category::Exhibition).await;
    service.describe("Kiosk", Category::Exhibition).await;
    assert_eq!(fake.calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_error_messages() {
    let err = GeneratorError::ApiResponse {
        status: 403,
        body: "denied".to_string(),
    };
    assert_eq!(err.to_string(), "API response error: status 403");
    assert_eq!(
        GeneratorError::ApiRequest("timed out".to_string()).to_string(),
        "API request failed: timed out"
    );
}
