//! Authenticated settings operations against a mock backend.
//!
//! Run with: cargo test -p storedesk-integration-tests --test settings

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use secrecy::SecretString;
use serde_json::json;
use storedesk_client::{StoreApiError, TokenStore};
use storedesk_core::{
    CompanyInfoUpdate, FaqId, FaqInput, FileUpload, SecuritySettings, SocialLinks,
};
use storedesk_integration_tests::{TestBackend, api_path, authorization, body_text};
use wiremock::matchers::{any, body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

fn ok(body: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(body)
}

/// Mount a mock that fails the test if any request reaches the backend.
async fn forbid_requests(backend: &TestBackend) {
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&backend.server)
        .await;
}

// ============================================================================
// Bearer token
// ============================================================================

#[tokio::test]
async fn reads_without_token_send_literal_null_bearer() {
    let backend = TestBackend::start().await;

    Mock::given(any())
        .respond_with(ok(json!({"data": []})))
        .expect(9)
        .mount(&backend.server)
        .await;

    let client = &backend.client;
    client.get_shop_details().await.unwrap();
    client.get_company_details().await.unwrap();
    client.get_domain_details().await.unwrap();
    client.get_privacy_policy().await.unwrap();
    client.get_return_policy().await.unwrap();
    client.get_terms_and_conditions().await.unwrap();
    client.get_social_links().await.unwrap();
    client.get_faqs().await.unwrap();
    client.get_security_settings().await.unwrap();

    let requests = backend.requests().await;
    let paths: Vec<&str> = requests.iter().map(|r| r.url.path()).collect();
    assert_eq!(
        paths,
        [
            "/api/show",
            "/api/details",
            "/api/get-domain",
            "/api/privacy-policy",
            "/api/return-policy",
            "/api/terms-condition",
            "/api/sociallinks",
            "/api/faq",
            "/api/security-settings",
        ]
    );
    for request in &requests {
        assert_eq!(request.method.as_str(), "GET");
        assert_eq!(
            authorization(request),
            Some("Bearer null"),
            "{}",
            request.url.path()
        );
    }
}

#[tokio::test]
async fn signed_in_read_sends_stored_token() {
    let backend = TestBackend::signed_in("tok").await;

    Mock::given(method("GET"))
        .and(path(api_path("/show")))
        .and(header("Authorization", "Bearer tok"))
        .respond_with(ok(json!({"data": [{"shop_name": "Harbor"}]})))
        .expect(1)
        .mount(&backend.server)
        .await;

    let shop = backend.client.get_shop_details().await.unwrap();

    assert_eq!(shop.shop_name, "Harbor");
}

#[tokio::test]
async fn token_is_read_fresh_on_every_call() {
    let backend = TestBackend::signed_in("first").await;

    Mock::given(method("GET"))
        .and(path(api_path("/faq")))
        .respond_with(ok(json!({"data": []})))
        .mount(&backend.server)
        .await;

    backend.client.get_faqs().await.unwrap();
    backend
        .tokens
        .save(&SecretString::from("second"))
        .await
        .unwrap();
    backend.client.get_faqs().await.unwrap();

    let requests = backend.requests().await;
    assert_eq!(requests.len(), 2);
    assert_eq!(authorization(&requests[0]), Some("Bearer first"));
    assert_eq!(authorization(&requests[1]), Some("Bearer second"));
}

#[tokio::test]
async fn rejected_token_reports_fallback_and_status() {
    let backend = TestBackend::signed_in("stale").await;

    Mock::given(method("GET"))
        .and(path(api_path("/security-settings")))
        .respond_with(ResponseTemplate::new(401))
        .mount(&backend.server)
        .await;

    let err = backend.client.get_security_settings().await.unwrap_err();

    assert_eq!(err.to_string(), "Failed to fetch security settings");
    assert!(err.is_unauthorized());
}

// ============================================================================
// Company and shop
// ============================================================================

#[tokio::test]
async fn company_details_default_missing_fields() {
    let backend = TestBackend::signed_in("tok").await;

    Mock::given(method("GET"))
        .and(path(api_path("/details")))
        .and(header("Authorization", "Bearer tok"))
        .respond_with(ok(json!({"data": {"company_details": {"site_title": "X"}}})))
        .mount(&backend.server)
        .await;

    let details = backend.client.get_company_details().await.unwrap();
    let rendered = serde_json::to_value(&details).unwrap();

    assert_eq!(rendered["companyInfo"]["siteTitle"], "X");
    assert_eq!(rendered["companyInfo"]["siteEmail"], "");
    assert_eq!(rendered["companyInfo"]["currency"], "");
    assert!(rendered["companyInfo"]["logo"].is_null());
    assert!(rendered["companyInfo"]["favicon"].is_null());
    assert_eq!(rendered["businessDetails"]["businessName"], "");
    assert!(rendered["businessDetails"]["registrationDocument"].is_null());
}

#[tokio::test]
async fn company_update_is_multipart_with_optional_files() {
    let backend = TestBackend::signed_in("tok").await;

    Mock::given(method("POST"))
        .and(path(api_path("/update-details")))
        .respond_with(ok(json!({"message": "Company info updated"})))
        .expect(1)
        .mount(&backend.server)
        .await;

    let update = CompanyInfoUpdate {
        site_title: "Harbor Goods".to_string(),
        currency: Some("USD".to_string()),
        logo: Some(FileUpload::new("logo.png", vec![0x89, b'P', b'N', b'G'])),
        ..CompanyInfoUpdate::default()
    };
    let ack = backend.client.update_company_info(&update).await.unwrap();
    assert_eq!(ack.message, "Company info updated");

    let requests = backend.requests().await;
    let request = &requests[0];
    let content_type = request
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(content_type.starts_with("multipart/form-data"));

    let body = body_text(request);
    assert!(body.contains(r#"name="site_title""#));
    assert!(body.contains("Harbor Goods"));
    assert!(body.contains(r#"name="site_email""#));
    assert!(body.contains(r#"filename="logo.png""#));
    assert!(!body.contains(r#"name="favicon""#));
}

#[tokio::test]
async fn company_update_failure_uses_backend_message() {
    let backend = TestBackend::signed_in("tok").await;

    Mock::given(method("POST"))
        .and(path(api_path("/update-mybusinessdetails")))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_json(json!({"message": "The registration number has already been taken."})),
        )
        .mount(&backend.server)
        .await;

    let err = backend
        .client
        .update_business_registration(&storedesk_core::BusinessRegistrationUpdate {
            business_name: "Harbor LLC".to_string(),
            registration_number: "REG-1".to_string(),
            ..Default::default()
        })
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "The registration number has already been taken.");
    assert_eq!(err.status(), Some(422));
}

// ============================================================================
// Domain
// ============================================================================

#[tokio::test]
async fn invalid_domain_is_rejected_before_any_request() {
    let backend = TestBackend::signed_in("tok").await;
    forbid_requests(&backend).await;

    for domain in ["not-a-domain", "not a domain", "shop.c", ""] {
        let err = backend.client.update_domain(domain).await.unwrap_err();
        assert!(
            matches!(&err, StoreApiError::Validation(m) if m == "Please enter a valid domain name"),
            "{domain:?} gave {err:?}"
        );
    }

    assert!(backend.requests().await.is_empty());
}

#[tokio::test]
async fn valid_domain_is_submitted_trimmed() {
    let backend = TestBackend::signed_in("tok").await;

    Mock::given(method("POST"))
        .and(path(api_path("/update-domain")))
        .respond_with(ok(json!({"message": "Domain updated"})))
        .expect(1)
        .mount(&backend.server)
        .await;

    let ack = backend
        .client
        .update_domain("  shop.example.com ")
        .await
        .unwrap();
    assert_eq!(ack.message, "Domain updated");

    let body = body_text(&backend.requests().await[0]);
    assert!(body.contains(r#"name="domain""#));
    assert!(body.contains("\r\n\r\nshop.example.com\r\n"));
}

#[tokio::test]
async fn domain_details_accepts_numeric_flag() {
    let backend = TestBackend::signed_in("tok").await;

    Mock::given(method("GET"))
        .and(path(api_path("/get-domain")))
        .respond_with(ok(json!({"data": {"domain": "shop.example.com", "is_verified": "1"}})))
        .mount(&backend.server)
        .await;

    let details = backend.client.get_domain_details().await.unwrap();
    assert_eq!(details.domain, "shop.example.com");
    assert!(details.is_verified);
    assert_eq!(details.ssl_status, None);
}

// ============================================================================
// Policies
// ============================================================================

#[tokio::test]
async fn empty_terms_share_one_message_and_send_nothing() {
    let backend = TestBackend::signed_in("tok").await;
    forbid_requests(&backend).await;

    let blank = backend
        .client
        .update_terms_and_conditions("")
        .await
        .unwrap_err();
    let placeholder = backend
        .client
        .update_terms_and_conditions("<p><br></p>")
        .await
        .unwrap_err();

    assert_eq!(blank.to_string(), "Terms and conditions content cannot be empty");
    assert_eq!(blank.to_string(), placeholder.to_string());
    assert!(matches!(placeholder, StoreApiError::Validation(_)));
    assert!(backend.requests().await.is_empty());
}

#[tokio::test]
async fn policy_update_sends_named_field() {
    let backend = TestBackend::signed_in("tok").await;

    Mock::given(method("POST"))
        .and(path(api_path("/update-privacy-policy")))
        .respond_with(ok(json!({"message": "Privacy policy updated"})))
        .expect(1)
        .mount(&backend.server)
        .await;

    backend
        .client
        .update_privacy_policy("<p>We keep nothing.</p>")
        .await
        .unwrap();

    let body = body_text(&backend.requests().await[0]);
    assert!(body.contains(r#"name="privacy_policy""#));
    assert!(body.contains("<p>We keep nothing.</p>"));
}

#[tokio::test]
async fn policy_read_falls_back_to_generic_content() {
    let backend = TestBackend::signed_in("tok").await;

    Mock::given(method("GET"))
        .and(path(api_path("/return-policy")))
        .respond_with(ok(json!({"data": {"content": "<p>30 days</p>"}})))
        .mount(&backend.server)
        .await;

    let policy = backend.client.get_return_policy().await.unwrap();
    assert_eq!(policy.content, "<p>30 days</p>");
}

// ============================================================================
// Social links
// ============================================================================

#[tokio::test]
async fn social_links_round_trip_backend_keys() {
    let backend = TestBackend::signed_in("tok").await;

    Mock::given(method("GET"))
        .and(path(api_path("/sociallinks")))
        .respond_with(ok(json!({
            "data": [{"facebook_url": "https://facebook.com/harbor", "instagram_url": null}]
        })))
        .mount(&backend.server)
        .await;
    Mock::given(method("POST"))
        .and(path(api_path("/update-sociallinks")))
        .and(body_json(json!({
            "facebook_url": "https://facebook.com/harbor",
            "instagram_url": "https://instagram.com/harbor",
            "twitter_url": "",
            "youtube_url": "",
            "linkedin_url": "",
            "pinterest_url": ""
        })))
        .respond_with(ok(json!({"message": "Social links updated"})))
        .expect(1)
        .mount(&backend.server)
        .await;

    let links = backend.client.get_social_links().await.unwrap();
    assert_eq!(links.facebook, "https://facebook.com/harbor");
    assert_eq!(links.instagram, "");

    let updated = SocialLinks {
        instagram: "https://instagram.com/harbor".to_string(),
        ..links
    };
    let ack = backend.client.update_social_links(&updated).await.unwrap();
    assert_eq!(ack.message, "Social links updated");
}

// ============================================================================
// FAQ
// ============================================================================

#[tokio::test]
async fn faq_crud_uses_verbs_and_id_paths() {
    let backend = TestBackend::signed_in("tok").await;

    Mock::given(method("POST"))
        .and(path(api_path("/add-faq")))
        .and(body_json(json!({"question": "Do you ship abroad?", "answer": "Yes, worldwide.", "status": true})))
        .respond_with(ok(json!({
            "message": "FAQ added",
            "data": {"id": 12, "question": "Do you ship abroad?", "answer": "Yes, worldwide.", "status": 1}
        })))
        .expect(1)
        .mount(&backend.server)
        .await;
    Mock::given(method("PUT"))
        .and(path(api_path("/update-faq/12")))
        .and(body_json(json!({"question": "Do you ship abroad?", "answer": "EU only.", "status": false})))
        .respond_with(ok(json!({"message": "FAQ updated"})))
        .expect(1)
        .mount(&backend.server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(api_path("/delete-faq/12")))
        .respond_with(ok(json!({"message": "FAQ deleted"})))
        .expect(1)
        .mount(&backend.server)
        .await;

    let saved = backend
        .client
        .add_faq(&FaqInput::new("Do you ship abroad?", "Yes, worldwide."))
        .await
        .unwrap();
    let faq = saved.faq.unwrap();
    assert_eq!(faq.id, FaqId::from("12"));
    assert!(faq.is_active);

    let mut edit = FaqInput::new("Do you ship abroad?", "EU only.");
    edit.is_active = false;
    let saved = backend.client.update_faq(&faq.id, &edit).await.unwrap();
    assert_eq!(saved.message, "FAQ updated");
    assert!(saved.faq.is_none());

    let ack = backend.client.delete_faq(&faq.id).await.unwrap();
    assert_eq!(ack.message, "FAQ deleted");
}

#[tokio::test]
async fn faq_without_id_is_rejected_before_any_request() {
    let backend = TestBackend::signed_in("tok").await;
    forbid_requests(&backend).await;

    let input = FaqInput::new("Do you ship abroad?", "Yes, worldwide.");
    let update = backend
        .client
        .update_faq(&FaqId::new(""), &input)
        .await
        .unwrap_err();
    let delete = backend.client.delete_faq(&FaqId::new(" ")).await.unwrap_err();

    assert_eq!(update.to_string(), "FAQ id is required");
    assert_eq!(delete.to_string(), "FAQ id is required");
    assert!(backend.requests().await.is_empty());
}

#[tokio::test]
async fn faq_id_stays_inside_its_route() {
    let backend = TestBackend::signed_in("tok").await;

    Mock::given(any())
        .respond_with(ok(json!({"message": "FAQ deleted"})))
        .mount(&backend.server)
        .await;

    backend
        .client
        .delete_faq(&FaqId::new("../setup"))
        .await
        .unwrap();
    backend
        .client
        .delete_faq(&FaqId::new("7?force=1"))
        .await
        .unwrap();
    backend
        .client
        .update_faq(
            &FaqId::new("3/../../login"),
            &FaqInput::new("Do you ship abroad?", "Yes, worldwide."),
        )
        .await
        .unwrap();

    let requests = backend.requests().await;
    assert_eq!(requests.len(), 3);
    assert_eq!(requests[0].url.path(), "/api/delete-faq/..%2Fsetup");
    assert_eq!(requests[1].url.path(), "/api/delete-faq/7%3Fforce=1");
    assert_eq!(requests[1].url.query(), None);
    assert_eq!(requests[2].url.path(), "/api/update-faq/3%2F..%2F..%2Flogin");
}

#[tokio::test]
async fn dot_faq_id_is_rejected_before_any_request() {
    let backend = TestBackend::signed_in("tok").await;
    forbid_requests(&backend).await;

    let err = backend.client.delete_faq(&FaqId::new("..")).await.unwrap_err();

    assert!(matches!(err, StoreApiError::Validation(ref m) if m == "FAQ id is invalid"));
    assert!(backend.requests().await.is_empty());
}

#[tokio::test]
async fn faq_list_reads_nested_faqs() {
    let backend = TestBackend::signed_in("tok").await;

    Mock::given(method("GET"))
        .and(path(api_path("/faq")))
        .respond_with(ok(json!({
            "data": {"faqs": [
                {"id": 1, "question": "Q one?", "answer": "A one.", "status": 0},
                {"id": 2, "question": "Q two?", "answer": "A two."}
            ]}
        })))
        .mount(&backend.server)
        .await;

    let faqs = backend.client.get_faqs().await.unwrap();
    assert_eq!(faqs.len(), 2);
    assert!(!faqs[0].is_active);
    assert!(faqs[1].is_active);
}

// ============================================================================
// Security
// ============================================================================

#[tokio::test]
async fn security_update_sends_snake_case_json() {
    let backend = TestBackend::signed_in("tok").await;

    Mock::given(method("POST"))
        .and(path(api_path("/update-security-settings")))
        .and(body_json(json!({
            "two_factor_enabled": true,
            "login_alerts": true,
            "session_timeout": 30
        })))
        .respond_with(ok(json!({"message": "Security settings updated"})))
        .expect(1)
        .mount(&backend.server)
        .await;

    let ack = backend
        .client
        .update_security_settings(&SecuritySettings {
            two_factor_enabled: true,
            login_alerts: true,
            session_timeout: Some(30),
        })
        .await
        .unwrap();

    assert_eq!(ack.message, "Security settings updated");
}
