#![cfg(feature = "reqwest")]

// std
use std::{sync::Arc, time::Duration};
// crates.io
use httpmock::prelude::*;
use serde_json::json;
use url::Url;
// self
use crpt_submit::{
	document::{Document, DocumentDescription, Product},
	error::Error,
	http::ReqwestHttpClient,
	quota::QuotaLimiter,
	submit::Submitter,
};

fn sample_document() -> Document {
	Document {
		description: DocumentDescription { participant_inn: "123456789".into() },
		doc_id: "doc123".into(),
		doc_status: "NEW".into(),
		doc_type: "LP_INTRODUCE_GOODS".into(),
		import_request: true,
		owner_inn: "1234567891".into(),
		participant_inn: "0987654321".into(),
		producer_inn: "1234567896".into(),
		production_date: "2024-07-17".into(),
		production_type: "TYPE1".into(),
		products: vec![Product {
			certificate_document: "cert123".into(),
			certificate_document_date: "2024-07-15".into(),
			certificate_document_number: "certNumber".into(),
			owner_inn: "1234567890".into(),
			producer_inn: "1234567890".into(),
			production_date: "2024-07-18".into(),
			tnved_code: "123456".into(),
			uit_code: "uitCode123".into(),
			uitu_code: "uituCode123".into(),
		}],
		reg_date: "2024-07-18".into(),
		reg_number: "reg123".into(),
	}
}

fn build_submitter(endpoint: &str) -> Submitter<ReqwestHttpClient> {
	let limiter = Arc::new(
		QuotaLimiter::new(5, Duration::from_secs(1)).expect("Limiter fixture should build."),
	);
	let endpoint = Url::parse(endpoint).expect("Endpoint fixture should parse.");

	Submitter::with_http_client(limiter, endpoint, ReqwestHttpClient::default())
}

#[tokio::test]
async fn posts_signed_json_with_wire_field_names() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/api/v3/lk/documents/create")
				.header("Content-Type", "application/json")
				.header("Signature", "signature123")
				.json_body_partial(
					json!({
						"doc_id": "doc123",
						"importRequest": true,
						"description": { "participantInn": "123456789" },
						"products": [{ "tnved_code": "123456" }],
					})
					.to_string(),
				);
			then.status(200).body("accepted");
		})
		.await;
	let submitter = build_submitter(&server.url("/api/v3/lk/documents/create"));
	let receipt = submitter
		.submit(&sample_document(), "signature123")
		.await
		.expect("Submission against the mock endpoint should succeed.");

	assert_eq!(receipt.status, 200);
	assert_eq!(receipt.body, "accepted");
	mock.assert_async().await;
}

#[tokio::test]
async fn rejection_surfaces_the_endpoint_body() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/v3/lk/documents/create");
			then.status(500).body("bad request");
		})
		.await;
	let submitter = build_submitter(&server.url("/api/v3/lk/documents/create"));
	let err = submitter
		.submit(&sample_document(), "signature123")
		.await
		.expect_err("Submission against a 500 endpoint should fail.");

	match err {
		Error::SubmissionFailed { status, body } => {
			assert_eq!(status, 500);
			assert_eq!(body, "bad request");
		},
		other => panic!("Unexpected error variant: {other:?}."),
	}

	mock.assert_async().await;
}

#[tokio::test]
async fn unreachable_hosts_map_to_transport_errors() {
	let submitter = build_submitter("http://submissions.invalid/api/v3/lk/documents/create");
	let err = submitter
		.submit(&sample_document(), "signature123")
		.await
		.expect_err("Submission to an unresolvable host should fail.");

	assert!(matches!(err, Error::Transport(_)));
}
