// tests/api_integration.rs
//! End-to-end tests for the REST surface, driven through Rocket's local
//! client against a throwaway SQLite database per test.

use rocket::http::{ContentType, Header, Status};
use rocket::local::asynchronous::{Client, LocalResponse};
use serde_json::{json, Value};
use std::path::PathBuf;
use uuid::Uuid;

use interview_api::{base_figment, build_rocket, DatabaseConfig, ServerConfig};

const EMPLOYER_KEY: &str = "test-employer-key";
const BOUNDARY: &str = "X-VOXHIRE-TEST-BOUNDARY";

struct TestServer {
    client: Client,
    uploads_dir: PathBuf,
}

async fn test_server() -> TestServer {
    let root = std::env::temp_dir().join(format!("voxhire_test_{}", Uuid::new_v4()));
    let uploads_dir = root.join("uploads");
    tokio::fs::create_dir_all(&uploads_dir)
        .await
        .expect("create uploads dir");

    let mut db_config = DatabaseConfig::new(root.join("test.db"));
    db_config.init_pool().await.expect("init pool");
    db_config.migrate().await.expect("migrate");

    let server_config = ServerConfig {
        uploads_dir: uploads_dir.clone(),
        employer_api_key: EMPLOYER_KEY.to_string(),
    };

    let figment = base_figment(&uploads_dir).merge(("log_level", "off"));
    let rocket = build_rocket(figment, server_config, db_config);
    let client = Client::tracked(rocket).await.expect("valid rocket");

    TestServer {
        client,
        uploads_dir,
    }
}

async fn body_json(response: LocalResponse<'_>) -> Value {
    response.into_json::<Value>().await.expect("json body")
}

async fn post_json<'c>(client: &'c Client, uri: &str, body: Value) -> LocalResponse<'c> {
    client
        .post(uri.to_string())
        .header(ContentType::JSON)
        .body(body.to_string())
        .dispatch()
        .await
}

fn multipart_file(field: &str, filename: &str, content_type: &str, bytes: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; \
             filename=\"{filename}\"\r\nContent-Type: {content_type}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn multipart_content_type() -> ContentType {
    ContentType::parse_flexible(&format!("multipart/form-data; boundary={BOUNDARY}"))
        .expect("multipart content type")
}

async fn create_candidate(client: &Client, name: &str, email: &str) -> Value {
    let response = post_json(
        client,
        "/candidates",
        json!({"name": name, "email": email, "phone": "555-0100"}),
    )
    .await;
    assert_eq!(response.status(), Status::Created);
    body_json(response).await
}

async fn create_job(client: &Client, title: &str, skills: &[&str]) -> Value {
    let response = post_json(
        client,
        "/jobs",
        json!({
            "title": title,
            "description": "Build and maintain the product",
            "department": "Engineering",
            "required_skills": skills,
        }),
    )
    .await;
    assert_eq!(response.status(), Status::Created);
    body_json(response).await
}

async fn create_interview(client: &Client, job_id: &str, candidate_id: &str) -> Value {
    let response = post_json(
        client,
        "/interviews",
        json!({"job_id": job_id, "candidate_id": candidate_id}),
    )
    .await;
    assert_eq!(response.status(), Status::Created);
    body_json(response).await
}

async fn upload_resume<'c>(client: &'c Client, candidate_id: &str) -> LocalResponse<'c> {
    let body = multipart_file("resume", "resume.pdf", "application/pdf", b"%PDF-1.4 stub");
    client
        .post(format!("/candidates/{candidate_id}/resume"))
        .header(multipart_content_type())
        .body(body)
        .dispatch()
        .await
}

#[rocket::async_test]
async fn health_reports_ok() {
    let server = test_server().await;

    let response = server.client.get("/health").dispatch().await;
    assert_eq!(response.status(), Status::Ok);

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[rocket::async_test]
async fn candidate_without_email_is_rejected_and_not_persisted() {
    let server = test_server().await;

    let response = post_json(&server.client, "/candidates", json!({"name": "Ada"})).await;
    assert_eq!(response.status(), Status::BadRequest);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Name and email are required");

    let response = server.client.get("/candidates").dispatch().await;
    let listed = body_json(response).await;
    assert_eq!(listed.as_array().expect("list").len(), 0);
}

#[rocket::async_test]
async fn candidate_round_trip_is_stable() {
    let server = test_server().await;

    let created = create_candidate(&server.client, "Ada Lovelace", "ada@example.com").await;
    let id = created["id"].as_str().expect("id");

    let response = server
        .client
        .get(format!("/candidates/{id}"))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
    let fetched = body_json(response).await;

    for field in ["id", "name", "email", "phone", "resume_url", "resume_parsed"] {
        assert_eq!(created[field], fetched[field], "field {field} drifted");
    }
    // Server-assigned creation time names the same instant on every read
    let created_at = |v: &Value| {
        chrono::DateTime::parse_from_rfc3339(v["created_at"].as_str().expect("created_at"))
            .expect("rfc3339 timestamp")
    };
    assert_eq!(created_at(&created), created_at(&fetched));

    let again = body_json(
        server
            .client
            .get(format!("/candidates/{id}"))
            .dispatch()
            .await,
    )
    .await;
    assert_eq!(fetched, again);

    assert_eq!(fetched["phone"], "555-0100");
    assert!(fetched["resume_url"].is_null());

    let response = server.client.get("/candidates/no-such-id").dispatch().await;
    assert_eq!(response.status(), Status::NotFound);
}

#[rocket::async_test]
async fn job_requires_title_and_description() {
    let server = test_server().await;

    let response = post_json(&server.client, "/jobs", json!({"title": "Engineer"})).await;
    assert_eq!(response.status(), Status::BadRequest);

    let job = create_job(&server.client, "Engineer", &["Rust"]).await;
    assert_eq!(job["company_id"], "default");
    assert_eq!(job["required_skills"], json!(["Rust"]));
}

#[rocket::async_test]
async fn interview_with_unknown_references_writes_nothing() {
    let server = test_server().await;
    let candidate = create_candidate(&server.client, "Ada", "ada@example.com").await;
    let job = create_job(&server.client, "Engineer", &[]).await;

    let response = post_json(
        &server.client,
        "/interviews",
        json!({"job_id": job["id"], "candidate_id": "no-such-candidate"}),
    )
    .await;
    assert_eq!(response.status(), Status::NotFound);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Candidate not found");

    let response = post_json(
        &server.client,
        "/interviews",
        json!({"job_id": "no-such-job", "candidate_id": candidate["id"]}),
    )
    .await;
    assert_eq!(response.status(), Status::NotFound);

    let response = server.client.get("/interviews").dispatch().await;
    let listed = body_json(response).await;
    assert_eq!(listed.as_array().expect("list").len(), 0);
}

#[rocket::async_test]
async fn interview_creation_yields_three_ordered_questions() {
    let server = test_server().await;
    let candidate = create_candidate(&server.client, "Ada", "ada@example.com").await;
    let job = create_job(&server.client, "Engineer", &[]).await;

    let created = create_interview(
        &server.client,
        job["id"].as_str().unwrap(),
        candidate["id"].as_str().unwrap(),
    )
    .await;

    assert_eq!(created["interview"]["status"], "pending");
    assert!(created["interview"]["completed_at"].is_null());

    let questions = created["questions"].as_array().expect("questions");
    assert_eq!(questions.len(), 3);

    let interview_id = created["interview"]["id"].as_str().unwrap();
    let response = server
        .client
        .get(format!("/interviews/{interview_id}/questions"))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);

    let listed = body_json(response).await;
    let listed = listed.as_array().expect("questions");
    assert_eq!(listed.len(), 3);
    for (index, question) in listed.iter().enumerate() {
        assert_eq!(question["order_index"], index as i64);
    }

    let kinds: Vec<&str> = listed
        .iter()
        .map(|q| q["type"].as_str().unwrap())
        .collect();
    assert_eq!(kinds, vec!["technical", "behavioral", "behavioral"]);

    let response = server
        .client
        .get("/interviews/no-such-interview/questions")
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::NotFound);
}

#[rocket::async_test]
async fn completion_is_idempotent_with_a_single_assessment() {
    let server = test_server().await;
    let candidate = create_candidate(&server.client, "Ada", "ada@example.com").await;
    let job = create_job(&server.client, "Engineer", &[]).await;
    let created = create_interview(
        &server.client,
        job["id"].as_str().unwrap(),
        candidate["id"].as_str().unwrap(),
    )
    .await;
    let interview_id = created["interview"]["id"].as_str().unwrap();

    // No assessment exists before completion
    let response = server
        .client
        .get(format!("/interviews/{interview_id}/assessment"))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::NotFound);

    let response = server
        .client
        .post(format!("/interviews/{interview_id}/complete"))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
    let first = body_json(response).await;
    assert_eq!(first["interview"]["status"], "completed");
    assert!(!first["interview"]["completed_at"].is_null());

    for axis in [
        "empathy_score",
        "collaboration_score",
        "confidence_score",
        "english_proficiency",
        "professionalism",
    ] {
        let score = first["assessment"][axis].as_i64().expect("score");
        assert!((1..=5).contains(&score), "{axis} out of range: {score}");
    }

    let response = server
        .client
        .post(format!("/interviews/{interview_id}/complete"))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
    let second = body_json(response).await;

    assert_eq!(second["interview"]["status"], "completed");
    assert_eq!(
        first["interview"]["completed_at"],
        second["interview"]["completed_at"]
    );
    // Same assessment row both times, not a duplicate
    assert_eq!(first["assessment"]["id"], second["assessment"]["id"]);

    let response = server
        .client
        .get(format!("/interviews/{interview_id}/assessment"))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
    let fetched = body_json(response).await;
    assert_eq!(fetched["id"], first["assessment"]["id"]);

    let response = server
        .client
        .post("/interviews/no-such-interview/complete")
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::NotFound);
}

#[rocket::async_test]
async fn resume_upload_attaches_fixture_profile() {
    let server = test_server().await;
    let candidate = create_candidate(&server.client, "Ada", "ada@example.com").await;
    let id = candidate["id"].as_str().unwrap();

    let response = upload_resume(&server.client, id).await;
    assert_eq!(response.status(), Status::Ok);
    let body = body_json(response).await;

    assert_eq!(body["message"], "Resume uploaded successfully");
    let resume_url = body["candidate"]["resume_url"].as_str().expect("url");
    assert!(resume_url.starts_with("/uploads/"));
    assert!(resume_url.ends_with(".pdf"));
    assert_eq!(
        body["candidate"]["resume_parsed"]["skills"],
        json!(["JavaScript", "React", "Node.js"])
    );

    // The stored file is served back under its public path
    let response = server.client.get(resume_url.to_string()).dispatch().await;
    assert_eq!(response.status(), Status::Ok);
}

#[rocket::async_test]
async fn resume_upload_to_unknown_candidate_writes_no_file() {
    let server = test_server().await;

    let response = upload_resume(&server.client, "no-such-candidate").await;
    assert_eq!(response.status(), Status::NotFound);

    let mut entries = tokio::fs::read_dir(&server.uploads_dir)
        .await
        .expect("read uploads dir");
    assert!(entries.next_entry().await.expect("entry").is_none());
}

#[rocket::async_test]
async fn responses_require_an_existing_question_and_a_file() {
    let server = test_server().await;
    let candidate = create_candidate(&server.client, "Ada", "ada@example.com").await;
    let job = create_job(&server.client, "Engineer", &[]).await;
    let created = create_interview(
        &server.client,
        job["id"].as_str().unwrap(),
        candidate["id"].as_str().unwrap(),
    )
    .await;
    let question_id = created["questions"][0]["id"].as_str().unwrap();

    // Unknown question
    let body = multipart_file("audio", "answer.webm", "audio/webm", b"fake-audio");
    let response = server
        .client
        .post("/responses/no-such-question")
        .header(multipart_content_type())
        .body(body)
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::NotFound);

    // Form without the audio field
    let mut body = Vec::new();
    body.extend_from_slice(
        format!("--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"note\"\r\n\r\nhi\r\n--{BOUNDARY}--\r\n")
            .as_bytes(),
    );
    let response = server
        .client
        .post(format!("/responses/{question_id}"))
        .header(multipart_content_type())
        .body(body)
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::BadRequest);

    // Two valid submissions for the same question are both kept
    for _ in 0..2 {
        let body = multipart_file("audio", "answer.webm", "audio/webm", b"fake-audio");
        let response = server
            .client
            .post(format!("/responses/{question_id}"))
            .header(multipart_content_type())
            .body(body)
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Ok);
        let body = body_json(response).await;
        assert_eq!(
            body["response"]["transcription"],
            "This is a mock transcription of the audio response."
        );
        assert!(body["response"]["audio_url"]
            .as_str()
            .unwrap()
            .starts_with("/uploads/"));
    }

    let response = server
        .client
        .get(format!("/questions/{question_id}/responses"))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
    let listed = body_json(response).await;
    assert_eq!(listed.as_array().expect("responses").len(), 2);
}

#[rocket::async_test]
async fn application_scores_skills_against_the_job() {
    let server = test_server().await;
    let candidate = create_candidate(&server.client, "Ada", "ada@example.com").await;
    let candidate_id = candidate["id"].as_str().unwrap();
    upload_resume(&server.client, candidate_id).await;

    let job = create_job(&server.client, "Engineer", &["JavaScript", "Go"]).await;

    let response = post_json(
        &server.client,
        "/applications",
        json!({
            "job_id": job["id"],
            "candidate_id": candidate_id,
            "cover_letter": "I am a fit.",
        }),
    )
    .await;
    assert_eq!(response.status(), Status::Created);
    let application = body_json(response).await;

    assert_eq!(application["status"], "pending");
    // Fixture skills are JavaScript/React/Node.js; one of two job skills hits
    assert_eq!(application["match_score"], 50);
    assert_eq!(application["skills_matched"], json!(["JavaScript"]));
    assert_eq!(application["skills_missing"], json!(["Go"]));
    assert!(application["resume_url"]
        .as_str()
        .unwrap()
        .starts_with("/uploads/"));

    // Applying again to the same job is rejected
    let response = post_json(
        &server.client,
        "/applications",
        json!({"job_id": job["id"], "candidate_id": candidate_id}),
    )
    .await;
    assert_eq!(response.status(), Status::BadRequest);
    let body = body_json(response).await;
    assert_eq!(body["message"], "You have already applied for this job");

    // A candidate without a resume gets no score
    let other = create_candidate(&server.client, "Grace", "grace@example.com").await;
    let response = post_json(
        &server.client,
        "/applications",
        json!({"job_id": job["id"], "candidate_id": other["id"]}),
    )
    .await;
    assert_eq!(response.status(), Status::Created);
    let unscored = body_json(response).await;
    assert!(unscored["match_score"].is_null());

    let response = post_json(
        &server.client,
        "/applications",
        json!({"job_id": "no-such-job", "candidate_id": candidate_id}),
    )
    .await;
    assert_eq!(response.status(), Status::NotFound);
}

#[rocket::async_test]
async fn application_listing_paginates_and_filters() {
    let server = test_server().await;
    let job = create_job(&server.client, "Engineer", &[]).await;
    let other_job = create_job(&server.client, "Designer", &[]).await;

    for i in 0..3 {
        let candidate = create_candidate(
            &server.client,
            &format!("Candidate {i}"),
            &format!("c{i}@example.com"),
        )
        .await;
        let target = if i == 2 { &other_job } else { &job };
        let response = post_json(
            &server.client,
            "/applications",
            json!({"job_id": target["id"], "candidate_id": candidate["id"]}),
        )
        .await;
        assert_eq!(response.status(), Status::Created);
    }

    let response = server
        .client
        .get("/applications?page=1&limit=2")
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
    let page = body_json(response).await;
    assert_eq!(page["applications"].as_array().unwrap().len(), 2);
    assert_eq!(page["pagination"]["total_items"], 3);
    assert_eq!(page["pagination"]["total_pages"], 2);

    let job_id = job["id"].as_str().unwrap();
    let response = server
        .client
        .get(format!("/applications?job_id={job_id}"))
        .dispatch()
        .await;
    let filtered = body_json(response).await;
    assert_eq!(filtered["applications"].as_array().unwrap().len(), 2);

    let response = server
        .client
        .get("/applications?status=reviewing")
        .dispatch()
        .await;
    let none = body_json(response).await;
    assert_eq!(none["applications"].as_array().unwrap().len(), 0);

    let response = server
        .client
        .get("/applications?status=bogus")
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::BadRequest);
}

#[rocket::async_test]
async fn employer_endpoints_enforce_the_api_key() {
    let server = test_server().await;
    let candidate = create_candidate(&server.client, "Ada", "ada@example.com").await;
    let job = create_job(&server.client, "Engineer", &[]).await;
    let response = post_json(
        &server.client,
        "/applications",
        json!({"job_id": job["id"], "candidate_id": candidate["id"]}),
    )
    .await;
    let application = body_json(response).await;
    let application_id = application["id"].as_str().unwrap();

    // Missing credentials
    let response = server
        .client
        .patch(format!("/applications/{application_id}/status"))
        .header(ContentType::JSON)
        .body(json!({"status": "reviewing"}).to_string())
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Unauthorized);

    // Wrong key
    let response = server
        .client
        .patch(format!("/applications/{application_id}/status"))
        .header(ContentType::JSON)
        .header(Header::new("X-Api-Key", "wrong-key"))
        .body(json!({"status": "reviewing"}).to_string())
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Forbidden);

    // Valid key, invalid status
    let response = server
        .client
        .patch(format!("/applications/{application_id}/status"))
        .header(ContentType::JSON)
        .header(Header::new("Authorization", format!("Bearer {EMPLOYER_KEY}")))
        .body(json!({"status": "archived"}).to_string())
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::BadRequest);

    // Valid key, valid transition
    let response = server
        .client
        .patch(format!("/applications/{application_id}/status"))
        .header(ContentType::JSON)
        .header(Header::new("Authorization", format!("Bearer {EMPLOYER_KEY}")))
        .body(json!({"status": "accepted"}).to_string())
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
    let body = body_json(response).await;
    assert_eq!(body["status"], "accepted");

    let response = server
        .client
        .get(format!("/applications/{application_id}"))
        .dispatch()
        .await;
    let fetched = body_json(response).await;
    assert_eq!(fetched["status"], "accepted");

    // Job deletion follows the same gate
    let job_id = job["id"].as_str().unwrap();
    let response = server
        .client
        .delete(format!("/jobs/{job_id}"))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Unauthorized);

    let response = server
        .client
        .delete(format!("/jobs/{job_id}"))
        .header(Header::new("X-Api-Key", EMPLOYER_KEY))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);

    let response = server
        .client
        .get(format!("/jobs/{job_id}"))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::NotFound);
}
