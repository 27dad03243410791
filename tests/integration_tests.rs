// Integration tests for TalentAI Match

use talentai_match::core::{derive_seed, MatchGenerator};
use talentai_match::models::{MatchFilters, MatchRequest, Persona, ResumeRequest};
use talentai_match::services::{PersonaStore, UpstreamClient, UpstreamError};

fn golden_request() -> MatchRequest {
    MatchRequest {
        title: "Machine Learning Engineer".to_string(),
        description: "We are looking for a Machine Learning Engineer with experience in Python, TensorFlow, and deep learning.".to_string(),
        skills: vec![
            "Python".to_string(),
            "TensorFlow".to_string(),
            "Machine Learning".to_string(),
            "Deep Learning".to_string(),
        ],
        top_k: 10,
        filters: None,
    }
}

fn create_resume() -> ResumeRequest {
    ResumeRequest {
        career_objective: "Build reliable ML systems.".to_string(),
        skills: vec!["Python".to_string(), "TensorFlow".to_string()],
        educational_institution_name: vec!["MIT".to_string()],
        degree_names: vec!["M.S.".to_string()],
        passing_years: vec!["2021".to_string()],
        educational_results: None,
        result_types: None,
        major_field_of_studies: vec!["Computer Science".to_string()],
        professional_company_names: vec!["Google".to_string()],
    }
}

#[test]
fn test_golden_seed() {
    let request = golden_request();
    let seed = derive_seed(&request.title, &request.description, &request.skills);
    assert_eq!(seed, 1_211_514_671);
}

#[test]
fn test_golden_candidate_list() {
    let generator = MatchGenerator::new();
    let result = generator.generate(&golden_request());

    assert_eq!(result.status, "success");
    assert_eq!(result.job_title, "Machine Learning Engineer");
    assert_eq!(result.candidates_found, 9);
    assert_eq!(result.candidates.len(), 9);

    let expected: Vec<(u32, f64)> = vec![
        (424, 1.00),
        (143, 0.98),
        (933, 0.94),
        (457, 0.88),
        (211, 0.85),
        (827, 0.83),
        (459, 0.78),
        (482, 0.76),
        (520, 0.62),
    ];
    let actual: Vec<(u32, f64)> = result
        .candidates
        .iter()
        .map(|c| (c.candidate_id, c.score))
        .collect();
    assert_eq!(actual, expected);

    // Spot-check the derived fields of the top candidate
    let top = &result.candidates[0];
    assert_eq!(top.explanation, "Matched 2 of 4 required skills");
    assert_eq!(top.skills, vec!["Python", "TensorFlow", "NLP"]);
    assert_eq!(top.educational_institution_name, vec!["Stanford"]);
    assert_eq!(top.degree_names, vec!["M.S."]);
    assert_eq!(top.passing_years, vec!["2019"]);
    assert_eq!(top.major_field_of_studies, vec!["Computer Science"]);
    assert_eq!(top.professional_company_names, vec!["Google"]);
    assert_eq!(
        top.career_objective,
        "Experienced Machine Learning Engineer specializing in Python, TensorFlow, NLP."
    );
}

#[test]
fn test_golden_list_with_majors_filter() {
    let generator = MatchGenerator::new();
    let mut request = golden_request();
    request.filters = Some(MatchFilters {
        major_field_of_studies: Some(vec!["Data Science".to_string()]),
    });

    let result = generator.generate(&request);

    // Same pool, different majors
    assert_eq!(result.candidates_found, 9);
    assert_eq!(result.candidates[0].candidate_id, 424);
    for c in &result.candidates {
        assert_eq!(c.major_field_of_studies, vec!["Data Science"]);
    }
}

#[test]
fn test_end_to_end_invariants_across_queries() {
    let generator = MatchGenerator::new();
    let queries = [
        ("Backend Engineer", "APIs.", vec!["Rust", "SQL"], 10u32),
        ("Designer", "Make it pretty.", vec!["Figma"], 4),
        ("Intern", "", vec![], 1),
        ("Architect", "Systems.", vec!["C++", "Go", "Rust", "Zig"], 50),
    ];

    for (title, description, skills, top_k) in queries {
        let request = MatchRequest {
            title: title.to_string(),
            description: description.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            top_k,
            filters: None,
        };
        let result = generator.generate(&request);

        assert_eq!(result.status, "success");
        assert_eq!(result.job_title, title);
        assert_eq!(result.candidates_found, result.candidates.len());
        assert!(result.candidates.len() <= top_k.clamp(1, 10) as usize);
        assert!(!result.candidates.is_empty());

        for pair in result.candidates.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        for c in &result.candidates {
            assert!((100..=999).contains(&c.candidate_id));
            assert!((0.6..=1.0).contains(&c.score));
            assert!(!c.skills.is_empty());
        }
    }
}

#[tokio::test]
async fn test_persona_lifecycle() {
    let store = PersonaStore::new(3600);

    // Empty store
    assert_eq!(store.get().await, None);
    assert!(!store.blind().await);

    // Entry choice
    store.set(Persona::Candidate).await;
    assert_eq!(store.get().await, Some(Persona::Candidate));
    assert!(store.record().await.is_some());

    // Toggle to the other role, blind on
    assert_eq!(store.switch().await, Persona::Recruiter);
    store.set_blind(true).await;
    assert!(store.blind().await);

    // Explicit reset empties everything
    store.clear().await;
    assert_eq!(store.get().await, None);
    assert!(store.record().await.is_none());
    assert!(!store.blind().await);
}

#[tokio::test]
async fn test_upstream_success_path() {
    let mut server = mockito::Server::new_async().await;
    let body = serde_json::json!({
        "status": "success",
        "job_title": "Machine Learning Engineer",
        "candidates_found": 1,
        "candidates": [{
            "candidate_id": 424,
            "score": 1.0,
            "explanation": "Matched 2 of 4 required skills",
            "career_objective": "Experienced engineer.",
            "skills": ["Python"],
            "educational_institution_name": ["Stanford"],
            "degree_names": ["M.S."],
            "passing_years": ["2019"],
            "major_field_of_studies": ["Computer Science"],
            "professional_company_names": ["Google"]
        }]
    });
    let mock = server
        .mock("POST", "/match")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await;

    let client = UpstreamClient::new(server.url(), 5);
    let response = client.post_match(&golden_request()).await.unwrap();

    assert_eq!(response.candidates_found, 1);
    assert_eq!(response.candidates[0].candidate_id, 424);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_upstream_http_status_failure() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/match")
        .with_status(500)
        .create_async()
        .await;

    let client = UpstreamClient::new(server.url(), 5);
    let err = client.post_match(&golden_request()).await.unwrap_err();

    assert!(matches!(err, UpstreamError::Status(_)));
    assert!(!err.to_string().is_empty());
}

#[tokio::test]
async fn test_upstream_application_failure() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/resume")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status":"error","resume_id":""}"#)
        .create_async()
        .await;

    let client = UpstreamClient::new(server.url(), 5);
    let err = client.post_resume(&create_resume()).await.unwrap_err();

    assert!(matches!(err, UpstreamError::Application(_)));
}

#[tokio::test]
async fn test_upstream_transport_failure() {
    // Nothing listens here
    let client = UpstreamClient::new("http://127.0.0.1:9".to_string(), 1);
    let err = client.post_match(&golden_request()).await.unwrap_err();

    assert!(matches!(err, UpstreamError::Transport(_)));
}

#[tokio::test]
async fn test_upstream_health_probe() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/health")
        .with_status(200)
        .with_body(r#"{"status":"healthy"}"#)
        .create_async()
        .await;

    let client = UpstreamClient::new(server.url(), 5);
    assert!(client.check_health().await);

    let unreachable = UpstreamClient::new("http://127.0.0.1:9".to_string(), 1);
    assert!(!unreachable.check_health().await);
}
