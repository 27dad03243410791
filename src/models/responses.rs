use serde::{Deserialize, Serialize};

use crate::models::domain::{Candidate, Persona};

/// Envelope returned by the match endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResponse {
    pub status: String,
    pub job_title: String,
    pub candidates_found: usize,
    pub candidates: Vec<Candidate>,
}

/// Acknowledgement returned by the resume endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeResponse {
    pub status: String,
    pub resume_id: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Current persona state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonaResponse {
    pub role: Option<Persona>,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub blind: bool,
}
