use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{MatchFilters, Persona};

/// Job query consumed by the match endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRequest {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default = "default_top_k")]
    pub top_k: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<MatchFilters>,
}

fn default_top_k() -> u32 {
    10
}

/// Resume submission accepted by the resume endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResumeRequest {
    #[validate(length(min = 1, message = "career objective must not be empty"))]
    pub career_objective: String,
    #[validate(length(min = 1, message = "at least one skill is required"))]
    pub skills: Vec<String>,
    #[serde(default)]
    pub educational_institution_name: Vec<String>,
    #[serde(default)]
    pub degree_names: Vec<String>,
    #[serde(default)]
    pub passing_years: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub educational_results: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_types: Option<Vec<String>>,
    #[serde(default)]
    pub major_field_of_studies: Vec<String>,
    #[serde(default)]
    pub professional_company_names: Vec<String>,
}

/// Request to select a persona (set on entry choice)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetPersonaRequest {
    pub role: Persona,
}

/// Request to toggle the blind-review display flag
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetBlindRequest {
    pub enabled: bool,
}
