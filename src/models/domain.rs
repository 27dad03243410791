use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Synthesized candidate record returned by the matching endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub candidate_id: u32,
    pub score: f64,
    pub explanation: String,
    pub career_objective: String,
    pub skills: Vec<String>,
    pub educational_institution_name: Vec<String>,
    pub degree_names: Vec<String>,
    pub passing_years: Vec<String>,
    pub major_field_of_studies: Vec<String>,
    pub professional_company_names: Vec<String>,
}

impl Candidate {
    /// Obfuscated identity label for blind review
    ///
    /// Identifiers are three digits, so the label is "C" followed by the
    /// last three digits of the id.
    pub fn blind_label(&self) -> String {
        format!("C{}", self.candidate_id % 1000)
    }
}

/// Optional filters attached to a match query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major_field_of_studies: Option<Vec<String>>,
}

/// User-selected role gating which demo views are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Persona {
    Candidate,
    Recruiter,
}

impl Persona {
    pub fn as_str(&self) -> &'static str {
        match self {
            Persona::Candidate => "candidate",
            Persona::Recruiter => "recruiter",
        }
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Persona {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "candidate" => Ok(Persona::Candidate),
            "recruiter" => Ok(Persona::Recruiter),
            _ => Err(()),
        }
    }
}

/// Persisted persona record (the fallback-tier shape)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonaRecord {
    pub role: Persona,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl PersonaRecord {
    pub fn new(role: Persona) -> Self {
        Self {
            role,
            created_at: chrono::Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persona_round_trips_through_str() {
        for role in [Persona::Candidate, Persona::Recruiter] {
            assert_eq!(role.as_str().parse::<Persona>(), Ok(role));
        }
        assert!("admin".parse::<Persona>().is_err());
    }

    #[test]
    fn test_persona_wire_format_is_lowercase() {
        assert_eq!(
            serde_json::to_string(&Persona::Recruiter).unwrap(),
            "\"recruiter\""
        );
    }

    #[test]
    fn test_blind_label_uses_last_three_digits() {
        let candidate = Candidate {
            candidate_id: 457,
            score: 0.88,
            explanation: String::new(),
            career_objective: String::new(),
            skills: vec![],
            educational_institution_name: vec![],
            degree_names: vec![],
            passing_years: vec![],
            major_field_of_studies: vec![],
            professional_company_names: vec![],
        };
        assert_eq!(candidate.blind_label(), "C457");
    }
}
