// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Candidate, MatchFilters, Persona, PersonaRecord};
pub use requests::{MatchRequest, ResumeRequest, SetBlindRequest, SetPersonaRequest};
pub use responses::{ErrorResponse, HealthResponse, MatchResponse, PersonaResponse, ResumeResponse};
