//! TalentAI Match - Deterministic mock matching service for the TalentAI hiring demo
//!
//! This library provides the deterministic mock-match generator used by the
//! TalentAI demo: a seeded hash feeds a reproducible pseudo-random stream
//! that fabricates a plausible, score-sorted candidate list for a job query.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{derive_seed, fnv1a, MatchGenerator, Mulberry32};
pub use models::{Candidate, MatchFilters, MatchRequest, MatchResponse, Persona};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        assert_eq!(fnv1a(""), 2_166_136_261);
        let mut rng = Mulberry32::new(1);
        assert!(rng.next_f64() < 1.0);
    }
}
