use crate::core::rng::Mulberry32;
use crate::core::seed::derive_seed;
use crate::models::{Candidate, MatchFilters, MatchRequest, MatchResponse};

/// Fallback skill pool used when a query arrives with no skills.
/// Substituted before seeding, so it feeds the hash as well as the slices.
pub const DEFAULT_SKILLS: &[&str] = &["Python", "TensorFlow", "SQL"];

/// Fixed augmentation terms unioned into every candidate's skill set
pub const AUGMENTED_SKILLS: &[&str] = &["TensorFlow", "NLP"];

/// Major list used when the query carries no majors filter
pub const DEFAULT_MAJOR: &str = "Computer Science";

/// Institution pair the institution draw picks between
const INSTITUTIONS: (&str, &str) = ("MIT", "Stanford");

/// Employer pair the employer draw picks between
const EMPLOYERS: (&str, &str) = ("Google", "Microsoft");

/// Degree shown for every synthesized candidate
const DEGREE: &str = "M.S.";

/// Maximum number of skill tags per candidate
const MAX_SKILL_TAGS: usize = 4;

/// Earliest graduating year; the year draw spans six years from here
const FIRST_PASSING_YEAR: i32 = 2018;
const PASSING_YEAR_SPAN: f64 = 6.0;

/// Bounds the requested result count is clamped to
const MIN_TOP_K: u32 = 1;
const MAX_TOP_K: u32 = 10;

/// Clamp a requested result count into the supported [1, 10] range
#[inline]
pub fn clamp_top_k(top_k: u32) -> usize {
    top_k.clamp(MIN_TOP_K, MAX_TOP_K) as usize
}

/// Deterministic mock match generator
///
/// Fabricates a plausible, score-ranked candidate list for a job query.
/// Every value is drawn from a mulberry32 stream seeded with an FNV-1a
/// hash of the query text, so identical input always yields an identical
/// list. This is the core contract: the generator computes no real
/// similarity, it exists to give the demo reproducible output.
#[derive(Debug, Clone, Default)]
pub struct MatchGenerator;

impl MatchGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate the full response envelope for a match query
    ///
    /// Synthesizes the candidate pool, sorts it by score (descending,
    /// ties keep synthesis order), truncates to the clamped `top_k` and
    /// wraps the result with the original job title.
    pub fn generate(&self, request: &MatchRequest) -> MatchResponse {
        let k = clamp_top_k(request.top_k);

        let mut candidates = self.candidate_pool(request);

        candidates.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        candidates.truncate(k);

        MatchResponse {
            status: "success".to_string(),
            job_title: request.title.clone(),
            candidates_found: candidates.len(),
            candidates,
        }
    }

    /// Synthesize the raw candidate pool in draw order (before ranking)
    ///
    /// Pool size is `floor(rng()*k) + max(3, k/2)`, decided by a single
    /// draw taken before any per-candidate draw. Because the stream only
    /// depends on the query text, a smaller `top_k` yields a prefix of
    /// the pool a larger `top_k` would produce for the same text.
    pub fn candidate_pool(&self, request: &MatchRequest) -> Vec<Candidate> {
        let skills = effective_skills(&request.skills);
        let majors = effective_majors(request.filters.as_ref());
        let k = clamp_top_k(request.top_k);

        let seed = derive_seed(&request.title, &request.description, &skills);
        let mut rng = Mulberry32::new(seed);

        let count = (rng.next_f64() * k as f64).floor() as usize + usize::max(3, k / 2);

        tracing::debug!(
            "Synthesizing {} candidates for \"{}\" (seed: {})",
            count,
            request.title,
            seed
        );

        (0..count)
            .map(|_| synthesize_candidate(&mut rng, &request.title, &skills, &majors))
            .collect()
    }
}

/// Synthesize a single candidate from the stream
///
/// Consumes exactly six draws in a fixed order: candidate id, skill
/// overlap length, score, institution, graduating year, employer. The
/// order is part of the reproducibility contract; reordering the draws
/// changes every candidate after the first.
fn synthesize_candidate(
    rng: &mut Mulberry32,
    title: &str,
    skills: &[String],
    majors: &[String],
) -> Candidate {
    // Draw 1: identifier in [100, 999]
    let candidate_id = (rng.next_f64() * 900.0).floor() as u32 + 100;

    // Draw 2: how many query skills this candidate overlaps with
    let overlap = usize::max(1, (rng.next_f64() * skills.len() as f64).floor() as usize);

    // Draw 3: score in [0.6, 1.0], two decimals
    let score = ((0.6 + rng.next_f64() * 0.4) * 100.0).round() / 100.0;

    // Draw 4: institution
    let institution = if rng.next_f64() > 0.5 {
        INSTITUTIONS.0
    } else {
        INSTITUTIONS.1
    };

    // Draw 5: graduating year in [2018, 2023]
    let passing_year = FIRST_PASSING_YEAR + (rng.next_f64() * PASSING_YEAR_SPAN).floor() as i32;

    // Draw 6: employer
    let employer = if rng.next_f64() > 0.5 {
        EMPLOYERS.0
    } else {
        EMPLOYERS.1
    };

    let skill_tags = merge_skill_tags(&skills[..overlap]);

    Candidate {
        candidate_id,
        score,
        explanation: format!("Matched {} of {} required skills", overlap, skills.len()),
        career_objective: format!(
            "Experienced {} specializing in {}.",
            title,
            skill_tags.join(", ")
        ),
        skills: skill_tags,
        educational_institution_name: vec![institution.to_string()],
        degree_names: vec![DEGREE.to_string()],
        passing_years: vec![passing_year.to_string()],
        major_field_of_studies: majors.to_vec(),
        professional_company_names: vec![employer.to_string()],
    }
}

/// Replace an empty skill list with the fixed default pool
fn effective_skills(skills: &[String]) -> Vec<String> {
    if skills.is_empty() {
        DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect()
    } else {
        skills.to_vec()
    }
}

/// Majors copied verbatim from the filter, or the fixed default
fn effective_majors(filters: Option<&MatchFilters>) -> Vec<String> {
    match filters.and_then(|f| f.major_field_of_studies.as_ref()) {
        Some(majors) if !majors.is_empty() => majors.clone(),
        _ => vec![DEFAULT_MAJOR.to_string()],
    }
}

/// Deduplicated union of the overlap slice with the augmentation terms,
/// insertion order preserved, capped at [`MAX_SKILL_TAGS`] entries
fn merge_skill_tags(overlap: &[String]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::with_capacity(MAX_SKILL_TAGS);
    for skill in overlap
        .iter()
        .map(String::as_str)
        .chain(AUGMENTED_SKILLS.iter().copied())
    {
        if !tags.iter().any(|t| t == skill) {
            tags.push(skill.to_string());
        }
        if tags.len() == MAX_SKILL_TAGS {
            break;
        }
    }
    tags
}
