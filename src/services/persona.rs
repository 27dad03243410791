use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::models::{Persona, PersonaRecord};

/// Fixed key for the TTL-bounded primary entry (the cookie analogue)
const PERSONA_KEY: &str = "talentai_persona";

/// Fixed key for the fallback persona record
const USER_KEY: &str = "talentai_user";

/// Fixed key for the blind-review display flag
const BLIND_KEY: &str = "talentai_blind";

/// Two-tier persona store
///
/// Holds the selected persona in a TTL-bounded primary tier plus a
/// durable fallback tier, mirroring the cookie/local-storage pair of the
/// demo client. The store is the single owner of persona state: set on
/// entry choice, rehydrated from the fallback when the primary expires,
/// cleared on explicit reset.
pub struct PersonaStore {
    primary: moka::future::Cache<String, String>,
    fallback: Arc<tokio::sync::Mutex<HashMap<String, String>>>,
}

impl PersonaStore {
    /// Create a store whose primary tier expires after `ttl_secs`
    pub fn new(ttl_secs: u64) -> Self {
        let primary = moka::future::CacheBuilder::new(8)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self {
            primary,
            fallback: Arc::new(tokio::sync::Mutex::new(HashMap::new())),
        }
    }

    /// Select a persona, writing both tiers with a fresh record
    pub async fn set(&self, role: Persona) {
        let record = PersonaRecord::new(role);

        self.primary
            .insert(PERSONA_KEY.to_string(), role.to_string())
            .await;

        let mut fallback = self.fallback.lock().await;
        fallback.insert(
            USER_KEY.to_string(),
            serde_json::to_string(&record).unwrap_or_default(),
        );
        drop(fallback);

        tracing::trace!("Persona set: {}", role);
    }

    /// Current persona, primary tier first
    ///
    /// On a primary miss the fallback record is consulted and, when
    /// valid, the primary entry is rehydrated before returning.
    pub async fn get(&self) -> Option<Persona> {
        if let Some(role) = self.primary.get(PERSONA_KEY).await {
            tracing::trace!("Persona primary hit: {}", role);
            return role.parse().ok();
        }

        let record = self.record().await?;
        tracing::trace!("Persona fallback hit: {}", record.role);

        // Rehydrate the primary tier
        self.primary
            .insert(PERSONA_KEY.to_string(), record.role.to_string())
            .await;

        Some(record.role)
    }

    /// The persisted persona record, if any
    pub async fn record(&self) -> Option<PersonaRecord> {
        let fallback = self.fallback.lock().await;
        let json = fallback.get(USER_KEY)?.clone();
        drop(fallback);

        serde_json::from_str(&json).ok()
    }

    /// Toggle the persona and persist the new choice
    ///
    /// `candidate` switches to `recruiter`; anything else, including an
    /// empty store, selects `candidate`.
    pub async fn switch(&self) -> Persona {
        let next = match self.get().await {
            Some(Persona::Candidate) => Persona::Recruiter,
            _ => Persona::Candidate,
        };
        self.set(next).await;
        next
    }

    /// Store the blind-review display flag
    pub async fn set_blind(&self, enabled: bool) {
        let mut fallback = self.fallback.lock().await;
        fallback.insert(
            BLIND_KEY.to_string(),
            if enabled { "1" } else { "0" }.to_string(),
        );
    }

    /// Current blind-review flag, defaulting to off
    pub async fn blind(&self) -> bool {
        let fallback = self.fallback.lock().await;
        fallback.get(BLIND_KEY).map(|v| v == "1").unwrap_or(false)
    }

    /// Explicit reset: both tiers and the blind flag are removed
    pub async fn clear(&self) {
        self.primary.invalidate(PERSONA_KEY).await;

        let mut fallback = self.fallback.lock().await;
        fallback.remove(USER_KEY);
        fallback.remove(BLIND_KEY);
        drop(fallback);

        tracing::trace!("Persona cleared");
    }
}
