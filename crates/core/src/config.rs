use std::env;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

/// Key lookup used by the profiled readers. Production reads the process
/// environment; tests pass a map.
type Lookup<'a> = &'a dyn Fn(&str) -> Option<String>;

/// Read a profiled key: tries {PROFILE}_{KEY} first, falls back to {KEY}.
fn profiled_opt(lookup: Lookup<'_>, profile: &str, key: &str) -> Option<String> {
    if !profile.is_empty() {
        let prefixed = format!("{}_{}", profile, key);
        if let Some(v) = lookup(&prefixed).filter(|s| !s.is_empty()) {
            return Some(v);
        }
    }
    lookup(key).filter(|s| !s.is_empty())
}

fn profiled_or(lookup: Lookup<'_>, profile: &str, key: &str, default: &str) -> String {
    profiled_opt(lookup, profile, key).unwrap_or_else(|| default.to_string())
}

fn profiled_usize(lookup: Lookup<'_>, profile: &str, key: &str, default: usize) -> usize {
    profiled_opt(lookup, profile, key)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

// ── Top-level config ──────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Active profile name (empty = default).
    pub profile: String,
    pub chunking: ChunkingConfig,
    pub ingest: IngestConfig,
}

impl Config {
    /// Build config from environment variables (call `load_dotenv()` first).
    /// Profile is read from `LOCALPLAN_PROFILE`. When set (e.g. `PROD`),
    /// every key is first looked up as `{PROFILE}_{KEY}`, falling back to `{KEY}`.
    pub fn from_env() -> Self {
        let profile = env_or("LOCALPLAN_PROFILE", "");
        Self::for_profile(&profile)
    }

    /// Build config for a specific named profile (empty string = default).
    pub fn for_profile(profile: &str) -> Self {
        Self::from_lookup(profile, &env_opt)
    }

    /// Build config for a profile from an arbitrary key lookup.
    pub fn from_lookup(profile: &str, lookup: &dyn Fn(&str) -> Option<String>) -> Self {
        let p = profile.to_uppercase();
        let p = p.as_str();
        Self {
            profile: p.to_string(),
            chunking: ChunkingConfig::from_lookup(lookup, p),
            ingest: IngestConfig::from_lookup(lookup, p),
        }
    }

    pub fn profile_label(&self) -> &str {
        if self.profile.is_empty() { "default" } else { &self.profile }
    }

    /// Print a summary for startup logs.
    pub fn log_summary(&self) {
        tracing::info!("Config loaded (profile: {}):", self.profile_label());
        tracing::info!(
            "  chunking:    max_chars={}, min_chars={}, heading_chars={}..={}",
            self.chunking.max_chunk_chars,
            self.chunking.min_chunk_chars,
            self.chunking.min_heading_chars,
            self.chunking.max_heading_chars
        );
        tracing::info!(
            "  ingest:      council={}, workers={}",
            self.ingest.council,
            self.ingest.workers
        );
    }

    /// Return a JSON view of the active settings.
    pub fn redacted_summary(&self) -> serde_json::Value {
        serde_json::json!({
            "profile": self.profile_label(),
            "chunking": {
                "max_chunk_chars": self.chunking.max_chunk_chars,
                "min_chunk_chars": self.chunking.min_chunk_chars,
                "min_heading_chars": self.chunking.min_heading_chars,
                "max_heading_chars": self.chunking.max_heading_chars,
                "valid": self.chunking.validate().is_ok(),
            },
            "ingest": { "council": self.ingest.council, "workers": self.ingest.workers },
        })
    }
}

// ── Chunking ──────────────────────────────────────────────────

pub const DEFAULT_MAX_CHUNK_CHARS: usize = 900;
pub const DEFAULT_MIN_CHUNK_CHARS: usize = 60;
pub const DEFAULT_MIN_HEADING_CHARS: usize = 4;
pub const DEFAULT_MAX_HEADING_CHARS: usize = 130;

/// Size thresholds for the chunking engine. All lengths count characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkingConfig {
    /// Buffer is flushed before it would grow past this (default: 900).
    pub max_chunk_chars: usize,
    /// Flushed buffers shorter than this are discarded (default: 60).
    pub min_chunk_chars: usize,
    /// Shorter lines are never headings (default: 4).
    pub min_heading_chars: usize,
    /// Longer lines are never headings (default: 130).
    pub max_heading_chars: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            max_chunk_chars: DEFAULT_MAX_CHUNK_CHARS,
            min_chunk_chars: DEFAULT_MIN_CHUNK_CHARS,
            min_heading_chars: DEFAULT_MIN_HEADING_CHARS,
            max_heading_chars: DEFAULT_MAX_HEADING_CHARS,
        }
    }
}

impl ChunkingConfig {
    fn from_lookup(lookup: Lookup<'_>, p: &str) -> Self {
        Self {
            max_chunk_chars: profiled_usize(lookup, p, "MAX_CHUNK_CHARS", DEFAULT_MAX_CHUNK_CHARS),
            min_chunk_chars: profiled_usize(lookup, p, "MIN_CHUNK_CHARS", DEFAULT_MIN_CHUNK_CHARS),
            min_heading_chars: profiled_usize(lookup, p, "MIN_HEADING_CHARS", DEFAULT_MIN_HEADING_CHARS),
            max_heading_chars: profiled_usize(lookup, p, "MAX_HEADING_CHARS", DEFAULT_MAX_HEADING_CHARS),
        }
    }

    /// Check that every threshold is positive and each min is below its max.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let thresholds = [
            ("max_chunk_chars", self.max_chunk_chars),
            ("min_chunk_chars", self.min_chunk_chars),
            ("min_heading_chars", self.min_heading_chars),
            ("max_heading_chars", self.max_heading_chars),
        ];
        for (name, value) in thresholds {
            if value == 0 {
                return Err(ConfigError::InvalidThreshold { name, value });
            }
        }
        if self.min_chunk_chars >= self.max_chunk_chars {
            return Err(ConfigError::InvertedBounds {
                min_name: "min_chunk_chars",
                min: self.min_chunk_chars,
                max_name: "max_chunk_chars",
                max: self.max_chunk_chars,
            });
        }
        if self.min_heading_chars > self.max_heading_chars {
            return Err(ConfigError::InvertedBounds {
                min_name: "min_heading_chars",
                min: self.min_heading_chars,
                max_name: "max_heading_chars",
                max: self.max_heading_chars,
            });
        }
        Ok(())
    }
}

// ── Ingest ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestConfig {
    /// Owning authority stamped on every chunk.
    pub council: String,
    /// Worker threads for batch ingest (0 = rayon default).
    pub workers: usize,
}

impl IngestConfig {
    fn from_lookup(lookup: Lookup<'_>, p: &str) -> Self {
        Self {
            council: profiled_or(lookup, p, "COUNCIL", "unknown"),
            workers: profiled_usize(lookup, p, "INGEST_WORKERS", 0),
        }
    }
}
