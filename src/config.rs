//! Engine configuration.
//!
//! # Environment Variables
//!
//! - `AFFINITY_QUESTIONS` — question catalog path (default: `data/questions.json`)
//! - `AFFINITY_PARTIES` — party catalog path (default: `data/parties.json`)
//!
//! Either file may be JSON or YAML; the extension decides.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogError, ReferenceData};

/// Environment variable naming the question catalog file.
pub const QUESTIONS_ENV: &str = "AFFINITY_QUESTIONS";
/// Environment variable naming the party catalog file.
pub const PARTIES_ENV: &str = "AFFINITY_PARTIES";

/// Where the reference catalog is loaded from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub questions_path: PathBuf,
    pub parties_path: PathBuf,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            questions_path: PathBuf::from("data/questions.json"),
            parties_path: PathBuf::from("data/parties.json"),
        }
    }
}

impl EngineConfig {
    /// Defaults overridden by `AFFINITY_QUESTIONS` / `AFFINITY_PARTIES`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            questions_path: lookup(QUESTIONS_ENV)
                .map(PathBuf::from)
                .unwrap_or(defaults.questions_path),
            parties_path: lookup(PARTIES_ENV)
                .map(PathBuf::from)
                .unwrap_or(defaults.parties_path),
        }
    }

    /// Load and validate the reference catalog.
    pub fn load(&self) -> Result<ReferenceData, CatalogError> {
        log::info!(
            "Loading catalog from {} and {}",
            self.questions_path.display(),
            self.parties_path.display()
        );
        ReferenceData::from_files(&self.questions_path, &self.parties_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_overrides() {
        let config = EngineConfig::from_lookup(|_| None);
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = EngineConfig::from_lookup(|key| match key {
            QUESTIONS_ENV => Some("/tmp/q.yaml".to_string()),
            _ => None,
        });
        assert_eq!(config.questions_path, PathBuf::from("/tmp/q.yaml"));
        assert_eq!(config.parties_path, PathBuf::from("data/parties.json"));
    }

    #[test]
    fn test_load_sample_catalog() {
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let config = EngineConfig {
            questions_path: root.join("data/questions.json"),
            parties_path: root.join("data/parties.json"),
        };
        let data = config.load().unwrap();
        assert_eq!(data.question_count(), 6);
    }

    #[test]
    fn test_load_yaml_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let questions_path = dir.path().join("q.yaml");
        let parties_path = dir.path().join("p.yaml");
        std::fs::write(
            &questions_path,
            "- id: \"1\"\n  texto: \"¿Reforma?\"\n  tipo: si/no\n  opciones: [\"Sí\", \"No\"]\n",
        )
        .unwrap();
        std::fs::write(&parties_path, "- id: a\n  nombre: A\n  respuestas: {\"1\": 0}\n").unwrap();

        let config = EngineConfig {
            questions_path,
            parties_path,
        };
        let data = config.load().unwrap();
        assert_eq!(data.question("1").unwrap().category, "");
        assert_eq!(data.party("a").unwrap().value_for("1"), Some(0.0));
    }
}
