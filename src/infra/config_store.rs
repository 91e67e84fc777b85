// ============================================================
// Layer 5 — Corpus Config Store
// ============================================================
// Saves and loads a CorpusConfig as pretty-printed JSON, so a
// corpus load (directory, seeds, balancing, error policy) can
// be repeated exactly:
//
//   {
//     "dir": "data/Daxenberger17/PE",
//     "shuffle_seed": 1,
//     "balance": true,
//     "balance_seed": 0,
//     "on_error": "abort"
//   }
//
// Missing keys fall back to CorpusConfig::default().
//
// Reference: Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::domain::config::CorpusConfig;

/// Write `cfg` to `path` as JSON, creating parent directories.
pub fn save_config(path: &Path, cfg: &CorpusConfig) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Cannot create directory '{}'", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(cfg)?;
    fs::write(path, json)
        .with_context(|| format!("Cannot write config to '{}'", path.display()))?;

    tracing::debug!("Saved corpus config to '{}'", path.display());
    Ok(())
}

/// Read a CorpusConfig from a JSON file.
pub fn load_config(path: &Path) -> Result<CorpusConfig> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Cannot read config from '{}'", path.display()))?;

    let cfg = serde_json::from_str(&json)
        .with_context(|| format!("Invalid corpus config in '{}'", path.display()))?;

    tracing::info!("Loaded corpus config from '{}'", path.display());
    Ok(cfg)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::ErrorPolicy;
    use tempfile::TempDir;

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("runs").join("pe.json");

        let cfg = CorpusConfig {
            shuffle_seed: 7,
            on_error: ErrorPolicy::Skip,
            ..CorpusConfig::daxenberger()
        };
        save_config(&path, &cfg).unwrap();
        assert_eq!(load_config(&path).unwrap(), cfg);
    }

    #[test]
    fn test_invalid_json_names_the_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(format!("{err:#}").contains("broken.json"));
    }

    #[test]
    fn test_missing_file() {
        assert!(load_config(Path::new("/no/such/config.json")).is_err());
    }
}
