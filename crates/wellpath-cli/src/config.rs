use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use wellpath_report::ReportCopyConfig;

/// Current copy-file version. Bump this when changing the envelope shape.
/// Each bump requires a corresponding entry in [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

/// On-disk envelope around the report copy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CopyConfigFile {
    /// Missing or 0 = a bare copy object written before the envelope existed.
    #[serde(default)]
    pub config_version: u32,
    #[serde(default)]
    pub copy: ReportCopyConfig,
}

fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join("wellpath"))
}

/// `<config_dir>/wellpath/copy.json`, if the platform has a config dir.
pub fn default_copy_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("copy.json"))
}

/// Resolve the copy for a run: the explicit file when given, else the
/// default path when it exists, else built-in copy.
pub fn load_copy_config(explicit: Option<&Path>) -> eyre::Result<ReportCopyConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match default_copy_path().filter(|p| p.exists()) {
            Some(path) => path,
            None => {
                tracing::debug!("no copy file, using built-in copy");
                return Ok(ReportCopyConfig::default());
            }
        },
    };

    let contents = std::fs::read_to_string(&path)
        .map_err(|e| eyre::eyre!("failed to read copy config at {}: {e}", path.display()))?;
    let copy = parse_copy_config(&contents)?;
    tracing::info!(path = %path.display(), "loaded copy config");
    Ok(copy)
}

/// Parse a copy file of any supported version.
pub fn parse_copy_config(contents: &str) -> eyre::Result<ReportCopyConfig> {
    let json: serde_json::Value = serde_json::from_str(contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let file: CopyConfigFile = serde_json::from_value(migrated)?;
    Ok(file.copy)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
pub fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION})"
        ));
    }

    // v0 → v1: wrap the bare copy object in the versioned envelope
    if from_version < 1 {
        if !json.is_object() {
            return Err(eyre::eyre!("copy config is not a JSON object"));
        }
        json = serde_json::json!({
            "config_version": 1,
            "copy": json,
        });
        tracing::info!("migrated copy config v0 → v1 (added envelope)");
    }

    Ok(json)
}

/// Serialize `copy` at the current version.
pub fn to_file_json(copy: &ReportCopyConfig) -> eyre::Result<String> {
    let file = CopyConfigFile {
        config_version: CURRENT_VERSION,
        copy: copy.clone(),
    };
    Ok(serde_json::to_string_pretty(&file)?)
}
