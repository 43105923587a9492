//! Cassette configuration for composable per-port replay.

use std::path::{Path, PathBuf};

use super::format::Cassette;
use super::replayer::CassetteReplayer;
use super::{port_file_name, CLOCK_PORT, UUID_PORT};

/// Per-port cassette file paths. A port without a path is unavailable
/// during replay and panics if called.
#[derive(Debug, Clone, Default)]
pub struct CassetteConfig {
    /// Path to the clock port cassette file.
    pub clock: Option<PathBuf>,
    /// Path to the UUID source port cassette file.
    pub uuid: Option<PathBuf>,
}

/// Per-port replayers, each with its own interaction stream.
pub struct PortReplayers {
    /// Replayer for the clock port.
    pub clock: Option<CassetteReplayer>,
    /// Replayer for the UUID source port.
    pub uuid: Option<CassetteReplayer>,
}

impl CassetteConfig {
    /// Picks up `clock.cassette.yaml` and `uuid.cassette.yaml` from `dir`,
    /// the layout a recording session writes. Missing files leave the
    /// corresponding port unset.
    #[must_use]
    pub fn from_dir(dir: &Path) -> Self {
        let existing = |port: &str| {
            let path = dir.join(port_file_name(port));
            path.is_file().then_some(path)
        };
        Self { clock: existing(CLOCK_PORT), uuid: existing(UUID_PORT) }
    }

    /// Whether no port has a cassette configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clock.is_none() && self.uuid.is_none()
    }

    /// Read and parse a cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_cassette(path: &Path) -> Result<Cassette, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read cassette file {}: {e}", path.display()))?;
        serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse cassette file {}: {e}", path.display()))
    }

    /// Load a single cassette file and create a replayer for it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_replayer(path: &Path) -> Result<CassetteReplayer, String> {
        Self::load_cassette(path).map(|cassette| CassetteReplayer::new(&cassette))
    }

    /// Load all configured per-port cassette files and create replayers.
    ///
    /// # Errors
    ///
    /// Returns an error if any configured cassette file cannot be read or parsed.
    pub fn load_all(&self) -> Result<PortReplayers, String> {
        Ok(PortReplayers {
            clock: self.clock.as_deref().map(Self::load_replayer).transpose()?,
            uuid: self.uuid.as_deref().map(Self::load_replayer).transpose()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::cassette::recorder::CassetteRecorder;

    #[test]
    fn default_config_is_empty() {
        let config = CassetteConfig::default();
        assert!(config.is_empty());
        let replayers = config.load_all().unwrap();
        assert!(replayers.clock.is_none());
        assert!(replayers.uuid.is_none());
    }

    #[test]
    fn from_dir_finds_only_existing_port_files() {
        let dir = std::env::temp_dir().join("guidgen_config_from_dir");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();

        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut rec = CassetteRecorder::new(dir.join("clock.cassette.yaml"), "clock");
        rec.record_now(at);
        rec.finish().unwrap();

        let config = CassetteConfig::from_dir(&dir);
        assert_eq!(config.clock, Some(dir.join("clock.cassette.yaml")));
        assert!(config.uuid.is_none());

        let mut replayers = config.load_all().unwrap();
        let clock = replayers.clock.as_mut().unwrap();
        assert_eq!(clock.next_now(), at);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn malformed_cassette_reports_path() {
        let dir = std::env::temp_dir().join("guidgen_config_malformed");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("uuid.cassette.yaml");
        std::fs::write(&path, "interactions: [not, a, cassette").unwrap();

        let config = CassetteConfig { uuid: Some(path.clone()), ..CassetteConfig::default() };
        let err = config.load_all().err().unwrap();
        assert!(err.contains("Failed to parse cassette file"));
        assert!(err.contains("uuid.cassette.yaml"));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn mistyped_value_reports_path() {
        let dir = std::env::temp_dir().join("guidgen_config_mistyped");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("uuid.cassette.yaml");
        std::fs::write(
            &path,
            "name: x\nrecorded_at: 2024-01-01T00:00:00Z\nversion: '0.1.0'\ninteractions:\n  \
             - port: uuid\n    seq: 0\n    value: not-a-uuid\n",
        )
        .unwrap();

        let err = CassetteConfig::load_replayer(&path).err().unwrap();
        assert!(err.contains("Failed to parse cassette file"));
        assert!(err.contains("uuid.cassette.yaml"));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
