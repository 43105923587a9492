//! Records port results into a cassette file.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::format::{Cassette, Interaction};

/// Collects clock readings and UUIDs in call order and writes them as a
/// YAML cassette file.
#[derive(Debug)]
pub struct CassetteRecorder {
    path: PathBuf,
    name: String,
    interactions: Vec<Interaction>,
}

impl CassetteRecorder {
    /// Create a new recorder that will write to the given path.
    pub fn new(path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self { path: path.into(), name: name.into(), interactions: Vec::new() }
    }

    fn next_seq(&self) -> u64 {
        self.interactions.len() as u64
    }

    /// Record a clock reading.
    pub fn record_now(&mut self, now: DateTime<Utc>) {
        let seq = self.next_seq();
        self.interactions.push(Interaction::Clock { seq, now });
    }

    /// Record an issued UUID.
    pub fn record_uuid(&mut self, value: Uuid) {
        let seq = self.next_seq();
        self.interactions.push(Interaction::Uuid { seq, value });
    }

    /// Finish recording and write the cassette YAML file to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn finish(self) -> Result<PathBuf, std::io::Error> {
        let count = self.interactions.len();
        let cassette = Cassette {
            name: self.name,
            recorded_at: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            interactions: self.interactions,
        };
        let yaml = serde_yaml::to_string(&cassette).map_err(std::io::Error::other)?;
        std::fs::write(&self.path, yaml)?;
        tracing::debug!(path = %self.path.display(), count, "cassette written");
        Ok(self.path)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn record_and_finish() {
        let dir = std::env::temp_dir().join("guidgen_cassette_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("test.cassette.yaml");
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let id = Uuid::parse_str("00000001-0000-1000-8000-010000000001").unwrap();

        let mut recorder = CassetteRecorder::new(&path, "test-recording");
        recorder.record_now(at);
        recorder.record_uuid(id);
        recorder.record_now(at + chrono::TimeDelta::seconds(1));

        let result_path = recorder.finish().expect("finish should succeed");
        assert_eq!(result_path, path);

        let content = std::fs::read_to_string(&path).unwrap();
        let cassette: Cassette = serde_yaml::from_str(&content).unwrap();

        assert_eq!(cassette.name, "test-recording");
        assert_eq!(cassette.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(
            cassette.interactions,
            vec![
                Interaction::Clock { seq: 0, now: at },
                Interaction::Uuid { seq: 1, value: id },
                Interaction::Clock { seq: 2, now: at + chrono::TimeDelta::seconds(1) },
            ]
        );

        let _ = std::fs::remove_dir_all(&dir);
    }
}
