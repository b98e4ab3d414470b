use super::errors::ValuesResult;
use super::values::SimulationConfig;
use crate::constants::{APP_DIR, DOCUMENTS_DIR, PROFILE_DIR, VALUES_FILE};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// `<home>/Documents/TwoBodyProblem/default`, or a relative path when the
/// home directory is unknown.
pub fn default_values_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DOCUMENTS_DIR)
        .join(APP_DIR)
        .join(PROFILE_DIR)
}

pub fn default_values_path() -> PathBuf {
    default_values_dir().join(VALUES_FILE)
}

fn ensure_parent_dir(path: &Path) -> ValuesResult<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.is_dir() => {
            debug!("Creating directory {}", parent.display());
            fs::create_dir_all(parent)?;
            Ok(())
        }
        _ => Ok(()),
    }
}

impl SimulationConfig {
    /// Reads values from a YAML file. The containing directory is created
    /// if needed; a missing file is still an error.
    pub fn from_file(path: impl AsRef<Path>) -> ValuesResult<Self> {
        let path = path.as_ref();
        ensure_parent_dir(path)?;

        let text = fs::read_to_string(path)?;
        let values = Self::from_yaml_str(&text)?;
        info!("Loaded values from {}", path.display());
        Ok(values)
    }

    pub fn from_default_file() -> ValuesResult<Self> {
        Self::from_file(default_values_path())
    }

    /// Writes the values as YAML, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> ValuesResult<()> {
        let path = path.as_ref();
        ensure_parent_dir(path)?;

        fs::write(path, self.to_yaml_string()?)?;
        info!("Saved values to {}", path.display());
        Ok(())
    }

    pub fn save_default(&self) -> ValuesResult<()> {
        self.save(default_values_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::errors::ValuesError;
    use std::env;
    use std::io;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("twobody-storage-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_default_path_layout() {
        let path = default_values_path();
        assert!(path.ends_with("Documents/TwoBodyProblem/default/values.yml"));
        assert_eq!(path.parent(), Some(default_values_dir().as_path()));
    }

    #[test]
    fn test_save_creates_directories() {
        let dir = scratch_dir("nested");
        let path = dir.join("a").join("b").join("values.yml");

        SimulationConfig::default().save(&path).unwrap();
        assert!(path.is_file());
        assert_eq!(SimulationConfig::from_file(&path).unwrap(), SimulationConfig::default());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_save_overwrites() {
        let dir = scratch_dir("overwrite");
        let path = dir.join("values.yml");
        fs::create_dir_all(&dir).unwrap();
        fs::write(&path, "this file is replaced entirely by save\n".repeat(20)).unwrap();

        let mut values = SimulationConfig::default();
        values.set_distance(42.0);
        values.save(&path).unwrap();
        assert_eq!(SimulationConfig::from_file(&path).unwrap().distance(), 42.0);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_file_creates_directory_then_fails() {
        let dir = scratch_dir("missing");
        let path = dir.join("values.yml");

        let err = SimulationConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, ValuesError::Io(ref e) if e.kind() == io::ErrorKind::NotFound));
        assert!(dir.is_dir());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_malformed_file() {
        let dir = scratch_dir("malformed");
        let path = dir.join("values.yml");
        fs::create_dir_all(&dir).unwrap();
        fs::write(&path, "central_mass: [1, 2\n").unwrap();

        let err = SimulationConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, ValuesError::Yaml(_)));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_save_below_a_file_fails() {
        let dir = scratch_dir("below-file");
        let blocker = dir.join("blocker");
        fs::create_dir_all(&dir).unwrap();
        fs::write(&blocker, "").unwrap();

        let err = SimulationConfig::default()
            .save(blocker.join("values.yml"))
            .unwrap_err();
        assert!(matches!(err, ValuesError::Io(_)));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_save_onto_a_directory_fails() {
        let dir = scratch_dir("onto-dir");
        let target = dir.join("values.yml");
        fs::create_dir_all(&target).unwrap();

        let err = SimulationConfig::default().save(&target).unwrap_err();
        assert!(matches!(err, ValuesError::Io(_)));
        assert!(target.is_dir());

        fs::remove_dir_all(&dir).unwrap();
    }
}
