//! Loading schedule specs from YAML

use super::schema::ScheduleSpec;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Parse a schedule spec from a YAML string
pub fn parse_schedule_spec(yaml: &str) -> Result<ScheduleSpec> {
    serde_yaml::from_str(yaml)
        .map_err(|e| Error::Config(format!("Failed to parse YAML config: {e}")))
}

/// Load a schedule spec from a YAML file
///
/// The spec is parsed but not validated; call [`ScheduleSpec::build`] or
/// [`super::validate_schedule`] before use.
pub fn load_schedule_spec<P: AsRef<Path>>(path: P) -> Result<ScheduleSpec> {
    let path = path.as_ref();
    let yaml = fs::read_to_string(path).map_err(|e| {
        Error::Config(format!("Failed to read config file {}: {e}", path.display()))
    })?;
    tracing::debug!(path = %path.display(), "loaded schedule config");
    parse_schedule_spec(&yaml)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_spec() {
        let spec = parse_schedule_spec(
            "start_lr: 0.0\nref_lr: 1.0e-3\nfinal_lr: 1.0e-5\nwarmup_steps: 100\ntotal_steps: 1000\n",
        )
        .unwrap();
        assert_eq!(spec.ref_lr, 1e-3);
        assert_eq!(spec.final_lr, 1e-5);
        assert_eq!(spec.warmup_steps, 100);
        assert_eq!(spec.total_steps, 1000);
    }

    #[test]
    fn test_parse_defaults() {
        let spec = parse_schedule_spec("ref_lr: 0.1\ntotal_steps: 10\n").unwrap();
        assert_eq!(spec.start_lr, 0.0);
        assert_eq!(spec.final_lr, 0.0);
        assert_eq!(spec.warmup_steps, 0);
    }

    #[test]
    fn test_parse_missing_required_field() {
        let err = parse_schedule_spec("ref_lr: 0.1\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("total_steps"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "ref_lr: 0.01\nwarmup_steps: 5\ntotal_steps: 50").unwrap();

        let spec = load_schedule_spec(file.path()).unwrap();
        assert_eq!(spec.warmup_steps, 5);
        assert_eq!(spec.total_steps, 50);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_schedule_spec("/nonexistent/schedule.yaml").unwrap_err();
        assert!(err.to_string().contains("schedule.yaml"));
    }
}
