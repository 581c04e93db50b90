use std::path::PathBuf;
use std::time::Duration;

/// Pause between recursive expansion targets.
pub const DEFAULT_EXPANSION_DELAY: Duration = Duration::from_millis(100);

/// Executable names (or paths) of the external tools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolBinaries {
    pub subfinder: String,
    pub amass: String,
    pub httpx: String,
    pub eyewitness: String,
}

impl Default for ToolBinaries {
    fn default() -> Self {
        Self {
            subfinder: "subfinder".to_string(),
            amass: "amass".to_string(),
            httpx: "httpx".to_string(),
            eyewitness: "eyewitness".to_string(),
        }
    }
}

/// Settings shared by every stage of a session.
#[derive(Debug, Clone)]
pub struct ReconConfig {
    /// Directory the artifact files are written to.
    pub output_dir: PathBuf,
    pub binaries: ToolBinaries,
    pub expansion_delay: Duration,
    /// Draw the expansion progress bar.
    pub show_progress: bool,
}

impl Default for ReconConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            binaries: ToolBinaries::default(),
            expansion_delay: DEFAULT_EXPANSION_DELAY,
            show_progress: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ReconConfig::default();
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.expansion_delay, Duration::from_millis(100));
        assert_eq!(config.binaries.amass, "amass");
    }
}
