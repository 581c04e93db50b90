// artifacts.rs - File naming for one target domain
//
// {output_dir}/
// ├── {domain}_subfinder.txt              # raw subfinder output (deleted after use)
// ├── {domain}_amass.txt                  # raw amass output (deleted after use)
// ├── {domain}_all_unique_subdomains.txt  # sorted full set (deleted after use)
// ├── {domain}_subdomains.txt             # live hosts (kept)
// └── screenshots_{domain}/               # eyewitness output (kept)

use crate::tools::Enumerator;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    output_dir: PathBuf,
    domain: String,
}

impl ArtifactPaths {
    pub fn new(output_dir: &Path, domain: &str) -> Self {
        Self {
            output_dir: output_dir.to_path_buf(),
            domain: domain.to_string(),
        }
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn tool_output(&self, tool: Enumerator) -> PathBuf {
        self.output_dir.join(format!("{}_{}.txt", self.domain, tool.name()))
    }

    pub fn all_unique(&self) -> PathBuf {
        self.output_dir.join(format!("{}_all_unique_subdomains.txt", self.domain))
    }

    pub fn live(&self) -> PathBuf {
        self.output_dir.join(format!("{}_subdomains.txt", self.domain))
    }

    pub fn screenshots_dir(&self) -> PathBuf {
        self.output_dir.join(format!("screenshots_{}", self.domain))
    }

    /// Every file that is deleted once the live filter has run.
    pub fn intermediates(&self) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = Enumerator::ALL.iter().map(|t| self.tool_output(*t)).collect();
        files.push(self.all_unique());
        files
    }

    /// Remove intermediate files; files that do not exist are skipped.
    pub fn remove_intermediates(&self) {
        for path in self.intermediates() {
            remove_if_present(&path);
        }
    }

    /// Remove the live-subdomains file left by an earlier run.
    pub fn remove_live(&self) {
        remove_if_present(&self.live());
    }
}

fn remove_if_present(path: &Path) {
    match fs::remove_file(path) {
        Ok(()) => debug!(path = %path.display(), "removed file"),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => warn!(path = %path.display(), error = %e, "could not remove file"),
    }
}
