use crate::artifacts::ArtifactPaths;
use crate::config::ReconConfig;
use crate::runner::CommandRunner;
use crate::tools;
use colored::*;
use std::path::{Path, PathBuf};

/// Result of one screenshot request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenshotOutcome {
    /// eyewitness exited cleanly; screenshots are in the directory.
    Completed(PathBuf),
    /// The host list does not exist; nothing was run.
    InputMissing(PathBuf),
    /// eyewitness could not be started or exited nonzero.
    Failed(String),
}

/// Screenshot every host listed in `input` into `screenshots_<domain>`.
pub async fn screenshot_hosts(config: &ReconConfig, domain: &str, input: &Path) -> ScreenshotOutcome {
    if !input.exists() {
        println!(
            "{}",
            format!(
                "🚨 Error: Input file '{}' not found. Please ensure the path is correct.",
                input.display()
            )
            .red()
        );
        return ScreenshotOutcome::InputMissing(input.to_path_buf());
    }

    let output_dir = ArtifactPaths::new(&config.output_dir, domain).screenshots_dir();
    println!("{}", format!("\n📸 Starting screenshot process for domains in '{}'...", input.display()).cyan());
    println!("{}", format!("   Screenshots will be saved to: {}", output_dir.display()).cyan());

    let command = tools::screenshot(&config.binaries, input, &output_dir);
    match CommandRunner::new().run(&command, "eyewitness").await {
        Ok(output) if output.success() => {
            println!(
                "{}",
                format!(
                    "✅ Screenshotting completed successfully. Check the '{}' directory.",
                    output_dir.display()
                )
                .green()
            );
            ScreenshotOutcome::Completed(output_dir)
        }
        Ok(output) => {
            let reason = output.error_summary();
            println!("{}", format!("❌ Screenshotting failed. Error: {}", reason).red());
            ScreenshotOutcome::Failed(reason)
        }
        Err(e) => ScreenshotOutcome::Failed(e.to_string()),
    }
}
