// pipeline.rs - Subdomain discovery, one-level expansion and live host filtering
//
// discover()    -> subfinder + amass against the root domain, file output
// expand()      -> subfinder + amass against every discovered host, stdout only
// live_filter() -> httpx over the sorted full set

use crate::artifacts::ArtifactPaths;
use crate::config::ReconConfig;
use crate::error::{PipelineError, Result};
use crate::runner::CommandRunner;
use crate::subdomains::{count_lines, SubdomainSet};
use crate::tools::{self, Enumerator};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use tracing::{debug, info, warn};

pub struct ReconPipeline<'a> {
    runner: CommandRunner,
    config: &'a ReconConfig,
    paths: ArtifactPaths,
}

impl<'a> ReconPipeline<'a> {
    pub fn new(config: &'a ReconConfig, domain: &str) -> Self {
        Self {
            runner: CommandRunner::new(),
            config,
            paths: ArtifactPaths::new(&config.output_dir, domain),
        }
    }

    pub fn paths(&self) -> &ArtifactPaths {
        &self.paths
    }

    fn domain(&self) -> &str {
        self.paths.domain()
    }

    /// Full find-and-check sequence. Returns the live-subdomains file.
    pub async fn run(&self) -> Result<PathBuf> {
        println!("{}", format!("\n🚀 Starting subdomain discovery for {}...", self.domain()).green().bold());
        info!(domain = self.domain(), "starting find-and-check run");

        let discovered = match self.discover().await {
            Ok(set) => set,
            Err(e) => {
                self.paths.remove_intermediates();
                return Err(e);
            }
        };

        if let Err(e) = self.expand(discovered).await {
            self.paths.remove_intermediates();
            return Err(e);
        }

        self.live_filter().await
    }

    /// Run both enumerators against the root domain and union their output
    /// files. The root domain is always a member of the result.
    ///
    /// A missing enumerator binary aborts discovery; any other tool failure is
    /// reported and the remaining tools still run.
    pub async fn discover(&self) -> Result<SubdomainSet> {
        println!("{}", "\n--- Running initial subdomain tools (subfinder & amass) ---".yellow().bold());

        let mut found = SubdomainSet::new();

        for tool in Enumerator::ALL {
            let output_file = self.paths.tool_output(tool);
            let command = tool.to_file(&self.config.binaries, self.domain(), &output_file);
            println!("{}", format!("[*] Running {}...", tool.name()).cyan());

            match self.runner.run(&command, tool.name()).await {
                Ok(output) if output.success() && output_file.exists() => {
                    match found.extend_from_file(&output_file) {
                        Ok(added) => {
                            debug!(tool = tool.name(), added, "merged tool output");
                            println!(
                                "{}",
                                format!("[+] {} completed. Results saved to {}", tool.name(), output_file.display()).green()
                            );
                        }
                        Err(e) => println!(
                            "{}",
                            format!("[!] Could not read {}: {}", output_file.display(), e).yellow()
                        ),
                    }
                }
                Ok(output) => println!(
                    "{}",
                    format!(
                        "[!] {} failed or produced no output file. Error: {}",
                        tool.name(),
                        output.error_summary()
                    )
                    .yellow()
                ),
                Err(e) if e.is_not_found() => {
                    println!("{}", format!("[!] {} is not installed, cannot proceed", tool.name()).red().bold());
                    return Err(PipelineError::ToolMissing {
                        program: tool.name().to_string(),
                    });
                }
                Err(e) => println!("{}", format!("[!] {} failed: {}", tool.name(), e).yellow()),
            }
        }

        found.insert(self.domain());

        println!("{}", format!("\n✨ Found {} unique subdomains initially.", found.len()).green().bold());
        Ok(found)
    }

    /// Re-run both enumerators against every member except the root domain
    /// and merge what they print. Hosts found here are never expanded again.
    /// The merged set is written sorted to the all-unique file.
    pub async fn expand(&self, mut subdomains: SubdomainSet) -> Result<SubdomainSet> {
        println!("{}", "\n--- Starting recursive subdomain discovery (one level) ---".yellow().bold());

        let targets: Vec<String> = subdomains.iter().cloned().collect();
        let mut newly_found = SubdomainSet::new();

        let progress = if self.config.show_progress {
            let pb = ProgressBar::new(targets.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("  [{bar:40.cyan/blue}] {percent}% Processing recursive target: {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("=>-"),
            );
            pb
        } else {
            ProgressBar::hidden()
        };

        for (i, target) in targets.iter().enumerate() {
            if target == self.domain() {
                continue;
            }

            progress.set_position((i + 1) as u64);
            progress.set_message(target.clone());

            for tool in Enumerator::ALL {
                let command = tool.to_stdout(&self.config.binaries, target);
                match self.runner.run(&command, tool.name()).await {
                    Ok(output) if output.success() => {
                        newly_found.extend_from_text(&output.stdout);
                    }
                    Ok(output) => debug!(tool = tool.name(), host = %target, exit_code = output.exit_code, "expansion run failed"),
                    Err(e) => warn!(tool = tool.name(), host = %target, error = %e, "expansion run could not start"),
                }
            }

            tokio::time::sleep(self.config.expansion_delay).await;
        }
        progress.finish_and_clear();

        subdomains.merge(newly_found);
        println!(
            "{}",
            format!("\n🔄 After recursion, total unique subdomains: {}", subdomains.len()).green().bold()
        );

        let all_unique = self.paths.all_unique();
        subdomains.write_sorted(&all_unique).map_err(|source| PipelineError::Io {
            path: all_unique.clone(),
            source,
        })?;

        Ok(subdomains)
    }

    /// Probe the all-unique file with httpx. Intermediate files are removed
    /// whether or not the probe succeeds; a failed probe leaves no live file.
    pub async fn live_filter(&self) -> Result<PathBuf> {
        println!("{}", "\n--- Checking for live subdomains with httpx ---".yellow().bold());

        // a live file from an earlier run must never be reported as this run's result
        self.paths.remove_live();
        let live = self.paths.live();
        let command = tools::live_probe(&self.config.binaries, &self.paths.all_unique(), &live);
        let result = self.runner.run(&command, "httpx").await;

        self.paths.remove_intermediates();

        let reason = match result {
            Ok(output) if output.success() && live.exists() => {
                println!("{}", format!("✅ Live subdomains identified and saved to {}", live.display()).green());
                let live_count = count_lines(&live).unwrap_or(0);
                println!("{}", format!("📊 Total live subdomains found: {}", live_count).green().bold());
                info!(domain = self.domain(), live_count, "live filter finished");
                return Ok(live);
            }
            Ok(output) => output.error_summary(),
            Err(e) => e.to_string(),
        };

        self.paths.remove_live();
        println!("{}", format!("❌ httpx failed or produced no output. Error: {}", reason).red());
        Err(PipelineError::LiveProbeFailed { reason })
    }
}
