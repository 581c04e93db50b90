// menu.rs - Interactive session driver
//
// AwaitingDomain --(domain)--> MenuLoop --(3 / end of input)--> Exited
//        \--(empty)------------------------------------------->/

use crate::artifacts::ArtifactPaths;
use crate::config::ReconConfig;
use crate::error::PipelineError;
use crate::pipeline::ReconPipeline;
use crate::screenshot::{screenshot_hosts, ScreenshotOutcome};
use colored::*;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// The operations the menu dispatches to.
#[allow(async_fn_in_trait)]
pub trait ReconActions {
    /// Discovery, expansion and live filtering; returns the live file.
    async fn find_and_check(&mut self, domain: &str) -> Result<PathBuf, PipelineError>;

    async fn screenshot(&mut self, domain: &str, input: &Path) -> ScreenshotOutcome;

    /// File offered when the screenshot prompt is left empty.
    fn default_live_file(&self, domain: &str) -> PathBuf;
}

/// Actions backed by the real external tools.
pub struct ToolActions {
    config: ReconConfig,
}

impl ToolActions {
    pub fn new(config: ReconConfig) -> Self {
        Self { config }
    }
}

impl ReconActions for ToolActions {
    async fn find_and_check(&mut self, domain: &str) -> Result<PathBuf, PipelineError> {
        ReconPipeline::new(&self.config, domain).run().await
    }

    async fn screenshot(&mut self, domain: &str, input: &Path) -> ScreenshotOutcome {
        screenshot_hosts(&self.config, domain, input).await
    }

    fn default_live_file(&self, domain: &str) -> PathBuf {
        ArtifactPaths::new(&self.config.output_dir, domain).live()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuState {
    AwaitingDomain,
    MenuLoop { domain: String },
    Exited,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    FindSubdomains,
    Screenshot,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::FindSubdomains),
            "2" => Some(MenuChoice::Screenshot),
            "3" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

pub struct Menu<R, W> {
    input: R,
    output: W,
    state: MenuState,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            state: MenuState::AwaitingDomain,
        }
    }

    /// Start directly in the menu loop for a domain given up front.
    pub fn with_domain(input: R, output: W, domain: &str) -> Self {
        let state = match domain.trim() {
            "" => MenuState::AwaitingDomain,
            d => MenuState::MenuLoop { domain: d.to_string() },
        };
        Self { input, output, state }
    }

    pub fn state(&self) -> &MenuState {
        &self.state
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Drive the session until it reaches `Exited`.
    pub async fn run<A: ReconActions>(&mut self, actions: &mut A) -> io::Result<()> {
        while self.state != MenuState::Exited {
            self.step(actions).await?;
        }
        Ok(())
    }

    /// Perform one transition.
    pub async fn step<A: ReconActions>(&mut self, actions: &mut A) -> io::Result<()> {
        let next = match self.state.clone() {
            MenuState::AwaitingDomain => self.await_domain()?,
            MenuState::MenuLoop { domain } => self.menu_iteration(&domain, actions).await?,
            MenuState::Exited => MenuState::Exited,
        };
        self.state = next;
        Ok(())
    }

    fn await_domain(&mut self) -> io::Result<MenuState> {
        let domain = self
            .prompt("Please enter the target domain (e.g., example.com): ")?
            .unwrap_or_default();
        if domain.is_empty() {
            writeln!(self.output, "{}", "Domain cannot be empty. Exiting.".red())?;
            return Ok(MenuState::Exited);
        }
        Ok(MenuState::MenuLoop { domain })
    }

    async fn menu_iteration<A: ReconActions>(&mut self, domain: &str, actions: &mut A) -> io::Result<MenuState> {
        writeln!(self.output, "\n{}", "--- Main Menu ---".cyan().bold())?;
        writeln!(self.output, "1. Subdomain Finding & Live Check")?;
        writeln!(self.output, "2. Screenshotting Live Subdomains")?;
        writeln!(self.output, "3. Exit")?;

        let Some(line) = self.prompt("Enter your choice (1, 2, or 3): ")? else {
            writeln!(self.output, "Exiting the script. Goodbye!")?;
            return Ok(MenuState::Exited);
        };

        match MenuChoice::parse(&line) {
            Some(MenuChoice::FindSubdomains) => {
                match actions.find_and_check(domain).await {
                    Ok(live) => writeln!(
                        self.output,
                        "{}",
                        format!("\n🎉 Subdomain finding completed! Live subdomains saved to: {}", live.display())
                            .green()
                            .bold()
                    )?,
                    Err(e) => writeln!(
                        self.output,
                        "{}",
                        format!("\n😔 Subdomain finding failed or no live subdomains were found: {}", e).yellow()
                    )?,
                }
            }
            Some(MenuChoice::Screenshot) => {
                let default_input = actions.default_live_file(domain);
                let answer = self
                    .prompt(&format!(
                        "\nEnter the path to the file containing live subdomains to screenshot (default: {}): ",
                        default_input.display()
                    ))?
                    .unwrap_or_default();
                let input = if answer.is_empty() {
                    default_input
                } else {
                    PathBuf::from(answer)
                };

                actions.screenshot(domain, &input).await;
                writeln!(self.output, "{}", "\n📸 Screenshotting process finished.".cyan())?;
            }
            Some(MenuChoice::Exit) => {
                writeln!(self.output, "Exiting the script. Goodbye!")?;
                return Ok(MenuState::Exited);
            }
            None => writeln!(self.output, "{}", "Invalid choice. Please enter 1, 2, or 3.".red())?,
        }

        Ok(MenuState::MenuLoop {
            domain: domain.to_string(),
        })
    }

    /// Print `message` and read one trimmed line; `None` at end of input.
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
