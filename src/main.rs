// main.rs - SubAuto - Subdomain Automation
// Purpose: Subdomain discovery (subfinder + amass), one-level recursive
//          expansion, live host check (httpx) and screenshots (eyewitness)
// License: MIT

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use subauto::config::{ReconConfig, ToolBinaries};
use subauto::menu::{Menu, ToolActions};
use subauto::tools;
use tracing_subscriber::EnvFilter;

/// SubAuto - Subdomain Automation
#[derive(Parser, Debug)]
#[command(
    name = "SubAuto",
    version,
    about = "Find subdomains, identify live ones, and take screenshots",
    long_about = r#"
SubAuto drives external recon tools from an interactive menu:

  1. Subdomain Finding & Live Check
     • subfinder + amass against the target domain
     • one level of recursive discovery on every subdomain found
     • httpx to keep only live hosts
  2. Screenshotting Live Subdomains
     • eyewitness against the live host list
  3. Exit

OUTPUT FILES (in --output-dir):

  {domain}_subdomains.txt     # Live subdomains
  screenshots_{domain}/       # eyewitness report

EXAMPLES:

  subauto
  subauto -d example.com
  subauto -d example.com -o results --delay-ms 250
  subauto --check-tools
"#
)]
struct Args {
    /// Target domain (skips the domain prompt)
    #[arg(short, long, value_name = "DOMAIN", help_heading = "Target Options")]
    domain: Option<String>,

    /// Directory the result files are written to
    #[arg(short, long, value_name = "DIR", default_value = ".", help_heading = "Output")]
    output_dir: PathBuf,

    /// Pause between recursive discovery targets
    #[arg(long, value_name = "MS", default_value_t = 100, help_heading = "Performance")]
    delay_ms: u64,

    /// subfinder executable
    #[arg(long, value_name = "PATH", default_value = "subfinder", help_heading = "Tool Management")]
    subfinder_bin: String,

    /// amass executable
    #[arg(long, value_name = "PATH", default_value = "amass", help_heading = "Tool Management")]
    amass_bin: String,

    /// httpx executable
    #[arg(long, value_name = "PATH", default_value = "httpx", help_heading = "Tool Management")]
    httpx_bin: String,

    /// eyewitness executable
    #[arg(long, value_name = "PATH", default_value = "eyewitness", help_heading = "Tool Management")]
    eyewitness_bin: String,

    /// Check which tools are installed and exit
    #[arg(long, help_heading = "Tool Management")]
    check_tools: bool,

    /// Show debug diagnostics (commands run, exit codes)
    #[arg(short, long, help_heading = "Output")]
    verbose: bool,

    /// Disable colored output
    #[arg(long, help_heading = "Output")]
    no_color: bool,
}

impl Args {
    fn recon_config(&self) -> ReconConfig {
        ReconConfig {
            output_dir: self.output_dir.clone(),
            binaries: ToolBinaries {
                subfinder: self.subfinder_bin.clone(),
                amass: self.amass_bin.clone(),
                httpx: self.httpx_bin.clone(),
                eyewitness: self.eyewitness_bin.clone(),
            },
            expansion_delay: Duration::from_millis(self.delay_ms),
            show_progress: true,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "subauto=debug" } else { "subauto=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.no_color {
        colored::control::set_override(false);
    }
    init_tracing(args.verbose);

    let config = args.recon_config();

    if args.check_tools {
        let missing = tools::check_tools_status(&config.binaries);
        if missing > 0 {
            std::process::exit(1);
        }
        return Ok(());
    }

    std::fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("Failed to create output directory: {}", config.output_dir.display()))?;

    print_banner();

    let stdin = io::stdin();
    let mut menu = match args.domain.as_deref() {
        Some(domain) => Menu::with_domain(stdin.lock(), io::stdout(), domain),
        None => Menu::new(stdin.lock(), io::stdout()),
    };
    let mut actions = ToolActions::new(config);

    menu.run(&mut actions).await.context("Terminal I/O failed")?;

    Ok(())
}

fn print_banner() {
    println!("{}", "Welcome to the Subdomain Automation Script! 🚀".cyan().bold());
    println!("{}", "This script helps you find subdomains, identify live ones, and take screenshots.".white());
    println!("{}", "----------------------------------------------------------------------".cyan());
}
