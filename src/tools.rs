// tools.rs - External tool catalog and command construction

use crate::config::ToolBinaries;
use crate::runner::ToolCommand;
use colored::*;
use std::path::{Path, PathBuf};

/// The two subdomain enumerators run by discovery and expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Enumerator {
    Subfinder,
    Amass,
}

impl Enumerator {
    pub const ALL: [Enumerator; 2] = [Enumerator::Subfinder, Enumerator::Amass];

    pub fn name(self) -> &'static str {
        match self {
            Enumerator::Subfinder => "subfinder",
            Enumerator::Amass => "amass",
        }
    }

    fn base(self, binaries: &ToolBinaries, domain: &str) -> ToolCommand {
        match self {
            Enumerator::Subfinder => ToolCommand::new(&binaries.subfinder).arg("-d").arg(domain),
            Enumerator::Amass => ToolCommand::new(&binaries.amass)
                .arg("enum")
                .arg("-d")
                .arg(domain),
        }
    }

    /// Enumeration that writes its results to `output`.
    pub fn to_file(self, binaries: &ToolBinaries, domain: &str, output: &Path) -> ToolCommand {
        self.base(binaries, domain).arg("-o").path_arg(output)
    }

    /// Enumeration whose results are read back from stdout.
    pub fn to_stdout(self, binaries: &ToolBinaries, domain: &str) -> ToolCommand {
        self.base(binaries, domain)
    }
}

/// `httpx -silent -o <live>` reading hosts from `hosts`.
pub fn live_probe(binaries: &ToolBinaries, hosts: &Path, live: &Path) -> ToolCommand {
    ToolCommand::new(&binaries.httpx)
        .arg("-silent")
        .arg("-o")
        .path_arg(live)
        .stdin_file(hosts)
}

/// `eyewitness -f <input> --web -d <dir> --no-prompt`
pub fn screenshot(binaries: &ToolBinaries, input: &Path, output_dir: &Path) -> ToolCommand {
    ToolCommand::new(&binaries.eyewitness)
        .arg("-f")
        .path_arg(input)
        .arg("--web")
        .arg("-d")
        .path_arg(output_dir)
        .arg("--no-prompt")
}

/// Tool definition with installation info
pub struct ToolInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub install_cmd: &'static str,
}

pub fn get_tools_list() -> Vec<ToolInfo> {
    vec![
        ToolInfo {
            name: "subfinder",
            description: "Passive subdomain discovery",
            install_cmd: "go install -v github.com/projectdiscovery/subfinder/v2/cmd/subfinder@latest",
        },
        ToolInfo {
            name: "amass",
            description: "In-depth subdomain enumeration",
            install_cmd: "go install -v github.com/owasp-amass/amass/v4/...@master",
        },
        ToolInfo {
            name: "httpx",
            description: "HTTP probing of live hosts",
            install_cmd: "go install -v github.com/projectdiscovery/httpx/cmd/httpx@latest",
        },
        ToolInfo {
            name: "eyewitness",
            description: "Web screenshots",
            install_cmd: "apt-get install -y eyewitness",
        },
    ]
}

fn configured_binary<'a>(binaries: &'a ToolBinaries, name: &str) -> &'a str {
    match name {
        "subfinder" => &binaries.subfinder,
        "amass" => &binaries.amass,
        "httpx" => &binaries.httpx,
        "eyewitness" => &binaries.eyewitness,
        _ => "",
    }
}

/// Resolve a tool binary to a full path, searching PATH for bare names.
pub fn discover_tool_path(binary: &str) -> Option<PathBuf> {
    if binary.is_empty() {
        return None;
    }
    which::which(binary).ok()
}

/// Print which tools resolve and return how many are missing.
pub fn check_tools_status(binaries: &ToolBinaries) -> usize {
    println!("{}", "═══════════════════════════════════════════════════════════════".cyan().bold());
    println!("{}", "  SUBAUTO - TOOL STATUS CHECK".cyan().bold());
    println!("{}", "═══════════════════════════════════════════════════════════════".cyan().bold());

    let tools = get_tools_list();
    let mut missing = 0;

    for tool in &tools {
        let binary = configured_binary(binaries, tool.name);
        match discover_tool_path(binary) {
            Some(path) => println!(
                "  {} {:<12} - {:<32} {}",
                "✓".green(),
                tool.name.green(),
                tool.description,
                format!("→ {}", path.display()).dimmed()
            ),
            None => {
                missing += 1;
                println!(
                    "  {} {:<12} - {:<32} {}",
                    "✗".red(),
                    tool.name.red(),
                    tool.description,
                    format!("Install: {}", tool.install_cmd).dimmed()
                );
            }
        }
    }

    println!();
    println!("{}", format!("  Tools found: {}/{}", tools.len() - missing, tools.len()).white());
    if missing > 0 {
        println!("{}", format!("  ⚠️  {} tool(s) missing - some steps won't work!", missing).red().bold());
    } else {
        println!("{}", "  ✓ All tools installed!".green().bold());
    }

    missing
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enumerator_file_commands() {
        let binaries = ToolBinaries::default();
        let cmd = Enumerator::Subfinder.to_file(&binaries, "example.com", Path::new("example.com_subfinder.txt"));
        assert_eq!(cmd.to_string(), "subfinder -d example.com -o example.com_subfinder.txt");

        let cmd = Enumerator::Amass.to_file(&binaries, "example.com", Path::new("example.com_amass.txt"));
        assert_eq!(cmd.to_string(), "amass enum -d example.com -o example.com_amass.txt");
    }

    #[test]
    fn test_enumerator_stdout_commands() {
        let binaries = ToolBinaries::default();
        assert_eq!(Enumerator::Subfinder.to_stdout(&binaries, "a.example.com").to_string(), "subfinder -d a.example.com");
        assert_eq!(Enumerator::Amass.to_stdout(&binaries, "a.example.com").to_string(), "amass enum -d a.example.com");
    }

    #[test]
    fn test_binary_overrides_are_used() {
        let binaries = ToolBinaries {
            httpx: "/opt/pd/httpx".to_string(),
            ..ToolBinaries::default()
        };
        let cmd = live_probe(&binaries, Path::new("all.txt"), Path::new("live.txt"));
        assert_eq!(cmd.program(), "/opt/pd/httpx");
        assert_eq!(cmd.args(), ["-silent", "-o", "live.txt"]);
    }

    #[test]
    fn test_screenshot_command() {
        let binaries = ToolBinaries::default();
        let cmd = screenshot(&binaries, Path::new("live.txt"), Path::new("screenshots_example.com"));
        assert_eq!(cmd.to_string(), "eyewitness -f live.txt --web -d screenshots_example.com --no-prompt");
    }

    #[test]
    fn test_catalog_covers_configured_tools() {
        let binaries = ToolBinaries::default();
        for tool in get_tools_list() {
            assert_eq!(configured_binary(&binaries, tool.name), tool.name);
        }
    }

    #[test]
    fn test_discover_missing_tool() {
        assert!(discover_tool_path("subauto-definitely-not-installed-tool").is_none());
        assert!(discover_tool_path("").is_none());
    }
}
