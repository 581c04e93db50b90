// runner.rs - External tool execution
// Every tool is launched from an explicit argument list, never through `sh -c`.

use crate::error::ToolError;
use colored::*;
use std::fmt;
use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// A fully specified tool invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    program: String,
    args: Vec<String>,
    stdin_file: Option<PathBuf>,
}

impl ToolCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            stdin_file: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn path_arg(self, path: &Path) -> Self {
        self.arg(path.to_string_lossy().into_owned())
    }

    /// Feed the contents of `path` to the tool's standard input.
    pub fn stdin_file(mut self, path: &Path) -> Self {
        self.stdin_file = Some(path.to_path_buf());
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        if let Some(ref input) = self.stdin_file {
            write!(f, " < {}", input.display())?;
        }
        Ok(())
    }
}

/// Captured result of a tool that was launched and ran to completion.
#[derive(Debug, Clone, Default)]
pub struct ToolOutput {
    pub stdout: String,
    pub stderr: String,
    /// Process exit code; `-1` when the process was terminated by a signal.
    pub exit_code: i32,
}

impl ToolOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Trimmed stderr, or a placeholder when the tool printed nothing.
    pub fn error_summary(&self) -> String {
        let trimmed = self.stderr.trim();
        if trimmed.is_empty() {
            format!("exit code {}", self.exit_code)
        } else {
            trimmed.to_string()
        }
    }
}

/// Runs tools one at a time, awaiting each to completion.
#[derive(Debug, Clone, Default)]
pub struct CommandRunner;

impl CommandRunner {
    pub fn new() -> Self {
        Self
    }

    /// Run `command`, capturing stdout, stderr and exit code.
    ///
    /// A nonzero exit is returned as `Ok`; only a failure to launch the
    /// process is an `Err`. `label` names the tool in console diagnostics.
    pub async fn run(&self, command: &ToolCommand, label: &str) -> Result<ToolOutput, ToolError> {
        debug!(tool = label, command = %command, "launching tool");

        let stdin = match command.stdin_file {
            Some(ref path) => match File::open(path) {
                Ok(file) => Stdio::from(file),
                Err(source) => {
                    eprintln!(
                        "{}",
                        format!("🚨 Error: cannot open input {} for {}: {}", path.display(), label, source).red()
                    );
                    return Err(ToolError::Launch {
                        program: command.program.clone(),
                        source,
                    });
                }
            },
            None => Stdio::null(),
        };

        let result = Command::new(&command.program)
            .args(&command.args)
            .stdin(stdin)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await;

        let output = match result {
            Ok(output) => output,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                eprintln!(
                    "{}",
                    format!(
                        "🚨 Error: Tool '{}' ({}) not found. Please ensure it is installed and in your system's PATH.",
                        label, command.program
                    )
                    .red()
                    .bold()
                );
                return Err(ToolError::BinaryNotFound {
                    program: command.program.clone(),
                });
            }
            Err(source) => {
                eprintln!("{}", format!("🚨 An unexpected error occurred running {}: {}", label, source).red());
                return Err(ToolError::Launch {
                    program: command.program.clone(),
                    source,
                });
            }
        };

        let exit_code = output.status.code().unwrap_or(-1);
        debug!(tool = label, exit_code, "tool finished");

        Ok(ToolOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code,
        })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_display_includes_args_and_stdin() {
        let cmd = ToolCommand::new("httpx")
            .arg("-silent")
            .arg("-o")
            .arg("live.txt")
            .stdin_file(Path::new("all.txt"));
        assert_eq!(cmd.to_string(), "httpx -silent -o live.txt < all.txt");
    }

    #[tokio::test]
    async fn test_captures_stdout_and_exit_code() {
        let runner = CommandRunner::new();
        let cmd = ToolCommand::new("sh").arg("-c").arg("echo one; echo two >&2; exit 3");
        let output = runner.run(&cmd, "sh").await.unwrap();

        assert_eq!(output.stdout, "one\n");
        assert_eq!(output.stderr.trim(), "two");
        assert_eq!(output.exit_code, 3);
        assert!(!output.success());
    }

    #[tokio::test]
    async fn test_missing_binary_is_typed() {
        let runner = CommandRunner::new();
        let cmd = ToolCommand::new("subauto-definitely-not-installed-tool").arg("-d");
        let err = runner.run(&cmd, "ghost").await.unwrap_err();

        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_arguments_are_not_shell_parsed() {
        let runner = CommandRunner::new();
        let cmd = ToolCommand::new("echo").arg("example.com; rm -rf /tmp/nothing");
        let output = runner.run(&cmd, "echo").await.unwrap();

        assert_eq!(output.stdout.trim(), "example.com; rm -rf /tmp/nothing");
    }

    #[tokio::test]
    async fn test_stdin_file_is_fed_to_tool() {
        let mut input = NamedTempFile::new().unwrap();
        writeln!(input, "a.example.com").unwrap();
        writeln!(input, "b.example.com").unwrap();

        let runner = CommandRunner::new();
        let cmd = ToolCommand::new("cat").stdin_file(input.path());
        let output = runner.run(&cmd, "cat").await.unwrap();

        assert!(output.success());
        assert_eq!(output.stdout, "a.example.com\nb.example.com\n");
    }

    #[tokio::test]
    async fn test_missing_stdin_file_is_launch_error() {
        let runner = CommandRunner::new();
        let cmd = ToolCommand::new("cat").stdin_file(Path::new("/nonexistent/subauto/input.txt"));
        let err = runner.run(&cmd, "cat").await.unwrap_err();

        assert!(!err.is_not_found());
    }
}
