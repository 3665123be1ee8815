//! External tool invocation: binary resolution and bounded command
//! execution for the Biome and ESLint runners.

pub mod biome;
pub mod eslint;

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use thiserror::Error;

/// Timeout for a single external linter invocation.
pub const COMMAND_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("failed to launch `{command}`: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },
    #[error("`{command}` timed out after {timeout:?}")]
    Timeout { command: String, timeout: Duration },
    #[error("`{command}` exited with status {status}: {stderr}")]
    Failed {
        command: String,
        status: i32,
        stderr: String,
    },
    #[error("config file not found: {path}")]
    ConfigNotFound { path: PathBuf },
    #[error("could not parse `{command}` output: {reason}")]
    UnparseableOutput { command: String, reason: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Captured output of a completed command.
#[derive(Debug)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub status: i32,
}

/// Resolve a linter binary: prefer a project-local `node_modules/.bin`
/// executable, fall back to the bare name looked up via PATH.
pub fn resolve_binary(name: &str, cwd: &Path) -> PathBuf {
    let local = cwd.join("node_modules").join(".bin").join(name);
    if is_executable(&local) { local } else { PathBuf::from(name) }
}

fn is_executable(path: &Path) -> bool {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        path.metadata()
            .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
            .unwrap_or(false)
    }
    #[cfg(not(unix))]
    {
        path.is_file()
    }
}

/// Run a command to completion, killing it when it outlives `timeout`.
///
/// A non-zero exit status is reported through `CommandOutput`, not as an
/// error; callers decide whether it is fatal.
pub fn run_command(
    program: &Path,
    args: &[String],
    cwd: &Path,
    timeout: Duration,
) -> Result<CommandOutput, ToolError> {
    let command_display = program.display().to_string();
    log::debug!("running `{command_display}` with args {args:?}");

    let mut child = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| ToolError::Spawn {
            command: command_display.clone(),
            source,
        })?;

    // The pipes must be drained while waiting, or a chatty child can fill
    // them and deadlock against us.
    let stdout_reader = spawn_reader(child.stdout.take());
    let stderr_reader = spawn_reader(child.stderr.take());

    let started = Instant::now();
    let status = loop {
        match child.try_wait()? {
            Some(status) => break status,
            None => {
                if started.elapsed() >= timeout {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(ToolError::Timeout {
                        command: command_display,
                        timeout,
                    });
                }
                thread::sleep(Duration::from_millis(25));
            }
        }
    };

    let stdout = stdout_reader.join().unwrap_or_default();
    let stderr = stderr_reader.join().unwrap_or_default();

    Ok(CommandOutput {
        stdout,
        stderr,
        status: status.code().unwrap_or(-1),
    })
}

fn spawn_reader<R: Read + Send + 'static>(source: Option<R>) -> thread::JoinHandle<String> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut source) = source {
            let _ = source.read_to_end(&mut buf);
        }
        String::from_utf8_lossy(&buf).into_owned()
    })
}
