//! Running external commands.
//!
//! Probes shell out to `git` and `svn`. Everything goes through [`Cmd`] so
//! each invocation is logged at debug level with its duration, which is the
//! first thing to look at when a prompt feels slow (`RUST_LOG=debug`).

use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use std::time::Instant;

/// Shell configuration for pipelines like `svn status | grep -c ...`
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Path to the shell executable
    pub executable: PathBuf,
    /// Arguments to pass before the command
    pub args: Vec<String>,
}

impl ShellConfig {
    /// POSIX `sh -c`, resolved via PATH
    pub fn posix() -> Self {
        Self {
            executable: PathBuf::from("sh"),
            args: vec!["-c".to_string()],
        }
    }
}

/// Builder for executing commands with logging.
///
/// ```no_run
/// use powerprompt::shell_exec::Cmd;
///
/// let output = Cmd::new("git")
///     .args(["status", "-sb", "--ignore-submodules"])
///     .current_dir("/tmp")
///     .context("git")
///     .run()?;
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct Cmd {
    program: String,
    args: Vec<String>,
    current_dir: Option<PathBuf>,
    context: Option<String>,
}

impl Cmd {
    /// Create a new command builder for the given program.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            current_dir: None,
            context: None,
        }
    }

    /// Run `script` through the POSIX shell.
    pub fn shell(script: impl Into<String>) -> Self {
        let shell = ShellConfig::posix();
        Self::new(shell.executable.to_string_lossy())
            .args(shell.args)
            .arg(script)
    }

    /// Add a single argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Add multiple arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Set the working directory for the command.
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    /// Set the logging context (typically the probe name).
    pub fn context(mut self, ctx: impl Into<String>) -> Self {
        self.context = Some(ctx.into());
        self
    }

    /// Execute the command and capture its output.
    ///
    /// Stdin is closed so a command that wants input fails instead of
    /// hanging the prompt. The exit status is left for the caller to judge.
    pub fn run(self) -> std::io::Result<Output> {
        let cmd_str = if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        };

        match &self.context {
            Some(ctx) => log::debug!("$ {} [{}]", cmd_str, ctx),
            None => log::debug!("$ {}", cmd_str),
        }

        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(ref dir) = self.current_dir {
            cmd.current_dir(dir);
        }

        let t0 = Instant::now();
        let result = cmd.output();
        let dur_us = t0.elapsed().as_micros();

        let ctx = self.context.as_deref().unwrap_or("-");
        match &result {
            Ok(output) => log::debug!(
                "[pp-trace] context={} cmd=\"{}\" dur_us={} ok={}",
                ctx,
                cmd_str,
                dur_us,
                output.status.success()
            ),
            Err(e) => log::debug!(
                "[pp-trace] context={} cmd=\"{}\" dur_us={} err=\"{}\"",
                ctx,
                cmd_str,
                dur_us,
                e
            ),
        }

        result
    }
}
