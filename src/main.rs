use std::io::Write;
use std::process;

use anyhow::Context;
use powerprompt::cli::{self, Invocation};
use powerprompt::config;
use powerprompt::prompt::{PromptBuilder, PromptEnv};
use powerprompt::shell::ShellInit;
use powerprompt::styling::{ERROR, ERROR_EMOJI, WARNING, WARNING_EMOJI, eprintln};

fn main() {
    let invocation = match cli::parse(std::env::args_os()) {
        Ok(invocation) => invocation,
        Err(e) => e.exit(),
    };

    init_logging(invocation.verbose);

    if let Err(e) = run(&invocation) {
        eprintln!("{ERROR_EMOJI} {ERROR}{e:#}{ERROR:#}");
        process::exit(1);
    }
}

/// Logging is off unless asked for; anything on stderr shows up when the
/// shell draws the prompt.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "off" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .init();
}

fn run(invocation: &Invocation) -> anyhow::Result<()> {
    let base = config::load_user().unwrap_or_else(|e| {
        eprintln!("{WARNING_EMOJI} {WARNING}Ignoring user config: {e}{WARNING:#}");
        Default::default()
    });
    let options = invocation.options(base)?;
    log::debug!("options: {options:?}");

    // Plain std stdout: the prompt is made of escape sequences that an
    // auto-detecting stream would strip when stdout isn't a terminal.
    let mut stdout = std::io::stdout().lock();

    if invocation.init {
        let script = ShellInit::new("powerprompt", &options)
            .generate()
            .context("Failed to render shell integration")?;
        writeln!(stdout, "{script}")?;
    } else {
        let env = PromptEnv::from_process().context("Failed to read the working directory")?;
        log::debug!("environment: {env:?}");
        let prompt = PromptBuilder::new(options, env).render();
        stdout.write_all(prompt.as_bytes())?;
    }

    stdout.flush()?;
    Ok(())
}
