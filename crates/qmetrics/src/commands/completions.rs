use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::CommandFactory;
use clap_complete::Shell as Generator;
use qmetrics_config as cli;
use tracing::debug;

pub(crate) fn handle(args: cli::CompletionsArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_completions(args.shell, &mut out)?;
    out.flush().context("Failed to write completion script")
}

fn generator(shell: cli::Shell) -> Generator {
    match shell {
        cli::Shell::Bash => Generator::Bash,
        cli::Shell::Elvish => Generator::Elvish,
        cli::Shell::Fish => Generator::Fish,
        cli::Shell::Powershell => Generator::PowerShell,
        cli::Shell::Zsh => Generator::Zsh,
    }
}

/// Emit the completion script for `shell` covering every subcommand.
pub(crate) fn write_completions<W: Write>(shell: cli::Shell, out: &mut W) -> Result<()> {
    let mut cmd = cli::Cli::command();
    let bin = cmd.get_name().to_string();
    debug!(?shell, bin = %bin, "generating completions");
    clap_complete::generate(generator(shell), &mut cmd, bin, out);
    Ok(())
}
