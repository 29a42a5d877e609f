use anyhow::Result;
use clap::Command;
use clap_complete::{Shell, generate};
use std::io::{self, Write};

pub const COMPLETION_HELP: &str = "SUPPORTED SHELLS:
  bash, zsh, fish, powershell, elvish

INSTALLATION:
  bash:  harx completion --shell bash >> ~/.bashrc
  zsh:   harx completion --shell zsh > \"${fpath[1]}/_harx\"
  fish:  harx completion --shell fish > ~/.config/fish/completions/harx.fish";

/// Write the completion script for `shell` to `out`
pub fn write_script<W: Write>(shell: Shell, cmd: &mut Command, out: &mut W) {
    let bin_name = cmd.get_name().to_string();
    generate(shell, cmd, bin_name, out);
}

pub fn execute(shell: Shell, cmd: &mut Command) -> Result<()> {
    tracing::debug!("Generating {} completion script", shell);
    write_script(shell, cmd, &mut io::stdout().lock());
    Ok(())
}
