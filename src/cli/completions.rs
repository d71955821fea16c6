//! Shell completions generation.
//!
//! Scripts come from `clap_complete` using the derived [`Cli`] command.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::SparklineError;

/// Generate shell completions for the specified shell.
///
/// # Errors
///
/// Returns an error if the generated script is not valid UTF-8.
pub fn generate_completions(shell: Shell) -> Result<String, SparklineError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "sparklines", &mut buf);
    String::from_utf8(buf).map_err(|e| SparklineError::InvalidArgument(format!("UTF-8 error: {e}")))
}

/// Get shell from string name.
#[must_use]
pub fn shell_from_str(s: &str) -> Option<Shell> {
    match s.to_lowercase().as_str() {
        "bash" => Some(Shell::Bash),
        "zsh" => Some(Shell::Zsh),
        "fish" => Some(Shell::Fish),
        "powershell" | "ps" | "pwsh" => Some(Shell::PowerShell),
        "elvish" => Some(Shell::Elvish),
        _ => None,
    }
}

/// One line saying where the completion script for `shell` goes.
#[must_use]
pub fn completion_install_instructions(shell: Shell) -> String {
    let target = match shell {
        Shell::Bash => return "source <(sparklines completions bash)  # in ~/.bashrc\n".into(),
        Shell::PowerShell => {
            return "sparklines completions powershell | Out-String | Invoke-Expression  # in $PROFILE\n".into();
        },
        Shell::Zsh => "_sparklines in a directory on $fpath",
        Shell::Fish => "~/.config/fish/completions/sparklines.fish",
        Shell::Elvish => "~/.config/elvish/lib/sparklines.elv",
        _ => "your shell's completion directory",
    };
    format!("sparklines completions {shell} > {target}\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_from_str() {
        assert_eq!(shell_from_str("bash"), Some(Shell::Bash));
        assert_eq!(shell_from_str("ZSH"), Some(Shell::Zsh));
        assert_eq!(shell_from_str("pwsh"), Some(Shell::PowerShell));
        assert_eq!(shell_from_str("tcsh"), None);
    }

    #[test]
    fn test_generate_bash_completions() {
        let script = generate_completions(Shell::Bash).unwrap();
        assert!(script.contains("sparklines"));
        assert!(script.contains("render"));
    }

    #[test]
    fn test_install_instructions_are_one_line() {
        let zsh = completion_install_instructions(Shell::Zsh);
        assert_eq!(zsh.lines().count(), 1);
        assert!(zsh.starts_with("sparklines completions zsh > "));
    }

    #[test]
    fn test_install_instructions_mention_binary() {
        for shell in [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell, Shell::Elvish] {
            assert!(completion_install_instructions(shell).contains("sparklines completions"));
        }
    }
}
