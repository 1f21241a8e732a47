//! Init command - Print the shell integration script

use owo_colors::OwoColorize;
use std::io::{self, IsTerminal};

use goto::shell::Shell;

/// Execute the init command
pub fn execute(shell: Shell) {
    print!("{}", shell.init_script());

    // Printed straight to a terminal, the script does nothing; say how to load it
    if io::stdout().is_terminal() {
        eprintln!("{} {}", "Add to your shell config:".yellow(), shell.setup_hint());
    }
}
