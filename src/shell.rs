//! Shell integration scripts
//!
//! A child process cannot change its parent shell's working directory, so
//! the binary only prints paths and candidate lists. The scripts below define
//! a `goto` shell function that calls the binary and performs the `cd`.

use std::fmt;
use std::str::FromStr;

const BASH_INIT: &str = r#"# goto shell integration (bash)
goto() {
  case "$1" in
    -r|--register|register|-u|--unregister|unregister|-l|--list|list|\
    -x|--expand|expand|resolve|-c|--cleanup|cleanup|-h|--help|help|-V|--version|init|complete)
      command goto "$@"
      ;;
    -p|--push)
      local target
      target="$(command goto resolve "$2")" && pushd "$target" >/dev/null
      ;;
    -o|--pop)
      popd >/dev/null
      ;;
    "")
      command goto --help
      ;;
    *)
      local target
      target="$(command goto resolve "$1")" && cd "$target"
      ;;
  esac
}

_goto_complete() {
  local cur="${COMP_WORDS[COMP_CWORD]}"
  local prev="${COMP_WORDS[COMP_CWORD-1]}"
  if [ "$COMP_CWORD" -eq 1 ]; then
    COMPREPLY=($(command goto complete "$cur"))
  elif [ "$COMP_CWORD" -eq 2 ]; then
    case "$prev" in
      -u|--unregister|unregister|-x|--expand|expand|resolve|-p|--push)
        COMPREPLY=($(command goto complete "$cur"))
        ;;
    esac
  elif [ "$COMP_CWORD" -eq 3 ]; then
    case "${COMP_WORDS[1]}" in
      -r|--register|register)
        COMPREPLY=($(compgen -d -- "$cur"))
        ;;
    esac
  fi
}
complete -o filenames -F _goto_complete goto
"#;

const ZSH_INIT: &str = r#"# goto shell integration (zsh)
goto() {
  case "$1" in
    -r|--register|register|-u|--unregister|unregister|-l|--list|list|-x|--expand|expand|resolve|-c|--cleanup|cleanup|-h|--help|help|-V|--version|init|complete)
      command goto "$@"
      ;;
    -p|--push)
      local target
      target="$(command goto resolve "$2")" && pushd "$target" >/dev/null
      ;;
    -o|--pop)
      popd >/dev/null
      ;;
    "")
      command goto --help
      ;;
    *)
      local target
      target="$(command goto resolve "$1")" && cd "$target"
      ;;
  esac
}

_goto_complete() {
  if (( CURRENT == 2 )); then
    compadd -- ${(f)"$(command goto complete "${words[2]}")"}
  elif (( CURRENT == 3 )); then
    case "${words[2]}" in
      -u|--unregister|unregister|-x|--expand|expand|resolve|-p|--push)
        compadd -- ${(f)"$(command goto complete "${words[3]}")"}
        ;;
    esac
  elif (( CURRENT == 4 )); then
    case "${words[2]}" in
      -r|--register|register) _directories ;;
    esac
  fi
}
if (( $+functions[compdef] )); then
  compdef _goto_complete goto
fi
"#;

const FISH_INIT: &str = r#"# goto shell integration (fish)
function goto
    switch "$argv[1]"
        case -r --register register -u --unregister unregister -l --list list -x --expand expand resolve -c --cleanup cleanup -h --help help -V --version init complete
            command goto $argv
        case -p --push
            set -l target (command goto resolve $argv[2]); and pushd $target
        case -o --pop
            popd
        case ''
            command goto --help
        case '*'
            set -l target (command goto resolve $argv[1]); and cd $target
    end
end

complete -c goto -f -n '__fish_is_first_arg' -a '(command goto complete (commandline -ct))'
complete -c goto -f -n '__fish_seen_subcommand_from -u --unregister unregister -x --expand expand resolve -p --push' -a '(command goto complete (commandline -ct))'
"#;

/// Supported shells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
}

impl Shell {
    pub fn name(&self) -> &'static str {
        match self {
            Shell::Bash => "bash",
            Shell::Zsh => "zsh",
            Shell::Fish => "fish",
        }
    }

    /// Script to evaluate in the shell's rc file
    pub fn init_script(&self) -> &'static str {
        match self {
            Shell::Bash => BASH_INIT,
            Shell::Zsh => ZSH_INIT,
            Shell::Fish => FISH_INIT,
        }
    }

    /// Line to add to the rc file
    pub fn setup_hint(&self) -> &'static str {
        match self {
            Shell::Bash => r#"eval "$(goto init bash)"  # in ~/.bashrc"#,
            Shell::Zsh => r#"eval "$(goto init zsh)"  # in ~/.zshrc"#,
            Shell::Fish => "goto init fish | source  # in ~/.config/fish/config.fish",
        }
    }
}

impl FromStr for Shell {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bash" => Ok(Shell::Bash),
            "zsh" => Ok(Shell::Zsh),
            "fish" => Ok(Shell::Fish),
            other => Err(format!("Unsupported shell: {other} (use bash, zsh or fish)")),
        }
    }
}

impl fmt::Display for Shell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
