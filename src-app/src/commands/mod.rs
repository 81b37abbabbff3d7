//! Shell commands
//!
//! One command per input line:
//! - `open <target>` / `replace <target>`: programmatic navigation
//! - `click <label>` / `ctrl-click <label>`: activate a rendered link
//! - `press <label>`: press a rendered button
//! - `back`, `forward`, `go <delta>`: move through history
//! - `show`: print the current page
//! - `quit`

pub mod navigation;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CommandResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> CommandResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Open { target: String, replace: bool },
    Click { label: String, modified: bool },
    Press(String),
    Go(i64),
    Show,
    Quit,
}

impl ShellCommand {
    pub fn parse(input: &str) -> Result<Self, String> {
        let input = input.trim();
        let mut parts = input.splitn(2, ' ');
        let command = parts.next().unwrap_or_default().to_lowercase();
        let argument = parts.next().map(str::trim).filter(|s| !s.is_empty());

        let require = |what: &str| {
            argument
                .map(str::to_string)
                .ok_or_else(|| format!("{} needs {}", command, what))
        };

        match command.as_str() {
            "open" => Ok(Self::Open {
                target: require("a target")?,
                replace: false,
            }),
            "replace" => Ok(Self::Open {
                target: require("a target")?,
                replace: true,
            }),
            "click" => Ok(Self::Click {
                label: require("a link label")?,
                modified: false,
            }),
            "ctrl-click" => Ok(Self::Click {
                label: require("a link label")?,
                modified: true,
            }),
            "press" => Ok(Self::Press(require("a button label")?)),
            "back" => Ok(Self::Go(-1)),
            "forward" => Ok(Self::Go(1)),
            "go" => require("a delta")?
                .parse()
                .map(Self::Go)
                .map_err(|e| format!("invalid delta: {}", e)),
            "show" => Ok(Self::Show),
            "quit" | "exit" => Ok(Self::Quit),
            "" => Err("empty command".to_string()),
            other => Err(format!("Unknown command: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_navigation() {
        assert_eq!(
            ShellCommand::parse("open /products").unwrap(),
            ShellCommand::Open {
                target: "/products".to_string(),
                replace: false
            }
        );
        assert_eq!(
            ShellCommand::parse("click the list of products").unwrap(),
            ShellCommand::Click {
                label: "the list of products".to_string(),
                modified: false
            }
        );
        assert_eq!(ShellCommand::parse("back").unwrap(), ShellCommand::Go(-1));
        assert_eq!(ShellCommand::parse("go -2").unwrap(), ShellCommand::Go(-2));
    }

    #[test]
    fn test_parse_errors() {
        assert!(ShellCommand::parse("open").is_err());
        assert!(ShellCommand::parse("go x").is_err());
        assert!(ShellCommand::parse("teleport /").is_err());
        assert!(ShellCommand::parse("   ").is_err());
    }
}
