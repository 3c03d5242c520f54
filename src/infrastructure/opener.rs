use crate::domain::error::BookmarkError;
use crate::domain::traits::Opener;
use std::process::Stdio;
use tokio::process::Command;

/// Program plus leading arguments; the link is appended as the final argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenerCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl OpenerCommand {
    pub fn platform_default() -> Self {
        if cfg!(target_os = "macos") {
            Self::program("open")
        } else if cfg!(windows) {
            // Not `cmd /C start`: cmd would interpret `&`, `^` and `|` inside the link.
            Self {
                program: "rundll32".to_string(),
                args: vec!["url.dll,FileProtocolHandler".into()],
            }
        } else {
            Self::program("xdg-open")
        }
    }

    /// Whitespace-separated `program [args...]`; `None` when blank.
    pub fn parse(spec: &str) -> Option<Self> {
        let mut parts = spec.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
        })
    }

    fn program(program: &str) -> Self {
        Self {
            program: program.to_string(),
            args: Vec::new(),
        }
    }
}

pub struct SystemOpener {
    command: OpenerCommand,
}

impl SystemOpener {
    pub fn new(command: OpenerCommand) -> Self {
        Self { command }
    }
}

impl Opener for SystemOpener {
    /// Spawns the opener detached: the child is not awaited and outlives `bit`.
    fn open(&self, link: &str) -> Result<(), BookmarkError> {
        log::debug!("launching {:?} for {link}", self.command.program);

        Command::new(&self.command.program)
            .args(&self.command.args)
            .arg(link)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(drop)
            .map_err(|source| BookmarkError::Launch {
                program: self.command.program.clone(),
                source,
            })
    }
}
