use crate::domain::error::{parse_index, BookmarkError};
use crate::domain::model::Bookmark;
use crate::domain::traits::Opener;
use crate::infrastructure::config::Config;
use crate::infrastructure::event_ndjson::spawn_ndjson_printer;
use crate::infrastructure::opener::SystemOpener;
use crate::usecase::command::{Command, Outcome};
use crate::usecase::event::AppEvent;
use crate::usecase::lifecycle::{execute, load_store, persist_store};
use anyhow::{anyhow, Context, Result};
use std::env;
use std::io::Write;
use std::process::ExitCode;
use tokio::sync::mpsc;

pub async fn run() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let config = Config::from_env();
    let opener = SystemOpener::new(config.opener.clone());
    let mut stdout = std::io::stdout();

    match run_with_args(&args, &config, &opener, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

/// One full invocation: parse, load, apply, persist.
///
/// Argument, index and launch failures return before persist, so the file is
/// left as it was. Create/load failures are reported and the run goes on.
pub async fn run_with_args(
    args: &[String],
    config: &Config,
    opener: &dyn Opener,
    out: &mut dyn Write,
) -> Result<()> {
    let command = Cli::parse(args)?;

    if !command.touches_store() {
        writeln!(out, "{}", usage())?;
        return Ok(());
    }

    let (tx, printer) = if config.emit_events {
        let (tx, rx) = mpsc::channel::<AppEvent>(64);
        (Some(tx), Some(spawn_ndjson_printer(rx)))
    } else {
        (None, None)
    };

    let result = run_command(command, config, opener, &tx, out).await;

    drop(tx);
    if let Some(handle) = printer {
        handle.await.ok();
    }

    result
}

async fn run_command(
    command: Command,
    config: &Config,
    opener: &dyn Opener,
    sink: &Option<mpsc::Sender<AppEvent>>,
    out: &mut dyn Write,
) -> Result<()> {
    let path = &config.bookmarks_path;

    let loaded = load_store(path, sink).await;
    for err in &loaded.recovered {
        report(err);
    }
    let mut store = loaded.store;

    let context = match &command {
        Command::Delete { .. } => "unable to delete bookmark",
        Command::Open { .. } => "unable to open bookmark",
        _ => "unable to apply command",
    };
    let outcome = execute(&mut store, command, opener, sink)
        .await
        .context(context)?;

    match outcome {
        Outcome::Listed => {
            for entry in store.list() {
                writeln!(out, "{entry}")?;
            }
        }
        Outcome::Added { index } => log::info!("added bookmark {index}"),
        Outcome::Deleted { index, bookmark } => {
            log::info!("deleted bookmark {index} ({})", bookmark.name)
        }
        Outcome::Opened { index, link } => log::info!("opened bookmark {index}: {link}"),
        Outcome::Help => {}
    }

    persist_store(path, &store, sink)
        .await
        .context("unable to store bookmarks")
}

fn report(err: &anyhow::Error) {
    eprintln!("[ERROR] {err:#}");
}

struct Cli;

impl Cli {
    fn parse(args: &[String]) -> Result<Command> {
        // Expected:
        // <bin> add <name> <link> [tags...]
        // <bin> list
        // <bin> delete <index>
        // <bin> open <index>
        // <bin> help
        if args.len() < 2 {
            return Err(anyhow!("incorrect argument count\n\n{}", usage()));
        }

        match args[1].as_str() {
            "add" => Self::parse_add(args),
            "list" => Ok(Command::List),
            "delete" => Ok(Command::Delete {
                index: Self::parse_index_arg(args)?,
            }),
            "open" => Ok(Command::Open {
                index: Self::parse_index_arg(args)?,
            }),
            _ => Ok(Command::Help),
        }
    }

    fn parse_add(args: &[String]) -> Result<Command> {
        let name = args
            .get(2)
            .ok_or(BookmarkError::MissingArgument { name: "name" })
            .context("unable to build bookmark")?;
        let link = args
            .get(3)
            .ok_or(BookmarkError::MissingArgument { name: "link" })
            .context("unable to build bookmark")?;
        let tags = args.get(4..).unwrap_or_default().to_vec();

        Ok(Command::Add(Bookmark::new(name.clone(), link.clone(), tags)))
    }

    fn parse_index_arg(args: &[String]) -> Result<i64> {
        let raw = args
            .get(2)
            .ok_or(BookmarkError::MissingArgument { name: "index" })
            .context("unable to parse index to int")?;
        parse_index(raw).context("unable to parse index to int")
    }
}

fn usage() -> &'static str {
    "usage:\n  $ bit <command> <args>\n\ncommands:\n  add <name> <link> [tags...] - add a bookmark\n  list - list all bookmarks\n  delete <index> - delete a bookmark\n  open <index> - open a bookmark\n\n  help - print this message\n\nenvironment:\n  BIT_BOOKMARKS_FILE  bookmarks file (default ~/.bookmarks.json)\n  BIT_OPENER          command used by `open` (default: platform opener)\n  BIT_EMIT_EVENTS     set to 1 to write NDJSON events to stderr"
}
