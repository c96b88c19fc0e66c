use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::ArgAction;
use jotlist_core::note::NoteDraft;
use jotlist_core::record::{Content, RecordId};
use jotlist_core::storage::{FileStorage, SlotStorage};
use jotlist_core::store::{EditSession, NoteStore, RecordStore, SaveOutcome, StoreConfig, TaskStore};
use jotlist_core::task::{select_visible, Filter};

use crate::config::Config;
use crate::render;

#[derive(Debug, clap::Parser)]
#[command(name = "jotlist", version, about = "Notes and to-do lists in the terminal")]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Directory holding the data files [env: JOTLIST_DATA_DIR]
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let config = Config::from_env().with_data_dir(self.data_dir);
        tracing::debug!("Using data directory: {:?}", config.data_dir);
        let storage = FileStorage::new(&config.data_dir);

        match self.command {
            Command::Task(command) => {
                let store_config = StoreConfig::tasks().with_persist_filter(config.persist_filter);
                command.run(TaskStore::open(storage, store_config))
            }
            Command::Note(command) => command.run(NoteStore::open(storage, StoreConfig::notes())),
        }
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Subcommand)]
enum Command {
    /// Manage the to-do list
    #[command(subcommand)]
    Task(TaskCommand),

    /// Manage notes
    #[command(subcommand)]
    Note(NoteCommand),
}

#[derive(Debug, clap::Subcommand)]
enum TaskCommand {
    /// Add a task to the end of the list
    Add { text: String },

    /// Show tasks passing the active filter
    List {
        /// Show this filter instead of the stored one
        #[arg(short, long)]
        filter: Option<Filter>,
    },

    /// Mark a task done, or not done again
    Toggle { id: String },

    /// Replace a task's text
    Edit { id: String, text: String },

    /// Delete a task
    Rm { id: String },

    /// Delete every completed task
    Clear,

    /// Set the active filter (all, active, completed)
    Filter { filter: Filter },

    /// Show total, active and completed counts
    Stats,
}

impl TaskCommand {
    fn run<S: SlotStorage>(self, mut store: TaskStore<S>) -> anyhow::Result<()> {
        watch(&mut store);

        match self {
            Self::Add { text } => {
                store.add(text).context("Task not added")?;
            }
            Self::List { filter } => {
                let filter = filter.unwrap_or(store.filter());
                let visible = select_visible(store.records(), filter);
                print!("{}", render::task_list(&visible, filter));
            }
            Self::Toggle { id } => {
                let id = RecordId::from(id);
                if store.toggle_completed(&id).is_none() {
                    bail!("No task with id {}", id);
                }
            }
            Self::Edit { id, text } => edit(&mut store, id, text)?,
            Self::Rm { id } => remove(&mut store, id)?,
            Self::Clear => {
                if store.clear_completed() == 0 {
                    println!("No completed tasks to clear");
                }
            }
            Self::Filter { filter } => {
                if store.filter() == filter {
                    println!("Filter already set to {}", filter);
                }
                store.set_filter(filter);
            }
            Self::Stats => print!("{}", render::counts(store.counts())),
        }

        Ok(())
    }
}

#[derive(Debug, clap::Subcommand)]
enum NoteCommand {
    /// Add a note at the top of the list
    Add { title: String, body: String },

    /// Show all notes, newest first
    List {
        /// Cut note bodies to this many characters
        #[arg(short, long, default_value_t = jotlist_core::note::DEFAULT_PREVIEW_CHARS)]
        width: usize,
    },

    /// Replace a note's title and body
    Edit {
        id: String,
        title: String,
        body: String,
    },

    /// Delete a note
    Rm { id: String },
}

impl NoteCommand {
    fn run<S: SlotStorage>(self, mut store: NoteStore<S>) -> anyhow::Result<()> {
        watch(&mut store);

        match self {
            Self::Add { title, body } => {
                store
                    .add(NoteDraft::new(title, body))
                    .context("Note not added")?;
            }
            Self::List { width } => print!("{}", render::note_list(store.records(), width)),
            Self::Edit { id, title, body } => edit(&mut store, id, NoteDraft::new(title, body))?,
            Self::Rm { id } => remove(&mut store, id)?,
        }

        Ok(())
    }
}

/// Print a confirmation line for every change the store reports
fn watch<C: Content, S: SlotStorage>(store: &mut RecordStore<C, S>) {
    store.subscribe(|change, _| println!("{}", render::change(C::KIND, change)));
}

fn edit<C: Content, S: SlotStorage>(
    store: &mut RecordStore<C, S>,
    id: String,
    draft: impl Into<C::Draft>,
) -> anyhow::Result<()> {
    let id = RecordId::from(id);
    let mut session = EditSession::new();
    session
        .begin(store, &id)
        .with_context(|| format!("Cannot edit {} {}", C::KIND, id))?;

    match session.save(store, draft) {
        SaveOutcome::Saved(_) => Ok(()),
        SaveOutcome::Discarded | SaveOutcome::NotEditing => {
            bail!("Edit discarded: {} content cannot be empty", C::KIND)
        }
    }
}

fn remove<C: Content, S: SlotStorage>(
    store: &mut RecordStore<C, S>,
    id: String,
) -> anyhow::Result<()> {
    let id = RecordId::from(id);
    if store.remove(&id).is_none() {
        bail!("No {} with id {}", C::KIND, id);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use jotlist_core::storage::MemoryStorage;

    #[test]
    fn test_parse_task_list_filter() {
        let cli = Cli::try_parse_from(["jotlist", "task", "list", "--filter", "active"]).unwrap();
        match cli.command {
            Command::Task(TaskCommand::List { filter }) => assert_eq!(filter, Some(Filter::Active)),
            other => panic!("Unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_filter() {
        assert!(Cli::try_parse_from(["jotlist", "task", "filter", "done"]).is_err());
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::try_parse_from(["jotlist", "note", "list", "-vv", "--data-dir", "/tmp/x"])
            .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/x")));
    }

    #[test]
    fn test_task_commands_against_store() {
        let mut store = TaskStore::open(MemoryStorage::new(), StoreConfig::tasks());
        let id = store.add("Buy milk").unwrap();

        edit(&mut store, id.to_string(), "Buy oat milk".to_string()).unwrap();
        assert_eq!(store.get(&id).unwrap().content.text, "Buy oat milk");

        assert!(edit(&mut store, id.to_string(), "  ".to_string()).is_err());
        assert!(edit(&mut store, "missing".to_string(), "x".to_string()).is_err());

        assert!(remove(&mut store, "missing".to_string()).is_err());
        remove(&mut store, id.to_string()).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_note_edit_against_store() {
        let mut store = NoteStore::open(MemoryStorage::new(), StoreConfig::notes());
        let id = store.add(NoteDraft::new("Title", "Body")).unwrap();

        edit(&mut store, id.to_string(), NoteDraft::new("New", "Text")).unwrap();
        let note = &store.get(&id).unwrap().content;
        assert_eq!(note.title, "New");
        assert_eq!(note.body, "Text");
    }
}
