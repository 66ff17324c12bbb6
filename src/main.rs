use std::fs::OpenOptions;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use learnflow::content::{Catalog, ContentStore};
use learnflow::learning::{LessonStatus, Navigator, highlight};
use learnflow::notify::ToastQueue;
use learnflow::profile::Profile;
use learnflow::store::{JsonStore, KeyValueStore, MemoryStore};
use learnflow::{App, Config};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "learnflow")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Load lessons and questions from a JSON catalog
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List topics and lesson progress
    Topics,
    /// Print a lesson explanation
    Lesson {
        /// Lesson id, e.g. a3
        id: String,
    },
    /// Show streak, XP and level progress
    Stats,
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| "learnflow=info".into())
}

/// Log to a file while the TUI owns the terminal
fn init_file_logging() -> Result<()> {
    let path = Config::log_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {:?}", parent))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {:?}", path))?;

    tracing_subscriber::registry()
        .with(env_filter())
        .with(tracing_subscriber::fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .init();
    Ok(())
}

fn init_stderr_logging() {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

/// Persistent store in the data directory, or an in-memory one if that fails
fn open_store() -> Rc<dyn KeyValueStore> {
    let opened = Config::store_path().and_then(|path| Ok(JsonStore::open(path)?));
    match opened {
        Ok(store) => Rc::new(store),
        Err(e) => {
            tracing::warn!("Stats will not be saved: {:#}", e);
            Rc::new(MemoryStore::new())
        }
    }
}

fn status_icon(status: LessonStatus) -> &'static str {
    match status {
        LessonStatus::Completed => "✓",
        LessonStatus::Locked => "🔒",
        LessonStatus::Available => "○",
    }
}

fn print_topics(catalog: Rc<Catalog>) {
    let navigator = Navigator::new(catalog, Rc::new(ToastQueue::default()));
    for topic in navigator.topics() {
        println!(
            "{} ({})  {}/{}",
            topic.title,
            topic.id,
            navigator.completed_count(&topic.id),
            topic.lessons.len()
        );
        for lesson in &topic.lessons {
            println!("  {} {:<4} {}", status_icon(navigator.lesson_status(lesson)), lesson.id, lesson.title);
        }
    }
}

fn print_lesson(catalog: &Catalog, id: &str) -> Result<()> {
    let title = catalog
        .topics()
        .iter()
        .find_map(|t| t.lesson(id))
        .map(|l| l.title.clone())
        .with_context(|| format!("No lesson '{}'", id))?;

    println!("{}\n", title);
    let Some(content) = catalog.lesson_content(id) else {
        println!("no content");
        return Ok(());
    };

    let marked: Vec<String> = highlight(&content.explanation, content.keywords.as_slice())
        .into_iter()
        .map(|t| if t.is_keyword { format!("*{}*", t.text) } else { t.text })
        .collect();
    println!("{}\n", textwrap::fill(&marked.join(" "), 78));

    for line in content.example.lines() {
        println!("    {}", line);
    }
    Ok(())
}

fn print_stats(store: Rc<dyn KeyValueStore>) {
    let profile = Profile::load(store, Rc::new(ToastQueue::default()));
    println!("User:    {}", profile.username());
    println!("Streak:  {} days", profile.streak());
    println!("XP:      {}", profile.xp());
    println!("Level:   {:.0}%", profile.level_progress_percent());
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.command.is_some() {
        init_stderr_logging();
    } else {
        init_file_logging()?;
    }

    let mut config = Config::load()?;
    if cli.catalog.is_some() {
        config.catalog_path = cli.catalog;
    }
    let catalog = Rc::new(config.catalog()?);

    match cli.command {
        Some(Commands::Topics) => print_topics(catalog),
        Some(Commands::Lesson { id }) => print_lesson(&catalog, &id)?,
        Some(Commands::Stats) => print_stats(open_store()),
        None => {
            let store = open_store();
            let mut app = App::new(config, catalog, store)?;
            app.run().await?;
        }
    }

    Ok(())
}
