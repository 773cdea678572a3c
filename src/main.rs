//! Command line entry point.
//!
//! This binary is the thin integration layer between the terminal and the
//! Trackside library. It resolves configuration, installs tracing, and then
//! either runs the interactive shell or executes one command and prints a
//! single frame.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────┐
//! │  stdin line             │
//! │          │              │
//! │          ▼              │
//! │  parse_command → Event  │
//! │          │              │
//! │          ▼              │
//! │  handle_event → Actions │  ← state transitions
//! │          │              │
//! │          ▼              │
//! │  Executor (gateway)     │  ← network calls, one at a time
//! │          │              │
//! │          ▼              │
//! │  render → stdout        │  ← toasts drained after each frame
//! └─────────────────────────┘
//! ```
//!
//! # Lifecycle
//!
//! 1. **Configure**: config file, then `TRACKSIDE_API_URL`, then flags
//! 2. **Trace**: install the rotating file subscriber
//! 3. **Initialize**: build `AppState` and the gateway
//! 4. **Run**: shell loop, or one-shot command
//!
//! # Frame Width
//!
//! Frames are laid out for `$COLUMNS` characters, 100 when unset.

use clap::{Parser, Subcommand, ValueEnum};
use std::io::Write;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use trackside::app::input::parse_command;
use trackside::app::modes::{AthleteView, Page};
use trackside::gateway::Gateway;
use trackside::observability::init_tracing;
use trackside::runtime::Executor;
use trackside::store::catalog::{fetch_clubs, fetch_disciplines, fetch_track_meets};
use trackside::{handle_event, initialize, AppState, Config, Event, Result};

const DEFAULT_COLUMNS: usize = 100;

/// Terminal administration console for track-and-field results.
#[derive(Debug, Parser)]
#[command(name = "trackside", version, about)]
struct Cli {
    /// Configuration file (default: platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Root URL of the results API
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Built-in theme name
    #[arg(long, global = true)]
    theme: Option<String>,

    /// Custom TOML theme file
    #[arg(long, global = true)]
    theme_file: Option<String>,

    /// Log level for the log file (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    trace_level: Option<String>,

    /// Serve in-memory demo data instead of calling the API
    #[arg(long, global = true)]
    offline: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Interactive shell, one command per line
    Shell,

    /// Print the athletes page
    Athletes {
        /// Sort key, repeat to toggle direction
        #[arg(long = "sort", value_name = "KEY")]
        sort: Vec<String>,

        #[arg(long, value_enum, default_value_t = ViewArg::Card)]
        view: ViewArg,
    },

    /// Print the results page
    Results {
        /// Case-insensitive search over athlete and discipline names
        #[arg(long)]
        search: Option<String>,

        /// Exact discipline name
        #[arg(long)]
        discipline: Option<String>,

        /// Exact gender code
        #[arg(long)]
        gender: Option<String>,

        /// Sort key, repeat to toggle direction
        #[arg(long = "sort", value_name = "KEY")]
        sort: Vec<String>,
    },

    /// Print the items page
    Items {
        /// Sort key, repeat to toggle direction
        #[arg(long = "sort", value_name = "KEY")]
        sort: Vec<String>,
    },

    /// List a reference collection
    Catalog {
        #[arg(value_enum)]
        kind: CatalogArg,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ViewArg {
    Card,
    Table,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum CatalogArg {
    Clubs,
    Disciplines,
    Trackmeets,
}

impl Cli {
    /// Resolves the configuration layers, flags last.
    fn config(&self) -> Result<Config> {
        let mut config = Config::load(self.config.as_deref())?;
        config.apply_env()?;

        if let Some(url) = &self.api_url {
            config.set_api_url(url)?;
        }
        if self.theme.is_some() {
            config.theme_name.clone_from(&self.theme);
        }
        if self.theme_file.is_some() {
            config.theme_file.clone_from(&self.theme_file);
        }
        if self.trace_level.is_some() {
            config.trace_level.clone_from(&self.trace_level);
        }
        config.offline |= self.offline;
        Ok(config)
    }
}

fn main() {
    let cli = Cli::parse();
    let config = match cli.config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("trackside: {e}");
            std::process::exit(2);
        }
    };

    init_tracing(&config);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "trackside starting");

    let runtime = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("trackside: failed to start runtime: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = runtime.block_on(run(cli.command.unwrap_or(Command::Shell), &config)) {
        tracing::error!(error = %e, "trackside failed");
        eprintln!("trackside: {e}");
        std::process::exit(1);
    }
}

async fn run(command: Command, config: &Config) -> Result<()> {
    let mut state = initialize(config);
    let executor = Executor::new(config.gateway());

    match command {
        Command::Shell => shell(&mut state, &executor).await,
        Command::Athletes { sort, view } => {
            let mut events = vec![Event::Navigate(Page::Athletes)];
            if (view == ViewArg::Table) != (state.athlete_view == AthleteView::Table) {
                events.push(Event::ToggleView);
            }
            events.extend(sort.into_iter().map(Event::RequestSort));
            one_shot(&mut state, &executor, events).await
        }
        Command::Results {
            search,
            discipline,
            gender,
            sort,
        } => {
            let mut events = vec![Event::Navigate(Page::Results)];
            events.extend(search.map(Event::Search));
            events.extend(discipline.map(Event::FilterDiscipline));
            events.extend(gender.map(Event::FilterGender));
            events.extend(sort.into_iter().map(Event::RequestSort));
            one_shot(&mut state, &executor, events).await
        }
        Command::Items { sort } => {
            let mut events = vec![Event::Navigate(Page::Items)];
            events.extend(sort.into_iter().map(Event::RequestSort));
            one_shot(&mut state, &executor, events).await
        }
        Command::Catalog { kind } => list_catalog(executor.gateway(), kind).await,
    }
}

/// Runs events through the handler and executor, stopping after a quit.
async fn dispatch(state: &mut AppState, executor: &Executor, event: &Event) -> Result<bool> {
    let (_rerender, actions) = handle_event(state, event)?;
    Ok(executor.execute_all(state, actions).await && !state.should_quit)
}

async fn one_shot(state: &mut AppState, executor: &Executor, events: Vec<Event>) -> Result<()> {
    for event in &events {
        dispatch(state, executor, event).await?;
    }
    print_frame(state)
}

async fn shell(state: &mut AppState, executor: &Executor) -> Result<()> {
    print_frame(state)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        prompt()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };

        let keep_going = match parse_command(&line) {
            Ok(event) => dispatch(state, executor, &event).await?,
            Err(e) => {
                state.toasts.push_error(&e);
                true
            }
        };
        if !keep_going {
            break;
        }
        print_frame(state)?;
    }

    tracing::info!("shell closed");
    Ok(())
}

/// Prints one frame and clears the notifications it showed.
fn print_frame(state: &mut AppState) -> Result<()> {
    let frame = trackside::ui::render(state, columns());
    state.toasts.drain();

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(frame.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn prompt() -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(b"> ")?;
    stdout.flush()?;
    Ok(())
}

fn columns() -> usize {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|cols| cols.trim().parse().ok())
        .filter(|&cols| cols > 0)
        .unwrap_or(DEFAULT_COLUMNS)
}

async fn list_catalog(gateway: &dyn Gateway, kind: CatalogArg) -> Result<()> {
    let rows: Vec<String> = match kind {
        CatalogArg::Clubs => fetch_clubs(gateway)
            .await?
            .into_iter()
            .map(|club| format!("{:>4}  {}  {}", club.id, club.name, club.city))
            .collect(),
        CatalogArg::Disciplines => fetch_disciplines(gateway)
            .await?
            .into_iter()
            .map(|d| format!("{:>4}  {}  {:?}  {}", d.id, d.name, d.gender, d.result_type))
            .collect(),
        CatalogArg::Trackmeets => fetch_track_meets(gateway)
            .await?
            .into_iter()
            .map(|meet| format!("{:>4}  {}", meet.id, meet.name))
            .collect(),
    };

    let mut stdout = std::io::stdout().lock();
    for row in rows {
        writeln!(stdout, "{}", row.trim_end())?;
    }
    Ok(())
}
