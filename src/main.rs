//! Terminal demo host for the folio page core.
//!
//! Plays the part a browser binding would: it builds the [`Page`], feeds it
//! a few synthetic events, loads the GitHub widget, and then drives the
//! frame loop, drawing the tag cloud into a character grid and printing the
//! whole page after every frame.
//!
//! ```text
//! folio [--config <path>] [--user <login>] [--frames <n>] [--cols <n>] [--offline]
//! ```

#![allow(clippy::multiple_crate_versions)]

use folio::app::{ClickTarget, Environment, Event, Page};
use folio::cloud::{FrameScheduler, PacedFrames};
use folio::github::{GithubClient, ReqwestTransport};
use folio::infrastructure::preferences_path;
use folio::observability::init_tracing;
use folio::storage::{JsonPreferenceStore, MemoryStore, PreferenceStore};
use folio::ui::{render_page, TerminalSurface};
use folio::{Config, FolioError, Result};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

const HELP: &str = "\
folio - portfolio page core, terminal demo

USAGE:
  folio [OPTIONS]

OPTIONS:
  --config <path>   TOML configuration file
  --user <login>    GitHub account to show (overrides config)
  --frames <n>      Number of animation frames to run [default: 240]
  --cols <n>        Terminal width in columns [default: 72]
  --offline         Skip the GitHub request
  -h, --help        Print this help
";

/// Rows of the tag cloud grid.
const CLOUD_ROWS: usize = 16;
/// Approximate pixel size of one terminal cell.
const CELL_WIDTH: f64 = 8.0;
const CELL_HEIGHT: f64 = 16.0;
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug)]
struct Args {
    config: Option<PathBuf>,
    user: Option<String>,
    frames: usize,
    cols: usize,
    offline: bool,
}

fn parse_args() -> std::result::Result<Option<Args>, pico_args::Error> {
    let mut pargs = pico_args::Arguments::from_env();

    if pargs.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let args = Args {
        config: pargs.opt_value_from_str("--config")?,
        user: pargs.opt_value_from_str("--user")?,
        frames: pargs.opt_value_from_str("--frames")?.unwrap_or(240),
        cols: pargs.opt_value_from_str("--cols")?.unwrap_or(72),
        offline: pargs.contains("--offline"),
    };

    let rest = pargs.finish();
    if !rest.is_empty() {
        eprintln!("warning: ignoring unexpected arguments: {rest:?}");
    }
    Ok(Some(args))
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if let Some(user) = &args.user {
        config.github_user.clone_from(user);
        config.validate()?;
    }
    Ok(config)
}

fn open_store(config: &Config) -> Box<dyn PreferenceStore> {
    let path = preferences_path(config.preferences_path.as_deref());
    match JsonPreferenceStore::open(path) {
        Ok(store) => Box::new(store),
        Err(e) => {
            tracing::warn!(error = %e, "preference file unavailable, using memory store");
            Box::new(MemoryStore::default())
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let config = load_config(&args)?;
    init_tracing(&config);
    tracing::info!(user = %config.github_user, offline = args.offline, "starting demo");

    #[allow(clippy::cast_precision_loss)]
    let (width, height) = (args.cols as f64 * CELL_WIDTH, CLOUD_ROWS as f64 * CELL_HEIGHT);
    let environment = Environment {
        viewport_width: width,
        surface: Some((width, height)),
        ..Environment::default()
    };

    let mut page = Page::new(&config, environment, open_store(&config));

    if args.offline {
        page.dispatch(
            &Event::GithubFailed {
                message: "offline mode".to_string(),
            },
            Duration::ZERO,
        );
    } else {
        let client = GithubClient::new(ReqwestTransport::new()?, &config.api_base, &config.github_user)?;
        page.load_github(&client).await;
    }

    // A visitor scrolls into the page and moves the pointer toward a corner.
    page.dispatch(&Event::Scroll { y: 900.0 }, Duration::ZERO);
    page.dispatch(
        &Event::PointerMove {
            x: width * 0.8,
            y: height * 0.7,
        },
        Duration::ZERO,
    );
    page.dispatch(&Event::Click(ClickTarget::JourneySeeMore), Duration::ZERO);

    let mut grid = TerminalSurface::new(args.cols, CLOUD_ROWS, width, height);
    let mut scheduler = PacedFrames::new(args.frames, FRAME_INTERVAL);
    let mut stdout = std::io::stdout().lock();

    write!(stdout, "\u{1b}[2J")?;
    while let Some(now) = scheduler.request_frame() {
        if page.frame(now, Some(&mut grid)) {
            write!(stdout, "\u{1b}[H{}", render_page(page.state(), Some(&grid), args.cols))?;
            stdout.flush()?;
        }
    }

    tracing::info!(frames = args.frames, "demo finished");
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("error: {e}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(FolioError::Config(msg)) => {
            eprintln!("configuration error: {msg}");
            ExitCode::from(2)
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
