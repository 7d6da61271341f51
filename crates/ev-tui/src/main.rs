//! Standalone terminal binary for Emberveil.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Mutex;

use clap::Parser;
use ev_game::{Game, GameConfig, JsonFileStore, MemoryStore};
use ev_story::Story;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "emberveil=info,ev_tui=info,ev_game=info,ev_combat=info,ev_story=info";

#[derive(Parser)]
#[command(
    name = "emberveil",
    about = "A short story-driven RPG with real-time battles, in your terminal",
    version
)]
struct Args {
    /// RNG seed for battle rolls
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Directory for the save slot (default: the platform data directory)
    #[arg(long)]
    save_dir: Option<PathBuf>,

    /// Keep the save in memory only; nothing is written to disk
    #[arg(long, conflicts_with = "save_dir")]
    memory_save: bool,

    /// Save slot name
    #[arg(long, default_value = "savegame")]
    slot: String,

    /// Story file in JSON (default: the built-in story)
    #[arg(long)]
    story: Option<PathBuf>,

    /// Write diagnostics to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Validate the story and exit without starting the UI
    #[arg(long)]
    check_story: bool,
}

fn main() {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        if let Err(e) = init_logging(path) {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }

    let story = match load_story(args.story.as_deref()) {
        Ok(story) => story,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };

    let config = GameConfig::default()
        .with_seed(args.seed)
        .with_save_slot(args.slot);
    let file_store = if args.memory_save {
        None
    } else {
        let dir = args.save_dir.unwrap_or_else(default_save_dir);
        match JsonFileStore::new(&dir, &config.save_slot) {
            Ok(store) => Some(store),
            Err(e) => {
                eprintln!("error: {e}");
                process::exit(1);
            }
        }
    };

    if args.check_story {
        println!(
            "story ok: {} scenes, starting at '{}'",
            story.len(),
            story.start()
        );
        return;
    }

    let game = match file_store {
        Some(store) => {
            tracing::info!(path = %store.path().display(), "using save file");
            Game::new(story, config, store)
        }
        None => Game::new(story, config, MemoryStore::new()),
    };

    tracing::info!(seed = args.seed, "starting");
    let app = ev_tui::app::TuiApp::new(game);
    if let Err(e) = ev_tui::terminal::run(app) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// `<data dir>/emberveil`, or `./emberveil` when the platform has none.
fn default_save_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("emberveil")
}

/// Send tracing output to `path`. The terminal itself belongs to the UI.
fn init_logging(path: &Path) -> Result<(), String> {
    let file = File::create(path).map_err(|e| format!("cannot open {}: {e}", path.display()))?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Load the story from a file, or the built-in one. Dangling choices are
/// reported but do not stop the game.
fn load_story(path: Option<&Path>) -> Result<Story, String> {
    let story = match path {
        Some(path) => Story::from_json_file(path)
            .map_err(|e| format!("cannot load story {}: {e}", path.display()))?,
        None => Story::builtin(),
    };
    for dangling in story.dangling_targets() {
        eprintln!(
            "warning: scene '{}' choice {} leads to unknown scene '{}'",
            dangling.scene,
            dangling.choice + 1,
            dangling.target
        );
        tracing::warn!(
            scene = %dangling.scene,
            choice = dangling.choice,
            target = %dangling.target,
            "dangling story choice"
        );
    }
    Ok(story)
}
