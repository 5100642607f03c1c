use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    collections::HashMap,
    fs, io,
    sync::atomic::{AtomicBool, Ordering},
    time::Duration,
};
use tokio::sync::mpsc;

/// Movie discovery TUI
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to the temp directory
    #[arg(short, long)]
    debug: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,
}

// Global flag for debug mode
static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

mod app;
mod handlers;
mod services;
mod ui;
mod utils;

use flicktui::api::TmdbClient;
use flicktui::config::Config;
use flicktui::model::Model;
use flicktui::trending::TrendingClient;
use services::api::{ApiRequest, ApiResponse};

fn log_debug(msg: &str) {
    // Only log if debug mode is enabled
    if !DEBUG_MODE.load(Ordering::Relaxed) {
        return;
    }

    use std::fs::OpenOptions;
    use std::io::Write;
    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(utils::get_debug_log_path())
    {
        let _ = writeln!(file, "{}", msg);
    }
}

/// Lifecycle of a poster image being prepared for terminal graphics
pub enum PosterState {
    Loading,
    Ready(ratatui_image::protocol::StatefulProtocol),
    Failed,
}

impl std::fmt::Debug for PosterState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PosterState::Loading => write!(f, "Loading"),
            PosterState::Ready(_) => write!(f, "Ready(<protocol>)"),
            PosterState::Failed => write!(f, "Failed"),
        }
    }
}

pub struct App {
    /// Pure application state
    pub model: Model,

    /// Channel to the background API worker
    pub api_tx: mpsc::UnboundedSender<ApiRequest>,
    pub api_rx: mpsc::UnboundedReceiver<ApiResponse>,

    /// Plain HTTP client for poster downloads
    pub http: reqwest::Client,

    /// Terminal graphics picker, None when previews are disabled
    pub poster_picker: Option<ratatui_image::picker::Picker>,

    /// Finished poster loads arrive here from background tasks
    pub poster_update_tx: mpsc::UnboundedSender<(u64, PosterState)>,
    pub poster_update_rx: mpsc::UnboundedReceiver<(u64, PosterState)>,

    /// Poster cache keyed by movie id
    pub poster_states: HashMap<u64, PosterState>,

    /// Display settings from config
    pub trending_limit: usize,
    pub region: String,
    pub default_certification: String,
}

impl App {
    pub fn new(config: Config, config_path: Option<String>) -> Self {
        let tmdb = TmdbClient::new(config.api_token.clone());
        let trending_client = config.trending.as_ref().map(TrendingClient::new);
        let trending_limit = config.trending.as_ref().map(|t| t.limit).unwrap_or(5);

        let (api_tx, api_rx) = services::api::spawn_api_service(tmdb, trending_client);
        let (poster_update_tx, poster_update_rx) = mpsc::unbounded_channel();

        // Initialize image preview protocol picker
        let poster_picker = if config.poster_preview_enabled {
            let mut picker = match ratatui_image::picker::Picker::from_query_stdio() {
                Ok(p) => p,
                Err(e) => {
                    log_debug(&format!("Poster preview: Failed to detect terminal: {}", e));
                    ratatui_image::picker::Picker::from_fontsize((8, 16)) // Fallback font size
                }
            };

            // Apply protocol from config
            match config.poster_protocol.to_lowercase().as_str() {
                "auto" => {
                    // Protocol already auto-detected by from_query_stdio()
                    log_debug("Poster preview: Auto-detected protocol");
                }
                "iterm2" => {
                    picker.set_protocol_type(ratatui_image::picker::ProtocolType::Iterm2);
                    log_debug("Poster preview: Using iTerm2 protocol");
                }
                "kitty" => {
                    picker.set_protocol_type(ratatui_image::picker::ProtocolType::Kitty);
                    log_debug("Poster preview: Using Kitty protocol");
                }
                "sixel" => {
                    picker.set_protocol_type(ratatui_image::picker::ProtocolType::Sixel);
                    log_debug("Poster preview: Using Sixel protocol");
                }
                "halfblocks" => {
                    picker.set_protocol_type(ratatui_image::picker::ProtocolType::Halfblocks);
                    log_debug("Poster preview: Using Halfblocks protocol");
                }
                unknown => {
                    log_debug(&format!(
                        "Poster preview: Unknown protocol '{}', using auto-detect",
                        unknown
                    ));
                }
            }

            Some(picker)
        } else {
            None
        };

        let mut model = Model::new(Duration::from_millis(config.debounce_ms));
        model.ui.config_path = config_path;

        let mut app = Self {
            model,
            api_tx,
            api_rx,
            http: reqwest::Client::new(),
            poster_picker,
            poster_update_tx,
            poster_update_rx,
            poster_states: HashMap::new(),
            trending_limit,
            region: config.region,
            default_certification: config.default_certification,
        };

        // Initial load: popular titles plus the trending strip
        app.fetch_movies("");
        app.fetch_trending();

        app
    }
}

/// Determine the config file path with fallback logic.
///
/// A missing config is not an error: the app starts with defaults and shows
/// the fetch error in the UI once the token turns out to be absent too.
/// An explicitly given --config path that does not exist is an error.
fn get_config_path(cli_path: Option<String>) -> Result<Option<std::path::PathBuf>> {
    use std::path::PathBuf;

    // If CLI argument provided, use it
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(Some(p));
        } else {
            anyhow::bail!("Config file not found at specified path: {}", path);
        }
    }

    // Try ~/.config/flicktui/config.yaml
    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("flicktui").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    // Fallback to ./config.yaml
    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    // Set debug mode
    DEBUG_MODE.store(args.debug, Ordering::Relaxed);

    if args.debug {
        log_debug("Debug mode enabled");
    }

    // Determine config file path
    let config_path = get_config_path(args.config)?;
    let config_path_str = config_path.as_ref().map(|p| p.display().to_string());

    // Load configuration, falling back to defaults when there is no file
    let mut config = match &config_path {
        Some(path) => {
            if args.debug {
                log_debug(&format!("Loading config from: {:?}", path));
            }
            let config_str = fs::read_to_string(path)?;
            serde_yaml::from_str(&config_str)?
        }
        None => Config::default(),
    };

    // Environment variable wins over nothing, not over the config file
    if config.api_token.is_none() {
        config.api_token = std::env::var("TMDB_API_TOKEN").ok();
    }

    // Initialize app
    let mut app = App::new(config, config_path_str);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Return result after cleanup
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if app.model.ui.should_quit {
            return Ok(());
        }

        // Apply completed API work
        while let Ok(response) = app.api_rx.try_recv() {
            handlers::handle_api_response(app, response);
        }

        // Pick up finished poster loads
        while let Ok((movie_id, state)) = app.poster_update_rx.try_recv() {
            app.poster_states.insert(movie_id, state);
        }

        // Fire a fetch once the typed query has settled
        if let Some(query) = app.model.search.debouncer.poll() {
            app.fetch_movies(&query);
        }

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                handlers::handle_key(app, key);
            }
        }
    }
}
