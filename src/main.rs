//! # Block Pusher Main Entry Point
//!
//! Parses the command line, loads the level, sets up macroquad rendering and
//! runs the main game loop.

use block_pusher::{
    config, BlockPusherError, BlockPusherResult, GameConfig, GameState, InputHandler, Level,
    MacroquadDisplay, PlayerInput,
};
use clap::Parser;
use log::info;
use macroquad::prelude::*;
use std::path::PathBuf;
#[cfg(feature = "dev-tools")]
use tracing::Level as TraceLevel;

/// Command line arguments for the block pusher.
#[derive(Parser, Debug)]
#[command(name = "block-pusher")]
#[command(about = "A small tile-based block pushing puzzle game")]
#[command(version)]
struct Args {
    /// Level text file (defaults to the built-in level)
    #[arg(short, long)]
    level: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory containing block.png and pusher.png
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Block Pusher".to_string(),
        window_width: config::DEFAULT_WINDOW_WIDTH,
        window_height: config::DEFAULT_WINDOW_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() -> BlockPusherResult<()> {
    let args = Args::parse();

    // Initialize logging
    initialize_logging(&args.log_level)?;

    info!("Starting Block Pusher v{}", block_pusher::VERSION);

    run_game(&args).await
}

/// Initializes the logging system based on the specified log level.
fn initialize_logging(log_level: &str) -> BlockPusherResult<()> {
    #[cfg(feature = "dev-tools")]
    {
        let level = match log_level.to_lowercase().as_str() {
            "error" => TraceLevel::ERROR,
            "warn" => TraceLevel::WARN,
            "info" => TraceLevel::INFO,
            "debug" => TraceLevel::DEBUG,
            "trace" => TraceLevel::TRACE,
            _ => TraceLevel::INFO,
        };

        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .try_init()
            .map_err(|e| BlockPusherError::InvalidState(format!("logging: {}", e)))?;
    }

    #[cfg(not(feature = "dev-tools"))]
    {
        env_logger::Builder::new()
            .parse_filters(log_level)
            .try_init()
            .map_err(|e| BlockPusherError::InvalidState(format!("logging: {}", e)))?;
    }

    Ok(())
}

/// Loads configuration and level, then runs the game loop.
async fn run_game(args: &Args) -> BlockPusherResult<()> {
    let mut game_config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(assets) = &args.assets {
        game_config.asset_dir = assets.clone();
    }

    let level = match &args.level {
        Some(path) => Level::load(path)?,
        None => Level::default_level()?,
    };

    request_new_screen_size(
        game_config.window_width as f32,
        game_config.window_height as f32,
    );

    let mut game_state = GameState::new(level, game_config)?;
    let mut display = MacroquadDisplay::new(&game_state.config).await?;
    let input_handler = InputHandler::new();

    display.add_message(format!("Welcome to {}!", game_state.level.name));
    display.add_message("Push the blocks and reach the exit. F1 for help".to_string());

    run_game_loop(&mut game_state, &mut display, &input_handler).await
}

/// Main game loop implementation.
async fn run_game_loop(
    game_state: &mut GameState,
    display: &mut MacroquadDisplay,
    input_handler: &InputHandler,
) -> BlockPusherResult<()> {
    loop {
        let dt = get_frame_time();

        // Settle any running slide before looking at this frame's input
        game_state.update(dt);
        display.update(dt);

        if let Some(input) = input_handler.get_input() {
            match input {
                PlayerInput::Quit => {
                    info!("Player quit the game");
                    break;
                }
                PlayerInput::Help => {
                    display.hud.toggle_help();
                }
                PlayerInput::Restart => {
                    game_state.restart_level();
                }
                PlayerInput::Move(direction) => {
                    let result = game_state.handle_move(direction);
                    display.on_move_result(&result);
                }
            }
        }

        for event in game_state.drain_events() {
            if let Some(text) = event.message() {
                display.add_message(text);
            }
        }

        display.render_game(game_state);

        next_frame().await;
    }

    info!(
        "Game loop ended after {} moves ({} pushes, {} completions)",
        game_state.statistics.moves_made,
        game_state.statistics.pushes,
        game_state.statistics.levels_completed
    );
    Ok(())
}
