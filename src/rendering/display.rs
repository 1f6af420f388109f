//! # Display Management
//!
//! 2D rendering of the board using macroquad.

use crate::config::GameConfig;
use crate::game::{GameState, MoveResult, Position};
use crate::rendering::{WalkAnimation, HUD};
use crate::BlockPusherResult;
use macroquad::prelude::*;

const BLOCK_IMAGE: &str = "block.png";
const PUSHER_IMAGE: &str = "pusher.png";

/// Macroquad display manager for the game.
///
/// Owns sprite textures and the mover's walk animation, and draws the board,
/// the sliding transition and the HUD.
pub struct MacroquadDisplay {
    /// Tile size in pixels
    pub tile_size: f32,
    /// Block sprite, if it could be loaded
    pub block_texture: Option<Texture2D>,
    /// Mover spritesheet, if it could be loaded
    pub pusher_texture: Option<Texture2D>,
    /// Walk cycle of the mover
    pub walk: WalkAnimation,
    /// Heads-up display
    pub hud: HUD,
}

impl MacroquadDisplay {
    /// Creates a new display manager and loads sprites from the asset directory.
    ///
    /// Missing images are not fatal; those entities are drawn as coloured tiles.
    pub async fn new(config: &GameConfig) -> BlockPusherResult<Self> {
        let block_texture = load_sprite(config, BLOCK_IMAGE).await;
        let pusher_texture = load_sprite(config, PUSHER_IMAGE).await;

        Ok(Self {
            tile_size: config.tile_size as f32,
            block_texture,
            pusher_texture,
            walk: WalkAnimation::new(),
            hud: HUD::new(),
        })
    }

    /// Starts the walk animation for accepted moves.
    pub fn on_move_result(&mut self, result: &MoveResult) {
        if let MoveResult::Accepted(accepted) = result {
            self.walk.play(accepted.direction);
        }
    }

    /// Advances animations by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        self.walk.update(dt);
    }

    /// Adds a message to the HUD.
    pub fn add_message(&mut self, message: String) {
        self.hud.add_message(message);
    }

    /// Renders the complete game screen.
    pub fn render_game(&self, game_state: &GameState) {
        clear_background(Color::new(0.1, 0.1, 0.12, 1.0));

        let rect = game_state.config.game_rect;
        draw_rectangle_lines(
            rect.x as f32,
            rect.y as f32,
            rect.width as f32,
            rect.height as f32,
            2.0,
            DARKGRAY,
        );

        self.render_exit(game_state.exit);
        self.render_obstacles(game_state);
        self.render_mover(game_state);

        self.hud.render(game_state, &rect);
    }

    fn render_exit(&self, exit: Position) {
        let (x, y) = self.top_left(exit, (0.0, 0.0));
        draw_rectangle(x, y, self.tile_size, self.tile_size, DARKGREEN);
        draw_rectangle_lines(x, y, self.tile_size, self.tile_size, 2.0, GREEN);
    }

    fn render_obstacles(&self, game_state: &GameState) {
        let transition = game_state.transition();
        for (index, &position) in game_state.obstacles.iter().enumerate() {
            let offset = match transition {
                Some(t) if t.moves_obstacle(index) => t.slide_offset(game_state.config.tile_size),
                _ => (0.0, 0.0),
            };
            let (x, y) = self.top_left(position, offset);

            match &self.block_texture {
                Some(texture) => draw_texture_ex(
                    texture,
                    x,
                    y,
                    WHITE,
                    DrawTextureParams {
                        dest_size: Some(vec2(self.tile_size, self.tile_size)),
                        ..Default::default()
                    },
                ),
                None => {
                    draw_rectangle(x, y, self.tile_size, self.tile_size, BROWN);
                    draw_rectangle_lines(x, y, self.tile_size, self.tile_size, 2.0, BEIGE);
                }
            }
        }
    }

    fn render_mover(&self, game_state: &GameState) {
        let offset = game_state
            .transition()
            .map(|t| t.slide_offset(game_state.config.tile_size))
            .unwrap_or((0.0, 0.0));
        let (x, y) = self.top_left(game_state.mover, offset);

        match &self.pusher_texture {
            Some(texture) => {
                let (sx, sy, sw, sh) =
                    WalkAnimation::frame_source(self.walk.current_frame(), self.tile_size);
                draw_texture_ex(
                    texture,
                    x,
                    y,
                    WHITE,
                    DrawTextureParams {
                        dest_size: Some(vec2(self.tile_size, self.tile_size)),
                        source: Some(Rect::new(sx, sy, sw, sh)),
                        ..Default::default()
                    },
                );
            }
            None => {
                let half = self.tile_size / 2.0;
                draw_circle(x + half, y + half, half * 0.8, YELLOW);
            }
        }
    }

    /// Screen coordinates of the top-left corner of an entity centred on `position`.
    fn top_left(&self, position: Position, offset: (f32, f32)) -> (f32, f32) {
        let half = self.tile_size / 2.0;
        (
            position.x as f32 + offset.0 - half,
            position.y as f32 + offset.1 - half,
        )
    }
}

async fn load_sprite(config: &GameConfig, file: &str) -> Option<Texture2D> {
    let path = config.asset_dir.join(file);
    let path = path.to_string_lossy();
    match load_texture(&path).await {
        Ok(texture) => {
            texture.set_filter(FilterMode::Nearest);
            log::info!("Loaded sprite {}", path);
            Some(texture)
        }
        Err(e) => {
            log::warn!("Could not load sprite {} ({}); using a plain tile", path, e);
            None
        }
    }
}
