use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use log::info;
use tankcraft::config::{
    GameConfig, DEFAULT_AI_TANKS, TARGET_FPS, WINDOW_HEIGHT, WINDOW_MIN_HEIGHT, WINDOW_MIN_WIDTH,
    WINDOW_WIDTH,
};
use tankcraft::game::{sample_input, Game};
use tankcraft::init_logging;

/// Drive a tank, bolt parts onto it.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// World seed; defaults to the clock
    #[arg(long)]
    seed: Option<u64>,
    /// Number of computer-controlled tanks
    #[arg(long, default_value_t = DEFAULT_AI_TANKS)]
    ai_tanks: usize,
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
    /// Draw a single frame to debug_frame.png and exit
    #[arg(long)]
    render_frame: bool,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let (mut rl, thread) = raylib::init()
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .title("Tank Craft")
        .resizable()
        .build();
    rl.set_window_min_size(WINDOW_MIN_WIDTH, WINDOW_MIN_HEIGHT);
    rl.set_exit_key(None);
    rl.set_target_fps(TARGET_FPS);

    let config = GameConfig {
        ai_tanks: args.ai_tanks,
        ..GameConfig::with_seed(args.seed.unwrap_or_else(system_seed))
    };
    let mut game = Game::new(&config);

    if args.render_frame {
        let camera = game.camera(rl.get_screen_width(), rl.get_screen_height());
        let input = sample_input(&rl, camera);
        game.update(&input, 1.0 / TARGET_FPS as f32);
        {
            let mut d = rl.begin_drawing(&thread);
            game.draw(&mut d);
        }
        rl.take_screenshot(&thread, "debug_frame.png");
        info!("wrote debug_frame.png");
        return;
    }

    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        let camera = game.camera(rl.get_screen_width(), rl.get_screen_height());
        let input = sample_input(&rl, camera);
        game.update(&input, dt);
        let mut d = rl.begin_drawing(&thread);
        game.draw(&mut d);
    }
    info!("window closed");
}

fn system_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64
}
