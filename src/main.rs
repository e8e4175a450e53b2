//! Hamper Hero entry point
//!
//! Runs a headless demo session: the autopilot drives the truck through the
//! pointer interface while the log renderer prints each screen change.
//!
//! Usage: `hamper-hero [CONFIG] [--seconds N]`

use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use hamper_hero::platform::PointerEvent;
use hamper_hero::renderer::LogRenderer;
use hamper_hero::sim::autopilot;
use hamper_hero::{ConfigError, Engine, GameConfig, GamePhase};

const DRIVER_POINTER: u32 = 0;

#[derive(Parser)]
#[command(name = "hamper-hero")]
#[command(version, about = "Hamper Hero - headless autopilot demo")]
struct Args {
    /// JSON config file (defaults are used when omitted)
    config: Option<PathBuf>,

    /// How long to run the demo, in seconds
    #[arg(long, default_value_t = 20)]
    seconds: u64,
}

fn main() -> Result<(), ConfigError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    let frame = config.frame_budget();
    let tap_y = config.screen_height / 2.0;

    log::info!("Hamper Hero (headless) starting, seed {:#x}", config.seed);
    let mut engine = Engine::new(config, LogRenderer::new())?;
    engine.start();

    let deadline = Instant::now() + Duration::from_secs(args.seconds);
    let mut steering = false;
    while Instant::now() < deadline {
        let snapshot = engine.snapshot();
        match snapshot.phase {
            GamePhase::Start | GamePhase::GameOver => {
                steering = false;
                engine.handle_pointer(PointerEvent::Press { id: DRIVER_POINTER, x: 0.0, y: tap_y });
                engine.handle_pointer(PointerEvent::Release { id: DRIVER_POINTER });
            }
            GamePhase::Playing => {
                let view = snapshot.view();
                let x = autopilot::target_x(&view.vehicle, view.hampers, view.obstacles, view.config);
                let event = if steering {
                    PointerEvent::Move { id: DRIVER_POINTER, x, y: tap_y }
                } else {
                    steering = true;
                    PointerEvent::Press { id: DRIVER_POINTER, x, y: tap_y }
                };
                engine.handle_pointer(event);
            }
            GamePhase::LevelComplete => {
                if steering {
                    steering = false;
                    engine.handle_pointer(PointerEvent::Release { id: DRIVER_POINTER });
                }
            }
        }
        thread::sleep(frame);
    }

    engine.stop();
    let snapshot = engine.snapshot();
    log::info!(
        "Demo finished on level {} ({:?}), {}/{} hampers",
        snapshot.progress.level,
        snapshot.phase,
        snapshot.progress.hampers_collected,
        snapshot.progress.hamper_goal
    );
    let frames = engine.with_renderer(|r| r.frames());
    log::info!("Rendered {frames} frames");
    Ok(())
}
