//! Headless scripted session: drives a maze run at a fixed 60 Hz without a
//! renderer, logging state once per simulated second.
//!
//! Run with: `cargo run --example headless_run`
//! Set `RUST_LOG=debug` to also see blocked-move and camera-mode logs.

use anyhow::Result;
use daedal_engine::prelude::*;
use tracing_subscriber::EnvFilter;

const DT: f64 = 1.0 / 60.0;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let mut session = GameSession::new(SessionConfig::default(), Box::new(MemoryStore::new()));

    // Stand in for the host's loaders: report every asset ready up front.
    for key in AssetKey::ALL {
        session.assets_mut().begin_load(key);
        session.assets_mut().finish_load(key);
    }
    for event in session.assets_mut().drain_events() {
        tracing::debug!(?event, "asset event");
    }

    // Scripted input: mostly forward, with a slow weave, one pause break,
    // and a restart halfway through.
    for tick in 0..1200u32 {
        let frame = InputFrame {
            forward: true,
            rotate_left: (tick / 90) % 2 == 0,
            rotate_right: (tick / 90) % 2 == 1,
            toggle_pause: tick == 300 || tick == 360,
            restart: tick == 600,
            ..InputFrame::default()
        };

        for event in session.update(&frame, DT) {
            match event {
                SessionEvent::MazeRebuilt => tracing::info!(tick, "maze rebuilt"),
                SessionEvent::Victory { elapsed, new_best } => {
                    tracing::info!(tick, elapsed, new_best, "victory!");
                }
            }
        }

        if tick % 60 == 0 {
            let agent = session.agent();
            tracing::info!(
                tick,
                x = agent.position.x,
                z = agent.position.z,
                yaw = agent.yaw,
                anim = ?session.animation().current(),
                clock = %format_time(session.elapsed()),
                "frame"
            );
        }
    }

    let best = session
        .best_time()
        .map_or_else(|| "--:--.--".to_owned(), format_time);
    tracing::info!(best = %best, walls = session.walls().len(), "run finished");
    Ok(())
}
