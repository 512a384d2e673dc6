//! Headless Wheel Demo
//!
//! Drives a centimetre ruler without any window:
//! - Loads an optional TOML config
//! - Scripts a drag, a fling and a tap
//! - Logs every notification and the rendered mark window
//!
//! Run with: cargo run -p wheel_view --example headless [config.toml]
//! Set RUST_LOG=wheel_view=trace for per-frame offsets.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use wheel_platform::{EstimatedTextMeasurer, PointerEvent, RecordingHost};
use wheel_view::{WheelConfig, WheelView};

const FRAME: f32 = 1.0 / 60.0;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config {path}"))?;
            WheelConfig::from_toml_str(&text).with_context(|| format!("parsing config {path}"))?
        }
        None => WheelConfig::default().with_additional_center_mark("cm"),
    };

    let host = Arc::new(RecordingHost::new());
    let mut wheel = WheelView::new(config, Arc::new(EstimatedTextMeasurer), host.clone());
    wheel.on_changed(|index| tracing::info!("changed -> {}", index));
    wheel.on_selected(|index| tracing::info!("selected -> {}", index));

    wheel.set_items((0..=200).map(|cm| cm.to_string()));
    wheel.set_viewport_size(360.0, 80.0);
    wheel.set_min_selectable_index(20);
    wheel.set_max_selectable_index(180);
    wheel.select_index(100);
    run(&mut wheel);
    tracing::info!("interval {:.1}px, resting on {}", wheel.interval(), wheel.selected_index());

    tracing::info!("-- slow drag to the right, then release");
    let mut time_ms = 0;
    wheel.on_pointer_event(&PointerEvent::down(180.0, time_ms));
    for step in 1..=8 {
        time_ms += 16;
        wheel.on_pointer_event(&PointerEvent::moved(180.0 + step as f32 * 10.0, time_ms));
    }
    time_ms += 400;
    wheel.on_pointer_event(&PointerEvent::up(260.0, time_ms));
    run(&mut wheel);

    tracing::info!("-- fast fling to the left");
    time_ms += 1000;
    wheel.on_pointer_event(&PointerEvent::down(300.0, time_ms));
    for step in 1..=6 {
        time_ms += 8;
        wheel.on_pointer_event(&PointerEvent::moved(300.0 - step as f32 * 30.0, time_ms));
    }
    wheel.on_pointer_event(&PointerEvent::up(120.0, time_ms));
    run(&mut wheel);

    tracing::info!("-- tap two marks right of the cursor");
    time_ms += 1000;
    let x = 180.0 + 2.0 * wheel.interval();
    wheel.on_pointer_event(&PointerEvent::down(x, time_ms));
    wheel.on_pointer_event(&PointerEvent::up(x, time_ms + 60));
    run(&mut wheel);

    let info = wheel.render_info();
    tracing::info!(
        "final: selected {} at offset {:.1}, drawing marks {:?}",
        info.selected,
        info.offset,
        info.visible
    );
    tracing::info!(
        "host saw {} redraws, {} clicks",
        host.redraws(),
        host.clicks()
    );

    let snapshot = wheel.snapshot();
    tracing::info!("snapshot {}", snapshot.to_json()?);
    Ok(())
}

fn run(wheel: &mut WheelView) {
    let mut frames = 0;
    while wheel.tick(FRAME) {
        frames += 1;
    }
    tracing::debug!("came to rest after {} frames", frames);
}
