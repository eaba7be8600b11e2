//! Hover Transition Demo
//!
//! Simulates a control's hover-in / hover-out color transition driven by a
//! coarse timer, logging the sampled fill color each tick:
//! - Hover-in plays a Quad/Out highlight over 150 ms
//! - Hover-out replays the same tracks in reverse
//!
//! Run with: cargo run -p sheen_animation --example hover_fade

use sheen_animation::{Color, TransitionPreset};

const TICK_MS: f32 = 16.0;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let base = Color::rgb(45, 45, 48);
    let highlight = Color::rgb(0, 122, 204);

    let mut hover = TransitionPreset::hover(base, highlight);

    tracing::info!("hover-in");
    hover.start();
    while hover.is_active() {
        hover.tick(TICK_MS);
        log_fill(hover.current());
    }

    tracing::info!("hover-out");
    hover.reset();
    hover.set_reverse(true);
    hover.start();
    while hover.is_active() {
        hover.tick(TICK_MS);
        log_fill(hover.current());
    }
}

fn log_fill(color: Color) {
    let Color { r, g, b, .. } = color;
    tracing::info!("fill = #{r:02X}{g:02X}{b:02X}");
}
