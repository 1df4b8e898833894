//! Headless Drag Demo
//!
//! Drives a carousel with synthetic pointer events and logs what the
//! listeners see:
//! - a leftward drag past the threshold that commits a slide change
//! - a short drag that snaps back
//! - programmatic navigation back to the first slide
//!
//! Run with: cargo run -p whirl_carousel --example drag_demo

use std::time::{Duration, Instant};

use anyhow::Result;
use whirl_carousel::prelude::*;

const SLIDE_COUNT: usize = 4;
const SLIDE_WIDTH: f32 = 300.0;
const FRAME: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let mut carousel = Carousel::new(HeadlessTrack::new(SLIDE_COUNT, SLIDE_WIDTH));

    carousel.on(EventKind::SlideChange, |event| {
        if let CarouselEvent::SlideChange { index } = event {
            tracing::info!(index, "slide changed");
        }
    });
    carousel.on(EventKind::SlidePositionChange, |event| {
        if let CarouselEvent::SlidePositionChange { offset } = event {
            tracing::info!(offset, "position moved");
        }
    });

    let mut now = Instant::now();

    tracing::info!("drag left past the threshold");
    drag(&mut carousel, &mut now, 200.0, -50.0);
    play_settle(&mut carousel, &mut now);

    tracing::info!("drag left, but not far enough");
    drag(&mut carousel, &mut now, 200.0, -20.0);
    play_settle(&mut carousel, &mut now);

    tracing::info!("jump back to the first slide");
    carousel.go_to(0, now)?;
    play_settle(&mut carousel, &mut now);

    tracing::info!(
        active = carousel.active_slide(),
        offset = carousel.surface().rendered_offset(),
        "done"
    );
    Ok(())
}

/// Press, move in a few steps, release
fn drag(carousel: &mut Carousel<HeadlessTrack>, now: &mut Instant, from_x: f32, distance: f32) {
    carousel.handle_pointer(
        &PointerEvent::Mouse(MouseEvent::ButtonPressed {
            button: MouseButton::Left,
            x: from_x,
            y: 40.0,
        }),
        *now,
    );

    const STEPS: usize = 4;
    for step in 1..=STEPS {
        *now += FRAME;
        let x = from_x + distance * step as f32 / STEPS as f32;
        carousel.handle_pointer(&PointerEvent::Mouse(MouseEvent::Moved { x, y: 40.0 }), *now);
        carousel.tick(*now);
    }

    *now += FRAME;
    carousel.handle_pointer(
        &PointerEvent::Mouse(MouseEvent::ButtonReleased {
            button: MouseButton::Left,
            x: from_x + distance,
            y: 40.0,
        }),
        *now,
    );
}

/// Tick frames until the settle declaration reverts
fn play_settle(carousel: &mut Carousel<HeadlessTrack>, now: &mut Instant) {
    while carousel.surface().transition_installed() {
        *now += FRAME;
        carousel.tick(*now);
    }
}
