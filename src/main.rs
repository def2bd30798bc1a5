use std::rc::Rc;

use anyhow::{Context, Result};
use rune_config::MotionConfig;
use rune_transition::{
    Crossfade, CrossfadeParams, Direction, FadeParams, MeasuredElement, Rect, Timing,
    TransitionDescriptor, fade,
};

type Element = Rc<MeasuredElement>;

/// A list item leaving one column and its replacement entering another.
struct Move {
    key: &'static str,
    from: Option<Rect>,
    to: Option<Rect>,
}

fn fallback_fade(
    element: &Element,
    params: &CrossfadeParams,
    _intro: bool,
) -> Option<TransitionDescriptor> {
    let fade_params = FadeParams {
        timing: Timing::new(params.timing.easing).with_delay(params.timing.delay_ms),
    };
    match fade(element, &fade_params) {
        Ok(descriptor) => Some(descriptor),
        Err(e) => {
            log::warn!("fallback fade failed: {}", e);
            None
        }
    }
}

fn print_frames(
    label: &str,
    descriptor: &TransitionDescriptor,
    direction: Direction,
    step_ms: f64,
) {
    println!(
        "{} ({:?}, {:.0}ms + {:.0}ms, {:?})",
        label, direction, descriptor.delay_ms, descriptor.duration_ms, descriptor.easing
    );
    let mut elapsed = 0.0;
    loop {
        println!("  {:>6.0}ms  {}", elapsed, descriptor.sample(elapsed, direction));
        if descriptor.is_finished(elapsed) {
            break;
        }
        elapsed += step_ms;
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let config = MotionConfig::load();
    let params =
        CrossfadeParams::from_config(&config).context("invalid crossfade configuration")?;
    let step_ms = std::env::var("DEMO_FRAME_MS")
        .ok()
        .and_then(|value| value.parse::<f64>().ok())
        .filter(|step| *step > 0.0)
        .unwrap_or(100.0);

    let session: Crossfade<&'static str, Element> =
        Crossfade::with_fallback(params, fallback_fade);
    let (send, receive) = (session.send(), session.receive());

    let moves = [
        Move {
            key: "todo-1",
            from: Some(Rect::new(20.0, 40.0, 240.0, 32.0)),
            to: Some(Rect::new(300.0, 40.0, 240.0, 32.0)),
        },
        Move {
            key: "todo-2",
            from: Some(Rect::new(20.0, 80.0, 240.0, 32.0)),
            to: Some(Rect::new(300.0, 80.0, 240.0, 64.0)),
        },
        Move {
            key: "todo-3",
            from: Some(Rect::new(20.0, 120.0, 240.0, 32.0)),
            to: None,
        },
    ];

    // One update batch: every request is made before any is resolved.
    let mut pending = Vec::new();
    for item in &moves {
        if let Some(rect) = item.from {
            let element = Rc::new(MeasuredElement::new(rect));
            pending.push((item.key, send.request_default(element, item.key)?));
        }
        if let Some(rect) = item.to {
            let element = Rc::new(MeasuredElement::new(rect).with_opacity(0.9));
            pending.push((item.key, receive.request_default(element, item.key)?));
        }
    }
    log::info!(
        "registered {} outgoing and {} incoming elements",
        session.pending(Direction::Outro),
        session.pending(Direction::Intro)
    );

    for (key, request) in pending {
        let direction = request.direction();
        match request.resolve() {
            Some(descriptor) => print_frames(key, &descriptor, direction, step_ms),
            None => log::info!("{}: no transition", key),
        }
    }

    log::info!(
        "done, {} entries left registered",
        session.pending(Direction::Outro) + session.pending(Direction::Intro)
    );
    Ok(())
}
