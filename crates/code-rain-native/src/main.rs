use anyhow::{ensure, Context};
use clap::Parser;
use code_rain_core::{Animator, FieldParams, Viewport, ZoneLayout};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

mod grid;
mod timer;

use grid::GridSurface;
use timer::{FixedViewport, TimerScheduler};

// Largest viewport edge the grid will rasterize.
const MAX_VIEWPORT_PX: f32 = 16_384.0;

/// Run the code-rain backdrop headless and print its last frame as text.
#[derive(Parser, Debug)]
#[command(name = "code-rain-preview", version, about)]
struct Args {
    /// Viewport width in pixels
    #[arg(long, default_value_t = 1280.0)]
    width: f32,
    /// Viewport height in pixels
    #[arg(long, default_value_t = 800.0)]
    height: f32,
    /// Frames to simulate, including the first (at least 1)
    #[arg(long, default_value_t = 120)]
    frames: u64,
    /// Timer rate standing in for the display refresh
    #[arg(long, default_value_t = 60.0)]
    fps: f64,
    /// RNG seed; defaults to the current time
    #[arg(long)]
    seed: Option<u64>,
    /// Draw over the whole viewport, ignoring the page's protected zones
    #[arg(long)]
    no_zones: bool,
}

fn validate(args: &Args) -> anyhow::Result<()> {
    ensure!(args.fps.is_finite() && args.fps > 0.0, "--fps must be positive");
    ensure!(args.frames >= 1, "--frames must be at least 1");
    for (flag, px) in [("--width", args.width), ("--height", args.height)] {
        ensure!(
            px.is_finite() && px > 0.0 && px <= MAX_VIEWPORT_PX,
            "{} must be in (0, {}], got {}",
            flag,
            MAX_VIEWPORT_PX,
            px
        );
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    validate(&args)?;

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    });
    let layout = if args.no_zones {
        ZoneLayout::empty()
    } else {
        ZoneLayout::default()
    };

    let scheduler = TimerScheduler::new(Duration::from_secs_f64(1.0 / args.fps));
    let mut animator = Animator::new(
        FieldParams::default(),
        layout,
        seed,
        scheduler.clone(),
        FixedViewport::new(Viewport::new(args.width, args.height)),
    );
    log::info!("[preview] seed={} frames={} fps={}", seed, args.frames, args.fps);

    let started = Instant::now();
    animator.start(GridSurface::new());
    let mut hidden = 0usize;
    let mut rerolled = 0usize;
    while animator.frames() < args.frames {
        let Some(due) = scheduler.take_due() else {
            break;
        };
        let now = Instant::now();
        if due > now {
            std::thread::sleep(due - now);
        }
        if let Some(stats) = animator.frame() {
            hidden += stats.hidden;
            rerolled += stats.rerolled;
        }
    }
    let frames = animator.frames();
    let grid = animator.stop().context("animator stopped before the run finished")?;

    print!("{}", grid.render());
    log::info!(
        "[preview] frames={} drawn={} hidden={} rerolled={} elapsed={:.2?}",
        frames,
        grid.glyphs_drawn,
        hidden,
        rerolled,
        started.elapsed()
    );
    Ok(())
}
