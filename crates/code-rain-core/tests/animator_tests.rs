// Host-side tests for the animator lifecycle, driven by the in-memory host.

use code_rain_core::testing::{DrawCall, ManualScheduler, ManualViewport, RecordingSurface};
use code_rain_core::*;

type TestAnimator = Animator<RecordingSurface, ManualScheduler, ManualViewport>;

fn make_animator(seed: u64) -> (TestAnimator, ManualScheduler, ManualViewport) {
    let scheduler = ManualScheduler::new();
    let viewport = ManualViewport::new(Viewport::new(800.0, 600.0));
    let animator = Animator::new(
        FieldParams::default(),
        ZoneLayout::default(),
        seed,
        scheduler.clone(),
        viewport.clone(),
    );
    (animator, scheduler, viewport)
}

/// Run pending frames the way a host loop would.
fn pump(animator: &mut TestAnimator, scheduler: &ManualScheduler, frames: usize) -> usize {
    let mut ran = 0;
    for _ in 0..frames {
        if scheduler.fire().is_none() {
            break;
        }
        animator.frame();
        ran += 1;
    }
    ran
}

#[test]
fn start_sizes_surface_draws_and_schedules() {
    let (mut animator, scheduler, viewport) = make_animator(1);
    let surface = RecordingSurface::new();

    animator.start(surface.clone());

    let calls = surface.calls();
    assert_eq!(calls[0], DrawCall::Resize(Viewport::new(800.0, 600.0)));
    assert_eq!(calls[1], DrawCall::Clear);
    assert_eq!(scheduler.pending().len(), 1);
    assert!(viewport.is_subscribed());
    assert_eq!(animator.frames(), 1);
    assert_eq!(
        animator.field().map(|f| f.particles().len()),
        Some(animator.params().particle_count)
    );
}

#[test]
fn loop_keeps_exactly_one_request_in_flight() {
    let (mut animator, scheduler, _viewport) = make_animator(2);
    animator.start(RecordingSurface::new());

    assert_eq!(pump(&mut animator, &scheduler, 30), 30);

    assert_eq!(scheduler.pending().len(), 1);
    assert_eq!(animator.frames(), 31);
}

#[test]
fn stop_mid_animation_cancels_frame_and_listener() {
    let (mut animator, scheduler, viewport) = make_animator(3);
    let surface = RecordingSurface::new();
    animator.start(surface.clone());
    pump(&mut animator, &scheduler, 10);
    let pending = scheduler.pending();

    let returned = animator.stop();

    assert!(returned.is_some());
    assert!(!animator.is_running());
    assert!(scheduler.pending().is_empty());
    assert_eq!(scheduler.cancelled(), pending);
    assert!(!viewport.is_subscribed());

    let draws_at_stop = surface.text_count();
    let calls_at_stop = surface.calls().len();
    // A stale callback the host already dequeued must not draw.
    assert!(animator.frame().is_none());
    assert_eq!(pump(&mut animator, &scheduler, 5), 0);
    // Resize no longer reaches the animator.
    assert!(!viewport.set_size(Viewport::new(1024.0, 768.0)));
    assert_eq!(surface.text_count(), draws_at_stop);
    assert_eq!(surface.calls().len(), calls_at_stop);
}

#[test]
fn resize_updates_surface_and_zones() {
    let (mut animator, scheduler, viewport) = make_animator(4);
    let surface = RecordingSurface::new();
    animator.start(surface.clone());

    assert!(viewport.set_size(Viewport::new(1600.0, 900.0)));
    animator.on_resize();

    assert!(surface
        .calls()
        .contains(&DrawCall::Resize(Viewport::new(1600.0, 900.0))));
    let field = animator.field().expect("running");
    assert_eq!(field.viewport(), Viewport::new(1600.0, 900.0));
    assert_eq!(field.regions()[1], Rect::new(0.0, 500.0, 1600.0, 150.0));
    // The loop carries on after a resize.
    assert_eq!(pump(&mut animator, &scheduler, 3), 3);
}

#[test]
fn second_start_is_ignored() {
    let (mut animator, scheduler, viewport) = make_animator(5);
    let first = RecordingSurface::new();
    let second = RecordingSurface::new();
    animator.start(first.clone());

    animator.start(second.clone());

    assert!(second.calls().is_empty());
    assert_eq!(scheduler.pending().len(), 1);
    animator.stop();
    assert!(!viewport.is_subscribed());
}

#[test]
fn restart_after_stop_spawns_a_fresh_field() {
    let (mut animator, scheduler, viewport) = make_animator(6);
    animator.start(RecordingSurface::new());
    pump(&mut animator, &scheduler, 5);
    animator.stop();

    animator.start(RecordingSurface::new());

    assert_eq!(animator.frames(), 1);
    assert_eq!(scheduler.pending().len(), 1);
    assert!(viewport.is_subscribed());
}

#[test]
fn dropping_a_running_animator_releases_host_resources() {
    let (mut animator, scheduler, viewport) = make_animator(7);
    animator.start(RecordingSurface::new());

    drop(animator);

    assert!(scheduler.pending().is_empty());
    assert!(!viewport.is_subscribed());
}

#[test]
fn same_seed_same_first_frame() {
    let (mut a, _, _) = make_animator(99);
    let (mut b, _, _) = make_animator(99);
    let sa = RecordingSurface::new();
    let sb = RecordingSurface::new();

    a.start(sa.clone());
    b.start(sb.clone());

    assert_eq!(sa.calls(), sb.calls());
}

#[test]
fn independent_instances_do_not_interfere() {
    let (mut a, sched_a, _) = make_animator(10);
    let (mut b, sched_b, view_b) = make_animator(11);
    a.start(RecordingSurface::new());
    b.start(RecordingSurface::new());

    a.stop();

    assert!(sched_a.pending().is_empty());
    assert_eq!(sched_b.pending().len(), 1);
    assert!(view_b.is_subscribed());
    assert_eq!(pump(&mut b, &sched_b, 4), 4);
}
