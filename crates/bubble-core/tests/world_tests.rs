use bubble_core::*;
use glam::Vec2;

fn measured_world() -> BubbleWorld {
    let mut world = BubbleWorld::with_defaults().expect("default world");
    world.resize(1200.0, 800.0);
    world
}

/// Viewport-space center of an item at its current rendered position.
fn on_screen_center(world: &BubbleWorld, id: ItemId) -> Vec2 {
    let item = world.item(id).unwrap();
    let t = world.item_transform(id);
    item.center() + t.offset + world.snapshot().world_offset
}

fn click(world: &mut BubbleWorld, at: Vec2) -> PointerOutcome {
    let mut capture = CaptureRegister::new();
    world.pointer_down(PointerSample::new(1, at.x, at.y));
    world.pointer_up(PointerSample::new(1, at.x, at.y), &mut capture)
}

#[test]
fn default_world_mounts_every_item() {
    let world = BubbleWorld::with_defaults().unwrap();
    assert_eq!(world.items().len(), 14);
    assert_eq!(world.idle().len(), 14);
    assert!(!world.is_torn_down());
}

#[test]
fn unmeasured_world_renders_at_origin() {
    let world = BubbleWorld::with_defaults().unwrap();
    let snap = world.snapshot();
    assert_eq!(snap.world_offset, Vec2::ZERO);
    assert_eq!(snap.parallax_offset, Vec2::ZERO);
    assert!(!snap.is_dragging);
}

#[test]
fn first_resize_centers_the_content() {
    let world = measured_world();
    let c = world.content_bounds().center();
    let snap = world.snapshot();
    assert_eq!(snap.world_offset, Vec2::new(600.0 - c.x, 400.0 - c.y));
    assert_eq!(snap.parallax_offset, Vec2::ZERO);
}

#[test]
fn invalid_layout_is_reported_at_construction() {
    let mut params = WorldParams::default();
    params.layout.item_count = 20;
    let err = BubbleWorld::new(params, &default_catalog()).err().unwrap();
    assert_eq!(
        err,
        WorldError::Layout(LayoutError::TooManyItems {
            requested: 20,
            available: 14
        })
    );
}

#[test]
fn click_on_item_selects_it() {
    let mut world = measured_world();
    for id in [0, 5, 9, 13] {
        let at = on_screen_center(&world, id);
        assert_eq!(click(&mut world, at), PointerOutcome::Selected(id));
    }
}

#[test]
fn click_with_small_jitter_still_selects() {
    let mut world = measured_world();
    let mut capture = CaptureRegister::new();
    let at = on_screen_center(&world, 4);
    world.pointer_down(PointerSample::new(1, at.x, at.y));
    world.pointer_move(PointerSample::new(1, at.x + 3.0, at.y - 2.0), &mut capture);
    let out = world.pointer_up(PointerSample::new(1, at.x + 3.0, at.y - 2.0), &mut capture);
    assert_eq!(out, PointerOutcome::Selected(4));
}

#[test]
fn click_on_empty_space_releases() {
    let mut world = measured_world();
    // the world center sits inside the inner hexagon, away from every bubble
    let at = world_center_vec2() + world.snapshot().world_offset;
    assert_eq!(click(&mut world, at), PointerOutcome::Released);
}

#[test]
fn drag_starting_on_item_never_selects() {
    let mut world = measured_world();
    let mut capture = CaptureRegister::new();
    let at = on_screen_center(&world, 2);
    assert_eq!(world.pointer_down(PointerSample::new(1, at.x, at.y)), PointerOutcome::Armed);
    assert_eq!(
        world.pointer_move(PointerSample::new(1, at.x + 40.0, at.y), &mut capture),
        PointerOutcome::Dragging
    );
    assert!(world.snapshot().is_dragging);
    let out = world.pointer_up(PointerSample::new(1, at.x + 40.0, at.y), &mut capture);
    assert_eq!(out, PointerOutcome::Released);
    assert!(!world.snapshot().is_dragging);
}

#[test]
fn hit_testing_follows_the_rendered_camera() {
    let mut world = measured_world();
    let mut capture = CaptureRegister::new();
    world.pointer_down(PointerSample::new(1, 600.0, 400.0));
    world.pointer_move(PointerSample::new(1, 500.0, 400.0), &mut capture);
    world.pointer_up(PointerSample::new(1, 500.0, 400.0), &mut capture);
    for _ in 0..300 {
        world.tick(1.0 / 60.0);
    }
    assert!(world.camera().is_settled());
    let at = on_screen_center(&world, 7);
    assert_eq!(world.item_at(at), Some(7));
}

#[test]
fn tick_animates_idle_motion() {
    let mut world = measured_world();
    assert_eq!(world.item_transform(0), IdleSample::REST);
    world.tick(5.0);
    let moved = (0..14).any(|id| world.item_transform(id) != IdleSample::REST);
    assert!(moved);
}

#[test]
fn unmounting_releases_the_item_track() {
    let mut world = measured_world();
    assert!(world.unmount_item(3));
    assert_eq!(world.idle().len(), 13);
    world.tick(5.0);
    assert_eq!(world.item_transform(3), IdleSample::REST);
    world.mount_item(3);
    assert_eq!(world.idle().len(), 14);
    world.mount_item(99);
    assert_eq!(world.idle().len(), 14);
}

#[test]
fn teardown_releases_everything_and_ignores_later_input() {
    let mut world = measured_world();
    let mut capture = CaptureRegister::new();
    world.pointer_down(PointerSample::new(1, 600.0, 400.0));
    world.pointer_move(PointerSample::new(1, 650.0, 400.0), &mut capture);
    assert_eq!(capture.owner(), Some(1));

    world.teardown(&mut capture);
    assert!(world.is_torn_down());
    assert_eq!(capture.owner(), None);
    assert!(world.idle().is_empty());
    assert_eq!(world.ensure_live(), Err(WorldError::TornDown));

    let before = world.snapshot();
    assert_eq!(
        world.pointer_down(PointerSample::new(1, 0.0, 0.0)),
        PointerOutcome::Ignored
    );
    world.tick(1.0);
    world.resize(300.0, 300.0);
    assert_eq!(world.snapshot().world_offset, before.world_offset);
    assert!(!world.snapshot().is_dragging);
}
