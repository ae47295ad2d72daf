use bubble_core::*;
use glam::Vec2;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

fn default_layout() -> Layout {
    compute_layout(&LayoutParams::default(), &default_catalog()).expect("default layout")
}

#[test]
fn default_layout_places_fourteen_items_in_id_order() {
    let layout = default_layout();
    assert_eq!(layout.items.len(), 14);
    for (i, item) in layout.items.iter().enumerate() {
        assert_eq!(item.id, i as ItemId);
    }
}

#[test]
fn layout_is_deterministic() {
    let a = default_layout();
    let b = default_layout();
    assert_eq!(a, b);
}

#[test]
fn first_inner_item_is_centered_on_its_anchor_plus_jitter() {
    let layout = default_layout();
    let item = &layout.items[0];
    // anchor at 30°: (1000 + cos30·380, 1000 + sin30·380·0.7)
    let anchor_x = 1000.0 + 30f32.to_radians().cos() * 380.0;
    let anchor_y = 1000.0 + 0.5 * 380.0 * 0.7;
    assert_eq!(item.size, 172.0);
    assert!(approx(item.position.x, anchor_x - 86.0 - 12.0), "x={}", item.position.x);
    assert!(approx(item.position.y, anchor_y - 86.0 - 10.0), "y={}", item.position.y);
}

#[test]
fn first_outer_item_sits_on_the_horizontal_axis() {
    let layout = default_layout();
    let item = &layout.items[6];
    assert_eq!(item.size, 190.0);
    assert!(approx(item.position.x, 1720.0 - 95.0 - 6.0));
    assert!(approx(item.position.y, 1000.0 - 95.0 + 20.0));
}

#[test]
fn sizes_and_catalog_cycle_past_their_table_length() {
    let layout = default_layout();
    assert_eq!(layout.items[10].size, SIZE_CYCLE[0]);
    assert_eq!(layout.items[13].size, SIZE_CYCLE[3]);
    assert_eq!(layout.items[11].label, "Bota 1");
    assert_eq!(layout.items[11].image_ref, "/images/studio-boots/bota-1.webp");
    assert_eq!(layout.items[10].label, "Bota 11");
}

#[test]
fn content_bounds_enclose_every_item() {
    let layout = default_layout();
    for item in &layout.items {
        assert!(layout.bounds.encloses(item), "item {} escapes bounds", item.id);
    }
}

#[test]
fn content_bounds_are_tight() {
    let layout = default_layout();
    let b = layout.bounds;
    let min_x = layout.items.iter().map(|i| i.position.x).fold(f32::INFINITY, f32::min);
    let min_y = layout.items.iter().map(|i| i.position.y).fold(f32::INFINITY, f32::min);
    let max_x = layout.items.iter().map(|i| i.max().x).fold(f32::NEG_INFINITY, f32::max);
    let max_y = layout.items.iter().map(|i| i.max().y).fold(f32::NEG_INFINITY, f32::max);
    assert_eq!(b.min_x, min_x);
    assert_eq!(b.min_y, min_y);
    assert!(approx(b.max_x(), max_x));
    assert!(approx(b.max_y(), max_y));
    assert!(approx(b.center_x, (min_x + max_x) / 2.0));
    assert!(approx(b.center_y, (min_y + max_y) / 2.0));
}

#[test]
fn anchors_lie_on_their_squashed_ellipses() {
    let params = LayoutParams::default();
    let anchors = anchor_points(&params);
    assert_eq!(anchors.len(), ANCHOR_COUNT);
    let center = params.world_center;
    for (i, a) in anchors.iter().enumerate() {
        let r = if i < 6 { INNER_RING_SPACING } else { OUTER_RING_SPACING };
        let d = *a - center;
        let e = (d.x / r).powi(2) + (d.y / (r * VERTICAL_SQUASH)).powi(2);
        assert!((e - 1.0).abs() < 1e-4, "anchor {i} off ellipse: {e}");
    }
}

#[test]
fn no_two_anchors_coincide() {
    let anchors = anchor_points(&LayoutParams::default());
    for i in 0..anchors.len() {
        for j in (i + 1)..anchors.len() {
            assert!(anchors[i].distance(anchors[j]) > 1.0, "anchors {i} and {j} overlap");
        }
    }
}

#[test]
fn partial_layout_uses_only_the_inner_ring() {
    let params = LayoutParams {
        item_count: 6,
        ..LayoutParams::default()
    };
    let layout = compute_layout(&params, &default_catalog()).unwrap();
    assert_eq!(layout.items.len(), 6);
    for item in &layout.items {
        assert!(item.center().distance(params.world_center) < INNER_RING_SPACING + 30.0);
    }
}

#[test]
fn too_many_items_is_rejected_instead_of_wrapping() {
    let params = LayoutParams {
        item_count: 15,
        ..LayoutParams::default()
    };
    let err = compute_layout(&params, &default_catalog()).unwrap_err();
    assert_eq!(
        err,
        LayoutError::TooManyItems {
            requested: 15,
            available: 14
        }
    );
}

#[test]
fn empty_inputs_are_rejected() {
    let catalog = default_catalog();
    let zero = LayoutParams {
        item_count: 0,
        ..LayoutParams::default()
    };
    assert_eq!(compute_layout(&zero, &catalog).unwrap_err(), LayoutError::NoItems);

    let no_sizes = LayoutParams {
        size_sequence: vec![],
        ..LayoutParams::default()
    };
    assert_eq!(
        compute_layout(&no_sizes, &catalog).unwrap_err(),
        LayoutError::EmptySizeSequence
    );

    let no_offsets = LayoutParams {
        offset_sequence: vec![],
        ..LayoutParams::default()
    };
    assert_eq!(
        compute_layout(&no_offsets, &catalog).unwrap_err(),
        LayoutError::EmptyOffsetSequence
    );

    assert_eq!(
        compute_layout(&LayoutParams::default(), &[]).unwrap_err(),
        LayoutError::EmptyCatalog
    );
}

#[test]
fn bad_geometry_is_rejected() {
    let catalog = default_catalog();
    let squashed = LayoutParams {
        vertical_squash: 0.0,
        ..LayoutParams::default()
    };
    assert!(matches!(
        compute_layout(&squashed, &catalog),
        Err(LayoutError::InvalidGeometry(_))
    ));

    let bad_size = LayoutParams {
        size_sequence: vec![160.0, f32::NAN],
        ..LayoutParams::default()
    };
    assert!(matches!(
        compute_layout(&bad_size, &catalog),
        Err(LayoutError::InvalidGeometry(_))
    ));
}

#[test]
fn custom_center_translates_the_whole_layout() {
    let base = default_layout();
    let shifted_params = LayoutParams {
        world_center: Vec2::new(1100.0, 900.0),
        ..LayoutParams::default()
    };
    let shifted = compute_layout(&shifted_params, &default_catalog()).unwrap();
    for (a, b) in base.items.iter().zip(&shifted.items) {
        let d = b.position - a.position;
        assert!(approx(d.x, 100.0) && approx(d.y, -100.0));
    }
    assert!(approx(shifted.bounds.width, base.bounds.width));
    assert!(approx(shifted.bounds.height, base.bounds.height));
}

#[test]
fn only_the_first_six_items_load_eagerly() {
    let layout = default_layout();
    let eager: Vec<_> = layout.items.iter().filter(|i| i.eager_image()).map(|i| i.id).collect();
    assert_eq!(eager, vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn hover_ring_geometry_wraps_the_item() {
    let ring = HoverRing::for_size(172.0);
    assert_eq!(ring.size, 220.0);
    assert_eq!(ring.offset, 24.0);
    assert_eq!(ring.inner_radius, 88.0);
    assert_eq!(ring.outer_radius, 110.0);
    assert_eq!(ring.text_radius, 99.0);
}

#[test]
fn ring_caption_repeats_the_label() {
    let caption = ring_caption("Bota 3");
    assert_eq!(caption.matches("Bota 3").count(), 10);
    assert!(caption.starts_with("Bota 3 • Bota 3"));
    assert!(caption.ends_with(" • "));
}
