// Host-side tests for the testimonial and venue carousel arithmetic.

use proptest::prelude::*;
use site_core::carousel::{cards_per_view, parse_gap_px, total_slides, Breakpoints};
use site_core::ring::{relative_offset, slot_for};
use site_core::{LinearCarousel, RingCarousel, SlotPosition, Step};

#[test]
fn cards_per_view_follows_breakpoints() {
    assert_eq!(cards_per_view(320.0), 1);
    assert_eq!(cards_per_view(640.0), 1); // inclusive
    assert_eq!(cards_per_view(641.0), 2);
    assert_eq!(cards_per_view(800.0), 2);
    assert_eq!(cards_per_view(1024.0), 2); // inclusive
    assert_eq!(cards_per_view(1025.0), 3);
    assert_eq!(cards_per_view(1920.0), 3);
}

#[test]
fn custom_breakpoints_are_respected() {
    let bp = Breakpoints {
        mobile_max: 480.0,
        tablet_max: 900.0,
    };
    assert_eq!(bp.cards_per_view(500.0), 2);
    assert_eq!(bp.cards_per_view(950.0), 3);
}

#[test]
fn nine_cards_at_800px_has_five_pages_and_wraps() {
    let mut c = LinearCarousel::new(9, 800.0);
    assert_eq!(c.cards_per_view(), 2);
    assert_eq!(c.total_slides(), 5);
    for _ in 0..5 {
        c.next();
    }
    assert_eq!(c.current(), 0);
}

#[test]
fn prev_from_first_page_wraps_to_last() {
    let mut c = LinearCarousel::new(9, 1200.0);
    assert_eq!(c.total_slides(), 3);
    c.prev();
    assert_eq!(c.current(), 2);
    c.step(Step::Next);
    assert_eq!(c.current(), 0);
}

#[test]
fn empty_and_single_page_carousels_stay_put() {
    let mut empty = LinearCarousel::new(0, 1200.0);
    assert_eq!(empty.total_slides(), 0);
    empty.next();
    empty.prev();
    empty.go_to(4);
    assert_eq!(empty.current(), 0);

    let mut single = LinearCarousel::new(3, 1200.0);
    assert_eq!(single.total_slides(), 1);
    single.next();
    assert_eq!(single.current(), 0);
    single.prev();
    assert_eq!(single.current(), 0);
}

#[test]
fn go_to_wraps_out_of_range_indices() {
    let mut c = LinearCarousel::new(9, 800.0);
    c.go_to(3);
    assert_eq!(c.current(), 3);
    c.go_to(7);
    assert_eq!(c.current(), 2);
}

#[test]
fn resize_rewinds_only_when_page_size_changes() {
    let mut c = LinearCarousel::new(9, 1200.0);
    c.next();
    assert!(!c.resize(1300.0), "same page size must not rebuild");
    assert_eq!(c.current(), 1);

    assert!(c.resize(700.0));
    assert_eq!(c.cards_per_view(), 2);
    assert_eq!(c.total_slides(), 5);
    assert_eq!(c.current(), 0);
}

#[test]
fn offset_scales_with_page_and_page_size() {
    let mut c = LinearCarousel::new(9, 1200.0);
    assert_eq!(c.offset_px(300.0, 32.0), 0.0);
    c.next();
    assert_eq!(c.offset_px(300.0, 32.0), (300.0 + 32.0) * 3.0);
    c.next();
    assert_eq!(c.offset_px(300.0, 32.0), 2.0 * (300.0 + 32.0) * 3.0);
}

#[test]
fn gap_parsing_falls_back_like_the_layout_expects() {
    assert_eq!(parse_gap_px("24px"), 24.0);
    assert_eq!(parse_gap_px("1.5rem"), 1.0);
    assert_eq!(parse_gap_px("normal"), 32.0);
    assert_eq!(parse_gap_px(""), 32.0);
    assert_eq!(parse_gap_px("0px"), 32.0);
}

#[test]
fn six_slides_put_index_four_far_left() {
    assert_eq!(relative_offset(4, 0, 6), -2);
    assert_eq!(slot_for(4, 0, 6), SlotPosition::FarLeft);
    assert_eq!(slot_for(5, 0, 6), SlotPosition::Left);
    assert_eq!(slot_for(0, 0, 6), SlotPosition::Center);
    assert_eq!(slot_for(1, 0, 6), SlotPosition::Right);
    assert_eq!(slot_for(2, 0, 6), SlotPosition::FarRight);
    assert_eq!(slot_for(3, 0, 6), SlotPosition::Hidden);
}

#[test]
fn ring_layout_follows_current_index() {
    let mut ring = RingCarousel::new(6);
    ring.step(Step::Next);
    ring.step(Step::Next);
    assert_eq!(ring.current(), 2);
    let layout = ring.layout();
    assert_eq!(
        layout.as_slice(),
        &[
            SlotPosition::FarLeft,
            SlotPosition::Left,
            SlotPosition::Center,
            SlotPosition::Right,
            SlotPosition::FarRight,
            SlotPosition::Hidden,
        ]
    );
    ring.step(Step::Prev);
    ring.step(Step::Prev);
    ring.step(Step::Prev);
    assert_eq!(ring.current(), 5);
}

#[test]
fn small_rings_leave_slots_unused() {
    let ring = RingCarousel::new(3);
    let layout = ring.layout();
    assert_eq!(
        layout.as_slice(),
        &[SlotPosition::Center, SlotPosition::Right, SlotPosition::FarRight]
    );

    let mut empty = RingCarousel::new(0);
    empty.step(Step::Next);
    assert_eq!(empty.current(), 0);
    assert!(empty.layout().is_empty());
}

#[test]
fn slide_clicks_map_to_steps() {
    assert_eq!(SlotPosition::FarLeft.click_step(), Some(Step::Prev));
    assert_eq!(SlotPosition::Left.click_step(), Some(Step::Prev));
    assert_eq!(SlotPosition::Right.click_step(), Some(Step::Next));
    assert_eq!(SlotPosition::FarRight.click_step(), Some(Step::Next));
    assert_eq!(SlotPosition::Center.click_step(), None);
    assert_eq!(SlotPosition::Hidden.click_step(), None);
}

#[test]
fn slot_names_round_trip_through_attribute_values() {
    for slot in [
        SlotPosition::FarLeft,
        SlotPosition::Left,
        SlotPosition::Center,
        SlotPosition::Right,
        SlotPosition::FarRight,
        SlotPosition::Hidden,
    ] {
        assert_eq!(SlotPosition::parse(slot.as_str()), Some(slot));
    }
    assert_eq!(SlotPosition::parse("middle"), None);
}

proptest! {
    #[test]
    fn linear_index_stays_in_range(
        cards in 0usize..40,
        width in 200.0f64..2000.0,
        steps in proptest::collection::vec(any::<bool>(), 0..60),
    ) {
        let mut c = LinearCarousel::new(cards, width);
        let per_view = c.cards_per_view();
        prop_assert!((1..=3).contains(&per_view));
        prop_assert_eq!(c.total_slides(), total_slides(cards, per_view));
        prop_assert_eq!(c.total_slides(), (cards + per_view - 1) / per_view);
        for forward in steps {
            if forward { c.next() } else { c.prev() }
            if c.total_slides() == 0 {
                prop_assert_eq!(c.current(), 0);
            } else {
                prop_assert!(c.current() < c.total_slides());
            }
        }
    }

    #[test]
    fn ring_has_exactly_one_center(len in 1usize..24, current_seed in 0usize..1000) {
        let current = current_seed % len;
        let centers = (0..len).filter(|&i| slot_for(i, current, len) == SlotPosition::Center).count();
        prop_assert_eq!(centers, 1);
        if len <= 5 {
            for i in 0..len {
                let p = relative_offset(i, current, len);
                prop_assert!((-2..=2).contains(&p), "offset {} out of range", p);
            }
        }
    }
}
