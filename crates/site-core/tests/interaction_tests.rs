// Host-side tests for scroll, pointer, link and reveal logic plus the
// decorative field generators.

use rand::rngs::StdRng;
use rand::SeedableRng;
use site_core::constants::PARTICLE_COLORS;
use site_core::decor::{data_stream, particle_field};
use site_core::reveal::{COUNTER_OBSERVER, REVEAL_OBSERVER};
use site_core::scroll::{
    box_in_viewport, nav_is_scrolled, parallax_offset, scroll_target_top, FrameThrottle,
    SectionBounds,
};
use site_core::swipe::classify_swipe;
use site_core::transition::{classify_link, LinkAction, Modifiers};
use site_core::{ObservePolicy, PointerFollower, RevealState, Step, SwipeTracker};
use std::time::Duration;

#[test]
fn swipe_threshold_is_exclusive() {
    assert_eq!(classify_swipe(200.0, 150.0, 50.0), None);
    assert_eq!(classify_swipe(200.0, 149.0, 50.0), Some(Step::Next));
    assert_eq!(classify_swipe(150.0, 200.0, 50.0), None);
    assert_eq!(classify_swipe(149.0, 200.0, 50.0), Some(Step::Prev));
    assert_eq!(classify_swipe(100.0, 100.0, 50.0), None);
}

#[test]
fn swipe_tracker_uses_default_threshold() {
    let mut t = SwipeTracker::default();
    t.begin(300.0);
    assert_eq!(t.end(250.0), None);
    t.begin(300.0);
    assert_eq!(t.end(249.0), Some(Step::Next));
    t.begin(10.0);
    assert_eq!(t.end(200.0), Some(Step::Prev));
}

#[test]
fn nav_scrolled_past_100px() {
    assert!(!nav_is_scrolled(0.0));
    assert!(!nav_is_scrolled(100.0));
    assert!(nav_is_scrolled(100.5));
}

#[test]
fn parallax_applies_only_while_section_overlaps_viewport() {
    let section = SectionBounds {
        top: 2000.0,
        height: 600.0,
    };
    let wh = 900.0;
    // viewport bottom exactly at section top: not yet in view
    assert_eq!(parallax_offset(1100.0, section, wh), None);
    let y = parallax_offset(1500.0, section, wh).unwrap();
    assert!((y - (1500.0 - 2000.0 + 900.0) * 0.3).abs() < 1e-9);
    assert!(parallax_offset(2599.0, section, wh).is_some());
    assert_eq!(parallax_offset(2600.0, section, wh), None);
}

#[test]
fn viewport_overlap_for_keyboard_navigation() {
    assert!(box_in_viewport(100.0, 500.0, 800.0));
    assert!(box_in_viewport(-300.0, 1.0, 800.0));
    assert!(!box_in_viewport(800.0, 1200.0, 800.0));
    assert!(!box_in_viewport(-400.0, 0.0, 800.0));
}

#[test]
fn anchor_scroll_target_subtracts_header() {
    assert_eq!(scroll_target_top(450.0, 1000.0, 100.0), 1350.0);
    assert_eq!(scroll_target_top(-200.0, 1000.0, 80.0), 720.0);
}

#[test]
fn frame_throttle_coalesces_requests() {
    let mut t = FrameThrottle::default();
    assert!(!t.take());
    t.request();
    t.request();
    t.request();
    assert!(t.take());
    assert!(!t.take());
}

#[test]
fn follower_eases_toward_pointer() {
    let mut f = PointerFollower::default();
    f.set_target(100.0, 200.0);
    let p = f.step();
    assert!((p.x - 15.0).abs() < 1e-4);
    assert!((p.y - 30.0).abs() < 1e-4);
    let p = f.step();
    assert!((p.x - (15.0 + 85.0 * 0.15)).abs() < 1e-4);
    for _ in 0..200 {
        f.step();
    }
    assert!((f.trail.x - 100.0).abs() < 1e-2);
    assert!((f.trail.y - 200.0).abs() < 1e-2);
}

#[test]
fn internal_page_links_transition() {
    let none = Modifiers::default();
    for href in ["about.html", "schedule.html#round-3", "/players/index.html"] {
        match classify_link(href, "nordicchess.example", none) {
            LinkAction::Transition { href: h, delay } => {
                assert_eq!(h, href);
                assert_eq!(delay, Duration::from_millis(700));
            }
            other => panic!("{href} should transition, got {other:?}"),
        }
    }
    assert!(matches!(
        classify_link("https://nordicchess.example/venue.html", "nordicchess.example", none),
        LinkAction::Transition { .. }
    ));
}

#[test]
fn other_links_pass_through() {
    let host = "nordicchess.example";
    let none = Modifiers::default();
    assert_eq!(classify_link("#tickets", host, none), LinkAction::PassThrough);
    assert_eq!(classify_link("", host, none), LinkAction::PassThrough);
    assert_eq!(
        classify_link("https://fide.com/ratings.html", host, none),
        LinkAction::PassThrough
    );
    assert_eq!(classify_link("mailto:info@example.com", host, none), LinkAction::PassThrough);
    assert_eq!(classify_link("/tickets", host, none), LinkAction::PassThrough);
    for m in [
        Modifiers { meta: true, ..none },
        Modifiers { ctrl: true, ..none },
        Modifiers { shift: true, ..none },
    ] {
        assert_eq!(classify_link("about.html", host, m), LinkAction::PassThrough);
    }
}

#[test]
fn reveal_is_idempotent() {
    let mut s = RevealState::default();
    assert!(!s.is_revealed());
    assert!(s.reveal());
    assert!(!s.reveal());
    assert!(s.is_revealed());
    let mut pre = RevealState::from_marker(true);
    assert!(!pre.reveal());
    assert!(pre.is_revealed());
}

#[test]
fn reveal_and_counter_policies_differ() {
    assert_eq!(REVEAL_OBSERVER.policy, ObservePolicy::Persistent);
    assert!(!REVEAL_OBSERVER.policy.unobserve_after_trigger());
    assert_eq!(REVEAL_OBSERVER.root_margin, Some("0px 0px -80px 0px"));
    assert_eq!(COUNTER_OBSERVER.policy, ObservePolicy::OneShot);
    assert!(COUNTER_OBSERVER.policy.unobserve_after_trigger());
    assert_eq!(COUNTER_OBSERVER.threshold, 0.5);
}

#[test]
fn particle_parameters_stay_in_range() {
    let mut rng = StdRng::seed_from_u64(7);
    let field = particle_field(&mut rng, 30);
    assert_eq!(field.len(), 30);
    for (i, p) in field.iter().enumerate() {
        assert!((0.0..100.0).contains(&p.left_pct));
        assert!((2.0..6.0).contains(&p.size_px));
        assert!((10.0..20.0).contains(&p.duration_s));
        assert!((0.0..15.0).contains(&p.delay_s));
        assert!(PARTICLE_COLORS.contains(&p.color));
        assert_eq!(p.activate_after, Duration::from_millis(100 * i as u64));
    }
    let decl = field[0].declarations();
    assert_eq!(decl.len(), 7);
    assert_eq!(decl[1].1, decl[2].1, "particles are square");
    assert!(decl[6].1.starts_with("0 0 10px rgba("));
}

#[test]
fn data_lines_stay_in_range_and_are_seed_stable() {
    let a = data_stream(&mut StdRng::seed_from_u64(11), 15);
    let b = data_stream(&mut StdRng::seed_from_u64(11), 15);
    assert_eq!(a, b);
    for line in &a {
        assert!((0.0..100.0).contains(&line.left_pct));
        assert!((50.0..150.0).contains(&line.height_px));
        assert!((5.0..10.0).contains(&line.duration_s));
        assert!((0.0..8.0).contains(&line.delay_s));
    }
    assert!(a[0].declarations()[1].1.ends_with("px"));
}

#[test]
fn load_sequence_staggers_hero_reveals_around_preloader_removal() {
    use site_core::reveal::{load_sequence, LoadStep};
    let entries = load_sequence(7).into_entries();
    assert_eq!(entries.len(), 8);
    assert_eq!(entries[0], (Duration::ZERO, LoadStep::RevealHero(0)));
    assert_eq!(entries[5], (Duration::from_millis(500), LoadStep::RemovePreloader));
    assert_eq!(entries[6], (Duration::from_millis(500), LoadStep::RevealHero(5)));
    assert_eq!(entries[7], (Duration::from_millis(600), LoadStep::RevealHero(6)));
}
