// Host-side tests for time-driven state: autoplay, count-up, timelines,
// the frame scheduler and form feedback.

use proptest::prelude::*;
use site_core::count_up::parse_count_target;
use site_core::form::{Feedback, CONTACT_FORM, HERO_FORM};
use site_core::transition::{intro_timeline, IntroStep};
use site_core::{Autoplay, CountUp, Flow, FormFields, FrameScheduler, Timeline};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn autoplay_fires_every_five_seconds() {
    let mut a = Autoplay::default();
    assert!(!a.tick(ms(4999)));
    assert!(a.tick(ms(1)));
    assert!(!a.tick(ms(2500)));
    assert!(a.tick(ms(2500)));
}

#[test]
fn autoplay_pause_discards_time_and_resume_restarts_period() {
    let mut a = Autoplay::default();
    assert!(!a.tick(ms(4000)));
    a.pause();
    assert!(a.is_paused());
    assert!(!a.tick(ms(60_000)), "no steps while hovered");
    a.resume();
    assert!(!a.tick(ms(1000)), "resume starts a fresh period");
    assert!(!a.tick(ms(3999)));
    assert!(a.tick(ms(1)));
}

#[test]
fn autoplay_rapid_hover_toggling_never_doubles_steps() {
    let mut a = Autoplay::default();
    let mut steps = 0;
    for _ in 0..100 {
        a.pause();
        a.resume();
        a.resume();
        if a.tick(ms(100)) {
            steps += 1;
        }
    }
    assert_eq!(steps, 0);
    for _ in 0..50 {
        if a.tick(ms(100)) {
            steps += 1;
        }
    }
    assert_eq!(steps, 1);
}

#[test]
fn autoplay_long_stall_yields_single_step() {
    let mut a = Autoplay::default();
    assert!(a.tick(ms(23_000)));
    assert!(!a.tick(ms(1000)));
    assert!(a.tick(ms(1000)));
}

#[test]
fn count_up_ends_exactly_on_target() {
    for target in [0_i64, 1, 7, 125, 500, 2024, 10_000] {
        let values: Vec<i64> = CountUp::new(target).collect();
        assert_eq!(values.last().copied(), Some(target), "target {target}");
        assert!(values.len() <= 126, "too many ticks for {target}: {}", values.len());
    }
}

#[test]
fn count_up_takes_125_ticks_for_exact_multiples() {
    let values: Vec<i64> = CountUp::new(250).collect();
    assert_eq!(values.len(), 125);
    assert_eq!(values[0], 2);
    assert_eq!(values[61], 124);
}

#[test]
fn count_up_advance_consumes_whole_ticks() {
    let mut c = CountUp::new(125);
    assert_eq!(c.advance(ms(10)), None);
    assert_eq!(c.advance(ms(6)), Some(1));
    assert_eq!(c.advance(ms(48)), Some(4));
    assert!(!c.is_finished());
    assert_eq!(c.advance(ms(10_000)), Some(125));
    assert!(c.is_finished());
    assert_eq!(c.advance(ms(16)), None);
}

#[test]
fn count_target_parsing() {
    assert_eq!(parse_count_target("150"), Some(150));
    assert_eq!(parse_count_target(" 32+"), Some(32));
    assert_eq!(parse_count_target("-4"), Some(-4));
    assert_eq!(parse_count_target("many"), None);
    assert_eq!(parse_count_target(""), None);
}

#[test]
fn timeline_releases_events_in_offset_order() {
    let mut t = Timeline::new().at(ms(300), "c").at(ms(100), "a").at(ms(100), "b");
    assert_eq!(t.span(), ms(300));
    assert!(t.advance(ms(99)).is_empty());
    assert_eq!(t.advance(ms(1)), vec![&"a", &"b"]);
    assert!(!t.is_finished());
    assert_eq!(t.advance(ms(500)), vec![&"c"]);
    assert!(t.is_finished());
    assert!(t.advance(ms(500)).is_empty());
}

#[test]
fn intro_enters_at_100ms_and_settles_at_800ms() {
    let entries = intro_timeline().into_entries();
    assert_eq!(entries, vec![(ms(100), IntroStep::Enter), (ms(800), IntroStep::Settle)]);
}

#[test]
fn hero_form_confirms_immediately_and_restores_after_3000ms() {
    let mut t = HERO_FORM.feedback("Request Invitation");
    assert_eq!(
        t.advance(Duration::ZERO),
        vec![&Feedback::Confirm {
            label: "Request Sent!"
        }]
    );
    assert!(t.advance(ms(2999)).is_empty());
    assert_eq!(
        t.advance(ms(1)),
        vec![&Feedback::Restore {
            label: "Request Invitation".to_owned()
        }]
    );
    assert!(t.is_finished());
}

#[test]
fn contact_form_confirms_with_markup() {
    let entries = CONTACT_FORM.feedback("<span>Send</span>").into_entries();
    assert_eq!(
        entries[0].1,
        Feedback::Confirm {
            label: "<span>Message Sent!</span>"
        }
    );
    assert_eq!(entries[1].0, ms(3000));
    assert!(HERO_FORM.accent.is_some());
    assert!(CONTACT_FORM.accent.is_none());
}

#[test]
fn form_fields_keep_first_position_and_last_value() {
    let fields: FormFields = [("name", "Magnus"), ("email", "m@example.com"), ("name", "Hikaru")]
        .into_iter()
        .collect();
    assert_eq!(fields.len(), 2);
    assert_eq!(fields.get("name"), Some("Hikaru"));
    assert_eq!(
        fields.to_string(),
        r#"{"name": "Hikaru", "email": "m@example.com"}"#
    );
    assert!(FormFields::default().is_empty());
}

#[test]
fn scheduler_runs_consumers_in_order_and_drops_finished_ones() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut sched = FrameScheduler::new();

    let l = log.clone();
    sched.register("forever", move |_| {
        l.borrow_mut().push("forever");
        Flow::Continue
    });
    let l = log.clone();
    let mut left = 2;
    sched.register("twice", move |_| {
        l.borrow_mut().push("twice");
        left -= 1;
        if left == 0 {
            Flow::Done
        } else {
            Flow::Continue
        }
    });

    sched.tick(ms(16));
    sched.tick(ms(16));
    sched.tick(ms(16));
    assert_eq!(
        *log.borrow(),
        vec!["forever", "twice", "forever", "twice", "forever"]
    );
    assert_eq!(sched.len(), 1);
}

#[test]
fn scheduler_cancel_removes_consumer() {
    let mut sched = FrameScheduler::new();
    let id = sched.register("noop", |_| Flow::Continue);
    assert!(sched.cancel(id));
    assert!(!sched.cancel(id));
    assert!(sched.is_empty());
}

#[test]
fn scheduler_forwards_frame_delta() {
    let seen = Rc::new(RefCell::new(Duration::ZERO));
    let mut sched = FrameScheduler::new();
    let s = seen.clone();
    sched.register("sum", move |dt| {
        *s.borrow_mut() += dt;
        Flow::Continue
    });
    sched.tick(ms(16));
    sched.tick(ms(17));
    assert_eq!(*seen.borrow(), ms(33));
}

proptest! {
    #[test]
    fn count_up_is_monotonic(target in 0i64..100_000) {
        let mut prev = 0i64;
        let mut last = None;
        for v in CountUp::new(target) {
            prop_assert!(v >= prev, "{} after {}", v, prev);
            prop_assert!(v <= target);
            prev = v;
            last = Some(v);
        }
        prop_assert_eq!(last, Some(target));
    }
}
