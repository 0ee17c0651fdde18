use std::time::Duration;

// Shared timing and threshold constants for the interaction layer.

// Viewport breakpoints (CSS px, inclusive upper bounds)
pub const MOBILE_MAX_WIDTH: f64 = 640.0;
pub const TABLET_MAX_WIDTH: f64 = 1024.0;

// Testimonial track spacing when the computed gap is unusable
pub const FALLBACK_TRACK_GAP_PX: f64 = 32.0;

// Carousels
pub const AUTOPLAY_INTERVAL: Duration = Duration::from_millis(5000);
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;
pub const RING_VISIBLE_REACH: isize = 2; // slots on each side of center

// Pointer follower
pub const FOLLOWER_SMOOTHING: f32 = 0.15; // trail += (target - trail) * α

// Scroll
pub const NAV_SCROLLED_THRESHOLD_PX: f64 = 100.0;
pub const PARALLAX_FACTOR: f64 = 0.3;
pub const ANCHOR_HEADER_OFFSET_PX: f64 = 100.0;
pub const DISCOVER_HEADER_OFFSET_PX: f64 = 80.0;

// Intersection observers
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -80px 0px";
pub const COUNTER_THRESHOLD: f64 = 0.5;

// Count-up
pub const COUNT_UP_DURATION: Duration = Duration::from_millis(2000);
pub const COUNT_UP_TICK: Duration = Duration::from_millis(16);

// Page transition
pub const INTRO_ENTER_DELAY: Duration = Duration::from_millis(100);
pub const INTRO_SETTLE_DELAY: Duration = Duration::from_millis(800);
pub const EXIT_NAVIGATE_DELAY: Duration = Duration::from_millis(700);

// Forms
pub const FORM_CONFIRM_HOLD: Duration = Duration::from_millis(3000);

// Load sequence
pub const PRELOADER_REMOVE_DELAY: Duration = Duration::from_millis(500);
pub const HERO_REVEAL_STAGGER: Duration = Duration::from_millis(100);

// Decorative fields
pub const PARTICLE_COUNT: usize = 30;
pub const PARTICLE_STAGGER: Duration = Duration::from_millis(100);
pub const DATA_LINE_COUNT: usize = 15;
pub const PARTICLE_COLORS: [&str; 4] = [
    "rgba(125, 211, 252, 0.8)",
    "rgba(196, 181, 253, 0.8)",
    "rgba(110, 231, 183, 0.8)",
    "rgba(240, 171, 252, 0.8)",
];
