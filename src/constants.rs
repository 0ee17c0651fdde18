// Page structure contract: element ids, selectors, class names and media
// queries the components look for. Anything missing leaves its component
// inert.

// Element ids
pub const PAGE_TRANSITION_ID: &str = "pageTransition";
pub const NAV_ID: &str = "nav";
pub const NAV_TOGGLE_ID: &str = "navToggle";
pub const MOBILE_MENU_ID: &str = "mobileMenu";
pub const TESTIMONIAL_TRACK_ID: &str = "testimonialTrack";
pub const TESTIMONIAL_PREV_ID: &str = "prevBtn";
pub const TESTIMONIAL_NEXT_ID: &str = "nextBtn";
pub const CAROUSEL_DOTS_ID: &str = "carouselDots";
pub const VENUE_CAROUSEL_ID: &str = "venueCarousel";
pub const VENUE_PREV_ID: &str = "venuePrev";
pub const VENUE_NEXT_ID: &str = "venueNext";
pub const PARTICLES_ID: &str = "particles";
pub const DATA_STREAM_ID: &str = "dataStream";
pub const SOUND_TOGGLE_ID: &str = "soundToggle";
pub const HERO_FORM_ID: &str = "heroForm";
pub const CONTACT_FORM_ID: &str = "contactForm";

// Selectors
pub const CURSOR_DOT: &str = ".cursor-dot";
pub const CURSOR_OUTLINE: &str = ".cursor-outline";
pub const INTERACTIVE_SELECTOR: &str = "a, button, input, textarea, select, .event-card, .player-card";
pub const REVEAL_SELECTOR: &str = ".reveal-up, .reveal-scale, .reveal-left, .reveal-right";
pub const COUNTER_SELECTOR: &str = "[data-count]";
pub const PARALLAX_IMAGE: &str = ".parallax-image";
pub const PARALLAX_SECTION: &str = ".parallax-break";
pub const TESTIMONIAL_CARD: &str = ".testimonial-card";
pub const VENUE_SLIDE: &str = ".venue-slide";
pub const ANCHOR_LINKS: &str = "a[href^=\"#\"]";
pub const HERO_DISCOVER: &str = ".hero-discover";
pub const HERO_NEXT_SECTION: &str = ".hero + section, .hero ~ section";
pub const HERO_VIDEO: &str = ".hero-video";
pub const HERO_REVEALS: &str = ".hero .reveal-up";
pub const PRELOADER: &str = ".preloader";
pub const FLOATING_LABEL_FIELDS: &str = ".form-group input, .form-group textarea";

// Attributes
pub const COUNTER_ATTR: &str = "data-count";
pub const POSITION_ATTR: &str = "data-position";

// Classes
pub const REVEALED: &str = "revealed";
pub const SCROLLED: &str = "scrolled";
pub const ACTIVE: &str = "active";
pub const MUTED: &str = "muted";
pub const LOADED: &str = "loaded";
pub const CURSOR_HOVER: &str = "cursor-hover";
pub const CAROUSEL_DOT: &str = "carousel-dot";
pub const PARTICLE: &str = "particle";
pub const DATA_LINE: &str = "data-line";

// Media queries
pub const FINE_POINTER_QUERY: &str = "(hover: hover) and (pointer: fine)";
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
