/// Page hooks and interaction timings for the web frontend.
///
/// Everything the DOM wiring looks up by name lives here so the markup
/// contract is visible in one place.
// Hero field
pub const CANVAS_ID: &str = "hero-canvas";
pub const QUALITY_ATTRIBUTE: &str = "data-quality";

// Cursor
pub const CURSOR_DOT_ID: &str = "cursor-dot";
pub const CURSOR_TRAIL_SELECTOR: &str = ".cursor-trail";

// Navigation
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const SECTION_SELECTOR: &str = "section[id]";
pub const ANCHOR_LINK_SELECTOR: &str = "a[href^=\"#\"]";
pub const MOBILE_TOGGLE_ID: &str = "mobile-menu-toggle";
pub const NAV_MENU_SELECTOR: &str = ".nav-menu";

// Shared class names
pub const ACTIVE_CLASS: &str = "active";
pub const OPEN_CLASS: &str = "open";
pub const HIDDEN_CLASS: &str = "hidden";

// Project filter
pub const FILTER_BUTTON_SELECTOR: &str = ".filter-btn";
pub const PROJECT_CARD_SELECTOR: &str = ".project-card";
pub const FILTER_ATTRIBUTE: &str = "data-filter";
pub const CATEGORY_ATTRIBUTE: &str = "data-category";
pub const CARD_REVEAL_ANIMATION: &str = "fadeInUp 0.4s ease-out";

// Contact form
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const SUBMIT_BUTTON_SELECTOR: &str = "button[type=\"submit\"]";
pub const SENDING_LABEL: &str = "Sending...";
pub const SEND_DELAY_MS: i32 = 1000;
pub const SENT_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";
pub const SENT_NOTIFICATION_MS: i32 = 5000;
pub const INVALID_NOTIFICATION_MS: i32 = 6000;

// Project chart
pub const CHART_CANVAS_ID: &str = "projectChart";
pub const CHART_LABELS: [&str; 4] = [
    "AI/ML Projects",
    "Cloud/DevOps",
    "Live Demos",
    "Enterprise-Grade",
];
pub const CHART_VALUES: [u32; 4] = [6, 3, 4, 10];
pub const CHART_COLORS: [&str; 4] = ["#1FB8CD", "#FFC185", "#B4413C", "#5D878F"];
pub const CHART_BORDER_COLOR: &str = "#1a1f2e";
pub const CHART_BORDER_WIDTH: u32 = 2;
pub const CHART_LEGEND_COLOR: &str = "#e2e8f0";
pub const CHART_LEGEND_FONT_SIZE: u32 = 12;
pub const CHART_ANIMATION_MS: u32 = 1000;

// Back to top
pub const BACK_TO_TOP_ID: &str = "back-to-top";

// Scroll fade-in
pub const FADE_IN_SELECTOR: &str = ".project-card, .skill-category, .experience-item";
pub const FADE_IN_CLASS: &str = "fade-in";
pub const FADE_IN_VISIBLE_CLASS: &str = "fade-in-visible";
pub const FADE_IN_THRESHOLD: f64 = 0.1;
pub const FADE_IN_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const FADE_IN_CSS: &str = "
    .fade-in {
        opacity: 0;
        transform: translateY(20px);
        transition: all 0.6s ease;
    }
    .fade-in-visible {
        opacity: 1;
        transform: translateY(0);
    }
";

// Notifications
pub const NOTIFICATION_CONTAINER_ID: &str = "notification-container";
pub const NOTIFICATION_CONTAINER_STYLE: &str =
    "position: fixed; top: 100px; right: 20px; z-index: 10000; pointer-events: none;";
pub const NOTIFICATION_SLIDE_IN_DELAY_MS: i32 = 100;
pub const NOTIFICATION_EXIT_MS: i32 = 300;
pub const NOTIFICATION_HIDDEN_TRANSFORM: &str = "translateX(400px)";
pub const NOTIFICATION_SHOWN_TRANSFORM: &str = "translateX(0)";
pub const NOTIFICATION_STYLE: &str = "background: var(--color-primary); color: white; \
padding: 1rem; margin-bottom: 0.5rem; border-radius: 0.5rem; transform: translateX(400px); \
transition: transform 0.3s ease; max-width: 300px; pointer-events: auto;";
