// DOM hooks used by the web front-end. Element ids and class names must match
// the static page markup.

// Particle background
pub const PARTICLES_CANVAS_ID: &str = "particles-canvas";
pub const MAX_PARTICLES_ATTR: &str = "data-max-particles"; // optional cap override
pub const SEED_ATTR: &str = "data-seed"; // optional u64 seed for reproducible motion

// Custom cursor
pub const CURSOR_ID: &str = "cursor";
pub const CURSOR_FOLLOWER_ID: &str = "cursor-follower";

// Theme
pub const THEME_TOGGLE_ID: &str = "theme-toggle";

// Navigation
pub const NAVBAR_ID: &str = "navbar";
pub const HAMBURGER_ID: &str = "hamburger";
pub const NAV_LINKS_ID: &str = "nav-links";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const SECTION_SELECTOR: &str = "section[id]";
pub const SCROLLED_CLASS: &str = "scrolled";
pub const MENU_ACTIVE_CLASS: &str = "active";
pub const MENU_OPEN_CLASS: &str = "open";

// Typewriter
pub const TYPEWRITER_ID: &str = "typewriter";
