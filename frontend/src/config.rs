use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose reveal/section logging when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const COACH_NAME: &str = "Reynaldo Martinez";
pub const BRAND: &str = "Coach Reynaldo";
pub const PHONE: &str = "+63 912 345 6789";
pub const EMAIL: &str = "reynaldo.martinez@email.com";
pub const CITY: &str = "Quezon City, Philippines";
pub const VENUE: &str = "Quezon City Sports Complex";
pub const HOURS: &str = "Available Mon–Sat, 7 AM – 6 PM";
pub const MAIL_SUBJECT: &str = "Tennis coaching inquiry";

pub const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3860.8974!2d121.0437!3d14.6760!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x0%3A0x0!2zMTTCsDQwJzMzLjYiTiAxMjHCsDAyJzM3LjMiRQ!5e0!3m2!1sen!2sph!4v1234567890";

// Scroll reveal defaults
pub const REVEAL_DURATION_MS: u32 = 800;
pub const REVEAL_DISTANCE_PX: f64 = 50.0;
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Shrinks the trigger region at the bottom so reveals start just before the
/// element is fully on screen.
pub const REVEAL_BOTTOM_BIAS_PX: i32 = 50;
pub const REVEAL_EASING: &str = "cubic-bezier(0.4, 0, 0.2, 1)";

// Navigation highlighting
pub const SECTION_THRESHOLD: f64 = 0.3;
pub const SECTION_INSET_PERCENT: i32 = 20;
pub const NAV_SCROLLED_OFFSET: f64 = 50.0;
