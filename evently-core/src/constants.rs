/// Storage key holding the serialized catalog.
pub const EVENTS_KEY: &str = "events";

/// Events with more current attendees than this are featured.
pub const FEATURED_ATTENDEE_THRESHOLD: u32 = 1000;

/// How many featured events the home view shows as trending.
pub const TRENDING_LIMIT: usize = 2;

/// Default cosmetic wait before a manual refresh reloads the catalog.
pub const DEFAULT_REFRESH_DELAY_MS: u64 = 1000;
