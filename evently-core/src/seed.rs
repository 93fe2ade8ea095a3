//! Built-in catalog and profile used on first launch and whenever the
//! stored catalog cannot be read.

use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveTime};

use crate::catalog::Catalog;
use crate::category::Category;
use crate::event::{Coordinates, Event, Location, Organizer};
use crate::user::UserProfile;

struct SeedEvent {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    date: (i32, u32, u32),
    time: (u32, u32),
    venue: &'static str,
    address: &'static str,
    coordinates: (f64, f64),
    category: Category,
    image_url: &'static str,
    price: f64,
    max_attendees: u32,
    current_attendees: u32,
    organizer: (&'static str, &'static str, &'static str),
    tags: [&'static str; 4],
    is_rsvped: bool,
    is_favorite: bool,
}

const SEED_EVENTS: [SeedEvent; 6] = [
    SeedEvent {
        id: "1",
        title: "Summer Music Festival 2025",
        description: "Join us for an unforgettable night of live music featuring top local and international artists. Experience amazing performances across multiple stages with food trucks and craft vendors.",
        date: (2025, 6, 15),
        time: (18, 0),
        venue: "Central Park",
        address: "1 Central Park West, New York, NY 10023",
        coordinates: (40.7829, -73.9654),
        category: Category::Music,
        image_url: "https://images.pexels.com/photos/1763075/pexels-photo-1763075.jpeg",
        price: 45.0,
        max_attendees: 5000,
        current_attendees: 3247,
        organizer: ("org1", "NYC Events", "https://images.pexels.com/photos/1040880/pexels-photo-1040880.jpeg"),
        tags: ["live music", "outdoor", "festival", "summer"],
        is_rsvped: false,
        is_favorite: false,
    },
    SeedEvent {
        id: "2",
        title: "Tech Startup Pitch Night",
        description: "Watch innovative startups pitch their ideas to investors and industry experts. Network with entrepreneurs, developers, and investors in the tech space.",
        date: (2025, 2, 28),
        time: (19, 0),
        venue: "Innovation Hub",
        address: "123 Tech Street, San Francisco, CA 94107",
        coordinates: (37.7749, -122.4194),
        category: Category::Tech,
        image_url: "https://images.pexels.com/photos/7688336/pexels-photo-7688336.jpeg",
        price: 25.0,
        max_attendees: 200,
        current_attendees: 156,
        organizer: ("org2", "StartupSF", "https://images.pexels.com/photos/1181690/pexels-photo-1181690.jpeg"),
        tags: ["networking", "startups", "pitch", "investors"],
        is_rsvped: true,
        is_favorite: true,
    },
    SeedEvent {
        id: "3",
        title: "Artisan Food Market",
        description: "Discover local flavors and artisanal foods from the best vendors in the city. Enjoy live cooking demonstrations, tastings, and workshops.",
        date: (2025, 3, 10),
        time: (10, 0),
        venue: "Downtown Plaza",
        address: "456 Market Square, Portland, OR 97201",
        coordinates: (45.5152, -122.6784),
        category: Category::Food,
        image_url: "https://images.pexels.com/photos/1707310/pexels-photo-1707310.jpeg",
        price: 0.0,
        max_attendees: 1000,
        current_attendees: 234,
        organizer: ("org3", "Portland Markets", "https://images.pexels.com/photos/1040881/pexels-photo-1040881.jpeg"),
        tags: ["food", "local", "artisan", "free"],
        is_rsvped: false,
        is_favorite: true,
    },
    SeedEvent {
        id: "4",
        title: "Modern Art Exhibition Opening",
        description: "Explore contemporary works by emerging artists in this exclusive gallery opening. Meet the artists and enjoy complimentary refreshments.",
        date: (2025, 3, 5),
        time: (17, 0),
        venue: "Metropolitan Gallery",
        address: "789 Art Avenue, New York, NY 10001",
        coordinates: (40.7505, -73.9934),
        category: Category::Art,
        image_url: "https://images.pexels.com/photos/1742370/pexels-photo-1742370.jpeg",
        price: 15.0,
        max_attendees: 150,
        current_attendees: 89,
        organizer: ("org4", "Metro Gallery", "https://images.pexels.com/photos/1040882/pexels-photo-1040882.jpeg"),
        tags: ["art", "exhibition", "gallery", "contemporary"],
        is_rsvped: false,
        is_favorite: false,
    },
    SeedEvent {
        id: "5",
        title: "Basketball Championship Finals",
        description: "Witness the city championship finals between our top two teams. Exciting gameplay guaranteed with food concessions and team merchandise available.",
        date: (2025, 4, 20),
        time: (20, 0),
        venue: "Sports Arena",
        address: "321 Stadium Drive, Los Angeles, CA 90015",
        coordinates: (34.0522, -118.2437),
        category: Category::Sports,
        image_url: "https://images.pexels.com/photos/1752757/pexels-photo-1752757.jpeg",
        price: 35.0,
        max_attendees: 8000,
        current_attendees: 7234,
        organizer: ("org5", "LA Sports", "https://images.pexels.com/photos/1040883/pexels-photo-1040883.jpeg"),
        tags: ["basketball", "championship", "sports", "finals"],
        is_rsvped: true,
        is_favorite: false,
    },
    SeedEvent {
        id: "6",
        title: "Digital Marketing Workshop",
        description: "Learn the latest digital marketing strategies from industry experts. Hands-on sessions covering social media, SEO, and content marketing.",
        date: (2025, 3, 15),
        time: (9, 0),
        venue: "Business Center",
        address: "654 Corporate Blvd, Austin, TX 78701",
        coordinates: (30.2672, -97.7431),
        category: Category::Workshop,
        image_url: "https://images.pexels.com/photos/3184291/pexels-photo-3184291.jpeg",
        price: 75.0,
        max_attendees: 50,
        current_attendees: 32,
        organizer: ("org6", "Digital Pro", "https://images.pexels.com/photos/1040884/pexels-photo-1040884.jpeg"),
        tags: ["workshop", "marketing", "digital", "business"],
        is_rsvped: false,
        is_favorite: false,
    },
];

impl SeedEvent {
    fn to_event(&self) -> Option<Event> {
        let (year, month, day) = self.date;
        let (hour, minute) = self.time;
        let (latitude, longitude) = self.coordinates;
        let (organizer_id, organizer_name, organizer_avatar) = self.organizer;

        Some(Event {
            id: self.id.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            date: NaiveDate::from_ymd_opt(year, month, day)?,
            time: NaiveTime::from_hms_opt(hour, minute, 0)?,
            location: Location {
                name: self.venue.to_string(),
                address: self.address.to_string(),
                coordinates: Coordinates { latitude, longitude },
            },
            category: self.category,
            image_url: self.image_url.to_string(),
            price: self.price,
            max_attendees: self.max_attendees,
            current_attendees: self.current_attendees,
            organizer: Organizer {
                id: organizer_id.to_string(),
                name: organizer_name.to_string(),
                avatar: organizer_avatar.to_string(),
            },
            tags: self.tags.iter().map(|t| t.to_string()).collect(),
            is_rsvped: self.is_rsvped,
            is_favorite: self.is_favorite,
        })
    }
}

/// The six built-in events, in display order.
pub fn catalog() -> Catalog {
    Catalog::from_unique(SEED_EVENTS.iter().filter_map(SeedEvent::to_event).collect())
}

/// The built-in local user.
pub fn user_profile() -> UserProfile {
    UserProfile {
        id: "user1".to_string(),
        name: "Alex Johnson".to_string(),
        email: "alex.johnson@email.com".to_string(),
        avatar: "https://images.pexels.com/photos/1040880/pexels-photo-1040880.jpeg".to_string(),
        bio: "Event enthusiast who loves discovering new experiences in the city. Passionate about music, tech, and connecting with like-minded people.".to_string(),
        interests: vec![Category::Music, Category::Tech, Category::Food, Category::Art],
        rsvped_events: BTreeSet::from(["2".to_string(), "5".to_string()]),
        favorite_events: BTreeSet::from(["2".to_string(), "3".to_string()]),
        events_attended: 23,
    }
}
