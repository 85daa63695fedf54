use chrono::NaiveDate;

use super::{MediaItem, MediaKind};

struct Fixture {
    id: &'static str,
    photo: u32,
    title: &'static str,
    description: &'static str,
    likes: u32,
    comments: u32,
    day: u32,
}

const FIXTURES: &[Fixture] = &[
    Fixture {
        id: "1",
        photo: 1108099,
        title: "Golden Hour",
        description: "Beautiful sunset over the mountains",
        likes: 24,
        comments: 8,
        day: 15,
    },
    Fixture {
        id: "2",
        photo: 1287145,
        title: "Ocean Waves",
        description: "Peaceful morning by the sea",
        likes: 31,
        comments: 12,
        day: 10,
    },
    Fixture {
        id: "3",
        photo: 1059249,
        title: "Forest Path",
        description: "A quiet walk through nature",
        likes: 18,
        comments: 5,
        day: 8,
    },
    Fixture {
        id: "4",
        photo: 1421903,
        title: "City Lights",
        description: "Urban nightscape",
        likes: 42,
        comments: 15,
        day: 5,
    },
    Fixture {
        id: "5",
        photo: 1707915,
        title: "Mountain Peak",
        description: "Adventure awaits",
        likes: 35,
        comments: 9,
        day: 3,
    },
    Fixture {
        id: "6",
        photo: 1624496,
        title: "Desert Dunes",
        description: "Endless golden sands",
        likes: 27,
        comments: 7,
        day: 1,
    },
];

/// The seed gallery. All fixtures were uploaded in January 2024.
pub fn media() -> Vec<MediaItem> {
    FIXTURES
        .iter()
        .map(|f| MediaItem {
            id: f.id.to_string(),
            url: format!(
                "https://images.pexels.com/photos/{0}/pexels-photo-{0}.jpeg",
                f.photo
            ),
            kind: MediaKind::Image,
            title: f.title.to_string(),
            description: Some(f.description.to_string()),
            likes: f.likes,
            comments: f.comments,
            uploaded_at: NaiveDate::from_ymd_opt(2024, 1, f.day).unwrap_or_default(),
            liked: false,
        })
        .collect()
}
