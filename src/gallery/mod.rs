pub mod fixtures;

use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }
}

/// One gallery entry with its engagement counters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediaItem {
    pub id: String,
    pub url: String,
    pub kind: MediaKind,
    pub title: String,
    pub description: Option<String>,
    pub likes: u32,
    pub comments: u32,
    pub uploaded_at: NaiveDate,
    pub liked: bool,
}

impl MediaItem {
    pub fn is_video(&self) -> bool {
        self.kind == MediaKind::Video
    }

    /// Long-form upload date, e.g. "January 15, 2024".
    pub fn uploaded_label(&self) -> String {
        self.uploaded_at.format("%B %-d, %Y").to_string()
    }
}

/// Which kinds of media a listing includes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KindFilter {
    #[default]
    All,
    Image,
    Video,
}

impl KindFilter {
    pub const ALL: [KindFilter; 3] = [KindFilter::All, KindFilter::Image, KindFilter::Video];

    /// Parse a query-string value. Unknown values fall back to `All`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("image") | Some("images") => KindFilter::Image,
            Some("video") | Some("videos") => KindFilter::Video,
            _ => KindFilter::All,
        }
    }

    pub fn matches(&self, kind: MediaKind) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::Image => kind == MediaKind::Image,
            KindFilter::Video => kind == MediaKind::Video,
        }
    }

    pub fn query_value(&self) -> &'static str {
        match self {
            KindFilter::All => "all",
            KindFilter::Image => "images",
            KindFilter::Video => "videos",
        }
    }
}

/// Totals shown on the analytics tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GalleryStats {
    pub total: usize,
    pub images: usize,
    pub videos: usize,
    pub likes: u64,
    pub comments: u64,
}

/// In-memory, insertion-ordered media list.
#[derive(Debug, Clone, Default)]
pub struct GalleryStore {
    items: Vec<MediaItem>,
}

impl GalleryStore {
    pub fn new(items: Vec<MediaItem>) -> Self {
        Self { items }
    }

    pub fn with_fixtures() -> Self {
        Self::new(fixtures::media())
    }

    pub fn list(&self, filter: KindFilter) -> Vec<&MediaItem> {
        self.items
            .iter()
            .filter(|item| filter.matches(item.kind))
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<&MediaItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Flip the liked flag and move the count by one in the same direction.
    /// Returns the updated item, or `None` when the id is unknown.
    pub fn toggle_like(&mut self, id: &str) -> Option<&MediaItem> {
        let item = self.items.iter_mut().find(|item| item.id == id)?;

        if item.liked {
            item.likes = item.likes.saturating_sub(1);
        } else {
            item.likes = item.likes.saturating_add(1);
        }
        item.liked = !item.liked;

        tracing::debug!(
            "Media {} liked={} likes={}",
            item.id,
            item.liked,
            item.likes
        );
        Some(&*item)
    }

    pub fn stats(&self) -> GalleryStats {
        self.items
            .iter()
            .fold(GalleryStats::default(), |mut stats, item| {
                stats.total += 1;
                match item.kind {
                    MediaKind::Image => stats.images += 1,
                    MediaKind::Video => stats.videos += 1,
                }
                stats.likes += u64::from(item.likes);
                stats.comments += u64::from(item.comments);
                stats
            })
    }
}
