//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL link with its click counter.
///
/// `id` is the internal storage key; `slug` is the public identifier used in
/// short URLs. Both are assigned once at creation and never change.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub id: String,
    pub original_url: String,
    pub slug: String,
    pub clicks: u64,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl Link {
    /// Creates a link with zero clicks from its creation data.
    pub fn from_new(new_link: NewLink) -> Self {
        Self {
            id: new_link.id,
            original_url: new_link.original_url,
            slug: new_link.slug,
            clicks: 0,
            created_at: new_link.created_at,
            expires_at: new_link.expires_at,
        }
    }

    /// Returns true if the link's expiry lies strictly before `now`.
    ///
    /// Links without an expiry never expire.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|e| e < now)
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub id: String,
    pub original_url: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}
