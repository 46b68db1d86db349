//! Statistics derived from a stored link at read time.

use chrono::{DateTime, Utc};

use crate::domain::entities::Link;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Point-in-time statistics for a single link.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkStatistics {
    pub slug: String,
    pub original_url: String,
    pub total_clicks: u64,
    pub created_at: DateTime<Utc>,
    pub age_in_days: i64,
    /// Average clicks per day with two decimals, or the raw click count while
    /// the link is less than a day old.
    pub clicks_per_day: String,
    pub status: LinkStatus,
    pub performance: LinkPerformance,
}

/// Visibility state of a link.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkStatus {
    pub is_active: bool,
    pub is_expired: bool,
    pub days_until_expiry: Option<i64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinkPerformance {
    pub average_clicks_per_day: String,
    /// Access times are not tracked; this always equals the creation time.
    pub last_accessed: DateTime<Utc>,
}

impl LinkStatistics {
    /// Derives statistics for `link` as observed at `now`.
    pub fn compute(link: &Link, now: DateTime<Utc>) -> Self {
        let age_in_days = floor_days(now - link.created_at);

        let clicks_per_day = if age_in_days > 0 {
            format!("{:.2}", link.clicks as f64 / age_in_days as f64)
        } else {
            link.clicks.to_string()
        };

        let is_expired = link.is_expired_at(now);
        let days_until_expiry = link.expires_at.map(|e| ceil_days(e - now));

        Self {
            slug: link.slug.clone(),
            original_url: link.original_url.clone(),
            total_clicks: link.clicks,
            created_at: link.created_at,
            age_in_days,
            clicks_per_day: clicks_per_day.clone(),
            status: LinkStatus {
                is_active: !is_expired,
                is_expired,
                days_until_expiry,
            },
            performance: LinkPerformance {
                average_clicks_per_day: clicks_per_day,
                last_accessed: link.created_at,
            },
        }
    }
}

fn floor_days(delta: chrono::TimeDelta) -> i64 {
    delta.num_milliseconds().div_euclid(MILLIS_PER_DAY)
}

fn ceil_days(delta: chrono::TimeDelta) -> i64 {
    let millis = delta.num_milliseconds();
    let days = millis.div_euclid(MILLIS_PER_DAY);
    if millis.rem_euclid(MILLIS_PER_DAY) > 0 {
        days + 1
    } else {
        days
    }
}
