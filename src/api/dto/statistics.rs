//! DTOs for link statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::statistics::{LinkPerformance, LinkStatistics, LinkStatus};

/// Statistics for a single short link.
///
/// ```json
/// {
///   "slug": "abc123xy",
///   "originalUrl": "https://example.com/very/long/url",
///   "totalClicks": 150,
///   "createdAt": "2024-05-03T12:00:00Z",
///   "ageInDays": 5,
///   "clicksPerDay": "30.00",
///   "status": { "isActive": true, "isExpired": false, "daysUntilExpiry": null },
///   "performance": { "averageClicksPerDay": "30.00", "lastAccessed": "2024-05-03T12:00:00Z" }
/// }
/// ```
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsResponse {
    pub slug: String,
    pub original_url: String,
    pub total_clicks: u64,
    pub created_at: DateTime<Utc>,
    pub age_in_days: i64,
    pub clicks_per_day: String,
    pub status: StatusInfo,
    pub performance: PerformanceInfo,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusInfo {
    pub is_active: bool,
    pub is_expired: bool,
    pub days_until_expiry: Option<i64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceInfo {
    pub average_clicks_per_day: String,
    pub last_accessed: DateTime<Utc>,
}

impl From<LinkStatistics> for StatisticsResponse {
    fn from(stats: LinkStatistics) -> Self {
        Self {
            slug: stats.slug,
            original_url: stats.original_url,
            total_clicks: stats.total_clicks,
            created_at: stats.created_at,
            age_in_days: stats.age_in_days,
            clicks_per_day: stats.clicks_per_day,
            status: stats.status.into(),
            performance: stats.performance.into(),
        }
    }
}

impl From<LinkStatus> for StatusInfo {
    fn from(status: LinkStatus) -> Self {
        Self {
            is_active: status.is_active,
            is_expired: status.is_expired,
            days_until_expiry: status.days_until_expiry,
        }
    }
}

impl From<LinkPerformance> for PerformanceInfo {
    fn from(performance: LinkPerformance) -> Self {
        Self {
            average_clicks_per_day: performance.average_clicks_per_day,
            last_accessed: performance.last_accessed,
        }
    }
}
