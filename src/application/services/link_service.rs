//! Link encoding, resolution, and statistics service.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;
use tracing::{debug, info, warn};

use crate::domain::entities::NewLink;
use crate::domain::repositories::{InsertOutcome, LinkRepository};
use crate::domain::statistics::LinkStatistics;
use crate::error::AppError;
use crate::utils::slug_generator::{generate_id, generate_slug};

/// Maximum slug generation attempts before giving up on a single encode.
const MAX_SLUG_ATTEMPTS: usize = 10;

/// Service for shortening URLs and resolving slugs.
///
/// Encoding is idempotent per original URL: the same string always maps to the
/// same slug. URLs are compared exactly, without normalization, and are
/// expected to be validated by the caller.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Returns the slug for `original_url`, creating a link if the URL is new.
    ///
    /// # Code Generation
    ///
    /// A random 8-character slug is generated. If it collides with an existing
    /// slug a fresh one is drawn, up to 10 attempts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if no unique slug could be generated or
    /// the registry is unusable.
    pub async fn encode(&self, original_url: &str) -> Result<String, AppError> {
        if let Some(existing) = self
            .link_repository
            .find_by_original_url(original_url)
            .await?
        {
            debug!(slug = %existing.slug, "URL already shortened");
            return Ok(existing.slug);
        }

        for attempt in 1..=MAX_SLUG_ATTEMPTS {
            let new_link = NewLink {
                id: generate_id()?,
                original_url: original_url.to_string(),
                slug: generate_slug()?,
                created_at: Utc::now(),
                expires_at: None,
            };

            match self.link_repository.insert(new_link).await {
                Ok(InsertOutcome::Created(link)) => {
                    info!(slug = %link.slug, "Short link created");
                    return Ok(link.slug);
                }
                Ok(InsertOutcome::Existing(link)) => return Ok(link.slug),
                Err(AppError::Conflict { .. }) => {
                    warn!(attempt, "Slug collision, regenerating");
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Failed to generate unique slug",
            json!({ "reason": "Too many collisions" }),
        ))
    }

    /// Resolves a slug to its original URL and counts the visit.
    ///
    /// Returns `Ok(None)` for unknown slugs and for expired links; neither
    /// changes any click counter.
    pub async fn decode(&self, slug: &str) -> Result<Option<String>, AppError> {
        let link = self.link_repository.record_click(slug, Utc::now()).await?;

        if let Some(link) = &link {
            debug!(slug, clicks = link.clicks, "Slug resolved");
        }

        Ok(link.map(|l| l.original_url))
    }

    /// Returns statistics for a slug without counting a visit.
    ///
    /// Expired links still report statistics, with `is_expired` set.
    pub async fn get_statistics(&self, slug: &str) -> Result<Option<LinkStatistics>, AppError> {
        let link = self.link_repository.find_by_slug(slug).await?;
        let now = Utc::now();

        Ok(link.map(|l| LinkStatistics::compute(&l, now)))
    }

    /// Returns statistics for every link, most recently created first.
    pub async fn list_all(&self) -> Result<Vec<LinkStatistics>, AppError> {
        let links = self.link_repository.list().await?;
        let now = Utc::now();

        Ok(links
            .iter()
            .map(|l| LinkStatistics::compute(l, now))
            .collect())
    }

    /// Number of stored links.
    pub async fn count(&self) -> Result<usize, AppError> {
        self.link_repository.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Link;
    use crate::domain::repositories::MockLinkRepository;
    use crate::infrastructure::persistence::InMemoryLinkRepository;
    use chrono::Duration;
    use std::collections::HashSet;

    fn create_test_link(slug: &str, url: &str, clicks: u64) -> Link {
        Link {
            id: format!("id-{slug}"),
            original_url: url.to_string(),
            slug: slug.to_string(),
            clicks,
            created_at: Utc::now(),
            expires_at: None,
        }
    }

    fn in_memory_service() -> (LinkService<InMemoryLinkRepository>, Arc<InMemoryLinkRepository>) {
        let repo = Arc::new(InMemoryLinkRepository::new());
        (LinkService::new(repo.clone()), repo)
    }

    #[tokio::test]
    async fn test_encode_new_url_inserts_link() {
        let mut mock_link_repo = MockLinkRepository::new();

        mock_link_repo
            .expect_find_by_original_url()
            .times(1)
            .returning(|_| Ok(None));

        mock_link_repo
            .expect_insert()
            .withf(|new_link| {
                new_link.original_url == "https://example.com"
                    && new_link.slug.len() == 8
                    && new_link.expires_at.is_none()
            })
            .times(1)
            .returning(|new_link| Ok(InsertOutcome::Created(Link::from_new(new_link))));

        let service = LinkService::new(Arc::new(mock_link_repo));

        let slug = service.encode("https://example.com").await.unwrap();
        assert_eq!(slug.len(), 8);
    }

    #[tokio::test]
    async fn test_encode_known_url_skips_insert() {
        let mut mock_link_repo = MockLinkRepository::new();

        let existing = create_test_link("existing", "https://example.com", 3);
        mock_link_repo
            .expect_find_by_original_url()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));

        mock_link_repo.expect_insert().times(0);

        let service = LinkService::new(Arc::new(mock_link_repo));

        let slug = service.encode("https://example.com").await.unwrap();
        assert_eq!(slug, "existing");
    }

    #[tokio::test]
    async fn test_encode_lost_race_returns_winner_slug() {
        let mut mock_link_repo = MockLinkRepository::new();

        mock_link_repo
            .expect_find_by_original_url()
            .times(1)
            .returning(|_| Ok(None));

        let winner = create_test_link("winner12", "https://example.com", 0);
        mock_link_repo
            .expect_insert()
            .times(1)
            .returning(move |_| Ok(InsertOutcome::Existing(winner.clone())));

        let service = LinkService::new(Arc::new(mock_link_repo));

        let slug = service.encode("https://example.com").await.unwrap();
        assert_eq!(slug, "winner12");
    }

    #[tokio::test]
    async fn test_encode_retries_on_slug_collision() {
        let mut mock_link_repo = MockLinkRepository::new();

        mock_link_repo
            .expect_find_by_original_url()
            .times(1)
            .returning(|_| Ok(None));

        let mut calls = 0;
        mock_link_repo.expect_insert().times(3).returning(move |new_link| {
            calls += 1;
            if calls < 3 {
                Err(AppError::conflict("Slug already exists", json!({})))
            } else {
                Ok(InsertOutcome::Created(Link::from_new(new_link)))
            }
        });

        let service = LinkService::new(Arc::new(mock_link_repo));

        assert!(service.encode("https://example.com").await.is_ok());
    }

    #[tokio::test]
    async fn test_encode_gives_up_after_max_attempts() {
        let mut mock_link_repo = MockLinkRepository::new();

        mock_link_repo
            .expect_find_by_original_url()
            .times(1)
            .returning(|_| Ok(None));

        mock_link_repo
            .expect_insert()
            .times(MAX_SLUG_ATTEMPTS)
            .returning(|_| Err(AppError::conflict("Slug already exists", json!({}))));

        let service = LinkService::new(Arc::new(mock_link_repo));

        let result = service.encode("https://example.com").await;
        assert!(matches!(result, Err(AppError::Internal { .. })));
    }

    #[tokio::test]
    async fn test_encode_propagates_registry_failure() {
        let mut mock_link_repo = MockLinkRepository::new();

        mock_link_repo
            .expect_find_by_original_url()
            .times(1)
            .returning(|_| Err(AppError::internal("Link registry is unavailable", json!({}))));

        let service = LinkService::new(Arc::new(mock_link_repo));

        let result = service.encode("https://example.com").await;
        assert!(matches!(result, Err(AppError::Internal { .. })));
    }

    #[tokio::test]
    async fn test_decode_unknown_slug_returns_none() {
        let mut mock_link_repo = MockLinkRepository::new();

        mock_link_repo
            .expect_record_click()
            .withf(|slug, _| slug == "nonexistent")
            .times(1)
            .returning(|_, _| Ok(None));

        let service = LinkService::new(Arc::new(mock_link_repo));

        assert_eq!(service.decode("nonexistent").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_get_statistics_does_not_record_click() {
        let mut mock_link_repo = MockLinkRepository::new();

        let link = create_test_link("abc123xy", "https://example.com", 5);
        mock_link_repo
            .expect_find_by_slug()
            .times(1)
            .returning(move |_| Ok(Some(link.clone())));
        mock_link_repo.expect_record_click().times(0);

        let service = LinkService::new(Arc::new(mock_link_repo));

        let stats = service.get_statistics("abc123xy").await.unwrap().unwrap();
        assert_eq!(stats.total_clicks, 5);
        assert_eq!(stats.clicks_per_day, "5");
    }

    #[tokio::test]
    async fn test_encode_is_idempotent() {
        let (service, _) = in_memory_service();

        let first = service.encode("https://example.com").await.unwrap();
        let second = service.encode("https://example.com").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(service.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_distinct_urls_get_distinct_slugs() {
        let (service, _) = in_memory_service();

        let mut slugs = HashSet::new();
        for i in 0..200 {
            slugs.insert(
                service
                    .encode(&format!("https://example.com/{i}"))
                    .await
                    .unwrap(),
            );
        }

        assert_eq!(slugs.len(), 200);
    }

    #[tokio::test]
    async fn test_round_trip_and_statistics() {
        let (service, _) = in_memory_service();

        let slug = service.encode("https://example.com").await.unwrap();
        assert_eq!(slug.len(), 8);

        let url = service.decode(&slug).await.unwrap();
        assert_eq!(url.as_deref(), Some("https://example.com"));

        let stats = service.get_statistics(&slug).await.unwrap().unwrap();
        assert_eq!(stats.slug, slug);
        assert_eq!(stats.original_url, "https://example.com");
        assert_eq!(stats.total_clicks, 1);
        assert_eq!(stats.age_in_days, 0);
        assert!(stats.status.is_active);
        assert!(!stats.status.is_expired);
        assert_eq!(stats.status.days_until_expiry, None);
    }

    #[tokio::test]
    async fn test_each_decode_counts_once() {
        let (service, _) = in_memory_service();
        let slug = service.encode("https://example.com").await.unwrap();

        for _ in 0..3 {
            service.decode(&slug).await.unwrap();
        }
        service.get_statistics(&slug).await.unwrap();
        service.get_statistics(&slug).await.unwrap();

        let stats = service.get_statistics(&slug).await.unwrap().unwrap();
        assert_eq!(stats.total_clicks, 3);
    }

    #[tokio::test]
    async fn test_nonexistent_slug_leaves_state_untouched() {
        let (service, _) = in_memory_service();
        let slug = service.encode("https://example.com").await.unwrap();

        assert!(service.decode("nonexistent").await.unwrap().is_none());
        assert!(service.get_statistics("nonexistent").await.unwrap().is_none());

        let all = service.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].slug, slug);
        assert_eq!(all[0].total_clicks, 0);
    }

    #[tokio::test]
    async fn test_expired_link_hidden_from_decode_but_has_statistics() {
        let (service, repo) = in_memory_service();
        let slug = service.encode("https://example.com").await.unwrap();
        repo.set_expiry(&slug, Some(Utc::now() - Duration::hours(1)));

        assert!(service.decode(&slug).await.unwrap().is_none());

        let stats = service.get_statistics(&slug).await.unwrap().unwrap();
        assert!(stats.status.is_expired);
        assert!(!stats.status.is_active);
        assert_eq!(stats.total_clicks, 0);
    }

    #[tokio::test]
    async fn test_list_all_empty() {
        let (service, _) = in_memory_service();
        assert!(service.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_all_newest_first() {
        let (service, _) = in_memory_service();

        service.encode("https://example1.com").await.unwrap();
        service.encode("https://example2.com").await.unwrap();

        let all = service.list_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].original_url, "https://example2.com");
        assert_eq!(all[1].original_url, "https://example1.com");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_encodes_of_one_url_create_one_link() {
        let (service, _) = in_memory_service();
        let service = Arc::new(service);

        let mut handles = Vec::new();
        for _ in 0..32 {
            let service = service.clone();
            handles.push(tokio::spawn(async move {
                service.encode("https://example.com/race").await.unwrap()
            }));
        }

        let mut slugs = HashSet::new();
        for handle in handles {
            slugs.insert(handle.await.unwrap());
        }

        assert_eq!(slugs.len(), 1);
        assert_eq!(service.count().await.unwrap(), 1);
    }
}
