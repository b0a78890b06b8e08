//! In-memory snapshot of every player's [UserCatchSettings].

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use delegate::delegate;
use tokio::sync::RwLock;
use tracing::instrument;

use super::UserCatchSettings;
use crate::error::SettingsError;
use crate::lib;
use crate::serenity::UserId;

/// Where settings are loaded from.
#[async_trait]
pub trait SettingsSource: Send + Sync {
    /// Load every player's settings.
    async fn load_all(&self) -> Result<HashMap<UserId, UserCatchSettings>, SettingsError>;
}

/// Cached settings, replaced wholesale on [reload](SettingsCache::reload).
/// Internally uses an [Arc], so it's cheap to clone.
#[derive(Debug, Default, Clone)]
pub struct SettingsCache {
    /// Keyed by discord user id.
    inner: Arc<RwLock<HashMap<UserId, UserCatchSettings>>>,
}

impl SettingsCache {
    /// Clone out one player's settings.
    pub async fn snapshot(&self, user: UserId) -> Option<UserCatchSettings> {
        let map = self.inner.read().await;
        map.get(&user).cloned()
    }

    /// Replace the whole cache with a fresh load. On error the old snapshot is kept.
    pub async fn reload(&self, source: &dyn SettingsSource) -> Result<(), SettingsError> {
        let fresh = source.load_all().await?;
        *self.inner.write().await = fresh;
        Ok(())
    }

    delegate! {
        to self.inner.read().await {
            /// Number of players with stored settings.
            #[await(false)]
            pub async fn len(&self) -> usize;
            /// Is anyone stored at all.
            #[await(false)]
            pub async fn is_empty(&self) -> bool;
        }
    }
}

/// Reload `cache` from `source` forever, once per `period`.
/// The first tick fires immediately.
#[instrument(skip_all, fields(period = %lib::format_duration(&period)))]
pub async fn reload_periodically(
    cache: SettingsCache,
    source: Arc<dyn SettingsSource>,
    period: Duration,
) {
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    loop {
        interval.tick().await;
        match cache.reload(source.as_ref()).await {
            Ok(()) => tracing::info!("Reloaded settings for {} players.", cache.len().await),
            Err(e) => tracing::error!("Settings reload failed, keeping previous snapshot. {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicBool;
    use std::sync::atomic::Ordering;

    use super::*;

    /// Serves one player, or fails once `broken` is set.
    struct FakeSource {
        bonus: f64,
        broken: AtomicBool,
    }

    #[async_trait]
    impl SettingsSource for FakeSource {
        async fn load_all(&self) -> Result<HashMap<UserId, UserCatchSettings>, SettingsError> {
            if self.broken.load(Ordering::SeqCst) {
                return Err(SettingsError::InvalidUserId { id: "0".to_string() });
            }
            let settings = UserCatchSettings {
                enabled: true,
                catch_rate_bonus: self.bonus,
                ..Default::default()
            };
            Ok(HashMap::from([(UserId::new(42), settings)]))
        }
    }

    #[tokio::test]
    async fn reload_replaces_snapshot() {
        let cache = SettingsCache::default();
        assert!(cache.is_empty().await);

        let source = FakeSource {
            bonus: 15.0,
            broken: AtomicBool::new(false),
        };
        cache.reload(&source).await.expect("load works");
        assert_eq!(cache.len().await, 1);

        let snapshot = cache.snapshot(UserId::new(42)).await.expect("player was loaded");
        assert_eq!(snapshot.catch_rate_bonus, 15.0);
        assert_eq!(cache.snapshot(UserId::new(43)).await, None);
    }

    #[tokio::test]
    async fn failed_reload_keeps_previous_snapshot() {
        let cache = SettingsCache::default();
        let source = FakeSource {
            bonus: 5.0,
            broken: AtomicBool::new(false),
        };
        cache.reload(&source).await.expect("first load works");

        source.broken.store(true, Ordering::SeqCst);
        assert!(cache.reload(&source).await.is_err());
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn snapshots_are_detached_from_the_cache() {
        let cache = SettingsCache::default();
        let source = FakeSource {
            bonus: 5.0,
            broken: AtomicBool::new(false),
        };
        cache.reload(&source).await.expect("load works");

        let mut snapshot = cache.snapshot(UserId::new(42)).await.expect("player was loaded");
        snapshot.enabled = false;

        let fresh = cache.snapshot(UserId::new(42)).await.expect("player was loaded");
        assert!(fresh.enabled);
    }
}
