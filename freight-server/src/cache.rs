//! Caching layer for road-distance estimates.
//!
//! Road geometry between two fixed points does not change between
//! queries, so provider responses are cached aggressively. Keys are
//! coordinate pairs quantized to ~11 m, which bounds cache cardinality
//! without ever mixing up distinct city pairs.

use std::time::Duration;

use moka::sync::Cache as MokaCache;

use crate::distance::{DistanceError, DistanceProvider, RoadEstimate};
use crate::domain::Coordinates;

/// Cache key: both endpoints quantized to 1e-4 degrees.
type EstimateKey = (i64, i64, i64, i64);

/// Configuration for the estimate cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(60 * 60),
            max_capacity: 10_000,
        }
    }
}

/// A distance provider with a read-through cache in front.
///
/// Only successful estimates are cached; failures always retry the
/// inner provider on the next call.
pub struct CachedDistanceProvider<P> {
    inner: P,
    estimates: MokaCache<EstimateKey, RoadEstimate>,
}

impl<P> CachedDistanceProvider<P> {
    /// Wrap a provider with the given cache configuration.
    pub fn new(inner: P, config: &CacheConfig) -> Self {
        let estimates = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { inner, estimates }
    }

    /// Number of cached estimates.
    pub fn entry_count(&self) -> u64 {
        self.estimates.entry_count()
    }

    /// Drop all cached estimates.
    pub fn invalidate_all(&self) {
        self.estimates.invalidate_all();
    }

    /// Access the wrapped provider.
    pub fn inner(&self) -> &P {
        &self.inner
    }

    fn key(origin: Coordinates, destination: Coordinates) -> EstimateKey {
        let q = |v: f64| (v * 10_000.0).round() as i64;
        (
            q(origin.latitude),
            q(origin.longitude),
            q(destination.latitude),
            q(destination.longitude),
        )
    }
}

impl<P: DistanceProvider> DistanceProvider for CachedDistanceProvider<P> {
    fn road_route(
        &self,
        origin: Coordinates,
        destination: Coordinates,
    ) -> Result<RoadEstimate, DistanceError> {
        let key = Self::key(origin, destination);

        if let Some(cached) = self.estimates.get(&key) {
            return Ok(cached);
        }

        let estimate = self.inner.road_route(origin, destination)?;
        self.estimates.insert(key, estimate);
        Ok(estimate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::mock::{StaticProvider, UnavailableProvider};

    fn mumbai() -> Coordinates {
        Coordinates::new(19.0760, 72.8777)
    }

    fn bengaluru() -> Coordinates {
        Coordinates::new(12.9716, 77.5946)
    }

    #[test]
    fn caches_successful_estimates() {
        let mut inner = StaticProvider::new();
        inner.insert(
            mumbai(),
            bengaluru(),
            RoadEstimate {
                distance_km: 984.0,
                duration_hours: 15.0,
            },
        );

        let cached = CachedDistanceProvider::new(inner, &CacheConfig::default());
        assert_eq!(cached.entry_count(), 0);

        let first = cached.road_route(mumbai(), bengaluru()).unwrap();
        cached.estimates.run_pending_tasks();
        assert_eq!(cached.entry_count(), 1);

        let second = cached.road_route(mumbai(), bengaluru()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn failures_are_not_cached() {
        let cached = CachedDistanceProvider::new(UnavailableProvider, &CacheConfig::default());
        assert!(cached.road_route(mumbai(), bengaluru()).is_err());
        cached.estimates.run_pending_tasks();
        assert_eq!(cached.entry_count(), 0);
    }

    #[test]
    fn direction_matters_in_cache_keys() {
        let ka = CachedDistanceProvider::<UnavailableProvider>::key(mumbai(), bengaluru());
        let kb = CachedDistanceProvider::<UnavailableProvider>::key(bengaluru(), mumbai());
        assert_ne!(ka, kb);
    }
}
