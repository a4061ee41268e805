//! Per-endpoint request counters
//!
//! Three monotonic counters, one per endpoint category. They start at zero and
//! reset only when the process restarts.

use prometheus::{IntCounter, Registry};
use serde::Serialize;

use crate::types::Result;

/// Endpoint categories that are counted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Counter {
    /// `GET /version`
    Version,
    /// `PUT /posts/{id}` and `DELETE /posts/{id}`
    Posts,
    /// `GET /stats`
    Stats,
}

/// Request counters shared by all handlers
///
/// Each instance registers its counters in its own `Registry`, so several
/// app states can live in one process without name clashes.
pub struct RequestCounters {
    registry: Registry,
    /// Calls to the version endpoint
    version: IntCounter,
    /// Calls to board update/delete, including ones that end in 404
    posts: IntCounter,
    /// Calls to the stats endpoint
    stats: IntCounter,
}

/// Point-in-time view of the counters, as served by `/stats`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CounterSnapshot {
    /// Version endpoint calls
    pub version: u64,
    /// Board update/delete calls
    pub posts: u64,
    /// Stats endpoint calls
    pub stats: u64,
}

impl RequestCounters {
    /// Create counters starting at zero, registered in a fresh registry
    pub fn new() -> Result<Self> {
        let registry = Registry::new();
        let version = register(
            &registry,
            "blog_version_requests_total",
            "Total number of version requests",
        )?;
        let posts = register(
            &registry,
            "blog_post_updates_total",
            "Total number of board post updates and deletes",
        )?;
        let stats = register(
            &registry,
            "blog_stats_requests_total",
            "Total number of stats requests",
        )?;
        Ok(Self {
            registry,
            version,
            posts,
            stats,
        })
    }

    fn counter(&self, counter: Counter) -> &IntCounter {
        match counter {
            Counter::Version => &self.version,
            Counter::Posts => &self.posts,
            Counter::Stats => &self.stats,
        }
    }

    /// Increment one counter and return its new value
    pub fn increment(&self, counter: Counter) -> u64 {
        let counter = self.counter(counter);
        counter.inc();
        counter.get()
    }

    /// Current value of one counter
    pub fn get(&self, counter: Counter) -> u64 {
        self.counter(counter).get()
    }

    /// Read all three counters
    pub fn snapshot(&self) -> CounterSnapshot {
        CounterSnapshot {
            version: self.get(Counter::Version),
            posts: self.get(Counter::Posts),
            stats: self.get(Counter::Stats),
        }
    }

    /// Registry holding the counters, for exposition
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

fn register(registry: &Registry, name: &str, help: &str) -> Result<IntCounter> {
    let counter = IntCounter::new(name, help)?;
    registry.register(Box::new(counter.clone()))?;
    Ok(counter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn counters_start_at_zero() {
        let counters = RequestCounters::new().unwrap();
        assert_eq!(
            counters.snapshot(),
            CounterSnapshot {
                version: 0,
                posts: 0,
                stats: 0
            }
        );
    }

    #[test]
    fn increments_are_independent() {
        let counters = RequestCounters::new().unwrap();
        assert_eq!(counters.increment(Counter::Posts), 1);
        assert_eq!(counters.increment(Counter::Posts), 2);
        assert_eq!(counters.increment(Counter::Stats), 1);
        let snapshot = counters.snapshot();
        assert_eq!(snapshot.version, 0);
        assert_eq!(snapshot.posts, 2);
        assert_eq!(snapshot.stats, 1);
    }

    #[test]
    fn concurrent_increments_are_not_lost() {
        let counters = Arc::new(RequestCounters::new().unwrap());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let counters = counters.clone();
                std::thread::spawn(move || {
                    for _ in 0..1000 {
                        counters.increment(Counter::Version);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(counters.get(Counter::Version), 4000);
    }

    #[test]
    fn counters_are_exposed_through_their_registry() {
        let counters = RequestCounters::new().unwrap();
        counters.increment(Counter::Stats);
        counters.increment(Counter::Stats);

        let families = counters.registry().gather();
        assert_eq!(families.len(), 3);
        let stats = families
            .iter()
            .find(|family| family.get_name() == "blog_stats_requests_total")
            .unwrap();
        assert_eq!(stats.get_metric()[0].get_counter().get_value(), 2.0);
    }

    #[test]
    fn separate_instances_do_not_share_counts() {
        let first = RequestCounters::new().unwrap();
        let second = RequestCounters::new().unwrap();
        first.increment(Counter::Posts);
        assert_eq!(second.get(Counter::Posts), 0);
    }
}
