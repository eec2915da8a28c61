use std::time::{Duration, Instant};

/// How long a fetched report is served before the next load hits the network.
pub const REPORT_TTL: Duration = Duration::from_secs(60 * 60);

/// Single-slot cache keyed only by wall-clock age.
#[derive(Debug)]
pub struct TtlCache<T> {
    ttl: Duration,
    entry: Option<(Instant, T)>,
}

impl<T> TtlCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, entry: None }
    }

    /// The stored value, if it was stored less than `ttl` before `now`.
    pub fn get(&self, now: Instant) -> Option<&T> {
        let (stored_at, value) = self.entry.as_ref()?;
        (now.saturating_duration_since(*stored_at) < self.ttl).then_some(value)
    }

    pub fn put(&mut self, value: T, now: Instant) {
        self.entry = Some((now, value));
    }

    /// Drop the stored value so the next lookup misses.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cache_misses() {
        let cache: TtlCache<u8> = TtlCache::new(REPORT_TTL);
        assert!(cache.get(Instant::now()).is_none());
    }

    #[test]
    fn hit_before_ttl_miss_after() {
        let start = Instant::now();
        let mut cache = TtlCache::new(Duration::from_secs(60));
        cache.put("report", start);
        assert_eq!(cache.get(start), Some(&"report"));
        assert_eq!(cache.get(start + Duration::from_secs(59)), Some(&"report"));
        assert!(cache.get(start + Duration::from_secs(60)).is_none());
    }

    #[test]
    fn invalidate_forces_miss() {
        let start = Instant::now();
        let mut cache = TtlCache::new(REPORT_TTL);
        cache.put(1, start);
        cache.invalidate();
        assert!(cache.get(start).is_none());
    }

    #[test]
    fn put_replaces_and_restarts_clock() {
        let start = Instant::now();
        let mut cache = TtlCache::new(Duration::from_secs(10));
        cache.put(1, start);
        cache.put(2, start + Duration::from_secs(8));
        assert_eq!(cache.get(start + Duration::from_secs(15)), Some(&2));
    }
}
