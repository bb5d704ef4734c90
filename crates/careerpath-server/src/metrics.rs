//! Prometheus-compatible metrics for the careerpath server.
//!
//! Tracks request counts, match volume, and store failures.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Shared metrics registry.
#[derive(Debug, Clone)]
pub struct Metrics {
    inner: Arc<MetricsInner>,
}

#[derive(Debug)]
struct MetricsInner {
    /// Total HTTP requests served.
    http_requests_total: AtomicU64,
    /// Total `/analyze` calls.
    analyze_requests_total: AtomicU64,
    /// Total skills returned across all analyses.
    skills_matched_total: AtomicU64,
    /// Total analyses that failed on a store error.
    store_errors_total: AtomicU64,
    started_at: Instant,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(MetricsInner {
                http_requests_total: AtomicU64::new(0),
                analyze_requests_total: AtomicU64::new(0),
                skills_matched_total: AtomicU64::new(0),
                store_errors_total: AtomicU64::new(0),
                started_at: Instant::now(),
            }),
        }
    }

    pub fn inc_http_requests(&self) {
        self.inner
            .http_requests_total
            .fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_analyze_requests(&self) {
        self.inner
            .analyze_requests_total
            .fetch_add(1, Ordering::Relaxed);
    }

    pub fn add_skills_matched(&self, n: usize) {
        self.inner
            .skills_matched_total
            .fetch_add(n as u64, Ordering::Relaxed);
    }

    pub fn inc_store_errors(&self) {
        self.inner.store_errors_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn uptime_secs(&self) -> u64 {
        self.inner.started_at.elapsed().as_secs()
    }

    /// Render metrics in Prometheus text exposition format.
    pub fn render_prometheus(&self) -> String {
        let m = &self.inner;

        format!(
            r#"# HELP careerpath_uptime_seconds Time since the server started.
# TYPE careerpath_uptime_seconds gauge
careerpath_uptime_seconds {}

# HELP careerpath_http_requests_total Total HTTP requests served.
# TYPE careerpath_http_requests_total counter
careerpath_http_requests_total {}

# HELP careerpath_analyze_requests_total Total skill analysis requests.
# TYPE careerpath_analyze_requests_total counter
careerpath_analyze_requests_total {}

# HELP careerpath_skills_matched_total Total skills matched across analyses.
# TYPE careerpath_skills_matched_total counter
careerpath_skills_matched_total {}

# HELP careerpath_store_errors_total Total analyses failed by the skill store.
# TYPE careerpath_store_errors_total counter
careerpath_store_errors_total {}
"#,
            self.uptime_secs(),
            m.http_requests_total.load(Ordering::Relaxed),
            m.analyze_requests_total.load(Ordering::Relaxed),
            m.skills_matched_total.load(Ordering::Relaxed),
            m.store_errors_total.load(Ordering::Relaxed),
        )
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_counter_increments() {
        let m = Metrics::new();
        m.inc_http_requests();
        m.inc_http_requests();
        m.inc_analyze_requests();
        let output = m.render_prometheus();
        assert!(output.contains("careerpath_http_requests_total 2"));
        assert!(output.contains("careerpath_analyze_requests_total 1"));
    }

    #[test]
    fn test_metrics_skills_matched() {
        let m = Metrics::new();
        m.add_skills_matched(3);
        m.add_skills_matched(2);
        m.inc_store_errors();
        let output = m.render_prometheus();
        assert!(output.contains("careerpath_skills_matched_total 5"));
        assert!(output.contains("careerpath_store_errors_total 1"));
    }

    #[test]
    fn test_metrics_prometheus_format() {
        let output = Metrics::new().render_prometheus();
        assert!(output.contains("# HELP careerpath_uptime_seconds"));
        assert!(output.contains("# TYPE careerpath_uptime_seconds gauge"));
        assert!(output.contains("# TYPE careerpath_http_requests_total counter"));
    }
}
