use crate::metrics::instruments::{Gauge, IncreasingCounter};

/// Client-level metrics aggregating all operations
#[derive(Debug, Clone, Default)]
pub struct ClientMetrics {
    /// Total number of operations initiated
    operations_initiated: IncreasingCounter,
    /// Total number of operations completed successfully
    operations_completed: IncreasingCounter,
    /// Total number of operations that failed
    operations_failed: IncreasingCounter,
    /// Total bytes sent across all upload operations
    bytes_uploaded: IncreasingCounter,
    /// Total bytes received across all download operations
    bytes_downloaded: IncreasingCounter,
    /// Total number of request checksums calculated
    checksums_calculated: IncreasingCounter,
    /// Total number of response bodies validated against a stored checksum
    checksums_validated: IncreasingCounter,
    /// Number of currently active operations
    active_operations: Gauge,
}

impl ClientMetrics {
    /// Create new client metrics
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Increment operations initiated counter
    pub(crate) fn increment_operations_initiated(&self) {
        self.operations_initiated.increment(1);
        self.active_operations.increment(1);
    }

    /// Increment operations completed counter
    pub(crate) fn increment_operations_completed(&self) {
        self.operations_completed.increment(1);
        self.active_operations.decrement(1);
    }

    /// Increment operations failed counter
    pub(crate) fn increment_operations_failed(&self) {
        self.operations_failed.increment(1);
        self.active_operations.decrement(1);
    }

    /// Add bytes to the upload total
    pub(crate) fn add_bytes_uploaded(&self, bytes: u64) {
        self.bytes_uploaded.increment(bytes);
    }

    /// Add bytes to the download total
    pub(crate) fn add_bytes_downloaded(&self, bytes: u64) {
        self.bytes_downloaded.increment(bytes);
    }

    /// Increment checksums calculated counter
    pub(crate) fn increment_checksums_calculated(&self) {
        self.checksums_calculated.increment(1);
    }

    /// Increment checksums validated counter
    pub(crate) fn increment_checksums_validated(&self) {
        self.checksums_validated.increment(1);
    }

    /// Get the number of operations initiated
    pub fn operations_initiated(&self) -> u64 {
        self.operations_initiated.value()
    }

    /// Get the number of operations completed
    pub fn operations_completed(&self) -> u64 {
        self.operations_completed.value()
    }

    /// Get the number of operations failed
    pub fn operations_failed(&self) -> u64 {
        self.operations_failed.value()
    }

    /// Get the total bytes uploaded
    pub fn bytes_uploaded(&self) -> u64 {
        self.bytes_uploaded.value()
    }

    /// Get the total bytes downloaded
    pub fn bytes_downloaded(&self) -> u64 {
        self.bytes_downloaded.value()
    }

    /// Get the number of request checksums calculated
    pub fn checksums_calculated(&self) -> u64 {
        self.checksums_calculated.value()
    }

    /// Get the number of response bodies validated
    pub fn checksums_validated(&self) -> u64 {
        self.checksums_validated.value()
    }

    /// Get the number of currently active operations
    pub fn active_operations(&self) -> u64 {
        self.active_operations.value()
    }
}

#[cfg(test)]
mod tests {
    use super::ClientMetrics;

    #[test]
    fn test_operation_lifecycle() {
        let metrics = ClientMetrics::new();

        metrics.increment_operations_initiated();
        metrics.increment_operations_initiated();
        assert_eq!(metrics.operations_initiated(), 2);
        assert_eq!(metrics.active_operations(), 2);

        metrics.increment_operations_completed();
        metrics.increment_operations_failed();
        assert_eq!(metrics.operations_completed(), 1);
        assert_eq!(metrics.operations_failed(), 1);
        assert_eq!(metrics.active_operations(), 0);
    }

    #[test]
    fn test_byte_totals_accumulate() {
        let metrics = ClientMetrics::new();
        metrics.add_bytes_uploaded(100);
        metrics.add_bytes_uploaded(50);
        metrics.add_bytes_downloaded(25);

        assert_eq!(metrics.bytes_uploaded(), 150);
        assert_eq!(metrics.bytes_downloaded(), 25);
    }
}
