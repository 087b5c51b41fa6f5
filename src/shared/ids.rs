//! Notification ID Generator
//!
//! Timestamp-derived unique ID generation for notification entities.
//! IDs embed their creation time in the upper bits so two notifications
//! created in the same millisecond still get distinct values.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Bits reserved for the per-millisecond sequence counter.
const SEQUENCE_BITS: u64 = 12;
const SEQUENCE_MASK: u64 = (1 << SEQUENCE_BITS) - 1;

/// Timestamp-derived notification ID generator
#[derive(Debug, Default)]
pub struct NotificationIdGenerator {
    sequence: AtomicU64,
    last_timestamp: AtomicU64,
}

impl NotificationIdGenerator {
    /// Create a new generator
    pub fn new() -> Self {
        Self {
            sequence: AtomicU64::new(0),
            last_timestamp: AtomicU64::new(0),
        }
    }

    /// Generate a new unique notification ID
    pub fn generate(&self) -> i64 {
        let timestamp = current_timestamp_ms();
        let last = self.last_timestamp.load(Ordering::SeqCst);

        let sequence = if timestamp == last {
            self.sequence.fetch_add(1, Ordering::SeqCst) & SEQUENCE_MASK
        } else {
            self.last_timestamp.store(timestamp, Ordering::SeqCst);
            self.sequence.store(1, Ordering::SeqCst);
            0
        };

        ((timestamp << SEQUENCE_BITS) | sequence) as i64
    }
}

/// Extract the creation timestamp (milliseconds since epoch) from an ID
pub fn extract_timestamp(id: i64) -> u64 {
    (id as u64) >> SEQUENCE_BITS
}

/// Get current timestamp in milliseconds
fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
