use chrono::{DateTime, Duration, Utc};
use rand::{Rng, RngCore};
use uuid::Uuid;

/// Random v4 UUID drawn from `rng`, so seeded runs reproduce their ids.
pub fn random_uuid(rng: &mut dyn RngCore) -> Uuid {
    let bytes: [u8; 16] = rng.random();
    uuid::Builder::from_random_bytes(bytes).into_uuid()
}

/// Uniform timestamp in `[start, end)` at microsecond resolution.
///
/// Returns `start` when the window is empty.
pub fn timestamp_between(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    rng: &mut dyn RngCore,
) -> DateTime<Utc> {
    let span = (end - start).num_microseconds().unwrap_or(i64::MAX);
    if span <= 0 {
        return start;
    }
    start + Duration::microseconds(rng.random_range(0..span))
}

/// `now - days`, `None` when the offset leaves chrono's range.
pub fn days_before(now: DateTime<Utc>, days: i64) -> Option<DateTime<Utc>> {
    Duration::try_days(days).and_then(|offset| now.checked_sub_signed(offset))
}

/// Derive an independent stream seed from the run seed and a label.
pub fn hash_seed(seed: u64, key: &str) -> u64 {
    let mut hash = seed ^ 0xcbf29ce484222325;
    for byte in key.as_bytes() {
        hash ^= *byte as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn uuids_are_version_4() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let id = random_uuid(&mut rng);
        assert_eq!(id.get_version_num(), 4);
    }

    #[test]
    fn timestamps_stay_in_half_open_window() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let start = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let end = start + Duration::days(1);
        for _ in 0..500 {
            let value = timestamp_between(start, end, &mut rng);
            assert!(value >= start && value < end);
        }
    }

    #[test]
    fn empty_window_returns_start() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let start = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(timestamp_between(start, start, &mut rng), start);
    }

    #[test]
    fn days_before_rejects_out_of_range_offsets() {
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(days_before(now, 1), Some(now - Duration::days(1)));
        assert_eq!(days_before(now, i64::MAX), None);
        assert_eq!(days_before(now, 1_000_000_000), None);
    }

    #[test]
    fn stream_seeds_differ_by_label() {
        assert_ne!(hash_seed(7, "clients"), hash_seed(7, "orders"));
        assert_eq!(hash_seed(7, "orders"), hash_seed(7, "orders"));
    }
}
