//! Start and cliff timestamps, derived from the submission time.
//! - start = now + START_OFFSET_DAYS days
//! - cliff = now + CLIFF_OFFSET_DAYS days
//! Offsets are whole UTC days of SECONDS_PER_DAY; no calendar or DST handling.

use crate::constants::{CLIFF_OFFSET_DAYS, SECONDS_PER_DAY, START_OFFSET_DAYS};
use crate::error::StreamFormError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StreamTimes {
    pub start: u64, // unix seconds
    pub cliff: u64, // unix seconds
}

pub fn stream_times(now_ts: i64) -> Result<StreamTimes, StreamFormError> {
    if now_ts < 0 {
        return Err(StreamFormError::InvalidTimestamp);
    }
    Ok(StreamTimes {
        start: offset_by_days(now_ts, START_OFFSET_DAYS)?,
        cliff: offset_by_days(now_ts, CLIFF_OFFSET_DAYS)?,
    })
}

fn offset_by_days(now_ts: i64, days: i64) -> Result<u64, StreamFormError> {
    let ts = days
        .checked_mul(SECONDS_PER_DAY)
        .and_then(|secs| now_ts.checked_add(secs))
        .ok_or(StreamFormError::MathOverflow)?;
    u64::try_from(ts).map_err(|_| StreamFormError::InvalidTimestamp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_and_cliff_use_fixed_day_offsets() {
        // 2026-04-11 00:00:00 UTC
        let now = 1_775_865_600;
        let times = stream_times(now).unwrap();
        assert_eq!(times.start, (now + 86_400) as u64);
        assert_eq!(times.cliff, (now + 2 * 86_400) as u64);
    }

    #[test]
    fn times_are_always_after_submission() {
        for now in [0_i64, 1, 59, 86_399, 1_700_000_123] {
            let times = stream_times(now).unwrap();
            assert!(times.start > now as u64);
            assert!(times.cliff > times.start);
            assert_eq!(times.cliff - times.start, 86_400);
        }
    }

    #[test]
    fn rejects_negative_clock() {
        assert!(matches!(
            stream_times(-1),
            Err(StreamFormError::InvalidTimestamp)
        ));
    }

    #[test]
    fn overflow_near_i64_max() {
        assert!(matches!(
            stream_times(i64::MAX - 100_000),
            Err(StreamFormError::MathOverflow)
        ));
    }
}
