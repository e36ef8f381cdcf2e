use anchor_lang::prelude::*;

use crate::constants::MAX_STREAM_RECORDS;
use crate::error::StreamFormError;

/// One created stream, as listed back to the wallet.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StreamRecord {
    /// Stream metadata account returned by the client.
    pub stream: Pubkey,
    pub mint: Pubkey,
    pub created_at: i64,
    /// BLAKE3 over the submitted parameters.
    pub params_digest: [u8; 32],
}

impl StreamRecord {
    pub const SIZE: usize = 32 + 32 + 8 + 32;
}

/// Per-wallet PDA listing the streams created through this program.
#[account]
pub struct StreamRegistry {
    pub owner: Pubkey,
    pub bump: u8,
    /// Streams ever recorded, including evicted ones.
    pub total_created: u64,
    /// Oldest first; capped at MAX_STREAM_RECORDS.
    pub records: Vec<StreamRecord>,
}

impl StreamRegistry {
    /// Space for discriminator + fields + vec header + `max_records` entries.
    pub const fn space(max_records: usize) -> usize {
        8 + // discriminator
        32 + // owner
        1 + // bump
        8 + // total_created
        4 + max_records * StreamRecord::SIZE
    }

    /// Append a record, evicting the oldest once full. Returns the new total.
    pub fn record(&mut self, record: StreamRecord) -> std::result::Result<u64, StreamFormError> {
        if self.records.len() >= MAX_STREAM_RECORDS {
            self.records.remove(0);
        }
        self.records.push(record);
        self.total_created = self
            .total_created
            .checked_add(1)
            .ok_or(StreamFormError::MathOverflow)?;
        Ok(self.total_created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> StreamRegistry {
        StreamRegistry {
            owner: Pubkey::new_unique(),
            bump: 255,
            total_created: 0,
            records: Vec::new(),
        }
    }

    fn record(created_at: i64) -> StreamRecord {
        StreamRecord {
            stream: Pubkey::new_unique(),
            mint: Pubkey::new_unique(),
            created_at,
            params_digest: [7u8; 32],
        }
    }

    #[test]
    fn appends_in_submission_order() {
        let mut reg = registry();
        let first = record(1);
        let second = record(2);
        assert_eq!(reg.record(first).unwrap(), 1);
        assert_eq!(reg.record(second).unwrap(), 2);
        assert_eq!(reg.records, vec![first, second]);
    }

    #[test]
    fn evicts_oldest_when_full() {
        let mut reg = registry();
        for i in 0..MAX_STREAM_RECORDS as i64 + 3 {
            reg.record(record(i)).unwrap();
        }
        assert_eq!(reg.records.len(), MAX_STREAM_RECORDS);
        assert_eq!(reg.records[0].created_at, 3);
        assert_eq!(reg.total_created, MAX_STREAM_RECORDS as u64 + 3);
    }

    #[test]
    fn space_fits_full_registry() {
        let mut reg = registry();
        for i in 0..MAX_STREAM_RECORDS as i64 {
            reg.record(record(i)).unwrap();
        }
        let mut data = Vec::new();
        reg.try_serialize(&mut data).unwrap();
        assert_eq!(data.len(), StreamRegistry::space(MAX_STREAM_RECORDS));
    }
}
