//! Program-wide constants.

use anchor_lang::prelude::*;

/// Seconds per day (UTC).
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Days between submission and the stream start.
pub const START_OFFSET_DAYS: i64 = 1;

/// Days between submission and the cliff.
pub const CLIFF_OFFSET_DAYS: i64 = 2;

/// Decimals used to scale whole-token amounts into base units.
pub const DENOMINATION_DECIMALS: u8 = 9;

/// Whole tokens deposited into every stream.
pub const DEPOSITED_TOKENS: u64 = 100;

/// Whole tokens released each period.
pub const AMOUNT_PER_PERIOD_TOKENS: u64 = 10;

/// Base units unlocked at the cliff (not scaled).
pub const CLIFF_AMOUNT: u64 = 5;

/// Streamflow stores stream names in a fixed 64-byte field.
pub const MAX_STREAM_NAME_LEN: usize = 64;

/// Records kept in a wallet's registry before the oldest is evicted.
pub const MAX_STREAM_RECORDS: usize = 16;

pub const REGISTRY_SEED: &[u8] = b"registry";

/// Streamflow timelock program and the fixed accounts its `create` expects.
pub mod streamflow {
    use super::*;

    #[cfg(not(feature = "devnet"))]
    pub const PROGRAM_ID: Pubkey = pubkey!("strmRqUCoQUgGUan5YhzUZa6KqdzwX5L6FpUxfmKg5m");
    #[cfg(feature = "devnet")]
    pub const PROGRAM_ID: Pubkey = pubkey!("HqDGZjaVRXJ9MGRQEw7qDc2rAr6iH1n1kAQdCZaCMfMZ");

    pub const TREASURY: Pubkey = pubkey!("5SEpbdjFK5FxwTvfsGMXVQTD2v4M2c5tyRTxhdsPkgDw");
    pub const WITHDRAWOR: Pubkey = pubkey!("wdrwhnCv4pzW8beKsbPa4S2UDZrhenjg16KJdKSpb5u");
    pub const FEE_ORACLE: Pubkey = pubkey!("B743wFVk2pCYhV91cn287e1xY7f1vt4gdY48hhNiuQmT");

    /// Seed prefix of the escrow token account PDA (`["strm", metadata]`).
    pub const ESCROW_SEED: &[u8] = b"strm";

    /// Anchor discriminator of `global:create`.
    pub const CREATE_DISCRIMINATOR: [u8; 8] = [24, 30, 200, 40, 5, 28, 7, 119];
}
