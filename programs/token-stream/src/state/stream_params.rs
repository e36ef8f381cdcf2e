use anchor_lang::prelude::*;

use crate::constants::{
    AMOUNT_PER_PERIOD_TOKENS, CLIFF_AMOUNT, DENOMINATION_DECIMALS, DEPOSITED_TOKENS,
};
use crate::error::StreamFormError;
use crate::utils::amounts::to_base_units;
use crate::utils::time::StreamTimes;
use crate::utils::validation::ValidStreamInputs;

/// Raw form values, as submitted. Any field may be missing.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct StreamUserInputs {
    pub name: Option<String>,
    /// Opaque; only checked for non-emptiness before reaching the client.
    pub recipient: Option<String>,
    /// Unlock period in seconds.
    pub period: Option<u64>,
    pub mint: Option<Pubkey>,
    pub can_topup: bool,
    pub cancelable_by_sender: bool,
}

/// Parameter record handed to the stream client.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct CreateParams {
    pub sender: Pubkey,
    pub name: String,
    pub recipient: String,
    pub mint: Pubkey,
    /// Base units.
    pub deposited_amount: u64,
    pub start: u64,
    pub period: u64,
    /// Base units.
    pub amount_per_period: u64,
    pub cliff: u64,
    /// Base units.
    pub cliff_amount: u64,
    pub can_topup: bool,
    pub cancelable_by_sender: bool,
    pub cancelable_by_recipient: bool,
    pub transferable_by_sender: bool,
    pub transferable_by_recipient: bool,
}

impl CreateParams {
    pub fn new(
        sender: Pubkey,
        inputs: ValidStreamInputs,
        times: StreamTimes,
    ) -> std::result::Result<Self, StreamFormError> {
        Ok(Self {
            sender,
            name: inputs.name,
            recipient: inputs.recipient,
            mint: inputs.mint,
            deposited_amount: to_base_units(DEPOSITED_TOKENS, DENOMINATION_DECIMALS)?,
            start: times.start,
            period: inputs.period,
            amount_per_period: to_base_units(AMOUNT_PER_PERIOD_TOKENS, DENOMINATION_DECIMALS)?,
            cliff: times.cliff,
            cliff_amount: CLIFF_AMOUNT,
            can_topup: inputs.can_topup,
            cancelable_by_sender: inputs.cancelable_by_sender,
            cancelable_by_recipient: false,
            transferable_by_sender: true,
            transferable_by_recipient: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packages_fixed_record() {
        let sender = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let inputs = ValidStreamInputs {
            name: "Seed round".to_string(),
            recipient: "9TXGSBMePiFgRb2bLEQTtUfccLx7ZmkY6HpW1vXZf4Bb".to_string(),
            period: 3_600,
            mint,
            can_topup: false,
            cancelable_by_sender: true,
        };
        let times = StreamTimes {
            start: 1_000 + 86_400,
            cliff: 1_000 + 172_800,
        };

        let params = CreateParams::new(sender, inputs, times).unwrap();

        assert_eq!(params.sender, sender);
        assert_eq!(params.mint, mint);
        assert_eq!(params.deposited_amount, 100_000_000_000);
        assert_eq!(params.amount_per_period, 10_000_000_000);
        assert_eq!(params.cliff_amount, 5);
        assert_eq!(params.period, 3_600);
        assert_eq!(params.start, 87_400);
        assert_eq!(params.cliff, 173_800);
        assert!(!params.can_topup);
        assert!(params.cancelable_by_sender);
        assert!(!params.cancelable_by_recipient);
        assert!(params.transferable_by_sender);
        assert!(!params.transferable_by_recipient);
    }
}
