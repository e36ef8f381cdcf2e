//! Fingerprint of a submitted parameter record.

use bytemuck::{Pod, Zeroable};

use crate::state::CreateParams;

/// Numeric terms laid out without padding so they can be hashed as bytes.
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
#[repr(C)]
struct StreamTerms {
    deposited_amount: u64,
    start: u64,
    period: u64,
    amount_per_period: u64,
    cliff: u64,
    cliff_amount: u64,
    flags: [u8; 8],
}

impl From<&CreateParams> for StreamTerms {
    fn from(p: &CreateParams) -> Self {
        Self {
            deposited_amount: p.deposited_amount,
            start: p.start,
            period: p.period,
            amount_per_period: p.amount_per_period,
            cliff: p.cliff,
            cliff_amount: p.cliff_amount,
            flags: [
                p.can_topup as u8,
                p.cancelable_by_sender as u8,
                p.cancelable_by_recipient as u8,
                p.transferable_by_sender as u8,
                p.transferable_by_recipient as u8,
                0,
                0,
                0,
            ],
        }
    }
}

pub fn params_digest(params: &CreateParams) -> [u8; 32] {
    let terms = StreamTerms::from(params);
    let mut hasher = blake3::Hasher::new();
    hasher.update(bytemuck::bytes_of(&terms));
    hasher.update(params.sender.as_ref());
    hasher.update(params.mint.as_ref());
    // length-prefixed so name/recipient boundaries are unambiguous
    for text in [params.name.as_bytes(), params.recipient.as_bytes()] {
        hasher.update(&(text.len() as u32).to_le_bytes());
        hasher.update(text);
    }
    *hasher.finalize().as_bytes()
}
