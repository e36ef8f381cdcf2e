use crate::error::StreamFormError;

/// Scale a whole-token amount into base units (`tokens * 10^decimals`).
pub fn to_base_units(tokens: u64, decimals: u8) -> Result<u64, StreamFormError> {
    let factor = 10u64
        .checked_pow(decimals as u32)
        .ok_or(StreamFormError::MathOverflow)?;
    tokens
        .checked_mul(factor)
        .ok_or(StreamFormError::MathOverflow)
}
