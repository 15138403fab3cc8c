use rust_decimal::Decimal;

use crate::core::{AppError, Result};

/// Decimal places kept for money columns (`DECIMAL(19, 2)`)
pub const MONEY_SCALE: u32 = 2;

/// Validates that an amount fits the stored money columns
///
/// Trailing zeros do not count, so `10.500` passes while `10.125` does not.
/// MySQL would silently round the latter and the stored value would no
/// longer match what was saved.
pub fn validate_scale(field: &str, amount: Decimal) -> Result<()> {
    let scale = amount.normalize().scale();

    if scale > MONEY_SCALE {
        return Err(AppError::validation(format!(
            "{} must have at most {} decimal places, got {}",
            field, MONEY_SCALE, scale
        )));
    }

    Ok(())
}
