//! Price Display
//!
//! Prices are stored and summed in USD; the INR figure is display-only.

use crate::config::INR_PER_USD;

/// Convert a USD amount to the display currency
pub fn to_inr(usd: f64) -> f64 {
    usd * INR_PER_USD
}

/// `₹` string with two decimals
pub fn format_inr(usd: f64) -> String {
    format!("₹{:.2}", to_inr(usd))
}

/// `$` string with two decimals
pub fn format_usd(usd: f64) -> String {
    format!("${:.2}", usd)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_prices() {
        assert_eq!(format_usd(109.95), "$109.95");
        assert_eq!(format_usd(5.0), "$5.00");
        assert_eq!(format_inr(10.0), "₹830.00");
        assert_eq!(format_inr(0.0), "₹0.00");
    }

    #[test]
    fn test_conversion_does_not_touch_base() {
        let usd = 25.5;
        assert_eq!(to_inr(usd), 2116.5);
        assert_eq!(format_usd(usd), "$25.50");
    }
}
