//! Currency presentation.

use rust_decimal::Decimal;

/// Format an amount as fixed two-decimal text suffixed with the account's
/// operating currency code, e.g. `"1234.50 DZD"`.
pub fn format_amount(value: Decimal, currency_code: &str) -> String {
    let mut value = value;
    value.rescale(2);
    format!("{value} {currency_code}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn pads_to_two_decimals() {
        assert_eq!(format_amount(dec!(10), "DZD"), "10.00 DZD");
        assert_eq!(format_amount(dec!(35.7), "EUR"), "35.70 EUR");
        assert_eq!(format_amount(dec!(0), "USD"), "0.00 USD");
    }

    #[test]
    fn keeps_sign_and_magnitude() {
        assert_eq!(format_amount(dec!(-3.141), "DZD"), "-3.14 DZD");
        assert_eq!(format_amount(dec!(1234567.89), "DZD"), "1234567.89 DZD");
    }
}
