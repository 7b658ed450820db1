//! ISO 4217 lookup backing [`CurrencyCode::is_known`](super::CurrencyCode::is_known).
//!
//! Covers the currencies foreign-currency postings usually carry, not the
//! full standard.

pub(crate) fn is_known_currency_code(code: &str) -> bool {
    CURRENCY_CODES.binary_search(&code).is_ok()
}

// Sorted for binary search.
static CURRENCY_CODES: &[&str] = &[
    "AED", "AMD", "AUD", "BGN", "BRL", "CAD", "CHF", "CNY", "CZK", "DKK", "EGP", "EUR",
    "GBP", "GEL", "HKD", "HRK", "HUF", "IDR", "ILS", "INR", "ISK", "JPY", "KES", "KRW",
    "KZT", "MXN", "MYR", "NGN", "NOK", "NZD", "PHP", "PLN", "RON", "RUB", "SAR", "SEK",
    "SGD", "THB", "TRY", "TWD", "UAH", "USD", "VND", "ZAR",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_foreign_currencies() {
        for code in ["USD", "GBP", "CHF", "JPY", "PLN"] {
            assert!(is_known_currency_code(code), "{code}");
        }
        assert!(!is_known_currency_code("usd"));
        assert!(!is_known_currency_code(""));
    }

    #[test]
    fn table_is_sorted_for_binary_search() {
        assert!(CURRENCY_CODES.windows(2).all(|w| w[0] < w[1]));
    }
}
