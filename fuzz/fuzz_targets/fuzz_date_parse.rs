#![no_main]

use libfuzzer_sys::fuzz_target;
use ledgerline::core::Date;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(date) = Date::parse(s) {
            // Rendered dates parse back to the same date.
            let rendered = date.to_string();
            assert_eq!(Date::parse(&rendered), Ok(date));
        }
    }
});
