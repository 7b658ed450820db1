#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Errors are fine, panics are bugs.
        if let Ok(line) = ledgerline::Line::from_json(s) {
            let row = line.to_strings();
            assert_eq!(row.len(), ledgerline::Line::headers().len());

            // A decoded line must survive its own encoding.
            let json = line.to_json().expect("encode decoded line");
            let again = ledgerline::Line::from_json(&json).expect("decode re-encoded line");
            assert_eq!(again.to_strings(), row);
        }
    }
});
