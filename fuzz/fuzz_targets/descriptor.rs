//! Fuzz target for the descriptor parser.
//!
//! Arbitrary text goes straight to the parser with the `jdbc:tibero:thin:@`
//! prefix stripped, so the fuzzer spends its time inside the parentheses.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_descriptor
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use tnsurl_core::descriptor::{DatabaseSpec, parse_descriptor};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // The parser should never panic, only return errors
        if let Ok(root) = parse_descriptor(input) {
            // A parsed tree renders back to text that parses to the same tree
            let rendered = root.to_string();
            assert_eq!(parse_descriptor(&rendered).as_ref(), Ok(&root));

            let _ = DatabaseSpec::classify(&root);
        }
    }
});
