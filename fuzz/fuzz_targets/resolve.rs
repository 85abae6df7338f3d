//! Fuzz target for URL resolution.
//!
//! Resolution must accept any input without panicking, always echo the input
//! and never report endpoints for a failed URL.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_resolve
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use tnsurl_core::resolve;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let info = resolve(Some(input));
        assert_eq!(info.source_text(), input);

        if !info.is_complete() {
            assert!(info.endpoints().is_empty());
            assert!(info.database_id().is_empty());
            assert!(info.failure().is_some());
        }

        // Same input, same answer.
        assert_eq!(resolve(Some(input)), info);
    }
});
