#![no_main]

use liang_hyphen::{Hyphenator, PatternSource};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(source) = PatternSource::parse(text) else {
        return;
    };
    if let Ok(hyphenator) = Hyphenator::from_source(&source) {
        let pieces = hyphenator.hyphenate_word("hyphenation");
        assert_eq!(pieces.concat(), "hyphenation");
    }
});
