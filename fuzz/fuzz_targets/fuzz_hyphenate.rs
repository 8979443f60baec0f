#![no_main]

use arbitrary::Arbitrary;
use liang_hyphen::Hyphenator;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct HyphenateInput {
    patterns: Vec<(String, Vec<u8>)>,
    exceptions: Vec<String>,
    word: String,
    left_min: u8,
    right_min: u8,
}

impl HyphenateInput {
    /// Interleave letters with digit weights, e.g. `("abc", [1, 0, 3])` -> `"1ab3c"`.
    fn pattern_text(&self) -> String {
        let mut text = String::new();
        for (letters, levels) in self.patterns.iter().take(64) {
            let mut levels = levels.iter();
            for ch in letters.chars().filter(|c| c.is_alphabetic() || *c == '.').take(8) {
                if let Some(level) = levels.next().map(|l| l % 10).filter(|&l| l > 0) {
                    text.push(char::from(b'0' + level));
                }
                text.push(ch);
            }
            text.push(' ');
        }
        text
    }
}

fuzz_target!(|input: HyphenateInput| {
    if input.word.chars().count() > 64 {
        return;
    }
    let exceptions = input.exceptions.join(" ");
    let Ok(hyphenator) = Hyphenator::new(&input.pattern_text(), &exceptions) else {
        return;
    };
    let hyphenator =
        hyphenator.with_margins(usize::from(input.left_min % 4), usize::from(input.right_min % 4));

    let pieces = hyphenator.hyphenate_word(&input.word);
    assert!(!pieces.is_empty());
    assert_eq!(pieces.concat(), input.word);

    let joined = hyphenator.hyphenate_word_as_string(&input.word);
    assert_eq!(joined.len(), input.word.len() + pieces.len() - 1);
});
