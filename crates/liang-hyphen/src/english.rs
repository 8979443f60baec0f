//! A miniature English dictionary for tests, docs and demos.
//!
//! A small subset in the style of `hyph-en-us.tex`. Enough for common test
//! words; production use should load a full pattern set.

use crate::hyphenator::Hyphenator;

/// English patterns in TeX notation, whitespace separated.
pub const ENGLISH_PATTERNS_MINI: &str = "
    .hy3ph he2n hena4 hen5at 1na n2at 1tio 2io o2n
    m5pu pu2t put3er o1j 1je
    4ism. 4ist. 3ful. 3less. 3ous. 3ive.
    1ba 1be 1bi 1bo 1bu 1ca 1ce 1ci 1co 1cu 1da 1de 1di 1do 1du
    1fa 1fe 1fi 1fo 1fu 1ga 1ge 1gi 1go 1gu
    1la 1le 1li 1lo 1lu 1ma 1me 1mi 1mo 1mu
    1pa 1pe 1pi 1po 1pu 1ra 1re 1ri 1ro 1ru
    1sa 1se 1si 1so 1su 1ta 1te 1ti 1to 1tu
    1va 1ve 1vi 1vo 1vu
    2b1b 2c1c 2d1d 2f1f 2g1g 2l1l 2m1m 2n1n 2p1p 2r1r 2s1s 2t1t
    ch2 ph2 sh2 th2 wh2 ck2
    a2l1t ex1 1tic 2ci2o ous1 s2tr
    .pre1 .re1 .un1 .in1 .dis1
";

/// English words whose hyphenation deviates from the patterns.
pub const ENGLISH_EXCEPTIONS_MINI: &str = "
    as-so-ciate as-so-ciates dec-li-na-tion oblig-a-tory phil-an-thropic
    present presents project projects reci-procity ta-ble
";

/// Build the miniature English dictionary.
#[must_use]
pub fn english_mini() -> Hyphenator {
    // Every built-in token is checked by `every_builtin_token_parses`.
    Hyphenator::new(ENGLISH_PATTERNS_MINI, ENGLISH_EXCEPTIONS_MINI)
        .expect("built-in English patterns are well-formed")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exception::parse_exception;
    use crate::pattern::Pattern;

    #[test]
    fn every_builtin_token_parses() {
        for token in ENGLISH_PATTERNS_MINI.split_whitespace() {
            assert!(Pattern::parse(token).is_ok(), "pattern {token:?}");
        }
        for token in ENGLISH_EXCEPTIONS_MINI.split_whitespace() {
            assert!(parse_exception(token).is_ok(), "exception {token:?}");
        }
    }

    #[test]
    fn english_mini_loads() {
        let h = english_mini();
        assert_eq!(h.pattern_count(), 109);
        assert_eq!(h.exception_count(), 11);
    }

    #[test]
    fn english_mini_words() {
        let h = english_mini();
        let cases = [
            ("hyphenation", "hy-phen-ation"),
            ("hyphenate", "hy-phen-ate"),
            ("project", "project"),
            ("associate", "as-so-ciate"),
            ("table", "ta-ble"),
            ("computer", "com-put-er"),
            ("pattern", "pat-tern"),
            ("butter", "but-ter"),
            ("algorithm", "al-go-rithm"),
            ("rhythm", "rhythm"),
        ];
        for (word, expected) in cases {
            assert_eq!(h.hyphenate_word_as_string(word), expected, "{word}");
        }
    }

    #[test]
    fn english_mini_word_final_breaks() {
        let h = english_mini();
        assert_eq!(h.hyphenate_word("index"), ["in", "dex", ""]);
        assert_eq!(h.hyphenate_word("apex"), ["a", "pex", ""]);
        assert_eq!(h.hyphenate_word("famous"), ["fa", "m", "ous", ""]);
        assert_eq!(h.with_margins(1, 1).hyphenate_word("index"), ["in", "dex"]);
    }

    #[test]
    fn english_mini_standard_margins() {
        let h = english_mini().with_margins(2, 3);
        assert_eq!(h.hyphenate_word("computer"), ["com", "puter"]);
        assert_eq!(h.hyphenate_word("hyphenation"), ["hy", "phen", "ation"]);
    }
}
