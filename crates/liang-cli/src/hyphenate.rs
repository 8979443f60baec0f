use std::io::Write;

use clap::Args;
use serde::Serialize;

use crate::dictionary::DictionaryArgs;
use crate::error::{CliError, Result};

#[derive(Debug, Clone, Args)]
pub struct HyphenateArgs {
    #[command(flatten)]
    pub dictionary: DictionaryArgs,

    /// Text placed between pieces.
    #[arg(long, default_value = "-")]
    pub separator: String,

    /// Emit a JSON array of `{word, pieces}` objects.
    #[arg(long)]
    pub json: bool,

    /// Words to hyphenate.
    #[arg(required = true, value_name = "WORD")]
    pub words: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct HyphenatedWord<'a> {
    pub word: &'a str,
    pub pieces: Vec<&'a str>,
}

pub fn run_hyphenate(args: &HyphenateArgs, out: &mut impl Write) -> Result<()> {
    if args.words.iter().any(|word| word.contains(char::is_whitespace)) {
        return Err(CliError::invalid("words must not contain whitespace"));
    }
    let hyphenator = args.dictionary.load()?;

    if args.json {
        let report: Vec<HyphenatedWord<'_>> = args
            .words
            .iter()
            .map(|word| HyphenatedWord {
                word,
                pieces: hyphenator.hyphenate_word(word),
            })
            .collect();
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
        return Ok(());
    }

    for word in &args.words {
        writeln!(
            out,
            "{}",
            hyphenator.hyphenate_word_with(word, &args.separator)
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(words: &[&str]) -> HyphenateArgs {
        HyphenateArgs {
            dictionary: DictionaryArgs::default(),
            separator: "-".to_string(),
            json: false,
            words: words.iter().map(|w| w.to_string()).collect(),
        }
    }

    fn render(args: &HyphenateArgs) -> String {
        let mut out = Vec::new();
        run_hyphenate(args, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn plain_output_one_word_per_line() {
        let out = render(&args(&["hyphenation", "project", "associate"]));
        assert_eq!(out, "hy-phen-ation\nproject\nas-so-ciate\n");
    }

    #[test]
    fn custom_separator() {
        let mut a = args(&["hyphenation"]);
        a.separator = "\u{00AD}".to_string();
        assert_eq!(render(&a), "hy\u{00AD}phen\u{00AD}ation\n");
    }

    #[test]
    fn margins_from_flags() {
        let mut a = args(&["computer"]);
        a.dictionary.left_min = Some(2);
        a.dictionary.right_min = Some(3);
        assert_eq!(render(&a), "com-puter\n");
    }

    #[test]
    fn json_output() {
        let mut a = args(&["table", "rhythm"]);
        a.json = true;
        let value: serde_json::Value = serde_json::from_str(&render(&a)).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                {"word": "table", "pieces": ["ta", "ble"]},
                {"word": "rhythm", "pieces": ["rhythm"]}
            ])
        );
    }

    #[test]
    fn whitespace_in_word_is_rejected() {
        let err = run_hyphenate(&args(&["two words"]), &mut Vec::new()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
