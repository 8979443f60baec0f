//! Dictionary self-check: each expected spelling such as `hy-phen-ation` is
//! stripped of its hyphens, hyphenated, and compared.

use std::io::Write;

use clap::Args;

use crate::dictionary::DictionaryArgs;
use crate::error::{CliError, Result};

#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub dictionary: DictionaryArgs,

    /// Expected hyphenations, breaks marked with `-`.
    #[arg(required = true, value_name = "EXPECTED")]
    pub expected: Vec<String>,
}

pub fn run_check(args: &CheckArgs, out: &mut impl Write) -> Result<()> {
    let hyphenator = args.dictionary.load()?;
    let mut failed = 0;

    for expected in &args.expected {
        let word = expected.replace('-', "");
        if word.is_empty() {
            return Err(CliError::invalid(format!(
                "expected hyphenation {expected:?} has no letters"
            )));
        }
        let actual = hyphenator.hyphenate_word_as_string(&word);
        if actual == *expected {
            writeln!(out, "ok    {expected}")?;
        } else {
            failed += 1;
            tracing::warn!(message = "check.mismatch", expected = %expected, actual = %actual);
            writeln!(out, "FAIL  {expected} (got {actual})")?;
        }
    }

    let total = args.expected.len();
    writeln!(out, "{} passed, {failed} failed", total - failed)?;
    if failed > 0 {
        return Err(CliError::CheckFailed { failed, total });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(expected: &[&str]) -> CheckArgs {
        CheckArgs {
            dictionary: DictionaryArgs::default(),
            expected: expected.iter().map(|e| e.to_string()).collect(),
        }
    }

    #[test]
    fn all_matching() {
        let mut out = Vec::new();
        run_check(&args(&["hy-phen-ation", "project", "as-so-ciate"]), &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("ok    hy-phen-ation"));
        assert!(out.ends_with("3 passed, 0 failed\n"));
    }

    #[test]
    fn mismatch_fails_with_exit_one() {
        let mut out = Vec::new();
        let err = run_check(&args(&["ta-ble", "pro-ject"]), &mut out).unwrap_err();
        assert!(matches!(err, CliError::CheckFailed { failed: 1, total: 2 }));
        assert_eq!(err.exit_code(), 1);
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("FAIL  pro-ject (got project)"));
    }

    #[test]
    fn hyphen_only_token_is_invalid() {
        let err = run_check(&args(&["--"]), &mut Vec::new()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
