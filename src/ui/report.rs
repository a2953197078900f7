//! Report formatters.
//!
//! Formatters render an [`AggregateResult`] to any writer, so the CLI can
//! target stdout and tests can target a buffer.

use std::io::Write;
use std::path::Path;

use crate::compare::{AggregateResult, ComparisonResult, Side};

use super::output::OutputMode;
use super::theme::PycompTheme;

/// Width of the separator rules.
const RULE_WIDTH: usize = 60;

/// Trait for formatting comparison output.
pub trait ReportFormatter {
    /// Format the aggregate result to the given writer.
    fn format<W: Write + ?Sized>(
        &self,
        result: &AggregateResult,
        writer: &mut W,
    ) -> std::io::Result<()>;
}

/// Formats results as indented text with `=` rules.
pub struct HumanFormatter {
    theme: PycompTheme,
    mode: OutputMode,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(theme: PycompTheme, mode: OutputMode) -> Self {
        Self { theme, mode }
    }

    fn rule<W: Write + ?Sized>(&self, writer: &mut W) -> std::io::Result<()> {
        writeln!(writer, "{}", self.theme.rule.apply_to("=".repeat(RULE_WIDTH)))
    }

    fn format_pair<W: Write + ?Sized>(
        &self,
        result: &ComparisonResult,
        writer: &mut W,
    ) -> std::io::Result<()> {
        let reference = result.reference().display();
        let candidate = result.candidate().display();

        writeln!(
            writer,
            "{}",
            self.theme
                .banner
                .apply_to(format!("{} vs {}", reference, candidate))
        )?;
        self.rule(writer)?;

        for diff in result.locations() {
            if diff.is_empty() && !self.mode.shows_unchanged() {
                continue;
            }

            let fill = "=".repeat((RULE_WIDTH - 1).saturating_sub(diff.location.len()));
            writeln!(
                writer,
                "{} {}",
                self.theme.location.apply_to(diff.location),
                self.theme.rule.apply_to(fill)
            )?;

            for side in [Side::Reference, Side::Candidate] {
                let names = diff.only_in(side);
                if names.is_empty() {
                    continue;
                }
                let style = match side {
                    Side::Reference => &self.theme.reference,
                    Side::Candidate => &self.theme.candidate,
                };
                writeln!(writer, "\tjust in {}:", result.root(side).display())?;
                for name in names {
                    writeln!(writer, "\t\t{}", style.apply_to(name))?;
                }
            }
        }

        self.rule(writer)?;

        for side in [Side::Reference, Side::Candidate] {
            let missing = result.missing_from(side);
            if missing.is_empty() {
                continue;
            }
            self.missing_block(result.root(side), missing.iter(), writer)?;
        }

        Ok(())
    }

    fn missing_block<'a, W: Write + ?Sized>(
        &self,
        root: &Path,
        names: impl Iterator<Item = &'a String>,
        writer: &mut W,
    ) -> std::io::Result<()> {
        // Dot-names guess to an empty string; there is nothing to print for them.
        let joined: Vec<String> = names
            .filter(|n| !n.is_empty())
            .map(|n| self.theme.guess.apply_to(n).to_string())
            .collect();
        if joined.is_empty() {
            return Ok(());
        }

        writeln!(
            writer,
            "missing from {}: (best guess of package name)",
            root.display()
        )?;
        writeln!(writer, "\t{}", joined.join(" "))
    }
}

impl ReportFormatter for HumanFormatter {
    fn format<W: Write + ?Sized>(
        &self,
        result: &AggregateResult,
        writer: &mut W,
    ) -> std::io::Result<()> {
        self.rule(writer)?;
        for comparison in result.comparisons() {
            self.format_pair(comparison, writer)?;
        }

        if result.comparisons().len() > 1 && !result.ref_missing().is_empty() {
            self.rule(writer)?;
            writeln!(
                writer,
                "{}",
                self.theme
                    .banner
                    .apply_to(format!("{} vs all", result.reference().display()))
            )?;
            self.missing_block(result.reference(), result.ref_missing().iter(), writer)?;
        }

        Ok(())
    }
}

/// Formats results as pretty-printed JSON.
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format<W: Write + ?Sized>(
        &self,
        result: &AggregateResult,
        writer: &mut W,
    ) -> std::io::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, result)?;
        writeln!(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::compare_all;
    use std::fs;
    use tempfile::TempDir;

    fn fixture() -> (TempDir, TempDir) {
        let reference = TempDir::new().unwrap();
        let candidate = TempDir::new().unwrap();
        fs::create_dir_all(reference.path().join("bin")).unwrap();
        fs::create_dir_all(reference.path().join("lib/python2.7/site-packages")).unwrap();
        fs::write(reference.path().join("bin/idle"), "").unwrap();
        fs::create_dir_all(candidate.path().join("lib/python2.7/site-packages/yaml")).unwrap();
        (reference, candidate)
    }

    fn render<F: ReportFormatter>(formatter: &F, result: &AggregateResult) -> String {
        let mut buf = Vec::<u8>::new();
        formatter.format(result, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn human_lists_unique_names_and_guesses() {
        let (reference, candidate) = fixture();
        let result = compare_all(&[reference.path(), candidate.path()]).unwrap();
        let text = render(
            &HumanFormatter::new(PycompTheme::plain(), OutputMode::Normal),
            &result,
        );

        assert!(text.contains(&format!(
            "{} vs {}",
            reference.path().display(),
            candidate.path().display()
        )));
        assert!(text.contains(&format!("bin {}", "=".repeat(56))));
        assert!(text.contains(&format!("\tjust in {}:\n\t\tidle\n", reference.path().display())));
        assert!(text.contains(&format!(
            "missing from {}: (best guess of package name)\n\tyaml\n",
            reference.path().display()
        )));
        assert!(text.contains(&format!(
            "missing from {}: (best guess of package name)\n\tidle\n",
            candidate.path().display()
        )));
    }

    #[test]
    fn human_normal_skips_unchanged_locations() {
        let (reference, candidate) = fixture();
        let result = compare_all(&[reference.path(), candidate.path()]).unwrap();

        let normal = render(
            &HumanFormatter::new(PycompTheme::plain(), OutputMode::Normal),
            &result,
        );
        assert!(!normal.contains("conda "));

        let verbose = render(
            &HumanFormatter::new(PycompTheme::plain(), OutputMode::Verbose),
            &result,
        );
        assert!(verbose.contains("conda "));
        assert!(verbose.contains("psl_mod "));
    }

    #[test]
    fn human_summarises_ref_missing_across_candidates() {
        let (reference, candidate) = fixture();
        let other = TempDir::new().unwrap();
        fs::create_dir_all(other.path().join("lib/python2.7/site-packages/six")).unwrap();

        let result =
            compare_all(&[reference.path(), candidate.path(), other.path()]).unwrap();
        let text = render(
            &HumanFormatter::new(PycompTheme::plain(), OutputMode::Quiet),
            &result,
        );
        assert!(text.contains(&format!("{} vs all", reference.path().display())));
        assert!(text.contains("\tsix yaml\n"));
    }

    #[test]
    fn human_skips_empty_guesses() {
        let (reference, candidate) = fixture();
        fs::create_dir_all(reference.path().join("lib/python2.7/site-packages/.cache")).unwrap();
        fs::create_dir_all(reference.path().join("lib/python2.7/site-packages/zmq")).unwrap();

        let result = compare_all(&[reference.path(), candidate.path()]).unwrap();
        let text = render(
            &HumanFormatter::new(PycompTheme::plain(), OutputMode::Quiet),
            &result,
        );
        assert!(text.contains(&format!(
            "missing from {}: (best guess of package name)\n\tidle zmq\n",
            candidate.path().display()
        )));
    }

    #[test]
    fn human_omits_block_with_only_empty_guesses() {
        let reference = TempDir::new().unwrap();
        let candidate = TempDir::new().unwrap();
        fs::create_dir_all(reference.path().join("lib/python2.7/site-packages/.cache")).unwrap();
        fs::create_dir_all(candidate.path().join("lib/python2.7/site-packages")).unwrap();

        let result = compare_all(&[reference.path(), candidate.path()]).unwrap();
        let text = render(
            &HumanFormatter::new(PycompTheme::plain(), OutputMode::Quiet),
            &result,
        );
        assert!(text.contains("\t\t.cache\n"));
        assert!(!text.contains("missing from"));
    }

    #[test]
    fn json_is_parseable() {
        let (reference, candidate) = fixture();
        let result = compare_all(&[reference.path(), candidate.path()]).unwrap();
        let text = render(&JsonFormatter::new(), &result);

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["ref_missing"], serde_json::json!(["yaml"]));
        let pair = &value["comparisons"][0];
        assert_eq!(pair["missing_from_candidate"], serde_json::json!(["idle"]));
        assert_eq!(pair["locations"][1]["location"], "bin");
        assert_eq!(pair["locations"][1]["reference_only"], serde_json::json!(["idle"]));
    }
}
