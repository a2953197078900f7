//! Segment-wise glob expansion.
//!
//! Each pattern segment matches exactly one path component. Supported
//! wildcards are `?`, `*`, `[seq]` and `[!seq]`. Wildcard segments skip
//! hidden entries unless the segment itself starts with a dot.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use regex::Regex;

use crate::error::{PycompError, Result};

/// One compiled path segment.
#[derive(Debug, Clone)]
pub enum Segment {
    /// No wildcard characters; matched by existence.
    Literal(String),
    /// Compiled wildcard pattern.
    Wildcard { source: String, regex: Regex },
}

impl Segment {
    /// Compile a single path segment.
    pub fn parse(pattern: &str) -> Result<Self> {
        if !has_magic(pattern) {
            return Ok(Self::Literal(pattern.to_string()));
        }

        let regex = Regex::new(&translate(pattern)).map_err(|e| PycompError::InvalidPattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;

        Ok(Self::Wildcard {
            source: pattern.to_string(),
            regex,
        })
    }

    /// Check whether a directory entry name matches this segment.
    pub fn matches(&self, name: &str) -> bool {
        match self {
            Self::Literal(lit) => lit == name,
            Self::Wildcard { source, regex } => {
                if name.starts_with('.') && !source.starts_with('.') {
                    return false;
                }
                regex.is_match(name)
            }
        }
    }
}

/// Check whether a segment contains glob metacharacters.
pub fn has_magic(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

/// Translate a glob segment into an anchored regular expression.
///
/// An unterminated `[` matches itself.
fn translate(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::from("^");
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '*' => out.push_str(".*"),
            '?' => out.push('.'),
            '[' => {
                let mut j = i + 1;
                let negated = chars.get(j) == Some(&'!');
                if negated {
                    j += 1;
                }
                // A `]` right after the opening bracket is a literal member.
                if chars.get(j) == Some(&']') {
                    j += 1;
                }
                while j < chars.len() && chars[j] != ']' {
                    j += 1;
                }
                if j >= chars.len() {
                    out.push_str("\\[");
                    i += 1;
                    continue;
                }

                let start = if negated { i + 2 } else { i + 1 };
                out.push('[');
                if negated {
                    out.push('^');
                }
                for &c in &chars[start..j] {
                    if matches!(c, '\\' | '[' | ']' | '^' | '&' | '~') {
                        out.push('\\');
                    }
                    out.push(c);
                }
                out.push(']');
                i = j;
            }
            c => out.push_str(&regex::escape(&c.to_string())),
        }
        i += 1;
    }

    out.push('$');
    out
}

/// Expand `segments` under `root`, returning every matching path sorted.
///
/// Missing intermediate directories yield no matches rather than an error.
pub fn expand(root: &Path, segments: &[&str]) -> Result<Vec<PathBuf>> {
    let compiled = segments
        .iter()
        .map(|s| Segment::parse(s))
        .collect::<Result<Vec<_>>>()?;

    let mut current = vec![root.to_path_buf()];
    let last = compiled.len().saturating_sub(1);

    for (idx, segment) in compiled.iter().enumerate() {
        let mut next = Vec::new();
        for dir in &current {
            match segment {
                Segment::Literal(name) => {
                    let candidate = dir.join(name);
                    let exists = if idx == last {
                        fs::symlink_metadata(&candidate).is_ok()
                    } else {
                        candidate.is_dir()
                    };
                    if exists {
                        next.push(candidate);
                    }
                }
                Segment::Wildcard { .. } => {
                    for name in list_names(dir)? {
                        if segment.matches(&name) {
                            let candidate = dir.join(&name);
                            if idx == last || candidate.is_dir() {
                                next.push(candidate);
                            }
                        }
                    }
                }
            }
        }
        current = next;
    }

    current.sort();
    Ok(current)
}

/// List the entry names of a directory.
///
/// A directory that vanished or is not a directory lists as empty; any
/// other failure is reported. Names are converted lossily, so non-UTF-8
/// names that differ only in their invalid bytes come back equal.
pub fn list_names(dir: &Path) -> Result<Vec<String>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(PycompError::ReadDir {
                path: dir.to_path_buf(),
                source,
            })
        }
    };

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| PycompError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn literal_segment_has_no_magic() {
        assert!(matches!(
            Segment::parse("site-packages").unwrap(),
            Segment::Literal(_)
        ));
        assert!(!has_magic("lib"));
        assert!(has_magic("python?.?"));
        assert!(has_magic("[ab].py"));
    }

    #[test]
    fn question_mark_matches_one_char() {
        let seg = Segment::parse("python?.?").unwrap();
        assert!(seg.matches("python2.7"));
        assert!(seg.matches("python3.9"));
        assert!(!seg.matches("python3.10"));
        assert!(!seg.matches("python3"));
    }

    #[test]
    fn star_matches_any_run() {
        let seg = Segment::parse("*.py").unwrap();
        assert!(seg.matches("os.py"));
        assert!(!seg.matches(".py.py"));
        assert!(seg.matches("a.b.py"));
        assert!(!seg.matches("os.pyc"));
    }

    #[test]
    fn star_skips_hidden_names() {
        let seg = Segment::parse("*").unwrap();
        assert!(!seg.matches(".hidden"));
        assert!(Segment::parse(".*").unwrap().matches(".hidden"));
    }

    #[test]
    fn regex_metacharacters_are_literal() {
        let seg = Segment::parse("a+b(1)*").unwrap();
        assert!(seg.matches("a+b(1)x"));
        assert!(!seg.matches("aab1x"));
    }

    #[test]
    fn character_classes() {
        let seg = Segment::parse("[ab].py").unwrap();
        assert!(seg.matches("a.py"));
        assert!(!seg.matches("c.py"));

        let neg = Segment::parse("[!ab].py").unwrap();
        assert!(neg.matches("c.py"));
        assert!(!neg.matches("a.py"));
    }

    #[test]
    fn unterminated_class_is_literal() {
        let seg = Segment::parse("[abc*").unwrap();
        assert!(seg.matches("[abc.py"));
        assert!(!seg.matches("a"));

        let neg = Segment::parse("x[!").unwrap();
        assert!(neg.matches("x[!"));
    }

    #[test]
    fn expand_walks_segments() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "lib/python2.7/os.py");
        touch(temp.path(), "lib/python2.7/abc.py");
        touch(temp.path(), "lib/python2.7/README");
        touch(temp.path(), "lib/python3.10/re.py");

        let found = expand(temp.path(), &["lib", "python?.?", "*.py"]).unwrap();
        let names: Vec<_> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["abc.py", "os.py"]);
    }

    #[test]
    fn expand_missing_literal_is_empty() {
        let temp = TempDir::new().unwrap();
        let found = expand(temp.path(), &["pkgs", "*"]).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn expand_does_not_descend_into_files() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "lib/python2.7");

        let found = expand(temp.path(), &["lib", "python?.?", "*.py"]).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn expand_results_are_sorted() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("lib/python3.9")).unwrap();
        fs::create_dir_all(temp.path().join("lib/python2.7")).unwrap();

        let found = expand(temp.path(), &["lib", "python?.?"]).unwrap();
        assert_eq!(
            found,
            vec![
                temp.path().join("lib/python2.7"),
                temp.path().join("lib/python3.9")
            ]
        );
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn list_names_replaces_invalid_utf8() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(OsStr::from_bytes(b"lib\xffz")), "").unwrap();
        fs::write(temp.path().join("plain"), "").unwrap();

        let names = list_names(temp.path()).unwrap();
        assert_eq!(names, vec!["lib\u{FFFD}z".to_string(), "plain".to_string()]);
    }

    #[test]
    fn list_names_of_missing_dir_is_empty() {
        let temp = TempDir::new().unwrap();
        assert!(list_names(&temp.path().join("nope")).unwrap().is_empty());
    }
}
