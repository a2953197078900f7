//! Path argument expansion.
//!
//! Arguments are expanded the way a shell user expects: `$VAR` and
//! `${VAR}` are replaced from the environment (unknown variables are left
//! as written), then a leading `~` is replaced with the home directory.

use std::path::PathBuf;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Regex for `$name` and `${name}` references.
static VAR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$(?:([A-Za-z0-9_]+)|\{([^}]*)\})").expect("VAR_REGEX must compile")
});

/// Expand environment variables and a leading `~` in a path argument.
pub fn expand_path(arg: &str) -> PathBuf {
    let with_vars = expand_vars_with(arg, |name| std::env::var(name).ok());
    expand_home_with(&with_vars, dirs::home_dir())
}

/// Replace `$name` / `${name}` using `lookup`; unresolved references stay verbatim.
pub fn expand_vars_with<F>(input: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    if !input.contains('$') {
        return input.to_string();
    }

    VAR_REGEX
        .replace_all(input, |caps: &Captures<'_>| {
            let name = caps
                .get(1)
                .or_else(|| caps.get(2))
                .map(|m| m.as_str())
                .unwrap_or_default();
            lookup(name).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Replace a leading `~` or `~/` with `home`.
///
/// `~user` forms and inputs without a home directory are returned unchanged.
pub fn expand_home_with(input: &str, home: Option<PathBuf>) -> PathBuf {
    let Some(rest) = input.strip_prefix('~') else {
        return PathBuf::from(input);
    };
    if !(rest.is_empty() || rest.starts_with('/')) {
        return PathBuf::from(input);
    }

    match home {
        Some(home) => {
            let rest = rest.trim_start_matches('/');
            if rest.is_empty() {
                home
            } else {
                home.join(rest)
            }
        }
        None => PathBuf::from(input),
    }
}
