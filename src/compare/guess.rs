//! Package-name guessing from file names.

/// Name that is never reported as a missing package.
pub const RUNTIME_NAME: &str = "python";

/// Guess the owning package of a file or directory name.
///
/// The name is cut at the first `-` or `.`, whichever comes first, which
/// strips version and extension suffixes. Names without either separator
/// are returned unchanged.
///
/// ```
/// use pycomp::compare::guess_package;
///
/// assert_eq!(guess_package("numpy-1.21.0.tar.gz"), "numpy");
/// assert_eq!(guess_package("zope.interface-4.0"), "zope");
/// assert_eq!(guess_package("pip"), "pip");
/// ```
pub fn guess_package(name: &str) -> &str {
    let end = [name.find('-'), name.find('.')]
        .into_iter()
        .flatten()
        .min()
        .unwrap_or(name.len());
    &name[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_version_and_extension() {
        assert_eq!(guess_package("numpy-1.21.0.tar.gz"), "numpy");
    }

    #[test]
    fn strips_extension() {
        assert_eq!(guess_package("requests.py"), "requests");
    }

    #[test]
    fn bare_name_is_unchanged() {
        assert_eq!(guess_package("pip"), "pip");
    }

    #[test]
    fn earliest_separator_wins() {
        assert_eq!(guess_package("zope.interface-4.0"), "zope");
        assert_eq!(guess_package("ruamel-yaml.clib"), "ruamel");
    }

    #[test]
    fn leading_separator_gives_empty_guess() {
        assert_eq!(guess_package(".hidden"), "");
        assert_eq!(guess_package("-x"), "");
    }

    #[test]
    fn empty_name() {
        assert_eq!(guess_package(""), "");
    }

    #[test]
    fn multibyte_names_are_cut_on_char_boundaries() {
        assert_eq!(guess_package("paquet-é.1"), "paquet");
        assert_eq!(guess_package("ünïcode.py"), "ünïcode");
    }
}
