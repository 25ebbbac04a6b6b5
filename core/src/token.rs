//! Token classification rules.
//!
//! Every rule here is a plain prefix or character-count test on a single
//! token. Nothing looks at neighbouring tokens: `--cc=clang` is one long flag
//! and a following bare word is always a named argument.

/// Suffix that marks a long flag carrying an inline value (`--name=value`).
pub const VALUE_SEPARATOR: char = '=';

/// Classification of a single command-line token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Starts with `--` (`--debug`, `--cc=clang`, and the bare `--`).
    LongFlag,
    /// Starts with `-` and contains exactly one `-` overall (`-s`, `-ns`).
    Switches,
    /// Starts with `-` but is neither a long flag nor a switch cluster
    /// (for example `-foo-bar`, which has two dashes).
    OtherOption,
    /// Anything not starting with `-`.
    Named,
}

/// Returns `true` if `token` starts with `--`.
pub fn is_long_flag(token: &str) -> bool {
    token.starts_with("--")
}

/// Returns `true` if `token` starts with `-` (single or double dash).
pub fn is_option(token: &str) -> bool {
    token.starts_with('-')
}

/// Counts `-` characters anywhere in `token`, not only the leading ones.
pub fn dash_count(token: &str) -> usize {
    token.matches('-').count()
}

/// Returns `true` if `token` is an option whose only dash is the leading one.
///
/// `-ns` qualifies; `--debug` and `-foo-bar` do not.
pub fn is_switch_cluster(token: &str) -> bool {
    is_option(token) && dash_count(token) == 1
}

/// Classifies a token.
///
/// # Examples
///
/// ```
/// use brew_argv_core::token::{TokenKind, classify};
///
/// assert_eq!(classify("--HEAD"), TokenKind::LongFlag);
/// assert_eq!(classify("-ns"), TokenKind::Switches);
/// assert_eq!(classify("-x-y"), TokenKind::OtherOption);
/// assert_eq!(classify("wget"), TokenKind::Named);
/// ```
pub fn classify(token: &str) -> TokenKind {
    if is_long_flag(token) {
        TokenKind::LongFlag
    } else if is_switch_cluster(token) {
        TokenKind::Switches
    } else if is_option(token) {
        TokenKind::OtherOption
    } else {
        TokenKind::Named
    }
}

/// Returns the inline value of `token` if it starts with `--{name}=`.
///
/// # Examples
///
/// ```
/// use brew_argv_core::token::inline_value;
///
/// assert_eq!(inline_value("--cc=clang", "cc"), Some("clang"));
/// assert_eq!(inline_value("--cc", "cc"), None);
/// assert_eq!(inline_value("--ccache=1", "cc"), None);
/// ```
pub fn inline_value<'a>(token: &'a str, name: &str) -> Option<&'a str> {
    token
        .strip_prefix("--")?
        .strip_prefix(name)?
        .strip_prefix(VALUE_SEPARATOR)
}

/// Derives the single-character switch a long flag falls back to.
///
/// Takes the character at index 2, so `--debug` yields `"d"`. A two-character
/// flag yields the empty string and anything shorter yields `None`.
pub fn derived_switch(flag: &str) -> Option<&str> {
    let mut indices = flag.char_indices().map(|(i, _)| i).skip(2);
    match indices.next() {
        Some(start) => {
            let end = indices.next().unwrap_or(flag.len());
            Some(&flag[start..end])
        }
        None if flag.chars().count() == 2 => Some(""),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dash_count_counts_all_dashes() {
        assert_eq!(dash_count("-s"), 1);
        assert_eq!(dash_count("--debug"), 2);
        assert_eq!(dash_count("-foo-bar"), 2);
        assert_eq!(dash_count("wget"), 0);
    }

    #[test]
    fn test_switch_cluster() {
        assert!(is_switch_cluster("-ns"));
        assert!(is_switch_cluster("-"));
        assert!(!is_switch_cluster("--s"));
        assert!(!is_switch_cluster("-n-s"));
        assert!(!is_switch_cluster("n-s"));
    }

    #[test]
    fn test_classify_bare_double_dash() {
        assert_eq!(classify("--"), TokenKind::LongFlag);
        assert_eq!(classify("-"), TokenKind::Switches);
    }

    #[test]
    fn test_inline_value_empty() {
        assert_eq!(inline_value("--env=", "env"), Some(""));
        assert_eq!(inline_value("--env=a=b", "env"), Some("a=b"));
        assert_eq!(inline_value("-env=std", "env"), None);
    }

    #[test]
    fn test_derived_switch() {
        assert_eq!(derived_switch("--debug"), Some("d"));
        assert_eq!(derived_switch("--s"), Some("s"));
        assert_eq!(derived_switch("--"), Some(""));
        assert_eq!(derived_switch("-"), None);
        assert_eq!(derived_switch(""), None);
    }

    #[test]
    fn test_derived_switch_multibyte() {
        assert_eq!(derived_switch("--ébc"), Some("é"));
    }
}
