//! Glob matching against bare directory names.
//!
//! Only `*` and `?` are translated; every other character reaches the regex
//! engine untouched, so `.` or `+` in a pattern keep their regex meaning.
//! Patterns are always compared with a directory's name, never its path.

use regex::Regex;

/// Translates a glob into a fully anchored regex.
pub fn glob_to_regex(glob: &str) -> String {
    let regex = glob.replace('*', ".*").replace('?', ".");
    format!("^{}$", regex)
}

fn compile(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(&glob_to_regex(pattern))
}

fn warn_invalid(pattern: &str, err: &regex::Error) {
    log::warn!("⚠️ Invalid ignore pattern '{}': {}", pattern, err);
}

/// Returns true if `name` matches `pattern`. Malformed patterns never match.
pub fn matches(name: &str, pattern: &str) -> bool {
    match compile(pattern) {
        Ok(regex) => regex.is_match(name),
        Err(err) => {
            warn_invalid(pattern, &err);
            false
        }
    }
}

/// Returns true on the first pattern that matches `name`.
pub fn should_ignore(name: &str, patterns: &[String]) -> bool {
    patterns.iter().any(|pattern| matches(name, pattern))
}

/// Ignore patterns compiled once up front.
///
/// Malformed patterns are kept aside in [`IgnoreSet::rejected`] together with
/// the compile error, for the caller to report. Matching gives the same
/// answers as [`should_ignore`] without recompiling per directory.
#[derive(Debug, Clone, Default)]
pub struct IgnoreSet {
    patterns: Vec<Regex>,
    rejected: Vec<(String, regex::Error)>,
}

impl IgnoreSet {
    pub fn new(patterns: &[String]) -> Self {
        let mut set = Self::default();
        for pattern in patterns {
            match compile(pattern) {
                Ok(regex) => set.patterns.push(regex),
                Err(err) => set.rejected.push((pattern.clone(), err)),
            }
        }
        set
    }

    pub fn is_match(&self, name: &str) -> bool {
        self.patterns.iter().any(|regex| regex.is_match(name))
    }

    /// Patterns that failed to compile and will never match.
    pub fn rejected(&self) -> &[(String, regex::Error)] {
        &self.rejected
    }

    /// Emits one warning per rejected pattern.
    pub fn warn_rejected(&self) {
        for (pattern, err) in &self.rejected {
            warn_invalid(pattern, err);
        }
    }
}
