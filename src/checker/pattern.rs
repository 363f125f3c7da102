//! Regex handling for baseline patterns.
//!
//! Every baseline pattern matches from the first character of a value but
//! may leave trailing characters unconsumed. Substitution templates use the
//! `\1` / `\g<name>` back-reference syntax found in existing baselines.

use regex::{Regex, RegexBuilder};

/// A baseline pattern compiled for prefix matching and substitution.
#[derive(Debug, Clone)]
pub struct RulePattern {
    anchored: Regex,
    unanchored: Regex,
}

impl RulePattern {
    /// Compile `pattern`, case-insensitively unless `case_sensitive` is set.
    ///
    /// # Errors
    /// Returns the regex error if the pattern is invalid.
    pub fn compile(pattern: &str, case_sensitive: bool) -> Result<Self, regex::Error> {
        let build = |source: &str| {
            RegexBuilder::new(source)
                .case_insensitive(!case_sensitive)
                .build()
        };
        let unanchored = build(pattern)?;
        let anchored = build(&format!(r"\A(?:{pattern})"))?;
        Ok(Self {
            anchored,
            unanchored,
        })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.unanchored.as_str()
    }

    /// True if the pattern matches `value` starting at position 0.
    #[must_use]
    pub fn matches_prefix(&self, value: &str) -> bool {
        self.anchored.is_match(value)
    }

    /// Replace every non-overlapping match in `value` using `template`.
    #[must_use]
    pub fn substitute(&self, value: &str, template: &SubstitutionTemplate) -> String {
        self.unanchored
            .replace_all(value, template.expansion())
            .into_owned()
    }
}

/// A `present` template translated to the `regex` crate's expansion syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionTemplate {
    expansion: String,
}

impl SubstitutionTemplate {
    /// Translate a template written with backslash references.
    ///
    /// Supported: `\1`..`\99`, `\g<1>`, `\g<name>`, `\n`, `\t`, `\r` and `\\`.
    /// A literal `$` is escaped. Any other backslash sequence is kept as is.
    #[must_use]
    pub fn parse(template: &str) -> Self {
        let mut expansion = String::with_capacity(template.len());
        let mut chars = template.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '$' => expansion.push_str("$$"),
                '\\' => match chars.peek().copied() {
                    Some(d @ '1'..='9') => {
                        chars.next();
                        let mut group = String::from(d);
                        if let Some(next @ '0'..='9') = chars.peek().copied() {
                            chars.next();
                            group.push(next);
                        }
                        expansion.push_str(&format!("${{{group}}}"));
                    }
                    Some('g') => Self::push_named_group(&mut chars, &mut expansion),
                    Some('n') => {
                        chars.next();
                        expansion.push('\n');
                    }
                    Some('t') => {
                        chars.next();
                        expansion.push('\t');
                    }
                    Some('r') => {
                        chars.next();
                        expansion.push('\r');
                    }
                    Some('\\') => {
                        chars.next();
                        expansion.push('\\');
                    }
                    _ => expansion.push('\\'),
                },
                other => expansion.push(other),
            }
        }

        Self { expansion }
    }

    /// Handles `\g<...>`; the leading backslash has been consumed and the
    /// iterator is positioned on `g`.
    fn push_named_group(
        chars: &mut std::iter::Peekable<std::str::Chars<'_>>,
        expansion: &mut String,
    ) {
        let rest: String = chars.clone().collect();
        let group = rest
            .strip_prefix("g<")
            .and_then(|after| after.split_once('>'))
            .map(|(name, _)| name)
            .filter(|name| {
                !name.is_empty() && name.chars().all(|c| c.is_alphanumeric() || c == '_')
            });

        if let Some(name) = group {
            // `g`, `<`, the name and `>`
            for _ in 0..name.chars().count() + 3 {
                chars.next();
            }
            expansion.push_str(&format!("${{{name}}}"));
        } else {
            expansion.push('\\');
        }
    }

    #[must_use]
    pub fn expansion(&self) -> &str {
        &self.expansion
    }
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
