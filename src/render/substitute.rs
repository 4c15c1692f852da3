// src/render/substitute.rs

//! Single-pass token substitution.
//!
//! All tokens are matched in one left-to-right scan of the template, and the
//! longest token wins where several start at the same position. Replacement
//! values are copied verbatim and never scanned again, so a value that happens
//! to contain another token's text is left alone.

use regex::{Captures, Regex};

use crate::errors::{Error, Result};

/// Ordered mapping from placeholder token to replacement value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitutions {
    entries: Vec<(String, String)>,
}

impl Substitutions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `token` to `value`, replacing any earlier value for that token.
    pub fn insert(&mut self, token: impl Into<String>, value: impl ToString) {
        let token = token.into();
        let value = value.to_string();
        match self.entries.iter_mut().find(|(t, _)| *t == token) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((token, value)),
        }
    }

    pub fn with(mut self, token: impl Into<String>, value: impl ToString) -> Self {
        self.insert(token, value);
        self
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(t, _)| t == token)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(t, v)| (t.as_str(), v.as_str()))
    }

    /// Alternation of all tokens, longest first. `None` if there are none.
    fn matcher(&self) -> Result<Option<Regex>> {
        let mut tokens: Vec<&str> = self
            .entries
            .iter()
            .map(|(t, _)| t.as_str())
            .filter(|t| !t.is_empty())
            .collect();
        if tokens.is_empty() {
            return Ok(None);
        }
        tokens.sort_by(|a, b| b.len().cmp(&a.len()));

        let pattern = tokens
            .iter()
            .map(|t| regex::escape(t))
            .collect::<Vec<_>>()
            .join("|");
        let re = Regex::new(&pattern).map_err(Error::from)?;
        Ok(Some(re))
    }
}

/// Replace every token of `substitutions` found in `template`.
///
/// Text that is not a known token, including unknown `@PLACEHOLDERS`, is
/// copied unchanged.
pub fn render(template: &str, substitutions: &Substitutions) -> Result<String> {
    let Some(re) = substitutions.matcher()? else {
        return Ok(template.to_string());
    };

    let rendered = re.replace_all(template, |caps: &Captures| {
        substitutions
            .get(&caps[0])
            .unwrap_or(&caps[0])
            .to_string()
    });
    Ok(rendered.into_owned())
}
