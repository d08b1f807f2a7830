// Selection of candidate passes.
//
// - Station and satellite are glob patterns matched against the whole name, case sensitive:
//   `*` any run of characters, `?` one character, `[...]` a class (`[^...]` negated).
//   A name without wildcards matches exactly.
// - `start` keeps passes ending on or after it, `end` keeps passes starting on or before it,
//   so a window selects every pass that touches it.

use crate::modules::passes::core::pass_record::PassRecord;
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone)]
enum Matcher {
    Glob(Regex),
    Literal,
}

/// Name pattern with glob wildcards. Serialized as the raw pattern text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct NamePattern {
    raw: String,
    matcher: Matcher,
}

impl NamePattern {
    /// A malformed class such as `[z-a]` makes the whole pattern match literally.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let matcher = match Regex::new(&glob_to_regex(&raw)) {
            Ok(regex) => Matcher::Glob(regex),
            Err(error) => {
                warn!(pattern = %raw, %error, "invalid name pattern, matching literally");
                Matcher::Literal
            }
        };
        Self { raw, matcher }
    }

    pub fn matches(&self, name: &str) -> bool {
        match &self.matcher {
            Matcher::Glob(regex) => regex.is_match(name),
            Matcher::Literal => self.raw == name,
        }
    }
}

impl PartialEq for NamePattern {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for NamePattern {}

impl From<String> for NamePattern {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<&str> for NamePattern {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<NamePattern> for String {
    fn from(pattern: NamePattern) -> Self {
        pattern.raw
    }
}

fn glob_to_regex(glob: &str) -> String {
    let chars: Vec<char> = glob.chars().collect();
    let mut out = String::from("^");
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '*' => out.push_str(".*"),
            '?' => out.push('.'),
            '[' => match class_end(&chars, i) {
                Some(end) => {
                    out.push_str(&class_to_regex(&chars[i + 1..end]));
                    i = end;
                }
                None => out.push_str(r"\["),
            },
            c => out.push_str(&regex::escape(c.encode_utf8(&mut [0; 4]))),
        }
        i += 1;
    }
    out.push('$');
    out
}

// Index of the `]` closing the class opened at `open`. A `]` right after `[` or `[^` is literal.
fn class_end(chars: &[char], open: usize) -> Option<usize> {
    let mut i = open + 1;
    if chars.get(i) == Some(&'^') {
        i += 1;
    }
    if chars.get(i) == Some(&']') {
        i += 1;
    }
    chars[i.min(chars.len())..]
        .iter()
        .position(|&c| c == ']')
        .map(|offset| i + offset)
}

fn class_to_regex(body: &[char]) -> String {
    let mut out = String::from("[");
    let mut rest = body;
    if let Some((&'^', tail)) = rest.split_first() {
        out.push('^');
        rest = tail;
    }
    let mut i = 0;
    while i < rest.len() {
        out.push_str(&regex::escape(rest[i].encode_utf8(&mut [0; 4])));
        if rest.get(i + 1) == Some(&'-') && i + 2 < rest.len() {
            out.push('-');
            out.push_str(&regex::escape(rest[i + 2].encode_utf8(&mut [0; 4])));
            i += 2;
        }
        i += 1;
    }
    out.push(']');
    out
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PassFilter {
    #[serde(default)]
    pub ground_station: Option<NamePattern>,
    #[serde(default)]
    pub satellite: Option<NamePattern>,
    #[serde(default)]
    pub start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end: Option<DateTime<Utc>>,
}

impl PassFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn ground_station(mut self, pattern: impl Into<NamePattern>) -> Self {
        self.ground_station = Some(pattern.into());
        self
    }

    pub fn satellite(mut self, pattern: impl Into<NamePattern>) -> Self {
        self.satellite = Some(pattern.into());
        self
    }

    pub fn between(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.start = Some(start);
        self.end = Some(end);
        self
    }

    pub fn matches(&self, pass: &PassRecord) -> bool {
        self.ground_station
            .as_ref()
            .is_none_or(|gs| gs.matches(&pass.ground_station))
            && self
                .satellite
                .as_ref()
                .is_none_or(|sat| sat.matches(&pass.satellite))
            && self.start.is_none_or(|start| pass.interval.end() >= start)
            && self.end.is_none_or(|end| pass.interval.start() <= end)
    }

    pub fn apply(&self, passes: impl IntoIterator<Item = PassRecord>) -> Vec<PassRecord> {
        passes.into_iter().filter(|pass| self.matches(pass)).collect()
    }
}
