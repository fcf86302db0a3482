use std::sync::LazyLock;

use regex::Regex;

use super::{AllowList, ImageList, ImageUrl};

/// A line holding nothing but a listing number, e.g. `"12"` or `"12|  "`.
static LINE_NUMBER_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\|?\s*$").expect("line-number pattern is valid"));

/// A numbered line, capturing everything after the number prefix. The
/// capture stops at line terminators, so a stray `\r` inside the line
/// leaves it unstripped.
static NUMBERED_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]+\|?\s*([^\r\n]+)$").expect("numbered-line pattern is valid")
});

/// Why a source line did not produce an image URL.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    Blank,
    LineNumberOnly,
    HostNotAllowed,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blank => write!(f, "blank"),
            Self::LineNumberOnly => write!(f, "line number only"),
            Self::HostNotAllowed => write!(f, "host not allowed"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based position in the raw text.
    pub line_number: usize,
    /// The line after trimming.
    pub text: String,
    pub reason: SkipReason,
}

/// Parsed image list together with every line that was dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseReport {
    pub images: ImageList,
    pub skipped: Vec<SkippedLine>,
}

/// Parse a line-based listing into image URLs.
///
/// Malformed lines are filtered out silently; an empty result is valid.
pub fn parse(raw: &str, allowed_hosts: &AllowList) -> ImageList {
    parse_with_report(raw, allowed_hosts).images
}

/// Same as [`parse`], additionally recording why each dropped line was skipped.
pub fn parse_with_report(raw: &str, allowed_hosts: &AllowList) -> ParseReport {
    let mut skipped = Vec::new();
    let mut urls = Vec::new();

    for (i, line) in raw.split('\n').enumerate() {
        let line = line.trim();
        let skip = |reason| SkippedLine {
            line_number: i + 1,
            text: line.to_string(),
            reason,
        };

        if line.is_empty() {
            skipped.push(skip(SkipReason::Blank));
            continue;
        }
        if LINE_NUMBER_ONLY.is_match(line) {
            skipped.push(skip(SkipReason::LineNumberOnly));
            continue;
        }

        match ImageUrl::new(strip_line_number(line), allowed_hosts) {
            Some(url) => urls.push(url),
            None => skipped.push(skip(SkipReason::HostNotAllowed)),
        }
    }

    ParseReport {
        images: urls.into_iter().collect(),
        skipped,
    }
}

/// Remove a leading `<digits>[|]<whitespace>` label, if present.
fn strip_line_number(line: &str) -> &str {
    NUMBERED_LINE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map_or(line, |rest| rest.as_str())
}
