//! Matching of a single ignore pattern against a relative path
//!
//! Patterns come in two flavours. Without `**` a pattern matches when it
//! globs the whole relative path, when the path ends with it, or when it
//! names a directory component somewhere inside the path. With `**` the
//! pattern and the path are compared segment by segment and `**` stands for
//! zero or more whole segments.

use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

use glob::{MatchOptions, Pattern};

/// Separator used in relative paths and patterns.
pub const SEPARATOR: char = '/';

/// Pattern segment matching zero or more path segments.
pub const RECURSIVE_WILDCARD: &str = "**";

const GLOB_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Check whether `path` matches `pattern`.
///
/// `is_dir` is accepted for parity with the walker's call site but does not
/// change the result: directory-only patterns lose their trailing slash when
/// loaded.
pub fn matches(path: &str, pattern: &str, _is_dir: bool) -> bool {
    if pattern.contains(RECURSIVE_WILDCARD) {
        let path_segments: Vec<&str> = path.split(SEPARATOR).collect();
        let pattern_segments: Vec<&str> = pattern.split(SEPARATOR).collect();
        return segments_match(&path_segments, &pattern_segments);
    }

    if glob_match(pattern, path) {
        return true;
    }

    // "build" matches "build", "src/build" and "build/out.bin" alike
    path.ends_with(pattern) || path.contains(&format!("{pattern}{SEPARATOR}"))
}

/// Match a shell glob against `text`.
///
/// The syntax is the classic one: `*`, `?`, `[a-z]`, `[^a-z]` for a negated
/// class, and `\` to escape the next character. `*` and `?` never match the
/// separator. A malformed pattern matches nothing.
pub fn glob_match(pattern: &str, text: &str) -> bool {
    translate(pattern)
        .and_then(|p| Pattern::new(&p).ok())
        .is_some_and(|p| p.matches_with(text, GLOB_OPTIONS))
}

/// Rewrite a classic glob into `glob` crate syntax.
///
/// Returns `None` when the pattern is malformed or can never match.
fn translate(pattern: &str) -> Option<String> {
    let mut out = String::with_capacity(pattern.len());
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            // Consecutive stars mean the same as one; `glob` rejects `a**`
            '*' => {
                while chars.next_if_eq(&'*').is_some() {}
                out.push('*');
            }
            '?' => out.push('?'),
            '\\' => push_literal(&mut out, chars.next()?),
            '[' => CharClass::parse(&mut chars)?.write(&mut out)?,
            _ => out.push(c),
        }
    }

    Some(out)
}

fn push_literal(out: &mut String, c: char) {
    if matches!(c, '*' | '?' | '[' | ']') {
        out.push('[');
        out.push(c);
        out.push(']');
    } else {
        out.push(c);
    }
}

/// A bracket expression, normalised so it can be re-emitted for `glob`.
///
/// `glob` reads `]` as a member only in first position, `-` only where it
/// cannot form a range, and a leading `!` as negation. Those three
/// characters are therefore kept as flags and placed explicitly on output.
#[derive(Debug, Default)]
struct CharClass {
    negated: bool,
    ranges: Vec<(char, char)>,
    singles: Vec<char>,
    close_bracket: bool,
    bang: bool,
    dash: bool,
}

impl CharClass {
    /// Parse the class body following a `[`, up to and including its `]`.
    fn parse(chars: &mut Peekable<Chars<'_>>) -> Option<Self> {
        let mut class = CharClass {
            negated: chars.next_if_eq(&'^').is_some(),
            ..Default::default()
        };

        let mut empty = true;
        loop {
            if !empty && chars.next_if_eq(&']').is_some() {
                return Some(class);
            }
            let lo = class_char(chars)?;
            let hi = if chars.next_if_eq(&'-').is_some() {
                class_char(chars)?
            } else {
                lo
            };
            class.add_range(lo, hi);
            empty = false;
        }
    }

    fn add_range(&mut self, mut lo: char, mut hi: char) {
        // Peel `]`, `-` and `!` off the ends so no range starts or ends
        // with a character `glob` would read structurally
        if lo < hi && matches!(lo, ']' | '-' | '!') {
            self.add_single(lo);
            lo = step(lo, 1);
        }
        if lo < hi && hi == ']' {
            self.add_single(hi);
            hi = step(hi, -1);
        }

        match lo.cmp(&hi) {
            Ordering::Less => self.ranges.push((lo, hi)),
            Ordering::Equal => self.add_single(lo),
            // Reversed ranges match nothing
            Ordering::Greater => {}
        }
    }

    fn add_single(&mut self, c: char) {
        match c {
            ']' => self.close_bracket = true,
            '!' => self.bang = true,
            '-' => self.dash = true,
            _ => self.singles.push(c),
        }
    }

    /// Append the class to `out`. Returns `None` for a class that can never
    /// match anything.
    fn write(&self, out: &mut String) -> Option<()> {
        let mut body = String::new();
        if self.close_bracket {
            body.push(']');
        }
        for &(lo, hi) in &self.ranges {
            body.push(lo);
            body.push('-');
            body.push(hi);
        }
        body.extend(&self.singles);
        if self.bang {
            body.push('!');
        }
        if self.dash {
            body.push('-');
        }

        match (self.negated, body.as_str()) {
            (false, "") => return None,
            (true, "") => out.push('?'),
            (false, "!") => out.push('!'),
            (false, "!-") => out.push_str("[-!]"),
            (negated, body) => {
                out.push('[');
                if negated {
                    out.push('!');
                }
                out.push_str(body);
                out.push(']');
            }
        }
        Some(())
    }
}

/// Next member of a bracket expression. Unescaped `-` and `]` are malformed
/// here.
fn class_char(chars: &mut Peekable<Chars<'_>>) -> Option<char> {
    match chars.next()? {
        '-' | ']' => None,
        '\\' => chars.next(),
        c => Some(c),
    }
}

/// Shift an ASCII punctuation character by one code point.
fn step(c: char, delta: i8) -> char {
    char::from((c as u8).wrapping_add_signed(delta))
}

/// Segment-wise match where a `**` segment consumes zero or more path segments.
///
/// `table[i][j]` records whether `path[i..]` matches `pattern[j..]`; it is
/// filled from the ends backwards so every cell is computed once.
fn segments_match(path: &[&str], pattern: &[&str]) -> bool {
    let cols = pattern.len() + 1;
    let cell = |i: usize, j: usize| i * cols + j;
    let mut table = vec![false; (path.len() + 1) * cols];

    // Both exhausted
    table[cell(path.len(), pattern.len())] = true;

    // Path exhausted: only trailing `**` segments may remain
    for j in (0..pattern.len()).rev() {
        table[cell(path.len(), j)] =
            pattern[j] == RECURSIVE_WILDCARD && table[cell(path.len(), j + 1)];
    }

    // Pattern exhausted with path remaining stays false
    for i in (0..path.len()).rev() {
        for j in (0..pattern.len()).rev() {
            table[cell(i, j)] = if pattern[j] == RECURSIVE_WILDCARD {
                table[cell(i + 1, j)] || table[cell(i, j + 1)] || table[cell(i + 1, j + 1)]
            } else {
                glob_match(pattern[j], path[i]) && table[cell(i + 1, j + 1)]
            };
        }
    }

    table[cell(0, 0)]
}
