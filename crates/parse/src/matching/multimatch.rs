// Copyright (C) 2025 Ryan Daum <ryan.daum@gmail.com> This program is free
// software: you can redistribute it and/or modify it under the terms of the GNU
// General Public License as published by the Free Software Foundation, version
// 3.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with
// this program. If not, see <https://www.gnu.org/licenses/>.
//

//! Ranked name matching with ordinal selection: "2 sword", "second sword",
//! and "2nd sword" all pick the second of several swords.

use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use strsim::damerau_levenshtein;

use crate::matching::{ObjId, SearchOutcome};

/// Error type for ordinal parsing failures
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("Failed to parse ordinal")]
pub struct OrdinalParseError;

lazy_static! {
    /// Bare-number multimatch prefix: "2 sword" means the second sword.
    static ref NUMBER_PREFIX: Regex =
        Regex::new(r"^(?P<number>[0-9]+) (?P<name>.*)$").expect("static multimatch regex");
}

/// Simple ordinals - just use a lookup table that returns the correct value directly
fn find_ordinal_value(word: &str) -> Option<usize> {
    match word.to_lowercase().as_str() {
        "first" => Some(1),
        "second" => Some(2),
        "third" => Some(3),
        "fourth" => Some(4),
        "fifth" => Some(5),
        "sixth" => Some(6),
        "seventh" => Some(7),
        "eighth" => Some(8),
        "ninth" => Some(9),
        "tenth" => Some(10),
        "eleventh" => Some(11),
        "twelfth" => Some(12),
        "thirteenth" => Some(13),
        "fourteenth" => Some(14),
        "fifteenth" => Some(15),
        "sixteenth" => Some(16),
        "seventeenth" => Some(17),
        "eighteenth" => Some(18),
        "nineteenth" => Some(19),
        "twenty" | "twentieth" => Some(20),
        "thirty" | "thirtieth" => Some(30),
        "forty" | "fortieth" => Some(40),
        "fifty" | "fiftieth" => Some(50),
        "sixty" | "sixtieth" => Some(60),
        "seventy" | "seventieth" => Some(70),
        "eighty" | "eightieth" => Some(80),
        "ninety" | "ninetieth" => Some(90),
        _ => None,
    }
}

/// Parse an ordinal word, supporting "first", "1st", "1." and compounds
/// like "twenty-first". A bare number is not an ordinal here; that form is
/// handled by [`split_ordinal`] so that objects actually named with digits
/// stay matchable.
pub fn parse_ordinal(word: &str) -> Result<usize, OrdinalParseError> {
    // Split on hyphens for compound ordinals like "twenty-first"
    let tokens: Vec<&str> = word.split('-').collect();
    let mut ordinal_values = Vec::new();

    for token in tokens {
        // Numeric patterns first: "1.", "2.", etc.
        if token.len() > 1 && token.ends_with('.') {
            let num_str = &token[..token.len() - 1];
            if let Ok(num) = num_str.parse::<usize>() {
                ordinal_values.push(num);
                continue;
            }
        }

        if let Some(ordinal) = find_ordinal_value(token) {
            ordinal_values.push(ordinal);
            continue;
        }

        // Numeric ordinals: "1st", "2nd", "3rd", "4th", etc. The suffixes
        // are ASCII, so a token whose last two bytes sit inside a wider
        // character cannot carry one, and splitting there would panic.
        if token.len() > 2 && token.is_char_boundary(token.len() - 2) {
            let (num_part, suffix) = token.split_at(token.len() - 2);
            if matches!(suffix, "st" | "nd" | "rd" | "th")
                && let Ok(num) = num_part.parse::<usize>()
            {
                ordinal_values.push(num);
                continue;
            }
        }

        return Err(OrdinalParseError);
    }

    match ordinal_values.len() {
        0 => Err(OrdinalParseError),
        1 => Ok(ordinal_values[0]),
        // Compound ordinals like "twenty-first" -> 21
        2 => Ok(ordinal_values[0] + ordinal_values[1]),
        _ => Err(OrdinalParseError),
    }
}

/// Peel an ordinal prefix off a search fragment, yielding the ordinal (if
/// any) and the subject to match. "2 sword" and "second sword" both give
/// `(Some(2), "sword")`; "sword" gives `(None, "sword")`. An ordinal of
/// zero is nonsense and treated as no ordinal at all.
#[must_use]
pub fn split_ordinal(fragment: &str) -> (Option<usize>, String) {
    if let Some(captures) = NUMBER_PREFIX.captures(fragment) {
        let number = captures["number"].parse::<usize>().ok();
        if let Some(number) = number
            && number > 0
        {
            return (Some(number), captures["name"].to_string());
        }
    }

    let words: Vec<&str> = fragment.split_whitespace().collect();
    if let Some((first, rest)) = words.split_first()
        && !rest.is_empty()
        && let Ok(ordinal) = parse_ordinal(first)
        && ordinal > 0
    {
        return (Some(ordinal), rest.join(" "));
    }

    (None, fragment.to_string())
}

/// Candidates for one subject, split by how well each object's names fit.
/// An object lands in the single best tier any of its names reaches.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct RankedCandidates {
    pub exact: Vec<ObjId>,
    pub prefix: Vec<ObjId>,
    pub substring: Vec<ObjId>,
    pub fuzzy: Vec<ObjId>,
}

impl RankedCandidates {
    /// The contents of the best non-empty tier.
    #[must_use]
    pub fn best_tier(&self) -> &[ObjId] {
        for tier in [&self.exact, &self.prefix, &self.substring, &self.fuzzy] {
            if !tier.is_empty() {
                return tier;
            }
        }
        &[]
    }

    /// Apply an optional ordinal to the ranking. Without one, the best tier
    /// decides; with one, each tier is tried for an nth member in turn.
    #[must_use]
    pub fn resolve(&self, ordinal: Option<usize>) -> SearchOutcome {
        if let Some(ordinal) = ordinal {
            if ordinal == 0 {
                return SearchOutcome::NoMatch;
            }
            for tier in [&self.exact, &self.prefix, &self.substring, &self.fuzzy] {
                if let Some(oid) = tier.get(ordinal - 1) {
                    return SearchOutcome::One(*oid);
                }
            }
            return SearchOutcome::NoMatch;
        }

        match self.best_tier() {
            [] => SearchOutcome::NoMatch,
            [single] => SearchOutcome::One(*single),
            many => SearchOutcome::Ambiguous(many.to_vec()),
        }
    }
}

#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd)]
enum Tier {
    Exact,
    Prefix,
    Substring,
    Fuzzy,
}

fn classify(subject: &str, name: &str) -> Option<Tier> {
    let name = name.to_lowercase();
    if name == subject {
        return Some(Tier::Exact);
    }
    if name.starts_with(subject) {
        return Some(Tier::Prefix);
    }
    if name.contains(subject) {
        return Some(Tier::Substring);
    }
    // Fuzzy match using Damerau-Levenshtein distance
    let max_distance = if subject.len() <= 3 { 1 } else { 2 };
    if damerau_levenshtein(subject, &name) <= max_distance {
        return Some(Tier::Fuzzy);
    }
    None
}

/// Rank every candidate object against a subject. Matching is
/// case-insensitive; candidate order is preserved within a tier, which is
/// what makes ordinal selection stable.
#[must_use]
pub fn rank_candidates(subject: &str, candidates: &[(ObjId, Vec<String>)]) -> RankedCandidates {
    let subject = subject.to_lowercase();
    let mut ranked = RankedCandidates::default();
    if subject.is_empty() {
        return ranked;
    }

    for (oid, names) in candidates {
        let best = names
            .iter()
            .filter_map(|name| classify(&subject, name))
            .min();
        match best {
            Some(Tier::Exact) => ranked.exact.push(*oid),
            Some(Tier::Prefix) => ranked.prefix.push(*oid),
            Some(Tier::Substring) => ranked.substring.push(*oid),
            Some(Tier::Fuzzy) => ranked.fuzzy.push(*oid),
            None => {}
        }
    }
    ranked
}

/// One row of a "which did you mean?" disambiguation listing.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct MultimatchEntry {
    pub name: String,
    pub aliases: Vec<String>,
    pub info: Option<String>,
}

/// Format disambiguation rows the way the numbered-retry convention wants
/// them: ` 1 sword (blade)` per line, so a player can answer `2 sword`.
/// Callers supply their own leading prompt line.
#[must_use]
pub fn format_multimatch(entries: &[MultimatchEntry]) -> String {
    let mut out = String::new();
    for (number, entry) in entries.iter().enumerate() {
        let aliases = if entry.aliases.is_empty() {
            String::new()
        } else {
            format!(" ({})", entry.aliases.iter().join(", "))
        };
        let info = match &entry.info {
            Some(info) => format!(" {info}"),
            None => String::new(),
        };
        out.push_str(&format!(" {} {}{}{}\n", number + 1, entry.name, aliases, info));
    }
    out
}
