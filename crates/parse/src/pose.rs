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

use serde::{Deserialize, Serialize};

/// Characters that attach a pose directly to the actor's name, with no
/// space in between. `pose 's hat falls off` reads as `Rulan's hat falls
/// off`, not `Rulan 's hat falls off`.
pub const MAGNET_GLYPHS: &[char] = &[
    '®', '©', '°', '·', '~', '@', '-', '\'', '’', ',', ';', ':', '.', '?', '!', '…',
];

/// The name of the actor as seen from inside a pose directive. `try open
/// door` targets the door; `try sing` targets the singer.
pub const SELF_TARGET: &str = "me";

/// What a pose line asked for: possibly an action attempt on some target,
/// and possibly free-form pose text, in the shape the message layer wants
/// it (leading space or magnet attachment already decided).
#[derive(Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub struct PoseDirective {
    /// Verb of an embedded `verb [target]::pose` attempt, or `None` when
    /// the line is pose text alone.
    pub verb: Option<String>,
    /// Unresolved name fragment of the attempt's target. [`SELF_TARGET`]
    /// when the verb stood alone. `Some` exactly when `verb` is.
    pub target_fragment: Option<String>,
    /// Pose text ready to append to the actor's display name. Empty poses
    /// stay empty; anything else either begins with a space or begins with
    /// a magnet glyph.
    pub pose_text: String,
}

/// Interpret a pose line, optionally as an implicit attempt (the `try`
/// form, where `try open door` means `open door::` with no pose text).
///
/// A `::` splits the line into a verb/target head and pose text, but only
/// when the head is one token (verb, targeting the actor) or two (verb and
/// target). Anything else, `::` included, is ordinary pose text. Never
/// fails; the worst input is just a strange pose.
#[must_use]
pub fn resolve_pose(args: &str, implicit_try: bool) -> PoseDirective {
    let mut line = args.to_string();
    if implicit_try {
        line.push_str("::");
    }

    if let Some((head, pose)) = line.split_once("::") {
        let tokens: Vec<&str> = head.split_whitespace().collect();
        match tokens.as_slice() {
            [verb] => return directive(verb, SELF_TARGET, pose),
            [verb, target] => return directive(verb, target, pose),
            // Zero or too many head tokens: the "::" was not a directive.
            _ => {}
        }
    }

    PoseDirective {
        verb: None,
        target_fragment: None,
        pose_text: with_magnet_spacing(args),
    }
}

fn directive(verb: &str, target: &str, pose: &str) -> PoseDirective {
    PoseDirective {
        verb: Some(verb.to_string()),
        target_fragment: Some(target.to_string()),
        pose_text: with_magnet_spacing(pose),
    }
}

/// Prefix a space unless the text is empty or leads with a magnet glyph,
/// in which case it is kept exactly as typed.
fn with_magnet_spacing(text: &str) -> String {
    match text.chars().next() {
        None => String::new(),
        Some(first) if MAGNET_GLYPHS.contains(&first) => text.to_string(),
        Some(_) => format!(" {}", text.trim()),
    }
}
