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

//! Front door of the social layer: resolve the typed alias, parse the
//! rest, and hand off to the command it names.

use murk_parse::{MAGNET_GLYPHS, parse};
use tracing::debug;

use crate::{
    broadcast::{Audience, Broadcast, MessageKind},
    context::{CommandContext, CommandOutput, SocialError},
    ooc, pose, say, spoof,
};

/// Which command family an alias lands in.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
enum Route {
    Say,
    Pose,
    Ooc,
    Spoof,
}

/// Word aliases, longest first so `spoof` never half-matches as `sp`.
const WORD_ALIASES: &[(&str, Route)] = &[
    ("spoof", Route::Spoof),
    ("emote", Route::Pose),
    ("pose", Route::Pose),
    ("say", Route::Say),
    ("ooc", Route::Ooc),
    ("try", Route::Pose),
    ("sp", Route::Spoof),
];

/// Run one line of player input through the social commands.
///
/// The line's leading token picks the command; everything after it goes to
/// the MUX parser under the alias actually typed, which some commands
/// branch on (`try`, `.`). Blank input produces no output at all; an
/// unrecognized command produces the traditional shrug.
#[tracing::instrument(skip(ctx))]
pub fn dispatch(ctx: &CommandContext, line: &str) -> Result<CommandOutput, SocialError> {
    let input = line.trim_start();
    if input.is_empty() {
        return Ok(CommandOutput::none());
    }

    let Some((route, name, rest)) = resolve_alias(input) else {
        debug!("unmatched command");
        return Ok(CommandOutput::of(Broadcast::new(
            Audience::ActorOnly,
            MessageKind::System,
            "Huh?  (Type \"help\" for help.)".to_string(),
        )));
    };

    debug!(command = %name, "dispatching");
    let parsed = parse(&name, rest);
    match route {
        Route::Say => say::say(ctx, &parsed),
        Route::Pose => pose::pose(ctx, &parsed),
        Route::Ooc => ooc::ooc(ctx, &parsed),
        Route::Spoof => spoof::spoof(ctx, &parsed),
    }
}

/// Match the leading alias. Single-character aliases bind to whatever
/// follows with no separator; word aliases end at whitespace, a switch
/// slash, or the end of input. The pose family also accepts a magnet
/// glyph directly against the name (`pose's hat tips`).
fn resolve_alias(input: &str) -> Option<(Route, String, &str)> {
    let first = input.chars().next()?;
    let single = match first {
        '"' | '\'' => Some(Route::Say),
        ':' | ';' => Some(Route::Pose),
        '_' => Some(Route::Ooc),
        '.' => Some(Route::Spoof),
        _ => None,
    };
    if let Some(route) = single {
        return Some((route, first.to_string(), &input[first.len_utf8()..]));
    }

    for (alias, route) in WORD_ALIASES {
        if input.len() < alias.len()
            || !input.is_char_boundary(alias.len())
            || !input[..alias.len()].eq_ignore_ascii_case(alias)
        {
            continue;
        }
        let rest = &input[alias.len()..];
        let bound_ok = match rest.chars().next() {
            None => true,
            Some(c) if c.is_whitespace() || c == '/' => true,
            Some(c) => *route == Route::Pose && MAGNET_GLYPHS.contains(&c),
        };
        if bound_ok {
            return Some((*route, alias.to_string(), rest));
        }
    }
    None
}
