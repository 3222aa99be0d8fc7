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

//! The `say` command: in-character speech, with `/name` substitution so
//! speakers can drop live object names into their sentences.

use murk_parse::ParsedCommand;
use murk_parse::matching::{NOTHING, SearchOutcome};
use murk_render::{RenderMode, RenderRequest, markup, render};
use tracing::warn;

use crate::{
    broadcast::{Audience, Broadcast, MessageKind},
    context::{CommandContext, CommandOutput, Effect, SocialError},
};

/// Words to substitute start with `/`; one of these characters directly
/// after the word is peeled off before the name search and glued back on
/// after, so `/tria.` works the way a sentence wants it to.
const TRAILING_PUNCTUATION: &str = ".,!?";

/// Speak to the room. `say hello` becomes `Rulan says, "hello"`. With
/// `/verb` the argument becomes the actor's new spoken verb instead of
/// speech; with `/ooc` the line is marked out-of-character.
pub fn say(ctx: &CommandContext, parsed: &ParsedCommand) -> Result<CommandOutput, SocialError> {
    let args = parsed.args.trim();
    if args.is_empty() {
        return Ok(CommandOutput::of(Broadcast::new(
            Audience::ActorOnly,
            MessageKind::System,
            "Usage: say[/ooc|/verb] <message>".to_string(),
        )));
    }

    // Room broadcasts carry the room-at-large name; only the /word
    // substitutions inside the speech are viewed from the speaker.
    let actor_name = ctx.names.display_name(ctx.actor, NOTHING);

    if parsed.has_switch("verb") {
        let template = format!(
            "{{char}} warms up vocally with \"{}|n\"",
            markup::escape_braces(args)
        );
        let text = render(&RenderRequest::new(RenderMode::Plain, &template).bind("char", &actor_name))?;
        let mut output = CommandOutput::of(Broadcast::new(Audience::Room, MessageKind::Pose, text));
        output.effects.push(Effect::SetSayVerb(args.to_string()));
        return Ok(output);
    }

    let speech = substitute_names(ctx, args);

    let (template, mode) = if parsed.has_switch("ooc") {
        // Out-of-character speech is always neutral: the configured say
        // verb and prepend do not apply to it.
        (
            format!("{} {{char}} says, |n\"|w{{speech}}|n\"", ctx.config.ooc_prefix),
            RenderMode::Ooc,
        )
    } else {
        let verb = ctx.say_verb.unwrap_or(&ctx.config.say_verb);
        (
            format!(
                "{{char}} {}, |n\"{}{{speech}}|n\"",
                markup::escape_braces(verb),
                markup::escape_braces(&ctx.config.say_prepend)
            ),
            RenderMode::Plain,
        )
    };

    let text = render(
        &RenderRequest::new(mode, &template)
            .bind("char", &actor_name)
            .bind("speech", &speech),
    )?;
    Ok(CommandOutput::of(Broadcast::new(
        Audience::Room,
        MessageKind::Say,
        text,
    )))
}

/// Replace each `/word` in `text` with the display name of whatever the
/// word matches in the actor's surroundings. Words that match nothing are
/// left alone, `//word` drops one slash without searching, and `/slashes/`
/// on both ends (span markup) are ignored. Search failures downgrade to a
/// warning rather than eating the speech.
fn substitute_names(ctx: &CommandContext, text: &str) -> String {
    let substituted: Vec<String> = text
        .split_whitespace()
        .map(|word| substitute_word(ctx, word))
        .collect();
    substituted.join(" ")
}

fn substitute_word(ctx: &CommandContext, word: &str) -> String {
    let Some(fragment) = word.strip_prefix('/') else {
        return word.to_string();
    };
    if word.ends_with('/') {
        return word.to_string();
    }
    if let Some(escaped) = word.strip_prefix("//") {
        return format!("/{escaped}");
    }

    let (fragment, tail) = match fragment.chars().last() {
        Some(last) if TRAILING_PUNCTUATION.contains(last) => {
            fragment.split_at(fragment.len() - last.len_utf8())
        }
        _ => (fragment, ""),
    };

    let outcome = match ctx.searcher.search(fragment) {
        Ok(outcome) => outcome,
        Err(error) => {
            warn!(word, %error, "name substitution search failed, leaving word as-is");
            return word.to_string();
        }
    };
    let found = match outcome {
        SearchOutcome::One(oid) => Some(oid),
        // On an ambiguous word the first candidate speaks for all of them.
        SearchOutcome::Ambiguous(candidates) => candidates.first().copied(),
        SearchOutcome::NoMatch => None,
    };
    match found {
        Some(oid) => format!("{}{}", ctx.names.display_name(oid, ctx.actor), tail),
        None => word.to_string(),
    }
}
