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

//! The `ooc` command: out-of-character chatter. A leading quote or pose
//! character hands the line to `say` or `pose` in their out-of-character
//! forms, so `ooc :waves` and `pose/ooc waves` read identically.

use murk_parse::{ParsedCommand, matching::NOTHING, parse};
use murk_render::{RenderMode, RenderRequest, render};

use crate::{
    broadcast::{Audience, Broadcast, MessageKind},
    context::{CommandContext, CommandOutput, SocialError},
    pose, say,
};

pub fn ooc(ctx: &CommandContext, parsed: &ParsedCommand) -> Result<CommandOutput, SocialError> {
    let args = parsed.args.trim();
    let Some(first) = args.chars().next() else {
        return Ok(CommandOutput::of(Broadcast::new(
            Audience::ActorOnly,
            MessageKind::System,
            "Usage: ooc <message>".to_string(),
        )));
    };

    match first {
        '"' | '\'' => {
            let redirected = parse("say", &format!("/ooc {}", &args[first.len_utf8()..]));
            return say::say(ctx, &redirected);
        }
        ':' | ';' => {
            let redirected = parse("pose", &format!("/ooc {}", &args[first.len_utf8()..]));
            return pose::pose(ctx, &redirected);
        }
        _ => {}
    }

    let text = render(
        &RenderRequest::new(RenderMode::Ooc, "[OOC {char}] {text}")
            .bind("char", ctx.names.display_name(ctx.actor, NOTHING))
            .bind("text", args),
    )?;
    Ok(CommandOutput::of(Broadcast::new(
        Audience::Room,
        MessageKind::Ooc,
        text,
    )))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::testing::Fixture;

    fn broadcast_texts(output: &CommandOutput) -> Vec<&str> {
        output.broadcasts.iter().map(|b| b.text.as_str()).collect()
    }

    #[test]
    fn test_plain_ooc() {
        let fixture = Fixture::new();
        let output = ooc(&fixture.ctx(), &parse("ooc", "anyone around?")).unwrap();
        assert_eq!(broadcast_texts(&output), vec!["[OOC Rulan] anyone around?"]);
        assert_eq!(output.broadcasts[0].audience, Audience::Room);
        assert_eq!(output.broadcasts[0].kind, MessageKind::Ooc);
    }

    #[test]
    fn test_ooc_escapes_markup() {
        let fixture = Fixture::new();
        let output = ooc(&fixture.ctx(), &parse("ooc", "|rloud|n")).unwrap();
        assert_eq!(broadcast_texts(&output), vec!["[OOC Rulan] ||rloud||n"]);
    }

    #[test]
    fn test_leading_quote_redirects_to_say() {
        let fixture = Fixture::new();
        let output = ooc(&fixture.ctx(), &parse("ooc", "\"hello all")).unwrap();
        assert_eq!(
            broadcast_texts(&output),
            vec!["[OOC] Rulan says, |n\"|whello all|n\""]
        );
        assert_eq!(output.broadcasts[0].kind, MessageKind::Say);
    }

    #[test]
    fn test_leading_apostrophe_redirects_to_say() {
        let fixture = Fixture::new();
        let output = ooc(&fixture.ctx(), &parse("ooc", "'back in five")).unwrap();
        assert_eq!(
            broadcast_texts(&output),
            vec!["[OOC] Rulan says, |n\"|wback in five|n\""]
        );
    }

    #[test]
    fn test_leading_colon_redirects_to_pose() {
        let fixture = Fixture::new();
        let output = ooc(&fixture.ctx(), &parse("ooc", ":waves")).unwrap();
        assert_eq!(broadcast_texts(&output), vec!["[OOC]|n |cRulan|n waves"]);
        assert_eq!(output.broadcasts[0].kind, MessageKind::Pose);
    }

    #[test]
    fn test_leading_semicolon_keeps_magnet_attachment() {
        let fixture = Fixture::new();
        let output = ooc(&fixture.ctx(), &parse("ooc", ";'s eye twitches")).unwrap();
        assert_eq!(
            broadcast_texts(&output),
            vec!["[OOC]|n |cRulan|n's eye twitches"]
        );
    }

    #[test]
    fn test_empty_ooc_gives_usage() {
        let fixture = Fixture::new();
        let output = ooc(&fixture.ctx(), &parse("ooc", "")).unwrap();
        assert_eq!(output.broadcasts[0].audience, Audience::ActorOnly);
        assert!(output.broadcasts[0].text.starts_with("Usage: ooc"));
    }

    #[test]
    fn test_lone_quote_falls_through_to_say_usage() {
        let fixture = Fixture::new();
        let output = ooc(&fixture.ctx(), &parse("ooc", "\"")).unwrap();
        assert!(output.broadcasts[0].text.starts_with("Usage: say"));
    }
}
