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

//! The `pose` command and its `try` form: free-form action text prefixed
//! with the actor's name, optionally carrying a `verb [target]::` attempt
//! for the surrounding engine to adjudicate.

use murk_parse::matching::{
    NOTHING, ObjId, SearchOutcome,
    multimatch::{MultimatchEntry, format_multimatch},
};
use murk_parse::{MAGNET_GLYPHS, ParsedCommand, resolve_pose};
use murk_render::{RenderMode, RenderRequest, render};

use crate::{
    broadcast::{Audience, Broadcast, MessageKind},
    context::{CommandContext, CommandOutput, Effect, SocialError},
};

/// The lock engine's verdict on a verb attempt, handed back in for the
/// outcome messages.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum VerbAccess {
    Granted,
    Denied,
}

/// Pose to the room. `pose grins` becomes `Rulan grins`; a leading magnet
/// glyph attaches instead (`pose 's hat` is `Rulan's hat`). A
/// `verb [target]::pose` head turns into an [`Effect::VerbAttempt`] once
/// the target resolves; the `try` alias is that with no pose text at all.
pub fn pose(ctx: &CommandContext, parsed: &ParsedCommand) -> Result<CommandOutput, SocialError> {
    let mut output = CommandOutput::none();

    if parsed.has_switch("magnet") {
        let glyphs = MAGNET_GLYPHS
            .iter()
            .map(char::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        output.push(Broadcast::new(
            Audience::ActorOnly,
            MessageKind::System,
            format!("Pose magnet glyphs are {glyphs}."),
        ));
    }

    let implicit_try = parsed.command_name == "try";
    let directive = resolve_pose(&parsed.args, implicit_try);

    if let (Some(verb), Some(fragment)) = (&directive.verb, &directive.target_fragment) {
        match ctx.searcher.search(fragment)? {
            SearchOutcome::One(target) => {
                output.effects.push(Effect::VerbAttempt {
                    verb: verb.clone(),
                    target,
                });
            }
            SearchOutcome::NoMatch => {
                output.push(Broadcast::new(
                    Audience::ActorOnly,
                    MessageKind::System,
                    format!("Could not find \"{fragment}\"."),
                ));
            }
            SearchOutcome::Ambiguous(candidates) => {
                let entries: Vec<MultimatchEntry> = candidates
                    .iter()
                    .map(|oid| MultimatchEntry {
                        name: ctx.names.display_name(*oid, ctx.actor),
                        aliases: Vec::new(),
                        info: None,
                    })
                    .collect();
                let listing = format!(
                    "More than one match for \"{fragment}\" (please narrow target):\n{}",
                    format_multimatch(&entries)
                );
                output.push(Broadcast::new(
                    Audience::ActorOnly,
                    MessageKind::System,
                    listing.trim_end().to_string(),
                ));
            }
        }
    }

    if !directive.pose_text.is_empty() {
        let template = if parsed.has_switch("ooc") {
            format!("{}|n |c{{char}}|n{{pose}}", ctx.config.ooc_prefix)
        } else {
            "|c{char}|n{pose}".to_string()
        };
        let mode = if parsed.has_switch("ooc") {
            RenderMode::Ooc
        } else {
            RenderMode::Plain
        };
        let text = render(
            &RenderRequest::new(mode, &template)
                .bind("char", ctx.names.display_name(ctx.actor, NOTHING))
                .bind("pose", &directive.pose_text),
        )?;
        output.push(Broadcast::new(Audience::Room, MessageKind::Pose, text));
    }

    Ok(output)
}

/// Render the outcome of an adjudicated verb attempt. Success is a green
/// line to the whole room; failure is a red line to everyone else and a
/// plainer one to the actor.
pub fn verb_outcome(
    ctx: &CommandContext,
    verb: &str,
    target: ObjId,
    access: VerbAccess,
) -> Result<CommandOutput, SocialError> {
    let actor_name = ctx.names.display_name(ctx.actor, NOTHING);
    let target_name = ctx.names.display_name(target, NOTHING);

    match access {
        VerbAccess::Granted => {
            let text = render(
                &RenderRequest::new(RenderMode::Plain, "|g{char}|n is able to {verb} {target}.")
                    .bind("char", &actor_name)
                    .bind("verb", verb)
                    .bind("target", &target_name),
            )?;
            Ok(CommandOutput::of(Broadcast::new(
                Audience::Room,
                MessageKind::Pose,
                text,
            )))
        }
        VerbAccess::Denied => {
            let room_text = render(
                &RenderRequest::new(RenderMode::Plain, "|r{char}|n fails to {verb} {target}.")
                    .bind("char", &actor_name)
                    .bind("verb", verb)
                    .bind("target", &target_name),
            )?;
            let actor_text = render(
                &RenderRequest::new(RenderMode::Plain, "You failed to {verb} {target}.")
                    .bind("verb", verb)
                    .bind("target", ctx.names.display_name(target, ctx.actor)),
            )?;
            let mut output = CommandOutput::of(Broadcast::new(
                Audience::RoomExcept(ctx.actor),
                MessageKind::Pose,
                room_text,
            ));
            output.push(Broadcast::new(
                Audience::ActorOnly,
                MessageKind::Pose,
                actor_text,
            ));
            Ok(output)
        }
    }
}

#[cfg(test)]
mod tests {
    use murk_parse::parse;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::testing::{
        Fixture,
        mock_search_env::{MOCK_ANVIL, MOCK_DOOR, MOCK_PLAYER},
    };

    fn broadcast_texts(output: &CommandOutput) -> Vec<&str> {
        output.broadcasts.iter().map(|b| b.text.as_str()).collect()
    }

    #[test]
    fn test_plain_pose() {
        let fixture = Fixture::new();
        let output = pose(&fixture.ctx(), &parse("pose", "smiles warmly")).unwrap();
        assert_eq!(broadcast_texts(&output), vec!["|cRulan|n smiles warmly"]);
        assert_eq!(output.broadcasts[0].audience, Audience::Room);
        assert_eq!(output.broadcasts[0].kind, MessageKind::Pose);
        assert!(output.effects.is_empty());
    }

    #[test]
    fn test_magnet_glyph_pose_attaches() {
        let fixture = Fixture::new();
        let output = pose(&fixture.ctx(), &parse("pose", "'s hat falls off")).unwrap();
        assert_eq!(broadcast_texts(&output), vec!["|cRulan|n's hat falls off"]);
    }

    #[test]
    fn test_pose_markup_is_escaped() {
        let fixture = Fixture::new();
        let output = pose(&fixture.ctx(), &parse("pose", "|rglares")).unwrap();
        assert_eq!(broadcast_texts(&output), vec!["|cRulan|n ||rglares"]);
    }

    #[test]
    fn test_ooc_pose() {
        let fixture = Fixture::new();
        let output = pose(&fixture.ctx(), &parse("pose", "/ooc grins")).unwrap();
        assert_eq!(broadcast_texts(&output), vec!["[OOC]|n |cRulan|n grins"]);
        assert_eq!(output.broadcasts[0].kind, MessageKind::Pose);
    }

    #[test]
    fn test_ooc_switch_abbreviates() {
        let fixture = Fixture::new();
        let output = pose(&fixture.ctx(), &parse("pose", "/o waves")).unwrap();
        assert_eq!(broadcast_texts(&output), vec!["[OOC]|n |cRulan|n waves"]);
    }

    #[test]
    fn test_directive_poses_and_attempts() {
        let fixture = Fixture::new();
        let output = pose(
            &fixture.ctx(),
            &parse("pose", "polish anvil::leans into the wheel."),
        )
        .unwrap();
        assert_eq!(broadcast_texts(&output), vec!["|cRulan|n leans into the wheel."]);
        assert_eq!(
            output.effects,
            vec![Effect::VerbAttempt {
                verb: "polish".to_string(),
                target: MOCK_ANVIL,
            }]
        );
    }

    #[test]
    fn test_try_two_words() {
        let fixture = Fixture::new();
        let output = pose(&fixture.ctx(), &parse("try", "unlock door")).unwrap();
        assert!(output.broadcasts.is_empty());
        assert_eq!(
            output.effects,
            vec![Effect::VerbAttempt {
                verb: "unlock".to_string(),
                target: MOCK_DOOR,
            }]
        );
    }

    #[test]
    fn test_try_one_word_targets_self() {
        let fixture = Fixture::new();
        let output = pose(&fixture.ctx(), &parse("try", "sneeze")).unwrap();
        assert_eq!(
            output.effects,
            vec![Effect::VerbAttempt {
                verb: "sneeze".to_string(),
                target: MOCK_PLAYER,
            }]
        );
    }

    #[test]
    fn test_unresolved_target_reports_and_still_poses() {
        let fixture = Fixture::new();
        let output = pose(
            &fixture.ctx(),
            &parse("pose", "polish crown::rubs at nothing."),
        )
        .unwrap();
        assert_eq!(
            broadcast_texts(&output),
            vec!["Could not find \"crown\".", "|cRulan|n rubs at nothing."]
        );
        assert_eq!(output.broadcasts[0].audience, Audience::ActorOnly);
        assert_eq!(output.broadcasts[0].kind, MessageKind::System);
        assert!(output.effects.is_empty());
    }

    #[test]
    fn test_ambiguous_target_lists_candidates() {
        let fixture = Fixture::new();
        let output = pose(&fixture.ctx(), &parse("try", "take sword")).unwrap();
        assert_eq!(
            broadcast_texts(&output),
            vec!["More than one match for \"sword\" (please narrow target):\n 1 sword\n 2 sword"]
        );
        assert!(output.effects.is_empty());
    }

    #[test]
    fn test_magnet_switch_reports_glyphs() {
        let fixture = Fixture::new();
        let output = pose(&fixture.ctx(), &parse("pose", "/magnet bows")).unwrap();
        assert_eq!(
            broadcast_texts(&output),
            vec![
                "Pose magnet glyphs are ® © ° · ~ @ - ' ’ , ; : . ? ! ….",
                "|cRulan|n bows"
            ]
        );
        assert_eq!(output.broadcasts[0].audience, Audience::ActorOnly);
    }

    #[test]
    fn test_bare_pose_is_silent() {
        let fixture = Fixture::new();
        let output = pose(&fixture.ctx(), &parse("pose", "")).unwrap();
        assert!(output.broadcasts.is_empty());
        assert!(output.effects.is_empty());
    }

    #[test]
    fn test_three_token_head_is_pose_text() {
        let fixture = Fixture::new();
        let output = pose(&fixture.ctx(), &parse("pose", "eyes the oak door::warily")).unwrap();
        assert_eq!(
            broadcast_texts(&output),
            vec!["|cRulan|n eyes the oak door::warily"]
        );
        assert!(output.effects.is_empty());
    }

    #[test]
    fn test_verb_outcome_granted() {
        let fixture = Fixture::new();
        let output =
            verb_outcome(&fixture.ctx(), "polish", MOCK_ANVIL, VerbAccess::Granted).unwrap();
        assert_eq!(
            broadcast_texts(&output),
            vec!["|gRulan|n is able to polish anvil."]
        );
        assert_eq!(output.broadcasts[0].audience, Audience::Room);
    }

    #[test]
    fn test_verb_outcome_denied() {
        let fixture = Fixture::new();
        let output =
            verb_outcome(&fixture.ctx(), "unlock", MOCK_DOOR, VerbAccess::Denied).unwrap();
        assert_eq!(
            broadcast_texts(&output),
            vec![
                "|rRulan|n fails to unlock oak door.",
                "You failed to unlock oak door."
            ]
        );
        assert_eq!(
            output.broadcasts[0].audience,
            Audience::RoomExcept(MOCK_PLAYER)
        );
        assert_eq!(output.broadcasts[1].audience, Audience::ActorOnly);
        assert_eq!(output.broadcasts[1].kind, MessageKind::Pose);
    }
}
