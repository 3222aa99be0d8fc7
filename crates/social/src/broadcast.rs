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

//! The outbound seam: who a finished message is for, and the sink that
//! carries it there. Delivery itself lives outside this crate; commands
//! only describe it.

use std::collections::HashMap;
use std::sync::RwLock;

use murk_parse::matching::ObjId;
use serde::{Deserialize, Serialize};
use strum::Display;

/// Who should receive a broadcast. Scoping is relative to the actor's
/// location as the sink understands it.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub enum Audience {
    /// Everyone at the actor's location, the actor included.
    Room,
    /// Everyone at the location except one object, usually the actor.
    RoomExcept(ObjId),
    /// The actor alone.
    ActorOnly,
}

/// Routing tag a consumer can filter or restyle on. Does not change what
/// was rendered.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
pub enum MessageKind {
    Say,
    Pose,
    Ooc,
    Spoof,
    System,
}

/// One rendered message and where it should go.
#[derive(Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub struct Broadcast {
    pub audience: Audience,
    pub kind: MessageKind,
    pub text: String,
}

impl Broadcast {
    pub fn new(audience: Audience, kind: MessageKind, text: impl Into<String>) -> Self {
        Self {
            audience,
            kind,
            text: text.into(),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
pub enum SinkError {
    #[error("Could not deliver broadcast to audience")]
    DeliveryError,
}

/// Where finished broadcasts go. Implemented by whatever owns the actual
/// connections; this crate ships only the no-op and recording variants.
pub trait BroadcastSink: Send + Sync {
    fn deliver(&self, broadcast: Broadcast) -> Result<(), SinkError>;
}

/// A sink that discards everything. For headless execution of commands
/// whose side effects are all that matter.
pub struct NoopSink;

impl BroadcastSink for NoopSink {
    fn deliver(&self, _broadcast: Broadcast) -> Result<(), SinkError> {
        Ok(())
    }
}

/// A sink that remembers every delivery, in order. For tests.
#[derive(Default)]
pub struct RecordingSink {
    inner: RwLock<Vec<Broadcast>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything delivered so far.
    pub fn delivered(&self) -> Vec<Broadcast> {
        self.inner.read().unwrap().clone()
    }

    /// Take and clear the recorded deliveries.
    pub fn drain(&self) -> Vec<Broadcast> {
        std::mem::take(&mut *self.inner.write().unwrap())
    }
}

impl BroadcastSink for RecordingSink {
    fn deliver(&self, broadcast: Broadcast) -> Result<(), SinkError> {
        self.inner.write().unwrap().push(broadcast);
        Ok(())
    }
}

/// How objects are named in front of a given viewer. The world behind this
/// may rename per viewer (recognition systems, disguises); this crate just
/// asks.
pub trait DisplayNames {
    /// The name `of` goes by when `viewer` is reading the line. Commands
    /// pass [`NOTHING`] as the viewer for the room-at-large perspective.
    ///
    /// [`NOTHING`]: murk_parse::matching::NOTHING
    fn display_name(&self, of: ObjId, viewer: ObjId) -> String;
}

/// Name provider backed by a fixed table, same answer for every viewer.
/// Unknown objects fall back to their `#id` form.
#[derive(Default)]
pub struct StaticNames {
    names: HashMap<ObjId, String>,
}

impl StaticNames {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, oid: ObjId, name: &str) -> Self {
        self.names.insert(oid, name.to_string());
        self
    }
}

impl DisplayNames for StaticNames {
    fn display_name(&self, of: ObjId, _viewer: ObjId) -> String {
        self.names
            .get(&of)
            .cloned()
            .unwrap_or_else(|| of.to_string())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_recording_sink_remembers_in_order() {
        let sink = RecordingSink::new();
        sink.deliver(Broadcast::new(Audience::Room, MessageKind::Say, "one"))
            .unwrap();
        sink.deliver(Broadcast::new(Audience::ActorOnly, MessageKind::System, "two"))
            .unwrap();
        let delivered = sink.delivered();
        assert_eq!(delivered.len(), 2);
        assert_eq!(delivered[0].text, "one");
        assert_eq!(delivered[1].audience, Audience::ActorOnly);
    }

    #[test]
    fn test_recording_sink_drain() {
        let sink = RecordingSink::new();
        sink.deliver(Broadcast::new(Audience::Room, MessageKind::Pose, "x"))
            .unwrap();
        assert_eq!(sink.drain().len(), 1);
        assert!(sink.delivered().is_empty());
    }

    #[test]
    fn test_static_names_fallback() {
        let names = StaticNames::new().with(ObjId(3), "Rulan");
        assert_eq!(names.display_name(ObjId(3), ObjId(0)), "Rulan");
        assert_eq!(names.display_name(ObjId(9), ObjId(0)), "#9");
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(MessageKind::Ooc.to_string(), "ooc");
    }
}
