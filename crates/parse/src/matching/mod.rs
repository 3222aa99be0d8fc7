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

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

pub mod match_env;
#[doc(hidden)]
pub mod mock_search_env;
pub mod multimatch;

pub use match_env::SnapshotSearcher;
pub use multimatch::{
    MultimatchEntry, OrdinalParseError, format_multimatch, parse_ordinal, rank_candidates,
    split_ordinal,
};

/// An opaque handle on an object in the surrounding world. This crate never
/// looks inside it; it exists so search results can name things without
/// this crate knowing what a thing is.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Serialize, Deserialize)]
pub struct ObjId(pub i64);

/// The null object reference.
pub const NOTHING: ObjId = ObjId(-1);

impl ObjId {
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn is_nothing(&self) -> bool {
        *self == NOTHING
    }
}

impl Display for ObjId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The questions name matching needs answered about the world. Separated
/// out so it can be more easily mocked.
pub trait SearchEnvironment {
    // Test whether a given object is valid in this environment.
    fn obj_valid(&self, oid: ObjId) -> Result<bool, SearchError>;

    // Return all match names & aliases for an object.
    fn names_of(&self, oid: ObjId) -> Result<Vec<String>, SearchError>;

    // Returns location, contents, and player, all the things we'd search for matches on.
    fn surroundings_of(&self, player: ObjId) -> Result<Vec<ObjId>, SearchError>;

    // Return the location of a given object.
    fn location_of(&self, oid: ObjId) -> Result<ObjId, SearchError>;
}

/// What a name search came back with. Policy on the ambiguous and no-match
/// cases belongs to the caller, not to the search.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum SearchOutcome {
    /// Nothing in scope answered to the name.
    NoMatch,
    /// Exactly one object answered.
    One(ObjId),
    /// More than one object answered equally well, best tier first order.
    Ambiguous(Vec<ObjId>),
}

#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
pub enum SearchError {
    #[error("Object not found: {0}")]
    ObjectNotFound(ObjId),
    #[error("Invalid current player when performing object match")]
    InvalidPlayer,
}

/// Resolves a name fragment typed by a player into objects around them.
/// The command layer talks to this, never to [`SearchEnvironment`]
/// directly.
pub trait ObjectSearcher {
    fn search(&self, fragment: &str) -> Result<SearchOutcome, SearchError>;
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_objid_display() {
        assert_eq!(ObjId(3).to_string(), "#3");
        assert_eq!(NOTHING.to_string(), "#-1");
    }

    #[test]
    fn test_nothing_sentinel() {
        assert!(NOTHING.is_nothing());
        assert!(!ObjId(0).is_nothing());
    }
}
