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

use crate::matching::{
    ObjId, ObjectSearcher, SearchEnvironment, SearchError, SearchOutcome,
    multimatch::{rank_candidates, split_ordinal},
};

const ME: &str = "me";
const HERE: &str = "here";

/// Name search over a point-in-time view of the player's surroundings.
/// Holds no state beyond the environment handle; every [`search`] call
/// re-asks the environment, so a stale searcher is only as stale as its
/// environment.
///
/// [`search`]: ObjectSearcher::search
pub struct SnapshotSearcher<E: SearchEnvironment> {
    pub env: E,
    pub player: ObjId,
}

impl<E: SearchEnvironment> SnapshotSearcher<E> {
    pub fn new(env: E, player: ObjId) -> Self {
        Self { env, player }
    }

    fn search_surroundings(&self, fragment: &str) -> Result<SearchOutcome, SearchError> {
        let (ordinal, subject) = split_ordinal(fragment);

        let mut candidates = Vec::new();
        for oid in self.env.surroundings_of(self.player)? {
            if !self.env.obj_valid(oid)? {
                continue;
            }
            candidates.push((oid, self.env.names_of(oid)?));
        }

        Ok(rank_candidates(&subject, &candidates).resolve(ordinal))
    }
}

impl<E: SearchEnvironment> ObjectSearcher for SnapshotSearcher<E> {
    fn search(&self, fragment: &str) -> Result<SearchOutcome, SearchError> {
        let fragment = fragment.trim();
        if fragment.is_empty() {
            return Ok(SearchOutcome::NoMatch);
        }

        // An object number ("#42") names its object directly, valid or not
        // for name matching, as long as it exists here.
        if let Some(digits) = fragment.strip_prefix('#')
            && let Ok(id) = digits.parse::<i64>()
        {
            let oid = ObjId(id);
            return if self.env.obj_valid(oid)? {
                Ok(SearchOutcome::One(oid))
            } else {
                Ok(SearchOutcome::NoMatch)
            };
        }

        // Check the player is valid.
        if !self.env.obj_valid(self.player)? {
            return Err(SearchError::InvalidPlayer);
        }

        // Check 'me' and 'here' first.
        if fragment.eq_ignore_ascii_case(ME) {
            return Ok(SearchOutcome::One(self.player));
        }
        if fragment.eq_ignore_ascii_case(HERE) {
            return Ok(SearchOutcome::One(self.env.location_of(self.player)?));
        }

        self.search_surroundings(fragment)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::matching::{
        ObjId, ObjectSearcher, SearchError, SearchOutcome,
        match_env::SnapshotSearcher,
        mock_search_env::{
            MOCK_ANVIL, MOCK_DOOR, MOCK_FORGE, MOCK_PLAYER, MOCK_SWORD1, MOCK_SWORD2,
            setup_mock_environment,
        },
    };

    fn searcher() -> SnapshotSearcher<crate::matching::mock_search_env::MockSearchEnv> {
        SnapshotSearcher::new(setup_mock_environment(), MOCK_PLAYER)
    }

    #[test]
    fn test_match_me() {
        let result = searcher().search("me").unwrap();
        assert_eq!(result, SearchOutcome::One(MOCK_PLAYER));
    }

    #[test]
    fn test_match_here() {
        let result = searcher().search("here").unwrap();
        assert_eq!(result, SearchOutcome::One(MOCK_FORGE));
    }

    #[test]
    fn test_match_exact_name() {
        let result = searcher().search("anvil").unwrap();
        assert_eq!(result, SearchOutcome::One(MOCK_ANVIL));
    }

    #[test]
    fn test_match_alias() {
        let result = searcher().search("exit").unwrap();
        assert_eq!(result, SearchOutcome::One(MOCK_DOOR));
    }

    #[test]
    fn test_match_prefix() {
        let result = searcher().search("anv").unwrap();
        assert_eq!(result, SearchOutcome::One(MOCK_ANVIL));
    }

    #[test]
    fn test_match_ambiguous() {
        let result = searcher().search("sword").unwrap();
        assert_eq!(
            result,
            SearchOutcome::Ambiguous(vec![MOCK_SWORD1, MOCK_SWORD2])
        );
    }

    #[test]
    fn test_match_ordinal() {
        let result = searcher().search("2 sword").unwrap();
        assert_eq!(result, SearchOutcome::One(MOCK_SWORD2));
        let result = searcher().search("second sword").unwrap();
        assert_eq!(result, SearchOutcome::One(MOCK_SWORD2));
    }

    #[test]
    fn test_match_nothing_in_scope() {
        let result = searcher().search("castle").unwrap();
        assert_eq!(result, SearchOutcome::NoMatch);
    }

    #[test]
    fn test_match_non_ascii_fragment() {
        // Multibyte names go through the ordinal peel and the ranking like
        // any other text; a fragment nothing answers to is a clean miss.
        let result = searcher().search("éx sword").unwrap();
        assert_eq!(result, SearchOutcome::NoMatch);
    }

    #[test]
    fn test_match_empty_fragment() {
        let result = searcher().search("").unwrap();
        assert_eq!(result, SearchOutcome::NoMatch);
    }

    #[test]
    fn test_match_object_number() {
        let result = searcher().search(&format!("{MOCK_ANVIL}")).unwrap();
        assert_eq!(result, SearchOutcome::One(MOCK_ANVIL));
        let result = searcher().search("#999").unwrap();
        assert_eq!(result, SearchOutcome::NoMatch);
    }

    #[test]
    fn test_invalid_player() {
        let searcher = SnapshotSearcher::new(setup_mock_environment(), ObjId(999));
        let result = searcher.search("anvil");
        assert_eq!(result, Err(SearchError::InvalidPlayer));
    }
}
