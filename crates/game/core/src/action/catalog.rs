//! Validated move registry and loadout helpers.

use std::collections::BTreeMap;

use crate::env::MoveOracle;
use crate::error::CatalogError;

use super::{Move, MoveKind};

/// Immutable registry of move definitions keyed by id.
///
/// Validation happens once in [`MoveCatalog::new`]; afterwards the catalog is
/// a pure lookup table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MoveCatalog {
    moves: BTreeMap<String, Move>,
}

impl MoveCatalog {
    pub fn new(moves: impl IntoIterator<Item = Move>) -> Result<Self, CatalogError> {
        let mut table = BTreeMap::new();
        for definition in moves {
            definition.validate()?;
            if table.contains_key(&definition.id) {
                return Err(CatalogError::DuplicateId(definition.id));
            }
            table.insert(definition.id.clone(), definition);
        }
        tracing::debug!(moves = table.len(), "move catalog built");
        Ok(Self { moves: table })
    }

    pub fn get(&self, id: &str) -> Option<&Move> {
        self.moves.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.moves.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// All moves in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.moves.values()
    }

    /// Resolve `ids` to definitions, silently skipping unknown ids.
    pub fn list_moves<'a, S: AsRef<str>>(&'a self, ids: &[S]) -> Vec<&'a Move> {
        ids.iter().filter_map(|id| self.get(id.as_ref())).collect()
    }

    /// Ids from `ids` whose definition has the given kind.
    pub fn moves_by_kind<'i, S: AsRef<str>>(&self, ids: &'i [S], kind: MoveKind) -> Vec<&'i str> {
        ids.iter()
            .map(|id| id.as_ref())
            .filter(|id| self.get(id).is_some_and(|definition| definition.kind == kind))
            .collect()
    }
}

impl MoveOracle for MoveCatalog {
    fn get_move(&self, id: &str) -> Option<&Move> {
        self.get(id)
    }
}

/// One page of a loadout list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveSlots {
    pub ids: Vec<String>,
    pub has_prev: bool,
    pub has_next: bool,
}

impl MoveSlots {
    /// Slice `ids` into pages of `page_size` and return page `page` (0-based).
    pub fn page<S: AsRef<str>>(ids: &[S], page: usize, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let start = page.saturating_mul(page_size);
        Self {
            ids: ids
                .iter()
                .skip(start)
                .take(page_size)
                .map(|id| id.as_ref().to_owned())
                .collect(),
            has_prev: page > 0,
            has_next: start.saturating_add(page_size) < ids.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{Cost, Effect, Pool, RollSpec, Target};
    use crate::element::Element;

    fn definition(id: &str, kind: MoveKind) -> Move {
        Move {
            id: id.into(),
            name: id.to_uppercase(),
            description: String::new(),
            element: Element::Physical,
            kind,
            target: Target::Enemy,
            to_hit_bonus: 0,
            cost: Cost::new(Pool::Sp, 1),
            effects: vec![Effect::Damage {
                roll: RollSpec::new(1, 4),
            }],
            on_hit: Vec::new(),
        }
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let result = MoveCatalog::new([
            definition("strike", MoveKind::Attack),
            definition("strike", MoveKind::Attack),
        ]);
        assert_eq!(result, Err(CatalogError::DuplicateId("strike".into())));
    }

    #[test]
    fn list_and_filter_skip_unknown_ids() {
        let catalog = MoveCatalog::new([
            definition("strike", MoveKind::Attack),
            definition("wound", MoveKind::Debuff),
        ])
        .unwrap();
        let ids = ["strike", "missing", "wound"];

        let listed: Vec<_> = catalog.list_moves(&ids).iter().map(|m| m.id.as_str()).collect();
        assert_eq!(listed, vec!["strike", "wound"]);
        assert_eq!(catalog.moves_by_kind(&ids, MoveKind::Debuff), vec!["wound"]);
        assert!(catalog.get_move("missing").is_none());
    }

    #[test]
    fn pages_report_neighbours() {
        let ids = ["a", "b", "c", "d", "e", "f"];
        let first = MoveSlots::page(&ids, 0, 4);
        assert_eq!(first.ids, vec!["a", "b", "c", "d"]);
        assert!(!first.has_prev);
        assert!(first.has_next);

        let second = MoveSlots::page(&ids, 1, 4);
        assert_eq!(second.ids, vec!["e", "f"]);
        assert!(second.has_prev);
        assert!(!second.has_next);
    }
}
