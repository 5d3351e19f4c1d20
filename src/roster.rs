use crate::model::{Hero, HeroAttribute};
use indexmap::IndexMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

/// The hero list's current filter, search text and sort direction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeroQuery {
    pub attribute: Option<HeroAttribute>,
    pub search: String,
    pub order: SortOrder,
}

impl HeroQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `attribute`, or clear the filter if it is already selected.
    pub fn toggle_attribute(&mut self, attribute: HeroAttribute) {
        self.attribute = if self.attribute == Some(attribute) {
            None
        } else {
            Some(attribute)
        };
    }

    /// Filter by attribute and name, then sort by lowercased display name.
    ///
    /// Search and sort use [`Hero::display_name`], the same name the list shows,
    /// so a hero without a localized name is found by its internal name.
    /// Names compare by Unicode code point after lowercasing, not by locale
    /// collation: `'` sorts before `-` here, unlike most locale orderings.
    pub fn apply<'a>(&self, heroes: &'a [Hero]) -> Vec<&'a Hero> {
        let needle = self.search.trim().to_lowercase();
        let mut result: Vec<(String, &Hero)> = heroes
            .iter()
            .filter(|h| self.attribute.map_or(true, |a| h.primary_attr == Some(a)))
            .map(|h| (h.display_name().to_lowercase(), h))
            .filter(|(name, _)| needle.is_empty() || name.contains(&needle))
            .collect();

        match self.order {
            SortOrder::Ascending => result.sort_by(|a, b| a.0.cmp(&b.0)),
            SortOrder::Descending => result.sort_by(|a, b| b.0.cmp(&a.0)),
        }
        result.into_iter().map(|(_, h)| h).collect()
    }
}

/// Heroes indexed by id, kept in fetch order.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    heroes: Vec<Hero>,
    by_id: IndexMap<u32, usize>,
}

impl Roster {
    pub fn new(heroes: Vec<Hero>) -> Self {
        let mut by_id = IndexMap::with_capacity(heroes.len());
        for (idx, hero) in heroes.iter().enumerate() {
            if let Some(id) = hero.id {
                if by_id.insert(id, idx).is_some() {
                    log::debug!("duplicate hero id {}, keeping the later entry", id);
                }
            }
        }
        Self { heroes, by_id }
    }

    pub fn heroes(&self) -> &[Hero] {
        &self.heroes
    }

    pub fn len(&self) -> usize {
        self.heroes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heroes.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Hero> {
        self.by_id.get(&id).map(|&idx| &self.heroes[idx])
    }

    pub fn query(&self, query: &HeroQuery) -> Vec<&Hero> {
        query.apply(&self.heroes)
    }
}
