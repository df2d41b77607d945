use std::collections::BTreeMap;

use crate::rng::GameRng;

use super::builtin::builtin_templates;
use super::model::{Rarity, RoomTemplate};

/// Name-keyed template registry. Iteration follows first registration order;
/// re-registering a name replaces the template in place.
#[derive(Clone, Debug, Default)]
pub struct TemplateCatalog {
    templates: Vec<RoomTemplate>,
    index_by_name: BTreeMap<String, usize>,
}

impl TemplateCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog holding the stock boss arenas and treasure rooms.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        catalog.register_all(builtin_templates());
        catalog
    }

    pub fn register(&mut self, template: RoomTemplate) {
        if let Some(&index) = self.index_by_name.get(template.name()) {
            self.templates[index] = template;
            return;
        }
        self.index_by_name.insert(template.name().to_string(), self.templates.len());
        self.templates.push(template);
    }

    pub fn register_all(&mut self, templates: impl IntoIterator<Item = RoomTemplate>) {
        for template in templates {
            self.register(template);
        }
    }

    pub fn get(&self, name: &str) -> Option<&RoomTemplate> {
        self.index_by_name.get(name).map(|&index| &self.templates[index])
    }

    pub fn templates_for_floor(&self, floor: u32, rarity: Option<Rarity>) -> Vec<&RoomTemplate> {
        self.templates
            .iter()
            .filter(|template| template.allows_floor(floor))
            .filter(|template| rarity.is_none_or(|wanted| template.rarity() == wanted))
            .collect()
    }

    /// Uniform pick; `None` when nothing is available is a normal outcome.
    pub fn select_random<'a>(
        rng: &mut GameRng,
        candidates: &[&'a RoomTemplate],
    ) -> Option<&'a RoomTemplate> {
        rng.pick(candidates).copied()
    }

    pub fn all(&self) -> &[RoomTemplate] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn clear(&mut self) {
        self.templates.clear();
        self.index_by_name.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::TemplateDraft;
    use crate::types::Pos;

    fn template(
        name: &str,
        min_floor: u32,
        max_floor: Option<u32>,
        rarity: Rarity,
    ) -> RoomTemplate {
        RoomTemplate::parse(TemplateDraft {
            name,
            min_floor,
            max_floor,
            rarity,
            rows: &["WWW", "WFW", "WDW"],
            spawns: Vec::new(),
            entry_point: Pos { y: 2, x: 1 },
        })
        .expect("fixture template is valid")
    }

    #[test]
    fn builtin_catalog_holds_two_boss_and_two_rare_templates() {
        let catalog = TemplateCatalog::builtin();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.templates_for_floor(100, Some(Rarity::Boss)).len(), 2);
        assert_eq!(catalog.templates_for_floor(100, Some(Rarity::Rare)).len(), 2);
    }

    #[test]
    fn floor_filter_honors_min_and_max_floor_and_keeps_insertion_order() {
        let mut catalog = TemplateCatalog::new();
        catalog.register(template("early", 1, Some(3), Rarity::Rare));
        catalog.register(template("late", 4, None, Rarity::Rare));
        catalog.register(template("any", 1, None, Rarity::Common));

        let names = |floor, rarity| -> Vec<String> {
            catalog
                .templates_for_floor(floor, rarity)
                .iter()
                .map(|template| template.name().to_string())
                .collect()
        };
        assert_eq!(names(2, None), vec!["early", "any"]);
        assert_eq!(names(3, Some(Rarity::Rare)), vec!["early"]);
        assert_eq!(names(4, Some(Rarity::Rare)), vec!["late"]);
        assert_eq!(names(9, None), vec!["late", "any"]);
        assert!(names(9, Some(Rarity::Boss)).is_empty());
    }

    #[test]
    fn registering_an_existing_name_replaces_it_in_place() {
        let mut catalog = TemplateCatalog::new();
        catalog.register(template("vault", 1, None, Rarity::Rare));
        catalog.register(template("arena", 5, None, Rarity::Boss));
        catalog.register(template("vault", 7, None, Rarity::Unique));

        assert_eq!(catalog.len(), 2);
        let vault = catalog.get("vault").expect("vault stays registered");
        assert_eq!(vault.min_floor(), 7);
        assert_eq!(vault.rarity(), Rarity::Unique);
        assert_eq!(catalog.all()[0].name(), "vault");
    }

    #[test]
    fn select_random_reports_none_for_an_empty_candidate_list() {
        let mut rng = GameRng::seed_from_u64(5);
        assert!(TemplateCatalog::select_random(&mut rng, &[]).is_none());

        let catalog = TemplateCatalog::builtin();
        let candidates = catalog.templates_for_floor(10, Some(Rarity::Boss));
        let picked = TemplateCatalog::select_random(&mut rng, &candidates).expect("two candidates");
        assert_eq!(picked.rarity(), Rarity::Boss);
    }

    #[test]
    fn clear_empties_the_catalog() {
        let mut catalog = TemplateCatalog::builtin();
        catalog.clear();
        assert!(catalog.is_empty());
        assert!(catalog.get("Treasure Vault").is_none());
    }
}
