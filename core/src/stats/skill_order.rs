//! Display ordering of an entity's used skills.
//!
//! With an elite skill in the set the order is: the elite, then the rest of
//! the elite's profession, then everything else. Without one: primary
//! profession, secondary profession, everything else. Inside a group skills
//! sort by type category, then id.

use crate::SkillId;
use crate::provider::{SkillCatalog, SkillInfo};

/// Re-sort `skills` in place. The result only depends on the set of ids and
/// the professions, never on insertion order.
pub fn order_skills(skills: &mut [SkillId], primary: u8, secondary: u8, catalog: &dyn SkillCatalog) {
    let mut keyed: Vec<(SkillId, SkillInfo)> = skills
        .iter()
        .map(|&id| (id, catalog.skill_info(id).unwrap_or(SkillInfo::UNKNOWN)))
        .collect();

    // Several elites can show up in one match (e.g. after a rebuild); the
    // lowest by type/id leads.
    let elite = keyed
        .iter()
        .filter(|(_, info)| info.is_elite)
        .min_by_key(|(id, info)| (info.skill_type, *id))
        .map(|(id, info)| (*id, info.profession));

    let group = |id: SkillId, info: &SkillInfo| -> u8 {
        match elite {
            Some((elite_id, _)) if id == elite_id => 0,
            Some((_, elite_profession)) if info.profession == elite_profession => 1,
            Some(_) => 2,
            None if info.profession == primary => 0,
            None if info.profession == secondary => 1,
            None => 2,
        }
    };

    keyed.sort_by_key(|(id, info)| (group(*id, info), info.skill_type, *id));

    for (slot, (id, _)) in skills.iter_mut().zip(keyed) {
        *slot = id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::StaticSkillCatalog;

    fn catalog() -> StaticSkillCatalog {
        let mut catalog = StaticSkillCatalog::default();
        // id => (profession, type, elite)
        catalog.insert(10, SkillInfo::new(3, 5, false));
        catalog.insert(11, SkillInfo::new(3, 2, false));
        catalog.insert(12, SkillInfo::new(3, 2, true));
        catalog.insert(20, SkillInfo::new(1, 1, false));
        catalog.insert(21, SkillInfo::new(1, 1, false));
        catalog.insert(30, SkillInfo::new(0, 0, false));
        catalog
    }

    #[test]
    fn without_elite_primary_then_secondary() {
        let mut skills = vec![30, 21, 10, 11, 20];
        order_skills(&mut skills, 1, 3, &catalog());
        assert_eq!(skills, vec![20, 21, 11, 10, 30]);
    }

    #[test]
    fn elite_leads_then_its_profession() {
        let mut skills = vec![20, 10, 12, 30, 11];
        order_skills(&mut skills, 1, 3, &catalog());
        assert_eq!(skills, vec![12, 11, 10, 30, 20]);
    }

    #[test]
    fn order_is_independent_of_insertion() {
        let catalog = catalog();
        let mut a = vec![10, 11, 12, 20, 21, 30];
        let mut b = vec![30, 21, 20, 12, 11, 10];
        order_skills(&mut a, 3, 1, &catalog);
        order_skills(&mut b, 3, 1, &catalog);
        assert_eq!(a, b);
    }

    #[test]
    fn unknown_skills_sort_last() {
        let mut skills = vec![999, 20];
        order_skills(&mut skills, 1, 0, &catalog());
        assert_eq!(skills, vec![20, 999]);
    }
}
