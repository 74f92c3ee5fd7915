use super::Conflict;
use crate::model::{ExpandedSlot, Gender};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Regroupe par (date, slot id) — pas par genre — et ne retient que les
/// groupes où hommes et femmes ont chacun un gabarit à capacité > 0.
/// Les lignes sans slot id se regroupent entre elles pour une même date.
pub(super) fn detect_conflicts(expanded: &[ExpandedSlot]) -> Vec<Conflict> {
    let mut groups: BTreeMap<(NaiveDate, Option<u32>), (u32, u32)> = BTreeMap::new();

    for slot in expanded {
        if slot.template.capacity == 0 {
            continue;
        }
        let entry = groups
            .entry((slot.date, slot.template.slot_id))
            .or_default();
        match slot.template.gender {
            Gender::Men => entry.0 += 1,
            Gender::Women => entry.1 += 1,
            Gender::Other(_) => {}
        }
    }

    groups
        .into_iter()
        .filter(|(_, (men, women))| *men >= 1 && *women >= 1)
        .map(|((date, slot_id), (men, women))| Conflict {
            date,
            slot_id,
            men_templates: men,
            women_templates: women,
        })
        .collect()
}
