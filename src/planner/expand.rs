use crate::model::{DateRange, ExpandedSlot, SlotTemplate};

/// Déploie les gabarits sur chaque jour de `[from, to]`, bornes incluses.
///
/// Ordre de sortie : date-majeure, puis ordre d'origine des gabarits — la
/// pagination et l'export reposent sur cet ordre stable. Pas de
/// déduplication : deux gabarits identiques produisent deux lignes.
/// `from > to` vaut zéro jour, donc séquence vide.
pub fn expand(templates: &[SlotTemplate], range: DateRange) -> Vec<ExpandedSlot> {
    let mut out = Vec::new();
    for date in range.days() {
        for template in templates {
            if template.day.matches(date) {
                out.push(ExpandedSlot {
                    date,
                    template: template.clone(),
                });
            }
        }
    }
    out
}
