use crate::planner::{Conflict, Totals};

/// Permet de customiser le rendu du résumé opérateur (texte, mail, etc.).
pub trait SummaryRenderer {
    fn render(&self, totals: &Totals, conflicts: &[Conflict]) -> String;
}

/// Gabarit texte simple : les quatre widgets puis les conflits éventuels.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextSummary;

impl SummaryRenderer for TextSummary {
    fn render(&self, totals: &Totals, conflicts: &[Conflict]) -> String {
        let mut out = format!(
            "Capacité totale : {total}\nCapacité hommes : {men}\nCapacité femmes : {women}\nPlaces réservées : {booked}\n",
            total = totals.total,
            men = totals.men,
            women = totals.women,
            booked = totals.booked,
        );
        if !conflicts.is_empty() {
            out.push_str(&format!(
                "\n{} conflit(s) de genre (date/créneau) :\n",
                conflicts.len()
            ));
            for c in conflicts {
                let slot = c
                    .slot_id
                    .map(|id| id.to_string())
                    .unwrap_or_else(|| "-".to_string());
                out.push_str(&format!(
                    "  {} créneau {} : {} gabarit(s) Hommes, {} Femmes\n",
                    c.date, slot, c.men_templates, c.women_templates
                ));
            }
        }
        out
    }
}
