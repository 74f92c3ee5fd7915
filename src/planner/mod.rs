mod conflicts;
mod expand;
mod summary;
mod types;

pub use expand::expand;
pub use summary::aggregate;
pub use types::{Conflict, PlanError, Totals};

use crate::model::{Booking, DateRange, ExpandedSlot, Session, SlotTemplate};

/// Planner : possède l'état de session (gabarits courants, expansion courante,
/// dates appliquées, réservations) et orchestre les fonctions pures. Les vues
/// dérivées sont recalculées à la demande, jamais retouchées en place.
#[derive(Debug, Default)]
pub struct Planner {
    session: Session,
}

impl Planner {
    pub fn new() -> Self {
        Self {
            session: Session::default(),
        }
    }

    pub fn from_session(session: Session) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Remplacement en bloc des gabarits après un import réussi.
    /// L'expansion précédente devient caduque et doit être recalculée.
    pub fn replace_templates(&mut self, templates: Vec<SlotTemplate>) {
        self.session.templates = templates;
        self.session.range = None;
        self.session.expanded.clear();
    }

    pub fn templates(&self) -> &[SlotTemplate] {
        &self.session.templates
    }

    /// Recalcule l'expansion pour `range` et ne la valide qu'en cas de succès
    /// complet ; toute erreur laisse l'état précédent intact.
    pub fn plan(&mut self, range: DateRange) -> Result<&[ExpandedSlot], PlanError> {
        if self.session.templates.is_empty() {
            return Err(PlanError::NoTemplates);
        }
        let expanded = expand::expand(&self.session.templates, range);
        self.session.range = Some(range);
        self.session.expanded = expanded;
        Ok(&self.session.expanded)
    }

    pub fn range(&self) -> Option<DateRange> {
        self.session.range
    }

    pub fn expanded(&self) -> &[ExpandedSlot] {
        &self.session.expanded
    }

    /// Conflits de genre de l'expansion courante. Consultatif : ne bloque ni
    /// l'expansion ni l'application.
    pub fn conflicts(&self) -> Vec<Conflict> {
        conflicts::detect_conflicts(&self.session.expanded)
    }

    pub fn summary(&self) -> Totals {
        summary::aggregate(&self.session.expanded, &self.session.bookings)
    }

    /// Marque les dates de l'expansion courante comme appliquées.
    /// Retourne le nombre de dates nouvellement ajoutées.
    pub fn apply(&mut self) -> usize {
        let mut added = 0;
        for slot in &self.session.expanded {
            if self.session.applied_dates.insert(slot.date) {
                added += 1;
            }
        }
        added
    }

    /// Nombre de jours de `range` déjà appliqués (marqueurs du calendrier).
    pub fn overlap_with_applied(&self, range: DateRange) -> usize {
        range
            .days()
            .filter(|d| self.session.applied_dates.contains(d))
            .count()
    }

    pub fn set_bookings(&mut self, bookings: Vec<Booking>) {
        self.session.bookings = bookings;
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.session.bookings
    }
}
