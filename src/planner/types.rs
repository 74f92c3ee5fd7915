use chrono::NaiveDate;
use thiserror::Error;

/// Conflit de genre sur un couple (date, slot) : les deux genres y ont au
/// moins un gabarit à capacité > 0. On compte les gabarits, pas les places
/// (sémantique d'origine, conservée). Purement consultatif.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub date: NaiveDate,
    pub slot_id: Option<u32>,
    pub men_templates: u32,
    pub women_templates: u32,
}

/// Totaux des quatre widgets : capacité globale, par genre, places réservées.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    pub total: u64,
    pub men: u64,
    pub women: u64,
    pub booked: u64,
}

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("no templates loaded: import a sheet first")]
    NoTemplates,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
