#![forbid(unsafe_code)]
//! Rawdah — bibliothèque de gestion des capacités de créneaux de visite (sans BD).
//!
//! - Import d'une feuille de gabarits récurrents (CSV).
//! - Expansion sur une plage de dates, conflits de genre, totaux.
//! - Export CSV (capacités, réservations) ; stockage session JSON.
//! - Tout est synchrone et mono-thread ; l'état vit dans la session.

pub mod demo;
pub mod export;
pub mod io;
pub mod model;
pub mod planner;
pub mod report;
pub mod storage;

pub use export::{booking_rows, capacity_rows, to_csv, Field, Row};
pub use io::{import_templates_csv, ImportReport, REQUIRED_HEADERS};
pub use model::{
    Booking, BookingStatus, DateRange, DayRule, ExpandedSlot, Gender, Session, SlotTemplate,
};
pub use planner::{aggregate, expand, Conflict, PlanError, Planner, Totals};
pub use report::{SummaryRenderer, TextSummary};
pub use storage::{JsonStorage, Storage};
