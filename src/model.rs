use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use uuid::Uuid;

/// Règle de récurrence d'un gabarit : un jour de semaine précis, ou `All`
/// (tous les jours de la plage sélectionnée).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DayRule {
    All,
    Day(Weekday),
}

impl DayRule {
    /// Parse un nom de jour anglais (`Sunday`..`Saturday`) ou `All`.
    pub fn parse(raw: &str) -> Option<Self> {
        let day = match raw.trim().to_ascii_lowercase().as_str() {
            "all" => return Some(DayRule::All),
            "sunday" => Weekday::Sun,
            "monday" => Weekday::Mon,
            "tuesday" => Weekday::Tue,
            "wednesday" => Weekday::Wed,
            "thursday" => Weekday::Thu,
            "friday" => Weekday::Fri,
            "saturday" => Weekday::Sat,
            _ => return None,
        };
        Some(DayRule::Day(day))
    }

    /// Vrai si la règle couvre cette date (semaine commençant le dimanche).
    pub fn matches(&self, date: NaiveDate) -> bool {
        match self {
            DayRule::All => true,
            DayRule::Day(day) => date.weekday() == *day,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DayRule::All => "All",
            DayRule::Day(Weekday::Sun) => "Sunday",
            DayRule::Day(Weekday::Mon) => "Monday",
            DayRule::Day(Weekday::Tue) => "Tuesday",
            DayRule::Day(Weekday::Wed) => "Wednesday",
            DayRule::Day(Weekday::Thu) => "Thursday",
            DayRule::Day(Weekday::Fri) => "Friday",
            DayRule::Day(Weekday::Sat) => "Saturday",
        }
    }
}

impl fmt::Display for DayRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<DayRule> for String {
    fn from(rule: DayRule) -> Self {
        rule.as_str().to_owned()
    }
}

impl TryFrom<String> for DayRule {
    type Error = String;
    fn try_from(raw: String) -> Result<Self, Self::Error> {
        DayRule::parse(&raw).ok_or_else(|| format!("unknown day value: {raw}"))
    }
}

/// Genre d'un créneau ou d'une réservation. Les valeurs hors `Men`/`Women`
/// sont conservées telles quelles : elles comptent dans le total global mais
/// dans aucun des deux compteurs par genre.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Men,
    Women,
    Other(String),
}

impl Gender {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "men" => Gender::Men,
            "women" => Gender::Women,
            _ => Gender::Other(raw.trim().to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Gender::Men => "Men",
            Gender::Women => "Women",
            Gender::Other(raw) => raw.as_str(),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gabarit récurrent de créneau, immuable après import. Les heures restent du
/// texte `HH:MM` (pas de fuseau) ; `slot_id` absent ou illisible vaut `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotTemplate {
    pub slot_id: Option<u32>,
    pub start_time: String,
    pub end_time: String,
    pub day: DayRule,
    pub gender: Gender,
    pub capacity: u32,
}

impl SlotTemplate {
    /// Heure de début parsée, si le texte est bien un `HH:MM`.
    pub fn start(&self) -> Option<NaiveTime> {
        parse_wall_clock(&self.start_time)
    }

    pub fn end(&self) -> Option<NaiveTime> {
        parse_wall_clock(&self.end_time)
    }
}

fn parse_wall_clock(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw.trim(), "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw.trim(), "%H:%M:%S"))
        .ok()
}

/// Gabarit lié à une date calendaire concrète. Donnée dérivée : recalculée en
/// bloc à chaque changement de gabarits ou de plage, jamais retouchée.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpandedSlot {
    pub date: NaiveDate,
    pub template: SlotTemplate,
}

/// Statut d'une réservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    Booked,
    CheckedIn,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Booked => "Booked",
            BookingStatus::CheckedIn => "Checked-in",
            BookingStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Réservation en lecture seule : le cœur ne fait que les compter et les
/// exporter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub date: NaiveDate,
    pub slot_id: Option<u32>,
    pub start_time: String,
    pub end_time: String,
    pub gender: Gender,
    pub seats: u32,
    pub pilgrim_name: String,
    pub document_no: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_label: Option<String>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn random_id() -> String {
        Uuid::new_v4().to_string()
    }
}

/// Intervalle fermé `[from, to]`. `from > to` est légitime et vaut
/// "zéro jour", pas une erreur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    /// Jours de l'intervalle en ordre croissant, bornes incluses.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let mut current = Some(self.from);
        let to = self.to;
        std::iter::from_fn(move || {
            let date = current.filter(|d| *d <= to)?;
            current = date.succ_opt();
            Some(date)
        })
    }

    pub fn is_empty(&self) -> bool {
        self.from > self.to
    }
}

/// État complet d'une session de travail. Un seul écrivain (les commandes) ;
/// les vues dérivées sont recalculées, jamais modifiées en place.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Session {
    #[serde(default)]
    pub templates: Vec<SlotTemplate>,
    #[serde(default)]
    pub range: Option<DateRange>,
    #[serde(default)]
    pub expanded: Vec<ExpandedSlot>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub applied_dates: BTreeSet<NaiveDate>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bookings: Vec<Booking>,
}
