use crate::model::{Booking, ExpandedSlot};
use anyhow::Context;
use std::fs;
use std::path::Path;

/// Valeur scalaire d'une cellule. `Empty` se rend en chaîne vide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    Empty,
    Int(i64),
    Text(String),
}

impl From<&str> for Field {
    fn from(s: &str) -> Self {
        Field::Text(s.to_owned())
    }
}

impl From<Option<u32>> for Field {
    fn from(n: Option<u32>) -> Self {
        match n {
            Some(n) => Field::Int(i64::from(n)),
            None => Field::Empty,
        }
    }
}

/// Ligne tabulaire : paires (en-tête, valeur) dans leur ordre naturel.
#[derive(Debug, Clone, Default)]
pub struct Row(pub Vec<(String, Field)>);

impl Row {
    pub fn push<F: Into<Field>>(&mut self, name: &str, value: F) {
        self.0.push((name.to_owned(), value.into()));
    }

    fn get(&self, name: &str) -> Option<&Field> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }
}

/// Sérialise des lignes uniformes en CSV façon RFC4180.
///
/// - Séquence vide -> chaîne vide.
/// - L'en-tête vient des noms de la première ligne, dans son ordre ; les
///   lignes suivantes sont indexées par ces seuls noms (nom absent = cellule
///   vide, nom en trop = ignoré).
/// - Un champ est entouré de guillemets, guillemets internes doublés, si et
///   seulement si son texte contient virgule, guillemet, LF ou CR.
/// - Lignes jointes par LF, sans saut de ligne final.
pub fn to_csv(rows: &[Row]) -> String {
    let Some(first) = rows.first() else {
        return String::new();
    };
    let headers: Vec<&str> = first.0.iter().map(|(name, _)| name.as_str()).collect();

    let mut out = String::new();
    for (i, name) in headers.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        push_field(&mut out, name);
    }

    for row in rows {
        out.push('\n');
        for (i, name) in headers.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            let mut buf = itoa::Buffer::new();
            let text = match row.get(name) {
                None | Some(Field::Empty) => "",
                Some(Field::Int(n)) => buf.format(*n),
                Some(Field::Text(s)) => s.as_str(),
            };
            push_field(&mut out, text);
        }
    }
    out
}

fn push_field(out: &mut String, text: &str) {
    if !text.contains([',', '"', '\n', '\r']) {
        out.push_str(text);
        return;
    }
    out.push('"');
    for ch in text.chars() {
        if ch == '"' {
            out.push('"');
        }
        out.push(ch);
    }
    out.push('"');
}

/// Lignes d'export des capacités (mêmes colonnes que la feuille importée,
/// plus la date).
pub fn capacity_rows(expanded: &[ExpandedSlot]) -> Vec<Row> {
    expanded
        .iter()
        .map(|slot| {
            let mut row = Row::default();
            row.push("Date", Field::Text(slot.date.to_string()));
            row.push("Slot_ID", slot.template.slot_id);
            row.push("Start_Time", slot.template.start_time.as_str());
            row.push("End_Time", slot.template.end_time.as_str());
            row.push("Day", slot.template.day.as_str());
            row.push("Gender", slot.template.gender.as_str());
            row.push("Capacity", Field::Int(i64::from(slot.template.capacity)));
            row
        })
        .collect()
}

/// Lignes d'export de la table des réservations.
pub fn booking_rows(bookings: &[Booking]) -> Vec<Row> {
    bookings
        .iter()
        .map(|b| {
            let mut row = Row::default();
            row.push("Booking_ID", b.id.as_str());
            row.push("Date", Field::Text(b.date.to_string()));
            row.push("Slot_ID", b.slot_id);
            row.push("Start_Time", b.start_time.as_str());
            row.push("End_Time", b.end_time.as_str());
            row.push("Gender", b.gender.as_str());
            row.push("Seats", Field::Int(i64::from(b.seats)));
            row.push("Pilgrim_Name", b.pilgrim_name.as_str());
            row.push("Document_No", b.document_no.as_str());
            row.push("Group", b.group_label.as_deref().unwrap_or(""));
            row.push("Status", b.status.as_str());
            row.push("Created_At", Field::Text(b.created_at.to_rfc3339()));
            row
        })
        .collect()
}

/// Export `capacities.csv` : les lignes visibles après filtrage, pas
/// seulement la page courante.
pub fn export_capacities_csv<P: AsRef<Path>>(path: P, expanded: &[ExpandedSlot]) -> anyhow::Result<()> {
    let csv = to_csv(&capacity_rows(expanded));
    fs::write(&path, csv)
        .with_context(|| format!("writing {}", path.as_ref().display()))?;
    Ok(())
}

/// Export `booked_slots.csv` : toutes les réservations.
pub fn export_bookings_csv<P: AsRef<Path>>(path: P, bookings: &[Booking]) -> anyhow::Result<()> {
    let csv = to_csv(&booking_rows(bookings));
    fs::write(&path, csv)
        .with_context(|| format!("writing {}", path.as_ref().display()))?;
    Ok(())
}
