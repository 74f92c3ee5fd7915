use crate::model::{Booking, DayRule, Gender, SlotTemplate};
use anyhow::{bail, Context};
use csv::{ReaderBuilder, StringRecord};
use std::fs;
use std::path::Path;

/// En-têtes exigés de la feuille importée, dans l'ordre attendu.
pub const REQUIRED_HEADERS: [&str; 6] = [
    "Slot_ID",
    "Start_Time",
    "End_Time",
    "Day",
    "Gender",
    "Capacity",
];

/// Résultat d'un import : les gabarits parsés plus les avertissements de
/// qualité de données (coercitions numériques, valeurs inconnues). Les
/// avertissements ne bloquent jamais ; un en-tête manquant, si.
#[derive(Debug, Default)]
pub struct ImportReport {
    pub templates: Vec<SlotTemplate>,
    pub warnings: Vec<String>,
}

/// Import des gabarits depuis la première (et seule) feuille, rendue en CSV.
/// Header exigé : `Slot_ID,Start_Time,End_Time,Day,Gender,Capacity`.
pub fn import_templates_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<ImportReport> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(&path)
        .with_context(|| format!("reading sheet {}", path.as_ref().display()))?;
    let headers = rdr.headers()?.clone();
    let cols = resolve_columns(&headers)?;

    let mut report = ImportReport::default();
    for (idx, rec) in rdr.records().enumerate() {
        let rec = rec?;
        // ligne 1 = en-tête
        let row = idx + 2;
        if let Some(template) = parse_row(&rec, &cols, row, &mut report.warnings) {
            report.templates.push(template);
        }
    }
    Ok(report)
}

/// Indices de colonnes des six en-têtes exigés.
struct Columns {
    slot_id: usize,
    start_time: usize,
    end_time: usize,
    day: usize,
    gender: usize,
    capacity: usize,
}

fn resolve_columns(headers: &StringRecord) -> anyhow::Result<Columns> {
    let find = |name: &str| headers.iter().position(|h| h.trim() == name);
    let missing: Vec<&str> = REQUIRED_HEADERS
        .iter()
        .copied()
        .filter(|name| find(name).is_none())
        .collect();
    if !missing.is_empty() {
        bail!(
            "sheet is missing required column(s): {} (expected {})",
            missing.join(", "),
            REQUIRED_HEADERS.join(", ")
        );
    }
    Ok(Columns {
        slot_id: find("Slot_ID").unwrap_or_default(),
        start_time: find("Start_Time").unwrap_or_default(),
        end_time: find("End_Time").unwrap_or_default(),
        day: find("Day").unwrap_or_default(),
        gender: find("Gender").unwrap_or_default(),
        capacity: find("Capacity").unwrap_or_default(),
    })
}

/// Parse une ligne en gabarit. Coercition défensive : cellule absente = chaîne
/// vide, capacité illisible = 0, slot id illisible = None — toujours avec
/// avertissement, jamais de panique.
fn parse_row(
    rec: &StringRecord,
    cols: &Columns,
    row: usize,
    warnings: &mut Vec<String>,
) -> Option<SlotTemplate> {
    let cell = |idx: usize| rec.get(idx).unwrap_or("").trim();

    let day_raw = cell(cols.day);
    let day = match DayRule::parse(day_raw) {
        Some(day) => day,
        None => {
            warnings.push(format!("row {row}: unknown Day value `{day_raw}`, row ignored"));
            return None;
        }
    };

    let slot_raw = cell(cols.slot_id);
    let slot_id = match slot_raw.parse::<u32>() {
        Ok(id) => Some(id),
        Err(_) => {
            warnings.push(format!("row {row}: Slot_ID `{slot_raw}` is not numeric"));
            None
        }
    };

    let capacity_raw = cell(cols.capacity);
    let capacity = match capacity_raw.parse::<u32>() {
        Ok(n) => n,
        Err(_) => {
            warnings.push(format!(
                "row {row}: Capacity `{capacity_raw}` is not a non-negative integer, using 0"
            ));
            0
        }
    };

    let gender_raw = cell(cols.gender);
    let gender = Gender::parse(gender_raw);
    if let Gender::Other(_) = gender {
        warnings.push(format!("row {row}: unrecognized Gender value `{gender_raw}`"));
    }

    let template = SlotTemplate {
        slot_id,
        start_time: cell(cols.start_time).to_owned(),
        end_time: cell(cols.end_time).to_owned(),
        day,
        gender,
        capacity,
    };
    if template.start().is_none() {
        warnings.push(format!(
            "row {row}: Start_Time `{}` is not HH:MM",
            template.start_time
        ));
    }
    if template.end().is_none() {
        warnings.push(format!(
            "row {row}: End_Time `{}` is not HH:MM",
            template.end_time
        ));
    }
    Some(template)
}

/// Charge des réservations depuis un export JSON externe.
pub fn load_bookings_json<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Booking>> {
    let data = fs::read(&path)
        .with_context(|| format!("reading bookings {}", path.as_ref().display()))?;
    let bookings: Vec<Booking> =
        serde_json::from_slice(&data).with_context(|| "parsing bookings JSON")?;
    Ok(bookings)
}
