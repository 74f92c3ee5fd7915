#![forbid(unsafe_code)]
use chrono::Weekday;
use rawdah::{
    import_templates_csv,
    model::{DayRule, Gender, Session},
    storage::{JsonStorage, Storage},
    Planner,
};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_sheet(dir: &Path, contents: &str) -> std::path::PathBuf {
    let path = dir.join("sheet.csv");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn import_valid_sheet() {
    let dir = tempdir().unwrap();
    let path = write_sheet(
        dir.path(),
        "Slot_ID,Start_Time,End_Time,Day,Gender,Capacity\n\
         1,08:00,10:00,Sunday,Men,40\n\
         2,10:00,12:00,All,Women,25\n",
    );

    let report = import_templates_csv(&path).unwrap();
    assert!(report.warnings.is_empty());
    assert_eq!(report.templates.len(), 2);
    assert_eq!(report.templates[0].slot_id, Some(1));
    assert_eq!(report.templates[0].day, DayRule::Day(Weekday::Sun));
    assert_eq!(report.templates[1].day, DayRule::All);
    assert_eq!(report.templates[1].gender, Gender::Women);
}

#[test]
fn missing_header_is_a_hard_failure() {
    let dir = tempdir().unwrap();
    let path = write_sheet(
        dir.path(),
        "Slot_ID,Start_Time,End_Time,Day,Capacity\n1,08:00,10:00,Sunday,40\n",
    );

    let err = import_templates_csv(&path).unwrap_err();
    assert!(err.to_string().contains("Gender"));
}

#[test]
fn malformed_capacity_coerces_to_zero_with_warning() {
    let dir = tempdir().unwrap();
    let path = write_sheet(
        dir.path(),
        "Slot_ID,Start_Time,End_Time,Day,Gender,Capacity\n1,08:00,10:00,Sunday,Men,lots\n",
    );

    let report = import_templates_csv(&path).unwrap();
    assert_eq!(report.templates.len(), 1);
    assert_eq!(report.templates[0].capacity, 0);
    assert!(report.warnings.iter().any(|w| w.contains("Capacity")));
}

#[test]
fn missing_slot_id_is_none_with_warning() {
    let dir = tempdir().unwrap();
    let path = write_sheet(
        dir.path(),
        "Slot_ID,Start_Time,End_Time,Day,Gender,Capacity\n,08:00,10:00,Sunday,Men,40\n",
    );

    let report = import_templates_csv(&path).unwrap();
    assert_eq!(report.templates[0].slot_id, None);
    assert!(report.warnings.iter().any(|w| w.contains("Slot_ID")));
}

#[test]
fn unknown_day_drops_row_with_warning() {
    let dir = tempdir().unwrap();
    let path = write_sheet(
        dir.path(),
        "Slot_ID,Start_Time,End_Time,Day,Gender,Capacity\n\
         1,08:00,10:00,Someday,Men,40\n\
         2,10:00,12:00,Monday,Men,20\n",
    );

    let report = import_templates_csv(&path).unwrap();
    assert_eq!(report.templates.len(), 1);
    assert_eq!(report.templates[0].slot_id, Some(2));
    assert!(report.warnings.iter().any(|w| w.contains("Someday")));
}

#[test]
fn unrecognized_gender_is_kept_with_warning() {
    let dir = tempdir().unwrap();
    let path = write_sheet(
        dir.path(),
        "Slot_ID,Start_Time,End_Time,Day,Gender,Capacity\n1,08:00,10:00,Sunday,Family,40\n",
    );

    let report = import_templates_csv(&path).unwrap();
    assert_eq!(
        report.templates[0].gender,
        Gender::Other("Family".to_string())
    );
    assert!(report.warnings.iter().any(|w| w.contains("Gender")));
}

#[test]
fn short_row_defaults_absent_cells_to_empty() {
    let dir = tempdir().unwrap();
    // ligne tronquée après Day : Gender et Capacity absents
    let path = write_sheet(
        dir.path(),
        "Slot_ID,Start_Time,End_Time,Day,Gender,Capacity\n1,08:00,10:00,Sunday\n",
    );

    let report = import_templates_csv(&path).unwrap();
    assert_eq!(report.templates.len(), 1);
    assert_eq!(report.templates[0].capacity, 0);
    assert_eq!(report.templates[0].gender, Gender::Other(String::new()));
}

#[test]
fn session_save_and_load_roundtrip() {
    let dir = tempdir().unwrap();
    let sheet = write_sheet(
        dir.path(),
        "Slot_ID,Start_Time,End_Time,Day,Gender,Capacity\n1,08:00,10:00,All,Men,40\n",
    );
    let report = import_templates_csv(&sheet).unwrap();

    let mut planner = Planner::new();
    planner.replace_templates(report.templates);
    planner
        .plan(rawdah::model::DateRange::new(
            chrono::NaiveDate::from_ymd_opt(2025, 10, 24).unwrap(),
            chrono::NaiveDate::from_ymd_opt(2025, 10, 26).unwrap(),
        ))
        .unwrap();
    planner.apply();

    let storage = JsonStorage::open(dir.path().join("session.json")).unwrap();
    storage.save(planner.session()).unwrap();

    let loaded: Session = storage.load().unwrap();
    assert_eq!(loaded.templates, planner.session().templates);
    assert_eq!(loaded.expanded, planner.session().expanded);
    assert_eq!(loaded.applied_dates.len(), 3);
}
