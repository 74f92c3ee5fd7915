#![forbid(unsafe_code)]
use chrono::{NaiveDate, Weekday};
use insta::assert_snapshot;
use rawdah::{
    capacity_rows, to_csv,
    model::{DayRule, ExpandedSlot, Gender, SlotTemplate},
    Field, Row,
};

fn row(pairs: &[(&str, Field)]) -> Row {
    let mut row = Row::default();
    for (name, value) in pairs {
        row.push(name, value.clone());
    }
    row
}

#[test]
fn plain_ascii_rows_are_unquoted() {
    let rows = vec![row(&[("A", Field::from("hello")), ("B", Field::Int(123))])];
    assert_eq!(to_csv(&rows), "A,B\nhello,123");
}

#[test]
fn empty_input_yields_empty_string() {
    assert_eq!(to_csv(&[]), "");
}

#[test]
fn no_trailing_newline() {
    let rows = vec![
        row(&[("A", Field::from("x"))]),
        row(&[("A", Field::from("y"))]),
    ];
    assert_eq!(to_csv(&rows), "A\nx\ny");
}

#[test]
fn comma_forces_quoting() {
    let rows = vec![row(&[("A", Field::from("needs,comma"))])];
    assert_eq!(to_csv(&rows), "A\n\"needs,comma\"");
}

#[test]
fn internal_quotes_are_doubled() {
    let rows = vec![row(&[("A", Field::from("He said \"hi\""))])];
    assert_eq!(to_csv(&rows), "A\n\"He said \"\"hi\"\"\"");
}

#[test]
fn line_feed_is_preserved_inside_quotes() {
    let rows = vec![row(&[("A", Field::from("two\nlines"))])];
    assert_eq!(to_csv(&rows), "A\n\"two\nlines\"");
}

#[test]
fn carriage_return_forces_quoting() {
    let rows = vec![row(&[("A", Field::from("cr\rhere"))])];
    assert_eq!(to_csv(&rows), "A\n\"cr\rhere\"");
}

#[test]
fn comma_and_quote_combine_into_one_quoted_field() {
    let rows = vec![row(&[("A", Field::from("combo, \"quote\""))])];
    assert_eq!(to_csv(&rows), "A\n\"combo, \"\"quote\"\"\"");
}

#[test]
fn header_comes_from_first_row_only() {
    let rows = vec![
        row(&[("A", Field::from("1")), ("B", Field::from("2"))]),
        // B manquant -> cellule vide ; C en trop -> ignoré
        row(&[("A", Field::from("3")), ("C", Field::from("9"))]),
    ];
    assert_eq!(to_csv(&rows), "A,B\n1,2\n3,");
}

#[test]
fn empty_field_renders_as_empty_cell() {
    let rows = vec![row(&[("A", Field::Empty), ("B", Field::Int(0))])];
    assert_eq!(to_csv(&rows), "A,B\n,0");
}

#[test]
fn capacity_export_readout() {
    let expanded = vec![
        ExpandedSlot {
            date: NaiveDate::from_ymd_opt(2025, 10, 26).unwrap(),
            template: SlotTemplate {
                slot_id: Some(1),
                start_time: "08:00".into(),
                end_time: "10:00".into(),
                day: DayRule::Day(Weekday::Sun),
                gender: Gender::Men,
                capacity: 40,
            },
        },
        ExpandedSlot {
            date: NaiveDate::from_ymd_opt(2025, 10, 27).unwrap(),
            template: SlotTemplate {
                slot_id: None,
                start_time: "10:00".into(),
                end_time: "12:00".into(),
                day: DayRule::All,
                gender: Gender::Women,
                capacity: 25,
            },
        },
    ];
    assert_snapshot!(to_csv(&capacity_rows(&expanded)), @r"
    Date,Slot_ID,Start_Time,End_Time,Day,Gender,Capacity
    2025-10-26,1,08:00,10:00,Sunday,Men,40
    2025-10-27,,10:00,12:00,All,Women,25
    ");
}
