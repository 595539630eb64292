//! Raw records through normalization to a CSV file.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use admanager_orders_integration_tests::OrderFixture;
use admanager_orders_report::admanager::{RawOrderRecord, RawShape};
use admanager_orders_report::export::{CsvExporter, ExportError};
use admanager_orders_report::normalize::{BatchPolicy, IanaTimeZones, normalize, normalize_batch};

fn read_rows(path: &std::path::Path) -> (csv::StringRecord, Vec<csv::StringRecord>) {
    let mut reader = csv::Reader::from_path(path).unwrap();
    let headers = reader.headers().unwrap().clone();
    let rows = reader.records().map(Result::unwrap).collect();
    (headers, rows)
}

#[test]
fn test_complete_and_open_ended_orders() {
    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("report.csv");

    let complete = OrderFixture::new(1001, "Spring Launch");
    let mut open_ended = OrderFixture::new(1002, "Evergreen").open_ended();
    open_ended.micro_amount = 750_000;

    let records = vec![
        RawOrderRecord::new(RawShape::LegacyDict, complete.legacy()),
        RawOrderRecord::new(RawShape::LegacyDict, open_ended.legacy()),
    ];
    let batch = normalize_batch(records, &IanaTimeZones, BatchPolicy::Abort).unwrap();
    CsvExporter::new()
        .export_csv(&batch.orders, &destination)
        .unwrap();

    let text = std::fs::read_to_string(&destination).unwrap();
    assert_eq!(text.lines().count(), 3);

    let (headers, rows) = read_rows(&destination);
    let end = headers.iter().position(|h| h == "endDateTime").unwrap();
    let budget = headers.iter().position(|h| h == "totalBudget").unwrap();

    assert_eq!(rows[0].get(end), Some("2024-01-20 09:15:00-05:00"));
    assert_eq!(rows[1].get(end), Some(""));
    assert_eq!(rows[0].get(budget), Some("2500000000"));
    assert_eq!(rows[1].get(budget), Some("750000"));
}

#[test]
fn test_generations_agree_on_canonical_order() {
    let fixture = OrderFixture::new(2001, "Same Order Everywhere");

    let legacy = normalize(RawOrderRecord::sniffed(fixture.legacy()), &IanaTimeZones).unwrap();
    let oauth = normalize(RawOrderRecord::sniffed(fixture.oauth()), &IanaTimeZones).unwrap();
    let soap = normalize(RawOrderRecord::sniffed(fixture.soap()), &IanaTimeZones).unwrap();

    assert_eq!(legacy, oauth);
    assert_eq!(oauth, soap);
}

#[test]
fn test_sniffing_tells_generations_apart() {
    let fixture = OrderFixture::new(3001, "Sniffed");
    assert_eq!(
        RawOrderRecord::sniffed(fixture.legacy()).shape(),
        RawShape::LegacyDict
    );
    assert_eq!(
        RawOrderRecord::sniffed(fixture.oauth()).shape(),
        RawShape::OAuthDict
    );
    assert_eq!(
        RawOrderRecord::sniffed(fixture.soap()).shape(),
        RawShape::SoapObject
    );
}

#[test]
fn test_special_characters_survive_export() {
    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("report.csv");
    let name = "Acme, \"Premium\" Order\nsecond line ✓";

    let order = normalize(
        RawOrderRecord::sniffed(OrderFixture::new(4001, name).soap()),
        &IanaTimeZones,
    )
    .unwrap();
    CsvExporter::new().export_csv(&[order], &destination).unwrap();

    let (headers, rows) = read_rows(&destination);
    let column = headers.iter().position(|h| h == "name").unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get(column), Some(name));
}

#[test]
fn test_unknown_zone_exports_naive_timestamp() {
    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("report.csv");
    let mut fixture = OrderFixture::new(5001, "Zoneless");
    fixture.zone = "Not/AZone".to_string();

    let order = normalize(RawOrderRecord::sniffed(fixture.oauth()), &IanaTimeZones).unwrap();
    CsvExporter::new().export_csv(&[order], &destination).unwrap();

    let (headers, rows) = read_rows(&destination);
    let end = headers.iter().position(|h| h == "endDateTime").unwrap();
    assert_eq!(rows[0].get(end), Some("2024-01-20 09:15:00"));
}

#[test]
fn test_empty_export_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("report.csv");

    let err = CsvExporter::new().export_csv(&[], &destination).unwrap_err();

    assert!(matches!(err, ExportError::EmptyInput));
    assert!(!destination.exists());
}
