//! End-to-end export flow: dialog session, HTTP source, renderers, file sink

use chrono::{DateTime, Local, NaiveDate};
use mockito::{Matcher, ServerGuard};
use registry_export::adapters::notify::MemoryNotifier;
use registry_export::adapters::output::DirectorySink;
use registry_export::adapters::registry::HttpRegistrationSource;
use registry_export::config::SourceConfig;
use registry_export::core::export::ExportCoordinator;
use registry_export::core::render::{build_table, DocumentLayout, ExportFormat};
use registry_export::core::session::{ExportDialog, ExportOutcome, HomePage};
use registry_export::domain::{DateRange, FieldSelection, FIELD_CATALOG};
use serde_json::json;
use std::sync::Arc;
use tempfile::TempDir;

fn registrations_body() -> String {
    json!({
        "data": [
            {
                "_id": "65f0", "firstName": "Asha", "lastname": "Rao",
                "email": "asha@example.org", "city": "Pune", "__v": 0,
                "createdAt": "2024-01-05T09:15:00.000Z"
            },
            {
                "_id": "65f1", "firstName": "Ravi", "lastname": "Iyer",
                "email": "ravi@example.org", "city": "Chennai", "__v": 0,
                "createdAt": "2024-01-20T16:40:00.000Z"
            }
        ]
    })
    .to_string()
}

/// Creation dates are shown as the operator's local calendar date
fn local_date(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .unwrap()
        .with_timezone(&Local)
        .format("%d-%m-%Y")
        .to_string()
}

struct Harness {
    page: HomePage,
    coordinator: Arc<ExportCoordinator>,
    notifier: MemoryNotifier,
    out: TempDir,
}

fn harness(base_url: String) -> Harness {
    let out = tempfile::tempdir().unwrap();
    let source = HttpRegistrationSource::new(&SourceConfig {
        base_url,
        ..Default::default()
    })
    .unwrap();
    let coordinator = Arc::new(ExportCoordinator::new(
        Arc::new(source),
        Arc::new(DirectorySink::new(out.path())),
    ));
    let notifier = MemoryNotifier::new();
    let page = HomePage::new(ExportDialog::new(
        coordinator.clone(),
        Arc::new(notifier.clone()),
    ));
    Harness {
        page,
        coordinator,
        notifier,
        out,
    }
}

fn january() -> DateRange {
    DateRange::between(
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
    )
}

fn fill(dialog: &ExportDialog, names: &[&str]) {
    let range = january();
    dialog.set_from(range.from);
    dialog.set_to(range.to);
    dialog.set_selection(FieldSelection::from_names(names).unwrap());
}

async fn serve_registrations(server: &mut ServerGuard) -> mockito::Mock {
    server
        .mock("POST", "/registration/getAll")
        .match_body(Matcher::Json(json!({
            "fromDate": "2024/01/01",
            "toDate": "2024/01/31"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(registrations_body())
        .create_async()
        .await
}

#[tokio::test]
async fn test_spreadsheet_export_end_to_end() {
    let mut server = mockito::Server::new_async().await;
    let mock = serve_registrations(&mut server).await;
    let h = harness(server.url());

    let dialog = h.page.open_export();
    fill(dialog, &["Name", "Email"]);
    let outcome = dialog.request_export(ExportFormat::Spreadsheet).await;

    mock.assert_async().await;
    let receipt = match outcome {
        ExportOutcome::Delivered(receipt) => receipt,
        other => panic!("expected delivery, got {other:?}"),
    };
    assert_eq!(receipt.records, 2);
    assert_eq!(receipt.path, h.out.path().join("registrations.xlsx"));

    let bytes = std::fs::read(&receipt.path).unwrap();
    assert_eq!(&bytes[..2], b"PK");

    assert!(!dialog.is_open());
    assert!(dialog.export_state().is_idle());
    assert!(dialog.selection().is_empty());
    assert!(h.notifier.errors().is_empty());
}

#[tokio::test]
async fn test_document_export_end_to_end() {
    let mut server = mockito::Server::new_async().await;
    let _mock = serve_registrations(&mut server).await;
    let h = harness(server.url());

    let dialog = h.page.open_export();
    fill(dialog, &["Name", "Date of Registration"]);
    let outcome = dialog.request_export(ExportFormat::Document).await;

    assert!(outcome.is_delivered());
    let bytes = std::fs::read(h.out.path().join("registrations.pdf")).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[tokio::test]
async fn test_cleaned_table_contents() {
    let mut server = mockito::Server::new_async().await;
    let _mock = serve_registrations(&mut server).await;
    let h = harness(server.url());

    let fields = FieldSelection::from_names(["Name", "Email", "Date of Registration"]).unwrap();
    let job = h
        .coordinator
        .prepare(ExportFormat::Document, &january(), &fields)
        .unwrap();
    let records = h.coordinator.fetch(&job).await.unwrap();

    for record in &records {
        assert!(record.get("lastname").is_none());
        assert!(record.get("city").is_none());
        assert!(record.get("_id").is_none());
    }

    let table = build_table(&records, &fields).unwrap();
    assert_eq!(table.header, vec!["Name", "Email", "Date of Registration"]);
    assert_eq!(
        table.rows,
        vec![
            vec![
                "Asha".to_string(),
                "asha@example.org".to_string(),
                local_date("2024-01-05T09:15:00.000Z"),
            ],
            vec![
                "Ravi".to_string(),
                "ravi@example.org".to_string(),
                local_date("2024-01-20T16:40:00.000Z"),
            ],
        ]
    );

    let layout = DocumentLayout::compute(&table);
    assert_eq!(layout.page_count(), 1);
    assert_eq!(layout.header.cells.len(), table.header.len());
}

#[tokio::test]
async fn test_empty_results_leave_no_file() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/registration/getAll")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"data": []}"#)
        .create_async()
        .await;
    let h = harness(server.url());

    let dialog = h.page.open_export();
    fill(dialog, &["Name"]);
    let outcome = dialog.request_export(ExportFormat::Spreadsheet).await;

    assert!(matches!(outcome, ExportOutcome::Failed(_)));
    assert_eq!(h.notifier.errors(), vec!["Empty Registrations".to_string()]);
    assert!(!h.out.path().join("registrations.xlsx").exists());
    assert!(dialog.export_state().is_idle());
    assert!(dialog.is_open());
}

#[tokio::test]
async fn test_unreachable_source_reports_generic_error() {
    let h = harness("http://127.0.0.1:1".to_string());

    let dialog = h.page.open_export();
    fill(dialog, &["Name"]);
    let outcome = dialog.request_export(ExportFormat::Document).await;

    assert!(matches!(outcome, ExportOutcome::Failed(_)));
    assert_eq!(
        h.notifier.errors(),
        vec!["Error fetching registrations".to_string()]
    );
    assert!(dialog.export_state().is_idle());
    assert!(!dialog.date_range().is_complete());
}

#[tokio::test]
async fn test_validation_happens_before_request() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/registration/getAll")
        .expect(0)
        .create_async()
        .await;
    let h = harness(server.url());

    let dialog = h.page.open_export();
    dialog.select(FIELD_CATALOG[0]);
    let outcome = dialog.request_export(ExportFormat::Spreadsheet).await;

    assert!(matches!(outcome, ExportOutcome::Rejected(_)));
    assert_eq!(
        h.notifier.errors(),
        vec!["Please select both from and to dates.".to_string()]
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_close_makes_no_request() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/registration/getAll")
        .expect(0)
        .create_async()
        .await;
    let h = harness(server.url());

    let dialog = h.page.open_export();
    fill(dialog, &["Name", "Email"]);
    dialog.close();

    assert!(!dialog.is_open());
    assert_eq!(dialog.date_range(), DateRange::default());
    assert!(dialog.selection().is_empty());
    mock.assert_async().await;
}
