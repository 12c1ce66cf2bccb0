//! Integration tests for concurrent batch execution

use chrono::{TimeZone, Utc};
use patient_index::core::{execute, parse_batch, run_batch, FixedClock, PatientIndex, Query};
use std::path::PathBuf;
use std::sync::Arc;

fn shared_index() -> Arc<PatientIndex> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/patients.json");
    let now = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
    Arc::new(
        PatientIndex::load(path)
            .unwrap()
            .with_clock(Arc::new(FixedClock::new(now))),
    )
}

#[tokio::test]
async fn test_batch_preserves_order_and_reports_failures() {
    let input = r#"
{"op": "listPatients"}
{"op": "getPatient", "patientId": "PAT-002"}

{"op": "appointments", "patientId": "PAT-001", "type": "past"}
{"op": "testResults", "patientId": "PAT-404"}
this is not json
{"op": "searchByName", "lastName": "garc"}
"#;

    let report = run_batch(shared_index(), parse_batch(input), 3).await;

    assert_eq!(report.responses.len(), 6);
    assert_eq!(report.failed, 2);
    assert!(!report.all_succeeded());

    let responses: Vec<_> = report
        .responses
        .into_iter()
        .map(|r| r.into_value())
        .collect();

    assert_eq!(responses[0]["count"], 3);
    assert_eq!(responses[1]["patient"]["patientId"], "PAT-002");
    assert_eq!(responses[2]["type"], "past");
    assert_eq!(
        responses[3]["detail"],
        "Patient with ID PAT-404 not found"
    );
    assert!(responses[4]["detail"]
        .as_str()
        .unwrap()
        .starts_with("Query error: Invalid query on line 7"));
    assert_eq!(responses[5]["patients"][0]["patientId"], "PAT-003");
}

#[tokio::test]
async fn test_batch_matches_sequential_execution() {
    let index = shared_index();
    let queries: Vec<Query> = index
        .all()
        .iter()
        .flat_map(|p| {
            let id = p.patient_id.to_string();
            vec![
                Query::Appointments {
                    patient_id: id.clone(),
                    kind: None,
                },
                Query::TestResults {
                    patient_id: id.clone(),
                    test_type: Some("Laboratory".to_string()),
                },
                Query::MedicalHistory { patient_id: id },
            ]
        })
        .collect();

    let expected: Vec<_> = queries
        .iter()
        .map(|q| execute(&index, q).into_value())
        .collect();

    let lines = queries.into_iter().map(Ok).collect();
    let report = run_batch(Arc::clone(&index), lines, 8).await;

    assert!(report.all_succeeded());
    let actual: Vec<_> = report
        .responses
        .into_iter()
        .map(|r| r.into_value())
        .collect();
    assert_eq!(actual, expected);
}

#[tokio::test]
async fn test_concurrent_readers_share_one_index() {
    let index = shared_index();
    let mut handles = Vec::new();

    for _ in 0..16 {
        let index = Arc::clone(&index);
        handles.push(tokio::spawn(async move {
            index.search_by_name(None, Some("john")).len()
        }));
    }

    for handle in handles {
        assert_eq!(handle.await.unwrap(), 2);
    }
}

#[tokio::test]
async fn test_empty_batch() {
    let report = run_batch(shared_index(), parse_batch("\n\n"), 4).await;
    assert!(report.responses.is_empty());
    assert!(report.all_succeeded());
}
