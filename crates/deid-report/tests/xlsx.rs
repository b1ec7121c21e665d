//! Tests for workbook rendering.

use deid_model::{DatasetTemplate, DeidInfo, OperationInfo};
use deid_report::{build_matrices, write_report};

fn catalog() -> Vec<OperationInfo> {
    vec![
        OperationInfo {
            name: "col_no_deid".to_string(),
            description: "Columns exempt from DEID".to_string(),
        },
        OperationInfo {
            name: "jitt_date_by_person_id".to_string(),
            description: "Jitter a date by the person's codebook offset".to_string(),
        },
    ]
}

fn templates() -> Vec<DatasetTemplate> {
    vec![
        DatasetTemplate::new("STARR_OMOP_DEID_TEMPLATE", "STARR_OMOP_DEID_TEMPLATE 5.3"),
        DatasetTemplate::new("N3C_DEID_TEMPLATE", "N3C_DEID_TEMPLATE 5.3 (LDS)"),
    ]
}

#[test]
fn writes_workbook_with_catalog_and_table_sheets() {
    let mut info = DeidInfo::new();
    info.columns_mut("PERSON", "STARR_OMOP_DEID_TEMPLATE")
        .insert("birth_date".to_string(), "jitt_date_by_person_id".to_string());
    let matrices = build_matrices(&info, &templates());

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("deid_info_analysis.xlsx");
    write_report(&path, &catalog(), &matrices, &templates()).expect("write report");

    let metadata = std::fs::metadata(&path).expect("workbook exists");
    assert!(metadata.len() > 0);
}

#[test]
fn sheet_name_over_excel_limit_fails_the_run() {
    let mut info = DeidInfo::new();
    info.columns_mut(
        "A_TABLE_NAME_THAT_EXCEEDS_THE_EXCEL_SHEET_LIMIT",
        "N3C_DEID_TEMPLATE",
    );
    let matrices = build_matrices(&info, &templates());

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("invalid.xlsx");
    let error = write_report(&path, &catalog(), &matrices, &templates()).unwrap_err();
    assert!(error.to_string().contains("write sheet"));
    assert!(!path.exists());
}
