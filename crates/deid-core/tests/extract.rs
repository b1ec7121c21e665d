//! Tests for the extraction core: traversal, table merge, distinct values.

use deid_core::{distinct_operations, extract};
use deid_model::{COL_NO_DEID, ConfigError, ConfigNode};

fn mapping(entries: Vec<(&str, ConfigNode)>) -> ConfigNode {
    ConfigNode::Mapping(
        entries
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect(),
    )
}

fn scalar(value: &str) -> ConfigNode {
    ConfigNode::Scalar(value.to_string())
}

fn operation(col_id: &str, op_name: &str) -> ConfigNode {
    mapping(vec![
        ("col_id", scalar(col_id)),
        ("op_name", scalar(op_name)),
    ])
}

fn exemption(col_id: &str) -> ConfigNode {
    mapping(vec![("col_id", scalar(col_id))])
}

fn table(table_id: &str, operations: Vec<ConfigNode>, exemptions: Vec<ConfigNode>) -> ConfigNode {
    mapping(vec![
        ("table_id", scalar(table_id)),
        ("col_deid_operations", ConfigNode::List(operations)),
        ("col_no_deid", ConfigNode::List(exemptions)),
    ])
}

fn dataset_section(tables: Vec<ConfigNode>) -> ConfigNode {
    mapping(vec![("tables_to_deid", ConfigNode::List(tables))])
}

#[test]
fn collects_every_table_under_any_dataset_section() {
    let config = mapping(vec![
        (
            "starr_omop_deid_template",
            dataset_section(vec![
                table("PERSON", vec![], vec![]),
                table("VISIT", vec![], vec![]),
            ]),
        ),
        (
            "exports",
            mapping(vec![(
                "nested",
                mapping(vec![(
                    "n3c_deid_template",
                    dataset_section(vec![table("DEATH", vec![], vec![])]),
                )]),
            )]),
        ),
    ]);

    let info = extract(&config).expect("extract");
    let ids: Vec<_> = info.table_ids().collect();
    assert_eq!(ids, vec!["DEATH", "PERSON", "VISIT"]);
}

#[test]
fn dataset_name_is_the_immediate_parent_key_uppercased() {
    let config = mapping(vec![(
        "projects",
        mapping(vec![(
            "pediatric",
            mapping(vec![(
                "deid_template",
                dataset_section(vec![table(
                    "PERSON",
                    vec![operation("person_id", "sub_rand_anon_long_id_by_person_id")],
                    vec![],
                )]),
            )]),
        )]),
    )]);

    let info = extract(&config).expect("extract");
    assert_eq!(
        info.operation("PERSON", "DEID_TEMPLATE", "person_id"),
        Some("sub_rand_anon_long_id_by_person_id")
    );
    // Proximity rule: no composite path names.
    assert!(info.table("PERSON").unwrap().get("PROJECTS").is_none());
    assert!(
        info.table("PERSON")
            .unwrap()
            .get("PEDIATRIC_DEID_TEMPLATE")
            .is_none()
    );
}

#[test]
fn same_section_key_across_branches_merges_into_one_dataset() {
    let config = mapping(vec![
        (
            "left",
            mapping(vec![(
                "deid_template",
                dataset_section(vec![table(
                    "PERSON",
                    vec![operation("a", "del_cnt_STRING")],
                    vec![],
                )]),
            )]),
        ),
        (
            "right",
            mapping(vec![(
                "deid_template",
                dataset_section(vec![table(
                    "PERSON",
                    vec![operation("b", "del_cnt_INT64")],
                    vec![],
                )]),
            )]),
        ),
    ]);

    let info = extract(&config).expect("extract");
    let datasets = info.table("PERSON").expect("table present");
    assert_eq!(datasets.len(), 1);
    let columns = datasets.get("DEID_TEMPLATE").expect("merged bucket");
    assert_eq!(columns.len(), 2);
}

#[test]
fn column_ids_merge_case_insensitively() {
    let config = mapping(vec![
        (
            "starr_omop_deid_template",
            dataset_section(vec![table(
                "PERSON",
                vec![operation("MRN", "sub_rand_anon_id_by_person_source_value")],
                vec![],
            )]),
        ),
        (
            "n3c_deid_template",
            dataset_section(vec![table("PERSON", vec![], vec![exemption("mrn")])]),
        ),
    ]);

    let info = extract(&config).expect("extract");
    assert_eq!(
        info.operation("PERSON", "STARR_OMOP_DEID_TEMPLATE", "mrn"),
        Some("sub_rand_anon_id_by_person_source_value")
    );
    assert_eq!(
        info.operation("PERSON", "N3C_DEID_TEMPLATE", "mrn"),
        Some(COL_NO_DEID)
    );
    for columns in info.table("PERSON").unwrap().values() {
        assert_eq!(columns.keys().collect::<Vec<_>>(), vec!["mrn"]);
    }
}

#[test]
fn exemption_always_wins_over_operation() {
    let config = mapping(vec![(
        "deid_template",
        dataset_section(vec![table(
            "PERSON",
            vec![operation("BIRTH_DATE", "jitt_date_by_person_id")],
            vec![exemption("birth_date")],
        )]),
    )]);

    let info = extract(&config).expect("extract");
    assert_eq!(
        info.operation("PERSON", "DEID_TEMPLATE", "birth_date"),
        Some(COL_NO_DEID)
    );
}

#[test]
fn table_with_empty_lists_is_still_registered() {
    let config = mapping(vec![(
        "deid_template",
        dataset_section(vec![mapping(vec![("table_id", scalar("OBSERVATION"))])]),
    )]);

    let info = extract(&config).expect("extract");
    let datasets = info.table("OBSERVATION").expect("table registered");
    assert!(datasets.get("DEID_TEMPLATE").unwrap().is_empty());
}

#[test]
fn scalar_and_list_values_are_ignored_during_traversal() {
    let config = mapping(vec![
        ("version", scalar("5.3")),
        ("labels", ConfigNode::List(vec![scalar("a"), scalar("b")])),
        ("notes", ConfigNode::Null),
        (
            "deid_template",
            dataset_section(vec![table("PERSON", vec![], vec![])]),
        ),
    ]);

    let info = extract(&config).expect("extract");
    assert_eq!(info.len(), 1);
}

#[test]
fn missing_table_id_aborts_the_run() {
    let config = mapping(vec![(
        "deid_template",
        dataset_section(vec![mapping(vec![(
            "col_no_deid",
            ConfigNode::List(vec![exemption("mrn")]),
        )])]),
    )]);

    let error = extract(&config).unwrap_err();
    assert!(matches!(&error, ConfigError::MissingKey { key, .. } if key == "table_id"));
}

#[test]
fn missing_col_id_names_the_key() {
    let config = mapping(vec![(
        "deid_template",
        dataset_section(vec![table(
            "PERSON",
            vec![mapping(vec![("op_name", scalar("del_cnt_DATE"))])],
            vec![],
        )]),
    )]);

    let error = extract(&config).unwrap_err();
    assert!(matches!(&error, ConfigError::MissingKey { key, .. } if key == "col_id"));
    assert!(error.to_string().contains("PERSON"));
}

#[test]
fn non_list_tables_to_deid_is_a_shape_error() {
    let config = mapping(vec![(
        "deid_template",
        mapping(vec![("tables_to_deid", scalar("PERSON"))]),
    )]);

    let error = extract(&config).unwrap_err();
    assert!(matches!(error, ConfigError::UnexpectedShape { .. }));
    assert!(error.to_string().contains("DEID_TEMPLATE"));
}

#[test]
fn distinct_values_cover_every_label_and_the_sentinel() {
    let config = mapping(vec![
        (
            "starr_omop_deid_template",
            dataset_section(vec![table(
                "PERSON",
                vec![
                    operation("birth_date", "jitt_date_by_person_id"),
                    operation("person_id", "sub_rand_anon_long_id_by_person_id"),
                ],
                vec![exemption("ethnicity")],
            )]),
        ),
        (
            "n3c_deid_template",
            dataset_section(vec![table(
                "VISIT",
                vec![operation("visit_date", "jitt_date_by_person_id")],
                vec![],
            )]),
        ),
    ]);

    let info = extract(&config).expect("extract");
    let distinct = distinct_operations(&info);
    assert_eq!(
        distinct.iter().map(String::as_str).collect::<Vec<_>>(),
        vec![
            COL_NO_DEID,
            "jitt_date_by_person_id",
            "sub_rand_anon_long_id_by_person_id",
        ]
    );
}
