use rearranger::*;

fn cells(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn sample_db() -> Database {
    let mut db = Database::new();
    db.create_table(
        "CAD",
        vec![
            ColumnSchema::new("A", ColumnType::Int),
            ColumnSchema::new("B", ColumnType::Int),
            ColumnSchema::new("C", ColumnType::Int),
        ],
    );
    db.create_table(
        "ADNI",
        vec![
            ColumnSchema::new("C", ColumnType::Float),
            ColumnSchema::new("A", ColumnType::Int),
            ColumnSchema::new("B", ColumnType::String),
        ],
    );
    db.insert("CAD", Some("Row0".to_string()), cells(&["1", "2", "3"]))
        .expect("insert");
    db.insert("CAD", Some("Row1".to_string()), cells(&["4", "5", "6"]))
        .expect("insert");
    db
}

#[test]
fn realign_streams_rows_in_order() {
    let source = Schema::from_names(&["A", "B", "C"]);
    let target = Schema::from_names(&["C", "A", "B"]);
    let map = build_column_map(&source, &target).expect("same names");

    let rows = vec![
        Row::with_key("Row0", cells(&["1", "2", "3"])),
        Row::with_key("Row1", cells(&["4", "5", "6"])),
    ];
    let out: Vec<Row> = realign(rows, &map)
        .collect::<std::result::Result<_, _>>()
        .expect("all rows realign");

    assert_eq!(out.len(), 2);
    assert_eq!(out[0].get_values(), &cells(&["3", "1", "2"]));
    assert_eq!(out[1].get_values(), &cells(&["6", "4", "5"]));
    assert_eq!(out[0].key(), Some("Row0"));
    assert_eq!(out[1].key(), Some("Row1"));
}

#[test]
fn realign_is_lazy() {
    let map = ColumnMap::identity(2);
    let mut pulled = 0;
    let rows = (0..5).map(|i| {
        pulled += 1;
        Row::new(vec![i.to_string(), (i * 10).to_string()])
    });
    let mut stream = realign(rows, &map);
    let first = stream.next().expect("one row").expect("realigns");
    assert_eq!(first.get_values(), &cells(&["0", "0"]));
    drop(stream);
    assert_eq!(pulled, 1);
}

#[test]
fn realign_into_counts_rows() {
    let db = sample_db();
    let source = db.get_table("CAD").expect("CAD exists");
    let target = db.get_table("ADNI").expect("ADNI exists");
    let map = build_column_map(&source.schema, &target.schema).expect("same names");

    let mut sink = Table::new("sink", target.schema.clone());
    let written = realign_into(source.rows(), &map, &mut sink).expect("realigns");
    assert_eq!(written, 2);
    assert_eq!(sink.rows[1].get_values(), &cells(&["6", "4", "5"]));
}

#[test]
fn realign_table_takes_target_names_and_types() {
    let db = sample_db();
    let source = db.get_table("CAD").expect("CAD exists");
    let target = db.get_table("ADNI").expect("ADNI exists");

    let out = realign_table(source, &target.schema, "CAD_out").expect("realigns");
    assert_eq!(out.name(), "CAD_out");
    assert_eq!(out.schema, target.schema);
    assert_eq!(out.schema.columns[0].col_type, ColumnType::Float);
    assert_eq!(out.get_value(0, "A"), Some(&"1".to_string()));
    assert_eq!(out.get_value(0, "C"), Some(&"3".to_string()));
    assert_eq!(out.rows[0].key(), Some("Row0"));

    // same (name, value) pairs per row
    for (before, after) in source.rows_named().iter().zip(out.rows_named().iter()) {
        assert_eq!(before, after);
    }
}

#[test]
fn database_realign_adds_output_table() {
    let mut db = sample_db();
    let written = db.realign("CAD", "ADNI", "CAD_rearranged").expect("realigns");
    assert_eq!(written, 2);
    assert_eq!(
        db.list_tables(),
        vec!["ADNI".to_string(), "CAD".to_string(), "CAD_rearranged".to_string()]
    );
    assert_eq!(db.get_table_columns("CAD_rearranged"), cells(&["C", "A", "B"]));
    // source untouched
    assert_eq!(db.get_table_columns("CAD"), cells(&["A", "B", "C"]));

    // replacing the source in place
    db.realign("CAD", "ADNI", "CAD").expect("realigns");
    assert_eq!(db.get_table_columns("CAD"), cells(&["C", "A", "B"]));
    let cad = db.get_table("CAD").expect("CAD exists");
    assert_eq!(cad.name(), "CAD");
    assert_eq!(cad.rows[1].get_values(), &cells(&["6", "4", "5"]));
}

#[test]
fn realigned_database_persists() {
    let mut db = sample_db();
    db.realign("CAD", "ADNI", "out").expect("realigns");

    let tmp = tempfile::NamedTempFile::new().unwrap();
    db.save_to_file(tmp.path(), true).unwrap();
    let loaded = Database::load_from_file(tmp.path()).unwrap();

    let out = loaded.get_table("out").unwrap();
    assert_eq!(out, db.get_table("out").unwrap());
    assert_eq!(out.rows[0].key(), Some("Row0"));

    // compact output loads the same
    db.save_to_file(tmp.path(), false).unwrap();
    let compact = Database::load_from_file(tmp.path()).unwrap();
    assert_eq!(compact.get_table("out").unwrap(), out);
}

#[test]
fn unkeyed_rows_load_from_json() {
    let json = r#"{
        "tables": {
            "t": {
                "name": "t",
                "schema": { "columns": [
                    { "name": "x", "col_type": "Int" },
                    { "name": "y", "col_type": "String" }
                ] },
                "rows": [ { "values": ["1", "a"] } ]
            }
        }
    }"#;
    let tmp = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(tmp.path(), json).unwrap();
    let db = Database::load_from_file(tmp.path()).unwrap();
    let t = db.get_table("t").unwrap();
    assert_eq!(t.rows[0].key(), None);
    assert_eq!(t.get_value(0, "y"), Some(&"a".to_string()));
}
