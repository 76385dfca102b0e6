mod common;

#[test]
fn test_write_catalog_csv() {
    let path = std::path::PathBuf::from("test_generated_catalog.csv");
    common::write_catalog_csv(&path).expect("Failed to generate catalog CSV");

    let content = std::fs::read_to_string(&path).expect("Failed to read file");
    // Header + 3 products = 4 lines
    assert_eq!(content.lines().count(), 4);

    std::fs::remove_file(path).ok();
}

#[test]
fn test_generate_actions_csv() {
    let path = std::path::PathBuf::from("test_generated_actions.csv");
    common::generate_actions_csv(&path, 7, 5).expect("Failed to generate actions CSV");

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(&path)
        .expect("Failed to open CSV");

    let mut rows = 0;
    for result in reader.records() {
        let record = result.expect("Failed to read record");
        assert_eq!(&record[0], "add");
        assert_eq!(&record[1], "7");
        rows += 1;
    }
    assert_eq!(rows, 5);

    std::fs::remove_file(path).ok();
}
