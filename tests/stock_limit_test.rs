use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::path::PathBuf;
use std::process::Command;

mod common;

#[test]
fn test_add_beyond_stock_is_reported_and_capped() {
    let catalog_path = PathBuf::from("stock_catalog.csv");
    common::write_catalog_csv(&catalog_path).unwrap();

    // Product 2 has stock 2; the third add must be rejected.
    let actions_path = PathBuf::from("stock_actions.csv");
    common::generate_actions_csv(&actions_path, 2, 3).unwrap();

    let mut cmd = Command::new(cargo_bin!("trolley"));
    cmd.arg(&catalog_path).arg(&actions_path);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Requested quantity is out of stock"))
        .stdout(predicate::str::contains("2,Canvas Tote,59.9,2,119.8"));

    std::fs::remove_file(catalog_path).ok();
    std::fs::remove_file(actions_path).ok();
}

#[test]
fn test_zero_stock_product_never_enters_cart() {
    let catalog_path = PathBuf::from("zero_stock_catalog.csv");
    common::write_catalog_csv(&catalog_path).unwrap();

    // Product 3 has stock 0.
    let actions_path = PathBuf::from("zero_stock_actions.csv");
    common::generate_actions_csv(&actions_path, 3, 1).unwrap();

    let mut cmd = Command::new(cargo_bin!("trolley"));
    cmd.arg(&catalog_path).arg(&actions_path);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Requested quantity is out of stock"))
        .stdout(predicate::str::contains("Wool Socks").not());

    std::fs::remove_file(catalog_path).ok();
    std::fs::remove_file(actions_path).ok();
}

#[test]
fn test_remove_absent_product_is_reported() {
    let catalog_path = PathBuf::from("remove_catalog.csv");
    common::write_catalog_csv(&catalog_path).unwrap();

    let actions_path = PathBuf::from("remove_actions.csv");
    let mut wtr = csv::Writer::from_path(&actions_path).unwrap();
    wtr.write_record(["type", "product", "amount"]).unwrap();
    wtr.write_record(["remove", "1", ""]).unwrap();
    wtr.flush().unwrap();
    drop(wtr);

    let mut cmd = Command::new(cargo_bin!("trolley"));
    cmd.arg(&catalog_path).arg(&actions_path);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Product is not in the cart"));

    std::fs::remove_file(catalog_path).ok();
    std::fs::remove_file(actions_path).ok();
}

#[test]
fn test_unknown_product_is_a_remote_failure() {
    let catalog_path = PathBuf::from("unknown_catalog.csv");
    common::write_catalog_csv(&catalog_path).unwrap();

    // Product 99 is not served by the catalog or stock services.
    let actions_path = PathBuf::from("unknown_actions.csv");
    common::generate_actions_csv(&actions_path, 99, 1).unwrap();

    let mut cmd = Command::new(cargo_bin!("trolley"));
    cmd.arg(&catalog_path).arg(&actions_path);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Failed to reach the remote service"));

    std::fs::remove_file(catalog_path).ok();
    std::fs::remove_file(actions_path).ok();
}
