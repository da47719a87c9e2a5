// End-to-end matrix generation: configuration file in, JSON document out.

use vmci_service::{ConfigParser, JobMatrix};

const CONFIG: &str = r#"
supported_versions:
  - version: "22.04"
    lts: "jammy"
    image_offer: "0001-com-ubuntu-server-jammy"
    image_sku: "22_04-lts-gen2"
    python: "3.10"
    status: "active"
  - version: "20.04"
    image_offer: "0001-com-ubuntu-server-focal"
    image_sku: "20_04-lts-gen2"
    python: "3.8"
    status: "deprecated"

upcoming_versions:
  - version: "25.04"
    image_offer: "ubuntu-25_04"
    image_sku: "server"
    python: "3.13"
    pre_release_image:
      offer: "ubuntu-25_04-daily"
      sku: "server-daily"
"#;

fn write_config(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("ubuntu-versions.yml");
    std::fs::write(&path, CONFIG).unwrap();
    path
}

#[test]
fn generates_supported_matrix_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = ConfigParser::from_file(write_config(&dir)).unwrap();

    let matrix = JobMatrix::generate(&config, false);
    assert_eq!(matrix.include.len(), 2);

    let jammy = &matrix.include[0];
    assert_eq!(jammy.ubuntu_version, "22.04");
    assert_eq!(jammy.ubuntu_lts, "jammy");
    assert!(!jammy.continue_on_error);

    let focal = &matrix.include[1];
    assert_eq!(focal.ubuntu_lts, "20.04");
    assert!(focal.continue_on_error);
}

#[test]
fn upcoming_entries_use_pre_release_image_and_come_last() {
    let dir = tempfile::tempdir().unwrap();
    let config = ConfigParser::from_file(write_config(&dir)).unwrap();

    let matrix = JobMatrix::generate(&config, true);
    assert_eq!(matrix.include.len(), 3);

    let upcoming = matrix.include.last().unwrap();
    assert_eq!(upcoming.ubuntu_version, "25.04");
    assert_eq!(upcoming.image_offer, "ubuntu-25_04-daily");
    assert_eq!(upcoming.image_sku, "server-daily");
    assert!(upcoming.continue_on_error);
}

#[test]
fn json_document_has_single_include_field() {
    let dir = tempfile::tempdir().unwrap();
    let config = ConfigParser::from_file(write_config(&dir)).unwrap();

    let json = JobMatrix::generate(&config, true).to_json().unwrap();
    assert!(!json.contains('\n'));

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 1);
    assert_eq!(object["include"].as_array().unwrap().len(), 3);
}
