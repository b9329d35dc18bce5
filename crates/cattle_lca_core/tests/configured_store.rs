mod common;

use cattle_lca_core::{configure_database_path, database_path, LcaDataManager, Loader};

#[test]
fn configured_path_backs_country_constructors() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = common::seeded_file_store(dir.path());

    configure_database_path(&path).expect("configure database path");
    configure_database_path(&path).expect("configure database path");
    assert_eq!(database_path(), path);

    let other = dir.path().join("other.db");
    let err = configure_database_path(&other).unwrap_err();
    assert!(err.contains("refusing to switch"));

    let loader = Loader::new("ireland").expect("loader from configured path");
    assert!(loader.is_complete());

    let manager = LcaDataManager::new("ireland").expect("manager from configured path");
    assert_eq!(manager.get_ef_urea().expect("ef urea"), 0.45);
    assert_eq!(manager.country().as_str(), "ireland");
}
