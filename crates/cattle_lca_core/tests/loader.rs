mod common;

use cattle_lca_core::model::cohort::Cohort;
use cattle_lca_core::{DbError, Loader, LookupError};

#[test]
fn loader_builds_every_wrapper_for_a_supported_country() {
    for country in ["ireland", "france"] {
        let loader = Loader::from_connection(common::seeded_memory_store(), country)
            .expect("seeded loader");

        assert_eq!(loader.country().as_str(), country);
        assert!(loader.is_complete());
        assert_eq!(loader.grass().len(), 3);
        assert_eq!(loader.concentrates().len(), 2);
        assert_eq!(loader.upstream().len(), 8);
        assert!(loader.animal_features().is_loaded());
        assert!(loader.emissions_factors().is_loaded());
    }
}

#[test]
fn concentrate_lookup_matches_seed_data() {
    let loader = Loader::from_connection(common::seeded_memory_store(), "ireland")
        .expect("seeded loader");

    assert_eq!(
        loader
            .concentrates()
            .gross_energy_mje_dry_matter("Maize")
            .expect("gross energy mje dry matter"),
        18.7
    );
    assert_eq!(
        loader
            .concentrates()
            .gross_energy_mje_dry_matter("Unicorn")
            .unwrap_err(),
        LookupError::UnknownConcentrateType("Unicorn".to_string())
    );
}

#[test]
fn emissions_factors_are_scoped_to_the_country() {
    let ireland = Loader::from_connection(common::seeded_memory_store(), "ireland")
        .expect("seeded loader");
    let france = Loader::from_connection(common::seeded_memory_store(), "france")
        .expect("seeded loader");

    assert_eq!(ireland.emissions_factors().get("ef_urea").expect("seeded factor"), 0.45);
    assert_eq!(france.emissions_factors().get("ef_urea").expect("seeded factor"), 0.55);
}

#[test]
fn unsupported_country_builds_but_lookups_are_missing_values() {
    let loader = Loader::from_connection(common::seeded_memory_store(), "atlantis")
        .expect("seeded loader");

    assert!(!loader.is_complete());
    assert!(loader.grass().is_loaded());
    match loader.emissions_factors().get("ef_urea").unwrap_err() {
        LookupError::MissingValue { key, field, .. } => {
            assert_eq!(key, "atlantis");
            assert_eq!(field, "ef_urea");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(matches!(
        loader.animal_features().weight_gain(Cohort::Bulls),
        Err(LookupError::MissingValue { .. })
    ));
}

#[test]
fn duplicated_country_row_fails_construction() {
    let conn = common::seeded_memory_store();
    conn.execute_batch(
        "INSERT INTO emissions_factors_database (ef_country, ef_urea) VALUES ('ireland', 0.5);",
    )
    .expect("duplicate country row");

    let err = Loader::from_connection(conn, "ireland").unwrap_err();
    assert!(matches!(err, DbError::InvalidData(_)));
}

#[test]
fn null_forage_value_is_distinct_from_unknown_forage() {
    let loader = Loader::from_connection(common::seeded_memory_store(), "ireland")
        .expect("seeded loader");
    let grass = loader.grass();

    assert!(matches!(
        grass.forage_dry_matter_digestibility("Poa"),
        Err(LookupError::MissingValue { .. })
    ));
    assert_eq!(
        grass.forage_dry_matter_digestibility("Molinia").unwrap_err(),
        LookupError::UnknownForageType("Molinia".to_string())
    );
    let average = grass.forage_dry_matter_digestibility("average")
        .expect("forage dry matter digestibility");
    assert!((average - 0.75).abs() < 1e-12);
}

#[test]
fn loader_opens_a_file_store() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = common::seeded_file_store(dir.path());

    let loader = Loader::open(&path, "ireland").expect("open store");
    assert_eq!(
        loader.upstream().upstream_kg_co2e("diesel_direct").expect("upstream kg co2e"),
        2.7
    );
}

#[test]
fn missing_store_fails_fast() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = Loader::open(dir.path().join("absent.db"), "ireland").unwrap_err();
    assert!(matches!(err, DbError::StoreUnavailable { .. }));
}
