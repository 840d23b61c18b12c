use anyhow::Result;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};
use zoo_query::domain::ports::DataSource;
use zoo_query::{ZooConfig, ZooError, ZooQueryService};

fn write_zoo_json(dir: &TempDir) -> Result<String> {
    let data = serde_json::json!({
        "animals": [
            {
                "id": "a1",
                "name": "capybaras",
                "location": "SW",
                "residents": [
                    { "name": "Pip", "sex": "male", "age": 4 },
                    { "name": "Moss", "sex": "female", "age": 6 }
                ]
            },
            { "id": "a2", "name": "owls", "location": "NE", "residents": [] }
        ],
        "employees": [
            { "id": "k1", "firstName": "Lia", "lastName": "Moreno", "managers": [], "responsibleFor": ["a1", "a2"] },
            { "id": "k2", "firstName": "Tom", "lastName": "Reyes", "managers": ["k1"], "responsibleFor": ["a2"] }
        ],
        "prices": { "Adult": 12.5, "Child": 5.0 },
        "hours": { "Tuesday": { "open": 9, "close": 17 } }
    });
    let path = dir.path().join("zoo.json");
    std::fs::write(&path, serde_json::to_string_pretty(&data)?)?;
    Ok(path.to_string_lossy().replace('\\', "/"))
}

#[test]
fn test_json_store_through_config() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let data_path = write_zoo_json(&temp_dir)?;

    let mut config_file = NamedTempFile::new()?;
    write!(
        config_file,
        r#"
[store]
source = "json"
path = "{}"

[logging]
level = "warn"
"#,
        data_path
    )?;

    let config = ZooConfig::from_file(config_file.path())?;
    let source = config.data_source()?;
    let mut service = ZooQueryService::from_source(&source)?;

    assert!(service.is_manager("k1"));
    assert!(!service.is_manager("k2"));
    assert_eq!(service.oldest_from_first_species("k1")?, ("Moss".to_string(), 6));
    assert_eq!(
        service.schedule(Some("Tuesday"))?.get("Tuesday").unwrap(),
        "Open from 9am until 5pm"
    );

    // owls 沒有 resident
    let err = service.oldest_from_first_species("k2").unwrap_err();
    assert!(matches!(err, ZooError::NoResidents { ref species } if species == "owls"));

    service.increase_prices(10.0);
    let prices = &service.store().prices;
    assert!((prices["Adult"] - 13.75).abs() < 1e-9);
    assert!((prices["Child"] - 5.5).abs() < 1e-9);
    Ok(())
}

#[test]
fn test_missing_json_store_fails_to_load() -> Result<()> {
    let config = ZooConfig::from_toml_str(
        r#"
[store]
source = "json"
path = "/no/such/zoo.json"
"#,
    )?;
    let err = config.data_source()?.load().unwrap_err();
    assert!(matches!(err, ZooError::IoError(_)));
    Ok(())
}
