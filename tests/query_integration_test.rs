use anyhow::Result;
use zoo_query::adapters::fixture::{ELEPHANTS_ID, LIONS_ID, OLA_ID, TIGERS_ID};
use zoo_query::core::{AnimalCount, Entrants};
use zoo_query::{AnimalMapOptions, Employee, Location, Sex, ZooQueryService};

fn service() -> ZooQueryService {
    ZooQueryService::new(zoo_query::adapters::builtin_store())
}

#[test]
fn test_animal_count_matches_resident_lengths() -> Result<()> {
    let service = service();
    let AnimalCount::All(counts) = service.animal_count(None)? else {
        panic!("expected the full count map");
    };

    let store = service.store();
    assert_eq!(counts.len(), store.animals.len());
    assert!(counts.keys().eq(store.animals.iter().map(|g| g.name.as_str())));
    for group in &store.animals {
        assert_eq!(counts.get(&group.name), Some(&group.residents.len()));
    }
    Ok(())
}

#[test]
fn test_animal_count_json_in_store_order() -> Result<()> {
    let service = service();
    let json = serde_json::to_string(&service.animal_count(None)?)?;
    assert!(json.starts_with(r#"{"lions":4,"tigers":2,"bears":3,"#));
    assert!(json.ends_with(r#""giraffes":6}"#));
    assert_eq!(serde_json::to_string(&service.animal_count(Some("bears"))?)?, "3");
    Ok(())
}

#[test]
fn test_is_manager_agrees_with_managers_lists() {
    let service = service();
    for employee in &service.store().employees {
        let listed = service
            .store()
            .employees
            .iter()
            .any(|e| e.managers.contains(&employee.id));
        assert_eq!(service.is_manager(&employee.id), listed, "{}", employee.full_name());
    }
}

#[test]
fn test_entry_calculator_ignores_unknown_brackets() {
    let service = service();
    let mut entrants = Entrants::new();
    entrants.insert("Senior".to_string(), 2);
    entrants.insert("Pet".to_string(), 9);
    assert!((service.entry_calculator(Some(&entrants)) - 49.98).abs() < 1e-9);
}

#[test]
fn test_coverage_json_shape() -> Result<()> {
    let service = service();
    let coverage = service.employee_coverage(Some("Stephanie"))?;
    assert_eq!(
        serde_json::to_value(&coverage)?,
        serde_json::json!({ "Stephanie Strauss": ["giraffes", "otters"] })
    );

    let all = service.employee_coverage(None)?;
    assert_eq!(all.len(), service.store().employees.len());
    assert_eq!(
        all.get("Ola Orloff").unwrap(),
        &vec!["otters", "frogs", "snakes", "elephants"]
    );
    Ok(())
}

#[test]
fn test_add_employee_is_visible_to_queries() -> Result<()> {
    let mut service = service();
    service.add_employee(
        Employee::new("new-keeper", "Jane", "Goodall")
            .with_managers([OLA_ID])
            .with_responsible_for([TIGERS_ID, ELEPHANTS_ID]),
    );

    let coverage = service.employee_coverage(Some("Goodall"))?;
    assert_eq!(coverage.get("Jane Goodall").unwrap(), &vec!["tigers", "elephants"]);
    assert_eq!(service.oldest_from_first_species("new-keeper")?, ("Shu".to_string(), 19));
    Ok(())
}

#[test]
fn test_animal_map_json_shape() -> Result<()> {
    let service = service();
    let map = service.animal_map(AnimalMapOptions::default());
    assert_eq!(
        serde_json::to_value(&map)?,
        serde_json::json!({
            "NE": ["lions", "giraffes"],
            "NW": ["tigers", "bears", "elephants"],
            "SE": ["penguins", "otters"],
            "SW": ["frogs", "snakes"]
        })
    );

    let named = service.animal_map(AnimalMapOptions {
        include_names: true,
        sex: Some(Sex::Female),
        sorted: true,
    });
    assert_eq!(
        serde_json::to_value(&named[&Location::NE])?,
        serde_json::json!([
            { "lions": ["Dee", "Zena"] },
            { "giraffes": ["Gracia", "Vicky"] }
        ])
    );
    Ok(())
}

#[test]
fn test_schedule_json_shape() -> Result<()> {
    let service = service();
    assert_eq!(
        serde_json::to_value(service.schedule(Some("Monday"))?)?,
        serde_json::json!({ "Monday": "CLOSED" })
    );
    assert_eq!(
        serde_json::to_value(service.schedule(Some("Saturday"))?)?,
        serde_json::json!({ "Saturday": "Open from 8am until 10pm" })
    );
    Ok(())
}

#[test]
fn test_lookup_failures_are_not_found() {
    let service = service();
    let failures = [
        service.animals_older_than("griffins", 1).map(|_| ()),
        service.animal_count(Some("griffins")).map(|_| ()),
        service.schedule(Some("Caturday")).map(|_| ()),
        service.oldest_from_first_species("nobody").map(|_| ()),
        service.employee_coverage(Some("nobody")).map(|_| ()),
        service.employee_by_name(Some("nobody")).map(|_| ()),
    ];
    for failure in failures {
        assert!(failure.unwrap_err().is_not_found());
    }
    assert!(service.get_employee_by_name_or_id("nobody").is_none());
    assert!(service.animals_by_ids(&["nobody"]).is_empty());
}

#[test]
fn test_animals_by_ids_variadic() {
    let service = service();
    let groups = service.animals_by_ids(&[ELEPHANTS_ID, LIONS_ID, ELEPHANTS_ID]);
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].name, "lions");
    assert_eq!(groups[1].name, "elephants");
}
