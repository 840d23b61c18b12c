use crate::domain::model::{
    AnimalGroup, Employee, HoursTable, Location, OpeningHours, PriceTable, Resident, Sex,
};
use crate::domain::ports::DataSource;
use crate::domain::store::DataStore;
use crate::utils::error::Result;

pub const LIONS_ID: &str = "0938aa23-f153-4937-9f88-4858b24d6bce";
pub const TIGERS_ID: &str = "e8481c1d-42ea-4610-8e11-1752cfc05a46";
pub const BEARS_ID: &str = "baa6e93a-f295-44e7-8f70-2bcdc6f6948d";
pub const PENGUINS_ID: &str = "533bebf3-6bbe-41d8-9cdf-46f7d13b62ae";
pub const OTTERS_ID: &str = "ef3778eb-2844-4c7c-b66c-f432073e1c6b";
pub const FROGS_ID: &str = "89be95b3-47e4-4c5b-b687-1fabf2afa274";
pub const SNAKES_ID: &str = "78460a91-f4da-4dea-a469-86fd2b8ccc84";
pub const ELEPHANTS_ID: &str = "bb2a76d8-5fe3-4d03-84b7-dba9cfc048b5";
pub const GIRAFFES_ID: &str = "01422318-ca2d-46b8-b66c-3e9e188244ed";

pub const NIGEL_ID: &str = "c5b83cb3-a451-49e2-ac45-ff3f54fbc7e1";
pub const BURL_ID: &str = "0e7b460e-acf4-4e17-bcb3-ee472265db83";
pub const OLA_ID: &str = "fdb2543b-5662-46a7-badc-93d960fdc0a8";
pub const WILBURN_ID: &str = "56d43ba3-a5a7-40f6-8dd7-cbb05082383f";
pub const STEPHANIE_ID: &str = "9e7d4524-363c-416a-8759-8aa7e50c0992";
pub const SHARONDA_ID: &str = "4b40a139-d4dc-4f09-822d-ec25e819a5ad";
pub const ARDITH_ID: &str = "c1f50212-35a6-4ecd-8223-f835538526c2";
pub const EMERY_ID: &str = "b0dc644a-5335-489b-8a2c-4e086c7819a2";

/// 內建的園區資料
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinFixture;

impl DataSource for BuiltinFixture {
    fn load(&self) -> Result<DataStore> {
        Ok(builtin_store())
    }
}

fn resident(name: &str, sex: Sex, age: u32) -> Resident {
    Resident::new(name, age).with_sex(sex)
}

fn group(
    id: &str,
    name: &str,
    location: Location,
    popularity: u8,
    residents: Vec<Resident>,
) -> AnimalGroup {
    AnimalGroup {
        id: id.to_string(),
        name: name.to_string(),
        location,
        popularity: Some(popularity),
        residents,
    }
}

fn animals() -> Vec<AnimalGroup> {
    use Sex::{Female, Male};

    vec![
        group(
            LIONS_ID,
            "lions",
            Location::NE,
            4,
            vec![
                resident("Zena", Female, 12),
                resident("Maxwell", Male, 15),
                resident("Faustino", Male, 7),
                resident("Dee", Female, 14),
            ],
        ),
        group(
            TIGERS_ID,
            "tigers",
            Location::NW,
            5,
            vec![resident("Shu", Female, 19), resident("Esther", Female, 17)],
        ),
        group(
            BEARS_ID,
            "bears",
            Location::NW,
            5,
            vec![
                resident("Hiram", Male, 4),
                resident("Edwardo", Male, 4),
                resident("Milan", Male, 4),
            ],
        ),
        group(
            PENGUINS_ID,
            "penguins",
            Location::SE,
            4,
            vec![
                resident("Joe", Male, 10),
                resident("Tad", Male, 12),
                resident("Keri", Female, 2),
                resident("Nicholas", Male, 2),
            ],
        ),
        group(
            OTTERS_ID,
            "otters",
            Location::SE,
            4,
            vec![
                resident("Neville", Male, 9),
                resident("Lloyd", Male, 8),
                resident("Mercedes", Female, 9),
                resident("Margherita", Female, 10),
            ],
        ),
        group(
            FROGS_ID,
            "frogs",
            Location::SW,
            2,
            vec![resident("Cathey", Female, 3), resident("Annice", Female, 2)],
        ),
        group(
            SNAKES_ID,
            "snakes",
            Location::SW,
            3,
            vec![resident("Paulette", Female, 5), resident("Bill", Male, 6)],
        ),
        group(
            ELEPHANTS_ID,
            "elephants",
            Location::NW,
            5,
            vec![
                resident("Ilana", Female, 11),
                resident("Orval", Male, 15),
                resident("Bea", Female, 12),
                resident("Jefferson", Male, 4),
            ],
        ),
        group(
            GIRAFFES_ID,
            "giraffes",
            Location::NE,
            4,
            vec![
                resident("Gracia", Female, 11),
                resident("Antone", Male, 9),
                resident("Vicky", Female, 12),
                resident("Clay", Male, 4),
                resident("Arron", Male, 7),
                resident("Bernard", Male, 6),
            ],
        ),
    ]
}

fn employees() -> Vec<Employee> {
    vec![
        Employee::new(NIGEL_ID, "Nigel", "Nelson")
            .with_managers([BURL_ID, OLA_ID])
            .with_responsible_for([LIONS_ID, TIGERS_ID]),
        Employee::new(BURL_ID, "Burl", "Bethea")
            .with_managers([STEPHANIE_ID])
            .with_responsible_for([LIONS_ID, TIGERS_ID, BEARS_ID, PENGUINS_ID]),
        Employee::new(OLA_ID, "Ola", "Orloff")
            .with_managers([STEPHANIE_ID])
            .with_responsible_for([OTTERS_ID, FROGS_ID, SNAKES_ID, ELEPHANTS_ID]),
        Employee::new(WILBURN_ID, "Wilburn", "Wishart")
            .with_managers([BURL_ID, OLA_ID])
            .with_responsible_for([SNAKES_ID, ELEPHANTS_ID]),
        Employee::new(STEPHANIE_ID, "Stephanie", "Strauss")
            .with_responsible_for([GIRAFFES_ID, OTTERS_ID]),
        Employee::new(SHARONDA_ID, "Sharonda", "Spry")
            .with_managers([BURL_ID, OLA_ID])
            .with_responsible_for([OTTERS_ID, FROGS_ID]),
        Employee::new(ARDITH_ID, "Ardith", "Azevado")
            .with_managers([BURL_ID, OLA_ID])
            .with_responsible_for([TIGERS_ID, BEARS_ID]),
        Employee::new(EMERY_ID, "Emery", "Elser")
            .with_managers([BURL_ID, OLA_ID, STEPHANIE_ID])
            .with_responsible_for([LIONS_ID, BEARS_ID, ELEPHANTS_ID]),
    ]
}

fn prices() -> PriceTable {
    [("Adult", 49.99), ("Senior", 24.99), ("Child", 20.99)]
        .into_iter()
        .map(|(bracket, price)| (bracket.to_string(), price))
        .collect()
}

fn hours() -> HoursTable {
    [
        ("Tuesday", 8, 18),
        ("Wednesday", 8, 18),
        ("Thursday", 10, 20),
        ("Friday", 10, 20),
        ("Saturday", 8, 22),
        ("Sunday", 8, 20),
        ("Monday", 0, 0),
    ]
    .into_iter()
    .map(|(day, open, close)| (day.to_string(), OpeningHours { open, close }))
    .collect()
}

pub fn builtin_store() -> DataStore {
    DataStore::new(animals(), employees(), prices(), hours())
}
