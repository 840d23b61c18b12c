use clap::{Parser, Subcommand};

use crate::domain::model::Sex;

#[derive(Debug, Clone, Parser)]
#[command(name = "zoo")]
#[command(about = "Query the zoo's animals, staff, prices and opening hours")]
pub struct CliConfig {
    #[arg(long, help = "TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, help = "JSON data file, overrides the configured store")]
    pub data: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Resident count per species, or for one species
    Count { species: Option<String> },

    /// Species (or resident names) per location
    Map {
        #[arg(long)]
        names: bool,
        #[arg(long)]
        sex: Option<Sex>,
        #[arg(long)]
        sorted: bool,
    },

    /// Opening hours for one day, or the whole week
    Schedule { day: Option<String> },

    /// Animals each employee is responsible for
    Coverage { id_or_name: Option<String> },

    /// Total admission fee
    Entry {
        #[arg(long, default_value_t = 0)]
        adult: u32,
        #[arg(long, default_value_t = 0)]
        child: u32,
        #[arg(long, default_value_t = 0)]
        senior: u32,
    },

    /// Whether every resident of a species is at least AGE years old
    OlderThan { species: String, age: u32 },

    /// Oldest resident of the employee's first species
    Oldest { employee_id: String },

    /// Whether anyone lists ID as a manager
    IsManager { id: String },

    /// Animal groups by id
    ByIds {
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// First employee with this first or last name
    Employee { name: Option<String> },

    /// Apply a price adjustment and print the new table
    RaisePrices {
        #[arg(allow_negative_numbers = true)]
        percentage: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_map_flags() {
        let config =
            CliConfig::try_parse_from(["zoo", "map", "--names", "--sex", "female", "--sorted"])
                .unwrap();
        match config.command {
            Command::Map { names, sex, sorted } => {
                assert!(names);
                assert_eq!(sex, Some(Sex::Female));
                assert!(sorted);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_parse_global_options() {
        let config =
            CliConfig::try_parse_from(["zoo", "--data", "zoo.json", "--verbose", "count", "lions"])
                .unwrap();
        assert_eq!(config.data.as_deref(), Some("zoo.json"));
        assert!(config.verbose);
        assert!(matches!(config.command, Command::Count { species: Some(ref s) } if s == "lions"));
    }

    #[test]
    fn test_by_ids_requires_an_id() {
        assert!(CliConfig::try_parse_from(["zoo", "by-ids"]).is_err());
    }
}
