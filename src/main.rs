use clap::Parser;
use serde::Serialize;
use zoo_query::config::Command;
use zoo_query::core::Entrants;
use zoo_query::domain::ports::DataSource;
use zoo_query::utils::error::ErrorCategory;
use zoo_query::utils::{logger, validation::Validate};
use zoo_query::{AnimalMapOptions, CliConfig, JsonFileSource, ZooConfig, ZooError, ZooQueryService};

fn main() {
    let cli = CliConfig::parse();

    let config = match cli.config.as_deref() {
        Some(path) => ZooConfig::from_file(path),
        None => Ok(ZooConfig::default()),
    };
    let config = match config.and_then(|c| c.validate().map(|_| c)) {
        Ok(config) => config,
        Err(e) => fail(e),
    };

    if config.logging.json {
        logger::init_json_logger(cli.verbose, &config.logging.level);
    } else {
        logger::init_cli_logger(cli.verbose, &config.logging.level);
    }
    tracing::debug!("CLI config: {:?}", cli);

    let source: Box<dyn DataSource> = match cli.data.as_deref() {
        Some(path) => Box::new(JsonFileSource::new(path)),
        None => match config.data_source() {
            Ok(source) => source,
            Err(e) => fail(e),
        },
    };

    let result = ZooQueryService::from_source(&source).and_then(|mut service| run(&mut service, cli.command));
    if let Err(e) = result {
        fail(e);
    }
}

fn run(service: &mut ZooQueryService, command: Command) -> zoo_query::Result<()> {
    match command {
        Command::Count { species } => print_json(&service.animal_count(species.as_deref())?),
        Command::Map { names, sex, sorted } => print_json(&service.animal_map(AnimalMapOptions {
            include_names: names,
            sex,
            sorted,
        })),
        Command::Schedule { day } => print_json(&service.schedule(day.as_deref())?),
        Command::Coverage { id_or_name } => {
            print_json(&service.employee_coverage(id_or_name.as_deref())?)
        }
        Command::Entry {
            adult,
            child,
            senior,
        } => {
            let entrants: Entrants = [("Adult", adult), ("Child", child), ("Senior", senior)]
                .into_iter()
                .map(|(bracket, count)| (bracket.to_string(), count))
                .collect();
            print_json(&service.entry_calculator(Some(&entrants)))
        }
        Command::OlderThan { species, age } => {
            print_json(&service.animals_older_than(&species, age)?)
        }
        Command::Oldest { employee_id } => {
            print_json(&service.oldest_from_first_species(&employee_id)?)
        }
        Command::IsManager { id } => print_json(&service.is_manager(&id)),
        Command::ByIds { ids } => {
            let ids: Vec<&str> = ids.iter().map(String::as_str).collect();
            print_json(&service.animals_by_ids(&ids))
        }
        Command::Employee { name } => print_json(&service.employee_by_name(name.as_deref())?),
        Command::RaisePrices { percentage } => {
            service.increase_prices(percentage);
            print_json(&service.store().prices)
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> zoo_query::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn fail(e: ZooError) -> ! {
    tracing::error!("❌ {} (Category: {:?})", e, e.category());
    eprintln!("❌ {}", e.user_friendly_message());

    let exit_code = match e.category() {
        ErrorCategory::Lookup | ErrorCategory::Data => 1,
        ErrorCategory::Configuration | ErrorCategory::System => 2,
    };
    std::process::exit(exit_code);
}
