use anyhow::{anyhow, Context, Result};
use clap::{arg, value_parser, Command};
use rand::Rng;
use std::path::PathBuf;
use std::time::Instant;
use tsp_ga::ga::{GaConfig, GaEngine};
use tsp_ga::map::{generate_cities, load_map, save_dot};
use tsp_ga::random::rng_from_seed;
use tsp_ga::tsp::{City, DistanceTable};

/// Per-generation population dumps are only printed for small problems.
const VERBOSE_LIMIT: usize = 10;

fn cli() -> Command {
    let run_args = [
        arg!(<POPULATION> "Number of tours in the population").value_parser(value_parser!(usize)),
        arg!(<GENERATIONS> "Number of generations to run").value_parser(value_parser!(usize)),
        arg!(--"mutation-chance" [CHANCE] "Swap threshold in [0, 1]; higher means fewer swaps")
            .value_parser(value_parser!(f64))
            .default_value("0.2"),
        arg!(--seed [SEED] "Random seed for a reproducible run").value_parser(value_parser!(u64)),
        arg!(--output [OUTPUT] "Graphviz file for the best tour")
            .value_parser(value_parser!(PathBuf))
            .default_value("graph.dot"),
    ];

    Command::new("tsp-ga")
        .about("Approximates the Traveling Salesman Problem with a genetic algorithm")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("auto")
                .about("Generates random cities and evolves a tour")
                .arg(arg!(<CITIES> "Number of cities").value_parser(value_parser!(usize)))
                .args(run_args.clone()),
        )
        .subcommand(
            Command::new("load")
                .about("Loads cities from a map file and evolves a tour")
                .arg(arg!(<MAP> "Path to the map file").value_parser(value_parser!(PathBuf)))
                .args(run_args),
        )
}

struct RunOptions {
    config: GaConfig,
    output: PathBuf,
}

fn run_options(matches: &clap::ArgMatches) -> Result<RunOptions> {
    let population = *matches
        .get_one::<usize>("POPULATION")
        .ok_or_else(|| anyhow!("missing POPULATION"))?;
    let generations = *matches
        .get_one::<usize>("GENERATIONS")
        .ok_or_else(|| anyhow!("missing GENERATIONS"))?;
    let mutation_chance = matches
        .get_one::<f64>("mutation-chance")
        .copied()
        .unwrap_or(0.2);

    let mut config = GaConfig {
        population_size: population,
        max_generations: generations,
        mutation_chance,
        seed: None,
    };
    if let Some(&seed) = matches.get_one::<u64>("seed") {
        config = config.with_seed(seed);
    }
    config.validate()?;

    let output = matches
        .get_one::<PathBuf>("output")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("graph.dot"));
    Ok(RunOptions { config, output })
}

fn main() {
    let matches = cli().get_matches();

    if let Err(e) = match matches.subcommand() {
        Some(("auto", sub_m)) => auto(sub_m),
        Some(("load", sub_m)) => load(sub_m),
        _ => Err(anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn auto(matches: &clap::ArgMatches) -> Result<()> {
    let count = *matches
        .get_one::<usize>("CITIES")
        .ok_or_else(|| anyhow!("missing CITIES"))?;
    let options = run_options(matches)?;

    print!("Generating cities... ");
    let start = Instant::now();
    let mut rng = rng_from_seed(options.config.seed);
    let cities = generate_cities(count, &mut rng);
    println!(
        "done ({} cities in {} microseconds)",
        cities.len(),
        start.elapsed().as_micros()
    );

    evolve(cities, options, rng)
}

fn load(matches: &clap::ArgMatches) -> Result<()> {
    let path = matches
        .get_one::<PathBuf>("MAP")
        .ok_or_else(|| anyhow!("missing MAP"))?;
    let options = run_options(matches)?;

    print!("Loading cities... ");
    let start = Instant::now();
    let cities = load_map(path).with_context(|| "Failed to load map")?;
    println!(
        "done ({} cities in {} microseconds)",
        cities.len(),
        start.elapsed().as_micros()
    );

    let rng = rng_from_seed(options.config.seed);
    evolve(cities, options, rng)
}

/// Runs the GA, continuing to draw from `rng`.
fn evolve<R: Rng>(cities: Vec<City>, options: RunOptions, rng: R) -> Result<()> {
    let RunOptions { config, output } = options;
    let generations = config.max_generations;

    print!("Generating LookUpTable... ");
    let start = Instant::now();
    let mut engine = GaEngine::with_rng(cities, config, rng)?;
    println!(
        "done ({} entries in {} microseconds)",
        engine.distances().len(),
        start.elapsed().as_micros()
    );

    print!("Generating first population... ");
    let start = Instant::now();
    engine.seed()?;
    println!(
        "done ({} entries in {} microseconds)",
        engine.population().len(),
        start.elapsed().as_micros()
    );

    print_table(engine.distances());
    print_stats(&engine);

    let verbose =
        engine.cities().len() <= VERBOSE_LIMIT && engine.population().len() <= VERBOSE_LIMIT;
    for generation in 1..=generations {
        println!("Generation {generation}");
        engine.step()?;
        if verbose {
            print_stats(&engine);
        }
        println!("=========================================\n");
    }

    println!("Final stats after {generations} generations");
    print_stats(&engine);

    print!("Writing graph data... ");
    let best = engine
        .best()
        .ok_or_else(|| anyhow!("engine has no best tour"))?;
    save_dot(&output, engine.cities(), best)?;
    println!("done");
    Ok(())
}

fn print_table(table: &DistanceTable) {
    println!("LUT: {{");
    for ((a, b), distance) in table.iter() {
        println!("\t{a:>2} to {b:>2} is {distance}pts;");
    }
    println!("}} // LUT");
}

fn print_stats<R: Rng>(engine: &GaEngine<R>) {
    println!("population: {{");
    for tour in engine.population() {
        println!("\tw: {:?}, {} pts;", tour.nodes, tour.fitness);
    }
    println!("}} // population");

    if let Some(best) = engine.best() {
        let cities = engine.cities();
        let visits: Vec<String> = best
            .nodes
            .iter()
            .map(|&id| format!("{}({},{})", id, cities[id].x, cities[id].y))
            .collect();
        println!(
            "best in current executor: [ {} ] with score {}",
            visits.join(" "),
            best.fitness
        );
    }
}
