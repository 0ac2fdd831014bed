// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused)]

#[macro_use]
extern crate log;

use std::error::Error;
use std::process;

use clap::{crate_authors, crate_version, App, Arg, ArgGroup, ArgMatches};

use parking_solver::config::{Config, Format};
use parking_solver::puzzle::{self, Puzzle};
use parking_solver::solution_formatter::SolutionFormatter;
use parking_solver::{LoadPuzzle, Solve};

fn main() {
    env_logger::init();

    let matches = App::new("parking-solver")
        .author(crate_authors!())
        .version(crate_version!())
        .about("Finds the fewest slides that get the target car out of a parking lot")
        .arg(
            Arg::with_name("compact")
                .short("c")
                .long("compact")
                .help("print one character per cell"),
        )
        .arg(
            Arg::with_name("spaced")
                .short("s")
                .long("spaced")
                .help("print cells separated by spaces (default)"),
        )
        .group(ArgGroup::with_name("format").args(&["compact", "spaced"]))
        .arg(
            Arg::with_name("quiet")
                .short("q")
                .long("quiet")
                .help("don't print status when the search reaches a new depth"),
        )
        .arg(
            Arg::with_name("max-states")
                .short("m")
                .long("max-states")
                .takes_value(true)
                .value_name("N")
                .validator(|value| {
                    value
                        .parse::<usize>()
                        .map(|_| ())
                        .map_err(|err| format!("{}: {}", value, err))
                })
                .help("give up after visiting this many states"),
        )
        .arg(
            Arg::with_name("builtin")
                .short("b")
                .long("builtin")
                .takes_value(true)
                .value_name("NUMBER")
                .possible_values(&["1", "2", "3"])
                .help("solve one of the built-in puzzles"),
        )
        .arg(
            Arg::with_name("file")
                .required_unless("builtin")
                .conflicts_with("builtin")
                .help("puzzle file in spaced or compact format"),
        )
        .get_matches();

    if let Err(err) = run(&matches) {
        println!("{}", err);
        process::exit(1);
    }
}

fn run(matches: &ArgMatches<'_>) -> Result<(), Box<dyn Error>> {
    let format = if matches.is_present("compact") {
        Format::Compact
    } else {
        Format::Spaced
    };
    let max_states = match matches.value_of("max-states") {
        Some(value) => Some(value.parse()?),
        None => None,
    };
    let config = Config::new(!matches.is_present("quiet"), max_states);
    debug!("{:?}", config);

    let (name, puzzle) = load(matches)?;

    println!("Solving {}...", name);
    println!("{}", puzzle.format(format));

    let solver_ok = puzzle.solve(&config)?;
    println!("{}", solver_ok.stats);

    match solver_ok.path {
        Some(_) => {
            let actions = solver_ok.actions();
            println!("Found solution:");
            print!(
                "{}",
                SolutionFormatter::new(&puzzle.board, &puzzle.state, &actions, format)
            );
            println!("{}", actions);
            println!("Actions: {}", actions.len());
        }
        None => println!("No solution"),
    }
    Ok(())
}

fn load(matches: &ArgMatches<'_>) -> Result<(String, Puzzle), Box<dyn Error>> {
    if let Some(number) = matches.value_of("builtin") {
        let puzzle = number
            .parse()
            .ok()
            .and_then(puzzle::builtin)
            .ok_or_else(|| format!("No built-in puzzle {}", number))?;
        return Ok((format!("built-in puzzle {}", number), puzzle));
    }

    let path = matches
        .value_of("file")
        .ok_or("Either a file or --builtin is required")?;
    let puzzle = path
        .load_puzzle()
        .map_err(|err| format!("Can't load {}: {}", path, err))?;
    Ok((path.to_owned(), puzzle))
}
