use std::{path::PathBuf, process::ExitCode};

use clap::{ArgAction, Parser};
use log::debug;
use mazewalk::{
    logging,
    settings::{SearchAlgo, Settings},
    solve, AppError,
};

#[derive(Parser, Debug)]
#[clap(version, about, name = "mazewalk")]
struct Args {
    #[clap(
        required_unless_present_any = ["reset_config", "show_config_path", "debug_config"],
        help = "Maze file: a `rows columns` line, a `row column` start line, then the grid"
    )]
    file: Option<PathBuf>,
    #[clap(short, long, value_enum, help = "Search to run, defaults to the configured one")]
    algorithm: Option<SearchAlgo>,
    #[clap(short, long, help = "Settings file to use instead of the default one")]
    config: Option<PathBuf>,
    #[clap(long, action, help = "Print only the path, not the marked maze")]
    no_grid: bool,
    #[clap(short, long, action = ArgAction::Count, help = "Log more, can be repeated")]
    verbose: u8,
    #[clap(short, long, action, help = "Reset config to default and quit")]
    reset_config: bool,
    #[clap(short, long, action, help = "Show config path and quit")]
    show_config_path: bool,
    #[clap(long, help = "Show config in debug format and quit")]
    debug_config: bool,
}

fn run(args: Args) -> Result<(), AppError> {
    let settings_path = args.config.unwrap_or_else(Settings::default_path);

    if args.reset_config {
        Settings::reset_config(&settings_path)?;
        return Ok(());
    }

    if args.show_config_path {
        if let Some(s) = settings_path.to_str() {
            println!("{}", s);
        } else {
            println!("{:?}", settings_path);
        }
        return Ok(());
    }

    let settings = Settings::load(&settings_path)?;

    if args.debug_config {
        println!("{:#?}", settings);
        return Ok(());
    }

    logging::init()?;
    logging::get_logger().set_min_level(settings.get_log_level().raised(args.verbose).into());
    debug!("settings loaded from {:?}", settings_path);

    let Some(file) = args.file else {
        return Ok(());
    };
    let algorithm = args
        .algorithm
        .unwrap_or_else(|| settings.get_default_algorithm());

    let mut report = solve(&file, algorithm.into())?;
    if args.no_grid || !settings.get_show_grid() {
        report = report.hide_maze();
    }
    println!("{}", report);

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    better_panic::install();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("mazewalk: {}", err);
            ExitCode::FAILURE
        }
    }
}
