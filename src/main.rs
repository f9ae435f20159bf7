use std::process::ExitCode;

use mover::cli::{self, Command};
use mover::core::{SimRng, SystemClock};
use mover::{logging, App, AppError, SimConfig, WindowSurface};
use tracing::{error, info};

fn main() -> ExitCode {
    let options = match cli::parse(std::env::args().skip(1)) {
        Ok(Command::Run(options)) => options,
        Ok(Command::Help) => {
            println!("{}", cli::USAGE);
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            let err = AppError::from(err);
            eprintln!("{}\n{}", err, cli::USAGE);
            return ExitCode::from(err.exit_status());
        }
    };

    // プロファイル出力先はウィンドウより先に作る
    let profile = options.cpuprofile.as_deref().map(logging::create_profile).transpose();
    let (profile, profile_error) = match profile {
        Ok(file) => (file, None),
        Err(err) => (None, Some(err)),
    };
    logging::init(profile);

    let result = match profile_error {
        Some(err) => Err(AppError::from(err)),
        None => run(SimConfig::default()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "fatal");
            ExitCode::from(err.exit_status())
        }
    }
}

fn run(config: SimConfig) -> Result<(), AppError> {
    let surface = WindowSurface::new(config.canvas, &config.title)?;

    let mut rng = SimRng::from_clock();
    info!(seed = rng.seed(), "random source seeded");

    let mut app = App::new(config, surface, &mut rng);
    let summary = app.run(&SystemClock);
    info!(
        frames = summary.frames,
        samples = summary.fps_samples.len(),
        "run complete"
    );
    Ok(())
}
