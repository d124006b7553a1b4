// SPDX-License-Identifier: MPL-2.0
use devfolio::app::{cli, paths, App};
use devfolio::{config, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    let (flags, command) = match cli::parse(pico_args::Arguments::from_env()) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("{e}\n\n{}", cli::HELP);
            return ExitCode::from(2);
        }
    };
    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());

    let (config, config_warning) = config::load();
    logging::init(config.log_level());

    let (state, state_warning) = devfolio::app::persisted_state::StateFile::open();
    let mut app = match App::with_parts(&flags, config, state, [config_warning, state_warning]) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    for warning in app.warnings() {
        eprintln!("{warning}");
    }

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(app.execute(command)) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", app.describe_error(&e));
            ExitCode::FAILURE
        }
    }
}
