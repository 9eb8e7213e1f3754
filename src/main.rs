// SPDX-License-Identifier: MPL-2.0
use std::process::ExitCode;
use tcg_market::app::{self, paths, Flags, Startup};
use tracing_subscriber::{fmt, EnvFilter};

const HELP: &str = "\
Browse the Pokémon TCG catalog

USAGE:
  tcg_market [OPTIONS]

OPTIONS:
  --lang <ID>          Interface language (e.g. en-US, fr)
  --route <PATH>       Screen to open first (e.g. /sets, /card/xy1-1, /search?q=pikachu)
  --data-dir <DIR>     Directory holding the favorites store
  --config-dir <DIR>   Directory holding settings.toml
  -h, --help           Print this help
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        route: args.opt_value_from_str("--route")?,
        data_dir: args.opt_value_from_str("--data-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("warning: ignoring unexpected arguments: {remaining:?}");
    }

    Ok(Some(flags))
}

fn main() -> ExitCode {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tcg_market=info")),
        )
        .init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(error) => {
            eprintln!("error: {error}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());

    let startup = match Startup::prepare(flags) {
        Ok(startup) => startup,
        Err(error) => {
            tracing::error!(%error, "failed to prepare the application");
            return ExitCode::FAILURE;
        }
    };

    match app::run(startup) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "application exited with an error");
            ExitCode::FAILURE
        }
    }
}
