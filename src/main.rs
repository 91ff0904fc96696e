// SPDX-License-Identifier: MPL-2.0
use iced_showcase::app::{self, paths, Flags};
use iced_showcase::{config, logging};

const HELP: &str = "\
iced_showcase

USAGE:
  iced_showcase [OPTIONS]

OPTIONS:
  -h, --help             Print this help and exit
  -v, --verbose          Log debug output to stderr
      --lang <LOCALE>    Override the UI language (e.g. en-US, fr)
      --config-dir <DIR> Read and write settings.toml in DIR
      --write-config     Write a default settings.toml if none exists, then exit
";

struct Args {
    verbose: bool,
    write_config: bool,
    lang: Option<String>,
    config_dir: Option<String>,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(None);
    }

    let parsed = Args {
        verbose: args.contains(["-v", "--verbose"]),
        write_config: args.contains("--write-config"),
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("Warning: unused arguments: {remaining:?}");
    }

    Ok(Some(parsed))
}

fn write_default_config() -> std::process::ExitCode {
    let Some(path) = config::get_config_path_with_override(None) else {
        eprintln!("Error: could not determine the config directory");
        return std::process::ExitCode::FAILURE;
    };
    if path.exists() {
        println!("{} already exists", path.display());
        return std::process::ExitCode::SUCCESS;
    }
    match config::save_to_path(&config::Config::default(), &path) {
        Ok(()) => {
            println!("Wrote {}", path.display());
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::ExitCode::FAILURE
        }
    }
}

fn main() -> std::process::ExitCode {
    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => return std::process::ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}\n\n{HELP}");
            return std::process::ExitCode::from(2);
        }
    };

    logging::init(args.verbose);
    paths::init_cli_override(args.config_dir);

    if args.write_config {
        return write_default_config();
    }

    match app::run(Flags { lang: args.lang }) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("application exited with an error: {e}");
            std::process::ExitCode::FAILURE
        }
    }
}
