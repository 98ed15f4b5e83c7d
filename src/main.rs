// SPDX-License-Identifier: MPL-2.0
use paw_feel::app::{self, paths, Flags};

const HELP: &str = "\
PawFeel - dog emotion scanner

USAGE:
  paw_feel [OPTIONS] [FILE]

OPTIONS:
  --lang <ID>          UI language (e.g. en-US, fr)
  --config-dir <DIR>   Directory holding settings.toml
  --endpoint <URL>     Prediction endpoint for this session
  -h, --help           Print this help

ENVIRONMENT:
  PAW_FEEL_CONFIG_DIR  Config directory when --config-dir is absent
  RUST_LOG             Log filter (default: paw_feel=info)
";

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let endpoint = args.opt_value_from_str("--endpoint")?;
    let file_path = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    Ok(Flags {
        lang,
        file_path,
        config_dir,
        endpoint,
    })
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("paw_feel=info"))
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("paw_feel: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}
