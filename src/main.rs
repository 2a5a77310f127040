// SPDX-License-Identifier: MPL-2.0
use playback_overlay::app::{self, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
playback-overlay

USAGE:
  playback-overlay [OPTIONS]

OPTIONS:
  --lang <LOCALE>        UI language (e.g. en-US, fr)
  --title <TEXT>         Title shown in the top bar
  --duration <SECONDS>   Duration of the simulated source
  --error <MESSAGE>      Make the simulated source fail with this message
  --config-dir <PATH>    Directory holding settings.toml
  -h, --help             Print this help
";

fn parse_args() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        title: args.opt_value_from_str("--title")?,
        duration: args.opt_value_from_str("--duration")?,
        error: args.opt_value_from_str("--error")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "Ignoring unexpected arguments");
    }
    Ok(Some(flags))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("playback_overlay=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> iced::Result {
    init_tracing();

    let flags = match parse_args() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}
