// SPDX-License-Identifier: MPL-2.0
use iced_crop::app::{self, Flags};
use iced_crop::config::{self, DEFAULT_LOG_FILTER};
use iced_crop::ui::image_editor::OpenRequest;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage: iced_crop [OPTIONS] SOURCE

SOURCE is a file path, an http(s):// or file:// URL, or a data: URI.

Options:
  --name NAME        Template name used for the exported file name
  --aspect W:H       Canvas aspect ratio (defaults to the image's own)
  --out DIR          Directory saved images are written to
  --config-dir DIR   Directory containing settings.toml
  -h, --help         Print this help
";

struct Args {
    name: Option<String>,
    aspect: Option<String>,
    out: Option<PathBuf>,
    config_dir: Option<PathBuf>,
    source: Option<String>,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let parsed = Args {
        name: args.opt_value_from_str("--name")?,
        aspect: args.opt_value_from_str("--aspect")?,
        out: args.opt_value_from_str("--out")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        source: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };
    Ok(Some(parsed))
}

fn init_logging(filter: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter.unwrap_or(DEFAULT_LOG_FILTER)))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> iced::Result {
    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{USAGE}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    let (config, config_warning) = match &args.config_dir {
        Some(dir) => config::load_from_dir(dir),
        None => config::load(),
    };
    init_logging(config.logging.filter.as_deref());

    let output_dir = args
        .out
        .or_else(|| config.export.output_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));

    let flags = Flags {
        request: OpenRequest {
            source: args.source.unwrap_or_default(),
            template_name: args.name,
            template_aspect: args.aspect,
        },
        settings: config.editor.resolve(),
        output_dir,
        config_warning,
    };

    app::run(flags)
}
