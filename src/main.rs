use std::path::Path;
use std::thread;
use std::time::Duration;

use clap::{Arg, ArgAction, Command};

use rotbar::backends::xrandr::XRandr;
use rotbar::config::Config;
use rotbar::error::Result;
use rotbar::widget::{ClickEvent, HostConfig, RotationToggleWidget};

fn main() -> Result<()> {
    env_logger::init();

    let matches = Command::new("rotbar")
        .version(env!("CARGO_PKG_VERSION"))
        .about("display and toggle screen rotation via xrandr")
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .takes_value(true)
                .help("JSON configuration file"),
        )
        .arg(
            Arg::new("screen")
                .long("screen")
                .value_name("OUTPUT")
                .takes_value(true)
                .help("output to rotate; all connected outputs when omitted"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .value_name("TEMPLATE")
                .takes_value(true)
                .help("block template, {icon} and {screen} are substituted"),
        )
        .arg(
            Arg::new("interval")
                .long("interval")
                .value_name("SECONDS")
                .takes_value(true)
                .value_parser(clap::value_parser!(u64))
                .help("how long a rendered block stays valid"),
        )
        .arg(
            Arg::new("hide-if-disconnected")
                .long("hide-if-disconnected")
                .action(ArgAction::SetTrue)
                .help("hide the block while the configured screen is disconnected"),
        )
        .arg(
            Arg::new("horizontal-icon")
                .long("horizontal-icon")
                .value_name("GLYPH")
                .takes_value(true),
        )
        .arg(
            Arg::new("horizontal-rotation")
                .long("horizontal-rotation")
                .value_name("KEYWORD")
                .takes_value(true)
                .help("normal or inverted"),
        )
        .arg(
            Arg::new("vertical-icon")
                .long("vertical-icon")
                .value_name("GLYPH")
                .takes_value(true),
        )
        .arg(
            Arg::new("vertical-rotation")
                .long("vertical-rotation")
                .value_name("KEYWORD")
                .takes_value(true)
                .help("left or right"),
        )
        .arg(
            Arg::new("color-good")
                .long("color-good")
                .value_name("COLOR")
                .takes_value(true)
                .default_value("#00FF00"),
        )
        .arg(
            Arg::new("color-degraded")
                .long("color-degraded")
                .value_name("COLOR")
                .takes_value(true)
                .default_value("#FFFF00"),
        )
        .arg(
            Arg::new("once")
                .long("once")
                .action(ArgAction::SetTrue)
                .help("render a single block and exit"),
        )
        .get_matches();

    let mut config = match matches.get_one::<String>("config") {
        Some(path) => Config::from_file(Path::new(path))?,
        None => Config::default(),
    };
    if let Some(screen) = matches.get_one::<String>("screen") {
        config.screen = Some(screen.clone());
    }
    if let Some(format) = matches.get_one::<String>("format") {
        config.format = format.clone();
    }
    if let Some(interval) = matches.get_one::<u64>("interval") {
        config.cache_timeout = *interval;
    }
    if matches.get_flag("hide-if-disconnected") {
        config.hide_if_disconnected = true;
    }
    if let Some(icon) = matches.get_one::<String>("horizontal-icon") {
        config.horizontal_icon = icon.clone();
    }
    if let Some(icon) = matches.get_one::<String>("vertical-icon") {
        config.vertical_icon = icon.clone();
    }
    if let Some(rotation) = matches.get_one::<String>("horizontal-rotation") {
        config.horizontal_rotation = rotation.parse()?;
    }
    if let Some(rotation) = matches.get_one::<String>("vertical-rotation") {
        config.vertical_rotation = rotation.parse()?;
    }

    let host = HostConfig {
        color_good: matches
            .get_one::<String>("color-good")
            .cloned()
            .unwrap_or_default(),
        color_degraded: matches
            .get_one::<String>("color-degraded")
            .cloned()
            .unwrap_or_default(),
    };

    let interval = config.cache_timeout.max(1);
    let mut widget = RotationToggleWidget::new(config, XRandr);

    // i3blocks-style invocation: the bar sets BLOCK_BUTTON and runs the
    // binary once per click.
    let button = std::env::var("BLOCK_BUTTON")
        .ok()
        .and_then(|raw| raw.parse::<u8>().ok());
    if let Some(button) = button {
        widget.on_click(ClickEvent { button });
    }

    if matches.get_flag("once") || button.is_some() {
        println!("{}", serde_json::to_string(&widget.render(&host))?);
        return Ok(());
    }

    loop {
        println!("{}", serde_json::to_string(&widget.render(&host))?);
        thread::sleep(Duration::from_secs(interval));
    }
}
