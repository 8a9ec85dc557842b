use clap::builder::{styling::AnsiColor, Styles};
use clap::Parser;

use crate::api::DEFAULT_BASE_URL;

const ABOUT: &str = "City weather TUI";

const LONG_ABOUT: &str = "
TUI showing the forecast for a randomly selected city, fetched from the
weather API.

Press `r` (or Enter) to fetch a fresh forecast for a random city, and `q` to
quit. Pass --base-url to point the viewer at a different API host.
";

const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default())
    .usage(AnsiColor::Green.on_default())
    .literal(AnsiColor::Green.on_default())
    .placeholder(AnsiColor::Green.on_default());

#[derive(Parser, Debug)]
#[command(version, styles=STYLES, about=ABOUT, long_about = LONG_ABOUT)]
pub struct Args {
    #[arg(
        long,
        default_value = DEFAULT_BASE_URL,
        help = "Base URL of the weather API"
    )]
    pub base_url: String,
}
