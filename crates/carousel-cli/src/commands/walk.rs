use std::path::Path;
use std::str::FromStr;

use anyhow::{bail, Result};
use clap::Args;
use carousel_core::input::{Direction, InputEvent};
use carousel_core::render::present;
use carousel_core::session::Session;
use carousel_core::source::open_source;

use crate::surface::TerminalSurface;

#[derive(Args)]
pub struct WalkArgs {
    /// Listing file or http(s) URL (defaults to source.location from the config)
    pub source: Option<String>,

    /// Comma-separated events: left, right, up, down, prev, next, nav-up,
    /// nav-down, goto:N, swipe:START:END
    #[arg(short, long, value_delimiter = ',')]
    pub events: Vec<EventArg>,
}

/// Command-line spelling of an [`InputEvent`].
#[derive(Clone, Debug)]
pub struct EventArg(pub InputEvent);

impl FromStr for EventArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        let event = match s {
            "left" => InputEvent::Key(Direction::Left),
            "right" => InputEvent::Key(Direction::Right),
            "up" => InputEvent::Key(Direction::Up),
            "down" => InputEvent::Key(Direction::Down),
            "prev" => InputEvent::PreviousButton,
            "next" => InputEvent::NextButton,
            "nav-up" => InputEvent::NavUp,
            "nav-down" => InputEvent::NavDown,
            _ => return parse_parameterized(s),
        };
        Ok(Self(event))
    }
}

fn parse_parameterized(s: &str) -> std::result::Result<EventArg, String> {
    let mut parts = s.split(':');
    let event = match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some("goto"), Some(index), None, None) => {
            let index = index
                .parse()
                .map_err(|e| format!("invalid goto index '{index}': {e}"))?;
            InputEvent::IndicatorClicked(index)
        }
        (Some("swipe"), Some(start), Some(end), None) => {
            let start_x = parse_coord(start)?;
            let end_x = parse_coord(end)?;
            InputEvent::Swipe { start_x, end_x }
        }
        _ => return Err(format!("unknown event '{s}'")),
    };
    Ok(EventArg(event))
}

fn parse_coord(s: &str) -> std::result::Result<f32, String> {
    s.parse()
        .map_err(|e| format!("invalid swipe coordinate '{s}': {e}"))
}

pub fn run(args: &WalkArgs, config_path: Option<&Path>) -> Result<()> {
    let config = super::load_config(config_path)?;
    let location = args
        .source
        .clone()
        .unwrap_or_else(|| config.source.location.clone());

    let source = open_source(&location)?;
    let mut session = Session::load(source.as_ref(), &config);
    let mut surface = TerminalSurface::new();

    session.render(&mut surface);
    surface.draw("start");

    if let Some(e) = session.error() {
        bail!("{e}");
    }

    for EventArg(event) in &args.events {
        let label = format!("{event:?}");
        match session.dispatch(*event) {
            Some(view) => {
                present(&view, &mut surface);
                surface.draw(&label);
            }
            None => surface.draw_unchanged(&label),
        }
    }

    Ok(())
}
