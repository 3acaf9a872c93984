use std::time::Duration;

use crossterm::style::Color;
use toruslife::RuleSet;

const DEFAULT_FILL_PERCENT: u8 = 20;
const DEFAULT_FPS: u32 = 24;

pub struct Args {
    matches: getopts::Matches,
}

impl Args {
    fn new<T: AsRef<str>>(args: &[T]) -> Option<Self> {
        let mut opts = getopts::Options::new();
        opts.optflag("", "help", "print this help menu");
        opts.optflag("c", "console", "run the interactive console renderer");
        opts.optopt("w", "width", "set grid width", "WIDTH");
        opts.optopt("h", "height", "set grid height", "HEIGHT");
        opts.optopt("f", "fill", "initial live fill percentage", "PERCENT");
        opts.optopt("r", "rules", "birth/survival rule string", "B3/S23");
        opts.optopt("t", "threads", "worker count for the parallel step", "COUNT");
        opts.optopt("", "fps", "target generations per second", "RATE");
        opts.optopt("", "alive-color", "hex color for live cells", "RRGGBB");
        opts.optopt("", "dead-color", "hex color for dead cells", "RRGGBB");
        opts.optopt("g", "gens", "max number of generations", "COUNT");
        opts.optopt("", "stats", "write stats csv to file", "FILE");

        let matches = opts.parse(args.iter().map(T::as_ref)).unwrap();
        if matches.opt_present("help") {
            println!("{}", opts.usage("usage: toruslife [options]"));
            None
        } else {
            Some(Self { matches })
        }
    }
    pub fn from_env() -> Option<Self> {
        let env = std::env::args().collect::<Vec<_>>();
        Self::new(&env[1..])
    }

    fn width(&self) -> Option<usize> {
        self.matches.opt_get("width").unwrap()
    }
    fn height(&self) -> Option<usize> {
        self.matches.opt_get("height").unwrap()
    }

    pub fn console(&self) -> bool {
        self.matches.opt_present("console")
    }

    pub fn grid_size(&self) -> (usize, usize) {
        let default = if self.console() {
            let (cols, rows) = crossterm::terminal::size().unwrap();
            // last terminal row is kept for the status footer
            (cols as usize, rows.saturating_sub(1) as usize)
        } else {
            (500, 500)
        };

        (
            self.width().unwrap_or(default.0),
            self.height().unwrap_or(default.1),
        )
    }

    pub fn fill_percent(&self) -> u8 {
        let percent: i64 = self
            .matches
            .opt_get("fill")
            .unwrap()
            .unwrap_or(i64::from(DEFAULT_FILL_PERCENT));
        percent.clamp(0, 100) as u8
    }

    pub fn rules(&self) -> RuleSet {
        match self.matches.opt_str("rules") {
            Some(spec) => RuleSet::parse(&spec),
            None => RuleSet::default(),
        }
    }

    pub fn threads(&self) -> usize {
        self.matches.opt_get("threads").unwrap().unwrap_or(1).max(1)
    }

    pub fn generations(&self) -> usize {
        self.matches.opt_get("gens").unwrap().unwrap_or(usize::MAX) // kinda hacky way of saying "infinity"
    }

    /// Frame budget for pacing. Headless runs are unpaced unless `--fps`
    /// is given; the console renderer defaults to 24 fps.
    pub fn frame_budget(&self) -> Option<Duration> {
        match self.matches.opt_get::<u32>("fps").unwrap() {
            Some(fps) => Some(Duration::from_secs_f64(1.0 / f64::from(fps.max(1)))),
            None if self.console() => Some(Duration::from_secs_f64(1.0 / f64::from(DEFAULT_FPS))),
            None => None,
        }
    }

    pub fn alive_color(&self) -> Color {
        match self.matches.opt_str("alive-color") {
            Some(hex) => parse_color(&hex),
            None => Color::Rgb { r: 0, g: 255, b: 0 },
        }
    }
    pub fn dead_color(&self) -> Color {
        match self.matches.opt_str("dead-color") {
            Some(hex) => parse_color(&hex),
            None => Color::Rgb { r: 0, g: 0, b: 0 },
        }
    }

    pub fn stats_file(&self) -> Option<String> {
        self.matches.opt_str("stats")
    }
}

/// Parses a 6-digit RGB hex color, with or without a leading `#`.
///
/// Malformed values fall back to black instead of erroring, matching the
/// tolerant treatment of rule strings.
fn parse_color(hex: &str) -> Color {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 {
        return Color::Rgb { r: 0, g: 0, b: 0 };
    }
    match u32::from_str_radix(hex, 16) {
        Ok(rgb) => Color::Rgb {
            r: (rgb >> 16) as u8,
            g: (rgb >> 8) as u8,
            b: rgb as u8,
        },
        Err(_) => Color::Rgb { r: 0, g: 0, b: 0 },
    }
}
