use std::error::Error;

mod console;
mod options;
mod stats;

use console::ConsoleCommand;
use toruslife::{Engine, Grid};

fn main() -> Result<(), Box<dyn Error>> {
    let Some(args) = options::Args::from_env() else {
        // --help already printed
        return Ok(());
    };

    let (width, height) = args.grid_size();
    let mut grid = Grid::new(width, height)?;
    grid.randomize(args.fill_percent());

    let engine = Engine::new(args.rules(), args.threads());

    // setup reporting metrics and the renderer
    let mut console = if args.console() {
        Some(console::ConsoleRender::new(
            args.alive_color(),
            args.dead_color(),
        )?)
    } else {
        None
    };
    let mut stats = stats::Throughput::new(grid.population(), args.stats_file().is_some());
    let mut pacer = args.frame_budget().map(stats::Pacer::new);
    let mut paused = false;

    'generations: for _ in 0..args.generations() {
        // render and drain input if in console mode
        if let Some(ref mut console) = console {
            while let Some(cmd) = console.poll_events(&grid)? {
                match cmd {
                    ConsoleCommand::Exit => break 'generations,
                    ConsoleCommand::TogglePause => paused = !paused,
                    ConsoleCommand::Randomize => grid.randomize(args.fill_percent()),
                    ConsoleCommand::Clear => grid.clear(),
                    ConsoleCommand::Paint { x, y, alive } => grid.set(x, y, alive),
                    ConsoleCommand::Handled => {}
                }
            }
            console.render(&grid)?;
        }

        // report metrics every 500ms
        if stats.has_report() {
            let report = stats.report();
            if let Some(ref mut console) = console {
                console.set_report(report);
            } else {
                println!("{}", report);
            }
        }

        // compute the next generation
        if !paused {
            engine.step(&mut grid);
            stats.record(grid.population());
        }
        if let Some(ref mut pacer) = pacer {
            pacer.wait();
        }
    }
    std::mem::drop(console);

    if let Some(path) = args.stats_file() {
        stats.save_csv(path)?;
    }

    Ok(())
}
