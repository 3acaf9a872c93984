use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal,
};
use std::io;
use toruslife::Grid;

/// What the control loop should do in response to an input event. The
/// renderer never touches the grid itself; it only reports commands.
pub enum ConsoleCommand {
    Exit,
    TogglePause,
    Randomize,
    Clear,
    Paint { x: usize, y: usize, alive: bool },
    Handled,
}

pub struct ConsoleRender {
    alive_color: Color,
    dead_color: Color,
    report: String,
    // Some(state) while a mouse button is held, so drags keep painting
    painting: Option<bool>,
}
impl ConsoleRender {
    pub fn new(alive_color: Color, dead_color: Color) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), cursor::Hide, event::EnableMouseCapture)?;
        Ok(Self {
            alive_color,
            dead_color,
            report: String::new(),
            painting: None,
        })
    }

    pub fn render(&self, grid: &Grid) -> io::Result<()> {
        let (cols, rows) = terminal::size()?;
        let width = grid.width().min(cols as usize);
        let height = grid.height().min(rows.saturating_sub(1) as usize);

        let mut stdout = io::stdout();
        queue!(
            stdout,
            terminal::Clear(terminal::ClearType::All),
            SetForegroundColor(self.alive_color),
            SetBackgroundColor(self.dead_color),
        )?;

        let mut line = String::with_capacity(width * '█'.len_utf8());
        for y in 0..height {
            line.clear();
            for x in 0..width {
                line.push(if grid.get(x, y) { '█' } else { ' ' });
            }
            queue!(stdout, cursor::MoveTo(0, y as u16), Print(&line))?;
        }

        // write footer
        queue!(
            stdout,
            ResetColor,
            cursor::MoveTo(0, rows.saturating_sub(1)),
            Print(&self.report),
        )?;
        io::Write::flush(&mut stdout)
    }

    pub fn poll_events(&mut self, grid: &Grid) -> io::Result<Option<ConsoleCommand>> {
        // make sure event is present for us to take
        if !event::poll(std::time::Duration::from_secs(0))? {
            return Ok(None);
        }

        let mut outp = ConsoleCommand::Handled;
        match event::read()? {
            // CTRL+C or ESC
            Event::Key(KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            })
            | Event::Key(KeyEvent {
                code: KeyCode::Esc, ..
            }) => outp = ConsoleCommand::Exit,
            Event::Key(KeyEvent {
                code: KeyCode::Char(' '),
                ..
            }) => outp = ConsoleCommand::TogglePause,
            Event::Key(KeyEvent {
                code: KeyCode::Char('r'),
                ..
            }) => outp = ConsoleCommand::Randomize,
            Event::Key(KeyEvent {
                code: KeyCode::Char('c'),
                ..
            }) => outp = ConsoleCommand::Clear,
            Event::Mouse(MouseEvent {
                kind, column, row, ..
            }) => match kind {
                MouseEventKind::Down(button) => {
                    let alive = matches!(button, MouseButton::Left);
                    self.painting = Some(alive);
                    outp = paint_command(grid, column, row, alive);
                }
                MouseEventKind::Drag(_) => {
                    if let Some(alive) = self.painting {
                        outp = paint_command(grid, column, row, alive);
                    }
                }
                MouseEventKind::Up(_) => self.painting = None,
                _ => {}
            },
            _ => {}
        }
        Ok(Some(outp))
    }

    pub fn set_report(&mut self, report: String) {
        self.report = report;
    }
}
impl Drop for ConsoleRender {
    fn drop(&mut self) {
        // if we can enable it, we should be able to disable it
        terminal::disable_raw_mode().expect("disable raw mode");
        execute!(io::stdout(), cursor::Show, event::DisableMouseCapture).expect("restore terminal");
    }
}

fn paint_command(grid: &Grid, column: u16, row: u16, alive: bool) -> ConsoleCommand {
    let (x, y) = (column as usize, row as usize);
    if x < grid.width() && y < grid.height() {
        ConsoleCommand::Paint { x, y, alive }
    } else {
        ConsoleCommand::Handled
    }
}
