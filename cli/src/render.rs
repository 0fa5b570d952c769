use std::fmt;

use crossterm::style::{Color, Stylize};
use pisweeper_core::*;

pub(crate) fn glyph(cell: &CellView) -> char {
    use CellValue::*;

    if cell.exploded {
        return 'X';
    }
    if cell.is_flagged_incorrectly() && cell.is_revealed_due_to_game_over() {
        return 'x';
    }
    if cell.flagged {
        return 'F';
    }
    if !cell.revealed {
        return '#';
    }
    match cell.value {
        Some(Mine) => '*',
        Some(Count(0)) => '.',
        Some(Count(count)) => char::from_digit(count.into(), 10).unwrap_or('?'),
        None => '#',
    }
}

pub(crate) fn status_line(session: &Session) -> String {
    let status = match session.status() {
        Status::InProgress => "playing",
        Status::Won => "won",
        Status::Lost => "lost",
    };
    format!(
        "Flags: {}  Time: {}s  [{}]",
        session.flags_left(),
        session.elapsed_secs(),
        status
    )
}

/// Foreground for a revealed count, zero stays plain.
pub(crate) const fn count_color(count: u8) -> Option<Color> {
    match count {
        1 => Some(Color::Blue),
        2 => Some(Color::Green),
        3 => Some(Color::Red),
        4 => Some(Color::DarkBlue),
        5 => Some(Color::DarkYellow),
        6 => Some(Color::Cyan),
        7 => Some(Color::Black),
        8 => Some(Color::DarkGrey),
        _ => None,
    }
}

/// Board drawing with x along the top and y down the side.
pub(crate) struct Board<'a> {
    pub(crate) session: &'a Session,
    /// Paint revealed counts with ANSI colors.
    pub(crate) color: bool,
}

impl Board<'_> {
    fn write_cell(&self, f: &mut fmt::Formatter<'_>, cell: &CellView) -> fmt::Result {
        let glyph = glyph(cell);
        let color = match cell.value {
            Some(CellValue::Count(count)) if self.color && cell.revealed && !cell.flagged => {
                count_color(count)
            }
            _ => None,
        };
        match color {
            Some(color) => write!(f, "{}", glyph.with(color)),
            None => write!(f, "{glyph}"),
        }
    }
}

impl fmt::Display for Board<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (width, height) = self.session.size();

        writeln!(f, "{}", status_line(self.session))?;
        write!(f, "    ")?;
        for x in 0..width {
            write!(f, "{}", x % 10)?;
        }
        writeln!(f)?;

        for y in 0..height {
            write!(f, "{y:>3} ")?;
            for x in 0..width {
                match self.session.cell_at((x, y)) {
                    Some(cell) => self.write_cell(f, &cell)?,
                    None => write!(f, " ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

pub(crate) const fn announcement(status: Status) -> Option<&'static str> {
    match status {
        Status::InProgress => None,
        Status::Won => Some("You won :-)"),
        Status::Lost => Some("You lost :-("),
    }
}
