use std::io::Write;

use crossterm::{cursor, terminal, Result, ExecutableCommand};

use super::elevator_status::ElevatorStatus;

pub struct Debug {
    num_floors: u8,
    drawn_lines: u16,
}

impl Debug {
    pub fn new(num_floors: u8) -> Self {
        Debug {
            num_floors: num_floors,
            drawn_lines: 0,
        }
    }

    /// Redraws the panel over the previous one. Call `detach` before writing
    /// anything else below it.
    pub fn printstatus<W: Write>(&mut self, out: &mut W, elevator_status: &ElevatorStatus) -> Result<()> {
        let lines = self.render(elevator_status);

        if self.drawn_lines > 0 {
            out.execute(cursor::MoveUp(self.drawn_lines))?;
        }
        out.execute(terminal::Clear(terminal::ClearType::FromCursorDown))?;
        for line in &lines {
            writeln!(out, "{}", line)?;
        }
        out.flush()?;

        self.drawn_lines = lines.len() as u16;
        Ok(())
    }

    pub fn detach(&mut self) {
        self.drawn_lines = 0;
    }

    fn render(&self, elevator_status: &ElevatorStatus) -> Vec<String> {
        let separator = String::from("+------------+------------+");
        let target = match elevator_status.target {
            Some(floor) => floor.to_string(),
            None => String::from("-"),
        };

        let mut lines = vec![
            String::from("+-------------------------+"),
            String::from("| ELEVATOR                |"),
            separator.clone(),
        ];
        for (label, value) in [
            ("STATE", elevator_status.behaviour.as_string()),
            ("FLOOR", elevator_status.floor.to_string()),
            ("DIRECTION", elevator_status.direction.as_string()),
            ("TARGET", target),
            ("PENDING", elevator_status.pending.to_string()),
        ] {
            lines.push(format!("| {0:<10} | {1:<10} |", label, value));
            lines.push(separator.clone());
        }

        lines.push(format!("| {0:<10} | {1:<10} |", "SHAFT", ""));
        lines.push(separator.clone());
        for floor in (0..=self.num_floors).rev() {
            let car = if floor == elevator_status.floor {
                "[#]"
            } else if Some(floor) == elevator_status.target {
                "*"
            } else {
                ""
            };
            lines.push(format!("| {0:<10} | {1:<10} |", floor, car));
            lines.push(separator.clone());
        }

        lines.push(elevator_status.last_event.clone().unwrap_or_default());
        lines
    }
}
