use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use shieldsweep_core::{PlayEngine, Token};

/// Width every row index, column index and cell is right-aligned into.
const COL_WIDTH: usize = 2;

/// Draws the visible board as text, optionally with colour and screen clearing.
#[derive(Copy, Clone, Debug)]
pub struct Renderer {
    styled: bool,
}

impl Renderer {
    pub fn new(styled: bool) -> Self {
        Self { styled }
    }

    /// Full frame: clear (when styled), banner, board, then `status` if there is one.
    pub fn screen<W: Write>(
        &self,
        out: &mut W,
        engine: &PlayEngine,
        status: Option<&str>,
    ) -> io::Result<()> {
        if self.styled {
            queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        self.board(out, engine)?;
        if let Some(status) = status {
            writeln!(out, "{status}")?;
        }
        Ok(())
    }

    pub fn board<W: Write>(&self, out: &mut W, engine: &PlayEngine) -> io::Result<()> {
        writeln!(
            out,
            "There are {} mines to be found!\n",
            engine.total_mines()
        )?;

        write!(out, "    ")?;
        for col in 0..engine.size().1 {
            write!(out, "{col:>COL_WIDTH$} ")?;
        }
        writeln!(out)?;

        for (row, cells) in engine.rows().enumerate() {
            write!(out, "{row:>COL_WIDTH$}  ")?;
            for &token in cells {
                self.cell(out, token)?;
                write!(out, " ")?;
            }
            writeln!(out)?;
        }
        Ok(())
    }

    fn cell<W: Write>(&self, out: &mut W, token: Token) -> io::Result<()> {
        match token_color(token) {
            Some(color) if self.styled => {
                // pad outside the escape codes so columns stay aligned
                write!(out, "{:>width$}", "", width = COL_WIDTH - 1)?;
                queue!(
                    out,
                    SetForegroundColor(color),
                    Print(token.symbol()),
                    ResetColor
                )
            }
            _ => write!(out, "{token:>COL_WIDTH$}"),
        }
    }
}

fn token_color(token: Token) -> Option<Color> {
    Some(match token {
        Token::Revealed(1) => Color::DarkRed,
        Token::Revealed(2) => Color::Red,
        Token::Revealed(3) => Color::DarkYellow,
        Token::Revealed(4) => Color::Yellow,
        Token::Revealed(5) => Color::DarkGreen,
        Token::Revealed(6) => Color::Green,
        Token::Revealed(7) => Color::DarkCyan,
        Token::Revealed(8) => Color::DarkBlue,
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shieldsweep_core::MineLayout;

    fn render(renderer: Renderer, engine: &PlayEngine) -> String {
        let mut out = Vec::new();
        renderer.board(&mut out, engine).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn plain_board_layout() {
        let layout = MineLayout::from_mine_coords((3, 3), &[(0, 0)]).unwrap();
        let mut engine = PlayEngine::new(layout);
        engine.reveal((1, 1)).unwrap();

        let expected = "There are 1 mines to be found!\n\
                        \n\
                        \x20    0  1  2 \n\
                        \x200   +  +  + \n\
                        \x201   +  1  + \n\
                        \x202   +  +  + \n";
        assert_eq!(render(Renderer::new(false), &engine), expected);
    }

    #[test]
    fn blank_and_marker_tokens() {
        let layout = MineLayout::from_mine_coords((2, 2), &[(0, 0)]).unwrap();
        let mut engine = PlayEngine::new(layout);
        engine.arm_shield().unwrap();
        engine.reveal((0, 0)).unwrap();

        let text = render(Renderer::new(false), &engine);
        assert!(text.contains(" 0   S  + \n"), "{text}");
    }

    #[test]
    fn styled_digits_carry_color_codes() {
        let layout = MineLayout::from_mine_coords((2, 2), &[(0, 0)]).unwrap();
        let mut engine = PlayEngine::new(layout);
        engine.reveal((1, 1)).unwrap();

        let text = render(Renderer::new(true), &engine);
        assert!(text.contains('\u{1b}'));
        assert!(text.contains('1'));
    }

    #[test]
    fn screen_appends_status() {
        let layout = MineLayout::from_mine_coords((1, 1), &[]).unwrap();
        let engine = PlayEngine::new(layout);
        let mut out = Vec::new();

        Renderer::new(false)
            .screen(&mut out, &engine, Some("Invalid input. Try again."))
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with(" 0   + \nInvalid input. Try again.\n"), "{text}");
    }
}
