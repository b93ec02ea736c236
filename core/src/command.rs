use core::str::FromStr;

use crate::*;

/// One parsed line of player input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Shield,
    Hint,
    /// Row and column as typed; may still be off the board.
    Reveal(i64, i64),
}

impl Command {
    /// Converts a typed reveal into board coordinates, if it names a cell on `size`.
    pub fn coords_within(row: i64, col: i64, size: Coord2) -> Result<Coord2> {
        let row = Coord::try_from(row).map_err(|_| GameError::InvalidCoords)?;
        let col = Coord::try_from(col).map_err(|_| GameError::InvalidCoords)?;
        if row < size.0 && col < size.1 {
            Ok((row, col))
        } else {
            Err(GameError::InvalidCoords)
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> core::result::Result<Self, Self::Err> {
        let line = line.trim();
        match line {
            "" => Err(CommandError::Empty),
            "S" => Ok(Self::Shield),
            "H" => Ok(Self::Hint),
            _ => {
                let mut parts = line.split_whitespace();
                let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next())
                else {
                    return Err(CommandError::Malformed);
                };
                Ok(Self::Reveal(row.parse()?, col.parse()?))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_actions() {
        assert_eq!("S".parse::<Command>(), Ok(Command::Shield));
        assert_eq!("H".parse::<Command>(), Ok(Command::Hint));
        assert_eq!("  3   7 ".parse::<Command>(), Ok(Command::Reveal(3, 7)));
        assert_eq!("-1 2".parse::<Command>(), Ok(Command::Reveal(-1, 2)));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!("abc".parse::<Command>(), Err(CommandError::Malformed));
        assert_eq!("s".parse::<Command>(), Err(CommandError::Malformed));
        assert_eq!("1".parse::<Command>(), Err(CommandError::Malformed));
        assert_eq!("1 2 3".parse::<Command>(), Err(CommandError::Malformed));
        assert!(matches!(
            "1 x".parse::<Command>(),
            Err(CommandError::BadNumber(_))
        ));
    }

    #[test]
    fn bounds_check() {
        assert_eq!(Command::coords_within(3, 0, (4, 4)), Ok((3, 0)));
        assert_eq!(
            Command::coords_within(5, 5, (4, 4)),
            Err(GameError::InvalidCoords)
        );
        assert_eq!(
            Command::coords_within(-1, 0, (4, 4)),
            Err(GameError::InvalidCoords)
        );
        assert_eq!(
            Command::coords_within(1000, 0, (4, 4)),
            Err(GameError::InvalidCoords)
        );
    }
}
