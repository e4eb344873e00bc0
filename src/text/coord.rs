//! Coordinate notation: a letter A-H for the column and a digit 1-8 for the
//! row. `A` is column 7 and `H` column 0; `1` is row 7 and `8` row 0.

use crate::core::{Move, Square, BOARD_SIZE};
use crate::error::CoordinateError;

/// Parse a two-character token such as `C3` (letters are case-insensitive).
pub fn parse_square(token: &str) -> Result<Square, CoordinateError> {
    let malformed = || CoordinateError::MalformedCoordinate(token.to_string());

    let &[letter, digit] = token.as_bytes() else {
        return Err(malformed());
    };

    let letter = letter.to_ascii_uppercase();
    if !(b'A'..=b'H').contains(&letter) || !(b'1'..=b'8').contains(&digit) {
        return Err(malformed());
    }

    let col = BOARD_SIZE - 1 - (letter - b'A');
    let row = BOARD_SIZE - (digit - b'0');
    Square::new(row, col).ok_or_else(malformed)
}

/// Parse a move line: two whitespace-separated tokens, source then destination.
pub fn parse_move(line: &str) -> Result<Move, CoordinateError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        [from, to] => Ok(Move::new(parse_square(from)?, parse_square(to)?)),
        other => Err(CoordinateError::WrongTokenCount(other.len())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_square_mapping() {
        assert_eq!(parse_square("A1"), Ok(Square::new(7, 7).unwrap()));
        assert_eq!(parse_square("H8"), Ok(Square::new(0, 0).unwrap()));
        assert_eq!(parse_square("C3"), Ok(Square::new(5, 5).unwrap()));
        assert_eq!(parse_square("a6"), Ok(Square::new(2, 7).unwrap()));
    }

    #[test]
    fn test_parse_square_roundtrips_display() {
        for square in Square::all() {
            assert_eq!(parse_square(&square.to_string()), Ok(square));
        }
    }

    #[test]
    fn test_parse_square_rejects_malformed() {
        for token in ["", "A", "A0", "A9", "I1", "11", "AA", "A10", "é1", " A1"] {
            assert_eq!(
                parse_square(token),
                Err(CoordinateError::MalformedCoordinate(token.to_string())),
                "{token:?}"
            );
        }
    }

    #[test]
    fn test_parse_move() {
        let mv = parse_move("  a6   B5 ").unwrap();
        assert_eq!(mv.from, Square::new(2, 7).unwrap());
        assert_eq!(mv.to, Square::new(3, 6).unwrap());
    }

    #[test]
    fn test_parse_move_token_count() {
        assert_eq!(parse_move(""), Err(CoordinateError::WrongTokenCount(0)));
        assert_eq!(parse_move("A6"), Err(CoordinateError::WrongTokenCount(1)));
        assert_eq!(parse_move("A6 B5 C4"), Err(CoordinateError::WrongTokenCount(3)));
    }

    #[test]
    fn test_parse_move_propagates_bad_token() {
        assert_eq!(
            parse_move("A6 Z5"),
            Err(CoordinateError::MalformedCoordinate("Z5".to_string()))
        );
    }
}
