use crate::core::{Player, SidePolicy};
use crate::error::SideError;

/// Interpret the answer to the side prompt.
///
/// `white` and `black` are recognized case-insensitively. Under
/// `SidePolicy::DefaultBlack` anything else means Black.
pub fn parse_side(input: &str, policy: SidePolicy) -> Result<Player, SideError> {
    let answer = input.trim();
    if answer.eq_ignore_ascii_case(Player::White.name()) {
        Ok(Player::White)
    } else if answer.eq_ignore_ascii_case(Player::Black.name()) {
        Ok(Player::Black)
    } else {
        match policy {
            SidePolicy::DefaultBlack => Ok(Player::Black),
            SidePolicy::Strict => Err(SideError::Unrecognized(answer.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognized_words() {
        for policy in [SidePolicy::DefaultBlack, SidePolicy::Strict] {
            assert_eq!(parse_side("white", policy), Ok(Player::White));
            assert_eq!(parse_side("  WHITE\n", policy), Ok(Player::White));
            assert_eq!(parse_side("Black", policy), Ok(Player::Black));
        }
    }

    #[test]
    fn test_unrecognized_defaults_to_black() {
        assert_eq!(parse_side("blanco", SidePolicy::DefaultBlack), Ok(Player::Black));
        assert_eq!(parse_side("", SidePolicy::DefaultBlack), Ok(Player::Black));
    }

    #[test]
    fn test_unrecognized_is_error_when_strict() {
        assert_eq!(
            parse_side(" whit ", SidePolicy::Strict),
            Err(SideError::Unrecognized("whit".to_string()))
        );
    }
}
