use common::tictactoe::Position;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("expected \"row,col\", got \"{0}\"")]
    Malformed(String),

    #[error("invalid coordinate \"{0}\": expected a whole number")]
    NotANumber(String),
}

/// Parses `row,col`. Range checks are left to the board.
pub fn parse_position(line: &str) -> Result<Position, InputError> {
    let trimmed = line.trim();
    let Some((row, col)) = trimmed.split_once(',') else {
        return Err(InputError::Malformed(trimmed.to_string()));
    };
    if col.contains(',') {
        return Err(InputError::Malformed(trimmed.to_string()));
    }
    Ok(Position::new(parse_coordinate(row)?, parse_coordinate(col)?))
}

fn parse_coordinate(text: &str) -> Result<usize, InputError> {
    let text = text.trim();
    text.parse::<usize>()
        .map_err(|_| InputError::NotANumber(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_plain_pair() {
        assert_eq!(parse_position("1,2"), Ok(Position::new(1, 2)));
    }

    #[test]
    fn test_tolerates_whitespace_and_newline() {
        assert_eq!(parse_position("  2 , 0 \n"), Ok(Position::new(2, 0)));
    }

    #[test]
    fn test_out_of_range_numbers_still_parse() {
        assert_eq!(parse_position("5,5"), Ok(Position::new(5, 5)));
    }

    #[test]
    fn test_rejects_missing_comma() {
        assert_eq!(
            parse_position("11"),
            Err(InputError::Malformed("11".to_string()))
        );
    }

    #[test]
    fn test_rejects_extra_component() {
        assert!(matches!(parse_position("1,1,1"), Err(InputError::Malformed(_))));
    }

    #[test]
    fn test_rejects_non_numeric_and_negative() {
        assert_eq!(
            parse_position("a,1"),
            Err(InputError::NotANumber("a".to_string()))
        );
        assert_eq!(
            parse_position("0,-1"),
            Err(InputError::NotANumber("-1".to_string()))
        );
    }
}
