use std::fmt;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("rejected floor request {token:?}: {kind}")]
pub struct IntakeError {
    kind: ErrorKind,
    token: String,
}

impl IntakeError {
    pub fn new(kind: ErrorKind, token: impl Into<String>) -> Self {
        IntakeError {
            kind: kind,
            token: token.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Empty,
    NotANumber,
    OutOfRange,
    CurrentFloor,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ErrorKind::Empty => "no floors given",
            ErrorKind::NotANumber => "not a number",
            ErrorKind::OutOfRange => "floor out of range",
            ErrorKind::CurrentFloor => "elevator is already at this floor",
        };
        f.write_str(text)
    }
}

/// Parses a comma separated line of floor numbers. All whitespace inside a
/// token is dropped before parsing. A single bad token rejects the whole line.
pub fn parse_floors(input: &str, top_floor: u8) -> Result<Vec<u8>, IntakeError> {
    if input.trim().is_empty() {
        return Err(IntakeError::new(ErrorKind::Empty, input))
    }

    let mut floors = Vec::new();
    for token in input.split(',') {
        let digits: String = token.chars().filter(|c| !c.is_whitespace()).collect();
        let floor = digits
            .parse::<i64>()
            .map_err(|_| IntakeError::new(ErrorKind::NotANumber, token.trim()))?;
        floors.push(check_range(floor, top_floor).ok_or_else(|| IntakeError::new(ErrorKind::OutOfRange, token.trim()))?);
    }
    Ok(floors)
}

/// Requests are only valid for floors `1..=top_floor`; floor 0 is where the car parks.
pub fn check_range(floor: i64, top_floor: u8) -> Option<u8> {
    if floor >= 1 && floor <= i64::from(top_floor) {
        u8::try_from(floor).ok()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOP_FLOOR: u8 = 9;

    #[test]
    fn parses_in_input_order() {
        assert_eq!(parse_floors("5,3,7", TOP_FLOOR), Ok(vec![5, 3, 7]));
    }

    #[test]
    fn strips_whitespace_around_and_inside_tokens() {
        assert_eq!(parse_floors(" 3 ,\t5 \n", TOP_FLOOR), Ok(vec![3, 5]));
        // "1 2" collapses to 12 which is above the top floor
        assert_eq!(
            parse_floors("1 2", TOP_FLOOR).unwrap_err().kind(),
            ErrorKind::OutOfRange,
        );
    }

    #[test]
    fn rejects_whole_line_on_one_bad_token() {
        let err = parse_floors("abc,5", TOP_FLOOR).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotANumber);
        assert_eq!(err.token(), "abc");
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(parse_floors("0,4", TOP_FLOOR).unwrap_err().kind(), ErrorKind::OutOfRange);
        assert_eq!(parse_floors("10", TOP_FLOOR).unwrap_err().kind(), ErrorKind::OutOfRange);
        assert_eq!(parse_floors("-3", TOP_FLOOR).unwrap_err().kind(), ErrorKind::OutOfRange);
    }

    #[test]
    fn rejects_empty_tokens() {
        assert_eq!(parse_floors("3,,5", TOP_FLOOR).unwrap_err().kind(), ErrorKind::NotANumber);
        assert_eq!(parse_floors("3,", TOP_FLOOR).unwrap_err().kind(), ErrorKind::NotANumber);
        assert_eq!(parse_floors("   ", TOP_FLOOR).unwrap_err().kind(), ErrorKind::Empty);
    }

    #[test]
    fn rejects_numbers_too_large_to_parse() {
        let err = parse_floors("99999999999999999999", TOP_FLOOR).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotANumber);
    }

    #[test]
    fn respects_smaller_buildings() {
        assert_eq!(parse_floors("4", 4), Ok(vec![4]));
        assert_eq!(parse_floors("5", 4).unwrap_err().kind(), ErrorKind::OutOfRange);
    }
}
