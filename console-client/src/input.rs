/// Parses a human move string of the form `<board> <cell>`, both flat
/// indices 0–8. Malformed input never reaches the engine; it is
/// rejected here and the player is re-prompted.
pub fn parse_move(line: &str) -> Result<(usize, usize), String> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() != 2 {
        return Err("Enter two numbers: <sub-board 0-8> <cell 0-8>".to_string());
    }

    let board_index: usize = parts[0]
        .parse()
        .map_err(|_| format!("'{}' is not a number", parts[0]))?;
    let cell_index: usize = parts[1]
        .parse()
        .map_err(|_| format!("'{}' is not a number", parts[1]))?;

    if board_index > 8 || cell_index > 8 {
        return Err("Indices go from 0 to 8".to_string());
    }

    Ok((board_index, cell_index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_move() {
        assert_eq!(parse_move("4 7"), Ok((4, 7)));
        assert_eq!(parse_move("  0   8 "), Ok((0, 8)));
    }

    #[test]
    fn test_parse_rejects_wrong_arity() {
        assert!(parse_move("4").is_err());
        assert!(parse_move("4 7 2").is_err());
        assert!(parse_move("").is_err());
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert!(parse_move("a b").is_err());
        assert!(parse_move("4 x").is_err());
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert!(parse_move("9 0").is_err());
        assert!(parse_move("0 42").is_err());
    }
}
