use crate::error::InputError;

/// Parses `n a_1 .. a_n`: an element count followed by exactly that many
/// whitespace-separated signed integers.
///
/// Tokens past the `n`th value are not ignored; any count other than `n`
/// is an [`InputError::CountMismatch`].
pub fn parse_sequence(s: &str) -> Result<Vec<i64>, InputError> {
    let mut tokens = s.split_whitespace();

    let count = tokens.next().ok_or(InputError::MissingCount)?;
    let n = count
        .parse::<usize>()
        .map_err(|_| InputError::InvalidCount { token: count.to_owned() })?;

    // the count is untrusted, don't let it size the allocation
    let mut values = Vec::with_capacity(n.min(1 << 20));
    for (position, token) in tokens.enumerate() {
        let value = token
            .parse::<i64>()
            .map_err(|_| InputError::InvalidValue { position, token: token.to_owned() })?;
        values.push(value);
    }

    if values.len() != n {
        return Err(InputError::CountMismatch { expected: n, found: values.len() });
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_then_values() {
        assert_eq!(parse_sequence("5\n2 3 9 2 2\n"), Ok(vec![2, 3, 9, 2, 2]));
        assert_eq!(parse_sequence("3 -1 0 -9223372036854775808"), Ok(vec![-1, 0, i64::MIN]));
    }

    #[test]
    fn zero_count() {
        assert_eq!(parse_sequence("0"), Ok(vec![]));
        assert_eq!(parse_sequence("  0 \n"), Ok(vec![]));
    }

    #[test]
    fn missing_count() {
        assert_eq!(parse_sequence(""), Err(InputError::MissingCount));
        assert_eq!(parse_sequence(" \n\t"), Err(InputError::MissingCount));
    }

    #[test]
    fn bad_tokens() {
        assert_eq!(
            parse_sequence("-3 1 2 3"),
            Err(InputError::InvalidCount { token: "-3".to_owned() })
        );
        assert_eq!(
            parse_sequence("3 1 x 3"),
            Err(InputError::InvalidValue { position: 1, token: "x".to_owned() })
        );
        assert_eq!(
            parse_sequence("1 9223372036854775808"),
            Err(InputError::InvalidValue { position: 0, token: "9223372036854775808".to_owned() })
        );
    }

    #[test]
    fn wrong_number_of_values() {
        assert_eq!(
            parse_sequence("3 1 2"),
            Err(InputError::CountMismatch { expected: 3, found: 2 })
        );
        assert_eq!(
            parse_sequence("1 1 2"),
            Err(InputError::CountMismatch { expected: 1, found: 2 })
        );
    }
}
