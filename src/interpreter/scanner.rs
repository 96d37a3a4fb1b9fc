/// Scans an identifier anchored at the start of `text`.
///
/// Matches the longest prefix of the form `[a-zA-Z_][a-zA-Z_0-9]*`. The scan
/// never skips leading whitespace and consumes no surrounding delimiters.
///
/// # Parameters
/// - `text`: The input to scan, starting at position 0.
///
/// # Returns
/// - `Some((name, consumed))`: The matched identifier and the number of
///   characters it covers.
/// - `None`: If the first character is not an identifier start.
///
/// # Examples
/// ```
/// use assigna::interpreter::scanner::scan_identifier;
///
/// assert_eq!(scan_identifier("x1 = "), Some(("x1", 2)));
/// assert_eq!(scan_identifier("1x"), None);
/// ```
#[must_use]
pub fn scan_identifier(text: &str) -> Option<(&str, usize)> {
    let first = text.chars().next()?;
    if !(first.is_ascii_alphabetic() || first == '_') {
        return None;
    }

    let consumed = text.find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                       .unwrap_or(text.len());

    Some((&text[..consumed], consumed))
}

/// Scans an unsigned integer literal anchored at the start of `text`.
///
/// Matches the longest prefix of the form `0` or `[1-9][0-9]*`. A literal
/// starting with `0` is always exactly one character long, so leading zeros
/// cannot sneak in (`"0abc"` matches `"0"` and leaves the rest). Signs are
/// not consumed here; they belong to the fact parser.
///
/// # Parameters
/// - `text`: The input to scan, starting at position 0.
///
/// # Returns
/// - `Some((digits, consumed))`: The matched digit run and its length.
/// - `None`: If the first character is not a digit.
///
/// # Examples
/// ```
/// use assigna::interpreter::scanner::scan_integer;
///
/// assert_eq!(scan_integer("123;"), Some(("123", 3)));
/// assert_eq!(scan_integer("0abc"), Some(("0", 1)));
/// assert_eq!(scan_integer("-5"), None);
/// ```
#[must_use]
pub fn scan_integer(text: &str) -> Option<(&str, usize)> {
    let first = text.chars().next()?;
    if !first.is_ascii_digit() {
        return None;
    }
    if first == '0' {
        return Some((&text[..1], 1));
    }

    let consumed = text.find(|c: char| !c.is_ascii_digit()).unwrap_or(text.len());

    Some((&text[..consumed], consumed))
}
