use tracing::trace;

/// Split a command line into space-delimited tokens.
///
/// Spaces inside a double-quoted run or inside `{}`/`[]` nesting do not
/// split. Quotes only toggle at nesting depth zero, so JSON payloads can
/// carry their own quotes. Tokens keep their delimiters verbatim and are
/// trimmed. Unbalanced nesting is not corrected.
///
/// # Examples
/// ```
/// use argline::tokenize;
///
/// assert_eq!(
///     tokenize(r#"-flag "always on" {a: 1}"#),
///     vec!["-flag", "\"always on\"", "{a: 1}"]
/// );
/// ```
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut brace_depth: i32 = 0;
    let mut bracket_depth: i32 = 0;

    for ch in line.chars() {
        match ch {
            '"' if brace_depth == 0 && bracket_depth == 0 => {
                in_quotes = !in_quotes;
                current.push(ch);
            }
            '{' if !in_quotes => {
                brace_depth += 1;
                current.push(ch);
            }
            '}' if !in_quotes => {
                brace_depth -= 1;
                current.push(ch);
            }
            '[' if !in_quotes => {
                bracket_depth += 1;
                current.push(ch);
            }
            ']' if !in_quotes => {
                bracket_depth -= 1;
                current.push(ch);
            }
            ' ' if !in_quotes && brace_depth == 0 && bracket_depth == 0 => {
                flush(&mut current, &mut tokens);
            }
            _ => current.push(ch),
        }
    }
    flush(&mut current, &mut tokens);

    trace!(count = tokens.len(), "tokenized command line");
    tokens
}

fn flush(current: &mut String, tokens: &mut Vec<String>) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        tokens.push(trimmed.to_string());
    }
    current.clear();
}
