use super::*;

/// Splits a command line into words. `"big co"` is one word, `\` takes the
/// next character literally, and `""` is an empty word.
pub(super) fn tokenize(line: &str) -> Result<Vec<String>> {
    let mut words = Vec::new();
    let mut word: Option<String> = None;
    let mut quoted = false;
    let mut chars = line.chars();

    while let Some(ch) = chars.next() {
        match ch {
            '\\' => {
                let Some(next) = chars.next() else {
                    anyhow::bail!("dangling escape");
                };
                word.get_or_insert_with(String::new).push(next);
            }
            '"' => {
                quoted = !quoted;
                word.get_or_insert_with(String::new);
            }
            c if c.is_whitespace() && !quoted => words.extend(word.take()),
            c => word.get_or_insert_with(String::new).push(c),
        }
    }

    if quoted {
        anyhow::bail!("unterminated quote");
    }
    words.extend(word);
    Ok(words)
}
