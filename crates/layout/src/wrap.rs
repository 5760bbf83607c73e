//! Whitespace-aware text wrapping.

/// Wrap `text` into lines of at most `max_chars` characters, breaking on
/// whitespace and hard-splitting words longer than a full line. Explicit
/// newlines in the input are preserved as line breaks. No content is ever
/// dropped.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        if paragraph.trim().is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let mut word = word;
            // Hard-split words that cannot fit on any line.
            while word.chars().count() > max_chars {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                let split_at = word
                    .char_indices()
                    .nth(max_chars)
                    .map(|(i, _)| i)
                    .unwrap_or(word.len());
                let (head, tail) = word.split_at(split_at);
                lines.push(head.to_string());
                word = tail;
            }

            let needed = word.chars().count()
                + if current.is_empty() { 0 } else { 1 + current.chars().count() };
            if !current.is_empty() && needed > max_chars {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_stays_on_one_line() {
        assert_eq!(wrap_text("payable on receipt", 40), vec!["payable on receipt"]);
    }

    #[test]
    fn wraps_at_word_boundaries() {
        let lines = wrap_text("one two three four five", 9);
        assert_eq!(lines, vec!["one two", "three", "four five"]);
    }

    #[test]
    fn preserves_explicit_newlines() {
        let lines = wrap_text("first\n\nsecond", 20);
        assert_eq!(lines, vec!["first", "", "second"]);
    }

    #[test]
    fn hard_splits_overlong_words() {
        let lines = wrap_text("abcdefghij", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn never_drops_content() {
        let text = "lorem ipsum dolor sit amet consectetur adipiscing elit sed do";
        let rejoined = wrap_text(text, 7).join(" ");
        // Hard splits may insert breaks inside words, but every character
        // survives the wrap.
        assert_eq!(rejoined.replace(' ', ""), text.replace(' ', ""));
    }
}
