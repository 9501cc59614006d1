use unicode_width::UnicodeWidthChar;

pub fn char_count(value: &str) -> usize {
    value.chars().count()
}

pub fn clamp_cursor(cursor: usize, value: &str) -> usize {
    cursor.min(char_count(value))
}

/// Display columns taken by the characters before `cursor`.
pub fn width_before(value: &str, cursor: usize) -> usize {
    value
        .chars()
        .take(clamp_cursor(cursor, value))
        .map(|ch| UnicodeWidthChar::width(ch).unwrap_or(0))
        .sum()
}

pub fn insert_char(value: &mut String, cursor: &mut usize, ch: char) {
    let pos = clamp_cursor(*cursor, value);
    let byte_pos = byte_index_at_char(value, pos);
    value.insert(byte_pos, ch);
    *cursor = pos + 1;
}

pub fn backspace_char(value: &mut String, cursor: &mut usize) -> bool {
    let pos = clamp_cursor(*cursor, value);
    if pos == 0 {
        return false;
    }
    let byte_pos = byte_index_at_char(value, pos - 1);
    value.remove(byte_pos);
    *cursor = pos - 1;
    true
}

pub fn delete_char(value: &mut String, cursor: &mut usize) -> bool {
    let pos = clamp_cursor(*cursor, value);
    if pos >= char_count(value) {
        return false;
    }
    let byte_pos = byte_index_at_char(value, pos);
    value.remove(byte_pos);
    *cursor = pos;
    true
}

pub fn move_left(cursor: &mut usize, value: &str) -> bool {
    let pos = clamp_cursor(*cursor, value);
    if pos == 0 {
        return false;
    }
    *cursor = pos - 1;
    true
}

pub fn move_right(cursor: &mut usize, value: &str) -> bool {
    let pos = clamp_cursor(*cursor, value);
    if pos >= char_count(value) {
        return false;
    }
    *cursor = pos + 1;
    true
}

pub fn delete_word_left(value: &mut String, cursor: &mut usize) -> bool {
    let mut chars: Vec<char> = value.chars().collect();
    let pos = (*cursor).min(chars.len());
    if pos == 0 {
        *cursor = 0;
        return false;
    }

    let mut start = pos;
    while start > 0 && is_separator(chars[start - 1]) {
        start -= 1;
    }
    while start > 0 && !is_separator(chars[start - 1]) {
        start -= 1;
    }

    if start == pos {
        *cursor = pos;
        return false;
    }

    chars.drain(start..pos);
    *value = chars.into_iter().collect();
    *cursor = start;
    true
}

pub fn delete_word_right(value: &mut String, cursor: &mut usize) -> bool {
    let mut chars: Vec<char> = value.chars().collect();
    let pos = (*cursor).min(chars.len());

    let mut end = pos;
    while end < chars.len() && is_separator(chars[end]) {
        end += 1;
    }
    while end < chars.len() && !is_separator(chars[end]) {
        end += 1;
    }

    if end == pos {
        *cursor = pos;
        return false;
    }

    chars.drain(pos..end);
    *value = chars.into_iter().collect();
    *cursor = pos;
    true
}

fn is_separator(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '.' | '/' | ',' | '-' | '@' | '_' | ':')
}

fn byte_index_at_char(value: &str, char_idx: usize) -> usize {
    if char_idx == 0 {
        return 0;
    }
    value
        .char_indices()
        .nth(char_idx)
        .map(|(idx, _)| idx)
        .unwrap_or(value.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_backspace_handle_multibyte_chars() {
        let mut value = String::from("zaż");
        let mut cursor = 3;
        insert_char(&mut value, &mut cursor, 'ó');
        assert_eq!(value, "zażó");
        assert!(backspace_char(&mut value, &mut cursor));
        assert!(backspace_char(&mut value, &mut cursor));
        assert_eq!(value, "za");
        assert_eq!(cursor, 2);
    }

    #[test]
    fn delete_char_at_end_is_noop() {
        let mut value = String::from("ab");
        let mut cursor = 2;
        assert!(!delete_char(&mut value, &mut cursor));
        cursor = 0;
        assert!(delete_char(&mut value, &mut cursor));
        assert_eq!(value, "b");
    }

    #[test]
    fn delete_word_left_stops_at_separator() {
        let mut value = String::from("red, green");
        let mut cursor = char_count(&value);
        assert!(delete_word_left(&mut value, &mut cursor));
        assert_eq!(value, "red, ");
        assert_eq!(cursor, 5);
    }

    #[test]
    fn width_before_counts_wide_chars_twice() {
        assert_eq!(width_before("日本", 1), 2);
        assert_eq!(width_before("ab", 10), 2);
    }
}
