/// Fixed run of spaces a tab expands to.
pub const TAB_SPACES: &str = "    ";

/// Replace every tab with [`TAB_SPACES`] so that character counts match columns.
pub fn tabs_to_spaces<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    lines.iter().map(|line| line.as_ref().replace('\t', TAB_SPACES)).collect()
}

/// Number of chars in a line. Wide and combining characters count as one.
pub fn width(line: &str) -> usize {
    line.chars().count()
}

/// Length of the longest line, 0 when there are none.
pub fn max_width<S: AsRef<str>>(lines: &[S]) -> usize {
    lines.iter().map(|line| width(line.as_ref())).max().unwrap_or(0)
}

/// Right-pad every line with spaces up to `target` chars.
///
/// Lines already at (or past) `target` are returned untouched.
pub fn pad_lines<S: AsRef<str>>(lines: &[S], target: usize) -> Vec<String> {
    lines
        .iter()
        .map(|line| {
            let line = line.as_ref();
            let mut o = String::with_capacity(target.max(line.len()));
            o.push_str(line);
            o.push_str(" ".repeat(target.saturating_sub(width(line))).as_str());
            o
        })
        .collect()
}

/// Expand tabs and pad to a common width. Returns the lines and that width.
pub fn normalize<S: AsRef<str>>(lines: &[S]) -> (Vec<String>, usize) {
    let expanded = tabs_to_spaces(lines);
    let max = max_width(&expanded);
    (pad_lines(&expanded, max), max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_becomes_four_spaces() {
        let out = tabs_to_spaces(&["a\tb"]);
        assert_eq!(out, vec!["a    b"]);
        assert_eq!(width(&out[0]), width("a\tb") + 3);
    }

    #[test]
    fn tabs_on_empty_input() {
        let empty: [&str; 0] = [];
        assert!(tabs_to_spaces(&empty).is_empty());
        assert_eq!(max_width(&empty), 0);
    }

    #[test]
    fn max_width_counts_chars_not_bytes() {
        assert_eq!(max_width(&["héllo", "hi"]), 5);
        assert_eq!(max_width(&["", "abc", "ab"]), 3);
    }

    #[test]
    fn pad_makes_equal_widths() {
        let out = pad_lines(&["Hello", "Hi", ""], 5);
        assert_eq!(out, vec!["Hello", "Hi   ", "     "]);
        assert!(out.iter().all(|l| width(l) == 5));
    }

    #[test]
    fn pad_counts_chars_like_max_width() {
        let out = pad_lines(&["é", "日本"], 3);
        assert_eq!(out, vec!["é  ", "日本 "]);
        assert_eq!(max_width(&out), 3);
    }

    #[test]
    fn pad_is_idempotent() {
        let once = pad_lines(&["abc", "a"], 3);
        let twice = pad_lines(&once, 3);
        assert_eq!(once, twice);
    }

    #[test]
    fn padding_keeps_max_width() {
        let lines = ["one", "three", "\tx"];
        let expanded = tabs_to_spaces(&lines);
        let before = max_width(&expanded);
        assert_eq!(max_width(&pad_lines(&expanded, before)), before);
    }

    #[test]
    fn normalize_expands_then_pads() {
        let (lines, w) = normalize(&["\tx", "hello world"]);
        assert_eq!(w, 11);
        assert_eq!(lines, vec!["    x      ", "hello world"]);
    }
}
