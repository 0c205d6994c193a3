/// String utility functions
pub struct StringUtils;

impl StringUtils {
    /// Keep only the ASCII digits of the input, in order
    ///
    /// Absent input yields an empty string.
    pub fn extract_digits<'a>(input: impl Into<Option<&'a str>>) -> String {
        match input.into() {
            Some(input) => input.chars().filter(|c| c.is_ascii_digit()).collect(),
            None => String::new(),
        }
    }

    /// Format a string to title case
    ///
    /// Words are split on runs of ASCII whitespace (`[ \t\n\x0B\f\r]`); each
    /// keeps its first character uppercased and the rest lowercased, joined by
    /// single spaces. Absent input stays absent and blank input is returned
    /// unchanged.
    pub fn to_title_case<'a>(input: impl Into<Option<&'a str>>) -> Option<String> {
        let input = input.into()?;
        if Self::is_blank(input) {
            return Some(input.to_string());
        }

        let words: Vec<String> = Self::trim(input)
            .split(Self::is_word_separator)
            .filter(|word| !word.is_empty())
            .map(Self::capitalize_word)
            .collect();

        Some(words.join(" "))
    }

    /// Check if string is empty or whitespace only
    pub fn is_blank(s: &str) -> bool {
        Self::trim(s).is_empty()
    }

    /// Strip leading and trailing characters at or below U+0020
    ///
    /// That covers the space and every ASCII control character, but not
    /// Unicode spaces such as NBSP or U+3000.
    pub fn trim(s: &str) -> &str {
        s.trim_matches(Self::is_trim_char)
    }

    fn is_trim_char(c: char) -> bool {
        c <= ' '
    }

    fn is_word_separator(c: char) -> bool {
        matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
    }

    fn capitalize_word(word: &str) -> String {
        let mut chars = word.chars();
        let Some(first) = chars.next() else {
            return String::new();
        };

        let mut result = String::with_capacity(word.len());
        result.push(Self::simple_uppercase(first));
        result.push_str(&chars.as_str().to_lowercase());
        result
    }

    /// One-to-one uppercase mapping; characters whose uppercase form expands
    /// (such as `ß`) are kept as they are.
    fn simple_uppercase(c: char) -> char {
        let mut upper = c.to_uppercase();
        match (upper.next(), upper.next()) {
            (Some(mapped), None) => mapped,
            _ => c,
        }
    }
}
