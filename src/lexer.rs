/// A word pulled out of a text, with its 1-based position.
#[derive(Debug, Clone, PartialEq)]
pub struct WordToken {
    pub text: String,
    pub line: u32,
    pub column: u32,
}

/// Iterator over the words of a text.
///
/// A word is a maximal run of ASCII letters and apostrophes starting
/// with a letter or digit. Runs containing digits ("abc123", "9lives")
/// are dropped entirely, and trailing apostrophes from quoting are
/// trimmed off.
#[derive(Debug)]
pub struct WordLexer {
    text: String,
    offset: usize,
    line: u32,
    column: u32,
}

impl WordLexer {
    pub fn new<T: AsRef<str>>(text: T) -> WordLexer {
        WordLexer {
            text: text.as_ref().to_string(),
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    fn peek(&self) -> Option<char> {
        self.text[self.offset..].chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.offset += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn word(&mut self) -> Option<WordToken> {
        let line = self.line;
        let column = self.column;
        let mut text = String::new();
        let mut has_digit = false;

        while let Some(c) = self.peek() {
            match c {
                'a'..='z' | 'A'..='Z' | '\'' => {
                    text.push(c);
                    self.advance();
                }
                '0'..='9' => {
                    has_digit = true;
                    self.advance();
                }
                _ => break,
            }
        }

        if has_digit {
            return None;
        }

        Some(WordToken {
            text: text.trim_end_matches('\'').to_string(),
            line,
            column,
        })
    }
}

impl Iterator for WordLexer {
    type Item = WordToken;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let c = self.peek()?;
            if c.is_ascii_alphanumeric() {
                if let Some(token) = self.word() {
                    return Some(token);
                }
            } else {
                self.advance();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        WordLexer::new(text).map(|t| t.text).collect()
    }

    #[test]
    fn lexes_words_with_positions() {
        let tokens: Vec<_> = WordLexer::new("Hello world\nfoo").collect();
        assert_eq!(
            tokens,
            vec![
                WordToken { text: "Hello".into(), line: 1, column: 1 },
                WordToken { text: "world".into(), line: 1, column: 7 },
                WordToken { text: "foo".into(), line: 2, column: 1 },
            ]
        );
    }

    #[test]
    fn skips_runs_containing_digits() {
        assert_eq!(words("abc123 9lives cat 42"), vec!["cat"]);
    }

    #[test]
    fn keeps_inner_apostrophes() {
        assert_eq!(words("don't isn't rock'n'roll"), vec!["don't", "isn't", "rock'n'roll"]);
    }

    #[test]
    fn trims_quoting_apostrophes() {
        assert_eq!(words("say 'hello' twice"), vec!["say", "hello", "twice"]);
    }

    #[test]
    fn punctuation_separates_words() {
        assert_eq!(words("one,two.three!four"), vec!["one", "two", "three", "four"]);
    }

    #[test]
    fn empty_text_yields_nothing() {
        assert_eq!(words(""), Vec::<String>::new());
    }
}
