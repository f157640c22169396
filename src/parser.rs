//! Recursive-descent TSON parser.
//!
//! The parser makes a single pass over the input with no backtracking. Every
//! value form is chosen from one character of lookahead:
//!
//! | Start | Form                                   |
//! |-------|----------------------------------------|
//! | `{`   | object of `name value` members         |
//! | `[`   | array                                  |
//! | `<`   | typed array, `<type>[...]`             |
//! | `"`   | string                                 |
//! | `#`   | integer                                |
//! | `=`   | double                                 |
//! | `?`   | `true` / `false`                       |
//! | `-`   | undefined sentinel (unless a digit follows) |
//!
//! A value in top-level or array-element position may be preceded by a name,
//! in which case it decodes as a single-member object `{name: value}`. A name
//! followed by none of the forms above names a `Null`.

use crate::cursor::Cursor;
use crate::error::{Error, ErrorKind};
use crate::options::DecodeOptions;
use crate::{Result, TsonMap, Value};

/// Decodes one complete document.
pub(crate) fn parse(input: &str, options: &DecodeOptions) -> Result<Value> {
    let mut parser = Parser::new(input, options);
    parser.parse_document()
}

fn is_name_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_' || ch == '$'
}

fn is_name_char(ch: char) -> bool {
    is_name_start(ch) || ch.is_ascii_digit() || ch == '.' || ch == '-'
}

struct Parser<'a> {
    cursor: Cursor<'a>,
    max_depth: Option<usize>,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str, options: &DecodeOptions) -> Self {
        Parser {
            cursor: Cursor::new(input),
            max_depth: options.max_depth,
            depth: 0,
        }
    }

    fn parse_document(&mut self) -> Result<Value> {
        self.cursor.skip_whitespace_and_comments();
        let value = self.parse_value(true)?;
        self.cursor.skip_whitespace_and_comments();

        if !self.cursor.at_end() {
            return Err(self.cursor.error(ErrorKind::UnexpectedTrailingCharacters));
        }

        tracing::trace!(kind = value.kind_name(), "decoded top-level value");
        Ok(value)
    }

    fn parse_value(&mut self, allow_name: bool) -> Result<Value> {
        self.cursor.skip_whitespace_and_comments();

        let ch = match self.cursor.peek() {
            Some(ch) => ch,
            None => return Err(self.cursor.error(ErrorKind::UnexpectedEndOfInput)),
        };

        if allow_name && is_name_start(ch) {
            let name = self.parse_name();
            self.cursor.skip_whitespace_and_comments();
            let value = self.parse_sigil_value()?.unwrap_or(Value::Null);
            return Ok(Value::named(name, value));
        }

        if ch == '-' && !self.cursor.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.cursor.advance();
            return Ok(Value::Null);
        }

        self.parse_sigil_value()?
            .ok_or_else(|| self.cursor.error(ErrorKind::UnexpectedCharacter(ch)))
    }

    /// Parses the value form selected by the current character.
    ///
    /// Returns `Ok(None)` without consuming anything when the character
    /// starts no value form.
    fn parse_sigil_value(&mut self) -> Result<Option<Value>> {
        let value = match self.cursor.peek() {
            Some('{') => {
                self.descend()?;
                self.cursor.advance();
                let object = self.parse_object();
                self.depth -= 1;
                object?
            }
            Some('[') => {
                self.descend()?;
                self.cursor.advance();
                let array = self.parse_array(None);
                self.depth -= 1;
                array?
            }
            Some('<') => {
                self.descend()?;
                self.cursor.advance();
                let array = self
                    .parse_type_specifier()
                    .and_then(|tag| self.parse_array(Some(tag)));
                self.depth -= 1;
                array?
            }
            Some('"') => {
                self.cursor.advance();
                Value::String(self.parse_string()?)
            }
            Some('#') => {
                self.cursor.advance();
                Value::Int(self.parse_int()?)
            }
            Some('=') => {
                self.cursor.advance();
                Value::Double(self.parse_double()?)
            }
            Some('?') => {
                self.cursor.advance();
                Value::Bool(self.parse_bool()?)
            }
            _ => return Ok(None),
        };
        Ok(Some(value))
    }

    /// Enters one level of object/array nesting.
    fn descend(&mut self) -> Result<()> {
        if let Some(limit) = self.max_depth {
            if self.depth >= limit {
                return Err(self.cursor.error(ErrorKind::RecursionLimitExceeded(limit)));
            }
        }
        self.depth += 1;
        Ok(())
    }

    /// Reads a name; the caller has checked that the current character can start one.
    fn parse_name(&mut self) -> String {
        let start = self.cursor.position();
        self.cursor.advance();
        while self.cursor.peek().is_some_and(is_name_char) {
            self.cursor.advance();
        }
        self.cursor.since(start).to_string()
    }

    /// Parses object members after the opening `{`.
    fn parse_object(&mut self) -> Result<Value> {
        let mut map = TsonMap::new();

        self.cursor.skip_whitespace_and_comments();
        while self.cursor.peek() != Some('}') {
            if !self.cursor.peek().is_some_and(is_name_start) {
                return Err(self.cursor.error(ErrorKind::ExpectedPropertyName));
            }
            let name = self.parse_name();

            self.cursor.skip_whitespace_and_comments();
            let value = self.parse_sigil_value()?.unwrap_or(Value::Null);
            map.insert(name, value);

            self.cursor.skip_whitespace_and_comments();
            if !self.cursor.match_char(',') {
                break;
            }
            self.cursor.skip_whitespace_and_comments();
        }

        if !self.cursor.match_char('}') {
            return Err(self.cursor.error(ErrorKind::ExpectedCloseBrace));
        }
        Ok(Value::Object(map))
    }

    /// Parses array elements after the opening `[`.
    ///
    /// `type_tag` is stored as-is and never applied to the elements.
    fn parse_array(&mut self, type_tag: Option<String>) -> Result<Value> {
        let mut elements = Vec::new();

        self.cursor.skip_whitespace_and_comments();
        while self.cursor.peek() != Some(']') {
            elements.push(self.parse_value(true)?);

            self.cursor.skip_whitespace_and_comments();
            if !self.cursor.match_char(',') {
                break;
            }
            self.cursor.skip_whitespace_and_comments();
        }

        if !self.cursor.match_char(']') {
            return Err(self.cursor.error(ErrorKind::ExpectedCloseBracket));
        }
        Ok(Value::Array { elements, type_tag })
    }

    /// Reads the raw text of `<type>` after the `<` and consumes the `[` that must follow.
    fn parse_type_specifier(&mut self) -> Result<String> {
        let start = self.cursor.position();
        while self.cursor.peek().is_some_and(|c| c != '>') {
            self.cursor.advance();
        }
        let tag = self.cursor.since(start).to_string();
        self.cursor.match_char('>');

        if !self.cursor.match_char('[') {
            return Err(self
                .cursor
                .error(ErrorKind::ExpectedArrayOpenAfterTypeSpecifier));
        }
        Ok(tag)
    }

    /// Reads string content after the opening `"`, through the closing `"`.
    fn parse_string(&mut self) -> Result<String> {
        let mut result = String::new();

        loop {
            match self.cursor.advance() {
                Some('"') => return Ok(result),
                Some('\\') => match self.cursor.advance() {
                    Some('n') => result.push('\n'),
                    Some('t') => result.push('\t'),
                    Some('r') => result.push('\r'),
                    // '"', '\\' and anything else stand for themselves
                    Some(other) => result.push(other),
                    None => return Err(self.cursor.error(ErrorKind::UnterminatedString)),
                },
                Some(ch) => result.push(ch),
                None => return Err(self.cursor.error(ErrorKind::UnterminatedString)),
            }
        }
    }

    /// Lexes `-?digits` and hands the lexeme to `i64`'s parser.
    ///
    /// A lexeme without digits or outside the `i64` range is an error at
    /// the start of the literal; there is no silent zero.
    fn parse_int(&mut self) -> Result<i64> {
        let (line, col) = self.cursor.location();
        let start = self.cursor.position();

        self.cursor.match_char('-');
        self.skip_digits();

        let literal = self.cursor.since(start);
        literal
            .parse::<i64>()
            .map_err(|_| Error::syntax(ErrorKind::InvalidInteger(literal.to_string()), line, col))
    }

    /// Lexes `-?digits(.digits)?` and hands the lexeme to `f64`'s parser.
    fn parse_double(&mut self) -> Result<f64> {
        let (line, col) = self.cursor.location();
        let start = self.cursor.position();

        self.cursor.match_char('-');
        self.skip_digits();
        if self.cursor.match_char('.') {
            self.skip_digits();
        }

        let literal = self.cursor.since(start);
        literal
            .parse::<f64>()
            .map_err(|_| Error::syntax(ErrorKind::InvalidDouble(literal.to_string()), line, col))
    }

    fn skip_digits(&mut self) {
        while self.cursor.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.cursor.advance();
        }
    }

    /// Matches `true` or `false` exactly at the current position.
    fn parse_bool(&mut self) -> Result<bool> {
        let (literal, value) = if self.cursor.rest().starts_with("true") {
            ("true", true)
        } else if self.cursor.rest().starts_with("false") {
            ("false", false)
        } else {
            return Err(self.cursor.error(ErrorKind::InvalidBooleanLiteral));
        };

        for _ in 0..literal.len() {
            self.cursor.advance();
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_default(input: &str) -> Result<Value> {
        parse(input, &DecodeOptions::default())
    }

    fn kind_of(input: &str) -> ErrorKind {
        match parse_default(input) {
            Err(Error::Syntax { kind, .. }) => kind,
            other => panic!("expected syntax error for {:?}, got {:?}", input, other),
        }
    }

    #[test]
    fn test_name_characters() {
        assert!(is_name_start('a'));
        assert!(is_name_start('Z'));
        assert!(is_name_start('_'));
        assert!(is_name_start('$'));
        assert!(!is_name_start('1'));
        assert!(!is_name_start('-'));
        assert!(!is_name_start('é'));
        assert!(is_name_char('9'));
        assert!(is_name_char('.'));
        assert!(is_name_char('-'));
        assert!(!is_name_char(' '));
    }

    #[test]
    fn test_dotted_and_dashed_names() {
        let value = parse_default("{user.first-name\"Ada\", $id#7, _x?false}").unwrap();
        let obj = value.as_object().unwrap();
        let keys: Vec<_> = obj.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["user.first-name", "$id", "_x"]);
    }

    #[test]
    fn test_bare_name_is_null_member() {
        assert_eq!(
            parse_default("flag").unwrap(),
            Value::named("flag", Value::Null)
        );
        let value = parse_default("{a, b#1}").unwrap();
        assert_eq!(value.get("a"), Some(&Value::Null));
        assert_eq!(value.get("b"), Some(&Value::Int(1)));
    }

    #[test]
    fn test_string_escapes() {
        let value = parse_default(r#""a\nb\tc\rd\"e\\f\qg""#).unwrap();
        assert_eq!(value, Value::from("a\nb\tc\rd\"e\\fqg"));
    }

    #[test]
    fn test_string_keeps_raw_newlines_and_unicode() {
        let value = parse_default("\"line one\nzwei ✓\"").unwrap();
        assert_eq!(value, Value::from("line one\nzwei ✓"));
    }

    #[test]
    fn test_backslash_at_end_is_unterminated() {
        assert_eq!(kind_of("\"abc\\"), ErrorKind::UnterminatedString);
    }

    #[test]
    fn test_int_edge_cases() {
        assert_eq!(parse_default("#0").unwrap(), Value::Int(0));
        assert_eq!(parse_default("#-0").unwrap(), Value::Int(0));
        assert_eq!(
            parse_default("#9223372036854775807").unwrap(),
            Value::Int(i64::MAX)
        );
        assert_eq!(
            parse_default("#-9223372036854775808").unwrap(),
            Value::Int(i64::MIN)
        );
        assert_eq!(
            kind_of("#9223372036854775808"),
            ErrorKind::InvalidInteger("9223372036854775808".to_string())
        );
    }

    #[test]
    fn test_sign_only_numbers_fail() {
        assert_eq!(kind_of("#-"), ErrorKind::InvalidInteger("-".to_string()));
        assert_eq!(kind_of("#"), ErrorKind::InvalidInteger(String::new()));
        assert_eq!(kind_of("=-"), ErrorKind::InvalidDouble("-".to_string()));
        assert_eq!(kind_of("{n=}"), ErrorKind::InvalidDouble(String::new()));
    }

    #[test]
    fn test_double_forms() {
        assert_eq!(parse_default("=2").unwrap(), Value::Double(2.0));
        assert_eq!(parse_default("=-0.25").unwrap(), Value::Double(-0.25));
        assert_eq!(parse_default("=1.").unwrap(), Value::Double(1.0));
    }

    #[test]
    fn test_double_has_no_exponent() {
        assert_eq!(kind_of("=1e5"), ErrorKind::UnexpectedTrailingCharacters);
    }

    #[test]
    fn test_bool_prefix_match() {
        assert_eq!(parse_default("?false").unwrap(), Value::Bool(false));
        assert_eq!(kind_of("?True"), ErrorKind::InvalidBooleanLiteral);
        assert_eq!(kind_of("?"), ErrorKind::InvalidBooleanLiteral);
        assert_eq!(kind_of("?truely"), ErrorKind::UnexpectedTrailingCharacters);
    }

    #[test]
    fn test_type_specifier_is_raw_text() {
        let value = parse_default("< map of \"str\" >[]").unwrap();
        assert_eq!(value.type_tag(), Some(" map of \"str\" "));
        assert_eq!(value.as_array().map(<[Value]>::len), Some(0));
    }

    #[test]
    fn test_type_specifier_requires_bracket() {
        assert_eq!(
            kind_of("<#> [#1]"),
            ErrorKind::ExpectedArrayOpenAfterTypeSpecifier
        );
        assert_eq!(
            kind_of("<#"),
            ErrorKind::ExpectedArrayOpenAfterTypeSpecifier
        );
        assert_eq!(
            kind_of("{a<#>}"),
            ErrorKind::ExpectedArrayOpenAfterTypeSpecifier
        );
    }

    #[test]
    fn test_trailing_commas_are_accepted() {
        assert_eq!(
            parse_default("[#1,]").unwrap(),
            Value::array(vec![Value::Int(1)])
        );
        assert_eq!(
            parse_default("{a#1,}").unwrap(),
            Value::Object(vec![("a".to_string(), Value::Int(1))].into_iter().collect())
        );
    }

    #[test]
    fn test_sentinel_inside_containers() {
        assert_eq!(
            parse_default("[-, #-1, -]").unwrap(),
            Value::array(vec![Value::Null, Value::Int(-1), Value::Null])
        );
        // members take sigil values only, so a sentinel there is not consumed
        assert_eq!(kind_of("{a -}"), ErrorKind::ExpectedCloseBrace);
    }

    #[test]
    fn test_unclosed_containers() {
        // at end of input an object still wants a member and an array an element
        assert_eq!(kind_of("{"), ErrorKind::ExpectedPropertyName);
        assert_eq!(kind_of("{a#1,"), ErrorKind::ExpectedPropertyName);
        assert_eq!(kind_of("["), ErrorKind::UnexpectedEndOfInput);
        assert_eq!(kind_of("[#1,"), ErrorKind::UnexpectedEndOfInput);
        assert_eq!(kind_of("<#>["), ErrorKind::UnexpectedEndOfInput);
        assert_eq!(kind_of("{a#1"), ErrorKind::ExpectedCloseBrace);
        assert_eq!(kind_of("[#1"), ErrorKind::ExpectedCloseBracket);
        assert_eq!(kind_of("[#1 #2]"), ErrorKind::ExpectedCloseBracket);
        assert_eq!(kind_of("{#1}"), ErrorKind::ExpectedPropertyName);
    }

    #[test]
    fn test_depth_limit() {
        let options = DecodeOptions::new().with_max_depth(1);
        assert!(parse("a{b#1}", &options).is_ok());

        let err = parse("a{b[#1]}", &options).unwrap_err();
        assert_eq!(err.kind(), Some(&ErrorKind::RecursionLimitExceeded(1)));
        assert_eq!(err.column(), Some(4));

        let err = parse("[<#>[]]", &options).unwrap_err();
        assert_eq!(err.kind(), Some(&ErrorKind::RecursionLimitExceeded(1)));
    }

    #[test]
    fn test_depth_counter_unwinds_between_siblings() {
        let options = DecodeOptions::new().with_max_depth(2);
        assert!(parse("[[#1], [#2], {a#3}, [[]]]", &options).is_err());
        assert!(parse("[[#1], [#2], {a#3}, [#4]]", &options).is_ok());
    }

    #[test]
    fn test_unlimited_depth() {
        let depth = 300;
        let input = format!("{}{}", "[".repeat(depth), "]".repeat(depth));
        assert!(parse(&input, &DecodeOptions::unlimited()).is_ok());
        assert_eq!(
            parse(&input, &DecodeOptions::default()).unwrap_err().kind(),
            Some(&ErrorKind::RecursionLimitExceeded(256))
        );
    }
}
