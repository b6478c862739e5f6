#[cfg(test)]
mod tests {
    use crate::{
        lexer::lexer::tokenize,
        parser::{
            ast::{MatcherEntry, ValueKind},
            error::ParseError,
            op::CompareOp,
            parser::{parse_tokens, ParseResults},
        },
        util::error::{BaseErrorExt, LineInfo},
    };

    fn parse(input: &str) -> ParseResults {
        parse_tokens(tokenize(input).expect("input should lex"))
    }

    fn entry(name: &str, op: CompareOp, value: &str, kind: ValueKind) -> MatcherEntry {
        MatcherEntry::new(
            name.to_string(),
            op,
            value.to_string(),
            kind,
            LineInfo::default(),
        )
    }

    fn parse_err(input: &str) -> ParseError {
        parse(input).expect_err("input should not parse")
    }

    #[test]
    fn empty() {
        assert_eq!(parse("").unwrap(), vec![]);
        assert_eq!(parse(" , \n\t").unwrap(), vec![]);
    }

    #[test]
    fn single_double_quoted() {
        let result = parse(r#"foo="bar""#).unwrap();
        assert_eq!(
            result,
            vec![entry("foo", CompareOp::Equal, "bar", ValueKind::DoubleQuoted)]
        );
        assert!(result[0].is_equal());
        assert!(!result[0].is_regex());
    }

    #[test]
    fn single_quoted() {
        let result = parse("foo!='bar'").unwrap();
        assert_eq!(
            result,
            vec![entry("foo", CompareOp::NotEqual, "bar", ValueKind::SingleQuoted)]
        );
    }

    #[test]
    fn bare_value() {
        let result = parse("foo=bar123").unwrap();
        assert_eq!(
            result,
            vec![entry("foo", CompareOp::Equal, "bar123", ValueKind::Bare)]
        );
    }

    #[test]
    fn whitespace_separated() {
        let result = parse(r#"foo=~"bar" bar!~baz"#).unwrap();
        assert_eq!(
            result,
            vec![
                entry("foo", CompareOp::RegexMatch, "bar", ValueKind::DoubleQuoted),
                entry("bar", CompareOp::RegexNotMatch, "baz", ValueKind::Bare),
            ]
        );
    }

    #[test]
    fn comma_separated() {
        let spaced = parse(r#"foo="bar", bar='bar'"#).unwrap();
        let strict = parse(r#"foo="bar",bar='bar'"#).unwrap();
        assert_eq!(spaced, strict);
        assert_eq!(spaced.len(), 2);
    }

    #[test]
    fn newline_separated() {
        let result = parse("a=b\nc=d\r\ne=f\n").unwrap();
        assert_eq!(result.len(), 3);
        assert_eq!(result[2].name, "e");
    }

    #[test]
    fn spaces_around_operator() {
        let result = parse(r#"foo = "bar" , baz != qux"#).unwrap();
        assert_eq!(
            result,
            vec![
                entry("foo", CompareOp::Equal, "bar", ValueKind::DoubleQuoted),
                entry("baz", CompareOp::NotEqual, "qux", ValueKind::Bare),
            ]
        );
    }

    #[test]
    fn adjacent_entries() {
        let result = parse(r#"a="1"b="2""#).unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result[1].name, "b");
    }

    #[test]
    fn duplicates_are_kept() {
        let result = parse(r#"foo="1",foo="2""#).unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].value, "1");
        assert_eq!(result[1].value, "2");
    }

    #[test]
    fn escaped_regex_value() {
        let result = parse(r#"foo!="^foo\"test\"bar[^baz]+$""#).unwrap();
        assert_eq!(result[0].value, r#"^foo"test"bar[^baz]+$"#);
    }

    #[test]
    fn entry_span() {
        let result = parse(r#"  foo="bar" x=y"#).unwrap();
        assert_eq!(result[0].info.start.index, 2);
        assert_eq!(result[0].info.end.index, 11);
        assert_eq!(result[1].info.range(), 12..15);
    }

    #[test]
    fn missing_name() {
        let err = parse_err(r#"="bar""#);
        assert_eq!(err.message(), "Expected a label name, found =");
        assert_eq!(err.info().start.index, 0);
    }

    #[test]
    fn quoted_name() {
        let err = parse_err(r#""foo"="bar""#);
        assert!(err.message().starts_with("Expected a label name"));
    }

    #[test]
    fn missing_operator() {
        let err = parse_err("foo bar");
        assert_eq!(
            err.message(),
            "Expected a comparison operator after 'foo', found bar"
        );
    }

    #[test]
    fn missing_value() {
        let err = parse_err("foo=");
        assert_eq!(err.message(), "Expected a value after '=', found end of input");
        assert!(err.info().end.eof);

        let err = parse_err("foo=!=");
        assert_eq!(err.message(), "Expected a value after '=', found !=");
    }

    #[test]
    fn trailing_identifier() {
        let err = parse_err("foo=bar baz");
        assert_eq!(
            err.message(),
            "Expected a comparison operator after 'baz', found end of input"
        );
    }

    #[test]
    fn trailing_value() {
        let err = parse_err(r#"foo="bar" "baz""#);
        assert_eq!(
            err.message(),
            "Expected a new matcher or the end of input, found \"baz\""
        );
        assert_eq!(err.base().labels.len(), 1);
        assert_eq!(err.base().labels[0].info.range(), 0..9);
    }

    #[test]
    fn trailing_operator() {
        let err = parse_err("foo=bar =");
        assert!(err.message().starts_with("Expected a new matcher"));
    }
}
