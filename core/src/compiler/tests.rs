#[cfg(test)]
mod tests {
    use crate::{
        compiler::{error::LabelError, parse_entries, parse_labels, parse_labels_with, ParseOptions},
        matcher::{
            policy::{Enforcement, LabelPolicy},
            Matcher,
        },
        parser::op::CompareOp,
        printer::format_matchers,
    };

    fn matcher(name: &str, op: CompareOp, value: &str) -> Matcher {
        Matcher::new(name, op, value)
    }

    #[test]
    fn empty() {
        assert_eq!(parse_labels("", false).unwrap(), vec![]);
        assert_eq!(parse_labels("", true).unwrap(), vec![]);
    }

    #[test]
    fn single() {
        let result = parse_labels(r#"foo="bar""#, false).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "foo");
        assert_eq!(result[0].value, "bar");
        assert!(result[0].is_equal);
        assert!(!result[0].is_regex);
    }

    #[test]
    fn regex_operators() {
        let result = parse_labels(r#"foo=~"bar" bar!~baz"#, false).unwrap();
        assert_eq!(
            result,
            vec![
                matcher("foo", CompareOp::RegexMatch, "bar"),
                matcher("bar", CompareOp::RegexNotMatch, "baz"),
            ]
        );
    }

    #[test]
    fn bare_value() {
        let result = parse_labels("foo=bar123", false).unwrap();
        assert_eq!(result, vec![matcher("foo", CompareOp::Equal, "bar123")]);
    }

    #[test]
    fn duplicates_overwrite() {
        let result = parse_labels(r#"foo="1",foo="2""#, false).unwrap();
        assert_eq!(result, vec![matcher("foo", CompareOp::Equal, "2")]);
    }

    #[test]
    fn duplicates_overwrite_in_place() {
        let result = parse_labels(r#"a="1" b="2" a!~"3" c="4""#, false).unwrap();
        assert_eq!(
            result,
            vec![
                matcher("a", CompareOp::RegexNotMatch, "3"),
                matcher("b", CompareOp::Equal, "2"),
                matcher("c", CompareOp::Equal, "4"),
            ]
        );
    }

    #[test]
    fn duplicates_allowed() {
        let result = parse_labels(r#"foo="1",foo="2""#, true).unwrap();
        assert_eq!(
            result,
            vec![
                matcher("foo", CompareOp::Equal, "1"),
                matcher("foo", CompareOp::Equal, "2"),
            ]
        );
    }

    #[test]
    fn unterminated_quote_is_lexer_error() {
        let err = parse_labels(r#"foo="bar"#, false).unwrap_err();
        assert!(err.is_lexer());
        assert_eq!(err.kind(), "lexer error");
    }

    #[test]
    fn grammar_error_is_parse_error() {
        let err = parse_labels("foo bar", false).unwrap_err();
        assert!(matches!(err, LabelError::Parse(_)));
        assert_eq!(
            err.to_string(),
            "parse error: Expected a comparison operator after 'foo', found bar at line 1, column 5"
        );
    }

    #[test]
    fn excluded_names_are_parsed_by_default() {
        let result = parse_labels(r#"alertstate="firing" foo="bar""#, false).unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].name, "alertstate");
    }

    #[test]
    fn excluded_names_rejected_when_enforced() {
        let options = ParseOptions::allow_duplicates(false)
            .with_names(LabelPolicy::default().with_enforcement(Enforcement::Reject));
        let err = parse_labels_with(r#"foo="bar" alertstate="firing""#, &options).unwrap_err();
        assert_eq!(err.message(), "Label name 'alertstate' is reserved");
        assert_eq!(err.base().info.range(), 10..29);
    }

    #[test]
    fn entries_keep_duplicates() {
        let entries = parse_entries("a=b a=c").unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn parse_then_format_is_equivalent() {
        let inputs = [
            r#"foo="bar", bar='bar'"#,
            r#"foo=~"bar" foo!~"bar""#,
            r#"foo!="^foo\"test\"bar[^baz]+$""#,
            "foo=bar123",
            r#"path="C:\\temp" multi="a\nb" re=~"\d+""#,
            r#"empty="""#,
        ];
        for input in inputs {
            let parsed = parse_labels(input, true).unwrap();
            let printed = format_matchers(&parsed, false, &LabelPolicy::none()).join(" ");
            let reparsed = parse_labels(&printed, true).unwrap();
            assert_eq!(parsed, reparsed, "round trip of {input} via {printed}");
        }
    }
}
