pub mod error;
mod tests;

use crate::{
    lexer::lexer::tokenize,
    matcher::{
        list::{DuplicatePolicy, MatcherList},
        policy::LabelPolicy,
        Matcher,
    },
    parser::{ast::MatcherEntry, error::ParseError, parser::parse_tokens},
};

use self::error::LabelError;

/// Options for turning a matcher expression into a [`MatcherList`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseOptions {
    pub duplicates: DuplicatePolicy,
    pub names: LabelPolicy,
}

impl ParseOptions {
    pub fn allow_duplicates(allow_duplicates: bool) -> Self {
        Self {
            duplicates: DuplicatePolicy::from_allow(allow_duplicates),
            ..Default::default()
        }
    }

    pub fn with_names(self, names: LabelPolicy) -> Self {
        Self { names, ..self }
    }
}

/// Lex and parse an expression into raw entries, duplicates included.
pub fn parse_entries(input: &str) -> Result<Vec<MatcherEntry>, LabelError> {
    let tokens = tokenize(input)?;
    Ok(parse_tokens(tokens)?)
}

/// Compile an expression into a matcher list.
pub fn parse_labels_with(input: &str, options: &ParseOptions) -> Result<MatcherList, LabelError> {
    let entries = parse_entries(input)?;
    check_names(&entries, &options.names)?;

    let mut list = MatcherList::new(options.duplicates);
    list.extend(entries.into_iter().map(Matcher::from));
    log::debug!(
        "Compiled {} matchers with duplicate policy {:?}",
        list.len(),
        options.duplicates
    );
    Ok(list)
}

/// Parse a string of labels into a list of matchers.
///
/// If `allow_duplicates` is true every entry is kept, otherwise the last value
/// seen for a name replaces earlier ones while keeping their position.
pub fn parse_labels(input: &str, allow_duplicates: bool) -> Result<Vec<Matcher>, LabelError> {
    parse_labels_with(input, &ParseOptions::allow_duplicates(allow_duplicates))
        .map(MatcherList::into_vec)
}

/// The only place the label policy is consulted while parsing.
fn check_names(entries: &[MatcherEntry], names: &LabelPolicy) -> Result<(), ParseError> {
    if !names.rejects_on_parse() {
        return Ok(());
    }
    match entries.iter().find(|e| names.is_excluded(&e.name)) {
        Some(entry) => Err(ParseError::reserved_name(&entry.name, entry.info.clone())),
        None => Ok(()),
    }
}
