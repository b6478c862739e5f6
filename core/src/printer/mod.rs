
use colorful::Colorful;

use crate::matcher::{policy::LabelPolicy, quote, Matcher};

/// Column widths shared by every printed line.
struct Columns {
    name: usize,
    op: usize,
}

impl Columns {
    /// Widths of the widest visible name and operator.
    fn measure<'a>(matchers: impl Iterator<Item = &'a Matcher>) -> Self {
        matchers.fold(Columns { name: 0, op: 0 }, |cols, m| Columns {
            name: cols.name.max(m.name.chars().count()),
            op: cols.op.max(m.op().width()),
        })
    }
}

fn render(m: &Matcher, columns: Option<&Columns>, colors: bool) -> String {
    let (name, op) = match columns {
        Some(cols) => (
            format!("{:<width$} ", m.name, width = cols.name),
            format!("{:<width$} ", m.op().symbol(), width = cols.op),
        ),
        None => (m.name.clone(), m.op().symbol().to_string()),
    };
    let value = quote(&m.value);
    if colors {
        format!("{}{}{}", name.light_blue(), op.yellow(), value.light_green())
    } else {
        format!("{}{}{}", name, op, value)
    }
}

fn visible<'a>(
    matchers: &'a [Matcher],
    names: &'a LabelPolicy,
) -> impl Iterator<Item = &'a Matcher> + 'a {
    matchers.iter().filter(move |m| !names.is_excluded(&m.name))
}

fn print(matchers: &[Matcher], pad: bool, names: &LabelPolicy, colors: bool) -> Vec<String> {
    let columns = pad.then(|| Columns::measure(visible(matchers, names)));
    visible(matchers, names)
        .map(|m| render(m, columns.as_ref(), colors))
        .collect()
}

/// Convert matchers into their canonical text form, one line per matcher.
///
/// Matchers whose name is excluded by `names` are skipped. If `pad` is true the
/// names and operators are padded so every value starts in the same column,
/// excluded matchers do not count towards the column widths.
pub fn format_matchers(matchers: &[Matcher], pad: bool, names: &LabelPolicy) -> Vec<String> {
    print(matchers, pad, names, false)
}

/// Same as [`format_matchers`] with terminal colors.
pub fn format_matchers_color(matchers: &[Matcher], pad: bool, names: &LabelPolicy) -> Vec<String> {
    print(matchers, pad, names, true)
}

/// Convert matchers into text using the default excluded label names.
pub fn matcher_to_string(matchers: &[Matcher], pad: bool) -> Vec<String> {
    format_matchers(matchers, pad, &LabelPolicy::default())
}
