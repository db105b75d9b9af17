use std::{
    io::{self, Read},
    ops::Range,
    path::Path,
};

use inflector::{value, Case, CaseError, ErrorKind};
use log::{debug, trace};

pub mod inflector;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Case(#[from] CaseError),
    #[error("malformed JSON value: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    /// The type/value classification of a conversion error, if this is one.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Error::Case(err) => Some(err.kind()),
            Error::Json(_) | Error::Io(_) => None,
        }
    }
}

/// How each entry of a [`Batch`] is read before conversion.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    /// The entry is the string to convert.
    #[default]
    Text,
    /// The entry is a JSON value, which must be a string to convert.
    Json,
}

/// Inputs sharing one source text, each remembered by its byte span.
pub struct Batch {
    name: String,
    text: String,
    entries: Vec<Range<usize>>,
}

impl Batch {
    /// One entry per argument. The source text is the arguments joined by newlines.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut text = String::new();
        let mut entries = vec![];
        for arg in args {
            if !entries.is_empty() {
                text.push('\n');
            }
            let start = text.len();
            text.push_str(arg.as_ref());
            entries.push(start..text.len());
        }
        Self {
            name: "<args>".to_string(),
            text,
            entries,
        }
    }

    /// One entry per line of `text`, without its line terminator.
    pub fn from_text(name: impl Into<String>, text: String) -> Self {
        let mut entries = vec![];
        let mut start = 0;
        for line in text.split_inclusive('\n') {
            let content = line
                .strip_suffix('\n')
                .map(|l| l.strip_suffix('\r').unwrap_or(l))
                .unwrap_or(line);
            entries.push(start..start + content.len());
            start += line.len();
        }
        Self {
            name: name.into(),
            text,
            entries,
        }
    }

    pub fn read_file(path: &Path) -> io::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::from_text(path.display().to_string(), text))
    }

    pub fn read_stdin() -> io::Result<Self> {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(Self::from_text("<stdin>", text))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterator over the entries and their spans
    pub fn entries(&self) -> impl Iterator<Item = (Range<usize>, &str)> + '_ {
        self.entries
            .iter()
            .map(|span| (span.clone(), &self.text[span.clone()]))
    }

    /// Converts every entry, keeping going past failures.
    pub fn convert(&self, case: Case, mode: Mode) -> Vec<Outcome<'_>> {
        debug!("converting {} entries of {} to {case}", self.len(), self.name);
        self.entries()
            .map(|(span, input)| {
                let result = convert_entry(case, mode, input);
                match &result {
                    Ok(converted) => trace!("{input:?} -> {converted:?}"),
                    Err(err) => debug!("{input:?} at {span:?}: {err}"),
                }
                Outcome {
                    input,
                    span,
                    result,
                }
            })
            .collect()
    }

    /// Iterator over the entries not already written in `case`
    pub fn check(&self, case: Case) -> impl Iterator<Item = Mismatch<'_>> + '_ {
        self.entries()
            .filter(move |(_, input)| !case.is_case(input))
            .map(move |(span, input)| Mismatch {
                input,
                expected: case.convert(input).ok(),
                span,
            })
    }
}

fn convert_entry(case: Case, mode: Mode, input: &str) -> Result<String, Error> {
    match mode {
        Mode::Text => Ok(case.convert(input)?),
        Mode::Json => {
            let value: serde_json::Value = serde_json::from_str(input)?;
            Ok(value::convert(case, &value)?)
        }
    }
}

/// The result of converting one entry
#[derive(Debug)]
pub struct Outcome<'a> {
    pub input: &'a str,
    pub result: Result<String, Error>,
    span: Range<usize>,
}

impl Outcome<'_> {
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

/// An entry not written in the case it was checked against
#[derive(Debug)]
pub struct Mismatch<'a> {
    pub input: &'a str,
    /// How the entry should be written, if it converts at all.
    pub expected: Option<String>,
    span: Range<usize>,
}

impl Mismatch<'_> {
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_args_spans() {
        let batch = Batch::from_args(["hello world", "", "fooBar"]);
        assert_eq!(batch.text(), "hello world\n\nfooBar");
        let spans: Vec<_> = batch.entries().map(|(span, _)| span).collect();
        assert_eq!(spans, [0..11, 12..12, 13..19]);
    }

    #[test]
    fn from_text_strips_line_terminators() {
        let batch = Batch::from_text("names.txt", "foo bar\r\nbaz\nqux".to_string());
        let inputs: Vec<_> = batch.entries().map(|(_, input)| input).collect();
        assert_eq!(inputs, ["foo bar", "baz", "qux"]);
        assert_eq!(batch.name(), "names.txt");
    }

    #[test]
    fn from_text_without_trailing_line() {
        let batch = Batch::from_text("names.txt", "foo\n\nbar\n".to_string());
        let inputs: Vec<_> = batch.entries().map(|(_, input)| input).collect();
        assert_eq!(inputs, ["foo", "", "bar"]);
    }

    #[test]
    fn from_empty_text() {
        assert!(Batch::from_text("empty", String::new()).is_empty())
    }

    #[test]
    fn convert_keeps_going_past_failures() {
        let batch = Batch::from_text("names.txt", "HelloWorld\n   \nhello@world\n".to_string());
        let outcomes = batch.convert(Case::Kebab, Mode::Text);
        assert_eq!(outcomes.len(), 3);
        assert_eq!(outcomes[0].result.as_ref().unwrap(), "hello-world");
        assert_eq!(outcomes[1].span(), 11..14);
        assert!(matches!(
            outcomes[1].result,
            Err(Error::Case(CaseError::Empty))
        ));
        assert_eq!(outcomes[2].result.as_ref().unwrap(), "hello-world");
    }

    #[test]
    fn convert_lenient_cases_accept_blank_entries() {
        let batch = Batch::from_args(["", "hello world"]);
        let outcomes = batch.convert(Case::Camel, Mode::Text);
        assert_eq!(outcomes[0].result.as_ref().unwrap(), "");
        assert_eq!(outcomes[1].result.as_ref().unwrap(), "helloWorld");
    }

    #[test]
    fn convert_json_entries() {
        let batch = Batch::from_args([r#""fooBarBaz""#, "123", "null", "{not json"]);
        let outcomes = batch.convert(Case::Kebab, Mode::Json);
        assert_eq!(outcomes[0].result.as_ref().unwrap(), "foo-bar-baz");
        assert!(matches!(
            outcomes[1].result,
            Err(Error::Case(CaseError::NotAString { received: "number" }))
        ));
        assert!(matches!(
            outcomes[2].result,
            Err(Error::Case(CaseError::Missing))
        ));
        assert!(matches!(outcomes[3].result, Err(Error::Json(_))));
        assert_eq!(outcomes[3].result.as_ref().unwrap_err().kind(), None);
    }

    #[test]
    fn convert_json_generic_type_error() {
        let batch = Batch::from_args(["null"]);
        let outcomes = batch.convert(Case::Dot, Mode::Json);
        let err = outcomes[0].result.as_ref().unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::Type));
        assert_eq!(
            err.to_string(),
            "invalid input type: expected string, but received object"
        );
    }

    #[test]
    fn check_reports_mismatches() {
        let batch = Batch::from_args(["foo-bar", "fooBar", "  "]);
        let mismatches: Vec<_> = batch.check(Case::Kebab).collect();
        assert_eq!(mismatches.len(), 2);
        assert_eq!(mismatches[0].input, "fooBar");
        assert_eq!(mismatches[0].expected.as_deref(), Some("foo-bar"));
        assert_eq!(mismatches[0].span(), 8..14);
        assert_eq!(mismatches[1].expected, None);
    }

    #[test]
    fn check_accepts_conforming_entries() {
        let batch = Batch::from_args(["foo.bar", "baz"]);
        assert_eq!(batch.check(Case::Dot).count(), 0);
    }
}
