//! Model resource parsing
//!
//! A class model is exported as three plain-text resources:
//!
//! - support vectors: one vector per line
//! - coefficients: a single line with one value per support vector
//! - bias: a single line holding one value
//!
//! Values are separated by any run of whitespace, `,` or `;`. Blank lines
//! are ignored. Every token must parse as a finite `f64`.

use crate::{SvmError, SvmModel, SvmResult};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// A model resource: a line reader plus the name reported in errors
#[derive(Debug)]
pub struct Resource<R> {
    /// Name used in error messages (usually the file path)
    pub name: String,
    /// Line source
    pub reader: R,
}

impl<R: BufRead> Resource<R> {
    /// Wrap a reader under the given name.
    pub fn new(name: impl Into<String>, reader: R) -> Self {
        Self {
            name: name.into(),
            reader,
        }
    }
}

impl Resource<BufReader<File>> {
    /// Open a file resource named after its path.
    pub fn open<P: AsRef<Path>>(path: P) -> SvmResult<Self> {
        let path = path.as_ref();
        let name = path.display().to_string();
        let file = File::open(path).map_err(|source| SvmError::Io {
            resource: name.clone(),
            source,
        })?;
        Ok(Self::new(name, BufReader::new(file)))
    }
}

impl<'a> Resource<&'a [u8]> {
    /// In-memory resource.
    pub fn from_text(name: impl Into<String>, text: &'a str) -> Self {
        Self::new(name, text.as_bytes())
    }
}

fn split_tokens(line: &str) -> impl Iterator<Item = &str> {
    line.split(|c: char| c.is_whitespace() || c == ',' || c == ';')
        .filter(|t| !t.is_empty())
}

fn parse_token(resource: &str, line: usize, token: &str) -> SvmResult<f64> {
    match token.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(SvmError::ModelFormat {
            resource: resource.to_string(),
            line,
            token: token.to_string(),
        }),
    }
}

/// Feed every non-blank line to `row` as `(name, line number, raw text,
/// parsed values)`. Returns the resource name.
fn for_each_row<R, F>(resource: Resource<R>, mut row: F) -> SvmResult<String>
where
    R: BufRead,
    F: FnMut(&str, usize, &str, Vec<f64>) -> SvmResult<()>,
{
    let Resource { name, reader } = resource;
    let mut seen = false;
    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| SvmError::Io {
            resource: name.clone(),
            source,
        })?;
        let values = split_tokens(&line)
            .map(|t| parse_token(&name, i + 1, t))
            .collect::<SvmResult<Vec<f64>>>()?;
        if !values.is_empty() {
            seen = true;
            row(&name, i + 1, &line, values)?;
        }
    }
    if !seen {
        return Err(SvmError::EmptyResource { resource: name });
    }
    Ok(name)
}

/// The only non-blank line of a resource
struct SingleLine {
    name: String,
    line: usize,
    text: String,
    values: Vec<f64>,
}

fn parse_single_line<R: BufRead>(resource: Resource<R>) -> SvmResult<SingleLine> {
    let mut first: Option<(usize, String, Vec<f64>)> = None;
    let name = for_each_row(resource, |name, line, text, values| {
        if first.is_some() {
            return Err(SvmError::ModelFormat {
                resource: name.to_string(),
                line,
                token: split_tokens(text).next().unwrap_or_default().to_string(),
            });
        }
        first = Some((line, text.to_string(), values));
        Ok(())
    })?;
    match first {
        Some((line, text, values)) => Ok(SingleLine {
            name,
            line,
            text,
            values,
        }),
        None => Err(SvmError::EmptyResource { resource: name }),
    }
}

/// Parse a support vector matrix, one row per non-blank line.
pub fn parse_support_vectors<R: BufRead>(resource: Resource<R>) -> SvmResult<Vec<Vec<f64>>> {
    let mut rows = Vec::new();
    for_each_row(resource, |_, _, _, values| {
        rows.push(values);
        Ok(())
    })?;
    Ok(rows)
}

/// Parse the single coefficient line.
pub fn parse_coefficients<R: BufRead>(resource: Resource<R>) -> SvmResult<Vec<f64>> {
    Ok(parse_single_line(resource)?.values)
}

/// Parse the single bias value.
pub fn parse_bias<R: BufRead>(resource: Resource<R>) -> SvmResult<f64> {
    let SingleLine {
        name,
        line,
        text,
        values,
    } = parse_single_line(resource)?;
    match values.as_slice() {
        [bias] => Ok(*bias),
        _ => Err(SvmError::ModelFormat {
            resource: name,
            line,
            token: split_tokens(&text).nth(1).unwrap_or_default().to_string(),
        }),
    }
}

/// Load one class model from its three resources.
///
/// # Errors
///
/// - [`SvmError::ModelFormat`] for non-numeric tokens or extra lines
/// - [`SvmError::EmptyResource`] if a resource has no values
/// - [`SvmError::ModelSize`] if rows and coefficients disagree
/// - [`SvmError::Io`] if a resource cannot be read
pub fn load_model<S, C, B>(
    support_vectors: Resource<S>,
    coefficients: Resource<C>,
    bias: Resource<B>,
) -> SvmResult<SvmModel>
where
    S: BufRead,
    C: BufRead,
    B: BufRead,
{
    let sv_name = support_vectors.name.clone();
    let rows = parse_support_vectors(support_vectors)?;
    let coefficients = parse_coefficients(coefficients)?;
    let bias = parse_bias(bias)?;
    let model = SvmModel::from_rows(&sv_name, rows, coefficients, bias)?;
    debug!(
        resource = %sv_name,
        support_vectors = model.num_support_vectors(),
        dimension = model.dimension(),
        "loaded svm model"
    );
    Ok(model)
}

/// Load one class model from three files.
pub fn load_model_files<P: AsRef<Path>>(
    support_vectors: P,
    coefficients: P,
    bias: P,
) -> SvmResult<SvmModel> {
    load_model(
        Resource::open(support_vectors)?,
        Resource::open(coefficients)?,
        Resource::open(bias)?,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_delimiters() {
        let rows =
            parse_support_vectors(Resource::from_text("sv", "1 2,3;4\n\n  5\t6 , 7 ;8  \n"))
                .unwrap();
        assert_eq!(rows, vec![vec![1.0, 2.0, 3.0, 4.0], vec![5.0, 6.0, 7.0, 8.0]]);
    }

    #[test]
    fn test_non_numeric_token_reports_line() {
        let err = parse_support_vectors(Resource::from_text("sv", "1 2\n3 x4\n")).unwrap_err();
        match err {
            SvmError::ModelFormat {
                resource,
                line,
                token,
            } => {
                assert_eq!(resource, "sv");
                assert_eq!(line, 2);
                assert_eq!(token, "x4");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(parse_coefficients(Resource::from_text("c", "1 NaN 2")).is_err());
        assert!(parse_coefficients(Resource::from_text("c", "inf")).is_err());
    }

    #[test]
    fn test_coefficients_single_line() {
        let c = parse_coefficients(Resource::from_text("c", "\n0.5;-1.25, 3e-2\n\n")).unwrap();
        assert_eq!(c, vec![0.5, -1.25, 0.03]);
        let err = parse_coefficients(Resource::from_text("c", "1 2\n3.10 4\n")).unwrap_err();
        assert!(matches!(
            err,
            SvmError::ModelFormat { line: 2, ref token, .. } if token == "3.10"
        ));
    }

    #[test]
    fn test_bias() {
        assert_eq!(parse_bias(Resource::from_text("b", " -0.75 \n")).unwrap(), -0.75);
        assert!(matches!(
            parse_bias(Resource::from_text("b", "1 2.50")),
            Err(SvmError::ModelFormat { line: 1, ref token, .. }) if token == "2.50"
        ));
        assert!(matches!(
            parse_bias(Resource::from_text("b", "\n-1e0\n+2.0\n")),
            Err(SvmError::ModelFormat { line: 3, ref token, .. }) if token == "+2.0"
        ));
        assert!(matches!(
            parse_bias(Resource::from_text("b", "\n \n")),
            Err(SvmError::EmptyResource { .. })
        ));
    }

    #[test]
    fn test_load_model_size_mismatch() {
        let sv = "0 0\n0 1\n1 0\n1 1\n2 2\n3 3\n";
        let err = load_model(
            Resource::from_text("sv", sv),
            Resource::from_text("c", "1 1 1 1 1"),
            Resource::from_text("b", "0"),
        )
        .unwrap_err();
        assert!(matches!(err, SvmError::ModelSize { ref resource, .. } if resource == "sv"));
    }

    #[test]
    fn test_missing_file() {
        let err = load_model_files("/nope/sv.txt", "/nope/c.txt", "/nope/b.txt").unwrap_err();
        assert!(matches!(err, SvmError::Io { .. }));
    }
}
