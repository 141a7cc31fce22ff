use std::io;

/// Errors that can arise while reading and parsing a DIMACS CNF file.
///
/// Every variant carries enough context (a line number, the offending text)
/// to produce a useful message; these are reported to the user and never
/// raised from inside the solver core.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to open '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: expected header 'p cnf <variables> <clauses>', found '{found}'")]
    MalformedHeader { line: usize, found: String },

    #[error("line {line}: header declares {count} {what}, which must be nonzero")]
    ZeroCount {
        line: usize,
        count: u64,
        what: &'static str,
    },

    #[error("line {line}: '{token}' is not a valid literal")]
    InvalidLiteral { line: usize, token: String },
}
