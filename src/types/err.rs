//! Error types used in the library.
//!
//! - Some of these are internally expected --- e.g. BCP errors are used to control the flow of a solve.
//! - Some are external --- e.g. a solver returns [SampleError::AttemptsExhausted] when no biased query was satisfiable within the configured limit.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::{config::ConfigIssue, db::ClauseKey};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Analysis(AnalysisError),
    Build(BuildError),
    ClauseDB(ClauseDBError),
    Config(ConfigIssue),
    BCP(BCPError),
    Parse(ParseError),
    Rules(RulesError),
    Sample(SampleError),
}

/// Noted errors during conflict analysis.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AnalysisError {
    /// Some literal on the trail was neither a decision nor had a reason.
    MissingReason,

    /// Resolution failed to terminate with an asserting clause.
    NoAssertion,
}

impl From<AnalysisError> for ErrorKind {
    fn from(e: AnalysisError) -> Self {
        ErrorKind::Analysis(e)
    }
}

/// Noted errors during boolean constraint propagation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BCPError {
    /// A conflict was found.
    /// This is expected from time to time, and a learning opportunity.
    Conflict(ClauseKey),

    /// Some corruption in the watched literals of a clause.
    /// This is unexpected.
    CorruptWatch,
}

impl From<BCPError> for ErrorKind {
    fn from(e: BCPError) -> Self {
        ErrorKind::BCP(e)
    }
}

/// Noted errors when building a context.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildError {
    /// An clear instance of an unsatisfiable clause.
    Unsatisfiable,

    /// All possible atoms have been used.
    AtomsExhausted,

    /// A clause contained an atom unknown to the context.
    UnknownAtom,
}

impl From<BuildError> for ErrorKind {
    fn from(e: BuildError) -> Self {
        ErrorKind::Build(e)
    }
}

/// Errors in the clause database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClauseDBError {
    /// A clause is missing.
    Missing,

    /// Some attempt was made to store an empty clause.
    EmptyClause,

    /// A clause was added after some decision has been made.
    DecisionMade,
}

impl From<ClauseDBError> for ErrorKind {
    fn from(e: ClauseDBError) -> Self {
        ErrorKind::ClauseDB(e)
    }
}

impl From<ConfigIssue> for ErrorKind {
    fn from(e: ConfigIssue) -> Self {
        ErrorKind::Config(e)
    }
}

/// Errors during parsing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// A negation character was read, but no candidate for negation was found.
    Negation,

    /// An empty string, where some non-empty string was required.
    Empty,
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Errors when reading rules.
///
/// A missing rules file is not an error, and results in an empty store.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RulesError {
    /// Some issue reading a line, noted with the line number and the kind of the io error.
    Line(usize, std::io::ErrorKind),

    /// The rules file exists, but could not be opened.
    Open(std::io::ErrorKind),
}

impl From<RulesError> for ErrorKind {
    fn from(e: RulesError) -> Self {
        ErrorKind::Rules(e)
    }
}

/// Errors when sampling a configuration.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SampleError {
    /// No biased query was satisfiable within the given number of attempts, though the unbiased formula is satisfiable.
    AttemptsExhausted(usize),

    /// The applicable rules cannot all be avoided at once.
    Unsatisfiable,

    /// The oracle could not determine whether the formula was satisfiable.
    Unknown,
}

impl From<SampleError> for ErrorKind {
    fn from(e: SampleError) -> Self {
        ErrorKind::Sample(e)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Analysis(e) => write!(f, "Conflict analysis failed: {e:?}"),
            Self::Build(e) => write!(f, "Failed to build a context: {e:?}"),
            Self::ClauseDB(e) => write!(f, "Clause database error: {e:?}"),
            Self::Config(e) => write!(f, "Invalid configuration: {e}"),
            Self::BCP(e) => write!(f, "Propagation failed: {e:?}"),
            Self::Parse(e) => write!(f, "Parse error: {e:?}"),
            Self::Rules(RulesError::Line(line, kind)) => {
                write!(f, "Failed to read rules at line {line}: {kind}")
            }
            Self::Rules(RulesError::Open(kind)) => write!(f, "Failed to open rules: {kind}"),
            Self::Sample(SampleError::AttemptsExhausted(limit)) => {
                write!(f, "No satisfying configuration found within {limit} attempts")
            }
            Self::Sample(SampleError::Unsatisfiable) => {
                write!(f, "The applicable rules cannot all be avoided")
            }
            Self::Sample(SampleError::Unknown) => {
                write!(f, "The oracle could not decide a query")
            }
        }
    }
}

impl std::error::Error for ErrorKind {}
