use thiserror::Error;

#[derive(Error, PartialEq, Eq, Clone, Copy, Debug)]
pub enum DirError {
    #[error("invalid dir: too many identifiers")]
    TooManyIdentifiers,

    #[error("invalid dir: identifier {0} is 0")]
    ZeroIdentifier(usize),

    #[error("invalid dir: truncated binary identifier")]
    TruncatedIdentifier,

    #[error("invalid dir: excess data after the last identifier")]
    ExcessData,

    #[error("invalid dir: URI must start with \"dis:\" and end with \"/\"")]
    MissingDelimiters,

    #[error("invalid dir: invalid characters in URI")]
    InvalidCharacters,

    #[error("invalid dir: identifier overflow")]
    IdentifierOverflow,

    #[error("invalid dir: unexpected '/' in URI")]
    TrailingSlash,
}
