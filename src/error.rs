use thiserror::Error;

/// Validation failures for typed input and action selection, surfaced
/// through the dialog bar rather than panicking.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Size entered too small!")]
    SizeTooSmall,

    #[error("Size entered too big!")]
    SizeTooBig,

    #[error("Bond order must be 2 or 3")]
    InvalidBondOrder,

    #[error("Couldn't read \"{0}\" as a number or Y/N")]
    UnparseableEntry(String),

    #[error("Draw a main chain first")]
    NoMainChain,

    #[error("Multiple bonds need an open (non-cyclo) main chain")]
    CycloMainChain,

    #[error("Nothing is waiting for typed input")]
    UnexpectedEntry,
}
