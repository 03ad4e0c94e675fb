use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("catalog mismatch: {names} names paired with {values} values")]
    CatalogMismatch { names: usize, values: usize },

    #[error("board must hold exactly {expected} properties, found {found}")]
    BoardSize { expected: usize, found: usize },

    #[error("bankruptcy filter shrank the roster but no bankrupt player was found")]
    InconsistentElimination,

    #[error("match roster is empty")]
    EmptyRoster,
}

pub type Result<T> = std::result::Result<T, SimError>;
