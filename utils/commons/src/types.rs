use super::*;

pub type ContractResult<A> = Result<A, CustomContractError>;

/// Contract token ID type.
/// Token contracts may use identifiers of any width, so the generic
/// byte vector representation is used throughout.
pub type ContractTokenId = TokenIdVec;
