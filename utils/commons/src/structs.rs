use super::*;

/// A token in some token contract. Uniquely identifies a listable asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, SchemaType)]
pub struct Token {
    /// Address of the contract that owns the token identity.
    pub contract: ContractAddress,
    /// Token identifier within that contract.
    pub id: ContractTokenId,
}

/// Parameter for the token registry `transferFrom` entrypoint.
///
/// Shared between the registry itself and contracts that are approved to
/// move tokens on an owner's behalf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, SchemaType)]
pub struct TransferFromParams {
    /// Token to transfer.
    pub token_id: ContractTokenId,
    /// Current owner of the token.
    pub from: AccountAddress,
    /// Address that receives token ownership.
    pub to: AccountAddress,
}
