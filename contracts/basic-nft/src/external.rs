use commons::ContractTokenId;
use concordium_std::*;

/// Parameter for the `approve` entrypoint.
#[derive(Debug, Clone, SchemaType, Serialize)]
pub struct ApproveParams {
    /// Token to grant or clear the approval for.
    pub token_id: ContractTokenId,
    /// Address allowed to transfer the token, or `None` to clear the grant.
    pub approved: Option<Address>,
}
