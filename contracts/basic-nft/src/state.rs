use commons::{ContractTokenId, CustomContractError};
use concordium_cis1::TokenIdVec;
use concordium_std::*;

/// Ownership and approval data of a single token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, SchemaType)]
pub struct TokenData {
    /// Current owner.
    pub owner: AccountAddress,
    /// Address allowed to transfer this token besides the owner.
    /// Cleared on every transfer.
    pub approved: Option<Address>,
}

/// The contract state.
#[derive(Serial, DeserialWithState)]
#[concordium(state_parameter = "S")]
pub struct State<S: HasStateApi> {
    /// Token data by token ID.
    pub tokens: StateMap<ContractTokenId, TokenData, S>,
    /// Number of tokens minted so far. Doubles as the next sequential
    /// token ID.
    pub token_counter: u64,
}

impl<S: HasStateApi> State<S> {
    /// Creates a new state with no tokens.
    pub fn new(state_builder: &mut StateBuilder<S>) -> Self {
        State {
            tokens: state_builder.new_map(),
            token_counter: 0,
        }
    }

    /// Mint the next sequential token to `owner` and return its ID.
    pub fn mint(&mut self, owner: AccountAddress) -> ContractTokenId {
        let token_id = sequential_token_id(self.token_counter);
        self.tokens.insert(
            token_id.clone(),
            TokenData {
                owner,
                approved: None,
            },
        );
        self.token_counter += 1;
        token_id
    }

    /// Look up a token and fail with `UnknownToken` if it was never minted.
    pub fn token(&self, token_id: &ContractTokenId) -> Result<TokenData, CustomContractError> {
        self.tokens
            .get(token_id)
            .map(|data| data.clone())
            .ok_or(CustomContractError::UnknownToken)
    }

    /// Grant or clear the transfer approval of a token.
    pub fn approve(
        &mut self,
        token_id: &ContractTokenId,
        approved: Option<Address>,
    ) -> Result<(), CustomContractError> {
        let mut entry = self
            .tokens
            .get_mut(token_id)
            .ok_or(CustomContractError::UnknownToken)?;
        entry.get_mut().approved = approved;
        Ok(())
    }

    /// Move token ownership to `to`, clearing any approval grant.
    pub fn transfer(
        &mut self,
        token_id: &ContractTokenId,
        to: AccountAddress,
    ) -> Result<(), CustomContractError> {
        let mut entry = self
            .tokens
            .get_mut(token_id)
            .ok_or(CustomContractError::UnknownToken)?;
        let data = entry.get_mut();
        data.owner = to;
        data.approved = None;
        Ok(())
    }
}

/// Token IDs are the little endian bytes of the mint counter.
pub fn sequential_token_id(counter: u64) -> ContractTokenId {
    TokenIdVec(counter.to_le_bytes().to_vec())
}
