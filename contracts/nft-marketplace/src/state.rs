use commons::{CustomContractError, Token};
use concordium_std::*;

/// An active fixed price sale offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, SchemaType)]
pub struct Listing {
    /// Account entitled to the proceeds and allowed to manage the listing.
    pub seller: AccountAddress,
    /// Sale price. Strictly above zero while the listing is active.
    pub price: Amount,
}

/// The contract state.
#[derive(Serial, DeserialWithState)]
#[concordium(state_parameter = "S")]
pub struct State<S: HasStateApi> {
    /// Active listings by token.
    pub listings: StateMap<Token, Listing, S>,
    /// Withdrawable sale proceeds by seller.
    pub proceeds: StateMap<AccountAddress, Amount, S>,
}

impl<S: HasStateApi> State<S> {
    /// Creates a new state with no listings and no proceeds.
    pub fn new(state_builder: &mut StateBuilder<S>) -> Self {
        State {
            listings: state_builder.new_map(),
            proceeds: state_builder.new_map(),
        }
    }

    /// Current listing of a token, if any.
    pub fn listing(&self, token: &Token) -> Option<Listing> {
        self.listings.get(token).map(|listing| listing.clone())
    }

    /// Insert a new listing. The caller must have ruled out an active
    /// listing for this token beforehand.
    pub fn list(&mut self, token: Token, seller: AccountAddress, price: Amount) {
        self.listings.insert(token, Listing { seller, price });
    }

    /// Remove a listing and fail with `NotListed` if the token has none.
    /// Returns the removed listing.
    pub fn unlist(&mut self, token: &Token) -> Result<Listing, CustomContractError> {
        self.listings
            .remove_and_get(token)
            .ok_or(CustomContractError::NotListed)
    }

    /// Overwrite the price of an active listing, leaving the seller as is.
    pub fn update_price(
        &mut self,
        token: &Token,
        price: Amount,
    ) -> Result<(), CustomContractError> {
        let mut entry = self
            .listings
            .get_mut(token)
            .ok_or(CustomContractError::NotListed)?;
        entry.get_mut().price = price;
        Ok(())
    }

    /// Credit sale proceeds to a seller balance.
    pub fn credit(&mut self, seller: AccountAddress, amount: Amount) {
        let total = self.proceeds_of(&seller) + amount;
        self.proceeds.insert(seller, total);
    }

    /// Take the full withdrawable balance of an account, failing with
    /// `NoProceeds` if there is nothing to withdraw.
    pub fn drain_proceeds(
        &mut self,
        account: &AccountAddress,
    ) -> Result<Amount, CustomContractError> {
        match self.proceeds.remove_and_get(account) {
            Some(amount) if amount > Amount::zero() => Ok(amount),
            _ => Err(CustomContractError::NoProceeds),
        }
    }

    /// Withdrawable balance of an account. Zero for accounts that never
    /// sold anything.
    pub fn proceeds_of(&self, account: &AccountAddress) -> Amount {
        self.proceeds
            .get(account)
            .map(|amount| *amount)
            .unwrap_or_else(Amount::zero)
    }
}
