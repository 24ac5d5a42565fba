use commons::Token;
use concordium_std::*;

/// Parameter for the `listItem` entrypoint.
#[derive(Debug, Clone, SchemaType, Serialize)]
pub struct ListParams {
    /// Token to list for sale.
    pub token: Token,
    /// Sale price in the smallest currency unit.
    pub price: Amount,
}

/// Parameter for the `updateListing` entrypoint.
#[derive(Debug, Clone, SchemaType, Serialize)]
pub struct UpdateParams {
    /// Listed token to reprice.
    pub token: Token,
    /// New sale price in the smallest currency unit.
    pub new_price: Amount,
}

/// Return value of the `getListing` entrypoint.
///
/// A zero price with no seller is the canonical "not listed" response.
#[derive(Debug, Clone, PartialEq, Eq, SchemaType, Serialize)]
pub struct ListingView {
    /// Listed price, or zero if the token is not listed.
    pub price: Amount,
    /// Listing seller, or `None` if the token is not listed.
    pub seller: Option<AccountAddress>,
}
