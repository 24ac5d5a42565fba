use commons::{ContractTokenId, ITEM_BOUGHT_TAG, ITEM_CANCELED_TAG, ITEM_LISTED_TAG};
use concordium_std::*;

/// Item listed event data. Also emitted when the price of an active listing
/// is updated; listing and repricing share one event kind.
#[derive(Debug, Serial)]
pub struct ItemListedEvent<'a> {
    /// Address of the seller.
    pub seller: &'a AccountAddress,
    /// Token contract address.
    pub contract: &'a ContractAddress,
    /// Token identifier.
    pub id: &'a ContractTokenId,
    /// Listed price.
    pub price: Amount,
}

/// Item canceled event data.
#[derive(Debug, Serial)]
pub struct ItemCanceledEvent<'a> {
    /// Address of the seller.
    pub seller: &'a AccountAddress,
    /// Token contract address.
    pub contract: &'a ContractAddress,
    /// Token identifier.
    pub id: &'a ContractTokenId,
}

/// Item bought event data.
#[derive(Debug, Serial)]
pub struct ItemBoughtEvent<'a> {
    /// New token owner.
    pub buyer: &'a AccountAddress,
    /// Token contract address.
    pub contract: &'a ContractAddress,
    /// Token identifier.
    pub id: &'a ContractTokenId,
    /// The listed price the sale settled at, regardless of overpayment.
    pub price: Amount,
}

/// Tagged Custom event to be serialized for the event log.
#[derive(Debug)]
pub enum MarketEvent<'a> {
    /// Token listed or relisted at a price.
    Listed(ItemListedEvent<'a>),
    /// Listing canceled by the seller.
    Canceled(ItemCanceledEvent<'a>),
    /// Token bought at the listed price.
    Bought(ItemBoughtEvent<'a>),
}

impl<'a> MarketEvent<'a> {
    pub fn listed(
        seller: &'a AccountAddress,
        contract: &'a ContractAddress,
        id: &'a ContractTokenId,
        price: Amount,
    ) -> Self {
        Self::Listed(ItemListedEvent {
            seller,
            contract,
            id,
            price,
        })
    }

    pub fn canceled(
        seller: &'a AccountAddress,
        contract: &'a ContractAddress,
        id: &'a ContractTokenId,
    ) -> Self {
        Self::Canceled(ItemCanceledEvent {
            seller,
            contract,
            id,
        })
    }

    pub fn bought(
        buyer: &'a AccountAddress,
        contract: &'a ContractAddress,
        id: &'a ContractTokenId,
        price: Amount,
    ) -> Self {
        Self::Bought(ItemBoughtEvent {
            buyer,
            contract,
            id,
            price,
        })
    }
}

impl<'a> Serial for MarketEvent<'a> {
    fn serial<W: Write>(&self, out: &mut W) -> Result<(), W::Err> {
        match self {
            MarketEvent::Listed(event) => {
                out.write_u8(ITEM_LISTED_TAG)?;
                event.serial(out)
            }
            MarketEvent::Canceled(event) => {
                out.write_u8(ITEM_CANCELED_TAG)?;
                event.serial(out)
            }
            MarketEvent::Bought(event) => {
                out.write_u8(ITEM_BOUGHT_TAG)?;
                event.serial(out)
            }
        }
    }
}
