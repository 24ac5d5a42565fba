use commons::{ContractTokenId, APPROVE_TAG};
use concordium_std::*;

/// Approval grant event data.
#[derive(Debug, Serial)]
pub struct ApproveEvent<'a> {
    /// Token identifier.
    pub id: &'a ContractTokenId,
    /// Token owner granting or clearing the approval.
    pub owner: &'a AccountAddress,
    /// Approved address, if any.
    pub approved: Option<&'a Address>,
}

/// Tagged Custom event to be serialized for the event log.
///
/// Mint and transfer reuse the standard `Cis1Event` shapes and are logged
/// directly; only the approval event is contract specific.
#[derive(Debug)]
pub enum NftEvent<'a> {
    /// Approval granted or cleared.
    Approve(ApproveEvent<'a>),
}

impl<'a> NftEvent<'a> {
    pub fn approve(
        id: &'a ContractTokenId,
        owner: &'a AccountAddress,
        approved: Option<&'a Address>,
    ) -> Self {
        Self::Approve(ApproveEvent {
            id,
            owner,
            approved,
        })
    }
}

impl<'a> Serial for NftEvent<'a> {
    fn serial<W: Write>(&self, out: &mut W) -> Result<(), W::Err> {
        match self {
            NftEvent::Approve(event) => {
                out.write_u8(APPROVE_TAG)?;
                event.serial(out)
            }
        }
    }
}
