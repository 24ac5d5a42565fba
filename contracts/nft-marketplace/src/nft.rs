//! Client for the token registry contract.
//!
//! The registry keeps ownership and approval records and exposes the
//! `ownerOf`, `getApproved` and `transferFrom` entrypoints. Any contract
//! with that interface can have its tokens listed here.

use commons::{ContractTokenId, CustomContractError, Token, TransferFromParams};
use concordium_std::*;

/// Query the current owner of a token.
pub fn owner_of<T>(
    host: &impl HasHost<T>,
    contract: &ContractAddress,
    token_id: &ContractTokenId,
) -> Result<AccountAddress, CustomContractError> {
    let mut response = host
        .invoke_contract_read_only(
            contract,
            token_id,
            EntrypointName::new_unchecked("ownerOf"),
            Amount::zero(),
        )
        .map_err(handle_call_error)?
        .ok_or(CustomContractError::Incompatible)?;

    AccountAddress::deserial(&mut response).map_err(|_| CustomContractError::Incompatible)
}

/// Query the address approved to transfer a token, if any.
pub fn get_approved<T>(
    host: &impl HasHost<T>,
    contract: &ContractAddress,
    token_id: &ContractTokenId,
) -> Result<Option<Address>, CustomContractError> {
    let mut response = host
        .invoke_contract_read_only(
            contract,
            token_id,
            EntrypointName::new_unchecked("getApproved"),
            Amount::zero(),
        )
        .map_err(handle_call_error)?
        .ok_or(CustomContractError::Incompatible)?;

    <Option<Address>>::deserial(&mut response).map_err(|_| CustomContractError::Incompatible)
}

/// Move a token between accounts using a previously granted approval.
pub fn transfer_from<T>(
    host: &mut impl HasHost<T>,
    token: &Token,
    from: AccountAddress,
    to: AccountAddress,
) -> Result<(), CustomContractError> {
    host.invoke_contract(
        &token.contract,
        &TransferFromParams {
            token_id: token.id.clone(),
            from,
            to,
        },
        EntrypointName::new_unchecked("transferFrom"),
        Amount::zero(),
    )
    .map_err(handle_call_error)?;

    Ok(())
}

fn handle_call_error<R>(error: CallContractError<R>) -> CustomContractError {
    match error {
        CallContractError::MissingEntrypoint | CallContractError::MessageFailed => {
            CustomContractError::Incompatible
        }
        _ => CustomContractError::InvokeContractError,
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use commons::test::{parse_and_check_mock, parse_and_ok_mock, reject_mock};
    use concordium_cis1::TokenIdVec;
    use concordium_std::test_infrastructure::*;

    const NFT_CONTRACT: ContractAddress = ContractAddress {
        index: 1,
        subindex: 0,
    };

    const USER_1: AccountAddress = AccountAddress([1; 32]);
    const USER_2: AccountAddress = AccountAddress([2; 32]);

    fn token_id() -> ContractTokenId {
        TokenIdVec(vec![7])
    }

    #[concordium_test]
    fn test_owner_of() {
        let mut host = TestHost::new((), TestStateBuilder::default());

        host.setup_mock_entrypoint(
            NFT_CONTRACT,
            OwnedEntrypointName::new_unchecked("ownerOf".into()),
            parse_and_ok_mock::<ContractTokenId, _>(USER_1),
        );

        let response = owner_of(&host, &NFT_CONTRACT, &token_id());

        claim_eq!(response, Ok(USER_1));
    }

    #[concordium_test]
    fn test_get_approved() {
        let mut host = TestHost::new((), TestStateBuilder::default());

        host.setup_mock_entrypoint(
            NFT_CONTRACT,
            OwnedEntrypointName::new_unchecked("getApproved".into()),
            parse_and_ok_mock::<ContractTokenId, _>(Some(Address::Account(USER_2))),
        );

        let response = get_approved(&host, &NFT_CONTRACT, &token_id());

        claim_eq!(response, Ok(Some(Address::Account(USER_2))));
    }

    #[concordium_test]
    fn test_transfer_from() {
        let mut host = TestHost::new((), TestStateBuilder::default());

        host.setup_mock_entrypoint(
            NFT_CONTRACT,
            OwnedEntrypointName::new_unchecked("transferFrom".into()),
            parse_and_check_mock::<TransferFromParams, _>(
                |params| params.from == USER_1 && params.to == USER_2,
                (),
            ),
        );

        let response = transfer_from(
            &mut host,
            &Token {
                contract: NFT_CONTRACT,
                id: token_id(),
            },
            USER_1,
            USER_2,
        );

        claim_eq!(response, Ok(()));
    }

    #[concordium_test]
    fn test_transfer_from_rejected() {
        let mut host = TestHost::new((), TestStateBuilder::default());

        host.setup_mock_entrypoint(
            NFT_CONTRACT,
            OwnedEntrypointName::new_unchecked("transferFrom".into()),
            reject_mock(-1),
        );

        let response = transfer_from(
            &mut host,
            &Token {
                contract: NFT_CONTRACT,
                id: token_id(),
            },
            USER_1,
            USER_2,
        );

        claim_eq!(response, Err(CustomContractError::InvokeContractError));
    }
}
