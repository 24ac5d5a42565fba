use commons::{ContractResult, ContractTokenId, CustomContractError, TransferFromParams};
use concordium_cis1::{Cis1Event, MintEvent, TransferEvent};
use concordium_std::*;

use crate::events::*;
use crate::external::*;
use crate::state::State;

/// Initialize the contract with no tokens.
#[init(contract = "BasicNft")]
fn init<S: HasStateApi>(
    _ctx: &impl HasInitContext,
    state_builder: &mut StateBuilder<S>,
) -> InitResult<State<S>> {
    Ok(State::new(state_builder))
}

fn account_sender(ctx: &impl HasReceiveContext) -> Result<AccountAddress, CustomContractError> {
    match ctx.sender() {
        Address::Account(account) => Ok(account),
        Address::Contract(_) => Err(CustomContractError::OnlyAccountAddress),
    }
}

/// Mint the next sequential token to the sender and return its ID.
/// Logs a `Mint` event.
///
/// It rejects if:
/// - The sender is a contract address.
/// - It fails to log the event.
#[receive(
    mutable,
    contract = "BasicNft",
    name = "mint",
    return_value = "ContractTokenId",
    enable_logger
)]
fn mint<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<ContractTokenId> {
    let owner = account_sender(ctx)?;

    let token_id = host.state_mut().mint(owner);

    logger.log(&Cis1Event::Mint(MintEvent {
        token_id: token_id.clone(),
        amount: 1,
        owner: Address::Account(owner),
    }))?;

    Ok(token_id)
}

/// View the number of tokens minted so far.
#[receive(contract = "BasicNft", name = "tokenCounter", return_value = "u64")]
fn token_counter<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<u64> {
    Ok(host.state().token_counter)
}

/// View the current owner of a token.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - The token was never minted.
#[receive(
    contract = "BasicNft",
    name = "ownerOf",
    parameter = "ContractTokenId",
    return_value = "AccountAddress"
)]
fn owner_of<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<AccountAddress> {
    let token_id = ContractTokenId::deserial(&mut ctx.parameter_cursor())?;
    Ok(host.state().token(&token_id)?.owner)
}

/// View the active approval grant of a token, if any.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - The token was never minted.
#[receive(
    contract = "BasicNft",
    name = "getApproved",
    parameter = "ContractTokenId",
    return_value = "Option<Address>"
)]
fn get_approved<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Option<Address>> {
    let token_id = ContractTokenId::deserial(&mut ctx.parameter_cursor())?;
    Ok(host.state().token(&token_id)?.approved)
}

/// Grant or clear the transfer approval of a token. Only the current owner
/// may call this. Logs an `Approve` event.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - The sender is a contract address.
/// - The token was never minted.
/// - The sender is not the current owner of the token.
/// - It fails to log the event.
#[receive(
    mutable,
    contract = "BasicNft",
    name = "approve",
    parameter = "ApproveParams",
    enable_logger
)]
fn approve<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let params = ApproveParams::deserial(&mut ctx.parameter_cursor())?;
    let sender = account_sender(ctx)?;

    let data = host.state().token(&params.token_id)?;
    ensure_eq!(data.owner, sender, CustomContractError::Unauthorized);

    host.state_mut()
        .approve(&params.token_id, params.approved)?;

    logger.log(&NftEvent::approve(
        &params.token_id,
        &sender,
        params.approved.as_ref(),
    ))?;

    Ok(())
}

/// Transfer a token from its current owner to another account. The sender
/// must be the owner or the approved address; the approval grant is cleared
/// by the transfer. Logs a `Transfer` event.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - The token was never minted.
/// - `from` is not the current owner.
/// - The sender is neither the owner nor the approved address.
/// - It fails to log the event.
#[receive(
    mutable,
    contract = "BasicNft",
    name = "transferFrom",
    parameter = "TransferFromParams",
    enable_logger
)]
fn transfer_from<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let params = TransferFromParams::deserial(&mut ctx.parameter_cursor())?;

    let data = host.state().token(&params.token_id)?;
    ensure_eq!(data.owner, params.from, CustomContractError::Unauthorized);

    let sender = ctx.sender();
    ensure!(
        sender == Address::Account(data.owner) || Some(sender) == data.approved,
        CustomContractError::Unauthorized
    );

    host.state_mut().transfer(&params.token_id, params.to)?;

    logger.log(&Cis1Event::Transfer(TransferEvent {
        token_id: params.token_id,
        amount: 1,
        from: Address::Account(params.from),
        to: Address::Account(params.to),
    }))?;

    Ok(())
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use crate::state::sequential_token_id;
    use test_infrastructure::*;

    const OWNER: AccountAddress = AccountAddress([1; 32]);
    const OTHER: AccountAddress = AccountAddress([2; 32]);

    const MARKETPLACE: ContractAddress = ContractAddress {
        index: 5,
        subindex: 0,
    };

    fn token_0() -> ContractTokenId {
        sequential_token_id(0)
    }

    fn default_host() -> TestHost<State<TestStateApi>> {
        let ctx = TestInitContext::empty();
        let mut state_builder = TestStateBuilder::new();
        let state = init(&ctx, &mut state_builder).expect_report("Failed during init_BasicNft");
        TestHost::new(state, state_builder)
    }

    /// Mint one token to `OWNER` so receive functions have something to
    /// operate on.
    fn host_with_token_0() -> TestHost<State<TestStateApi>> {
        let mut host = default_host();

        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(OWNER));
        let mut logger = TestLogger::init();

        let token_id = mint(&ctx, &mut host, &mut logger).expect_report("Failed to mint token_0");
        claim_eq!(token_id, token_0());

        host
    }

    #[concordium_test]
    fn test_init() {
        let host = default_host();

        claim_eq!(host.state().token_counter, 0);
    }

    #[concordium_test]
    fn test_mint() {
        let mut host = default_host();

        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(OWNER));
        let mut logger = TestLogger::init();

        let token_id = mint(&ctx, &mut host, &mut logger).expect_report("Results in rejection");

        claim_eq!(token_id, token_0());
        claim_eq!(host.state().token_counter, 1);

        let data = host
            .state()
            .token(&token_0())
            .expect_report("Token is expected to exist");
        claim_eq!(data.owner, OWNER);
        claim_eq!(data.approved, None);

        claim!(
            logger.logs.contains(&to_bytes(&Cis1Event::Mint(MintEvent {
                token_id: token_0(),
                amount: 1,
                owner: Address::Account(OWNER),
            }))),
            "Expected an event for minting token_0"
        );
    }

    #[concordium_test]
    fn test_mint_sequential_ids() {
        let mut host = default_host();

        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(OWNER));
        let mut logger = TestLogger::init();

        let first = mint(&ctx, &mut host, &mut logger).expect_report("Failed to mint");
        let second = mint(&ctx, &mut host, &mut logger).expect_report("Failed to mint");

        claim_eq!(first, sequential_token_id(0));
        claim_eq!(second, sequential_token_id(1));
        claim_eq!(host.state().token_counter, 2);

        let ctx = TestReceiveContext::empty();
        let counter = token_counter(&ctx, &host).expect_report("Counter view failed");
        claim_eq!(counter, 2);
    }

    #[concordium_test]
    fn test_mint_contract_sender() {
        let mut host = default_host();

        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Contract(MARKETPLACE));
        let mut logger = TestLogger::init();

        let result = mint(&ctx, &mut host, &mut logger);

        claim_eq!(result, Err(CustomContractError::OnlyAccountAddress));
    }

    #[concordium_test]
    fn test_owner_of() {
        let host = host_with_token_0();

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&token_0());
        ctx.set_parameter(&bytes);

        let owner = owner_of(&ctx, &host).expect_report("Unexpected error during 'ownerOf' call");

        claim_eq!(owner, OWNER);
    }

    #[concordium_test]
    fn test_owner_of_unknown_token() {
        let host = default_host();

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&token_0());
        ctx.set_parameter(&bytes);

        let result = owner_of(&ctx, &host);

        claim_eq!(result, Err(CustomContractError::UnknownToken));
    }

    #[concordium_test]
    fn test_get_approved_default() {
        let host = host_with_token_0();

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&token_0());
        ctx.set_parameter(&bytes);

        let approved = get_approved(&ctx, &host).expect_report("Approval view failed");

        claim_eq!(approved, None);
    }

    #[concordium_test]
    fn test_approve() {
        let mut host = host_with_token_0();

        let mut ctx = TestReceiveContext::empty();
        let params = ApproveParams {
            token_id: token_0(),
            approved: Some(Address::Contract(MARKETPLACE)),
        };
        let bytes = to_bytes(&params);
        ctx.set_sender(Address::Account(OWNER)).set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = approve(&ctx, &mut host, &mut logger);

        claim_eq!(result, Ok(()));

        let data = host
            .state()
            .token(&token_0())
            .expect_report("Token is expected to exist");
        claim_eq!(data.approved, Some(Address::Contract(MARKETPLACE)));

        claim!(
            logger.logs.contains(&to_bytes(&NftEvent::approve(
                &token_0(),
                &OWNER,
                Some(&Address::Contract(MARKETPLACE)),
            ))),
            "Expected an event for the approval grant"
        );
    }

    #[concordium_test]
    fn test_approve_not_owner() {
        let mut host = host_with_token_0();

        let mut ctx = TestReceiveContext::empty();
        let params = ApproveParams {
            token_id: token_0(),
            approved: Some(Address::Account(OTHER)),
        };
        let bytes = to_bytes(&params);
        ctx.set_sender(Address::Account(OTHER)).set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = approve(&ctx, &mut host, &mut logger);

        claim_eq!(result, Err(CustomContractError::Unauthorized));
    }

    #[concordium_test]
    fn test_transfer_from_by_owner() {
        let mut host = host_with_token_0();

        let mut ctx = TestReceiveContext::empty();
        let params = TransferFromParams {
            token_id: token_0(),
            from: OWNER,
            to: OTHER,
        };
        let bytes = to_bytes(&params);
        ctx.set_sender(Address::Account(OWNER)).set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = transfer_from(&ctx, &mut host, &mut logger);

        claim_eq!(result, Ok(()));

        let data = host
            .state()
            .token(&token_0())
            .expect_report("Token is expected to exist");
        claim_eq!(data.owner, OTHER);

        claim!(
            logger
                .logs
                .contains(&to_bytes(&Cis1Event::Transfer(TransferEvent {
                    token_id: token_0(),
                    amount: 1,
                    from: Address::Account(OWNER),
                    to: Address::Account(OTHER),
                }))),
            "Expected an event for the transfer"
        );
    }

    #[concordium_test]
    fn test_transfer_from_by_approved_contract() {
        let mut host = host_with_token_0();

        host.state_mut()
            .approve(&token_0(), Some(Address::Contract(MARKETPLACE)))
            .expect_report("Failed to set approval");

        let mut ctx = TestReceiveContext::empty();
        let params = TransferFromParams {
            token_id: token_0(),
            from: OWNER,
            to: OTHER,
        };
        let bytes = to_bytes(&params);
        ctx.set_sender(Address::Contract(MARKETPLACE))
            .set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = transfer_from(&ctx, &mut host, &mut logger);

        claim_eq!(result, Ok(()));

        // The grant does not survive the transfer.
        let data = host
            .state()
            .token(&token_0())
            .expect_report("Token is expected to exist");
        claim_eq!(data.owner, OTHER);
        claim_eq!(data.approved, None);
    }

    #[concordium_test]
    fn test_transfer_from_unauthorized() {
        let mut host = host_with_token_0();

        let mut ctx = TestReceiveContext::empty();
        let params = TransferFromParams {
            token_id: token_0(),
            from: OWNER,
            to: OTHER,
        };
        let bytes = to_bytes(&params);
        ctx.set_sender(Address::Account(OTHER)).set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = transfer_from(&ctx, &mut host, &mut logger);

        claim_eq!(result, Err(CustomContractError::Unauthorized));
    }

    #[concordium_test]
    fn test_transfer_from_wrong_owner() {
        let mut host = host_with_token_0();

        let mut ctx = TestReceiveContext::empty();
        let params = TransferFromParams {
            token_id: token_0(),
            from: OTHER,
            to: OTHER,
        };
        let bytes = to_bytes(&params);
        ctx.set_sender(Address::Account(OTHER)).set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = transfer_from(&ctx, &mut host, &mut logger);

        claim_eq!(result, Err(CustomContractError::Unauthorized));
    }
}
