use commons::{ContractResult, CustomContractError, Token};
use concordium_std::*;

use crate::events::MarketEvent;
use crate::external::*;
use crate::nft;
use crate::state::State;

/// Initialize the marketplace with no listings and no proceeds.
#[init(contract = "NftMarketplace")]
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

/// List a token for sale at a fixed price. The token stays with the seller;
/// the marketplace must hold a transfer approval on the registry, exercised
/// only when the token is bought. Logs an `ItemListed` event.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - The sender is a contract address.
/// - The price is zero.
/// - The sender does not own the token on the registry.
/// - This contract is not the approved address for the token.
/// - The token is already listed.
/// - It fails to log the event.
#[receive(
    mutable,
    contract = "NftMarketplace",
    name = "listItem",
    parameter = "ListParams",
    enable_logger
)]
fn list_item<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let params = ListParams::deserial(&mut ctx.parameter_cursor())?;
    let sender = account_sender(ctx)?;

    ensure!(
        params.price > Amount::zero(),
        CustomContractError::PriceMustBeAboveZero
    );

    let owner = nft::owner_of(host, &params.token.contract, &params.token.id)?;
    ensure_eq!(owner, sender, CustomContractError::CallerNotTokenOwner);

    let approved = nft::get_approved(host, &params.token.contract, &params.token.id)?;
    ensure_eq!(
        approved,
        Some(Address::Contract(ctx.self_address())),
        CustomContractError::NotApprovedForMarketplace
    );

    ensure!(
        host.state().listing(&params.token).is_none(),
        CustomContractError::AlreadyListed
    );

    host.state_mut()
        .list(params.token.clone(), sender, params.price);

    logger.log(&MarketEvent::listed(
        &sender,
        &params.token.contract,
        &params.token.id,
        params.price,
    ))?;

    Ok(())
}

/// Take a listed token off the market. Only the current token owner on the
/// registry may cancel. Logs an `ItemCanceled` event.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - The sender is a contract address.
/// - The sender does not own the token on the registry.
/// - The token is not listed.
/// - It fails to log the event.
#[receive(
    mutable,
    contract = "NftMarketplace",
    name = "cancelListing",
    parameter = "Token",
    enable_logger
)]
fn cancel_listing<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let token = Token::deserial(&mut ctx.parameter_cursor())?;
    let sender = account_sender(ctx)?;

    let owner = nft::owner_of(host, &token.contract, &token.id)?;
    ensure_eq!(owner, sender, CustomContractError::CallerNotTokenOwner);

    host.state_mut().unlist(&token)?;

    logger.log(&MarketEvent::canceled(&sender, &token.contract, &token.id))?;

    Ok(())
}

/// Change the price of an active listing. The seller on record is kept;
/// authorization is against current registry ownership, like `cancelListing`.
/// Re-logs `ItemListed` with the new price.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - The sender is a contract address.
/// - The token is not listed.
/// - The new price is zero.
/// - The sender does not own the token on the registry.
/// - It fails to log the event.
#[receive(
    mutable,
    contract = "NftMarketplace",
    name = "updateListing",
    parameter = "UpdateParams",
    enable_logger
)]
fn update_listing<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let params = UpdateParams::deserial(&mut ctx.parameter_cursor())?;
    let sender = account_sender(ctx)?;

    ensure!(
        host.state().listing(&params.token).is_some(),
        CustomContractError::NotListed
    );
    ensure!(
        params.new_price > Amount::zero(),
        CustomContractError::PriceMustBeAboveZero
    );

    let owner = nft::owner_of(host, &params.token.contract, &params.token.id)?;
    ensure_eq!(owner, sender, CustomContractError::CallerNotTokenOwner);

    host.state_mut()
        .update_price(&params.token, params.new_price)?;

    logger.log(&MarketEvent::listed(
        &sender,
        &params.token.contract,
        &params.token.id,
        params.new_price,
    ))?;

    Ok(())
}

/// Buy a listed token with the attached amount. The listing is removed and
/// the listed price is credited to the seller's withdrawable proceeds before
/// the registry moves the token. Overpayment is accepted and not refunded.
/// Logs an `ItemBought` event with the listed price.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - The sender is a contract address.
/// - The token is not listed.
/// - The attached amount is below the listed price.
/// - The sender is the seller.
/// - It fails to log the event.
/// - The registry rejects the transfer, which rolls back the sale.
#[receive(
    mutable,
    payable,
    contract = "NftMarketplace",
    name = "buyItem",
    parameter = "Token",
    enable_logger
)]
fn buy_item<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    amount: Amount,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let token = Token::deserial(&mut ctx.parameter_cursor())?;
    let sender = account_sender(ctx)?;

    let listing = host
        .state()
        .listing(&token)
        .ok_or(CustomContractError::NotListed)?;

    ensure!(amount >= listing.price, CustomContractError::PriceNotMet);
    ensure!(
        sender != listing.seller,
        CustomContractError::CallerIsSeller
    );

    host.state_mut().unlist(&token)?;
    host.state_mut().credit(listing.seller, listing.price);

    logger.log(&MarketEvent::bought(
        &sender,
        &token.contract,
        &token.id,
        listing.price,
    ))?;

    nft::transfer_from(host, &token, listing.seller, sender)?;

    Ok(())
}

/// Pay out the sender's accumulated sale proceeds. The balance is removed
/// from the map before the transfer is attempted; if the transfer fails the
/// rejection rolls the balance back for a later retry.
///
/// It rejects if:
/// - The sender is a contract address.
/// - The sender has no proceeds.
/// - The transfer to the sender fails.
#[receive(mutable, contract = "NftMarketplace", name = "withdrawProceeds")]
fn withdraw_proceeds<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<()> {
    let sender = account_sender(ctx)?;

    let amount = host.state_mut().drain_proceeds(&sender)?;
    host.invoke_transfer(&sender, amount)?;

    Ok(())
}

/// View the listing of a token. A token without an active listing is
/// reported as a zero price with no seller.
#[receive(
    contract = "NftMarketplace",
    name = "getListing",
    parameter = "Token",
    return_value = "ListingView"
)]
fn get_listing<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<ListingView> {
    let token = Token::deserial(&mut ctx.parameter_cursor())?;

    let view = match host.state().listing(&token) {
        Some(listing) => ListingView {
            price: listing.price,
            seller: Some(listing.seller),
        },
        None => ListingView {
            price: Amount::zero(),
            seller: None,
        },
    };

    Ok(view)
}

/// View the withdrawable proceeds of an account. Zero for accounts without
/// sales.
#[receive(
    contract = "NftMarketplace",
    name = "getProceeds",
    parameter = "AccountAddress",
    return_value = "Amount"
)]
fn get_proceeds<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Amount> {
    let account = AccountAddress::deserial(&mut ctx.parameter_cursor())?;
    Ok(host.state().proceeds_of(&account))
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use commons::test::{parse_and_check_mock, parse_and_ok_mock, reject_mock};
    use commons::{ContractTokenId, TransferFromParams};
    use concordium_cis1::TokenIdVec;
    use test_infrastructure::*;

    const SELLER: AccountAddress = AccountAddress([1; 32]);
    const BUYER: AccountAddress = AccountAddress([2; 32]);

    const NFT_CONTRACT: ContractAddress = ContractAddress {
        index: 1,
        subindex: 0,
    };

    const MARKETPLACE: ContractAddress = ContractAddress {
        index: 5,
        subindex: 0,
    };

    const PRICE: Amount = Amount::from_ccd(1);

    fn token_0() -> Token {
        Token {
            contract: NFT_CONTRACT,
            id: TokenIdVec(vec![0]),
        }
    }

    fn token_1() -> Token {
        Token {
            contract: NFT_CONTRACT,
            id: TokenIdVec(vec![1]),
        }
    }

    fn default_host() -> TestHost<State<TestStateApi>> {
        let ctx = TestInitContext::empty();
        let mut state_builder = TestStateBuilder::new();
        let state =
            init(&ctx, &mut state_builder).expect_report("Failed during init_NftMarketplace");
        TestHost::new(state, state_builder)
    }

    fn receive_ctx<'a>(sender: AccountAddress) -> TestReceiveContext<'a> {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(sender));
        ctx.set_self_address(MARKETPLACE);
        ctx
    }

    fn mock_owner(host: &mut TestHost<State<TestStateApi>>, owner: AccountAddress) {
        host.setup_mock_entrypoint(
            NFT_CONTRACT,
            OwnedEntrypointName::new_unchecked("ownerOf".into()),
            parse_and_ok_mock::<ContractTokenId, _>(owner),
        );
    }

    fn mock_approved(host: &mut TestHost<State<TestStateApi>>, approved: Option<Address>) {
        host.setup_mock_entrypoint(
            NFT_CONTRACT,
            OwnedEntrypointName::new_unchecked("getApproved".into()),
            parse_and_ok_mock::<ContractTokenId, _>(approved),
        );
    }

    fn mock_transfer_from(
        host: &mut TestHost<State<TestStateApi>>,
        from: AccountAddress,
        to: AccountAddress,
    ) {
        host.setup_mock_entrypoint(
            NFT_CONTRACT,
            OwnedEntrypointName::new_unchecked("transferFrom".into()),
            parse_and_check_mock::<TransferFromParams, _>(
                move |params| params.from == from && params.to == to,
                (),
            ),
        );
    }

    /// List `token` for `SELLER` at `price` through the entrypoint, with the
    /// registry mocks set up for a valid listing.
    fn list_for_seller(host: &mut TestHost<State<TestStateApi>>, token: Token, price: Amount) {
        mock_owner(host, SELLER);
        mock_approved(host, Some(Address::Contract(MARKETPLACE)));

        let params = ListParams { token, price };
        let bytes = to_bytes(&params);
        let mut ctx = receive_ctx(SELLER);
        ctx.set_parameter(&bytes);
        let mut logger = TestLogger::init();

        list_item(&ctx, host, &mut logger).expect_report("Failed to list the token");
    }

    #[concordium_test]
    fn test_init() {
        let host = default_host();

        claim_eq!(host.state().listing(&token_0()), None);
        claim_eq!(host.state().proceeds_of(&SELLER), Amount::zero());
    }

    #[concordium_test]
    fn test_list_item() {
        let mut host = default_host();
        mock_owner(&mut host, SELLER);
        mock_approved(&mut host, Some(Address::Contract(MARKETPLACE)));

        let params = ListParams {
            token: token_0(),
            price: PRICE,
        };
        let bytes = to_bytes(&params);
        let mut ctx = receive_ctx(SELLER);
        ctx.set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = list_item(&ctx, &mut host, &mut logger);

        claim_eq!(result, Ok(()));

        let listing = host
            .state()
            .listing(&token_0())
            .expect_report("Listing is expected to exist");
        claim_eq!(listing.seller, SELLER);
        claim_eq!(listing.price, PRICE);

        claim!(
            logger.logs.contains(&to_bytes(&MarketEvent::listed(
                &SELLER,
                &NFT_CONTRACT,
                &token_0().id,
                PRICE,
            ))),
            "Expected an event for the new listing"
        );
    }

    #[concordium_test]
    fn test_list_item_zero_price() {
        let mut host = default_host();

        let params = ListParams {
            token: token_0(),
            price: Amount::zero(),
        };
        let bytes = to_bytes(&params);
        let mut ctx = receive_ctx(SELLER);
        ctx.set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = list_item(&ctx, &mut host, &mut logger);

        claim_eq!(result, Err(CustomContractError::PriceMustBeAboveZero));
    }

    #[concordium_test]
    fn test_list_item_not_owner() {
        let mut host = default_host();
        mock_owner(&mut host, SELLER);

        let params = ListParams {
            token: token_0(),
            price: PRICE,
        };
        let bytes = to_bytes(&params);
        let mut ctx = receive_ctx(BUYER);
        ctx.set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = list_item(&ctx, &mut host, &mut logger);

        claim_eq!(result, Err(CustomContractError::CallerNotTokenOwner));
    }

    #[concordium_test]
    fn test_list_item_not_approved() {
        let mut host = default_host();
        mock_owner(&mut host, SELLER);
        mock_approved(&mut host, None);

        let params = ListParams {
            token: token_0(),
            price: PRICE,
        };
        let bytes = to_bytes(&params);
        let mut ctx = receive_ctx(SELLER);
        ctx.set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = list_item(&ctx, &mut host, &mut logger);

        claim_eq!(result, Err(CustomContractError::NotApprovedForMarketplace));
    }

    #[concordium_test]
    fn test_list_item_approved_elsewhere() {
        let mut host = default_host();
        mock_owner(&mut host, SELLER);
        // Approval granted to some other operator, not this marketplace.
        mock_approved(&mut host, Some(Address::Account(BUYER)));

        let params = ListParams {
            token: token_0(),
            price: PRICE,
        };
        let bytes = to_bytes(&params);
        let mut ctx = receive_ctx(SELLER);
        ctx.set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = list_item(&ctx, &mut host, &mut logger);

        claim_eq!(result, Err(CustomContractError::NotApprovedForMarketplace));
    }

    #[concordium_test]
    fn test_list_item_already_listed() {
        let mut host = default_host();
        list_for_seller(&mut host, token_0(), PRICE);

        let params = ListParams {
            token: token_0(),
            price: PRICE,
        };
        let bytes = to_bytes(&params);
        let mut ctx = receive_ctx(SELLER);
        ctx.set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = list_item(&ctx, &mut host, &mut logger);

        claim_eq!(result, Err(CustomContractError::AlreadyListed));
    }

    #[concordium_test]
    fn test_list_item_contract_sender() {
        let mut host = default_host();

        let params = ListParams {
            token: token_0(),
            price: PRICE,
        };
        let bytes = to_bytes(&params);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Contract(NFT_CONTRACT))
            .set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = list_item(&ctx, &mut host, &mut logger);

        claim_eq!(result, Err(CustomContractError::OnlyAccountAddress));
    }

    #[concordium_test]
    fn test_cancel_listing() {
        let mut host = default_host();
        list_for_seller(&mut host, token_0(), PRICE);

        let bytes = to_bytes(&token_0());
        let mut ctx = receive_ctx(SELLER);
        ctx.set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = cancel_listing(&ctx, &mut host, &mut logger);

        claim_eq!(result, Ok(()));
        claim_eq!(host.state().listing(&token_0()), None);

        claim!(
            logger.logs.contains(&to_bytes(&MarketEvent::canceled(
                &SELLER,
                &NFT_CONTRACT,
                &token_0().id,
            ))),
            "Expected an event for the cancellation"
        );
    }

    #[concordium_test]
    fn test_cancel_listing_not_owner() {
        let mut host = default_host();
        list_for_seller(&mut host, token_0(), PRICE);

        let bytes = to_bytes(&token_0());
        let mut ctx = receive_ctx(BUYER);
        ctx.set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = cancel_listing(&ctx, &mut host, &mut logger);

        claim_eq!(result, Err(CustomContractError::CallerNotTokenOwner));

        // The listing survives the failed cancellation.
        claim!(host.state().listing(&token_0()).is_some());
    }

    #[concordium_test]
    fn test_cancel_listing_not_listed() {
        let mut host = default_host();
        mock_owner(&mut host, SELLER);

        let bytes = to_bytes(&token_0());
        let mut ctx = receive_ctx(SELLER);
        ctx.set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = cancel_listing(&ctx, &mut host, &mut logger);

        claim_eq!(result, Err(CustomContractError::NotListed));
    }

    #[concordium_test]
    fn test_update_listing() {
        let mut host = default_host();
        list_for_seller(&mut host, token_0(), PRICE);

        let new_price = PRICE + PRICE;
        let params = UpdateParams {
            token: token_0(),
            new_price,
        };
        let bytes = to_bytes(&params);
        let mut ctx = receive_ctx(SELLER);
        ctx.set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = update_listing(&ctx, &mut host, &mut logger);

        claim_eq!(result, Ok(()));

        let listing = host
            .state()
            .listing(&token_0())
            .expect_report("Listing is expected to exist");
        claim_eq!(listing.price, new_price);
        claim_eq!(listing.seller, SELLER);

        claim!(
            logger.logs.contains(&to_bytes(&MarketEvent::listed(
                &SELLER,
                &NFT_CONTRACT,
                &token_0().id,
                new_price,
            ))),
            "Expected a listing event with the new price"
        );
    }

    #[concordium_test]
    fn test_update_listing_zero_price() {
        let mut host = default_host();
        list_for_seller(&mut host, token_0(), PRICE);

        let params = UpdateParams {
            token: token_0(),
            new_price: Amount::zero(),
        };
        let bytes = to_bytes(&params);
        let mut ctx = receive_ctx(SELLER);
        ctx.set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = update_listing(&ctx, &mut host, &mut logger);

        claim_eq!(result, Err(CustomContractError::PriceMustBeAboveZero));
    }

    #[concordium_test]
    fn test_update_listing_not_owner() {
        let mut host = default_host();
        list_for_seller(&mut host, token_0(), PRICE);

        let params = UpdateParams {
            token: token_0(),
            new_price: PRICE,
        };
        let bytes = to_bytes(&params);
        let mut ctx = receive_ctx(BUYER);
        ctx.set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = update_listing(&ctx, &mut host, &mut logger);

        claim_eq!(result, Err(CustomContractError::CallerNotTokenOwner));
    }

    #[concordium_test]
    fn test_update_listing_not_listed() {
        let mut host = default_host();

        let params = UpdateParams {
            token: token_0(),
            new_price: PRICE,
        };
        let bytes = to_bytes(&params);
        let mut ctx = receive_ctx(SELLER);
        ctx.set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = update_listing(&ctx, &mut host, &mut logger);

        claim_eq!(result, Err(CustomContractError::NotListed));
    }

    #[concordium_test]
    fn test_buy_item() {
        let mut host = default_host();
        list_for_seller(&mut host, token_0(), PRICE);
        mock_transfer_from(&mut host, SELLER, BUYER);

        let bytes = to_bytes(&token_0());
        let mut ctx = receive_ctx(BUYER);
        ctx.set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = buy_item(&ctx, &mut host, PRICE, &mut logger);

        claim_eq!(result, Ok(()));
        claim_eq!(host.state().listing(&token_0()), None);
        claim_eq!(host.state().proceeds_of(&SELLER), PRICE);

        claim!(
            logger.logs.contains(&to_bytes(&MarketEvent::bought(
                &BUYER,
                &NFT_CONTRACT,
                &token_0().id,
                PRICE,
            ))),
            "Expected an event for the purchase"
        );
    }

    #[concordium_test]
    fn test_buy_item_overpaid() {
        let mut host = default_host();
        list_for_seller(&mut host, token_0(), PRICE);
        mock_transfer_from(&mut host, SELLER, BUYER);

        let bytes = to_bytes(&token_0());
        let mut ctx = receive_ctx(BUYER);
        ctx.set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = buy_item(&ctx, &mut host, PRICE + PRICE, &mut logger);

        claim_eq!(result, Ok(()));
        // Only the listed price is credited; the surplus is not refunded.
        claim_eq!(host.state().proceeds_of(&SELLER), PRICE);

        claim!(
            logger.logs.contains(&to_bytes(&MarketEvent::bought(
                &BUYER,
                &NFT_CONTRACT,
                &token_0().id,
                PRICE,
            ))),
            "Expected the purchase event to carry the listed price"
        );
    }

    #[concordium_test]
    fn test_buy_item_price_not_met() {
        let mut host = default_host();
        list_for_seller(&mut host, token_0(), PRICE);

        let bytes = to_bytes(&token_0());
        let mut ctx = receive_ctx(BUYER);
        ctx.set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = buy_item(&ctx, &mut host, Amount::from_micro_ccd(1), &mut logger);

        claim_eq!(result, Err(CustomContractError::PriceNotMet));
        claim!(host.state().listing(&token_0()).is_some());
        claim_eq!(host.state().proceeds_of(&SELLER), Amount::zero());
    }

    #[concordium_test]
    fn test_buy_item_not_listed() {
        let mut host = default_host();

        let bytes = to_bytes(&token_0());
        let mut ctx = receive_ctx(BUYER);
        ctx.set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = buy_item(&ctx, &mut host, PRICE, &mut logger);

        claim_eq!(result, Err(CustomContractError::NotListed));
    }

    #[concordium_test]
    fn test_buy_item_by_seller() {
        let mut host = default_host();
        list_for_seller(&mut host, token_0(), PRICE);

        let bytes = to_bytes(&token_0());
        let mut ctx = receive_ctx(SELLER);
        ctx.set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = buy_item(&ctx, &mut host, PRICE, &mut logger);

        claim_eq!(result, Err(CustomContractError::CallerIsSeller));
        claim!(host.state().listing(&token_0()).is_some());
    }

    #[concordium_test]
    fn test_buy_item_registry_rejects() {
        let mut host = default_host();
        list_for_seller(&mut host, token_0(), PRICE);

        host.setup_mock_entrypoint(
            NFT_CONTRACT,
            OwnedEntrypointName::new_unchecked("transferFrom".into()),
            reject_mock(-1),
        );

        let bytes = to_bytes(&token_0());
        let mut ctx = receive_ctx(BUYER);
        ctx.set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = buy_item(&ctx, &mut host, PRICE, &mut logger);

        claim_eq!(result, Err(CustomContractError::InvokeContractError));
    }

    #[concordium_test]
    fn test_withdraw_proceeds() {
        let mut host = default_host();
        host.state_mut().credit(SELLER, PRICE);
        host.set_self_balance(PRICE);

        let ctx = receive_ctx(SELLER);

        let result = withdraw_proceeds(&ctx, &mut host);

        claim_eq!(result, Ok(()));
        claim!(
            host.transfer_occurred(&SELLER, PRICE),
            "Expected the full balance to be paid out"
        );
        claim_eq!(host.state().proceeds_of(&SELLER), Amount::zero());

        // Nothing left for a second withdrawal.
        let result = withdraw_proceeds(&ctx, &mut host);
        claim_eq!(result, Err(CustomContractError::NoProceeds));
    }

    #[concordium_test]
    fn test_withdraw_proceeds_empty() {
        let mut host = default_host();

        let ctx = receive_ctx(SELLER);

        let result = withdraw_proceeds(&ctx, &mut host);

        claim_eq!(result, Err(CustomContractError::NoProceeds));
    }

    #[concordium_test]
    fn test_withdraw_proceeds_transfer_fails() {
        let mut host = default_host();
        host.state_mut().credit(SELLER, PRICE);
        // Contract balance below the owed amount makes the payout fail.
        host.set_self_balance(Amount::zero());

        let ctx = receive_ctx(SELLER);

        let result = withdraw_proceeds(&ctx, &mut host);

        claim_eq!(result, Err(CustomContractError::TransferFailed));
    }

    #[concordium_test]
    fn test_two_sales_accumulate() {
        let mut host = default_host();
        list_for_seller(&mut host, token_0(), PRICE);
        list_for_seller(&mut host, token_1(), PRICE);
        mock_transfer_from(&mut host, SELLER, BUYER);

        let mut logger = TestLogger::init();

        let bytes = to_bytes(&token_0());
        let mut ctx = receive_ctx(BUYER);
        ctx.set_parameter(&bytes);
        buy_item(&ctx, &mut host, PRICE, &mut logger).expect_report("First purchase failed");

        let bytes = to_bytes(&token_1());
        let mut ctx = receive_ctx(BUYER);
        ctx.set_parameter(&bytes);
        buy_item(&ctx, &mut host, PRICE, &mut logger).expect_report("Second purchase failed");

        claim_eq!(host.state().proceeds_of(&SELLER), PRICE + PRICE);

        // One withdrawal drains everything.
        host.set_self_balance(PRICE + PRICE);
        let ctx = receive_ctx(SELLER);
        withdraw_proceeds(&ctx, &mut host).expect_report("Withdrawal failed");

        claim!(host.transfer_occurred(&SELLER, PRICE + PRICE));
        claim_eq!(host.state().proceeds_of(&SELLER), Amount::zero());
    }

    #[concordium_test]
    fn test_get_listing() {
        let mut host = default_host();
        list_for_seller(&mut host, token_0(), PRICE);

        let bytes = to_bytes(&token_0());
        let mut ctx = receive_ctx(BUYER);
        ctx.set_parameter(&bytes);

        let view = get_listing(&ctx, &host).expect_report("Listing view failed");

        claim_eq!(
            view,
            ListingView {
                price: PRICE,
                seller: Some(SELLER),
            }
        );
    }

    #[concordium_test]
    fn test_get_listing_unlisted() {
        let host = default_host();

        let bytes = to_bytes(&token_0());
        let mut ctx = receive_ctx(BUYER);
        ctx.set_parameter(&bytes);

        let view = get_listing(&ctx, &host).expect_report("Listing view failed");

        claim_eq!(
            view,
            ListingView {
                price: Amount::zero(),
                seller: None,
            }
        );
    }

    #[concordium_test]
    fn test_get_proceeds_zero() {
        let host = default_host();

        let bytes = to_bytes(&SELLER);
        let mut ctx = receive_ctx(BUYER);
        ctx.set_parameter(&bytes);

        let proceeds = get_proceeds(&ctx, &host).expect_report("Proceeds view failed");

        claim_eq!(proceeds, Amount::zero());
    }
}
