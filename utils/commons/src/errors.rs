use super::*;

/// The custom errors the contracts can produce.
#[derive(Serialize, Debug, PartialEq, Eq, Reject, SchemaType)]
pub enum CustomContractError {
    /// Failed parsing the parameter (Error code: -1).
    #[from(ParseError)]
    ParseParams,
    /// Failed logging: Log is full (Error code: -2).
    LogFull,
    /// Failed logging: Log is malformed (Error code: -3).
    LogMalformed,
    /// Listing price must be strictly above zero (Error code: -4).
    PriceMustBeAboveZero,
    /// Token is not listed for sale (Error code: -5).
    NotListed,
    /// Token is already listed for sale (Error code: -6).
    AlreadyListed,
    /// Caller is not the current owner of the token (Error code: -7).
    CallerNotTokenOwner,
    /// Seller attempted to buy their own listing (Error code: -8).
    CallerIsSeller,
    /// Marketplace is not approved to transfer the token (Error code: -9).
    NotApprovedForMarketplace,
    /// Payment is below the listed price (Error code: -10).
    PriceNotMet,
    /// Nothing to withdraw for this account (Error code: -11).
    NoProceeds,
    /// CCD payout failed (Error code: -12).
    TransferFailed,
    /// Only account addresses can call this function (Error code: -13).
    OnlyAccountAddress,
    /// Unknown token (Error code: -14).
    UnknownToken,
    /// Sender is not allowed to perform this action (Error code: -15).
    Unauthorized,
    /// Incompatible token registry contract (Error code: -16).
    Incompatible,
    /// Failed to invoke a contract (Error code: -17).
    InvokeContractError,
}

/// Mapping the logging errors to CustomContractError.
impl From<LogError> for CustomContractError {
    fn from(le: LogError) -> Self {
        match le {
            LogError::Full => Self::LogFull,
            LogError::Malformed => Self::LogMalformed,
        }
    }
}

/// Mapping errors related to contract invocations to CustomContractError.
impl<T> From<CallContractError<T>> for CustomContractError {
    fn from(_cce: CallContractError<T>) -> Self {
        Self::InvokeContractError
    }
}

/// Mapping errors related to CCD transfers to CustomContractError.
impl From<TransferError> for CustomContractError {
    fn from(_te: TransferError) -> Self {
        Self::TransferFailed
    }
}
