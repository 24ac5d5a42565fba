//! It exposes functions for listing NFTs at a fixed price, buying listed
//! NFTs and withdrawing accumulated sale proceeds.
//!
//! The marketplace never takes custody of tokens. The token contract stays
//! the authority on ownership and approvals; this contract records sale
//! intent and prices, and escrows sale proceeds until sellers withdraw them.
#![cfg_attr(not(feature = "std"), no_std)]

mod contract;
mod events;
mod external;
mod nft;
mod state;
