//! A minimal NFT contract with sequential minting and per token transfer
//! approvals. It is the ownership and approval authority consulted by the
//! marketplace contract.
#![cfg_attr(not(feature = "std"), no_std)]

mod contract;
mod events;
mod external;
mod state;
