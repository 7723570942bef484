//! Error definitions for the DEX smart contracts
use odra::prelude::*;

/// Custom errors for the token and pool contracts
///
/// The discriminant of each variant is its on-chain error code; the
/// `#[odra::odra_error]` attribute turns those into `OdraError::user`
/// codes via `error as u16`.
#[odra::odra_error]
#[derive(Debug, PartialEq, Eq)]
pub enum DexError {
    /// Balance of the debited account is lower than the requested amount
    InsufficientBalance = 1,

    /// Remaining allowance is lower than the requested amount
    InsufficientAllowance = 2,

    /// Requested withdrawal exceeds a pool reserve
    InsufficientReserve = 3,

    /// Recipient or spender cannot hold tokens
    InvalidRecipient = 4,

    /// Zero input amount passed to a swap
    ZeroAmount = 5,

    /// Pool holds no liquidity on at least one side
    ReserveUninitialized = 6,

    /// Computed swap output rounds down to zero
    InsufficientOutput = 7,

    /// Arithmetic result does not fit in 256 bits
    ArithmeticOverflow = 8,

    /// Address is neither of the pool's tokens
    UnknownToken = 9,

    /// Reentrancy guard is engaged
    Locked = 10,
}
