//! DEX module containing the liquidity pool contract
//!
//! This module implements a minimal two-token AMM:
//! - Pool: holds the reserves and prices swaps with the constant-product rule

pub mod pool;


pub use pool::Pool;
