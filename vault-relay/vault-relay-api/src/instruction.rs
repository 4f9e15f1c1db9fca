//! Typed instructions relayed to the downstream agent
//!
//! Each relay endpoint synthesizes one of these and forwards its
//! natural-language rendering; the agent acts on the prompt text alone.
//! The phrasing is load-bearing: the agent keys off "deposit", "withdraw"
//! and "trade", so the templates must not be reworded casually.

use std::fmt::{self, Display};

/// An instruction to the downstream agent
#[derive(Clone, Debug, PartialEq)]
pub enum Instruction {
    /// Deposit USDC into the vault
    Deposit {
        /// The amount of USDC to deposit
        amount: f64,
    },
    /// Withdraw USDC from the vault
    Withdraw {
        /// The amount of USDC to withdraw
        amount: f64,
    },
    /// Trade one token for another
    Swap {
        /// The amount of the source token to trade
        amount: f64,
        /// The token to trade out of
        from_token: String,
        /// The token to trade into
        to_token: String,
    },
}

impl Instruction {
    /// Render the natural-language prompt sent to the agent
    pub fn to_prompt(&self) -> String {
        self.to_string()
    }
}

impl Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Deposit { amount } => {
                write!(f, "You have to deposit {} USDC in a morpho vault.", amount)
            },
            Instruction::Withdraw { amount } => {
                write!(f, "You have to withdraw {} USDC from the morpho vault.", amount)
            },
            Instruction::Swap { amount, from_token, to_token } => {
                write!(f, "You have to trade {} {} for {}", amount, from_token, to_token)
            },
        }
    }
}
