//! Player ledger: balance with validated debit/credit

/// Holds a player's balance for a single game session
///
/// The balance mutates only through `debit` and `credit`. Amounts are
/// unsigned credits, so negative or non-numeric values cannot reach the
/// ledger; the remaining dynamic rule is the funds check on debit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerLedger {
    balance: u64,
}

impl PlayerLedger {
    /// Create a ledger with an opening balance
    pub fn new(initial_balance: u64) -> Self {
        Self {
            balance: initial_balance,
        }
    }

    /// Current balance
    pub fn balance(&self) -> u64 {
        self.balance
    }

    /// Deduct a bet if funds are available
    ///
    /// Returns true iff the full amount was deducted.
    pub fn debit(&mut self, amount: u64) -> bool {
        if self.balance >= amount {
            self.balance -= amount;
            log::info!("deducting bet: {amount}, remaining balance: {}", self.balance);
            true
        } else {
            log::info!(
                "not enough balance for the bet: balance {}, attempted {amount}",
                self.balance
            );
            false
        }
    }

    /// Add winnings to the balance
    pub fn credit(&mut self, amount: u64) {
        self.balance = self.balance.saturating_add(amount);
        log::info!("adding winnings: {amount}, new balance: {}", self.balance);
    }
}
