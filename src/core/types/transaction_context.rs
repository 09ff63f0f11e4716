use cosmwasm_std::{Env, Timestamp};

/// The agreed, deterministic facts about the transaction being executed.  Every timestamp and
/// commit identifier written by the contract comes from here, never from a local clock.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionContext {
    pub timestamp: Timestamp,
    pub commit_id: String,
}
impl TransactionContext {
    pub fn new<S: Into<String>>(timestamp: Timestamp, commit_id: S) -> Self {
        TransactionContext {
            timestamp,
            commit_id: commit_id.into(),
        }
    }

    /// Derives the context from the block and transaction info supplied by the chain.
    pub fn from_env(env: &Env) -> Self {
        let tx_index = env
            .transaction
            .as_ref()
            .map(|tx| tx.index)
            .unwrap_or_default();
        TransactionContext::new(
            env.block.time,
            format!("{}:{}", env.block.height, tx_index),
        )
    }
}
