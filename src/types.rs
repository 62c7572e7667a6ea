//! Ethereum RPC types.

use crate::{
    debug,
    jsonrpc::Id,
    quantity::{self, InvalidQuantity},
    serialization,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt::{self, Debug, Formatter};

pub use arrayvec::ArrayVec;
pub use ethprim::{Address, Digest, U256};

/// Block number or tag.
#[derive(Clone, Copy, Debug)]
pub enum BlockSpec {
    /// Block by number.
    Number(u64),
    /// Block by tag.
    Tag(BlockTag),
}

impl BlockSpec {
    /// Returns the wire encoding of the selector, either a quantity string or
    /// a tag sentinel.
    pub(crate) fn as_value(&self) -> Value {
        match self {
            Self::Number(number) => Value::String(quantity::integer_to_quantity(*number)),
            Self::Tag(tag) => Value::String(tag.as_str().to_owned()),
        }
    }
}

impl Default for BlockSpec {
    fn default() -> Self {
        Self::Tag(Default::default())
    }
}

impl From<u64> for BlockSpec {
    fn from(number: u64) -> Self {
        Self::Number(number)
    }
}

impl From<BlockTag> for BlockSpec {
    fn from(tag: BlockTag) -> Self {
        Self::Tag(tag)
    }
}

/// Block tag.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockTag {
    /// The lowest numbered block the client has available.
    Earliest,
    /// The most recent block in the canonical chain observed by the client.
    #[default]
    Latest,
    /// A sample next block built by the client on top of [`BlockTag::Latest`]
    /// and containing the set of transactions usually taken from local mempool.
    Pending,
}

impl BlockTag {
    /// Returns the tag sentinel used for encoding Ethereum RPC calls.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Earliest => "earliest",
            Self::Latest => "latest",
            Self::Pending => "pending",
        }
    }
}

/// Caller-supplied selector for a block-by-number lookup.
///
/// Exactly one of the two fields must be set. Passing both or neither is
/// reported as a configuration error before anything is sent to the node.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct BlockSelector {
    /// Block by number.
    pub number: Option<u64>,
    /// Block by tag.
    pub tag: Option<BlockTag>,
}

impl BlockSelector {
    /// Selects a block by number.
    pub fn number(number: u64) -> Self {
        Self {
            number: Some(number),
            tag: None,
        }
    }

    /// Selects a block by tag.
    pub fn tag(tag: BlockTag) -> Self {
        Self {
            number: None,
            tag: Some(tag),
        }
    }
}

/// Whether block transactions should be hydrated.
#[derive(Clone, Copy, Debug, Default)]
pub enum Hydrated {
    /// Only fetch transaction hashes for blocks.
    #[default]
    No,
    /// Fetch full transaction data for blocks.
    Yes,
}

impl Hydrated {
    /// Returns the boolean value used for encoding Ethereum RPC calls for this
    /// parameter.
    pub(crate) fn as_bool(&self) -> bool {
        match self {
            Self::No => false,
            Self::Yes => true,
        }
    }
}

/// A block nonce.
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct BlockNonce(pub [u8; 8]);

impl Debug for BlockNonce {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_tuple("BlockNonce")
            .field(&debug::Hex(&self.0))
            .finish()
    }
}

impl Serialize for BlockNonce {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialization::bytearray::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for BlockNonce {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        serialization::bytearray::deserialize(deserializer).map(Self)
    }
}

/// Transactions included in a block.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum BlockTransactions {
    /// Transaction hashes that were part of a block.
    Hash(Vec<Digest>),
    /// Full transaction data.
    Full(Vec<Transaction>),
}

/// An Ethereum block object.
///
/// Unrecognized fields returned by the node are ignored, so this decodes
/// responses from clients that expose post-merge extensions as well.
#[derive(Clone, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    /// The block hash.
    pub hash: Digest,
    /// The parent block hash.
    pub parent_hash: Digest,
    /// The coinbase. This is the address that received the block rewards.
    pub miner: Address,
    /// The difficulty.
    pub difficulty: U256,
    /// The block height.
    #[serde(with = "serialization::num")]
    pub number: u64,
    /// The gas limit.
    pub gas_limit: U256,
    /// The total gas used by all transactions.
    pub gas_used: U256,
    /// The timestamp in seconds since the Unix epoch.
    #[serde(with = "serialization::num")]
    pub timestamp: u64,
    /// Extra data.
    #[serde(with = "serialization::bytes")]
    pub extra_data: Vec<u8>,
    /// The nonce.
    pub nonce: BlockNonce,
    /// The total difficulty. Omitted by some clients for recent blocks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_difficulty: Option<U256>,
    /// The base fee per gas. Only present for post-London blocks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_fee_per_gas: Option<U256>,
    /// The size of the block.
    pub size: U256,
    /// Block transactions.
    pub transactions: BlockTransactions,
}

impl Block {
    /// Splits a block into its flattened parameters and the full transactions
    /// it contains. Blocks fetched with transaction hashes only yield an empty
    /// transaction list.
    pub fn into_params(self) -> Result<(BlockParams, Vec<Transaction>), InvalidQuantity> {
        let timestamp =
            quantity::unix_to_datetime(self.timestamp).ok_or(InvalidQuantity::OutOfRange)?;
        let transactions = match self.transactions {
            BlockTransactions::Hash(_) => Vec::new(),
            BlockTransactions::Full(transactions) => transactions,
        };

        Ok((
            BlockParams {
                hash: self.hash,
                parent_hash: self.parent_hash,
                miner: self.miner,
                difficulty: self.difficulty,
                number: self.number,
                gas_limit: self.gas_limit,
                gas_used: self.gas_used,
                timestamp,
                extra_data: self.extra_data,
                nonce: self.nonce,
                total_difficulty: self.total_difficulty,
                base_fee_per_gas: self.base_fee_per_gas,
                size: self.size,
            },
            transactions,
        ))
    }
}

impl Debug for Block {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("Block")
            .field("hash", &self.hash)
            .field("parent_hash", &self.parent_hash)
            .field("miner", &self.miner)
            .field("difficulty", &self.difficulty)
            .field("number", &self.number)
            .field("gas_limit", &self.gas_limit)
            .field("gas_used", &self.gas_used)
            .field("timestamp", &self.timestamp)
            .field("extra_data", &debug::Hex(&self.extra_data))
            .field("nonce", &self.nonce)
            .field("total_difficulty", &self.total_difficulty)
            .field("base_fee_per_gas", &self.base_fee_per_gas)
            .field("size", &self.size)
            .field("transactions", &self.transactions)
            .finish()
    }
}

/// Normalized block parameters produced by a block fetch.
#[derive(Clone, Eq, PartialEq)]
pub struct BlockParams {
    /// The block hash.
    pub hash: Digest,
    /// The parent block hash.
    pub parent_hash: Digest,
    /// The coinbase.
    pub miner: Address,
    /// The difficulty.
    pub difficulty: U256,
    /// The block height.
    pub number: u64,
    /// The gas limit.
    pub gas_limit: U256,
    /// The total gas used by all transactions.
    pub gas_used: U256,
    /// The block timestamp.
    pub timestamp: DateTime<Utc>,
    /// Extra data.
    pub extra_data: Vec<u8>,
    /// The nonce.
    pub nonce: BlockNonce,
    /// The total difficulty.
    pub total_difficulty: Option<U256>,
    /// The base fee per gas.
    pub base_fee_per_gas: Option<U256>,
    /// The size of the block.
    pub size: U256,
}

impl Debug for BlockParams {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("BlockParams")
            .field("hash", &self.hash)
            .field("parent_hash", &self.parent_hash)
            .field("miner", &self.miner)
            .field("difficulty", &self.difficulty)
            .field("number", &self.number)
            .field("gas_limit", &self.gas_limit)
            .field("gas_used", &self.gas_used)
            .field("timestamp", &self.timestamp)
            .field("extra_data", &debug::Hex(&self.extra_data))
            .field("nonce", &self.nonce)
            .field("total_difficulty", &self.total_difficulty)
            .field("base_fee_per_gas", &self.base_fee_per_gas)
            .field("size", &self.size)
            .finish()
    }
}

/// An Ethereum transaction object.
///
/// Transactions in the pending pool have not been included in a block yet, so
/// the block linkage fields are `None` for them.
#[derive(Clone, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// The hash of the transaction.
    pub hash: Digest,
    /// The hash of the block containing the transaction.
    pub block_hash: Option<Digest>,
    /// The height of the block containing the transaction.
    #[serde(default, with = "serialization::option_num")]
    pub block_number: Option<u64>,
    /// The index of the transaction within the block it was included.
    #[serde(default, with = "serialization::option_num")]
    pub transaction_index: Option<u64>,
    /// Address of transaction sender.
    pub from: Address,
    /// The transaction recipient ([`None`] for contract creation).
    pub to: Option<Address>,
    /// The limit in gas units for the transaction.
    pub gas: U256,
    /// Gas price willing to be paid by the sender.
    pub gas_price: Option<U256>,
    /// The maximum total fee per gas the sender is willing to pay, including
    /// the network (A.K.A. base) fee and miner (A.K.A priority) fee.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_fee_per_gas: Option<U256>,
    /// Maximum fee per gas the sender is willing to pay to miners in wei.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_priority_fee_per_gas: Option<U256>,
    /// The calldata associated with the transaction.
    #[serde(with = "serialization::bytes")]
    pub input: Vec<u8>,
    /// The transaction nonce.
    #[serde(with = "serialization::num")]
    pub nonce: u64,
    /// The Ether value associated with the transaction.
    pub value: U256,
    /// V
    pub v: U256,
    /// R
    pub r: U256,
    /// S
    pub s: U256,
}

impl Debug for Transaction {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("Transaction")
            .field("hash", &self.hash)
            .field("block_hash", &self.block_hash)
            .field("block_number", &self.block_number)
            .field("transaction_index", &self.transaction_index)
            .field("from", &self.from)
            .field("to", &self.to)
            .field("gas", &self.gas)
            .field("gas_price", &self.gas_price)
            .field("max_fee_per_gas", &self.max_fee_per_gas)
            .field("max_priority_fee_per_gas", &self.max_priority_fee_per_gas)
            .field("input", &debug::Hex(&self.input))
            .field("nonce", &self.nonce)
            .field("value", &self.value)
            .field("v", &self.v)
            .field("r", &self.r)
            .field("s", &self.s)
            .finish()
    }
}

/// An Ethereum log.
#[derive(Clone, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Log {
    /// The index of the log within the block.
    #[serde(with = "serialization::num")]
    pub log_index: u64,
    /// The hash of the transaction that emitted this log.
    pub transaction_hash: Digest,
    /// The hash of the block containing the log.
    pub block_hash: Digest,
    /// The height of the block containing the log.
    #[serde(with = "serialization::num")]
    pub block_number: u64,
    /// The address of the contract that emitted the log.
    pub address: Address,
    /// The data emitted with the log.
    #[serde(with = "serialization::bytes")]
    pub data: Vec<u8>,
    /// The topics emitted with the log.
    pub topics: ArrayVec<Digest, 4>,
}

impl Debug for Log {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("Log")
            .field("log_index", &self.log_index)
            .field("transaction_hash", &self.transaction_hash)
            .field("block_hash", &self.block_hash)
            .field("block_number", &self.block_number)
            .field("address", &self.address)
            .field("data", &debug::Hex(&self.data))
            .field("topics", &self.topics)
            .finish()
    }
}

/// An Ethereum transaction receipt.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    /// The hash of the transaction.
    pub transaction_hash: Digest,
    /// The index of the transaction within the block it was included.
    #[serde(with = "serialization::num")]
    pub transaction_index: u64,
    /// The hash of the block containing the transaction.
    pub block_hash: Digest,
    /// The height of the block containing the transaction.
    #[serde(with = "serialization::num")]
    pub block_number: u64,
    /// Address of transaction sender.
    pub from: Address,
    /// Transaction recipient ([`None`] for contract creation).
    pub to: Option<Address>,
    /// The sum of gas used by this transaction and all preceding transactions
    /// in the same block.
    pub cumulative_gas_used: U256,
    /// The amount of gas used for this specific transaction alone.
    pub gas_used: U256,
    /// Contract address created, or [`None`] if not a deployment.
    pub contract_address: Option<Address>,
    /// Logs emitted by the transaction.
    pub logs: Vec<Log>,
    /// The transaction status. Only specified for transactions included after
    /// the Byzantium upgrade.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TransactionReceiptStatus>,
}

/// The status of a `TransactionReceipt` (whether it succeeded or failed).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum TransactionReceiptStatus {
    /// Status of a failed transaction.
    #[serde(rename = "0x0")]
    Failure,
    /// Status of a successful transaction.
    #[serde(rename = "0x1")]
    Success,
}

/// Parameters for a single balance lookup within a batch.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct BalanceParam {
    /// The account to look up.
    pub address: Address,
    /// The block height to look up the balance at.
    pub block_number: u64,
}

/// A fetched account balance.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AddressBalance {
    /// The account the balance belongs to.
    pub address: Address,
    /// The block height the balance was fetched at.
    pub block_number: u64,
    /// The balance in wei.
    pub value: U256,
}

/// Parameters for a single `eth_call` within a batch.
///
/// The id is caller-supplied so results can be correlated to whatever notion
/// of identity the caller uses for its contract functions.
#[derive(Clone)]
pub struct ContractCall {
    /// The caller-assigned request id.
    pub id: Id,
    /// The contract address to call.
    pub to: Address,
    /// ABI-encoded call data.
    pub data: Vec<u8>,
    /// The block to execute the call at.
    pub block: BlockSpec,
}

impl Debug for ContractCall {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("ContractCall")
            .field("id", &self.id)
            .field("to", &self.to)
            .field("data", &debug::Hex(&self.data))
            .field("block", &self.block)
            .finish()
    }
}

/// Parameters identifying a transaction to trace for internal transactions.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct TraceParams {
    /// The height of the block containing the transaction.
    pub block_number: u64,
    /// The hash of the transaction to trace.
    pub transaction_hash: Digest,
}

/// A single internal transaction recovered from a trace.
#[derive(Clone, Eq, PartialEq)]
pub struct InternalTransaction {
    /// The height of the block containing the traced transaction.
    pub block_number: u64,
    /// The hash of the traced transaction.
    pub transaction_hash: Digest,
    /// The index of this call within the trace, depth first.
    pub index: u64,
    /// The call opcode, e.g. `CALL` or `DELEGATECALL`.
    pub call_type: String,
    /// The calling account.
    pub from: Address,
    /// The called account ([`None`] for contract creation).
    pub to: Option<Address>,
    /// The Ether value transferred by the call.
    pub value: U256,
    /// The gas provided to the call.
    pub gas: U256,
    /// The gas used by the call.
    pub gas_used: U256,
    /// The call input data.
    pub input: Vec<u8>,
    /// The call return data.
    pub output: Option<Vec<u8>>,
    /// The error the call stopped with, if it did not succeed.
    pub error: Option<String>,
}

impl Debug for InternalTransaction {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("InternalTransaction")
            .field("block_number", &self.block_number)
            .field("transaction_hash", &self.transaction_hash)
            .field("index", &self.index)
            .field("call_type", &self.call_type)
            .field("from", &self.from)
            .field("to", &self.to)
            .field("value", &self.value)
            .field("gas", &self.gas)
            .field("gas_used", &self.gas_used)
            .field("input", &debug::Hex(&self.input))
            .field("output", &self.output.as_deref().map(debug::Hex))
            .field("error", &self.error)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethprim::address;
    use hex_literal::hex;
    use serde_json::json;

    #[test]
    fn decodes_full_blocks() {
        let block = serde_json::from_value::<Block>(json!({
            "hash": "0xe6e46d1b2a9b6b37fe8d5d389329bdfb02d6c2922ef61df97b4756ba0f1ebb14",
            "parentHash": "0x57f5c54a1c715bba09e7f3cb2258fa3a04bd9d9648256b1b4063a5f4bd0ec452",
            "miner": "0x9008d19f58aabd9ed0d60971565aa8510560ab41",
            "difficulty": "0x11fca030c91",
            "number": "0x64",
            "gasLimit": "0x1388",
            "gasUsed": "0x5208",
            "timestamp": "0x5c8bc76e",
            "extraData": "0x476574682f76312e302e302f6c696e75782f676f312e342e32",
            "nonce": "0xf491f46b60fe04b3",
            "totalDifficulty": "0x68f17a4a4f4",
            "size": "0x224",
            "transactions": [
                {
                    "hash": "0x9fc76417374aa880d4449a1f7f31ec597f00b1f6f3dd2d66f4c9c6c445836d8b",
                    "blockHash": "0xe6e46d1b2a9b6b37fe8d5d389329bdfb02d6c2922ef61df97b4756ba0f1ebb14",
                    "blockNumber": "0x64",
                    "transactionIndex": "0x0",
                    "from": "0x9008d19f58aabd9ed0d60971565aa8510560ab41",
                    "to": "0x5df9b87991262f6ba471f09758cde1c0fc1de734",
                    "gas": "0x5208",
                    "gasPrice": "0x2d79883d2000",
                    "input": "0x",
                    "nonce": "0x0",
                    "value": "0x7a69",
                    "v": "0x1c",
                    "r": "0x88ff6cf0fefd94db46111149ae4bfc179e9b94721fffd821d38d16464b3f71d0",
                    "s": "0x45e0aff800961cfce805daef7016b9b675c137a6a41a548f7b60a3484c06a33a",
                },
            ],
        }))
        .unwrap();

        let (params, transactions) = block.into_params().unwrap();
        assert_eq!(params.number, 100);
        assert_eq!(params.timestamp.to_string(), "2019-03-15 15:40:30 UTC");
        assert_eq!(params.nonce, BlockNonce(hex!("f491f46b60fe04b3")));
        assert_eq!(
            params.extra_data,
            hex!("476574682f76312e302e302f6c696e75782f676f312e342e32"),
        );
        assert_eq!(params.base_fee_per_gas, None);

        assert_eq!(transactions.len(), 1);
        let transaction = &transactions[0];
        assert_eq!(transaction.block_hash, Some(params.hash));
        assert_eq!(transaction.block_number, Some(100));
        assert_eq!(transaction.transaction_index, Some(0));
        assert_eq!(
            transaction.from,
            address!("0x9008D19f58AAbD9eD0D60971565AA8510560ab41"),
        );
        assert_eq!(transaction.nonce, 0);
        assert!(transaction.input.is_empty());
    }

    #[test]
    fn decodes_blocks_with_transaction_hashes_only() {
        let block = serde_json::from_value::<Block>(json!({
            "hash": "0xe6e46d1b2a9b6b37fe8d5d389329bdfb02d6c2922ef61df97b4756ba0f1ebb14",
            "parentHash": "0x57f5c54a1c715bba09e7f3cb2258fa3a04bd9d9648256b1b4063a5f4bd0ec452",
            "miner": "0x9008d19f58aabd9ed0d60971565aa8510560ab41",
            "difficulty": "0x11fca030c91",
            "number": "0x64",
            "gasLimit": "0x1388",
            "gasUsed": "0x0",
            "timestamp": "0x5c8bc76e",
            "extraData": "0x",
            "nonce": "0xf491f46b60fe04b3",
            "baseFeePerGas": "0x7",
            "size": "0x224",
            "transactions": [
                "0x9fc76417374aa880d4449a1f7f31ec597f00b1f6f3dd2d66f4c9c6c445836d8b",
            ],
        }))
        .unwrap();

        assert!(matches!(
            &block.transactions,
            BlockTransactions::Hash(hashes) if hashes.len() == 1,
        ));
        let (params, transactions) = block.into_params().unwrap();
        assert_eq!(params.total_difficulty, None);
        assert!(transactions.is_empty());
    }

    #[test]
    fn decodes_pending_transactions_without_block_linkage() {
        let transaction = serde_json::from_value::<Transaction>(json!({
            "hash": "0x9fc76417374aa880d4449a1f7f31ec597f00b1f6f3dd2d66f4c9c6c445836d8b",
            "blockHash": null,
            "blockNumber": null,
            "transactionIndex": null,
            "from": "0x9008d19f58aabd9ed0d60971565aa8510560ab41",
            "to": null,
            "gas": "0x5208",
            "gasPrice": "0x2d79883d2000",
            "input": "0x60606040",
            "nonce": "0x1",
            "value": "0x0",
            "v": "0x1b",
            "r": "0x1",
            "s": "0x2",
        }))
        .unwrap();

        assert_eq!(transaction.block_hash, None);
        assert_eq!(transaction.block_number, None);
        assert_eq!(transaction.transaction_index, None);
        assert_eq!(transaction.to, None);
    }

    #[test]
    fn decodes_receipts() {
        let receipt = serde_json::from_value::<TransactionReceipt>(json!({
            "transactionHash": "0x9fc76417374aa880d4449a1f7f31ec597f00b1f6f3dd2d66f4c9c6c445836d8b",
            "transactionIndex": "0x1",
            "blockHash": "0xe6e46d1b2a9b6b37fe8d5d389329bdfb02d6c2922ef61df97b4756ba0f1ebb14",
            "blockNumber": "0x1b4",
            "from": "0x9008d19f58aabd9ed0d60971565aa8510560ab41",
            "to": "0x5df9b87991262f6ba471f09758cde1c0fc1de734",
            "cumulativeGasUsed": "0x33bc",
            "gasUsed": "0x4dc",
            "contractAddress": null,
            "logs": [
                {
                    "logIndex": "0x0",
                    "transactionHash": "0x9fc76417374aa880d4449a1f7f31ec597f00b1f6f3dd2d66f4c9c6c445836d8b",
                    "blockHash": "0xe6e46d1b2a9b6b37fe8d5d389329bdfb02d6c2922ef61df97b4756ba0f1ebb14",
                    "blockNumber": "0x1b4",
                    "address": "0x5df9b87991262f6ba471f09758cde1c0fc1de734",
                    "data": "0x0000000000000000000000000000000000000000000000000000000000000000",
                    "topics": [
                        "0x59ebeb90bc63057b6515673c3ecf9438e5058bca0f92585014eced636878c9a5",
                    ],
                },
            ],
            "status": "0x1",
        }))
        .unwrap();

        assert_eq!(receipt.block_number, 436);
        assert_eq!(receipt.status, Some(TransactionReceiptStatus::Success));
        assert_eq!(receipt.logs.len(), 1);
        assert_eq!(receipt.logs[0].topics.len(), 1);
        assert_eq!(receipt.logs[0].block_number, 436);
    }

    #[test]
    fn encodes_block_specs() {
        assert_eq!(BlockSpec::Number(100).as_value(), json!("0x64"));
        assert_eq!(BlockSpec::Tag(BlockTag::Latest).as_value(), json!("latest"));
        assert_eq!(BlockSpec::default().as_value(), json!("latest"));
        assert_eq!(BlockSpec::from(BlockTag::Pending).as_value(), json!("pending"));
    }
}
