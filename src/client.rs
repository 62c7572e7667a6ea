//! High level batched RPC operations.

use crate::{
    jsonrpc::{
        self,
        batch::{self, CorrelateError, Failure},
        ErrorCode, Request, Response,
    },
    quantity::{self, InvalidQuantity},
    request,
    transport::{Transport, TransportError, TransportOptions},
    types::{
        AddressBalance, BalanceParam, Block, BlockParams, BlockSelector, BlockTag, ContractCall,
        Digest, Hydrated, InternalTransaction, Log, TraceParams, Transaction, TransactionReceipt,
    },
    variant::Variant,
};
use serde::Serialize;
use serde_json::Value;
use std::{ops::RangeInclusive, sync::Arc};
use thiserror::Error as ThisError;

/// An error performing a client operation.
#[derive(Debug, ThisError)]
pub enum Error {
    /// A malformed quantity string.
    #[error(transparent)]
    Quantity(#[from] InvalidQuantity),
    /// A result whose JSON shape does not match the requested data.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// A wire level failure reported by the transport.
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// An RPC error returned by the node for a singleton request.
    #[error(transparent)]
    Rpc(#[from] jsonrpc::Error),
    /// Per item failures of a batch, in original request order.
    #[error("{} batch items failed", .0.len())]
    Node(Vec<Failure>),
    /// A batch response violating the JSON RPC protocol contract.
    #[error(transparent)]
    Correlate(#[from] CorrelateError),
    /// A block selector setting both or neither of number and tag.
    #[error("block selector must set exactly one of number or tag: {0:?}")]
    Selector(BlockSelector),
    /// The node rejected the block tag.
    #[error("block tag rejected by the node")]
    InvalidTag,
    /// No block exists for the requested tag.
    #[error("no block for the requested tag")]
    NotFound,
}

/// The position of a block fetch relative to the chain head.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum NextState {
    /// Every requested block exists; more may follow.
    #[default]
    More,
    /// A requested block does not exist yet; the fetch stopped at the chain
    /// head and returned the blocks before it.
    EndOfChain,
}

/// The flattened result of a block fetch.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Blocks {
    /// Parameters of every fetched block, in request order.
    pub blocks: Vec<BlockParams>,
    /// Transactions hoisted out of the fetched blocks. Each transaction links
    /// back to its parent block by hash and number.
    pub transactions: Vec<Transaction>,
    /// Whether the fetch ran past the chain head.
    pub next_state: NextState,
}

/// The flattened result of a receipt fetch.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Receipts {
    /// The fetched receipts, in request order, with their logs moved out.
    pub receipts: Vec<TransactionReceipt>,
    /// Logs hoisted out of the fetched receipts.
    pub logs: Vec<Log>,
}

/// An Ethereum RPC client.
///
/// Bundles the transport, the options passed to it on every call, and the
/// node variant, all selected at construction. The client holds no mutable
/// state, so it is cheap to clone and safe to share across tasks.
#[derive(Clone)]
pub struct Client {
    transport: Arc<dyn Transport>,
    variant: Arc<dyn Variant>,
    options: TransportOptions,
}

impl Client {
    /// Creates a new client from a transport and a variant, with default
    /// transport options.
    pub fn new(transport: Arc<dyn Transport>, variant: Arc<dyn Variant>) -> Self {
        Self::with_options(transport, variant, TransportOptions::default())
    }

    /// Creates a new client with explicit transport options.
    pub fn with_options(
        transport: Arc<dyn Transport>,
        variant: Arc<dyn Variant>,
        options: TransportOptions,
    ) -> Self {
        Self {
            transport,
            variant,
            options,
        }
    }

    /// Sends a single request over the configured transport.
    pub async fn send(&self, request: Request) -> Result<Response, Error> {
        Ok(self.transport.send(request, &self.options).await?)
    }

    /// Sends a batch of requests over the configured transport.
    pub async fn send_batch(&self, requests: Vec<Request>) -> Result<Vec<Response>, Error> {
        Ok(self.transport.send_batch(requests, &self.options).await?)
    }

    /// Fetches account balances for the specified address and block number
    /// pairs.
    ///
    /// The batch is all or nothing: if any single lookup fails, the whole
    /// call fails with every failure annotated with the address and block
    /// that produced it.
    pub async fn fetch_balances(
        &self,
        params: Vec<BalanceParam>,
    ) -> Result<Vec<AddressBalance>, Error> {
        if params.is_empty() {
            return Ok(Vec::new());
        }

        let id_to_params = batch::id_to_params(params);
        let requests = id_to_params
            .iter()
            .map(|(id, params)| request::balance(*id, params))
            .collect();
        let responses = self.send_batch(requests).await?;

        let items = batch::null_to_failure(batch::correlate(responses, id_to_params)?);
        let (values, failures) = batch::split_failures(items);
        if !failures.is_empty() {
            return Err(Error::Node(failures));
        }

        values
            .into_iter()
            .map(|(params, value)| {
                let quantity = serde_json::from_value::<String>(value)?;
                Ok(AddressBalance {
                    address: params.address,
                    block_number: params.block_number,
                    value: quantity::quantity_to_integer(&quantity)?,
                })
            })
            .collect()
    }

    /// Fetches full blocks for the specified selectors.
    ///
    /// Selectors are validated while shaping requests, before anything is
    /// sent to the node. Responses are reduced in request order: a null
    /// result means the block does not exist yet, so the fetch stops there
    /// and returns the blocks before it with [`NextState::EndOfChain`]
    /// rather than an error.
    pub async fn fetch_blocks(&self, selectors: Vec<BlockSelector>) -> Result<Blocks, Error> {
        if selectors.is_empty() {
            return Ok(Blocks::default());
        }

        let id_to_params = batch::id_to_params(selectors);
        let requests = id_to_params
            .iter()
            .map(|(id, selector)| request::block_by_number(*id, *selector, Hydrated::Yes))
            .collect::<Result<_, _>>()?;
        let responses = self.send_batch(requests).await?;

        reduce_blocks(batch::correlate(responses, id_to_params)?)
    }

    /// Fetches full blocks for an inclusive range of block numbers.
    pub async fn fetch_blocks_by_range(&self, range: RangeInclusive<u64>) -> Result<Blocks, Error> {
        self.fetch_blocks(range.map(BlockSelector::number).collect())
            .await
    }

    /// Fetches full blocks by hash, with the same null handling as range
    /// fetches.
    pub async fn fetch_blocks_by_hash(&self, hashes: Vec<Digest>) -> Result<Blocks, Error> {
        if hashes.is_empty() {
            return Ok(Blocks::default());
        }

        let id_to_params = batch::id_to_params(hashes);
        let requests = id_to_params
            .iter()
            .map(|(id, hash)| request::block_by_hash(*id, *hash, Hydrated::Yes))
            .collect();
        let responses = self.send_batch(requests).await?;

        reduce_blocks(batch::correlate(responses, id_to_params)?)
    }

    /// Fetches the number of the block currently at the specified tag.
    ///
    /// The node rejecting the tag is reported as [`Error::InvalidTag`] so
    /// callers can treat it as non retryable; a null result is reported as
    /// [`Error::NotFound`].
    pub async fn fetch_block_number_by_tag(&self, tag: BlockTag) -> Result<u64, Error> {
        let response = self.send(request::block_by_tag(tag)).await?;
        let value = match response.result {
            Ok(value) => value,
            Err(error) if error.code == ErrorCode::InvalidParams => {
                return Err(Error::InvalidTag);
            }
            Err(error) => return Err(Error::Rpc(error)),
        };

        let number = value
            .get("number")
            .and_then(Value::as_str)
            .ok_or(Error::NotFound)?;
        let number = quantity::quantity_to_integer(number)?;
        Ok(u64::try_from(number).map_err(|_| InvalidQuantity::OutOfRange)?)
    }

    /// Fetches transaction receipts and the logs they emitted.
    ///
    /// The batch is all or nothing. A null receipt means the transaction has
    /// not been mined and fails its item.
    pub async fn fetch_transaction_receipts(
        &self,
        hashes: Vec<Digest>,
    ) -> Result<Receipts, Error> {
        if hashes.is_empty() {
            return Ok(Receipts::default());
        }

        let id_to_params = batch::id_to_params(hashes);
        let requests = id_to_params
            .iter()
            .map(|(id, hash)| request::transaction_receipt(*id, *hash))
            .collect();
        let responses = self.send_batch(requests).await?;

        let items = batch::null_to_failure(batch::correlate(responses, id_to_params)?);
        let (values, failures) = batch::split_failures(items);
        if !failures.is_empty() {
            return Err(Error::Node(failures));
        }

        let mut receipts = Receipts::default();
        for (_, value) in values {
            let mut receipt = serde_json::from_value::<TransactionReceipt>(value)?;
            receipts.logs.append(&mut receipt.logs);
            receipts.receipts.push(receipt);
        }
        Ok(receipts)
    }

    /// Fetches internal transactions through the configured variant.
    pub async fn fetch_internal_transactions(
        &self,
        params: &[TraceParams],
    ) -> Result<Vec<InternalTransaction>, Error> {
        self.variant.fetch_internal_transactions(self, params).await
    }

    /// Fetches pending transactions through the configured variant.
    pub async fn fetch_pending_transactions(&self) -> Result<Vec<Transaction>, Error> {
        self.variant.fetch_pending_transactions(self).await
    }

    /// Executes a batch of contract calls.
    ///
    /// Ids are caller supplied so the results can be matched to whatever
    /// notion of identity the caller uses for its functions. The responses
    /// are returned exactly as delivered, undecoded, since ABI decoding is
    /// the caller's concern.
    pub async fn execute_contract_functions(
        &self,
        calls: Vec<ContractCall>,
    ) -> Result<Vec<Response>, Error> {
        if calls.is_empty() {
            return Ok(Vec::new());
        }

        let requests = calls.iter().map(request::contract_call).collect();
        self.send_batch(requests).await
    }
}

/// Reduces correlated block responses in request order, truncating at the
/// first null result and hoisting embedded transactions.
fn reduce_blocks<P>(items: Vec<batch::Item<P>>) -> Result<Blocks, Error>
where
    P: Serialize,
{
    let mut blocks = Blocks::default();
    let mut failures = Vec::new();
    for item in items {
        match item.result {
            Ok(Value::Null) => {
                blocks.next_state = NextState::EndOfChain;
                break;
            }
            Ok(value) => {
                let block = serde_json::from_value::<Block>(value)?;
                let (params, transactions) = block.into_params()?;
                blocks.blocks.push(params);
                blocks.transactions.extend(transactions);
            }
            Err(error) => failures.push(Failure::new(item.id, &item.params, error)),
        }
    }

    if !failures.is_empty() {
        return Err(Error::Node(failures));
    }
    Ok(blocks)
}
