//! Node implementation specific RPC extensions.
//!
//! Tracing and transaction pool inspection are not part of the standard
//! `eth_` namespace and differ between node implementations, so the client
//! delegates these operations to a variant selected at construction.

use crate::{
    client::{Client, Error},
    jsonrpc::{batch, Id},
    request, serialization,
    types::{Address, InternalTransaction, TraceParams, Transaction, U256},
};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::collections::BTreeMap;

/// Extended operations of a specific node implementation.
///
/// Implementations issue their requests through the [`Client`] they are
/// handed, so they share the configured transport and options.
#[async_trait]
pub trait Variant: Send + Sync {
    /// Fetches the internal transactions recovered by tracing the specified
    /// mined transactions.
    async fn fetch_internal_transactions(
        &self,
        client: &Client,
        params: &[TraceParams],
    ) -> Result<Vec<InternalTransaction>, Error>;

    /// Fetches the transactions currently pending in the node's transaction
    /// pool.
    async fn fetch_pending_transactions(&self, client: &Client)
        -> Result<Vec<Transaction>, Error>;
}

/// The Go Ethereum family of nodes.
pub struct Geth;

#[async_trait]
impl Variant for Geth {
    async fn fetch_internal_transactions(
        &self,
        client: &Client,
        params: &[TraceParams],
    ) -> Result<Vec<InternalTransaction>, Error> {
        if params.is_empty() {
            return Ok(Vec::new());
        }

        let id_to_params = batch::id_to_params(params.to_vec());
        let requests = id_to_params
            .iter()
            .map(|(id, params)| {
                request::request(
                    *id,
                    "debug_traceTransaction",
                    vec![
                        json!(params.transaction_hash),
                        json!({ "tracer": "callTracer" }),
                    ],
                )
            })
            .collect();
        let responses = client.send_batch(requests).await?;

        let items = batch::null_to_failure(batch::correlate(responses, id_to_params)?);
        let (traces, failures) = batch::split_failures(items);
        if !failures.is_empty() {
            return Err(Error::Node(failures));
        }

        let mut internal_transactions = Vec::new();
        for (params, trace) in traces {
            let root = serde_json::from_value::<Call>(trace)?;
            let mut calls = Vec::new();
            flatten(&params, root, &mut calls);
            internal_transactions.extend(calls);
        }
        Ok(internal_transactions)
    }

    async fn fetch_pending_transactions(&self, client: &Client) -> Result<Vec<Transaction>, Error> {
        let response = client
            .send(request::request(Id(0), "txpool_content", Vec::new()))
            .await?;
        let content = serde_json::from_value::<TxpoolContent>(response.result?)?;

        Ok(content
            .pending
            .into_values()
            .flat_map(BTreeMap::into_values)
            .collect())
    }
}

/// A call frame produced by the `callTracer` tracer.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Call {
    #[serde(rename = "type")]
    call_type: String,
    from: Address,
    to: Option<Address>,
    value: Option<U256>,
    gas: U256,
    gas_used: U256,
    #[serde(with = "serialization::bytes")]
    input: Vec<u8>,
    #[serde(default, with = "serialization::option_bytes")]
    output: Option<Vec<u8>>,
    error: Option<String>,
    #[serde(default)]
    calls: Vec<Call>,
}

/// The `txpool_content` result, keyed by sender address and then nonce.
///
/// String keys keep the flattening order deterministic. The queued side of
/// the pool is ignored, since queued transactions cannot be mined yet.
#[derive(Debug, Deserialize)]
struct TxpoolContent {
    #[serde(default)]
    pending: BTreeMap<String, BTreeMap<String, Transaction>>,
}

/// Flattens a call tree depth first, root first. Indices restart at 0 for
/// every traced transaction.
fn flatten(params: &TraceParams, call: Call, out: &mut Vec<InternalTransaction>) {
    out.push(InternalTransaction {
        block_number: params.block_number,
        transaction_hash: params.transaction_hash,
        index: out.len() as u64,
        call_type: call.call_type,
        from: call.from,
        to: call.to,
        value: call.value.unwrap_or_default(),
        gas: call.gas,
        gas_used: call.gas_used,
        input: call.input,
        output: call.output,
        error: call.error,
    });
    for call in call.calls {
        flatten(params, call, out);
    }
}
