//! Module containing batch request correlation.
//!
//! Requests in a batch are identified by their position in the original
//! parameter list. Responses may come back in any order, so each one is
//! matched to the parameters that produced it by id rather than by position.

use crate::jsonrpc::{self, Id, Response};
use serde::Serialize;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

/// Assigns each parameter set an id equal to its position in the input.
///
/// The assignment is deterministic, so repeated calls with the same input
/// produce the same mapping.
pub fn id_to_params<P>(params: Vec<P>) -> BTreeMap<Id, P> {
    params
        .into_iter()
        .enumerate()
        .map(|(id, params)| (Id(id as u32), params))
        .collect()
}

/// The outcome of a single request within a batch, reunited with the
/// parameters that produced it.
#[derive(Clone, Debug)]
pub struct Item<P> {
    pub id: Id,
    pub params: P,
    pub result: Result<Value, ItemError>,
}

/// An error for a single item within an otherwise well-formed batch.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ItemError {
    #[error(transparent)]
    Node(#[from] jsonrpc::Error),
    #[error("no response for request")]
    NoResponse,
    #[error("node returned a null result")]
    NullResult,
}

/// A batch response that violates the JSON RPC protocol contract.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum CorrelateError {
    #[error("response for unknown request id {0:?}")]
    UnknownId(Id),
    #[error("response missing request id")]
    MissingId,
    #[error("duplicate response for request id {0:?}")]
    DuplicateId(Id),
}

/// Matches batch responses back to the parameters that produced them.
///
/// Items are returned in id order, which is the order of the original
/// parameter list. A response whose id was never issued is a protocol
/// violation and fails the whole batch; an issued id with no response is
/// reported per item so it can be annotated like any other item failure.
pub fn correlate<P>(
    responses: Vec<Response>,
    id_to_params: BTreeMap<Id, P>,
) -> Result<Vec<Item<P>>, CorrelateError> {
    let mut results = HashMap::with_capacity(responses.len());
    for response in responses {
        let id = response.id.ok_or(CorrelateError::MissingId)?;
        if !id_to_params.contains_key(&id) {
            return Err(CorrelateError::UnknownId(id));
        }
        if results.insert(id, response.result).is_some() {
            return Err(CorrelateError::DuplicateId(id));
        }
    }

    Ok(id_to_params
        .into_iter()
        .map(|(id, params)| Item {
            id,
            params,
            result: match results.remove(&id) {
                Some(Ok(value)) => Ok(value),
                Some(Err(error)) => Err(ItemError::Node(error)),
                None => Err(ItemError::NoResponse),
            },
        })
        .collect())
}

/// Reinterprets null results as per item failures.
///
/// Used by operations where a null result means the node could not produce
/// the requested item. Operations where null carries meaning, such as block
/// fetches past the chain head, skip this step.
pub fn null_to_failure<P>(items: Vec<Item<P>>) -> Vec<Item<P>> {
    items
        .into_iter()
        .map(|mut item| {
            if matches!(&item.result, Ok(Value::Null)) {
                item.result = Err(ItemError::NullResult);
            }
            item
        })
        .collect()
}

/// An item failure annotated with the logical parameters of the request that
/// produced it.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("{error} (params: {params})")]
pub struct Failure {
    pub id: Id,
    pub params: Value,
    pub error: ItemError,
}

impl Failure {
    pub fn new<P>(id: Id, params: &P, error: ItemError) -> Self
    where
        P: Serialize,
    {
        Self {
            id,
            params: serde_json::to_value(params).unwrap_or(Value::Null),
            error,
        }
    }
}

/// Partitions correlated items into successful values and annotated failures,
/// both in original request order.
pub fn split_failures<P>(items: Vec<Item<P>>) -> (Vec<(P, Value)>, Vec<Failure>)
where
    P: Serialize,
{
    let mut values = Vec::with_capacity(items.len());
    let mut failures = Vec::new();
    for item in items {
        match item.result {
            Ok(value) => values.push((item.params, value)),
            Err(error) => failures.push(Failure::new(item.id, &item.params, error)),
        }
    }
    (values, failures)
}
