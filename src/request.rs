//! JSON RPC request builders for the operations this client performs.
//!
//! Building a request never touches the network. Selector validation happens
//! here so that caller programming errors are reported before any wire cost
//! is paid.

use crate::{
    client::Error,
    jsonrpc::{Id, Request, Version},
    serialization,
    types::{BalanceParam, BlockSelector, BlockSpec, BlockTag, ContractCall, Digest, Hydrated},
};
use serde_json::{json, Value};

/// Builds a request carrying the fixed protocol version marker.
pub fn request(id: Id, method: &str, params: Vec<Value>) -> Request {
    Request {
        jsonrpc: Version::V2,
        method: method.to_owned(),
        params,
        id,
    }
}

/// Builds an `eth_getBalance` request for an address at a block height.
pub fn balance(id: Id, params: &BalanceParam) -> Request {
    request(
        id,
        "eth_getBalance",
        vec![
            json!(params.address),
            BlockSpec::Number(params.block_number).as_value(),
        ],
    )
}

/// Builds an `eth_getBlockByHash` request.
pub fn block_by_hash(id: Id, hash: Digest, hydrated: Hydrated) -> Request {
    request(
        id,
        "eth_getBlockByHash",
        vec![json!(hash), json!(hydrated.as_bool())],
    )
}

/// Builds an `eth_getBlockByNumber` request from a block selector.
pub fn block_by_number(
    id: Id,
    selector: BlockSelector,
    hydrated: Hydrated,
) -> Result<Request, Error> {
    let spec = match (selector.number, selector.tag) {
        (Some(number), None) => BlockSpec::Number(number),
        (None, Some(tag)) => BlockSpec::Tag(tag),
        _ => return Err(Error::Selector(selector)),
    };

    Ok(request(
        id,
        "eth_getBlockByNumber",
        vec![spec.as_value(), json!(hydrated.as_bool())],
    ))
}

/// Builds the singleton `eth_getBlockByNumber` request used for looking up
/// the block number behind a tag.
///
/// Only the header fields are of interest, so transactions are never
/// hydrated. The request always goes out on its own, hence the fixed id 0.
pub fn block_by_tag(tag: BlockTag) -> Request {
    request(
        Id(0),
        "eth_getBlockByNumber",
        vec![json!(tag.as_str()), json!(Hydrated::No.as_bool())],
    )
}

/// Builds an `eth_getTransactionReceipt` request.
pub fn transaction_receipt(id: Id, hash: Digest) -> Request {
    request(id, "eth_getTransactionReceipt", vec![json!(hash)])
}

/// Builds an `eth_call` request. The id is the caller-assigned one from the
/// contract call itself.
pub fn contract_call(call: &ContractCall) -> Request {
    request(
        call.id,
        "eth_call",
        vec![
            json!({
                "to": call.to,
                "data": serialization::bytes::encode(&call.data),
            }),
            call.block.as_value(),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethprim::address;
    use hex_literal::hex;
    use serde_json::json;

    #[test]
    fn builds_balance_requests() {
        let request = balance(
            Id(1),
            &BalanceParam {
                address: address!("0x9008D19f58AAbD9eD0D60971565AA8510560ab41"),
                block_number: 436,
            },
        );
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "jsonrpc": "2.0",
                "method": "eth_getBalance",
                "params": ["0x9008D19f58AAbD9eD0D60971565AA8510560ab41", "0x1b4"],
                "id": 1,
            }),
        );
    }

    #[test]
    fn builds_block_by_hash_requests() {
        let hash = Digest::from_slice(&hex!(
            "e6e46d1b2a9b6b37fe8d5d389329bdfb02d6c2922ef61df97b4756ba0f1ebb14"
        ));
        let request = block_by_hash(Id(2), hash, Hydrated::Yes);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "jsonrpc": "2.0",
                "method": "eth_getBlockByHash",
                "params": [
                    "0xe6e46d1b2a9b6b37fe8d5d389329bdfb02d6c2922ef61df97b4756ba0f1ebb14",
                    true,
                ],
                "id": 2,
            }),
        );
    }

    #[test]
    fn builds_block_by_number_requests() {
        let request = block_by_number(Id(0), BlockSelector::number(100), Hydrated::Yes).unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "jsonrpc": "2.0",
                "method": "eth_getBlockByNumber",
                "params": ["0x64", true],
                "id": 0,
            }),
        );

        let request =
            block_by_number(Id(0), BlockSelector::tag(BlockTag::Earliest), Hydrated::No).unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap()["params"],
            json!(["earliest", false]),
        );
    }

    #[test]
    fn rejects_ambiguous_block_selectors() {
        let both = BlockSelector {
            number: Some(100),
            tag: Some(BlockTag::Latest),
        };
        assert!(matches!(
            block_by_number(Id(0), both, Hydrated::Yes),
            Err(Error::Selector(_)),
        ));

        let neither = BlockSelector {
            number: None,
            tag: None,
        };
        assert!(matches!(
            block_by_number(Id(0), neither, Hydrated::Yes),
            Err(Error::Selector(_)),
        ));
    }

    #[test]
    fn builds_block_by_tag_requests() {
        let request = block_by_tag(BlockTag::Latest);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "jsonrpc": "2.0",
                "method": "eth_getBlockByNumber",
                "params": ["latest", false],
                "id": 0,
            }),
        );
    }

    #[test]
    fn builds_transaction_receipt_requests() {
        let hash = Digest::from_slice(&hex!(
            "9fc76417374aa880d4449a1f7f31ec597f00b1f6f3dd2d66f4c9c6c445836d8b"
        ));
        let request = transaction_receipt(Id(3), hash);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "jsonrpc": "2.0",
                "method": "eth_getTransactionReceipt",
                "params": [
                    "0x9fc76417374aa880d4449a1f7f31ec597f00b1f6f3dd2d66f4c9c6c445836d8b",
                ],
                "id": 3,
            }),
        );
    }

    #[test]
    fn builds_contract_call_requests() {
        let request = contract_call(&ContractCall {
            id: Id(7),
            to: address!("0x9008D19f58AAbD9eD0D60971565AA8510560ab41"),
            data: hex!("f698da25").to_vec(),
            block: BlockSpec::default(),
        });
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "jsonrpc": "2.0",
                "method": "eth_call",
                "params": [
                    {
                        "to": "0x9008D19f58AAbD9eD0D60971565AA8510560ab41",
                        "data": "0xf698da25",
                    },
                    "latest",
                ],
                "id": 7,
            }),
        );
    }
}
