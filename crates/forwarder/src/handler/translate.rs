// Path: crates/forwarder/src/handler/translate.rs
//! Field-level remapping between the public and upstream schemas.
//!
//! Nested messages follow one rule: an absent struct stays absent, a repeated
//! field is always a (possibly empty) list in upstream order. Scalars, bytes
//! and relayed tendermint types are copied unchanged.

use forwarder_proto::{public, upstream};

// --- Requests (public -> upstream) ---

pub fn block_by_height_request(
    req: public::GetBlockByHeightRequest,
) -> upstream::GetBlockByHeightRequest {
    upstream::GetBlockByHeightRequest { height: req.height }
}

pub fn latest_validator_set_request(
    req: public::GetLatestValidatorSetRequest,
) -> upstream::GetLatestValidatorSetRequest {
    upstream::GetLatestValidatorSetRequest {
        pagination: req.pagination,
    }
}

pub fn validator_set_by_height_request(
    req: public::GetValidatorSetByHeightRequest,
) -> upstream::GetValidatorSetByHeightRequest {
    upstream::GetValidatorSetByHeightRequest {
        height: req.height,
        pagination: req.pagination,
    }
}

pub fn abci_query_request(req: public::AbciQueryRequest) -> upstream::AbciQueryRequest {
    upstream::AbciQueryRequest {
        data: req.data,
        path: req.path,
        height: req.height,
        prove: req.prove,
    }
}

// --- Node info ---

pub fn node_info(resp: upstream::GetNodeInfoResponse) -> public::GetNodeInfoResponse {
    public::GetNodeInfoResponse {
        default_node_info: resp.default_node_info,
        application_version: version_info(resp.application_version),
    }
}

pub fn version_info(info: Option<upstream::VersionInfo>) -> Option<public::VersionInfo> {
    let info = info?;
    Some(public::VersionInfo {
        name: info.name,
        app_name: info.app_name,
        version: info.version,
        git_commit: info.git_commit,
        build_tags: info.build_tags,
        go_version: info.go_version,
        build_deps: build_deps(info.build_deps),
        cosmos_sdk_version: info.cosmos_sdk_version,
    })
}

pub fn build_deps(deps: Vec<upstream::Module>) -> Vec<public::Module> {
    deps.into_iter()
        .map(|dep| public::Module {
            path: dep.path,
            version: dep.version,
            sum: dep.sum,
        })
        .collect()
}

pub fn syncing(resp: upstream::GetSyncingResponse) -> public::GetSyncingResponse {
    public::GetSyncingResponse {
        syncing: resp.syncing,
    }
}

// --- Blocks ---

pub fn latest_block(resp: upstream::GetLatestBlockResponse) -> public::GetLatestBlockResponse {
    public::GetLatestBlockResponse {
        block_id: resp.block_id,
        block: resp.block,
        sdk_block: sdk_block(resp.sdk_block),
    }
}

pub fn block_by_height(
    resp: upstream::GetBlockByHeightResponse,
) -> public::GetBlockByHeightResponse {
    public::GetBlockByHeightResponse {
        block_id: resp.block_id,
        block: resp.block,
        sdk_block: sdk_block(resp.sdk_block),
    }
}

pub fn sdk_block(block: Option<upstream::Block>) -> Option<public::Block> {
    let block = block?;
    Some(public::Block {
        header: header(block.header),
        data: block.data,
        evidence: block.evidence,
        last_commit: block.last_commit,
    })
}

pub fn header(header: Option<upstream::Header>) -> Option<public::Header> {
    let h = header?;
    Some(public::Header {
        version: h.version,
        chain_id: h.chain_id,
        height: h.height,
        time: h.time,
        last_block_id: h.last_block_id,
        last_commit_hash: h.last_commit_hash,
        data_hash: h.data_hash,
        validators_hash: h.validators_hash,
        next_validators_hash: h.next_validators_hash,
        consensus_hash: h.consensus_hash,
        app_hash: h.app_hash,
        last_results_hash: h.last_results_hash,
        evidence_hash: h.evidence_hash,
        proposer_address: h.proposer_address,
    })
}

// --- Validator sets ---

pub fn latest_validator_set(
    resp: upstream::GetLatestValidatorSetResponse,
) -> public::GetLatestValidatorSetResponse {
    public::GetLatestValidatorSetResponse {
        block_height: resp.block_height,
        validators: validators(resp.validators),
        pagination: resp.pagination,
    }
}

pub fn validator_set_by_height(
    resp: upstream::GetValidatorSetByHeightResponse,
) -> public::GetValidatorSetByHeightResponse {
    public::GetValidatorSetByHeightResponse {
        block_height: resp.block_height,
        validators: validators(resp.validators),
        pagination: resp.pagination,
    }
}

pub fn validators(validators: Vec<upstream::Validator>) -> Vec<public::Validator> {
    validators
        .into_iter()
        .map(|v| public::Validator {
            address: v.address,
            pub_key: v.pub_key,
            voting_power: v.voting_power,
            proposer_priority: v.proposer_priority,
        })
        .collect()
}

// --- ABCI ---

pub fn abci_query(resp: upstream::AbciQueryResponse) -> public::AbciQueryResponse {
    public::AbciQueryResponse {
        code: resp.code,
        log: resp.log,
        info: resp.info,
        index: resp.index,
        key: resp.key,
        value: resp.value,
        proof_ops: proof_ops(resp.proof_ops),
        height: resp.height,
        codespace: resp.codespace,
    }
}

/// Absent proof stays absent; present-but-empty stays present and empty.
pub fn proof_ops(ops: Option<upstream::ProofOps>) -> Option<public::ProofOps> {
    let ops = ops?;
    Some(public::ProofOps {
        ops: ops
            .ops
            .into_iter()
            .map(|op| public::ProofOp {
                r#type: op.r#type,
                key: op.key,
                data: op.data,
            })
            .collect(),
    })
}
