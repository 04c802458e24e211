//! Queueboard client: HTTP wire layer for the fetch-queue backend.
mod api;
mod client;
mod types;
mod wire;

pub use api::{ClientSettings, QueueApi, ReqwestQueueApi};
pub use client::ClientHandle;
pub use types::{
    ApiError, ClientEvent, EnqueueReceipt, FailureKind, JobRecord, QueueSnapshot, RequestSeq,
};
pub use wire::{decode_receipt, decode_snapshot};
