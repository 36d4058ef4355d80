//! Strict backend response envelope.
//!
//! The backend wraps every payload as `{statusCode, success, message, data,
//! meta?}`. Historically the portal treated most of these fields as
//! optional, which let contract drift go unnoticed; here `statusCode` and
//! `success` are mandatory and a missing field is a decode failure the
//! caller reports instead of tolerating.

use serde::{Deserialize, Serialize};

/// Pagination block attached to list responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    #[serde(default)]
    pub total_page: Option<u64>,
}

impl PageMeta {
    /// 是否存在多页（单页列表不渲染分页控件）
    pub fn has_multiple_pages(&self) -> bool {
        match self.total_page {
            Some(pages) => pages > 1,
            None => self.total > self.limit,
        }
    }
}

/// The one envelope shape every endpoint must produce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    pub status_code: u16,
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub meta: Option<PageMeta>,
}

/// A successful, data-bearing response.
#[derive(Debug, Clone, PartialEq)]
pub struct Payload<T> {
    pub data: T,
    pub meta: Option<PageMeta>,
}

/// Why an envelope could not be turned into a payload.
#[derive(Debug, Clone, PartialEq)]
pub enum EnvelopeError {
    /// Backend declared failure (`success: false`); message passed through.
    Rejected { status: u16, message: Option<String> },
    /// `success: true` but no `data` — a backend contract violation.
    MissingData { status: u16 },
}

impl<T> ApiEnvelope<T> {
    /// Split the envelope into a payload or a rejection.
    pub fn into_payload(self) -> Result<Payload<T>, EnvelopeError> {
        if !self.success {
            return Err(EnvelopeError::Rejected {
                status: self.status_code,
                message: self.message,
            });
        }
        match self.data {
            Some(data) => Ok(Payload {
                data,
                meta: self.meta,
            }),
            None => Err(EnvelopeError::MissingData {
                status: self.status_code,
            }),
        }
    }

    /// Acknowledge-only variant for endpoints whose `data` is irrelevant
    /// (logout, deletes, password flows).
    pub fn into_ack(self) -> Result<(), EnvelopeError> {
        if self.success {
            Ok(())
        } else {
            Err(EnvelopeError::Rejected {
                status: self.status_code,
                message: self.message,
            })
        }
    }
}

#[cfg(test)]
mod tests;
