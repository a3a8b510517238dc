//! REST response envelope and resource paths.
//!
//! Every backend response has the shape `{ "data": T, "paging": {...}? }`.
//! This crate performs no HTTP; the caller fetches and hands the body to
//! [`ApiResponse::from_json`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Pagination block of a paginated list response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Paging {
    pub page: u32,
    pub limit: u32,
    #[serde(alias = "totalData")]
    pub total: u64,
    pub total_page: u32,
}

impl Paging {
    /// Whether another page follows this one.
    pub fn has_next(&self) -> bool {
        self.page < self.total_page
    }
}

/// `{ data, paging? }` envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paging: Option<Paging>,
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Decodes an envelope from a response body.
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }
}

/// Backend resource paths, joined onto the API base URL. Every path is
/// absolute (`/{resource}`, `/{resource}/{id}`).
pub mod endpoints {
    pub const CUSTOMER: &str = "/customer";
    pub const PART: &str = "/part";
    pub const PROCESS: &str = "/process";
    pub const MODEL: &str = "/model";
    pub const WORK_CENTER: &str = "/work-center";
    pub const KANBAN: &str = "/kanban";
    pub const SCHEDULE: &str = "/schedule";
    /// Schedule details grouped by model.
    pub const DETAILS_BY_MODEL: &str = "/ScheduleDetail/models";
    /// Schedule details grouped by work center.
    pub const DETAILS_BY_WORK_CENTER: &str = "/ScheduleDetail/work_centers";
    /// Daily plans for every process.
    pub const SCHEDULE_BY_PROCESS: &str = "/Schedule/ByProcess";

    /// Item path: `/{resource}/{id}`. A missing leading `/` is added.
    pub fn item(resource: &str, id: i64) -> String {
        let resource = resource.trim_matches('/');
        format!("/{resource}/{id}")
    }

    /// Daily plan of a single process.
    pub fn schedule_by_process(process_id: i64) -> String {
        item(SCHEDULE_BY_PROCESS, process_id)
    }
}
