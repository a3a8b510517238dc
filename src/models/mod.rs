//! Production scheduling input models.
//!
//! Read-only shapes deserialized from the backend's JSON. Nothing in
//! this crate mutates them; every layout is recomputed from scratch.
//!
//! # Endpoint Mappings
//!
//! | Type | Endpoint |
//! |------|----------|
//! | `TimelineRow` | `/ScheduleDetail/models`, `/ScheduleDetail/work_centers` |
//! | `ProcessTimeline` | `/Schedule/ByProcess`, `/Schedule/ByProcess/{id}` |
//! | `ScheduleRecord` | `schedule` (non-paginated) |
//! | forms | `POST`/`PATCH` bodies of the CRUD resources |

mod detail;
mod envelope;
mod forms;
mod process;
mod schedule;

pub use detail::{ScheduleDetail, TimelineRow};
pub use envelope::{endpoints, ApiResponse, Paging};
pub use forms::{
    EntityForm, ModelForm, ModelProcessDetail, ProcessComponent, ScheduleForm, WorkCenterForm,
};
pub use process::{ProcessDay, ProcessEntry, ProcessTimeline};
pub use schedule::{CustomerRef, PartRef, ProcessPlan, ScheduleRecord};
