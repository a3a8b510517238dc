//! End-to-end checks: backend JSON in, renderable views out.

use chrono::{NaiveDate, NaiveDateTime};

use u_timeline::aggregate::aggregate_by_date_and_process;
use u_timeline::calendar::{build_calendar_events, build_detail_events};
use u_timeline::color::colors_for_po_number;
use u_timeline::distribute::{build_monthly_timeline, distribute_by_month};
use u_timeline::layout::{layout_timeline, visible_range, ZoomLevel};
use u_timeline::models::{ApiResponse, ProcessTimeline, ScheduleRecord, TimelineRow};
use u_timeline::plan::{build_plan_timeline, DateFilter};
use u_timeline::validation::audit_timeline_rows;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn dt(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
}

const BY_PROCESS: &str = r#"{
  "data": [
    {
      "processName": "Cutting",
      "dataList": [
        { "date": "2024-06-03T00:00:00", "processDetail": [
            { "partName": "Shaft", "quantity": 50, "poNumber": "PO-123 rev2" },
            { "partName": "Gear", "quantity": 30, "poNumber": "PO-124" } ] },
        { "date": "2024-06-08", "processDetail": [
            { "partName": "Shaft", "quantity": 10, "poNumber": "PO-123" } ] },
        { "date": "not-a-date", "processDetail": [
            { "partName": "Shaft", "quantity": 99 } ] }
      ]
    },
    {
      "processName": "Welding",
      "dataList": [
        { "date": "2024-06-03", "processDetail": [
            { "partName": "Shaft", "quantity": 40, "poNumber": "PO-123" } ] }
      ]
    }
  ]
}"#;

const SCHEDULES: &str = r#"{
  "data": [
    {
      "id": 7,
      "quantity": 1000,
      "part": { "name": "Shaft", "type": "Steel" },
      "customer": { "name": "Acme" },
      "scheduleDetails": [
        { "order": 1, "processName": "Cutting", "targetQtyPerDay": 100, "targetQtyTotal": 500,
          "dates": ["2024-06-27", "2024-06-28", "2024-06-29", "2024-06-30"] },
        { "order": 2, "processName": "Welding", "targetQtyPerDay": 100, "targetQtyTotal": 500,
          "dates": ["2024-07-01", "2024-07-02"] }
      ]
    },
    {
      "scheduleId": 8,
      "qty": 0,
      "partName": "Gear",
      "customerName": "Globex",
      "schedulesDetails": []
    }
  ],
  "paging": { "page": 1, "limit": 10, "totalData": 2, "totalPage": 1 }
}"#;

#[test]
fn test_daily_calendar_from_json() {
    init();
    let response: ApiResponse<Vec<ProcessTimeline>> = ApiResponse::from_json(BY_PROCESS).unwrap();
    assert!(response.paging.is_none());

    let events = build_calendar_events(&response.data);
    // Saturday 2024-06-08 and the unparseable date produce nothing
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].id, "2024-06-03-Cutting");
    assert_eq!(events[0].title, "Cutting: 80");
    assert_eq!(events[0].items.len(), 2);
    assert_eq!(events[1].title, "Welding: 40");
    assert_ne!(events[0].colors, events[1].colors);
}

#[test]
fn test_aggregate_is_deterministic() {
    let response: ApiResponse<Vec<ProcessTimeline>> = ApiResponse::from_json(BY_PROCESS).unwrap();
    let cloned = response.data.clone();
    assert_eq!(
        aggregate_by_date_and_process(&response.data),
        aggregate_by_date_and_process(&cloned)
    );
}

#[test]
fn test_single_process_events_share_po_color() {
    init();
    let response: ApiResponse<Vec<ProcessTimeline>> = ApiResponse::from_json(BY_PROCESS).unwrap();
    let events = build_detail_events(3, &response.data[0]);

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].id, "event-3-0-0");
    // "PO-123 rev2" is colored by its first token
    assert_eq!(events[0].colors, colors_for_po_number("PO-123"));
    assert_eq!(events[1].colors, colors_for_po_number("PO-124"));
}

#[test]
fn test_po_colors_ignore_call_order() {
    let first = colors_for_po_number("PO-123");
    for i in 0..50 {
        colors_for_po_number(&format!("PO-{i}"));
    }
    assert_eq!(colors_for_po_number("PO-123"), first);
}

#[test]
fn test_gantt_layout_from_json() {
    init();
    let body = r#"{ "data": [
        { "modelName": "MX-100", "scheduleDetails": [
            { "id": 1, "workCenterName": "Press 1",
              "startTime": "2024-06-03T08:00:00Z", "finishTime": "2024-06-03T12:00:00Z" },
            { "id": 2, "workCenterName": "Press 2",
              "startTime": "1999-12-31T08:00:00Z", "finishTime": "1999-12-31T09:00:00Z" },
            { "id": 3, "workCenterName": "Press 1",
              "startTime": "2024-06-04T09:00:00Z", "finishTime": "2024-06-04T08:00:00Z" } ] },
        { "modelName": "MX-200", "scheduleDetails": [] }
    ] }"#;
    let rows: Vec<TimelineRow> = ApiResponse::from_json(body).unwrap().data;

    // Pre-2000 record does not widen the range
    let range = visible_range(&rows, dt("2030-01-01 00:00"));
    assert_eq!(range.start, dt("2024-06-03 00:00"));
    assert_eq!(range.day_count(), 2);

    let layout = layout_timeline(&rows, ZoomLevel::ThreeHours, dt("2030-01-01 00:00"));
    assert_eq!(layout.rows.len(), 1);
    let bars = &layout.rows[0].bars;
    // The 1999 bar lies entirely left of the range, the inverted one is skipped
    assert_eq!(bars.len(), 1);
    assert_eq!(bars[0].left, 8.0 * 30.0);
    assert_eq!(bars[0].width, 4.0 * 30.0);

    let issues = audit_timeline_rows(&rows).unwrap_err();
    assert_eq!(issues.len(), 1);
}

#[test]
fn test_monthly_view_conserves_quantity() {
    init();
    let response: ApiResponse<Vec<ScheduleRecord>> = ApiResponse::from_json(SCHEDULES).unwrap();
    let paging = response.paging.unwrap();
    assert_eq!(paging.total, 2);
    assert!(!paging.has_next());

    let schedules = response.data;
    assert_eq!(schedules[0].schedule_id(), 7);
    assert_eq!(schedules[1].title(), "Gear (-) · Globex");

    // June: 27, 28, 29 (30th is a Sunday); July: 1, 2
    let spans = distribute_by_month(1000, schedules[0].plans());
    let shares: Vec<u64> = spans.iter().map(|s| s.quantity).collect();
    assert_eq!(shares, vec![600, 400]);

    let view = build_monthly_timeline(&schedules, NaiveDate::from_ymd_opt(2030, 1, 1).unwrap());
    assert_eq!(view.items.iter().map(|i| i.span.quantity).sum::<u64>(), 1000);
    assert_eq!(view.items[0].title, "600 PO");
    assert_eq!(view.grand_total, 1000);
    assert_eq!(view.range_label, "27 Jun 2024 - 02 Jul 2024");
}

#[test]
fn test_plan_view_from_json() {
    let response: ApiResponse<Vec<ScheduleRecord>> = ApiResponse::from_json(SCHEDULES).unwrap();
    let filter = DateFilter::parse(Some("2024-06-01"), None).unwrap();
    let view = build_plan_timeline(&response.data[0], &filter, dt("2030-01-01 00:00"));

    assert_eq!(view.title, "Shaft (Steel)");
    assert_eq!(view.groups.len(), 2);
    assert_eq!(view.items.len(), 5);
    assert_eq!(view.items.last().unwrap().start, dt("2024-07-02 04:00"));
    assert_eq!(view.visible_start, dt("2024-06-26 12:00"));
    assert_eq!(view.visible_end, dt("2024-07-02 12:00"));
    assert_eq!(view.total_target, 1000);
}

#[test]
fn test_schedule_with_both_field_names_decodes() {
    init();
    let body = r#"{ "data": [
        { "id": 7, "scheduleId": 7, "qty": 10, "quantity": 10,
          "partName": "Shaft", "customerName": "Acme",
          "schedulesDetails": [ { "order": 1, "processName": "Cutting", "dates": ["2024-06-03"] } ],
          "scheduleDetails": [] }
    ] }"#;
    let schedules: Vec<ScheduleRecord> = ApiResponse::from_json(body).unwrap().data;
    assert_eq!(schedules[0].schedule_id(), 7);
    assert_eq!(schedules[0].quantity(), 10);
    assert_eq!(schedules[0].plans().len(), 1);

    let view = build_monthly_timeline(&schedules, NaiveDate::from_ymd_opt(2030, 1, 1).unwrap());
    assert_eq!(view.items.len(), 1);
    assert_eq!(view.items[0].span.quantity, 10);
}
