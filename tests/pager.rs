use std::cell::Cell;

use assert_matches::assert_matches;

use pattern_hub::error::HubError;
use pattern_hub::pager::{Page, PageMeta, collect_pages};

fn page(records: Vec<u32>, current: u32, last: u32) -> Page<u32> {
    Page {
        data: Some(records),
        meta: Some(PageMeta {
            current_page: current,
            last_page: last,
            total: None,
        }),
    }
}

#[test]
fn accumulates_pages_in_order_and_stops_at_last_page() {
    let requested = Cell::new(0u32);
    let records = collect_pages(
        |page_no| {
            requested.set(requested.get() + 1);
            let records = match page_no {
                1 => (0..10).collect(),
                2 => (10..20).collect(),
                3 => (20..25).collect(),
                _ => panic!("requested page {page_no} past last_page"),
            };
            Ok(page(records, page_no, 3))
        },
        None,
    )
    .unwrap();

    assert_eq!(records, (0..25).collect::<Vec<_>>());
    assert_eq!(requested.get(), 3);
}

#[test]
fn enforces_page_cap() {
    let records = collect_pages(
        |page_no| {
            assert!(page_no <= 5, "cap exceeded at page {page_no}");
            Ok(page(vec![page_no], page_no, 10))
        },
        Some(5),
    )
    .unwrap();

    assert_eq!(records, vec![1, 2, 3, 4, 5]);
}

#[test]
fn missing_meta_means_single_page() {
    let records = collect_pages(
        |_| {
            Ok(Page {
                data: Some(vec![1u32, 2, 3]),
                meta: None,
            })
        },
        None,
    )
    .unwrap();

    assert_eq!(records, vec![1, 2, 3]);
}

#[test]
fn missing_data_ends_pagination_without_error() {
    let records = collect_pages(
        |page_no| {
            if page_no == 1 {
                Ok(page(vec![1u32], 1, 4))
            } else {
                Ok(Page {
                    data: None,
                    meta: None,
                })
            }
        },
        None,
    )
    .unwrap();

    assert_eq!(records, vec![1]);
}

#[test]
fn mid_pagination_failure_discards_accumulation() {
    let result: Result<Vec<u32>, _> = collect_pages(
        |page_no| {
            if page_no == 1 {
                Ok(page(vec![1, 2], 1, 3))
            } else {
                Err(HubError::PathsHttp("connection reset".to_string()))
            }
        },
        None,
    );

    assert_matches!(result, Err(HubError::PathsHttp(_)));
}

#[test]
fn envelope_decodes_leniently() {
    let parsed: Page<u32> = serde_json::from_str(
        r#"{"data": [1, {"bad": true}, 2], "meta": {"current_page": 1, "last_page": 1}}"#,
    )
    .unwrap();
    assert_eq!(parsed.data.unwrap(), vec![1, 2]);

    let parsed: Page<u32> = serde_json::from_str(r#"{"data": {"not": "an array"}}"#).unwrap();
    assert!(parsed.data.is_none());
}
