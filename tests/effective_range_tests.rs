// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Tests for effective-range records and their store queries

use chrono::{TimeDelta, TimeZone, Utc};
use proptest::prelude::*;
use recordkit::records::{self, EffectiveRange, EffectiveRangeRecord};
use recordkit::{IntervalError, MemoryStore, Record, RecordId, RecordStore, Timestamp};

#[derive(Debug, Clone, PartialEq)]
struct Price {
    id: RecordId,
    amount_cents: u32,
    range: EffectiveRange,
}

impl Record for Price {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl EffectiveRangeRecord for Price {
    fn effective_range(&self) -> &EffectiveRange {
        &self.range
    }
}

fn jan(day: u32) -> Timestamp {
    Utc.with_ymd_and_hms(2025, 1, day, 9, 0, 0).unwrap()
}

async fn price_list(ranges: Vec<EffectiveRange>) -> MemoryStore<Price> {
    let store = MemoryStore::new();
    for (i, range) in ranges.into_iter().enumerate() {
        store
            .insert_with(|id| Price {
                id,
                amount_cents: 100 * (i as u32 + 1),
                range,
            })
            .await
            .unwrap();
    }
    store
}

#[tokio::test]
async fn test_price_history_lifecycle() -> anyhow::Result<()> {
    let store = price_list(vec![EffectiveRange::starting(jan(1))]).await;

    // A new price supersedes the old one from the 15th
    let mut old = store
        .get(1)
        .await?
        .ok_or_else(|| anyhow::anyhow!("first price missing"))?;
    old.range.retire(jan(15));
    store.update(old).await?;
    store
        .insert_with(|id| Price {
            id,
            amount_cents: 250,
            range: EffectiveRange::starting(jan(15)),
        })
        .await?;

    let amounts = |prices: Vec<Price>| -> Vec<u32> {
        prices.into_iter().map(|p| p.amount_cents).collect()
    };
    assert_eq!(amounts(records::at(&store, jan(10)).await?), vec![100]);

    // Both apply at the changeover instant
    assert_eq!(records::at(&store, jan(15)).await?.len(), 2);

    assert_eq!(amounts(records::at(&store, jan(20)).await?), vec![250]);

    // No single price covers the whole month
    assert!(records::in_range(&store, jan(1), jan(31)).await?.is_empty());

    let current = records::latest(&store).await?;
    assert_eq!(current.map(|p| p.amount_cents), Some(250));
    Ok(())
}

#[tokio::test]
async fn test_record_durations() {
    let store = price_list(vec![
        EffectiveRange::new(Some(jan(1)), Some(jan(8))),
        EffectiveRange::starting(jan(1)),
        EffectiveRange::inert(),
    ])
    .await;

    let rows = store.query_all(&|_: &Price| true).await.unwrap();
    assert_eq!(rows[0].duration().unwrap(), TimeDelta::days(7));
    assert_eq!(rows[1].duration(), Err(IntervalError::indeterminate("end")));
    assert_eq!(
        rows[2].duration(),
        Err(IntervalError::indeterminate("start"))
    );
    assert_eq!(rows[2].date_range(), (None, None));
}

#[tokio::test]
async fn test_pending_approval_is_invisible() {
    let store = price_list(vec![EffectiveRange::inert()]).await;
    assert!(records::at(&store, jan(5)).await.unwrap().is_empty());
    assert!(records::latest(&store).await.unwrap().is_none());

    let mut draft = store.get(1).await.unwrap().unwrap();
    draft.range.approve(jan(5));
    store.update(draft).await.unwrap();
    assert_eq!(records::at(&store, jan(5)).await.unwrap().len(), 1);
}

fn arb_range() -> impl Strategy<Value = EffectiveRange> {
    let offset = || prop::option::of(0i64..100);
    (offset(), offset()).prop_map(|(from, to)| {
        let at = |hours: i64| jan(1) + TimeDelta::hours(hours);
        EffectiveRange::new(from.map(at), to.map(at))
    })
}

proptest! {
    /// Property: a point query returns exactly the records of the degenerate window
    #[test]
    fn prop_at_equals_degenerate_in_range(
        ranges in prop::collection::vec(arb_range(), 0..12),
        hours in 0i64..100,
    ) {
        let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
        let instant = jan(1) + TimeDelta::hours(hours);

        let (point, window) = runtime.block_on(async {
            let store = price_list(ranges).await;
            (
                records::at(&store, instant).await.unwrap(),
                records::in_range(&store, instant, instant).await.unwrap(),
            )
        });

        prop_assert_eq!(point, window);
    }

    /// Property: every record returned by a window query is active at both ends
    #[test]
    fn prop_in_range_results_active_at_bounds(
        ranges in prop::collection::vec(arb_range(), 0..12),
        start in 0i64..100,
        length in 0i64..50,
    ) {
        let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
        let from = jan(1) + TimeDelta::hours(start);
        let to = from + TimeDelta::hours(length);

        let matched = runtime.block_on(async {
            let store = price_list(ranges).await;
            records::in_range(&store, from, to).await.unwrap()
        });

        for price in matched {
            prop_assert!(price.is_active_at(from));
            prop_assert!(price.is_active_at(to));
        }
    }
}
