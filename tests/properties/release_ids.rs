//! Property tests for release id formatting and allocation.

use std::path::Path;
use std::sync::Mutex;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use proptest::prelude::*;

use cutover::domain::ports::Clock;
use cutover::domain::services::ReleasePathResolver;
use cutover::{Environment, ReleaseId};

fn timestamp() -> impl Strategy<Value = NaiveDateTime> {
    // 2000-01-01 .. roughly 2099, with sub-second noise.
    (0i64..3_155_760_000, 0u32..1_000_000_000).prop_map(|(secs, nanos)| {
        NaiveDate::from_ymd_opt(2000, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
            + Duration::seconds(secs)
            + Duration::nanoseconds(nanos as i64)
    })
}

/// Replays a fixed sequence of readings, repeating the last one.
struct ReplayClock {
    readings: Mutex<Vec<NaiveDateTime>>,
}

impl Clock for ReplayClock {
    fn now(&self) -> NaiveDateTime {
        let mut readings = self.readings.lock().unwrap();
        if readings.len() > 1 {
            readings.remove(0)
        } else {
            readings[0]
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A rendered id parses back to the same id.
    #[test]
    fn property_release_id_parses_its_own_rendering(ts in timestamp()) {
        let id = ReleaseId::from_timestamp(ts);
        let rendered = id.to_string();

        prop_assert_eq!(rendered.len(), 15);
        prop_assert_eq!(ReleaseId::parse(&rendered), Some(id));
    }

    /// PROPERTY: Id order, timestamp order and directory-name order agree.
    #[test]
    fn property_release_ids_sort_like_their_names(a in timestamp(), b in timestamp()) {
        let (x, y) = (ReleaseId::from_timestamp(a), ReleaseId::from_timestamp(b));

        prop_assert_eq!(x.cmp(&y), x.to_string().cmp(&y.to_string()));
        prop_assert_eq!(x.cmp(&y), x.timestamp().cmp(&y.timestamp()));
    }

    /// PROPERTY: One resolver never issues the same or an older id twice,
    /// even when the clock stalls or goes backwards.
    #[test]
    fn property_resolver_ids_strictly_increase(
        readings in proptest::collection::vec(timestamp(), 1..16)
    ) {
        let count = readings.len() + 2;
        let resolver = ReleasePathResolver::new(ReplayClock {
            readings: Mutex::new(readings),
        });

        let ids: Vec<ReleaseId> = (0..count)
            .map(|_| resolver.resolve(Environment::Qa, Path::new("/srv/app")).release_id())
            .collect();

        for pair in ids.windows(2) {
            prop_assert!(pair[0] < pair[1], "{} !< {}", pair[0], pair[1]);
        }
    }

    /// PROPERTY: `parse` never panics on arbitrary input.
    #[test]
    fn property_parse_never_panics(s in "(?s).{0,32}") {
        let _ = ReleaseId::parse(&s);
    }
}
