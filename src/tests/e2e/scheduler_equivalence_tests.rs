// Scheduler outcomes compared across policies and dispatch modes.

use crate::modules::bookings::core::client::ClientPolicy;
use crate::modules::passes::core::pass_record::PassRecord;
use crate::modules::scheduling::core::policy::{PriorityMap, SchedulerKind};
use crate::modules::scheduling::use_cases::dispatch::{ClientMap, dispatch, schedule};
use crate::modules::scheduling::use_cases::dispatch_partitioned::dispatch_partitioned;
use crate::tests::fixtures::passes::{crowded_passes, make_catalog, make_clients, make_pass};
use rstest::{fixture, rstest};
use std::sync::Arc;

const STATIONS: [&str; 4] = ["KB9JHU", "VU", "W9ABC", "ZS6XYZ"];
const SATELLITES: [&str; 4] = ["ISS (ZARYA)", "XW-2D", "FOX-1A", "LILACSAT-2"];

type Booked = Vec<(String, Vec<(i64, i64, String)>)>;

fn booked(clients: &ClientMap) -> Booked {
    clients
        .iter()
        .map(|(name, client)| {
            let bookings = client
                .calendar()
                .iter()
                .map(|b| {
                    (
                        b.interval.start().timestamp(),
                        b.interval.end().timestamp(),
                        b.request.job.satellite().to_string(),
                    )
                })
                .collect();
            (name.clone(), bookings)
        })
        .collect()
}

fn run(kind: SchedulerKind, passes: &[PassRecord], priority: &PriorityMap) -> ClientMap {
    let mut clients = make_clients(ClientPolicy::AcceptIfFree, &STATIONS);
    let mut policy = kind.build(7, priority);
    schedule(policy.as_mut(), passes, &mut clients, &make_catalog(&SATELLITES)).unwrap();
    clients
}

#[fixture]
fn passes() -> Vec<PassRecord> {
    let mut passes = crowded_passes(&STATIONS, &SATELLITES);
    // Duplicate predictions are tolerated.
    passes.push(passes[3].clone());
    passes.reverse();
    passes
}

#[rstest]
fn it_should_book_the_same_calendars_with_first_and_end_start(passes: Vec<PassRecord>) {
    let first = run(SchedulerKind::First, &passes, &PriorityMap::new());
    let end_start = run(SchedulerKind::EndStart, &passes, &PriorityMap::new());

    assert_eq!(booked(&first), booked(&end_start));
    assert!(first.values().all(|client| !client.calendar().is_empty()));
}

#[rstest]
#[case(SchedulerKind::Random)]
#[case(SchedulerKind::Last)]
#[case(SchedulerKind::Duration)]
#[case(SchedulerKind::OwnerPreference)]
fn it_should_never_double_book_whatever_the_order(
    passes: Vec<PassRecord>,
    #[case] kind: SchedulerKind,
) {
    let priority = PriorityMap::from([(
        "VU".to_string(),
        vec!["XW-2D".to_string(), "FOX-1A".to_string()],
    )]);
    let clients = run(kind, &passes, &priority);

    for client in clients.values() {
        let bookings: Vec<_> = client.calendar().iter().collect();
        for pair in bookings.windows(2) {
            assert!(pair[0].interval.end() <= pair[1].interval.start());
        }
    }
}

#[rstest]
fn it_should_never_submit_a_pass_overlapping_a_preferred_one() {
    let passes = vec![
        make_pass("VU", "FOX-1A", 0, 10),
        make_pass("VU", "XW-2D", 8, 20),
        make_pass("KB9JHU", "FOX-1A", 0, 10),
        make_pass("KB9JHU", "XW-2D", 8, 20),
    ];
    let priority = PriorityMap::from([("VU".to_string(), vec!["XW-2D".to_string()])]);

    let mut policy = SchedulerKind::OwnerPreference.build(0, &priority);
    let plan = policy.plan(&passes);
    let mut clients = make_clients(ClientPolicy::AcceptIfFree, &STATIONS);
    let summary = dispatch(&plan, &mut clients, &make_catalog(&SATELLITES)).unwrap();

    assert_eq!(summary.submitted, 3);
    assert_eq!(summary.rejected, 1);
    let vu: Vec<_> = clients["VU"]
        .calendar()
        .iter()
        .map(|b| b.request.job.satellite().to_string())
        .collect();
    let kb9jhu: Vec<_> = clients["KB9JHU"]
        .calendar()
        .iter()
        .map(|b| b.request.job.satellite().to_string())
        .collect();
    assert_eq!(vu, vec!["XW-2D"]);
    assert_eq!(kb9jhu, vec!["FOX-1A"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn it_should_book_the_same_calendars_when_partitioned(passes: Vec<PassRecord>) {
    for kind in SchedulerKind::ALL {
        let priority = PriorityMap::from([("W9ABC".to_string(), vec!["LILACSAT-2".to_string()])]);
        let plan = kind.build(11, &priority).plan(&passes);

        let mut sequential = make_clients(ClientPolicy::AcceptIfFree, &STATIONS);
        let expected = dispatch(&plan, &mut sequential, &make_catalog(&SATELLITES)).unwrap();

        let clients = make_clients(ClientPolicy::AcceptIfFree, &STATIONS);
        let (partitioned, summary) =
            dispatch_partitioned(plan, clients, Arc::new(make_catalog(&SATELLITES))).await;

        assert_eq!(summary, Ok(expected), "{kind}");
        assert_eq!(booked(&partitioned), booked(&sequential), "{kind}");
    }
}
