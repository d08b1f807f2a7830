// KB9JHU booking scenario: two requests on one evening that collide, one on the next evening.

use crate::modules::bookings::core::booking::BookingRecord;
use crate::modules::bookings::core::calendar::BusyTime;
use crate::modules::bookings::core::client::{AcceptIfFreeClient, Client, ClientProfile};
use crate::modules::bookings::core::offer::{Offer, RejectReason};
use crate::modules::bookings::core::request::Request;
use crate::tests::fixtures::requests::job_request::RequestBuilder;
use rstest::{fixture, rstest};
use std::collections::BTreeMap;

type BeforeEachReturn = (AcceptIfFreeClient, Request, Request, Request);

#[fixture]
fn before_each() -> BeforeEachReturn {
    let client = AcceptIfFreeClient::new(ClientProfile::new("KB9JHU", 39.1665, -76.897, 50.0));
    let a = RequestBuilder::new()
        .start("2017-07-12T20:42:06Z")
        .end("2017-07-12T20:51:30Z")
        .build();
    let b = RequestBuilder::new()
        .start("2017-07-12T20:45:00Z")
        .end("2017-07-12T20:51:30Z")
        .build();
    let c = RequestBuilder::new()
        .start("2017-07-13T20:45:00Z")
        .end("2017-07-13T20:51:30Z")
        .build();
    (client, a, b, c)
}

#[rstest]
fn it_should_accept_reject_then_accept(before_each: BeforeEachReturn) {
    let (mut client, a, b, c) = before_each;
    let a_booking = BookingRecord::new(a.interval().unwrap(), a.clone());

    let offer_a = client.request(a.clone());
    assert_eq!(
        offer_a,
        Offer::Accepted {
            job: a.job.clone(),
            fee: a.bounty.clone(),
        }
    );

    let offer_b = client.request(b);
    match offer_b {
        Offer::Rejected {
            reason,
            conflicting_bookings,
        } => {
            assert_eq!(reason, RejectReason::TimeOverlap);
            assert_eq!(reason.to_string(), "time overlap");
            assert_eq!(conflicting_bookings, vec![a_booking]);
        }
        other => panic!("expected B to be rejected, got {other:?}"),
    }

    assert!(client.request(c).is_accepted());
    assert_eq!(client.calendar().len(), 2);
}

#[rstest]
fn it_should_value_and_time_the_final_calendar(before_each: BeforeEachReturn) {
    let (mut client, a, b, c) = before_each;
    for request in [a, b, c] {
        client.request(request);
    }
    let calendar = client.calendar();

    assert_eq!(
        calendar.calendar_value(),
        BTreeMap::from([("SNC".to_string(), 20.0)])
    );
    assert_eq!(calendar.total_busy_seconds(None, None), 564.0 + 390.0);
    assert_eq!(
        calendar.busy_seconds(None, None, BusyTime::Clipped),
        564.0 + 390.0
    );
    assert_eq!(calendar.daily_busy_seconds(), vec![564.0, 390.0]);
}
