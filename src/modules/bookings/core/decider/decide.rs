// Pure decision function for job requests.
//
// Purpose
// - Decide whether a client with a given policy books a request against its current calendar.
//
// Responsibilities
// - A request with start >= end is rejected before any calendar lookup.
// - AcceptAll books unconditionally. AcceptIfFree books only when nothing overlaps and
//   otherwise reports the overlapping bookings.
// - No visibility, frequency or mode checks.
// - Never mutate the calendar. `Decision::settle` does that.

use crate::modules::bookings::core::booking::BookingRecord;
use crate::modules::bookings::core::calendar::Calendar;
use crate::modules::bookings::core::client::ClientPolicy;
use crate::modules::bookings::core::decider::decision::Decision;
use crate::modules::bookings::core::offer::RejectReason;
use crate::modules::bookings::core::request::Request;

pub fn decide_request(policy: ClientPolicy, calendar: &Calendar, request: Request) -> Decision {
    let interval = match request.interval() {
        Ok(interval) => interval,
        Err(error) => {
            return Decision::Rejected {
                reason: RejectReason::MalformedInterval(error.to_string()),
                conflicting_bookings: Vec::new(),
            };
        }
    };

    match policy {
        ClientPolicy::AcceptAll => Decision::Accepted {
            booking: BookingRecord::new(interval, request),
        },
        ClientPolicy::AcceptIfFree => {
            let overlaps = calendar.overlaps(&interval);
            if overlaps.is_empty() {
                Decision::Accepted {
                    booking: BookingRecord::new(interval, request),
                }
            } else {
                Decision::Rejected {
                    reason: RejectReason::TimeOverlap,
                    conflicting_bookings: overlaps.into_iter().cloned().collect(),
                }
            }
        }
    }
}
