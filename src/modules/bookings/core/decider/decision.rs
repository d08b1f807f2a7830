use crate::modules::bookings::core::booking::BookingRecord;
use crate::modules::bookings::core::calendar::Calendar;
use crate::modules::bookings::core::offer::{Offer, RejectReason};

/// Outcome of deciding on a request, before the calendar is touched.
#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    Accepted {
        booking: BookingRecord,
    },
    Rejected {
        reason: RejectReason,
        conflicting_bookings: Vec<BookingRecord>,
    },
}

impl Decision {
    /// Applies the decision to `calendar` and answers with the matching offer.
    pub fn settle(self, calendar: &mut Calendar) -> Offer {
        match self {
            Decision::Accepted { booking } => {
                let offer = Offer::Accepted {
                    job: booking.request.job.clone(),
                    fee: booking.request.bounty.clone(),
                };
                calendar.insert(booking);
                offer
            }
            Decision::Rejected {
                reason,
                conflicting_bookings,
            } => Offer::Rejected {
                reason,
                conflicting_bookings,
            },
        }
    }
}
