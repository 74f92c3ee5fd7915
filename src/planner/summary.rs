use super::Totals;
use crate::model::{Booking, BookingStatus, ExpandedSlot, Gender};

/// Totaux des widgets. Un genre non reconnu compte dans `total` mais dans
/// aucun des deux compteurs par genre ; une réservation annulée ne compte pas.
pub fn aggregate(expanded: &[ExpandedSlot], bookings: &[Booking]) -> Totals {
    let mut totals = Totals::default();

    for slot in expanded {
        let capacity = u64::from(slot.template.capacity);
        totals.total += capacity;
        match slot.template.gender {
            Gender::Men => totals.men += capacity,
            Gender::Women => totals.women += capacity,
            Gender::Other(_) => {}
        }
    }

    for booking in bookings {
        if booking.status != BookingStatus::Cancelled {
            totals.booked += u64::from(booking.seats);
        }
    }

    totals
}
