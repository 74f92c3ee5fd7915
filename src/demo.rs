//! Générateur de réservations de démonstration. Données factices corrélées à
//! l'expansion courante, déterministes à graine fixée — jamais un vrai
//! backend de réservation.

use crate::model::{Booking, BookingStatus, ExpandedSlot};
use chrono::{Duration, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

/// Tire `count` réservations plausibles sur les créneaux à capacité non
/// nulle. Même graine, même sortie.
pub fn demo_bookings(expanded: &[ExpandedSlot], count: usize, seed: u64) -> Vec<Booking> {
    let candidates: Vec<&ExpandedSlot> = expanded
        .iter()
        .filter(|s| s.template.capacity > 0)
        .collect();
    if candidates.is_empty() {
        return Vec::new();
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let epoch = Utc.with_ymd_and_hms(2025, 1, 1, 8, 0, 0).unwrap();

    (0..count)
        .map(|i| {
            let slot = candidates[rng.gen_range(0..candidates.len())];
            let max_seats = slot.template.capacity.min(5);
            let status = match rng.gen_range(0..10u8) {
                0..=6 => BookingStatus::Booked,
                7..=8 => BookingStatus::CheckedIn,
                _ => BookingStatus::Cancelled,
            };
            Booking {
                id: Uuid::from_u128(rng.gen()).to_string(),
                date: slot.date,
                slot_id: slot.template.slot_id,
                start_time: slot.template.start_time.clone(),
                end_time: slot.template.end_time.clone(),
                gender: slot.template.gender.clone(),
                seats: rng.gen_range(1..=max_seats),
                pilgrim_name: format!("Pilgrim {}", i + 1),
                document_no: format!("P{:07}", rng.gen_range(1_000_000..10_000_000u32)),
                group_label: rng
                    .gen_bool(0.3)
                    .then(|| format!("Group {}", rng.gen_range(1..=9u8))),
                status,
                created_at: epoch + Duration::minutes(rng.gen_range(0..60 * 24 * 30)),
            }
        })
        .collect()
}
