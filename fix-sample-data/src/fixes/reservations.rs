//! Reservation Backfill
//!
//! Generates synthetic table reservations when the fixture has none. Dates
//! spread around the generation instant, with statuses consistent with the
//! date: past bookings are completed or cancelled, today's are in flight,
//! future ones are pending or confirmed.

use chrono::{Duration, NaiveDateTime};
use rand::Rng;
use serde_json::Map;

use crate::core::error::{FixerError, Result};
use crate::models::{Customer, Reservation, ReservationStatus};

/// Number of reservations a backfill run generates
const RESERVATION_COUNT: usize = 50;

/// Only the first N eligible customers are sampled
const CUSTOMER_POOL_SIZE: usize = 30;

/// Reservation dates fall in [today + MIN, today + MAX]
const DAY_OFFSET_MIN: i64 = -5;
const DAY_OFFSET_MAX: i64 = 10;

/// Lunch and dinner seating slots
const TIME_SLOTS: [&str; 11] = [
    "11:00 AM", "11:30 AM", "12:00 PM", "12:30 PM", "1:00 PM", "6:00 PM", "6:30 PM", "7:00 PM",
    "7:30 PM", "8:00 PM", "8:30 PM",
];

const SPECIAL_REQUESTS: [&str; 5] = [
    "Window seat preferred",
    "Birthday celebration",
    "Anniversary dinner",
    "High chair needed",
    "Wheelchair accessible",
];

/// Generate the synthetic reservation list.
///
/// `now` is the generation instant ("today" for the status rules) and `rng`
/// the randomness source; both are injected so runs can be reproduced.
/// Customers may repeat across reservations.
pub fn generate_reservations(
    customers: &[Customer],
    now: NaiveDateTime,
    rng: &mut impl Rng,
) -> Result<Vec<Reservation>> {
    let pool: Vec<&Customer> = customers
        .iter()
        .filter(|c| c.role == "customer")
        .take(CUSTOMER_POOL_SIZE)
        .collect();
    if pool.is_empty() {
        return Err(FixerError::NoEligibleCustomers);
    }

    let today = now.date();
    let mut reservations = Vec::with_capacity(RESERVATION_COUNT);

    for i in 0..RESERVATION_COUNT {
        let customer = pool[rng.gen_range(0..pool.len())];

        let days_offset = rng.gen_range(DAY_OFFSET_MIN..=DAY_OFFSET_MAX);
        let res_datetime = now + Duration::days(days_offset);
        let date = res_datetime.date();

        let status = if date < today {
            [ReservationStatus::Completed, ReservationStatus::Cancelled][rng.gen_range(0..2)]
        } else if date == today {
            [
                ReservationStatus::Confirmed,
                ReservationStatus::Seated,
                ReservationStatus::Pending,
            ][rng.gen_range(0..3)]
        } else {
            [ReservationStatus::Pending, ReservationStatus::Confirmed][rng.gen_range(0..2)]
        };

        let special_requests = if rng.gen_bool(0.7) {
            String::new()
        } else {
            SPECIAL_REQUESTS[rng.gen_range(0..SPECIAL_REQUESTS.len())].to_string()
        };

        let table_number = status
            .has_table()
            .then(|| rng.gen_range(1..=20));

        let created_at = format_timestamp(res_datetime - Duration::days(rng.gen_range(1..=7)));

        reservations.push(Reservation {
            id: format!("res{:05}", i + 1),
            table_type: "reservation".to_string(),
            user_id: customer.id.clone(),
            guest_name: customer.name.clone(),
            guest_email: customer.email.clone(),
            guest_phone: customer.phone.clone(),
            number_of_guests: rng.gen_range(2..=8),
            date,
            time_slot: TIME_SLOTS[rng.gen_range(0..TIME_SLOTS.len())].to_string(),
            special_requests,
            status,
            table_number,
            created_at,
            updated_at: format_timestamp(res_datetime),
            extra: Map::new(),
        });
    }

    Ok(reservations)
}

/// ISO-8601 with a literal UTC designator, e.g. `2025-03-14T19:30:00.000000Z`
fn format_timestamp(datetime: NaiveDateTime) -> String {
    format!("{}Z", datetime.format("%Y-%m-%dT%H:%M:%S%.6f"))
}
