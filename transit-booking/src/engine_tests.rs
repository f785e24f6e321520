use crate::engine::{BookingError, ReservationEngine};
use crate::settings::BookingSettings;
use transit_core::rider::Rider;
use transit_fleet::provider::Provider;
use transit_fleet::roster::{Driver, Route};
use transit_fleet::vehicle::Vehicle;
use transit_shared::RiderRole;

/// One session as the setup layer would assemble it: two riders, one
/// provider, one AC vehicle with the first four seats reserved for faculty.
fn session_with(settings: &BookingSettings) -> ReservationEngine {
    let mut engine = ReservationEngine::with_settings(settings);

    engine
        .riders_mut()
        .register(Rider::new("STU301", "Bilal Qureshi", RiderRole::Student));
    engine
        .riders_mut()
        .register(Rider::new("FAC404", "Prof. Hina Siddiqui", RiderRole::Faculty));

    let mut provider = Provider::new("Jadoon Transport");
    provider.add_driver(Driver::new("Haris Khan", "L-786"));
    provider.add_route(Route::new("DHA", "FAST NUCES", 18.5));

    let mut vehicle = Vehicle::new("VH001", true, 32);
    vehicle.assign_driver(Driver::new("Haris Khan", "L-786"));
    vehicle.assign_route(Route::new("DHA", "FAST NUCES", 18.5));
    for seat in 0..4 {
        vehicle.seats.mark_restricted(seat, RiderRole::Faculty).unwrap();
    }
    provider.add_vehicle(vehicle);

    engine.add_provider(provider);
    engine
}

fn session() -> ReservationEngine {
    session_with(&BookingSettings::default())
}

fn pay(engine: &mut ReservationEngine, rider_id: &str) {
    engine.riders_mut().get_mut(rider_id).unwrap().make_payment();
}

#[test]
fn test_end_to_end_booking_scenario() {
    let mut engine = session();
    pay(&mut engine, "STU301");
    pay(&mut engine, "FAC404");

    let first = engine.book_seat("STU301", "VH001", 6).unwrap();
    assert_eq!(first.code, "BK1");
    assert_eq!(first.fare, 7000);
    assert_eq!(first.rider_role, RiderRole::Student);

    let second = engine.book_seat("FAC404", "VH001", 1).unwrap();
    assert_eq!(second.code, "BK2");
    assert_eq!(second.fare, 5000);

    // The taken seat rejects everyone, regardless of role.
    let retry = engine.book_seat("STU301", "VH001", 6);
    assert!(matches!(retry, Err(BookingError::SeatUnavailable(6))));
    let cross = engine.book_seat("FAC404", "VH001", 6);
    assert!(matches!(cross, Err(BookingError::SeatUnavailable(6))));

    let codes: Vec<&str> = engine.bookings().map(|b| b.code.as_str()).collect();
    assert_eq!(codes, vec!["BK1", "BK2"]);
}

#[test]
fn test_unpaid_rider_is_rejected_without_seat_mutation() {
    let mut engine = session();

    let result = engine.book_seat("STU301", "VH001", 10);
    assert!(matches!(result, Err(BookingError::PaymentIncomplete)));

    let vehicle = engine.vehicle("VH001").unwrap();
    assert!(!vehicle.seats.is_booked(10));
    assert_eq!(engine.bookings().count(), 0);
}

#[test]
fn test_unknown_rider_and_vehicle() {
    let mut engine = session();
    pay(&mut engine, "STU301");

    let result = engine.book_seat("STU999", "VH001", 6);
    assert!(matches!(result, Err(BookingError::RiderNotFound(ref id)) if id == "STU999"));

    let result = engine.book_seat("STU301", "VH999", 6);
    assert!(matches!(result, Err(BookingError::VehicleNotFound(ref id)) if id == "VH999"));
    assert_eq!(engine.bookings().count(), 0);
}

#[test]
fn test_out_of_range_seat_is_unavailable() {
    let mut engine = session();
    pay(&mut engine, "STU301");

    let result = engine.book_seat("STU301", "VH001", 32);
    assert!(matches!(result, Err(BookingError::SeatUnavailable(32))));

    let vehicle = engine.vehicle("VH001").unwrap();
    for seat in 0..vehicle.seats.capacity() {
        assert!(!vehicle.seats.is_booked(seat));
    }
}

#[test]
fn test_role_mismatch_in_both_directions() {
    let mut engine = session();
    pay(&mut engine, "STU301");
    pay(&mut engine, "FAC404");

    // Student on a faculty-reserved seat.
    let result = engine.book_seat("STU301", "VH001", 0);
    assert!(matches!(result, Err(BookingError::RoleMismatch)));

    // Faculty on an unmarked seat.
    let result = engine.book_seat("FAC404", "VH001", 10);
    assert!(matches!(result, Err(BookingError::RoleMismatch)));

    assert_eq!(engine.bookings().count(), 0);
}

#[test]
fn test_full_ledger_rejects_before_seat_mutation() {
    let settings = BookingSettings {
        code_prefix: "BK".to_string(),
        ledger_capacity: Some(1),
    };
    let mut engine = session_with(&settings);
    pay(&mut engine, "STU301");
    pay(&mut engine, "FAC404");

    engine.book_seat("STU301", "VH001", 6).unwrap();

    let result = engine.book_seat("FAC404", "VH001", 1);
    assert!(matches!(result, Err(BookingError::LedgerFull)));

    // The rejected seat must still be open.
    let vehicle = engine.vehicle("VH001").unwrap();
    assert!(!vehicle.seats.is_booked(1));
    assert_eq!(engine.bookings().count(), 1);
}

#[test]
fn test_provider_lookup_by_name() {
    let engine = session();
    assert!(engine.provider_by_name("Jadoon Transport").is_some());
    assert!(engine.provider_by_name("Other Provider").is_none());
}
