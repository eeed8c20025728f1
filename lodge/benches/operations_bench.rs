use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use tempfile::TempDir;
use uuid::Uuid;

use lodge::database::{Database, DatabaseConfig};
use lodge::operations::{
    CancelBookingOptions, CancelBookingPlan, CreateBookingOptions, CreateBookingPlan,
    ExecutionResult, PlanExecutor,
};
use lodge::{Booking, Hotel, Principal, Role, Room, RoomType, StayRange};

const LOOKUP_SIZES: &[usize] = &[10, 100, 500, 1000];
const BULK_BOOKING_SIZES: &[usize] = &[10, 100, 250];

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid calendar date")
}

fn bench_stay() -> StayRange {
    StayRange::new(date(2026, 6, 1), date(2026, 6, 4)).expect("valid stay")
}

fn today() -> NaiveDate {
    date(2026, 5, 1)
}

fn setup_database() -> (TempDir, Database, Hotel) {
    let temp_dir = TempDir::new().expect("failed to create temporary directory");
    let db_path = temp_dir.path().join("lodge.db");
    let config = DatabaseConfig::new(&db_path);
    let db = Database::open(config).expect("failed to open temporary database");

    let hotel = Hotel::new("Benchmark Hotel", Uuid::new_v4()).expect("valid hotel");
    Database::insert_hotel(db.connection(), &hotel).expect("failed to insert hotel");

    (temp_dir, db, hotel)
}

fn insert_room(db: &Database, hotel: &Hotel, index: usize) -> Room {
    let room = Room::builder(
        hotel.id(),
        &format!("{:03}", 100 + index),
        RoomType::Double,
        2,
        100,
    )
    .available_from(date(2026, 1, 1))
    .build()
    .expect("valid room");
    Database::insert_room(db.connection(), &room).expect("failed to insert room");
    room
}

fn perform_create(db: &mut Database, customer: Principal, room: Uuid) -> ExecutionResult {
    let options = CreateBookingOptions::new(customer, room, bench_stay(), today());
    let plan = CreateBookingPlan::new(options);
    let mut executor = PlanExecutor::new(db);
    executor
        .execute(&plan)
        .expect("failed to execute booking plan")
}

/// Fills the database with bookings on distinct rooms and customers, so
/// every create succeeds, and returns the last one.
fn populate_bookings(db: &mut Database, hotel: &Hotel, count: usize) -> (Principal, Booking) {
    let mut last_entry = None;

    for index in 0..count {
        let room = insert_room(db, hotel, index);
        let customer = Principal::new(Uuid::new_v4(), Role::Customer);
        let result = perform_create(db, customer, room.id());
        let booking = result
            .booking
            .expect("create operation should produce a booking");
        last_entry = Some((customer, booking));
    }

    last_entry.expect("at least one booking should be created")
}

fn bench_create_single(c: &mut Criterion) {
    c.bench_function("create_single", |b| {
        b.iter_batched(
            || {
                let (temp_dir, db, hotel) = setup_database();
                let room = insert_room(&db, &hotel, 0);
                (temp_dir, db, room)
            },
            |(temp_dir, mut db, room)| {
                let _temp_dir = temp_dir;
                let customer = Principal::new(Uuid::new_v4(), Role::Customer);
                let result = perform_create(&mut db, customer, room.id());
                black_box(result);
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_create_bulk(c: &mut Criterion) {
    let mut group = c.benchmark_group("create_bulk");

    for &size in BULK_BOOKING_SIZES {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &count| {
            b.iter_batched(
                setup_database,
                |(temp_dir, mut db, hotel)| {
                    let _temp_dir = temp_dir;
                    let entry = populate_bookings(&mut db, &hotel, count);
                    black_box(entry);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// Measures the conflict scan cost of one create against an already
/// populated hotel.
fn bench_create_against_populated(c: &mut Criterion) {
    let mut group = c.benchmark_group("create_against_populated");

    for &size in LOOKUP_SIZES {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &count| {
            b.iter_batched(
                || {
                    let (temp_dir, mut db, hotel) = setup_database();
                    let _ = populate_bookings(&mut db, &hotel, count);
                    let room = insert_room(&db, &hotel, count + 1);
                    (temp_dir, db, room)
                },
                |(temp_dir, mut db, room)| {
                    let _temp_dir = temp_dir;
                    let customer = Principal::new(Uuid::new_v4(), Role::Customer);
                    let result = perform_create(&mut db, customer, room.id());
                    black_box(result);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_lookup_booking(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup_booking");

    for &size in LOOKUP_SIZES {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &count| {
            b.iter_batched(
                || {
                    let (temp_dir, mut db, hotel) = setup_database();
                    let (_customer, booking) = populate_bookings(&mut db, &hotel, count);
                    (temp_dir, db, booking.id())
                },
                |(temp_dir, db, id)| {
                    let _temp_dir = temp_dir;
                    let booking = Database::get_booking(db.connection(), id).expect("lookup failed");
                    black_box(booking);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_list_bookings(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_bookings");

    for &size in LOOKUP_SIZES {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &count| {
            b.iter_batched(
                || {
                    let (temp_dir, mut db, hotel) = setup_database();
                    let _ = populate_bookings(&mut db, &hotel, count);
                    (temp_dir, db)
                },
                |(temp_dir, db)| {
                    let _temp_dir = temp_dir;
                    let bookings =
                        Database::list_bookings(db.connection()).expect("failed to list bookings");
                    black_box(bookings);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_cancel_booking(c: &mut Criterion) {
    c.bench_function("cancel_booking", |b| {
        b.iter_batched(
            || {
                let (temp_dir, mut db, hotel) = setup_database();
                let (customer, booking) = populate_bookings(&mut db, &hotel, 1);
                (temp_dir, db, customer, booking.id())
            },
            |(temp_dir, mut db, customer, booking)| {
                let _temp_dir = temp_dir;
                let options = CancelBookingOptions::new(customer, booking, today());
                let plan = CancelBookingPlan::new(options);
                let mut executor = PlanExecutor::new(&mut db);
                let result = executor.execute(&plan).expect("failed to cancel booking");
                black_box(result.actions_taken);
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    operations_bench,
    bench_create_single,
    bench_create_bulk,
    bench_create_against_populated,
    bench_lookup_booking,
    bench_list_bookings,
    bench_cancel_booking
);
criterion_main!(operations_bench);
