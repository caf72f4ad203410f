use chrono::{Duration, Timelike, Utc};
use tracing::info;

use crate::config::HallConfig;
use crate::store::{Catalog, SeatLedger};

/// Loads the sample South Bangalore programme into empty stores: three
/// cinemas, three movies, `shows_per_movie` shows of each movie at each
/// cinema, and a full grid of available seats per show.
pub async fn seed_sample_data(catalog: &Catalog, ledger: &SeatLedger, hall: &HallConfig) {
    let cinemas = [
        ("Innovative Filmplex", "Jayanagar", "12th Main, Jayanagar"),
        ("PVR Koramangala", "Koramangala", "CMH Road"),
        ("INOX BTM", "BTM Layout", "5th Stage, BTM Layout"),
    ];
    let mut cinema_ids = Vec::new();
    for (name, area, address) in cinemas {
        cinema_ids.push(catalog.add_cinema(name, area, address).await);
    }

    let movies = [
        ("Flight of Fancy", 140, "English"),
        ("Love in Bengaluru", 120, "Kannada"),
        ("Mystery at MG Road", 130, "Hindi"),
    ];
    let mut movie_ids = Vec::new();
    for (title, duration, language) in movies {
        movie_ids.push(catalog.add_movie(title, duration, language).await);
    }

    // Shows start on the next full hour, staggered per movie and slot.
    let base = Utc::now()
        .naive_utc()
        .with_minute(0)
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or_else(|| Utc::now().naive_utc());

    let mut show_count = 0;
    for &cinema_id in &cinema_ids {
        for (i, &movie_id) in movie_ids.iter().enumerate() {
            for slot in 0..hall.shows_per_movie {
                let show_time = base + Duration::hours(2 + i as i64 + slot as i64 * 3);
                let screen = format!("Screen {}", slot + 1);
                let price = 150 + i as i64 * 20;
                let show_id = catalog
                    .add_show(cinema_id, movie_id, show_time, &screen, price)
                    .await;
                ledger.create_show_seats(show_id, seat_grid(hall)).await;
                show_count += 1;
            }
        }
    }

    info!(
        cinemas = cinema_ids.len(),
        movies = movie_ids.len(),
        shows = show_count,
        seats_per_show = hall.seat_rows * hall.seats_per_row,
        "sample data seeded"
    );
}

/// Seat labels of one hall: rows A, B, C, ... each numbered from 1.
fn seat_grid(hall: &HallConfig) -> Vec<String> {
    let mut labels = Vec::with_capacity((hall.seat_rows * hall.seats_per_row) as usize);
    for row in 0..hall.seat_rows {
        let row_letter = (b'A' + (row % 26) as u8) as char;
        for number in 1..=hall.seats_per_row {
            labels.push(format!("{row_letter}{number}"));
        }
    }
    labels
}
