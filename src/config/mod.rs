use serde::Deserialize;
use std::env;

// Container for all runtime settings, read once at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub hall: HallConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub rust_log: String,
}

// Shape of the seed data: seat grid per screen and shows per movie/cinema.
#[derive(Debug, Clone, Deserialize)]
pub struct HallConfig {
    pub seat_rows: u32,
    pub seats_per_row: u32,
    pub shows_per_movie: u32,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            app: AppConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "8000".to_string())
                    .parse()
                    .expect("PORT must be a valid number"),
                environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
                rust_log: env::var("RUST_LOG")
                    .unwrap_or_else(|_| "cinebook=debug,tower_http=debug".to_string()),
            },
            hall: HallConfig {
                seat_rows: env::var("SEAT_ROWS")
                    .unwrap_or_else(|_| "5".to_string())
                    .parse()
                    .expect("SEAT_ROWS must be a valid number"),
                seats_per_row: env::var("SEATS_PER_ROW")
                    .unwrap_or_else(|_| "6".to_string())
                    .parse()
                    .expect("SEATS_PER_ROW must be a valid number"),
                shows_per_movie: env::var("SHOWS_PER_MOVIE")
                    .unwrap_or_else(|_| "3".to_string())
                    .parse()
                    .expect("SHOWS_PER_MOVIE must be a valid number"),
            },
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            app: AppConfig {
                host: "0.0.0.0".to_string(),
                port: 8000,
                environment: "development".to_string(),
                rust_log: "cinebook=debug".to_string(),
            },
            hall: HallConfig {
                seat_rows: 5,
                seats_per_row: 6,
                shows_per_movie: 3,
            },
        }
    }
}
