//! # Seed Data Generator
//!
//! Populates a catalog file with demo products for development.
//!
//! ## Usage
//! ```bash
//! # Generate 10 products (default) at $CATALOG_PATH or the data directory
//! cargo run -p catalog-store --bin seed
//!
//! # Generate custom amount
//! cargo run -p catalog-store --bin seed -- --count 50
//!
//! # Specify catalog path
//! cargo run -p catalog-store --bin seed -- --path ./products.json
//! ```
//!
//! ## Generated Products
//! The first ten are the classic demo records (`abc123`, `def456`, `ghi789`,
//! `abc124` … `abc1210`). Past ten, product `n` (1-based) gets:
//! - Code: `abc12{n}`
//! - Title: `producto prueba {n}`
//! - Price: `n × 100`
//! - Thumbnail: `img{n}.jpg`
//! - Stock: `19 + n`

use std::time::Instant;

use catalog_core::NewProduct;
use catalog_store::{CatalogStore, StoreConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_COUNT: usize = 10;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    let mut count = DEFAULT_COUNT;
    let mut path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(DEFAULT_COUNT);
                    i += 1;
                }
            }
            "--path" | "-p" => {
                if i + 1 < args.len() {
                    path = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Catalog Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>     Number of products to generate (default: {DEFAULT_COUNT})");
                println!("  -p, --path <PATH>   Catalog file path (default: $CATALOG_PATH or data dir)");
                println!("  -h, --help          Show this help message");
                return Ok(());
            }
            other => eprintln!("Ignoring unknown argument: {}", other),
        }
        i += 1;
    }

    let config = match path {
        Some(path) => StoreConfig::new(path),
        None => StoreConfig::from_env(),
    };

    println!("Catalog Seed Data Generator");
    println!("===========================");
    println!("Catalog:  {}", config.path().display());
    println!("Products: {}", count);
    println!();

    let mut store = CatalogStore::open(config).await?;

    if !store.is_empty() {
        println!("⚠ Catalog already has {} products", store.len());
        println!("  Skipping seed to avoid duplicate codes.");
        println!("  Delete the catalog file to regenerate.");
        return Ok(());
    }

    let start = Instant::now();
    let mut generated = 0;

    for n in 1..=count {
        let input = demo_product(n);
        let code = input.code.clone();
        if let Err(e) = store.add(input).await {
            eprintln!("Failed to add {}: {}", code, e);
            continue;
        }
        generated += 1;
    }

    let elapsed = start.elapsed();
    info!(generated, ?elapsed, "Seed finished");

    println!("✓ Generated {} products in {:?}", generated, elapsed);
    println!("✓ Seed complete!");

    Ok(())
}

/// Codes of the first three demo products; the rest follow `abc12{n}`.
const LEADING_CODES: [&str; 3] = ["abc123", "def456", "ghi789"];

const DESCRIPTION: &str = "Este es un producto prueba";

/// Builds the `n`th demo product.
fn demo_product(n: usize) -> NewProduct {
    let title = match n {
        1 => "producto prueba".to_string(),
        _ => format!("producto prueba {}", n),
    };
    let code = match n.checked_sub(1).and_then(|i| LEADING_CODES.get(i)) {
        Some(code) => code.to_string(),
        None => format!("abc12{}", n),
    };
    let (description, stock) = match n {
        3 => (format!("{}3", DESCRIPTION), 32),
        _ => (DESCRIPTION.to_string(), 19 + n as i64),
    };

    NewProduct::new(
        title,
        description,
        (n * 100) as f64,
        format!("img{}.jpg", n),
        code,
        stock,
    )
}


/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - Default: INFO, DEBUG for the store
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,catalog_store=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
