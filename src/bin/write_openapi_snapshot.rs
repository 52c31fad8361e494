// src/bin/write_openapi_snapshot.rs
use anyhow::Result;
use inkpot_core::presentation::http::openapi::{snapshot_path, write_openapi_snapshot};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let output_path = snapshot_path();
    write_openapi_snapshot(&output_path)?;
    println!("OpenAPI snapshot written to {output_path}");
    Ok(())
}
