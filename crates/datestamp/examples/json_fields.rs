// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! This sample shows formatted timestamps as fields of serde structures.
//! In particular:
//!
//! - Deserializing a JSON document whose fields use different layouts
//! - Serializing it back with every field in its own layout
//! - Inspecting the error reported for a malformed field

use datestamp::Formatted;
use datestamp::format::{DateOnly, Kitchen, Rfc1123Z, Rfc3339Nano};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct Shipment {
    ordered: Formatted<DateOnly>,
    dispatched: Formatted<Rfc1123Z>,
    scanned: Formatted<Rfc3339Nano>,
    pickup: Formatted<Kitchen>,
}

const DOCUMENT: &str = r#"{
  "ordered": "2024-02-28",
  "dispatched": "Thu, 29 Feb 2024 08:30:00 +0100",
  "scanned": "2024-02-29T09:12:44.5-05:00",
  "pickup": "6:45PM"
}"#;

fn main() -> anyhow::Result<()> {
    let shipment: Shipment = serde_json::from_str(DOCUMENT)?;

    println!("Ordered on day {} of the year", shipment.ordered.as_zoned().day_of_year());
    println!("Dispatched at {} UTC", shipment.dispatched.timestamp());
    println!("Scanned at {}", shipment.scanned);
    println!("Pickup hour: {}", shipment.pickup.as_zoned().hour());

    // The timestamps render with their own layouts again.
    println!("{}", serde_json::to_string_pretty(&shipment)?);

    // A field that does not match its layout fails the whole document.
    if let Err(error) = serde_json::from_str::<Shipment>(&DOCUMENT.replace("6:45PM", "18:45")) {
        println!("Rejected: {error}");
    }

    Ok(())
}
