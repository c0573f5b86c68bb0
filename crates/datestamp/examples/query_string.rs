// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! This sample builds a query string out of formatted timestamps.

use datestamp::Formatted;
use datestamp::format::{DateOnly, Rfc3339};
use datestamp::query::{EncodeValues, QueryValues};

fn main() -> anyhow::Result<()> {
    let from: Formatted<DateOnly> = "2024-01-01".parse()?;
    let until: Formatted<DateOnly> = "2024-01-31".parse()?;
    let changed_since: Formatted<Rfc3339> = "2024-01-15T12:00:00+01:00".parse()?;

    let mut values = Some(QueryValues::new());
    from.encode_values("day", &mut values);
    until.encode_values("day", &mut values);
    changed_since.encode_values("changed_since", &mut values);

    let values = values.unwrap_or_default();
    for (key, value) in &values {
        println!("{key} = {value}");
    }

    println!("?{}", values.encode());

    Ok(())
}
