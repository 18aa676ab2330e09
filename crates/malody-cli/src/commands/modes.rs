//! Modes command implementation.

use anyhow::{Context, Result, bail};
use malody_core::{Mode, ModeRef};

/// Run the modes command
pub fn run(values: &[String], encode: bool) -> Result<()> {
    if encode {
        let refs: Vec<ModeRef> = values.iter().map(|v| parse_mode_ref(v)).collect();
        match Mode::combined_bits(refs) {
            Some(bits) => println!("{}", bits),
            None => bail!("None of {:?} is a known mode", values),
        }
        return Ok(());
    }

    for value in values {
        let bits = parse_bits(value)?;
        let names: Vec<&str> = Mode::modes_from_bits(bits)
            .iter()
            .map(|m| m.name())
            .collect();
        println!("{}: {}", value, names.join(", "));
    }
    Ok(())
}

/// Numeric input is an ID, anything else a name.
pub fn parse_mode_ref(value: &str) -> ModeRef<'_> {
    match value.parse::<i64>() {
        Ok(id) => ModeRef::Id(id),
        Err(_) => ModeRef::Name(value),
    }
}

/// Parse a decimal or `0x`-prefixed hex bit value.
pub fn parse_bits(value: &str) -> Result<u32> {
    let trimmed = value.trim();
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => trimmed.parse(),
    };
    parsed.with_context(|| format!("Invalid bit value '{}'", value))
}
