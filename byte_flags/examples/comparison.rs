//! One boolean per named field versus one bit per flag.
//!
//! Run with `RUST_LOG=byte_flags=trace` to see bank growth and toggles.

use byte_flags::{ByteFlagsError, FlagBank, bytes_for_flags};
use tracing_subscriber::EnvFilter;

const FLAG_NAMES: [&str; 24] = [
    "Notifications",
    "Dark Mode",
    "Auto Save",
    "Sound",
    "Vibration",
    "Location",
    "Analytics",
    "Marketing",
    "Email Alerts",
    "SMS Alerts",
    "Push Notifs",
    "Beta Features",
    "Offline Mode",
    "High Contrast",
    "Large Text",
    "Reduced Motion",
    "Two Factor",
    "Auto Update",
    "Crash Reports",
    "Cloud Sync",
    "Read Receipts",
    "Typing Status",
    "Online Status",
    "Sidebar",
];

/// Bytes taken by compact JSON `{"name":bool,...}` for the first `count`
/// flags, reading each value from the bank.
fn object_size(bank: &FlagBank, count: usize) -> usize {
    let fields: usize = FLAG_NAMES[..count]
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let value = if bank.is_enabled_global(i) { "true" } else { "false" };
            name.len() + "\"\":".len() + value.len()
        })
        .sum();
    fields + count.saturating_sub(1) + 2
}

fn main() -> Result<(), ByteFlagsError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut bank = FlagBank::with_flag_count(8)?;

    for count in [8, 16, 24] {
        bank.ensure_capacity(count)?;
        bank.toggle_global(count - 1)?;
        bank.toggle_global(count / 2)?;

        let traditional = object_size(&bank, count);
        let packed = bytes_for_flags(count);
        let savings = 100.0 * (1.0 - packed as f64 / traditional as f64);

        println!("{} flags:", count);
        println!("  object: {} bytes", traditional);
        println!("  packed: {} bytes", packed);
        println!("  savings: {:.0}%", savings);
        for (i, bits) in bank.binary_strings().enumerate() {
            println!("  byte {}: {}", i, bits);
        }
        let enabled: Vec<_> = (0..count)
            .filter(|&i| bank.is_enabled_global(i))
            .map(|i| FLAG_NAMES[i])
            .collect();
        println!("  enabled: {:?}", enabled);
        println!();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_size_counts_current_values() -> Result<(), ByteFlagsError> {
        let mut bank = FlagBank::with_flag_count(8)?;
        // {"Notifications":false}
        assert_eq!(object_size(&bank, 1), 23);
        bank.toggle_global(0)?;
        // {"Notifications":true}
        assert_eq!(object_size(&bank, 1), 22);
        // {"Notifications":true,"Dark Mode":false}
        assert_eq!(object_size(&bank, 2), 40);
        Ok(())
    }
}
