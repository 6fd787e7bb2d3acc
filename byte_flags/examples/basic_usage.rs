use std::sync::Arc;

use byte_flags::{ByteFlagsError, FlagMapping, FlagWord};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), ByteFlagsError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Byte Flags Examples ===\n");

    example_settings()?;
    example_stored_byte()?;
    example_unknown_flag()?;

    Ok(())
}

fn example_settings() -> Result<(), ByteFlagsError> {
    println!("Example 1: User settings in one byte");

    // 1. Define the flag mapping
    let mapping = Arc::new(FlagMapping::new([
        ("DARK_MODE", 0),
        ("NOTIFICATIONS", 1),
        ("AUTO_SAVE", 2),
    ])?);

    // 2. Initialize (default 0)
    let mut settings = FlagWord::new(Arc::clone(&mapping));

    // 3. Modify state
    settings.enable("DARK_MODE")?;
    settings.toggle("NOTIFICATIONS")?;

    // 4. Check state
    if settings.is_enabled("DARK_MODE")? {
        println!("  Dark mode is on!");
    }

    // 5. Get the raw byte for storage
    println!(
        "  Byte to store: {} ({})",
        settings.byte(),
        settings.to_binary_string()
    );
    for name in settings.enabled_flags() {
        println!("    - {}", name);
    }
    println!();

    Ok(())
}

fn example_stored_byte() -> Result<(), ByteFlagsError> {
    println!("Example 2: Reading back a stored TINYINT column");

    let mapping = Arc::new(FlagMapping::new([
        ("READ", 0),
        ("WRITE", 1),
        ("EXECUTE", 2),
    ])?);

    let column: i64 = 5;
    let mut perms = FlagWord::new(mapping);
    perms.set_byte(column)?;

    println!(
        "  Read: {}, Write: {}, Execute: {}",
        perms.is_enabled("READ")?,
        perms.is_enabled("WRITE")?,
        perms.is_enabled("EXECUTE")?
    );
    println!();

    Ok(())
}

fn example_unknown_flag() -> Result<(), ByteFlagsError> {
    println!("Example 3: Rejected input");

    let mut word = FlagWord::new(Arc::new(FlagMapping::single("ONLY", 0)?));
    if let Err(e) = word.enable("MISSING") {
        println!("  {}", e);
    }
    if let Err(e) = word.set_byte(300) {
        println!("  {}", e);
    }

    Ok(())
}
