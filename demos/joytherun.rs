//! Prints the words hidden in the three magic numbers.
//!
//! Each value is packed into a fresh 4‑byte buffer and the buffer is printed
//! as a null‑terminated string, followed by its length.

use joytherun::builder::BufferBuilder;
use joytherun::cstr;
use joytherun::pack::{JOY, PACK_WIDTH, RUN, THE};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    for value in [JOY, THE, RUN] {
        let mut buf = BufferBuilder::new(PACK_WIDTH)?;
        buf.append_packed_u32(value)?;
        let bytes = buf.finalize();
        println!("{} {}", cstr::display(bytes), cstr::c_str_len(bytes));
    }
    Ok(())
}
