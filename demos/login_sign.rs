//! Rebuilds the upload signature string step by step and checks its MD5.

use joytherun::builder::{AppendMode, BufferBuilder, Fragment};
use joytherun::cstr;
use joytherun::digest::{verify, Md5};
use joytherun::pack::{JOY, RUN, THE};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

const EXPECTED: &str = "e4b8e9359e86247954f831cea60abc75";

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

    let path = "po";
    let dateline = "1538284879";
    let keys = "153828487712981546";

    // Same sizing as the upload client: the literal pieces plus 20 spare bytes.
    let capacity = path.len() + dateline.len() + keys.len() + 20;
    let mut buf = BufferBuilder::with_mode(capacity, AppendMode::CString)?;

    let fragments = [
        Fragment::from("raowenyuan"),
        Fragment::from(path),
        Fragment::from(JOY),
        Fragment::from(dateline),
        Fragment::from(THE),
        Fragment::from(keys),
        Fragment::from(RUN),
    ];
    for fragment in fragments {
        buf.append(fragment)?;
        println!("{}", cstr::display(buf.as_bytes()));
    }

    let report = verify(&Md5, cstr::c_str(buf.finalize()), EXPECTED);
    println!("{report}");
    Ok(())
}
