use anyhow::Result;

pub fn run() -> Result<i32> {
    println!("lit {}", env!("CARGO_PKG_VERSION"));
    Ok(0)
}
