//! Prints a summary of a firmware archive.
//!
//! ```text
//! fw-info technichub.zip
//! ```

use std::env;
use std::error::Error;
use std::fs;
use std::process;

use pybricks_firmware::FirmwareReader;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("usage: fw-info <firmware.zip>");
        process::exit(2);
    }
    if let Err(err) = run(&args[1]) {
        eprintln!("fw-info: {err}");
        let mut source = err.source();
        while let Some(cause) = source {
            eprintln!("  caused by: {cause}");
            source = cause.source();
        }
        process::exit(1);
    }
}

fn run(path: &str) -> Result<(), Box<dyn Error>> {
    let data = fs::read(path)?;
    let mut reader = FirmwareReader::load(&data)?;

    let metadata = reader.read_metadata()?;
    println!("metadata-version:  {}", metadata.version());
    println!("firmware-version:  {}", metadata.firmware_version());
    println!(
        "device-id:         0x{:02x} ({})",
        u8::from(metadata.device_id()),
        metadata.device_id()
    );
    println!("checksum-type:     {}", metadata.checksum_type());
    println!("checksum-size:     {}", metadata.checksum_size());
    match metadata.hub_name_slot() {
        Some(slot) => println!(
            "hub-name-slot:     {} bytes at offset {}",
            slot.size, slot.offset
        ),
        None => println!("hub-name-slot:     none"),
    }

    let firmware = reader.read_firmware_base()?;
    println!("firmware-base.bin: {} bytes", firmware.len());
    match metadata
        .checksum_type()
        .checksum(&firmware, metadata.checksum_size())
    {
        Ok(checksum) => println!("checksum:          0x{checksum:08x}"),
        Err(err) => println!("checksum:          unavailable ({err})"),
    }

    match reader.read_main_py()? {
        Some(main_py) => println!("main.py:           {} bytes", main_py.len()),
        None => println!("main.py:           none"),
    }
    let readme = reader.read_readme_oss()?;
    println!("ReadMe_OSS.txt:    {} bytes", readme.len());
    Ok(())
}
