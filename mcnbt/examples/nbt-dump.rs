use flate2::read::GzDecoder;
use std::io::Read;

//
// Dump NBT from stdin in Rust's Debug format. Player dat files and most other
// game files are GZip compressed, so decompress when the magic bytes match.
//
// Usage: gzip -dc level.dat | cargo run --example nbt-dump
//        cargo run --example nbt-dump < servers.dat
//

fn main() {
    let mut data = vec![];
    std::io::stdin()
        .read_to_end(&mut data)
        .expect("failed to read stdin");

    if data.starts_with(&[0x1f, 0x8b]) {
        let mut decoder = GzDecoder::new(data.as_slice());
        let mut decompressed = vec![];
        decoder
            .read_to_end(&mut decompressed)
            .expect("failed to decompress gzip data");
        data = decompressed;
    }

    match mcnbt::from_bytes(&data) {
        Ok(value) => println!("{:#?}", value),
        Err(e) => eprintln!("could not parse NBT: {}", e),
    }
}
