#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn header(image_type: u8, depth: u8, w: u16, h: u16, desc: u8) -> Vec<u8> {
    let mut out = vec![0u8; 18];
    out[2] = image_type;
    out[12..14].copy_from_slice(&w.to_le_bytes());
    out[14..16].copy_from_slice(&h.to_le_bytes());
    out[16] = depth;
    out[17] = desc;
    out
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // 2x2 BGRA, bottom-left origin
    let mut bgra = header(2, 32, 2, 2, 0x00);
    bgra.extend((0..16u8).collect::<Vec<_>>());
    fs::write(format!("{dir}/bgra_2x2.tga"), bgra).unwrap();

    // 3x1 BGR, top-right origin
    let mut bgr = header(2, 24, 3, 1, 0x30);
    bgr.extend_from_slice(&[0xff, 0, 0, 0, 0xff, 0, 0, 0, 0xff]);
    fs::write(format!("{dir}/bgr_3x1.tga"), bgr).unwrap();

    // 2x2 greyscale with a 4-byte image ID
    let mut grey = header(3, 8, 2, 2, 0x10);
    grey[0] = 4;
    grey.extend_from_slice(b"seed");
    grey.extend_from_slice(&[0x00, 0x40, 0x80, 0xff]);
    fs::write(format!("{dir}/grey_2x2.tga"), grey).unwrap();

    // Unsupported and malformed seeds for edge coverage
    let mut rle = header(10, 24, 2, 1, 0x10);
    rle.extend_from_slice(&[0x81, 1, 2, 3]);
    fs::write(format!("{dir}/rle.tga"), rle).unwrap();

    let mut cmap = header(1, 8, 1, 1, 0x10);
    cmap[1] = 1;
    cmap.push(0);
    fs::write(format!("{dir}/cmap.tga"), cmap).unwrap();

    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/header_only.bin"), header(2, 32, 1, 1, 0)).unwrap();

    println!("Generated seed corpus in {dir}/");
}
