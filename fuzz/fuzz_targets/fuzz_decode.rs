#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Must never panic, whatever the header claims
    let Ok(decoded) = zentga::decode(data, enough::Unstoppable) else {
        let _ = zentga::ImageInfo::from_bytes(data);
        return;
    };

    let expected = decoded.width as usize * decoded.height as usize * 4;
    assert_eq!(decoded.pixels().len(), expected);
    assert!(zentga::ImageInfo::from_bytes(data).unwrap().is_decodable());
});
