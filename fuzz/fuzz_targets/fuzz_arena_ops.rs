#![no_main]

use libfuzzer_sys::fuzz_target;

use grkit_memory::Arena;

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // First two bytes pick the capacity, capped at 64K
    let capacity = usize::from(u16::from_le_bytes([data[0], data[1]]));
    let mut arena = Arena::create(capacity);

    for &b in &data[2..] {
        if b == 0xFF {
            arena.rewind();
            continue;
        }
        let before = arena.used();
        let request = usize::from(b) * 4;
        match arena.alloc(request) {
            Ok(slice) => assert_eq!(slice.len(), request),
            Err(_) => assert_eq!(arena.used(), before),
        }
        assert_eq!(arena.used() + arena.avail(), capacity);
    }
});
