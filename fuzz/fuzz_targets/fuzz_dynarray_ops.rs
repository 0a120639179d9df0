#![no_main]

use libfuzzer_sys::fuzz_target;

use grkit_memory::DynArray;

// Each byte pair is (opcode, operand); results must track a Vec model.
fuzz_target!(|data: &[u8]| {
    let mut arr: DynArray<u8> = DynArray::new();
    let mut model: Vec<u8> = Vec::new();

    for pair in data.chunks_exact(2) {
        let (op, arg) = (pair[0], pair[1]);
        match op % 5 {
            0 | 1 => {
                arr.append(arg).unwrap();
                model.push(arg);
            }
            2 => {
                let i = usize::from(arg);
                let got = arr.remove(i).ok();
                let want = (i < model.len()).then(|| model.remove(i));
                assert_eq!(got, want);
            }
            3 => {
                let i = usize::from(arg);
                let got = arr.swap_remove(i).ok();
                let want = (i < model.len()).then(|| model.swap_remove(i));
                assert_eq!(got, want);
            }
            _ => {
                if arg % 2 == 0 {
                    arr.clear();
                } else {
                    arr.free();
                }
                model.clear();
            }
        }
        assert_eq!(arr.as_slice(), model.as_slice());
        assert!(arr.count() <= arr.capacity());
    }
});
