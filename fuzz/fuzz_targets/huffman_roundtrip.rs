#![no_main]
use greedy::HuffmanTree;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (Vec<u8>, Vec<u8>)| {
    let (input, noise) = data;

    let Some(tree) = HuffmanTree::from_symbols(input.iter().copied()) else {
        assert!(input.is_empty());
        return;
    };

    let codes = tree.codes();
    let bits = codes.encode(input.iter()).unwrap();
    assert_eq!(tree.decode(&bits).unwrap(), input);

    // Arbitrary bit soup must be rejected cleanly, never panic.
    let _ = tree.decode(&noise);
});
