use proptest::collection::vec;
use proptest::prelude::*;
use sm3::Sm3;

/// Splits `data` at the given cut lengths; cuts may be zero and may exceed
/// what is left, the tail goes in as one final write.
fn write_in_chunks(data: &[u8], cuts: &[usize]) -> [u8; 32] {
    let mut hasher = Sm3::new();
    let mut rest = data;
    for &cut in cuts {
        let n = cut.min(rest.len());
        let (head, tail) = rest.split_at(n);
        assert_eq!(hasher.write(head), n);
        rest = tail;
    }
    hasher.write(rest);
    hasher.sum()
}

proptest! {
    #[test]
    fn random_partitions_match_one_shot(
        data in vec(any::<u8>(), 0..400),
        cuts in vec(0..130usize, 0..24)
    ) {
        prop_assert_eq!(write_in_chunks(&data, &cuts), sm3::sum(&data));
    }

    #[test]
    fn interleaved_sums_do_not_disturb(
        data in vec(any::<u8>(), 0..300),
        split in 0..300usize
    ) {
        let split = split.min(data.len());
        let mut hasher = Sm3::new();
        hasher.write(&data[..split]);
        prop_assert_eq!(hasher.sum(), sm3::sum(&data[..split]));
        hasher.write(&data[split..]);
        prop_assert_eq!(hasher.sum(), sm3::sum(&data));
    }

    #[test]
    fn digest_is_deterministic(data in vec(any::<u8>(), 0..200)) {
        prop_assert_eq!(sm3::sum(&data), sm3::sum(&data));
    }
}
