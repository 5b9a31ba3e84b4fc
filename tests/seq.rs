#[macro_use]
extern crate matches;

use rand::SeedableRng;
use rand_isaac::isaac64::Isaac64Rng;

use seq_gen::error::ErrorKind;
use seq_gen::generate::random_sequence;
use seq_gen::marker::insert_marker;
use seq_gen::stats::Composition;
use seq_gen::ALPHABET;

fn rng(seed: u64) -> Isaac64Rng {
    Isaac64Rng::seed_from_u64(seed)
}

#[test]
fn generated_length_and_alphabet() {
    let mut rng = rng(1);
    for &len in &[1usize, 2, 3, 10, 60, 61, 1000] {
        let seq = random_sequence(&mut rng, len).unwrap();
        assert_eq!(seq.len(), len);
        assert!(seq.iter().all(|b| ALPHABET.contains(b)));
    }
}

#[test]
fn all_bases_occur() {
    let mut rng = rng(2);
    let seq = random_sequence(&mut rng, 1000).unwrap();
    for base in ALPHABET.iter() {
        assert!(seq.contains(base), "base {} missing", *base as char);
    }
}

#[test]
fn zero_length_is_rejected() {
    let mut rng = rng(1);
    let err = random_sequence(&mut rng, 0).unwrap_err();
    assert_matches!(err.kind(), ErrorKind::InvalidLength { .. });
}

#[test]
fn insertion_records_a_removable_span() {
    let mut rng = rng(7);
    for &(len, marker) in &[
        (1usize, &b"Al"[..]),
        (10, b"Xx"),
        (50, b"some marker"),
        (3, b""),
    ] {
        let seq = random_sequence(&mut rng, len).unwrap();
        let marked = insert_marker(&mut rng, &seq, marker);

        assert_eq!(marked.sequence().len(), len + marker.len());
        assert!(marked.offset() <= len);
        assert_eq!(marked.marker_len(), marker.len());

        // the marker bytes sit verbatim at the recorded offset
        let start = marked.offset();
        assert_eq!(&marked.sequence()[start..start + marker.len()], marker);

        // removing them restores the input exactly
        assert_eq!(marked.without_marker(), seq);
        let mut manual = marked.sequence().to_vec();
        manual.drain(start..start + marker.len());
        assert_eq!(manual, seq);
    }
}

#[test]
fn empty_marker_is_a_noop() {
    let mut rng = rng(3);
    let seq = random_sequence(&mut rng, 25).unwrap();
    let marked = insert_marker(&mut rng, &seq, b"");
    assert_eq!(marked.sequence(), seq.as_slice());
    assert_eq!(marked.without_marker(), seq);
}

#[test]
fn insertion_offset_is_uniform() {
    let mut rng = rng(42);
    let seq = b"ACGTA";
    let trials = 12_000u32;
    // 6 possible offsets, including both ends
    let mut counts = [0u32; 6];
    for _ in 0..trials {
        let marked = insert_marker(&mut rng, seq, b"x");
        counts[marked.offset()] += 1;
    }
    let expected = trials / 6;
    for (offset, &count) in counts.iter().enumerate() {
        assert!(
            count > expected - 300 && count < expected + 300,
            "offset {} occurred {} times (expected ~{}), counts: {:?}",
            offset,
            count,
            expected,
            counts
        );
    }
}

#[test]
fn known_compositions() {
    let comp = Composition::analyze(b"ACGT").unwrap();
    assert_eq!(comp.total(), 4);
    for &base in ALPHABET.iter() {
        assert!((comp.percent(base) - 25.0).abs() < 1e-12);
        assert_eq!(comp.count(base), 1);
    }
    assert!((comp.percent_cg() - 50.0).abs() < 1e-12);

    let comp = Composition::analyze(b"GGCC").unwrap();
    assert_eq!(comp.percent(b'A'), 0.0);
    assert!((comp.percent_cg() - 100.0).abs() < 1e-12);

    let comp = Composition::analyze(b"AATT").unwrap();
    assert_eq!(comp.percent_cg(), 0.0);
}

#[test]
fn percentages_sum_to_100() {
    let mut rng = rng(11);
    for &len in &[1usize, 17, 100, 10_000] {
        let seq = random_sequence(&mut rng, len).unwrap();
        let marked = insert_marker(&mut rng, &seq, b"Some Marker 123");
        let comp = Composition::analyze(marked.sequence()).unwrap();

        let sum: f64 = ALPHABET.iter().map(|&b| comp.percent(b)).sum();
        assert!((sum - 100.0).abs() < 1e-6, "sum was {}", sum);
        for &base in ALPHABET.iter() {
            let p = comp.percent(base);
            assert!((0.0..=100.0).contains(&p));
        }
    }
}

#[test]
fn marker_bases_leak_into_statistics() {
    // "Al" inserted into "ACGT" contributes an uppercase 'A' that the
    // character filter cannot tell apart from a real base.
    let comp = Composition::analyze(b"ACAlGT").unwrap();
    assert_eq!(comp.total(), 5);
    assert!((comp.percent(b'A') - 40.0).abs() < 1e-12);
    assert!((comp.percent(b'C') - 20.0).abs() < 1e-12);
    assert!((comp.percent(b'G') - 20.0).abs() < 1e-12);
    assert!((comp.percent(b'T') - 20.0).abs() < 1e-12);
    assert!((comp.percent_cg() - 40.0).abs() < 1e-12);
}

#[test]
fn degenerate_sequences_are_rejected() {
    for input in [&b""[..], &b"xyz 123!"[..], &b"acgt"[..], &b"NNNNN"[..]] {
        let err = Composition::analyze(input).unwrap_err();
        assert_matches!(err.kind(), ErrorKind::DegenerateSequence);
    }
}

#[test]
fn non_alphabet_bytes_report_zero() {
    let comp = Composition::analyze(b"ACGT").unwrap();
    assert_eq!(comp.count(b'N'), 0);
    assert_eq!(comp.percent(b'N'), 0.0);
}
