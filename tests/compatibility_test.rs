use std::cell::Cell;
use std::cmp::Ordering;
use std::collections::HashMap;
use xsort::prelude::*;

// A collation table owned by the caller, the way a locale-aware comparison would be.
struct Collation {
    rank: HashMap<char, u8>,
}

impl Collation {
    fn new(alphabet: &str) -> Self {
        let rank = alphabet.chars().enumerate().map(|(i, c)| (c, i as u8)).collect();
        Self { rank }
    }

    fn key(&self, word: &str) -> Vec<u8> {
        word.chars().map(|c| self.rank[&c]).collect()
    }
}

// Stateful comparator implemented as a type rather than a closure.
struct CountingCollator<'c> {
    calls: &'c Cell<usize>,
}

impl<'w> Comparator<u64, (&'w Collation, &'w [&'w str])> for CountingCollator<'_> {
    fn compare(&mut self, a: &u64, b: &u64, ctx: &(&'w Collation, &'w [&'w str])) -> Ordering {
        self.calls.set(self.calls.get() + 1);
        let (collation, words) = *ctx;
        collation
            .key(words[*a as usize])
            .cmp(&collation.key(words[*b as usize]))
    }
}

#[test]
fn test_external_comparator_with_tuple_context() {
    // Reversed alphabet: "c" < "b" < "a".
    let collation = Collation::new("cba");
    let words = ["ab", "ca", "b", "cc", "a", "ba"];
    let mut handles: Vec<u64> = (0..words.len() as u64).collect();

    let calls = Cell::new(0);
    xsort_with(
        &mut handles,
        CountingCollator { calls: &calls },
        &(&collation, &words[..]),
    );

    let sorted: Vec<&str> = handles.iter().map(|&h| words[h as usize]).collect();
    assert_eq!(sorted, vec!["cc", "ca", "b", "ba", "a", "ab"]);
    assert!(calls.get() > 0);
}

#[test]
fn test_sorting_references() {
    #[derive(Debug, PartialEq)]
    struct Wide {
        id: u32,
        payload: [u8; 64],
    }

    let records: Vec<Wide> = (0..50u32)
        .map(|i| Wide { id: (i * 17) % 50, payload: [i as u8; 64] })
        .collect();
    let mut refs: Vec<&Wide> = records.iter().collect();

    xsort_by(&mut refs, |a, b| a.id.cmp(&b.id));

    let ids: Vec<u32> = refs.iter().map(|r| r.id).collect();
    assert_eq!(ids, (0..50).collect::<Vec<_>>());
    assert!(refs.iter().all(|r| r.payload.iter().all(|&p| p == r.payload[0])));
}

#[test]
fn test_sorting_raw_handles() {
    let values = [30u64, 10, 20, 50, 40, 0, 60, 70, 5];
    let mut ptrs: Vec<*const u64> = values.iter().map(|v| v as *const u64).collect();

    // SAFETY: every pointer refers into `values`, which outlives the sort.
    xsort_by(&mut ptrs, |a, b| unsafe { (**a).cmp(&**b) });

    let sorted: Vec<u64> = ptrs.iter().map(|&p| unsafe { *p }).collect();
    assert_eq!(sorted, vec![0, 5, 10, 20, 30, 40, 50, 60, 70]);
}

#[test]
fn test_str_context() {
    let text = "the quick brown fox";
    let mut positions: Vec<usize> = (0..text.len()).collect();

    xsort_ctx(
        &mut positions,
        |a, b, text: &str| text.as_bytes()[*a].cmp(&text.as_bytes()[*b]),
        text,
    );

    let sorted: String = positions.iter().map(|&p| text.as_bytes()[p] as char).collect();
    let mut expected: Vec<char> = text.chars().collect();
    expected.sort();
    assert_eq!(sorted, expected.into_iter().collect::<String>());

    // Spaces tie, so they keep their original positions in order.
    assert_eq!(&positions[..3], &[3, 9, 15]);
}
