//! One frozen automaton scanned from several threads at once.

use std::sync::{Arc, Barrier};
use std::thread;

use dictlink::Automaton;

#[test]
fn test_parallel_scans() {
    let patterns: Vec<String> = (0..200).map(|i| format!("term{}", i)).collect();
    let automaton = Arc::new(Automaton::build(patterns));

    const NUM_READERS: usize = 8;
    let barrier = Arc::new(Barrier::new(NUM_READERS));

    let handles: Vec<_> = (0..NUM_READERS)
        .map(|i| {
            let automaton = Arc::clone(&automaton);
            let barrier = Arc::clone(&barrier);

            thread::spawn(move || {
                barrier.wait();

                let text = format!("xx term{} yy", i * 10);
                automaton.scan(text.chars())
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let found = handle.join().unwrap();
        let mut names: Vec<String> = found
            .iter()
            .map(|m| automaton.pattern(m.pattern()).clone())
            .collect();
        names.sort_unstable();

        // "term10" also contains "term1"; "term0" has no shorter pattern inside.
        let n = i * 10;
        let mut expected = vec![format!("term{}", n)];
        if n > 0 {
            expected.push(format!("term{}", n / 10));
        }
        expected.sort_unstable();

        assert_eq!(names, expected);
    }
}

#[test]
fn independent_searchers_share_one_automaton() {
    let automaton = Automaton::build(["ab", "b"]);

    thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                let mut searcher = automaton.searcher();
                let total: usize = "abab".chars().map(|c| searcher.next(&c).count()).sum();
                assert_eq!(total, 4);
            });
        }
    });
}
