use motivo_core::{bundled_quotes, Quote, QuotePicker};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn quote(id: &str) -> Quote {
    Quote {
        id: id.to_string(),
        text: format!("text for {id}"),
        author: None,
    }
}

#[test]
fn bundled_pool_parses_and_has_unique_ids() {
    let quotes = bundled_quotes().unwrap();
    assert!(!quotes.is_empty());

    let ids: HashSet<_> = quotes.iter().map(|quote| quote.id.as_str()).collect();
    assert_eq!(ids.len(), quotes.len());
    assert!(quotes.iter().all(|quote| !quote.text.is_empty()));
}

#[test]
fn single_quote_pool_always_returns_that_quote() {
    let mut picker = QuotePicker::new(vec![quote("only")]);
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..50 {
        assert_eq!(picker.next(&mut rng).unwrap().id, "only");
    }
}

#[test]
fn next_never_repeats_the_current_quote_on_larger_pools() {
    let mut picker = QuotePicker::new(vec![quote("a"), quote("b"), quote("c")]);
    let mut rng = StdRng::seed_from_u64(42);

    let mut current = picker.pick(&mut rng).unwrap().id.clone();
    for _ in 0..200 {
        let next = picker.next(&mut rng).unwrap().id.clone();
        assert_ne!(next, current);
        current = next;
    }
}

#[test]
fn empty_pool_yields_no_quote() {
    let mut picker = QuotePicker::new(Vec::new());
    let mut rng = StdRng::seed_from_u64(1);

    assert!(picker.pick(&mut rng).is_none());
    assert!(picker.next(&mut rng).is_none());
    assert!(picker.current().is_none());
}

#[test]
fn current_tracks_the_last_pick() {
    let mut picker = QuotePicker::new(vec![quote("a"), quote("b")]);
    let mut rng = StdRng::seed_from_u64(3);

    assert!(picker.current().is_none());
    let picked = picker.pick(&mut rng).unwrap().id.clone();
    assert_eq!(picker.current().unwrap().id, picked);
}
