use identigen_core::{generate, IdenticonParams, Symmetry};

#[test]
fn same_input_same_bytes() {
    for sym in Symmetry::ALL {
        for text in ["alice", "", "user-42", "ünïcødé ✓"] {
            let p = IdenticonParams::default().with_symmetry(sym).with_width(32);
            let a = generate(text, &p).unwrap();
            let b = generate(text, &p).unwrap();
            assert_eq!(a.rgb_bytes(), b.rgb_bytes(), "{text:?} {sym:?}");
            assert_eq!(a, b);
        }
    }
}

#[test]
fn calls_do_not_share_state() {
    let p = IdenticonParams::default();
    let first = generate("alice", &p).unwrap();
    let _ = generate("bob", &p).unwrap();
    let again = generate("alice", &p).unwrap();
    assert_eq!(first, again);
}

#[test]
fn concurrent_calls_agree_with_sequential() {
    let p = IdenticonParams::default().with_symmetry(Symmetry::Quarter);
    let texts: Vec<String> = (0..8).map(|i| format!("thread-{i}")).collect();
    let expected: Vec<Vec<u8>> = texts
        .iter()
        .map(|t| generate(t, &p).unwrap().rgb_bytes())
        .collect();

    let got: Vec<Vec<u8>> = std::thread::scope(|s| {
        let handles: Vec<_> = texts
            .iter()
            .map(|t| {
                let p = p.clone();
                s.spawn(move || generate(t, &p).unwrap().rgb_bytes())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(got, expected);
}

#[test]
fn distinct_inputs_do_not_collide() {
    let p = IdenticonParams::default();
    let mut seen = std::collections::HashSet::new();
    for i in 0..200 {
        let id = generate(&format!("user{i}"), &p).unwrap();
        assert!(seen.insert(id.rgb_bytes()), "collision at user{i}");
    }
}
