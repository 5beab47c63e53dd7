use automata::{NFADesign, Rule, Rulebook, StateAllocator};

/// `a(b|ε)` written out by hand: q0 --a--> q1, q1 --b--> q2, q1 --ε--> q2.
fn ab_optional() -> NFADesign<char> {
    let mut states = StateAllocator::new();
    let (q0, q1, q2) = (states.fresh(), states.fresh(), states.fresh());

    let rulebook = Rulebook::new(vec![
        Rule::symbol(q0, 'a', q1),
        Rule::symbol(q1, 'b', q2),
        Rule::epsilon(q1, q2),
    ]);
    NFADesign::new(q0, vec![q2].into_iter().collect(), rulebook).unwrap()
}

#[test]
fn test_accepts() {
    let design = ab_optional();

    assert!(design.accepts("a".chars()));
    assert!(design.accepts("ab".chars()));
    assert!(!design.accepts("".chars()));
    assert!(!design.accepts("b".chars()));
    assert!(!design.accepts("abb".chars()));
    assert_eq!(3, design.total_states());
}

#[test]
fn test_simulation_steps() {
    let design = ab_optional();
    let mut simulation = design.to_simulation();

    assert_eq!(1, simulation.current_states().len());
    assert!(!simulation.is_accepting());

    simulation.read_symbol('a');
    assert_eq!(2, simulation.current_states().len());
    assert!(simulation.is_accepting());

    simulation.read_symbol('b');
    assert_eq!(1, simulation.current_states().len());
    assert!(simulation.is_accepting());

    simulation.read_symbol('b');
    assert!(simulation.is_stuck());
    assert!(!simulation.is_accepting());
}

#[test]
fn test_read_all_stops_when_stuck() {
    let design = ab_optional();
    let mut simulation = design.to_simulation();

    simulation.read_all("xab".chars());
    assert!(simulation.is_stuck());
    assert!(!simulation.is_accepting());
}

#[test]
fn test_generic_symbols() {
    let mut states = StateAllocator::new();
    let (q0, q1) = (states.fresh(), states.fresh());

    let rulebook = Rulebook::new(vec![Rule::symbol(q0, 7u8, q1), Rule::symbol(q1, 7u8, q0)]);
    let design = NFADesign::new(q0, vec![q0].into_iter().collect(), rulebook).unwrap();

    assert!(design.accepts(vec![]));
    assert!(design.accepts(vec![7, 7]));
    assert!(!design.accepts(vec![7]));
    assert!(!design.accepts(vec![7, 8]));
}

#[test]
fn test_accepts_does_not_leak_state() {
    let design = ab_optional();
    let inputs = ["ab", "b", "a", "", "abb", "ab"];
    let expected: Vec<bool> = inputs.iter().map(|s| design.accepts(s.chars())).collect();

    for _ in 0..3 {
        for (input, &want) in inputs.iter().zip(expected.iter()).rev() {
            assert_eq!(want, design.accepts(input.chars()), "input {:?}", input);
        }
    }
}
