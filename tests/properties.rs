// tests/properties.rs

use proptest::prelude::*;
use qca::core::PHASE_ONE;
use qca::validation::{check_history_alignment, validate_lattice};
use qca::{Automaton, AutomatonSpec, Gate, Lattice, Pauli, Ruleset};

fn arbitrary_pauli() -> impl Strategy<Value = Pauli> {
    prop_oneof![Just(Pauli::I), Just(Pauli::X), Just(Pauli::Y), Just(Pauli::Z)]
}

fn arbitrary_offsets(reach: i64, max_len: usize) -> impl Strategy<Value = Vec<i64>> {
    prop::collection::btree_set(-reach..=reach, 0..=max_len).prop_map(|set| set.into_iter().collect())
}

prop_compose! {
    fn arbitrary_spec(reach: i64)(
        xtox in arbitrary_offsets(reach, 3),
        xtoz in arbitrary_offsets(reach, 3),
        ztox in arbitrary_offsets(reach, 3),
        ztoz in arbitrary_offsets(reach, 3),
    ) -> AutomatonSpec {
        AutomatonSpec::new(xtox, xtoz, ztox, ztoz).expect("btree sets are strictly ascending")
    }
}

prop_compose! {
    fn arbitrary_config(max_len: usize)(symbols in prop::collection::vec(arbitrary_pauli(), 1..=max_len)) -> Vec<Gate> {
        symbols.into_iter().map(Gate::new).collect()
    }
}

proptest! {
    #[test]
    fn combination_is_closed_and_commutative(a in arbitrary_pauli(), b in arbitrary_pauli()) {
        let (ab, phase_ab) = a.combine(b);
        let (ba, phase_ba) = b.combine(a);
        assert_eq!(ab, ba);
        assert_eq!(phase_ab, phase_ba);
        assert!((phase_ab.norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn identity_is_neutral_and_symbols_self_inverse(a in arbitrary_pauli()) {
        assert_eq!(Pauli::I.combine(a), (a, PHASE_ONE));
        assert_eq!(a.combine(a), (Pauli::I, PHASE_ONE));
    }

    #[test]
    fn ruleset_invariants(spec in arbitrary_spec(3)) {
        let ruleset = Ruleset::derive(&spec);
        assert_eq!(ruleset.rule(Pauli::I).symbols(), vec![Pauli::I]);
        assert_eq!(ruleset.rule(Pauli::I).origin(), 0);
        for p in Pauli::ALL {
            let rule = ruleset.rule(p);
            assert!(!rule.is_empty());
            assert!(rule.left_reach() + rule.right_reach() + 1 >= rule.len());
            assert!(rule.left_reach() <= ruleset.max_left_reach());
            assert!(rule.right_reach() <= ruleset.max_right_reach());
        }
        // The Y image covers both the X and the Z image.
        let y = ruleset.rule(Pauli::Y);
        let has_x = !spec.xtox().is_empty() || !spec.xtoz().is_empty();
        let has_z = !spec.ztox().is_empty() || !spec.ztoz().is_empty();
        for (p, present) in [(Pauli::X, has_x), (Pauli::Z, has_z)] {
            if !present {
                continue;
            }
            let rule = ruleset.rule(p);
            assert!(y.offset_of(0) <= rule.offset_of(0));
            assert!(y.offset_of(y.len() - 1) >= rule.offset_of(rule.len() - 1));
        }
    }

    #[test]
    fn evolution_keeps_entanglement_invariants(spec in arbitrary_spec(2), config in arbitrary_config(6), steps in 0usize..6) {
        let automaton = Automaton::new(spec);
        let mut lattice = Lattice::builder(&automaton).gates(config).entanglement(true).build();
        validate_lattice(&lattice).expect("initial lattice is consistent");
        let mut len = lattice.len();
        for _ in 0..steps {
            let (left, right) = lattice.step().expect("step succeeds");
            len += left + right;
            assert_eq!(lattice.len(), len);
            validate_lattice(&lattice).expect("lattice stays consistent");
        }
    }

    #[test]
    fn history_frames_share_one_width(spec in arbitrary_spec(2), config in arbitrary_config(5), steps in 0usize..5) {
        let automaton = Automaton::new(spec);
        let mut lattice = Lattice::builder(&automaton).gates(config).build();
        let history = lattice.iterate(steps).expect("iteration succeeds");
        assert_eq!(history.len(), steps + 1);
        check_history_alignment(&history, Some(lattice.len())).expect("frames are aligned");
        assert!(history.entanglement_series().iter().all(|&e| e == 0));
    }

    #[test]
    fn spec_survives_json(spec in arbitrary_spec(4)) {
        let json = serde_json::to_string(&spec).expect("spec serializes");
        assert_eq!(AutomatonSpec::from_json(&json).expect("spec parses"), spec);
    }
}
