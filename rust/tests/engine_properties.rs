use bstindex::{IndexEngine, Record};
use proptest::prelude::*;
use std::collections::BTreeMap;

const NAMES: &[&str] = &[
    "Lee", "lee", "LEE", "Kim", "Kimura", "Oh", "O'Neil", "Park", "Smith", "smith", "Smyth",
    "Müller", "Mueller", "ΑΣΑ", "Ασος", "ΟΔΥΣΣΕΑΣ",
];

const PREFIXES: &[&str] = &[
    "", "k", "KI", "kimu", "l", "o", "o'", "s", "sm", "SMI", "smy", "m", "mü", "z", "ΑΣ", "ασ",
    "ΟΔΥΣ",
];

#[derive(Clone, Debug)]
enum Op {
    Insert(i32, &'static str),
    Delete(i32),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0..40i32, prop::sample::select(NAMES)).prop_map(|(id, last)| Op::Insert(id, last)),
        1 => (0..40i32).prop_map(Op::Delete),
    ]
}

/// Live rows keyed by id, each with its last name and insertion sequence.
type Model = BTreeMap<i32, (&'static str, usize)>;

fn fold(name: &str) -> String {
    name.chars().flat_map(char::to_lowercase).collect()
}

fn apply(engine: &mut IndexEngine, model: &mut Model, ops: &[Op]) {
    let mut sequence = 0usize;
    for op in ops {
        match *op {
            Op::Insert(id, last) => {
                assert_eq!(engine.insert(Record::new(id, "", last)), id);
                model.entry(id).or_insert_with(|| {
                    sequence += 1;
                    (last, sequence)
                });
            }
            Op::Delete(id) => {
                assert_eq!(engine.delete_by_id(id), model.remove(&id).is_some());
            }
        }
    }
}

proptest! {
    #[test]
    fn prop_range_matches_model(
        ops in prop::collection::vec(op_strategy(), 0..200),
        lo in -5..45i32,
        hi in -5..45i32,
    ) {
        let mut engine = IndexEngine::new();
        let mut model = Model::new();
        apply(&mut engine, &mut model, &ops);

        prop_assert!(engine.check_consistency().is_ok());
        prop_assert_eq!(engine.len(), model.len());

        let expected: Vec<i32> = if lo <= hi {
            model.range(lo..=hi).map(|(&id, _)| id).collect()
        } else {
            Vec::new()
        };
        prop_assert_eq!(engine.range_by_id(lo, hi).ids(), expected);
    }

    #[test]
    fn prop_prefix_matches_model(
        ops in prop::collection::vec(op_strategy(), 0..200),
        prefix in prop::sample::select(PREFIXES),
    ) {
        let mut engine = IndexEngine::new();
        let mut model = Model::new();
        apply(&mut engine, &mut model, &ops);

        let folded = fold(prefix);
        let mut expected: Vec<(String, usize, i32)> = model
            .iter()
            .map(|(&id, &(last, seq))| (fold(last), seq, id))
            .filter(|(name, _, _)| name.starts_with(&folded))
            .collect();
        expected.sort();
        let expected: Vec<i32> = expected.into_iter().map(|(_, _, id)| id).collect();

        prop_assert_eq!(engine.prefix_by_last(prefix).ids(), expected);
    }

    #[test]
    fn prop_find_after_delete_is_absent(
        ops in prop::collection::vec(op_strategy(), 1..100),
        victim in 0..40i32,
    ) {
        let mut engine = IndexEngine::new();
        let mut model = Model::new();
        apply(&mut engine, &mut model, &ops);

        let was_live = engine.find_by_id(victim).is_found();
        prop_assert_eq!(engine.delete_by_id(victim), was_live);
        prop_assert!(!engine.find_by_id(victim).is_found());
        prop_assert!(!engine.range_by_id(victim, victim).ids().contains(&victim));
        prop_assert!(!engine.prefix_by_last("").ids().contains(&victim));
        prop_assert!(engine.check_consistency().is_ok());
    }
}
