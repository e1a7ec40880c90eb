use rand::prelude::*;

use minitrees::prelude::*;


const COLORS: [&str; 4] = ["Red", "Green", "Yellow", "Blue"];
const LABELS: [&str; 3] = ["Apple", "Grape", "Lemon"];


/// Random rows `[color, size, label]`.
fn random_sample(rng: &mut StdRng, n_sample: usize) -> Sample {
    let rows = (0..n_sample)
        .map(|_| {
            let color = COLORS[rng.gen_range(0..COLORS.len())];
            let size: i32 = rng.gen_range(0..6);
            let label = LABELS[rng.gen_range(0..LABELS.len())];
            vec![color.into(), size.into(), label.into()]
        })
        .collect::<Vec<_>>();
    Sample::from_rows(rows).unwrap()
}


#[test]
fn rule_evaluation() {
    let row = vec![Value::from("Red"), Value::from(3)];

    let rule = Splitter::new(1, Value::from(3));
    assert_eq!(rule.operator(), ">=");
    assert!(rule.matches(&row).unwrap());
    assert!(!Splitter::new(1, Value::from(3.5)).matches(&row).unwrap());

    let rule = Splitter::new(0, Value::from("Red"));
    assert_eq!(rule.operator(), "==");
    assert!(rule.matches(&row).unwrap());
    assert!(!Splitter::new(0, Value::from("Green")).matches(&row).unwrap());

    let names = vec!["color".to_string(), "diameter".to_string()];
    assert_eq!(rule.describe(&names), "Is color == Red?");
    assert_eq!(
        Splitter::new(1, Value::from(3)).describe(&names),
        "Is diameter >= 3?"
    );
    assert_eq!(rule.to_string(), "column 0 == Red");
}


#[test]
fn rule_evaluation_errors() {
    let row = vec![Value::from("Red"), Value::from(3)];

    let result = Splitter::new(2, Value::from(1)).matches(&row);
    assert!(matches!(result, Err(TreeError::InvalidInput(_))));

    let result = Splitter::new(0, Value::from(1)).matches(&row);
    assert!(matches!(result, Err(TreeError::TypeMismatch(0, _, _))));

    let result = Splitter::new(1, Value::from("Red")).matches(&row);
    assert!(matches!(result, Err(TreeError::TypeMismatch(1, _, _))));
}


#[test]
fn partition_keeps_order() {
    let rows = vec![
        vec!["Green".into(),  3.into(), "Apple".into()],
        vec!["Yellow".into(), 3.into(), "Apple".into()],
        vec!["Red".into(),    1.into(), "Grape".into()],
        vec!["Red".into(),    1.into(), "Grape".into()],
        vec!["Yellow".into(), 3.into(), "Lemon".into()],
    ];
    let sample = Sample::from_rows(rows).unwrap();

    let rule = Splitter::new(0, Value::from("Red"));
    let (t, f) = partition(&sample, &[4, 3, 2, 1, 0], &rule).unwrap();
    assert_eq!(t, vec![3, 2]);
    assert_eq!(f, vec![4, 1, 0]);

    let (t, f) = partition(&sample, &[], &rule).unwrap();
    assert!(t.is_empty() && f.is_empty());
}


#[test]
fn partition_on_random_samples() {
    let mut rng = StdRng::seed_from_u64(1234);

    for _ in 0..20 {
        let n_sample = rng.gen_range(1..40);
        let sample = random_sample(&mut rng, n_sample);
        let indices = (0..n_sample).collect::<Vec<_>>();

        let rules = [
            Splitter::new(0, Value::from(COLORS[rng.gen_range(0..4)])),
            Splitter::new(1, Value::from(rng.gen_range(0..6_i32))),
        ];
        for rule in rules {
            let (t, f) = partition(&sample, &indices, &rule).unwrap();
            assert_eq!(t.len() + f.len(), n_sample);

            for &i in &t {
                assert!(rule.matches(&sample[i]).unwrap());
            }
            for &i in &f {
                assert!(!rule.matches(&sample[i]).unwrap());
            }

            let mut merged = [t, f].concat();
            merged.sort();
            assert_eq!(merged, indices);
        }
    }
}


#[test]
fn best_splits_on_random_samples() {
    let mut rng = StdRng::seed_from_u64(5678);

    for _ in 0..20 {
        let n_sample = rng.gen_range(2..40);
        let sample = random_sample(&mut rng, n_sample);
        let indices = (0..n_sample).collect::<Vec<_>>();

        let (gain, rule) = Criterion::Gini.best_split(&sample, &indices, 0.0)
            .unwrap();
        if let Some(rule) = rule {
            assert!(gain > 0.0);
            let (t, f) = partition(&sample, &indices, &rule).unwrap();
            assert!(!t.is_empty());
            assert!(!f.is_empty());
        } else {
            assert_eq!(gain, 0.0);
        }

        // Every training row reaches a leaf, and
        // the leaves count every row once.
        let f = build_tree(&sample).unwrap();
        let total = count_rows(f.root());
        assert_eq!(total, n_sample);
        for i in 0..n_sample {
            f.predict(&sample[i]).unwrap();
        }
    }
}


fn count_rows(node: &Node<ClassDistribution>) -> usize {
    match node {
        Node::Branch { true_branch, false_branch, .. } => {
            count_rows(true_branch) + count_rows(false_branch)
        },
        Node::Leaf(dist) => dist.total(),
    }
}
