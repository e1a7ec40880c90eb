use approx::assert_relative_eq;

use minitrees::prelude::*;
use minitrees::regression_tree::regression_score;


/// A sample with a single numeric feature `x` and target `y`.
fn xy(xs: &[f64], ys: &[f64]) -> Sample {
    let rows = xs.iter()
        .zip(ys)
        .map(|(&x, &y)| vec![Value::from(x), Value::from(y)])
        .collect::<Vec<_>>();
    Sample::from_rows(rows)
        .unwrap()
        .set_header(["x"])
        .unwrap()
        .set_target_name("y")
}


// Toy example: a staircase.
//
//   x | 0  1  2  3  4  5  6  7
//  ---+------------------------
//   y | 0  0 10 10 20 20 30 30
fn staircase() -> Sample {
    let xs = (0..8).map(|x| x as f64).collect::<Vec<_>>();
    let ys = [0.0, 0.0, 10.0, 10.0, 20.0, 20.0, 30.0, 30.0];
    xy(&xs, &ys)
}


#[test]
fn score_of_two_sides() {
    // left mean 2, right mean 12.
    assert_eq!(regression_score(&[1.0, 3.0], &[10.0, 14.0]), 10.0);
    assert_eq!(regression_score(&[5.0], &[5.0, 5.0]), 0.0);
    assert_eq!(regression_score(&[], &[]), 0.0);
}


#[test]
fn best_split_separates_levels() {
    let sample = xy(&[1.0, 2.0, 3.0, 4.0], &[1.0, 1.0, 5.0, 5.0]);

    let split = LossType::L2.best_split(&sample, &[0, 1, 2, 3])
        .unwrap()
        .unwrap();
    assert_eq!(split.rule, Splitter::new(0, Value::from(3)));
    assert_eq!(split.score, 0.0);
    assert_eq!(split.n_true, 2);
    assert_eq!(split.n_false, 2);
}


#[test]
fn best_split_of_a_single_row() {
    let sample = xy(&[1.0, 2.0], &[1.0, 5.0]);

    let split = LossType::L2.best_split(&sample, &[1]).unwrap();
    assert!(split.is_none());

    let result = LossType::L2.best_split(&sample, &[]);
    assert!(matches!(result, Err(TreeError::InvalidInput(_))));
}


#[test]
fn ties_go_to_the_latest_column() {
    let rows = vec![
        vec![1.into(), 1.into(), 0.into()],
        vec![2.into(), 2.into(), 10.into()],
    ];
    let sample = Sample::from_rows(rows).unwrap();

    let split = LossType::L2.best_split(&sample, &[0, 1])
        .unwrap()
        .unwrap();
    assert_eq!(split.rule, Splitter::new(1, Value::from(2)));
    assert_eq!(split.score, 0.0);
}


#[test]
fn staircase_tree() {
    let sample = staircase();
    let f = build_regression_tree(&sample).unwrap();
    println!("{f}");

    let Node::Branch { rule, true_branch, false_branch } = f.root() else {
        panic!("The root must be a branch");
    };
    assert_eq!(rule, &Splitter::new(0, Value::from(4)));
    assert!(!true_branch.is_leaf());
    assert!(!false_branch.is_leaf());

    assert_eq!(f.depth(), 2);
    assert_eq!(f.n_leaves(), 4);

    for (x, y) in [(0, 0.0), (3, 10.0), (5, 20.0), (7, 30.0)] {
        let row = vec![Value::from(x)];
        assert_eq!(f.predict(&row).unwrap(), y);
    }

    let predictions = f.predict_all(&sample).unwrap();
    assert_eq!(
        predictions,
        vec![0.0, 0.0, 10.0, 10.0, 20.0, 20.0, 30.0, 30.0]
    );
}


#[test]
fn small_sides_stop_the_growth() {
    let sample = xy(&[1.0, 2.0, 3.0], &[0.0, 0.0, 9.0]);

    // The best rule `x >= 3` keeps a single row on its true side.
    let f = build_regression_tree(&sample).unwrap();
    let Node::Leaf(summary) = f.root() else {
        panic!("The root must be a leaf");
    };
    assert_eq!(summary.prediction, 3.0);
    assert_eq!(summary.mean, 3.0);
    assert_eq!(summary.n_sample, 3);
    assert_relative_eq!(summary.variance, 18.0, epsilon = 1e-12);


    let f = RegressionTreeBuilder::new()
        .min_samples(1)
        .build()
        .fit(&sample)
        .unwrap();
    assert_eq!(f.depth(), 1);
    assert_eq!(f.n_leaves(), 2);
    assert_eq!(f.predict(&[Value::from(3)]).unwrap(), 9.0);
    assert_eq!(f.predict(&[Value::from(1)]).unwrap(), 0.0);
}


#[test]
fn constant_target_makes_a_leaf() {
    let sample = xy(&[1.0, 2.0, 3.0, 4.0], &[7.0; 4]);

    let f = build_regression_tree(&sample).unwrap();
    assert!(f.root().is_leaf());

    let summary = f.summary(&[Value::from(100)]).unwrap();
    assert_eq!(summary.prediction, 7.0);
    assert_eq!(summary.variance, 0.0);
    assert_eq!(summary.n_sample, 4);
}


#[test]
fn inexact_constant_target_makes_a_leaf() {
    // The mean of equal targets such as `0.1` is not exact,
    // so the loss of these rows is a rounding residue.
    for c in [0.1, 1.1, 3.3] {
        for n in 2..40 {
            let xs = (0..n).map(|x| x as f64).collect::<Vec<_>>();
            let ys = vec![c; n];
            let sample = xy(&xs, &ys);

            let f = build_regression_tree(&sample).unwrap();
            assert!(
                f.root().is_leaf(),
                "{n} rows of {c} grew {} leaves", f.n_leaves()
            );
            assert_relative_eq!(
                f.predict(&[Value::from(0)]).unwrap(), c, epsilon = 1e-12
            );

            for loss in [LossType::L1, LossType::L2] {
                let f = RegressionTreeBuilder::new()
                    .loss(loss)
                    .min_samples(1)
                    .build()
                    .fit(&sample)
                    .unwrap();
                assert!(f.root().is_leaf());
            }
        }
    }
}


#[test]
fn tolerance_scales_with_targets() {
    assert_eq!(LossType::L2.tolerance(&[0.0, 0.0]), 0.0);
    assert_eq!(LossType::L2.tolerance(&[3.0, 4.0]), 25.0 * f64::EPSILON);
    assert_eq!(LossType::L1.tolerance(&[3.0, -4.0]), 7.0 * f64::EPSILON);
}


#[test]
fn absolute_loss_predicts_the_median() {
    let targets = [1.0, 2.0, 100.0];
    assert_eq!(LossType::L1.prediction(&targets), 2.0);
    assert_relative_eq!(LossType::L2.prediction(&targets), 103.0 / 3.0);
    assert_eq!(LossType::L1.prediction(&[1.0, 2.0, 3.0, 10.0]), 2.5);
    assert_eq!(LossType::L1.loss(&targets), 99.0);

    let sample = xy(&[1.0, 2.0, 3.0], &targets);
    let f = RegressionTreeBuilder::new()
        .loss(LossType::L1)
        .min_samples(3)
        .build()
        .fit(&sample)
        .unwrap();

    let summary = f.summary(&[Value::from(1)]).unwrap();
    assert_eq!(summary.prediction, 2.0);
    assert_relative_eq!(summary.mean, 103.0 / 3.0);
}


#[test]
fn max_depth_bounds_the_tree() {
    let sample = staircase();
    let tree = RegressionTreeBuilder::new()
        .max_depth(1)
        .build();
    println!("{tree}");
    let f = tree.fit(&sample).unwrap();

    assert_eq!(f.depth(), 1);
    assert_eq!(f.n_leaves(), 2);
    assert_eq!(f.predict(&[Value::from(7)]).unwrap(), 25.0);
    assert_eq!(f.predict(&[Value::from(0)]).unwrap(), 5.0);
}


#[test]
fn depth_limit_keeps_every_row() {
    let sample = staircase();
    for max_depth in 1..=3 {
        let f = RegressionTreeBuilder::new()
            .max_depth(max_depth)
            .min_samples(1)
            .build()
            .fit(&sample)
            .unwrap();
        assert!(f.depth() <= max_depth);
        assert_eq!(count_rows(f.root()), 8);
    }
}


fn count_rows(node: &Node<LeafSummary>) -> usize {
    match node {
        Node::Branch { true_branch, false_branch, .. } => {
            count_rows(true_branch) + count_rows(false_branch)
        },
        Node::Leaf(summary) => summary.n_sample,
    }
}


#[test]
fn categorical_target_is_a_type_mismatch() {
    let rows = vec![
        vec![1.into(), "a".into()],
        vec![2.into(), "b".into()],
    ];
    let sample = Sample::from_rows(rows).unwrap();

    let result = build_regression_tree(&sample);
    assert!(matches!(result, Err(TreeError::TypeMismatch(1, _, _))));

    let result = LossType::L2.best_split(&sample, &[0, 1]);
    assert!(matches!(result, Err(TreeError::TypeMismatch(1, _, _))));
}


#[test]
fn empty_sample_is_rejected() {
    let sample = Sample::from_rows(Vec::new()).unwrap();
    let result = build_regression_tree(&sample);
    assert!(matches!(result, Err(TreeError::InvalidInput(_))));
}


#[test]
fn render_and_dot() {
    let xs = (0..8).map(|x| x as f64).collect::<Vec<_>>();
    let ys = xs.iter()
        .map(|&x| if x < 4.0 { 1.0 } else { 5.0 })
        .collect::<Vec<_>>();
    let f = build_regression_tree(&xy(&xs, &ys)).unwrap();

    let expected = "\
Is x >= 4?
--> True:
    Predict 5.0000 (n = 4, variance = 0.0000)
--> False:
    Predict 1.0000 (n = 4, variance = 0.0000)
";
    assert_eq!(f.render(), expected);

    let dot = f.to_dot();
    assert!(dot.starts_with("graph RegressionTree {"));
    assert!(dot.contains("node_0 [ label = \"Is x >= 4?\" ];"));
    assert!(dot.contains("node_0 -- node_1 [ label = \"True\" ];"));
    assert!(dot.contains("node_0 -- node_2 [ label = \"False\" ];"));
}
