//! Shared fixtures for the integration tests.
#![allow(dead_code)]
use minipmml::*;
use rand::prelude::*;


/// Label `y` with classes `0` and `1`, one continuous feature `x1`.
pub fn stump_schema() -> Schema {
    let label = CategoricalLabel::new("y", DataType::Integer, [0i64, 1]);
    let features = vec![
        ContinuousFeature::new("x1", DataType::Double).into(),
    ];
    Schema::new(label, features)
}


/// Label `y` with classes `0` and `1`,
/// continuous features `x1` and `x2`.
pub fn class_schema() -> Schema {
    let label = CategoricalLabel::new("y", DataType::Integer, [0i64, 1]);
    let features = vec![
        ContinuousFeature::new("x1", DataType::Double).into(),
        ContinuousFeature::new("x2", DataType::Double).into(),
    ];
    Schema::new(label, features)
}


/// Continuous label `y`, continuous features `x1` and `x2`.
pub fn regression_schema() -> Schema {
    let label = ContinuousLabel::new("y", DataType::Double);
    let features = vec![
        ContinuousFeature::new("x1", DataType::Double).into(),
        ContinuousFeature::new("x2", DataType::Double).into(),
    ];
    Schema::new(label, features)
}


/// `x1 <= 0.5` sends 12 records (10 of class 0) left
/// and 10 records (9 of class 1) right.
pub fn stump() -> ArrayTree {
    ArrayTree::new(
        vec![1, -1, -1],
        vec![2, -1, -1],
        vec![0, -2, -2],
        vec![0.5, -2.0, -2.0],
        vec![11.0, 11.0, 10.0, 2.0, 1.0, 9.0],
    )
}


/// ```text
/// 0: x1 <= 0.5
/// ├── 1: x2 <= 0.5
/// │   ├── 2: [5, 1]
/// │   └── 3: [5, 1]
/// └── 4: x1 <= 0.25   (left side unreachable)
///     ├── 5: [3, 0]
///     └── 6: [1, 6]
/// ```
pub fn depth_two() -> ArrayTree {
    ArrayTree::new(
        vec![1, 2, -1, -1, 5, -1, -1],
        vec![4, 3, -1, -1, 6, -1, -1],
        vec![0, 1, -2, -2, 0, -2, -2],
        vec![0.5, 0.5, -2.0, -2.0, 0.25, -2.0, -2.0],
        vec![
            14.0, 8.0,
            10.0, 2.0,
            5.0, 1.0,
            5.0, 1.0,
            4.0, 6.0,
            3.0, 0.0,
            1.0, 6.0,
        ],
    )
}


/// The same shape as `depth_two`, with one value per node.
pub fn depth_two_regressor() -> ArrayTree {
    ArrayTree::new(
        vec![1, 2, -1, -1, 5, -1, -1],
        vec![4, 3, -1, -1, 6, -1, -1],
        vec![0, 1, -2, -2, 0, -2, -2],
        vec![0.5, 0.5, -2.0, -2.0, 0.25, -2.0, -2.0],
        vec![1.5, 1.0, 1.0, 1.0, 2.0, 3.0, 2.5],
    )
}


/// Returns a row with the given `(field, value)` pairs.
pub fn row<const N: usize>(pairs: [(&str, f64); N]) -> Row {
    pairs.into_iter()
        .map(|(k, v)| (k.to_string(), Value::Double(v)))
        .collect()
}


/// Values that hit every threshold used by `random_tree` exactly
/// as well as the gaps between them.
pub const GRID: [f64; 7] = [0.1, 0.25, 0.3, 0.5, 0.6, 0.75, 0.9];


/// Returns a random full row over features `x1..=x{n_features}`.
pub fn random_row<R: Rng>(rng: &mut R, n_features: usize) -> Row {
    (0..n_features)
        .map(|i| {
            let v = *GRID.choose(rng).unwrap();
            (format!("x{}", i + 1), Value::Double(v))
        })
        .collect()
}


/// Continuous features `x1..=x{n_features}` and classes `0..n_classes`.
pub fn random_schema(n_features: usize, n_classes: usize) -> Schema {
    let classes = (0..n_classes as i64).collect::<Vec<_>>();
    let label = CategoricalLabel::new("y", DataType::Integer, classes);
    let features = (0..n_features)
        .map(|i| ContinuousFeature::new(format!("x{}", i + 1), DataType::Double).into())
        .collect();
    Schema::new(label, features)
}


/// Returns a random classification tree.
/// Thresholds are exact in single precision
/// and leaf counts are drawn from a small pool,
/// so uniform subtrees and contradicting paths are common.
pub fn random_tree<R: Rng>(
    rng: &mut R,
    n_features: usize,
    n_classes: usize,
    max_depth: usize,
) -> ArrayTree
{
    let thresholds = vec![vec![0.25, 0.5, 0.75]; n_features];
    random_tree_over(rng, &thresholds, n_classes, max_depth)
}


/// Continuous `x1`, binary `color == "red"`
/// and ordinal categorical `c` over `a..=d`, classes `0` and `1`.
pub fn mixed_schema() -> Schema {
    let label = CategoricalLabel::new("y", DataType::Integer, [0i64, 1]);
    let features = vec![
        ContinuousFeature::new("x1", DataType::Double).into(),
        BinaryFeature::new("color", "red").into(),
        ThresholdFeature::ordinal("c", ["a", "b", "c", "d"], None).into(),
    ];
    Schema::new(label, features)
}


/// Returns a random tree over `mixed_schema`.
pub fn random_mixed_tree<R: Rng>(rng: &mut R, max_depth: usize) -> ArrayTree {
    let thresholds = [
        vec![0.25, 0.5, 0.75],
        vec![0.5],
        vec![0.5, 1.5, 2.5],
    ];
    random_tree_over(rng, &thresholds, 2, max_depth)
}


/// Every row over `mixed_schema` with `x1` drawn from `GRID`.
pub fn mixed_rows() -> Vec<Row> {
    let mut rows = Vec::new();
    for x1 in GRID {
        for color in ["red", "blue"] {
            for c in ["a", "b", "c", "d"] {
                let row = [
                    ("x1".to_string(), Value::Double(x1)),
                    ("color".to_string(), Value::from(color)),
                    ("c".to_string(), Value::from(c)),
                ];
                rows.push(row.into_iter().collect());
            }
        }
    }
    rows
}


/// Returns a random classification tree
/// splitting feature `i` on one of `thresholds[i]`.
pub fn random_tree_over<R: Rng>(
    rng: &mut R,
    thresholds: &[Vec<f64>],
    n_classes: usize,
    max_depth: usize,
) -> ArrayTree
{
    let pool = (0..3)
        .map(|_| (0..n_classes).map(|_| rng.gen_range(0..5) as f64).collect::<Vec<_>>())
        .collect::<Vec<_>>();

    let mut buffers = Buffers::default();
    grow(rng, &pool, thresholds, max_depth, &mut buffers);

    let Buffers { left, right, feature, threshold, values } = buffers;
    ArrayTree::new(left, right, feature, threshold, values)
}


#[derive(Default)]
struct Buffers {
    left: Vec<i64>,
    right: Vec<i64>,
    feature: Vec<i64>,
    threshold: Vec<f64>,
    values: Vec<f64>,
}


fn grow<R: Rng>(
    rng: &mut R,
    pool: &[Vec<f64>],
    thresholds: &[Vec<f64>],
    depth: usize,
    buffers: &mut Buffers,
) -> usize
{
    let index = buffers.left.len();
    buffers.left.push(-1);
    buffers.right.push(-1);

    if depth == 0 || rng.gen_bool(0.2) {
        buffers.feature.push(-2);
        buffers.threshold.push(-2.0);
        buffers.values.extend(pool.choose(rng).unwrap());
        return index;
    }

    let feature = rng.gen_range(0..thresholds.len());
    buffers.feature.push(feature as i64);
    buffers.threshold.push(*thresholds[feature].choose(rng).unwrap());
    // Branch rows are never read for classification.
    buffers.values.extend(std::iter::repeat(0.0).take(pool[0].len()));

    let l = grow(rng, pool, thresholds, depth - 1, buffers);
    let r = grow(rng, pool, thresholds, depth - 1, buffers);
    buffers.left[index] = l as i64;
    buffers.right[index] = r as i64;

    index
}
