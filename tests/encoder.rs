mod common;

use minipmml::*;
use minipmml::encoder::synthesize;
use common::*;


/// Tests for the single tree encoder.
#[cfg(test)]
pub mod encoder_tests {
    use super::*;

    fn simple(node: &Node) -> &SimplePredicate {
        match node.predicate().as_ref() {
            Predicate::Simple(p) => p,
            other => panic!("expected a simple predicate, got {other}"),
        }
    }


    fn simple_of(predicate: &Predicate) -> &SimplePredicate {
        match predicate {
            Predicate::Simple(p) => p,
            other => panic!("expected a simple predicate, got {other}"),
        }
    }


    fn category_set(node: &Node) -> Vec<Value> {
        match node.predicate().as_ref() {
            Predicate::CategorySet(p) => p.values.clone(),
            other => panic!("expected a category set, got {other}"),
        }
    }


    #[test]
    fn stump_classifier() {
        let estimator = TreeEstimator::new(stump());
        let schema = stump_schema();

        let tree = encode_tree_model(
            &estimator, MiningFunction::Classification, &schema
        ).unwrap();

        assert_eq!(SplitCharacteristic::BinarySplit, tree.split_characteristic);
        assert_eq!(Some("y"), tree.mining_schema.target());

        let root = &tree.root;
        assert!(root.predicate().is_true());
        assert_eq!(Some(0), root.id());
        assert_eq!(None, root.score());
        assert_eq!(2, root.children().len());


        let left = &root.children()[0];
        let p = simple(left);
        assert_eq!("x1", p.field);
        assert_eq!(Operator::LessOrEqual, p.operator);
        assert_eq!(Value::Double(0.5), p.value);

        let Node::Leaf(left) = left else { panic!("expected a leaf") };
        assert_eq!(Some(1), left.id);
        assert_eq!(Value::Integer(0), left.score);
        assert_eq!(Some(12.0), left.record_count);
        let counts = left.score_distributions.as_ref().unwrap()
            .iter()
            .map(|sd| (sd.value.clone(), sd.record_count))
            .collect::<Vec<_>>();
        assert_eq!(
            vec![(Value::Integer(0), 10.0), (Value::Integer(1), 2.0)],
            counts
        );


        let right = &root.children()[1];
        assert_eq!(Operator::GreaterThan, simple(right).operator);
        let Node::Leaf(right) = right else { panic!("expected a leaf") };
        assert_eq!(Value::Integer(1), right.score);
        assert_eq!(Some(10.0), right.record_count);
    }


    #[test]
    fn threshold_goes_through_single_precision() {
        let tree = ArrayTree::new(
            vec![1, -1, -1],
            vec![2, -1, -1],
            vec![0, -2, -2],
            vec![0.1, -2.0, -2.0],
            vec![11.0, 9.0, 10.0, 2.0, 1.0, 7.0],
        );
        let estimator = TreeEstimator::new(tree);

        let tree = encode_tree_model(
            &estimator, MiningFunction::Classification, &stump_schema()
        ).unwrap();

        let p = simple(&tree.root.children()[0]);
        assert_eq!(Value::Double(0.1f32 as f64), p.value);
    }


    #[test]
    fn value_buffer_mismatch() {
        let tree = ArrayTree::new(
            vec![1, -1, -1],
            vec![2, -1, -1],
            vec![0, -2, -2],
            vec![0.5, -2.0, -2.0],
            vec![11.0, 9.0, 10.0, 2.0, 1.0],
        );
        let estimator = TreeEstimator::new(tree);

        let err = encode_tree_model(
            &estimator, MiningFunction::Classification, &stump_schema()
        ).unwrap_err();

        assert!(matches!(
            err,
            ConversionError::SizeMismatch { expected: 6, actual: 5 }
        ));
    }


    #[test]
    fn first_maximum_wins() {
        let tree = ArrayTree::new(
            vec![1, -1, -1],
            vec![2, -1, -1],
            vec![0, -2, -2],
            vec![0.5, -2.0, -2.0],
            vec![8.0, 8.0, 4.0, 4.0, 4.0, 4.0],
        );
        let estimator = TreeEstimator::new(tree);

        let tree = encode_tree_model(
            &estimator, MiningFunction::Classification, &stump_schema()
        ).unwrap();

        for leaf in tree.root.children() {
            assert_eq!(Some(&Value::Integer(0)), leaf.score());
        }
    }


    #[test]
    fn binary_feature() {
        let label = CategoricalLabel::new("y", DataType::Integer, [0i64, 1]);
        let features = vec![BinaryFeature::new("color", "red").into()];
        let schema = Schema::new(label, features);

        let estimator = TreeEstimator::new(stump());
        let tree = encode_tree_model(
            &estimator, MiningFunction::Classification, &schema
        ).unwrap();

        let left = simple(&tree.root.children()[0]);
        let right = simple(&tree.root.children()[1]);
        assert_eq!(Operator::NotEqual, left.operator);
        assert_eq!(Operator::Equal, right.operator);
        assert_eq!(Value::from("red"), left.value);
        assert_eq!(Value::from("red"), right.value);
    }


    #[test]
    fn binary_feature_out_of_range() {
        let label = CategoricalLabel::new("y", DataType::Integer, [0i64, 1]);
        let features = vec![BinaryFeature::new("color", "red").into()];
        let schema = Schema::new(label, features);

        let tree = ArrayTree::new(
            vec![1, -1, -1],
            vec![2, -1, -1],
            vec![0, -2, -2],
            vec![1.5, -2.0, -2.0],
            vec![11.0, 9.0, 10.0, 2.0, 1.0, 7.0],
        );
        let estimator = TreeEstimator::new(tree);

        let err = encode_tree_model(
            &estimator, MiningFunction::Classification, &schema
        ).unwrap_err();

        assert!(matches!(err, ConversionError::InvalidSplit { .. }));
    }


    #[test]
    fn binary_threshold_bounds() {
        let feature = Feature::from(BinaryFeature::new("color", "red"));
        let predicates = PredicateManager::new();
        let categories = CategoryManager::new();

        for threshold in [0.0, 0.5, 1.0] {
            let split = synthesize(&feature, threshold, true, &categories, &predicates)
                .unwrap();
            assert_eq!(Operator::NotEqual, simple_of(&split.left).operator);
            assert_eq!(Operator::Equal, simple_of(&split.right).operator);
        }

        for threshold in [-0.1, 1.0 + f64::EPSILON, f64::NAN] {
            let err = synthesize(&feature, threshold, true, &categories, &predicates)
                .unwrap_err();
            assert!(
                matches!(err, ConversionError::InvalidSplit { .. }),
                "threshold = {threshold}"
            );
        }
    }


    #[test]
    fn categorical_missing_sentinel_is_dropped() {
        let feature = Feature::from(ThresholdFeature::new(
            "c",
            [("a", 0.0), ("?", 1.0), ("b", 2.0), ("c", 3.0)],
            Some(Value::from("?")),
        ));
        let predicates = PredicateManager::new();

        let split = synthesize(&feature, 1.5, false, &CategoryManager::new(), &predicates)
            .unwrap();

        let values = |p: &Predicate| match p {
            Predicate::CategorySet(p) => p.values.clone(),
            other => panic!("expected a category set, got {other}"),
        };
        assert_eq!(vec![Value::from("a")], values(split.left.as_ref()));
        assert_eq!(vec![Value::from("b"), Value::from("c")], values(split.right.as_ref()));
    }


    /// ```text
    /// 0: c <= 1.5
    /// ├── 1: c <= 0.5
    /// │   ├── 2
    /// │   └── 3
    /// └── 4
    /// ```
    fn nested_categorical() -> ArrayTree {
        ArrayTree::new(
            vec![1, 2, -1, -1, -1],
            vec![4, 3, -1, -1, -1],
            vec![0, 0, -2, -2, -2],
            vec![1.5, 0.5, -2.0, -2.0, -2.0],
            vec![2.0, 1.0, 1.0, 3.0, 4.0],
        )
    }


    fn categorical_schema(feature: ThresholdFeature) -> Schema {
        let label = ContinuousLabel::new("y", DataType::Double);
        Schema::new(label, vec![feature.into()])
    }


    #[test]
    fn categorical_splits_narrow() {
        let feature = ThresholdFeature::ordinal("c", ["a", "b", "c", "d"], None);
        let schema = categorical_schema(feature);

        let estimator = TreeEstimator::new(nested_categorical())
            .with_options(TreeOptions::new().numeric(false));
        let tree = encode_tree_model(
            &estimator, MiningFunction::Regression, &schema
        ).unwrap();

        let root = &tree.root;
        let inner = &root.children()[0];
        assert_eq!(vec![Value::from("a"), Value::from("b")], category_set(inner));
        assert_eq!(
            vec![Value::from("c"), Value::from("d")],
            category_set(&root.children()[1])
        );

        // Only the categories reachable under `inner` are split again.
        assert_eq!(vec![Value::from("a")], category_set(&inner.children()[0]));
        assert_eq!(vec![Value::from("b")], category_set(&inner.children()[1]));
    }


    #[test]
    fn categorical_missing_values_are_dropped() {
        let feature = ThresholdFeature::new(
            "c",
            [("a", 0.0), ("b", 1.0), ("?", f64::NAN), ("c", 2.0), ("d", 3.0)],
            None,
        );
        let schema = categorical_schema(feature);

        let estimator = TreeEstimator::new(nested_categorical())
            .with_options(TreeOptions::new().numeric(false));
        let tree = encode_tree_model(
            &estimator, MiningFunction::Regression, &schema
        ).unwrap();

        let mut seen = Vec::new();
        tree.root.for_each(&mut |node| {
            if let Predicate::CategorySet(p) = node.predicate().as_ref() {
                seen.extend(p.values.iter().cloned());
            }
        });
        assert!(!seen.contains(&Value::from("?")));
    }


    #[test]
    fn numeric_threshold_feature() {
        let feature = ThresholdFeature::ordinal("c", ["a", "b", "c", "d"], None);
        let schema = categorical_schema(feature);

        let estimator = TreeEstimator::new(nested_categorical());
        let tree = encode_tree_model(
            &estimator, MiningFunction::Regression, &schema
        ).unwrap();

        let p = simple(&tree.root.children()[0]);
        assert_eq!("c", p.field);
        assert_eq!(Value::Double(1.5), p.value);
    }


    #[test]
    fn regression_tree() {
        let estimator = TreeEstimator::new(depth_two_regressor());
        let tree = encode_tree_model(
            &estimator, MiningFunction::Regression, &regression_schema()
        ).unwrap();

        assert_eq!(7, tree.n_nodes());
        assert_eq!(Some(&Value::Double(1.5)), tree.root.score());

        let inner = &tree.root.children()[1];
        assert_eq!(Some(4), inner.id());
        assert_eq!(Some(&Value::Double(2.0)), inner.score());

        let x = row([("x1", 0.9), ("x2", 0.0)]);
        assert_eq!(Some(&Value::Double(2.5)), tree.score(&x));
    }


    #[test]
    fn regression_value_buffer_mismatch() {
        let tree = ArrayTree::new(
            vec![1, -1, -1],
            vec![2, -1, -1],
            vec![0, -2, -2],
            vec![0.5, -2.0, -2.0],
            vec![1.0, 2.0],
        );
        let estimator = TreeEstimator::new(tree);

        let err = encode_tree_model(
            &estimator, MiningFunction::Regression, &regression_schema()
        ).unwrap_err();

        assert!(matches!(
            err,
            ConversionError::SizeMismatch { expected: 3, actual: 2 }
        ));
    }


    #[test]
    fn malformed_trees() {
        let out_of_range = ArrayTree::new(
            vec![1, -1, -1],
            vec![7, -1, -1],
            vec![0, -2, -2],
            vec![0.5, -2.0, -2.0],
            vec![0.0; 6],
        );
        let cyclic = ArrayTree::new(
            vec![1, 0, -1],
            vec![2, 2, -1],
            vec![0, 0, -2],
            vec![0.5, 0.5, -2.0],
            vec![0.0; 6],
        );
        let unknown_feature = ArrayTree::new(
            vec![1, -1, -1],
            vec![2, -1, -1],
            vec![3, -2, -2],
            vec![0.5, -2.0, -2.0],
            vec![0.0; 6],
        );

        for tree in [out_of_range, cyclic, unknown_feature] {
            let estimator = TreeEstimator::new(tree);
            let err = encode_tree_model(
                &estimator, MiningFunction::Classification, &stump_schema()
            ).unwrap_err();
            assert!(matches!(err, ConversionError::MalformedArrayTree(_)));
        }
    }


    #[test]
    fn unsupported_mining_function() {
        let estimator = TreeEstimator::new(stump());
        let err = encode_tree_model(
            &estimator, MiningFunction::Clustering, &stump_schema()
        ).unwrap_err();

        assert!(matches!(
            err,
            ConversionError::UnsupportedMiningFunction(MiningFunction::Clustering)
        ));
    }


    #[test]
    fn feature_importances() {
        let estimator = TreeEstimator::new(depth_two())
            .with_feature_importances(vec![0.75, 0.25]);
        let tree = encode_tree_model(
            &estimator, MiningFunction::Classification, &class_schema()
        ).unwrap();

        let importances = tree.feature_importances.iter()
            .map(|fi| (fi.name.as_str(), fi.importance))
            .collect::<Vec<_>>();
        assert_eq!(vec![("x1", 0.75), ("x2", 0.25)], importances);


        let estimator = TreeEstimator::new(depth_two())
            .with_feature_importances(vec![1.0]);
        let err = encode_tree_model(
            &estimator, MiningFunction::Classification, &class_schema()
        ).unwrap_err();
        assert!(matches!(
            err,
            ConversionError::SizeMismatch { expected: 2, actual: 1 }
        ));
    }


    #[test]
    fn json_output() {
        let estimator = TreeEstimator::new(stump());
        let tree = encode_tree_model(
            &estimator, MiningFunction::Classification, &stump_schema()
        ).unwrap();

        let json: serde_json::Value = serde_json::from_str(&tree.to_json().unwrap())
            .unwrap();
        let leaf = &json["root"]["Branch"]["children"][0]["Leaf"];
        assert_eq!(serde_json::json!(12), leaf["record_count"]);
        assert_eq!(serde_json::json!(0), leaf["score"]);
    }
}
