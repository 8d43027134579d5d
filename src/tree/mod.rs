pub mod predict;
pub mod tree;

pub use predict::classify;
pub use tree::Tree;

// Unit-testing
#[cfg(test)]
mod tests {
    use crate::errors::Id3Error;
    use crate::export::{to_expression, to_predicate};
    use crate::config::PredicateOptions;
    use crate::node::Node;
    use crate::record::{Dataset, Record};
    use crate::splitter::{attribute_gain, InformationGainSplitter};
    use crate::tree::tree::Tree;
    use crate::utils::precision_round;

    fn mushrooms() -> Dataset {
        Dataset::from_csv_path("resources/mushrooms.csv", "Yes").expect("Something went wrong reading the file")
    }

    fn fit(ds: &Dataset) -> Tree {
        Tree::fit_dataset(ds, &InformationGainSplitter::default()).unwrap().unwrap()
    }

    #[test]
    fn test_calculate_information_gain() {
        let ds = mushrooms();
        let records: Vec<&Record> = ds.records().iter().collect();
        assert_eq!(precision_round(attribute_gain(&records, "odor").unwrap(), 6), 0.770426);
        assert_eq!(
            precision_round(attribute_gain(&records, "spore-print-color").unwrap(), 6),
            0.567068
        );
        assert_eq!(precision_round(attribute_gain(&records, "habitat").unwrap(), 6), 0.545975);
    }

    #[test]
    fn test_tree_main_attribute() {
        let tree = fit(&mushrooms());
        assert_eq!(tree.root.criterion(), Some("odor"));
        for odor in ["Pungent", "Creosote", "Foul", "Fishy", "Spicy", "Musty"] {
            assert_eq!(
                tree.root.get_child(odor),
                Some(&Node::leaf(false)),
                "mushrooms with odor {} should not be edible",
                odor
            );
        }
        for odor in ["Almond", "Anise"] {
            assert_eq!(tree.root.get_child(odor), Some(&Node::leaf(true)));
        }
    }

    #[test]
    fn test_tree_second_attribute() {
        let tree = fit(&mushrooms());
        let none = tree.root.get_child("None").unwrap();
        assert_eq!(none.criterion(), Some("spore-print-color"));
        for colour in ["Brown", "Black"] {
            assert_eq!(none.get_child(colour), Some(&Node::leaf(true)));
        }
        for colour in ["Green", "White"] {
            assert_eq!(none.get_child(colour), Some(&Node::leaf(false)));
        }
        assert_eq!(tree.depth, 2);
        assert_eq!(tree.n_leaves, 12);
    }

    #[test]
    fn test_branches_follow_first_occurrence() {
        let tree = fit(&mushrooms());
        let labels: Vec<&str> = tree.root.children().iter().map(|b| b.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Pungent", "Almond", "Anise", "None", "Foul", "Fishy", "Spicy", "Creosote", "Musty"]
        );
    }

    #[test]
    fn test_tree_fits_training_set() {
        let ds = mushrooms();
        let tree = fit(&ds);
        for record in ds.records() {
            assert_eq!(tree.classify(record).unwrap(), record.label);
        }
        assert_eq!(tree.predict(ds.records(), true).unwrap(), ds.labels());
    }

    #[test]
    fn test_parallel_fit_is_identical() {
        let ds = mushrooms();
        let parallel = Tree::fit_dataset(&ds, &InformationGainSplitter::new(true)).unwrap().unwrap();
        assert_eq!(parallel, fit(&ds));
    }

    #[test]
    fn test_tree_prediction() {
        let tree = fit(&mushrooms());
        assert!(tree.classify(&Record::new(false).with_attribute("odor", "Almond")).unwrap());
        let unseen = Record::new(true)
            .with_attribute("odor", "None")
            .with_attribute("spore-print-color", "Purple");
        assert!(!tree.classify(&unseen).unwrap());
        let unseen = Record::new(true).with_attribute("odor", "Sweet");
        assert!(!tree.classify(&unseen).unwrap());
    }

    #[test]
    fn test_prediction_missing_attribute() {
        let tree = fit(&mushrooms());
        let record = Record::new(true).with_attribute("odor", "None");
        assert!(matches!(
            tree.classify(&record),
            Err(Id3Error::MissingAttribute(a)) if a == "spore-print-color"
        ));
        assert!(tree.predict(&[record], false).is_err());
    }

    #[test]
    fn test_empty_records() {
        let ds = Dataset::new(vec!["odor".to_string()], Vec::new()).unwrap();
        assert!(Tree::fit_dataset(&ds, &InformationGainSplitter::default()).unwrap().is_none());
    }

    #[test]
    fn test_single_label_is_leaf() {
        let records = vec![
            Record::from_pairs(true, [("odor", "Almond")]),
            Record::from_pairs(true, [("odor", "Anise")]),
        ];
        let ds = Dataset::new(vec!["odor".to_string()], records).unwrap();
        let tree = fit(&ds);
        assert_eq!(tree.root, Node::leaf(true));
        assert_eq!(tree.depth, 0);
    }

    #[test]
    fn test_conflicting_records_terminate() {
        let records = vec![
            Record::from_pairs(true, [("odor", "None"), ("habitat", "Woods")]),
            Record::from_pairs(false, [("odor", "None"), ("habitat", "Woods")]),
            Record::from_pairs(false, [("odor", "None"), ("habitat", "Woods")]),
            Record::from_pairs(true, [("odor", "Almond"), ("habitat", "Woods")]),
        ];
        let ds = Dataset::new(vec!["habitat".to_string(), "odor".to_string()], records).unwrap();
        let tree = fit(&ds);
        assert_eq!(tree.root.criterion(), Some("odor"));
        assert_eq!(tree.root.get_child("None"), Some(&Node::leaf(false)));
        assert_eq!(tree.root.get_child("Almond"), Some(&Node::leaf(true)));
    }

    #[test]
    fn test_zero_gain_split_still_separates() {
        // Neither attribute is informative alone, the constant one is never chosen.
        let records = vec![
            Record::from_pairs(true, [("shade", "Dark"), ("a", "0"), ("b", "0")]),
            Record::from_pairs(false, [("shade", "Dark"), ("a", "0"), ("b", "1")]),
            Record::from_pairs(false, [("shade", "Dark"), ("a", "1"), ("b", "0")]),
            Record::from_pairs(true, [("shade", "Dark"), ("a", "1"), ("b", "1")]),
        ];
        let schema = vec!["shade".to_string(), "a".to_string(), "b".to_string()];
        let ds = Dataset::new(schema, records).unwrap();
        let tree = fit(&ds);
        assert_eq!(tree.root.criterion(), Some("a"));
        for record in ds.records() {
            assert_eq!(tree.classify(record).unwrap(), record.label);
        }
    }

    #[test]
    fn test_expression_of_fitted_tree() {
        let tree = fit(&mushrooms());
        assert_eq!(
            to_expression(&tree.root).unwrap(),
            concat!(
                "(odor = Almond) OR (odor = Anise) OR ",
                "(odor=None AND ( \n  (spore-print-color = Brown) OR (spore-print-color = Black))"
            )
        );
    }

    #[test]
    fn test_predicate_of_fitted_tree() {
        let tree = fit(&mushrooms());
        let options = PredicateOptions {
            argument_name: "mushroom".to_string(),
            ..Default::default()
        };
        let expected = std::fs::read_to_string("resources/mushrooms_predicate.py").unwrap();
        assert_eq!(to_predicate(&tree.root, &options), expected);
    }

    #[test]
    fn test_display() {
        let tree = fit(&mushrooms());
        let expected = std::fs::read_to_string("resources/mushrooms_tree.txt").unwrap();
        assert_eq!(tree.to_string(), expected);
    }
}
