//! An example fitting a tree on the `mushrooms` dataset.
use id3_tree::{DecisionTreeClassifier, TreeConfig};
use std::env;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();
    let data_path = args.get(1).map(String::as_str).unwrap_or("resources/mushrooms.csv");

    let config = match args.get(2) {
        Some(config_path) => TreeConfig::load(config_path)?,
        None => TreeConfig::default(),
    };
    let mut model = DecisionTreeClassifier::new(config)?;

    let dataset = model.read_csv(data_path)?;
    model.fit(&dataset)?;

    println!("{}", model.tree()?);
    println!("Boolean Expression: {}", model.to_expression()?);
    println!("Training accuracy: {:.4}", model.score(&dataset)?);
    println!();
    print!("{}", model.to_predicate()?);

    Ok(())
}
