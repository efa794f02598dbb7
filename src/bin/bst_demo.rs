//! Builds both trees from the command line and prints what they say about the keys.
//!
//! ```text
//! RUST_LOG=trace bst-demo --keys 5,3,8,1,4,7,9 --delete 3,8 --query 6 --kth 2
//! ```

use anyhow::Context;
use clap::Parser;
use log::info;

use ordered_bst::order_stat::OrderStatTree;
use ordered_bst::tree::Tree;

#[derive(Parser, Debug)]
#[command(name = "bst-demo", about = "Exercise an unbalanced BST from the command line", version)]
struct Args {
    /// Keys to insert, in order. Duplicates are ignored.
    #[arg(long, value_delimiter = ',', default_values_t = [5, 3, 8, 1, 4, 7, 9])]
    keys: Vec<i64>,

    /// Keys to delete after every insert.
    #[arg(long, value_delimiter = ',')]
    delete: Vec<i64>,

    /// Value to find the floor and ceiling of.
    #[arg(long, default_value_t = 6)]
    query: i64,

    /// 1-based rank to look up.
    #[arg(long, default_value_t = 1)]
    kth: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut tree = Tree::new();
    let mut ranked = OrderStatTree::new();
    for &key in &args.keys {
        if !tree.insert(key) {
            info!("skipping duplicate key {key}");
        }
        ranked.insert(key);
    }
    for key in &args.delete {
        if !tree.delete(key) {
            info!("{key} was not in the tree");
        }
        ranked.delete(key);
    }

    let keys: Vec<String> = tree.iter().map(i64::to_string).collect();
    println!("in-order:  [{}]", keys.join(", "));
    println!("height:    {}", tree.height());
    println!("valid BST: {}", tree.is_valid());
    println!("floor({}):   {}", args.query, show(tree.floor(&args.query)));
    println!("ceiling({}): {}", args.query, show(tree.ceiling(&args.query)));

    let kth = ranked
        .kth_smallest(args.kth)
        .with_context(|| format!("looking up rank {}", args.kth))?;
    println!("kth({}):     {}", args.kth, kth);

    Ok(())
}

fn show(key: Option<&i64>) -> String {
    key.map_or_else(|| "none".to_owned(), i64::to_string)
}
