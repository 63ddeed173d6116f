//! Builds a tree out of random keys, knocks it off balance, rebalances it and
//! prints it along the way. Run with `RUST_LOG=debug` to see the tree's logs.

use ordered_tree::Tree;
use rand::Rng;

fn print_orders(tree: &Tree<u32>) {
    println!("level order: {:?}", tree.level_order());
    println!("preorder:    {:?}", tree.preorder());
    println!("postorder:   {:?}", tree.postorder());
    println!("inorder:     {:?}", tree.inorder());
}

fn main() {
    pretty_env_logger::init();

    let mut rng = rand::thread_rng();
    let keys: Vec<u32> = (0..10).map(|_| rng.gen_range(0..100)).collect();
    println!("random keys: {:?}\n", keys);

    let mut tree = Tree::build(keys);
    print!("{}", tree);
    println!("balanced: {}", tree.is_balanced());
    print_orders(&tree);

    for key in [120, 130, 140] {
        tree.insert(key);
    }
    println!("\nafter inserting 120, 130 and 140:");
    print!("{}", tree);
    println!("balanced: {}", tree.is_balanced());

    tree.rebalance();
    println!("\nafter rebalancing:");
    print!("{}", tree);
    println!("balanced: {}", tree.is_balanced());
    print_orders(&tree);

    let root = tree.root().map(|n| *n.key());
    if let Some(root) = root {
        tree.delete(&root);
        println!("\nafter deleting the root ({}):", root);
        print!("{}", tree);
    }
}
