use ordered_tree::{Order, Tree};

use std::collections::BTreeSet;

/// Builds a tree by inserting one key at a time, so its shape depends on the
/// order of `xs`.
fn inserted(xs: &[i8]) -> Tree<i8> {
    let mut tree = Tree::new();
    for x in xs {
        tree.insert(*x);
    }
    tree
}

/// Checks the BST order by walking the keys in order.
fn strictly_ascending(tree: &Tree<i8>) -> bool {
    tree.inorder().windows(2).all(|w| w[0] < w[1])
}

#[quickcheck]
fn build_yields_distinct_sorted_keys(xs: Vec<i8>) -> bool {
    let tree = Tree::build(xs.clone());
    let expected: Vec<_> = xs.into_iter().collect::<BTreeSet<_>>().into_iter().collect();

    tree.iter().copied().eq(expected)
}

#[quickcheck]
fn build_has_minimal_height(xs: Vec<i16>) -> bool {
    let tree = Tree::build(xs);
    let n = tree.len();

    // floor(log2(n)), and -1 for an empty tree.
    let bound = if n == 0 {
        -1
    } else {
        (usize::BITS - 1 - n.leading_zeros()) as isize
    };
    tree.height() == bound && tree.is_balanced()
}

#[quickcheck]
fn insert_is_idempotent(xs: Vec<i8>, k: i8) -> bool {
    let mut once = inserted(&xs);
    once.insert(k);
    let mut twice = once.clone();
    twice.insert(k);

    once == twice
}

#[quickcheck]
fn delete_undoes_insert(xs: Vec<i8>, k: i8) -> bool {
    let original = inserted(&xs);
    if original.contains(&k) {
        return true;
    }

    let mut tree = original.clone();
    tree.insert(k);
    let grew = tree.contains(&k) && tree.len() == original.len() + 1;
    tree.delete(&k);

    grew && tree.inorder() == original.inorder()
}

#[quickcheck]
fn stays_ordered_after_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = inserted(&xs);
    for delete in &deletes {
        tree.delete(delete);
    }

    let still_present: BTreeSet<_> = xs.iter().filter(|x| !deletes.contains(*x)).collect();

    strictly_ascending(&tree)
        && deletes.iter().all(|x| !tree.contains(x))
        && still_present.iter().all(|x| tree.contains(x))
        && tree.len() == still_present.len()
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = inserted(&xs);
    let added: BTreeSet<_> = xs.into_iter().collect();
    let nots: BTreeSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none())
}

#[quickcheck]
fn rebalance_balances_and_keeps_keys(xs: Vec<i8>) -> bool {
    let mut tree = inserted(&xs);
    let before: Vec<i8> = tree.iter().copied().collect();
    tree.rebalance();

    tree.is_balanced() && tree.iter().copied().eq(before)
}

#[quickcheck]
fn rebalance_is_idempotent(xs: Vec<i8>) -> bool {
    let mut tree = inserted(&xs);
    tree.rebalance();
    let once = tree.clone();
    tree.rebalance();

    tree == once
}

#[quickcheck]
fn level_order_goes_down_level_by_level(xs: Vec<i8>) -> bool {
    let tree = inserted(&xs);
    let keys = tree.level_order();
    let depths: Vec<_> = keys.iter().map(|k| tree.depth(k)).collect();

    keys.len() == tree.len()
        && depths.iter().all(Option::is_some)
        && depths.windows(2).all(|w| w[0] <= w[1])
}

#[quickcheck]
fn visitors_see_what_collectors_collect(xs: Vec<i8>) -> bool {
    let tree = inserted(&xs);

    [Order::Pre, Order::In, Order::Post, Order::Level]
        .iter()
        .all(|order| {
            let mut visited = Vec::new();
            tree.traverse(*order, &mut |n: &ordered_tree::Node<i8>| visited.push(*n.key()));

            let collected: Vec<i8> = match order {
                Order::Pre => tree.preorder(),
                Order::In => tree.inorder(),
                Order::Post => tree.postorder(),
                Order::Level => tree.level_order(),
            }
            .into_iter()
            .copied()
            .collect();

            visited == collected
        })
}
