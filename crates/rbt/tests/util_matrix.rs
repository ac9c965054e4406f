use rbt::node::{rotate_left, rotate_right, set_child, Side};
use rbt::types::Node;
use rbt::util::{depth, first, last, next, prev, size, subtree_post_order};
use rbt::{Arena, Index};

#[derive(Clone, Debug)]
struct TestNode {
    p: Option<Index>,
    l: Option<Index>,
    r: Option<Index>,
    k: i32,
}

impl TestNode {
    fn new(k: i32) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            k,
        }
    }
}

impl Node for TestNode {
    fn p(&self) -> Option<Index> {
        self.p
    }

    fn l(&self) -> Option<Index> {
        self.l
    }

    fn r(&self) -> Option<Index> {
        self.r
    }

    fn set_p(&mut self, v: Option<Index>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<Index>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<Index>) {
        self.r = v;
    }
}

/// Plain unbalanced BST insert, enough to shape fixtures.
fn put(arena: &mut Arena<TestNode>, root: Option<Index>, k: i32) -> Option<Index> {
    let n = arena.insert(TestNode::new(k));
    let Some(mut curr) = root else {
        return Some(n);
    };
    loop {
        let side = if k < arena[curr].k {
            Side::Left
        } else {
            Side::Right
        };
        let below = match side {
            Side::Left => arena[curr].l,
            Side::Right => arena[curr].r,
        };
        match below {
            Some(c) => curr = c,
            None => {
                set_child(arena, curr, side, Some(n));
                arena[n].p = Some(curr);
                return root;
            }
        }
    }
}

fn build(keys: &[i32]) -> (Arena<TestNode>, Option<Index>) {
    let mut arena = Arena::new();
    let mut root = None;
    for &k in keys {
        root = put(&mut arena, root, k);
    }
    (arena, root)
}

fn inorder_keys(arena: &Arena<TestNode>, root: Option<Index>) -> Vec<i32> {
    let mut out = Vec::new();
    let mut curr = first(arena, root);
    while let Some(i) = curr {
        out.push(arena[i].k);
        curr = next(arena, i);
    }
    out
}

fn reverse_keys(arena: &Arena<TestNode>, root: Option<Index>) -> Vec<i32> {
    let mut out = Vec::new();
    let mut curr = last(arena, root);
    while let Some(i) = curr {
        out.push(arena[i].k);
        curr = prev(arena, i);
    }
    out
}

#[test]
fn walks_matrix() {
    let shapes: &[&[i32]] = &[
        &[],
        &[1],
        &[1, 2, 3, 4, 5],
        &[5, 4, 3, 2, 1],
        &[50, 20, 80, 10, 30, 70, 90, 25, 35, 75],
    ];
    for keys in shapes {
        let (arena, root) = build(keys);
        let mut sorted = keys.to_vec();
        sorted.sort_unstable();
        assert_eq!(inorder_keys(&arena, root), sorted);
        sorted.reverse();
        assert_eq!(reverse_keys(&arena, root), sorted);
        assert_eq!(size(&arena, root), keys.len());
        assert_eq!(subtree_post_order(&arena, root).len(), keys.len());
    }
}

#[test]
fn depth_and_post_order_matrix() {
    let (arena, root) = build(&[50, 20, 80, 10, 30, 25]);
    let r = root.unwrap();
    assert_eq!(depth(&arena, r), 0);

    let twenty_five = arena[arena[arena[r].l.unwrap()].r.unwrap()].l.unwrap();
    assert_eq!(arena[twenty_five].k, 25);
    assert_eq!(depth(&arena, twenty_five), 3);

    let order = subtree_post_order(&arena, root);
    let keys: Vec<i32> = order.iter().map(|&i| arena[i].k).collect();
    assert_eq!(keys, vec![10, 25, 30, 20, 80, 50]);
    assert_eq!(order.last(), Some(&r));
}

#[test]
fn rotation_round_trip_matrix() {
    let keys = [50, 20, 80, 10, 30, 70, 90];
    let (mut arena, root) = build(&keys);
    let r = root.unwrap();
    let before = inorder_keys(&arena, root);

    let root = rotate_left(&mut arena, root, r);
    let new_root = root.unwrap();
    assert_eq!(arena[new_root].k, 80);
    assert_eq!(arena[new_root].p, None);
    assert_eq!(inorder_keys(&arena, root), before);

    let root = rotate_right(&mut arena, root, new_root);
    assert_eq!(root, Some(r));
    assert_eq!(inorder_keys(&arena, root), before);
    assert_eq!(arena[arena[r].r.unwrap()].k, 80);
}
