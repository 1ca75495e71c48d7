use std::convert::Infallible;

use crate::prelude::*;

impl Node {
    /// Rebuilds the tree by applying `f` to every node, parent before children.
    ///
    /// `f` sees the original node and returns its replacement. When the
    /// replacement is a directory its children, including any that `f` added,
    /// are mapped in turn. `self` is left untouched.
    pub fn map<F>(&self, mut f: F) -> Node
    where
        F: FnMut(&Node) -> Node,
    {
        match self.try_map(|node| Ok::<_, Infallible>(f(node))) {
            Ok(node) => node,
            Err(never) => match never {},
        }
    }

    /// Like [`Node::map`] but stops at the first error returned by `f`.
    pub fn try_map<F, E>(&self, mut f: F) -> Result<Node, E>
    where
        F: FnMut(&Node) -> Result<Node, E>,
    {
        try_map_node(self, &mut f)
    }

    /// Folds every node of the tree into a single value, in pre-order.
    pub fn reduce<A, F>(&self, initial: A, mut f: F) -> A
    where
        F: FnMut(A, &Node) -> A,
    {
        reduce_node(self, initial, &mut f)
    }
}

fn try_map_node<F, E>(node: &Node, f: &mut F) -> Result<Node, E>
where
    F: FnMut(&Node) -> Result<Node, E>,
{
    match f(node)? {
        Node::File(file) => Ok(Node::File(file)),
        Node::Directory(dir) => {
            let children = dir
                .children()
                .iter()
                .map(|child| try_map_node(child, &mut *f))
                .collect::<Result<Vec<_>, E>>()?;
            Ok(Node::Directory(dir.replacing_children(children)))
        }
    }
}

fn reduce_node<A, F>(node: &Node, acc: A, f: &mut F) -> A
where
    F: FnMut(A, &Node) -> A,
{
    let acc = f(acc, node);
    match node {
        Node::File(_) => acc,
        Node::Directory(dir) => dir
            .children()
            .iter()
            .fold(acc, |acc, child| reduce_node(child, acc, &mut *f)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_log::test;

    fn file(name: &str) -> Node {
        mkfile().name(name).call().unwrap()
    }

    fn dir(name: &str, children: Vec<Node>) -> Node {
        mkdir().name(name).children(children).call().unwrap()
    }

    fn tree() -> Node {
        dir(
            "root",
            vec![
                file("a"),
                dir("b", vec![file("c"), dir("d", vec![])]),
                file("e").with_meta_entry(OWNER, "someone"),
            ],
        )
    }

    fn explicit_count(node: &Node) -> usize {
        match node {
            Node::File(_) => 1,
            Node::Directory(dir) => 1 + dir.children().iter().map(explicit_count).sum::<usize>(),
        }
    }

    #[test]
    fn identity_map_is_structurally_equal() {
        let sut = tree();
        assert_eq!(sut.map(Node::clone), sut);
        let sample = nodejs_package().unwrap();
        assert_eq!(sample.map(|node| node.clone()), sample);
    }

    #[test]
    fn map_visits_in_pre_order() {
        let mut visited = Vec::new();
        tree().map(|node| {
            visited.push(node.name().to_owned());
            node.clone()
        });
        assert_eq!(visited, vec!["root", "a", "b", "c", "d", "e"]);
    }

    #[test]
    fn map_on_single_file_applies_function_once() {
        let mut calls = 0;
        let sut = file("a").map(|node| {
            calls += 1;
            node.clone().with_meta_entry(HIDDEN, true)
        });
        assert_eq!(calls, 1);
        assert_eq!(sut, file("a").with_meta_entry(HIDDEN, true));
    }

    #[test]
    fn map_does_not_touch_input() {
        let original = tree();
        let copy = original.clone();
        let renamed = original.map(|node| {
            let name = format!("{}-renamed", node.name());
            node.clone().with_name(name).unwrap()
        });
        assert_eq!(original, copy);
        assert_eq!(renamed.name(), "root-renamed");
        assert_eq!(renamed.children().unwrap()[1].children().unwrap()[0].name(), "c-renamed");
    }

    #[test]
    fn map_visits_spliced_children() {
        let mut visited = Vec::new();
        let sut = tree().map(|node| {
            visited.push(node.name().to_owned());
            if node.name() == "b" {
                node.clone()
                    .with_appended_children([file("new")])
                    .unwrap()
            } else {
                node.clone().with_meta_entry(OWNER, "x")
            }
        });
        assert_eq!(visited, vec!["root", "a", "b", "c", "d", "new", "e"]);
        let spliced = &sut.children().unwrap()[1].children().unwrap()[2];
        assert_eq!(spliced.name(), "new");
        assert_eq!(spliced.owner(), Some("x".to_owned()));
    }

    #[test]
    fn map_can_replace_children() {
        let sut = tree().map(|node| match node {
            Node::Directory(_) if node.name() == "b" => node.clone().with_children(vec![]).unwrap(),
            _ => node.clone(),
        });
        assert_eq!(sut.children().unwrap()[1].children().unwrap().len(), 0);
        assert_eq!(explicit_count(&sut), 4);
    }

    #[test]
    fn try_map_stops_at_first_error() {
        let mut visited = Vec::new();
        let result = tree().try_map(|node| {
            visited.push(node.name().to_owned());
            if node.name() == "c" {
                Err(Error::invalid_argument("boom"))
            } else {
                Ok(node.clone())
            }
        });
        assert_eq!(result, Err(Error::invalid_argument("boom")));
        assert_eq!(visited, vec!["root", "a", "b", "c"]);
    }

    #[test]
    fn reduce_counts_every_node() {
        for sut in [tree(), file("only"), nodejs_package().unwrap()] {
            assert_eq!(sut.reduce(0, |acc, _| acc + 1), explicit_count(&sut));
        }
    }

    #[test]
    fn reduce_visits_in_pre_order() {
        let names = tree().reduce(Vec::new(), |mut acc, node| {
            acc.push(node.name().to_owned());
            acc
        });
        assert_eq!(names, vec!["root", "a", "b", "c", "d", "e"]);
    }
}
