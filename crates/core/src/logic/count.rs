use crate::prelude::*;

/// Number of nodes in the tree, files and directories alike.
pub fn count_all_nodes(tree: &Node) -> usize {
    tree.reduce(0, |acc, _| acc + 1)
}

pub fn count_files(tree: &Node) -> usize {
    tree.reduce(0, |acc, node| if node.is_file() { acc + 1 } else { acc })
}

pub fn count_directories(tree: &Node) -> usize {
    tree.reduce(0, |acc, node| {
        if node.is_directory() { acc + 1 } else { acc }
    })
}

/// Number of files directly inside a single directory.
#[derive(Clone, Debug, PartialEq, Eq, Display, Getters, CopyGetters)]
#[display("{name}: {files}")]
pub struct DirectoryFileCount {
    #[getset(get = "pub")]
    name: String,

    /// Immediate file children only, files in subdirectories are not counted
    #[getset(get_copy = "pub")]
    files: usize,
}

/// Per-directory file counts of a tree, in post-order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Getters, CopyGetters)]
pub struct FileCountReport {
    #[getset(get = "pub")]
    entries: Vec<DirectoryFileCount>,

    /// Recursive number of files in the whole tree
    #[getset(get_copy = "pub")]
    total: usize,
}

impl FileCountReport {
    /// One `name: count` line per directory.
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }
}

/// Counts the immediate files of every directory, children before parents.
pub fn file_counts(tree: &Node) -> FileCountReport {
    let mut report = FileCountReport::default();
    report.total = collect_file_counts(tree, &mut report.entries);
    debug!(
        "Counted {} files in {} directories under '{}'",
        report.total,
        report.entries.len(),
        tree.name()
    );
    report
}

/// Returns the recursive file count of `node`.
fn collect_file_counts(node: &Node, entries: &mut Vec<DirectoryFileCount>) -> usize {
    let Node::Directory(dir) = node else {
        return 0;
    };
    let files = dir.children().iter().filter(|child| child.is_file()).count();
    let nested: usize = dir
        .children()
        .iter()
        .filter(|child| child.is_directory())
        .map(|child| collect_file_counts(child, entries))
        .sum();
    entries.push(DirectoryFileCount {
        name: dir.name().clone(),
        files,
    });
    files + nested
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

    #[test]
    fn counts_small_tree() {
        let sut = dir("root", vec![file("a"), dir("b", vec![])]);
        assert_eq!(count_all_nodes(&sut), 3);
        assert_eq!(count_files(&sut), 1);
        assert_eq!(count_directories(&sut), 2);
    }

    #[test]
    fn files_plus_directories_is_all_nodes() {
        for sut in [
            file("only"),
            dir("empty", vec![]),
            dir("root", vec![file("a"), dir("b", vec![file("c"), file("d")])]),
            nodejs_package().unwrap(),
        ] {
            assert_eq!(
                count_files(&sut) + count_directories(&sut),
                count_all_nodes(&sut)
            );
        }
    }

    #[test]
    fn counts_sample_tree() {
        let sut = nodejs_package().unwrap();
        assert_eq!(count_all_nodes(&sut), 11);
        assert_eq!(count_files(&sut), 5);
        assert_eq!(count_directories(&sut), 6);
    }

    #[test]
    fn file_counts_are_immediate_only() {
        let sut = dir(
            "parent",
            vec![
                file("one"),
                dir("child", vec![file("x"), file("y"), file("z")]),
                file("two"),
            ],
        );
        let report = file_counts(&sut);
        assert_eq!(report.lines(), vec!["child: 3", "parent: 2"]);
        assert_eq!(report.total(), 5);
        assert_eq!(report.entries()[1].files(), 2);
    }

    #[test]
    fn file_counts_of_a_file_is_empty() {
        let report = file_counts(&file("a"));
        assert!(report.entries().is_empty());
        assert_eq!(report.total(), 0);
    }

    #[test]
    fn file_counts_of_sample_tree_in_post_order() {
        let report = file_counts(&nodejs_package().unwrap());
        assert_eq!(
            report.lines(),
            vec![
                "dist: 0",
                "__tests__: 1",
                "cli: 1",
                "@babel: 0",
                "node_modules: 0",
                "nodejs-package: 3",
            ]
        );
        assert_eq!(report.total(), 5);
    }
}
