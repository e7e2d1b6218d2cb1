//! Tree display utilities.

use std::fmt;

/// A node in a display tree.
///
/// Children are returned as owned trait objects so that lightweight views
/// (a handle plus a borrowed container) can be produced on demand.
pub trait TreeNode {
    /// Get the display name of this node.
    fn name(&self) -> String;

    /// Get child nodes.
    fn children(&self) -> Vec<Box<dyn TreeNode + '_>>;

    /// Get additional details to display.
    fn details(&self) -> Option<String> {
        None
    }
}

/// Helper for displaying tree structures.
pub struct DisplayTree<'a> {
    root: &'a dyn TreeNode,
}

impl<'a> DisplayTree<'a> {
    /// Create a new display tree.
    pub fn new(root: &'a dyn TreeNode) -> Self {
        Self { root }
    }

    fn fmt_node(
        f: &mut fmt::Formatter<'_>,
        node: &dyn TreeNode,
        prefix: &str,
        is_last: bool,
    ) -> fmt::Result {
        let connector = if is_last { "└─ " } else { "├─ " };

        write!(f, "{prefix}{connector}{}", node.name())?;

        if let Some(details) = node.details() {
            write!(f, " ({details})")?;
        }
        writeln!(f)?;

        let children = node.children();
        let child_prefix = format!("{prefix}{}", if is_last { "   " } else { "│  " });

        let count = children.len();
        for (i, child) in children.iter().enumerate() {
            Self::fmt_node(f, child.as_ref(), &child_prefix, i + 1 == count)?;
        }

        Ok(())
    }
}

impl fmt::Display for DisplayTree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root.name())?;
        if let Some(details) = self.root.details() {
            write!(f, " ({details})")?;
        }
        writeln!(f)?;

        let children = self.root.children();
        let count = children.len();
        for (i, child) in children.iter().enumerate() {
            Self::fmt_node(f, child.as_ref(), "", i + 1 == count)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestNode {
        name: String,
        children: Vec<TestNode>,
    }

    impl TestNode {
        fn leaf(name: &str) -> Self {
            Self {
                name: name.to_string(),
                children: vec![],
            }
        }
    }

    impl TreeNode for TestNode {
        fn name(&self) -> String {
            self.name.clone()
        }

        fn children(&self) -> Vec<Box<dyn TreeNode + '_>> {
            self.children
                .iter()
                .map(|c| Box::new(TestNodeRef(c)) as Box<dyn TreeNode + '_>)
                .collect()
        }
    }

    struct TestNodeRef<'a>(&'a TestNode);

    impl TreeNode for TestNodeRef<'_> {
        fn name(&self) -> String {
            self.0.name()
        }

        fn children(&self) -> Vec<Box<dyn TreeNode + '_>> {
            self.0.children()
        }
    }

    #[test]
    fn test_display_tree() {
        let tree = TestNode {
            name: "Root".to_string(),
            children: vec![
                TestNode {
                    name: "Child1".to_string(),
                    children: vec![TestNode::leaf("Grandchild")],
                },
                TestNode::leaf("Child2"),
            ],
        };

        let output = DisplayTree::new(&tree).to_string();
        assert_eq!(
            output,
            "Root\n├─ Child1\n│  └─ Grandchild\n└─ Child2\n"
        );
    }
}
