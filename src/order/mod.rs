//! Directory reordering
//!
//! Produces a new [`DirTree`] whose sibling order follows the directory
//! rules. At every level, children named by a rule for that depth come
//! first in rule order; the rest keep their default (lexicographic) order.
//! The same matching step orders files inside a directory, see
//! [`crate::sequence`].

use std::path::PathBuf;

use crate::rules::{Rule, RuleSet};
use crate::tree::{DirTree, NodeId};

/// Move rule targets to the front of `candidates`
///
/// Only rules whose depth equals `depth` take part. A rule whose target is
/// not among the remaining candidates is skipped, which also makes repeated
/// rules no-ops after their first match. Candidates are compared by full
/// canonical path, so siblings elsewhere with the same name never match.
pub fn apply_precedence(
    mut candidates: Vec<PathBuf>,
    rules: &[Rule],
    depth: usize,
) -> Vec<PathBuf> {
    let mut ordered = Vec::with_capacity(candidates.len());

    for rule in rules.iter().filter(|r| r.depth == depth) {
        if let Some(pos) = candidates.iter().position(|c| *c == rule.target) {
            ordered.push(candidates.remove(pos));
        }
    }

    ordered.extend(candidates);
    ordered
}

/// Reorders directory trees according to a [`RuleSet`]
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderEngine;

impl OrderEngine {
    pub fn new() -> Self {
        Self
    }

    /// Build a reordered copy of `input`; the input is left untouched
    pub fn reorder(&self, input: &DirTree, rules: &RuleSet) -> DirTree {
        let mut output = DirTree::new(input.root_path());
        let out_root = output.root();
        self.visit(input, input.root(), &mut output, out_root, rules);

        for rule in &rules.dir_rules {
            if !input.contains(&rule.target) {
                tracing::debug!("Directory rule matches nothing: {}", rule.target.display());
            }
        }

        output
    }

    fn visit(
        &self,
        input: &DirTree,
        in_id: NodeId,
        output: &mut DirTree,
        out_id: NodeId,
        rules: &RuleSet,
    ) {
        let Some(node) = input.get(in_id) else {
            return;
        };

        let children: Vec<PathBuf> = input
            .children(in_id)
            .iter()
            .filter_map(|id| input.get(*id))
            .map(|child| child.identifier.clone())
            .collect();

        let ordered = apply_precedence(children, &rules.dir_rules, node.depth + 1);

        // Insert the whole level first so recursion cannot interleave siblings
        let placed: Vec<(NodeId, NodeId)> = ordered
            .iter()
            .filter_map(|identifier| {
                let child_in = input.find(identifier)?;
                let child_out = output.insert(out_id, identifier)?;
                Some((child_in, child_out))
            })
            .collect();

        for (child_in, child_out) in placed {
            self.visit(input, child_in, output, child_out, rules);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleKind;
    use pretty_assertions::assert_eq;
    use std::path::Path;

    fn rule(target: &str, depth: usize) -> Rule {
        Rule {
            target: PathBuf::from(target),
            kind: RuleKind::Directory,
            depth,
            relative: PathBuf::from(target),
        }
    }

    fn child_tags(tree: &DirTree, path: &str) -> Vec<String> {
        let id = tree.find(Path::new(path)).unwrap();
        tree.children(id)
            .iter()
            .map(|c| tree.get(*c).unwrap().tag.clone())
            .collect()
    }

    fn sample_tree() -> DirTree {
        let mut tree = DirTree::new("/r");
        for name in ["a", "b", "c"] {
            tree.insert(NodeId::ROOT, format!("/r/{}", name)).unwrap();
        }
        let b = tree.find(Path::new("/r/b")).unwrap();
        tree.insert(b, "/r/b/alpha").unwrap();
        let sub = tree.insert(b, "/r/b/sub").unwrap();
        tree.insert(sub, "/r/b/sub/aaa").unwrap();
        tree.insert(sub, "/r/b/sub/alpha").unwrap();
        tree
    }

    #[test]
    fn test_apply_precedence_rule_order_then_default() {
        let candidates = vec![PathBuf::from("/r/a"), PathBuf::from("/r/b"), PathBuf::from("/r/c")];
        let rules = vec![rule("/r/c", 1), rule("/r/a", 1)];

        let ordered = apply_precedence(candidates, &rules, 1);
        assert_eq!(
            ordered,
            vec![PathBuf::from("/r/c"), PathBuf::from("/r/a"), PathBuf::from("/r/b")]
        );
    }

    #[test]
    fn test_apply_precedence_ignores_other_depths_and_dangling() {
        let candidates = vec![PathBuf::from("/r/a"), PathBuf::from("/r/b")];
        let rules = vec![rule("/r/b", 2), rule("/r/missing", 1), rule("/r/b", 1), rule("/r/b", 1)];

        let ordered = apply_precedence(candidates, &rules, 1);
        assert_eq!(ordered, vec![PathBuf::from("/r/b"), PathBuf::from("/r/a")]);
    }

    #[test]
    fn test_reorder_top_level() {
        let input = sample_tree();
        let rules = RuleSet {
            root: PathBuf::from("/r"),
            dir_rules: vec![rule("/r/c", 1), rule("/r/a", 1)],
            ..RuleSet::default()
        };

        let output = OrderEngine::new().reorder(&input, &rules);

        assert_eq!(child_tags(&output, "/r"), vec!["c", "a", "b"]);
        assert_eq!(child_tags(&input, "/r"), vec!["a", "b", "c"]);
        assert_eq!(output.len(), input.len());
    }

    #[test]
    fn test_reorder_nested_level_by_depth() {
        let input = sample_tree();
        let rules = RuleSet {
            root: PathBuf::from("/r"),
            dir_rules: vec![rule("/r/b/sub", 2), rule("/r/b/alpha", 2)],
            ..RuleSet::default()
        };

        let output = OrderEngine::new().reorder(&input, &rules);

        assert_eq!(child_tags(&output, "/r/b"), vec!["sub", "alpha"]);
        // The deeper alpha shares a name with the rule target but not its path
        assert_eq!(child_tags(&output, "/r/b/sub"), vec!["aaa", "alpha"]);
    }

    #[test]
    fn test_reorder_dangling_rule_changes_nothing() {
        let input = sample_tree();
        let rules = RuleSet {
            root: PathBuf::from("/r"),
            dir_rules: vec![rule("/r/zzz", 1), rule("/r/b/nope", 2)],
            ..RuleSet::default()
        };

        let output = OrderEngine::new().reorder(&input, &rules);

        let before: Vec<_> = input
            .pre_order()
            .into_iter()
            .map(|id| input.get(id).unwrap().identifier.clone())
            .collect();
        let after: Vec<_> = output
            .pre_order()
            .into_iter()
            .map(|id| output.get(id).unwrap().identifier.clone())
            .collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_reorder_keeps_tree_well_formed() {
        let input = sample_tree();
        let rules = RuleSet {
            root: PathBuf::from("/r"),
            dir_rules: vec![rule("/r/b", 1), rule("/r/b/sub", 2)],
            ..RuleSet::default()
        };

        let output = OrderEngine::new().reorder(&input, &rules);

        for id in output.pre_order() {
            assert!(!output.is_ancestor_of(id, id));
            if id != output.root() {
                let parent = output.parent(id).unwrap();
                assert!(output.children(parent).contains(&id));
                assert_eq!(output.get(id).unwrap().depth, output.get(parent).unwrap().depth + 1);
            }
        }
    }
}
