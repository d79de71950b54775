// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Builds the `All -> severity -> check -> package` tree drawn as a treemap.

use serde::Serialize;
use std::collections::BTreeMap;

use super::aggregate::AggregatedBucket;
use crate::diagnostics::Severity;

/// Label of the synthetic root node.
pub const ROOT_LABEL: &str = "All";

/// One node of the treemap hierarchy.
///
/// `weight` is the bucket count for leaves and the sum of the children's
/// weights for every other node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HierarchyNode {
    /// Unique positional id (`0`, `0-1`, `0-1-3`, ...).
    pub id: String,
    pub label: String,
    pub weight: usize,
    /// `None` only for the root.
    pub severity: Option<Severity>,
    /// Sampled descriptions, only set on package leaves.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<String>,
    pub children: Vec<HierarchyNode>,
}

impl HierarchyNode {
    /// Build the tree from buckets.
    ///
    /// Severity nodes follow the canonical severity order and only severities in
    /// `existing_severities` that also have buckets get a node. Check and
    /// package nodes are ordered by descending weight, ties by label.
    #[must_use]
    pub fn build(buckets: &[AggregatedBucket], existing_severities: &[Severity]) -> Self {
        let mut by_severity: BTreeMap<Severity, BTreeMap<&str, Vec<&AggregatedBucket>>> =
            BTreeMap::new();
        for bucket in buckets
            .iter()
            .filter(|b| existing_severities.contains(&b.severity))
        {
            by_severity
                .entry(bucket.severity)
                .or_default()
                .entry(bucket.check_name.as_str())
                .or_default()
                .push(bucket);
        }

        let children = by_severity
            .into_iter()
            .map(|(severity, checks)| {
                let checks = checks
                    .into_iter()
                    .map(|(check_name, buckets)| {
                        let leaves = buckets.into_iter().map(Self::leaf).collect();
                        Self::internal(check_name, Some(severity), leaves)
                    })
                    .collect();
                Self::internal(severity.as_str(), Some(severity), checks)
            })
            .collect();
        let mut root = Self::internal(ROOT_LABEL, None, children);
        root.assign_ids("0");
        root
    }

    fn leaf(bucket: &AggregatedBucket) -> Self {
        Self {
            id: String::new(),
            label: bucket.package.clone(),
            weight: bucket.count,
            severity: Some(bucket.severity),
            examples: bucket.examples.clone(),
            children: Vec::new(),
        }
    }

    fn internal(label: &str, severity: Option<Severity>, mut children: Vec<Self>) -> Self {
        // Severity nodes arrive in canonical order already; sorting them by weight
        // would break it.
        if severity.is_some() {
            children.sort_by(|a, b| b.weight.cmp(&a.weight).then_with(|| a.label.cmp(&b.label)));
        }
        Self {
            id: String::new(),
            label: label.to_string(),
            weight: children.iter().map(|c| c.weight).sum(),
            severity,
            examples: Vec::new(),
            children,
        }
    }

    fn assign_ids(&mut self, id: &str) {
        self.id = id.to_string();
        for (index, child) in self.children.iter_mut().enumerate() {
            child.assign_ids(&format!("{id}-{index}"));
        }
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Visit the node and its descendants depth first, parents before children.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a HierarchyNode, Option<&'a HierarchyNode>)) {
        self.walk_from(None, visit);
    }

    fn walk_from<'a>(
        &'a self,
        parent: Option<&'a HierarchyNode>,
        visit: &mut impl FnMut(&'a HierarchyNode, Option<&'a HierarchyNode>),
    ) {
        visit(self, parent);
        for child in &self.children {
            child.walk_from(Some(self), visit);
        }
    }

    /// First internal node whose weight differs from the sum of its children.
    #[must_use]
    pub fn find_inconsistency(&self) -> Option<&HierarchyNode> {
        if !self.is_leaf() && self.weight != self.children.iter().map(|c| c.weight).sum::<usize>() {
            return Some(self);
        }
        self.children.iter().find_map(HierarchyNode::find_inconsistency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bucket(severity: Severity, check: &str, package: &str, count: usize) -> AggregatedBucket {
        AggregatedBucket {
            severity,
            check_name: check.to_string(),
            package: package.to_string(),
            count,
            examples: vec![format!("{check} in {package}")],
        }
    }

    fn labels(node: &HierarchyNode) -> Vec<&str> {
        node.children.iter().map(|c| c.label.as_str()).collect()
    }

    #[test]
    fn test_scenario_tree() {
        let buckets = vec![
            bucket(Severity::Major, "F401", "pkgA", 1),
            bucket(Severity::Minor, "E501", "pkgA", 2),
            bucket(Severity::Minor, "E501", "pkgB", 1),
        ];
        let root = HierarchyNode::build(&buckets, &[Severity::Major, Severity::Minor]);

        assert_eq!(root.label, "All");
        assert_eq!(root.weight, 4);
        assert_eq!(labels(&root), vec!["major", "minor"]);
        let minor = &root.children[1];
        assert_eq!(minor.weight, 3);
        assert_eq!(labels(minor), vec!["E501"]);
        assert_eq!(labels(&minor.children[0]), vec!["pkgA", "pkgB"]);
        assert_eq!(minor.children[0].children[0].examples, vec!["E501 in pkgA"]);
        assert!(root.find_inconsistency().is_none());
    }

    #[test]
    fn test_severity_order_is_canonical_not_by_weight() {
        let buckets = vec![
            bucket(Severity::Unknown, "u", "p", 100),
            bucket(Severity::Info, "i", "p", 50),
            bucket(Severity::Blocker, "b", "p", 1),
        ];
        let root = HierarchyNode::build(
            &buckets,
            &[Severity::Blocker, Severity::Info, Severity::Unknown],
        );
        assert_eq!(labels(&root), vec!["blocker", "info", "unknown"]);
    }

    #[test]
    fn test_checks_and_packages_by_descending_weight() {
        let buckets = vec![
            bucket(Severity::Minor, "A", "p1", 1),
            bucket(Severity::Minor, "A", "p2", 4),
            bucket(Severity::Minor, "B", "p1", 9),
            bucket(Severity::Minor, "C", "p1", 5),
            bucket(Severity::Minor, "C", "p0", 5),
        ];
        let root = HierarchyNode::build(&buckets, &[Severity::Minor]);
        let minor = &root.children[0];
        assert_eq!(labels(minor), vec!["C", "B", "A"]);
        assert_eq!(labels(&minor.children[0]), vec!["p0", "p1"]);
        assert_eq!(labels(&minor.children[2]), vec!["p2", "p1"]);
    }

    #[test]
    fn test_absent_severities_are_omitted() {
        let buckets = vec![bucket(Severity::Info, "A", "p", 2)];
        let root = HierarchyNode::build(&buckets, &[Severity::Info]);
        assert_eq!(labels(&root), vec!["info"]);
    }

    #[test]
    fn test_weights_are_consistent() {
        let buckets: Vec<_> = (0..40)
            .map(|i| {
                bucket(
                    Severity::ALL[i % Severity::ALL.len()],
                    &format!("C{}", i % 7),
                    &format!("p{}", i % 5),
                    i + 1,
                )
            })
            .collect();
        let root = HierarchyNode::build(&buckets, &Severity::ALL);
        assert!(root.find_inconsistency().is_none());
        assert_eq!(root.weight, buckets.iter().map(|b| b.count).sum::<usize>());
    }

    #[test]
    fn test_ids_are_unique() {
        let buckets = vec![
            bucket(Severity::Minor, "a/b", "c", 1),
            bucket(Severity::Minor, "a", "b/c", 1),
            bucket(Severity::Major, "a", "b", 1),
        ];
        let root = HierarchyNode::build(&buckets, &[Severity::Major, Severity::Minor]);
        let mut ids = Vec::new();
        root.walk(&mut |node, _| ids.push(node.id.clone()));
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
        assert_eq!(total, 1 + 2 + 3 + 3);
    }

    #[test]
    fn test_walk_reports_parents() {
        let buckets = vec![bucket(Severity::Info, "A", "p", 1)];
        let root = HierarchyNode::build(&buckets, &[Severity::Info]);
        let mut pairs = Vec::new();
        root.walk(&mut |node, parent| {
            pairs.push((node.label.clone(), parent.map(|p| p.label.clone())));
        });
        assert_eq!(
            pairs,
            vec![
                ("All".to_string(), None),
                ("info".to_string(), Some("All".to_string())),
                ("A".to_string(), Some("info".to_string())),
                ("p".to_string(), Some("A".to_string())),
            ]
        );
    }

    #[test]
    fn test_detects_inconsistency() {
        let buckets = vec![bucket(Severity::Info, "A", "p", 3)];
        let mut root = HierarchyNode::build(&buckets, &[Severity::Info]);
        root.children[0].weight = 2;
        let node = root.find_inconsistency().unwrap();
        assert_eq!(node.label, "All");
    }
}
