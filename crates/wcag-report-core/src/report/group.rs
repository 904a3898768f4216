//! Grouping of flat violations into issue sections.
//!
//! Groups follow the order in which their `(code, message)` pair first
//! appears in the input; rows keep input order inside their group. Nothing is
//! sorted or deduplicated, so identical input always renders identically.

use std::collections::HashMap;

use crate::report::model::{IssueGroup, Violation};

/// Group violations by `(code, message)`.
///
/// The techniques text of a group is taken from its first violation.
pub fn group_violations(violations: &[Violation]) -> Vec<IssueGroup> {
    let mut groups: Vec<IssueGroup> = Vec::new();
    let mut index: HashMap<(&str, &str), usize> = HashMap::new();

    for v in violations {
        let key = (v.code.as_str(), v.message.as_str());
        match index.get(&key) {
            Some(&i) => groups[i].rows.push(v.row.clone()),
            None => {
                index.insert(key, groups.len());
                groups.push(IssueGroup {
                    code: v.code.clone(),
                    message: v.message.clone(),
                    techniques: v.techniques.clone(),
                    rows: vec![v.row.clone()],
                });
            }
        }
    }

    groups
}
