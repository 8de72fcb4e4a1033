//! Reading order for sections and articles.
//!
//! Authors control the order of their book by prefixing folder and file names
//! with a number (`01 News`, `02 Sports`). The prefix is stripped from the
//! displayed title and used as the sort key.
//!
//! The policy is all-or-nothing for each group of siblings: if every sibling
//! carries a numeric prefix they are ordered by it, otherwise the whole group is
//! ordered by title. Each level of the tree decides independently.

use regex::Regex;
use std::sync::LazyLock;

static NUMERIC_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^([0-9]+)[\t\n\x0B\x0C\r ]*(.*)$").expect("numeric prefix regex is valid")
});

/// A display title with its optional explicit position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefixed {
    pub sort_index: Option<u64>,
    pub title: String,
}

/// Split a leading run of digits (and any whitespace after it) off a name.
///
/// Names without a prefix, or whose digits do not fit a `u64`, are returned
/// untouched with no sort index.
pub fn split_numeric_prefix(name: &str) -> Prefixed {
    if let Some(captures) = NUMERIC_PREFIX.captures(name) {
        if let Ok(index) = captures[1].parse::<u64>() {
            return Prefixed {
                sort_index: Some(index),
                title: captures[2].to_string(),
            };
        }
    }

    Prefixed {
        sort_index: None,
        title: name.to_string(),
    }
}

/// Anything that takes part in sibling ordering.
pub trait Ordered {
    fn sort_index(&self) -> Option<u64>;
    fn title(&self) -> &str;
}

/// Order a group of siblings in place.
///
/// Both sorts are stable, so ties keep their enumeration order.
pub fn sort_siblings<T: Ordered>(siblings: &mut [T]) {
    if siblings.iter().all(|s| s.sort_index().is_some()) {
        siblings.sort_by_key(|s| s.sort_index());
    } else {
        siblings.sort_by(|a, b| a.title().cmp(b.title()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Node(Option<u64>, &'static str);

    impl Ordered for Node {
        fn sort_index(&self) -> Option<u64> {
            self.0
        }

        fn title(&self) -> &str {
            self.1
        }
    }

    fn titles(nodes: &[Node]) -> Vec<&'static str> {
        nodes.iter().map(|n| n.1).collect()
    }

    #[test]
    fn can_split_numeric_prefix() {
        assert_eq!(
            split_numeric_prefix("03 Intro"),
            Prefixed {
                sort_index: Some(3),
                title: "Intro".to_string()
            }
        );
        assert_eq!(
            split_numeric_prefix("12Tabs"),
            Prefixed {
                sort_index: Some(12),
                title: "Tabs".to_string()
            }
        );
    }

    #[test]
    fn names_without_prefix_are_untouched() {
        assert_eq!(
            split_numeric_prefix("Intro"),
            Prefixed {
                sort_index: None,
                title: "Intro".to_string()
            }
        );
        assert_eq!(split_numeric_prefix("Top 10").sort_index, None);
        assert_eq!(split_numeric_prefix("Top 10").title, "Top 10");
    }

    #[test]
    fn digits_only_leave_an_empty_title() {
        let p = split_numeric_prefix("2024");
        assert_eq!(p.sort_index, Some(2024));
        assert_eq!(p.title, "");
    }

    #[test]
    fn oversized_prefix_is_not_an_index() {
        let name = "123456789012345678901234567890 Huge";
        let p = split_numeric_prefix(name);
        assert_eq!(p.sort_index, None);
        assert_eq!(p.title, name);
    }

    #[test]
    fn numbered_siblings_sort_by_index() {
        let mut nodes = vec![Node(Some(10), "a"), Node(Some(2), "z"), Node(Some(3), "m")];
        sort_siblings(&mut nodes);
        assert_eq!(titles(&nodes), vec!["z", "m", "a"]);
    }

    #[test]
    fn partially_numbered_siblings_sort_by_title() {
        let mut nodes = vec![Node(Some(1), "Zebra"), Node(None, "Apple"), Node(Some(0), "Mango")];
        sort_siblings(&mut nodes);
        assert_eq!(titles(&nodes), vec!["Apple", "Mango", "Zebra"]);
    }

    #[test]
    fn ties_keep_enumeration_order() {
        let mut nodes = vec![Node(Some(1), "second"), Node(Some(0), "first"), Node(Some(1), "third")];
        sort_siblings(&mut nodes);
        assert_eq!(titles(&nodes), vec!["first", "second", "third"]);
    }

    #[test]
    fn empty_group_is_fine() {
        let mut nodes: Vec<Node> = Vec::new();
        sort_siblings(&mut nodes);
        assert!(nodes.is_empty());
    }
}
