//! Which category skeletons a run creates
//!
//! Skeletons are scaffolds: once a file exists it belongs to the site and is
//! never rewritten. The decision is kept apart from the filesystem so it can
//! be tested on plain sets.

use std::collections::HashSet;

use crate::content::Category;

/// Outcome of comparing derived categories with existing skeleton files
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkeletonPlan<'a> {
    /// Categories whose page must be written
    pub create: Vec<&'a Category>,
    /// Categories whose page already exists and is left alone
    pub keep: Vec<&'a Category>,
}

/// Decide which skeletons to create given the slugs already on disk
///
/// When two labels share a slug only the first is created; the second is
/// treated as existing, as it would be after the first write.
pub fn plan_skeletons<'a>(categories: &'a [Category], existing: &HashSet<String>) -> SkeletonPlan<'a> {
    let mut plan = SkeletonPlan::default();
    let mut planned: HashSet<&str> = HashSet::new();

    for category in categories {
        let slug = category.slug.as_str();
        if existing.contains(slug) || planned.contains(slug) {
            plan.keep.push(category);
        } else {
            planned.insert(slug);
            plan.create.push(category);
        }
    }

    plan
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories(labels: &[&str]) -> Vec<Category> {
        labels.iter().map(|l| Category::new(l)).collect()
    }

    fn existing(slugs: &[&str]) -> HashSet<String> {
        slugs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_all_new() {
        let cats = categories(&["Banking", "Credit Cards"]);
        let plan = plan_skeletons(&cats, &HashSet::new());
        assert_eq!(plan.create.len(), 2);
        assert!(plan.keep.is_empty());
    }

    #[test]
    fn test_existing_are_kept() {
        let cats = categories(&["Banking", "Credit Cards", "Travel"]);
        let plan = plan_skeletons(&cats, &existing(&["credit-cards", "unrelated"]));
        let create: Vec<&str> = plan.create.iter().map(|c| c.slug.as_str()).collect();
        let keep: Vec<&str> = plan.keep.iter().map(|c| c.slug.as_str()).collect();
        assert_eq!(create, vec!["banking", "travel"]);
        assert_eq!(keep, vec!["credit-cards"]);
    }

    #[test]
    fn test_nothing_to_create() {
        let cats = categories(&["Banking"]);
        let plan = plan_skeletons(&cats, &existing(&["banking"]));
        assert!(plan.create.is_empty());
        assert_eq!(plan.keep.len(), 1);
    }

    #[test]
    fn test_colliding_slugs_created_once() {
        let cats = categories(&["Credit Cards", "credit cards"]);
        let plan = plan_skeletons(&cats, &HashSet::new());
        assert_eq!(plan.create.len(), 1);
        assert_eq!(plan.create[0].label, "Credit Cards");
        assert_eq!(plan.keep.len(), 1);
    }
}
