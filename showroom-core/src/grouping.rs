use crate::models::FacetValue;

/// Group canonical categories by their secondary nav group key
/// Used only for display ordering; filtering semantics never look at
/// the nav group. Categories without a nav group land in a trailing
/// "Other" section. Group order follows the first appearance of each
/// group in canonical order; categories keep canonical order within
/// their group.
pub fn group_categories_by_nav<'a>(categories: &[&'a FacetValue]) -> Vec<(String, Vec<&'a FacetValue>)> {
    let mut groups: Vec<(String, Vec<&FacetValue>)> = Vec::new();
    let mut ungrouped: Vec<&FacetValue> = Vec::new();

    for &value in categories {
        match &value.nav_group {
            Some(nav_group) => {
                if let Some((_, members)) = groups.iter_mut().find(|(name, _)| name == nav_group) {
                    members.push(value);
                } else {
                    groups.push((nav_group.clone(), vec![value]));
                }
            }
            None => ungrouped.push(value),
        }
    }

    if !ungrouped.is_empty() {
        groups.push(("Other".to_string(), ungrouped));
    }

    groups
}
