use crate::domain::model::{Axis, AvailableOptions, Template};
use std::collections::HashSet;

/// Union of every axis value across the catalog, de-duplicated, in the
/// order the values are first seen while walking the catalog.
pub fn available_options(catalog: &[Template]) -> AvailableOptions {
    let mut options = AvailableOptions::default();

    for axis in Axis::ALL {
        let mut seen: HashSet<&str> = HashSet::new();
        let values = options.for_axis_mut(axis);
        for template in catalog {
            for value in template.values(axis) {
                if seen.insert(value.as_str()) {
                    values.push(value.clone());
                }
            }
        }
    }

    options
}
