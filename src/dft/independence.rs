//! Independence analysis used to decide whether a gate's subtree can be
//! solved in isolation from the rest of the DFT.
//!
//! A unit starts as the transitive closure of `root`'s children; any element
//! pulled into the unit that is shared with another part of the tree also
//! pulls in its other parents (and transitively their closures), since a
//! shared element ties its whole module together. The unit is independent
//! only if `root`'s own parents never end up inside it — if one did, some
//! path would reconverge back into the unit from above `root`, so the unit
//! cannot be solved in isolation.

use std::collections::BTreeSet;

use crate::dft::element::ElementId;
use crate::dft::graph::Dft;

/// Returns `root`'s independent unit if one exists, or `None` if the
/// module reconverges with the rest of the tree.
pub fn independent_unit(dft: &Dft, root: ElementId) -> Option<BTreeSet<ElementId>> {
    let mut unit = BTreeSet::new();
    extend_unit(dft, root, root, &mut unit);

    let reconverges = dft
        .element(root)
        .parents
        .iter()
        .any(|&parent| unit.contains(&parent));

    if reconverges {
        None
    } else {
        Some(unit)
    }
}

/// Inserts `id` into `unit`, then recurses into its children and, unless
/// `id` is `root` itself, into its other parents too.
fn extend_unit(dft: &Dft, root: ElementId, id: ElementId, unit: &mut BTreeSet<ElementId>) {
    if !unit.insert(id) {
        return;
    }
    for &child in &dft.element(id).children {
        extend_unit(dft, root, child, unit);
    }
    if id != root {
        for &parent in &dft.element(id).parents {
            extend_unit(dft, root, parent, unit);
        }
    }
}
