//! Validated construction of the immutable DFT arena.
//!
//! A consuming builder that accumulates declarations and performs all
//! cross-element validation in a single `build()` pass, since DFT
//! construction checks global properties (acyclicity, dense ids, a
//! resolvable top event) that cannot be validated incrementally.

use std::collections::HashMap;

use crate::dft::element::{Element, ElementId, ElementKind, GateKind, VotThreshold};
use crate::dft::errors::ConstructionError;

/// The kind of gate requested by an [`ElementDescriptor`], before children
/// are resolved to ids and SPARE slots are assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateKindSpec {
    And,
    Or,
    Vot(VotThreshold),
    Pand,
    Por,
    SeqAnd,
    Spare,
    Fdep,
    Counting,
}

/// The kind-specific payload of an [`ElementDescriptor`], as supplied by the
/// (external) parser.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ElementSpec {
    Be { active: f64, passive: f64 },
    Const { failed: bool },
    Gate(GateKindSpec),
}

/// A single element declaration as handed to [`DftBuilder`] by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementDescriptor {
    pub name: String,
    pub kind: ElementSpec,
    /// Child names in declaration order; order matters for PAND/SEQAND/POR
    /// and for SPARE (child 0 is the primary).
    pub children: Vec<String>,
}

impl ElementDescriptor {
    pub fn be(name: impl Into<String>, active: f64, passive: f64) -> Self {
        Self {
            name: name.into(),
            kind: ElementSpec::Be { active, passive },
            children: Vec::new(),
        }
    }

    pub fn constant(name: impl Into<String>, failed: bool) -> Self {
        Self {
            name: name.into(),
            kind: ElementSpec::Const { failed },
            children: Vec::new(),
        }
    }

    pub fn gate(
        name: impl Into<String>,
        kind: GateKindSpec,
        children: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: ElementSpec::Gate(kind),
            children: children.into_iter().map(Into::into).collect(),
        }
    }
}

/// The immutable, validated DFT. Built once by [`DftBuilder::build`] and
/// read-only for the remainder of its lifetime (spec §3 lifecycle).
#[derive(Debug, Clone)]
pub struct Dft {
    elements: Vec<Element>,
    top: ElementId,
    /// Basic event ids in id order; drives deterministic exploration (spec §4.3).
    be_ids: Vec<ElementId>,
    /// SPARE gate ids, used by the claim protocol to scan every other
    /// SPARE's `use_index` slot (spec §4.2 step 2).
    spare_ids: Vec<ElementId>,
    /// Number of SPARE `use_index` slots assigned during layout.
    spare_slot_count: u32,
}

impl Dft {
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn element(&self, id: ElementId) -> &Element {
        &self.elements[id as usize]
    }

    pub fn top(&self) -> ElementId {
        self.top
    }

    pub fn be_ids(&self) -> &[ElementId] {
        &self.be_ids
    }

    pub fn spare_ids(&self) -> &[ElementId] {
        &self.spare_ids
    }

    pub fn spare_slot_count(&self) -> u32 {
        self.spare_slot_count
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// Accumulates element declarations for a [`Dft`] under construction.
#[derive(Debug, Clone, Default)]
pub struct DftBuilder {
    descriptors: Vec<ElementDescriptor>,
}

impl DftBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues an element declaration. Order only matters for id assignment;
    /// names are resolved during [`Self::build`].
    pub fn element(mut self, descriptor: ElementDescriptor) -> Self {
        self.descriptors.push(descriptor);
        self
    }

    /// Validates and finalizes the queued declarations into an immutable [`Dft`].
    pub fn build(self, top_name: &str) -> Result<Dft, ConstructionError> {
        let name_to_id = Self::index_names(&self.descriptors)?;
        let mut elements = Self::resolve_elements(&self.descriptors, &name_to_id)?;
        Self::reject_unsupported(&elements)?;
        Self::link_parents(&mut elements);
        Self::assign_ranks(&mut elements)?;
        let spare_slot_count = Self::assign_spare_slots(&mut elements);

        let top = *name_to_id
            .get(top_name)
            .ok_or_else(|| ConstructionError::MissingTopEvent(top_name.to_string()))?;

        let be_ids = elements
            .iter()
            .filter(|e| e.kind.is_be())
            .map(|e| e.id)
            .collect();
        let spare_ids = elements.iter().filter(|e| e.is_spare()).map(|e| e.id).collect();

        Ok(Dft {
            elements,
            top,
            be_ids,
            spare_ids,
            spare_slot_count,
        })
    }

    fn index_names(
        descriptors: &[ElementDescriptor],
    ) -> Result<HashMap<String, ElementId>, ConstructionError> {
        let mut name_to_id = HashMap::with_capacity(descriptors.len());
        for (idx, descriptor) in descriptors.iter().enumerate() {
            if name_to_id
                .insert(descriptor.name.clone(), idx as ElementId)
                .is_some()
            {
                return Err(ConstructionError::DuplicateName(descriptor.name.clone()));
            }
        }
        Ok(name_to_id)
    }

    fn resolve_elements(
        descriptors: &[ElementDescriptor],
        name_to_id: &HashMap<String, ElementId>,
    ) -> Result<Vec<Element>, ConstructionError> {
        let mut next_use_slot = 0u32;
        descriptors
            .iter()
            .enumerate()
            .map(|(idx, descriptor)| {
                let children = descriptor
                    .children
                    .iter()
                    .map(|child_name| {
                        name_to_id.get(child_name).copied().ok_or_else(|| {
                            ConstructionError::UnknownChild {
                                parent: descriptor.name.clone(),
                                child: child_name.clone(),
                            }
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?;

                if descriptor.kind_is_gate() && children.is_empty() {
                    return Err(ConstructionError::EmptyGate(descriptor.name.clone()));
                }

                let kind = match descriptor.kind {
                    ElementSpec::Be { active, passive } => ElementKind::Be { active, passive },
                    ElementSpec::Const { failed } => ElementKind::Const { failed },
                    ElementSpec::Gate(gate_spec) => {
                        ElementKind::Gate(Self::resolve_gate_kind(gate_spec, &mut next_use_slot))
                    }
                };

                Ok(Element {
                    id: idx as ElementId,
                    name: descriptor.name.clone(),
                    rank: 0,
                    parents: Vec::new(),
                    children,
                    kind,
                })
            })
            .collect()
    }

    fn resolve_gate_kind(spec: GateKindSpec, next_use_slot: &mut u32) -> GateKind {
        match spec {
            GateKindSpec::And => GateKind::And,
            GateKindSpec::Or => GateKind::Or,
            GateKindSpec::Vot(k) => GateKind::Vot(k),
            GateKindSpec::Pand => GateKind::Pand,
            GateKindSpec::Por => GateKind::Por,
            GateKindSpec::SeqAnd => GateKind::SeqAnd,
            GateKindSpec::Fdep => GateKind::Fdep,
            GateKindSpec::Counting => GateKind::Counting,
            GateKindSpec::Spare => {
                let use_index = *next_use_slot;
                let active_index = *next_use_slot;
                *next_use_slot += 1;
                GateKind::Spare {
                    use_index,
                    active_index,
                }
            }
        }
    }

    fn reject_unsupported(elements: &[Element]) -> Result<(), ConstructionError> {
        for element in elements {
            if let ElementKind::Gate(gate) = element.kind {
                if !gate.is_supported() {
                    return Err(ConstructionError::UnsupportedGateKind {
                        name: element.name.clone(),
                        kind: gate.name(),
                    });
                }
            }
        }
        Ok(())
    }

    fn link_parents(elements: &mut [Element]) {
        let edges: Vec<(ElementId, ElementId)> = elements
            .iter()
            .flat_map(|e| e.children.iter().map(move |&c| (c, e.id)))
            .collect();
        for (child, parent) in edges {
            elements[child as usize].parents.push(parent);
        }
    }

    /// Assigns ranks by reverse topological order (Kahn's algorithm over the
    /// child->parent edges), erroring if a cycle prevents every element from
    /// being ranked.
    fn assign_ranks(elements: &mut [Element]) -> Result<(), ConstructionError> {
        let n = elements.len();
        let mut remaining_children: Vec<usize> = elements.iter().map(|e| e.children.len()).collect();
        let mut ready: Vec<ElementId> = (0..n as ElementId)
            .filter(|&id| remaining_children[id as usize] == 0)
            .collect();
        let mut ranked = vec![false; n];
        let mut processed = 0usize;

        while let Some(id) = ready.pop() {
            let rank = elements[id as usize]
                .children
                .iter()
                .map(|&c| elements[c as usize].rank + 1)
                .max()
                .unwrap_or(0);
            elements[id as usize].rank = rank;
            ranked[id as usize] = true;
            processed += 1;

            for &parent in &elements[id as usize].parents.clone() {
                remaining_children[parent as usize] -= 1;
                if remaining_children[parent as usize] == 0 {
                    ready.push(parent);
                }
            }
        }

        if processed != n {
            let culprit = (0..n)
                .find(|&i| !ranked[i])
                .map(|i| elements[i].name.clone())
                .unwrap_or_default();
            return Err(ConstructionError::Cycle { culprit });
        }
        Ok(())
    }

    fn assign_spare_slots(elements: &mut [Element]) -> u32 {
        elements
            .iter()
            .filter_map(|e| match e.kind {
                ElementKind::Gate(GateKind::Spare { use_index, .. }) => Some(use_index + 1),
                _ => None,
            })
            .max()
            .unwrap_or(0)
    }
}

impl ElementDescriptor {
    fn kind_is_gate(&self) -> bool {
        matches!(self.kind, ElementSpec::Gate(_))
    }
}
