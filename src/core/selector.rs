use super::registry::StationRegistry;
use super::resource::{ServiceResource, SlotPermit};
use super::types::{ResourceKind, VehicleType};

/// Finds free pumps and registers in registry order
///
/// `select_*` only return a hint: occupancy can change as soon as the scan
/// moves on. `claim_*` turn a hint into a held slot and keep scanning past
/// hints that went stale.
#[derive(Debug, Clone, Copy)]
pub struct ResourceSelector<'a> {
    registry: &'a StationRegistry,
}

impl<'a> ResourceSelector<'a> {
    pub fn new(registry: &'a StationRegistry) -> Self {
        Self { registry }
    }

    pub fn select_pump(&self, fuel: VehicleType) -> Option<usize> {
        first_free(self.registry.pumps(), 0, |p| {
            p.id().kind == ResourceKind::Pump(fuel)
        })
    }

    pub fn select_register(&self) -> Option<usize> {
        first_free(self.registry.registers(), 0, |_| true)
    }

    /// Hold a slot on the first free pump of `fuel`, or `None` if all are full
    pub fn claim_pump(&self, fuel: VehicleType) -> Option<SlotPermit<'a>> {
        claim(self.registry.pumps(), |p| p.id().kind == ResourceKind::Pump(fuel))
    }

    pub fn claim_register(&self) -> Option<SlotPermit<'a>> {
        claim(self.registry.registers(), |_| true)
    }
}

fn first_free<F>(resources: &[ServiceResource], from: usize, matches: F) -> Option<usize>
where
    F: Fn(&ServiceResource) -> bool,
{
    resources
        .iter()
        .enumerate()
        .skip(from)
        .find(|(_, r)| matches(r) && r.has_free_slot())
        .map(|(index, _)| index)
}

fn claim<F>(resources: &[ServiceResource], matches: F) -> Option<SlotPermit<'_>>
where
    F: Fn(&ServiceResource) -> bool,
{
    let mut from = 0;
    while let Some(index) = first_free(resources, from, &matches) {
        if let Some(permit) = resources[index].try_acquire() {
            return Some(permit);
        }
        log::trace!("[Selector] {} filled up before it could be claimed", resources[index].id());
        from = index + 1;
    }
    None
}
