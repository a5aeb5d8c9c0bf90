use super::clock::TimeRange;
use super::report::ResourceSummary;
use super::types::ResourceId;
use parking_lot::Mutex;
use std::time::Duration;

/// Occupancy and cumulative statistics of one resource
#[derive(Debug, Default, Clone, Copy)]
struct ResourceState {
    occupancy: usize,
    served: u64,
    total_time: Duration,
}

/// A capacity-bounded service resource: a pump or a cash register
///
/// All mutable state sits behind this resource's own lock, so vehicles using
/// different resources never contend with each other.
#[derive(Debug)]
pub struct ServiceResource {
    id: ResourceId,
    capacity: usize,
    service_time: TimeRange,
    state: Mutex<ResourceState>,
}

impl ServiceResource {
    pub fn new(id: ResourceId, capacity: usize, service_time: TimeRange) -> Self {
        Self {
            id,
            capacity,
            service_time,
            state: Mutex::new(ResourceState::default()),
        }
    }

    pub fn id(&self) -> ResourceId {
        self.id
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn service_time(&self) -> TimeRange {
        self.service_time
    }

    pub fn occupancy(&self) -> usize {
        self.state.lock().occupancy
    }

    /// Whether a slot is free right now. Only a hint once the lock is released.
    pub fn has_free_slot(&self) -> bool {
        self.occupancy() < self.capacity
    }

    pub fn served(&self) -> u64 {
        self.state.lock().served
    }

    pub fn total_service_time(&self) -> Duration {
        self.state.lock().total_time
    }

    /// Claim a slot if one is free
    pub fn try_acquire(&self) -> Option<SlotPermit<'_>> {
        let mut state = self.state.lock();
        if state.occupancy >= self.capacity {
            return None;
        }
        state.occupancy += 1;
        let occupancy = state.occupancy;
        Some(SlotPermit {
            resource: self,
            occupancy,
            released: false,
        })
    }

    pub fn summary(&self) -> ResourceSummary {
        let state = *self.state.lock();
        ResourceSummary::new(self.id, self.capacity, state.served, state.total_time)
    }

    fn release(&self, visit: Option<Duration>) {
        let mut state = self.state.lock();
        if let Some(duration) = visit {
            state.served += 1;
            state.total_time += duration;
        }
        state.occupancy = state.occupancy.saturating_sub(1);
    }
}

/// One occupied slot of a [`ServiceResource`]
///
/// Completing the permit records the visit and frees the slot in the same
/// critical section. Dropping it without completing only frees the slot.
#[derive(Debug)]
pub struct SlotPermit<'a> {
    resource: &'a ServiceResource,
    occupancy: usize,
    released: bool,
}

impl<'a> SlotPermit<'a> {
    pub fn resource(&self) -> &'a ServiceResource {
        self.resource
    }

    /// Occupancy of the resource right after this slot was claimed
    pub fn occupancy_at_acquire(&self) -> usize {
        self.occupancy
    }

    pub fn complete(mut self, duration: Duration) {
        self.released = true;
        self.resource.release(Some(duration));
    }
}

impl Drop for SlotPermit<'_> {
    fn drop(&mut self) {
        if !self.released {
            self.resource.release(None);
        }
    }
}
