// Tests for pump and register selection
#[cfg(test)]
mod tests {
    use crate::core::registry::StationRegistry;
    use crate::core::selector::ResourceSelector;
    use crate::core::types::{ResourceId, VehicleType};
    use std::sync::Barrier;

    #[test]
    fn test_select_pump_scans_in_order() {
        let registry = StationRegistry::reference();
        let selector = ResourceSelector::new(&registry);

        assert_eq!(selector.select_pump(VehicleType::Gas), Some(0));
        assert_eq!(selector.select_pump(VehicleType::Diesel), Some(4));
        assert_eq!(selector.select_pump(VehicleType::Lpg), Some(8));
        assert_eq!(selector.select_pump(VehicleType::Electric), Some(9));
        assert_eq!(selector.select_register(), Some(0));
    }

    #[test]
    fn test_full_pump_is_skipped() {
        let registry = StationRegistry::reference();
        let selector = ResourceSelector::new(&registry);

        let first = registry.pump(0).unwrap();
        let _a = first.try_acquire().unwrap();
        // One slot left, still selectable
        assert_eq!(selector.select_pump(VehicleType::Gas), Some(0));
        let _b = first.try_acquire().unwrap();
        assert_eq!(selector.select_pump(VehicleType::Gas), Some(1));
    }

    #[test]
    fn test_claim_pump_returns_none_when_type_is_full() {
        let registry = StationRegistry::reference();
        let selector = ResourceSelector::new(&registry);

        let first = selector.claim_pump(VehicleType::Lpg).unwrap();
        let second = selector.claim_pump(VehicleType::Lpg).unwrap();
        assert_eq!(first.resource().id(), ResourceId::pump(VehicleType::Lpg, 9));
        assert_eq!(second.resource().id(), ResourceId::pump(VehicleType::Lpg, 9));

        assert!(selector.select_pump(VehicleType::Lpg).is_none());
        assert!(selector.claim_pump(VehicleType::Lpg).is_none());
        assert_eq!(registry.pump(8).unwrap().occupancy(), 2);

        // Other types are unaffected
        assert!(selector.claim_pump(VehicleType::Gas).is_some());
    }

    #[test]
    fn test_claim_register_moves_to_next_register() {
        let registry = StationRegistry::reference();
        let selector = ResourceSelector::new(&registry);

        let permits: Vec<_> = (0..4).map(|_| selector.claim_register().unwrap()).collect();
        let ids: Vec<_> = permits.iter().map(|p| p.resource().id().station_id).collect();
        assert_eq!(ids, vec![1, 1, 2, 2]);
        assert!(selector.select_register().is_none());
        assert!(selector.claim_register().is_none());

        drop(permits);
        assert_eq!(selector.select_register(), Some(0));
    }

    #[test]
    fn test_concurrent_claims_respect_capacity() {
        let registry = StationRegistry::reference();
        let selector = ResourceSelector::new(&registry);
        let barrier = Barrier::new(20);

        // 4 Gas pumps with 2 slots each; every thread holds its claim until all have tried
        let claimed: usize = std::thread::scope(|s| {
            let handles: Vec<_> = (0..20)
                .map(|_| {
                    s.spawn(|| {
                        let permit = selector.claim_pump(VehicleType::Gas);
                        let ok = permit.as_ref().map_or(true, |p| {
                            p.occupancy_at_acquire() <= p.resource().capacity()
                        });
                        barrier.wait();
                        assert!(ok);
                        permit.is_some() as usize
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).sum()
        });

        assert_eq!(claimed, 8);
        for pump in registry.pumps() {
            assert_eq!(pump.occupancy(), 0);
        }
    }
}
