use super::*;
use crate::protocol::{ApiRequest, CreateVehicleRequest, ListVehiclesRequest};

#[test]
fn fresh_cache_has_version_zero_everywhere() {
    let cache = TagVersions::new();
    for tag in ResourceTag::ALL {
        assert_eq!(cache.version(tag), 0);
    }
}

#[test]
fn invalidation_marks_only_the_bumped_tags_stale() {
    let mut cache = TagVersions::new();
    let vehicles = cache.stamp(&[ResourceTag::FleetVehicles]);
    let supports = cache.stamp(&[ResourceTag::FleetSupport]);

    assert!(cache.invalidate(&[ResourceTag::FleetVehicles]));

    assert!(cache.is_stale(&[ResourceTag::FleetVehicles], vehicles));
    assert!(!cache.is_stale(&[ResourceTag::FleetSupport], supports));
}

#[test]
fn creating_a_vehicle_stales_the_vehicle_list() {
    // 创建车辆后，车辆列表查询必须在展示前重新拉取
    let mut cache = TagVersions::new();
    let list_stamp = cache.stamp(ListVehiclesRequest::PROVIDES);

    cache.invalidate(CreateVehicleRequest::INVALIDATES);

    assert!(cache.is_stale(ListVehiclesRequest::PROVIDES, list_stamp));
}

#[test]
fn refetching_after_invalidation_yields_a_fresh_stamp() {
    let mut cache = TagVersions::new();
    let stale = cache.stamp(&[ResourceTag::FleetAppointments]);
    cache.invalidate(&[ResourceTag::FleetAppointments]);

    let fresh = cache.stamp(&[ResourceTag::FleetAppointments]);
    assert_ne!(stale, fresh);
    assert!(!cache.is_stale(&[ResourceTag::FleetAppointments], fresh));
}

#[test]
fn tagless_invalidation_reports_no_change() {
    let mut cache = TagVersions::new();
    assert!(!cache.invalidate(&[]));
    assert_eq!(cache, TagVersions::new());
}

#[test]
fn repeated_invalidations_keep_moving_the_version() {
    let mut cache = TagVersions::new();
    cache.invalidate(&[ResourceTag::FleetUser]);
    let first = cache.stamp(&[ResourceTag::FleetUser]);
    cache.invalidate(&[ResourceTag::FleetUser]);
    assert!(cache.is_stale(&[ResourceTag::FleetUser], first));
}
