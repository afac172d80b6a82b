use domain::{
    Contact, Date, Device, DeviceMountAction, DeviceUnmountAction, MountActionsCollection,
    Platform, PlatformMountAction, PlatformUnmountAction,
};
use sms_mounting::{get_active_devices, get_active_platforms};

fn date(value: &str) -> Date {
    value.parse().expect("date")
}

fn contact() -> Contact {
    Contact::new("c-1", "Ada", "Lovelace", "ada@example.org")
}

fn platform_mount(platform: &Platform, begin: &str) -> PlatformMountAction {
    PlatformMountAction {
        id: format!("pma-{}-{}", platform.id, begin),
        platform: platform.clone(),
        parent_platform: None,
        begin_date: date(begin),
        offset_x: 0.0,
        offset_y: 0.0,
        offset_z: 0.0,
        contact: contact(),
        description: String::new(),
    }
}

fn platform_unmount(platform: &Platform, end: &str) -> PlatformUnmountAction {
    PlatformUnmountAction {
        id: format!("pua-{}-{}", platform.id, end),
        platform: platform.clone(),
        end_date: date(end),
        contact: contact(),
        description: String::new(),
    }
}

#[test]
fn platform_mounted_on_first_of_january() {
    let platform = Platform::new("1", "Platform 1");
    let mount = platform_mount(&platform, "2020-01-01T00:00:00Z");
    let collection = MountActionsCollection {
        platform_mount_actions: vec![mount.clone()],
        ..Default::default()
    };

    let active = get_active_platforms(&collection, Some(date("2020-01-02T00:00:00Z")));
    assert_eq!(active.len(), 1);
    assert_eq!(active.ids(), vec!["1"]);
    assert_eq!(active.get("1"), Some(&mount));

    let before = get_active_platforms(&collection, Some(date("2019-12-31T00:00:00Z")));
    assert!(before.is_empty());
}

#[test]
fn activation_is_half_open() {
    let platform = Platform::new("1", "Platform 1");
    let collection = MountActionsCollection {
        platform_mount_actions: vec![platform_mount(&platform, "2020-01-01T00:00:00Z")],
        platform_unmount_actions: vec![platform_unmount(&platform, "2020-02-01T00:00:00Z")],
        ..Default::default()
    };

    let at = |value: &str| get_active_platforms(&collection, Some(date(value))).contains("1");
    assert!(!at("2019-12-31T23:59:59Z"));
    assert!(at("2020-01-01T00:00:00Z"));
    assert!(at("2020-01-15T00:00:00Z"));
    assert!(at("2020-01-31T23:59:59Z"));
    assert!(!at("2020-02-01T00:00:00Z"));
    assert!(!at("2020-03-01T00:00:00Z"));
}

#[test]
fn remount_supersedes_earlier_mount() {
    let platform = Platform::new("1", "Platform 1");
    let first = platform_mount(&platform, "2020-01-01T00:00:00Z");
    let second = platform_mount(&platform, "2020-03-01T00:00:00Z");
    // 输入顺序无关
    let collection = MountActionsCollection {
        platform_mount_actions: vec![second.clone(), first.clone()],
        platform_unmount_actions: vec![
            platform_unmount(&platform, "2020-04-01T00:00:00Z"),
            platform_unmount(&platform, "2020-02-01T00:00:00Z"),
        ],
        ..Default::default()
    };

    let at = |value: &str| {
        get_active_platforms(&collection, Some(date(value)))
            .get("1")
            .cloned()
    };
    assert_eq!(at("2020-01-10T00:00:00Z"), Some(first));
    assert_eq!(at("2020-02-10T00:00:00Z"), None);
    assert_eq!(at("2020-03-10T00:00:00Z"), Some(second));
    assert_eq!(at("2020-04-10T00:00:00Z"), None);
}

#[test]
fn unmount_at_mount_instant_closes_it() {
    let platform = Platform::new("1", "Platform 1");
    let collection = MountActionsCollection {
        platform_mount_actions: vec![platform_mount(&platform, "2020-01-01T00:00:00Z")],
        platform_unmount_actions: vec![platform_unmount(&platform, "2020-01-01T01:00:00+01:00")],
        ..Default::default()
    };
    let active = get_active_platforms(&collection, Some(date("2020-06-01T00:00:00Z")));
    assert!(active.is_empty());
}

#[test]
fn entities_without_id_are_never_active() {
    let unsaved = Platform::new("", "draft");
    let saved = Platform::new("2", "Platform 2");
    let collection = MountActionsCollection {
        platform_mount_actions: vec![
            platform_mount(&unsaved, "2020-01-01T00:00:00Z"),
            platform_mount(&saved, "2020-01-01T00:00:00Z"),
        ],
        ..Default::default()
    };
    let active = get_active_platforms(&collection, Some(date("2020-01-02T00:00:00Z")));
    assert_eq!(active.ids(), vec!["2"]);
}

#[test]
fn missing_timestamp_yields_nothing() {
    let platform = Platform::new("1", "Platform 1");
    let collection = MountActionsCollection {
        platform_mount_actions: vec![platform_mount(&platform, "2020-01-01T00:00:00Z")],
        ..Default::default()
    };
    assert!(get_active_platforms(&collection, None).is_empty());
}

#[test]
fn unmount_without_mount_is_never_active() {
    let platform = Platform::new("1", "Platform 1");
    let collection = MountActionsCollection {
        platform_unmount_actions: vec![platform_unmount(&platform, "2020-01-01T00:00:00Z")],
        ..Default::default()
    };
    assert!(get_active_platforms(&collection, Some(date("2021-01-01T00:00:00Z"))).is_empty());
}

#[test]
fn active_entries_iterate_oldest_first() {
    let a = Platform::new("a", "A");
    let b = Platform::new("b", "B");
    let c = Platform::new("c", "C");
    let collection = MountActionsCollection {
        platform_mount_actions: vec![
            platform_mount(&c, "2020-03-01T00:00:00Z"),
            platform_mount(&a, "2020-01-01T00:00:00Z"),
            platform_mount(&b, "2020-02-01T00:00:00Z"),
        ],
        ..Default::default()
    };
    let active = get_active_platforms(&collection, Some(date("2020-04-01T00:00:00Z")));
    let ids: Vec<&str> = active.iter().map(|(id, _)| id).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

#[test]
fn simultaneous_mounts_prefer_last_in_input_order() {
    let platform = Platform::new("1", "Platform 1");
    let mut first = platform_mount(&platform, "2020-01-01T00:00:00Z");
    first.description = "first".to_string();
    let mut second = platform_mount(&platform, "2020-01-01T00:00:00Z");
    second.description = "second".to_string();
    let collection = MountActionsCollection {
        platform_mount_actions: vec![first, second],
        ..Default::default()
    };
    let active = get_active_platforms(&collection, Some(date("2020-01-02T00:00:00Z")));
    assert_eq!(
        active.get("1").map(|action| action.description.as_str()),
        Some("second")
    );
}

#[test]
fn devices_resolve_independently_of_platforms() {
    let device = Device::new("1", "Device 1");
    let platform = Platform::new("1", "Platform 1");
    let collection = MountActionsCollection {
        platform_mount_actions: vec![platform_mount(&platform, "2020-01-01T00:00:00Z")],
        device_mount_actions: vec![DeviceMountAction {
            id: "dma-1".to_string(),
            device: device.clone(),
            parent_platform: Some(platform.clone()),
            begin_date: date("2020-01-05T00:00:00Z"),
            offset_x: 1.0,
            offset_y: 2.0,
            offset_z: 3.0,
            contact: contact(),
            description: String::new(),
        }],
        device_unmount_actions: vec![DeviceUnmountAction {
            id: "dua-1".to_string(),
            device,
            end_date: date("2020-01-10T00:00:00Z"),
            contact: contact(),
            description: String::new(),
        }],
        ..Default::default()
    };

    let at = |value: &str| get_active_devices(&collection, Some(date(value)));
    assert!(at("2020-01-02T00:00:00Z").is_empty());
    assert!(at("2020-01-06T00:00:00Z").contains("1"));
    assert!(at("2020-01-11T00:00:00Z").is_empty());
    assert!(get_active_platforms(&collection, Some(date("2020-01-11T00:00:00Z"))).contains("1"));
}
