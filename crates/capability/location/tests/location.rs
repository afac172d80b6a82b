use domain::{
    Configuration, Date, DeviceProperty, DynamicLocationBeginAction, DynamicLocationEndAction,
    LocationBeginAction, LocationEndAction, StaticLocationBeginAction, StaticLocationEndAction,
};
use sms_location::{
    get_currently_active_location_action, get_end_action_for_active_location,
    get_latest_active_action_end_date, get_location_timeline,
    get_next_active_location_begin_date,
};

fn date(value: &str) -> Date {
    value.parse().expect("date")
}

fn static_begin(id: &str, begin: &str) -> StaticLocationBeginAction {
    StaticLocationBeginAction {
        id: id.to_string(),
        begin_date: Some(date(begin)),
        x: Some(12.5),
        y: Some(51.3),
        z: Some(0.0),
        epsg_code: "4326".to_string(),
        ..Default::default()
    }
}

fn static_end(id: &str, end: &str) -> StaticLocationEndAction {
    StaticLocationEndAction {
        id: id.to_string(),
        end_date: Some(date(end)),
        ..Default::default()
    }
}

fn dynamic_begin(id: &str, begin: &str) -> DynamicLocationBeginAction {
    DynamicLocationBeginAction {
        id: id.to_string(),
        begin_date: Some(date(begin)),
        x: Some(DeviceProperty {
            id: "prop-lon".to_string(),
            property_name: "Longitude".to_string(),
            unit_name: "deg".to_string(),
        }),
        ..Default::default()
    }
}

fn dynamic_end(id: &str, end: &str) -> DynamicLocationEndAction {
    DynamicLocationEndAction {
        id: id.to_string(),
        end_date: Some(date(end)),
        ..Default::default()
    }
}

/// 静态：1 月 ~ 2 月；动态：3 月 ~ 4 月；静态：5 月起未结束。
fn configuration() -> Configuration {
    Configuration {
        id: "cfg-1".to_string(),
        label: "Station".to_string(),
        static_location_begin_actions: vec![
            static_begin("s2", "2020-05-01T00:00:00Z"),
            static_begin("s1", "2020-01-01T00:00:00Z"),
        ],
        static_location_end_actions: vec![static_end("se1", "2020-02-01T00:00:00Z")],
        dynamic_location_begin_actions: vec![dynamic_begin("d1", "2020-03-01T00:00:00Z")],
        dynamic_location_end_actions: vec![dynamic_end("de1", "2020-04-01T00:00:00Z")],
    }
}

fn active_id(configuration: &Configuration, at: &str) -> Option<String> {
    get_currently_active_location_action(configuration, date(at)).map(|action| match action {
        LocationBeginAction::Static(action) => action.id,
        LocationBeginAction::Dynamic(action) => action.id,
    })
}

#[test]
fn active_location_follows_the_timeline() {
    let configuration = configuration();
    assert_eq!(active_id(&configuration, "2019-12-31T00:00:00Z"), None);
    assert_eq!(active_id(&configuration, "2020-01-01T00:00:00Z").as_deref(), Some("s1"));
    assert_eq!(active_id(&configuration, "2020-01-15T00:00:00Z").as_deref(), Some("s1"));
    assert_eq!(active_id(&configuration, "2020-02-01T00:00:00Z"), None);
    assert_eq!(active_id(&configuration, "2020-02-15T00:00:00Z"), None);
    assert_eq!(active_id(&configuration, "2020-03-15T00:00:00Z").as_deref(), Some("d1"));
    assert_eq!(active_id(&configuration, "2020-04-15T00:00:00Z"), None);
    assert_eq!(active_id(&configuration, "2021-01-01T00:00:00Z").as_deref(), Some("s2"));
}

#[test]
fn end_actions_pair_within_their_kind() {
    let configuration = configuration();
    let s1 = LocationBeginAction::Static(static_begin("s1", "2020-01-01T00:00:00Z"));
    let d1 = LocationBeginAction::Dynamic(dynamic_begin("d1", "2020-03-01T00:00:00Z"));
    let s2 = LocationBeginAction::Static(static_begin("s2", "2020-05-01T00:00:00Z"));

    assert_eq!(
        get_end_action_for_active_location(&configuration, Some(&s1)),
        Some(LocationEndAction::Static(static_end("se1", "2020-02-01T00:00:00Z")))
    );
    assert_eq!(
        get_end_action_for_active_location(&configuration, Some(&d1)),
        Some(LocationEndAction::Dynamic(dynamic_end("de1", "2020-04-01T00:00:00Z")))
    );
    assert_eq!(get_end_action_for_active_location(&configuration, Some(&s2)), None);
    assert_eq!(get_end_action_for_active_location(&configuration, None), None);
}

#[test]
fn should_not_give_us_an_end_action_that_was_used_for_another_begin() {
    // 第一个结束动作被删除：两个开始动作，只剩第二个结束动作
    let configuration = Configuration {
        static_location_begin_actions: vec![
            static_begin("s1", "2020-01-01T00:00:00Z"),
            static_begin("s2", "2020-03-01T00:00:00Z"),
        ],
        static_location_end_actions: vec![static_end("se2", "2020-04-01T00:00:00Z")],
        ..Default::default()
    };
    let s1 = LocationBeginAction::Static(static_begin("s1", "2020-01-01T00:00:00Z"));
    let s2 = LocationBeginAction::Static(static_begin("s2", "2020-03-01T00:00:00Z"));

    assert_eq!(get_end_action_for_active_location(&configuration, Some(&s1)), None);
    assert_eq!(
        get_end_action_for_active_location(&configuration, Some(&s2)),
        Some(LocationEndAction::Static(static_end("se2", "2020-04-01T00:00:00Z")))
    );
    assert_eq!(active_id(&configuration, "2020-02-01T00:00:00Z").as_deref(), Some("s1"));
    assert_eq!(active_id(&configuration, "2020-03-15T00:00:00Z").as_deref(), Some("s2"));
}

#[test]
fn surplus_end_actions_are_ignored() {
    let configuration = Configuration {
        static_location_begin_actions: vec![static_begin("s1", "2020-01-01T00:00:00Z")],
        static_location_end_actions: vec![
            static_end("se1", "2020-02-01T00:00:00Z"),
            static_end("se2", "2020-03-01T00:00:00Z"),
        ],
        ..Default::default()
    };
    let timeline = get_location_timeline(&configuration);
    assert_eq!(timeline.len(), 1);
    assert_eq!(timeline[0].end_date(), Some(date("2020-02-01T00:00:00Z")));
}

#[test]
fn undated_actions_are_ignored() {
    let mut configuration = configuration();
    configuration
        .static_location_begin_actions
        .push(StaticLocationBeginAction {
            id: "draft".to_string(),
            ..Default::default()
        });
    configuration
        .dynamic_location_end_actions
        .push(DynamicLocationEndAction::default());

    assert_eq!(get_location_timeline(&configuration).len(), 3);
    assert_eq!(active_id(&configuration, "2020-03-15T00:00:00Z").as_deref(), Some("d1"));
}

#[test]
fn timeline_lists_all_begins_oldest_first() {
    let timeline = get_location_timeline(&configuration());
    let begins: Vec<Option<Date>> = timeline.iter().map(|entry| entry.begin_date()).collect();
    assert_eq!(
        begins,
        vec![
            Some(date("2020-01-01T00:00:00Z")),
            Some(date("2020-03-01T00:00:00Z")),
            Some(date("2020-05-01T00:00:00Z")),
        ]
    );
    assert!(timeline[2].end.is_none());
}

#[test]
fn next_begin_date_is_strictly_after() {
    let configuration = configuration();
    let next = |value: &str| get_next_active_location_begin_date(&configuration, date(value));
    assert_eq!(next("2019-01-01T00:00:00Z"), Some(date("2020-01-01T00:00:00Z")));
    assert_eq!(next("2020-01-01T00:00:00Z"), Some(date("2020-03-01T00:00:00Z")));
    assert_eq!(next("2020-03-15T00:00:00Z"), Some(date("2020-05-01T00:00:00Z")));
    assert_eq!(next("2020-05-01T00:00:00Z"), None);
}

#[test]
fn latest_end_date_is_strictly_before() {
    let configuration = configuration();
    let latest = |value: &str| get_latest_active_action_end_date(&configuration, date(value));
    assert_eq!(latest("2020-01-15T00:00:00Z"), None);
    assert_eq!(latest("2020-02-01T00:00:00Z"), None);
    assert_eq!(latest("2020-02-15T00:00:00Z"), Some(date("2020-02-01T00:00:00Z")));
    assert_eq!(latest("2020-06-01T00:00:00Z"), Some(date("2020-04-01T00:00:00Z")));
}

#[test]
fn end_action_is_found_for_an_edited_copy_of_the_begin() {
    let configuration = configuration();
    // 同一动作：坐标与描述被修改，开始时刻以其他偏移表示
    let mut edited = static_begin("s1", "2020-01-01T01:00:00+01:00");
    edited.x = Some(f64::NAN);
    edited.description = "moved".to_string();
    assert_eq!(
        get_end_action_for_active_location(
            &configuration,
            Some(&LocationBeginAction::Static(edited))
        ),
        Some(LocationEndAction::Static(static_end("se1", "2020-02-01T00:00:00Z")))
    );

    // ID 不同则不是同一动作
    let other = LocationBeginAction::Static(static_begin("s9", "2020-01-01T00:00:00Z"));
    assert_eq!(get_end_action_for_active_location(&configuration, Some(&other)), None);
}
