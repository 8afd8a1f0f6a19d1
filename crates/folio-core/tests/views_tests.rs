use folio_core::*;
use glam::Vec3;

#[test]
fn portfolio_table_matches_page_slides() {
    let t = ViewTable::portfolio().unwrap();
    assert_eq!(t.len(), 4);
    assert!(!t.is_empty());
    assert_eq!(t.first().position, Vec3::new(3.2, 2.2, 4.2));
    assert_eq!(t.view(3).position, Vec3::new(2.6, -2.2, -3.8));
    assert!(t.iter().all(|v| v.look_at == Vec3::ZERO));
    assert!(t.view(0).label.starts_with("Intro"));
    assert!(t.view(3).label.starts_with("Contact"));
    assert_eq!(t.first().accent, Vec3::new(1.0, 1.0, 0.0));
    assert_eq!(t.view(1).accent, Vec3::new(221.0 / 255.0, 0.0, 1.0));
}

#[test]
fn portfolio_table_passes_validation() {
    let views: Vec<Viewpoint> = ViewTable::portfolio().unwrap().iter().cloned().collect();
    assert!(ViewTable::new(views).is_ok());
}

#[test]
fn empty_table_is_rejected() {
    assert_eq!(ViewTable::new(Vec::new()).unwrap_err(), ViewTableError::Empty);
}

#[test]
fn non_finite_vectors_are_rejected() {
    let ok = Viewpoint::new(Vec3::ONE, Vec3::ZERO, "ok");
    let bad_look = Viewpoint::new(Vec3::ONE, Vec3::new(0.0, f32::NAN, 0.0), "bad");
    match ViewTable::new(vec![ok.clone(), bad_look]).unwrap_err() {
        ViewTableError::NonFinite { index, field, label } => {
            assert_eq!(index, 1);
            assert_eq!(field, "look_at");
            assert_eq!(label, "bad");
        }
        e => panic!("unexpected error {e}"),
    }

    let bad_pos = Viewpoint::new(Vec3::new(f32::INFINITY, 0.0, 0.0), Vec3::ZERO, "p");
    assert!(matches!(
        ViewTable::new(vec![bad_pos]),
        Err(ViewTableError::NonFinite { field: "position", .. })
    ));

    let bad_accent = ok.with_accent(Vec3::splat(f32::NAN));
    assert!(matches!(
        ViewTable::new(vec![bad_accent]),
        Err(ViewTableError::NonFinite { field: "accent", .. })
    ));
}

#[test]
fn indexed_access() {
    let t = ViewTable::portfolio().unwrap();
    assert!(t.get(3).is_some());
    assert!(t.get(4).is_none());
    assert_eq!(t.view(99).label, t.view(3).label);
    assert_eq!((&t).into_iter().count(), t.len());
}

#[test]
fn builder_fills_optional_fields() {
    let v = Viewpoint::new(Vec3::X, Vec3::ZERO, "Work")
        .with_subtitle("Selected")
        .with_description("Things")
        .with_details(["one", "two"])
        .with_align(TextAlign::Right)
        .with_accent(Vec3::new(0.1, 0.2, 0.3));
    assert_eq!(v.subtitle.as_deref(), Some("Selected"));
    assert_eq!(v.description.as_deref(), Some("Things"));
    assert_eq!(v.details, vec!["one".to_string(), "two".to_string()]);
    assert_eq!(v.align.as_css(), "right");

    let bare = Viewpoint::new(Vec3::X, Vec3::ZERO, "Bare");
    assert!(bare.subtitle.is_none());
    assert!(bare.details.is_empty());
    assert_eq!(bare.align, TextAlign::Center);
}

#[test]
fn error_messages_name_the_slide() {
    let e = ViewTableError::NonFinite {
        index: 2,
        label: "About".into(),
        field: "position",
    };
    assert_eq!(e.to_string(), "viewpoint 2 (About) has a non-finite position");
}

#[test]
fn bad_hex_accent_names_the_viewpoint() {
    let err = Viewpoint::new(Vec3::ONE, Vec3::ZERO, "Work")
        .with_hex_accent("#12")
        .unwrap_err();
    assert_eq!(
        err,
        ViewTableError::BadAccent {
            label: "Work".into(),
            source: ColorParseError::BadLength("#12".into()),
        }
    );
}
