use super::*;

#[test]
fn all_parts_are_distinct() {
    for (i, a) in SurfacePart::ALL.iter().enumerate() {
        for (j, b) in SurfacePart::ALL.iter().enumerate() {
            if i == j {
                assert_eq!(a, b);
            } else {
                assert_ne!(a, b);
            }
        }
    }
}

#[test]
fn default_config_shows_every_part() {
    let config = SurfaceConfig::default();
    for part in SurfacePart::ALL {
        assert_eq!(config.visibility(part), PartVisibility::Shown);
        assert!(!config.is_suppressed(part));
    }
}

#[test]
fn bare_canvas_suppresses_all_chrome_except_drawing_controls() {
    let config = SurfaceConfig::bare_canvas();
    for part in SurfacePart::ALL {
        match part {
            SurfacePart::StylePanel | SurfacePart::Toolbar => {
                assert!(!config.is_suppressed(part), "{part:?} should stay shown");
            }
            _ => assert!(config.is_suppressed(part), "{part:?} should be suppressed"),
        }
    }
}

#[test]
fn bare_canvas_covers_the_full_part_set() {
    let config = SurfaceConfig::bare_canvas();
    let suppressed = SurfacePart::ALL
        .iter()
        .filter(|part| config.is_suppressed(**part))
        .count();
    assert_eq!(suppressed, SurfacePart::ALL.len() - 2);
}

#[test]
fn part_visibility_default_is_shown() {
    assert_eq!(PartVisibility::default(), PartVisibility::Shown);
}
