use super::{resolve, Level, LevelOverride};
use crate::error::Error;

#[test]
fn test_clamp_bounds() {
    assert_eq!(Level::clamp(0), Level::MIN);
    assert_eq!(Level::clamp(-5), Level::MIN);
    assert_eq!(Level::clamp(7), Level::MAX);
    assert_eq!(Level::clamp(i64::MAX), Level::MAX);
    assert_eq!(Level::clamp(3).get(), 3);
}

#[test]
fn test_canonical_tags() {
    let tags: Vec<&str> = (1..=6).map(Level::clamp).map(Level::canonical_tag).collect();
    assert_eq!(tags, ["h1", "h2", "h3", "h4", "h5", "h6"]);
    assert_eq!(Level::from_tag("H4"), Some(Level::clamp(4)));
    assert_eq!(Level::from_tag("h7"), None);
    assert_eq!(Level::from_tag("div"), None);
}

#[test]
fn test_parse_markup_forms() {
    assert_eq!("3".parse::<LevelOverride>().unwrap(), LevelOverride::Absolute(3));
    assert_eq!(" 4 ".parse::<LevelOverride>().unwrap(), LevelOverride::Absolute(4));
    assert_eq!("+2".parse::<LevelOverride>().unwrap(), LevelOverride::Relative(2));
    assert_eq!("-1".parse::<LevelOverride>().unwrap(), LevelOverride::Relative(-1));
    assert_eq!("+0".parse::<LevelOverride>().unwrap(), LevelOverride::Relative(0));
}

#[test]
fn test_parse_rejects_missing_number() {
    for raw in ["+", "-", "", "abc", "+2px", "+-2", "2.5"] {
        let err = raw.parse::<LevelOverride>().unwrap_err();
        assert!(
            matches!(&err, Error::MalformedLevel { value } if value == raw),
            "expected {raw:?} to be rejected, got {err:?}"
        );
    }
}

#[test]
fn test_deserialize_number_and_string() {
    let absolute: LevelOverride = serde_json::from_str("3").unwrap();
    assert_eq!(absolute, LevelOverride::Absolute(3));

    // A negative number is an absolute level, only the string form is relative.
    let negative: LevelOverride = serde_json::from_str("-1").unwrap();
    assert_eq!(negative, LevelOverride::Absolute(-1));

    let relative: LevelOverride = serde_json::from_str(r#""+2""#).unwrap();
    assert_eq!(relative, LevelOverride::Relative(2));

    let err = serde_json::from_str::<LevelOverride>(r#""+""#).unwrap_err();
    assert!(err.to_string().contains("malformed level override"), "{err}");
}

#[test]
fn test_oversized_levels_saturate() {
    assert_eq!(
        "99999999999999999999".parse::<LevelOverride>().unwrap(),
        LevelOverride::Absolute(i64::MAX)
    );
    assert_eq!(
        "+99999999999999999999".parse::<LevelOverride>().unwrap(),
        LevelOverride::Relative(i64::MAX)
    );
    assert_eq!(
        "-99999999999999999999".parse::<LevelOverride>().unwrap(),
        LevelOverride::Relative(-i64::MAX)
    );

    let huge: LevelOverride = serde_json::from_str("99999999999999999999").unwrap();
    assert_eq!(huge, LevelOverride::Absolute(i64::MAX));
    let above_i64: LevelOverride = serde_json::from_str("10000000000000000000").unwrap();
    assert_eq!(above_i64, LevelOverride::Absolute(i64::MAX));
    let tiny: LevelOverride = serde_json::from_str("-99999999999999999999").unwrap();
    assert_eq!(tiny, LevelOverride::Absolute(i64::MIN));

    assert_eq!(Level::clamp(resolve(1, 0, Some(huge))), Level::MAX);
    assert_eq!(Level::clamp(resolve(1, 0, Some(tiny))), Level::MIN);
    assert_eq!(
        Level::clamp(resolve(3, 2, Some(LevelOverride::Relative(i64::MAX)))),
        Level::MAX
    );
}

#[test]
fn test_deserialize_integral_floats() {
    let two: LevelOverride = serde_json::from_str("2.0").unwrap();
    assert_eq!(two, LevelOverride::Absolute(2));

    let err = serde_json::from_str::<LevelOverride>("2.5").unwrap_err();
    assert!(err.to_string().contains("malformed level override"), "{err}");
}

#[test]
fn test_default_is_parent_plus_one() {
    for parent in 0..10 {
        let level = Level::clamp(resolve(parent + 1, parent, None));
        assert_eq!(level, Level::clamp(parent + 1), "parent {parent}");
    }
}

#[test]
fn test_absolute_ignores_parent() {
    for parent in 0..10 {
        for n in -2..10 {
            let level = Level::clamp(resolve(parent + 1, parent, Some(LevelOverride::Absolute(n))));
            assert_eq!(level, Level::clamp(n), "parent {parent}, absolute {n}");
        }
    }
}

#[test]
fn test_relative_applies_to_reference_not_default() {
    for parent in 0..10 {
        for delta in -8..8 {
            let level = Level::clamp(resolve(
                parent + 1,
                parent,
                Some(LevelOverride::Relative(delta)),
            ));
            assert_eq!(level, Level::clamp(parent + delta), "parent {parent}, delta {delta}");
        }
    }
}
