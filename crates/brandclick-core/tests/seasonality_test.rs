use brandclick_core::errors::PredictionError;
use brandclick_core::{Month, SeasonalityTable};

#[test]
fn uq2019_lookup_for_every_month() {
    let table = SeasonalityTable::uq2019();
    let expected = [
        ("January", 109),
        ("February", 114),
        ("March", 169),
        ("April", 100),
        ("May", 88),
        ("June", 69),
        ("July", 72),
        ("August", 77),
        ("September", 102),
        ("October", 76),
        ("November", 85),
        ("December", 96),
    ];
    for (name, index) in expected {
        assert_eq!(table.lookup_name(name).unwrap(), index, "{name}");
        let month: Month = name.parse().unwrap();
        assert_eq!(table.lookup(month), index);
    }
}

#[test]
fn unknown_month_names_fail() {
    let table = SeasonalityTable::uq2019();
    for name in ["", "Jan", "january", "JANUARY", "Thirteenth", "1月"] {
        let err = table.lookup_name(name).unwrap_err();
        assert!(matches!(err, PredictionError::InvalidMonth { .. }), "{name}");
    }
}

#[test]
fn entries_are_in_calendar_order() {
    let table = SeasonalityTable::uq2019();
    let months: Vec<Month> = table.entries().map(|(m, _)| m).collect();
    assert_eq!(months, Month::ALL.to_vec());
    assert!(table.entries().all(|(_, i)| i > 0));
}

#[test]
fn to_map_covers_all_months() {
    let map = SeasonalityTable::uq2019().to_map();
    assert_eq!(map.len(), 12);
    assert_eq!(map["December"], 96);
}
