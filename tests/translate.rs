// tests/translate.rs
//
// Subsystem translation, including the market fan-out for specialty/other.
//
use fr_tabtool::tabs::{CanonicalTab::*, Hint, Item, Subsystem::*, SubsystemName};
use fr_tabtool::TabTool;

fn tool() -> TabTool {
    TabTool::new().expect("standard registry")
}

#[test]
fn other_in_market_is_bundles_only_for_chests() {
    let t = tool();
    assert_eq!(t.tab_name_for(Other, Market, Some(&Hint::category("Chest: Holiday"))), Some("bundles"));
    assert_eq!(t.tab_name_for(Other, Market, Some(&Hint::category("Blueprint"))), None);
}

#[test]
fn specialty_in_market_splits_by_name() {
    let t = tool();
    assert_eq!(t.tab_name_for(Specialty, Market, Some(&Hint::name("Scene: Autumn"))), Some("scenes"));
    assert_eq!(t.tab_name_for(Specialty, Market, Some(&Hint::name("Primary Gene: Basic"))), Some("genes"));
    assert_eq!(t.tab_name_for(Specialty, Market, Some(&Hint::name("Unrelated Item"))), Some("specialty"));
}

#[test]
fn tabs_without_a_subsystem_name_are_none() {
    let t = tool();
    assert_eq!(t.tab_name_for(Food, Market, None), None);
    assert_eq!(t.tab_name_for(Mats, Market, None), None);
    assert_eq!(t.tab_name_for(Dragons, Hoard, None), None);
    assert_eq!(t.tab_name_for(Dragons, Ah, None), Some("dragons"));
}

#[test]
fn subsystem_names_per_tab() {
    let t = tool();
    assert_eq!(t.tab_name_for(Mats, Hoard, None), Some("materials"));
    assert_eq!(t.tab_name_for(App, Legacy, None), Some("equipment"));
    assert_eq!(t.tab_name_for(Fam, Market, None), Some("familiars"));
    assert_eq!(t.tab_name_for(Battle, Legacy, None), Some("battle_items"));
}

#[test]
fn repeated_translation_leaves_registry_untouched() {
    let t = tool();
    let before = *t.tab_set(Specialty);
    let hint = Hint::name("Scene: Autumn");

    let first = t.tab_name_for(Specialty, Market, Some(&hint));
    let second = t.tab_name_for(Specialty, Market, Some(&hint));
    assert_eq!(first, second);

    let item = Item {
        name: Some("Vista: Sunrise".into()),
        tab: Some("trinket".into()),
        category: Some("Forum Vista".into()),
    };
    assert_eq!(t.tab_set_for_item(&item), t.tab_set_for_item(&item));

    assert_eq!(*t.tab_set(Specialty), before);
    assert!(matches!(t.tab_set(Specialty).market, SubsystemName::Candidates(_)));
    // A later caller with no hint still sees the untouched fan-out.
    assert_eq!(t.tab_name_for(Specialty, Market, None), Some("specialty"));
}

#[test]
fn item_tab_set_is_fully_resolved() {
    let t = tool();
    let gene = Item {
        name: Some("Secondary Gene: Basic".into()),
        tab: Some("trinket".into()),
        category: Some("Specialty Item".into()),
    };
    let set = t.tab_set_for_item(&gene).unwrap();
    assert_eq!(set.tab, Specialty);
    assert_eq!((set.ah, set.hoard, set.market, set.legacy), (Some("specialty"), Some("specialty"), Some("genes"), Some("trinket")));
    assert_eq!(t.market_tab_for_item(&gene), Some("genes"));

    let meat = Item { name: Some("Raw Meat".into()), tab: Some("food".into()), category: Some("Meat".into()) };
    let set = t.tab_set_for_item(&meat).unwrap();
    assert_eq!(set.market, None);
    assert_eq!(set.hoard, Some("food"));
}

#[test]
fn valid_tabs_for_hoard() {
    assert_eq!(
        tool().valid_tabs_for(Hoard),
        vec!["food", "materials", "apparel", "familiars", "battle", "skins", "specialty", "other"]
    );
}
