use stencil::error::Error;
use stencil::ident::{CaseStyle, VariantSet};

#[test]
fn test_variant_set_rendering() {
    let set = VariantSet::new("template_name").unwrap();

    assert_eq!(set.get(CaseStyle::Snake), "template_name");
    assert_eq!(set.get(CaseStyle::Kebab), "template-name");
    assert_eq!(set.get(CaseStyle::Title), "Template Name");
    assert_eq!(set.get(CaseStyle::Pascal), "TemplateName");
}

#[test]
fn test_round_trip_law() {
    // Re-deriving the set from any rendered variant reproduces it
    let set = VariantSet::new("template_name").unwrap();
    for (_, variant) in set.variants() {
        let rederived = VariantSet::new(variant).unwrap();
        assert_eq!(rederived, set, "round trip failed for '{variant}'");
    }
}

#[test]
fn test_input_casing_is_canonicalized() {
    let from_snake = VariantSet::new("my_app").unwrap();
    let from_pascal = VariantSet::new("MyApp").unwrap();
    let from_kebab = VariantSet::new("my-app").unwrap();
    let from_title = VariantSet::new("My App").unwrap();

    assert_eq!(from_snake, from_pascal);
    assert_eq!(from_snake, from_kebab);
    assert_eq!(from_snake, from_title);
}

#[test]
fn test_degenerate_single_word_coincidence() {
    let set = VariantSet::new("demo").unwrap();
    assert_eq!(set.get(CaseStyle::Snake), set.get(CaseStyle::Kebab));
    assert_eq!(set.get(CaseStyle::Title), "Demo");
    assert_eq!(set.get(CaseStyle::Pascal), "Demo");
}

#[test]
fn test_invalid_identifier_is_rejected() {
    for input in ["", "   ", "\t\n", "-_-"] {
        match VariantSet::new(input) {
            Err(Error::InvalidIdentifier(_)) => (),
            other => panic!("expected InvalidIdentifier for {input:?}, got {other:?}"),
        }
    }
}
