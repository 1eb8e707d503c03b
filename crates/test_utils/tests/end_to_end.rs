//! Cross-crate workflows driven through the shared test utilities

use domain_identity::{Gender, Nik, RegionCoded, Zodiac};
use proptest::prelude::*;
use test_utils::{
    assert_born_date, assert_lossless_projection, assert_parse_invalid, assert_parse_valid,
    malformed_number, well_formed_number, DirectoryFixtures, InstantFixtures, NikNumberBuilder,
    NumberFixtures,
};

fn reference_nik() -> Nik {
    Nik::new(NumberFixtures::VALID_NIK)
        .expect("reference number is well-formed")
        .evaluated_at(InstantFixtures::mid_2024())
}

#[test]
fn reference_parse_through_the_assertion_helpers() {
    let nik = reference_nik();
    let outcome = nik.parse().unwrap();
    let details = assert_parse_valid(&outcome);

    assert_born_date(details, "25", "01", "1999");
    assert_eq!(details.gender, Gender::Male);
    assert_eq!(details.zodiac, Zodiac::Aquarius);
    let value = nik.to_value().unwrap();
    assert_lossless_projection(details, &value);
}

#[test]
fn unknown_region_yields_the_minimal_outcome() {
    let nik = Nik::new(NumberFixtures::UNKNOWN_REGION)
        .unwrap()
        .evaluated_at(InstantFixtures::mid_2024());
    assert_parse_invalid(&nik.parse().unwrap());
}

#[test]
fn builder_composed_numbers_decode_field_by_field() {
    let raw = NikNumberBuilder::new().female().with_day(7).build();
    let nik = Nik::with_directory(raw, DirectoryFixtures::minimal())
        .unwrap()
        .evaluated_at(InstantFixtures::mid_2024());

    let outcome = nik.parse().unwrap();
    let details = assert_parse_valid(&outcome);
    assert_eq!(details.gender, Gender::Female);
    assert_born_date(details, "07", "01", "1999");
}

#[test]
fn directory_without_postal_codes_still_validates() {
    let nik = Nik::with_directory(
        NumberFixtures::VALID_NIK,
        DirectoryFixtures::without_postal_codes(),
    )
    .unwrap()
    .evaluated_at(InstantFixtures::mid_2024());

    assert!(nik.validate());
    assert_eq!(nik.postal_code(), None);
    let outcome = nik.parse().unwrap();
    assert_eq!(assert_parse_valid(&outcome).postal_code, None);
}

#[test]
fn century_resolution_follows_the_evaluation_instant() {
    let raw = NikNumberBuilder::new().with_year_digits(23).build();
    let nik = Nik::with_directory(raw.clone(), DirectoryFixtures::minimal())
        .unwrap()
        .evaluated_at(InstantFixtures::mid_2024());
    assert_eq!(nik.born_date().year, "2023");

    let nik = Nik::with_directory(raw, DirectoryFixtures::minimal())
        .unwrap()
        .evaluated_at(InstantFixtures::early_2022());
    assert_eq!(nik.born_date().year, "1923");
}

proptest! {
    #[test]
    fn malformed_candidates_never_construct(raw in malformed_number()) {
        prop_assert!(Nik::new(&raw).is_err());
    }

    #[test]
    fn well_formed_candidates_always_construct(raw in well_formed_number()) {
        let nik = Nik::new(&raw).unwrap();
        prop_assert_eq!(nik.number(), raw.as_str());
        // Region resolution may go either way; it must never panic.
        let _ = nik.validate();
    }
}
