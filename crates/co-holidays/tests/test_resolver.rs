//! Integration tests for `HolidayResolver`.

use co_core::errors::Error;
use co_holidays::{CatalogConfig, HolidayResolver};
use co_time::Date;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

#[test]
fn resolves_2024() {
    let expected = [
        (1, 1, "New Year's Day"),
        (1, 8, "Epiphany"),
        (3, 18, "Saint Joseph's Day"),
        (3, 24, "Palm Sunday"),
        (3, 28, "Maundy Thursday"),
        (3, 29, "Good Friday"),
        (3, 31, "Easter Sunday"),
        (5, 1, "Labour Day"),
        (5, 13, "Ascension Day"),
        (6, 3, "Corpus Christi"),
        (6, 10, "Sacred Heart"),
        (7, 1, "Saint Peter and Saint Paul"),
        (7, 20, "Independence Day"),
        (8, 7, "Battle of Boyacá"),
        (8, 12, "Assumption of Mary"),
        (10, 14, "Day of the Races"),
        (11, 4, "All Saints' Day"),
        (11, 11, "Independence of Cartagena"),
        (12, 8, "Immaculate Conception"),
        (12, 25, "Christmas Day"),
    ];

    let resolved = HolidayResolver::new().resolve(2024).unwrap();
    assert_eq!(resolved.len(), 20);
    for (holiday, (m, d, name)) in resolved.iter().zip(expected) {
        assert_eq!(holiday.date, date(2024, m, d), "date mismatch for {name}");
        assert_eq!(holiday.name, name);
    }
}

#[test]
fn resolves_2025_with_a_coincidence() {
    // Sacred Heart (nearest Monday to Easter + 70 days) and Saint Peter and
    // Saint Paul (nearest Monday to June 29) both land on June 30, 2025.
    let expected = [
        (1, 1, "New Year's Day"),
        (1, 6, "Epiphany"),
        (3, 17, "Saint Joseph's Day"),
        (4, 13, "Palm Sunday"),
        (4, 17, "Maundy Thursday"),
        (4, 18, "Good Friday"),
        (4, 20, "Easter Sunday"),
        (5, 1, "Labour Day"),
        (6, 2, "Ascension Day"),
        (6, 23, "Corpus Christi"),
        (6, 30, "Sacred Heart; Saint Peter and Saint Paul"),
        (7, 20, "Independence Day"),
        (8, 7, "Battle of Boyacá"),
        (8, 18, "Assumption of Mary"),
        (10, 13, "Day of the Races"),
        (11, 3, "All Saints' Day"),
        (11, 10, "Independence of Cartagena"),
        (12, 8, "Immaculate Conception"),
        (12, 25, "Christmas Day"),
    ];

    let resolved = HolidayResolver::new().resolve(2025).unwrap();
    assert_eq!(resolved.len(), 19);
    for (holiday, (m, d, name)) in resolved.iter().zip(expected) {
        assert_eq!(holiday.date, date(2025, m, d), "date mismatch for {name}");
        assert_eq!(holiday.name, name);
    }
}

#[test]
fn resolution_is_idempotent() {
    let resolver = HolidayResolver::new();
    assert_eq!(resolver.resolve(2024).unwrap(), resolver.resolve(2024).unwrap());
}

#[test]
fn ordered_and_bounded_over_two_centuries() {
    let resolver = HolidayResolver::new();
    for year in 1900..2100u16 {
        let resolved = resolver.resolve(year).unwrap();
        assert!(
            (19..=20).contains(&resolved.len()),
            "unexpected count {} for {year}",
            resolved.len()
        );
        assert_eq!(resolved[0].date, date(year, 1, 1));
        assert_eq!(resolved[resolved.len() - 1].date, date(year, 12, 25));
        for pair in resolved.windows(2) {
            assert!(
                pair[0].date < pair[1].date,
                "entries out of order in {year}: {} / {}",
                pair[0],
                pair[1]
            );
        }
    }
}

#[test]
fn rejects_unsupported_years() {
    let resolver = HolidayResolver::new();
    assert_eq!(resolver.resolve(1582), Err(Error::InvalidYear(1582)));
    assert_eq!(resolver.resolve(2500), Err(Error::InvalidYear(2500)));
}

#[test]
fn unready_configuration_never_yields_a_list() {
    let unready = CatalogConfig::from_toml_str(
        "date_format = \"%Y-%m-%d\"\nholiday_names = [\"Año Nuevo\", \"Navidad\"]\n",
    )
    .unwrap();
    let resolver = HolidayResolver::with_config(unready);
    assert!(matches!(
        resolver.resolve(2024),
        Err(Error::Configuration(_))
    ));
}

#[test]
fn configured_names_replace_canonical_ones() {
    let names = [
        "Año Nuevo",
        "Día de los Reyes Magos",
        "Día de San José",
        "Domingo de Ramos",
        "Jueves Santo",
        "Viernes Santo",
        "Domingo de Pascua",
        "Día del Trabajo",
        "Ascensión del Señor",
        "Corpus Christi",
        "Sagrado Corazón de Jesús",
        "San Pedro y San Pablo",
        "Día de la Independencia",
        "Batalla de Boyacá",
        "Asunción de la Virgen",
        "Día de la Raza",
        "Día de Todos los Santos",
        "Independencia de Cartagena",
        "Inmaculada Concepción",
        "Navidad",
    ];
    let quoted: Vec<String> = names.iter().map(|n| format!("\"{n}\"")).collect();
    let text = format!(
        "date_format = \"%d/%m/%Y\"\nholiday_names = [{}]\n",
        quoted.join(", ")
    );
    let config = CatalogConfig::from_toml_str(&text).unwrap();
    let resolver = HolidayResolver::with_config(config);
    assert_eq!(resolver.config().date_format(), "%d/%m/%Y");

    let resolved = resolver.resolve(2024).unwrap();
    assert_eq!(resolved[0].name, "Año Nuevo");
    assert_eq!(resolved[0].date, date(2024, 1, 1));
    assert_eq!(resolved[19].name, "Navidad");
    assert_eq!(resolved[19].date, date(2024, 12, 25));
}
