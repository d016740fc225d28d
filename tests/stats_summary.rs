use lifex_rs::models::Country;
use lifex_rs::stats::regional_summary;

fn country(name: &str, region: &str, population: u64, le: [f64; 3]) -> Country {
    Country {
        name: name.into(),
        region: region.into(),
        population,
        income_group: "High".into(),
        life_expectancy: le,
    }
}

#[test]
fn regional_stats_handle_median_even_odd() {
    // Two regions: East with per-country averages [61, 62, 63, 64]
    //   -> median = (62+63)/2 = 62.5
    // West with averages [70, 80, 90] -> median = 80
    let rows = vec![
        country("A", "East", 10, [61.0, 61.0, 61.0]),
        country("B", "East", 20, [62.0, 62.0, 62.0]),
        country("C", "East", 30, [63.0, 63.0, 63.0]),
        country("D", "East", 40, [64.0, 64.0, 64.0]),
        country("E", "West", 100, [70.0, 70.0, 70.0]),
        country("F", "West", 200, [80.0, 80.0, 80.0]),
        country("G", "West", 300, [90.0, 90.0, 90.0]),
    ];
    let got = regional_summary(&rows);
    assert_eq!(got.len(), 2);

    let east = &got[0];
    assert_eq!(east.region, "East");
    assert_eq!(east.count, 4);
    assert_eq!(east.population, 100);
    assert_eq!(east.min, 61.0);
    assert_eq!(east.max, 64.0);
    assert!((east.mean - 62.5).abs() < 1e-9);
    assert!((east.median - 62.5).abs() < 1e-9);

    let west = &got[1];
    assert_eq!(west.region, "West");
    assert_eq!(west.count, 3);
    assert_eq!(west.population, 600);
    assert_eq!(west.min, 70.0);
    assert_eq!(west.max, 90.0);
    assert!((west.mean - 80.0).abs() < 1e-9);
    assert!((west.median - 80.0).abs() < 1e-9);
}

#[test]
fn regions_come_back_in_deterministic_order() {
    let rows = vec![
        country("Z", "South", 1, [50.0, 50.0, 50.0]),
        country("Y", "North", 1, [50.0, 50.0, 50.0]),
        country("X", "South", 1, [50.0, 50.0, 50.0]),
    ];
    let regions: Vec<String> = regional_summary(&rows)
        .into_iter()
        .map(|s| s.region)
        .collect();
    assert_eq!(regions, vec!["North", "South"]);
}

#[test]
fn empty_input_yields_no_summaries() {
    assert!(regional_summary(&[]).is_empty());
}
