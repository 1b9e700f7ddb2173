//! Tests for the bilayer's component contract: parameters, prior and configuration

use crate::test_helpers::{reference_bilayer, species};
use lipid_bilayer::config::{BilayerConfig, ParameterConfig};
use lipid_bilayer::{aggregate_parameters, distribute_parameters, total_logp};
use lipid_bilayer::{Bilayer, BilayerError, Component};
use std::io::Write;

const SPECIES_QUANTITIES: [&str; 9] = [
    "s_sld",
    "water_per_lipid_head",
    "water_per_lipid_tail",
    "b_heads_real",
    "b_heads_imag",
    "b_tails_real",
    "b_tails_imag",
    "vm_heads",
    "vm_tails",
];

#[test]
fn test_parameter_list_length_and_order() {
    let params = reference_bilayer().parameters();
    assert_eq!(params.len(), 23);

    let mut expected: Vec<String> = Vec::new();
    for species in ["popc", "popg"] {
        for quantity in SPECIES_QUANTITIES {
            expected.push(format!("{} {}", species, quantity));
        }
    }
    expected.extend(
        [
            "bilayer Area Per Molecule Angstrom^-3",
            "bilayer roughness top Angstrom^-1",
            "bilayer roughness bottom Angstrom^-1",
            "bilayer ratio of Popc to Popg",
            "bilayer volume fraction of bilayer",
        ]
        .map(String::from),
    );

    assert_eq!(params.names(), expected);
}

#[test]
fn test_parameter_list_is_stable() {
    let mut bilayer = reference_bilayer();
    let first = bilayer.parameters();
    assert_eq!(first.names(), bilayer.parameters().names());

    bilayer.apm_mut().set_value(90.0).unwrap();
    let after = bilayer.parameters();
    assert_eq!(first.names(), after.names());
    assert_eq!(after.get_index(18).unwrap().value(), 90.0);
}

#[test]
fn test_varying_parameters_are_the_bilayer_scalars() {
    let params = reference_bilayer().parameters();
    let varying: Vec<&str> = params.varying().into_iter().map(|p| p.name()).collect();
    assert_eq!(
        varying,
        vec![
            "bilayer Area Per Molecule Angstrom^-3",
            "bilayer roughness top Angstrom^-1",
            "bilayer roughness bottom Angstrom^-1",
        ]
    );
    assert_eq!(params.varying_values(), vec![62.0, 12.0, 10.3]);
}

#[test]
fn test_logp_is_zero() {
    let mut bilayer = reference_bilayer();
    assert_eq!(bilayer.logp(), 0.0);

    bilayer.apm_mut().set_value(150.0).unwrap();
    bilayer.ratio_mut().set_value(-3.0).unwrap();
    bilayer.vol_frac_mut().set_value(7.0).unwrap();
    assert_eq!(bilayer.logp(), 0.0);
    assert_eq!(total_logp(&[&bilayer]), 0.0);
}

#[test]
fn test_optimizer_round_trip() {
    let mut bilayer = reference_bilayer();

    let mut params = aggregate_parameters(&[&bilayer]);
    let proposal = vec![75.0, 6.0, 9.0];
    params.update_varying(&proposal).unwrap();

    assert_eq!(distribute_parameters(&mut [&mut bilayer], &params), 23);
    assert_eq!(bilayer.apm().value(), 75.0);

    let table = bilayer.slabs();
    assert!((table[[0, 0]] - 287.5 / 75.0).abs() < 1e-12);
    assert_eq!(table[[1, 3]], 6.0);
    assert_eq!(table[[2, 3]], 9.0);
}

#[test]
fn test_shared_species_aggregate_once() {
    // Two bilayers built from the same lipids, e.g. measured against two contrasts
    let upper = Bilayer::new(
        species("popc", 300.0, 900.0),
        species("popg", 250.0, 850.0),
        Some("upper"),
    )
    .unwrap();
    let mut lower = Bilayer::new(
        species("popc", 300.0, 900.0),
        species("popg", 250.0, 850.0),
        Some("lower"),
    )
    .unwrap();

    let mut params = aggregate_parameters(&[&upper, &lower]);
    assert_eq!(params.len(), 18 + 5 + 5);

    params
        .get_mut("popc vm_heads")
        .unwrap()
        .set_value(320.0)
        .unwrap();
    let mut upper = upper;
    distribute_parameters(&mut [&mut upper, &mut lower], &params);

    assert_eq!(upper.popc().vm_heads(), 320.0);
    assert_eq!(lower.popc().vm_heads(), 320.0);
}

#[test]
fn test_from_config() {
    let mut config = BilayerConfig::default();
    config.ratio = ParameterConfig::varying(0.5, 0.0, 1.0);
    config.vol_frac = ParameterConfig::fixed(0.9);

    let bilayer = Bilayer::from_config(
        species("popc", 300.0, 900.0),
        species("popg", 250.0, 850.0),
        Some("mixed"),
        &config,
    )
    .unwrap();

    assert!(bilayer.ratio().vary());
    assert_eq!(bilayer.parameters().varying().len(), 4);
    assert!((bilayer.heads_volume() - 275.0 / 62.0).abs() < 1e-12);
    assert!((bilayer.slabs()[[3, 4]] - 0.1).abs() < 1e-12);
}

#[test]
fn test_from_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "apm": {{ "value": 70.0, "vary": true, "bounds": [50.0, 120.0] }} }}"#
    )
    .unwrap();

    let config = BilayerConfig::load_json(file.path()).unwrap();
    let bilayer = Bilayer::from_config(
        species("popc", 300.0, 900.0),
        species("popg", 250.0, 850.0),
        None,
        &config,
    )
    .unwrap();

    assert_eq!(bilayer.apm().value(), 70.0);
    assert_eq!(bilayer.apm().min(), 50.0);
    assert_eq!(bilayer.roughness_top().value(), 12.0);
}

#[test]
fn test_invalid_config_is_rejected() {
    let mut config = BilayerConfig::default();
    config.apm = ParameterConfig::varying(10.0, 60.0, 150.0);

    let result = Bilayer::from_config(
        species("popc", 300.0, 900.0),
        species("popg", 250.0, 850.0),
        None,
        &config,
    );
    assert!(matches!(result, Err(BilayerError::InvalidConfig(_))));

    assert!(matches!(
        BilayerConfig::from_json("{ not json"),
        Err(BilayerError::JsonError(_))
    ));
}
