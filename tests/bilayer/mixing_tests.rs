//! Mixing-rule properties of the bilayer

use crate::test_helpers::{approx_eq, random_species, reference_bilayer, species};
use approx::assert_relative_eq;
use lipid_bilayer::Bilayer;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn with_ratio_and_apm(mut bilayer: Bilayer, ratio: f64, apm: f64) -> Bilayer {
    bilayer.ratio_mut().set_value(ratio).unwrap();
    bilayer.apm_mut().set_value(apm).unwrap();
    bilayer
}

#[test]
fn test_heads_volume_worked_example() {
    let bilayer = reference_bilayer();
    // (0.75 * 300 + 0.25 * 250) / 62
    assert_relative_eq!(bilayer.heads_volume(), 287.5 / 62.0, epsilon = 1e-12);
    assert!((bilayer.heads_volume() - 4.6371).abs() < 1e-4);
}

#[test]
fn test_volumes_interpolate_linearly_in_ratio() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for _ in 0..200 {
        let popc = random_species(&mut rng, "popc");
        let popg = random_species(&mut rng, "popg");
        let ratio = rng.gen_range(0.0..=1.0);
        let apm = rng.gen_range(60.0..=150.0);

        let expected_heads = (ratio * popc.vm_heads() + (1.0 - ratio) * popg.vm_heads()) / apm;
        let expected_tails = (ratio * popc.vm_tails() + (1.0 - ratio) * popg.vm_tails()) / apm;

        let bilayer = with_ratio_and_apm(Bilayer::new(popc, popg, None).unwrap(), ratio, apm);

        assert!(approx_eq(bilayer.heads_volume(), expected_heads, 1e-12));
        assert!(approx_eq(bilayer.tails_volume(), expected_tails, 1e-12));
    }
}

#[test]
fn test_slds_interpolate_between_endpoints() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    for _ in 0..100 {
        let popc = random_species(&mut rng, "popc");
        let popg = random_species(&mut rng, "popg");
        let ratio = rng.gen_range(0.0..=1.0);
        let apm = rng.gen_range(60.0..=150.0);
        let base = Bilayer::new(popc, popg, None).unwrap();

        let pure_first = with_ratio_and_apm(base.clone(), 1.0, apm);
        let pure_second = with_ratio_and_apm(base.clone(), 0.0, apm);
        let mixed = with_ratio_and_apm(base, ratio, apm);

        let quantities: [fn(&Bilayer) -> f64; 6] = [
            Bilayer::heads_volume,
            Bilayer::tails_volume,
            Bilayer::heads_sld_real,
            Bilayer::heads_sld_imag,
            Bilayer::tails_sld_real,
            Bilayer::tails_sld_imag,
        ];
        for quantity in quantities {
            let expected = ratio * quantity(&pure_first) + (1.0 - ratio) * quantity(&pure_second);
            assert!(approx_eq(quantity(&mixed), expected, 1e-10));
        }
    }
}

#[test]
fn test_pure_ratio_depends_on_one_species() {
    let first = species("popc", 300.0, 900.0);

    // Only ratio = 1 should make the second species irrelevant
    let a = with_ratio_and_apm(
        Bilayer::new(first.clone(), species("popg", 250.0, 850.0), None).unwrap(),
        1.0,
        62.0,
    );
    let b = with_ratio_and_apm(
        Bilayer::new(first.clone(), species("popg", 400.0, 1000.0), None).unwrap(),
        1.0,
        62.0,
    );
    assert_eq!(a.heads_volume(), b.heads_volume());
    assert_eq!(a.tails_volume(), b.tails_volume());
    assert_eq!(a.heads_sld_real(), b.heads_sld_real());
    assert_eq!(a.tails_sld_imag(), b.tails_sld_imag());
    assert_relative_eq!(a.heads_volume(), 300.0 / 62.0, epsilon = 1e-12);

    let second = species("popg", 250.0, 850.0);
    let c = with_ratio_and_apm(
        Bilayer::new(species("popc", 300.0, 900.0), second.clone(), None).unwrap(),
        0.0,
        62.0,
    );
    let d = with_ratio_and_apm(
        Bilayer::new(species("popc", 350.0, 950.0), second, None).unwrap(),
        0.0,
        62.0,
    );
    assert_eq!(c.heads_volume(), d.heads_volume());
    assert_eq!(c.tails_sld_real(), d.tails_sld_real());
    assert_relative_eq!(c.tails_volume(), 850.0 / 62.0, epsilon = 1e-12);
}

#[test]
fn test_everything_scales_with_inverse_apm() {
    let at_62 = reference_bilayer();
    let at_124 = with_ratio_and_apm(reference_bilayer(), 0.75, 124.0);

    assert_relative_eq!(at_62.heads_volume(), 2.0 * at_124.heads_volume(), epsilon = 1e-12);
    assert_relative_eq!(at_62.tails_volume(), 2.0 * at_124.tails_volume(), epsilon = 1e-12);
    assert_relative_eq!(at_62.heads_sld_real(), 2.0 * at_124.heads_sld_real(), epsilon = 1e-12);
    assert_relative_eq!(at_62.tails_sld_real(), 2.0 * at_124.tails_sld_real(), epsilon = 1e-12);
}

#[test]
fn test_group_sld_uses_species_own_volume() {
    // Helper species have head SLD 2.0 and tail SLD -0.3 whatever their volumes
    let bilayer = reference_bilayer();
    assert_relative_eq!(bilayer.heads_sld_real(), 2.0 / 62.0, epsilon = 1e-12);
    assert_relative_eq!(bilayer.tails_sld_real(), -0.3 / 62.0, epsilon = 1e-12);
    assert_relative_eq!(bilayer.heads_sld_imag(), 1.0e-3 / 62.0, epsilon = 1e-15);
    assert_relative_eq!(bilayer.tails_sld_imag(), 5.0e-4 / 62.0, epsilon = 1e-15);
}

#[test]
fn test_out_of_range_ratio_extrapolates() {
    // The ratio is not validated; values outside [0, 1] extrapolate
    let bilayer = with_ratio_and_apm(reference_bilayer(), 1.5, 62.0);
    assert_relative_eq!(
        bilayer.heads_volume(),
        (1.5 * 300.0 - 0.5 * 250.0) / 62.0,
        epsilon = 1e-12
    );
}
