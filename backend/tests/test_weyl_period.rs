//! Weyl accumulator period tests
//!
//! The full 2^64 walk is out of reach, so the period argument is checked
//! exhaustively on a 16-bit model using the low 16 bits of the increment.

use weylmix_core_rs::{Generator, Seed, WeylAccumulator, WEYL_INCREMENT};

#[test]
fn test_increment_is_odd() {
    assert_eq!(WEYL_INCREMENT & 1, 1, "Weyl increment must be odd");
}

#[test]
fn test_reduced_width_model_has_full_period() {
    let increment = WEYL_INCREMENT as u16;
    assert_eq!(increment & 1, 1);

    let mut seen = vec![false; 1 << 16];
    let mut weyl: u16 = 0;

    for step in 0..(1u32 << 16) {
        weyl = weyl.wrapping_add(increment);
        assert!(
            !seen[weyl as usize],
            "16-bit Weyl model repeated {:#06x} after {} steps",
            weyl,
            step
        );
        seen[weyl as usize] = true;
    }

    assert!(seen.iter().all(|&v| v), "16-bit Weyl model missed a value");
    assert_eq!(weyl, 0, "16-bit Weyl model must return to its start");
}

#[test]
fn test_accumulator_low_bits_follow_model() {
    // low 16 bits of the 64-bit accumulator walk the same cycle as the model
    let increment = WEYL_INCREMENT as u16;
    let mut weyl = WeylAccumulator::default();
    let mut model: u16 = 0;

    for _ in 0..(1u32 << 16) {
        model = model.wrapping_add(increment);
        assert_eq!(weyl.next() as u16, model);
    }
}

#[test]
fn test_generator_wraps_at_extremes() {
    let mut rng = Generator::with_seed(Seed::new(u64::MAX, u64::MAX));
    let value = rng.gen64();

    assert_eq!(rng.weyl(), WEYL_INCREMENT - 1);
    assert_eq!(
        value,
        weylmix_core_rs::diffuse(u64::MAX).wrapping_add(WEYL_INCREMENT - 1)
    );
}
