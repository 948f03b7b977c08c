use rp_pico::{
    hal::{rosc::RingOscillator, Timer},
    pac::ROSC,
};

/// Boot-time seed: 64 bits from the ring oscillator, mixed with the time since reset.
pub fn seed(rosc: ROSC, timer: &Timer) -> u64 {
    let rosc = RingOscillator::new(rosc).initialize();
    let bits = (0..64).fold(0u64, |seed, _| (seed << 1) | rosc.get_random_bit() as u64);
    bits ^ timer.get_counter().ticks().wrapping_mul(0x1986)
}
