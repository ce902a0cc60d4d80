//! End-to-end protocol tests: reset, bit-serial weight loading, lane masks,
//! split readback, and pipeline latency.

use ternacc::cycle::TickInput;
use ternacc::weight::{ALL_CODES, CODE_NEGATIVE, CODE_POSITIVE, CODE_RESERVED, CODE_ZERO};
use ternacc::{
    CoreConfig, Latency, LoadPath, ProtocolDriver, ResultWidth, LANE_DEPTH, STORE_LEN,
};

const ND8: u16 = LANE_DEPTH as u16;

fn serial_driver(latency: Latency) -> ProtocolDriver {
    let config = CoreConfig::default()
        .with_load_path(LoadPath::Serial)
        .with_result_width(ResultWidth::W16)
        .with_latency(latency);
    let mut driver = ProtocolDriver::new(config);
    driver.reset();
    driver
}

fn set_rightmost_bits(n: u32) -> u8 {
    ((1u16 << n) - 1) as u8
}

// =============================================================================
// Bench scenario
// =============================================================================

#[test]
fn test_bench_scenario_single_lane() {
    let mut d = serial_driver(Latency::IMMEDIATE);
    assert_eq!(u16::from(d.measure(0x01, CODE_POSITIVE).low), ND8);
    assert_eq!(d.measure(0x01, CODE_ZERO).low, 0);
    assert_eq!(u16::from(d.measure(0x01, CODE_NEGATIVE).low), 0x100 - ND8);
    assert_eq!(d.measure(0x01, CODE_RESERVED).low, 0);
}

#[test]
fn test_bench_scenario_no_lanes() {
    let mut d = serial_driver(Latency::IMMEDIATE);
    for code in ALL_CODES {
        assert_eq!(d.measure(0x00, code).low, 0);
    }
}

#[test]
fn test_bench_scenario_two_lanes() {
    let mut d = serial_driver(Latency::IMMEDIATE);
    assert_eq!(u16::from(d.measure(0b11, CODE_POSITIVE).low), 2 * ND8);
    assert_eq!(d.measure(0b11, CODE_ZERO).low, 0);
    assert_eq!(u16::from(d.measure(0b11, CODE_NEGATIVE).low), 0x100 - 2 * ND8);
}

#[test]
fn test_bench_scenario_all_lanes_split_readback() {
    let k = 8;
    let mut d = serial_driver(Latency::IMMEDIATE);
    let mask = set_rightmost_bits(k);

    let r = d.measure(mask, CODE_POSITIVE);
    assert_eq!(u16::from(r.low), k as u16 * ND8);
    assert_eq!(r.high, 0);

    assert_eq!(d.measure(mask, CODE_ZERO).low, 0);

    let r = d.measure(mask, CODE_NEGATIVE);
    assert_eq!(u16::from(r.low), 0x100 - k as u16 * ND8);
    assert_eq!(r.high >> 1, set_rightmost_bits(7));
    assert_eq!(r.signed(), -128);
}

// =============================================================================
// Reset
// =============================================================================

#[test]
fn test_reset_idempotent_every_mask() {
    for path in LoadPath::ALL {
        let mut d = ProtocolDriver::new(CoreConfig::pipelined().with_load_path(path));
        d.reset();
        d.measure(0xFF, CODE_NEGATIVE);
        d.reset();
        for mask in 0..=255u8 {
            d.set_mask(mask);
            d.settle();
            assert_eq!(d.read().signed(), 0, "{path} mask={mask:#04x}");
        }
    }
}

// =============================================================================
// Load-path equivalence through the full protocol
// =============================================================================

#[test]
fn test_paths_agree_on_mixed_sequence() {
    let codes: Vec<u8> = (0..STORE_LEN).map(|i| ((i * i + 3 * i) % 4) as u8).collect();
    let mut results = Vec::new();
    for path in LoadPath::ALL {
        let mut d = ProtocolDriver::new(CoreConfig::default().with_load_path(path));
        d.reset();
        d.load_sequence(&codes);
        let row: Vec<i16> = (0..=255u8)
            .map(|mask| {
                d.set_mask(mask);
                d.settle();
                d.read().signed()
            })
            .collect();
        results.push(row);
    }
    assert_eq!(results[0], results[1]);
    assert_eq!(results[0], results[2]);
}

// =============================================================================
// Latency
// =============================================================================

#[test]
fn test_pipelined_not_visible_early_and_stable_after() {
    let depth = Latency::PIPELINED.ticks();
    let mut d = ProtocolDriver::new(CoreConfig::pipelined());
    d.reset();
    d.set_mask(0xFF);
    d.load_uniform(CODE_POSITIVE);
    d.settle();
    assert_eq!(d.read().signed(), 128);

    d.load_uniform(CODE_NEGATIVE);
    // Load complete on the last edge; the new value needs `depth` more edges.
    let mut seen = Vec::new();
    for _ in 0..depth + 4 {
        seen.push(d.idle().readout.signed());
    }
    for v in &seen[..depth - 1] {
        assert_ne!(*v, -128, "result visible before {depth} ticks: {seen:?}");
    }
    for v in &seen[depth - 1..] {
        assert_eq!(*v, -128, "result not stable: {seen:?}");
    }
}

#[test]
fn test_outputs_never_tear() {
    // Each observed value is the sum of one whole store state, so replacing
    // ZERO with NEGATIVE can only move the result down.
    let mut d = ProtocolDriver::new(CoreConfig::pipelined().with_load_path(LoadPath::Wide));
    d.reset();
    d.set_mask(0xFF);
    let core = d.core_mut();
    let beats = LoadPath::Wide.encode(&[CODE_NEGATIVE; STORE_LEN]);
    let mut previous = 0i16;
    for beat in beats {
        let out = core.tick(TickInput::load(beat, 0xFF));
        let v = out.readout.signed();
        assert!((-128..=0).contains(&v));
        assert!(v <= previous, "result moved backwards: {previous} -> {v}");
        previous = v;
    }
}

#[test]
fn test_immediate_latency_one_tick() {
    let mut d = ProtocolDriver::new(CoreConfig::immediate());
    d.reset();
    d.set_mask(0x01);
    d.load_uniform(CODE_POSITIVE);
    assert_ne!(d.read().signed(), 16);
    assert_eq!(d.idle().readout.signed(), 16);
    assert_eq!(d.idle().readout.signed(), 16);
}
