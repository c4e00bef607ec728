use ruuvilens_core::{Advertisement, AdvertisementRecord, DecodeError};

const RAWV1: [u8; 14] = [
    0x03, 0x29, 0x1A, 0x1E, 0xCE, 0x1E, 0xFC, 0x18, 0xF9, 0x42, 0x02, 0xCA, 0x0B, 0x53,
];

const RAWV2: [u8; 24] = [
    0x05, 0x12, 0xFC, 0x53, 0x94, 0xC3, 0x7C, 0x00, 0x04, 0xFF, 0xFC, 0x04, 0x0C, 0xAC, 0x36,
    0x42, 0x00, 0xCD, 0xCB, 0xB8, 0x33, 0x4C, 0x88, 0x4F,
];

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

fn record_of(payload: &[u8]) -> AdvertisementRecord {
    Advertisement::decode(payload).expect("decode").to_record()
}

#[test]
fn rawv1_scenario_decodes_expected_values() {
    let advert = Advertisement::decode(&RAWV1).expect("decode");
    assert_eq!(advert.data_format(), 3);
    assert_close(advert.temperature().expect("temperature"), 26.3);
    assert_close(advert.humidity().expect("humidity"), 20.5);
    assert_eq!(advert.pressure().expect("pressure"), 102_766);
    assert_close(advert.acceleration_x().expect("accel x"), -1.000);
    assert_close(advert.acceleration_y().expect("accel y"), -1.726);
    assert_close(advert.acceleration_z().expect("accel z"), 0.714);
    assert_close(advert.battery_voltage().expect("voltage"), 2.899);
}

#[test]
fn rawv2_scenario_decodes_expected_values() {
    let advert = Advertisement::decode(&RAWV2).expect("decode");
    assert_eq!(advert.data_format(), 5);
    assert_close(advert.temperature().expect("temperature"), 24.3);
    assert_close(advert.humidity().expect("humidity"), 53.49);
    assert_eq!(advert.pressure().expect("pressure"), 100_044);
    assert_close(advert.battery_voltage().expect("voltage"), 2.977);
    assert_close(advert.transmission_power().expect("tx power"), 4.0);
    assert_eq!(advert.movement_counter().expect("movement"), 66);
    assert_eq!(advert.measurement_sequence_number().expect("sequence"), 205);
    assert_eq!(
        advert.mac_address().expect("mac").to_string(),
        "cb:b8:33:4c:88:4f"
    );
}

#[test]
fn raw_bytes_round_trip() {
    let advert = Advertisement::decode(&RAWV2).expect("decode");
    assert_eq!(advert.raw_data(), &RAWV2);
}

#[test]
fn dispatch_rejects_unknown_and_empty_tags() {
    for tag in [0x00u8, 0x02, 0xFF] {
        let mut payload = RAWV2;
        payload[0] = tag;
        assert!(matches!(
            Advertisement::decode(&payload),
            Err(DecodeError::UnsupportedFormat { format: Some(t) }) if t == tag
        ));
    }
    assert!(matches!(
        Advertisement::decode(&[]),
        Err(DecodeError::UnsupportedFormat { format: None })
    ));
}

#[test]
fn truncated_payloads_fail_construction() {
    assert!(matches!(
        Advertisement::decode(&RAWV1[..13]),
        Err(DecodeError::TooShort {
            needed: 14,
            actual: 13
        })
    ));
    assert!(matches!(
        Advertisement::decode(&RAWV2[..23]),
        Err(DecodeError::TooShort {
            needed: 24,
            actual: 23
        })
    ));
}

// Borrowed handles alias the caller's buffer; an explicit copy breaks the
// alias, so later reuse of the buffer cannot leak into a retained handle.
#[test]
fn borrowed_handle_aliases_the_callers_buffer() {
    let data = RAWV2.to_vec();
    let advert = Advertisement::decode(&data).expect("decode");
    assert_eq!(advert.raw_data().as_ptr(), data.as_ptr());
}

#[test]
fn owned_handle_survives_buffer_reuse() {
    let mut data = RAWV2.to_vec();
    let owned = Advertisement::decode(&data).expect("decode").into_owned();
    assert_ne!(owned.raw_data().as_ptr(), data.as_ptr());

    data[2] = 0x00;
    data[5] = 0xFF;
    assert_eq!(owned.raw_data(), &RAWV2);
    assert_close(owned.temperature().expect("temperature"), 24.3);
}

#[test]
fn decode_owned_adopts_the_buffer() {
    let advert = Advertisement::decode_owned(RAWV2.to_vec()).expect("decode");
    assert_eq!(advert.raw_data(), &RAWV2);
    assert_eq!(advert.data_format(), 5);
}

// Sentinel isolation: overwriting one field with its reserved pattern must
// fail exactly that accessor and leave every other field intact.

fn with_bytes(positions: &[(usize, u8)]) -> [u8; 24] {
    let mut payload = RAWV2;
    for &(index, value) in positions {
        payload[index] = value;
    }
    payload
}

#[test]
fn temperature_sentinel_only_hides_temperature() {
    let record = record_of(&with_bytes(&[(1, 0x80), (2, 0x00)]));
    assert!(record.temperature.is_none());
    assert!(record.humidity.is_some());
    assert!(record.pressure.is_some());
    assert!(record.accel_x.is_some());
    assert!(record.voltage.is_some());
    assert!(record.tx_power.is_some());
    assert!(record.movement_count.is_some());
    assert!(record.meas_seq.is_some());
    assert!(record.mac.is_some());
}

#[test]
fn humidity_sentinel_only_hides_humidity() {
    let record = record_of(&with_bytes(&[(3, 0xFF), (4, 0xFF)]));
    assert!(record.humidity.is_none());
    assert!(record.temperature.is_some());
    assert!(record.pressure.is_some());
}

#[test]
fn pressure_sentinel_only_hides_pressure() {
    let record = record_of(&with_bytes(&[(5, 0xFF), (6, 0xFF)]));
    assert!(record.pressure.is_none());
    assert!(record.temperature.is_some());
    assert!(record.humidity.is_some());
}

#[test]
fn acceleration_sentinels_hide_one_axis_each() {
    let record = record_of(&with_bytes(&[(7, 0x80), (8, 0x00)]));
    assert!(record.accel_x.is_none());
    assert!(record.accel_y.is_some());
    assert!(record.accel_z.is_some());

    let record = record_of(&with_bytes(&[(9, 0x80), (10, 0x00)]));
    assert!(record.accel_x.is_some());
    assert!(record.accel_y.is_none());
    assert!(record.accel_z.is_some());

    let record = record_of(&with_bytes(&[(11, 0x80), (12, 0x00)]));
    assert!(record.accel_x.is_some());
    assert!(record.accel_y.is_some());
    assert!(record.accel_z.is_none());
}

// The power-info word is shared on the wire: its sentinel takes out both
// battery voltage and tx power at once, and nothing else.
#[test]
fn power_word_sentinel_hides_voltage_and_tx_power_together() {
    let record = record_of(&with_bytes(&[(13, 0xFF), (14, 0xFF)]));
    assert!(record.voltage.is_none());
    assert!(record.tx_power.is_none());
    assert!(record.temperature.is_some());
    assert!(record.movement_count.is_some());
    assert!(record.meas_seq.is_some());
    assert!(record.mac.is_some());
}

#[test]
fn movement_counter_sentinel_only_hides_movement() {
    let record = record_of(&with_bytes(&[(15, 0xFF)]));
    assert!(record.movement_count.is_none());
    assert!(record.meas_seq.is_some());
    assert!(record.voltage.is_some());
}

#[test]
fn sequence_sentinel_only_hides_sequence() {
    let record = record_of(&with_bytes(&[(16, 0xFF), (17, 0xFF)]));
    assert!(record.meas_seq.is_none());
    assert!(record.movement_count.is_some());
    assert!(record.mac.is_some());
}

#[test]
fn mac_sentinel_only_hides_mac() {
    let record = record_of(&with_bytes(&[
        (18, 0xFF),
        (19, 0xFF),
        (20, 0xFF),
        (21, 0xFF),
        (22, 0xFF),
        (23, 0xFF),
    ]));
    assert!(record.mac.is_none());
    assert!(record.meas_seq.is_some());
    assert!(record.movement_count.is_some());
}

#[test]
fn all_sentinel_payload_yields_a_bare_record() {
    let payload = [
        0x05, 0x80, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0x80, 0x00, 0x80, 0x00, 0x80, 0x00, 0xFF, 0xFF,
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    ];
    let record = record_of(&payload);
    assert_eq!(record.format, 5);
    assert!(record.temperature.is_none());
    assert!(record.humidity.is_none());
    assert!(record.pressure.is_none());
    assert!(record.accel_x.is_none());
    assert!(record.accel_y.is_none());
    assert!(record.accel_z.is_none());
    assert!(record.voltage.is_none());
    assert!(record.tx_power.is_none());
    assert!(record.movement_count.is_none());
    assert!(record.meas_seq.is_none());
    assert!(record.mac.is_none());

    let value = serde_json::to_value(&record).expect("record json");
    let object = value.as_object().expect("json object");
    assert_eq!(object.len(), 2, "only raw and format should remain");
    assert!(object.contains_key("raw"));
    assert!(object.contains_key("format"));
}

#[test]
fn rawv1_record_has_no_rawv2_only_keys() {
    let record = record_of(&RAWV1);
    let value = serde_json::to_value(&record).expect("record json");
    assert!(value.get("tx-power").is_none());
    assert!(value.get("movement-count").is_none());
    assert!(value.get("meas-seq").is_none());
    assert!(value.get("mac").is_none());
    assert_eq!(value["raw"], "03291a1ece1efc18f94202ca0b53");
}
