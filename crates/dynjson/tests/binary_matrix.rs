use bstr::BString;
use dynjson::{BinaryDecoder, BinaryEncoder, BinaryError, Value};
use dynjson_buffers::Reader;

fn encode(value: &Value) -> Vec<u8> {
    BinaryEncoder::new().encode(value)
}

fn decode(bytes: &[u8]) -> Result<Value, BinaryError> {
    BinaryDecoder::new().decode(bytes)
}

#[test]
fn scalar_wire_layout() {
    assert_eq!(encode(&Value::Null), [0x00]);
    assert_eq!(encode(&Value::Bool(true)), [b't']);
    assert_eq!(encode(&Value::Bool(false)), [b'f']);

    let mut expected = vec![b'n'];
    expected.extend_from_slice(&3.141592654f64.to_ne_bytes());
    assert_eq!(encode(&Value::Number(3.141592654)), expected);

    let mut expected = vec![b's'];
    expected.extend_from_slice(&3i32.to_ne_bytes());
    expected.extend_from_slice(b"abc");
    assert_eq!(encode(&Value::from("abc")), expected);
}

#[test]
fn container_wire_layout() {
    let mut expected = vec![b'a'];
    expected.extend_from_slice(&2i32.to_ne_bytes());
    expected.push(b't');
    expected.push(0x00);
    assert_eq!(
        encode(&Value::from(vec![Value::Bool(true), Value::Null])),
        expected
    );

    // pairs are written in sorted key order with length-prefixed keys
    let mut v = Value::default();
    *v.key("b").expect("obj") = Value::Bool(false);
    *v.key("a").expect("obj") = Value::Bool(true);
    let mut expected = vec![b'o'];
    expected.extend_from_slice(&2i32.to_ne_bytes());
    expected.extend_from_slice(&1i32.to_ne_bytes());
    expected.extend_from_slice(b"a");
    expected.push(b't');
    expected.extend_from_slice(&1i32.to_ne_bytes());
    expected.extend_from_slice(b"b");
    expected.push(b'f');
    assert_eq!(encode(&v), expected);
}

#[test]
fn roundtrip_matrix() {
    let mut nested = Value::default();
    *nested
        .key("x")
        .expect("obj")
        .at(2)
        .expect("arr")
        .key("y")
        .expect("obj") = Value::from("Test");

    let values = [
        Value::Null,
        Value::Bool(true),
        Value::Bool(false),
        Value::Number(0.0),
        Value::Number(-12321.321123),
        Value::Number(f64::MAX),
        Value::from(""),
        Value::from("abc123"),
        Value::from(&b"\x00\xff\x01"[..]),
        Value::array(0),
        Value::from(vec![vec![1, 2, 3], vec![4, 5, 6]]),
        Value::object(),
        nested,
    ];
    for value in values {
        let bytes = encode(&value);
        let back = decode(&bytes).expect("decode");
        assert_eq!(back, value, "roundtrip of {value:?}");
    }
}

#[test]
fn non_finite_numbers_roundtrip_bit_for_bit() {
    for n in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
        let back = decode(&encode(&Value::Number(n))).expect("decode");
        match back {
            Value::Number(m) => assert_eq!(m.to_bits(), n.to_bits()),
            other => panic!("expected number, got {other:?}"),
        }
    }
}

#[test]
fn unrecognized_tag_is_corrupt() {
    assert_eq!(
        decode(&[0xff]),
        Err(BinaryError::CorruptBinary {
            tag: 0xff,
            offset: 0
        })
    );
    // a corrupt tag nested inside a container reports its own offset
    let mut bytes = vec![b'a'];
    bytes.extend_from_slice(&1i32.to_ne_bytes());
    bytes.push(b'z');
    assert_eq!(
        decode(&bytes),
        Err(BinaryError::CorruptBinary {
            tag: b'z',
            offset: 5
        })
    );
}

#[test]
fn truncated_input_is_an_error() {
    assert_eq!(decode(&[]), Err(BinaryError::UnexpectedEof));
    assert_eq!(decode(&[b'n', 0x01, 0x02]), Err(BinaryError::UnexpectedEof));

    let mut bytes = vec![b's'];
    bytes.extend_from_slice(&10i32.to_ne_bytes());
    bytes.extend_from_slice(b"ab");
    assert_eq!(decode(&bytes), Err(BinaryError::UnexpectedEof));

    // array that promises more elements than the buffer holds
    let mut bytes = vec![b'a'];
    bytes.extend_from_slice(&3i32.to_ne_bytes());
    bytes.push(0x00);
    assert_eq!(decode(&bytes), Err(BinaryError::UnexpectedEof));
}

#[test]
fn negative_length_prefix_is_rejected() {
    let mut bytes = vec![b's'];
    bytes.extend_from_slice(&(-1i32).to_ne_bytes());
    assert_eq!(decode(&bytes), Err(BinaryError::InvalidLength(-1)));
}

#[test]
fn decode_restores_the_sorted_key_invariant() {
    // a stream with keys out of order decodes into sorted storage
    let mut bytes = vec![b'o'];
    bytes.extend_from_slice(&2i32.to_ne_bytes());
    bytes.extend_from_slice(&1i32.to_ne_bytes());
    bytes.extend_from_slice(b"b");
    bytes.push(b't');
    bytes.extend_from_slice(&1i32.to_ne_bytes());
    bytes.extend_from_slice(b"a");
    bytes.push(0x00);

    let v = decode(&bytes).expect("decode");
    let keys: Vec<&BString> = v.as_map().expect("object").keys().collect();
    assert_eq!(keys, [&BString::from("a"), &BString::from("b")]);

    // re-encoding emits the canonical sorted order, not the stream order
    let reencoded = encode(&v);
    assert_ne!(reencoded, bytes);
    assert_eq!(decode(&reencoded).expect("decode"), v);
}

#[test]
fn duplicate_keys_in_the_stream_last_occurrence_wins() {
    let mut bytes = vec![b'o'];
    bytes.extend_from_slice(&2i32.to_ne_bytes());
    for tag in [b't', b'f'] {
        bytes.extend_from_slice(&1i32.to_ne_bytes());
        bytes.extend_from_slice(b"k");
        bytes.push(tag);
    }
    let v = decode(&bytes).expect("decode");
    let map = v.as_map().expect("object");
    assert_eq!(map.len(), 1);
    assert_eq!(map[&BString::from("k")], Value::Bool(false));
}

#[test]
fn write_any_accumulates_a_stream_of_values() {
    let mut encoder = BinaryEncoder::new();
    encoder.write_any(&Value::Bool(true));
    encoder.write_any(&Value::from("x"));
    let bytes = encoder.writer.flush();

    let mut decoder = BinaryDecoder::new();
    let mut reader = Reader::new(&bytes);
    assert_eq!(decoder.read(&mut reader).expect("1st"), Value::Bool(true));
    assert_eq!(decoder.read(&mut reader).expect("2nd"), Value::from("x"));
    assert!(reader.is_empty());
    assert_eq!(decoder.read(&mut reader), Err(BinaryError::UnexpectedEof));
}

#[test]
fn read_consumes_exactly_one_value() {
    let mut encoder = BinaryEncoder::new();
    let first = Value::from(vec![Value::Number(1.5), Value::Null]);
    encoder.write_any(&first);
    encoder.write_any(&Value::Bool(false));
    let bytes = encoder.writer.flush();

    let mut reader = Reader::new(&bytes);
    let mut decoder = BinaryDecoder::new();
    assert_eq!(decoder.read(&mut reader).expect("1st"), first);
    assert_eq!(reader.size(), 1);
    assert_eq!(decoder.read(&mut reader).expect("2nd"), Value::Bool(false));
}
