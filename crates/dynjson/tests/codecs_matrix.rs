use bstr::BString;
use dynjson::{
    BinaryValueCodec, CodecError, Codecs, EncodingFormat, JsonError, JsonValueCodec, Map, Value,
    ValueCodec,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn fixture() -> Value {
    let mut v = Value::default();
    *v.key("x")
        .expect("obj")
        .at(2)
        .expect("arr")
        .key("y")
        .expect("obj") = Value::from("Test");
    *v.key("a").expect("obj") = Value::from(false);
    *v.key("b").expect("obj") = Value::from(3.141592654);
    v
}

#[test]
fn codec_ids_and_formats() {
    let codecs = Codecs::new();
    assert_eq!(codecs.json.id(), "json");
    assert_eq!(codecs.json.format(), EncodingFormat::Json);
    assert_eq!(codecs.binary.id(), "binary");
    assert_eq!(codecs.binary.format(), EncodingFormat::Binary);
}

#[test]
fn every_codec_roundtrips_through_the_trait() {
    let value = fixture();
    let mut json = JsonValueCodec::new();
    let mut binary = BinaryValueCodec::new();
    let codecs: [&mut dyn ValueCodec; 2] = [&mut json, &mut binary];
    for codec in codecs {
        let bytes = codec.encode(&value).expect("encode");
        let back = codec.decode(&bytes).expect("decode");
        assert_eq!(back, value, "roundtrip through {}", codec.id());
    }
}

#[test]
fn codec_errors_carry_the_source_kind() {
    let mut codecs = Codecs::new();
    let err = codecs.json.decode(b"[1,2").expect_err("unterminated array");
    assert!(matches!(
        err,
        CodecError::Json(JsonError::ArrayNotClosed(_))
    ));
    let err = codecs.binary.decode(&[0xff]).expect_err("corrupt tag");
    assert!(matches!(err, CodecError::Binary(_)));
}

#[test]
fn codecs_agree_on_the_decoded_value() {
    let value = fixture();
    let mut codecs = Codecs::new();
    let text = codecs.json.encode(&value).expect("json encode");
    let bytes = codecs.binary.encode(&value).expect("binary encode");
    let from_text = codecs.json.decode(&text).expect("json decode");
    let from_bytes = codecs.binary.decode(&bytes).expect("binary decode");
    assert_eq!(from_text, from_bytes);
}

fn random_value(rng: &mut StdRng, depth: u32) -> Value {
    let pick = if depth == 0 {
        rng.gen_range(0..4)
    } else {
        rng.gen_range(0..6)
    };
    match pick {
        0 => Value::Null,
        1 => Value::Bool(rng.gen()),
        // dyadic fractions stay exact through every representation
        2 => Value::Number(f64::from(rng.gen::<i32>()) / 8.0),
        3 => {
            let len = rng.gen_range(0..8);
            let bytes: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
            Value::Str(BString::from(bytes))
        }
        4 => {
            let len = rng.gen_range(0..4);
            Value::Array((0..len).map(|_| random_value(rng, depth - 1)).collect())
        }
        _ => {
            let len = rng.gen_range(0..4);
            let mut map = Map::new();
            for _ in 0..len {
                let klen = rng.gen_range(0..6);
                let key: Vec<u8> = (0..klen).map(|_| rng.gen()).collect();
                map.insert(BString::from(key), random_value(rng, depth - 1));
            }
            Value::Object(map)
        }
    }
}

#[test]
fn random_trees_roundtrip_through_both_codecs() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut codecs = Codecs::new();
    for _ in 0..200 {
        let value = random_value(&mut rng, 3);
        let text = codecs.json.encode(&value).expect("json encode");
        assert_eq!(
            codecs.json.decode(&text).expect("json decode"),
            value,
            "text roundtrip of {value:?}"
        );
        let bytes = codecs.binary.encode(&value).expect("binary encode");
        assert_eq!(
            codecs.binary.decode(&bytes).expect("binary decode"),
            value,
            "binary roundtrip of {value:?}"
        );
    }
}
