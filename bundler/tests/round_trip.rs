//! Round trips through derived companions, one field per container family.

use bundler::{Binder, Bundle, Bundled, CharSequence, Error, Parcelable, Size, SizeF};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Point {
    x: i32,
    y: i32,
}

impl Parcelable for Point {}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Marker;

impl Parcelable for Marker {}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Meta {
    tag: String,
    weight: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Bundled)]
#[bundler(constructor = "default")]
pub struct Scalars {
    pub flag: bool,
    pub byte: i8,
    pub letter: char,
    pub ratio: f64,
    pub scale: f32,
    pub count: i32,
    pub total: i64,
    pub small: i16,
    pub title: String,
    pub label: CharSequence,
    pub nested: Bundle,
    pub size: Size,
    pub size_f: SizeF,
}

#[derive(Debug, Clone, Default, PartialEq, Bundled)]
#[bundler(constructor = "default")]
pub struct Arrays {
    pub bytes: Box<[i8]>,
    pub flags: Box<[bool]>,
    pub letters: Box<[char]>,
    pub ratios: Box<[f64]>,
    pub scales: Box<[f32]>,
    pub counts: Box<[i32]>,
    pub totals: Box<[i64]>,
    pub smalls: Box<[i16]>,
    pub titles: Box<[String]>,
    pub labels: Box<[CharSequence]>,
    pub label_list: Vec<CharSequence>,
    pub count_list: Vec<i32>,
    pub title_list: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Bundled)]
#[bundler(constructor = "default")]
pub struct Objects {
    #[bundler(parcelable)]
    pub points: Box<[Point]>,
    #[bundler(parcelable)]
    pub point_list: Vec<Point>,
    #[bundler(serializable)]
    pub meta: Meta,
    #[bundler(parcelable)]
    pub origin: Point,
}

#[derive(Debug, Clone, PartialEq, Bundled)]
#[bundler(constructor = "unbound")]
pub struct Endpoint {
    pub handle: Binder,
}

impl Endpoint {
    pub fn unbound() -> Self {
        Self {
            handle: Binder::new("unbound"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Bundled)]
#[bundler(constructor = "default")]
pub struct Optionals {
    pub nick: Option<String>,
    pub age: Option<i32>,
    pub handle: Option<Binder>,
    #[bundler(parcelable)]
    pub extra: Option<Vec<Point>>,
    #[bundler(parcelable)]
    pub anchor: Option<Point>,
}

#[derive(Debug, Clone, Default, PartialEq, Bundled)]
#[bundler(constructor = "default")]
pub struct Account {
    #[bundler(getter, setter)]
    balance: i64,
    #[bundler(getter)]
    read_only: i32,
    #[bundler(setter)]
    write_only: i32,
    hidden: String,
    pub owner: String,
}

impl Account {
    pub fn get_balance(&self) -> i64 {
        self.balance
    }

    pub fn set_balance(&mut self, balance: i64) {
        self.balance = balance;
    }

    pub fn get_read_only(&self) -> i32 {
        self.read_only
    }

    pub fn set_write_only(&mut self, value: i32) {
        self.write_only = value;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Bundled)]
#[bundler(constructor = "default")]
pub struct Empty {}

#[derive(Debug, Clone, Default, PartialEq, Bundled)]
#[bundler(constructor = "default")]
pub struct Sample {
    pub public_string: String,
    pub public_int: i32,
    pub public_double_array: Box<[f64]>,
}

fn round_trip<T: Bundled>(object: &T) -> T {
    T::from_bundle(&object.to_bundle()).unwrap()
}

#[test]
fn test_scalars_boundaries() {
    let mut nested = Bundle::new();
    nested.put_int("inner", 1);

    for scalars in [
        Scalars::default(),
        Scalars {
            flag: true,
            byte: i8::MIN,
            letter: '\u{10FFFF}',
            ratio: f64::MAX,
            scale: f32::MIN_POSITIVE,
            count: i32::MIN,
            total: i64::MAX,
            small: i16::MAX,
            title: "héllo".to_string(),
            label: CharSequence::new("label"),
            nested: nested.clone(),
            size: Size::new(-1, i32::MAX),
            size_f: SizeF::new(0.5, -0.0),
        },
    ] {
        assert_eq!(round_trip(&scalars), scalars);
    }
}

#[test]
fn test_arrays_boundaries() {
    let empty = Arrays::default();
    assert_eq!(round_trip(&empty), empty);

    let full = Arrays {
        bytes: vec![i8::MIN, 0, i8::MAX].into(),
        flags: vec![true, false].into(),
        letters: vec!['a', 'ß'].into(),
        ratios: vec![f64::MIN, 0.0].into(),
        scales: vec![f32::MAX].into(),
        counts: vec![i32::MIN, i32::MAX].into(),
        totals: vec![i64::MIN].into(),
        smalls: vec![i16::MIN, -1].into(),
        titles: vec![String::new(), "b".to_string()].into(),
        labels: vec![CharSequence::new("c")].into(),
        label_list: vec![CharSequence::new("d"), CharSequence::new("")],
        count_list: vec![0, -1],
        title_list: vec!["e".to_string()],
    };
    assert_eq!(round_trip(&full), full);
}

#[test]
fn test_objects_round_trip() {
    let objects = Objects {
        points: vec![Point { x: 1, y: 2 }, Point { x: 3, y: 4 }].into(),
        point_list: vec![Point { x: -1, y: 0 }],
        meta: Meta {
            tag: "m".to_string(),
            weight: u32::MAX,
        },
        origin: Point { x: 0, y: 0 },
    };
    assert_eq!(round_trip(&objects), objects);
    assert_eq!(round_trip(&Objects::default()), Objects::default());
}

#[test]
fn test_objects_families() {
    let bundle = Objects::default().to_bundle();
    assert_eq!(bundle.get(ObjectsBundler::KEY_POINTS).unwrap().kind(), "ParcelableArray");
    assert_eq!(bundle.get(ObjectsBundler::KEY_POINT_LIST).unwrap().kind(), "ParcelableArrayList");
    assert_eq!(bundle.get(ObjectsBundler::KEY_META).unwrap().kind(), "Serializable");
    assert_eq!(bundle.get(ObjectsBundler::KEY_ORIGIN).unwrap().kind(), "Parcelable");
}

#[test]
fn test_named_constructor_and_binder() {
    let endpoint = Endpoint {
        handle: Binder::new("svc"),
    };
    let decoded = round_trip(&endpoint);
    assert_eq!(decoded, endpoint);
    assert_eq!(decoded.handle.descriptor(), "svc");
}

#[test]
fn test_keys_and_type_name() {
    assert_eq!(Scalars::TYPE_NAME, "round_trip::Scalars");
    assert_eq!(ScalarsBundler::KEY_TITLE, "KEY_round_trip::Scalars_title");
    assert_eq!(ScalarsBundler::KEY_SIZE_F, "KEY_round_trip::Scalars_size_f");
    assert_eq!(Scalars::envelope_key(), "KEY_round_trip::Scalars_bundle");

    let bundle = ScalarsBundler::to_bundle(&Scalars::default());
    assert_eq!(bundle.len(), 13);
    assert!(bundle.contains_key("KEY_round_trip::Scalars_flag"));
}

#[test]
fn test_accessor_pairs_and_exclusions() {
    let mut account = Account {
        read_only: 5,
        write_only: 6,
        hidden: "secret".to_string(),
        owner: "ann".to_string(),
        ..Account::default()
    };
    account.set_balance(-42);

    let bundle = account.to_bundle();
    let keys: Vec<&str> = bundle.keys().collect();
    assert_eq!(
        keys,
        vec!["KEY_round_trip::Account_balance", "KEY_round_trip::Account_owner"]
    );

    let decoded = Account::from_bundle(&bundle).unwrap();
    assert_eq!(decoded.get_balance(), -42);
    assert_eq!(decoded.owner, "ann");
    assert_eq!(decoded.get_read_only(), 0);
    assert_eq!(decoded.hidden, "");
}

#[test]
fn test_nullable_fields() {
    let absent = Optionals::from_bundle(&Bundle::new()).unwrap();
    assert_eq!(absent, Optionals::default());
    assert!(Optionals::default().to_bundle().is_empty());

    let present = Optionals {
        nick: Some("n".to_string()),
        age: Some(0),
        handle: Some(Binder::new("h")),
        extra: Some(Vec::new()),
        anchor: Some(Point { x: 9, y: 9 }),
    };
    assert_eq!(round_trip(&present), present);
}

#[test]
fn test_missing_required_key() {
    let err = Scalars::from_bundle(&Bundle::new()).unwrap_err();
    match err {
        Error::MissingKey { key } => assert_eq!(key, ScalarsBundler::KEY_FLAG),
        other => panic!("unexpected error: {other}"),
    }

    let err = Objects::from_bundle(&Bundle::new()).unwrap_err();
    assert!(matches!(err, Error::MissingKey { .. }));
}

#[test]
fn test_type_mismatch() {
    let mut bundle = Scalars::default().to_bundle();
    bundle.put_string(ScalarsBundler::KEY_COUNT, "seven".to_string());
    let err = Scalars::from_bundle(&bundle).unwrap_err();
    assert!(matches!(
        err,
        Error::TypeMismatch {
            expected: "Int",
            found: "String",
            ..
        }
    ));
}

#[test]
fn test_cast_failure() {
    let mut bundle = Objects::default().to_bundle();
    bundle.put_parcelable(ObjectsBundler::KEY_ORIGIN, Marker);
    let err = Objects::from_bundle(&bundle).unwrap_err();
    assert!(matches!(err, Error::CastFailed { .. }));

    let mut bundle = Objects::default().to_bundle();
    bundle.put_parcelable_array_list(ObjectsBundler::KEY_POINT_LIST, vec![Marker]);
    let err = Objects::from_bundle(&bundle).unwrap_err();
    assert!(matches!(err, Error::CastFailed { .. }));
}

#[test]
fn test_put_replaces_previous_value() {
    let mut bundle = Scalars::default().to_bundle();
    bundle.put_int(ScalarsBundler::KEY_COUNT, 3);
    bundle.put_int(ScalarsBundler::KEY_COUNT, 4);
    assert_eq!(Scalars::from_bundle(&bundle).unwrap().count, 4);
}

#[test]
fn test_sample_round_trip() {
    let sample = Sample {
        public_string: "text".to_string(),
        public_int: 42,
        public_double_array: vec![1.5, -2.25, 0.0].into(),
    };
    let decoded = round_trip(&sample);
    assert_eq!(decoded.public_string, sample.public_string);
    assert_eq!(decoded.public_int, sample.public_int);
    assert_eq!(decoded.public_double_array, sample.public_double_array);
}

#[test]
fn test_empty_struct() {
    assert!(Empty::default().to_bundle().is_empty());
    assert_eq!(round_trip(&Empty::default()), Empty::default());
}
